//! Minimal Go syntax tree for generated model files.
//!
//! Covers exactly what the generator emits: struct declarations and
//! `UnmarshalJSON` methods that re-parse temporal fields.

use crate::resolve::TimeLayout;

/// A generated Go source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoFile {
    pub package: String,
    pub imports: Vec<String>,
    pub decls: Vec<Decl>,
}

/// A top-level declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decl {
    Struct(StructDecl),
    Unmarshal(UnmarshalFn),
}

/// `type Name struct { ... }`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructDecl {
    pub name: String,
    /// Embedded types, written before the named fields.
    pub embeds: Vec<String>,
    pub fields: Vec<StructField>,
}

/// A named struct field with an optional JSON tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructField {
    pub name: String,
    pub ty: String,
    pub json_tag: Option<String>,
}

/// `func (r *Type) UnmarshalJSON(b []byte) error`
///
/// Decodes into an alias of the receiver with every temporal field shadowed
/// by a string, then parses each shadow. Parse errors are discarded and leave
/// the zero time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnmarshalFn {
    pub receiver: &'static str,
    pub type_name: String,
    pub shadows: Vec<ShadowField>,
    /// Assign a fresh `ID` and current `CreatedAt`/`UpdatedAt` after decoding.
    pub stamp_base: bool,
}

/// A temporal field decoded as a string first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShadowField {
    pub name: String,
    pub json_tag: String,
    pub layout: TimeLayout,
}

impl StructField {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            json_tag: None,
        }
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.json_tag = Some(tag.into());
        self
    }
}
