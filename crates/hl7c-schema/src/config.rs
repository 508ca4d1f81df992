//! The config data model.
//!
//! A [`Config`] is decoded once per invocation, mutated in place by
//! [`sanitize`](crate::sanitize::sanitize), and then handed to the emitter
//! by reference.

use crate::resolve::resolve;
use serde::{Deserialize, Serialize};

/// Root of a model config file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub meta: Meta,
    #[serde(default)]
    pub models: Vec<Model>,
    #[serde(default)]
    pub types: Vec<CustomType>,
}

/// Package and import settings for the generated file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Meta {
    /// Target package. May be a path (`models/objects`); see [`Meta::package_name`].
    #[serde(default)]
    pub package: String,
    /// Go import paths, in insertion order, without duplicates once loaded.
    #[serde(default)]
    pub imports: Vec<String>,
}

/// A top-level message structure. Every model embeds `Base`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Model {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub fields: Vec<Field>,
}

/// A reusable composite type (an HL7 data type such as `CX` or `XPN`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CustomType {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub fields: Vec<Field>,
}

/// A single field of a model or custom type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Field {
    #[serde(default)]
    pub name: String,
    /// Semantic type, before resolution.
    #[serde(default, rename = "type")]
    pub ty: String,
    /// External JSON key the field is read from.
    #[serde(default)]
    pub tag: String,
}

impl Meta {
    /// Append an import unless it is already present.
    pub fn add_import(&mut self, import: &str) {
        if !self.imports.iter().any(|i| i == import) {
            self.imports.push(import.to_string());
        }
    }

    /// Name used in the `package` clause: the last segment of [`Meta::package`].
    pub fn package_name(&self) -> &str {
        self.package
            .trim_end_matches('/')
            .rsplit('/')
            .next()
            .unwrap_or(&self.package)
    }
}

impl CustomType {
    /// Whether this type needs a generated `UnmarshalJSON`.
    ///
    /// Derived from the field types on every call, so it can never go stale
    /// relative to the fields.
    pub fn needs_custom_deserialize(&self) -> bool {
        self.fields.iter().any(|f| resolve(&f.ty).needs_two_phase())
    }
}

impl Field {
    pub fn new(name: impl Into<String>, ty: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            tag: tag.into(),
        }
    }
}
