//! Semantic type resolution.
//!
//! Maps the type names used in a config (`timestamp`, `uuid`, ...) onto Go
//! types and the imports those types need.

/// Go import path for JSON decoding, required by every generated file.
pub const JSON_IMPORT: &str = "encoding/json";
/// Go import path for `uuid.UUID`, required by every generated file.
pub const UUID_IMPORT: &str = "github.com/google/uuid";
/// Go import path for `time.Time`.
pub const TIME_IMPORT: &str = "time";

const GO_TIME: &str = "time.Time";
const GO_UUID: &str = "uuid.UUID";

/// Parse layout for a temporal field.
///
/// `timestamp` and `date` resolve to the same Go type but are parsed with
/// different layouts, so the distinction is kept past resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeLayout {
    /// `YYYYMMDDhhmmss`
    DateTime,
    /// `YYYYMMDD`
    Date,
}

impl TimeLayout {
    /// Layout string understood by Go's `time.Parse`.
    pub fn go_layout(self) -> &'static str {
        match self {
            TimeLayout::DateTime => "20060102150405",
            TimeLayout::Date => "20060102",
        }
    }
}

/// Classification of a resolved type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeClass {
    /// `string`, `int`, `bool`.
    Scalar,
    /// `time.Time`, parsed from a string with the given layout.
    Temporal(TimeLayout),
    /// `uuid.UUID`.
    Identifier,
    /// Anything else; presumed to name a custom type.
    Reference,
}

/// Result of resolving a semantic type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolved<'a> {
    /// Concrete Go type written into struct declarations.
    pub go_type: &'a str,
    pub class: TypeClass,
}

impl Resolved<'_> {
    /// Import the Go type needs beyond the always-present ones.
    pub fn import(&self) -> Option<&'static str> {
        match self.class {
            TypeClass::Temporal(_) => Some(TIME_IMPORT),
            TypeClass::Identifier => Some(UUID_IMPORT),
            TypeClass::Scalar | TypeClass::Reference => None,
        }
    }

    /// Whether the type is a Go built-in rather than a custom type reference.
    pub fn is_builtin(&self) -> bool {
        self.class != TypeClass::Reference
    }

    /// Whether decoding the type needs a generated `UnmarshalJSON`.
    pub fn needs_two_phase(&self) -> bool {
        matches!(self.class, TypeClass::Temporal(_) | TypeClass::Identifier)
    }
}

/// Resolve a semantic type name.
///
/// Total: unknown names come back unchanged as [`TypeClass::Reference`].
/// Names that are already concrete Go types (`bool`, `time.Time`,
/// `uuid.UUID`) pass through with their matching class.
pub fn resolve(semantic: &str) -> Resolved<'_> {
    let (go_type, class) = match semantic {
        "" | "string" => ("string", TypeClass::Scalar),
        "int" => ("int", TypeClass::Scalar),
        "bool" => ("bool", TypeClass::Scalar),
        "timestamp" => (GO_TIME, TypeClass::Temporal(TimeLayout::DateTime)),
        "date" => (GO_TIME, TypeClass::Temporal(TimeLayout::Date)),
        "uuid" => (GO_UUID, TypeClass::Identifier),
        GO_TIME => (GO_TIME, TypeClass::Temporal(TimeLayout::DateTime)),
        GO_UUID => (GO_UUID, TypeClass::Identifier),
        other => (other, TypeClass::Reference),
    };
    Resolved { go_type, class }
}
