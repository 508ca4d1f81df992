//! Errors produced while loading and validating a config.

/// Failure to turn config bytes into a valid [`Config`](crate::Config).
///
/// Every variant is fatal: a config that produced one of these must be
/// discarded, since sanitization does not roll back partial changes.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("error unmarshalling YAML: {0}")]
    Decode(#[from] serde_yaml::Error),

    #[error("missing package name")]
    MissingPackage,

    #[error("no models defined")]
    NoModels,

    #[error("type has no fields: {0}")]
    EmptyTypeFields(String),

    #[error("missing name in type")]
    MissingTypeName,

    #[error("model has no fields: {0}")]
    EmptyModelFields(String),

    #[error("missing field name in model: {0}")]
    MissingFieldName(String),

    #[error("type not defined: {0}")]
    UndefinedType(String),
}
