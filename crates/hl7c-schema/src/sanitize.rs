//! Structural validation and normalization of a decoded config.

use crate::config::{Config, CustomType, Field, Meta, Model};
use crate::error::ConfigError;
use crate::resolve::resolve;

/// Validate `config` and normalize it in place.
///
/// Custom types are processed first so that models can reference any of
/// them regardless of declaration order. References between custom types
/// are not checked, neither for existence nor for cycles.
///
/// Fails fast and does not roll back: on error the config is left partially
/// normalized and must be discarded.
pub fn sanitize(config: &mut Config) -> Result<(), ConfigError> {
    let Config {
        meta,
        models,
        types,
    } = config;

    if models.is_empty() {
        return Err(ConfigError::NoModels);
    }
    if types.is_empty() {
        tracing::warn!("no types defined");
    }

    for custom in types.iter_mut() {
        sanitize_type(meta, custom)?;
    }

    for model in models.iter_mut() {
        sanitize_model(meta, types, model)?;
    }

    tracing::debug!(
        models = models.len(),
        types = types.len(),
        imports = ?meta.imports,
        "config sanitized"
    );
    Ok(())
}

fn sanitize_type(meta: &mut Meta, custom: &mut CustomType) -> Result<(), ConfigError> {
    if custom.fields.is_empty() {
        return Err(ConfigError::EmptyTypeFields(custom.name.clone()));
    }
    if custom.name.is_empty() {
        return Err(ConfigError::MissingTypeName);
    }

    for (index, field) in custom.fields.iter_mut().enumerate() {
        merge_import(meta, field);
        if field.tag.is_empty() {
            field.tag = (index + 1).to_string();
        }
        field.name = capitalize(&field.name);
    }

    custom.name = capitalize(&custom.name);
    Ok(())
}

fn sanitize_model(
    meta: &mut Meta,
    types: &[CustomType],
    model: &mut Model,
) -> Result<(), ConfigError> {
    if model.fields.is_empty() {
        return Err(ConfigError::EmptyModelFields(model.name.clone()));
    }

    model.name = capitalize(&model.name);

    for field in &mut model.fields {
        if field.name.is_empty() {
            return Err(ConfigError::MissingFieldName(model.name.clone()));
        }
        if !resolve(&field.ty).is_builtin() && !types.iter().any(|t| t.name == field.ty) {
            return Err(ConfigError::UndefinedType(field.ty.clone()));
        }
        merge_import(meta, field);
        field.name = capitalize(&field.name);
    }
    Ok(())
}

fn merge_import(meta: &mut Meta, field: &Field) {
    if let Some(import) = resolve(&field.ty).import() {
        meta.add_import(import);
    }
}

/// Upper-case the first character, leaving the rest untouched.
///
/// Idempotent: `capitalize(&capitalize(s)) == capitalize(s)`.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
