//! Config loading.
//!
//! Decodes YAML strictly, fills in the package and the imports every
//! generated file needs, then runs [`sanitize`].

use crate::config::Config;
use crate::error::ConfigError;
use crate::resolve::{JSON_IMPORT, UUID_IMPORT};
use crate::sanitize::sanitize;
use std::io::Read;

/// Imports injected into every config, in this order, when missing.
pub const DEFAULT_IMPORTS: [&str; 2] = [JSON_IMPORT, UUID_IMPORT];

/// Decode config bytes without any defaulting or validation.
///
/// Unknown keys at any level are rejected.
pub fn decode(data: &[u8]) -> Result<Config, ConfigError> {
    Ok(serde_yaml::from_slice(data)?)
}

/// Load and sanitize a config.
///
/// `default_package` is used when the config does not set `meta.package`.
pub fn load(data: &[u8], default_package: Option<&str>) -> Result<Config, ConfigError> {
    prepare(decode(data)?, default_package)
}

/// [`load`] from a reader.
pub fn read(reader: impl Read, default_package: Option<&str>) -> Result<Config, ConfigError> {
    prepare(serde_yaml::from_reader(reader)?, default_package)
}

fn prepare(mut config: Config, default_package: Option<&str>) -> Result<Config, ConfigError> {
    if config.meta.package.is_empty() {
        match default_package {
            Some(pkg) if !pkg.is_empty() => config.meta.package = pkg.to_string(),
            _ => return Err(ConfigError::MissingPackage),
        }
    }

    // Declared imports may repeat; keep the first occurrence of each.
    let declared = std::mem::take(&mut config.meta.imports);
    for import in &declared {
        config.meta.add_import(import);
    }
    for import in DEFAULT_IMPORTS {
        config.meta.add_import(import);
    }

    sanitize(&mut config)?;
    tracing::debug!(package = %config.meta.package, "config loaded");
    Ok(config)
}
