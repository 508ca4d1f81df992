//! CLI command implementations - one module per subcommand.

use anyhow::{Context, Result, bail};
use hl7c_schema::{Config, input};
use std::path::{Path, PathBuf};

pub mod check;
pub mod generate;

/// Config file looked up in the working directory when `--file` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "model_config.yaml";

/// Package used when neither the config nor `--package` names one.
pub const DEFAULT_PACKAGE: &str = "objects";

/// Resolve the config path from `--file`, falling back to the default file.
pub fn config_path(file: Option<&Path>) -> Result<PathBuf> {
    match file {
        Some(file) if file.as_os_str().is_empty() => {
            bail!("error parsing config: file argument is empty")
        }
        Some(file) => std::path::absolute(file)
            .with_context(|| format!("absolute path lookup failed for {}", file.display())),
        None => {
            let path = std::env::current_dir()
                .context("cannot determine working directory")?
                .join(DEFAULT_CONFIG_FILE);
            if !path.exists() {
                bail!("error parsing {DEFAULT_CONFIG_FILE}: file does not exist");
            }
            Ok(path)
        }
    }
}

/// Read, load and sanitize the config at `path`.
pub fn read_config(path: &Path, package: &str) -> Result<Config> {
    let base = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    let file = std::fs::File::open(path).with_context(|| format!("error reading {base}"))?;
    let config = input::read(std::io::BufReader::new(file), Some(package))
        .with_context(|| format!("error parsing {base}"))?;

    tracing::info!(
        path = %path.display(),
        models = config.models.len(),
        types = config.types.len(),
        "loaded config"
    );
    Ok(config)
}

/// Print an error chain and return the failure exit code.
pub fn report(err: &anyhow::Error) -> i32 {
    eprintln!("error: {err:#}");
    1
}
