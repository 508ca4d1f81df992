//! External Go toolchain steps run after a model file is written.

use std::path::Path;
use std::process::{Command, ExitStatus};

#[derive(Debug, thiserror::Error)]
pub enum PostprocessError {
    #[error("failed to run `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("`{command}` exited with {status}")]
    Failed { command: String, status: ExitStatus },
}

/// `go fmt <path>`
pub fn format_file(path: &Path) -> Result<(), PostprocessError> {
    let path = path.to_string_lossy();
    go(&["fmt", &path])
}

/// `go get ./...`
pub fn fetch_dependencies() -> Result<(), PostprocessError> {
    go(&["get", "./..."])
}

fn go(args: &[&str]) -> Result<(), PostprocessError> {
    let command = format!("go {}", args.join(" "));
    tracing::info!("running {}", command);

    let status = Command::new("go")
        .args(args)
        .status()
        .map_err(|source| PostprocessError::Spawn {
            command: command.clone(),
            source,
        })?;

    if status.success() {
        Ok(())
    } else {
        Err(PostprocessError::Failed { command, status })
    }
}
