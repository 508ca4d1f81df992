//! Generate command - write model.go for the config's package.

use super::{DEFAULT_PACKAGE, config_path, read_config, report};
use crate::postprocess;
use anyhow::{Context, Result};
use clap::Args;
use std::path::{Path, PathBuf};

/// Name of the generated file inside the package directory.
pub const OUTPUT_FILE: &str = "model.go";

/// Generate command arguments
#[derive(Args)]
pub struct GenerateArgs {
    /// Package to generate models in, when the config does not set one
    #[arg(short, long, default_value = DEFAULT_PACKAGE)]
    pub package: String,

    /// Directory the package directory is created under
    #[arg(short, long, default_value = "internal")]
    pub out_dir: PathBuf,

    /// Print the generated source instead of writing it
    #[arg(long)]
    pub stdout: bool,

    /// Skip `go fmt` and `go get` after writing
    #[arg(long)]
    pub no_format: bool,
}

/// Run the generate command
pub fn run(file: Option<&Path>, args: GenerateArgs) -> i32 {
    match generate(file, &args) {
        Ok(Some(path)) => {
            eprintln!("Generated {}", path.display());
            if !args.no_format {
                finish(&path);
            }
            0
        }
        Ok(None) => 0,
        Err(e) => report(&e),
    }
}

/// Returns the written path, or `None` when printing to stdout.
fn generate(file: Option<&Path>, args: &GenerateArgs) -> Result<Option<PathBuf>> {
    let path = config_path(file)?;
    let config = read_config(&path, &args.package)?;
    let source = hl7c_schema::generate_go(&config);

    if args.stdout {
        print!("{}", source);
        return Ok(None);
    }

    let dir = args.out_dir.join(&config.meta.package);
    std::fs::create_dir_all(&dir).with_context(|| format!("failed to create {}", dir.display()))?;

    let target = dir.join(OUTPUT_FILE);
    std::fs::write(&target, &source)
        .with_context(|| format!("failed to write {}", target.display()))?;
    tracing::debug!(bytes = source.len(), path = %target.display(), "wrote model file");
    Ok(Some(target))
}

/// Format the file and fetch its dependencies. Failures are reported only;
/// the generated file is already on disk.
fn finish(path: &Path) {
    if let Err(e) = postprocess::format_file(path) {
        tracing::error!("error formatting {}: {}", path.display(), e);
    }
    if let Err(e) = postprocess::fetch_dependencies() {
        tracing::error!("error getting dependencies: {}", e);
    }
}
