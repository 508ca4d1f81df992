//! Check command - validate a config and summarize what would be generated.

use super::{DEFAULT_PACKAGE, config_path, read_config, report};
use anyhow::Result;
use clap::Args;
use hl7c_schema::Config;
use std::path::Path;

/// Check command arguments
#[derive(Args)]
pub struct CheckArgs {
    /// Package to assume when the config does not set one
    #[arg(short, long, default_value = DEFAULT_PACKAGE)]
    pub package: String,

    /// Print the sanitized config as JSON
    #[arg(long)]
    pub json: bool,
}

/// Run the check command
pub fn run(file: Option<&Path>, args: CheckArgs) -> i32 {
    match check(file, &args) {
        Ok(text) => {
            println!("{}", text);
            0
        }
        Err(e) => report(&e),
    }
}

fn check(file: Option<&Path>, args: &CheckArgs) -> Result<String> {
    let path = config_path(file)?;
    let config = read_config(&path, &args.package)?;

    if args.json {
        Ok(serde_json::to_string_pretty(&config)?)
    } else {
        Ok(summary(&config))
    }
}

fn summary(config: &Config) -> String {
    let types: Vec<String> = config
        .types
        .iter()
        .map(|t| {
            if t.needs_custom_deserialize() {
                format!("{} (custom unmarshal)", t.name)
            } else {
                t.name.clone()
            }
        })
        .collect();
    let models: Vec<&str> = config.models.iter().map(|m| m.name.as_str()).collect();

    format!(
        "package: {}\nimports: {}\ntypes: {}\nmodels: {}",
        config.meta.package_name(),
        config.meta.imports.join(", "),
        types.join(", "),
        models.join(", "),
    )
}
