//! Init command implementation

use anyhow::{bail, Result};
use std::path::PathBuf;

use questview::config::Config;

/// Default configuration content for questview init
pub const DEFAULT_CONFIG: &str = r#"# questview configuration
#
# Paths may also be given per run with --user / --challenges.

[data]
# User state written by the challenge runner (JSON or YAML)
# user_state = "~/.questview/user.json"
# Challenge catalog (JSON or YAML list of definitions)
# challenges = "~/.questview/challenges.json"

[display]
# "auto", "always" or "never"
color = "auto"
# Completion dates in "local" time or "utc"
time = "local"
"#;

/// Write a default config file
pub async fn init_command(config_path: Option<PathBuf>, force: bool) -> Result<()> {
    let config_path = config_path.unwrap_or_else(Config::global_config_path);

    if config_path.exists() && !force {
        bail!(
            "Configuration already exists: {}\nUse --force to overwrite.",
            config_path.display()
        );
    }

    Config::write_file(&config_path, DEFAULT_CONFIG)?;
    println!("Created: {}", config_path.display());

    Ok(())
}
