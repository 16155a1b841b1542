//! Init command implementation

use anyhow::Result;
use std::path::PathBuf;
use tracing::info;

use goalquest::config::Config;

/// Initialize a new goalquest configuration
/// By default creates the global config at ~/.goalquest/config.toml
/// Use --config to specify a custom path
pub fn init_command(config_path: Option<PathBuf>, force: bool) -> Result<()> {
    let config_path = config_path.unwrap_or_else(Config::global_config_path);

    Config::init_file(&config_path, force)?;
    info!("Wrote default config to {}", config_path.display());
    println!("Created: {}", config_path.display());

    Ok(())
}
