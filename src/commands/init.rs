//! Init command implementation.

use anyhow::Result;
use std::fs;
use std::path::Path;
use tracing::info;

use crate::config::Config;

/// Run the init command: write a commented default config file.
pub fn run(force: bool, config_path: &Path) -> Result<()> {
    if config_path.exists() && !force {
        anyhow::bail!(
            "Config file {:?} already exists (use --force to overwrite)",
            config_path
        );
    }

    if let Some(parent) = config_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    fs::write(config_path, Config::generate_default_yaml())?;
    info!("Wrote default config to {:?}", config_path);

    println!();
    println!("[OK] Config written to {:?}", config_path);
    println!("Edit it for your deployment target, then run: wafstack validate");

    Ok(())
}
