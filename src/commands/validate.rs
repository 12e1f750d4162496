//! Validate command implementation.

use anyhow::{Context, Result};
use std::path::Path;
use tracing::{info, warn};

use crate::config::Config;
use crate::stack::assemble;

/// Run the validate command: load the config and assemble the stack it
/// describes, reporting what a synthesis would emit.
pub fn run(config_path: &Path) -> Result<()> {
    let config = Config::load(config_path)
        .with_context(|| format!("Failed to load config from {:?}", config_path))?;

    if config.ip_list.is_empty() {
        warn!("ip_list is empty: the IPMatch rule will block all traffic at deploy time");
    }
    if config.geo_list.is_empty() {
        warn!("geo_list is empty: the GeoMatch rule will block all traffic at deploy time");
    }

    let stack = assemble(&config)?;
    info!(
        "Stack '{}' assembles to {} resources",
        stack.name,
        stack.template.resource_count()
    );

    println!();
    println!(
        "[OK] {:?} is valid: stack '{}' in {} -> {} IP sets, {} web ACLs, {} rules",
        config_path,
        stack.name,
        stack.region,
        stack.template.ip_sets().count(),
        stack.template.web_acls().count(),
        stack.template.rule_count()
    );

    Ok(())
}
