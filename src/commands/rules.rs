//! Rules command implementation.

use anyhow::{Context, Result};
use std::path::Path;

use crate::acl::IpSetArn;
use crate::config::Config;
use crate::rules::build_waf_rules;
use crate::stack::REGIONAL_IP_SET_ID;

/// Run the rules command: print the rule list a synthesis would emit.
pub fn run(config_path: &Path) -> Result<()> {
    let config = Config::load(config_path)
        .with_context(|| format!("Failed to load config from {:?}", config_path))?;

    let rules = build_waf_rules(
        IpSetArn::GetAtt(REGIONAL_IP_SET_ID.to_string()),
        &config.geo_list,
        config.aws_managed_rules,
    );

    println!();
    println!("{:<10} {:<45} ACTION", "PRIORITY", "NAME");
    for rule in &rules {
        println!("{:<10} {:<45} {}", rule.priority, rule.name, rule.action_label());
    }
    println!();
    println!(
        "{} rules (managed rule groups {})",
        rules.len(),
        if config.aws_managed_rules { "enabled" } else { "disabled" }
    );

    Ok(())
}
