//! Status command implementation.

use anyhow::Result;
use chrono::{DateTime, Local};
use std::path::Path;

use crate::manifest::SynthManifest;

/// Run the status command: show what the last synthesis produced.
pub fn run(out_dir: &Path) -> Result<()> {
    let manifest = SynthManifest::load(out_dir)?;

    println!();
    match manifest.last_synth {
        None => {
            println!("No synthesis manifest in {:?} (run: wafstack synth)", out_dir);
            return Ok(());
        }
        Some(when) => {
            let local: DateTime<Local> = when.into();
            println!("Last synthesis: {}", local.format("%Y-%m-%d %H:%M:%S"));
        }
    }

    println!();
    println!(
        "{:<20} {:<16} {:>9} {:>9} {:>6}  TEMPLATE",
        "STACK", "REGION", "RESOURCES", "WEB ACLS", "RULES"
    );
    for stack in &manifest.stacks {
        println!(
            "{:<20} {:<16} {:>9} {:>9} {:>6}  {}",
            stack.name,
            stack.region,
            stack.resource_count,
            stack.web_acl_count,
            stack.rule_count,
            stack.template_file
        );
    }

    Ok(())
}
