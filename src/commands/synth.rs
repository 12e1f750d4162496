//! Synth command implementation.

use anyhow::{Context, Result};
use std::path::Path;
use tracing::info;

use crate::config::Config;
use crate::manifest::SynthManifest;
use crate::stack::assemble;
use crate::synth::write_template;

/// Run the synth command: assemble the stack and write its CloudFormation
/// template plus the synthesis manifest.
pub fn run(out_dir: &Path, dry_run: bool, config_path: &Path) -> Result<()> {
    let config = Config::load(config_path)
        .with_context(|| format!("Failed to load config from {:?}", config_path))?;

    info!(
        "Assembling stack '{}' for region {}",
        config.stack_name, config.region
    );
    let stack = assemble(&config)?;

    if dry_run {
        println!("{}", stack.template.to_json()?);
        info!("Dry-run: template not written");
        return Ok(());
    }

    let template_path = write_template(&stack, out_dir)?;

    let mut manifest = SynthManifest::load(out_dir).unwrap_or_default();
    manifest.record(&stack, &template_path);
    manifest.save(out_dir)?;

    println!();
    println!(
        "[OK] Synthesized {:?}: {} resources ({} web ACLs, {} rules)",
        template_path,
        stack.template.resource_count(),
        stack.template.web_acls().count(),
        stack.template.rule_count()
    );

    Ok(())
}
