//! wafstack - AWS WAFv2 Web ACL generator
//!
//! Synthesizes CloudFormation templates for WAFv2 web ACLs from a YAML config.

use anyhow::Result;
use clap::Parser;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use wafstack::cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    let log_level = if cli.verbose {
        Level::DEBUG
    } else if cli.quiet {
        Level::ERROR
    } else {
        Level::INFO
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_thread_ids(false)
        .without_time()
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // Execute command
    match cli.command {
        Commands::Init { force } => wafstack::commands::init::run(force, &cli.config),
        Commands::Validate => wafstack::commands::validate::run(&cli.config),
        Commands::Synth { out, dry_run } => wafstack::commands::synth::run(&out, dry_run, &cli.config),
        Commands::Rules => wafstack::commands::rules::run(&cli.config),
        Commands::Status { out } => wafstack::commands::status::run(&out),
        Commands::Version => {
            println!("wafstack {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}
