//! CLI argument parsing with clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "wafstack")]
#[command(author, version, about = "AWS WAFv2 Web ACL generator")]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file path
    #[arg(short, long, default_value = "waf.yaml", global = true)]
    pub config: PathBuf,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug output)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a default config file to get started
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },

    /// Validate the config and the stack it would produce
    Validate,

    /// Synthesize the CloudFormation template
    Synth {
        /// Output directory for templates and the synthesis manifest
        #[arg(short, long, default_value = "cfn.out")]
        out: PathBuf,

        /// Print the template to stdout without writing anything
        #[arg(long)]
        dry_run: bool,
    },

    /// Show the planned web ACL rules
    Rules,

    /// Show what the last synthesis produced
    Status {
        /// Output directory to inspect
        #[arg(short, long, default_value = "cfn.out")]
        out: PathBuf,
    },

    /// Show version
    Version,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_structure_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_version_command() {
        let cli = Cli::try_parse_from(["wafstack", "version"]).unwrap();
        assert!(matches!(cli.command, Commands::Version));
    }

    #[test]
    fn test_cli_synth_defaults() {
        let cli = Cli::try_parse_from(["wafstack", "synth"]).unwrap();
        match cli.command {
            Commands::Synth { out, dry_run } => {
                assert_eq!(out, PathBuf::from("cfn.out"));
                assert!(!dry_run);
            }
            _ => panic!("Expected Synth command"),
        }
    }

    #[test]
    fn test_cli_synth_dry_run() {
        let cli = Cli::try_parse_from(["wafstack", "synth", "--dry-run", "--out", "/tmp/x"]).unwrap();
        match cli.command {
            Commands::Synth { out, dry_run } => {
                assert_eq!(out, PathBuf::from("/tmp/x"));
                assert!(dry_run);
            }
            _ => panic!("Expected Synth command"),
        }
    }

    #[test]
    fn test_cli_init_force() {
        let cli = Cli::try_parse_from(["wafstack", "init", "--force"]).unwrap();
        match cli.command {
            Commands::Init { force } => assert!(force),
            _ => panic!("Expected Init command"),
        }
    }

    #[test]
    fn test_cli_validate_command() {
        let cli = Cli::try_parse_from(["wafstack", "validate"]).unwrap();
        assert!(matches!(cli.command, Commands::Validate));
    }

    #[test]
    fn test_cli_rules_command() {
        let cli = Cli::try_parse_from(["wafstack", "rules"]).unwrap();
        assert!(matches!(cli.command, Commands::Rules));
    }

    #[test]
    fn test_cli_status_out_dir() {
        let cli = Cli::try_parse_from(["wafstack", "status", "--out", "build"]).unwrap();
        match cli.command {
            Commands::Status { out } => assert_eq!(out, PathBuf::from("build")),
            _ => panic!("Expected Status command"),
        }
    }

    #[test]
    fn test_cli_global_options() {
        let cli =
            Cli::try_parse_from(["wafstack", "-q", "-v", "--config", "/custom/waf.yaml", "validate"])
                .unwrap();
        assert!(cli.quiet);
        assert!(cli.verbose);
        assert_eq!(cli.config, PathBuf::from("/custom/waf.yaml"));
    }
}
