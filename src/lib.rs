//! # wafstack - AWS WAFv2 Web ACL generator
//!
//! A CLI tool that builds a declarative description of a web application
//! firewall (IPv4 allow-list, geographic allow rule, optional AWS managed
//! rule groups) and synthesizes it into a CloudFormation template. The
//! template is the entire output: deployment, diffing and rollback belong
//! to CloudFormation itself.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        wafstack                             │
//! ├─────────────────────────────────────────────────────────────┤
//! │  CLI (clap)                                                 │
//! │    └── Commands: init, validate, synth, rules, status       │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Config (serde_yaml)                                        │
//! │    └── account, region, ip_list, geo_list, flags, tags      │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Rule Builder (rules)                                       │
//! │    └── IPMatch (0), GeoMatch (1), managed groups (2-7)      │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Stack Assembler (stack)                                    │
//! │    └── regional pair + CloudFront pair in us-east-1         │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Synthesis (synth, serde_json)                              │
//! │    └── atomic template output + manifest.json               │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```no_run
//! use wafstack::config::Config;
//! use wafstack::stack::assemble;
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = Config::load("waf.yaml")?;
//!     let stack = assemble(&config)?;
//!     println!("{}", stack.template.to_json()?);
//!     Ok(())
//! }
//! ```
//!
//! ## Modules
//!
//! - [`acl`] - Typed WAFv2 resource model (IP sets, rules, web ACLs)
//! - [`cli`] - Command-line interface definitions
//! - [`commands`] - CLI command implementations
//! - [`config`] - Configuration parsing and validation
//! - [`error`] - Domain error types
//! - [`manifest`] - Synthesis manifest persisted with the output
//! - [`rules`] - Web ACL rule construction
//! - [`stack`] - Stack assembly from config to resource template
//! - [`synth`] - CloudFormation template serialization and output
//! - [`validation`] - Input format validation

pub mod acl;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod manifest;
pub mod rules;
pub mod stack;
pub mod synth;
pub mod validation;

pub use cli::{Cli, Commands};
pub use config::Config;
