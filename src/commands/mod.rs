//! CLI command implementations.

pub mod init;
pub mod rules;
pub mod status;
pub mod synth;
pub mod validate;
