//! Error types for wafstack.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum WafstackError {
    #[error("Invalid CIDR range: {0}")]
    InvalidCidr(String),

    #[error("Invalid country code '{0}' (expected ISO 3166-1 alpha-2, e.g. US)")]
    InvalidCountryCode(String),

    #[error("Invalid AWS region: {0}")]
    InvalidRegion(String),

    #[error("Invalid AWS account id '{0}' (expected 12 digits)")]
    InvalidAccountId(String),

    #[error("Duplicate rule priority {0} in web ACL")]
    DuplicatePriority(u32),

    #[error("Rule priorities not in evaluation order (priority {0} listed after {1})")]
    UnorderedPriorities(u32, u32),

    #[error("Duplicate logical id '{0}' in template")]
    DuplicateLogicalId(String),
}
