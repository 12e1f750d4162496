//! Input format validation for deployment parameters.
//!
//! Only the *shape* of inputs is checked here: CIDR syntax, country code
//! format, region and account id patterns. Semantic validation (whether an
//! account exists, whether a managed group is available in a region) is
//! CloudFormation's job at deploy time.

use ipnet::Ipv4Net;

use crate::error::WafstackError;

/// Validate an IPv4 CIDR range string and return the parsed network.
///
/// WAFv2 IP sets require explicit CIDR notation, so a bare address without
/// a prefix length is rejected.
///
/// # Examples
/// ```
/// use wafstack::validation::validate_cidr;
/// assert!(validate_cidr("10.0.0.0/24").is_ok());
/// assert!(validate_cidr("10.0.0.1").is_err());
/// assert!(validate_cidr("not-a-cidr").is_err());
/// ```
pub fn validate_cidr(cidr: &str) -> Result<Ipv4Net, WafstackError> {
    if !cidr.contains('/') {
        return Err(WafstackError::InvalidCidr(cidr.to_string()));
    }
    cidr.parse()
        .map_err(|_| WafstackError::InvalidCidr(cidr.to_string()))
}

/// Validate an ISO 3166-1 alpha-2 country code (two uppercase ASCII letters).
///
/// # Examples
/// ```
/// use wafstack::validation::validate_country_code;
/// assert!(validate_country_code("US").is_ok());
/// assert!(validate_country_code("usa").is_err());
/// ```
pub fn validate_country_code(code: &str) -> Result<(), WafstackError> {
    if code.len() == 2 && code.chars().all(|c| c.is_ascii_uppercase()) {
        Ok(())
    } else {
        Err(WafstackError::InvalidCountryCode(code.to_string()))
    }
}

/// Validate an AWS region string ("us-east-1", "ap-southeast-2", ...).
///
/// Accepts the partition-area-number shape: a two-letter prefix, one or
/// more lowercase name segments, and a trailing number, all dash-separated.
pub fn validate_region(region: &str) -> Result<(), WafstackError> {
    let parts: Vec<&str> = region.split('-').collect();
    let valid = parts.len() >= 3
        && parts[0].len() == 2
        && parts[0].chars().all(|c| c.is_ascii_lowercase())
        && parts[parts.len() - 1].parse::<u8>().is_ok()
        && parts[1..parts.len() - 1]
            .iter()
            .all(|p| !p.is_empty() && p.chars().all(|c| c.is_ascii_lowercase()));

    if valid {
        Ok(())
    } else {
        Err(WafstackError::InvalidRegion(region.to_string()))
    }
}

/// Validate a 12-digit AWS account id.
pub fn validate_account_id(account: &str) -> Result<(), WafstackError> {
    if account.len() == 12 && account.chars().all(|c| c.is_ascii_digit()) {
        Ok(())
    } else {
        Err(WafstackError::InvalidAccountId(account.to_string()))
    }
}
