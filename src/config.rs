//! Deployment configuration for wafstack.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::acl::Tag;
use crate::validation::{validate_account_id, validate_cidr, validate_country_code, validate_region};

/// Deployment parameters for a generation pass.
///
/// Loaded once from YAML; nothing mutates it afterwards. Entries are
/// format-checked by [`Config::validate`], everything semantic is left to
/// CloudFormation at deploy time.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 12-digit AWS account id of the deployment target (optional; recorded
    /// in the template description only)
    pub account: String,

    /// Deployment region. CloudFront-scoped resources are only emitted for
    /// us-east-1.
    pub region: String,

    /// Stack name, used for the generated template file name
    pub stack_name: String,

    /// IPv4 CIDR ranges allowed through the IPMatch rule
    pub ip_list: Vec<String>,

    /// ISO 3166-1 alpha-2 country codes allowed through the GeoMatch rule
    pub geo_list: Vec<String>,

    /// Attach the AWS managed rule groups at priorities 2 and up
    pub aws_managed_rules: bool,

    /// Only emit the CloudFront-scoped resources (skip the regional pair)
    pub cloudfront_only: bool,

    /// Tags applied to every generated resource
    pub tags: BTreeMap<String, String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            account: String::new(),
            region: "us-east-1".to_string(),
            stack_name: "waf-stack".to_string(),
            ip_list: Vec::new(),
            geo_list: Vec::new(),
            aws_managed_rules: false,
            cloudfront_only: false,
            tags: BTreeMap::new(),
        }
    }
}

impl Config {
    /// Load configuration from a YAML file and validate it.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {:?}", path.as_ref()))?;
        let config: Config = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path.as_ref()))?;

        config.validate()?;

        Ok(config)
    }

    /// Validate parameter formats.
    ///
    /// Empty `ip_list`/`geo_list` are accepted here (the rule builder passes
    /// them through); `validate` as a command warns about them instead.
    pub fn validate(&self) -> Result<()> {
        validate_region(&self.region)?;

        if !self.account.is_empty() {
            validate_account_id(&self.account)?;
        }

        if self.stack_name.is_empty() {
            anyhow::bail!("stack_name must not be empty");
        }

        for cidr in &self.ip_list {
            validate_cidr(cidr)?;
        }

        for code in &self.geo_list {
            validate_country_code(code)?;
        }

        Ok(())
    }

    /// Save configuration to a YAML file atomically.
    ///
    /// Uses tempfile + rename to prevent corruption on crash.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        use std::io::Write;
        use tempfile::NamedTempFile;

        let path = path.as_ref();
        let content = serde_yaml::to_string(self).context("Failed to serialize config")?;

        let parent_dir = path.parent().unwrap_or(Path::new("."));
        let mut temp_file =
            NamedTempFile::new_in(parent_dir).context("Failed to create temporary config file")?;

        temp_file.write_all(content.as_bytes())?;
        temp_file.as_file().sync_all()?;

        temp_file
            .persist(path)
            .with_context(|| format!("Failed to persist config file: {:?}", path))?;

        Ok(())
    }

    /// Resource tags as WAFv2 tag pairs, in deterministic (sorted) order.
    pub fn tag_list(&self) -> Vec<Tag> {
        self.tags
            .iter()
            .map(|(key, value)| Tag {
                key: key.clone(),
                value: value.clone(),
            })
            .collect()
    }

    /// Default config file content with comments.
    pub fn generate_default_yaml() -> String {
        include_str!("../templates/config.yaml").to_string()
    }
}
