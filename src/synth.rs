//! CloudFormation template synthesis.
//!
//! The in-memory resource graph built by the stack assembler is serialized
//! here into a deployment template. The template is the entire output of a
//! generation pass; deployment, diffing and rollback belong to
//! CloudFormation itself.

use anyhow::{Context, Result};
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::acl::{IpSet, WebAcl};
use crate::error::WafstackError;
use crate::stack::Stack;

/// Template format version understood by CloudFormation.
pub const TEMPLATE_FORMAT_VERSION: &str = "2010-09-09";

/// A single template resource: type tag plus serialized properties.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "Type", content = "Properties")]
pub enum Resource {
    #[serde(rename = "AWS::WAFv2::IPSet")]
    IpSet(IpSet),
    #[serde(rename = "AWS::WAFv2::WebACL")]
    WebAcl(WebAcl),
}

/// A CloudFormation deployment template.
///
/// Resources are keyed by logical id; a BTreeMap keeps serialization
/// deterministic so identical inputs always yield identical output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Template {
    #[serde(rename = "AWSTemplateFormatVersion")]
    format_version: String,
    #[serde(rename = "Description")]
    description: String,
    #[serde(rename = "Resources")]
    resources: BTreeMap<String, Resource>,
}

impl Template {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            format_version: TEMPLATE_FORMAT_VERSION.to_string(),
            description: description.into(),
            resources: BTreeMap::new(),
        }
    }

    /// Add a resource under a logical id. Duplicate ids are an error.
    pub fn add_resource(
        &mut self,
        logical_id: impl Into<String>,
        resource: Resource,
    ) -> Result<(), WafstackError> {
        let logical_id = logical_id.into();
        if self.resources.contains_key(&logical_id) {
            return Err(WafstackError::DuplicateLogicalId(logical_id));
        }
        self.resources.insert(logical_id, resource);
        Ok(())
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn resource_count(&self) -> usize {
        self.resources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }

    /// Iterate over web ACLs with their logical ids.
    pub fn web_acls(&self) -> impl Iterator<Item = (&str, &WebAcl)> {
        self.resources.iter().filter_map(|(id, r)| match r {
            Resource::WebAcl(acl) => Some((id.as_str(), acl)),
            _ => None,
        })
    }

    /// Iterate over IP sets with their logical ids.
    pub fn ip_sets(&self) -> impl Iterator<Item = (&str, &IpSet)> {
        self.resources.iter().filter_map(|(id, r)| match r {
            Resource::IpSet(set) => Some((id.as_str(), set)),
            _ => None,
        })
    }

    /// Total rule count across all web ACLs.
    pub fn rule_count(&self) -> usize {
        self.web_acls().map(|(_, acl)| acl.rules.len()).sum()
    }

    /// Pretty-printed JSON rendition of the template.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize template")
    }
}

/// Write a stack's template to `<out_dir>/<stack>.template.json`.
///
/// The file is written atomically (tempfile + rename) so a crash mid-write
/// never leaves a truncated template behind.
pub fn write_template(stack: &Stack, out_dir: &Path) -> Result<PathBuf> {
    use std::io::Write;
    use tempfile::NamedTempFile;

    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create output directory: {:?}", out_dir))?;

    let path = out_dir.join(format!("{}.template.json", stack.name));
    let content = stack.template.to_json()?;
    debug!("Template for stack '{}':\n{}", stack.name, content);

    let mut temp_file =
        NamedTempFile::new_in(out_dir).context("Failed to create temporary template file")?;
    temp_file.write_all(content.as_bytes())?;
    temp_file.write_all(b"\n")?;
    temp_file.as_file().sync_all()?;
    temp_file
        .persist(&path)
        .with_context(|| format!("Failed to persist template file: {:?}", path))?;

    info!(
        "Wrote template {:?} ({} resources)",
        path,
        stack.template.resource_count()
    );
    Ok(path)
}
