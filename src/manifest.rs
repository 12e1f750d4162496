//! Synthesis manifest persisted alongside generated templates.

use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::stack::Stack;

const MANIFEST_FILE: &str = "manifest.json";

/// Record of what the last synthesis passes produced, one entry per stack.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SynthManifest {
    pub last_synth: Option<DateTime<Utc>>,
    pub stacks: Vec<StackRecord>,
}

/// Per-stack synthesis summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StackRecord {
    pub name: String,
    pub region: String,
    pub resource_count: usize,
    pub web_acl_count: usize,
    pub rule_count: usize,
    pub template_file: String,
}

impl SynthManifest {
    /// Load the manifest from an output directory, or default if absent.
    pub fn load(out_dir: &Path) -> Result<Self> {
        let path = out_dir.join(MANIFEST_FILE);
        if path.exists() {
            let content = fs::read_to_string(path)?;
            Ok(serde_json::from_str(&content)?)
        } else {
            Ok(Self::default())
        }
    }

    /// Save the manifest into an output directory.
    pub fn save(&self, out_dir: &Path) -> Result<()> {
        fs::create_dir_all(out_dir)?;
        let content = serde_json::to_string_pretty(self)?;
        fs::write(out_dir.join(MANIFEST_FILE), content)?;
        Ok(())
    }

    /// Record a freshly synthesized stack, replacing any previous record
    /// with the same stack name.
    pub fn record(&mut self, stack: &Stack, template_file: &Path) {
        self.last_synth = Some(Utc::now());
        self.stacks.retain(|s| s.name != stack.name);
        self.stacks.push(StackRecord {
            name: stack.name.clone(),
            region: stack.region.clone(),
            resource_count: stack.template.resource_count(),
            web_acl_count: stack.template.web_acls().count(),
            rule_count: stack.template.rule_count(),
            template_file: template_file.display().to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::stack::assemble;
    use std::path::PathBuf;

    fn sample_stack() -> Stack {
        let config = Config {
            region: "us-east-1".to_string(),
            ip_list: vec!["10.0.0.0/24".to_string()],
            geo_list: vec!["US".to_string()],
            aws_managed_rules: true,
            ..Default::default()
        };
        assemble(&config).unwrap()
    }

    #[test]
    fn test_load_missing_manifest_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let manifest = SynthManifest::load(dir.path()).unwrap();
        assert!(manifest.last_synth.is_none());
        assert!(manifest.stacks.is_empty());
    }

    #[test]
    fn test_record_captures_counts() {
        let stack = sample_stack();
        let mut manifest = SynthManifest::default();
        manifest.record(&stack, &PathBuf::from("out/waf-stack.template.json"));

        assert!(manifest.last_synth.is_some());
        assert_eq!(manifest.stacks.len(), 1);
        let record = &manifest.stacks[0];
        assert_eq!(record.name, "waf-stack");
        assert_eq!(record.region, "us-east-1");
        assert_eq!(record.resource_count, 4);
        assert_eq!(record.web_acl_count, 2);
        assert_eq!(record.rule_count, 16);
    }

    #[test]
    fn test_record_replaces_same_stack() {
        let stack = sample_stack();
        let mut manifest = SynthManifest::default();
        manifest.record(&stack, &PathBuf::from("a.json"));
        manifest.record(&stack, &PathBuf::from("b.json"));

        assert_eq!(manifest.stacks.len(), 1);
        assert_eq!(manifest.stacks[0].template_file, "b.json");
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let stack = sample_stack();
        let mut manifest = SynthManifest::default();
        manifest.record(&stack, &dir.path().join("waf-stack.template.json"));
        manifest.save(dir.path()).unwrap();

        let loaded = SynthManifest::load(dir.path()).unwrap();
        assert_eq!(loaded.stacks.len(), 1);
        assert_eq!(loaded.stacks[0].rule_count, 16);
        assert_eq!(loaded.last_synth, manifest.last_synth);
    }
}
