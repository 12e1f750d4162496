//! Typed WAFv2 resource model.
//!
//! These types mirror the property graph CloudFormation expects for
//! `AWS::WAFv2::IPSet` and `AWS::WAFv2::WebACL` resources. They serialize
//! directly into resource `Properties` (PascalCase keys) and are built once
//! per generation pass; nothing mutates them after assembly.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::error::WafstackError;

/// Deployment scope of an IP set or web ACL.
///
/// REGIONAL resources attach to per-region endpoints (API Gateway, ALB);
/// CLOUDFRONT resources attach to the global edge network and can only be
/// created in us-east-1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Scope {
    Regional,
    Cloudfront,
}

/// IP address version of an IP set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum IpAddressVersion {
    #[serde(rename = "IPV4")]
    V4,
    #[serde(rename = "IPV6")]
    V6,
}

/// Serializes to `{}`. WAFv2 expresses marker actions like Block and Allow
/// as empty JSON objects.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Empty {}

/// Terminating action taken when a rule's own statement matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RuleAction {
    Block(Empty),
    Allow(Empty),
}

impl RuleAction {
    pub fn block() -> Self {
        Self::Block(Empty {})
    }

    pub fn allow() -> Self {
        Self::Allow(Empty {})
    }
}

/// Override behavior for managed rule group references.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum OverrideAction {
    /// `{"None": {}}`: defer to the actions configured inside the group.
    #[serde(rename = "None")]
    GroupDefault(Empty),
}

impl OverrideAction {
    pub fn group_default() -> Self {
        Self::GroupDefault(Empty {})
    }
}

/// Action applied to requests no rule matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DefaultAction {
    Allow(Empty),
}

impl DefaultAction {
    pub fn allow() -> Self {
        Self::Allow(Empty {})
    }
}

/// Reference to an IP set ARN.
///
/// Rules normally reference an IP set created in the same template via a
/// `Fn::GetAtt` on its logical id; a literal ARN is accepted for sets
/// maintained outside the template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IpSetArn {
    GetAtt(String),
    Literal(String),
}

impl Serialize for IpSetArn {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::GetAtt(logical_id) => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("Fn::GetAtt", &[logical_id.as_str(), "Arn"])?;
                map.end()
            }
            Self::Literal(arn) => serializer.serialize_str(arn),
        }
    }
}

/// Rule predicate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Statement {
    /// Inverts the nested statement.
    #[serde(rename = "NotStatement")]
    Not {
        #[serde(rename = "Statement")]
        statement: Box<Statement>,
    },

    /// Matches source addresses contained in an IP set.
    #[serde(rename = "IPSetReferenceStatement")]
    IpSetReference {
        #[serde(rename = "Arn")]
        arn: IpSetArn,
    },

    /// Matches source countries by ISO 3166-1 alpha-2 code.
    #[serde(rename = "GeoMatchStatement")]
    GeoMatch {
        #[serde(rename = "CountryCodes")]
        country_codes: Vec<String>,
    },

    /// References a rule group maintained by an external vendor.
    #[serde(rename = "ManagedRuleGroupStatement")]
    ManagedRuleGroup {
        #[serde(rename = "VendorName")]
        vendor_name: String,
        #[serde(rename = "Name")]
        name: String,
    },
}

impl Statement {
    /// Wrap this statement in a NotStatement.
    pub fn negated(self) -> Self {
        Self::Not {
            statement: Box::new(self),
        }
    }
}

/// Telemetry settings attached to each rule and to the ACL itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct VisibilityConfig {
    pub sampled_requests_enabled: bool,
    pub cloud_watch_metrics_enabled: bool,
    pub metric_name: String,
}

impl VisibilityConfig {
    /// Full telemetry under the given CloudWatch metric name.
    pub fn for_metric(metric_name: impl Into<String>) -> Self {
        Self {
            sampled_requests_enabled: true,
            cloud_watch_metrics_enabled: true,
            metric_name: metric_name.into(),
        }
    }
}

/// Resource tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Tag {
    pub key: String,
    pub value: String,
}

/// A single web ACL rule descriptor.
///
/// Exactly one of `action` (own statement) or `override_action` (managed
/// group reference) is set; WAFv2 rejects rules carrying both or neither.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Rule {
    pub name: String,
    pub priority: u32,
    pub statement: Statement,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<RuleAction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub override_action: Option<OverrideAction>,
    pub visibility_config: VisibilityConfig,
}

impl Rule {
    /// Human-readable action label for display output.
    pub fn action_label(&self) -> &'static str {
        match (&self.action, &self.override_action) {
            (Some(RuleAction::Block(_)), _) => "BLOCK",
            (Some(RuleAction::Allow(_)), _) => "ALLOW",
            (None, Some(OverrideAction::GroupDefault(_))) => "GROUP DEFAULT",
            (None, None) => "-",
        }
    }
}

/// Properties of an `AWS::WAFv2::IPSet` resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct IpSet {
    pub name: String,
    pub description: String,
    pub addresses: Vec<String>,
    #[serde(rename = "IPAddressVersion")]
    pub ip_address_version: IpAddressVersion,
    pub scope: Scope,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<Tag>,
}

/// Properties of an `AWS::WAFv2::WebACL` resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct WebAcl {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub default_action: DefaultAction,
    pub scope: Scope,
    pub visibility_config: VisibilityConfig,
    pub rules: Vec<Rule>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<Tag>,
}

impl WebAcl {
    /// Check the priority invariant: unique values, listed in evaluation
    /// order (ascending).
    pub fn validate(&self) -> Result<(), WafstackError> {
        let mut previous: Option<u32> = None;
        for rule in &self.rules {
            if let Some(prev) = previous {
                if rule.priority == prev {
                    return Err(WafstackError::DuplicatePriority(rule.priority));
                }
                if rule.priority < prev {
                    return Err(WafstackError::UnorderedPriorities(rule.priority, prev));
                }
            }
            previous = Some(rule.priority);
        }
        Ok(())
    }
}
