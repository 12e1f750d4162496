//! Web ACL rule construction.
//!
//! [`build_waf_rules`] produces the fixed, ordered rule list every generated
//! web ACL carries: the IP allow-list check at priority 0, the geographic
//! check at priority 1, and optionally the AWS managed rule groups at
//! priorities 2 and up. The builder is pure and performs no validation;
//! malformed or empty inputs pass through and surface at deploy time.

use crate::acl::{IpSetArn, OverrideAction, Rule, RuleAction, Statement, VisibilityConfig};

/// Vendor name of the managed rule groups referenced below.
pub const MANAGED_RULE_VENDOR: &str = "AWS";

/// Managed rule groups attached when `aws_managed_rules` is enabled, in
/// priority order starting at [`FIRST_MANAGED_PRIORITY`].
pub const MANAGED_RULE_GROUPS: &[&str] = &[
    "AWSManagedRulesAdminProtectionRuleSet",
    "AWSManagedRulesAmazonIpReputationList",
    "AWSManagedRulesCommonRuleSet",
    "AWSManagedRulesKnownBadInputsRuleSet",
    "AWSManagedRulesLinuxRuleSet",
    "AWSManagedRulesSQLiRuleSet",
];

/// Priority of the first managed rule group (0 and 1 are reserved for the
/// IP and geo checks).
pub const FIRST_MANAGED_PRIORITY: u32 = 2;

/// Build the ordered rule list for a web ACL.
///
/// - Priority 0, "IPMatch": blocks any source address NOT in the allow-list.
/// - Priority 1, "GeoMatch": blocks any source country NOT in `geo_list`.
/// - Priorities 2..: managed rule groups, each deferring to the group's own
///   per-rule actions (override action None), only when `aws_managed_rules`.
pub fn build_waf_rules(ip_set: IpSetArn, geo_list: &[String], aws_managed_rules: bool) -> Vec<Rule> {
    let capacity = if aws_managed_rules {
        2 + MANAGED_RULE_GROUPS.len()
    } else {
        2
    };
    let mut rules = Vec::with_capacity(capacity);

    rules.push(Rule {
        name: "IPMatch".to_string(),
        priority: 0,
        statement: Statement::IpSetReference { arn: ip_set }.negated(),
        action: Some(RuleAction::block()),
        override_action: None,
        visibility_config: VisibilityConfig::for_metric("IPMatch"),
    });

    rules.push(Rule {
        name: "GeoMatch".to_string(),
        priority: 1,
        statement: Statement::GeoMatch {
            country_codes: geo_list.to_vec(),
        }
        .negated(),
        action: Some(RuleAction::block()),
        override_action: None,
        visibility_config: VisibilityConfig::for_metric("GeoMatch"),
    });

    if aws_managed_rules {
        for (offset, group) in MANAGED_RULE_GROUPS.iter().enumerate() {
            let name = format!("{}-{}", MANAGED_RULE_VENDOR, group);
            rules.push(Rule {
                name: name.clone(),
                priority: FIRST_MANAGED_PRIORITY + offset as u32,
                statement: Statement::ManagedRuleGroup {
                    vendor_name: MANAGED_RULE_VENDOR.to_string(),
                    name: (*group).to_string(),
                },
                action: None,
                override_action: Some(OverrideAction::group_default()),
                visibility_config: VisibilityConfig::for_metric(name),
            });
        }
    }

    rules
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn geo_list() -> Vec<String> {
        vec!["US".to_string(), "CA".to_string()]
    }

    fn ip_set() -> IpSetArn {
        IpSetArn::GetAtt("RegionalIPset".to_string())
    }

    #[test]
    fn test_without_managed_rules_two_rules() {
        let rules = build_waf_rules(ip_set(), &geo_list(), false);
        assert_eq!(rules.len(), 2);
        let priorities: Vec<u32> = rules.iter().map(|r| r.priority).collect();
        assert_eq!(priorities, vec![0, 1]);
    }

    #[test]
    fn test_with_managed_rules_eight_rules() {
        let rules = build_waf_rules(ip_set(), &geo_list(), true);
        assert_eq!(rules.len(), 8);
        let priorities: Vec<u32> = rules.iter().map(|r| r.priority).collect();
        assert_eq!(priorities, (0..8).collect::<Vec<u32>>());
    }

    #[test]
    fn test_priorities_unique() {
        let rules = build_waf_rules(ip_set(), &geo_list(), true);
        let unique: HashSet<u32> = rules.iter().map(|r| r.priority).collect();
        assert_eq!(unique.len(), rules.len());
    }

    #[test]
    fn test_ip_match_negates_and_blocks() {
        let rules = build_waf_rules(ip_set(), &geo_list(), false);
        let rule = &rules[0];
        assert_eq!(rule.name, "IPMatch");
        assert_eq!(rule.priority, 0);
        assert!(matches!(rule.action, Some(RuleAction::Block(_))));
        assert!(rule.override_action.is_none());
        match &rule.statement {
            Statement::Not { statement } => {
                assert!(matches!(**statement, Statement::IpSetReference { .. }));
            }
            other => panic!("Expected NotStatement, got {:?}", other),
        }
    }

    #[test]
    fn test_geo_match_negates_and_blocks() {
        let rules = build_waf_rules(ip_set(), &geo_list(), false);
        let rule = &rules[1];
        assert_eq!(rule.name, "GeoMatch");
        assert_eq!(rule.priority, 1);
        assert!(matches!(rule.action, Some(RuleAction::Block(_))));
        match &rule.statement {
            Statement::Not { statement } => match &**statement {
                Statement::GeoMatch { country_codes } => {
                    assert_eq!(country_codes, &geo_list());
                }
                other => panic!("Expected GeoMatchStatement, got {:?}", other),
            },
            other => panic!("Expected NotStatement, got {:?}", other),
        }
    }

    #[test]
    fn test_managed_rules_defer_to_group_defaults() {
        let rules = build_waf_rules(ip_set(), &geo_list(), true);
        for rule in &rules[2..] {
            assert!(rule.action.is_none(), "{} must not block or allow", rule.name);
            assert!(
                matches!(rule.override_action, Some(OverrideAction::GroupDefault(_))),
                "{} must defer to the group default",
                rule.name
            );
        }
    }

    #[test]
    fn test_managed_rules_vendor_and_names() {
        let rules = build_waf_rules(ip_set(), &geo_list(), true);
        for (rule, group) in rules[2..].iter().zip(MANAGED_RULE_GROUPS) {
            assert_eq!(rule.name, format!("AWS-{}", group));
            match &rule.statement {
                Statement::ManagedRuleGroup { vendor_name, name } => {
                    assert_eq!(vendor_name, "AWS");
                    assert_eq!(name, group);
                }
                other => panic!("Expected ManagedRuleGroupStatement, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_metric_name_matches_rule_name() {
        let rules = build_waf_rules(ip_set(), &geo_list(), true);
        for rule in &rules {
            assert_eq!(rule.visibility_config.metric_name, rule.name);
            assert!(rule.visibility_config.sampled_requests_enabled);
            assert!(rule.visibility_config.cloud_watch_metrics_enabled);
        }
    }

    #[test]
    fn test_deterministic_output() {
        let a = build_waf_rules(ip_set(), &geo_list(), true);
        let b = build_waf_rules(ip_set(), &geo_list(), true);
        assert_eq!(a, b);
    }

    #[test]
    fn test_empty_inputs_pass_through() {
        // Validation is the engine's job; the builder never inspects inputs.
        let rules = build_waf_rules(ip_set(), &[], false);
        assert_eq!(rules.len(), 2);
        match &rules[1].statement {
            Statement::Not { statement } => match &**statement {
                Statement::GeoMatch { country_codes } => assert!(country_codes.is_empty()),
                other => panic!("Expected GeoMatchStatement, got {:?}", other),
            },
            other => panic!("Expected NotStatement, got {:?}", other),
        }
    }

    #[test]
    fn test_literal_arn_reference() {
        let arn = "arn:aws:wafv2:us-east-1:123456789012:global/ipset/external";
        let rules = build_waf_rules(IpSetArn::Literal(arn.to_string()), &geo_list(), false);
        match &rules[0].statement {
            Statement::Not { statement } => match &**statement {
                Statement::IpSetReference { arn: got } => {
                    assert_eq!(*got, IpSetArn::Literal(arn.to_string()));
                }
                other => panic!("Expected IPSetReferenceStatement, got {:?}", other),
            },
            other => panic!("Expected NotStatement, got {:?}", other),
        }
    }

    #[test]
    fn test_managed_group_list_is_stable() {
        // The referenced group set is part of the tool's contract.
        assert_eq!(MANAGED_RULE_GROUPS.len(), 6);
        assert_eq!(MANAGED_RULE_GROUPS[0], "AWSManagedRulesAdminProtectionRuleSet");
        assert_eq!(MANAGED_RULE_GROUPS[5], "AWSManagedRulesSQLiRuleSet");
    }
}
