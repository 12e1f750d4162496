//! Stack assembly: deployment config to WAFv2 resource template.
//!
//! One generation pass builds one stack. The regional IP set and web ACL
//! are always emitted unless the config restricts to edge-only scope; the
//! CloudFront pair is added on top when the deployment region is the edge
//! region, with independent identifiers but identical rule content.

use anyhow::Result;
use tracing::debug;

use crate::acl::{
    DefaultAction, IpAddressVersion, IpSet, IpSetArn, Scope, VisibilityConfig, WebAcl,
};
use crate::config::Config;
use crate::rules::build_waf_rules;
use crate::synth::{Resource, Template};

/// The only region in which CLOUDFRONT-scoped WAFv2 resources exist.
pub const CLOUDFRONT_REGION: &str = "us-east-1";

/// Logical ids of the generated resources.
pub const REGIONAL_IP_SET_ID: &str = "RegionalIPset";
pub const REGIONAL_ACL_ID: &str = "WebACLApiGW";
pub const GLOBAL_IP_SET_ID: &str = "GlobalIPset";
pub const GLOBAL_ACL_ID: &str = "WebACLCloudFront";

/// An assembled stack: name, target region, and the synthesized template.
#[derive(Debug, Clone, PartialEq)]
pub struct Stack {
    pub name: String,
    pub region: String,
    pub template: Template,
}

/// Assemble the firewall stack described by `config`.
///
/// Fails only on internal invariant violations (duplicate priorities or
/// logical ids) and on the contradictory edge-only-outside-the-edge-region
/// combination; parameter formats were already checked at config load.
pub fn assemble(config: &Config) -> Result<Stack> {
    if config.cloudfront_only && config.region != CLOUDFRONT_REGION {
        anyhow::bail!(
            "cloudfront_only requires region {} (got {}): CLOUDFRONT-scoped \
             resources do not exist elsewhere",
            CLOUDFRONT_REGION,
            config.region
        );
    }

    let account = if config.account.is_empty() {
        "unspecified account"
    } else {
        &config.account
    };
    let mut template = Template::new(format!(
        "WAFv2 web ACL stack '{}' ({}, {})",
        config.stack_name, account, config.region
    ));

    if !config.cloudfront_only {
        add_scope_pair(
            &mut template,
            config,
            ScopePair {
                ip_set_id: REGIONAL_IP_SET_ID,
                ip_set_name: "regional-ipset",
                ip_set_description: "Regional IP addresses allowed",
                acl_id: REGIONAL_ACL_ID,
                metric_name: "waf-apigw",
                scope: Scope::Regional,
            },
        )?;
    }

    if config.region == CLOUDFRONT_REGION {
        add_scope_pair(
            &mut template,
            config,
            ScopePair {
                ip_set_id: GLOBAL_IP_SET_ID,
                ip_set_name: "global-ipset",
                ip_set_description: "global IP addresses allowed",
                acl_id: GLOBAL_ACL_ID,
                metric_name: "waf-cloudfront",
                scope: Scope::Cloudfront,
            },
        )?;
    }

    debug!(
        "Assembled stack '{}' with {} resources",
        config.stack_name,
        template.resource_count()
    );

    Ok(Stack {
        name: config.stack_name.clone(),
        region: config.region.clone(),
        template,
    })
}

/// Identifiers for one scope's IP set + web ACL pair.
struct ScopePair {
    ip_set_id: &'static str,
    ip_set_name: &'static str,
    ip_set_description: &'static str,
    acl_id: &'static str,
    metric_name: &'static str,
    scope: Scope,
}

fn add_scope_pair(template: &mut Template, config: &Config, pair: ScopePair) -> Result<()> {
    let tags = config.tag_list();

    template.add_resource(
        pair.ip_set_id,
        Resource::IpSet(IpSet {
            name: pair.ip_set_name.to_string(),
            description: pair.ip_set_description.to_string(),
            addresses: config.ip_list.clone(),
            ip_address_version: IpAddressVersion::V4,
            scope: pair.scope,
            tags: tags.clone(),
        }),
    )?;

    let acl = WebAcl {
        name: Some(pair.metric_name.to_string()),
        default_action: DefaultAction::allow(),
        scope: pair.scope,
        visibility_config: VisibilityConfig::for_metric(pair.metric_name),
        rules: build_waf_rules(
            IpSetArn::GetAtt(pair.ip_set_id.to_string()),
            &config.geo_list,
            config.aws_managed_rules,
        ),
        tags,
    };
    acl.validate()?;
    template.add_resource(pair.acl_id, Resource::WebAcl(acl))?;

    Ok(())
}
