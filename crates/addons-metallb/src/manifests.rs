//! MetalLB manifest synthesis
//!
//! Produces two groups of documents:
//!
//! - Per-file OLM manifests (Namespace, OperatorGroup, Subscription) that the
//!   installer applies with the cluster manifests
//! - The operand blob (MetalLB, address pools, L2Advertisement, LoadBalancer
//!   Services) applied once the operator is running
//!
//! Only the operand depends on cluster state: each address pool is included
//! only when its address is set in the add-on properties.

use std::collections::BTreeMap;

use tracing::debug;

use addons_common::template::{Bindings, FragmentBuilder, TemplateEngine};
use addons_common::{ClusterSnapshot, ManifestSet, Result};

use crate::config::MetalLbConfig;
use crate::properties::MetalLbProperties;
use crate::templates;

/// Filename of the Namespace manifest
pub const NAMESPACE_FILE: &str = "50_metallb_ns.yaml";

/// Filename of the OperatorGroup manifest
pub const OPERATOR_GROUP_FILE: &str = "50_metallb_operator_group.yaml";

/// Filename of the Subscription manifest
pub const SUBSCRIPTION_FILE: &str = "50_metallb_subscription.yaml";

/// Generate all MetalLB manifests for a cluster
///
/// Output bytes depend only on `config` and the cluster's MetalLB properties,
/// so repeated calls with equal inputs return identical manifest sets.
///
/// # Errors
///
/// Returns an error if the MetalLB properties blob is malformed or a packaged
/// template fails to render. No partial output is returned.
pub fn synthesize(config: &MetalLbConfig, cluster: &ClusterSnapshot) -> Result<ManifestSet> {
    let properties = MetalLbProperties::from_cluster(cluster)?;
    let engine = TemplateEngine::new();

    let mut per_file = BTreeMap::new();
    per_file.insert(
        NAMESPACE_FILE.to_string(),
        render_namespace(&engine, config)?.into_bytes(),
    );
    per_file.insert(
        OPERATOR_GROUP_FILE.to_string(),
        render_operator_group(&engine, config)?.into_bytes(),
    );
    per_file.insert(
        SUBSCRIPTION_FILE.to_string(),
        render_subscription(&engine, config)?.into_bytes(),
    );

    let operand = render_operand(&engine, config, &properties)?;

    debug!(
        cluster = %cluster.name,
        files = per_file.len(),
        api_pool = properties.api_ip().is_some(),
        ingress_pool = properties.ingress_ip().is_some(),
        "generated MetalLB manifests"
    );
    Ok(ManifestSet::new(per_file, operand.into_bytes()))
}

/// Render the Namespace manifest
pub fn render_namespace(engine: &TemplateEngine, config: &MetalLbConfig) -> Result<String> {
    let bindings = Bindings::new().bind("OPERATOR_NAMESPACE", &config.namespace);
    Ok(engine.render("metallb-namespace", templates::NAMESPACE, &bindings)?)
}

/// Render the OperatorGroup manifest
pub fn render_operator_group(engine: &TemplateEngine, config: &MetalLbConfig) -> Result<String> {
    let bindings = Bindings::new()
        .bind("OPERATOR_NAMESPACE", &config.namespace)
        .bind("OPERATOR_GROUP_NAME", &config.subscription_name);
    Ok(engine.render("metallb-operator-group", templates::OPERATOR_GROUP, &bindings)?)
}

/// Render the Subscription manifest
pub fn render_subscription(engine: &TemplateEngine, config: &MetalLbConfig) -> Result<String> {
    let bindings = Bindings::new()
        .bind("OPERATOR_NAMESPACE", &config.namespace)
        .bind("OPERATOR_SUBSCRIPTION_NAME", &config.subscription_name);
    Ok(engine.render("metallb-subscription", templates::SUBSCRIPTION, &bindings)?)
}

/// Select the operand fragments for the given properties
///
/// Base operand, then the API pool if an API address is set, then the ingress
/// pool if an ingress address is set, then the footer.
pub fn operand_fragments(properties: &MetalLbProperties) -> FragmentBuilder {
    FragmentBuilder::new()
        .push(templates::BASE_OPERAND)
        .push_if(properties.api_ip().is_some(), templates::API_ADDRESS_POOL)
        .push_if(properties.ingress_ip().is_some(), templates::INGRESS_ADDRESS_POOL)
        .push(templates::FOOTER)
}

/// Pool names the footer references that the fragment set does not define
///
/// The footer's L2Advertisement and Services always name both pools. A
/// non-empty result means the applied operand points at missing pools.
pub fn dangling_pool_references(fragments: &FragmentBuilder) -> Vec<&'static str> {
    let mut missing = Vec::new();
    if !fragments.contains(templates::API_ADDRESS_POOL.name) {
        missing.push(templates::API_POOL_NAME);
    }
    if !fragments.contains(templates::INGRESS_ADDRESS_POOL.name) {
        missing.push(templates::INGRESS_POOL_NAME);
    }
    missing
}

/// Render the operand blob
pub fn render_operand(
    engine: &TemplateEngine,
    config: &MetalLbConfig,
    properties: &MetalLbProperties,
) -> Result<String> {
    let fragments = operand_fragments(properties);
    let dangling = dangling_pool_references(&fragments);
    if !dangling.is_empty() {
        debug!(pools = ?dangling, "MetalLB footer references pools that are not generated");
    }

    let bindings = Bindings::new()
        .bind("OPERATOR_NAMESPACE", &config.namespace)
        .bind("API_IP", properties.api_ip().unwrap_or_default())
        .bind("INGRESS_IP", properties.ingress_ip().unwrap_or_default());
    Ok(engine.render("metallb-operand", &fragments.build(), &bindings)?)
}
