use crate::cluster::Cluster;
use crate::error::ValidationError;
use crate::inventory::Inventory;
use serde_json::{json, Map, Value};

pub const CLOUD_FACT: &str = "cloud";
pub const DISTRIBUTION_FACT: &str = "distribution";
const REGION_FACT: &str = "region";

fn required_fact<'a>(cluster: &'a Cluster, fact: &str) -> Result<&'a str, ValidationError> {
    match cluster.facts().get(fact) {
        None => Err(ValidationError::MissingFact {
            fact: fact.to_string(),
        }),
        Some(value) if value.is_empty() => Err(ValidationError::EmptyFact {
            fact: fact.to_string(),
        }),
        Some(value) => Ok(value),
    }
}

/// Render the cluster parameter class seeding every target.
pub fn render_params(inventory: &Inventory, cluster: &Cluster) -> Result<Value, ValidationError> {
    let cloud = required_fact(cluster, CLOUD_FACT)?;
    let distribution = required_fact(cluster, DISTRIBUTION_FACT)?;

    let mut cloud_params = Map::new();
    cloud_params.insert("provider".to_string(), json!(cloud));
    if let Some(region) = cluster.facts().get(REGION_FACT) {
        cloud_params.insert("region".to_string(), json!(region));
    }

    let mut parameters = Map::new();
    parameters.insert(
        inventory.bootstrap_target().to_string(),
        json!({
            "name": cluster.id(),
            "display_name": cluster.display_name(),
            "catalog_url": cluster.catalog_repo_url(),
            "tenant": cluster.tenant_id(),
            "tenant_display_name": cluster.tenant_display_name(),
            "dist": distribution,
        }),
    );
    parameters.insert("facts".to_string(), json!(cluster.facts()));
    parameters.insert("cloud".to_string(), Value::Object(cloud_params));
    parameters.insert(
        "customer".to_string(),
        json!({ "name": cluster.tenant_id() }),
    );

    Ok(json!({ "parameters": parameters }))
}
