use crate::component::parameters_key;
use crate::error::Result;
use crate::inventory::Inventory;
use serde_json::{Map, Value};
use std::path::Path;
use tracing::debug;

/// Read a YAML class or target file into a parameter tree.
pub fn read_yaml(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)?;
    if content.trim().is_empty() {
        return Ok(Value::Null);
    }
    Ok(serde_yaml::from_str(&content)?)
}

/// Collect the parameter block each component declares in its defaults class.
///
/// The result is keyed by canonical component name. Components without a
/// defaults class, or whose defaults carry no block under the component's
/// parameter key, are left out.
pub fn component_parameters(
    inventory: &Inventory,
    components: &[String],
) -> Result<Map<String, Value>> {
    let mut params = Map::new();

    for component in components {
        let defaults = inventory.defaults_file(component);
        if !defaults.is_file() {
            debug!("No defaults class for {component}, skipping");
            continue;
        }

        let class = read_yaml(&defaults)?;
        let block = class
            .get("parameters")
            .and_then(|p| p.get(parameters_key(component)));
        if let Some(block) = block {
            params.insert(component.clone(), block.clone());
        }
    }

    Ok(params)
}
