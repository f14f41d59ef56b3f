use crate::error::{LookupError, Result};
use crate::inventory::{read_yaml, Inventory};
use serde_json::Value;
use std::path::Path;

fn lookup<'a>(root: &'a Value, keys: &[&str], path: &Path) -> std::result::Result<&'a Value, LookupError> {
    let mut current = root;
    for (depth, key) in keys.iter().enumerate() {
        current = current.get(key).ok_or_else(|| LookupError::MissingKey {
            key: keys[..=depth].join("."),
            path: path.to_path_buf(),
        })?;
    }
    Ok(current)
}

fn lookup_str(root: &Value, keys: &[&str], path: &Path) -> std::result::Result<String, LookupError> {
    let value = lookup(root, keys, path)?;
    Ok(match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    })
}

/// Read the cluster and tenant ids back from a rendered params class.
pub fn read_cluster_and_tenant(inventory: &Inventory) -> Result<(String, String)> {
    let path = inventory.params_file();
    let params = read_yaml(&path)?;

    let cluster = lookup_str(&params, &["parameters", "cluster", "name"], &path)?;
    let tenant = lookup_str(&params, &["parameters", "cluster", "tenant"], &path)?;
    Ok((cluster, tenant))
}
