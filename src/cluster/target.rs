use crate::component::parameters_key;
use crate::error::ValidationError;
use crate::inventory::Inventory;
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use tracing::debug;

pub const GLOBAL_CLASS: &str = "global.commodore";

/// One compilation unit handed to the external compiler.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Target {
    pub classes: Vec<String>,
    pub parameters: Value,
}

/// Render the class list and parameters of a target.
///
/// `component` names the canonical component when the target is an aliased
/// instance. Without it, `target_name` is looked up in `known_components`;
/// a name that is not a known component renders a bootstrap-only target.
/// A resolved component must have both its class and defaults file in the
/// inventory.
pub fn render_target(
    inventory: &Inventory,
    target_name: &str,
    known_components: &[String],
    component: Option<&str>,
) -> Result<Target, ValidationError> {
    if target_name.is_empty() {
        return Err(ValidationError::EmptyTargetName);
    }
    if known_components.is_empty() {
        return Err(ValidationError::NoComponents {
            target: target_name.to_string(),
        });
    }

    let is_known = |name: &str| known_components.iter().any(|c| c == name);
    let canonical = match component {
        Some(name) if !is_known(name) => {
            return Err(ValidationError::NotAComponent {
                target: name.to_string(),
            })
        }
        Some(name) => Some(name),
        None if is_known(target_name) => Some(target_name),
        None => None,
    };

    let mut classes = vec![format!("params.{}", inventory.bootstrap_target())];
    for name in known_components {
        if inventory.defaults_file(name).is_file() {
            classes.push(format!("defaults.{name}"));
        } else {
            debug!("Default file for class {name} missing");
        }
    }
    classes.push(GLOBAL_CLASS.to_string());

    if let Some(name) = canonical {
        let defaults = inventory.defaults_file(name);
        if !defaults.is_file() {
            return Err(ValidationError::MissingDefaultsFile {
                component: name.to_string(),
                path: defaults,
            });
        }
        let class = inventory.component_file(name);
        if !class.is_file() {
            return Err(ValidationError::MissingClassFile {
                component: name.to_string(),
                path: class,
            });
        }
        classes.push(format!("components.{name}"));
    }

    let mut parameters = Map::new();
    parameters.insert(
        "kapitan".to_string(),
        json!({ "vars": { "target": target_name } }),
    );
    parameters.insert("_instance".to_string(), json!(target_name));
    if let Some(name) = canonical.filter(|name| *name != target_name) {
        // Only the component key points at the instance; a reverse key would be a reference cycle.
        parameters.insert(
            parameters_key(name),
            json!(format!("${{{}}}", parameters_key(target_name))),
        );
    }

    Ok(Target {
        classes,
        parameters: Value::Object(parameters),
    })
}
