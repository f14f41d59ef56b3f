use crate::component::parameters_key;
use crate::error::ValidationError;
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Find the parameter block of a component, by canonical name first and
/// sanitized parameter key second.
fn component_block<'a>(params: &'a Map<String, Value>, component: &str) -> Option<&'a Value> {
    params
        .get(component)
        .or_else(|| params.get(&parameters_key(component)))
}

/// Mapping from instance (alias) name to canonical component name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComponentAliases {
    aliases: BTreeMap<String, String>,
}

impl ComponentAliases {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole registration.
    pub fn register(&mut self, aliases: BTreeMap<String, String>) {
        self.aliases = aliases;
    }

    pub fn get(&self) -> &BTreeMap<String, String> {
        &self.aliases
    }

    pub fn resolve(&self, alias: &str) -> Option<&str> {
        self.aliases.get(alias).map(String::as_str)
    }

    /// Check the registered aliases against the components' parameter blocks.
    ///
    /// Every alias must point at a component with a parameter block, and every
    /// component flagged `multi_instance` must set a non-empty `namespace`.
    pub fn verify(&self, params: &Map<String, Value>) -> Result<(), ValidationError> {
        for (alias, component) in &self.aliases {
            if alias != component && component_block(params, component).is_none() {
                return Err(ValidationError::UnresolvableAlias {
                    alias: alias.clone(),
                    component: component.clone(),
                });
            }
        }

        for (component, block) in params {
            let multi_instance = block
                .get("multi_instance")
                .and_then(Value::as_bool)
                .unwrap_or(false);
            if !multi_instance {
                continue;
            }
            let has_namespace = block
                .get("namespace")
                .and_then(Value::as_str)
                .is_some_and(|ns| !ns.is_empty());
            if !has_namespace {
                return Err(ValidationError::MissingNamespace {
                    component: component.clone(),
                });
            }
        }

        Ok(())
    }
}
