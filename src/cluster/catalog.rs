use crate::cluster::{render_params, render_target, Cluster, Target};
use crate::config::Config;
use crate::error::{Result, ValidationError};
use crate::files::write_yaml;
use crate::inventory::{component_parameters, Inventory};
use std::collections::{BTreeMap, BTreeSet};
use tracing::{debug, info, warn};

/// A component instance requested for the cluster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instance {
    pub name: String,
    pub component: String,
}

impl Instance {
    pub fn new(name: impl Into<String>, component: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            component: component.into(),
        }
    }

    /// Parse an `ALIAS=COMPONENT` specification.
    pub fn parse(spec: &str) -> std::result::Result<Self, ValidationError> {
        match spec.split_once('=') {
            Some((alias, component)) if !alias.is_empty() && !component.is_empty() => {
                Ok(Self::new(alias, component))
            }
            _ => Err(ValidationError::InvalidAliasSpec {
                spec: spec.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RenderedInventory {
    pub targets: BTreeMap<String, Target>,
}

fn check_instance_name(name: &str, bootstrap: &str) -> std::result::Result<(), ValidationError> {
    if name == bootstrap {
        return Err(ValidationError::ReservedTargetName {
            name: name.to_string(),
        });
    }
    if name.is_empty() || name == "." || name == ".." || name.contains(['/', '\\']) {
        return Err(ValidationError::InvalidInstanceName {
            name: name.to_string(),
        });
    }
    Ok(())
}

/// Build the alias registry: every component is an instance of itself, plus
/// the explicitly aliased instances.
///
/// Instance names become target file names, so they may not contain path
/// separators or take the bootstrap target's name.
pub fn instance_aliases(
    components: &[String],
    aliases: &[Instance],
    bootstrap: &str,
) -> std::result::Result<BTreeMap<String, String>, ValidationError> {
    let mut registry = BTreeMap::new();
    for component in components {
        check_instance_name(component, bootstrap)?;
        registry.insert(component.clone(), component.clone());
    }

    for instance in aliases {
        check_instance_name(&instance.name, bootstrap)?;
        if !components.contains(&instance.component) {
            return Err(ValidationError::UnresolvableAlias {
                alias: instance.name.clone(),
                component: instance.component.clone(),
            });
        }
        if registry
            .insert(instance.name.clone(), instance.component.clone())
            .is_some()
        {
            return Err(ValidationError::DuplicateAlias {
                alias: instance.name.clone(),
            });
        }
    }

    Ok(registry)
}

/// Drop repeated component names, keeping the first occurrence.
pub fn unique_components(components: &[String]) -> Vec<String> {
    let mut seen = BTreeSet::new();
    components
        .iter()
        .filter(|c| seen.insert(c.as_str()))
        .cloned()
        .collect()
}

/// Components without a defaults class in the inventory.
pub fn missing_defaults<'a>(inv: &Inventory, components: &'a [String]) -> Vec<&'a str> {
    components
        .iter()
        .filter(|c| !inv.defaults_file(c).is_file())
        .map(String::as_str)
        .collect()
}

/// Render the cluster parameter class and one target per instance into the
/// working directory's inventory.
///
/// All targets are rendered before anything is written, so a validation
/// failure leaves the inventory untouched.
pub fn render_inventory(
    config: &mut Config,
    cluster: &Cluster,
    components: &[String],
    aliases: &[Instance],
) -> Result<RenderedInventory> {
    let inv = config.inventory();
    inv.ensure_dirs()?;

    let components = &unique_components(components);
    let bootstrap = inv.bootstrap_target();
    config.register_component_aliases(instance_aliases(components, aliases, bootstrap)?);
    for name in missing_defaults(&inv, components) {
        warn!("Default file for class {name} missing");
    }
    let params = component_parameters(&inv, components)?;
    config.verify_component_aliases(&params)?;
    config.register_component_deprecations(&params);

    let cluster_params = render_params(&inv, cluster)?;

    let mut targets = BTreeMap::new();
    targets.insert(
        bootstrap.to_string(),
        render_target(&inv, bootstrap, components, None)?,
    );
    for (instance, component) in config.get_component_aliases() {
        debug!("Rendering target {instance} for component {component}");
        let target = render_target(&inv, instance, components, Some(component.as_str()))?;
        targets.insert(instance.clone(), target);
    }

    write_yaml(&inv.params_file(), &cluster_params)?;
    for (name, target) in &targets {
        write_yaml(&inv.target_file(name), target)?;
    }
    info!(
        "Rendered {} targets for cluster {}",
        targets.len(),
        cluster.id()
    );

    Ok(RenderedInventory { targets })
}
