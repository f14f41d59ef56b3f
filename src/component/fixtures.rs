//! Synthetic inventory content for compiling a single component without a
//! real cluster.

use crate::cluster::Target;
use crate::inventory::Inventory;
use serde_json::{json, Map, Value};
use std::path::Path;

pub const FIXTURE_CLUSTER_ID: &str = "c-green-test-1234";
pub const FIXTURE_TENANT_ID: &str = "t-silent-test-1234";
pub const FIXTURE_NAMESPACE: &str = "test";

/// Stand-in for the Argo CD library every component imports.
pub const ARGOCD_LIBRARY: &str = r#"local ArgoApp(component, namespace, project='', secrets=true) = {};
local ArgoProject(name) = {};

{
  App: ArgoApp,
  Project: ArgoProject,
}
"#;

/// Cluster parameters of the fake test cluster.
pub fn fixture_params(component_name: &str) -> Value {
    json!({
        "parameters": {
            "cloud": {
                "provider": "${facts:cloud}",
                "region": "${facts:region}",
            },
            "cluster": {
                "catalog_url": "ssh://git@git.example.com/org/repo.git",
                "dist": "test-distribution",
                "name": FIXTURE_CLUSTER_ID,
                "tenant": FIXTURE_TENANT_ID,
            },
            "customer": {
                "name": "${cluster:tenant}",
            },
            "facts": {
                "distribution": "test-distribution",
                "cloud": "cloudscale",
                "region": "rma1",
            },
            "argocd": {
                "namespace": FIXTURE_NAMESPACE,
            },
            "kapitan": {
                "vars": {
                    "target": component_name,
                    "namespace": FIXTURE_NAMESPACE,
                },
            },
        }
    })
}

/// Target compiling one component with extra value classes layered on top,
/// in the order given.
pub fn component_target(inventory: &Inventory, component_name: &str, value_files: &[impl AsRef<Path>]) -> Target {
    let mut classes = vec![
        format!("params.{}", inventory.bootstrap_target()),
        format!("defaults.{component_name}"),
        format!("components.{component_name}"),
    ];
    classes.extend(value_files.iter().filter_map(|f| {
        f.as_ref()
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
    }));

    Target {
        classes,
        parameters: Value::Object(Map::new()),
    }
}
