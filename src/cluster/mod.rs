//! Cluster facts and the rendering of cluster parameters and targets.

pub mod catalog;
pub mod params;
pub mod reader;
pub mod target;

pub use catalog::*;
pub use params::*;
pub use reader::*;
pub use target::*;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Cluster record as served by the Lieutenant API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClusterInfo {
    pub id: String,
    #[serde(default)]
    pub display_name: String,
    pub tenant: String,
    #[serde(default)]
    pub facts: BTreeMap<String, String>,
    #[serde(default)]
    pub git_repo: Option<GitRepo>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GitRepo {
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TenantInfo {
    pub id: String,
    #[serde(default)]
    pub display_name: String,
}

/// A cluster paired with the tenant owning it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cluster {
    cluster: ClusterInfo,
    tenant: TenantInfo,
}

impl Cluster {
    pub fn new(cluster: ClusterInfo, tenant: TenantInfo) -> Self {
        Self { cluster, tenant }
    }

    pub fn id(&self) -> &str {
        &self.cluster.id
    }

    pub fn display_name(&self) -> &str {
        &self.cluster.display_name
    }

    pub fn tenant_id(&self) -> &str {
        &self.cluster.tenant
    }

    pub fn tenant_display_name(&self) -> &str {
        &self.tenant.display_name
    }

    pub fn facts(&self) -> &BTreeMap<String, String> {
        &self.cluster.facts
    }

    pub fn catalog_repo_url(&self) -> &str {
        self.cluster
            .git_repo
            .as_ref()
            .and_then(|repo| repo.url.as_deref())
            .unwrap_or_default()
    }
}
