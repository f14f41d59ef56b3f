//! Client for the Lieutenant API serving cluster and tenant facts.

use crate::cluster::{Cluster, ClusterInfo, TenantInfo};
use crate::error::{CommodoreError, Result};
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;
use url::Url;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

pub struct LieutenantClient {
    client: Client,
    api_url: Url,
    token: String,
}

impl LieutenantClient {
    pub fn new(api_url: Url, token: impl Into<String>) -> Result<Self> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            client,
            api_url,
            token: token.into(),
        })
    }

    /// URL of an API resource, keeping any path prefix of the base URL.
    pub fn endpoint(&self, kind: &str, id: &str) -> Result<Url> {
        let mut url = self.api_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                CommodoreError::Configuration(format!("API URL {} cannot be a base", self.api_url))
            })?
            .pop_if_empty()
            .push(kind)
            .push(id);
        Ok(url)
    }

    async fn get<T: DeserializeOwned>(&self, kind: &str, id: &str) -> Result<T> {
        let url = self.endpoint(kind, id)?;
        debug!("GET {url}");
        let response = self
            .client
            .get(url)
            .bearer_auth(&self.token)
            .send()
            .await?
            .error_for_status()?;
        Ok(response.json().await?)
    }

    pub async fn cluster(&self, cluster_id: &str) -> Result<ClusterInfo> {
        self.get("clusters", cluster_id).await
    }

    pub async fn tenant(&self, tenant_id: &str) -> Result<TenantInfo> {
        self.get("tenants", tenant_id).await
    }

    /// Fetch a cluster and the tenant it belongs to.
    pub async fn cluster_with_tenant(&self, cluster_id: &str) -> Result<Cluster> {
        let cluster = self.cluster(cluster_id).await?;
        let tenant = self.tenant(&cluster.tenant).await?;
        Ok(Cluster::new(cluster, tenant))
    }
}
