use super::{run_tool, DependencyFetcher};
use crate::error::ToolError;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::process::Command;
use tracing::{debug, info};

const JSONNETFILE: &str = "jsonnetfile.json";

/// Installs a component's Jsonnet libraries with `jb install`.
#[derive(Debug, Clone)]
pub struct JsonnetBundler {
    binary: PathBuf,
}

impl Default for JsonnetBundler {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonnetBundler {
    pub fn new() -> Self {
        Self {
            binary: PathBuf::from("jb"),
        }
    }

    pub fn with_binary(binary: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
        }
    }
}

#[async_trait]
impl DependencyFetcher for JsonnetBundler {
    async fn fetch(&self, component_dir: &Path) -> Result<(), ToolError> {
        if !component_dir.join(JSONNETFILE).is_file() {
            debug!("No {JSONNETFILE} in {}, nothing to fetch", component_dir.display());
            return Ok(());
        }

        info!("Fetching Jsonnet libraries for {}", component_dir.display());
        let mut cmd = Command::new(&self.binary);
        cmd.arg("install").current_dir(component_dir);
        run_tool(self.tool_name(), cmd).await
    }

    fn tool_name(&self) -> &'static str {
        "jb"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_without_jsonnetfile_does_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let fetcher = JsonnetBundler::with_binary("/nonexistent/jb");
        assert!(fetcher.fetch(temp_dir.path()).await.is_ok());
    }

    #[tokio::test]
    async fn test_with_jsonnetfile_runs_tool() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join(JSONNETFILE), "{}").unwrap();
        let fetcher = JsonnetBundler::with_binary("/nonexistent/jb");

        let err = fetcher.fetch(temp_dir.path()).await.unwrap_err();
        assert!(matches!(err, ToolError::Spawn { tool, .. } if tool == "jb"));
    }
}
