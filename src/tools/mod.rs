//! External collaborators invoked around compilation.

pub mod jsonnet_bundler;
pub mod kapitan;

pub use jsonnet_bundler::*;
pub use kapitan::*;

use crate::error::ToolError;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::process::Command;
use tracing::debug;

/// Everything the external compiler needs to compile a set of targets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompileRequest {
    pub inventory_dir: PathBuf,
    pub targets: Vec<String>,
    pub search_paths: Vec<PathBuf>,
    pub output_dir: PathBuf,
    pub fake_refs: bool,
    pub reveal: bool,
}

#[async_trait]
pub trait CatalogCompiler: Send + Sync {
    /// Compile the requested targets into `<output_dir>/compiled/<target>`.
    async fn compile(&self, request: &CompileRequest) -> Result<(), ToolError>;

    fn tool_name(&self) -> &'static str;
}

#[async_trait]
pub trait DependencyFetcher: Send + Sync {
    /// Materialize the libraries a component depends on inside its directory.
    async fn fetch(&self, component_dir: &Path) -> Result<(), ToolError>;

    fn tool_name(&self) -> &'static str;
}

/// Run a prepared command to completion, mapping failure to [`ToolError`].
pub(crate) async fn run_tool(tool: &str, mut cmd: Command) -> Result<(), ToolError> {
    debug!("Running {tool} command: {:?}", cmd);

    let output = cmd.output().await.map_err(|source| ToolError::Spawn {
        tool: tool.to_string(),
        source,
    })?;

    if !output.status.success() {
        return Err(ToolError::Failed {
            tool: tool.to_string(),
            status: output.status.to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    Ok(())
}
