use super::{run_tool, CatalogCompiler, CompileRequest};
use crate::error::ToolError;
use async_trait::async_trait;
use std::path::PathBuf;
use tokio::process::Command;
use tracing::info;

/// Compiles targets by shelling out to the `kapitan` binary.
#[derive(Debug, Clone)]
pub struct KapitanCompiler {
    binary: PathBuf,
}

impl Default for KapitanCompiler {
    fn default() -> Self {
        Self::new()
    }
}

impl KapitanCompiler {
    pub fn new() -> Self {
        Self {
            binary: PathBuf::from("kapitan"),
        }
    }

    pub fn with_binary(binary: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
        }
    }

    pub fn build_command(&self, request: &CompileRequest) -> Command {
        let mut cmd = Command::new(&self.binary);
        cmd.arg("compile");
        cmd.arg("--inventory-path").arg(&request.inventory_dir);
        cmd.arg("--output-path").arg(&request.output_dir);

        if !request.search_paths.is_empty() {
            cmd.arg("--search-paths");
            cmd.args(&request.search_paths);
        }
        if !request.targets.is_empty() {
            cmd.arg("--targets");
            cmd.args(&request.targets);
        }
        if request.fake_refs {
            cmd.arg("--fake-refs");
        }
        if request.reveal {
            cmd.arg("--reveal");
        }
        cmd
    }
}

#[async_trait]
impl CatalogCompiler for KapitanCompiler {
    async fn compile(&self, request: &CompileRequest) -> Result<(), ToolError> {
        info!("Compiling targets {:?}", request.targets);
        run_tool(self.tool_name(), self.build_command(request)).await
    }

    fn tool_name(&self) -> &'static str {
        "kapitan"
    }
}
