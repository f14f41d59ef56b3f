use super::fixtures::{component_target, fixture_params, ARGOCD_LIBRARY};
use super::Component;
use crate::config::Config;
use crate::error::{Result, ValidationError};
use crate::files::{relsymlink, write_yaml};
use crate::inventory::Inventory;
use crate::tools::{CatalogCompiler, CompileRequest, DependencyFetcher};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

const WORKSPACE_PREFIX: &str = "component-";

/// Inputs for compiling a single component outside of a cluster catalog.
#[derive(Debug, Clone, Default)]
pub struct ComponentCompileRequest {
    pub component_path: PathBuf,
    /// Extra classes layered on top of the component, in order.
    pub value_files: Vec<PathBuf>,
    pub search_paths: Vec<PathBuf>,
    pub output_path: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledComponent {
    pub name: String,
    pub output_dir: PathBuf,
    /// Workspace left on disk when tracing.
    pub kept_workspace: Option<PathBuf>,
}

/// Compile one component against a synthetic test cluster.
///
/// Works inside a fresh temporary workspace that is removed on every exit
/// path unless `config.trace` is set.
pub async fn compile_component(
    config: &mut Config,
    request: &ComponentCompileRequest,
    compiler: &dyn CatalogCompiler,
    fetcher: &dyn DependencyFetcher,
) -> Result<CompiledComponent> {
    let component_path = request.component_path.canonicalize()?;
    let value_files = request
        .value_files
        .iter()
        .map(|f| f.canonicalize())
        .collect::<std::io::Result<Vec<_>>>()?;
    let mut search_paths = request
        .search_paths
        .iter()
        .map(|d| d.canonicalize())
        .collect::<std::io::Result<Vec<_>>>()?;
    search_paths.push(component_path.join("vendor"));
    let output_path = std::path::absolute(&request.output_path)?;

    let component = Component::from_directory(&component_path);
    info!("Compile component {}", component.name());

    let temp_dir = tempfile::Builder::new()
        .prefix(WORKSPACE_PREFIX)
        .tempdir()?;
    let workspace = temp_dir.path().canonicalize()?;
    debug!("Created temp workspace: {}", workspace.display());

    config.register_component(component.clone());
    let result = compile_in_workspace(
        &Inventory::new(&workspace),
        &component,
        &value_files,
        search_paths,
        &output_path,
        compiler,
        fetcher,
    )
    .await;

    let kept_workspace = if config.trace {
        Some(temp_dir.keep())
    } else {
        debug!("Remove temp dir {}", workspace.display());
        if let Err(e) = temp_dir.close() {
            warn!("Failed to remove temp dir {}: {e}", workspace.display());
        }
        None
    };

    let output_dir = result?;
    Ok(CompiledComponent {
        name: component.name().to_string(),
        output_dir,
        kept_workspace,
    })
}

async fn compile_in_workspace(
    inv: &Inventory,
    component: &Component,
    value_files: &[PathBuf],
    mut search_paths: Vec<PathBuf>,
    output_path: &Path,
    compiler: &dyn CatalogCompiler,
    fetcher: &dyn DependencyFetcher,
) -> Result<PathBuf> {
    let name = component.name();
    inv.ensure_dirs()?;
    search_paths.push(inv.dependencies_dir());

    prepare_fake_inventory(inv, component, value_files)?;
    write_yaml(&inv.params_file(), &fixture_params(name))?;
    write_yaml(
        &inv.target_file(name),
        &component_target(inv, name, value_files),
    )?;
    std::fs::write(inv.lib_dir().join("argocd.libjsonnet"), ARGOCD_LIBRARY)?;

    fetcher.fetch(component.target_directory()).await?;

    compiler
        .compile(&CompileRequest {
            inventory_dir: inv.inventory_dir(),
            targets: vec![name.to_string()],
            search_paths,
            output_dir: output_path.to_path_buf(),
            fake_refs: true,
            reveal: true,
        })
        .await?;

    Ok(output_path.join("compiled").join(name))
}

/// Link the component's class, defaults, checkout and value classes into the
/// workspace inventory.
pub fn prepare_fake_inventory(
    inv: &Inventory,
    component: &Component,
    value_files: &[PathBuf],
) -> Result<()> {
    let class_file = component.class_file();
    if !class_file.is_file() {
        return Err(ValidationError::MissingClassFile {
            component: component.name().to_string(),
            path: class_file,
        }
        .into());
    }
    let defaults_file = component.defaults_file();
    if !defaults_file.is_file() {
        return Err(ValidationError::MissingDefaultsFile {
            component: component.name().to_string(),
            path: defaults_file,
        }
        .into());
    }

    relsymlink(&class_file, &inv.components_dir(), None)?;
    relsymlink(
        &defaults_file,
        &inv.defaults_dir(),
        Some(&format!("{}.yml", component.name())),
    )?;
    relsymlink(
        component.target_directory(),
        &inv.dependencies_dir(),
        Some(component.name()),
    )?;
    for file in value_files {
        relsymlink(file, &inv.classes_dir(), None)?;
    }
    Ok(())
}
