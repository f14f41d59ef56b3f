use super::options::{Commands, CommodoreCli, ComponentCommands, InventoryCommands};
use super::output::{print_cluster_and_tenant, print_compiled_component, print_rendered_inventory};
use crate::api::LieutenantClient;
use crate::cluster::{read_cluster_and_tenant, render_inventory, Cluster, Instance};
use crate::component::{compile_component, ComponentCompileRequest};
use crate::config::Config;
use crate::error::{CommodoreError, Result};
use crate::tools::{JsonnetBundler, KapitanCompiler};
use serde::de::DeserializeOwned;
use std::path::Path;
use tracing::info;

/// Execute the parsed command line, flushing deprecation notices at the end.
pub async fn run(cli: &CommodoreCli) -> Result<()> {
    let mut config = Config::from(cli);

    match &cli.command {
        Commands::Component(ComponentCommands::Compile {
            path,
            values,
            search_paths,
            output,
        }) => {
            let request = ComponentCompileRequest {
                component_path: path.clone(),
                value_files: values.clone(),
                search_paths: search_paths.clone(),
                output_path: output.clone(),
            };
            compile_command(&mut config, &request).await?;
        }
        Commands::Inventory(InventoryCommands::Render {
            cluster,
            cluster_file,
            tenant_file,
            components,
            aliases,
        }) => {
            let cluster = match (cluster, cluster_file, tenant_file) {
                (Some(id), _, _) => fetch_cluster(&config, id).await?,
                (None, Some(cluster_file), Some(tenant_file)) => {
                    load_cluster(cluster_file, tenant_file)?
                }
                _ => {
                    return Err(CommodoreError::Configuration(
                        "Either --cluster or --cluster-file and --tenant-file are required"
                            .to_string(),
                    ))
                }
            };
            let aliases = aliases
                .iter()
                .map(|spec| Instance::parse(spec))
                .collect::<std::result::Result<Vec<_>, _>>()?;
            render_command(&mut config, &cluster, components, &aliases)?;
        }
        Commands::Inventory(InventoryCommands::Show) => {
            let (cluster, tenant) = read_cluster_and_tenant(&config.inventory())?;
            print_cluster_and_tenant(&cluster, &tenant);
        }
    }

    config.print_deprecation_notices()?;
    Ok(())
}

async fn compile_command(config: &mut Config, request: &ComponentCompileRequest) -> Result<()> {
    println!("Compile component {}...", request.component_path.display());
    let compiled = compile_component(
        config,
        request,
        &KapitanCompiler::new(),
        &JsonnetBundler::new(),
    )
    .await?;
    print_compiled_component(&compiled);
    Ok(())
}

fn render_command(
    config: &mut Config,
    cluster: &Cluster,
    components: &[String],
    aliases: &[Instance],
) -> Result<()> {
    let rendered = render_inventory(config, cluster, components, aliases)?;
    print_rendered_inventory(&config.inventory(), &rendered);
    Ok(())
}

async fn fetch_cluster(config: &Config, cluster_id: &str) -> Result<Cluster> {
    let (Some(url), Some(token)) = (&config.api_url, &config.api_token) else {
        return Err(CommodoreError::Configuration(
            "--api-url and --api-token are required to fetch cluster facts".to_string(),
        ));
    };
    info!("Fetching cluster {cluster_id} from {url}");
    LieutenantClient::new(url.clone(), token.clone())?
        .cluster_with_tenant(cluster_id)
        .await
}

fn load_record<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = std::fs::read_to_string(path)?;
    Ok(serde_yaml::from_str(&content)?)
}

/// Load cluster and tenant records from files. JSON is read as YAML.
pub fn load_cluster(cluster_file: &Path, tenant_file: &Path) -> Result<Cluster> {
    Ok(Cluster::new(
        load_record(cluster_file)?,
        load_record(tenant_file)?,
    ))
}
