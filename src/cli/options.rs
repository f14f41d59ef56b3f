use crate::config::Config;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use url::Url;

/// Main commodore CLI interface
#[derive(Parser, Debug)]
#[command(name = "commodore")]
#[command(about = "Render cluster inventories and compile components with Kapitan")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct CommodoreCli {
    #[command(subcommand)]
    pub command: Commands,

    /// Working directory holding the inventory
    #[arg(long, global = true, default_value = ".")]
    pub working_dir: PathBuf,

    /// Enable verbose output (repeat for more)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbosity: u8,

    /// Keep temporary workspaces for inspection
    #[arg(long, global = true)]
    pub trace: bool,

    /// Lieutenant API URL
    #[arg(long, global = true, env = "COMMODORE_API_URL")]
    pub api_url: Option<Url>,

    /// Lieutenant API token
    #[arg(long, global = true, env = "COMMODORE_API_TOKEN", hide_env_values = true)]
    pub api_token: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Work with a single component
    #[command(subcommand)]
    Component(ComponentCommands),

    /// Render and inspect a cluster inventory
    #[command(subcommand)]
    Inventory(InventoryCommands),
}

#[derive(Subcommand, Debug)]
pub enum ComponentCommands {
    /// Compile a component against a synthetic test cluster
    Compile {
        /// Path to the component checkout
        path: PathBuf,
        /// Additional value classes, applied in order
        #[arg(short = 'f', long = "values")]
        values: Vec<PathBuf>,
        /// Additional Jsonnet search paths
        #[arg(short = 'J', long = "search-paths")]
        search_paths: Vec<PathBuf>,
        /// Output directory for compiled manifests
        #[arg(short, long, default_value = ".")]
        output: PathBuf,
    },
}

#[derive(Subcommand, Debug)]
pub enum InventoryCommands {
    /// Render cluster parameters and targets into the working directory
    Render {
        /// Cluster id to fetch from the Lieutenant API
        #[arg(long, conflicts_with_all = ["cluster_file", "tenant_file"], required_unless_present = "cluster_file")]
        cluster: Option<String>,
        /// Cluster record (JSON or YAML)
        #[arg(long, requires = "tenant_file")]
        cluster_file: Option<PathBuf>,
        /// Tenant record (JSON or YAML)
        #[arg(long, requires = "cluster_file")]
        tenant_file: Option<PathBuf>,
        /// Component deployed on the cluster, in class order
        #[arg(short = 'c', long = "component")]
        components: Vec<String>,
        /// Additional component instance as ALIAS=COMPONENT
        #[arg(short = 'a', long = "alias")]
        aliases: Vec<String>,
    },

    /// Show cluster and tenant of the rendered inventory
    Show,
}

impl From<&CommodoreCli> for Config {
    fn from(cli: &CommodoreCli) -> Self {
        let mut config = Config::new(&cli.working_dir);
        config.verbosity = cli.verbosity;
        config.trace = cli.trace;
        config.api_url = cli.api_url.clone();
        config.api_token = cli.api_token.clone();
        config
    }
}
