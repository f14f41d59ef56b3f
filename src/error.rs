use std::path::PathBuf;
use thiserror::Error;

/// User-facing problems with the configuration a run was asked to render.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Required fact '{fact}' not set")]
    MissingFact { fact: String },

    #[error("Required fact '{fact}' is empty")]
    EmptyFact { fact: String },

    #[error("Target name must not be empty")]
    EmptyTargetName,

    #[error("Cannot render target {target}: no components known to the cluster")]
    NoComponents { target: String },

    #[error("Target {target} is not a component")]
    NotAComponent { target: String },

    #[error("Could not find component class file for {component}: {path}")]
    MissingClassFile { component: String, path: PathBuf },

    #[error("Could not find component default file for {component}: {path}")]
    MissingDefaultsFile { component: String, path: PathBuf },

    #[error("Component {component} is multi-instance but has no namespace")]
    MissingNamespace { component: String },

    #[error("Alias {alias} refers to unknown component {component}")]
    UnresolvableAlias { alias: String, component: String },

    #[error("Instance name {alias} is used more than once")]
    DuplicateAlias { alias: String },

    #[error("Instance name {name} is reserved for the bootstrap target")]
    ReservedTargetName { name: String },

    #[error("Invalid instance name '{name}'")]
    InvalidInstanceName { name: String },

    #[error("Invalid alias specification '{spec}', expected ALIAS=COMPONENT")]
    InvalidAliasSpec { spec: String },
}

/// A required key is absent from a persisted inventory file.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("Key '{key}' not found in {path}")]
    MissingKey { key: String, path: PathBuf },
}

#[derive(Debug, Error)]
pub enum ToolError {
    #[error("Failed to run {tool}: {source}")]
    Spawn {
        tool: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{tool} exited with {status}: {stderr}")]
    Failed {
        tool: String,
        status: String,
        stderr: String,
    },
}

#[derive(Debug, Error)]
pub enum CommodoreError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Lookup(#[from] LookupError),

    #[error(transparent)]
    Tool(#[from] ToolError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("API request failed: {0}")]
    Api(#[from] reqwest::Error),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

pub type Result<T> = std::result::Result<T, CommodoreError>;
