//! Per-run context threaded through every command.

pub mod aliases;
pub mod deprecation;

pub use aliases::*;
pub use deprecation::*;

use crate::component::Component;
use crate::error::ValidationError;
use crate::inventory::Inventory;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use url::Url;

/// State of a single run. Built once from the command line and dropped when
/// the run ends.
#[derive(Debug, Clone)]
pub struct Config {
    work_dir: PathBuf,
    pub verbosity: u8,
    /// Keep temporary workspaces around after the run.
    pub trace: bool,
    pub api_url: Option<Url>,
    pub api_token: Option<String>,
    components: BTreeMap<String, Component>,
    aliases: ComponentAliases,
    notices: DeprecationNotices,
}

impl Config {
    pub fn new(work_dir: impl Into<PathBuf>) -> Self {
        Self {
            work_dir: work_dir.into(),
            verbosity: 0,
            trace: false,
            api_url: None,
            api_token: None,
            components: BTreeMap::new(),
            aliases: ComponentAliases::new(),
            notices: DeprecationNotices::new(),
        }
    }

    pub fn with_api(mut self, url: Url, token: impl Into<String>) -> Self {
        self.api_url = Some(url);
        self.api_token = Some(token.into());
        self
    }

    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    pub fn inventory(&self) -> Inventory {
        Inventory::new(&self.work_dir)
    }

    pub fn debug(&self) -> bool {
        self.verbosity >= 2
    }

    pub fn register_component(&mut self, component: Component) {
        self.components
            .insert(component.name().to_string(), component);
    }

    pub fn get_components(&self) -> &BTreeMap<String, Component> {
        &self.components
    }

    pub fn register_component_aliases(&mut self, aliases: BTreeMap<String, String>) {
        self.aliases.register(aliases);
    }

    pub fn get_component_aliases(&self) -> &BTreeMap<String, String> {
        self.aliases.get()
    }

    pub fn verify_component_aliases(&self, params: &Map<String, Value>) -> Result<(), ValidationError> {
        self.aliases.verify(params)
    }

    pub fn register_component_deprecations(&mut self, params: &Map<String, Value>) {
        self.notices.register_component_deprecations(params);
    }

    pub fn register_deprecation_notice(&mut self, notice: impl Into<String>) {
        self.notices.register(notice);
    }

    pub fn deprecation_notices(&self) -> &[String] {
        self.notices.notices()
    }

    pub fn write_deprecation_notices(&self, out: &mut impl std::io::Write) -> std::io::Result<()> {
        self.notices.write_to(out)
    }

    pub fn print_deprecation_notices(&self) -> std::io::Result<()> {
        let stdout = std::io::stdout();
        self.write_deprecation_notices(&mut stdout.lock())
    }
}
