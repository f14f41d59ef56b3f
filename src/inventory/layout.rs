use std::path::{Path, PathBuf};
use tracing::debug;

const BOOTSTRAP_TARGET: &str = "cluster";

/// Directory layout of a working directory's inventory.
///
/// All paths are derived from the working directory; nothing is read from
/// disk except by [`Inventory::ensure_dirs`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inventory {
    work_dir: PathBuf,
}

impl Inventory {
    pub fn new(work_dir: impl Into<PathBuf>) -> Self {
        Self {
            work_dir: work_dir.into(),
        }
    }

    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Name of the target carrying cluster-wide parameters.
    pub fn bootstrap_target(&self) -> &'static str {
        BOOTSTRAP_TARGET
    }

    pub fn inventory_dir(&self) -> PathBuf {
        self.work_dir.join("inventory")
    }

    pub fn classes_dir(&self) -> PathBuf {
        self.inventory_dir().join("classes")
    }

    pub fn components_dir(&self) -> PathBuf {
        self.classes_dir().join("components")
    }

    pub fn defaults_dir(&self) -> PathBuf {
        self.classes_dir().join("defaults")
    }

    pub fn params_dir(&self) -> PathBuf {
        self.classes_dir().join("params")
    }

    pub fn global_config_dir(&self) -> PathBuf {
        self.classes_dir().join("global")
    }

    pub fn tenant_config_dir(&self, tenant: &str) -> PathBuf {
        self.classes_dir().join(tenant)
    }

    pub fn targets_dir(&self) -> PathBuf {
        self.inventory_dir().join("targets")
    }

    pub fn lib_dir(&self) -> PathBuf {
        self.work_dir.join("lib")
    }

    pub fn libs_dir(&self) -> PathBuf {
        self.work_dir.join("vendor").join("lib")
    }

    pub fn dependencies_dir(&self) -> PathBuf {
        self.work_dir.join("dependencies")
    }

    pub fn output_dir(&self) -> PathBuf {
        self.work_dir.join("compiled")
    }

    pub fn params_file(&self) -> PathBuf {
        self.params_dir().join(format!("{BOOTSTRAP_TARGET}.yml"))
    }

    pub fn target_file(&self, target: &str) -> PathBuf {
        self.targets_dir().join(format!("{target}.yml"))
    }

    pub fn defaults_file(&self, component: &str) -> PathBuf {
        self.defaults_dir().join(format!("{component}.yml"))
    }

    pub fn component_file(&self, component: &str) -> PathBuf {
        self.components_dir().join(format!("{component}.yml"))
    }

    /// Create every directory the inventory needs. Safe to call repeatedly.
    pub fn ensure_dirs(&self) -> std::io::Result<()> {
        for dir in [
            self.classes_dir(),
            self.components_dir(),
            self.defaults_dir(),
            self.params_dir(),
            self.lib_dir(),
            self.libs_dir(),
            self.targets_dir(),
            self.dependencies_dir(),
        ] {
            debug!("Ensuring directory {}", dir.display());
            std::fs::create_dir_all(&dir)?;
        }
        Ok(())
    }
}
