//! Components: versioned configuration bundles compiled into targets.

pub mod compile;
pub mod fixtures;

pub use compile::*;

use std::path::{Path, PathBuf};

const DIRECTORY_PREFIX: &str = "component-";

/// Key under which a component's parameters live in the parameter tree.
///
/// Hyphens are not valid in parameter references, so every `-` becomes `_`.
pub fn parameters_key(name: &str) -> String {
    name.replace('-', "_")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Component {
    name: String,
    directory: PathBuf,
}

impl Component {
    pub fn new(name: impl Into<String>, directory: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            directory: directory.into(),
        }
    }

    /// Build a component from its checkout, deriving the name from the
    /// directory name without the conventional `component-` prefix.
    pub fn from_directory(directory: impl Into<PathBuf>) -> Self {
        let directory = directory.into();
        let dir_name = directory
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let name = dir_name
            .strip_prefix(DIRECTORY_PREFIX)
            .unwrap_or(&dir_name)
            .to_string();
        Self { name, directory }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn parameters_key(&self) -> String {
        parameters_key(&self.name)
    }

    pub fn target_directory(&self) -> &Path {
        &self.directory
    }

    pub fn class_file(&self) -> PathBuf {
        self.directory.join("class").join(format!("{}.yml", self.name))
    }

    pub fn defaults_file(&self) -> PathBuf {
        self.directory.join("class").join("defaults.yml")
    }

    pub fn lib_directory(&self) -> PathBuf {
        self.directory.join("lib")
    }

    pub fn jsonnetfile(&self) -> PathBuf {
        self.directory.join("jsonnetfile.json")
    }
}
