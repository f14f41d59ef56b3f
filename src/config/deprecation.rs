use serde_json::{Map, Value};
use std::io::Write;

const NOTICES_HEADER: &str = "Commodore notices:";

/// Advisory notices collected during a run and shown once at its end.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeprecationNotices {
    notices: Vec<String>,
}

impl DeprecationNotices {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, notice: impl Into<String>) {
        self.notices.push(notice.into());
    }

    pub fn notices(&self) -> &[String] {
        &self.notices
    }

    pub fn is_empty(&self) -> bool {
        self.notices.is_empty()
    }

    /// Add one notice per component whose metadata marks it deprecated.
    ///
    /// Metadata is read from the block's `_metadata` map, or from the block
    /// itself when it has none.
    pub fn register_component_deprecations(&mut self, params: &Map<String, Value>) {
        for (component, block) in params {
            let metadata = block
                .get("_metadata")
                .filter(|m| m.is_object())
                .unwrap_or(block);
            let deprecated = metadata
                .get("deprecated")
                .and_then(Value::as_bool)
                .unwrap_or(false);
            if !deprecated {
                continue;
            }

            let mut notice = format!("Component {component} is deprecated.");
            if let Some(replacement) = metadata.get("replaced_by").and_then(Value::as_str) {
                notice.push_str(&format!(" Use component {replacement} instead."));
            }
            if let Some(text) = metadata.get("deprecation_notice").and_then(Value::as_str) {
                notice.push_str(&format!(" {text}"));
            }
            self.register(notice);
        }
    }

    /// Write the notice block. Writes nothing at all when there are no notices.
    pub fn write_to(&self, out: &mut impl Write) -> std::io::Result<()> {
        if self.notices.is_empty() {
            return Ok(());
        }
        writeln!(out)?;
        writeln!(out, "{NOTICES_HEADER}")?;
        for notice in &self.notices {
            writeln!(out, " > {notice}")?;
        }
        Ok(())
    }
}
