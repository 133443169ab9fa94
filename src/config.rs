use crate::error::LoadError;
use crate::query::DEFAULT_PAGE_SIZE;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// User-facing settings for a [`Bar`](crate::bar::Bar).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BarConfig {
    /// Whether an in-stock substitute satisfies a missing requirement.
    pub allow_substitutions: bool,
    pub page_size: usize,
}

impl Default for BarConfig {
    fn default() -> Self {
        Self {
            allow_substitutions: true,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl BarConfig {
    /// Loads settings from a JSON file. Missing keys keep their defaults.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| LoadError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::from_json(&content)
    }

    pub fn from_json(content: &str) -> Result<Self, LoadError> {
        let config: Self = serde_json::from_str(content).map_err(|e| LoadError::Parse {
            what: "configuration".to_string(),
            message: e.to_string(),
        })?;
        Ok(config.normalized())
    }

    pub(crate) fn normalized(mut self) -> Self {
        if self.page_size == 0 {
            self.page_size = DEFAULT_PAGE_SIZE;
        }
        self
    }
}
