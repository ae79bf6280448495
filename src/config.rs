//! Dataset loading.
//!
//! The console dataset is hand-authored configuration, not live state. It
//! is deserialized once by whatever composes the derivation and rendering
//! layers and passed into them explicitly; nothing in this crate holds it
//! as a process-wide singleton.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ConsoleError;
use crate::model::{Layer, Module, Workflow};

/// The full console dataset: layers, modules, and workflows.
///
/// All sections default to empty so a partial dataset stays loadable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardData {
    pub layers: Vec<Layer>,
    pub modules: Vec<Module>,
    pub workflows: Vec<Workflow>,
}

impl DashboardData {
    /// Parse a YAML dataset.
    ///
    /// Validation beyond the record shapes is not performed; unknown
    /// status and risk strings land on their `Unknown` variants.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConsoleError> {
        let data: DashboardData = serde_yaml::from_str(yaml)?;
        Ok(data)
    }

    /// Parse a JSON dataset.
    pub fn from_json_str(json: &str) -> Result<Self, ConsoleError> {
        let data: DashboardData = serde_json::from_str(json)?;
        Ok(data)
    }

    /// Load a dataset from disk, picking the parser from the extension.
    pub fn load(path: &Path) -> Result<Self, ConsoleError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConsoleError::DatasetIo {
            path: path.to_path_buf(),
            source,
        })?;
        let data = match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml") | Some("yml") => Self::from_yaml_str(&raw)?,
            Some("json") => Self::from_json_str(&raw)?,
            _ => {
                return Err(ConsoleError::UnsupportedFormat {
                    path: path.to_path_buf(),
                })
            }
        };
        debug!(
            path = %path.display(),
            layers = data.layers.len(),
            modules = data.modules.len(),
            workflows = data.workflows.len(),
            "dataset loaded"
        );
        Ok(data)
    }

    /// The dataset bundled with the crate - the console's default content.
    pub fn bundled() -> Result<Self, ConsoleError> {
        Self::from_yaml_str(include_str!("../data/console.yaml"))
    }
}
