use crate::error::{DecideError, Result};
use crate::output::OutputFormat;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const CONFIG_FILE: &str = "config.json";

/// Where the record files live (relative to `.decide/`) and how to print them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecideConfig {
    pub stakeholders: String,
    pub frameworks: String,
    pub projects: String,
    pub default_output: OutputFormat,
}

impl Default for DecideConfig {
    fn default() -> Self {
        DecideConfig {
            stakeholders: "stakeholder_contexts.yaml".into(),
            frameworks: "decision_frameworks.yaml".into(),
            projects: "projects.yaml".into(),
            default_output: OutputFormat::Table,
        }
    }
}

pub fn read_config(path: &Path) -> Result<DecideConfig> {
    let content = fs::read_to_string(path).map_err(|e| DecideError::io(path, e))?;
    serde_json::from_str(&content).map_err(|source| DecideError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Read the config in `dir`, falling back to defaults when there is none.
pub fn load_or_default(dir: &Path) -> Result<DecideConfig> {
    let path = dir.join(CONFIG_FILE);
    if path.exists() {
        read_config(&path)
    } else {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        Ok(DecideConfig::default())
    }
}

pub fn write_config(path: &Path, config: &DecideConfig) -> Result<()> {
    let content = serde_json::to_string_pretty(config).map_err(|source| DecideError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    fs::write(path, content).map_err(|e| DecideError::io(path, e))
}
