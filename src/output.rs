//! Output formatting for lookups

use crate::error::{DecideError, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Aligned key/value text
    #[default]
    Table,
    Json,
    Yaml,
}

/// Render a record as JSON or YAML. `Table` is rendered by each command.
pub fn to_structured<T: Serialize>(data: &T, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => {
            serde_json::to_string_pretty(data).map_err(|e| DecideError::Serialize(e.to_string()))
        }
        OutputFormat::Yaml | OutputFormat::Table => serde_yaml::to_string(data)
            .map(|s| s.trim_end().to_string())
            .map_err(|e| DecideError::Serialize(e.to_string())),
    }
}

pub fn field(label: &str, value: impl std::fmt::Display) -> String {
    format!("{:<16} {}", format!("{}:", label), value)
}
