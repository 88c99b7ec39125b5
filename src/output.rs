//! Rendering of query results for the command line.

use crate::types::HistoryOrder;
use serde::Serialize;

/// Result of one query, ready to print
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "query", rename_all = "snake_case")]
pub enum QueryOutput {
    History { order: HistoryOrder, hashes: Vec<String> },
    Oldest { hash: Option<String> },
    Name { name: Option<String> },
    Exists { exists: bool },
}

impl QueryOutput {
    /// Whether the query found what it was asked for
    pub fn is_found(&self) -> bool {
        match self {
            QueryOutput::History { .. } => true,
            QueryOutput::Oldest { hash } => hash.is_some(),
            QueryOutput::Name { name } => name.is_some(),
            QueryOutput::Exists { exists } => *exists,
        }
    }

    /// Plain text: one value per line, nothing at all for an absent value
    pub fn render_plain(&self) -> String {
        match self {
            QueryOutput::History { hashes, .. } => hashes.iter().map(|h| format!("{}\n", h)).collect(),
            QueryOutput::Oldest { hash: Some(value) } | QueryOutput::Name { name: Some(value) } => {
                format!("{}\n", value)
            }
            QueryOutput::Oldest { hash: None } | QueryOutput::Name { name: None } => String::new(),
            QueryOutput::Exists { exists } => format!("{}\n", exists),
        }
    }

    pub fn render_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self).map(|s| s + "\n")
    }
}
