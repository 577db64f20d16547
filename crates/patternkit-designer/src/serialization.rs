//! Serialization and deserialization for pattern documents.
//!
//! A pattern document is JSON holding the figures plus descriptive
//! metadata. Derived data (`measures`) travels with the figures but is
//! recomputed on the next commit, so stale values in a file are harmless.

use anyhow::{bail, Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use patternkit_core::PageSettings;

use crate::model::Figure;

/// Pattern file format version
pub const FILE_FORMAT_VERSION: &str = "1.0";

/// Complete pattern file structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatternFile {
    pub version: String,
    pub metadata: PatternMetadata,
    /// Page setup saved with the pattern, overriding the application default
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<PageSettings>,
    pub figures: Vec<Figure>,
}

/// Pattern metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatternMetadata {
    pub name: String,
    pub created: DateTime<Utc>,
    pub modified: DateTime<Utc>,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub description: String,
}

impl PatternFile {
    /// Create an empty pattern document
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            version: FILE_FORMAT_VERSION.to_string(),
            metadata: PatternMetadata {
                name: name.into(),
                created: now,
                modified: now,
                author: String::new(),
                description: String::new(),
            },
            page: None,
            figures: Vec::new(),
        }
    }

    pub fn with_figures(mut self, figures: Vec<Figure>) -> Self {
        self.figures = figures;
        self
    }

    /// Parse a pattern document
    pub fn from_json(json: &str) -> Result<Self> {
        let file: PatternFile =
            serde_json::from_str(json).context("Failed to parse pattern file")?;
        let major = file.version.split('.').next().unwrap_or_default();
        if major != "1" {
            bail!("Unsupported pattern file version {}", file.version);
        }
        Ok(file)
    }

    /// Serialize to pretty-printed JSON, stamping the modification time
    pub fn to_json(&mut self) -> Result<String> {
        self.metadata.modified = Utc::now();
        serde_json::to_string_pretty(self).context("Failed to serialize pattern")
    }
}
