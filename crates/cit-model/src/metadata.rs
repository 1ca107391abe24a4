//! Normalized journal metadata supplied by an external matching service.
//!
//! Records are keyed by composite citation id (`{citation-id}-{collection}`)
//! and loaded once, before any citation is processed.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CitationError, Result};

/// Record type that carries journal metadata.
pub const JOURNAL_ARTICLE: &str = "journal-article";

/// Compose the join key shared by identifiers and external metadata.
pub fn composite_id(citation_id: &str, collection: &str) -> String {
    format!("{citation_id}-{collection}")
}

/// External metadata for one citation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalRecord {
    #[serde(rename = "type", default)]
    pub record_type: Option<String>,

    #[serde(rename = "container-title", default)]
    pub container_title: Vec<String>,

    #[serde(rename = "ISSN", default)]
    pub issn: Vec<String>,

    /// Alternate ISSNs matched by the normalization service.
    #[serde(rename = "BC1-ISSNS", default)]
    pub alternate_issns: Vec<String>,

    /// Alternate journal titles matched by the normalization service.
    #[serde(rename = "BC1-JOURNAL-TITLES", default)]
    pub alternate_journal_titles: Vec<String>,

    #[serde(rename = "normalization-status", default)]
    pub normalization_status: Option<String>,
}

impl ExternalRecord {
    pub fn is_journal_article(&self) -> bool {
        self.record_type.as_deref() == Some(JOURNAL_ARTICLE)
    }
}

/// Read-only lookup from composite id to [`ExternalRecord`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExternalMetadata {
    records: HashMap<String, ExternalRecord>,
}

impl ExternalMetadata {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a JSON object mapping composite ids to records.
    pub fn from_path(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|source| CitationError::io(path, source))?;
        serde_json::from_str(&contents).map_err(|source| CitationError::Json {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn insert(&mut self, composite_id: impl Into<String>, record: ExternalRecord) {
        self.records.insert(composite_id.into(), record);
    }

    pub fn get(&self, composite_id: &str) -> Option<&ExternalRecord> {
        self.records.get(composite_id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl FromIterator<(String, ExternalRecord)> for ExternalMetadata {
    fn from_iter<I: IntoIterator<Item = (String, ExternalRecord)>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}
