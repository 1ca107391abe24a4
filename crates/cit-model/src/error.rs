use std::path::PathBuf;

use thiserror::Error;

/// Structural defects found while projecting a citation.
///
/// A missing optional attribute is never one of these; stages skip instead.
#[derive(Debug, Error)]
pub enum CitationError {
    #[error("legacy field {tag} is missing")]
    MissingLegacyField { tag: String },

    #[error("legacy field {tag} has no occurrence {occurrence}")]
    MissingOccurrence { tag: String, occurrence: usize },

    #[error("legacy field {tag} has no subfield '{code}'")]
    MissingSubfield { tag: String, code: String },

    #[error("citation id is empty")]
    EmptyCitationId,

    #[error("citation id {id} is too short to drop a {suffix}-character reference suffix")]
    CitationIdTooShort { id: String, suffix: usize },

    #[error("external metadata for {id} carries no normalization status")]
    MissingNormalizationStatus { id: String },

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse JSON {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl CitationError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, CitationError>;
