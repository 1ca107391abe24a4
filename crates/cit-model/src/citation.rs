//! Raw citation records as exported from the legacy bibliographic database.
//!
//! A [`RawCitation`] is read-only input: typed accessors for the descriptive
//! attributes plus the untyped legacy field bag (`data`) that carries the
//! citation identifier in `v880`.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{CitationError, Result};

/// Legacy field holding the citation identifier.
pub const CITATION_ID_TAG: &str = "v880";

/// Subfield code of the unlabeled legacy value.
pub const UNLABELED_SUBFIELD: &str = "_";

/// One occurrence of a legacy field: subfield code to text.
pub type LegacySubfields = BTreeMap<String, String>;

/// Person named in a citation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub surname: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub given_names: Option<String>,
}

impl Author {
    pub fn new(surname: impl Into<String>, given_names: impl Into<String>) -> Self {
        Self {
            surname: Some(surname.into()),
            given_names: Some(given_names.into()),
        }
    }

    pub fn surname_only(surname: impl Into<String>) -> Self {
        Self {
            surname: Some(surname.into()),
            given_names: None,
        }
    }

    /// `"Surname, Given Names"`, or whichever part is present.
    pub fn display_name(&self) -> String {
        [self.surname.as_deref(), self.given_names.as_deref()]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Kind of cited work.
///
/// Unrecognized legacy values are kept verbatim in [`PublicationType::Other`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PublicationType {
    Article,
    Book,
    Thesis,
    Conference,
    Link,
    Patent,
    #[default]
    Undefined,
    Other(String),
}

impl PublicationType {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Article => "article",
            Self::Book => "book",
            Self::Thesis => "thesis",
            Self::Conference => "conference",
            Self::Link => "link",
            Self::Patent => "patent",
            Self::Undefined => "undefined",
            Self::Other(value) => value,
        }
    }
}

impl From<String> for PublicationType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "article" => Self::Article,
            "book" => Self::Book,
            "thesis" => Self::Thesis,
            "conference" => Self::Conference,
            "link" => Self::Link,
            "patent" => Self::Patent,
            "undefined" | "" => Self::Undefined,
            _ => Self::Other(value),
        }
    }
}

impl From<&str> for PublicationType {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}

impl From<PublicationType> for String {
    fn from(value: PublicationType) -> Self {
        match value {
            PublicationType::Other(value) => value,
            other => other.as_str().to_string(),
        }
    }
}

impl fmt::Display for PublicationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single citation as extracted from the legacy record format.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawCitation {
    #[serde(default)]
    pub authors: Vec<Author>,
    #[serde(default)]
    pub analytic_authors: Vec<Author>,
    #[serde(default)]
    pub monographic_authors: Vec<Author>,

    #[serde(default)]
    pub article_title: Option<String>,
    #[serde(default)]
    pub chapter_title: Option<String>,
    #[serde(default)]
    pub thesis_title: Option<String>,
    #[serde(default)]
    pub conference_title: Option<String>,
    #[serde(default)]
    pub link_title: Option<String>,

    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub publisher: Option<String>,
    #[serde(default)]
    pub publisher_address: Option<String>,
    #[serde(default)]
    pub edition: Option<String>,
    #[serde(default)]
    pub serie: Option<String>,
    #[serde(default)]
    pub volume: Option<String>,
    #[serde(default)]
    pub issue: Option<String>,
    #[serde(default)]
    pub issn: Option<String>,
    #[serde(default)]
    pub isbn: Option<String>,
    #[serde(default)]
    pub institutions: Vec<String>,
    #[serde(default)]
    pub publication_date: Option<String>,
    #[serde(default)]
    pub publication_type: PublicationType,
    pub index_number: u32,

    /// Legacy field bag: tag to ordered occurrences.
    #[serde(default)]
    pub data: BTreeMap<String, Vec<LegacySubfields>>,
}

impl RawCitation {
    /// Title of the cited work, chosen by publication type.
    ///
    /// Books have no title here: their title is the source, and chapter
    /// titles are projected separately.
    pub fn title(&self) -> String {
        let title = match self.publication_type {
            PublicationType::Article => self.article_title.as_deref(),
            PublicationType::Thesis => self.thesis_title.as_deref(),
            PublicationType::Conference => self.conference_title.as_deref(),
            PublicationType::Link => self.link_title.as_deref(),
            _ => None,
        };
        title.unwrap_or_default().to_string()
    }

    /// Read a subfield of one occurrence of a legacy field.
    pub fn legacy_subfield(&self, tag: &str, occurrence: usize, code: &str) -> Result<&str> {
        let occurrences = self
            .data
            .get(tag)
            .ok_or_else(|| CitationError::MissingLegacyField {
                tag: tag.to_string(),
            })?;
        let subfields =
            occurrences
                .get(occurrence)
                .ok_or_else(|| CitationError::MissingOccurrence {
                    tag: tag.to_string(),
                    occurrence,
                })?;
        subfields
            .get(code)
            .map(String::as_str)
            .ok_or_else(|| CitationError::MissingSubfield {
                tag: tag.to_string(),
                code: code.to_string(),
            })
    }

    /// Legacy citation id: `v880[0]['_']`.
    pub fn citation_id(&self) -> Result<&str> {
        let id = self.legacy_subfield(CITATION_ID_TAG, 0, UNLABELED_SUBFIELD)?;
        if id.trim().is_empty() {
            return Err(CitationError::EmptyCitationId);
        }
        Ok(id)
    }

    /// Set `v880[0]['_']`, replacing any previous identifier.
    pub fn with_citation_id(mut self, id: impl Into<String>) -> Self {
        let mut subfields = LegacySubfields::new();
        subfields.insert(UNLABELED_SUBFIELD.to_string(), id.into());
        self.data
            .insert(CITATION_ID_TAG.to_string(), vec![subfields]);
        self
    }
}
