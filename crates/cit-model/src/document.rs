//! Flat, append-only output document built by the citation pipeline.

use std::fmt;

use serde::{Serialize, Serializer};

/// Every field name the pipeline can emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FieldName {
    Id,
    DocumentFk,
    Collection,
    IndexNumber,
    PublicationType,
    Author,
    AuthorQualityLevel,
    AnalyticAuthor,
    MonographicAuthor,
    PublicationDate,
    DateQualityLevel,
    Institution,
    Title,
    ChapterTitle,
    JournalTitle,
    Source,
    Serie,
    Issn,
    Isbn,
    Issue,
    Volume,
    Edition,
    Publisher,
    PublisherAddress,
    JournalTitleCanonical,
    JournalIssnCanonical,
    JournalIssnNormalized,
    JournalTitleNormalized,
    NormalizationStatus,
}

impl FieldName {
    pub const ALL: [FieldName; 29] = [
        Self::Id,
        Self::DocumentFk,
        Self::Collection,
        Self::IndexNumber,
        Self::PublicationType,
        Self::Author,
        Self::AuthorQualityLevel,
        Self::AnalyticAuthor,
        Self::MonographicAuthor,
        Self::PublicationDate,
        Self::DateQualityLevel,
        Self::Institution,
        Self::Title,
        Self::ChapterTitle,
        Self::JournalTitle,
        Self::Source,
        Self::Serie,
        Self::Issn,
        Self::Isbn,
        Self::Issue,
        Self::Volume,
        Self::Edition,
        Self::Publisher,
        Self::PublisherAddress,
        Self::JournalTitleCanonical,
        Self::JournalIssnCanonical,
        Self::JournalIssnNormalized,
        Self::JournalTitleNormalized,
        Self::NormalizationStatus,
    ];

    /// Name as written to the search index.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::DocumentFk => "document_fk",
            Self::Collection => "in",
            Self::IndexNumber => "cit_index_number",
            Self::PublicationType => "cit_type",
            Self::Author => "au",
            Self::AuthorQualityLevel => "cit_au_quality_level",
            Self::AnalyticAuthor => "cit_ana_au",
            Self::MonographicAuthor => "cit_mon_au",
            Self::PublicationDate => "da",
            Self::DateQualityLevel => "cit_da_quality_level",
            Self::Institution => "cit_inst",
            Self::Title => "ti",
            Self::ChapterTitle => "cit_chapter_title",
            Self::JournalTitle => "cit_journal_title",
            Self::Source => "cit_source",
            Self::Serie => "cit_serie",
            Self::Issn => "cit_issn",
            Self::Isbn => "cit_isbn",
            Self::Issue => "issue",
            Self::Volume => "volume",
            Self::Edition => "cit_edition",
            Self::Publisher => "cit_publisher",
            Self::PublisherAddress => "cit_publisher_address",
            Self::JournalTitleCanonical => "cit_journal_title_canonical",
            Self::JournalIssnCanonical => "cit_journal_issn_canonical",
            Self::JournalIssnNormalized => "cit_journal_issn_normalized",
            Self::JournalTitleNormalized => "cit_journal_title_normalized",
            Self::NormalizationStatus => "cit_normalization_status",
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for FieldName {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// A `(name, text)` pair of the output document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Field {
    pub name: FieldName,
    pub text: String,
}

impl Field {
    pub fn new(name: FieldName, text: impl Into<String>) -> Self {
        Self {
            name,
            text: text.into(),
        }
    }
}

/// Ordered sequence of emitted fields.
///
/// Fields keep emission order and are never removed or rewritten; names may
/// repeat.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CitationDocument {
    fields: Vec<Field>,
}

impl CitationDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a field.
    pub fn push(&mut self, name: FieldName, text: impl Into<String>) {
        self.fields.push(Field::new(name, text));
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Field> {
        self.fields.iter()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// All texts emitted under `name`, in order.
    pub fn values(&self, name: FieldName) -> Vec<&str> {
        self.fields
            .iter()
            .filter(|field| field.name == name)
            .map(|field| field.text.as_str())
            .collect()
    }

    pub fn first(&self, name: FieldName) -> Option<&str> {
        self.fields
            .iter()
            .find(|field| field.name == name)
            .map(|field| field.text.as_str())
    }

    pub fn contains(&self, name: FieldName) -> bool {
        self.fields.iter().any(|field| field.name == name)
    }
}

impl<'a> IntoIterator for &'a CitationDocument {
    type Item = &'a Field;
    type IntoIter = std::slice::Iter<'a, Field>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}
