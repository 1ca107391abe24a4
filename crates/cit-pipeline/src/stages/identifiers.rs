//! Identifier and collection stages.
//!
//! Both identifiers are derived from the legacy citation id (`v880[0]['_']`).
//! Its last [`REFERENCE_SUFFIX_LEN`] characters number the reference inside
//! the citing document, so dropping them yields the citing document's id.

use cit_model::{CitationDocument, CitationError, FieldName, RawCitation, Result, composite_id};

use crate::stage::CitationStage;

/// Width of the reference ordinal at the end of a citation id.
pub const REFERENCE_SUFFIX_LEN: usize = 5;

/// `{citation-id}-{collection}` as `id`.
pub struct DocumentIdStep {
    collection: String,
}

impl DocumentIdStep {
    pub fn new(collection: impl Into<String>) -> Self {
        Self {
            collection: collection.into(),
        }
    }
}

impl CitationStage for DocumentIdStep {
    fn step_name(&self) -> &str {
        "document_id"
    }

    fn execute(&self, raw: &RawCitation, doc: &mut CitationDocument) -> Result<()> {
        let citation_id = raw.citation_id()?;
        doc.push(FieldName::Id, composite_id(citation_id, &self.collection));
        Ok(())
    }
}

/// `{citing-document-id}-{collection}` as `document_fk`.
pub struct DocumentFkStep {
    collection: String,
}

impl DocumentFkStep {
    pub fn new(collection: impl Into<String>) -> Self {
        Self {
            collection: collection.into(),
        }
    }
}

impl CitationStage for DocumentFkStep {
    fn step_name(&self) -> &str {
        "document_fk"
    }

    fn execute(&self, raw: &RawCitation, doc: &mut CitationDocument) -> Result<()> {
        let citation_id = raw.citation_id()?;
        let document_id = strip_reference_suffix(citation_id)?;
        doc.push(
            FieldName::DocumentFk,
            composite_id(document_id, &self.collection),
        );
        Ok(())
    }
}

fn strip_reference_suffix(citation_id: &str) -> Result<&str> {
    let char_count = citation_id.chars().count();
    if char_count <= REFERENCE_SUFFIX_LEN {
        return Err(CitationError::CitationIdTooShort {
            id: citation_id.to_string(),
            suffix: REFERENCE_SUFFIX_LEN,
        });
    }
    let end = citation_id
        .char_indices()
        .nth(char_count - REFERENCE_SUFFIX_LEN)
        .map_or(citation_id.len(), |(index, _)| index);
    Ok(&citation_id[..end])
}

/// Collection acronym as `in`.
pub struct CollectionStep {
    collection: String,
}

impl CollectionStep {
    pub fn new(collection: impl Into<String>) -> Self {
        Self {
            collection: collection.into(),
        }
    }
}

impl CitationStage for CollectionStep {
    fn step_name(&self) -> &str {
        "collection"
    }

    fn execute(&self, _raw: &RawCitation, doc: &mut CitationDocument) -> Result<()> {
        doc.push(FieldName::Collection, self.collection.as_str());
        Ok(())
    }
}
