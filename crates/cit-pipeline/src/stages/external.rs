//! Enrichment from externally normalized journal metadata.

use std::sync::Arc;

use cit_model::{
    CitationDocument, CitationError, ExternalMetadata, ExternalRecord, FieldName, RawCitation,
    Result, composite_id,
};
use tracing::trace;

use crate::stage::CitationStage;

/// Canonical and normalized journal fields for `journal-article` matches.
///
/// `cit_normalization_status` is emitted only when at least one journal
/// field was emitted.
pub struct ExternalMetadataStep {
    metadata: Arc<ExternalMetadata>,
    collection: String,
}

impl ExternalMetadataStep {
    pub fn new(metadata: Arc<ExternalMetadata>, collection: impl Into<String>) -> Self {
        Self {
            metadata,
            collection: collection.into(),
        }
    }
}

impl CitationStage for ExternalMetadataStep {
    fn step_name(&self) -> &str {
        "external_metadata"
    }

    fn execute(&self, raw: &RawCitation, doc: &mut CitationDocument) -> Result<()> {
        let id = composite_id(raw.citation_id()?, &self.collection);
        let Some(record) = self.metadata.get(&id) else {
            trace!(citation_id = %id, "no external metadata");
            return Ok(());
        };
        if !record.is_journal_article() {
            return Ok(());
        }
        if !has_journal_fields(record) {
            return Ok(());
        }
        let status = record
            .normalization_status
            .as_deref()
            .ok_or_else(|| CitationError::MissingNormalizationStatus { id: id.clone() })?;

        if let Some(title) = record.container_title.first() {
            doc.push(FieldName::JournalTitleCanonical, title.as_str());
        }
        for issn in &record.issn {
            doc.push(FieldName::JournalIssnCanonical, issn.as_str());
        }
        for issn in &record.alternate_issns {
            doc.push(FieldName::JournalIssnNormalized, issn.as_str());
        }
        for title in &record.alternate_journal_titles {
            doc.push(FieldName::JournalTitleNormalized, title.as_str());
        }
        doc.push(FieldName::NormalizationStatus, status);
        Ok(())
    }
}

fn has_journal_fields(record: &ExternalRecord) -> bool {
    !record.container_title.is_empty()
        || !record.issn.is_empty()
        || !record.alternate_issns.is_empty()
        || !record.alternate_journal_titles.is_empty()
}
