//! Single-valued descriptive stages.

use cit_model::{CitationDocument, FieldName, RawCitation, Result};

use crate::stage::{CitationStage, emit_cleaned, is_blank};

/// Append `value` verbatim when present and non-empty.
fn emit_raw(doc: &mut CitationDocument, name: FieldName, value: Option<&str>) {
    if let Some(value) = value.filter(|value| !value.is_empty()) {
        doc.push(name, value);
    }
}

pub struct EditionStep;

impl CitationStage for EditionStep {
    fn step_name(&self) -> &str {
        "edition"
    }

    fn should_skip(&self, raw: &RawCitation, _doc: &CitationDocument) -> bool {
        is_blank(raw.edition.as_deref())
    }

    fn execute(&self, raw: &RawCitation, doc: &mut CitationDocument) -> Result<()> {
        emit_raw(doc, FieldName::Edition, raw.edition.as_deref());
        Ok(())
    }
}

pub struct IsbnStep;

impl CitationStage for IsbnStep {
    fn step_name(&self) -> &str {
        "isbn"
    }

    fn should_skip(&self, raw: &RawCitation, _doc: &CitationDocument) -> bool {
        is_blank(raw.isbn.as_deref())
    }

    fn execute(&self, raw: &RawCitation, doc: &mut CitationDocument) -> Result<()> {
        emit_raw(doc, FieldName::Isbn, raw.isbn.as_deref());
        Ok(())
    }
}

pub struct IssnStep;

impl CitationStage for IssnStep {
    fn step_name(&self) -> &str {
        "issn"
    }

    fn should_skip(&self, raw: &RawCitation, _doc: &CitationDocument) -> bool {
        is_blank(raw.issn.as_deref())
    }

    fn execute(&self, raw: &RawCitation, doc: &mut CitationDocument) -> Result<()> {
        emit_raw(doc, FieldName::Issn, raw.issn.as_deref());
        Ok(())
    }
}

pub struct IssueStep;

impl CitationStage for IssueStep {
    fn step_name(&self) -> &str {
        "issue"
    }

    fn should_skip(&self, raw: &RawCitation, _doc: &CitationDocument) -> bool {
        is_blank(raw.issue.as_deref())
    }

    fn execute(&self, raw: &RawCitation, doc: &mut CitationDocument) -> Result<()> {
        emit_raw(doc, FieldName::Issue, raw.issue.as_deref());
        Ok(())
    }
}

pub struct SerieStep;

impl CitationStage for SerieStep {
    fn step_name(&self) -> &str {
        "serie"
    }

    fn should_skip(&self, raw: &RawCitation, _doc: &CitationDocument) -> bool {
        is_blank(raw.serie.as_deref())
    }

    fn execute(&self, raw: &RawCitation, doc: &mut CitationDocument) -> Result<()> {
        emit_raw(doc, FieldName::Serie, raw.serie.as_deref());
        Ok(())
    }
}

pub struct VolumeStep;

impl CitationStage for VolumeStep {
    fn step_name(&self) -> &str {
        "volume"
    }

    fn should_skip(&self, raw: &RawCitation, _doc: &CitationDocument) -> bool {
        is_blank(raw.volume.as_deref())
    }

    fn execute(&self, raw: &RawCitation, doc: &mut CitationDocument) -> Result<()> {
        emit_raw(doc, FieldName::Volume, raw.volume.as_deref());
        Ok(())
    }
}

/// Publisher name with trailing periods removed.
pub struct PublisherStep;

impl CitationStage for PublisherStep {
    fn step_name(&self) -> &str {
        "publisher"
    }

    fn should_skip(&self, raw: &RawCitation, _doc: &CitationDocument) -> bool {
        is_blank(raw.publisher.as_deref())
    }

    fn execute(&self, raw: &RawCitation, doc: &mut CitationDocument) -> Result<()> {
        if let Some(publisher) = raw.publisher.as_deref() {
            emit_cleaned(doc, FieldName::Publisher, publisher);
        }
        Ok(())
    }
}

/// Publisher city/address with trailing periods removed.
pub struct PublisherAddressStep;

impl CitationStage for PublisherAddressStep {
    fn step_name(&self) -> &str {
        "publisher_address"
    }

    fn should_skip(&self, raw: &RawCitation, _doc: &CitationDocument) -> bool {
        is_blank(raw.publisher_address.as_deref())
    }

    fn execute(&self, raw: &RawCitation, doc: &mut CitationDocument) -> Result<()> {
        if let Some(address) = raw.publisher_address.as_deref() {
            emit_cleaned(doc, FieldName::PublisherAddress, address);
        }
        Ok(())
    }
}

/// Position of the citation in the citing document's reference list.
pub struct IndexNumberStep;

impl CitationStage for IndexNumberStep {
    fn step_name(&self) -> &str {
        "index_number"
    }

    fn execute(&self, raw: &RawCitation, doc: &mut CitationDocument) -> Result<()> {
        doc.push(FieldName::IndexNumber, raw.index_number.to_string());
        Ok(())
    }
}

pub struct PublicationTypeStep;

impl CitationStage for PublicationTypeStep {
    fn step_name(&self) -> &str {
        "publication_type"
    }

    fn execute(&self, raw: &RawCitation, doc: &mut CitationDocument) -> Result<()> {
        doc.push(FieldName::PublicationType, raw.publication_type.as_str());
        Ok(())
    }
}
