use cit_model::{CitationDocument, FieldName, RawCitation, Result};
use cit_sanitize::date_quality;

use crate::stage::{CitationStage, is_blank};

/// Publication date as written, followed by `cit_da_quality_level` when the
/// date has a quality level.
pub struct PublicationDateStep;

impl CitationStage for PublicationDateStep {
    fn step_name(&self) -> &str {
        "publication_date"
    }

    fn should_skip(&self, raw: &RawCitation, _doc: &CitationDocument) -> bool {
        is_blank(raw.publication_date.as_deref())
    }

    fn execute(&self, raw: &RawCitation, doc: &mut CitationDocument) -> Result<()> {
        let Some(date) = raw.publication_date.as_deref() else {
            return Ok(());
        };
        doc.push(FieldName::PublicationDate, date);
        if let Some(quality) = date_quality(date) {
            doc.push(FieldName::DateQualityLevel, quality.to_string());
        }
        Ok(())
    }
}
