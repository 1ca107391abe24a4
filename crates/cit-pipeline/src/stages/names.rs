//! Person and institution name stages.

use cit_model::{Author, CitationDocument, FieldName, RawCitation, Result};
use cit_sanitize::author_name_quality;

use crate::stage::{CitationStage, emit_cleaned};

/// Emit one cleaned display name per author.
fn emit_authors(authors: &[Author], name: FieldName, doc: &mut CitationDocument) {
    for author in authors {
        emit_cleaned(doc, name, &author.display_name());
    }
}

/// Primary authors: `au`, each followed by its `cit_au_quality_level` when
/// the name has a quality level.
pub struct AuthorsStep;

impl CitationStage for AuthorsStep {
    fn step_name(&self) -> &str {
        "authors"
    }

    fn should_skip(&self, raw: &RawCitation, _doc: &CitationDocument) -> bool {
        raw.authors.is_empty()
    }

    fn execute(&self, raw: &RawCitation, doc: &mut CitationDocument) -> Result<()> {
        for author in &raw.authors {
            let Some(cleaned) = emit_cleaned(doc, FieldName::Author, &author.display_name())
            else {
                continue;
            };
            if let Some(quality) = author_name_quality(&cleaned) {
                doc.push(FieldName::AuthorQualityLevel, quality.to_string());
            }
        }
        Ok(())
    }
}

pub struct AnalyticAuthorsStep;

impl CitationStage for AnalyticAuthorsStep {
    fn step_name(&self) -> &str {
        "analytic_authors"
    }

    fn should_skip(&self, raw: &RawCitation, _doc: &CitationDocument) -> bool {
        raw.analytic_authors.is_empty()
    }

    fn execute(&self, raw: &RawCitation, doc: &mut CitationDocument) -> Result<()> {
        emit_authors(&raw.analytic_authors, FieldName::AnalyticAuthor, doc);
        Ok(())
    }
}

pub struct MonographicAuthorsStep;

impl CitationStage for MonographicAuthorsStep {
    fn step_name(&self) -> &str {
        "monographic_authors"
    }

    fn should_skip(&self, raw: &RawCitation, _doc: &CitationDocument) -> bool {
        raw.monographic_authors.is_empty()
    }

    fn execute(&self, raw: &RawCitation, doc: &mut CitationDocument) -> Result<()> {
        emit_authors(&raw.monographic_authors, FieldName::MonographicAuthor, doc);
        Ok(())
    }
}

/// Institutions are cleaned as given; there is no name assembly.
pub struct InstitutionsStep;

impl CitationStage for InstitutionsStep {
    fn step_name(&self) -> &str {
        "institutions"
    }

    fn should_skip(&self, raw: &RawCitation, _doc: &CitationDocument) -> bool {
        raw.institutions.is_empty()
    }

    fn execute(&self, raw: &RawCitation, doc: &mut CitationDocument) -> Result<()> {
        for institution in &raw.institutions {
            emit_cleaned(doc, FieldName::Institution, institution);
        }
        Ok(())
    }
}
