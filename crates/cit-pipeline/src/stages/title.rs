//! Title, chapter title and source stages.

use cit_model::{CitationDocument, FieldName, PublicationType, RawCitation, Result};

use crate::stage::{CitationStage, emit_cleaned, is_blank};

/// Derived title of the cited work.
///
/// Runs for every citation; an empty cleaned title emits nothing.
pub struct TitleStep;

impl CitationStage for TitleStep {
    fn step_name(&self) -> &str {
        "title"
    }

    fn execute(&self, raw: &RawCitation, doc: &mut CitationDocument) -> Result<()> {
        emit_cleaned(doc, FieldName::Title, &raw.title());
        Ok(())
    }
}

/// Chapter title, indexed both as `ti` and `cit_chapter_title`.
pub struct ChapterTitleStep;

impl CitationStage for ChapterTitleStep {
    fn step_name(&self) -> &str {
        "chapter_title"
    }

    fn should_skip(&self, raw: &RawCitation, _doc: &CitationDocument) -> bool {
        is_blank(raw.chapter_title.as_deref())
    }

    fn execute(&self, raw: &RawCitation, doc: &mut CitationDocument) -> Result<()> {
        let Some(chapter_title) = raw.chapter_title.as_deref() else {
            return Ok(());
        };
        if let Some(cleaned) = emit_cleaned(doc, FieldName::Title, chapter_title) {
            doc.push(FieldName::ChapterTitle, cleaned);
        }
        Ok(())
    }
}

/// Journal title for articles, source for everything else.
///
/// Books also index their source as `ti`.
pub struct SourceStep;

impl CitationStage for SourceStep {
    fn step_name(&self) -> &str {
        "source"
    }

    fn should_skip(&self, raw: &RawCitation, _doc: &CitationDocument) -> bool {
        is_blank(raw.source.as_deref())
    }

    fn execute(&self, raw: &RawCitation, doc: &mut CitationDocument) -> Result<()> {
        let Some(source) = raw.source.as_deref() else {
            return Ok(());
        };
        let name = match raw.publication_type {
            PublicationType::Article => FieldName::JournalTitle,
            _ => FieldName::Source,
        };
        if let Some(cleaned) = emit_cleaned(doc, name, source)
            && raw.publication_type == PublicationType::Book
        {
            doc.push(FieldName::Title, cleaned);
        }
        Ok(())
    }
}
