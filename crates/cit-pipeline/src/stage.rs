//! The contract shared by every pipeline stage.

use cit_model::{CitationDocument, FieldName, RawCitation, Result};
use cit_sanitize::remove_period;

/// One attribute projection of the citation pipeline.
///
/// Stages hold only construction-time configuration, so one instance can be
/// shared across threads and reused for any number of citations.
///
/// # Example
///
/// ```ignore
/// struct VolumeStep;
///
/// impl CitationStage for VolumeStep {
///     fn step_name(&self) -> &str {
///         "volume"
///     }
///
///     fn should_skip(&self, raw: &RawCitation, _doc: &CitationDocument) -> bool {
///         is_blank(raw.volume.as_deref())
///     }
///
///     fn execute(&self, raw: &RawCitation, doc: &mut CitationDocument) -> Result<()> {
///         // append fields
///         Ok(())
///     }
/// }
/// ```
pub trait CitationStage: Send + Sync {
    /// Name used in logs and for [`remove_step`](crate::CitationPipeline::remove_step).
    fn step_name(&self) -> &str;

    /// Whether the citation has nothing for this stage.
    ///
    /// A skipped stage leaves the document untouched. Default: never skip.
    fn should_skip(&self, _raw: &RawCitation, _doc: &CitationDocument) -> bool {
        false
    }

    /// Append this stage's fields to `doc`.
    ///
    /// # Errors
    ///
    /// Returns an error only for structural defects in the raw record, such
    /// as a missing citation identifier.
    fn execute(&self, raw: &RawCitation, doc: &mut CitationDocument) -> Result<()>;
}

/// True for absent or empty values.
pub(crate) fn is_blank(value: Option<&str>) -> bool {
    value.is_none_or(str::is_empty)
}

/// Clean `text` and append it under `name` unless cleaning left nothing.
///
/// Returns the cleaned text when a field was emitted.
pub(crate) fn emit_cleaned(
    doc: &mut CitationDocument,
    name: FieldName,
    text: &str,
) -> Option<String> {
    let cleaned = remove_period(text);
    if cleaned.is_empty() {
        return None;
    }
    doc.push(name, cleaned.as_str());
    Some(cleaned)
}
