//! Ordered stage execution for a single citation.
//!
//! # Default Stage Order
//!
//! 1. Identifiers: `document_id`, `document_fk`, `collection`
//! 2. Bookkeeping: `index_number`, `publication_type`
//! 3. Names: `authors`, `analytic_authors`, `monographic_authors`
//! 4. `publication_date`, `institutions`
//! 5. Titles: `title`, `chapter_title`, `source`
//! 6. Descriptive: `serie`, `issn`, `isbn`, `issue`, `volume`, `edition`,
//!    `publisher`, `publisher_address`
//! 7. `external_metadata`
//!
//! # Example
//!
//! ```ignore
//! use cit_pipeline::build_default_pipeline;
//!
//! let pipeline = build_default_pipeline("scl", metadata);
//! let doc = pipeline.execute(&raw)?;
//! ```

use std::sync::Arc;

use cit_model::{CitationDocument, ExternalMetadata, RawCitation};
use tracing::{debug, debug_span, trace};

use crate::error::PipelineError;
use crate::stage::CitationStage;
use crate::stages::{
    AnalyticAuthorsStep, AuthorsStep, ChapterTitleStep, CollectionStep, DocumentFkStep,
    DocumentIdStep, EditionStep, ExternalMetadataStep, IndexNumberStep, InstitutionsStep,
    IsbnStep, IssnStep, IssueStep, MonographicAuthorsStep, PublicationDateStep,
    PublicationTypeStep, PublisherAddressStep, PublisherStep, SerieStep, SourceStep,
    TitleStep, VolumeStep,
};

/// Per-run record of which stages ran and which were skipped.
#[derive(Debug, Default)]
pub struct PipelineState {
    pub executed_steps: Vec<String>,
    pub skipped_steps: Vec<String>,
}

impl PipelineState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// An ordered list of citation stages.
pub struct CitationPipeline {
    steps: Vec<Box<dyn CitationStage>>,
}

impl Default for CitationPipeline {
    fn default() -> Self {
        Self::new()
    }
}

impl CitationPipeline {
    /// Create an empty pipeline.
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    /// Add a step to the end of the pipeline.
    pub fn add_step(mut self, step: Box<dyn CitationStage>) -> Self {
        self.steps.push(step);
        self
    }

    /// Insert a step at a specific position.
    pub fn insert_step(mut self, index: usize, step: Box<dyn CitationStage>) -> Self {
        self.steps.insert(index, step);
        self
    }

    /// Remove a step by name.
    pub fn remove_step(mut self, step_name: &str) -> Self {
        self.steps.retain(|s| s.step_name() != step_name);
        self
    }

    /// List step names in execution order.
    pub fn step_names(&self) -> Vec<&str> {
        self.steps.iter().map(|s| s.step_name()).collect()
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Project one citation into a fresh document.
    pub fn execute(&self, raw: &RawCitation) -> Result<CitationDocument, PipelineError> {
        let mut doc = CitationDocument::new();
        let mut state = PipelineState::new();
        self.execute_with_state(raw, &mut doc, &mut state)?;
        Ok(doc)
    }

    /// Run every step in order against `doc`.
    ///
    /// The first failing step aborts the run; `doc` then holds a partial
    /// projection and should be discarded.
    pub fn execute_with_state(
        &self,
        raw: &RawCitation,
        doc: &mut CitationDocument,
        state: &mut PipelineState,
    ) -> Result<(), PipelineError> {
        let citation_id = raw.citation_id().unwrap_or_default();
        let span = debug_span!("citation", citation_id, index_number = raw.index_number);
        let _guard = span.enter();

        for step in &self.steps {
            let name = step.step_name();
            if step.should_skip(raw, doc) {
                debug!(step = name, "precondition unmet, skipping");
                state.skipped_steps.push(name.to_string());
                continue;
            }
            let before = doc.len();
            step.execute(raw, doc)
                .map_err(|source| PipelineError::Stage {
                    stage: name.to_string(),
                    source,
                })?;
            trace!(step = name, fields = doc.len() - before, "step executed");
            state.executed_steps.push(name.to_string());
        }
        Ok(())
    }
}

/// Build the standard citation pipeline for one collection.
pub fn build_default_pipeline(
    collection: &str,
    metadata: Arc<ExternalMetadata>,
) -> CitationPipeline {
    CitationPipeline::new()
        .add_step(Box::new(DocumentIdStep::new(collection)))
        .add_step(Box::new(DocumentFkStep::new(collection)))
        .add_step(Box::new(CollectionStep::new(collection)))
        .add_step(Box::new(IndexNumberStep))
        .add_step(Box::new(PublicationTypeStep))
        .add_step(Box::new(AuthorsStep))
        .add_step(Box::new(AnalyticAuthorsStep))
        .add_step(Box::new(MonographicAuthorsStep))
        .add_step(Box::new(PublicationDateStep))
        .add_step(Box::new(InstitutionsStep))
        .add_step(Box::new(TitleStep))
        .add_step(Box::new(ChapterTitleStep))
        .add_step(Box::new(SourceStep))
        .add_step(Box::new(SerieStep))
        .add_step(Box::new(IssnStep))
        .add_step(Box::new(IsbnStep))
        .add_step(Box::new(IssueStep))
        .add_step(Box::new(VolumeStep))
        .add_step(Box::new(EditionStep))
        .add_step(Box::new(PublisherStep))
        .add_step(Box::new(PublisherAddressStep))
        .add_step(Box::new(ExternalMetadataStep::new(metadata, collection)))
}
