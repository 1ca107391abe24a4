//! Citation transformation pipeline.
//!
//! A raw citation is projected into a flat [`CitationDocument`] by an ordered
//! list of stages. Each stage handles one attribute (authors, title, dates,
//! identifiers, external metadata), is skipped when the citation has no value
//! for it, and only ever appends fields.
//!
//! - **stage**: the [`CitationStage`] trait shared by every stage
//! - **stages**: the concrete stages
//! - **pipeline**: the runner and the default stage order
//!
//! [`CitationDocument`]: cit_model::CitationDocument

pub mod error;
pub mod pipeline;
pub mod stage;
pub mod stages;

pub use error::PipelineError;
pub use pipeline::{CitationPipeline, PipelineState, build_default_pipeline};
pub use stage::CitationStage;
