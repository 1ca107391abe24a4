use cit_model::CitationError;
use thiserror::Error;

/// A citation run aborted by one of its stages.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("stage {stage} failed: {source}")]
    Stage {
        stage: String,
        #[source]
        source: CitationError,
    },
}

impl PipelineError {
    pub fn stage_name(&self) -> &str {
        match self {
            Self::Stage { stage, .. } => stage,
        }
    }
}
