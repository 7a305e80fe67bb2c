use shelfplot_render_core::RenderError;
use shelfplot_source::SourceError;
use shelfplot_traits::StoreError;
use thiserror::Error;

/// A comprehensive error type for the report pipeline.
///
/// Only input loading ends a run early. Per-chart problems are recorded on the
/// run report instead of surfacing here.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Loading inputs failed: {0}")]
    Source(#[from] SourceError),

    #[error("Rendering failed: {0}")]
    Render(#[from] RenderError),

    #[error("Artifact store error: {0}")]
    Store(#[from] StoreError),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<handlebars::TemplateError> for PipelineError {
    fn from(e: handlebars::TemplateError) -> Self {
        PipelineError::Render(RenderError::from(e))
    }
}

impl From<handlebars::RenderError> for PipelineError {
    fn from(e: handlebars::RenderError) -> Self {
        PipelineError::Render(RenderError::from(e))
    }
}
