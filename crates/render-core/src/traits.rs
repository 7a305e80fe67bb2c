use crate::error::RenderError;
use crate::figure::Figure;

/// A renderer turning a declarative figure into a standalone document.
///
/// Renderers are pure: the same figure and output id always produce the same
/// bytes. Writing the document somewhere durable is the caller's concern.
pub trait DocumentRenderer: Send + Sync {
    /// The native file extension of rendered documents, without the dot.
    fn extension(&self) -> &'static str;

    /// Renders `figure` as the document stored under `output_id`.
    fn render(&self, figure: &Figure, output_id: &str) -> Result<Vec<u8>, RenderError>;
}
