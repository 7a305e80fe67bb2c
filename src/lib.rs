//! # shelfplot
//!
//! Assembles a browsable chart report from pre-aggregated media analytics.
//!
//! A run loads the per-domain summary documents and the advanced-analysis
//! document, normalizes every aggregate into a canonical shape, selects a chart
//! for each shape, exports one standalone page per chart and finally writes an
//! index page linking every chart that was exported.
//!
//! ```no_run
//! use shelfplot::PipelineBuilder;
//!
//! let pipeline = PipelineBuilder::new()
//!     .with_project_root("/srv/media-stats")
//!     .build()?;
//! let report = pipeline.run()?;
//! println!("{} charts exported", report.successes().count());
//! # Ok::<(), shelfplot::PipelineError>(())
//! ```
//!
//! The crate also ships the notebook output stripper used to keep analysis
//! notebooks small in version control; see [`notebook`].

pub mod error;
pub mod notebook;
pub mod pipeline;

pub use error::PipelineError;
pub use pipeline::{
    BatchExporter, IndexBuilder, IndexDocument, IndexEntry, PipelineBuilder, ReportConfig,
    ReportPipeline, RunReport, plan_charts,
};

// Re-export the types callers need to drive or inspect a run.
pub use shelfplot_core::{ChartSpec, FailureContext, NormalizeError, NormalizeFailure};
pub use shelfplot_render_core::{DocumentRenderer, PlotlyHtmlRenderer, RenderConfig, RenderError};
pub use shelfplot_resource::FilesystemArtifactStore;
pub use shelfplot_source::{
    AggregateSource, FileAggregateSource, InMemoryAggregateSource, InputPaths, SourceError,
};
pub use shelfplot_traits::{ArtifactStore, InMemoryArtifactStore, StoreError};
pub use shelfplot_types::{Domain, ExportOutcome, ExportRecord, OutputId};
