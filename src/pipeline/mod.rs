//! Report pipeline orchestration.
//!
//! - [`PipelineBuilder`]: Fluent builder for constructing report pipelines
//! - [`ReportConfig`]: Input locations, output root and render options
//! - [`BatchExporter`]: Renders and stores one artifact per chart
//! - [`IndexBuilder`]: Builds and writes the navigation page
//! - [`ReportPipeline`]: Runs every stage and returns a [`RunReport`]

mod builder;
pub mod config;
mod exporter;
mod index;
mod orchestrator;

pub use builder::PipelineBuilder;
pub use config::ReportConfig;
pub use exporter::BatchExporter;
pub use index::{IndexBuilder, IndexDocument, IndexEntry};
pub use orchestrator::{ReportPipeline, RunReport, plan_charts};
