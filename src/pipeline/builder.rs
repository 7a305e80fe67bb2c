use super::config::{InputPaths, RenderConfig, ReportConfig};
use super::index::IndexBuilder;
use super::orchestrator::ReportPipeline;
use crate::error::PipelineError;
use shelfplot_render_core::{DocumentRenderer, PlotlyHtmlRenderer};
use shelfplot_resource::FilesystemArtifactStore;
use shelfplot_source::{AggregateSource, FileAggregateSource};
use shelfplot_traits::ArtifactStore;
use std::path::PathBuf;
use std::sync::Arc;

/// A builder for creating a `ReportPipeline`.
///
/// Sources, stores and renderers default to the on-disk implementations
/// derived from the [`ReportConfig`]; each can be replaced, which is how tests
/// run the pipeline entirely in memory.
#[derive(Default)]
pub struct PipelineBuilder {
    config: ReportConfig,
    source: Option<Box<dyn AggregateSource>>,
    store: Option<Arc<dyn ArtifactStore>>,
    renderer: Option<Arc<dyn DocumentRenderer>>,
}

impl PipelineBuilder {
    /// Creates a new `PipelineBuilder` with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the whole configuration.
    pub fn with_config(mut self, config: ReportConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets the directory input paths and the output directory are resolved against.
    pub fn with_project_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.config.project_root = root.into();
        self
    }

    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.output_dir = dir.into();
        self
    }

    pub fn with_inputs(mut self, inputs: InputPaths) -> Self {
        self.config.inputs = inputs;
        self
    }

    pub fn with_index_file_name(mut self, name: impl Into<String>) -> Self {
        self.config.index_file_name = name.into();
        self
    }

    pub fn with_render_config(mut self, render: RenderConfig) -> Self {
        self.config.render = render;
        self
    }

    /// Reads inputs from `source` instead of the configured files.
    pub fn with_source(mut self, source: Box<dyn AggregateSource>) -> Self {
        self.source = Some(source);
        self
    }

    /// Writes artifacts to `store` instead of the configured output directory.
    pub fn with_store(mut self, store: Arc<dyn ArtifactStore>) -> Self {
        self.store = Some(store);
        self
    }

    pub fn with_renderer(mut self, renderer: Arc<dyn DocumentRenderer>) -> Self {
        self.renderer = Some(renderer);
        self
    }

    /// Consumes the builder and creates the `ReportPipeline`.
    pub fn build(self) -> Result<ReportPipeline, PipelineError> {
        let config = self.config;
        if config.index_file_name.trim().is_empty() {
            return Err(PipelineError::Config(
                "The index file name must not be empty.".to_string(),
            ));
        }

        let source = match self.source {
            Some(source) => source,
            None => Box::new(FileAggregateSource::new(
                &config.project_root,
                config.inputs.clone(),
            )),
        };
        let store: Arc<dyn ArtifactStore> = match self.store {
            Some(store) => store,
            None => Arc::new(FilesystemArtifactStore::new(config.output_root())),
        };
        let renderer: Arc<dyn DocumentRenderer> = match self.renderer {
            Some(renderer) => renderer,
            None => Arc::new(PlotlyHtmlRenderer::new(config.render.clone())?),
        };
        let index = IndexBuilder::new(config.index_file_name.clone())?;

        log::info!(
            "Report pipeline ready: source={}, store={}",
            source.name(),
            store.name()
        );
        Ok(ReportPipeline::new(source, store, renderer, index))
    }
}
