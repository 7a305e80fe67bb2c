use super::exporter::BatchExporter;
use super::index::{IndexBuilder, IndexDocument};
use crate::error::PipelineError;
use log::{error, info, warn};
use shelfplot_core::{
    ChartSpec, NormalizeError, NormalizeFailure, NormalizeResult, normalize_advanced,
    normalize_domain, select_shape,
};
use shelfplot_render_core::DocumentRenderer;
use shelfplot_source::{AggregateSource, InputSet};
use shelfplot_traits::ArtifactStore;
use shelfplot_types::ExportRecord;
use std::collections::HashSet;
use std::sync::Arc;
use std::time::Instant;

/// The outcome of one run.
#[derive(Debug)]
pub struct RunReport {
    /// One record per selected chart, in export order.
    pub exports: Vec<ExportRecord>,
    /// Records and shapes that never became a chart.
    pub skipped: Vec<NormalizeFailure>,
    /// The written index, or why it could not be written.
    pub index: Result<IndexDocument, String>,
}

impl RunReport {
    pub fn successes(&self) -> impl Iterator<Item = &ExportRecord> {
        self.exports.iter().filter(|record| record.is_success())
    }

    pub fn failures(&self) -> impl Iterator<Item = &ExportRecord> {
        self.exports.iter().filter(|record| !record.is_success())
    }

    /// Failed exports plus skipped records and shapes.
    pub fn failure_count(&self) -> usize {
        self.failures().count() + self.skipped.len()
    }
}

/// The report pipeline: load, normalize, select, export, index.
pub struct ReportPipeline {
    source: Box<dyn AggregateSource>,
    store: Arc<dyn ArtifactStore>,
    renderer: Arc<dyn DocumentRenderer>,
    index: IndexBuilder,
}

impl ReportPipeline {
    pub(super) fn new(
        source: Box<dyn AggregateSource>,
        store: Arc<dyn ArtifactStore>,
        renderer: Arc<dyn DocumentRenderer>,
        index: IndexBuilder,
    ) -> Self {
        Self {
            source,
            store,
            renderer,
            index,
        }
    }

    /// Runs the whole pipeline once.
    ///
    /// Returns `Err` only when the inputs cannot be loaded. Every other problem
    /// is confined to the chart it affects and listed on the [`RunReport`].
    pub fn run(&self) -> Result<RunReport, PipelineError> {
        let start = Instant::now();
        let inputs = self.source.load()?;

        let (specs, skipped) = plan_charts(&inputs);
        info!(
            "Planned {} charts ({} skipped) from {}",
            specs.len(),
            skipped.len(),
            self.source.name()
        );

        let exporter = BatchExporter::new(Arc::clone(&self.renderer), Arc::clone(&self.store));
        let exports = exporter.export_all(&specs);

        let document = self.index.build_index(&exports);
        let index = self
            .index
            .write(document, self.store.as_ref())
            .map_err(|e| {
                error!("Writing index '{}' failed: {}", self.index.file_name(), e);
                e.to_string()
            });

        let report = RunReport {
            exports,
            skipped,
            index,
        };
        info!(
            "Run finished in {:.2?}: {} exported, {} failed",
            start.elapsed(),
            report.successes().count(),
            report.failure_count()
        );
        Ok(report)
    }
}

/// Normalizes and selects every chart of a run without writing anything.
///
/// Charts come back in export order: each domain's records in document
/// order, then the advanced-analysis sections. A shape whose output id was
/// already taken by an earlier chart is skipped rather than overwriting it.
pub fn plan_charts(inputs: &InputSet) -> (Vec<ChartSpec>, Vec<NormalizeFailure>) {
    let mut results: Vec<NormalizeResult> = Vec::new();
    for document in &inputs.domains {
        for record in &document.records {
            match record {
                Ok(raw) => results.extend(normalize_domain(document.domain, raw)),
                Err(e) => results.push(Err(NormalizeFailure::record(
                    e.domain,
                    e.index,
                    e.message.clone(),
                ))),
            }
        }
    }
    results.extend(normalize_advanced(&inputs.advanced));

    let mut specs = Vec::with_capacity(results.len());
    let mut skipped = Vec::new();
    let mut seen = HashSet::new();
    for result in results {
        let shape = match result {
            Ok(shape) => shape,
            Err(failure) => {
                warn!("Skipping {failure}");
                skipped.push(failure);
                continue;
            }
        };

        let output_id = shape.output_id();
        if !seen.insert(output_id.clone()) {
            let failure =
                NormalizeFailure::shape(shape.key, NormalizeError::DuplicateOutputId(output_id));
            warn!("Skipping {failure}");
            skipped.push(failure);
            continue;
        }

        let key = shape.key.clone();
        match select_shape(shape) {
            Ok(spec) => specs.push(spec),
            Err(e) => {
                let failure = NormalizeFailure::shape(key, e.into());
                warn!("Skipping {failure}");
                skipped.push(failure);
            }
        }
    }
    (specs, skipped)
}
