use log::{error, info, warn};
use shelfplot_core::ChartSpec;
use shelfplot_render_core::DocumentRenderer;
use shelfplot_traits::ArtifactStore;
use shelfplot_types::ExportRecord;
use std::sync::Arc;

/// Renders every chart and stores the result, one artifact per chart.
///
/// A failure is recorded on the chart's [`ExportRecord`] and the batch moves
/// on; records come back in input order.
pub struct BatchExporter {
    renderer: Arc<dyn DocumentRenderer>,
    store: Arc<dyn ArtifactStore>,
}

impl BatchExporter {
    pub fn new(renderer: Arc<dyn DocumentRenderer>, store: Arc<dyn ArtifactStore>) -> Self {
        Self { renderer, store }
    }

    /// Exports `specs` in order.
    ///
    /// The store is prepared once up front. If that fails, nothing can be
    /// written and every chart is recorded as failed with the same cause.
    pub fn export_all(&self, specs: &[ChartSpec]) -> Vec<ExportRecord> {
        if let Err(e) = self.store.prepare() {
            error!("Could not prepare {}: {}", self.store.name(), e);
            let cause = format!("Output location unavailable: {e}");
            return specs
                .iter()
                .map(|spec| {
                    ExportRecord::failure(
                        spec.output_id.clone(),
                        &spec.title,
                        self.file_name(spec),
                        cause.clone(),
                    )
                })
                .collect();
        }

        specs.iter().map(|spec| self.export_one(spec)).collect()
    }

    fn file_name(&self, spec: &ChartSpec) -> String {
        spec.output_id.file_name(self.renderer.extension())
    }

    fn export_one(&self, spec: &ChartSpec) -> ExportRecord {
        let file_name = self.file_name(spec);
        let written = self
            .renderer
            .render(&spec.figure, spec.output_id.as_str())
            .map_err(|e| e.to_string())
            .and_then(|bytes| {
                self.store
                    .write(&file_name, &bytes)
                    .map_err(|e| e.to_string())
            });

        match written {
            Ok(path) => {
                info!("Exported '{}' to {}", spec.output_id, path.display());
                ExportRecord::success(spec.output_id.clone(), &spec.title, file_name, path)
            }
            Err(message) => {
                warn!(
                    "Export of '{}' ({}) failed: {}",
                    spec.output_id, spec.title, message
                );
                ExportRecord::failure(spec.output_id.clone(), &spec.title, file_name, message)
            }
        }
    }
}
