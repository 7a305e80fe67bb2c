//! Per-chart export outcomes.

use crate::ids::OutputId;
use std::path::{Path, PathBuf};

/// The outcome of exporting one chart artifact.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportRecord {
    pub output_id: OutputId,
    pub title: String,
    /// The artifact file name (`output_id` plus the renderer's extension).
    pub file_name: String,
    pub outcome: ExportOutcome,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ExportOutcome {
    Success { path: PathBuf },
    Failure { error: String },
}

impl ExportRecord {
    pub fn success(
        output_id: OutputId,
        title: impl Into<String>,
        file_name: impl Into<String>,
        path: PathBuf,
    ) -> Self {
        Self {
            output_id,
            title: title.into(),
            file_name: file_name.into(),
            outcome: ExportOutcome::Success { path },
        }
    }

    pub fn failure(
        output_id: OutputId,
        title: impl Into<String>,
        file_name: impl Into<String>,
        error: impl Into<String>,
    ) -> Self {
        Self {
            output_id,
            title: title.into(),
            file_name: file_name.into(),
            outcome: ExportOutcome::Failure {
                error: error.into(),
            },
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self.outcome, ExportOutcome::Success { .. })
    }

    pub fn path(&self) -> Option<&Path> {
        match &self.outcome {
            ExportOutcome::Success { path } => Some(path),
            ExportOutcome::Failure { .. } => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.outcome {
            ExportOutcome::Success { .. } => None,
            ExportOutcome::Failure { error } => Some(error),
        }
    }
}
