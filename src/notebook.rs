//! Notebook output stripping.
//!
//! Clears the outputs and execution counters of every code cell in a Jupyter
//! notebook and rewrites the file in place. Key order is preserved and the
//! document is written with one-space indentation, so diffs of a stripped
//! notebook stay small.

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Notebook path used when none is given on the command line.
pub const DEFAULT_NOTEBOOK: &str = "notebooks/05-visualization.ipynb";

#[derive(Error, Debug)]
pub enum NotebookError {
    #[error("Failed to read notebook '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Notebook '{path}' is not valid JSON: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Notebook '{path}' has no 'cells' array")]
    MissingCells { path: PathBuf },

    #[error("Failed to serialize notebook: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Failed to write notebook '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// File sizes before and after stripping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StripReport {
    pub original_bytes: u64,
    pub new_bytes: u64,
    /// Number of code cells that were cleared.
    pub code_cells: usize,
}

impl StripReport {
    /// Bytes saved; negative if the rewrite grew the file.
    pub fn reduction_bytes(&self) -> i64 {
        self.original_bytes as i64 - self.new_bytes as i64
    }

    /// Percentage of the original size saved, 0 for an empty original.
    pub fn reduction_percent(&self) -> f64 {
        if self.original_bytes == 0 {
            return 0.0;
        }
        self.reduction_bytes() as f64 / self.original_bytes as f64 * 100.0
    }
}

pub fn megabytes(bytes: i64) -> f64 {
    bytes as f64 / (1024.0 * 1024.0)
}

/// Strips every code cell of the notebook at `path` and rewrites it in place.
pub fn strip_outputs(path: impl AsRef<Path>) -> Result<StripReport, NotebookError> {
    let path = path.as_ref();
    let original = fs::read(path).map_err(|source| NotebookError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let mut notebook: Value =
        serde_json::from_slice(&original).map_err(|source| NotebookError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    let code_cells = clear_code_cells(&mut notebook).ok_or_else(|| NotebookError::MissingCells {
        path: path.to_path_buf(),
    })?;

    let rewritten = to_notebook_json(&notebook)?;
    fs::write(path, &rewritten).map_err(|source| NotebookError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    log::info!(
        "Cleared {code_cells} code cells in {}",
        path.display()
    );

    Ok(StripReport {
        original_bytes: original.len() as u64,
        new_bytes: rewritten.len() as u64,
        code_cells,
    })
}

/// Clears outputs and execution counts; `None` if there is no `cells` array.
pub fn clear_code_cells(notebook: &mut Value) -> Option<usize> {
    let cells = notebook.get_mut("cells")?.as_array_mut()?;
    let mut cleared = 0;
    for cell in cells.iter_mut().filter_map(Value::as_object_mut) {
        if is_code_cell(cell) {
            cell.insert("outputs".to_string(), Value::Array(Vec::new()));
            cell.insert("execution_count".to_string(), Value::Null);
            cleared += 1;
        }
    }
    Some(cleared)
}

fn is_code_cell(cell: &Map<String, Value>) -> bool {
    cell.get("cell_type").and_then(Value::as_str) == Some("code")
}

fn to_notebook_json(notebook: &Value) -> Result<Vec<u8>, serde_json::Error> {
    let mut buffer = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buffer, PrettyFormatter::with_indent(b" "));
    notebook.serialize(&mut serializer)?;
    Ok(buffer)
}
