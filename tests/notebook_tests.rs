mod common;

use common::{TestResult, init_logger};
use serde_json::{Value, json};
use shelfplot::notebook::{NotebookError, strip_outputs};
use std::fs;
use tempfile::TempDir;

fn notebook() -> Value {
    json!({
        "cells": [
            {
                "cell_type": "markdown",
                "metadata": {},
                "source": ["# 可视化"]
            },
            {
                "cell_type": "code",
                "execution_count": 12,
                "metadata": {},
                "outputs": [{
                    "output_type": "display_data",
                    "data": {"text/html": ["<div>".repeat(200)]}
                }],
                "source": ["fig.show()"]
            }
        ],
        "metadata": {"kernelspec": {"name": "python3"}},
        "nbformat": 4,
        "nbformat_minor": 5
    })
}

#[test]
fn test_strip_outputs_rewrites_file() -> TestResult {
    init_logger();
    let dir = TempDir::new()?;
    let path = dir.path().join("05-visualization.ipynb");
    fs::write(&path, serde_json::to_vec_pretty(&notebook())?)?;

    let report = strip_outputs(&path)?;

    assert_eq!(report.code_cells, 1);
    assert!(report.new_bytes < report.original_bytes);
    assert!(report.reduction_percent() > 0.0);

    let text = fs::read_to_string(&path)?;
    assert!(text.contains("# 可视化"));
    assert!(text.starts_with("{\n \"cells\""));
    let stripped: Value = serde_json::from_str(&text)?;
    assert_eq!(stripped["cells"][1]["outputs"], json!([]));
    assert_eq!(stripped["cells"][1]["execution_count"], Value::Null);
    assert_eq!(stripped["cells"][0], notebook()["cells"][0]);
    assert_eq!(stripped["nbformat"], json!(4));
    Ok(())
}

#[test]
fn test_second_strip_changes_nothing() -> TestResult {
    init_logger();
    let dir = TempDir::new()?;
    let path = dir.path().join("nb.ipynb");
    fs::write(&path, serde_json::to_vec(&notebook())?)?;

    strip_outputs(&path)?;
    let once = fs::read(&path)?;
    let report = strip_outputs(&path)?;

    assert_eq!(fs::read(&path)?, once);
    assert_eq!(report.reduction_bytes(), 0);
    Ok(())
}

#[test]
fn test_missing_notebook_is_reported() {
    init_logger();
    let dir = TempDir::new().unwrap();
    let result = strip_outputs(dir.path().join("absent.ipynb"));
    assert!(matches!(result, Err(NotebookError::Read { .. })));
}

#[test]
fn test_document_without_cells_is_rejected() -> TestResult {
    init_logger();
    let dir = TempDir::new()?;
    let path = dir.path().join("nb.ipynb");
    fs::write(&path, r#"{"metadata": {}}"#)?;

    let result = strip_outputs(&path);

    assert!(matches!(result, Err(NotebookError::MissingCells { .. })));
    assert_eq!(fs::read_to_string(&path)?, r#"{"metadata": {}}"#);
    Ok(())
}
