//! Error types for the normalization and selection stages.

use shelfplot_types::{AdvancedSection, ChartIntent, OutputId};
use thiserror::Error;

/// Why a single shape could not be produced.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum NormalizeError {
    #[error("Record could not be read: {0}")]
    MalformedRecord(String),
    #[error("Missing field '{0}'")]
    MissingField(String),
    #[error("Field '{field}' could not be read: {message}")]
    MalformedField { field: String, message: String },
    #[error("Field '{0}' has no entries")]
    Empty(String),
    #[error("Malformed period label '{label}': expected {expected}")]
    MalformedPeriod {
        label: String,
        expected: &'static str,
    },
    #[error("Section '{0}' is missing from the advanced analysis document")]
    MissingSection(AdvancedSection),
    #[error("Section '{section}' is malformed: {message}")]
    MalformedSection {
        section: AdvancedSection,
        message: String,
    },
    #[error("Output id '{0}' is already used by an earlier chart")]
    DuplicateOutputId(OutputId),
    #[error("Chart selection failed: {0}")]
    Select(#[from] SelectError),
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SelectError {
    #[error("Intent '{intent:?}' cannot draw a {shape} shape")]
    IntentMismatch {
        intent: ChartIntent,
        shape: &'static str,
    },
    #[error("Section '{section}' has {panels} panels but its grid holds {cells}")]
    PanelOverflow {
        section: AdvancedSection,
        panels: usize,
        cells: usize,
    },
}
