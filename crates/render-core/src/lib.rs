//! Core rendering abstractions for chart documents.
//!
//! This crate provides:
//! - The declarative [`Figure`] model every chart is described with
//! - The [`DocumentRenderer`] trait turning a figure into a standalone document
//! - [`PlotlyHtmlRenderer`], which emits an HTML page drawing the figure with plotly.js

mod error;
pub mod figure;
mod plotly;
mod traits;

pub use error::RenderError;
pub use figure::{
    Annotation, Axis, AxisType, BarMode, Datum, Figure, Layout, Legend, Orientation, Title,
    Trace, TraceKind,
};
pub use plotly::{PlotlyHtmlRenderer, RenderConfig};
pub use traits::DocumentRenderer;
