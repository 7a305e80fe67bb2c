//! # shelfplot-core
//!
//! The two pure stages of report assembly:
//! - **normalize**: walks raw per-domain aggregates and the advanced-analysis
//!   document, producing canonical shapes keyed by the chart they feed
//! - **select**: maps a canonical shape and a chart intent to a [`ChartSpec`],
//!   a declarative figure plus its deterministic output id and title
//!
//! Neither stage performs I/O. Failures are returned per shape, so one bad
//! field never costs more than the chart it belongs to.

pub mod error;
pub mod normalize;
pub mod select;

pub use error::{NormalizeError, SelectError};
pub use normalize::{
    FailureContext, NormalizeFailure, NormalizeResult, NormalizedShape, PERSONAL_RATING_SCALE,
    TOP_N, normalize_advanced, normalize_domain,
};
pub use select::{ChartSpec, PanelGrid, select, select_shape};
