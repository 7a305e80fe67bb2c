//! Data model for the shelfplot report pipeline.
//!
//! The types in this crate describe every stage of a run:
//!
//! - [`RawAggregate`] / [`AdvancedAggregate`]: the upstream summary documents
//! - [`CanonicalShape`]: normalized row sets ready for charting
//! - [`ChartKey`] / [`OutputId`]: deterministic artifact naming
//! - [`ExportRecord`]: the outcome of exporting one chart

pub mod aggregate;
pub mod domain;
pub mod ids;
pub mod record;
pub mod shape;

pub use aggregate::{
    AdvancedAggregate, ConsumptionSpeed, ConsumptionSpeeds, DimensionSummary, InterestCycle,
    InterestCycles, PeriodCounts, RankedEntry, RatingPoint, RatingTrends, RawAggregate, Section,
};
pub use domain::{AdvancedSection, CycleGranularity, Domain, PeriodFormat, RankedDimension};
pub use ids::{ChartDimension, ChartKey, ChartOrigin, OutputId};
pub use record::{ExportOutcome, ExportRecord};
pub use shape::{
    CanonicalShape, ChartIntent, MultiPanelShape, Panel, PanelRows, PeriodCount, RankedListShape,
    RankedRow, RatingRow, SpeedRow, TimeSeriesRow, TimeSeriesShape,
};
