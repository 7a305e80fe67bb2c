//! Canonical shapes: the normalized row sets every chart is drawn from.
//!
//! Rows are plain structs with non-optional fields, so a shape can never carry
//! a null value. Source records missing a value are dropped during
//! normalization instead.

use crate::domain::{AdvancedSection, CycleGranularity, Domain, PeriodFormat, RankedDimension};
use serde::Serialize;

/// The charting pattern a shape is drawn with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChartIntent {
    GroupedBarTime,
    RankedBarHorizontal,
    MultiPanel,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CanonicalShape {
    TimeSeries(TimeSeriesShape),
    RankedList(RankedListShape),
    MultiPanel(MultiPanelShape),
}

impl CanonicalShape {
    /// The intent this shape is normally charted with.
    pub fn natural_intent(&self) -> ChartIntent {
        match self {
            CanonicalShape::TimeSeries(_) => ChartIntent::GroupedBarTime,
            CanonicalShape::RankedList(_) => ChartIntent::RankedBarHorizontal,
            CanonicalShape::MultiPanel(_) => ChartIntent::MultiPanel,
        }
    }

    pub fn row_count(&self) -> usize {
        match self {
            CanonicalShape::TimeSeries(shape) => shape.rows.len(),
            CanonicalShape::RankedList(shape) => shape.rows.len(),
            CanonicalShape::MultiPanel(shape) => {
                shape.panels.iter().map(|panel| panel.rows.len()).sum()
            }
        }
    }
}

/// A period-bucketed count series split into sub-unit and group.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeSeriesShape {
    pub format: PeriodFormat,
    pub rows: Vec<TimeSeriesRow>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimeSeriesRow {
    /// `Q1` for quarter labels, the full `YYYY-MM` label for month labels.
    pub period_sub_unit: String,
    pub count: u64,
    /// The year the period belongs to.
    pub period_group: String,
}

impl TimeSeriesRow {
    /// Rebuilds the source period label from the split columns.
    pub fn period_label(&self, format: PeriodFormat) -> String {
        match format {
            PeriodFormat::Quarter => format!("{}{}", self.period_group, self.period_sub_unit),
            PeriodFormat::YearMonth => self.period_sub_unit.clone(),
        }
    }
}

/// A top-N list for one ranked dimension, highest count first.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedListShape {
    pub dimension: RankedDimension,
    pub rows: Vec<RankedRow>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedRow {
    pub label: String,
    pub count: u64,
}

/// A bespoke shape for one advanced-analysis section.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MultiPanelShape {
    pub section: AdvancedSection,
    pub panels: Vec<Panel>,
}

/// One panel of a multi-panel shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Panel {
    /// `None` for panels that span every domain.
    pub domain: Option<Domain>,
    pub granularity: Option<CycleGranularity>,
    pub rows: PanelRows,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PanelRows {
    Ratings(Vec<RatingRow>),
    Counts(Vec<PeriodCount>),
    Speeds(Vec<SpeedRow>),
}

impl PanelRows {
    pub fn len(&self) -> usize {
        match self {
            PanelRows::Ratings(rows) => rows.len(),
            PanelRows::Counts(rows) => rows.len(),
            PanelRows::Speeds(rows) => rows.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RatingRow {
    pub period: String,
    pub external_rating: f64,
    /// Already rescaled onto the external rating's range.
    pub personal_rating: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PeriodCount {
    pub period: String,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpeedRow {
    pub domain: Domain,
    pub avg_per_year: f64,
    pub avg_per_quarter: f64,
}
