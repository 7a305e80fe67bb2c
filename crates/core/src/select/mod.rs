//! Chart selection: canonical shape + intent -> declarative chart.
//!
//! Selection is a pure mapping. The same inputs always produce the same
//! [`ChartSpec`], down to the serialized bytes of its figure.

mod encode;
mod grid;

pub use grid::{Cell, PanelGrid};

use crate::error::SelectError;
use crate::normalize::NormalizedShape;
use serde::Serialize;
use shelfplot_render_core::Figure;
use shelfplot_types::{CanonicalShape, ChartIntent, OutputId};

/// Everything needed to export one chart artifact.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    pub output_id: OutputId,
    pub title: String,
    pub intent: ChartIntent,
    pub rows: CanonicalShape,
    pub figure: Figure,
}

/// Maps a shape and an intent to a chart description.
///
/// Fails when the intent cannot draw the shape (a ranked list as a time
/// series, for instance) or when a multi-panel shape overflows its grid.
pub fn select(
    shape: CanonicalShape,
    intent: ChartIntent,
    title: impl Into<String>,
    output_id: OutputId,
) -> Result<ChartSpec, SelectError> {
    let title = title.into();
    let figure = match (&shape, intent) {
        (CanonicalShape::TimeSeries(series), ChartIntent::GroupedBarTime) => {
            encode::grouped_bar_time(&title, series)
        }
        (CanonicalShape::RankedList(list), ChartIntent::RankedBarHorizontal) => {
            encode::ranked_bar_horizontal(&title, list)
        }
        (CanonicalShape::MultiPanel(panels), ChartIntent::MultiPanel) => {
            encode::multi_panel(&title, panels)?
        }
        (shape, intent) => {
            return Err(SelectError::IntentMismatch {
                intent,
                shape: shape_name(shape),
            });
        }
    };

    Ok(ChartSpec {
        output_id,
        title,
        intent,
        rows: shape,
        figure,
    })
}

/// Selects a chart for a normalized shape using its own key and intent.
pub fn select_shape(normalized: NormalizedShape) -> Result<ChartSpec, SelectError> {
    let title = normalized.title();
    let output_id = normalized.output_id();
    select(normalized.shape, normalized.intent, title, output_id)
}

fn shape_name(shape: &CanonicalShape) -> &'static str {
    match shape {
        CanonicalShape::TimeSeries(_) => "time series",
        CanonicalShape::RankedList(_) => "ranked list",
        CanonicalShape::MultiPanel(_) => "multi-panel",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shelfplot_types::{
        PeriodFormat, RankedDimension, RankedListShape, RankedRow, TimeSeriesRow, TimeSeriesShape,
    };

    fn ranked() -> CanonicalShape {
        CanonicalShape::RankedList(RankedListShape {
            dimension: RankedDimension::Director,
            rows: vec![
                RankedRow {
                    label: "Villeneuve".into(),
                    count: 4,
                },
                RankedRow {
                    label: "Nolan".into(),
                    count: 3,
                },
            ],
        })
    }

    #[test]
    fn select_is_pure() {
        let first = select(
            ranked(),
            ChartIntent::RankedBarHorizontal,
            "watched - Director Top 5",
            OutputId::from("movies_watched_director_top5"),
        )
        .unwrap();
        let second = select(
            ranked(),
            ChartIntent::RankedBarHorizontal,
            "watched - Director Top 5",
            OutputId::from("movies_watched_director_top5"),
        )
        .unwrap();
        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_vec(&first).unwrap(),
            serde_json::to_vec(&second).unwrap()
        );
    }

    #[test]
    fn mismatched_intent_is_rejected() {
        let err = select(ranked(), ChartIntent::GroupedBarTime, "t", OutputId::from("x"))
            .unwrap_err();
        assert_eq!(
            err,
            SelectError::IntentMismatch {
                intent: ChartIntent::GroupedBarTime,
                shape: "ranked list"
            }
        );
    }

    #[test]
    fn spec_carries_title_and_id() {
        let shape = CanonicalShape::TimeSeries(TimeSeriesShape {
            format: PeriodFormat::Quarter,
            rows: vec![TimeSeriesRow {
                period_sub_unit: "Q1".into(),
                count: 5,
                period_group: "2020".into(),
            }],
        });
        let spec = select(
            shape,
            ChartIntent::GroupedBarTime,
            "watched - Creation time",
            OutputId::from("movies_watched_create_time"),
        )
        .unwrap();
        assert_eq!(spec.title, "watched - Creation time");
        assert_eq!(spec.figure.title(), "watched - Creation time");
        assert_eq!(spec.output_id.as_str(), "movies_watched_create_time");
    }
}
