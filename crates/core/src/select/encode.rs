//! Per-intent layout policy.

use super::grid::PanelGrid;
use crate::error::SelectError;
use itertools::Itertools;
use shelfplot_render_core::figure::axis_ref;
use shelfplot_render_core::{Annotation, Axis, BarMode, Datum, Figure, Layout, Legend, Title, Trace};
use shelfplot_types::{
    AdvancedSection, CycleGranularity, MultiPanelShape, Panel, PanelRows, RankedListShape,
    TimeSeriesShape,
};
use std::collections::HashSet;

const COUNT_AXIS: &str = "Count";
const EXTERNAL_RATING: &str = "External rating";
const PERSONAL_RATING: &str = "Personal rating";
const AVG_PER_YEAR: &str = "Average per year";
const AVG_PER_QUARTER: &str = "Average per quarter";

/// x = period sub-unit, y = count, one bar group per year in first-seen order.
pub(super) fn grouped_bar_time(title: &str, series: &TimeSeriesShape) -> Figure {
    let mut layout = Layout::titled(title);
    layout.barmode = Some(BarMode::Group);
    layout.legend = Some(Legend {
        title: Title::new("Year"),
    });
    layout.set_x_axis(1, Axis::titled(series.format.axis_label()).categorical());
    layout.set_y_axis(1, Axis::titled(COUNT_AXIS));

    series
        .rows
        .iter()
        .map(|row| row.period_group.as_str())
        .unique()
        .fold(Figure::new(layout), |figure, group| {
            let (x, y): (Vec<Datum>, Vec<Datum>) = series
                .rows
                .iter()
                .filter(|row| row.period_group == group)
                .map(|row| (Datum::from(row.period_sub_unit.as_str()), Datum::from(row.count)))
                .unzip();
            figure.with_trace(Trace::bar(x, y).named(group))
        })
}

/// x = count, y = label, highest count on top.
pub(super) fn ranked_bar_horizontal(title: &str, list: &RankedListShape) -> Figure {
    let dimension = list.dimension.display_name();
    let mut layout = Layout::titled(title);
    layout.set_x_axis(1, Axis::titled("Occurrences"));
    layout.set_y_axis(1, Axis::titled(dimension).categorical().reversed());

    let (x, y): (Vec<Datum>, Vec<Datum>) = list
        .rows
        .iter()
        .map(|row| (Datum::from(row.count), Datum::from(row.label.as_str())))
        .unzip();
    Figure::new(layout).with_trace(Trace::bar(x, y).horizontal().named(dimension))
}

pub(super) fn multi_panel(title: &str, shape: &MultiPanelShape) -> Result<Figure, SelectError> {
    let grid = PanelGrid::for_section(shape.section);
    if shape.panels.len() > grid.cells() {
        return Err(SelectError::PanelOverflow {
            section: shape.section,
            panels: shape.panels.len(),
            cells: grid.cells(),
        });
    }

    let mut layout = Layout::titled(title);
    layout.height = grid.height;
    match shape.section {
        AdvancedSection::RatingTrends => layout.showlegend = Some(true),
        AdvancedSection::InterestCycle => layout.showlegend = Some(false),
        AdvancedSection::ConsumptionSpeed => layout.barmode = Some(BarMode::Group),
    }

    let mut traces = Vec::new();
    let mut legend_shown = HashSet::new();
    for (index, (panel, cell)) in shape
        .panels
        .iter()
        .zip((0..grid.cells()).filter_map(|i| grid.cell(i)))
        .enumerate()
    {
        let axis_index = index + 1;
        let (x_axis, y_axis) = panel_axes(panel);
        if grid.cells() == 1 {
            layout.set_x_axis(axis_index, x_axis);
            layout.set_y_axis(axis_index, y_axis);
        } else {
            layout.set_x_axis(axis_index, x_axis.spanning(cell.x, axis_ref("y", axis_index)));
            layout.set_y_axis(axis_index, y_axis.spanning(cell.y, axis_ref("x", axis_index)));
            layout.annotations.push(Annotation::panel_title(
                panel_title(panel),
                cell.center_x(),
                cell.top(),
            ));
        }

        for trace in panel_traces(panel, &mut legend_shown) {
            traces.push(if grid.cells() == 1 {
                trace
            } else {
                trace.on_axes(axis_index)
            });
        }
    }

    Ok(traces.into_iter().fold(Figure::new(layout), Figure::with_trace))
}

fn panel_axes(panel: &Panel) -> (Axis, Axis) {
    match &panel.rows {
        PanelRows::Ratings(_) => (Axis::titled("Year").categorical(), Axis::titled("Rating")),
        PanelRows::Counts(_) => {
            let label = match panel.granularity {
                Some(CycleGranularity::Quarter) => "Quarter",
                _ => "Month",
            };
            (Axis::titled(label).categorical(), Axis::titled(COUNT_AXIS))
        }
        PanelRows::Speeds(_) => (Axis::titled("Domain").categorical(), Axis::titled(COUNT_AXIS)),
    }
}

fn panel_title(panel: &Panel) -> String {
    let domain = panel.domain.map(|d| d.display_name()).unwrap_or("All domains");
    match (&panel.rows, panel.granularity) {
        (_, Some(granularity)) => format!("{domain} by {}", granularity.label()),
        (PanelRows::Ratings(_), None) => format!("{domain} rating trend"),
        _ => domain.to_string(),
    }
}

/// Traces for one panel. A series name enters the legend only on the first
/// panel drawing it; later panels join the same legend group.
fn panel_traces(panel: &Panel, legend_shown: &mut HashSet<&'static str>) -> Vec<Trace> {
    let mut legend = |series: &'static str| legend_shown.insert(series);
    match &panel.rows {
        PanelRows::Ratings(rows) => {
            if rows.is_empty() {
                return Vec::new();
            }
            let periods: Vec<Datum> = rows.iter().map(|r| Datum::from(r.period.as_str())).collect();
            let external = rows.iter().map(|r| Datum::from(r.external_rating)).collect();
            let personal = rows.iter().map(|r| Datum::from(r.personal_rating)).collect();
            vec![
                Trace::scatter(periods.clone(), external)
                    .named(EXTERNAL_RATING)
                    .with_mode("lines+markers")
                    .in_legend_group(EXTERNAL_RATING, legend(EXTERNAL_RATING)),
                Trace::scatter(periods, personal)
                    .named(PERSONAL_RATING)
                    .with_mode("lines+markers")
                    .in_legend_group(PERSONAL_RATING, legend(PERSONAL_RATING)),
            ]
        }
        PanelRows::Counts(rows) => {
            if rows.is_empty() {
                return Vec::new();
            }
            let (x, y): (Vec<Datum>, Vec<Datum>) = rows
                .iter()
                .map(|r| (Datum::from(r.period.as_str()), Datum::from(r.count)))
                .unzip();
            vec![Trace::bar(x, y).named(panel_title(panel)).hide_legend()]
        }
        PanelRows::Speeds(rows) => {
            let domains: Vec<Datum> = rows
                .iter()
                .map(|r| Datum::from(r.domain.display_name()))
                .collect();
            let per_year = rows.iter().map(|r| Datum::from(r.avg_per_year)).collect();
            let per_quarter = rows.iter().map(|r| Datum::from(r.avg_per_quarter)).collect();
            vec![
                Trace::bar(domains.clone(), per_year).named(AVG_PER_YEAR),
                Trace::bar(domains, per_quarter).named(AVG_PER_QUARTER),
            ]
        }
    }
}
