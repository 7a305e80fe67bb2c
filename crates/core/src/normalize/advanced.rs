//! Bespoke shapes for the advanced-analysis sections.
//!
//! Sections key their data by domain label. Panels are always laid out in the
//! static domain order; labels that name no known domain are logged and
//! ignored, and a known domain without data gets an empty panel.

use super::PERSONAL_RATING_SCALE;
use crate::error::NormalizeError;
use indexmap::IndexMap;
use itertools::Itertools;
use log::{debug, warn};
use shelfplot_types::{
    AdvancedSection, ConsumptionSpeeds, CycleGranularity, Domain, InterestCycle, InterestCycles,
    MultiPanelShape, Panel, PanelRows, PeriodCount, PeriodCounts, RatingPoint, RatingRow,
    RatingTrends, Section, SpeedRow,
};

pub(super) fn rating_trends(
    section: &Section<RatingTrends>,
) -> Result<MultiPanelShape, NormalizeError> {
    let which = AdvancedSection::RatingTrends;
    let trends = present(section, which)?;
    let slots = by_domain(trends, which);

    let panels = Domain::ALL
        .iter()
        .map(|&domain| {
            let points = slots[domain.position()].map(Vec::as_slice).unwrap_or_default();
            Panel {
                domain: Some(domain),
                granularity: None,
                rows: PanelRows::Ratings(rating_rows(domain, points)),
            }
        })
        .collect();
    Ok(MultiPanelShape {
        section: which,
        panels,
    })
}

/// Rescales personal ratings once; rows missing either rating are omitted.
fn rating_rows(domain: Domain, points: &[RatingPoint]) -> Vec<RatingRow> {
    points
        .iter()
        .filter_map(|point| match (point.external_rating, point.personal_rating) {
            (Some(external_rating), Some(personal)) => Some(RatingRow {
                period: point.period.clone(),
                external_rating,
                personal_rating: personal * PERSONAL_RATING_SCALE,
            }),
            _ => {
                warn!(
                    "Omitting {domain} rating row for period '{}': rating is missing",
                    point.period
                );
                None
            }
        })
        .collect()
}

pub(super) fn interest_cycle(
    section: &Section<InterestCycles>,
) -> Result<MultiPanelShape, NormalizeError> {
    let which = AdvancedSection::InterestCycle;
    let cycles = present(section, which)?;
    let slots = by_domain(cycles, which);

    let panels = Domain::ALL
        .iter()
        .cartesian_product(CycleGranularity::ALL.iter())
        .map(|(&domain, &granularity)| {
            let counts = slots[domain.position()].and_then(|cycle| buckets(cycle, granularity));
            if counts.is_none() {
                debug!("No {} buckets for {domain}; panel stays empty", granularity.label());
            }
            Panel {
                domain: Some(domain),
                granularity: Some(granularity),
                rows: PanelRows::Counts(sorted_counts(counts)),
            }
        })
        .collect();
    Ok(MultiPanelShape {
        section: which,
        panels,
    })
}

fn buckets(cycle: &InterestCycle, granularity: CycleGranularity) -> Option<&IndexMap<String, u64>> {
    let counts = match granularity {
        CycleGranularity::Month => cycle.by_month.as_ref(),
        CycleGranularity::Quarter => cycle.by_quarter.as_ref(),
    };
    counts.map(PeriodCounts::as_map)
}

/// Rows ascending by period label; labels are zero-padded upstream.
fn sorted_counts(counts: Option<&IndexMap<String, u64>>) -> Vec<PeriodCount> {
    counts
        .into_iter()
        .flatten()
        .map(|(period, &count)| PeriodCount {
            period: period.clone(),
            count,
        })
        .sorted_by(|a, b| a.period.cmp(&b.period))
        .collect()
}

pub(super) fn consumption_speed(
    section: &Section<ConsumptionSpeeds>,
) -> Result<MultiPanelShape, NormalizeError> {
    let which = AdvancedSection::ConsumptionSpeed;
    let speeds = present(section, which)?;
    let slots = by_domain(speeds, which);

    let rows = Domain::ALL
        .iter()
        .filter_map(|&domain| {
            let speed = slots[domain.position()]?;
            match (speed.avg_per_year, speed.avg_per_quarter) {
                (Some(avg_per_year), Some(avg_per_quarter)) => Some(SpeedRow {
                    domain,
                    avg_per_year,
                    avg_per_quarter,
                }),
                _ => {
                    warn!("Omitting {domain} consumption speed: an average is missing");
                    None
                }
            }
        })
        .collect();
    Ok(MultiPanelShape {
        section: which,
        panels: vec![Panel {
            domain: None,
            granularity: None,
            rows: PanelRows::Speeds(rows),
        }],
    })
}

fn present<T>(section: &Section<T>, which: AdvancedSection) -> Result<&T, NormalizeError> {
    match section {
        Section::Present(value) => Ok(value),
        Section::Missing => Err(NormalizeError::MissingSection(which)),
        Section::Malformed(message) => Err(NormalizeError::MalformedSection {
            section: which,
            message: message.clone(),
        }),
    }
}

/// Resolves domain labels into one slot per domain, indexed by panel position.
fn by_domain<T>(entries: &IndexMap<String, T>, which: AdvancedSection) -> [Option<&T>; 3] {
    let mut slots = [None; 3];
    for (label, value) in entries {
        match Domain::from_label(label) {
            Some(domain) => {
                let slot = &mut slots[domain.position()];
                if slot.is_some() {
                    warn!("Section '{which}' lists {domain} twice; ignoring '{label}'");
                } else {
                    *slot = Some(value);
                }
            }
            None => warn!("Section '{which}' names unknown domain '{label}'; ignoring it"),
        }
    }
    slots
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use shelfplot_types::AdvancedAggregate;

    fn document(value: serde_json::Value) -> AdvancedAggregate {
        AdvancedAggregate::from_document(value.as_object().unwrap())
    }

    #[test]
    fn personal_rating_is_doubled_exactly_once() {
        let advanced = document(json!({
            "rating_trends": {"movies": [{"period": "2021", "external_rating": 7.5, "personal_rating": 3}]}
        }));
        let shape = rating_trends(&advanced.rating_trends).unwrap();
        match &shape.panels[0].rows {
            PanelRows::Ratings(rows) => {
                assert_eq!(rows[0].personal_rating, 6.0);
                assert_eq!(rows[0].external_rating, 7.5);
            }
            other => panic!("unexpected rows {other:?}"),
        }
    }

    #[test]
    fn rating_panels_follow_static_domain_order() {
        let advanced = document(json!({
            "评分趋势": {
                "游戏": [{"创建年份": 2020, "豆瓣评分": 8.0, "我的评分": 4.0}],
                "电影": [{"创建年份": 2019, "豆瓣评分": 7.0, "我的评分": 3.5}]
            }
        }));
        let shape = rating_trends(&advanced.rating_trends).unwrap();
        let domains: Vec<_> = shape.panels.iter().map(|p| p.domain).collect();
        assert_eq!(
            domains,
            vec![Some(Domain::Movies), Some(Domain::Books), Some(Domain::Games)]
        );
        assert!(shape.panels[1].rows.is_empty());
        assert_eq!(shape.panels[2].rows.len(), 1);
    }

    #[test]
    fn rows_with_null_ratings_are_omitted() {
        let advanced = document(json!({
            "rating_trends": {"books": [
                {"period": "2019", "external_rating": null, "personal_rating": 4.0},
                {"period": "2020", "external_rating": 8.2, "personal_rating": 4.5}
            ]}
        }));
        let shape = rating_trends(&advanced.rating_trends).unwrap();
        match &shape.panels[1].rows {
            PanelRows::Ratings(rows) => {
                assert_eq!(rows.len(), 1);
                assert_eq!(rows[0].period, "2020");
            }
            other => panic!("unexpected rows {other:?}"),
        }
    }

    #[test]
    fn interest_cycle_fills_a_domain_by_granularity_grid() {
        let advanced = document(json!({
            "interest_cycle": {
                "books": {"by_month": {"11": 2, "02": 5, "07": 1}, "by_quarter": {"Q3": 1, "Q1": 4}},
                "podcasts": {"by_month": {"01": 1}}
            }
        }));
        let shape = interest_cycle(&advanced.interest_cycle).unwrap();
        assert_eq!(shape.panels.len(), 6);

        let books_month = &shape.panels[2];
        assert_eq!(books_month.domain, Some(Domain::Books));
        assert_eq!(books_month.granularity, Some(CycleGranularity::Month));
        match &books_month.rows {
            PanelRows::Counts(rows) => {
                let periods: Vec<&str> = rows.iter().map(|r| r.period.as_str()).collect();
                assert_eq!(periods, vec!["02", "07", "11"]);
            }
            other => panic!("unexpected rows {other:?}"),
        }
        assert!(shape.panels[0].rows.is_empty());
    }

    #[test]
    fn consumption_speed_has_one_row_per_known_domain() {
        let advanced = document(json!({
            "消费速度": {
                "图书": {"平均每年消费数量": 24.0, "平均每季度消费数量": 6.0},
                "电影": {"平均每年消费数量": 52.0, "平均每季度消费数量": 13.0}
            }
        }));
        let shape = consumption_speed(&advanced.consumption_speed).unwrap();
        assert_eq!(shape.panels.len(), 1);
        match &shape.panels[0].rows {
            PanelRows::Speeds(rows) => {
                let domains: Vec<Domain> = rows.iter().map(|r| r.domain).collect();
                assert_eq!(domains, vec![Domain::Movies, Domain::Books]);
                assert_eq!(rows[0].avg_per_quarter, 13.0);
            }
            other => panic!("unexpected rows {other:?}"),
        }
    }

    #[test]
    fn malformed_section_reports_the_parse_error() {
        let advanced = document(json!({"consumption_speed": [1, 2, 3]}));
        assert!(matches!(
            consumption_speed(&advanced.consumption_speed),
            Err(NormalizeError::MalformedSection {
                section: AdvancedSection::ConsumptionSpeed,
                ..
            })
        ));
    }
}
