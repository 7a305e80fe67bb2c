//! Upstream aggregate documents.
//!
//! Field names follow the English vocabulary; the keys written by the upstream
//! analytics job are accepted as serde aliases.

use crate::domain::{AdvancedSection, RankedDimension};
use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

/// Pre-computed summary statistics for one (domain, sheet) pair.
///
/// Only `sheet_name` is required. Every statistic is read on its own, so a
/// malformed one is kept as [`Section::Malformed`] next to the readable ones.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawAggregate {
    pub sheet_name: String,
    /// Period label -> number of items created in that period, in source order.
    #[serde(default)]
    pub create_time: Section<PeriodCounts>,
    #[serde(default)]
    pub director: Section<DimensionSummary>,
    #[serde(default)]
    pub actor: Section<DimensionSummary>,
    #[serde(default)]
    pub author: Section<DimensionSummary>,
    #[serde(default)]
    pub publisher: Section<DimensionSummary>,
    #[serde(default)]
    pub genre: Section<DimensionSummary>,
}

impl RawAggregate {
    pub fn dimension(&self, dimension: RankedDimension) -> &Section<DimensionSummary> {
        match dimension {
            RankedDimension::Director => &self.director,
            RankedDimension::Actor => &self.actor,
            RankedDimension::Author => &self.author,
            RankedDimension::Publisher => &self.publisher,
            RankedDimension::Genre => &self.genre,
        }
    }
}

/// Period label -> count, in source order.
///
/// Counts written as integral floats (`5.0`) are accepted.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(try_from = "Map<String, Value>")]
pub struct PeriodCounts(IndexMap<String, u64>);

impl PeriodCounts {
    pub fn as_map(&self) -> &IndexMap<String, u64> {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<IndexMap<String, u64>> for PeriodCounts {
    fn from(counts: IndexMap<String, u64>) -> Self {
        Self(counts)
    }
}

impl TryFrom<Map<String, Value>> for PeriodCounts {
    type Error = String;

    fn try_from(map: Map<String, Value>) -> Result<Self, Self::Error> {
        map.into_iter()
            .map(|(label, value)| match as_count(&value) {
                Some(count) => Ok((label, count)),
                None => Err(format!(
                    "period '{label}' has no non-negative integer count (found {value})"
                )),
            })
            .collect::<Result<IndexMap<_, _>, _>>()
            .map(Self)
    }
}

/// Statistics computed for one ranked dimension.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DimensionSummary {
    #[serde(default, alias = "top5")]
    pub top_5: Option<Vec<RankedEntry>>,
}

/// One entry of a top-5 list.
///
/// The source writes entries as `{"director": "Nolan", "count": 4}`; the label
/// is read from `label` when present, otherwise from the only non-`count` field.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "Map<String, Value>")]
pub struct RankedEntry {
    pub label: String,
    pub count: u64,
}

impl TryFrom<Map<String, Value>> for RankedEntry {
    type Error = String;

    fn try_from(map: Map<String, Value>) -> Result<Self, Self::Error> {
        let count = map
            .get("count")
            .and_then(as_count)
            .ok_or_else(|| "ranked entry has no non-negative integer `count`".to_string())?;

        let label = match map.get("label") {
            Some(value) => scalar_label(value),
            None => map
                .iter()
                .filter(|(key, _)| key.as_str() != "count")
                .find_map(|(_, value)| scalar_label(value)),
        }
        .ok_or_else(|| "ranked entry has no label field".to_string())?;

        Ok(RankedEntry { label, count })
    }
}

fn as_count(value: &Value) -> Option<u64> {
    value.as_u64().or_else(|| {
        value
            .as_f64()
            .filter(|f| *f >= 0.0 && f.fract() == 0.0)
            .map(|f| f as u64)
    })
}

fn scalar_label(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// A part of a document that is read independently of its siblings.
///
/// Used for the advanced-analysis sections and for each statistic of a
/// [`RawAggregate`], so one missing or malformed part never prevents the
/// others from being charted. An explicit `null` counts as missing.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Section<T> {
    #[default]
    Missing,
    Malformed(String),
    Present(T),
}

impl<T> Section<T> {
    pub fn present(&self) -> Option<&T> {
        match self {
            Section::Present(value) => Some(value),
            _ => None,
        }
    }
}

impl<T: DeserializeOwned> Section<T> {
    pub fn from_value(value: &Value) -> Self {
        if value.is_null() {
            return Section::Missing;
        }
        match T::deserialize(value) {
            Ok(parsed) => Section::Present(parsed),
            Err(e) => Section::Malformed(e.to_string()),
        }
    }
}

impl<'de, T: DeserializeOwned> Deserialize<'de> for Section<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(Section::from_value(&value))
    }
}

/// Per-domain rating trend rows, keyed by the document's domain label.
pub type RatingTrends = IndexMap<String, Vec<RatingPoint>>;
/// Per-domain interest cycle buckets, keyed by the document's domain label.
pub type InterestCycles = IndexMap<String, InterestCycle>;
/// Per-domain consumption speed, keyed by the document's domain label.
pub type ConsumptionSpeeds = IndexMap<String, ConsumptionSpeed>;

/// The cross-domain advanced-analysis result set.
#[derive(Debug, Clone, PartialEq)]
pub struct AdvancedAggregate {
    pub rating_trends: Section<RatingTrends>,
    pub interest_cycle: Section<InterestCycles>,
    pub consumption_speed: Section<ConsumptionSpeeds>,
}

impl AdvancedAggregate {
    /// Reads every section from a top-level JSON object.
    pub fn from_document(document: &Map<String, Value>) -> Self {
        Self {
            rating_trends: read_section(document, AdvancedSection::RatingTrends),
            interest_cycle: read_section(document, AdvancedSection::InterestCycle),
            consumption_speed: read_section(document, AdvancedSection::ConsumptionSpeed),
        }
    }
}

fn read_section<T: DeserializeOwned>(
    document: &Map<String, Value>,
    section: AdvancedSection,
) -> Section<T> {
    section
        .document_keys()
        .iter()
        .find_map(|key| document.get(*key))
        .map(Section::from_value)
        .unwrap_or_default()
}

/// One point of a rating trend.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RatingPoint {
    #[serde(alias = "创建年份", deserialize_with = "period_label")]
    pub period: String,
    #[serde(default, alias = "豆瓣评分")]
    pub external_rating: Option<f64>,
    #[serde(default, alias = "我的评分")]
    pub personal_rating: Option<f64>,
}

/// Interest-cycle buckets for one domain.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct InterestCycle {
    #[serde(default, alias = "按月份")]
    pub by_month: Option<PeriodCounts>,
    #[serde(default, alias = "按季度")]
    pub by_quarter: Option<PeriodCounts>,
}

/// Average consumption speed for one domain.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ConsumptionSpeed {
    #[serde(default, alias = "平均每年消费数量")]
    pub avg_per_year: Option<f64>,
    #[serde(default, alias = "平均每季度消费数量")]
    pub avg_per_quarter: Option<f64>,
}

/// Accepts a period written either as a string or as a number (`2019`, `2019.0`).
fn period_label<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    match value {
        Value::String(s) => Ok(s),
        Value::Number(n) => match n.as_f64() {
            Some(f) if f.fract() == 0.0 && n.as_i64().is_none() => Ok(format!("{}", f as i64)),
            _ => Ok(n.to_string()),
        },
        other => Err(serde::de::Error::custom(format!(
            "expected a period label, found {other}"
        ))),
    }
}
