//! Shape normalization.
//!
//! Every raw aggregate is walked by an explicit, per-domain function. Which
//! shapes a record yields is decided by the domain's static tables (period
//! format, ranked dimensions), never by probing the record's keys.

mod advanced;
mod ranked;
mod time_series;

pub use time_series::split_period;

use crate::error::NormalizeError;
use shelfplot_types::{
    AdvancedAggregate, AdvancedSection, CanonicalShape, ChartIntent, ChartKey, Domain, OutputId,
    RawAggregate, Section,
};
use std::fmt;

/// Factor applied to personal ratings so they share the external rating's range.
pub const PERSONAL_RATING_SCALE: f64 = 2.0;

/// Maximum number of rows kept for a ranked list.
pub const TOP_N: usize = 5;

/// A canonical shape together with the chart it feeds.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedShape {
    pub key: ChartKey,
    pub intent: ChartIntent,
    pub shape: CanonicalShape,
}

impl NormalizedShape {
    fn new(key: ChartKey, shape: CanonicalShape) -> Self {
        Self {
            key,
            intent: shape.natural_intent(),
            shape,
        }
    }

    pub fn output_id(&self) -> OutputId {
        self.key.output_id()
    }

    pub fn title(&self) -> String {
        self.key.title()
    }
}

/// The smallest unit of work a normalization failure was confined to.
#[derive(Debug, Clone, PartialEq)]
pub enum FailureContext {
    /// An entry of a domain document that could not be read at all.
    Record { domain: Domain, index: usize },
    /// One chart of an otherwise readable record or section.
    Shape(ChartKey),
}

impl fmt::Display for FailureContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureContext::Record { domain, index } => write!(f, "{domain} record #{index}"),
            FailureContext::Shape(key) => write!(f, "{key}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NormalizeFailure {
    pub context: FailureContext,
    pub error: NormalizeError,
}

impl NormalizeFailure {
    pub fn record(domain: Domain, index: usize, message: impl Into<String>) -> Self {
        Self {
            context: FailureContext::Record { domain, index },
            error: NormalizeError::MalformedRecord(message.into()),
        }
    }

    pub fn shape(key: ChartKey, error: NormalizeError) -> Self {
        Self {
            context: FailureContext::Shape(key),
            error,
        }
    }
}

impl fmt::Display for NormalizeFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.context, self.error)
    }
}

pub type NormalizeResult = Result<NormalizedShape, NormalizeFailure>;

/// Resolves one independently read statistic of a raw aggregate.
fn statistic<'a, T>(section: &'a Section<T>, field: &str) -> Result<&'a T, NormalizeError> {
    match section {
        Section::Present(value) => Ok(value),
        Section::Missing => Err(NormalizeError::MissingField(field.to_string())),
        Section::Malformed(message) => Err(NormalizeError::MalformedField {
            field: field.to_string(),
            message: message.clone(),
        }),
    }
}

fn keyed(key: ChartKey, result: Result<CanonicalShape, NormalizeError>) -> NormalizeResult {
    match result {
        Ok(shape) => Ok(NormalizedShape::new(key, shape)),
        Err(error) => Err(NormalizeFailure::shape(key, error)),
    }
}

/// Normalizes one raw aggregate of `domain`.
///
/// Yields the creation-time series first, then one ranked list per dimension
/// in the domain's table order. Each entry fails independently.
pub fn normalize_domain(domain: Domain, raw: &RawAggregate) -> Vec<NormalizeResult> {
    let dimensions = domain.ranked_dimensions();
    let mut results = Vec::with_capacity(1 + dimensions.len());

    let key = ChartKey::create_time(domain, &raw.sheet_name);
    let series = time_series::normalize_create_time(domain.period_format(), &raw.create_time);
    results.push(keyed(key, series.map(CanonicalShape::TimeSeries)));

    for &dimension in dimensions {
        let key = ChartKey::top_five(domain, &raw.sheet_name, dimension);
        let ranked = ranked::normalize_top_five(dimension, raw.dimension(dimension));
        results.push(keyed(key, ranked.map(CanonicalShape::RankedList)));
    }

    results
}

/// Normalizes the three advanced-analysis sections, in section order.
pub fn normalize_advanced(document: &AdvancedAggregate) -> Vec<NormalizeResult> {
    AdvancedSection::ALL
        .iter()
        .map(|&section| {
            let shape = match section {
                AdvancedSection::RatingTrends => advanced::rating_trends(&document.rating_trends),
                AdvancedSection::InterestCycle => {
                    advanced::interest_cycle(&document.interest_cycle)
                }
                AdvancedSection::ConsumptionSpeed => {
                    advanced::consumption_speed(&document.consumption_speed)
                }
            };
            keyed(
                ChartKey::advanced(section),
                shape.map(CanonicalShape::MultiPanel),
            )
        })
        .collect()
}
