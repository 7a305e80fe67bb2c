use super::TOP_N;
use crate::error::NormalizeError;
use log::warn;
use shelfplot_types::{DimensionSummary, RankedDimension, RankedListShape, RankedRow, Section};

pub(super) fn normalize_top_five(
    dimension: RankedDimension,
    summary: &Section<DimensionSummary>,
) -> Result<RankedListShape, NormalizeError> {
    let field = format!("{}.top_5", dimension.key());
    let entries = super::statistic(summary, &field)?
        .top_5
        .as_ref()
        .ok_or_else(|| NormalizeError::MissingField(field.clone()))?;
    if entries.is_empty() {
        return Err(NormalizeError::Empty(field));
    }
    if entries.len() > TOP_N {
        warn!(
            "'{field}' lists {} entries; keeping the first {TOP_N}",
            entries.len()
        );
    }

    let rows = entries
        .iter()
        .take(TOP_N)
        .map(|entry| RankedRow {
            label: entry.label.clone(),
            count: entry.count,
        })
        .collect();
    Ok(RankedListShape { dimension, rows })
}
