use crate::error::NormalizeError;
use chrono::NaiveDate;
use log::debug;
use shelfplot_types::{PeriodCounts, PeriodFormat, Section, TimeSeriesRow, TimeSeriesShape};

pub(super) fn normalize_create_time(
    format: PeriodFormat,
    counts: &Section<PeriodCounts>,
) -> Result<TimeSeriesShape, NormalizeError> {
    let counts = super::statistic(counts, "create_time")?;
    if counts.is_empty() {
        return Err(NormalizeError::Empty("create_time".to_string()));
    }

    let rows = counts
        .as_map()
        .iter()
        .map(|(label, &count)| {
            let (period_sub_unit, period_group) = split_period(format, label)?;
            Ok::<_, NormalizeError>(TimeSeriesRow {
                period_sub_unit,
                count,
                period_group,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    debug!("Normalized {} {:?} periods", rows.len(), format);
    Ok(TimeSeriesShape { format, rows })
}

/// Splits a period label into `(sub_unit, group)`.
///
/// `2020Q1` becomes `("Q1", "2020")`; `2020-03` becomes `("2020-03", "2020")`.
/// The split is reversible through [`TimeSeriesRow::period_label`].
pub fn split_period(format: PeriodFormat, label: &str) -> Result<(String, String), NormalizeError> {
    let split = match format {
        PeriodFormat::Quarter => split_quarter(label),
        PeriodFormat::YearMonth => split_year_month(label),
    };
    split.ok_or_else(|| NormalizeError::MalformedPeriod {
        label: label.to_string(),
        expected: match format {
            PeriodFormat::Quarter => "YYYYQn",
            PeriodFormat::YearMonth => "YYYY-MM",
        },
    })
}

fn split_quarter(label: &str) -> Option<(String, String)> {
    let (year, quarter) = label.split_at_checked(4)?;
    let valid = year.bytes().all(|b| b.is_ascii_digit())
        && matches!(quarter, "Q1" | "Q2" | "Q3" | "Q4");
    valid.then(|| (quarter.to_string(), year.to_string()))
}

fn split_year_month(label: &str) -> Option<(String, String)> {
    if label.len() != 7 || label.as_bytes()[4] != b'-' {
        return None;
    }
    NaiveDate::parse_from_str(&format!("{label}-01"), "%Y-%m-%d").ok()?;
    let year = label.get(..4)?;
    Some((label.to_string(), year.to_string()))
}
