//! Static tables describing the tracked media domains.
//!
//! Everything that varies per domain (period label format, ranked dimensions,
//! panel order) is a property of the domain itself and is answered here rather
//! than inferred from record contents.

use serde::Serialize;
use std::fmt;

/// One of the tracked media categories.
///
/// The declaration order is the canonical panel order used by multi-panel charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Domain {
    Movies,
    Books,
    Games,
}

impl Domain {
    /// All domains in panel order.
    pub const ALL: [Domain; 3] = [Domain::Movies, Domain::Books, Domain::Games];

    /// The key used in output identifiers (`movies`, `books`, `games`).
    pub fn key(self) -> &'static str {
        match self {
            Domain::Movies => "movies",
            Domain::Books => "books",
            Domain::Games => "games",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Domain::Movies => "Movies",
            Domain::Books => "Books",
            Domain::Games => "Games",
        }
    }

    /// Resolves a domain from a section key of the advanced-analysis document.
    ///
    /// Accepts the English keys (case-insensitive, singular or plural) and the
    /// labels used by the upstream analytics job.
    pub fn from_label(label: &str) -> Option<Domain> {
        match label.trim().to_ascii_lowercase().as_str() {
            "movies" | "movie" | "电影" => Some(Domain::Movies),
            "books" | "book" | "图书" => Some(Domain::Books),
            "games" | "game" | "游戏" => Some(Domain::Games),
            _ => None,
        }
    }

    /// Zero-based position in the panel order.
    pub fn position(self) -> usize {
        match self {
            Domain::Movies => 0,
            Domain::Books => 1,
            Domain::Games => 2,
        }
    }

    /// The label format of this domain's `create_time` buckets.
    pub fn period_format(self) -> PeriodFormat {
        match self {
            Domain::Movies | Domain::Books => PeriodFormat::Quarter,
            Domain::Games => PeriodFormat::YearMonth,
        }
    }

    /// The ranked top-5 dimensions charted for this domain, in export order.
    pub fn ranked_dimensions(self) -> &'static [RankedDimension] {
        match self {
            Domain::Movies => &[RankedDimension::Director, RankedDimension::Actor],
            Domain::Books => &[RankedDimension::Author, RankedDimension::Publisher],
            Domain::Games => &[RankedDimension::Genre],
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A dimension for which the upstream job computes a top-5 list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RankedDimension {
    Director,
    Actor,
    Author,
    Publisher,
    Genre,
}

impl RankedDimension {
    /// The field name in the raw aggregate (and in output identifiers).
    pub fn key(self) -> &'static str {
        match self {
            RankedDimension::Director => "director",
            RankedDimension::Actor => "actor",
            RankedDimension::Author => "author",
            RankedDimension::Publisher => "publisher",
            RankedDimension::Genre => "genre",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            RankedDimension::Director => "Director",
            RankedDimension::Actor => "Actor",
            RankedDimension::Author => "Author",
            RankedDimension::Publisher => "Publisher",
            RankedDimension::Genre => "Genre",
        }
    }
}

impl fmt::Display for RankedDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// How `create_time` period labels are written for a domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PeriodFormat {
    /// `YYYYQn`, split into the year group and the `Qn` sub-label.
    Quarter,
    /// `YYYY-MM`, split into the year group and the full label.
    YearMonth,
}

impl PeriodFormat {
    /// Axis title for the period sub-unit.
    pub fn axis_label(self) -> &'static str {
        match self {
            PeriodFormat::Quarter => "Quarter",
            PeriodFormat::YearMonth => "Month",
        }
    }
}

/// A named section of the advanced-analysis document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AdvancedSection {
    RatingTrends,
    InterestCycle,
    ConsumptionSpeed,
}

impl AdvancedSection {
    pub const ALL: [AdvancedSection; 3] = [
        AdvancedSection::RatingTrends,
        AdvancedSection::InterestCycle,
        AdvancedSection::ConsumptionSpeed,
    ];

    pub fn key(self) -> &'static str {
        match self {
            AdvancedSection::RatingTrends => "rating_trends",
            AdvancedSection::InterestCycle => "interest_cycle",
            AdvancedSection::ConsumptionSpeed => "consumption_speed",
        }
    }

    /// Every document key accepted for this section, English key first.
    pub fn document_keys(self) -> &'static [&'static str] {
        match self {
            AdvancedSection::RatingTrends => &["rating_trends", "评分趋势"],
            AdvancedSection::InterestCycle => &["interest_cycle", "兴趣周期"],
            AdvancedSection::ConsumptionSpeed => &["consumption_speed", "消费速度"],
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            AdvancedSection::RatingTrends => "Rating trend analysis",
            AdvancedSection::InterestCycle => "Interest cycle analysis",
            AdvancedSection::ConsumptionSpeed => "Average consumption speed",
        }
    }
}

impl fmt::Display for AdvancedSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Bucket granularity of the interest-cycle section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CycleGranularity {
    Month,
    Quarter,
}

impl CycleGranularity {
    pub const ALL: [CycleGranularity; 2] = [CycleGranularity::Month, CycleGranularity::Quarter];

    /// Zero-based grid column.
    pub fn column(self) -> usize {
        match self {
            CycleGranularity::Month => 0,
            CycleGranularity::Quarter => 1,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CycleGranularity::Month => "month",
            CycleGranularity::Quarter => "quarter",
        }
    }
}
