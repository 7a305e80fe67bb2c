//! Deterministic chart naming.
//!
//! Every chart is identified by a [`ChartKey`], the (origin, dimension) pair it
//! was normalized from. The key alone determines both the artifact name and the
//! display title, so two runs over the same inputs always name things the same way.

use crate::domain::{AdvancedSection, Domain, RankedDimension};
use serde::{Serialize, Serializer};
use std::fmt;
use std::sync::Arc;

/// The identifier an artifact is stored under (without extension).
#[derive(Debug, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct OutputId(Arc<str>);

impl OutputId {
    pub fn new(id: impl Into<Arc<str>>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The artifact file name for a renderer producing `extension` documents.
    pub fn file_name(&self, extension: &str) -> String {
        format!("{}.{}", self.0, extension)
    }
}

impl From<String> for OutputId {
    fn from(s: String) -> Self {
        Self(s.into())
    }
}

impl From<&str> for OutputId {
    fn from(s: &str) -> Self {
        Self(s.into())
    }
}

impl AsRef<str> for OutputId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Serialize for OutputId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl fmt::Display for OutputId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Where the data behind a chart came from.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ChartOrigin {
    /// One sheet of a per-domain summary document.
    Sheet { domain: Domain, sheet: String },
    /// The cross-domain advanced-analysis document.
    Advanced,
}

/// Which statistic of the origin a chart shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartDimension {
    CreateTime,
    TopFive(RankedDimension),
    Section(AdvancedSection),
}

/// The (origin, dimension) pair a chart is derived from.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ChartKey {
    pub origin: ChartOrigin,
    pub dimension: ChartDimension,
}

impl ChartKey {
    pub fn create_time(domain: Domain, sheet: impl Into<String>) -> Self {
        Self {
            origin: ChartOrigin::Sheet {
                domain,
                sheet: sheet.into(),
            },
            dimension: ChartDimension::CreateTime,
        }
    }

    pub fn top_five(domain: Domain, sheet: impl Into<String>, dimension: RankedDimension) -> Self {
        Self {
            origin: ChartOrigin::Sheet {
                domain,
                sheet: sheet.into(),
            },
            dimension: ChartDimension::TopFive(dimension),
        }
    }

    pub fn advanced(section: AdvancedSection) -> Self {
        Self {
            origin: ChartOrigin::Advanced,
            dimension: ChartDimension::Section(section),
        }
    }

    /// `{domain}_{sheet}_create_time`, `{domain}_{sheet}_{dimension}_top5`
    /// or `advanced_{section}`.
    pub fn output_id(&self) -> OutputId {
        let prefix = match &self.origin {
            ChartOrigin::Sheet { domain, sheet } => format!("{}_{}", domain.key(), sheet),
            ChartOrigin::Advanced => "advanced".to_string(),
        };
        let id = match self.dimension {
            ChartDimension::CreateTime => format!("{prefix}_create_time"),
            ChartDimension::TopFive(dimension) => format!("{prefix}_{}_top5", dimension.key()),
            ChartDimension::Section(section) => format!("{prefix}_{}", section.key()),
        };
        OutputId::from(id)
    }

    /// The title shown on the chart and in the index.
    pub fn title(&self) -> String {
        let sheet = match &self.origin {
            ChartOrigin::Sheet { sheet, .. } => sheet.as_str(),
            ChartOrigin::Advanced => "",
        };
        match self.dimension {
            ChartDimension::CreateTime => format!("{sheet} - Creation time"),
            ChartDimension::TopFive(dimension) => {
                format!("{sheet} - {} Top 5", dimension.display_name())
            }
            ChartDimension::Section(section) => section.title().to_string(),
        }
    }
}

impl fmt::Display for ChartKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.origin, self.dimension) {
            (ChartOrigin::Sheet { domain, sheet }, ChartDimension::CreateTime) => {
                write!(f, "{domain}/{sheet}/create_time")
            }
            (ChartOrigin::Sheet { domain, sheet }, ChartDimension::TopFive(dimension)) => {
                write!(f, "{domain}/{sheet}/{dimension}")
            }
            (_, ChartDimension::Section(section)) => write!(f, "advanced/{section}"),
            (ChartOrigin::Advanced, dimension) => write!(f, "advanced/{dimension:?}"),
        }
    }
}
