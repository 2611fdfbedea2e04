use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ChartError;

/// Chart families a report can be drawn as.
///
/// The serialized names double as the keys of the per-report preference
/// object, so they must stay stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ChartKind {
    Bar,
    Line,
    /// Compact two-color line chart without persisted preferences.
    LineSimple,
    StackedArea,
}

impl ChartKind {
    pub const ALL: [Self; 4] = [Self::Bar, Self::Line, Self::LineSimple, Self::StackedArea];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Bar => "Bar",
            Self::Line => "Line",
            Self::LineSimple => "LineSimple",
            Self::StackedArea => "StackedArea",
        }
    }

    /// Whether the chart exposes a stacked/grouped style control.
    #[must_use]
    pub fn supports_style(self) -> bool {
        matches!(self, Self::Bar | Self::StackedArea)
    }

    /// Whether display preferences are read and written for this kind.
    #[must_use]
    pub fn uses_preferences(self) -> bool {
        !matches!(self, Self::LineSimple)
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChartKind {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| ChartError::UnknownChartKind(s.to_owned()))
    }
}
