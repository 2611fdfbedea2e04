use serde::{Deserialize, Serialize};

use crate::core::{ChartKind, SeriesSet};
use crate::error::{ChartError, ChartResult};
use crate::preferences::DisplayPreferences;

use super::DrawOptions;

/// Stacking directive handed to the renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum StyleHint {
    /// Keep whatever the renderer does by default.
    RendererDefault,
    /// Bars stacked (`true`) or grouped (`false`).
    Stacked(bool),
    /// Named stacked-area style such as `stack`, `stream` or `expand`.
    Area(String),
}

impl StyleHint {
    /// Derives the hint from stored preferences.
    ///
    /// Kinds without a style control always get the renderer default, as does
    /// a stacked-area chart whose stored style is empty.
    #[must_use]
    pub fn from_preferences(kind: ChartKind, preferences: &DisplayPreferences) -> Self {
        match (kind, preferences.style()) {
            (ChartKind::Bar, Some(_)) => Self::Stacked(preferences.is_stacked()),
            (ChartKind::StackedArea, Some(style)) if !style.is_empty() => {
                Self::Area(style.to_owned())
            }
            _ => Self::RendererDefault,
        }
    }
}

/// Everything the renderer needs to draw one chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawRequest {
    pub data: SeriesSet,
    pub style: StyleHint,
    pub options: DrawOptions,
}

impl DrawRequest {
    #[must_use]
    pub fn kind(&self) -> ChartKind {
        self.data.kind
    }

    /// Y-axis tick text according to the chart's value format.
    #[must_use]
    pub fn format_y_tick(&self, value: f64) -> String {
        self.data.format.format_tick(value)
    }

    /// X-axis tick text for a column position.
    #[must_use]
    pub fn format_x_tick(&self, position: usize) -> String {
        self.data.heading_at(position).unwrap_or_default().to_owned()
    }

    /// Checks that every plotted value is finite and addresses a known column.
    pub fn validate(&self) -> ChartResult<()> {
        let columns = self.data.headings.len();
        for series in &self.data.series {
            for point in &series.values {
                if !point.value().is_finite() {
                    return Err(ChartError::InvalidData(format!(
                        "series `{}` has a non-finite value",
                        series.key
                    )));
                }
                if point.position() == 0 || point.position() >= columns {
                    return Err(ChartError::InvalidData(format!(
                        "series `{}` has a point at unknown column {}",
                        series.key,
                        point.position()
                    )));
                }
            }
        }
        Ok(())
    }
}
