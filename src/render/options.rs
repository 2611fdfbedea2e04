use serde::{Deserialize, Serialize};

use crate::core::ChartKind;

/// Outer chart margins in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Margins {
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
    pub left: u32,
}

impl Margins {
    #[must_use]
    pub const fn new(top: u32, right: u32, bottom: u32, left: u32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }
}

/// Renderer configuration surface for one chart kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawOptions {
    pub margins: Margins,
    #[serde(default = "default_true")]
    pub show_legend: bool,
    #[serde(default)]
    pub interactive_guideline: bool,
    /// Alternate x-axis label rows so long headings do not overlap.
    #[serde(default)]
    pub stagger_labels: bool,
    /// Show the stacked/grouped style switch.
    #[serde(default)]
    pub show_controls: bool,
    #[serde(default)]
    pub clip_edge: bool,
    #[serde(default)]
    pub y_axis_label: Option<String>,
    /// Fixed x-axis tick positions; `None` lets the renderer choose.
    #[serde(default)]
    pub x_tick_values: Option<Vec<usize>>,
    #[serde(default = "default_transition_ms")]
    pub transition_ms: u32,
}

impl DrawOptions {
    /// Defaults used for each chart kind.
    #[must_use]
    pub fn for_kind(kind: ChartKind) -> Self {
        let base = Self {
            margins: Margins::new(20, 20, 50, 50),
            show_legend: true,
            interactive_guideline: false,
            stagger_labels: false,
            show_controls: false,
            clip_edge: false,
            y_axis_label: None,
            x_tick_values: None,
            transition_ms: default_transition_ms(),
        };

        match kind {
            ChartKind::Bar => Self {
                stagger_labels: true,
                y_axis_label: Some("Values".to_owned()),
                ..base
            },
            ChartKind::Line => Self {
                margins: Margins::new(20, 70, 50, 70),
                interactive_guideline: true,
                ..base
            },
            ChartKind::LineSimple => Self {
                margins: Margins::new(20, 20, 30, 20),
                interactive_guideline: true,
                x_tick_values: Some((1..=7).collect()),
                ..base
            },
            ChartKind::StackedArea => Self {
                margins: Margins::new(20, 30, 30, 60),
                interactive_guideline: true,
                show_controls: true,
                clip_edge: true,
                transition_ms: 0,
                ..base
            },
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_transition_ms() -> u32 {
    500
}
