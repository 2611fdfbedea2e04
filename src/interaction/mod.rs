mod preview;

pub use preview::{PreviewSwitch, PreviewView};

use serde::{Deserialize, Serialize};

/// User interaction surfaced by the renderer for a drawn chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChartEvent {
    /// Legend toggle; one flag per series in drawing order, `true` = hidden.
    VisibilityChanged { disabled: Vec<bool> },
    /// Stacked/grouped switch of a bar chart.
    StackedChanged { stacked: bool },
    /// Style control of a stacked-area chart (`stack`, `stream`, `expand`).
    StyleChanged { style: String },
}
