use tracing::debug;

use crate::core::ChartKind;
use crate::interaction::ChartEvent;
use crate::preferences::PreferencePatch;
use crate::render::Renderer;

use super::{ChartController, ChartId};

/// Style stored for bar charts when the renderer switches to stacked bars.
pub const STACKED_STYLE: &str = "stacked";

impl<R: Renderer> ChartController<R> {
    /// Routes a renderer event into the preference store.
    ///
    /// Returns `true` when a preference update was merged.
    pub fn handle_event(&mut self, id: ChartId, event: ChartEvent) -> bool {
        let Some(chart) = self.charts.get(&id) else {
            debug!(%id, "ignoring event for unknown chart");
            return false;
        };
        let kind = chart.kind;
        if !kind.uses_preferences() {
            debug!(%id, %kind, "chart kind keeps no preferences");
            return false;
        }

        let patch = match event {
            ChartEvent::VisibilityChanged { disabled } => {
                let hidden: Vec<&str> = chart
                    .keys
                    .iter()
                    .zip(disabled.iter().chain(std::iter::repeat(&false)))
                    .filter(|(_, disabled)| **disabled)
                    .map(|(key, _)| key.as_str())
                    .collect();
                PreferencePatch::filter(hidden)
            }
            ChartEvent::StackedChanged { stacked } if kind == ChartKind::Bar => {
                PreferencePatch::style(if stacked { STACKED_STYLE } else { "" })
            }
            ChartEvent::StyleChanged { style } if kind == ChartKind::StackedArea => {
                PreferencePatch::style(style)
            }
            ChartEvent::StackedChanged { .. } | ChartEvent::StyleChanged { .. } => {
                debug!(
                    %id,
                    %kind,
                    "ignoring style event for chart without matching style control"
                );
                return false;
            }
        };

        let report_key = chart.target.report_key().to_owned();
        self.store.borrow_mut().merge_update(&report_key, kind, patch);
        true
    }
}
