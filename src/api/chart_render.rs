use tracing::{debug, warn};

use crate::core::{ChartKind, ReportMatrix, transform};
use crate::preferences::DisplayPreferences;
use crate::render::{ChartTarget, DrawRequest, Renderer, StyleHint};

use super::{ChartController, ChartId, RenderedChart};

impl<R: Renderer> ChartController<R> {
    /// Transforms `matrix` for `kind` and hands it to the renderer.
    ///
    /// Renderer failures are logged and swallowed; the chart is registered
    /// either way so later interaction events still reach the store.
    pub fn render(
        &mut self,
        kind: ChartKind,
        matrix: &ReportMatrix,
        target: &ChartTarget,
    ) -> ChartId {
        let preferences = if kind.uses_preferences() {
            self.store.borrow_mut().display(target.report_key(), kind)
        } else {
            DisplayPreferences::default()
        };

        let data = transform(matrix, kind, &preferences);
        let keys = data.keys().into_iter().map(str::to_owned).collect();
        let request = DrawRequest {
            style: StyleHint::from_preferences(kind, &preferences),
            options: self.config.draw_options_for(kind),
            data,
        };

        let drawn = match self.renderer.render(target, &request) {
            Ok(()) => {
                debug!(
                    element = %target,
                    %kind,
                    series = request.data.series.len(),
                    "chart drawn"
                );
                true
            }
            Err(err) => {
                warn!(
                    element = %target,
                    %kind,
                    error = %err,
                    "chart draw failed; leaving element as the renderer left it"
                );
                false
            }
        };

        self.register(RenderedChart {
            kind,
            target: target.clone(),
            keys,
            drawn,
        })
    }

    /// Same as [`Self::render`] for a chart kind given by name.
    ///
    /// Unknown names are logged and nothing is drawn.
    pub fn render_named(
        &mut self,
        kind: &str,
        matrix: &ReportMatrix,
        target: &ChartTarget,
    ) -> Option<ChartId> {
        match kind.parse::<ChartKind>() {
            Ok(kind) => Some(self.render(kind, matrix, target)),
            Err(err) => {
                warn!(element = %target, error = %err, "skipping chart of unknown kind");
                None
            }
        }
    }
}
