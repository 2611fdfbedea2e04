use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::ChartKind;
use crate::error::{ChartError, ChartResult};
use crate::render::DrawOptions;

/// Serializable chart controller configuration.
///
/// Kinds missing from `draw_options` fall back to [`DrawOptions::for_kind`],
/// so a host only lists the kinds it wants to override.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartControllerConfig {
    #[serde(default)]
    pub draw_options: IndexMap<ChartKind, DrawOptions>,
}

impl ChartControllerConfig {
    /// Parses a config from JSON.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse chart controller config: {e}"))
        })
    }

    #[must_use]
    pub fn with_draw_options(mut self, kind: ChartKind, options: DrawOptions) -> Self {
        self.draw_options.insert(kind, options);
        self
    }

    #[must_use]
    pub fn draw_options_for(&self, kind: ChartKind) -> DrawOptions {
        self.draw_options
            .get(&kind)
            .cloned()
            .unwrap_or_else(|| DrawOptions::for_kind(kind))
    }
}

#[cfg(test)]
mod tests {
    use super::ChartControllerConfig;
    use crate::core::ChartKind;
    use crate::render::Margins;

    #[test]
    fn json_override_replaces_only_listed_kind() {
        let config = ChartControllerConfig::from_json_str(
            r#"{"draw_options":{"Line":{"margins":{"top":1,"right":2,"bottom":3,"left":4}}}}"#,
        )
        .expect("config");

        let line = config.draw_options_for(ChartKind::Line);
        assert_eq!(line.margins, Margins::new(1, 2, 3, 4));
        assert!(line.show_legend);
        assert_eq!(line.transition_ms, 500);

        let bar = config.draw_options_for(ChartKind::Bar);
        assert_eq!(bar.y_axis_label.as_deref(), Some("Values"));
    }

    #[test]
    fn invalid_json_is_reported() {
        assert!(ChartControllerConfig::from_json_str("{").is_err());
    }
}
