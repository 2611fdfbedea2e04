use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

use super::{AxisKind, DialogSize};

/// Per-axis settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisSettings {
    /// Maximum number of selected elements; `None` is unbounded.
    #[serde(default)]
    pub limit: Option<usize>,
    #[serde(default)]
    pub title: Option<String>,
}

/// Serializable axis configurator setup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisConfiguratorConfig {
    #[serde(default)]
    pub axes: IndexMap<AxisKind, AxisSettings>,
    #[serde(default)]
    pub dialog_size: DialogSize,
}

impl AxisConfiguratorConfig {
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse axis configurator config: {e}"))
        })
    }

    #[must_use]
    pub fn with_limit(mut self, axis: AxisKind, limit: usize) -> Self {
        self.axes.entry(axis).or_default().limit = Some(limit);
        self
    }

    #[must_use]
    pub fn limit(&self, axis: AxisKind) -> Option<usize> {
        self.axes.get(&axis).and_then(|settings| settings.limit)
    }

    #[must_use]
    pub fn title(&self, axis: AxisKind) -> String {
        self.axes
            .get(&axis)
            .and_then(|settings| settings.title.clone())
            .unwrap_or_else(|| format!("Edit {}", axis.label()))
    }
}

#[cfg(test)]
mod tests {
    use super::AxisConfiguratorConfig;
    use crate::axis::{AxisKind, DialogSize};

    #[test]
    fn json_config_sets_limits_and_titles() {
        let config = AxisConfiguratorConfig::from_json_str(
            r#"{"axes":{"YAxis":{"limit":2,"title":"Value series"}},"dialog_size":"Large"}"#,
        )
        .expect("config");

        assert_eq!(config.limit(AxisKind::YAxis), Some(2));
        assert_eq!(config.limit(AxisKind::XAxis), None);
        assert_eq!(config.title(AxisKind::YAxis), "Value series");
        assert_eq!(config.title(AxisKind::XAxis), "Edit X axis");
        assert_eq!(config.dialog_size, DialogSize::Large);
    }
}
