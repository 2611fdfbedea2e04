use std::fmt;

use serde::{Deserialize, Serialize};

/// Class suffix the renderer appends to a chart's host element.
pub const RENDERER_CLASS_SUFFIX: &str = " nvd3-svg";

/// Host element a chart is drawn into.
///
/// The element's class carries the report key; preferences are stored under
/// that key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChartTarget {
    element_id: String,
    report_key: String,
}

impl ChartTarget {
    #[must_use]
    pub fn new(element_id: impl Into<String>, report_key: impl Into<String>) -> Self {
        Self {
            element_id: element_id.into(),
            report_key: report_key.into(),
        }
    }

    /// Builds a target from the element's class attribute, dropping the
    /// renderer's own class suffix once it has been attached.
    #[must_use]
    pub fn from_class_attr(element_id: impl Into<String>, class_attr: &str) -> Self {
        let report_key = class_attr
            .strip_suffix(RENDERER_CLASS_SUFFIX)
            .unwrap_or(class_attr)
            .trim();
        Self::new(element_id, report_key)
    }

    #[must_use]
    pub fn element_id(&self) -> &str {
        &self.element_id
    }

    #[must_use]
    pub fn report_key(&self) -> &str {
        &self.report_key
    }
}

impl fmt::Display for ChartTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} ({})", self.element_id, self.report_key)
    }
}

#[cfg(test)]
mod tests {
    use super::ChartTarget;

    #[test]
    fn class_attr_suffix_is_stripped() {
        let target = ChartTarget::from_class_attr("chart-1", "StatsReport7 nvd3-svg");
        assert_eq!(target.report_key(), "StatsReport7");

        let fresh = ChartTarget::from_class_attr("chart-2", "StatsReport7");
        assert_eq!(fresh.report_key(), "StatsReport7");
    }
}
