use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::core::ChartKind;

/// Stacking/grouping state of a chart.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StyleState {
    /// Renderer style label, e.g. `stacked` for bars or `stream` for areas.
    /// An empty label selects the renderer's default (grouped) style.
    #[serde(rename = "Style", default, skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl StyleState {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.style.is_none() && self.extra.is_empty()
    }
}

/// Display settings of one chart kind within one report.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DisplayPreferences {
    /// Keys of the series the user has hidden, in the order they were reported.
    #[serde(rename = "Filter", default, skip_serializing_if = "IndexSet::is_empty")]
    pub filter: IndexSet<String>,
    #[serde(rename = "State", default, skip_serializing_if = "StyleState::is_empty")]
    pub state: StyleState,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl DisplayPreferences {
    #[must_use]
    pub fn with_hidden<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            filter: keys.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn is_hidden(&self, key: &str) -> bool {
        self.filter.contains(key)
    }

    #[must_use]
    pub fn style(&self) -> Option<&str> {
        self.state.style.as_deref()
    }

    /// Whether the stored style asks for stacked bars.
    #[must_use]
    pub fn is_stacked(&self) -> bool {
        self.style() == Some("stacked")
    }

    /// Applies `patch`: present keys overwrite, absent keys are kept and the
    /// nested `State` object is merged key by key.
    pub fn merge(&mut self, patch: PreferencePatch) {
        if let Some(filter) = patch.filter {
            self.filter = filter;
        }
        if let Some(state) = patch.state {
            if let Some(style) = state.style {
                self.state.style = Some(style);
            }
            merge_objects(&mut self.state.extra, state.extra);
        }
        merge_objects(&mut self.extra, patch.extra);
    }
}

/// Partial update for [`DisplayPreferences`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PreferencePatch {
    #[serde(rename = "Filter", default, skip_serializing_if = "Option::is_none")]
    pub filter: Option<IndexSet<String>>,
    #[serde(rename = "State", default, skip_serializing_if = "Option::is_none")]
    pub state: Option<StylePatch>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl PreferencePatch {
    #[must_use]
    pub fn filter<I, S>(hidden: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            filter: Some(hidden.into_iter().map(Into::into).collect()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn style(style: impl Into<String>) -> Self {
        Self {
            state: Some(StylePatch {
                style: Some(style.into()),
                extra: Map::new(),
            }),
            ..Self::default()
        }
    }
}

/// Partial update for [`StyleState`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StylePatch {
    #[serde(rename = "Style", default, skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// All chart preferences of one report, keyed by chart kind.
pub type ReportPreferences = IndexMap<ChartKind, DisplayPreferences>;

fn merge_objects(target: &mut Map<String, Value>, patch: Map<String, Value>) {
    for (key, value) in patch {
        let Value::Object(incoming) = value else {
            target.insert(key, value);
            continue;
        };
        if let Some(Value::Object(existing)) = target.get_mut(&key) {
            merge_objects(existing, incoming);
        } else {
            target.insert(key, Value::Object(incoming));
        }
    }
}
