use serde::{Deserialize, Serialize};

use super::{ChartKind, Color};

/// Prefix of the disambiguation label attached to bar-chart points.
pub const LABEL_START: &str = "__LABEL_START__";
/// Separator between the column counter and the heading text.
pub const LABEL_END: &str = "__LABEL_END__";

/// Y-axis number format inferred for a whole chart.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValueFormat {
    #[default]
    Integer,
    /// At least one plotted value has a fractional part.
    Float,
}

impl ValueFormat {
    /// Formats a y-axis tick: whole numbers, or one decimal place.
    #[must_use]
    pub fn format_tick(self, value: f64) -> String {
        match self {
            Self::Integer => format!("{value:.0}"),
            Self::Float => format!("{value:.1}"),
        }
    }
}

/// One plotted value.
///
/// The shape depends on the chart kind: line charts plot `x`/`y` objects, bar
/// charts add a disambiguation label to every point and stacked-area charts
/// use bare `(position, value)` pairs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SeriesPoint {
    Labeled {
        position: usize,
        label: String,
        y: f64,
    },
    Xy {
        x: usize,
        y: f64,
    },
    Pair(usize, f64),
}

impl SeriesPoint {
    /// Column position of the point in the source matrix.
    #[must_use]
    pub fn position(&self) -> usize {
        match self {
            Self::Xy { x, .. } => *x,
            Self::Labeled { position, .. } => *position,
            Self::Pair(position, _) => *position,
        }
    }

    #[must_use]
    pub fn value(&self) -> f64 {
        match self {
            Self::Xy { y, .. } | Self::Labeled { y, .. } => *y,
            Self::Pair(_, value) => *value,
        }
    }

    /// Display label with any disambiguation prefix removed.
    #[must_use]
    pub fn display_label(&self) -> Option<&str> {
        match self {
            Self::Labeled { label, .. } => Some(strip_disambiguation_label(label)),
            _ => None,
        }
    }
}

/// Builds the bar-chart point label `__LABEL_START__{n}__LABEL_END__{heading} `.
///
/// Headings repeat across columns (two months both have a "Thu 18"), so the
/// running column counter keeps every label unique for the renderer.
#[must_use]
pub fn disambiguation_label(counter: usize, heading: &str) -> String {
    format!("{LABEL_START}{counter}{LABEL_END}{heading} ")
}

/// Removes the prefix added by [`disambiguation_label`].
///
/// Labels without the prefix are returned unchanged.
#[must_use]
pub fn strip_disambiguation_label(label: &str) -> &str {
    let Some(rest) = label.strip_prefix(LABEL_START) else {
        return label;
    };
    let Some((counter, heading)) = rest.split_once(LABEL_END) else {
        return label;
    };
    if counter.is_empty() || !counter.bytes().all(|b| b.is_ascii_digit()) {
        return label;
    }
    heading.strip_suffix(' ').unwrap_or(heading)
}

/// Chart-ready data for one matrix row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub key: String,
    pub color: Color,
    pub visible: bool,
    pub values: Vec<SeriesPoint>,
}

impl Series {
    #[must_use]
    pub fn new(key: impl Into<String>, color: Color, visible: bool) -> Self {
        Self {
            key: key.into(),
            color,
            visible,
            values: Vec::new(),
        }
    }
}

/// Output of the series transformer for one chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesSet {
    pub kind: ChartKind,
    /// Label of the heading row's first cell.
    pub x_label: Option<String>,
    /// Column labels indexed by matrix position; position 0 is always `None`.
    pub headings: Vec<Option<String>>,
    pub series: Vec<Series>,
    pub format: ValueFormat,
}

impl SeriesSet {
    #[must_use]
    pub fn empty(kind: ChartKind) -> Self {
        Self {
            kind,
            x_label: None,
            headings: Vec::new(),
            series: Vec::new(),
            format: ValueFormat::Integer,
        }
    }

    /// X-axis tick text for a column position.
    #[must_use]
    pub fn heading_at(&self, position: usize) -> Option<&str> {
        self.headings.get(position)?.as_deref()
    }

    #[must_use]
    pub fn keys(&self) -> Vec<&str> {
        self.series.iter().map(|series| series.key.as_str()).collect()
    }

    #[must_use]
    pub fn hidden_keys(&self) -> Vec<&str> {
        self.series
            .iter()
            .filter(|series| !series.visible)
            .map(|series| series.key.as_str())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::{SeriesPoint, ValueFormat, disambiguation_label, strip_disambiguation_label};

    #[test]
    fn tick_format_follows_value_format() {
        assert_eq!(ValueFormat::Integer.format_tick(12.0), "12");
        assert_eq!(ValueFormat::Float.format_tick(12.0), "12.0");
        assert_eq!(ValueFormat::Float.format_tick(3.46), "3.5");
    }

    #[test]
    fn disambiguation_label_round_trips() {
        let label = disambiguation_label(3, "Thu 18");
        assert_eq!(label, "__LABEL_START__3__LABEL_END__Thu 18 ");
        assert_eq!(strip_disambiguation_label(&label), "Thu 18");
    }

    #[test]
    fn strip_leaves_foreign_labels_alone() {
        assert_eq!(strip_disambiguation_label("Mon"), "Mon");
        assert_eq!(
            strip_disambiguation_label("__LABEL_START__x__LABEL_END__Mon "),
            "__LABEL_START__x__LABEL_END__Mon "
        );
    }

    #[test]
    fn point_shapes_serialize_like_renderer_input() {
        let pair = serde_json::to_string(&SeriesPoint::Pair(2, 1.5)).expect("pair");
        assert_eq!(pair, "[2,1.5]");
        let xy = serde_json::to_string(&SeriesPoint::Xy { x: 1, y: 4.0 }).expect("xy");
        assert_eq!(xy, r#"{"x":1,"y":4.0}"#);
    }
}
