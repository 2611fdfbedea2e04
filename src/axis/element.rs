use std::fmt;
use std::mem;

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

/// Configurable report axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AxisKind {
    XAxis,
    YAxis,
}

impl AxisKind {
    pub const ALL: [Self; 2] = [Self::XAxis, Self::YAxis];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::XAxis => "XAxis",
            Self::YAxis => "YAxis",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::XAxis => "X axis",
            Self::YAxis => "Y axis",
        }
    }
}

impl fmt::Display for AxisKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Nested input state carried by an element.
///
/// Moving an element between collections moves this value with it, so chosen
/// options and checked flags are never reset by an add or delete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ElementInput {
    Plain,
    MultiSelect {
        options: Vec<String>,
        selected: IndexSet<String>,
    },
    Checkbox {
        checked: bool,
    },
    Text {
        value: String,
    },
}

impl ElementInput {
    /// Multi-select with nothing chosen.
    #[must_use]
    pub fn multi_select<I, S>(options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::MultiSelect {
            options: options.into_iter().map(Into::into).collect(),
            selected: IndexSet::new(),
        }
    }

    /// `true` when `other` is the same kind of input and, for multi-selects,
    /// offers the same options.
    #[must_use]
    pub fn same_shape(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::MultiSelect { options: a, .. }, Self::MultiSelect { options: b, .. }) => a == b,
            _ => mem::discriminant(self) == mem::discriminant(other),
        }
    }

    /// Multi-select choices must come from the offered options.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        match self {
            Self::MultiSelect { options, selected } => {
                selected.iter().all(|choice| options.contains(choice))
            }
            _ => true,
        }
    }

    /// Values submitted with the report form.
    #[must_use]
    pub fn form_values(&self) -> Vec<String> {
        match self {
            Self::Plain => Vec::new(),
            Self::MultiSelect { options, selected } => options
                .iter()
                .filter(|option| selected.contains(*option))
                .cloned()
                .collect(),
            Self::Checkbox { checked } => {
                if *checked {
                    vec!["1".to_owned()]
                } else {
                    Vec::new()
                }
            }
            Self::Text { value } => vec![value.clone()],
        }
    }
}

/// One field that can be placed on an axis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisElement {
    pub key: String,
    pub label: String,
    pub input: ElementInput,
}

impl AxisElement {
    #[must_use]
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            input: ElementInput::Plain,
        }
    }

    #[must_use]
    pub fn with_input(mut self, input: ElementInput) -> Self {
        self.input = input;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::ElementInput;

    #[test]
    fn multi_select_form_values_follow_option_order() {
        let mut input = ElementInput::multi_select(["open", "new", "closed"]);
        if let ElementInput::MultiSelect { selected, .. } = &mut input {
            selected.insert("closed".to_owned());
            selected.insert("open".to_owned());
        }
        assert_eq!(input.form_values(), vec!["open", "closed"]);
        assert!(input.is_consistent());
    }

    #[test]
    fn shape_check_compares_variant_and_options() {
        let a = ElementInput::multi_select(["a", "b"]);
        let b = ElementInput::multi_select(["a", "c"]);
        assert!(!a.same_shape(&b));
        assert!(ElementInput::Checkbox { checked: true }.same_shape(&ElementInput::Checkbox {
            checked: false
        }));
        assert!(!ElementInput::Plain.same_shape(&ElementInput::Checkbox { checked: false }));
    }
}
