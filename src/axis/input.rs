use serde::{Deserialize, Serialize};

use super::ElementInput;

/// User input routed to an open [`super::AxisConfigurator`] session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AxisInput {
    Add(String),
    Delete(String),
    Update { key: String, input: ElementInput },
    Save,
    Cancel,
}
