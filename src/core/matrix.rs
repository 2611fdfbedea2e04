use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Label marking the totals row and the totals column of a report.
pub const AGGREGATE_MARKER: &str = "Sum";

/// One cell of a report matrix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Cell {
    Number(f64),
    Text(String),
    Blank,
}

impl Cell {
    /// Numeric value of the cell, if it has one.
    ///
    /// Text is trimmed and parsed as a decimal; blank, unparsable and
    /// non-finite cells yield `None` so callers skip them instead of
    /// treating them as zero.
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        let value = match self {
            Self::Number(value) => *value,
            Self::Text(text) => text.trim().parse::<f64>().ok()?,
            Self::Blank => return None,
        };
        value.is_finite().then_some(value)
    }

    /// Text rendition used for series keys and headings.
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Number(value) => value.to_string(),
            Self::Text(text) => text.clone(),
            Self::Blank => String::new(),
        }
    }

    #[must_use]
    pub fn is_aggregate_marker(&self) -> bool {
        matches!(self, Self::Text(text) if text == AGGREGATE_MARKER)
    }
}

impl From<f64> for Cell {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for Cell {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for Cell {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// Tabular statistics result: a heading row followed by data rows.
///
/// Row 0 holds the x-axis label followed by one label per column. Every
/// following row starts with its series label. Rows may be shorter than the
/// heading row; missing cells behave like blanks.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReportMatrix {
    rows: Vec<Vec<Cell>>,
}

impl ReportMatrix {
    #[must_use]
    pub fn new(rows: Vec<Vec<Cell>>) -> Self {
        Self { rows }
    }

    /// Parses a matrix whose first row is the heading row.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse report matrix: {e}")))
    }

    /// Parses a raw statistics result, which carries a title row in front of
    /// the heading row. The title row is dropped.
    pub fn from_raw_result(input: &str) -> ChartResult<Self> {
        let mut matrix = Self::from_json_str(input)?;
        if !matrix.rows.is_empty() {
            matrix.rows.remove(0);
        }
        Ok(matrix)
    }

    #[must_use]
    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    #[must_use]
    pub fn heading_row(&self) -> Option<&[Cell]> {
        self.rows.first().map(Vec::as_slice)
    }

    /// Data rows, i.e. everything after the heading row.
    #[must_use]
    pub fn data_rows(&self) -> &[Vec<Cell>] {
        self.rows.get(1..).unwrap_or_default()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data_rows().is_empty()
    }
}

/// Builds a [`ReportMatrix`] from row literals.
///
/// ```
/// use statviz::report_matrix;
///
/// let matrix = report_matrix![["", "Mon", "Tue"], ["Open", 2, 3.5]];
/// assert_eq!(matrix.data_rows().len(), 1);
/// ```
#[macro_export]
macro_rules! report_matrix {
    ($([$($cell:expr),* $(,)?]),* $(,)?) => {
        $crate::core::ReportMatrix::new(vec![
            $(vec![$($crate::core::Cell::from($cell)),*]),*
        ])
    };
}
