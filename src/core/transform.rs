use tracing::{debug, trace};

use crate::preferences::DisplayPreferences;

use super::palette::{color_at, simple_color_at};
use super::series::disambiguation_label;
use super::{Cell, ChartKind, Color, ReportMatrix, Series, SeriesPoint, SeriesSet, ValueFormat};

/// Converts a report matrix into chart-ready series for `kind`.
///
/// The aggregate row and the aggregate column are dropped, cells without a
/// numeric value are skipped, and the y-axis format becomes
/// [`ValueFormat::Float`] as soon as one retained value has a fractional part.
/// A matrix without heading row or data rows yields an empty set; it never
/// fails.
#[must_use]
pub fn transform(
    matrix: &ReportMatrix,
    kind: ChartKind,
    preferences: &DisplayPreferences,
) -> SeriesSet {
    let Some(heading_row) = matrix.heading_row() else {
        debug!(%kind, "report matrix has no heading row");
        return SeriesSet::empty(kind);
    };

    let mut headings: Vec<Option<String>> = heading_row
        .iter()
        .enumerate()
        .map(|(position, cell)| (position > 0).then(|| cell.label()))
        .collect();

    let mut format = ValueFormat::Integer;
    let mut series: Vec<Series> = Vec::with_capacity(matrix.data_rows().len());

    for row in matrix.data_rows() {
        let Some(label_cell) = row.first() else {
            trace!("skipping empty data row");
            continue;
        };
        if label_cell.is_aggregate_marker() {
            continue;
        }

        let key = label_cell.label();
        let visible = !kind.uses_preferences() || !preferences.is_hidden(&key);
        let mut entry = Series::new(key, series_color(kind, series.len()), visible);

        for (position, heading) in heading_row.iter().enumerate().skip(1) {
            if heading.is_aggregate_marker() {
                continue;
            }
            let Some(value) = row.get(position).and_then(Cell::as_number) else {
                trace!(series = %entry.key, position, "skipping non-numeric cell");
                continue;
            };
            if value.fract() != 0.0 {
                format = ValueFormat::Float;
            }
            entry.values.push(point_for(kind, position, heading, value));
        }

        series.push(entry);
    }

    if kind == ChartKind::StackedArea {
        for (slot, cell) in headings.iter_mut().zip(heading_row) {
            if cell.is_aggregate_marker() {
                *slot = None;
            }
        }
    }

    debug!(%kind, series = series.len(), ?format, "transformed report matrix");

    SeriesSet {
        kind,
        x_label: heading_row.first().map(Cell::label),
        headings,
        series,
        format,
    }
}

fn series_color(kind: ChartKind, index: usize) -> Color {
    match kind {
        ChartKind::LineSimple => simple_color_at(index),
        ChartKind::Bar | ChartKind::Line | ChartKind::StackedArea => color_at(index),
    }
}

fn point_for(kind: ChartKind, position: usize, heading: &Cell, value: f64) -> SeriesPoint {
    match kind {
        ChartKind::Line | ChartKind::LineSimple => SeriesPoint::Xy {
            x: position,
            y: value,
        },
        // The counter also counts the label column, hence `position + 1`.
        ChartKind::Bar => SeriesPoint::Labeled {
            position,
            label: disambiguation_label(position + 1, &heading.label()),
            y: value,
        },
        ChartKind::StackedArea => SeriesPoint::Pair(position, value),
    }
}

#[cfg(test)]
mod tests {
    use super::transform;
    use crate::core::{ChartKind, ReportMatrix, SeriesPoint, ValueFormat};
    use crate::preferences::DisplayPreferences;
    use crate::report_matrix;

    #[test]
    fn matrix_without_rows_yields_empty_set() {
        let set = transform(
            &ReportMatrix::default(),
            ChartKind::Line,
            &DisplayPreferences::default(),
        );
        assert!(set.series.is_empty());
        assert_eq!(set.format, ValueFormat::Integer);
    }

    #[test]
    fn heading_only_matrix_yields_no_series() {
        let matrix = report_matrix![["Day", "Mon", "Tue"]];
        let set = transform(&matrix, ChartKind::Bar, &DisplayPreferences::default());
        assert!(set.series.is_empty());
        assert_eq!(set.heading_at(1), Some("Mon"));
        assert_eq!(set.x_label.as_deref(), Some("Day"));
    }

    #[test]
    fn short_rows_skip_missing_cells() {
        let matrix = report_matrix![["", "Mon", "Tue", "Wed"], ["Open", 1]];
        let set = transform(&matrix, ChartKind::Line, &DisplayPreferences::default());
        assert_eq!(set.series[0].values, vec![SeriesPoint::Xy { x: 1, y: 1.0 }]);
    }

    #[test]
    fn simple_line_ignores_hidden_filter() {
        let matrix = report_matrix![["", "Mon"], ["Open", 1], ["Closed", 2]];
        let preferences = DisplayPreferences::with_hidden(["Open"]);
        let set = transform(&matrix, ChartKind::LineSimple, &preferences);
        assert!(set.series.iter().all(|series| series.visible));
        assert_eq!(set.series[0].color.to_hex(), "#7DCE44");
        assert_eq!(set.series[1].color.to_hex(), "#EF653B");
    }
}
