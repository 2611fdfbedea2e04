use proptest::prelude::*;
use statviz::core::{AGGREGATE_MARKER, Cell, ChartKind, ReportMatrix, ValueFormat, transform};
use statviz::preferences::DisplayPreferences;

fn kind_strategy() -> impl Strategy<Value = ChartKind> {
    prop::sample::select(ChartKind::ALL.to_vec())
}

fn cell_strategy() -> impl Strategy<Value = Cell> {
    prop_oneof![
        (-1_000i32..1_000).prop_map(Cell::from),
        (-1_000.0f64..1_000.0).prop_map(Cell::from),
        Just(Cell::Blank),
        Just(Cell::from("n/a")),
    ]
}

/// Matrix with a "Sum" column at `sum_column` and a trailing "Sum" row.
fn matrix_strategy() -> impl Strategy<Value = (ReportMatrix, usize)> {
    (1usize..6, 0usize..5).prop_flat_map(|(columns, rows)| {
        (
            prop::collection::vec(prop::collection::vec(cell_strategy(), columns + 1), rows),
            1..=columns + 1,
        )
            .prop_map(move |(cells, sum_column)| {
                let mut heading = vec![Cell::from("Day")];
                for column in 1..=columns + 1 {
                    if column == sum_column {
                        heading.push(Cell::from(AGGREGATE_MARKER));
                    } else {
                        heading.push(Cell::from(format!("C{column}")));
                    }
                }
                let mut all_rows = vec![heading];
                for (index, row) in cells.into_iter().enumerate() {
                    let mut full = vec![Cell::from(format!("R{index}"))];
                    full.extend(row);
                    all_rows.push(full);
                }
                let mut total = vec![Cell::from(AGGREGATE_MARKER)];
                total.extend((0..=columns).map(|_| Cell::from(1.5)));
                all_rows.push(total);
                (ReportMatrix::new(all_rows), sum_column)
            })
    })
}

proptest! {
    #[test]
    fn aggregate_row_and_column_never_reach_output(
        (matrix, sum_column) in matrix_strategy(),
        kind in kind_strategy()
    ) {
        let set = transform(&matrix, kind, &DisplayPreferences::default());

        prop_assert!(set.series.iter().all(|series| series.key != AGGREGATE_MARKER));
        for series in &set.series {
            prop_assert!(series.values.iter().all(|point| point.position() != sum_column));
        }
    }

    #[test]
    fn float_format_iff_a_retained_value_is_fractional(
        (matrix, _sum_column) in matrix_strategy(),
        kind in kind_strategy()
    ) {
        let set = transform(&matrix, kind, &DisplayPreferences::default());
        let any_fraction = set
            .series
            .iter()
            .flat_map(|series| series.values.iter())
            .any(|point| point.value().fract() != 0.0);

        let expected = if any_fraction { ValueFormat::Float } else { ValueFormat::Integer };
        prop_assert_eq!(set.format, expected);
    }

    #[test]
    fn points_stay_in_column_order(
        (matrix, _sum_column) in matrix_strategy(),
        kind in kind_strategy()
    ) {
        let set = transform(&matrix, kind, &DisplayPreferences::default());
        for series in &set.series {
            let positions: Vec<usize> = series.values.iter().map(|point| point.position()).collect();
            prop_assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
            prop_assert!(positions.iter().all(|position| *position >= 1));
        }
    }
}
