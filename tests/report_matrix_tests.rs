use statviz::core::{Cell, ChartKind, ReportMatrix, transform};
use statviz::preferences::DisplayPreferences;

#[test]
fn raw_result_drops_title_row() {
    let matrix = ReportMatrix::from_raw_result(
        r#"[["Tickets per day"], ["Day", "Mon", "Tue"], ["Open", 1, "2"]]"#,
    )
    .expect("raw result");

    assert_eq!(matrix.heading_row().map(<[Cell]>::len), Some(3));
    assert_eq!(matrix.data_rows().len(), 1);
    assert_eq!(matrix.data_rows()[0][2].as_number(), Some(2.0));

    let set = transform(&matrix, ChartKind::Line, &DisplayPreferences::default());
    assert_eq!(set.x_label.as_deref(), Some("Day"));
    assert_eq!(set.keys(), vec!["Open"]);
}

#[test]
fn empty_raw_result_is_an_empty_matrix() {
    let matrix = ReportMatrix::from_raw_result("[]").expect("empty");
    assert!(matrix.is_empty());
    assert!(matrix.heading_row().is_none());
}

#[test]
fn malformed_json_is_rejected() {
    assert!(ReportMatrix::from_json_str("[[1,").is_err());
    assert!(ReportMatrix::from_json_str(r#"{"rows": []}"#).is_err());
}

#[test]
fn non_finite_text_is_not_a_number() {
    assert_eq!(Cell::from("inf").as_number(), None);
    assert_eq!(Cell::from("NaN").as_number(), None);
    assert_eq!(Cell::Blank.as_number(), None);
    assert_eq!(Cell::from("1.25").as_number(), Some(1.25));
}
