use serde_json::json;
use statviz::core::ChartKind;
use statviz::preferences::{PreferencePatch, PreferenceStore, RecordingEndpoint, StylePatch};

fn recording_store() -> (PreferenceStore, RecordingEndpoint) {
    let endpoint = RecordingEndpoint::new();
    (PreferenceStore::new(Box::new(endpoint.clone())), endpoint)
}

#[test]
fn later_filter_wins_and_style_is_preserved() {
    let (mut store, _endpoint) = recording_store();
    store.merge_update("Report1", ChartKind::Bar, PreferencePatch::style("stacked"));
    store.merge_update("Report1", ChartKind::Bar, PreferencePatch::filter(["X"]));
    store.merge_update("Report1", ChartKind::Bar, PreferencePatch::filter(["X", "Y"]));

    let bar = store.display("Report1", ChartKind::Bar);
    assert_eq!(bar.filter.iter().collect::<Vec<_>>(), vec!["X", "Y"]);
    assert_eq!(bar.style(), Some("stacked"));
    assert!(bar.is_stacked());
}

#[test]
fn merge_is_visible_before_dispatch() {
    let (mut store, endpoint) = recording_store();
    store.merge_update("Report1", ChartKind::Line, PreferencePatch::filter(["A"]));

    assert!(store.get("Report1")[&ChartKind::Line].is_hidden("A"));
    assert_eq!(store.pending_count(), 1);
    assert!(endpoint.updates().is_empty());

    assert_eq!(store.dispatch_pending(), 1);
    assert_eq!(store.pending_count(), 0);
}

#[test]
fn dispatched_value_holds_whole_report() {
    let (mut store, endpoint) = recording_store();
    store.merge_update("Report1", ChartKind::Line, PreferencePatch::filter(["A"]));
    store.merge_update("Report1", ChartKind::Bar, PreferencePatch::style("stacked"));
    store.merge_update("Report2", ChartKind::Bar, PreferencePatch::filter(["B"]));
    assert_eq!(store.dispatch_pending(), 2);

    assert_eq!(
        endpoint.last_value("Report1"),
        Some(json!({
            "Line": { "Filter": ["A"] },
            "Bar": { "State": { "Style": "stacked" } }
        }))
    );
    assert_eq!(
        endpoint.last_value("Report2"),
        Some(json!({ "Bar": { "Filter": ["B"] } }))
    );
    let keys: Vec<String> = endpoint
        .updates()
        .into_iter()
        .map(|update| update.report_key)
        .collect();
    assert_eq!(keys, vec!["Report1", "Report2"]);
}

#[test]
fn unsent_updates_of_one_report_collapse_to_latest() {
    let (mut store, endpoint) = recording_store();
    store.merge_update("Report1", ChartKind::Bar, PreferencePatch::filter(["X"]));
    store.merge_update("Report2", ChartKind::Line, PreferencePatch::filter(["Y"]));
    store.merge_update("Report1", ChartKind::Bar, PreferencePatch::style("stacked"));
    store.merge_update("Report1", ChartKind::Bar, PreferencePatch::filter(["X", "Z"]));
    assert_eq!(store.pending_count(), 2);

    assert_eq!(store.dispatch_pending(), 2);
    let updates = endpoint.updates();
    assert_eq!(updates[0].report_key, "Report1");
    assert_eq!(updates[1].report_key, "Report2");
    assert_eq!(
        endpoint.last_value("Report1"),
        Some(json!({ "Bar": { "Filter": ["X", "Z"], "State": { "Style": "stacked" } } }))
    );

    store.merge_update("Report1", ChartKind::Bar, PreferencePatch::style(""));
    assert_eq!(store.pending_count(), 1);
}

#[test]
fn nested_state_keys_merge_one_by_one() {
    let (mut store, _endpoint) = recording_store();
    store
        .seed(
            "Report1",
            r#"{"StackedArea":{"Filter":["A"],"State":{"Style":"stream","Zoom":2},"Pinned":true}}"#,
        )
        .expect("seed");

    let mut extra = serde_json::Map::new();
    extra.insert("Expanded".to_owned(), json!(true));
    store.merge_update(
        "Report1",
        ChartKind::StackedArea,
        PreferencePatch {
            state: Some(StylePatch {
                style: Some("expand".to_owned()),
                extra,
            }),
            ..PreferencePatch::default()
        },
    );

    let area = store.display("Report1", ChartKind::StackedArea);
    assert_eq!(area.style(), Some("expand"));
    assert!(area.is_hidden("A"));
    assert_eq!(area.state.extra.get("Zoom"), Some(&json!(2)));
    assert_eq!(area.state.extra.get("Expanded"), Some(&json!(true)));
    assert_eq!(area.extra.get("Pinned"), Some(&json!(true)));
}

#[test]
fn endpoint_failures_are_swallowed() {
    let (mut store, endpoint) = recording_store();
    endpoint.set_failing(true);
    store.merge_update("Report1", ChartKind::Bar, PreferencePatch::filter(["A"]));
    assert_eq!(store.dispatch_pending(), 0);

    endpoint.set_failing(false);
    store.merge_update("Report1", ChartKind::Bar, PreferencePatch::style(""));
    assert_eq!(store.dispatch_pending(), 1);
    assert_eq!(
        endpoint.last_value("Report1"),
        Some(json!({ "Bar": { "Filter": ["A"], "State": { "Style": "" } } }))
    );
}

#[test]
fn unknown_report_reads_as_defaults() {
    let mut store = PreferenceStore::default();
    let line = store.display("Nope", ChartKind::Line);
    assert!(line.filter.is_empty());
    assert_eq!(line.style(), None);
}
