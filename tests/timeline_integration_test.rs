//! Integration tests for transcript loading and timeline filtering
mod common;

use askwhy::filters::{ALL_MONTHS, ALL_WEEKS, FilterState, TimelineFilterEngine};
use askwhy::parsers::load_transcript;
use common::{TranscriptEntryBuilder, TranscriptFileBuilder, visit_transcript};
use serde_json::json;

fn texts(engine: &TimelineFilterEngine) -> Vec<String> {
    engine.filtered().iter().map(|e| e.entry.text.clone()).collect()
}

#[test]
fn test_load_jsonl_and_derive_facets() {
    let (_dir, path) = TranscriptFileBuilder::new().with_entries(visit_transcript()).build_jsonl();

    let transcript = load_transcript(&path).expect("Load transcript");
    assert_eq!(transcript.len(), 4);

    let engine = TimelineFilterEngine::new(transcript);
    assert_eq!(engine.month_options(), [ALL_MONTHS, "January", "February", "Unknown"]);
    assert_eq!(engine.week_options(), [ALL_WEEKS, "Week 1", "Week 3", "Unknown"]);
    assert_eq!(engine.entries()[3].facets.month, "Unknown");
    assert_eq!(engine.entries()[3].facets.week, "Unknown");
}

#[test]
fn test_json_array_matches_jsonl() {
    let (_a, jsonl) = TranscriptFileBuilder::new().with_entries(visit_transcript()).build_jsonl();
    let (_b, array) =
        TranscriptFileBuilder::new().with_entries(visit_transcript()).build_json_array();

    assert_eq!(load_transcript(&jsonl).unwrap(), load_transcript(&array).unwrap());
}

#[test]
fn test_search_returns_matches_in_transcript_order() {
    let (_dir, path) = TranscriptFileBuilder::new().with_entries(visit_transcript()).build_jsonl();
    let mut engine = TimelineFilterEngine::new(load_transcript(&path).unwrap());

    engine.set_search("cholesterol");
    assert_eq!(texts(&engine), ["Cholesterol panel ordered", "My cholesterol is down!"]);

    engine.set_search("CHOLESTEROL");
    assert_eq!(engine.filtered().len(), 2);
}

#[test]
fn test_month_switch_resets_week_missing_from_new_month() {
    let (_dir, path) = TranscriptFileBuilder::new().with_entries(visit_transcript()).build_jsonl();
    let mut engine = TimelineFilterEngine::new(load_transcript(&path).unwrap());

    engine.set_month("January");
    engine.set_week("Week 3");
    assert_eq!(texts(&engine), ["Cholesterol panel ordered"]);

    engine.set_month("February");
    assert_eq!(engine.state().selected_week, ALL_WEEKS);
    assert_eq!(texts(&engine), ["My cholesterol is down!"]);
}

#[test]
fn test_combined_filters() {
    let (_dir, path) = TranscriptFileBuilder::new().with_entries(visit_transcript()).build_jsonl();
    let mut engine = TimelineFilterEngine::new(load_transcript(&path).unwrap());

    let state = FilterState::new().with_month("January").with_week("Week 1").with_search("year");
    engine.apply(state);
    assert_eq!(texts(&engine), ["Happy new year, booking a check-up"]);

    engine.apply(FilterState::new().with_month("January").with_search("down"));
    assert!(engine.filtered().is_empty());

    engine.reset();
    assert_eq!(engine.filtered().len(), 4);
}

#[test]
fn test_unknown_facet_can_be_selected() {
    let (_dir, path) = TranscriptFileBuilder::new().with_entries(visit_transcript()).build_jsonl();
    let mut engine = TimelineFilterEngine::new(load_transcript(&path).unwrap());

    engine.set_month("Unknown");
    assert_eq!(engine.week_options(), [ALL_WEEKS, "Unknown"]);
    assert_eq!(texts(&engine), ["Note without a date"]);
}

#[test]
fn test_malformed_records_are_skipped() {
    let (_dir, path) = TranscriptFileBuilder::new()
        .with_entries(visit_transcript())
        .with_raw_line("{not json")
        .with_raw_line(r#"{"sender": "Missing text"}"#)
        .build_jsonl();

    let transcript = load_transcript(&path).expect("Load transcript");
    assert_eq!(transcript.len(), 4);
}

#[test]
fn test_mostly_corrupt_file_fails() {
    let (_dir, path) = TranscriptFileBuilder::new()
        .with_entry(TranscriptEntryBuilder::new("Only good line").on(3, 1))
        .with_raw_line("garbage")
        .with_raw_line("more garbage")
        .build_jsonl();

    assert!(load_transcript(&path).is_err());
}

#[test]
fn test_unparseable_timestamp_is_unknown() {
    let (_dir, path) = TranscriptFileBuilder::new()
        .with_entry(TranscriptEntryBuilder::new("Odd clock").timestamp(json!("yesterday")))
        .with_entry(TranscriptEntryBuilder::new("String millis").timestamp(json!("1704067200000")))
        .build_jsonl();

    let engine = TimelineFilterEngine::new(load_transcript(&path).unwrap());
    assert_eq!(engine.entries()[0].facets.month, "Unknown");
    assert_eq!(engine.entries()[1].facets.month, "January");
    assert_eq!(engine.entries()[1].facets.week, "Week 1");
}

#[test]
fn test_missing_file_is_an_error() {
    let dir = tempfile::TempDir::new().unwrap();
    let err = load_transcript(&dir.path().join("nope.jsonl")).unwrap_err();
    assert!(err.to_string().contains("Failed to open transcript file"));
}
