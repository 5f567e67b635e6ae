use frame_stats::ingestion::json::{read_json_from_path, read_json_from_str};
use frame_stats::ingestion::{read_from_path, ReadOptions};
use frame_stats::record;
use frame_stats::types::Value;

#[test]
fn json_fixture_keeps_native_numbers() {
    let df = read_json_from_path("tests/fixtures/scores.json").unwrap();
    assert_eq!(df.row_count(), 5);
    assert_eq!(df.rows[0], record! { "label" => "A", "value" => 7 });
    assert_eq!(df.rows[4].get("value"), Some(&Value::Int64(75)));
}

#[test]
fn unified_reader_infers_json() {
    let df = read_from_path("tests/fixtures/scores.json", &ReadOptions::default()).unwrap();
    assert_eq!(df.columns(), ["label", "value"]);
}

#[test]
fn key_order_follows_the_document() {
    let df = read_json_from_str(r#"{"zeta":1,"alpha":2,"mid":null}"#).unwrap();
    assert_eq!(df.columns(), ["zeta", "alpha", "mid"]);
    assert_eq!(df.rows[0].get("mid"), Some(&Value::Null));
}

#[test]
fn malformed_ndjson_line_is_a_json_error() {
    let err = read_json_from_str("{\"a\":1}\n{\"a\":\n").unwrap_err();
    assert!(matches!(err, frame_stats::FrameError::Json(_)));
}
