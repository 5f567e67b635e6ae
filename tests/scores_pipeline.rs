use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use frame_stats::export::{to_json_string, write_csv_to_path};
use frame_stats::ingestion::{read_from_path, ReadOptions};
use frame_stats::processing::{
    column, describe, gb_describe, group_by_column, mean, merge, parse_numeric, rolling,
    sort_by_column, SortOrder, Windowed,
};
use frame_stats::record;
use frame_stats::types::{Frame, Value};

fn tmp_file(ext: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    std::env::temp_dir().join(format!("frame-stats-pipeline-{nanos}.{ext}"))
}

fn scores() -> Frame {
    let raw = read_from_path("tests/fixtures/scores.csv", &ReadOptions::default()).unwrap();
    parse_numeric(&raw, &["value"])
}

#[test]
fn parsed_csv_matches_json_fixture() {
    let json = read_from_path("tests/fixtures/scores.json", &ReadOptions::default()).unwrap();
    assert_eq!(scores(), json);
}

#[test]
fn group_describe_over_fixture() {
    let summary = gb_describe("value", &group_by_column(&scores(), "label"));

    assert_eq!(
        summary.columns(),
        ["group", "min", "max", "count", "sum", "mean", "std"]
    );
    assert_eq!(
        summary.rows[0],
        record! {
            "group" => "A",
            "min" => 3,
            "max" => 7,
            "count" => 2,
            "sum" => 10.0,
            "mean" => 5.0,
            "std" => 2.8284271247461903,
        }
    );
    assert_eq!(summary.rows[1].get("std"), Some(&Value::Float64(2.1213203435596424)));
    assert_eq!(summary.rows[1].get("mean"), Some(&Value::Float64(3.5)));
    assert_eq!(summary.rows[2].get("count"), Some(&Value::Int64(1)));
    assert!(matches!(summary.rows[2].get("std"), Some(Value::Float64(v)) if v.is_nan()));

    let json = to_json_string(&summary).unwrap();
    assert!(json.ends_with(r#"{"group":"C","min":75,"max":75,"count":1,"sum":75.0,"mean":75.0,"std":null}]"#));
}

#[test]
fn series_statistics_over_fixture() {
    let values = column(&scores(), "value");
    assert_eq!(mean(&values), 18.4);

    let summary = describe(&values);
    assert_eq!(summary.get("count"), Some(&Value::Int64(5)));
    assert_eq!(summary.get("median"), Some(&Value::from("5.00000")));

    let means = rolling(mean, 2, &values);
    assert_eq!(
        means,
        vec![
            Windowed::Insufficient,
            Windowed::Full(5.0),
            Windowed::Full(2.5),
            Windowed::Full(3.5),
            Windowed::Full(40.0),
        ]
    );
}

#[test]
fn merge_sort_and_export_round_trip() {
    let regions = read_from_path("tests/fixtures/regions.csv", &ReadOptions::default()).unwrap();
    let merged = merge(&scores(), &regions, "label", "label", "_l", "_r");

    assert_eq!(merged.row_count(), 3);
    assert_eq!(merged.columns(), ["label", "value", "region"]);
    assert_eq!(merged.rows[0].get("value"), Some(&Value::Int64(7)));
    assert_eq!(merged.rows[2].get("region"), Some(&Value::Missing));

    let sorted = sort_by_column(&merged, "value", SortOrder::Descending);
    assert_eq!(sorted.rows[0].get("label"), Some(&Value::from("C")));

    let path = tmp_file("csv");
    write_csv_to_path(&sorted, &path, b',').unwrap();
    let text = std::fs::read_to_string(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(text, "label,value,region\nC,75,\nA,7,north\nB,2,south\n");
}
