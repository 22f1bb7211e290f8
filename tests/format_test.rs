use chrono::{NaiveDate, NaiveTime};
use serde_json::json;

use qdl::course::{course_name, LARANJAL_COURSE_ID, NORTH_COURSE_ID, SOUTH_COURSE_ID};
use qdl::error::TeeTimeError;
use qdl::format::{format_tee_times, sort_and_dedup};
use qdl::model::{AvailabilityResponse, TeeTimeRecord};
use qdl::query::SlotQuery;

fn make_slot(course_id: &str) -> SlotQuery {
    SlotQuery {
        date: NaiveDate::from_ymd_opt(2030, 9, 24).unwrap(),
        time: NaiveTime::from_hms_opt(7, 0, 0).unwrap(),
        players: 4,
        course_id: course_id.to_string(),
    }
}

fn decode(body: serde_json::Value) -> AvailabilityResponse {
    serde_json::from_value(body).unwrap()
}

#[test]
fn one_record_per_entry() {
    let response = decode(json!({
        "results": [
            {"price": 120.0, "start_hole": 1},
            {"price": 95.0, "start_hole": 10},
            {"price": 120.0, "start_hole": 10},
        ]
    }));
    let slot = make_slot(SOUTH_COURSE_ID);

    let records = format_tee_times(&response, &slot).unwrap();
    assert_eq!(records.len(), 3);
    assert!(records.iter().all(|r| r.course == "South Course"));
}

#[test]
fn empty_results_produce_empty_sequence() {
    let response = decode(json!({"results": []}));
    let slot = make_slot(NORTH_COURSE_ID);

    let records = format_tee_times(&response, &slot).unwrap();
    assert!(records.is_empty());
}

#[test]
fn missing_results_key_decodes_as_empty() {
    let response = decode(json!({}));
    let slot = make_slot(LARANJAL_COURSE_ID);

    let records = format_tee_times(&response, &slot).unwrap();
    assert!(records.is_empty());
}

#[test]
fn unknown_course_fails_before_producing_records() {
    let response = decode(json!({
        "results": [{"price": 120.0, "start_hole": 1}]
    }));
    let slot = make_slot("35130-201-9999999999");

    match format_tee_times(&response, &slot) {
        Err(TeeTimeError::UnknownCourse(id)) => assert_eq!(id, "35130-201-9999999999"),
        other => panic!("expected UnknownCourse, got {other:?}"),
    }
}

#[test]
fn record_combines_slot_and_entry_fields() {
    let response = decode(json!({
        "results": [{"price": 120, "start_hole": 1}]
    }));
    let slot = make_slot(SOUTH_COURSE_ID);

    let records = format_tee_times(&response, &slot).unwrap();
    assert_eq!(records.len(), 1);

    let record = &records[0];
    assert_eq!(record.date, "2030-09-24");
    assert_eq!(record.time, "07:00");
    assert_eq!(record.course, "South Course");
    assert_eq!(record.price, 120.0);
    assert_eq!(record.players, 4);
    assert_eq!(record.start_hole, 1);
}

#[test]
fn records_preserve_entry_order() {
    let response = decode(json!({
        "results": [
            {"price": 140.0, "start_hole": 10},
            {"price": 80.0, "start_hole": 1},
            {"price": 110.0, "start_hole": 1},
        ]
    }));
    let slot = make_slot(SOUTH_COURSE_ID);

    let records = format_tee_times(&response, &slot).unwrap();
    let prices: Vec<f64> = records.iter().map(|r| r.price).collect();
    assert_eq!(prices, vec![140.0, 80.0, 110.0]);
}

#[test]
fn entry_missing_price_fails_decode() {
    let result: Result<AvailabilityResponse, _> = serde_json::from_value(json!({
        "results": [{"start_hole": 1}]
    }));
    assert!(result.is_err());
}

#[test]
fn entry_missing_start_hole_fails_decode() {
    let result: Result<AvailabilityResponse, _> = serde_json::from_value(json!({
        "results": [{"price": 120.0}]
    }));
    assert!(result.is_err());
}

#[test]
fn integer_price_decodes_as_float() {
    let response = decode(json!({
        "results": [{"price": 120, "start_hole": 1}]
    }));
    assert_eq!(response.results[0].price, 120.0);
}

#[test]
fn every_known_course_id_resolves() {
    assert_eq!(course_name(SOUTH_COURSE_ID), Some("South Course"));
    assert_eq!(course_name(NORTH_COURSE_ID), Some("North Course"));
    assert_eq!(course_name(LARANJAL_COURSE_ID), Some("Laranjal"));
}

#[test]
fn unknown_course_id_has_no_name() {
    assert_eq!(course_name("Sul"), None);
}

fn record(date: &str, time: &str, course: &str, price: f64) -> TeeTimeRecord {
    TeeTimeRecord {
        date: date.to_string(),
        time: time.to_string(),
        course: course.to_string(),
        price,
        players: 4,
        start_hole: 1,
    }
}

#[test]
fn sort_orders_by_date_then_time_then_course() {
    let mut records = vec![
        record("2030-09-25", "07:00", "Laranjal", 90.0),
        record("2030-09-24", "08:00", "South Course", 120.0),
        record("2030-09-24", "07:00", "South Course", 110.0),
        record("2030-09-24", "07:00", "North Course", 100.0),
    ];

    sort_and_dedup(&mut records);

    assert_eq!(records[0].course, "North Course");
    assert_eq!(records[1].course, "South Course");
    assert_eq!(records[1].time, "07:00");
    assert_eq!(records[2].time, "08:00");
    assert_eq!(records[3].date, "2030-09-25");
}

#[test]
fn dedup_removes_exact_duplicates() {
    let mut records = vec![
        record("2030-09-24", "07:00", "South Course", 120.0),
        record("2030-09-24", "08:00", "South Course", 120.0),
        record("2030-09-24", "07:00", "South Course", 120.0),
    ];

    sort_and_dedup(&mut records);
    assert_eq!(records.len(), 2);
}

#[test]
fn dedup_keeps_same_slot_with_different_price() {
    let mut records = vec![
        record("2030-09-24", "07:00", "South Course", 120.0),
        record("2030-09-24", "07:00", "South Course", 95.0),
    ];

    sort_and_dedup(&mut records);
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].price, 95.0);
}
