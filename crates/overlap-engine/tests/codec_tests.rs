//! Tests for the JSON boundary: shape checks and interval validation.

use overlap_engine::codec::encode_schedule_pretty;
use overlap_engine::{
    decode_schedule, decode_schedules, encode_schedule, intersect_all, Day, Interval,
    ScheduleError,
};

#[test]
fn decodes_stored_blob() {
    let json = r#"{
        "Monday": [{"start": 540, "end": 720}, {"start": 780, "end": 1020}],
        "Friday": []
    }"#;
    let schedule = decode_schedule(json).unwrap();
    assert_eq!(schedule.len(), 2);
    assert_eq!(
        schedule.get(Day::Monday),
        Some(&[Interval { start: 540, end: 720 }, Interval { start: 780, end: 1020 }][..])
    );
    assert_eq!(schedule.get(Day::Friday), Some(&[][..]));
    assert_eq!(schedule.get(Day::Tuesday), None);
}

#[test]
fn empty_object_is_empty_schedule() {
    assert!(decode_schedule("{}").unwrap().is_empty());
}

#[test]
fn rejects_inverted_interval() {
    let json = r#"{"Tuesday": [{"start": 9, "end": 12}, {"start": 15, "end": 14}]}"#;
    match decode_schedule(json) {
        Err(ScheduleError::InvalidInterval { day, index, start, end }) => {
            assert_eq!(day, Day::Tuesday);
            assert_eq!(index, 1);
            assert_eq!((start, end), (15, 14));
        }
        other => panic!("expected InvalidInterval, got {:?}", other),
    }
}

#[test]
fn rejects_zero_length_interval() {
    let json = r#"{"Monday": [{"start": 60, "end": 60}]}"#;
    assert!(matches!(
        decode_schedule(json),
        Err(ScheduleError::InvalidInterval { .. })
    ));
}

#[test]
fn rejects_non_numeric_bounds() {
    let json = r#"{"Monday": [{"start": "9am", "end": 17}]}"#;
    assert!(matches!(decode_schedule(json), Err(ScheduleError::Json(_))));
}

#[test]
fn rejects_unknown_day_names() {
    let json = r#"{"Caturday": [{"start": 1, "end": 2}]}"#;
    assert!(matches!(decode_schedule(json), Err(ScheduleError::Json(_))));
}

#[test]
fn rejects_missing_bound() {
    let json = r#"{"Monday": [{"start": 1}]}"#;
    assert!(matches!(decode_schedule(json), Err(ScheduleError::Json(_))));
}

#[test]
fn decodes_array_and_intersects() {
    let json = r#"[
        {"Monday": [{"start": 9, "end": 17}]},
        {"Monday": [{"start": 13, "end": 20}], "Tuesday": [{"start": 1, "end": 2}]}
    ]"#;
    let schedules = decode_schedules(json).unwrap();
    let result = intersect_all(&schedules);
    assert_eq!(encode_schedule(&result).unwrap(), r#"{"Monday":[{"start":13,"end":17}]}"#);
}

#[test]
fn array_validation_checks_every_element() {
    let json = r#"[
        {"Monday": [{"start": 9, "end": 17}]},
        {"Sunday": [{"start": 20, "end": 10}]}
    ]"#;
    assert!(matches!(
        decode_schedules(json),
        Err(ScheduleError::InvalidInterval { day: Day::Sunday, .. })
    ));
}

#[test]
fn encoding_orders_days_by_week() {
    let schedule = decode_schedule(r#"{"Sunday": [], "Monday": [], "Wednesday": []}"#).unwrap();
    assert_eq!(
        encode_schedule(&schedule).unwrap(),
        r#"{"Monday":[],"Wednesday":[],"Sunday":[]}"#
    );
}

#[test]
fn pretty_output_decodes_back() {
    let schedule = decode_schedule(r#"{"Thursday": [{"start": 0, "end": 1440}]}"#).unwrap();
    let pretty = encode_schedule_pretty(&schedule).unwrap();
    assert!(pretty.contains('\n'));
    assert_eq!(decode_schedule(&pretty).unwrap(), schedule);
}
