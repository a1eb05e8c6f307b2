//! Tests for the week-level schedule model and its JSON shape.

use slot_engine::{SlotError, TimeInterval, WeekSchedule, Weekday};

fn slot(start: u8, end: u8) -> TimeInterval {
    TimeInterval::new(start, end).unwrap()
}

// ── Weekday ─────────────────────────────────────────────────────────────────

#[test]
fn weekday_parses_full_names_and_abbreviations() {
    assert_eq!("monday".parse::<Weekday>().unwrap(), Weekday::Monday);
    assert_eq!("Wednesday".parse::<Weekday>().unwrap(), Weekday::Wednesday);
    assert_eq!("FRI".parse::<Weekday>().unwrap(), Weekday::Friday);
    assert_eq!("sun".parse::<Weekday>().unwrap(), Weekday::Sunday);
}

#[test]
fn unknown_day_name_fails() {
    assert!(matches!(
        "someday".parse::<Weekday>(),
        Err(SlotError::ParseDay(_))
    ));
}

#[test]
fn weekday_displays_capitalized() {
    assert_eq!(Weekday::Tuesday.to_string(), "Tuesday");
}

#[test]
fn weekdays_order_monday_first() {
    assert!(Weekday::Monday < Weekday::Sunday);
    assert_eq!(Weekday::ALL.len(), 7);
    assert_eq!(Weekday::ALL[0], Weekday::Monday);
    assert_eq!(Weekday::ALL[6], Weekday::Sunday);
}

// ── Adding and removing ─────────────────────────────────────────────────────

#[test]
fn adding_creates_the_day_entry() {
    let mut week = WeekSchedule::new();
    assert!(week.is_empty());

    week.add(Weekday::Monday, slot(9, 12));

    assert!(!week.is_empty());
    assert_eq!(week.slots_for(Weekday::Monday), &[slot(9, 12)]);
}

#[test]
fn days_stay_in_week_order_regardless_of_insertion() {
    let mut week = WeekSchedule::new();
    week.add(Weekday::Friday, slot(9, 10));
    week.add(Weekday::Monday, slot(9, 10));
    week.add(Weekday::Wednesday, slot(9, 10));

    let days: Vec<Weekday> = week.days().map(|entry| entry.day).collect();
    assert_eq!(days, vec![Weekday::Monday, Weekday::Wednesday, Weekday::Friday]);
}

#[test]
fn adding_merges_within_the_day() {
    let mut week = WeekSchedule::new();
    week.add(Weekday::Monday, slot(9, 11));
    week.add(Weekday::Monday, slot(10, 13));
    week.add(Weekday::Monday, slot(13, 14));

    assert_eq!(week.slots_for(Weekday::Monday), &[slot(9, 14)]);
}

#[test]
fn days_do_not_merge_across_each_other() {
    let mut week = WeekSchedule::new();
    week.add(Weekday::Monday, slot(9, 11));
    week.add(Weekday::Tuesday, slot(10, 13));

    assert_eq!(week.slots_for(Weekday::Monday), &[slot(9, 11)]);
    assert_eq!(week.slots_for(Weekday::Tuesday), &[slot(10, 13)]);
}

#[test]
fn removing_the_last_slot_drops_the_day() {
    let mut week = WeekSchedule::new();
    week.add(Weekday::Monday, slot(9, 12));
    week.add(Weekday::Tuesday, slot(14, 16));

    week.remove(Weekday::Monday, slot(9, 12));

    assert!(week.slots_for(Weekday::Monday).is_empty());
    let days: Vec<Weekday> = week.days().map(|entry| entry.day).collect();
    assert_eq!(days, vec![Weekday::Tuesday]);
}

#[test]
fn removing_an_unknown_slot_is_a_noop() {
    let mut week = WeekSchedule::new();
    week.add(Weekday::Monday, slot(9, 12));

    week.remove(Weekday::Monday, slot(14, 16));
    week.remove(Weekday::Friday, slot(9, 12));

    assert_eq!(week.slots_for(Weekday::Monday), &[slot(9, 12)]);
}

// ── Queries ─────────────────────────────────────────────────────────────────

#[test]
fn contains_checks_day_and_hour() {
    let mut week = WeekSchedule::new();
    week.add(Weekday::Monday, slot(9, 12));

    assert!(week.contains(Weekday::Monday, 9));
    assert!(week.contains(Weekday::Monday, 11));
    assert!(!week.contains(Weekday::Monday, 12));
    assert!(!week.contains(Weekday::Tuesday, 9));
}

#[test]
fn total_hours_sums_across_the_week() {
    let mut week = WeekSchedule::new();
    week.add(Weekday::Monday, slot(9, 12)); // 3
    week.add(Weekday::Wednesday, slot(14, 16)); // 2
    week.add(Weekday::Saturday, slot(10, 11)); // 1

    assert_eq!(week.total_hours(), 6);
}

// ── JSON shape ──────────────────────────────────────────────────────────────

#[test]
fn serializes_to_day_entry_array() {
    let mut week = WeekSchedule::new();
    week.add(Weekday::Monday, slot(9, 12));
    week.add(Weekday::Monday, slot(14, 16));
    week.add(Weekday::Thursday, slot(10, 11));

    let value = serde_json::to_value(&week).unwrap();
    let expected = serde_json::json!([
        {"day": "monday", "slots": ["09:00-12:00", "14:00-16:00"]},
        {"day": "thursday", "slots": ["10:00-11:00"]}
    ]);
    assert_eq!(value, expected);
}

#[test]
fn serde_round_trip_preserves_the_schedule() {
    let mut week = WeekSchedule::new();
    week.add(Weekday::Tuesday, slot(8, 10));
    week.add(Weekday::Sunday, slot(18, 21));

    let json = serde_json::to_string(&week).unwrap();
    let loaded: WeekSchedule = serde_json::from_str(&json).unwrap();
    assert_eq!(week, loaded);
}

#[test]
fn deserializing_normalizes_a_hand_edited_file() {
    // Out-of-order days, overlapping and adjacent slots -- loading cleans it up.
    let raw = r#"[
        {"day": "friday", "slots": ["10:00-12:00", "09:00-11:00"]},
        {"day": "monday", "slots": ["08:00-09:00", "09:00-10:00"]}
    ]"#;

    let week: WeekSchedule = serde_json::from_str(raw).unwrap();

    let days: Vec<Weekday> = week.days().map(|entry| entry.day).collect();
    assert_eq!(days, vec![Weekday::Monday, Weekday::Friday]);
    assert_eq!(week.slots_for(Weekday::Monday), &[slot(8, 10)]);
    assert_eq!(week.slots_for(Weekday::Friday), &[slot(9, 12)]);
}

#[test]
fn deserializing_a_bad_slot_fails() {
    let raw = r#"[{"day": "monday", "slots": ["12:00-09:00"]}]"#;
    assert!(serde_json::from_str::<WeekSchedule>(raw).is_err());
}
