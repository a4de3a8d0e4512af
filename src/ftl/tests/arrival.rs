use crate::ftl::arrival::{compute_latest_arrival, post_flight_margin};
use crate::ftl::tests::utils::aircraft_groups;
use crate::limits::CrewType;
use crate::limits::CrewType::{Cabin, Tech};
use crate::time::Time;

fn latest(start: &str, limit_hours: f64, crew: CrewType, aircraft: Option<&str>) -> String {
    let start = Time::parse_hhmm(start).unwrap();
    compute_latest_arrival(start, limit_hours, crew, aircraft, None, &aircraft_groups()).to_string()
}

#[test]
fn test_same_day_arrival() {
    assert_eq!("18:30", latest("06:30", 12.5, Tech, Some("B737")));
    assert_eq!("17:45", latest("08:00", 10.25, Tech, None));
}

#[test]
fn test_rollover_past_midnight() {
    assert_eq!("07:30", latest("22:00", 10.0, Tech, None));
    assert_eq!("00:00", latest("14:30", 10.0, Tech, None));
}

#[test]
fn test_margin_rolls_back_before_midnight() {
    assert_eq!("23:45", latest("14:15", 10.0, Tech, None));
    assert_eq!("23:30", latest("00:00", 0.0, Tech, None));
}

#[test]
fn test_widebody_margin_for_cabin_crew() {
    let groups = aircraft_groups();
    assert_eq!(45, post_flight_margin(Cabin, Some("B77W"), &groups));
    assert_eq!(30, post_flight_margin(Cabin, Some("B738"), &groups));
    assert_eq!(30, post_flight_margin(Cabin, Some("ZZZ"), &groups));
    assert_eq!(30, post_flight_margin(Cabin, None, &groups));
    assert_eq!(30, post_flight_margin(Tech, Some("B77W"), &groups));

    assert_eq!("17:45", latest("06:30", 12.0, Cabin, Some("B77W")));
    assert_eq!("18:00", latest("06:30", 12.0, Tech, Some("B77W")));
}

#[test]
fn test_destination_offset_is_not_applied() {
    let start = Time::parse_hhmm("06:30").unwrap();
    let groups = aircraft_groups();

    assert_eq!(
        compute_latest_arrival(start, 12.0, Tech, None, None, &groups),
        compute_latest_arrival(start, 12.0, Tech, None, Some("+05:30"), &groups)
    );
}
