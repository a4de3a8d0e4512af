use crate::aircraft::AircraftGroups;
use crate::limits::CrewType;
use crate::time::Time;

pub const POST_FLIGHT_MINUTES: i64 = 30;
pub const WIDEBODY_POST_FLIGHT_MINUTES: i64 = 45;

pub fn post_flight_margin(crew_type: CrewType, aircraft: Option<&str>, groups: &AircraftGroups) -> i64 {
    match aircraft {
        Some(code) if crew_type.needs_aircraft_group() && groups.is_widebody(code) => {
            WIDEBODY_POST_FLIGHT_MINUTES
        }
        _ => POST_FLIGHT_MINUTES,
    }
}

/// Latest on-blocks time, folded back into the duty-start day. `destination_gmt`
/// is carried for callers that need it; times stay in duty-start local time.
pub fn compute_latest_arrival(
    duty_start: Time,
    limit_hours: f64,
    crew_type: CrewType,
    aircraft: Option<&str>,
    _destination_gmt: Option<&str>,
    groups: &AircraftGroups,
) -> Time {
    let latest_duty_end = duty_start + Time::from_hours(limit_hours);
    let margin = post_flight_margin(crew_type, aircraft, groups);
    (latest_duty_end - margin).of_day()
}
