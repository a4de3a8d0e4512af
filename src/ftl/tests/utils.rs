use crate::aircraft::AircraftGroups;
use crate::config::FtlConfig;
use crate::flight::Flight;
use crate::ftl::report::{FtlEvent, Reporter};
use crate::limits::{Acclimatization, CrewType, LimitTable, RestRule, Settings, TimeBand};
use proptest::prelude::Strategy;
use proptest::prop_oneof;
use proptest::strategy::Just;
use std::collections::HashMap;
use std::sync::Arc;

pub const TECH_EARLY: [f64; 9] = [13.0, 12.5, 12.0, 11.5, 11.0, 10.5, 10.0, 9.5, 9.0];
pub const TECH_NIGHT: [f64; 4] = [11.0, 10.5, 9.0, 8.75];
pub const SHORT_OR_LONG_REST: [f64; 4] = [11.0, 10.5, 10.0, 9.5];
pub const INTERMEDIATE_REST: [f64; 4] = [12.0, 11.5, 11.0, 10.5];

pub fn settings(crew_type: CrewType, acclimatization: Acclimatization) -> Settings {
    Settings {
        crew_type,
        acclimatization,
    }
}

pub fn limit_table() -> LimitTable {
    let mut tech = HashMap::new();
    tech.insert(TimeBand::Early, TECH_EARLY.to_vec());
    tech.insert(TimeBand::Morning, vec![13.0, 12.5, 12.0, 11.5, 11.0]);
    tech.insert(TimeBand::Afternoon, vec![12.5, 12.0, 11.5, 11.0, 10.5]);
    tech.insert(TimeBand::Evening, vec![12.0, 11.5, 11.0, 10.5, 10.0]);
    tech.insert(TimeBand::Night, TECH_NIGHT.to_vec());

    // cabin only covers the morning band
    let mut cabin = HashMap::new();
    cabin.insert(TimeBand::Morning, vec![13.5, 13.0, 12.5, 12.0, 11.5]);

    let mut acclimatized = HashMap::new();
    acclimatized.insert(CrewType::Tech, tech);
    acclimatized.insert(CrewType::Cabin, cabin);

    let mut short_or_long = HashMap::new();
    short_or_long.insert(CrewType::Tech, SHORT_OR_LONG_REST.to_vec());
    short_or_long.insert(CrewType::Cabin, vec![11.5, 11.0, 10.5, 10.0]);
    let mut intermediate = HashMap::new();
    intermediate.insert(CrewType::Tech, INTERMEDIATE_REST.to_vec());

    let mut non_acclimatized = HashMap::new();
    non_acclimatized.insert(RestRule::ShortOrLongRest, short_or_long);
    non_acclimatized.insert(RestRule::IntermediateRest, intermediate);

    LimitTable {
        acclimatized,
        non_acclimatized,
    }
}

pub fn aircraft_groups() -> AircraftGroups {
    let mut groups = HashMap::new();
    groups.insert("B77".to_string(), Arc::from("Widebody"));
    groups.insert("A35".to_string(), Arc::from("Widebody"));
    groups.insert("B73".to_string(), Arc::from("Narrowbody"));
    AircraftGroups(groups)
}

pub fn config() -> FtlConfig {
    FtlConfig::new(vec![], aircraft_groups(), limit_table())
}

pub fn start(duty_start: &str, aircraft: &str) -> Flight {
    Flight {
        duty_start: Some(duty_start.to_string()),
        aircraft: Some(aircraft.to_string()),
        ..Flight::default()
    }
}

pub fn sector(aircraft: &str) -> Flight {
    Flight {
        aircraft: Some(aircraft.to_string()),
        ..Flight::default()
    }
}

pub fn end(duty_end: &str, aircraft: &str) -> Flight {
    Flight {
        duty_end: Some(duty_end.to_string()),
        aircraft: Some(aircraft.to_string()),
        ..Flight::default()
    }
}

/// A single-sector duty with both markers on one flight.
pub fn out_and_back(duty_start: &str, duty_end: &str, aircraft: &str) -> Flight {
    Flight {
        duty_start: Some(duty_start.to_string()),
        duty_end: Some(duty_end.to_string()),
        aircraft: Some(aircraft.to_string()),
        ..Flight::default()
    }
}

#[derive(Default)]
pub struct RecordingReporter {
    pub events: Vec<FtlEvent>,
}

impl Reporter for RecordingReporter {
    fn report(&mut self, event: FtlEvent) {
        self.events.push(event);
    }
}

pub fn arb_marker() -> impl Strategy<Value = (bool, bool)> {
    prop_oneof![
        Just((false, false)),
        Just((true, false)),
        Just((false, true)),
        Just((true, true)),
    ]
}

pub fn arb_flight() -> impl Strategy<Value = Flight> {
    (arb_marker(), 0..72u32, 0..60u32, prop_oneof![Just("B737"), Just("B77W"), Just("")]).prop_map(
        |((has_start, has_end), hour, minute, aircraft)| {
            let stamp = format!("2024-01-{:02} {:02}:{:02}", 1 + hour / 24, hour % 24, minute);
            Flight {
                duty_start: has_start.then(|| stamp.clone()),
                duty_end: has_end.then(|| stamp.clone()),
                aircraft: Some(aircraft.to_string()),
                ..Flight::default()
            }
        },
    )
}
