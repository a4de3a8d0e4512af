use crate::time::Time;
use serde::Deserialize;
use std::collections::HashMap;
use std::fmt;
use std::fmt::Formatter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum CrewType {
    Tech,
    Cabin,
}

impl CrewType {
    /// Cabin crew post-flight duty depends on the aircraft group.
    pub fn needs_aircraft_group(&self) -> bool {
        matches!(self, CrewType::Cabin)
    }
}

impl fmt::Display for CrewType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            CrewType::Tech => write!(f, "tech"),
            CrewType::Cabin => write!(f, "cabin"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Acclimatization {
    Acclimatized,
    NonAcclimatized,
}

impl fmt::Display for Acclimatization {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Acclimatization::Acclimatized => write!(f, "acclimatized"),
            Acclimatization::NonAcclimatized => write!(f, "non-acclimatized"),
        }
    }
}

/// Local duty-start bands of the acclimatized table. Together they cover the
/// whole day; the last band wraps midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum TimeBand {
    #[serde(rename = "0600-0759")]
    Early,
    #[serde(rename = "0800-1259")]
    Morning,
    #[serde(rename = "1300-1759")]
    Afternoon,
    #[serde(rename = "1800-2159")]
    Evening,
    #[serde(rename = "2200-0559")]
    Night,
}

impl TimeBand {
    #[cfg(test)]
    pub const ALL: [TimeBand; 5] = [
        TimeBand::Early,
        TimeBand::Morning,
        TimeBand::Afternoon,
        TimeBand::Evening,
        TimeBand::Night,
    ];

    pub fn from_time(time: Time) -> TimeBand {
        match time.of_day().0 {
            360..480 => TimeBand::Early,
            480..780 => TimeBand::Morning,
            780..1080 => TimeBand::Afternoon,
            1080..1320 => TimeBand::Evening,
            _ => TimeBand::Night,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TimeBand::Early => "0600-0759",
            TimeBand::Morning => "0800-1259",
            TimeBand::Afternoon => "1300-1759",
            TimeBand::Evening => "1800-2159",
            TimeBand::Night => "2200-0559",
        }
    }
}

impl fmt::Display for TimeBand {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Non-acclimatized rule, chosen by the rest preceding the duty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum RestRule {
    #[serde(rename = "<=18_or_>=30", alias = "≤18_or_≥30")]
    ShortOrLongRest,
    #[serde(rename = "18.01-29.59", alias = "18.01–29.59")]
    IntermediateRest,
}

impl RestRule {
    pub fn from_rest(rest_hours: Option<f64>) -> RestRule {
        match rest_hours {
            Some(rest) if rest > 18.0 && rest < 30.0 => RestRule::IntermediateRest,
            // unknown rest falls back to the more restrictive rule
            _ => RestRule::ShortOrLongRest,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RestRule::ShortOrLongRest => "<=18_or_>=30",
            RestRule::IntermediateRest => "18.01-29.59",
        }
    }
}

impl fmt::Display for RestRule {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Maximum duty hours, each row indexed by sector count (first entry is one sector).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LimitTable {
    #[serde(default)]
    pub acclimatized: HashMap<CrewType, HashMap<TimeBand, Vec<f64>>>,
    #[serde(default)]
    pub non_acclimatized: HashMap<RestRule, HashMap<CrewType, Vec<f64>>>,
}

impl LimitTable {
    pub fn acclimatized_row(&self, crew_type: CrewType, band: TimeBand) -> Option<&[f64]> {
        self.acclimatized
            .get(&crew_type)
            .and_then(|bands| bands.get(&band))
            .map(Vec::as_slice)
    }

    pub fn non_acclimatized_row(&self, rule: RestRule, crew_type: CrewType) -> Option<&[f64]> {
        self.non_acclimatized
            .get(&rule)
            .and_then(|crews| crews.get(&crew_type))
            .map(Vec::as_slice)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub crew_type: CrewType,
    pub acclimatization: Acclimatization,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            crew_type: CrewType::Tech,
            acclimatization: Acclimatization::Acclimatized,
        }
    }
}

impl fmt::Display for Settings {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} crew, {}", self.crew_type, self.acclimatization)
    }
}
