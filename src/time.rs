use crate::error::FtlError;
use chrono::{NaiveDateTime, Timelike};
use std::fmt;
use std::ops::{Add, Sub};

pub const MINUTES_PER_DAY: i64 = 1440;

/// Minutes since local midnight of the duty day. Intermediate values may run
/// past either end of the day; `of_day` folds them back.
#[derive(Debug, Clone, Copy, Ord, Eq, PartialEq, PartialOrd)]
pub struct Time(pub i64);

impl Time {
    #[cfg(test)]
    pub fn parse_hhmm(s: &str) -> Result<Time, FtlError> {
        let malformed = || FtlError::MalformedInput(format!("'{}' is not a HH:MM time", s));
        let (h, m) = s.trim().split_once(':').ok_or_else(malformed)?;
        let hours = h.parse::<i64>().map_err(|_| malformed())?;
        let mins = m.parse::<i64>().map_err(|_| malformed())?;
        if !(0..24).contains(&hours) || !(0..60).contains(&mins) {
            return Err(malformed());
        }
        Ok(Time(hours * 60 + mins))
    }

    pub fn from_hours(hours: f64) -> Time {
        Time((hours * 60.0).round() as i64)
    }

    pub fn of_day(self) -> Time {
        Time(self.0.rem_euclid(MINUTES_PER_DAY))
    }
}

impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let minutes = self.of_day().0;
        write!(f, "{:02}:{:02}", minutes / 60, minutes % 60)
    }
}

impl Add<i64> for Time {
    type Output = Self;

    fn add(self, rhs: i64) -> Self::Output {
        Time(self.0.saturating_add(rhs))
    }
}

impl Add<Time> for Time {
    type Output = Self;

    fn add(self, rhs: Time) -> Self::Output {
        Time(self.0.saturating_add(rhs.0))
    }
}

impl Sub<i64> for Time {
    type Output = Self;

    fn sub(self, rhs: i64) -> Self::Output {
        Time(self.0.saturating_sub(rhs))
    }
}

/// A roster duty marker such as `2024-01-01 06:30`, in station local time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct DutyTimestamp(pub NaiveDateTime);

impl DutyTimestamp {
    const FORMATS: [&'static str; 4] = [
        "%Y-%m-%d %H:%M",
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%dT%H:%M:%S",
    ];

    pub fn parse(s: &str) -> Result<DutyTimestamp, FtlError> {
        let trimmed = s.trim();
        Self::FORMATS
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(trimmed, fmt).ok())
            .map(DutyTimestamp)
            .ok_or_else(|| FtlError::MalformedInput(format!("'{}' is not a duty timestamp", s)))
    }

    pub fn local_time(&self) -> Time {
        Time(i64::from(self.0.hour()) * 60 + i64::from(self.0.minute()))
    }

    /// Elapsed hours from `earlier` to `self`; negative when the duties overlap.
    pub fn hours_since(&self, earlier: &DutyTimestamp) -> f64 {
        (self.0 - earlier.0).num_seconds() as f64 / 3600.0
    }
}
