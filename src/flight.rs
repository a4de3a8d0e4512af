use crate::error::FtlError;
use chrono::{DateTime, Utc};
use colored::Colorize;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::path::Path;
use tabled::Tabled;

/// FTL outcome attached to the last flight of a closed duty cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FtlResult {
    pub limit_hours: f64,
    pub latest_arrival_time: String,
    pub sector_count: usize,
    pub duty_start_time: String,
    pub calculated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Flight {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flight_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,
    #[serde(default)]
    pub duty_start: Option<String>,
    #[serde(default)]
    pub duty_end: Option<String>,
    #[serde(default)]
    pub aircraft: Option<String>,
    #[serde(default, rename = "destinationGMT")]
    pub destination_gmt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ftl_data: Option<FtlResult>,
}

impl Flight {
    pub fn starts_duty(&self) -> bool {
        Self::has_marker(&self.duty_start)
    }

    pub fn ends_duty(&self) -> bool {
        Self::has_marker(&self.duty_end)
    }

    // blank markers count as absent
    fn has_marker(marker: &Option<String>) -> bool {
        marker.as_deref().is_some_and(|s| !s.trim().is_empty())
    }
}

pub fn load_roster(path: &Path) -> Result<Vec<Flight>, FtlError> {
    let read_error = |message: String| FtlError::ReadError {
        path: path.to_path_buf(),
        message,
    };
    let data = std::fs::read_to_string(path).map_err(|e| read_error(e.to_string()))?;
    serde_json::from_str(&data).map_err(|e| read_error(e.to_string()))
}

impl Tabled for Flight {
    const LENGTH: usize = 9;

    fn fields(&self) -> Vec<Cow<'_, str>> {
        let text = |v: &Option<String>| Cow::from(v.clone().unwrap_or_default());
        let (sectors, limit, arrival) = match &self.ftl_data {
            Some(ftl) => (
                ftl.sector_count.to_string(),
                format!("{}h", ftl.limit_hours),
                ftl.latest_arrival_time.green().bold().to_string(),
            ),
            None if self.ends_duty() => (String::new(), String::new(), "n/a".red().to_string()),
            None => (String::new(), String::new(), String::new()),
        };
        vec![
            text(&self.flight_number),
            text(&self.origin),
            text(&self.destination),
            text(&self.aircraft),
            text(&self.duty_start),
            text(&self.duty_end),
            Cow::from(sectors),
            Cow::from(limit),
            Cow::from(arrival),
        ]
    }

    fn headers() -> Vec<Cow<'static, str>> {
        vec![
            Cow::from("Flight"),
            Cow::from("From"),
            Cow::from("To"),
            Cow::from("Aircraft"),
            Cow::from("Duty start"),
            Cow::from("Duty end"),
            Cow::from("Sectors"),
            Cow::from("FTL"),
            Cow::from("Latest arrival"),
        ]
    }
}
