use crate::aircraft::AircraftGroups;
use crate::error::FtlError;
use crate::limits::LimitTable;
use crate::station::{Station, StationCode};
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::path::Path;

pub const STATIONS_FILE: &str = "stations.json";
pub const AIRCRAFT_GROUPS_FILE: &str = "aircraft_groups.json";
pub const LIMITS_FILE: &str = "ftl_limits.json";

/// Reference tables consumed read-only by a calculation pass.
#[derive(Debug, Clone, Default)]
pub struct FtlConfig {
    pub stations: HashMap<StationCode, Station>,
    pub aircraft_groups: AircraftGroups,
    pub limits: LimitTable,
}

impl FtlConfig {
    pub fn new(stations: Vec<Station>, aircraft_groups: AircraftGroups, limits: LimitTable) -> FtlConfig {
        let stations = stations
            .into_iter()
            .map(|s| (s.code.clone(), s))
            .collect();
        FtlConfig {
            stations,
            aircraft_groups,
            limits,
        }
    }

    /// Loads all three tables; a single failure makes the whole configuration unavailable.
    pub fn load_from_dir(dir: &Path) -> Result<FtlConfig, FtlError> {
        let stations: Vec<Station> = Self::load_table(&dir.join(STATIONS_FILE))?;
        let aircraft_groups: AircraftGroups = Self::load_table(&dir.join(AIRCRAFT_GROUPS_FILE))?;
        let limits: LimitTable = Self::load_table(&dir.join(LIMITS_FILE))?;

        log::info!(
            "loaded {} stations, {} aircraft groups and FTL limits from {}",
            stations.len(),
            aircraft_groups.0.len(),
            dir.display()
        );
        Ok(FtlConfig::new(stations, aircraft_groups, limits))
    }

    fn load_table<T: DeserializeOwned>(path: &Path) -> Result<T, FtlError> {
        let unavailable = |message: String| FtlError::ConfigurationUnavailable {
            path: path.to_path_buf(),
            message,
        };
        let data = std::fs::read_to_string(path).map_err(|e| unavailable(e.to_string()))?;
        serde_json::from_str(&data).map_err(|e| unavailable(e.to_string()))
    }

    pub fn sorted_stations(&self) -> Vec<&Station> {
        let mut stations = self.stations.values().collect::<Vec<&Station>>();
        stations.sort_by(|a, b| a.code.cmp(&b.code));
        stations
    }
}
