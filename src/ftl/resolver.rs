use crate::error::FtlError;
use crate::limits::{Acclimatization, LimitTable, RestRule, Settings, TimeBand};
use crate::time::Time;

/// The non-acclimatized table stops at four sectors.
pub const NON_ACCLIMATIZED_MAX_SECTORS: usize = 4;

/// Table entries outside `0..=24` hours are not usable limits.
pub const MAX_LIMIT_HOURS: f64 = 24.0;

/// Maximum duty hours for a cycle starting at local `duty_start`.
pub fn resolve_limit(
    limits: &LimitTable,
    settings: &Settings,
    duty_start: Time,
    sector_count: usize,
    rest_hours: Option<f64>,
) -> Result<f64, FtlError> {
    let crew_type = settings.crew_type;
    let not_found = |key: String| FtlError::LimitNotFound {
        crew_type,
        acclimatization: settings.acclimatization,
        key,
    };

    let (row, sectors) = match settings.acclimatization {
        Acclimatization::Acclimatized => {
            let band = TimeBand::from_time(duty_start);
            let row = limits
                .acclimatized_row(crew_type, band)
                .ok_or_else(|| not_found(band.to_string()))?;
            (row, sector_count)
        }
        Acclimatization::NonAcclimatized => {
            let rule = RestRule::from_rest(rest_hours);
            let row = limits
                .non_acclimatized_row(rule, crew_type)
                .ok_or_else(|| not_found(rule.to_string()))?;
            (row, sector_count.min(NON_ACCLIMATIZED_MAX_SECTORS))
        }
    };

    let limit = clamp_to_row(row, sectors).ok_or_else(|| not_found(format!("{} sectors", sector_count)))?;
    if !(0.0..=MAX_LIMIT_HOURS).contains(&limit) {
        return Err(not_found(format!("{} sectors (unusable entry {})", sector_count, limit)));
    }
    Ok(limit)
}

/// Sector counts past the end of the row reuse its last entry.
fn clamp_to_row(row: &[f64], sector_count: usize) -> Option<f64> {
    let idx = sector_count.max(1).min(row.len()).checked_sub(1)?;
    row.get(idx).copied()
}
