use crate::limits::Settings;

/// Diagnostics raised while a roster is segmented. `flight` is the index of
/// the flight that triggered the event.
#[derive(Debug, Clone, PartialEq)]
pub enum FtlEvent {
    LimitResolved {
        flight: usize,
        settings: Settings,
        sector_count: usize,
        rest_hours: Option<f64>,
        limit_hours: f64,
        latest_arrival: String,
    },
    LimitNotFound {
        flight: usize,
        message: String,
    },
    MalformedDutyStart {
        flight: usize,
        message: String,
    },
    CycleAbandoned {
        flight: usize,
        open_since: usize,
    },
    OrphanDutyEnd {
        flight: usize,
    },
    UnclosedCycle {
        open_since: usize,
    },
}

pub trait Reporter {
    fn report(&mut self, event: FtlEvent);
}

/// Forwards events to the `log` facade.
pub struct LogReporter;

impl Reporter for LogReporter {
    fn report(&mut self, event: FtlEvent) {
        match event {
            FtlEvent::LimitResolved {
                flight,
                settings,
                sector_count,
                rest_hours,
                limit_hours,
                latest_arrival,
            } => log::info!(
                "flight #{flight}: {settings}, {sector_count} sectors, rest {}: FTL {limit_hours}h, latest arrival {latest_arrival}",
                rest_hours.map_or("unknown".to_string(), |r| format!("{r:.2}h"))
            ),
            FtlEvent::LimitNotFound { flight, message } => {
                log::warn!("flight #{flight}: {message}, duty cycle left unannotated")
            }
            FtlEvent::MalformedDutyStart { flight, message } => {
                log::warn!("flight #{flight}: {message}, duty cycle left unannotated")
            }
            FtlEvent::CycleAbandoned { flight, open_since } => log::debug!(
                "flight #{flight} starts a new duty while the one from flight #{open_since} is still open"
            ),
            FtlEvent::OrphanDutyEnd { flight } => {
                log::debug!("flight #{flight} ends a duty that was never started")
            }
            FtlEvent::UnclosedCycle { open_since } => {
                log::debug!("duty started at flight #{open_since} is never closed")
            }
        }
    }
}
