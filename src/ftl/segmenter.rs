use crate::config::FtlConfig;
use crate::error::FtlError;
use crate::flight::{Flight, FtlResult};
use crate::ftl::arrival::compute_latest_arrival;
use crate::ftl::report::{FtlEvent, Reporter};
use crate::ftl::resolver::resolve_limit;
use crate::limits::Settings;
use crate::time::DutyTimestamp;
use chrono::Utc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CycleState {
    Idle,
    Open { start: usize, sectors: usize },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CalculationSummary {
    pub closed: usize,
    pub annotated: usize,
    pub skipped: usize,
}

pub struct FtlCalculator<'a> {
    config: &'a FtlConfig,
    settings: Settings,
}

impl<'a> FtlCalculator<'a> {
    pub fn new(config: &'a FtlConfig, settings: Settings) -> FtlCalculator<'a> {
        FtlCalculator { config, settings }
    }

    /// Groups the roster into duty cycles and annotates the last flight of
    /// every closed cycle whose limit resolves. Results of a previous pass are
    /// cleared first.
    ///
    /// A new `dutyStart` silently replaces a still-open cycle, a `dutyEnd`
    /// with nothing open is ignored and a cycle left open at the end of the
    /// roster produces nothing. All three are reported at debug level only.
    pub fn calculate<R: Reporter>(&self, flights: &mut [Flight], reporter: &mut R) -> CalculationSummary {
        let mut summary = CalculationSummary::default();
        let mut state = CycleState::Idle;
        let mut previous_duty_end: Option<DutyTimestamp> = None;

        flights.iter_mut().for_each(|f| f.ftl_data = None);

        for idx in 0..flights.len() {
            if flights[idx].starts_duty() {
                if let CycleState::Open { start, .. } = state {
                    reporter.report(FtlEvent::CycleAbandoned {
                        flight: idx,
                        open_since: start,
                    });
                }
                state = CycleState::Open {
                    start: idx,
                    sectors: 1,
                };
            } else if let CycleState::Open { sectors, .. } = &mut state {
                *sectors += 1;
            }

            if !flights[idx].ends_duty() {
                continue;
            }

            match state {
                CycleState::Idle => reporter.report(FtlEvent::OrphanDutyEnd { flight: idx }),
                CycleState::Open { start, sectors } => {
                    summary.closed += 1;
                    let rest_hours = Self::rest_hours(previous_duty_end.as_ref(), &flights[start]);

                    match self.close_cycle(&flights[start], &flights[idx], sectors, rest_hours) {
                        Ok(result) => {
                            reporter.report(FtlEvent::LimitResolved {
                                flight: idx,
                                settings: self.settings,
                                sector_count: sectors,
                                rest_hours,
                                limit_hours: result.limit_hours,
                                latest_arrival: result.latest_arrival_time.clone(),
                            });
                            flights[idx].ftl_data = Some(result);
                            summary.annotated += 1;
                        }
                        Err(err) => {
                            let message = err.to_string();
                            reporter.report(match err {
                                FtlError::LimitNotFound { .. } => FtlEvent::LimitNotFound { flight: idx, message },
                                _ => FtlEvent::MalformedDutyStart { flight: idx, message },
                            });
                            summary.skipped += 1;
                        }
                    }

                    previous_duty_end = flights[idx]
                        .duty_end
                        .as_deref()
                        .and_then(|s| DutyTimestamp::parse(s).ok());
                    state = CycleState::Idle;
                }
            }
        }

        if let CycleState::Open { start, .. } = state {
            reporter.report(FtlEvent::UnclosedCycle { open_since: start });
        }
        summary
    }

    /// Hours between the previous closed duty and this one; unknown when
    /// either side is missing or unparseable.
    fn rest_hours(previous_duty_end: Option<&DutyTimestamp>, first: &Flight) -> Option<f64> {
        let start = first.duty_start.as_deref().and_then(|s| DutyTimestamp::parse(s).ok())?;
        previous_duty_end.map(|end| start.hours_since(end))
    }

    fn close_cycle(
        &self,
        first: &Flight,
        last: &Flight,
        sector_count: usize,
        rest_hours: Option<f64>,
    ) -> Result<FtlResult, FtlError> {
        let duty_start_time = first
            .duty_start
            .clone()
            .ok_or_else(|| FtlError::MalformedInput("duty cycle has no start time".to_string()))?;
        let duty_start = DutyTimestamp::parse(&duty_start_time)?.local_time();

        let limit_hours = resolve_limit(
            &self.config.limits,
            &self.settings,
            duty_start,
            sector_count,
            rest_hours,
        )?;
        let latest_arrival = compute_latest_arrival(
            duty_start,
            limit_hours,
            self.settings.crew_type,
            last.aircraft.as_deref(),
            last.destination_gmt.as_deref(),
            &self.config.aircraft_groups,
        );

        Ok(FtlResult {
            limit_hours,
            latest_arrival_time: latest_arrival.to_string(),
            sector_count,
            duty_start_time,
            calculated_at: Utc::now(),
        })
    }
}
