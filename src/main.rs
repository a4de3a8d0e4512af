use std::io::Write;
use crate::config::FtlConfig;
use crate::flight::{load_roster, Flight};
use crate::ftl::report::LogReporter;
use crate::ftl::segmenter::FtlCalculator;
use crate::limits::{Acclimatization, CrewType, Settings};
use clap::Parser;
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::{Context, Editor, Helper, Highlighter, Hinter, Validator};
use std::path::PathBuf;
use std::process::{Command, Stdio};
use tabled::settings::Style;

mod aircraft;
mod config;
mod error;
mod flight;
mod ftl;
mod limits;
mod station;
mod time;

#[derive(Parser)]
struct Args {
    /// Path to the JSON roster produced by the roster parser
    #[arg(short, long, value_name = "FILE", default_value = "data/roster.json")]
    roster: PathBuf,

    /// Directory holding stations.json, aircraft_groups.json and ftl_limits.json
    #[arg(short, long, value_name = "DIR", default_value = "data/config")]
    config: PathBuf,

    #[arg(long, value_enum, default_value_t = CrewType::Tech)]
    crew: CrewType,

    #[arg(short, long, value_enum, default_value_t = Acclimatization::Acclimatized)]
    acclimatization: Acclimatization,
}

#[derive(Helper, Hinter, Highlighter, Validator)]
pub struct CompleteHelper {
    pub commands: Vec<String>,
}

impl Completer for CompleteHelper {
    type Candidate = Pair;

    fn complete(&self, line: &str, _pos: usize, _ctx: &Context<'_>) -> rustyline::Result<(usize, Vec<Pair>)> {
        let mut candidates = Vec::new();

        for cmd in &self.commands {
            if cmd.starts_with(line) {
                candidates.push(Pair {
                    display: cmd.clone(),
                    replacement: format!("{} ", cmd),
                });
            }
        }

        Ok((0, candidates))
    }
}

fn paginate(content: String) {
    let spawned = Command::new("less")
        .arg("-R")
        .stdin(Stdio::piped())
        .spawn()
        // Fallback to 'more' if 'less' isn't available
        .or_else(|_| Command::new("more").stdin(Stdio::piped()).spawn());

    let mut pager = match spawned {
        Ok(pager) => pager,
        Err(e) => {
            log::warn!("no pager available: {}", e);
            println!("{}", content);
            return;
        }
    };

    if let Some(mut stdin) = pager.stdin.take() {
        if let Err(e) = stdin.write_all(content.as_bytes()) {
            // Broken pipe is common if the user quits the pager early
            if e.kind() != std::io::ErrorKind::BrokenPipe {
                eprintln!("Error writing to pager: {}", e);
            }
        }
    }

    // Wait for the user to close the pager before returning to the ">> " prompt
    let _ = pager.wait();
}

fn recalculate(config: &FtlConfig, settings: Settings, flights: &mut [Flight]) {
    let summary = FtlCalculator::new(config, settings).calculate(flights, &mut LogReporter);
    println!(
        "Calculated FTL for {}: {} duties closed, {} annotated, {} without a limit.",
        settings, summary.closed, summary.annotated, summary.skipped
    );
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    let config = FtlConfig::load_from_dir(&args.config)?;
    let mut flights = load_roster(&args.roster)?;
    println!("Loaded {} flights from {}", flights.len(), args.roster.display());

    let mut settings = Settings {
        crew_type: args.crew,
        acclimatization: args.acclimatization,
    };
    recalculate(&config, settings, &mut flights);

    let rl_config = rustyline::Config::builder()
        .history_ignore_space(true)
        .completion_type(rustyline::CompletionType::List)
        .build();

    let helper = CompleteHelper {
        commands: vec![
            "ls".to_string(),
            "crew".to_string(),
            "accl".to_string(),
            "settings".to_string(),
            "stations".to_string(),
            "json".to_string(),
            "help".to_string(),
            "exit".to_string(),
        ],
    };

    let mut rl = Editor::with_config(rl_config)?;
    rl.set_helper(Some(helper));

    loop {
        let readline = rl.readline(">> ");
        match readline {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() { continue; }

                rl.add_history_entry(trimmed)?;

                let parts: Vec<&str> = trimmed.split_whitespace().collect();
                match parts[0] {
                    "ls" => {
                        let sub = parts.get(1).copied().unwrap_or("a");
                        let filtered_flights: Vec<&Flight> = flights.iter()
                            .filter(|f| match sub {
                                "f" | "ftl" => f.ftl_data.is_some(),
                                "d" | "duty" => f.ends_duty(),
                                _ => true, // 'ls' or 'ls a'
                            })
                            .collect();
                        if filtered_flights.is_empty() {
                            println!("No matching flights found.")
                        } else {
                            let mut table = tabled::Table::new(&filtered_flights);
                            table.with(Style::rounded());
                            table.with(tabled::settings::Alignment::left());
                            if filtered_flights.len() > 20 {
                                paginate(table.to_string());
                            } else {
                                println!("{}", table);
                            }
                        }
                    },
                    "crew" => {
                        match parts.get(1).copied() {
                            Some("tech" | "t") => settings.crew_type = CrewType::Tech,
                            Some("cabin" | "c") => settings.crew_type = CrewType::Cabin,
                            _ => {
                                println!("Usage: crew <tech|cabin>");
                                continue;
                            }
                        }
                        recalculate(&config, settings, &mut flights);
                    },
                    "accl" => {
                        match parts.get(1).copied() {
                            Some("a" | "acclimatized") => settings.acclimatization = Acclimatization::Acclimatized,
                            Some("n" | "non-acclimatized") => settings.acclimatization = Acclimatization::NonAcclimatized,
                            _ => {
                                println!("Usage: accl <a|n>");
                                continue;
                            }
                        }
                        recalculate(&config, settings, &mut flights);
                    },
                    "settings" => println!("{}", settings),
                    "stations" => {
                        let mut table = tabled::Table::new(config.sorted_stations());
                        table.with(Style::rounded());
                        println!("{}", table);
                    },
                    "json" => {
                        match serde_json::to_string_pretty(&flights) {
                            Ok(json) => paginate(json),
                            Err(e) => println!("Error: {}", e),
                        }
                    },
                    "help" | "?" => {
                        println!("\nAvailable Commands:");
                        println!("  ls [filter]         - List flights in a table or filter: f - with FTL data, d - duty end");
                        println!("  crew <tech|cabin>   - Switch crew type and recalculate");
                        println!("  accl <a|n>          - Switch to acclimatized / non-acclimatized and recalculate");
                        println!("  settings            - Show the current crew type and acclimatization");
                        println!("  stations            - List known stations");
                        println!("  json                - Show the annotated roster as JSON");
                        println!("  help / ?            - Show this help menu");
                        println!("  exit / quit         - Exit\n");
                    },
                    "exit" | "quit" => break,
                    _ => println!("Unknown command: {}", parts[0]),
                }
            },
            Err(ReadlineError::Interrupted) => {
                println!("CTRL-C");
                break;
            },
            Err(ReadlineError::Eof) => {
                println!("CTRL-D");
                break;
            },
            Err(err) => {
                println!("Error: {:?}", err);
                break;
            }
        }
    }
    Ok(())
}
