//! `slots` CLI — resolve meeting availability from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Resolve a request document (stdin → readable slot list)
//! slots resolve < request.json
//!
//! # Resolve from a file, emit the full resolution as JSON
//! slots resolve -i request.json --json
//!
//! # Validate a request document without resolving it
//! slots check -i request.json
//! ```
//!
//! A request document carries the attendees, the search window, the
//! constraints, and a static busy dataset (one interval list per
//! participant):
//!
//! ```json
//! {
//!   "attendees": ["anna@example.com"],
//!   "window": { "start": "2024-06-03T08:00:00Z", "end": "2024-06-03T11:00:00Z" },
//!   "duration_minutes": 30,
//!   "busy": {
//!     "anna@example.com": [
//!       { "start": "2024-06-03T09:00:00Z", "end": "2024-06-03T10:00:00Z" }
//!     ]
//!   }
//! }
//! ```
//!
//! Omitted working hours default to 08:00-17:00, Monday through Friday,
//! Europe/Stockholm.

use std::collections::HashMap;
use std::io::{self, Read};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use chrono::NaiveTime;
use clap::{Parser, Subcommand};
use serde::Deserialize;
use slot_engine::{
    resolve_availability, Interval, Resolution, ResolverConfig, SlotRequest, StaticBusySource,
    WorkingHours,
};

#[derive(Parser)]
#[command(name = "slots", version, about = "Meeting-slot availability resolver")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a request document into candidate slots
    Resolve {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Emit the full resolution as JSON instead of a readable list
        #[arg(long)]
        json: bool,
        /// Per-participant lookup timeout in seconds
        #[arg(long, default_value_t = 10)]
        source_timeout_secs: u64,
        /// Overall deadline for the request in seconds
        #[arg(long, default_value_t = 30)]
        deadline_secs: u64,
    },
    /// Validate a request document and report the derived parameters
    Check {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
}

/// The on-disk request document: a `SlotRequest` plus the busy dataset the
/// static source serves from.
#[derive(Deserialize)]
struct RequestDocument {
    attendees: Vec<String>,
    window: Interval,
    duration_minutes: i64,
    #[serde(default)]
    granularity_minutes: Option<i64>,
    #[serde(default)]
    working_hours: Option<WorkingHours>,
    #[serde(default)]
    busy: HashMap<String, Vec<Interval>>,
}

fn default_working_hours() -> WorkingHours {
    WorkingHours {
        start_of_day: NaiveTime::from_hms_opt(8, 0, 0).expect("valid time"),
        end_of_day: NaiveTime::from_hms_opt(17, 0, 0).expect("valid time"),
        weekdays: WorkingHours::weekdays_mon_fri(),
        timezone: "Europe/Stockholm".parse().expect("valid zone"),
    }
}

impl RequestDocument {
    fn into_parts(self) -> (SlotRequest, HashMap<String, Vec<Interval>>) {
        let request = SlotRequest {
            attendees: self.attendees,
            window: self.window,
            duration_minutes: self.duration_minutes,
            granularity_minutes: self
                .granularity_minutes
                .unwrap_or(slot_engine::slots::DEFAULT_GRANULARITY_MINUTES),
            working_hours: self.working_hours.unwrap_or_else(default_working_hours),
        };
        (request, self.busy)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Resolve {
            input,
            json,
            source_timeout_secs,
            deadline_secs,
        } => {
            let document = read_document(input.as_deref())?;
            let (request, busy) = document.into_parts();

            let config = ResolverConfig {
                source_timeout: Duration::from_secs(source_timeout_secs),
                global_deadline: Duration::from_secs(deadline_secs),
            };
            let source = Arc::new(StaticBusySource::new(busy));

            let resolution = resolve_availability(source, &request, &config)
                .await
                .context("Failed to resolve availability")?;

            if json {
                println!("{}", serde_json::to_string_pretty(&resolution)?);
            } else {
                print_readable(&request, &resolution);
            }
        }
        Commands::Check { input } => {
            let document = read_document(input.as_deref())?;
            let (request, busy) = document.into_parts();

            request.validate().context("Invalid request document")?;

            let span = request.window.duration_minutes();
            let bound = (span - request.duration_minutes) / request.granularity_minutes + 1;
            println!("Attendees:      {}", request.attendees.len());
            println!("Busy datasets:  {}", busy.len());
            println!("Window span:    {} minutes", span);
            println!("At most {} candidates will be examined", bound.max(0));
        }
    }

    Ok(())
}

/// Print slots as local wall-clock times in the request's configured zone,
/// warnings to stderr.
fn print_readable(request: &SlotRequest, resolution: &Resolution) {
    let tz = request.working_hours.timezone;

    for warning in &resolution.warnings {
        eprintln!("warning: {}", warning);
    }

    if resolution.slots.is_empty() {
        println!("No common slots found in the search window.");
        return;
    }

    for slot in &resolution.slots {
        let start = slot.start.with_timezone(&tz);
        let end = slot.end.with_timezone(&tz);
        println!(
            "{} - {} ({})",
            start.format("%Y-%m-%d %H:%M"),
            end.format("%H:%M"),
            tz
        );
    }
}

fn read_document(path: Option<&str>) -> Result<RequestDocument> {
    let raw = match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path))?,
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            buf
        }
    };

    serde_json::from_str(&raw).context("Failed to parse request document")
}
