//! `slots` CLI — compute salon booking availability from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Compute availability from a JSON request (stdin → stdout)
//! echo '{"date":"2026-01-07","serviceDurationHours":3,"bookings":[],"blockedRecords":[]}' | slots availability
//!
//! # Compute from file to file
//! slots availability -i request.json -o response.json
//!
//! # Curated default slots for a date and service
//! slots defaults --date 2026-01-06 --duration 3
//! slots defaults --date 2026-01-06 --label "3 hrs"
//!
//! # Full admin grid for a date
//! slots grid --date 2026-01-06 --interval 30
//! ```

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use slot_engine::time::{canonical_date, parse_date};
use slot_engine::{
    available_slots, default_slots, resolve_duration_hours, slot_grid, BlockedDate, Booking,
    GridOptions, ServiceDescriptor, SlotTime,
};

#[derive(Parser)]
#[command(name = "slots", version, about = "Salon booking slot availability CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute available slots from a JSON availability request
    Availability {
        /// Request file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<PathBuf>,
        /// Response file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Show the curated default slots for a date and service
    Defaults {
        /// Date in YYYY-MM-DD
        #[arg(long)]
        date: String,
        /// Service duration in whole hours
        #[arg(long, conflicts_with = "label")]
        duration: Option<u32>,
        /// Service duration label to resolve (e.g. "3 hrs")
        #[arg(long)]
        label: Option<String>,
    },
    /// Show the full admin grid of possible start times for a date
    Grid {
        /// Date in YYYY-MM-DD
        #[arg(long)]
        date: String,
        /// First hour on the grid
        #[arg(long, default_value_t = 9)]
        start_hour: u32,
        /// Last (exclusive) hour; defaults to the date's closing hour
        #[arg(long)]
        end_hour: Option<u32>,
        /// Minutes between grid times
        #[arg(long, default_value_t = 30)]
        interval: u32,
    },
}

/// The availability computation request: a date, an optional service
/// duration, and the collaborating stores' documents. Absent lists are
/// treated as empty — the optimistic policy under store outage.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct AvailabilityRequest {
    date: NaiveDate,
    #[serde(default)]
    service_duration_hours: Option<u32>,
    #[serde(default)]
    bookings: Vec<Booking>,
    #[serde(default)]
    blocked_records: Vec<BlockedDate>,
}

#[derive(Serialize)]
struct AvailabilityResponse {
    slots: Vec<SlotTime>,
}

#[derive(Serialize)]
struct SlotListing {
    date: String,
    slots: Vec<SlotTime>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Availability { input, output } => {
            let raw = read_request(input.as_deref())?;
            let request: AvailabilityRequest =
                serde_json::from_str(&raw).context("Failed to parse availability request")?;

            // No service selected means nothing to offer, not an error.
            let slots = match request.service_duration_hours {
                Some(hours) => available_slots(
                    request.date,
                    ServiceDescriptor::new(hours),
                    &request.bookings,
                    &request.blocked_records,
                ),
                None => Vec::new(),
            };

            let response = serde_json::to_string_pretty(&AvailabilityResponse { slots })?;
            emit_response(output.as_deref(), &response)?;
        }
        Commands::Defaults {
            date,
            duration,
            label,
        } => {
            let date = parse_date(&date).context("Failed to parse --date")?;
            let hours = match (duration, label) {
                (Some(hours), _) => hours,
                (None, Some(label)) => resolve_duration_hours(&label),
                (None, None) => resolve_duration_hours(""),
            };
            print_listing(date, default_slots(date, hours))?;
        }
        Commands::Grid {
            date,
            start_hour,
            end_hour,
            interval,
        } => {
            let date = parse_date(&date).context("Failed to parse --date")?;
            let options = GridOptions {
                start_hour,
                end_hour,
                interval_minutes: interval,
            };
            print_listing(date, slot_grid(date, &options))?;
        }
    }

    Ok(())
}

fn print_listing(date: NaiveDate, slots: Vec<SlotTime>) -> Result<()> {
    let listing = SlotListing {
        date: canonical_date(date),
        slots,
    };
    println!("{}", serde_json::to_string_pretty(&listing)?);
    Ok(())
}

/// Read the availability request body from a file, or stdin when piped.
fn read_request(path: Option<&Path>) -> Result<String> {
    let Some(path) = path else {
        let mut body = String::new();
        io::stdin()
            .read_to_string(&mut body)
            .context("Failed to read request from stdin")?;
        return Ok(body);
    };
    fs::read_to_string(path)
        .with_context(|| format!("Failed to read request file: {}", path.display()))
}

/// Write the response document to a file, or pretty-print it to stdout.
fn emit_response(path: Option<&Path>, body: &str) -> Result<()> {
    let Some(path) = path else {
        println!("{}", body);
        return Ok(());
    };
    fs::write(path, body)
        .with_context(|| format!("Failed to write response file: {}", path.display()))
}
