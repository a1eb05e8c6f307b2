//! `slots` CLI -- edit and match weekly availability schedules from the command line.
//!
//! Schedules are JSON arrays of day entries:
//! `[{"day": "monday", "slots": ["09:00-12:00"]}]`.
//!
//! ## Usage
//!
//! ```sh
//! # Add a slot (stdin → stdout)
//! echo '[]' | slots add --day mon --slot 09:00-12:00
//!
//! # Add from file to file
//! slots add --day tue --slot 14:00-16:00 -i tutor.json -o tutor.json
//!
//! # Remove a previously stored slot
//! slots remove --day mon --slot 09:00-12:00 -i tutor.json
//!
//! # Human-readable listing with the weekly total
//! slots show -i tutor.json
//!
//! # Common availability between two schedules
//! slots match student.json -i tutor.json
//!
//! # Free gaps on a day, optionally within a window and above a minimum length
//! slots gaps --day wed --window 08:00-18:00 --min-hours 2 -i tutor.json
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::{self, Read};

use slot_engine::{common_availability, free_gaps, TimeInterval, WeekSchedule, Weekday};

#[derive(Parser)]
#[command(name = "slots", version, about = "Weekly availability schedule tool")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a time slot to a day, merging it into the stored availability
    Add {
        /// Day of week (full name or 3-letter abbreviation)
        #[arg(short, long)]
        day: String,
        /// Time slot, e.g. "09:00-12:00"
        #[arg(short, long)]
        slot: String,
        /// Input schedule file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Remove a previously stored time slot from a day
    Remove {
        /// Day of week (full name or 3-letter abbreviation)
        #[arg(short, long)]
        day: String,
        /// Time slot to remove, exactly as stored
        #[arg(short, long)]
        slot: String,
        /// Input schedule file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Print the schedule day by day with the weekly total
    Show {
        /// Input schedule file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
    /// Intersect the schedule with another one
    Match {
        /// The other schedule file
        other: String,
        /// Input schedule file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// List the free gaps on a day
    Gaps {
        /// Day of week (full name or 3-letter abbreviation)
        #[arg(short, long)]
        day: String,
        /// Window to look inside, e.g. "08:00-18:00" (whole day if omitted)
        #[arg(short, long)]
        window: Option<String>,
        /// Only report gaps of at least this many hours
        #[arg(short, long, default_value_t = 1)]
        min_hours: u8,
        /// Input schedule file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Add {
            day,
            slot,
            input,
            output,
        } => {
            let mut week = read_schedule(input.as_deref())?;
            week.add(parse_day(&day)?, parse_slot(&slot)?);
            write_schedule(output.as_deref(), &week)?;
        }
        Commands::Remove {
            day,
            slot,
            input,
            output,
        } => {
            let mut week = read_schedule(input.as_deref())?;
            week.remove(parse_day(&day)?, parse_slot(&slot)?);
            write_schedule(output.as_deref(), &week)?;
        }
        Commands::Show { input } => {
            let week = read_schedule(input.as_deref())?;
            if week.is_empty() {
                println!("No availability set.");
            } else {
                for entry in week.days() {
                    let slots: Vec<String> = entry.slots.iter().map(ToString::to_string).collect();
                    println!("{:<10} {}", entry.day.to_string(), slots.join(", "));
                }
                println!("Total: {} hours", week.total_hours());
            }
        }
        Commands::Match {
            other,
            input,
            output,
        } => {
            let week = read_schedule(input.as_deref())?;
            let other_json = std::fs::read_to_string(&other)
                .with_context(|| format!("Failed to read file: {}", other))?;
            let other_week: WeekSchedule = serde_json::from_str(&other_json)
                .with_context(|| format!("Failed to parse schedule JSON in {}", other))?;
            let common = common_availability(&week, &other_week);
            write_schedule(output.as_deref(), &common)?;
        }
        Commands::Gaps {
            day,
            window,
            min_hours,
            input,
        } => {
            let week = read_schedule(input.as_deref())?;
            let day = parse_day(&day)?;
            let window = match window {
                Some(raw) => parse_slot(&raw)?,
                None => TimeInterval::FULL_DAY,
            };
            let gaps: Vec<TimeInterval> = free_gaps(week.slots_for(day), window)
                .into_iter()
                .filter(|gap| gap.hours() >= min_hours)
                .collect();
            let json = serde_json::to_string_pretty(&gaps)?;
            println!("{}", json);
        }
    }

    Ok(())
}

fn parse_day(raw: &str) -> Result<Weekday> {
    raw.parse()
        .with_context(|| format!("Failed to parse day '{}'", raw))
}

fn parse_slot(raw: &str) -> Result<TimeInterval> {
    raw.parse()
        .with_context(|| format!("Failed to parse slot '{}'", raw))
}

fn read_schedule(path: Option<&str>) -> Result<WeekSchedule> {
    let json = read_input(path)?;
    serde_json::from_str(&json).context("Failed to parse schedule JSON")
}

fn write_schedule(path: Option<&str>, week: &WeekSchedule) -> Result<()> {
    let json = serde_json::to_string_pretty(week)?;
    write_output(path, &json)
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
