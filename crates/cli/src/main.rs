// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

use airseat::{FlightSeats, FlightSnapshot, InMemoryOccupancy, SeatInventory};
use airseat_domain::{
    AircraftSerial, ContactFields, ContactInfo, ContactInfoError, CoreError, Diagnostics,
    FlightNumber, ParserRegistry, PassportFields, PassportNumber, PassportNumberError,
    STANDARD_STRATEGY, SeatClassRegistry, SeatCounts, SeatLayout, TicketNumber, contact_parsers,
    passport_parsers, seat_layout_parsers, validate_aircraft_serial, validate_contact_fields,
    validate_flight_number, validate_passport_fields, validate_passport_number,
    validate_seat_counts, validate_seat_layout, validate_ticket_number,
};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Name of the whitespace-separated `NAME=COUNT` layout strategy.
const SPACED_STRATEGY: &str = "spaced";

/// Airseat - validate reservation values and query flight seat availability
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Register an extra seat class before running the command (repeatable)
    #[arg(long = "seat-class", value_name = "NAME=CODE", global = true)]
    seat_classes: Vec<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Validate an aircraft serial such as `VN123`
    Serial {
        /// The serial to validate
        value: String,
    },
    /// Validate a flight number such as `VN123`
    FlightNumber {
        /// The flight number to validate
        value: String,
    },
    /// Validate a contact record `EMAIL|PHONE|ADDRESS`
    Contact {
        /// The contact record to validate
        value: String,
        /// Parsing strategy to use
        #[arg(long, default_value = STANDARD_STRATEGY)]
        parser: String,
    },
    /// Validate a passport number `COUNTRY:NUMBER`
    Passport {
        /// The passport number to validate
        value: String,
        /// Parsing strategy to use (`standard` or `display`)
        #[arg(long, default_value = STANDARD_STRATEGY)]
        parser: String,
    },
    /// Validate a ticket number such as `VN123-20240320-0001`
    Ticket {
        /// The ticket number to validate
        value: String,
    },
    /// Validate a seat layout and print its canonical form
    Layout {
        /// The layout, e.g. `ECONOMY:100,BUSINESS:20`
        value: String,
        /// Parsing strategy to use (`standard` or `spaced`)
        #[arg(long, default_value = STANDARD_STRATEGY)]
        parser: String,
    },
    /// Report seat availability for a flight
    Seats {
        /// The flight number
        #[arg(long)]
        flight: String,
        /// The flight's seat layout
        #[arg(long)]
        layout: String,
        /// Seats already assigned to tickets
        #[arg(long, value_delimiter = ',')]
        occupied: Vec<String>,
        /// Only list available seats of the class with this code
        #[arg(long)]
        class: Option<String>,
        /// Seats to reserve, applied in order
        #[arg(long, value_delimiter = ',')]
        reserve: Vec<String>,
        /// Seats to release after reserving, applied in order
        #[arg(long, value_delimiter = ',')]
        release: Vec<String>,
    },
}

/// Errors that abort a command.
#[derive(Debug, Error)]
enum CliError {
    /// A `--seat-class` value is not `NAME=CODE`.
    #[error("Invalid --seat-class '{0}': expected NAME=CODE")]
    MalformedSeatClass(String),

    /// A domain operation failed.
    #[error(transparent)]
    Domain(#[from] CoreError),

    /// The report could not be rendered.
    #[error("Failed to render report: {0}")]
    Render(#[from] serde_json::Error),
}

/// Result of validating a single value.
#[derive(Debug, Clone, Serialize)]
struct ValidationReport {
    /// Whether the value passed every check.
    valid: bool,
    /// Canonical form of the value, if it is valid.
    #[serde(skip_serializing_if = "Option::is_none")]
    canonical: Option<String>,
    /// Every failed check.
    errors: Diagnostics,
}

impl ValidationReport {
    fn new(diagnostics: Diagnostics, canonical: Option<String>) -> Self {
        Self {
            valid: diagnostics.is_valid(),
            canonical,
            errors: diagnostics,
        }
    }
}

/// Seat availability of a flight after the requested changes.
#[derive(Debug, Clone, Serialize)]
struct SeatsReport {
    #[serde(flatten)]
    snapshot: FlightSnapshot,
    /// The class that was queried.
    #[serde(skip_serializing_if = "Option::is_none")]
    class: Option<String>,
    /// Available seats of the queried class.
    #[serde(skip_serializing_if = "Option::is_none")]
    available_seats: Option<Vec<String>>,
}

/// Builds the seat class registry, adding every `NAME=CODE` entry.
fn build_registry(seat_classes: &[String]) -> Result<Arc<SeatClassRegistry>, CliError> {
    let registry: Arc<SeatClassRegistry> = Arc::new(SeatClassRegistry::new());
    for entry in seat_classes {
        let (name, code) = entry
            .split_once('=')
            .ok_or_else(|| CliError::MalformedSeatClass(entry.clone()))?;
        registry.register_seat_class(name.trim(), code.trim())?;
    }
    Ok(registry)
}

/// Parses `NAME=COUNT NAME=COUNT`, rejecting the whole input on any bad entry.
fn parse_spaced_layout(classes: &SeatClassRegistry, input: &str) -> Option<SeatCounts> {
    let mut counts: SeatCounts = SeatCounts::new();
    for entry in input.split_whitespace() {
        let (token, count) = entry.split_once('=')?;
        let class = classes.resolve(&token.to_ascii_uppercase())?;
        counts.insert(class, count.parse().ok()?);
    }
    Some(counts)
}

fn layout_parsers(classes: &Arc<SeatClassRegistry>) -> ParserRegistry<SeatCounts> {
    let parsers: ParserRegistry<SeatCounts> = seat_layout_parsers(Arc::clone(classes));
    let lookup: Arc<SeatClassRegistry> = Arc::clone(classes);
    parsers.register(SPACED_STRATEGY, move |input: &str| {
        parse_spaced_layout(&lookup, input)
    });
    parsers
}

fn contact_report(value: &str, strategy: &str) -> ValidationReport {
    let parsers: ParserRegistry<ContactFields> = contact_parsers();
    let diagnostics: Diagnostics = parsers.parse(strategy, value).map_or_else(
        || {
            let mut diagnostics: Diagnostics = Diagnostics::new();
            diagnostics.add(&ContactInfoError::ParseError);
            diagnostics
        },
        |fields| validate_contact_fields(&fields),
    );
    let canonical: Option<String> = ContactInfo::parse_with(value, &parsers, strategy)
        .ok()
        .map(|contact| contact.to_string());
    ValidationReport::new(diagnostics, canonical)
}

fn passport_report(value: &str, strategy: &str) -> ValidationReport {
    let parsers: ParserRegistry<PassportFields> = passport_parsers();
    // The canonical string keeps its format diagnostics
    let diagnostics: Diagnostics = if strategy == STANDARD_STRATEGY {
        validate_passport_number(value)
    } else {
        parsers.parse(strategy, value).map_or_else(
            || {
                let mut diagnostics: Diagnostics = Diagnostics::new();
                diagnostics.add(&PassportNumberError::InvalidFormat);
                diagnostics
            },
            |fields| validate_passport_fields(&fields),
        )
    };
    let canonical: Option<String> = PassportNumber::parse_with(value, &parsers, strategy)
        .ok()
        .filter(|_| diagnostics.is_valid())
        .map(String::from);
    ValidationReport::new(diagnostics, canonical)
}

fn layout_report(value: &str, strategy: &str, classes: &Arc<SeatClassRegistry>) -> ValidationReport {
    let parsers: ParserRegistry<SeatCounts> = layout_parsers(classes);
    // Only the canonical grammar has string-level diagnostics
    let diagnostics: Diagnostics = if parsers.contains(strategy) && strategy != STANDARD_STRATEGY {
        let counts: SeatCounts = parsers.parse(strategy, value).unwrap_or_default();
        validate_seat_counts(&counts, classes)
    } else {
        validate_seat_layout(value, classes)
    };
    let canonical: Option<String> = SeatLayout::parse_with(value, &parsers, strategy, classes)
        .ok()
        .filter(|_| diagnostics.is_valid())
        .map(|layout| layout.to_string());
    ValidationReport::new(diagnostics, canonical)
}

fn seats_report(
    classes: &Arc<SeatClassRegistry>,
    flight: &str,
    layout: &str,
    occupied: &[String],
    class: Option<&str>,
    reserve: &[String],
    release: &[String],
) -> Result<SeatsReport, CliError> {
    let flight_number: FlightNumber = FlightNumber::new(flight)?;
    let layout: SeatLayout = SeatLayout::parse(layout, classes)?;

    let source: Arc<InMemoryOccupancy> = Arc::new(InMemoryOccupancy::new());
    for seat in occupied {
        source.record(&flight_number, seat);
    }

    let inventory: SeatInventory = SeatInventory::new(source);
    let seats: Arc<FlightSeats> = inventory.open_flight(&flight_number, layout)?;
    for seat in reserve {
        seats.reserve_seat(seat)?;
    }
    for seat in release {
        seats.release_seat(seat)?;
    }

    let class: Option<String> = class.map(str::to_ascii_uppercase);
    let available_seats: Option<Vec<String>> =
        class.as_deref().map(|code| seats.available_seats(code));
    Ok(SeatsReport {
        snapshot: seats.snapshot(),
        class,
        available_seats,
    })
}

/// Runs the command described by `args` and returns its JSON report.
fn execute(args: &Args) -> Result<String, CliError> {
    let classes: Arc<SeatClassRegistry> = build_registry(&args.seat_classes)?;
    debug!(classes = classes.len(), "Seat class registry ready");

    let output: String = match &args.command {
        Command::Serial { value } => {
            let diagnostics: Diagnostics = validate_aircraft_serial(value);
            let canonical: Option<String> =
                AircraftSerial::new(value).ok().map(String::from);
            serde_json::to_string_pretty(&ValidationReport::new(diagnostics, canonical))?
        }
        Command::FlightNumber { value } => {
            let diagnostics: Diagnostics = validate_flight_number(value);
            let canonical: Option<String> = FlightNumber::new(value).ok().map(String::from);
            serde_json::to_string_pretty(&ValidationReport::new(diagnostics, canonical))?
        }
        Command::Contact { value, parser } => {
            serde_json::to_string_pretty(&contact_report(value, parser))?
        }
        Command::Passport { value, parser } => {
            serde_json::to_string_pretty(&passport_report(value, parser))?
        }
        Command::Ticket { value } => {
            let diagnostics: Diagnostics = validate_ticket_number(value);
            let canonical: Option<String> = TicketNumber::new(value).ok().map(String::from);
            serde_json::to_string_pretty(&ValidationReport::new(diagnostics, canonical))?
        }
        Command::Layout { value, parser } => {
            serde_json::to_string_pretty(&layout_report(value, parser, &classes))?
        }
        Command::Seats {
            flight,
            layout,
            occupied,
            class,
            reserve,
            release,
        } => serde_json::to_string_pretty(&seats_report(
            &classes,
            flight,
            layout,
            occupied,
            class.as_deref(),
            reserve,
            release,
        )?)?,
    };

    Ok(output)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing; stdout is reserved for the JSON report
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    info!(command = ?args.command, "Running Airseat command");

    let output: String = execute(&args)?;
    println!("{output}");

    Ok(())
}
