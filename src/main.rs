use std::process;

use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use qdl::course;
use qdl::error::TeeTimeError;
use qdl::fetch::{self, FetchOptions};
use qdl::format;
use qdl::model::TeeTimeRecord;
use qdl::output;
use qdl::query::{self, SearchPlan};
use qdl::table;

#[derive(Parser)]
#[command(
    name = "qdl",
    about = "Search Quinta do Lago tee times from the terminal",
    version,
    after_help = "\
Examples:
  qdl
  qdl --start-date 2026-09-24 --end-date 2026-09-30
  qdl --players 2 --courses south north --output results.csv
  qdl --start-hour 8 --end-hour 11 --courses laranjal --json --pretty
  qdl --output times.json --display --verbose"
)]
struct Cli {
    #[arg(
        long,
        value_name = "YYYY-MM-DD",
        env = "QDL_START_DATE",
        help = "First date to search [default: today]"
    )]
    start_date: Option<String>,

    #[arg(
        long,
        value_name = "YYYY-MM-DD",
        env = "QDL_END_DATE",
        help = "Last date to search, inclusive [default: today + 6 days]"
    )]
    end_date: Option<String>,

    #[arg(
        long,
        default_value = "7",
        value_name = "0-23",
        env = "QDL_START_HOUR",
        help = "First hour slot to search"
    )]
    start_hour: u32,

    #[arg(
        long,
        default_value = "16",
        value_name = "0-23",
        env = "QDL_END_HOUR",
        help = "Last hour slot to search, inclusive"
    )]
    end_hour: u32,

    #[arg(
        long,
        default_value = "4",
        value_name = "N",
        env = "QDL_PLAYERS",
        help = "Number of players (1-4)"
    )]
    players: u32,

    #[arg(
        long,
        num_args = 1..,
        default_value = "all",
        value_name = "COURSE",
        help = "Courses to search [south, north, laranjal, all]"
    )]
    courses: Vec<String>,

    #[arg(
        long,
        value_name = "FILE",
        help = "Export results to a file (supports .csv, .json)"
    )]
    output: Option<String>,

    #[arg(long, help = "Print the results table even when --output is given")]
    display: bool,

    #[arg(long, help = "Output as JSON")]
    json: bool,

    #[arg(long, help = "Output as pretty-printed JSON")]
    pretty: bool,

    #[arg(
        long,
        default_value = fetch::API_URL,
        value_name = "URL",
        env = "QDL_API_URL",
        help = "Availability endpoint to query"
    )]
    api_url: String,

    #[arg(
        long,
        default_value = "30",
        value_name = "SECS",
        env = "QDL_TIMEOUT",
        help = "Request timeout"
    )]
    timeout: u64,

    #[arg(long, short, help = "Enable debug logging")]
    verbose: bool,
}

fn is_json(args: &Cli) -> bool {
    args.json || args.pretty
}

fn error_code(err: &TeeTimeError) -> i32 {
    match err {
        TeeTimeError::InvalidDate(_) | TeeTimeError::Validation(_) => 2,
        TeeTimeError::Timeout { .. }
        | TeeTimeError::ConnectionFailed { .. }
        | TeeTimeError::ClientBuild(_) => 3,
        TeeTimeError::RateLimited { .. } => 4,
        TeeTimeError::HttpStatus { .. } => 5,
        TeeTimeError::MalformedBody { .. } => 6,
        TeeTimeError::UnknownCourse(_) => 7,
        TeeTimeError::UnsupportedFormat(_) | TeeTimeError::OutputFailed(_) => 8,
    }
}

fn error_kind(err: &TeeTimeError) -> &'static str {
    match err {
        TeeTimeError::InvalidDate(_) => "invalid_date",
        TeeTimeError::Validation(_) => "validation_error",
        TeeTimeError::Timeout { .. } => "timeout",
        TeeTimeError::ConnectionFailed { .. } => "connection_failed",
        TeeTimeError::ClientBuild(_) => "client_build",
        TeeTimeError::RateLimited { .. } => "rate_limited",
        TeeTimeError::HttpStatus { .. } => "http_error",
        TeeTimeError::MalformedBody { .. } => "malformed_body",
        TeeTimeError::UnknownCourse(_) => "unknown_course",
        TeeTimeError::UnsupportedFormat(_) => "unsupported_format",
        TeeTimeError::OutputFailed(_) => "output_failed",
    }
}

fn die(err: &TeeTimeError, json_mode: bool) -> ! {
    if json_mode {
        let json = serde_json::json!({
            "error": {
                "kind": error_kind(err),
                "message": err.to_string(),
            }
        });
        println!("{}", serde_json::to_string(&json).unwrap());
    } else {
        eprintln!("error: {err}");
    }
    process::exit(error_code(err));
}

fn init_tracing(verbose: bool) {
    let default_directive = if verbose { "qdl=debug" } else { "qdl=info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn build_plan(args: &Cli) -> Result<SearchPlan, TeeTimeError> {
    let today = chrono::Local::now().date_naive();

    let start_date = match args.start_date.as_deref() {
        Some(date) => query::parse_date(date)?,
        None => today,
    };
    let end_date = match args.end_date.as_deref() {
        Some(date) => query::parse_date(date)?,
        None => today + chrono::Duration::days(6),
    };
    let course_ids = course::resolve_courses(&args.courses)?;

    Ok(SearchPlan {
        start_date,
        end_date,
        start_hour: args.start_hour,
        end_hour: args.end_hour,
        players: args.players,
        course_ids,
    })
}

#[tokio::main]
async fn main() {
    let args = Cli::parse();
    init_tracing(args.verbose);

    let json_mode = is_json(&args);

    let plan = match build_plan(&args) {
        Ok(plan) => plan,
        Err(e) => die(&e, json_mode),
    };
    if let Err(e) = plan.validate() {
        die(&e, json_mode);
    }

    let options = FetchOptions {
        api_url: args.api_url.clone(),
        timeout: args.timeout,
    };
    let client = match fetch::build_client(&options) {
        Ok(client) => client,
        Err(e) => die(&e, json_mode),
    };

    let slots = plan.slots();
    if !json_mode {
        println!("Searching {} time slots...", slots.len());
    }

    let mut records: Vec<TeeTimeRecord> = Vec::new();
    let mut skipped = 0usize;
    let mut current_date = None;

    for (i, slot) in slots.iter().enumerate() {
        if !json_mode && current_date != Some(slot.date) {
            println!("Fetching tee times for {}...", slot.date.format("%Y-%m-%d"));
            current_date = Some(slot.date);
        }

        match qdl::search_slot(&client, slot, &options).await {
            Ok(found) => records.extend(found),
            Err(e @ TeeTimeError::UnknownCourse(_)) => die(&e, json_mode),
            Err(e) => {
                warn!("failed to fetch {}: {}", slot, e);
                skipped += 1;
            }
        }

        if !json_mode && (i + 1) % 10 == 0 {
            println!("Progress: {}/{}", i + 1, slots.len());
        }
    }

    format::sort_and_dedup(&mut records);
    info!(
        "collected {} records from {} slots ({} skipped)",
        records.len(),
        slots.len(),
        skipped
    );

    if !json_mode {
        println!();
        println!("Found {} available tee times", records.len());
        if skipped > 0 {
            println!("Skipped {skipped} time slots that failed to fetch");
        }
    }

    if let Some(ref path) = args.output {
        if let Err(e) = output::save_records(&records, path) {
            die(&e, json_mode);
        }
        if !json_mode {
            println!("Saved results to {path}");
        }
    }

    if json_mode {
        let out = if args.pretty {
            serde_json::to_string_pretty(&records).unwrap()
        } else {
            serde_json::to_string(&records).unwrap()
        };
        println!("{out}");
    } else if args.display || args.output.is_none() {
        if records.is_empty() {
            println!("No tee times found for the specified criteria.");
        } else {
            println!("\nAvailable tee times:");
            println!("{}", table::render(&records));
        }
    }
}
