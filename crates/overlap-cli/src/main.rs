//! `overlap` CLI — intersect weekly availability and manage stored schedules.
//!
//! ## Usage
//!
//! ```sh
//! # Common availability of two schedule files
//! overlap intersect -i alice.json -i bob.json
//!
//! # Same, reading a JSON array of schedules from stdin
//! echo '[{"Monday":[{"start":9,"end":17}]},{"Monday":[{"start":13,"end":20}]}]' | overlap intersect
//!
//! # Keep days that only some participants listed
//! overlap intersect --policy carry -i alice.json -i bob.json
//!
//! # Check a schedule before storing it
//! overlap validate -i alice.json
//!
//! # Store, fetch, and query participants in a schedule directory
//! overlap --store ./schedules put alice@example.com -i alice.json
//! overlap --store ./schedules get alice@example.com
//! overlap --store ./schedules common alice@example.com bob@example.com
//! ```

mod config;

use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use overlap_engine::{
    codec, common_availability, intersect_all_with, DaySchedule, DirectoryStore,
    MissingDayPolicy, ParticipantId, ScheduleStore,
};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use crate::config::Config;

#[derive(Parser)]
#[command(
    name = "overlap",
    version,
    about = "Intersect weekly availability across participants"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Schedule store directory (one <participant>.json per participant)
    #[arg(long, global = true, env = "OVERLAP_STORE")]
    store: Option<PathBuf>,

    /// TOML config file with `store` and `policy` defaults
    #[arg(long, global = true, env = "OVERLAP_CONFIG")]
    config: Option<PathBuf>,

    /// Log more (-v debug, -vv trace); RUST_LOG overrides
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Intersect schedules given as files, or as a JSON array on stdin
    Intersect {
        /// Schedule file; repeat for each participant (reads an array from stdin if omitted)
        #[arg(short, long)]
        input: Vec<PathBuf>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// What to do with a day only some schedules list: drop or carry
        #[arg(long)]
        policy: Option<MissingDayPolicy>,
    },
    /// Check that a schedule decodes and every interval has start < end
    Validate {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<PathBuf>,
    },
    /// Store a participant's schedule
    Put {
        /// Participant id, e.g. an email address
        id: String,
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<PathBuf>,
    },
    /// Print a participant's stored schedule
    Get {
        /// Participant id
        id: String,
    },
    /// Common availability of stored participants
    Common {
        /// Participant ids
        #[arg(required = true)]
        ids: Vec<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// What to do with a day only some schedules list: drop or carry
        #[arg(long)]
        policy: Option<MissingDayPolicy>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = Config::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Intersect {
            input,
            output,
            policy,
        } => {
            let schedules = if input.is_empty() {
                let json = read_input(None)?;
                codec::decode_schedules(&json).context("Failed to decode schedules from stdin")?
            } else {
                input
                    .iter()
                    .map(|path| read_schedule(Some(path.as_path())))
                    .collect::<Result<Vec<_>>>()?
            };
            let policy = config.policy(policy);
            debug!(count = schedules.len(), %policy, "intersecting schedules");

            let result = intersect_all_with(&schedules, policy);
            write_schedule(output.as_deref(), &result)?;
        }
        Commands::Validate { input } => {
            let schedule = read_schedule(input.as_deref())?;
            let intervals: usize = schedule.iter().map(|(_, list)| list.len()).sum();
            println!(
                "OK: {} day(s), {} interval(s)",
                schedule.len(),
                intervals
            );
        }
        Commands::Put { id, input } => {
            let id = parse_id(&id)?;
            let schedule = read_schedule(input.as_deref())?;
            let store = DirectoryStore::new(config.store_dir(cli.store));
            store
                .put(&id, &schedule)
                .with_context(|| format!("Failed to store schedule for {}", id))?;
            info!(participant = %id, store = %store.root().display(), "stored schedule");
        }
        Commands::Get { id } => {
            let id = parse_id(&id)?;
            let store = DirectoryStore::new(config.store_dir(cli.store));
            let schedule = store
                .get(&id)
                .with_context(|| format!("Failed to load schedule for {}", id))?
                .with_context(|| format!("No stored schedule for {}", id))?;
            write_schedule(None, &schedule)?;
        }
        Commands::Common {
            ids,
            output,
            policy,
        } => {
            let ids = ids
                .iter()
                .map(|id| parse_id(id))
                .collect::<Result<Vec<_>>>()?;
            let store = DirectoryStore::new(config.store_dir(cli.store));
            let result = common_availability(&store, &ids, config.policy(policy))
                .context("Failed to compute common availability")?;
            write_schedule(output.as_deref(), &result)?;
        }
    }

    Ok(())
}

/// Install a stderr subscriber. `RUST_LOG` wins; otherwise `-v` picks the level.
fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn parse_id(raw: &str) -> Result<ParticipantId> {
    ParticipantId::new(raw).with_context(|| format!("Invalid participant id: {}", raw))
}

fn read_schedule(path: Option<&Path>) -> Result<DaySchedule> {
    let json = read_input(path)?;
    let source = path.map_or_else(|| "stdin".to_string(), |p| p.display().to_string());
    codec::decode_schedule(&json).with_context(|| format!("Failed to decode schedule from {}", source))
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display())),
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_schedule(path: Option<&Path>, schedule: &DaySchedule) -> Result<()> {
    let pretty = codec::encode_schedule_pretty(schedule)?;
    match path {
        Some(path) => {
            std::fs::write(path, pretty)
                .with_context(|| format!("Failed to write file: {}", path.display()))?;
        }
        None => {
            println!("{}", pretty);
        }
    }
    Ok(())
}
