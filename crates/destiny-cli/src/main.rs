//! Destiny CLI - compute and inspect Destiny Matrix profiles from a birth date.

use clap::{Parser, Subcommand};

mod commands;
mod date;
mod logging;
mod output;

use commands::{channels, describe, matrix, reduce};

#[derive(Parser)]
#[command(name = "destiny")]
#[command(about = "Destiny Matrix numerology profiles from a date of birth")]
struct Cli {
    /// Log level spec (e.g. `debug`, `destiny_core=trace`); overrides RUST_LOG
    #[arg(long, global = true)]
    log_level: Option<String>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the full matrix for a birth date
    Matrix {
        /// Birth date as YYYY-MM-DD
        date: String,
        /// Output as pretty JSON
        #[arg(long, conflicts_with_all = ["canonical", "fingerprint"])]
        json: bool,
        /// Output canonical (RFC 8785) JSON bytes
        #[arg(long, conflicts_with = "fingerprint")]
        canonical: bool,
        /// Output the matrix fingerprint only
        #[arg(long)]
        fingerprint: bool,
    },
    /// Print the money, love, and karmic channels for a birth date
    Channels {
        /// Birth date as YYYY-MM-DD
        date: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the description of an Arcana value
    Describe {
        /// Arcana value (unknown values fall back to 1)
        value: u32,
        /// Category (personality, spirit, social, karmic, soul, money, love)
        #[arg(long, default_value = "personality")]
        category: String,
    },
    /// Reduce a non-negative integer into the Arcana range
    Reduce {
        /// Integer to reduce
        n: u64,
    },
}

fn main() {
    let cli = Cli::parse();

    let _logger = match logging::init(cli.log_level.as_deref()) {
        Ok(handle) => Some(handle),
        Err(e) => {
            eprintln!("Warning: logging disabled: {}", e);
            None
        }
    };

    let result = match cli.command {
        Commands::Matrix {
            date,
            json,
            canonical,
            fingerprint,
        } => matrix::run(date, matrix::Format::from_flags(json, canonical, fingerprint)),
        Commands::Channels { date, json } => channels::run(date, json),
        Commands::Describe { value, category } => describe::run(value, category),
        Commands::Reduce { n } => reduce::run(n),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
