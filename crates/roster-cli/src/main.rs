//! Roster CLI
//!
//! Interactive console for the in-memory employee roster

use clap::{Parser, ValueEnum};
use roster_core::logging_facility::{self, Profile};

mod console;

#[derive(Debug, Parser)]
#[command(name = "roster")]
#[command(about = "Employee roster - add, list, search, update and delete records", long_about = None)]
struct Cli {
    /// Emit structured logs to stderr using this profile (off when omitted)
    #[arg(long, value_enum)]
    log_profile: Option<LogProfile>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogProfile {
    /// Human-readable, debug level
    Development,
    /// JSON lines, info level
    Production,
}

impl From<LogProfile> for Profile {
    fn from(profile: LogProfile) -> Self {
        match profile {
            LogProfile::Development => Profile::Development,
            LogProfile::Production => Profile::Production,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    if let Some(profile) = cli.log_profile {
        logging_facility::init(profile.into());
    }

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut session = console::Session::new(stdin.lock(), stdout.lock());

    if let Err(e) = session.run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
