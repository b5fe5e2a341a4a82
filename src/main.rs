use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, info};

use bank::ledger::Ledger;
use bank::processor::process_csv_stream;
use bank::snapshot;

/// Applies a CSV stream of ledger operations and prints the resulting
/// account report and statistics.
#[derive(Parser)]
#[command(version, about)]
struct Opts {
    /// CSV file of ledger operations
    file: PathBuf,
    /// Snapshot file, loaded before processing and saved back afterwards
    #[arg(long)]
    snapshot: Option<PathBuf>,
}

fn run() -> Result<()> {
    let opts = Opts::parse();

    let mut ledger = match &opts.snapshot {
        Some(path) if path.exists() => {
            let ledger = snapshot::load(path)
                .with_context(|| format!("loading snapshot {}", path.display()))?;
            info!(accounts = ledger.len(), "Loaded snapshot");
            ledger
        }
        _ => Ledger::new(),
    };

    let file =
        File::open(&opts.file).with_context(|| format!("opening {}", opts.file.display()))?;
    process_csv_stream(&mut ledger, BufReader::new(file));

    println!("{}", ledger);
    println!("total balance: {:.2}", ledger.total_balance());
    println!("average balance: {:.2}", ledger.average_balance());
    println!("zero balance accounts: {}", ledger.zero_balance_count());
    match ledger.largest_account() {
        Some(account) => println!("largest account: {}", account),
        None => println!("largest account: none"),
    }

    if let Some(path) = &opts.snapshot {
        snapshot::save(&ledger, path)
            .with_context(|| format!("saving snapshot {}", path.display()))?;
        info!(accounts = ledger.len(), "Saved snapshot");
    }

    Ok(())
}

fn main() {
    tracing_subscriber::fmt::init();

    if let Err(e) = run() {
        error!(error = format!("{:#}", e), "Something went wrong");
        std::process::exit(1);
    }
}
