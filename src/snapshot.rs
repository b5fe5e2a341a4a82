//! Whole-ledger persistence. The snapshot is a single versioned JSON
//! document so it stays human-auditable; unknown versions are rejected
//! rather than guessed at.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::account::Account;
use crate::error::SnapshotError;
use crate::ledger::Ledger;

pub const SNAPSHOT_VERSION: u32 = 1;

#[derive(Debug, Serialize, Deserialize)]
struct Snapshot {
    version: u32,
    accounts: Vec<Account>,
}

pub fn write_snapshot(ledger: &Ledger, mut writer: impl Write) -> Result<(), SnapshotError> {
    let mut accounts: Vec<Account> = ledger.accounts().cloned().collect();
    accounts.sort_unstable_by(|a, b| a.number().cmp(b.number()));

    let snapshot = Snapshot {
        version: SNAPSHOT_VERSION,
        accounts,
    };
    serde_json::to_writer_pretty(&mut writer, &snapshot)?;
    writer.flush()?;
    Ok(())
}

pub fn read_snapshot(reader: impl Read) -> Result<Ledger, SnapshotError> {
    let snapshot: Snapshot = serde_json::from_reader(reader)?;
    if snapshot.version != SNAPSHOT_VERSION {
        return Err(SnapshotError::UnsupportedVersion(snapshot.version));
    }
    Ok(Ledger::from_accounts(snapshot.accounts)?)
}

pub fn save(ledger: &Ledger, path: impl AsRef<Path>) -> Result<(), SnapshotError> {
    let file = File::create(path)?;
    write_snapshot(ledger, BufWriter::new(file))
}

pub fn load(path: impl AsRef<Path>) -> Result<Ledger, SnapshotError> {
    let file = File::open(path)?;
    read_snapshot(BufReader::new(file))
}
