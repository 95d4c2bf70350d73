use std::collections::BTreeSet;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::SolverError;
use crate::game::State;

/// Remembers which instances were already handed out.
pub trait InstanceLedger {
    fn contains(&self, state: &State) -> bool;
    fn record(&mut self, state: &State) -> Result<(), SolverError>;
}

fn entry(state: &State) -> String {
    format!("{}:{}", state.capacity(), state.notation())
}

#[derive(Default, Debug)]
pub struct MemoryLedger {
    seen: BTreeSet<String>,
}

impl MemoryLedger {
    pub fn new() -> MemoryLedger {
        MemoryLedger::default()
    }
    pub fn len(&self) -> usize {
        self.seen.len()
    }
    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}

impl InstanceLedger for MemoryLedger {
    fn contains(&self, state: &State) -> bool {
        self.seen.contains(&entry(state))
    }
    fn record(&mut self, state: &State) -> Result<(), SolverError> {
        self.seen.insert(entry(state));
        Ok(())
    }
}

#[derive(Serialize, Deserialize, Default)]
struct LedgerFile {
    states: BTreeSet<String>,
}

/// A ledger kept in a JSON file, rewritten on every record.
#[derive(Debug)]
pub struct FileLedger {
    path: PathBuf,
    seen: BTreeSet<String>,
}

impl FileLedger {
    /// Opens the ledger at `path`; a missing file is an empty ledger.
    pub fn open(path: impl AsRef<Path>) -> Result<FileLedger, SolverError> {
        let path = path.as_ref().to_path_buf();
        let seen = if path.exists() {
            let file = File::open(&path)?;
            let stored: LedgerFile = serde_json::from_reader(BufReader::new(file))?;
            stored.states
        } else {
            BTreeSet::new()
        };
        log::debug!("ledger {} holds {} states", path.display(), seen.len());
        return Ok(FileLedger { path, seen });
    }
    pub fn path(&self) -> &Path {
        &self.path
    }
    pub fn len(&self) -> usize {
        self.seen.len()
    }
    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
    fn save(&self) -> Result<(), SolverError> {
        let file = File::create(&self.path)?;
        let stored = LedgerFile {
            states: self.seen.clone(),
        };
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, &stored)?;
        writer.flush()?;
        return Ok(());
    }
}

impl InstanceLedger for FileLedger {
    fn contains(&self, state: &State) -> bool {
        self.seen.contains(&entry(state))
    }
    fn record(&mut self, state: &State) -> Result<(), SolverError> {
        if self.seen.insert(entry(state)) {
            self.save()?;
        }
        Ok(())
    }
}
