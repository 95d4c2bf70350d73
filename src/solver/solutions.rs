use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::Report;
use crate::errors::SolverError;
use crate::game::{GoalRule, Move, State};

/// Every state visited by playing `moves` from `start`, `start` included.
pub fn replay(start: &State, moves: &[Move]) -> Result<Vec<State>, SolverError> {
    let mut states = Vec::with_capacity(moves.len() + 1);
    let mut current = start.clone();
    for &mv in moves {
        let next = current.apply(mv)?;
        states.push(current);
        current = next;
    }
    states.push(current);
    return Ok(states);
}

/// Whether `moves` legally take `start` to a state `goal` accepts. Illegal
/// moves are reported as errors rather than as `false`.
pub fn verify(start: &State, moves: &[Move], goal: GoalRule) -> Result<bool, SolverError> {
    let states = replay(start, moves)?;
    return Ok(states.last().map_or(false, |last| goal.accepts(last)));
}

/// A solved instance as stored on disk.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct SolutionRecord {
    pub start: State,
    pub report: Report,
}

pub fn store_solution(path: &Path, record: &SolutionRecord) -> Result<(), SolverError> {
    let file = File::options()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, record)?;
    writer.flush()?;
    log::debug!("stored solution to {}", path.display());
    return Ok(());
}

/// Reads a record back and checks that its moves still replay legally.
pub fn read_solution(path: &Path) -> Result<SolutionRecord, SolverError> {
    let file = File::open(path)?;
    let record: SolutionRecord = serde_json::from_reader(BufReader::new(file))?;
    if let Some(moves) = record.report.moves() {
        replay(&record.start, moves)?;
    }
    return Ok(record);
}
