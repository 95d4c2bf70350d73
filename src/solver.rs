use std::fmt::{Display, Error, Formatter};

use serde::{Deserialize, Serialize};

use crate::config::SolverConfig;
use crate::errors::{InvalidInput, SolverError};
use crate::game::{GoalRule, ItemCounts, Move, State};

use backtrack::backtrack_until;
use branch_bound::branch_and_bound_until;

pub use stats::SearchStats;

pub mod backtrack;
pub mod branch_bound;
pub mod pruning;
pub mod solutions;
pub mod stats;


#[derive(PartialEq, Eq, Copy, Clone, Debug, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    /// Exhaustive depth-first search over unvisited states.
    #[default]
    Backtracking,
    /// Depth-first search with incumbent pruning; returns shortest solutions.
    BranchAndBound,
}

impl Algorithm {
    pub const ALL: [Algorithm; 2] = [Algorithm::Backtracking, Algorithm::BranchAndBound];

    /// Runs the engine without validating `start`.
    pub fn run(self, start: &State, max_expansions: u64, goal: GoalRule) -> Report {
        match self {
            Algorithm::Backtracking => backtrack_until(start, max_expansions, goal),
            Algorithm::BranchAndBound => branch_and_bound_until(start, max_expansions, goal),
        }
    }
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Backtracking => "backtracking",
            Algorithm::BranchAndBound => "branch-and-bound",
        }
    }
}

impl Display for Algorithm {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        write!(f, "{}", self.name())
    }
}

#[derive(PartialEq, Eq, Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    Solved {
        moves: Vec<Move>,
        proven_optimal: bool,
    },
    /// The reachable state space holds no goal.
    Insoluble,
    /// The expansion cap stopped the search. `best` is the incumbent, if any,
    /// which is not known to be optimal.
    LimitExceeded { best: Option<Vec<Move>> },
}

#[derive(PartialEq, Eq, Clone, Debug, Serialize, Deserialize)]
pub struct Report {
    pub outcome: Outcome,
    pub stats: SearchStats,
}

impl Report {
    pub fn new(outcome: Outcome, stats: SearchStats) -> Report {
        Report { outcome, stats }
    }
    pub fn is_solved(&self) -> bool {
        matches!(self.outcome, Outcome::Solved { .. })
    }
    /// The solution, or the best partial answer a capped search produced.
    pub fn moves(&self) -> Option<&[Move]> {
        match &self.outcome {
            Outcome::Solved { moves, .. } => Some(moves.as_slice()),
            Outcome::LimitExceeded { best: Some(best) } => Some(best.as_slice()),
            _ => None,
        }
    }
}

impl Display for Outcome {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        match self {
            Outcome::Solved {
                moves,
                proven_optimal,
            } => {
                write!(f, "solved in {} moves", moves.len())?;
                if *proven_optimal {
                    write!(f, " (optimal)")?;
                }
                Ok(())
            }
            Outcome::Insoluble => write!(f, "insoluble"),
            Outcome::LimitExceeded { best: Some(best) } => {
                write!(f, "expansion limit reached, best has {} moves", best.len())
            }
            Outcome::LimitExceeded { best: None } => write!(f, "expansion limit reached"),
        }
    }
}

impl Display for Report {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        write!(f, "{} [{}]", self.outcome, self.stats)
    }
}

/// Validates `start` against its own item counts and runs `algorithm` with
/// the uniform goal rule.
pub fn solve(start: &State, algorithm: Algorithm, max_expansions: u64) -> Result<Report, SolverError> {
    let config = SolverConfig {
        algorithm,
        max_expansions,
        ..SolverConfig::default()
    };
    return solve_checked(start, None, &config);
}

/// Validates `start` against `expected` (or its own counts when `None`) and
/// the configured cap, then delegates to the configured engine.
pub fn solve_checked(
    start: &State,
    expected: Option<&ItemCounts>,
    config: &SolverConfig,
) -> Result<Report, SolverError> {
    if config.max_expansions == 0 {
        return Err(InvalidInput::ZeroExpansions.into());
    }
    match expected {
        Some(expected) => start.validate(expected)?,
        None => start.validate(&start.item_counts())?,
    }
    log::info!(
        "solving {} tubes of capacity {} with {} (cap {})",
        start.len(),
        start.capacity(),
        config.algorithm,
        config.max_expansions
    );
    let report = config.algorithm.run(start, config.max_expansions, config.goal);
    log::info!("{}", report);
    return Ok(report);
}
