use std::collections::HashSet;

use super::{Outcome, Report, SearchStats};
use crate::game::{GoalRule, Move, State, StateKey};

pub(crate) struct Frame {
    pub state: State,
    pub moves: Vec<Move>,
    pub next: usize,
}

impl Frame {
    pub(crate) fn new(state: State) -> Frame {
        let moves = state.legal_moves();
        Frame {
            state,
            moves,
            next: 0,
        }
    }

    /// The next untried move, advancing the cursor.
    pub(crate) fn advance(&mut self) -> Option<Move> {
        let mv = self.moves.get(self.next).copied();
        self.next += 1;
        return mv;
    }
}

/// Depth-first search for any sequence of moves that sorts `start`.
pub fn backtrack(start: &State, max_expansions: u64) -> Report {
    return backtrack_until(start, max_expansions, GoalRule::Uniform);
}

/// [`backtrack`] with an explicit goal rule.
///
/// Every state is entered at most once. Children are tried in legal-move
/// order, and the search stops on the first goal, when the reachable space
/// is exhausted, or when entering another state would exceed
/// `max_expansions`.
pub fn backtrack_until(start: &State, max_expansions: u64, goal: GoalRule) -> Report {
    let mut stats = SearchStats::started();
    log::debug!("backtracking from {}", start.notation());
    if goal.accepts(start) {
        return Report::new(solved(vec![]), stats);
    }

    let mut visited: HashSet<StateKey> = HashSet::new();
    visited.insert(start.key());
    let mut path: Vec<Move> = vec![];
    let mut stack = vec![Frame::new(start.clone())];
    while let Some(frame) = stack.last_mut() {
        let mv = match frame.advance() {
            Some(mv) => mv,
            None => {
                stack.pop();
                path.pop();
                continue;
            }
        };
        let child = frame.state.apply_unchecked(mv);
        let key = child.key();
        if visited.contains(&key) {
            continue;
        }
        if stats.expanded >= max_expansions {
            log::info!("backtracking hit the expansion limit at depth {}", path.len());
            return Report::new(Outcome::LimitExceeded { best: None }, stats);
        }
        visited.insert(key);
        path.push(mv);
        stats.enter(path.len());
        coz::progress!("backtrack expansion");

        if goal.accepts(&child) {
            return Report::new(solved(path), stats);
        }
        stack.push(Frame::new(child));
    }
    return Report::new(Outcome::Insoluble, stats);
}

fn solved(moves: Vec<Move>) -> Outcome {
    // the start is checked before anything else, so a single move is optimal
    let proven_optimal = moves.len() <= 1;
    return Outcome::Solved {
        moves,
        proven_optimal,
    };
}
