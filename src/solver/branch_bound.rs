use std::collections::HashMap;

use super::backtrack::Frame;
use super::pruning::{bound_after, lower_bound};
use super::{Outcome, Report, SearchStats};
use crate::game::{GoalRule, Move, State, StateKey};

/// Depth-first search for a shortest sequence of moves that sorts `start`.
pub fn branch_and_bound(start: &State, max_expansions: u64) -> Report {
    return branch_and_bound_until(start, max_expansions, GoalRule::Uniform);
}

/// [`branch_and_bound`] with an explicit goal rule.
///
/// Once a solution of length `L` is known, a child at depth `d` is dropped
/// when `d + lower_bound(child) >= L`. A state is entered again only when it
/// is reached at a strictly smaller depth than before. The search ends early
/// when the incumbent matches the root bound.
pub fn branch_and_bound_until(start: &State, max_expansions: u64, goal: GoalRule) -> Report {
    let mut stats = SearchStats::started();
    log::debug!("branch and bound from {}", start.notation());
    if goal.accepts(start) {
        return Report::new(
            Outcome::Solved {
                moves: vec![],
                proven_optimal: true,
            },
            stats,
        );
    }

    let root_bound = lower_bound(start);
    let mut best_depth: HashMap<StateKey, usize> = HashMap::new();
    best_depth.insert(start.key(), 0);
    let mut incumbent: Option<Vec<Move>> = None;
    let mut path: Vec<Move> = vec![];
    // bounds run parallel to the frames
    let mut bounds = vec![root_bound];
    let mut stack = vec![Frame::new(start.clone())];
    while let Some(frame) = stack.last_mut() {
        let mv = match frame.advance() {
            Some(mv) => mv,
            None => {
                stack.pop();
                bounds.pop();
                path.pop();
                continue;
            }
        };
        let depth = path.len() + 1;
        let parent_bound = bounds.last().copied().unwrap_or(root_bound);
        let bound = bound_after(&frame.state, parent_bound, mv);
        if let Some(best) = &incumbent {
            if depth + bound >= best.len() {
                stats.pruned += 1;
                continue;
            }
        }
        let child = frame.state.apply_unchecked(mv);
        debug_assert_eq!(bound, lower_bound(&child));
        let key = child.key();
        if best_depth.get(&key).map_or(false, |&seen| seen <= depth) {
            stats.pruned += 1;
            continue;
        }
        if stats.expanded >= max_expansions {
            log::info!("branch and bound hit the expansion limit at depth {}", path.len());
            return Report::new(Outcome::LimitExceeded { best: incumbent }, stats);
        }
        best_depth.insert(key, depth);
        path.push(mv);
        stats.enter(depth);
        coz::progress!("branch and bound expansion");

        if goal.accepts(&child) {
            log::debug!("incumbent improved to {} moves", depth);
            incumbent = Some(path.clone());
            path.pop();
            if depth == root_bound {
                break;
            }
            continue;
        }
        stack.push(Frame::new(child));
        bounds.push(bound);
    }

    return match incumbent {
        Some(moves) => Report::new(
            Outcome::Solved {
                moves,
                proven_optimal: true,
            },
            stats,
        ),
        None => Report::new(Outcome::Insoluble, stats),
    };
}
