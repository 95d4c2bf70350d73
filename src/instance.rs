use std::path::Path;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::constants::STANDARD_COLORS;
use crate::errors::{InvalidInput, SolverError};
use crate::game::{Item, Move, State, Tube};

pub use self::ledger::{FileLedger, InstanceLedger, MemoryLedger};

pub mod ledger;

#[cfg(test)]
mod tests;

/// The first `count` standard color labels.
pub fn standard_colors(count: usize) -> Result<Vec<Item>, SolverError> {
    if count == 0 || count > STANDARD_COLORS.len() {
        return Err(SolverError::Config(format!(
            "color count must be between 1 and {}, got {}",
            STANDARD_COLORS.len(),
            count
        )));
    }
    let colors = STANDARD_COLORS[..count]
        .iter()
        .map(|&label| Item::new(label))
        .collect::<Result<Vec<_>, _>>()?;
    return Ok(colors);
}

/// Reads a puzzle given either as a path to a JSON file or in `RGB|GG|`
/// notation.
pub fn load_puzzle(source: &str) -> Result<State, SolverError> {
    let path = Path::new(source);
    if path.is_file() {
        let content = std::fs::read_to_string(path)?;
        return Ok(serde_json::from_str(&content)?);
    }
    return Ok(source.parse()?);
}

/// One full tube per color followed by `buffers` empty tubes.
pub fn sorted(colors: &[Item], capacity: usize, buffers: usize) -> State {
    let tubes = colors
        .iter()
        .map(|&color| std::iter::repeat(color).take(capacity).collect::<Tube>())
        .chain(std::iter::repeat_with(Tube::new).take(buffers))
        .collect();
    return State::new(tubes, capacity);
}

/// Shuffles `capacity` items of every color into full tubes and adds one
/// empty buffer. Nothing guarantees the deal can be sorted.
pub fn deal<R: Rng + ?Sized>(colors: &[Item], capacity: usize, rng: &mut R) -> State {
    let mut items: Vec<Item> = colors
        .iter()
        .flat_map(|&color| std::iter::repeat(color).take(capacity))
        .collect();
    items.shuffle(rng);
    let tubes = items
        .chunks(capacity.max(1))
        .map(|chunk| chunk.iter().copied().collect::<Tube>())
        .chain(std::iter::once(Tube::new()))
        .collect();
    return State::new(tubes, capacity);
}

/// Starts sorted and plays `moves` random reverse moves, so the result can
/// always be sorted again. Immediately undoing the previous step is avoided
/// when there is another choice. When the walk ends on a sorted state it
/// continues for up to one extra move per item.
pub fn scramble<R: Rng + ?Sized>(
    colors: &[Item],
    capacity: usize,
    buffers: usize,
    moves: usize,
    rng: &mut R,
) -> State {
    let mut state = sorted(colors, capacity, buffers);
    let mut last: Option<Move> = None;
    let extra = colors.len() * capacity;
    for step in 0..moves + extra {
        if step >= moves && !state.is_goal() {
            break;
        }
        let mut candidates = state.reverse_moves();
        if candidates.len() > 1 {
            if let Some(last) = last {
                candidates.retain(|&mv| mv != last.reversed());
            }
        }
        let mv = match candidates.choose(rng) {
            Some(&mv) => mv,
            None => break,
        };
        state = state.apply_unchecked(mv);
        last = Some(mv);
    }
    log::trace!("scrambled {} colors into {}", colors.len(), state.notation());
    return state;
}

/// The shape of a served instance: one tube per color, each full, plus one
/// empty buffer tube at the end.
pub fn check_layout(state: &State, colors: usize) -> Result<(), InvalidInput> {
    if state.len() != colors + 1 {
        return Err(InvalidInput::TubeCount {
            expected: colors + 1,
            found: state.len(),
        });
    }
    let capacity = state.capacity();
    for (tube, contents) in state.tubes()[..colors].iter().enumerate() {
        if contents.len() != capacity {
            return Err(InvalidInput::NotFull {
                tube,
                len: contents.len(),
                capacity,
            });
        }
    }
    if !state.tubes()[colors].is_empty() {
        return Err(InvalidInput::BufferNotEmpty(colors));
    }
    return Ok(());
}

/// Deals until `ledger` has not seen the result, records it and returns it.
/// `None` when every attempt produced a known instance.
pub fn fresh_deal<R, L>(
    colors: &[Item],
    capacity: usize,
    ledger: &mut L,
    attempts: usize,
    rng: &mut R,
) -> Result<Option<State>, SolverError>
where
    R: Rng + ?Sized,
    L: InstanceLedger + ?Sized,
{
    for attempt in 0..attempts {
        let state = deal(colors, capacity, rng);
        if ledger.contains(&state) {
            log::debug!("deal {} already served, attempt {}", state.notation(), attempt);
            continue;
        }
        ledger.record(&state)?;
        return Ok(Some(state));
    }
    log::warn!("no unseen deal after {} attempts", attempts);
    return Ok(None);
}
