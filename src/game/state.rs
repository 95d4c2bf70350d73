use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::tube::Tube;
use super::{Item, ItemCounts, Move};
use crate::errors::{InvalidInput, SolverError};

/// Snapshot of every tube of a puzzle instance. Tube identity is its position.
#[derive(PartialEq, Eq, Clone, Hash, Serialize, Deserialize)]
#[serde(from = "RawState")]
pub struct State {
    capacity: usize,
    tubes: Vec<Tube>,
}

/// Compact structural fingerprint of a state. Two keys are equal iff every
/// tube, in order, holds the same items in the same order.
#[derive(PartialEq, Eq, Clone, Hash, Debug)]
pub struct StateKey(Box<[u8]>);

#[derive(Deserialize)]
struct RawState {
    capacity: Option<usize>,
    tubes: Vec<Tube>,
}

impl From<RawState> for State {
    fn from(raw: RawState) -> Self {
        match raw.capacity {
            Some(capacity) => State::new(raw.tubes, capacity),
            None => State::from_tubes(raw.tubes),
        }
    }
}

impl State {
    /// No validation happens here; see [`State::validate`].
    pub fn new(tubes: Vec<Tube>, capacity: usize) -> State {
        State { capacity, tubes }
    }
    /// Capacity is taken to be the length of the longest tube.
    pub fn from_tubes(tubes: Vec<Tube>) -> State {
        let capacity = tubes.iter().map(Tube::len).max().unwrap_or(0);
        return State::new(tubes, capacity);
    }
    pub fn with_capacity(self, capacity: usize) -> State {
        State { capacity, ..self }
    }
    pub fn capacity(&self) -> usize {
        self.capacity
    }
    pub fn tubes(&self) -> &[Tube] {
        &self.tubes
    }
    pub fn tube(&self, index: usize) -> Option<&Tube> {
        self.tubes.get(index)
    }
    pub fn len(&self) -> usize {
        self.tubes.len()
    }
    pub fn is_empty(&self) -> bool {
        self.tubes.is_empty()
    }

    pub fn is_goal(&self) -> bool {
        self.tubes.iter().all(Tube::is_monochrome)
    }
    pub fn is_complete(&self) -> bool {
        self.tubes
            .iter()
            .all(|tube| tube.is_empty() || tube.is_finished(self.capacity))
    }

    pub fn item_counts(&self) -> ItemCounts {
        let mut counts = ItemCounts::new();
        for tube in self.tubes.iter() {
            for &item in tube.items() {
                *counts.entry(item).or_insert(0) += 1;
            }
        }
        return counts;
    }

    pub fn is_valid(&self, expected: &ItemCounts) -> bool {
        self.validate(expected).is_ok()
    }

    /// Reports the first broken invariant: shape, capacity, then item totals.
    pub fn validate(&self, expected: &ItemCounts) -> Result<(), InvalidInput> {
        if self.tubes.is_empty() {
            return Err(InvalidInput::NoTubes);
        }
        if self.capacity == 0 {
            return Err(InvalidInput::ZeroCapacity);
        }
        if self.capacity > u8::MAX as usize {
            return Err(InvalidInput::CapacityTooLarge(self.capacity));
        }
        for (tube, contents) in self.tubes.iter().enumerate() {
            if contents.len() > self.capacity {
                return Err(InvalidInput::OverCapacity {
                    tube,
                    len: contents.len(),
                    capacity: self.capacity,
                });
            }
        }
        let found = self.item_counts();
        for (&item, &count) in expected.iter() {
            let actual = found.get(&item).copied().unwrap_or(0);
            if actual != count {
                return Err(InvalidInput::CountMismatch {
                    item,
                    expected: count,
                    found: actual,
                });
            }
        }
        if let Some((&item, &count)) = found.iter().find(|(item, _)| !expected.contains_key(item)) {
            return Err(InvalidInput::CountMismatch {
                item,
                expected: 0,
                found: count,
            });
        }
        return Ok(());
    }

    pub fn key(&self) -> StateKey {
        debug_assert!(
            self.capacity <= u8::MAX as usize,
            "capacity {} does not fit a one byte tube length",
            self.capacity
        );
        let items: usize = self.tubes.iter().map(Tube::len).sum();
        let mut bytes = Vec::with_capacity(self.tubes.len() + items);
        for tube in self.tubes.iter() {
            // lengths are bounded by the capacity, which validation keeps within u8
            bytes.push(tube.len() as u8);
            bytes.extend(tube.items().iter().map(|item| item.0));
        }
        return StateKey(bytes.into_boxed_slice());
    }

    /// Applies `mv` after checking it is legal.
    pub fn apply(&self, mv: Move) -> Result<State, SolverError> {
        self.check_move(mv)
            .map_err(|reason| SolverError::IllegalMove { mv, reason })?;
        return Ok(self.apply_unchecked(mv));
    }

    /// Applies a move known to be legal, e.g. one from [`State::legal_moves`].
    pub(crate) fn apply_unchecked(&self, mv: Move) -> State {
        let mut next = self.clone();
        if let Some(item) = next.tubes[mv.from].pop() {
            next.tubes[mv.to].push(item);
        }
        return next;
    }

    /// The plain `RGB|GG|` notation accepted by [`State::from_str`].
    pub fn notation(&self) -> String {
        self.tubes
            .iter()
            .map(|tube| tube.items().iter().map(|item| item.label()).collect::<String>())
            .collect::<Vec<_>>()
            .join("|")
    }
}

impl FromStr for State {
    type Err = InvalidInput;

    /// Tubes are separated by `|` and listed bottom first; `.` and whitespace
    /// are ignored, so `"RG.|..|"` is three tubes.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tubes = s
            .trim()
            .split('|')
            .map(|segment| {
                segment
                    .chars()
                    .filter(|&c| c != '.' && !c.is_whitespace())
                    .map(Item::new)
                    .collect::<Result<Tube, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;
        return Ok(State::from_tubes(tubes));
    }
}

impl StateKey {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}
