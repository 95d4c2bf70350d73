use std::collections::BTreeMap;
use std::fmt::{Debug, Display, Error, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::errors::InvalidInput;

pub use self::state::{State, StateKey};
pub use self::tube::Tube;

pub mod display;
pub mod moves;
pub mod state;
pub mod tube;


/// A nut color. Stored as the ASCII label it is written with (`R`, `G`, ...).
#[derive(PartialEq, Eq, PartialOrd, Ord, Copy, Clone, Hash)]
pub struct Item(pub(crate) u8);

impl Item {
    pub fn new(label: char) -> Result<Item, InvalidInput> {
        if label.is_ascii_graphic() && !RESERVED_LABELS.contains(&label) {
            return Ok(Item(label as u8));
        }
        return Err(InvalidInput::BadLabel(label.to_string()));
    }
    pub fn label(self) -> char {
        self.0 as char
    }
}

// separators of the compact text notation
const RESERVED_LABELS: [char; 3] = ['|', '.', ','];

impl TryFrom<char> for Item {
    type Error = InvalidInput;

    fn try_from(label: char) -> Result<Self, Self::Error> {
        Item::new(label)
    }
}

impl FromStr for Item {
    type Err = InvalidInput;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(label), None) => Item::new(label),
            _ => Err(InvalidInput::BadLabel(s.to_string())),
        }
    }
}

impl Display for Item {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        write!(f, "{}", self.label())
    }
}

impl Debug for Item {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        write!(f, "{}", self.label())
    }
}

impl Serialize for Item {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&self.label())
    }
}

impl<'de> Deserialize<'de> for Item {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        label.parse().map_err(serde::de::Error::custom)
    }
}

/// Relocation of the top item of tube `from` onto tube `to`.
#[derive(PartialEq, Eq, Copy, Clone, Hash, Debug, Serialize, Deserialize)]
#[serde(from = "(usize, usize)", into = "(usize, usize)")]
pub struct Move {
    pub from: usize,
    pub to: usize,
}

impl Move {
    pub fn new(from: usize, to: usize) -> Move {
        Move { from, to }
    }
    pub fn reversed(self) -> Move {
        Move::new(self.to, self.from)
    }
}

impl From<(usize, usize)> for Move {
    fn from((from, to): (usize, usize)) -> Self {
        Move::new(from, to)
    }
}

impl From<Move> for (usize, usize) {
    fn from(mv: Move) -> Self {
        (mv.from, mv.to)
    }
}

/// Total number of nuts of every color across all tubes.
pub type ItemCounts = BTreeMap<Item, usize>;

/// Which states count as sorted.
#[derive(
    PartialEq, Eq, Copy, Clone, Debug, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum GoalRule {
    /// Every tube is empty or holds a single color.
    #[default]
    Uniform,
    /// Every tube is empty or full of a single color.
    Filled,
}

impl GoalRule {
    pub fn accepts(self, state: &State) -> bool {
        match self {
            GoalRule::Uniform => state.is_goal(),
            GoalRule::Filled => state.is_complete(),
        }
    }
}
