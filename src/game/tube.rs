use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::Item;

pub(crate) type TubeItems = SmallVec<[Item; 8]>;

/// A stack of nuts, index 0 at the bottom.
#[derive(PartialEq, Eq, Clone, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tube(pub(crate) TubeItems);

impl Tube {
    pub fn new() -> Tube {
        Tube(SmallVec::new())
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn items(&self) -> &[Item] {
        &self.0
    }
    pub fn top(&self) -> Option<Item> {
        self.0.last().copied()
    }
    pub fn bottom(&self) -> Option<Item> {
        self.0.first().copied()
    }
    pub fn free_slots(&self, capacity: usize) -> usize {
        capacity.saturating_sub(self.len())
    }
    pub fn is_full(&self, capacity: usize) -> bool {
        self.len() >= capacity
    }
    /// Number of equal items stacked at the top.
    pub fn top_run(&self) -> usize {
        match self.top() {
            Some(top) => self.0.iter().rev().take_while(|&&item| item == top).count(),
            None => 0,
        }
    }
    /// Number of equal items stacked at the bottom.
    pub fn bottom_run(&self) -> usize {
        match self.bottom() {
            Some(bottom) => self.0.iter().take_while(|&&item| item == bottom).count(),
            None => 0,
        }
    }
    /// Empty tubes count as monochrome.
    pub fn is_monochrome(&self) -> bool {
        self.bottom_run() == self.len()
    }
    /// Full and of a single color: nothing left to do with this tube.
    pub fn is_finished(&self, capacity: usize) -> bool {
        self.len() == capacity && self.is_monochrome()
    }
    pub fn count(&self, item: Item) -> usize {
        self.0.iter().filter(|&&other| other == item).count()
    }
    pub(crate) fn push(&mut self, item: Item) {
        self.0.push(item);
    }
    pub(crate) fn pop(&mut self) -> Option<Item> {
        self.0.pop()
    }
}

impl FromIterator<Item> for Tube {
    fn from_iter<I: IntoIterator<Item = Item>>(iter: I) -> Self {
        Tube(iter.into_iter().collect())
    }
}

impl From<Vec<Item>> for Tube {
    fn from(items: Vec<Item>) -> Self {
        Tube(SmallVec::from_vec(items))
    }
}
