use std::fmt::{Display, Error, Formatter};

use serde::{Deserialize, Serialize};

use crate::constants::PROGRESS_INTERVAL;

/// Counters collected by one search call.
#[derive(PartialEq, Eq, Copy, Clone, Debug, Default, Serialize, Deserialize)]
pub struct SearchStats {
    /// States generated and entered, the start state included.
    pub expanded: u64,
    /// Deepest move count of any entered state.
    pub max_depth: usize,
    /// Children cut by the bound or by the depth memo.
    pub pruned: u64,
}

impl SearchStats {
    /// Counts the start state.
    pub(crate) fn started() -> SearchStats {
        SearchStats {
            expanded: 1,
            ..SearchStats::default()
        }
    }

    pub(crate) fn enter(&mut self, depth: usize) {
        self.expanded += 1;
        if depth > self.max_depth {
            self.max_depth = depth;
        }
        if self.expanded % PROGRESS_INTERVAL == 0 {
            log::debug!("progress: {}", self);
        }
    }
}

impl Display for SearchStats {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        write!(
            f,
            "expanded: {}, max depth: {}, pruned: {}",
            self.expanded, self.max_depth, self.pruned
        )
    }
}
