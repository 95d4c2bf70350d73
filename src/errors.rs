use crate::game::{Item, Move};

#[derive(Debug, thiserror::Error)]
pub enum SolverError {
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInput),

    #[error("illegal move {mv}: {reason}")]
    IllegalMove { mv: Move, reason: &'static str },

    #[error("config error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    IOError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// The invariant a caller-supplied instance broke.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidInput {
    #[error("the instance has no tubes")]
    NoTubes,

    #[error("tube capacity must be at least 1")]
    ZeroCapacity,

    #[error("tube capacity {0} exceeds the supported maximum of {max}", max = u8::MAX)]
    CapacityTooLarge(usize),

    #[error("tube P{tube} holds {len} items but capacity is {capacity}")]
    OverCapacity {
        tube: usize,
        len: usize,
        capacity: usize,
    },

    #[error("item {item} appears {found} times, expected {expected}")]
    CountMismatch {
        item: Item,
        expected: usize,
        found: usize,
    },

    #[error("max_expansions must be a positive integer")]
    ZeroExpansions,

    #[error("'{0}' is not a valid item label")]
    BadLabel(String),

    #[error("expected {expected} tubes, found {found}")]
    TubeCount { expected: usize, found: usize },

    #[error("tube P{tube} should be full (len={len}, expected {capacity})")]
    NotFull {
        tube: usize,
        len: usize,
        capacity: usize,
    },

    #[error("the buffer tube P{0} must be empty")]
    BufferNotEmpty(usize),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_display() {
        let err = InvalidInput::OverCapacity {
            tube: 2,
            len: 6,
            capacity: 5,
        };
        assert_eq!(err.to_string(), "tube P2 holds 6 items but capacity is 5");
    }

    #[test]
    fn test_solver_error_wraps_invalid_input() {
        let err: SolverError = InvalidInput::ZeroExpansions.into();
        assert_eq!(
            err.to_string(),
            "invalid input: max_expansions must be a positive integer"
        );
    }

    #[test]
    fn test_illegal_move_display() {
        let err = SolverError::IllegalMove {
            mv: Move::new(0, 1),
            reason: "destination is full",
        };
        assert_eq!(err.to_string(), "illegal move P0->P1: destination is full");
    }
}
