use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_CAPACITY, DEFAULT_MAX_EXPANSIONS};
use crate::errors::{InvalidInput, SolverError};
use crate::game::GoalRule;
use crate::solver::Algorithm;

/// Settings shared by the solve, compare and generate commands.
#[derive(PartialEq, Eq, Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    pub algorithm: Algorithm,
    pub max_expansions: u64,
    pub goal: GoalRule,
    /// Tube capacity of generated instances.
    pub capacity: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        SolverConfig {
            algorithm: Algorithm::default(),
            max_expansions: DEFAULT_MAX_EXPANSIONS,
            goal: GoalRule::default(),
            capacity: DEFAULT_CAPACITY,
        }
    }
}

impl SolverConfig {
    /// Load configuration from a JSON file.
    pub fn load(path: &Path) -> Result<Self, SolverError> {
        let content = std::fs::read_to_string(path)?;
        let config: SolverConfig = serde_json::from_str(&content)?;
        config.validate()?;
        return Ok(config);
    }

    /// Load configuration from a JSON file, falling back to defaults if the
    /// file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, SolverError> {
        if path.exists() {
            Self::load(path)
        } else {
            log::warn!("config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    pub fn validate(&self) -> Result<(), SolverError> {
        if self.max_expansions == 0 {
            return Err(InvalidInput::ZeroExpansions.into());
        }
        if self.capacity == 0 || self.capacity > u8::MAX as usize {
            return Err(SolverError::Config(format!(
                "capacity must be between 1 and {}, got {}",
                u8::MAX,
                self.capacity
            )));
        }
        return Ok(());
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = SolverConfig::default();
        config.validate().expect("default config should be valid");
        assert_eq!(config.max_expansions, 500_000);
        assert_eq!(config.algorithm, Algorithm::Backtracking);
        assert_eq!(config.goal, GoalRule::Uniform);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: SolverConfig =
            serde_json::from_str(r#"{"algorithm": "branch_and_bound", "goal": "filled"}"#).unwrap();
        assert_eq!(config.algorithm, Algorithm::BranchAndBound);
        assert_eq!(config.goal, GoalRule::Filled);
        assert_eq!(config.max_expansions, DEFAULT_MAX_EXPANSIONS);
        assert_eq!(config.capacity, DEFAULT_CAPACITY);
    }

    #[test]
    fn test_validation_rejects_zero_expansions() {
        let config = SolverConfig {
            max_expansions: 0,
            ..SolverConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(SolverError::InvalidInput(InvalidInput::ZeroExpansions))
        ));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"max_expansions": 42, "capacity": 4}}"#).unwrap();
        let config = SolverConfig::load(file.path()).unwrap();
        assert_eq!(config.max_expansions, 42);
        assert_eq!(config.capacity, 4);

        let mut bad = tempfile::NamedTempFile::new().unwrap();
        write!(bad, r#"{{"capacity": 0}}"#).unwrap();
        assert!(matches!(
            SolverConfig::load(bad.path()),
            Err(SolverError::Config(_))
        ));
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = SolverConfig::load_or_default(&dir.path().join("missing.json")).unwrap();
        assert_eq!(config, SolverConfig::default());
    }
}
