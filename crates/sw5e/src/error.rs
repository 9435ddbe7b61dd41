//! Error types for sw5e data validation

use thiserror::Error;

use crate::proficency::{Proficency, TrainingKind};

/// Main error type for sw5e operations
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sw5eError {
    /// An ability score outside the legal 1..=30 range
    #[error("ability score {got} is out of range (1..=30)")]
    ScoreOutOfRange {
        /// The rejected raw score
        got: u8,
    },

    /// A character level outside the legal 1..=20 range
    #[error("character level {got} is out of range (1..=20)")]
    LevelOutOfRange {
        /// The rejected raw level
        got: u8,
    },

    /// A proficency tier assigned to a target it cannot be obtained in
    #[error("{level} proficency cannot be obtained in {target}")]
    TrainingNotAllowed {
        /// The rejected tier
        level: Proficency,
        /// What the tier was being assigned to
        target: TrainingKind,
    },
}

/// Result type alias for sw5e operations
pub type Result<T> = std::result::Result<T, Sw5eError>;
