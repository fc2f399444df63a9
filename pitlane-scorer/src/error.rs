//! Error types raised while configuring the scorer.
#![forbid(unsafe_code)]

use thiserror::Error;

/// Overridden scoring constants were unusable.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ConstantsError {
    /// The budget tolerance was not a finite positive multiplier.
    #[error("budget tolerance must be finite and positive, got {value}")]
    InvalidBudgetTolerance {
        /// Rejected tolerance.
        value: f64,
    },
    /// The value normaliser was not a finite positive number.
    #[error("value normaliser must be finite and positive, got {value}")]
    InvalidValueNormaliser {
        /// Rejected normaliser.
        value: f64,
    },
}
