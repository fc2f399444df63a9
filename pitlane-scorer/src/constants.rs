//! Tunable constants of the scoring model.

use crate::ConstantsError;

/// Multiple of the stated budget a candidate may cost and still be scored.
///
/// Near-budget options survive the filter so the value criterion can
/// penalise them instead.
pub const BUDGET_TOLERANCE: f64 = 1.25;

/// Experience points per cost unit that earn a full value score.
///
/// A candidate reaches 100 once `points / total_cost * VALUE_NORMALISER`
/// does, i.e. at 25 cost units per point.
pub const VALUE_NORMALISER: f64 = 2500.0;

/// Overridable copies of [`BUDGET_TOLERANCE`] and [`VALUE_NORMALISER`].
///
/// # Examples
/// ```
/// use pitlane_scorer::ScoringConstants;
///
/// let strict = ScoringConstants { budget_tolerance: 1.0, ..ScoringConstants::default() };
/// assert!(strict.validate().is_ok());
///
/// let broken = ScoringConstants { value_normaliser: 0.0, ..ScoringConstants::default() };
/// assert!(broken.validate().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringConstants {
    /// Budget multiplier used by the budget filter.
    pub budget_tolerance: f64,
    /// Normaliser used by the value criterion.
    pub value_normaliser: f64,
}

impl ScoringConstants {
    /// Validate the constants and return a copy.
    ///
    /// # Errors
    /// Returns [`ConstantsError`] when either constant is not finite or not
    /// strictly positive.
    pub const fn validate(self) -> Result<Self, ConstantsError> {
        if !is_positive(self.budget_tolerance) {
            return Err(ConstantsError::InvalidBudgetTolerance {
                value: self.budget_tolerance,
            });
        }
        if !is_positive(self.value_normaliser) {
            return Err(ConstantsError::InvalidValueNormaliser {
                value: self.value_normaliser,
            });
        }
        Ok(self)
    }
}

impl Default for ScoringConstants {
    fn default() -> Self {
        Self {
            budget_tolerance: BUDGET_TOLERANCE,
            value_normaliser: VALUE_NORMALISER,
        }
    }
}

const fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}
