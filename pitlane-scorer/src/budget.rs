//! Budget gating applied after cost adjustment.

use pitlane_core::{TripCandidate, coerce_amount};

use crate::criteria::cost_as_f64;

/// Highest total cost that still passes the filter.
///
/// The budget is coerced to the minimum budget first, so the ceiling is
/// always positive.
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "the ceiling is a tolerance multiple of the budget"
)]
pub fn budget_ceiling(budget: f64, tolerance: f64) -> f64 {
    coerce_amount(budget) * tolerance
}

/// Whether `total_cost` fits within `budget × tolerance`; equality passes.
///
/// # Examples
/// ```
/// use pitlane_scorer::within_budget;
///
/// assert!(within_budget(1000, 800.0, 1.25));
/// assert!(!within_budget(1001, 800.0, 1.25));
/// ```
#[must_use]
pub fn within_budget(total_cost: u64, budget: f64, tolerance: f64) -> bool {
    cost_as_f64(total_cost) <= budget_ceiling(budget, tolerance)
}

/// Keep the candidates whose total cost fits the budget, preserving order.
#[must_use]
pub fn filter_by_budget(
    candidates: Vec<TripCandidate>,
    budget: f64,
    tolerance: f64,
) -> Vec<TripCandidate> {
    let ceiling = budget_ceiling(budget, tolerance);
    candidates
        .into_iter()
        .filter(|trip| {
            let keep = cost_as_f64(trip.total_cost()) <= ceiling;
            if !keep {
                log::debug!(
                    "dropping {}: total {} exceeds ceiling {ceiling:.2}",
                    trip.name,
                    trip.total_cost()
                );
            }
            keep
        })
        .collect()
}
