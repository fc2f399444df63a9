//! Style-dependent weighting of the five criteria.

use pitlane_core::TravelStyle;
use serde::Serialize;

use crate::SubScores;

/// Five non-negative weights summing to one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WeightVector {
    /// Weight of the value criterion.
    pub value: f64,
    /// Weight of the experience criterion.
    pub experience: f64,
    /// Weight of the weather criterion.
    pub weather: f64,
    /// Weight of the convenience criterion.
    pub convenience: f64,
    /// Weight of the rating criterion.
    pub rating: f64,
}

impl WeightVector {
    /// Weights for [`TravelStyle::Budget`].
    pub const BUDGET: Self = Self {
        value: 0.35,
        experience: 0.20,
        weather: 0.15,
        convenience: 0.15,
        rating: 0.15,
    };

    /// Weights for [`TravelStyle::Balanced`].
    pub const BALANCED: Self = Self {
        value: 0.25,
        experience: 0.25,
        weather: 0.20,
        convenience: 0.15,
        rating: 0.15,
    };

    /// Weights for [`TravelStyle::Premium`].
    pub const PREMIUM: Self = Self {
        value: 0.15,
        experience: 0.35,
        weather: 0.15,
        convenience: 0.15,
        rating: 0.20,
    };

    /// Resolve the weights for a style.
    #[must_use]
    pub const fn for_style(style: TravelStyle) -> Self {
        match style {
            TravelStyle::Budget => Self::BUDGET,
            TravelStyle::Balanced => Self::BALANCED,
            TravelStyle::Premium => Self::PREMIUM,
        }
    }

    /// Sum of all five weights.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "the weight total is a plain sum"
    )]
    pub const fn total(self) -> f64 {
        self.value + self.experience + self.weather + self.convenience + self.rating
    }

    /// Weighted combination of `scores`, unrounded.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "combining criteria is a weighted sum"
    )]
    pub const fn combine(self, scores: &SubScores) -> f64 {
        scores.value * self.value
            + scores.experience * self.experience
            + scores.weather * self.weather
            + scores.convenience * self.convenience
            + scores.rating * self.rating
    }
}

/// Resolve weights from a free-form style tag.
///
/// Unrecognised tags resolve to the balanced profile.
///
/// # Examples
/// ```
/// use pitlane_scorer::{WeightVector, resolve_weights};
///
/// assert_eq!(resolve_weights("premium"), WeightVector::PREMIUM);
/// assert_eq!(resolve_weights("first-class"), WeightVector::BALANCED);
/// ```
#[must_use]
pub fn resolve_weights(tag: &str) -> WeightVector {
    WeightVector::for_style(TravelStyle::from_tag(tag))
}
