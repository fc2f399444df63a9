//! Ranked output of a scoring run.

use serde::{Deserialize, Serialize};

use crate::{EnrichmentContext, TripCandidate};

/// Per-criterion scores for one candidate, each in `0.0..=100.0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    /// Experience points per unit of cost.
    pub value: f64,
    /// Clamped F1 experience points.
    pub experience: f64,
    /// Fit between forecast and weather preference.
    pub weather: f64,
    /// Travel effort against days available.
    pub convenience: f64,
    /// Hotel rating on a hundred-point scale.
    pub rating: f64,
    /// Weighted combination, rounded to two decimals.
    pub total: f64,
}

/// One ranked candidate with its scores and advice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    /// The enriched, cost-adjusted candidate.
    pub trip: TripCandidate,
    /// How the candidate scored.
    pub scores: ScoreBreakdown,
    /// Ways to trim the cost.
    pub save_tips: Vec<String>,
    /// Ways to spend extra for a better weekend.
    pub splurge_tips: Vec<String>,
}

/// Full result of a recommendation request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationReport {
    /// Candidates that passed the budget filter, best first.
    pub recommendations: Vec<Recommendation>,
    /// How each candidate and the budget were enriched.
    pub enrichment: EnrichmentContext,
}

impl RecommendationReport {
    /// Highest-ranked recommendation, if any survived filtering.
    #[must_use]
    pub fn best(&self) -> Option<&Recommendation> {
        self.recommendations.first()
    }
}
