//! Provenance recorded while enriching candidates and converting budgets.
//!
//! None of this is persisted by the engine; callers store or display it as
//! they see fit.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{DailyForecast, Holiday, Lookup, TravelStyle, TripCandidate};

/// What happened to one candidate during enrichment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateEnrichment {
    /// Candidate name.
    pub candidate: String,
    /// Candidate city.
    pub city: String,
    /// Whether the holiday lookup returned live data.
    pub holiday_live: bool,
    /// Why the holiday lookup fell back.
    pub holiday_fallback: Option<String>,
    /// Raw holiday payload.
    pub holiday: Option<Value>,
    /// Whether the weather lookup returned live data.
    pub weather_live: bool,
    /// Why the weather lookup fell back.
    pub weather_fallback: Option<String>,
    /// Raw forecast payload.
    pub weather: Option<Value>,
    /// When the lookups completed.
    pub fetched_at: DateTime<Utc>,
}

impl CandidateEnrichment {
    /// Record the outcome of both lookups for `candidate`.
    #[must_use]
    pub fn record(
        candidate: &TripCandidate,
        holiday: &Lookup<Holiday>,
        weather: &Lookup<DailyForecast>,
        fetched_at: DateTime<Utc>,
    ) -> Self {
        Self {
            candidate: candidate.name.clone(),
            city: candidate.city.clone(),
            holiday_live: holiday.is_live(),
            holiday_fallback: holiday.fallback_reason().map(ToString::to_string),
            holiday: holiday.as_live().map(|h| h.raw.clone()),
            weather_live: weather.is_live(),
            weather_fallback: weather.fallback_reason().map(ToString::to_string),
            weather: weather.as_live().map(|f| f.raw.clone()),
            fetched_at,
        }
    }
}

/// Where the exchange rate applied to a budget came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RateSource {
    /// The budget was already in the base currency.
    Identity,
    /// A live rate from the exchange-rate provider.
    Live,
    /// The static fallback table.
    Fallback,
    /// Neither source knew the currency; the amount was used as-is.
    Parity,
}

/// Record of the budget conversion performed for a request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrencyConversion {
    /// Currency the budget was stated in.
    pub currency: String,
    /// Currency the budget was converted into.
    pub base_currency: String,
    /// Budget before conversion.
    pub original_amount: f64,
    /// Base-currency units per unit of `currency`.
    pub rate: f64,
    /// Budget after conversion, never below the minimum budget.
    pub converted_amount: f64,
    /// Origin of `rate`.
    pub source: RateSource,
    /// Why the live rate was not used.
    pub fallback_reason: Option<String>,
    /// Raw exchange-rate payload.
    pub payload: Option<Value>,
    /// When the conversion was performed.
    pub fetched_at: DateTime<Utc>,
}

/// Provenance for a whole scoring run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrichmentContext {
    /// Style used for cost adjustment.
    pub style: TravelStyle,
    /// One entry per input candidate, in input order.
    pub candidates: Vec<CandidateEnrichment>,
    /// Budget conversion, when the run included one.
    pub budget: Option<CurrencyConversion>,
}

impl EnrichmentContext {
    /// Number of candidates whose holiday lookup was live.
    #[must_use]
    pub fn live_holidays(&self) -> usize {
        self.candidates.iter().filter(|c| c.holiday_live).count()
    }

    /// Number of candidates whose weather lookup was live.
    #[must_use]
    pub fn live_forecasts(&self) -> usize {
        self.candidates.iter().filter(|c| c.weather_live).count()
    }
}
