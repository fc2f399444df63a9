//! Core domain types for the Pitlane trip recommendation engine.
//!
//! The crate defines what a recommendation request is made of, which
//! external lookups the engine depends on, and the shape of its output:
//! - [`UserPreferences`] and [`TripCandidate`] describe the request.
//! - [`HolidayProvider`], [`WeatherProvider`] and [`ExchangeRateProvider`]
//!   abstract the live services; [`Lookup`] makes their degrade-to-fallback
//!   contract explicit.
//! - [`ReferenceData`] carries the city, airport and fallback-rate tables.
//! - [`RecommendationReport`] and [`EnrichmentContext`] describe the result.
//!
//! Scoring itself lives in `pitlane-scorer`; HTTP providers live in
//! `pitlane-data`.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod catalog;
mod enrichment;
pub mod live;
mod preferences;
mod recommendation;
pub mod reference;
mod trip;

#[doc(hidden)]
pub mod test_support;

pub use catalog::sample_catalog;
pub use enrichment::{
    CandidateEnrichment, CurrencyConversion, EnrichmentContext, RateSource,
};
pub use live::{
    DailyForecast, ExchangeRate, ExchangeRateProvider, FallbackReason, Holiday, HolidayProvider,
    LiveDataProvider, Lookup, LookupError, OfflineLiveData, WeatherProvider,
};
pub use preferences::{
    Budget, DEFAULT_BUDGET, DEFAULT_HOME_AIRPORT, MIN_BUDGET, ParsePreferenceError, TravelStyle,
    UserPreferences, WeatherPreference, coerce_amount,
};
pub use recommendation::{Recommendation, RecommendationReport, ScoreBreakdown};
pub use reference::{
    AirportDirectory, BASE_CURRENCY, CityDirectory, CityMetadata, FallbackRates, ReferenceData,
};
pub use trip::TripCandidate;
