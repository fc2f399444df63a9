//! Facade crate for the Pitlane trip recommendation engine.
//!
//! This crate re-exports the core domain types and the scoring pipeline, and
//! exposes the HTTP live data provider behind the `live-http` feature.
//!
//! ```rust
//! use pitlane::{Budget, OfflineLiveData, Recommender, TravelStyle, UserPreferences, WeatherPreference};
//!
//! let preferences = UserPreferences::new(
//!     "CDG",
//!     Budget::new(1200.0, "EUR"),
//!     TravelStyle::Balanced,
//!     WeatherPreference::Mixed,
//! );
//! let report = Recommender::new(OfflineLiveData).recommend(&preferences, &pitlane::sample_catalog());
//! assert_eq!(
//!     report.best().map(|best| best.trip.name.as_str()),
//!     Some("Barcelona Spring GP")
//! );
//! ```

#![forbid(unsafe_code)]

pub use pitlane_core::{
    AirportDirectory, BASE_CURRENCY, Budget, CandidateEnrichment, CityDirectory, CityMetadata,
    CurrencyConversion, DailyForecast, EnrichmentContext, ExchangeRate, ExchangeRateProvider,
    FallbackRates, FallbackReason, Holiday, HolidayProvider, LiveDataProvider, Lookup,
    LookupError, OfflineLiveData, RateSource, Recommendation, RecommendationReport,
    ReferenceData, ScoreBreakdown, TravelStyle, TripCandidate, UserPreferences,
    WeatherPreference, WeatherProvider, sample_catalog,
};

pub use pitlane_scorer::{ConstantsError, Recommender, ScoringConstants, score, score_with};

#[cfg(feature = "live-http")]
pub use pitlane_data::{HttpLiveDataConfig, HttpLiveDataProvider, ProviderBuildError};
