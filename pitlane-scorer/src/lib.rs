//! Scoring and ranking for Pitlane race-weekend trips.
//!
//! The crate turns a catalog of [`TripCandidate`](pitlane_core::TripCandidate)
//! values into ranked recommendations:
//! - **Enrichment** asks a [`LiveDataProvider`](pitlane_core::LiveDataProvider)
//!   for the next public holiday and a daily forecast per host city, keeping
//!   catalog values whenever a lookup falls back.
//! - **Pricing** scales flight and hotel costs by travel style and race
//!   month.
//! - **Budget conversion** brings the traveller's budget into the base
//!   currency using a live rate, the fallback table, or parity.
//! - **Scoring** filters candidates against `budget × 1.25`, computes five
//!   criterion scores and combines them with style-specific weights.
//!
//! [`score`] runs the pure ranking step on its own; [`Recommender`] runs the
//! whole pipeline.
//!
//! # Examples
//!
//! ```
//! use pitlane_core::{OfflineLiveData, TravelStyle, UserPreferences, WeatherPreference, sample_catalog};
//! use pitlane_core::Budget;
//! use pitlane_scorer::Recommender;
//!
//! let preferences = UserPreferences::new(
//!     "MXP",
//!     Budget::new(2500.0, "EUR"),
//!     TravelStyle::Premium,
//!     WeatherPreference::Cool,
//! );
//! let report = Recommender::new(OfflineLiveData).recommend(&preferences, &sample_catalog());
//! assert_eq!(report.recommendations.len(), 3);
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod budget;
mod constants;
mod criteria;
mod engine;
mod enrich;
mod error;
mod pricing;
pub mod tips;
mod weights;

pub use budget::{budget_ceiling, filter_by_budget, within_budget};
pub use constants::{BUDGET_TOLERANCE, ScoringConstants, VALUE_NORMALISER};
pub use criteria::{
    MAX_SCORE, SubScores, convenience_score, experience_score, rating_quality, sanitise,
    value_score, value_score_with, weather_fit,
};
pub use engine::{Recommender, score, score_with};
pub use enrich::{convert_budget, enrich_candidate, enrich_candidates};
pub use error::ConstantsError;
pub use pricing::{adjust_candidate, adjust_cost, month_factor, style_factor};
pub use weights::{WeightVector, resolve_weights};
