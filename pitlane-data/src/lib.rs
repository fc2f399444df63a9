//! Live data adapters for the Pitlane engine.
//!
//! Responsibilities:
//! - Implement the lookup traits from `pitlane-core` against public HTTP
//!   services: Nager.Date for public holidays, Open-Meteo for forecasts and
//!   Frankfurter for exchange rates.
//! - Translate transport and payload failures into
//!   [`LookupError`](pitlane_core::LookupError) values.
//!
//! Boundaries:
//! - Do not decide fallback policy; callers turn errors into fallbacks.
//! - Keep the synchronous trait surface; async HTTP stays internal.
//!
//! Invariants:
//! - Every successful lookup keeps the raw JSON it was built from.
//! - No global mutable state.

#![forbid(unsafe_code)]

pub mod live;

pub use live::{
    DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT, HttpLiveDataConfig, HttpLiveDataProvider,
    ProviderBuildError,
};
