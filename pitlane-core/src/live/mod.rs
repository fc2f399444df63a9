//! Live data lookups consulted while enriching candidates.
//!
//! Three narrow traits abstract the external services: a holiday calendar,
//! a daily weather forecast and a currency exchange rate. Providers return
//! `Result<_, LookupError>`; the enrichment pipeline converts each result
//! into a [`Lookup`], so a failed call degrades into a recorded
//! [`FallbackReason`] instead of an error.

mod error;
mod lookup;
mod offline;
mod provider;

pub use error::LookupError;
pub use lookup::{FallbackReason, Lookup};
pub use offline::OfflineLiveData;
pub use provider::{
    DailyForecast, ExchangeRate, ExchangeRateProvider, Holiday, HolidayProvider, LiveDataProvider,
    WeatherProvider,
};
