//! HTTP-backed holiday, forecast and exchange-rate lookups.
//!
//! [`HttpLiveDataProvider`] implements every lookup trait from
//! `pitlane-core` by issuing one GET request per lookup. The traits are
//! synchronous; the provider blocks on an internally owned Tokio runtime.
//!
//! # Example
//!
//! ```no_run
//! use std::time::Duration;
//! use pitlane_core::HolidayProvider;
//! use pitlane_data::live::{HttpLiveDataConfig, HttpLiveDataProvider};
//!
//! let config = HttpLiveDataConfig::default()
//!     .with_timeout(Duration::from_secs(4))
//!     .with_user_agent("my-app/1.0");
//! let provider = HttpLiveDataProvider::with_config(config)?;
//!
//! let holiday = provider.next_public_holiday("IT")?;
//! println!("{} on {}", holiday.name, holiday.date);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod frankfurter;
mod nager;
mod open_meteo;
mod provider;

pub use provider::{
    DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT, HttpLiveDataConfig, HttpLiveDataProvider,
    ProviderBuildError,
};
