//! HTTP implementation of the holiday, weather and exchange-rate traits.
//!
//! The lookup traits are synchronous so the scoring pipeline can fan out on
//! plain threads. This provider bridges each lookup to an async `reqwest`
//! call by blocking on a Tokio runtime it owns and reuses across calls.

use std::future::Future;
use std::time::Duration;

use geo::Coord;
use pitlane_core::{
    DailyForecast, ExchangeRate, ExchangeRateProvider, Holiday, HolidayProvider, LookupError,
    WeatherProvider,
};
use reqwest::{Client, StatusCode};
use serde_json::Value;
use thiserror::Error;
use tokio::runtime::{Handle, Runtime, RuntimeFlavor};
use url::Url;

use super::{frankfurter, nager, open_meteo};

/// Default user agent for outbound requests.
pub const DEFAULT_USER_AGENT: &str = "pitlane-live/0.1";

/// Default per-request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 8;

const DEFAULT_HOLIDAY_BASE_URL: &str = "https://date.nager.at";
const DEFAULT_WEATHER_BASE_URL: &str = "https://api.open-meteo.com";
const DEFAULT_RATE_BASE_URL: &str = "https://api.frankfurter.app";

/// Worker threads for the internal runtime; lookups are I/O bound.
const RUNTIME_WORKERS: usize = 2;

/// Errors raised while constructing an [`HttpLiveDataProvider`].
#[derive(Debug, Error)]
pub enum ProviderBuildError {
    /// Failed to build the HTTP client.
    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),
    /// Failed to build the Tokio runtime.
    #[error("failed to build Tokio runtime: {0}")]
    Runtime(#[source] std::io::Error),
    /// A base URL did not parse.
    #[error("invalid {service} base URL '{url}': {source}")]
    InvalidBaseUrl {
        /// Service the URL was configured for.
        service: &'static str,
        /// Offending URL.
        url: String,
        /// Parser error.
        #[source]
        source: url::ParseError,
    },
    /// A base URL cannot have path segments appended, such as `mailto:`.
    #[error("{service} base URL '{url}' cannot carry a request path")]
    OpaqueBaseUrl {
        /// Service the URL was configured for.
        service: &'static str,
        /// Offending URL.
        url: String,
    },
}

/// Configuration for [`HttpLiveDataProvider`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpLiveDataConfig {
    /// Nager.Date base URL.
    pub holiday_base_url: String,
    /// Open-Meteo base URL.
    pub weather_base_url: String,
    /// Frankfurter base URL.
    pub rate_base_url: String,
    /// Connect and request timeout applied to every call.
    pub timeout: Duration,
    /// User agent string for requests.
    pub user_agent: String,
}

impl Default for HttpLiveDataConfig {
    fn default() -> Self {
        Self {
            holiday_base_url: DEFAULT_HOLIDAY_BASE_URL.to_owned(),
            weather_base_url: DEFAULT_WEATHER_BASE_URL.to_owned(),
            rate_base_url: DEFAULT_RATE_BASE_URL.to_owned(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_owned(),
        }
    }
}

impl HttpLiveDataConfig {
    /// Point all three services at one host, such as a caching proxy.
    #[must_use]
    pub fn with_base_url(self, base_url: &str) -> Self {
        self.with_holiday_base_url(base_url)
            .with_weather_base_url(base_url)
            .with_rate_base_url(base_url)
    }

    /// Set the holiday service base URL.
    #[must_use]
    pub fn with_holiday_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.holiday_base_url = base_url.into();
        self
    }

    /// Set the weather service base URL.
    #[must_use]
    pub fn with_weather_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.weather_base_url = base_url.into();
        self
    }

    /// Set the exchange-rate service base URL.
    #[must_use]
    pub fn with_rate_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.rate_base_url = base_url.into();
        self
    }

    /// Set the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the user agent string.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

/// Live data provider backed by Nager.Date, Open-Meteo and Frankfurter.
///
/// # Runtime behaviour
///
/// Called from outside any Tokio runtime, including from rayon workers, the
/// provider blocks on its own multi-threaded runtime, which accepts
/// concurrent callers. Called from inside a multi-threaded runtime it uses
/// that runtime's handle with [`tokio::task::block_in_place`]. Inside a
/// `current_thread` runtime it falls back to its own runtime, which may
/// stall the caller's runtime for the duration of the request.
///
/// Dropping the provider shuts its runtime down in the background, so the
/// provider may be dropped from async code.
pub struct HttpLiveDataProvider {
    client: Client,
    config: HttpLiveDataConfig,
    holidays: Url,
    weather: Url,
    rates: Url,
    runtime: Option<Runtime>,
}

impl Drop for HttpLiveDataProvider {
    fn drop(&mut self) {
        if let Some(runtime) = self.runtime.take() {
            runtime.shutdown_background();
        }
    }
}

impl std::fmt::Debug for HttpLiveDataProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpLiveDataProvider")
            .field("client", &self.client)
            .field("config", &self.config)
            .field("runtime", &"<tokio::runtime::Runtime>")
            .finish_non_exhaustive()
    }
}

impl HttpLiveDataProvider {
    /// Create a provider talking to the public services.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client or Tokio runtime fails to build.
    pub fn new() -> Result<Self, ProviderBuildError> {
        Self::with_config(HttpLiveDataConfig::default())
    }

    /// Create a provider with explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if a base URL is unusable, or if the HTTP client or
    /// Tokio runtime fails to build.
    pub fn with_config(config: HttpLiveDataConfig) -> Result<Self, ProviderBuildError> {
        let holidays = parse_base_url("holiday", &config.holiday_base_url)?;
        let weather = parse_base_url("weather", &config.weather_base_url)?;
        let rates = parse_base_url("exchange-rate", &config.rate_base_url)?;
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .connect_timeout(config.timeout)
            .timeout(config.timeout)
            .build()
            .map_err(ProviderBuildError::HttpClient)?;
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(RUNTIME_WORKERS)
            .thread_name("pitlane-live")
            .enable_all()
            .build()
            .map_err(ProviderBuildError::Runtime)?;
        Ok(Self {
            client,
            config,
            holidays,
            weather,
            rates,
            runtime: Some(runtime),
        })
    }

    /// Configuration the provider was built with.
    #[must_use]
    pub const fn config(&self) -> &HttpLiveDataConfig {
        &self.config
    }

    fn holidays_url(&self, country_code: &str) -> Url {
        endpoint(&self.holidays, &nager::path(country_code), &[])
    }

    fn forecast_url(&self, location: Coord) -> Url {
        endpoint(
            &self.weather,
            &open_meteo::PATH,
            &open_meteo::query(location),
        )
    }

    fn rates_url(&self, from: &str, to: &str) -> Url {
        endpoint(
            &self.rates,
            &frankfurter::PATH,
            &frankfurter::query(from, to),
        )
    }

    /// GET `url` and decode the body as JSON. `204 No Content` yields
    /// [`Value::Null`].
    async fn fetch_json(&self, url: Url) -> Result<Value, LookupError> {
        log::debug!("GET {url}");
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|err| self.convert_reqwest_error(&err, &url))?
            .error_for_status()
            .map_err(|err| self.convert_reqwest_error(&err, &url))?;
        if response.status() == StatusCode::NO_CONTENT {
            return Ok(Value::Null);
        }
        response.json::<Value>().await.map_err(|err| {
            if err.is_timeout() {
                self.convert_reqwest_error(&err, &url)
            } else {
                LookupError::ParseError {
                    message: format!("{url}: {err}"),
                }
            }
        })
    }

    fn convert_reqwest_error(&self, error: &reqwest::Error, url: &Url) -> LookupError {
        if error.is_timeout() {
            return LookupError::Timeout {
                url: url.to_string(),
                timeout_secs: self.config.timeout.as_secs(),
            };
        }

        if let Some(status) = error.status() {
            return LookupError::HttpError {
                url: url.to_string(),
                status: status.as_u16(),
                message: error.to_string(),
            };
        }

        LookupError::NetworkError {
            url: url.to_string(),
            message: error.to_string(),
        }
    }

    fn block_on<F: Future<Output = Result<Value, LookupError>>>(
        &self,
        future: F,
    ) -> Result<Value, LookupError> {
        match Handle::try_current() {
            Ok(handle) if handle.runtime_flavor() == RuntimeFlavor::MultiThread => {
                tokio::task::block_in_place(|| handle.block_on(future))
            }
            _ => match &self.runtime {
                Some(runtime) => runtime.block_on(future),
                None => Err(LookupError::Disabled),
            },
        }
    }
}

impl HolidayProvider for HttpLiveDataProvider {
    fn next_public_holiday(&self, country_code: &str) -> Result<Holiday, LookupError> {
        let payload = self.block_on(self.fetch_json(self.holidays_url(country_code)))?;
        nager::next_holiday(country_code, &payload)
    }
}

impl WeatherProvider for HttpLiveDataProvider {
    fn daily_forecast(&self, location: Coord) -> Result<DailyForecast, LookupError> {
        let payload = self.block_on(self.fetch_json(self.forecast_url(location)))?;
        open_meteo::first_day(&payload)
    }
}

impl ExchangeRateProvider for HttpLiveDataProvider {
    fn exchange_rate(&self, from: &str, to: &str) -> Result<ExchangeRate, LookupError> {
        let payload = self.block_on(self.fetch_json(self.rates_url(from, to)))?;
        frankfurter::quoted_rate(from, to, &payload)
    }
}

fn parse_base_url(service: &'static str, raw: &str) -> Result<Url, ProviderBuildError> {
    let url = Url::parse(raw.trim()).map_err(|source| ProviderBuildError::InvalidBaseUrl {
        service,
        url: raw.to_owned(),
        source,
    })?;
    if url.cannot_be_a_base() {
        return Err(ProviderBuildError::OpaqueBaseUrl {
            service,
            url: raw.to_owned(),
        });
    }
    Ok(url)
}

fn endpoint<S: AsRef<str>>(base: &Url, segments: &[S], query: &[(&str, String)]) -> Url {
    let mut url = base.clone();
    if let Ok(mut path) = url.path_segments_mut() {
        path.pop_if_empty().extend(segments);
    }
    if !query.is_empty() {
        url.query_pairs_mut().extend_pairs(query);
    }
    url
}
