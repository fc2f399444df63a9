//! Deterministic live-data doubles for unit and behaviour tests.
//!
//! [`StubLiveData`] answers every lookup from pre-configured values without
//! touching the network and counts how often each service was asked.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use chrono::NaiveDate;
use geo::Coord;
use serde_json::json;

use crate::{
    DailyForecast, ExchangeRate, ExchangeRateProvider, Holiday, HolidayProvider, LookupError,
    WeatherProvider,
};

#[derive(Debug, Clone)]
enum StubResponse<T> {
    Value(T),
    Error(LookupError),
}

impl<T: Clone> StubResponse<T> {
    fn answer(&self) -> Result<T, LookupError> {
        match self {
            Self::Value(value) => Ok(value.clone()),
            Self::Error(err) => Err(err.clone()),
        }
    }
}

/// Stub provider for all three lookups.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use pitlane_core::test_support::StubLiveData;
/// use pitlane_core::{HolidayProvider, LookupError, WeatherProvider};
/// use geo::Coord;
///
/// let friday = NaiveDate::from_ymd_opt(2026, 12, 25).expect("valid date");
/// let stub = StubLiveData::failing(LookupError::Disabled).with_holiday(friday, "Christmas Day");
///
/// assert!(stub.next_public_holiday("IT").is_ok());
/// assert!(stub.daily_forecast(Coord { x: 9.19, y: 45.46 }).is_err());
/// assert_eq!(stub.holiday_lookups(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct StubLiveData {
    holiday: StubResponse<Holiday>,
    forecast: StubResponse<DailyForecast>,
    rate: StubResponse<f64>,
    holiday_calls: Arc<AtomicUsize>,
    forecast_calls: Arc<AtomicUsize>,
    rate_calls: Arc<AtomicUsize>,
}

impl StubLiveData {
    /// Create a provider whose every lookup fails with `error`.
    #[must_use]
    pub fn failing(error: LookupError) -> Self {
        Self {
            holiday: StubResponse::Error(error.clone()),
            forecast: StubResponse::Error(error.clone()),
            rate: StubResponse::Error(error),
            holiday_calls: Arc::default(),
            forecast_calls: Arc::default(),
            rate_calls: Arc::default(),
        }
    }

    /// Answer holiday lookups with a holiday on `date`.
    #[must_use]
    pub fn with_holiday(mut self, date: NaiveDate, name: &str) -> Self {
        let raw = json!([{ "date": date.to_string(), "name": name }]);
        self.holiday = StubResponse::Value(Holiday {
            date,
            name: name.to_owned(),
            raw,
        });
        self
    }

    /// Fail holiday lookups with `error`.
    #[must_use]
    pub fn with_holiday_error(mut self, error: LookupError) -> Self {
        self.holiday = StubResponse::Error(error);
        self
    }

    /// Answer weather lookups with the given maximum temperature and
    /// precipitation percentage.
    #[must_use]
    pub fn with_forecast(mut self, max_temp_c: f64, precipitation_pct: f64) -> Self {
        let raw = json!({
            "daily": {
                "temperature_2m_max": [max_temp_c],
                "precipitation_probability_mean": [precipitation_pct],
            }
        });
        self.forecast = StubResponse::Value(DailyForecast {
            date: None,
            max_temp_c,
            precipitation_probability_pct: precipitation_pct,
            raw,
        });
        self
    }

    /// Fail weather lookups with `error`.
    #[must_use]
    pub fn with_forecast_error(mut self, error: LookupError) -> Self {
        self.forecast = StubResponse::Error(error);
        self
    }

    /// Answer exchange-rate lookups with `rate`.
    #[must_use]
    pub fn with_rate(mut self, rate: f64) -> Self {
        self.rate = StubResponse::Value(rate);
        self
    }

    /// Number of holiday lookups served.
    #[must_use]
    pub fn holiday_lookups(&self) -> usize {
        self.holiday_calls.load(Ordering::SeqCst)
    }

    /// Number of weather lookups served.
    #[must_use]
    pub fn forecast_lookups(&self) -> usize {
        self.forecast_calls.load(Ordering::SeqCst)
    }

    /// Number of exchange-rate lookups served.
    #[must_use]
    pub fn rate_lookups(&self) -> usize {
        self.rate_calls.load(Ordering::SeqCst)
    }
}

impl HolidayProvider for StubLiveData {
    fn next_public_holiday(&self, _country_code: &str) -> Result<Holiday, LookupError> {
        self.holiday_calls.fetch_add(1, Ordering::SeqCst);
        self.holiday.answer()
    }
}

impl WeatherProvider for StubLiveData {
    fn daily_forecast(&self, _location: Coord) -> Result<DailyForecast, LookupError> {
        self.forecast_calls.fetch_add(1, Ordering::SeqCst);
        self.forecast.answer()
    }
}

impl ExchangeRateProvider for StubLiveData {
    fn exchange_rate(&self, from: &str, to: &str) -> Result<ExchangeRate, LookupError> {
        self.rate_calls.fetch_add(1, Ordering::SeqCst);
        self.rate.answer().map(|rate| {
            let mut rates = serde_json::Map::new();
            rates.insert(to.to_owned(), json!(rate));
            ExchangeRate {
                from: from.to_owned(),
                to: to.to_owned(),
                rate,
                date: None,
                raw: json!({ "base": from, "rates": rates }),
            }
        })
    }
}
