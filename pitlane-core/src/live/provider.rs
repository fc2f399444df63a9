//! Provider traits for the three external services and their payloads.

use chrono::{Datelike, NaiveDate, Weekday};
use geo::Coord;
use serde_json::Value;

use super::error::LookupError;

/// A public holiday reported by a holiday service.
#[derive(Debug, Clone, PartialEq)]
pub struct Holiday {
    /// Day the holiday falls on.
    pub date: NaiveDate,
    /// English name of the holiday.
    pub name: String,
    /// Raw service payload kept for provenance.
    pub raw: Value,
}

impl Holiday {
    /// Whether the holiday falls on a Monday or Friday and so stretches a
    /// weekend into a long weekend.
    #[must_use]
    pub fn extends_weekend(&self) -> bool {
        matches!(self.date.weekday(), Weekday::Mon | Weekday::Fri)
    }
}

/// A one-day forecast.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyForecast {
    /// Forecast day, when the service reports one.
    pub date: Option<NaiveDate>,
    /// Maximum temperature in °C.
    pub max_temp_c: f64,
    /// Mean precipitation probability as a percentage, `0..=100`.
    pub precipitation_probability_pct: f64,
    /// Raw service payload kept for provenance.
    pub raw: Value,
}

/// A spot exchange rate.
#[derive(Debug, Clone, PartialEq)]
pub struct ExchangeRate {
    /// Currency converted from.
    pub from: String,
    /// Currency converted into.
    pub to: String,
    /// Units of `to` bought by one unit of `from`.
    pub rate: f64,
    /// Publication date of the rate, when known.
    pub date: Option<NaiveDate>,
    /// Raw service payload kept for provenance.
    pub raw: Value,
}

/// Look up the next public holiday in a country.
///
/// Implementations must be thread-safe so enrichment can fan out across
/// candidates.
///
/// # Examples
///
/// ```rust
/// use chrono::NaiveDate;
/// use pitlane_core::{Holiday, HolidayProvider, LookupError};
///
/// struct Christmas;
///
/// impl HolidayProvider for Christmas {
///     fn next_public_holiday(&self, _country_code: &str) -> Result<Holiday, LookupError> {
///         Ok(Holiday {
///             date: NaiveDate::from_ymd_opt(2026, 12, 25).ok_or(LookupError::ParseError {
///                 message: "bad date".into(),
///             })?,
///             name: "Christmas Day".into(),
///             raw: serde_json::Value::Null,
///         })
///     }
/// }
///
/// let holiday = Christmas.next_public_holiday("GB")?;
/// assert!(holiday.extends_weekend());
/// # Ok::<(), LookupError>(())
/// ```
pub trait HolidayProvider: Send + Sync {
    /// Next public holiday for an ISO 3166-1 alpha-2 `country_code`.
    ///
    /// Implementations return [`LookupError::NoData`] when the service has no
    /// upcoming holiday for the country.
    fn next_public_holiday(&self, country_code: &str) -> Result<Holiday, LookupError>;
}

/// Fetch a one-day forecast for a location.
pub trait WeatherProvider: Send + Sync {
    /// Forecast for `location`, where `x` is longitude and `y` latitude.
    fn daily_forecast(&self, location: Coord) -> Result<DailyForecast, LookupError>;
}

/// Fetch a spot exchange rate between two currencies.
pub trait ExchangeRateProvider: Send + Sync {
    /// Rate converting one unit of `from` into `to`.
    fn exchange_rate(&self, from: &str, to: &str) -> Result<ExchangeRate, LookupError>;
}

/// Convenience bound for a single value serving all three lookups.
pub trait LiveDataProvider: HolidayProvider + WeatherProvider + ExchangeRateProvider {}

impl<T> LiveDataProvider for T where T: HolidayProvider + WeatherProvider + ExchangeRateProvider {}

macro_rules! forward_through_pointer {
    ($($pointer:ident)::+) => {
        impl<T: HolidayProvider + ?Sized> HolidayProvider for $($pointer)::+<T> {
            fn next_public_holiday(&self, country_code: &str) -> Result<Holiday, LookupError> {
                (**self).next_public_holiday(country_code)
            }
        }

        impl<T: WeatherProvider + ?Sized> WeatherProvider for $($pointer)::+<T> {
            fn daily_forecast(&self, location: Coord) -> Result<DailyForecast, LookupError> {
                (**self).daily_forecast(location)
            }
        }

        impl<T: ExchangeRateProvider + ?Sized> ExchangeRateProvider for $($pointer)::+<T> {
            fn exchange_rate(&self, from: &str, to: &str) -> Result<ExchangeRate, LookupError> {
                (**self).exchange_rate(from, to)
            }
        }
    };
}

forward_through_pointer!(Box);
forward_through_pointer!(std::sync::Arc);
