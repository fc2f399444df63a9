//! Provider used when live lookups are switched off.

use geo::Coord;

use super::error::LookupError;
use super::provider::{
    DailyForecast, ExchangeRate, ExchangeRateProvider, Holiday, HolidayProvider, WeatherProvider,
};

/// Answers every lookup with [`LookupError::Disabled`].
///
/// Scoring with this provider exercises the fallback path end to end and is
/// fully deterministic.
#[derive(Debug, Default, Clone, Copy)]
pub struct OfflineLiveData;

impl HolidayProvider for OfflineLiveData {
    fn next_public_holiday(&self, _country_code: &str) -> Result<Holiday, LookupError> {
        Err(LookupError::Disabled)
    }
}

impl WeatherProvider for OfflineLiveData {
    fn daily_forecast(&self, _location: Coord) -> Result<DailyForecast, LookupError> {
        Err(LookupError::Disabled)
    }
}

impl ExchangeRateProvider for OfflineLiveData {
    fn exchange_rate(&self, _from: &str, _to: &str) -> Result<ExchangeRate, LookupError> {
        Err(LookupError::Disabled)
    }
}
