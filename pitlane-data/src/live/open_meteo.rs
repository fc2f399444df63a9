//! Open-Meteo daily forecast responses.
//!
//! See: <https://open-meteo.com/en/docs>

use chrono::NaiveDate;
use geo::Coord;
use pitlane_core::{DailyForecast, LookupError};
use serde::Deserialize;
use serde_json::Value;

/// Daily variables requested from the forecast endpoint.
pub const DAILY_VARIABLES: &str = "temperature_2m_max,precipitation_probability_mean";

/// Forecast endpoint response, reduced to the daily block.
#[derive(Debug, Deserialize)]
pub struct ForecastResponse {
    /// Daily series; absent when no daily variables were returned.
    pub daily: Option<DailySeries>,
}

/// Parallel arrays of daily values.
#[derive(Debug, Deserialize)]
pub struct DailySeries {
    /// ISO dates of each entry.
    #[serde(default)]
    pub time: Vec<NaiveDate>,
    /// Maximum temperature at two metres, °C.
    #[serde(default)]
    pub temperature_2m_max: Vec<Option<f64>>,
    /// Mean precipitation probability, percent.
    #[serde(default)]
    pub precipitation_probability_mean: Vec<Option<f64>>,
}

/// Path segments of the forecast endpoint.
pub const PATH: [&str; 2] = ["v1", "forecast"];

/// Query parameters for a one-day forecast at `location`.
pub fn query(location: Coord) -> [(&'static str, String); 5] {
    [
        ("latitude", location.y.to_string()),
        ("longitude", location.x.to_string()),
        ("daily", DAILY_VARIABLES.to_owned()),
        ("forecast_days", "1".to_owned()),
        ("timezone", "auto".to_owned()),
    ]
}

/// Extract the first day of a forecast payload.
pub fn first_day(payload: &Value) -> Result<DailyForecast, LookupError> {
    let response = ForecastResponse::deserialize(payload).map_err(|err| LookupError::ParseError {
        message: err.to_string(),
    })?;
    let daily = response.daily.ok_or_else(|| no_forecast("daily block"))?;
    let max_temp_c = daily
        .temperature_2m_max
        .first()
        .copied()
        .flatten()
        .ok_or_else(|| no_forecast("temperature_2m_max"))?;
    let precipitation_probability_pct = daily
        .precipitation_probability_mean
        .first()
        .copied()
        .flatten()
        .ok_or_else(|| no_forecast("precipitation_probability_mean"))?;
    Ok(DailyForecast {
        date: daily.time.first().copied(),
        max_temp_c,
        precipitation_probability_pct,
        raw: payload.clone(),
    })
}

fn no_forecast(field: &str) -> LookupError {
    LookupError::NoData {
        service: "forecast",
        subject: field.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    fn reads_the_first_day() {
        let payload = json!({
            "latitude": 45.46,
            "longitude": 9.19,
            "daily": {
                "time": ["2026-10-17"],
                "temperature_2m_max": [21.4],
                "precipitation_probability_mean": [35]
            }
        });

        let forecast = first_day(&payload).expect("forecast parsed");

        assert_eq!(forecast.max_temp_c, 21.4);
        assert_eq!(forecast.precipitation_probability_pct, 35.0);
        assert_eq!(forecast.date, NaiveDate::from_ymd_opt(2026, 10, 17));
        assert_eq!(forecast.raw, payload);
    }

    #[rstest]
    #[case(json!({ "latitude": 45.46 }))]
    #[case(json!({ "daily": { "time": [], "temperature_2m_max": [], "precipitation_probability_mean": [] } }))]
    #[case(json!({ "daily": { "temperature_2m_max": [null], "precipitation_probability_mean": [10] } }))]
    fn missing_values_are_no_data(#[case] payload: Value) {
        let err = first_day(&payload).expect_err("incomplete forecast");
        assert!(matches!(err, LookupError::NoData { service: "forecast", .. }));
    }

    #[rstest]
    fn query_puts_latitude_first() {
        let [latitude, longitude, ..] = query(Coord { x: 9.19, y: 45.4642 });
        assert_eq!(latitude, ("latitude", "45.4642".to_owned()));
        assert_eq!(longitude, ("longitude", "9.19".to_owned()));
    }
}
