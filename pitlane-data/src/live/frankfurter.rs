//! Frankfurter exchange-rate responses.
//!
//! See: <https://frankfurter.dev>

use std::collections::HashMap;

use chrono::NaiveDate;
use pitlane_core::{ExchangeRate, LookupError};
use serde::Deserialize;
use serde_json::Value;

/// `latest` endpoint response.
#[derive(Debug, Deserialize)]
pub struct LatestRates {
    /// Currency the rates are quoted against.
    pub base: String,
    /// Publication date of the rates.
    pub date: Option<NaiveDate>,
    /// Units of each keyed currency per unit of `base`.
    #[serde(default)]
    pub rates: HashMap<String, f64>,
}

/// Path segments of the latest-rates endpoint.
pub const PATH: [&str; 1] = ["latest"];

/// Query parameters converting `from` into `to`.
pub fn query(from: &str, to: &str) -> [(&'static str, String); 2] {
    [
        ("from", from.trim().to_uppercase()),
        ("to", to.trim().to_uppercase()),
    ]
}

/// Extract the `from → to` rate from a response payload.
pub fn quoted_rate(from: &str, to: &str, payload: &Value) -> Result<ExchangeRate, LookupError> {
    let latest = LatestRates::deserialize(payload).map_err(|err| LookupError::ParseError {
        message: err.to_string(),
    })?;
    let target = to.trim().to_uppercase();
    let rate = latest
        .rates
        .get(&target)
        .copied()
        .ok_or_else(|| LookupError::NoData {
            service: "exchange rates",
            subject: format!("{}->{target}", latest.base),
        })?;
    if !rate.is_finite() || rate <= 0.0 {
        return Err(LookupError::ParseError {
            message: format!("unusable rate {rate} for {}->{target}", latest.base),
        });
    }
    Ok(ExchangeRate {
        from: from.trim().to_uppercase(),
        to: target,
        rate,
        date: latest.date,
        raw: payload.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    fn reads_the_requested_rate() {
        let payload = json!({
            "amount": 1.0,
            "base": "GBP",
            "date": "2026-10-16",
            "rates": { "EUR": 1.1532 }
        });

        let rate = quoted_rate("gbp", "eur", &payload).expect("rate parsed");

        assert_eq!(rate.rate, 1.1532);
        assert_eq!((rate.from.as_str(), rate.to.as_str()), ("GBP", "EUR"));
        assert_eq!(rate.date, NaiveDate::from_ymd_opt(2026, 10, 16));
    }

    #[rstest]
    fn missing_target_is_no_data() {
        let payload = json!({ "base": "GBP", "rates": { "USD": 1.3 } });

        let err = quoted_rate("GBP", "EUR", &payload).expect_err("no EUR rate");

        assert!(matches!(err, LookupError::NoData { service: "exchange rates", .. }));
    }

    #[rstest]
    #[case(json!({ "base": "GBP", "rates": { "EUR": 0.0 } }))]
    #[case(json!({ "message": "not found" }))]
    fn bad_payloads_are_parse_errors(#[case] payload: Value) {
        let err = quoted_rate("GBP", "EUR", &payload).expect_err("bad payload");
        assert!(matches!(err, LookupError::ParseError { .. }));
    }
}
