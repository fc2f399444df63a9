//! Nager.Date public holiday responses.
//!
//! See: <https://date.nager.at/Api>

use chrono::NaiveDate;
use pitlane_core::{Holiday, LookupError};
use serde::Deserialize;
use serde_json::Value;

/// One entry of the `NextPublicHolidays` array.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicHoliday {
    /// Holiday date.
    pub date: NaiveDate,
    /// Name in the local language.
    pub local_name: Option<String>,
    /// English name.
    pub name: String,
}

/// Path segments of the next-holidays endpoint for `country_code`.
pub fn path(country_code: &str) -> [String; 4] {
    [
        "api".to_owned(),
        "v3".to_owned(),
        "NextPublicHolidays".to_owned(),
        country_code.trim().to_uppercase(),
    ]
}

/// Pick the earliest upcoming holiday from a response payload.
///
/// A `null` payload stands for an empty `204 No Content` response.
pub fn next_holiday(country_code: &str, payload: &Value) -> Result<Holiday, LookupError> {
    if payload.is_null() {
        return Err(no_holidays(country_code));
    }
    let entries = payload.as_array().ok_or_else(|| LookupError::ParseError {
        message: "holiday response is not an array".to_owned(),
    })?;
    let (raw, holiday) = entries
        .iter()
        .map(|entry| {
            PublicHoliday::deserialize(entry)
                .map(|parsed| (entry, parsed))
                .map_err(|err| LookupError::ParseError {
                    message: err.to_string(),
                })
        })
        .collect::<Result<Vec<_>, _>>()?
        .into_iter()
        .min_by_key(|(_, parsed)| parsed.date)
        .ok_or_else(|| no_holidays(country_code))?;
    let name = if holiday.name.is_empty() {
        holiday.local_name.unwrap_or_default()
    } else {
        holiday.name
    };
    Ok(Holiday {
        date: holiday.date,
        name,
        raw: raw.clone(),
    })
}

fn no_holidays(country_code: &str) -> LookupError {
    LookupError::NoData {
        service: "holidays",
        subject: country_code.to_owned(),
    }
}
