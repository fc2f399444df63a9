//! Traveller preferences supplied with every recommendation request.
//!
//! Parsing is lenient: unknown style or weather tags resolve to the balanced
//! and mixed defaults, and non-positive budgets are coerced to
//! [`MIN_BUDGET`]. Callers never see a rejected preference.
//!
//! # Examples
//! ```
//! use pitlane_core::{Budget, TravelStyle, UserPreferences, WeatherPreference};
//!
//! let prefs = UserPreferences::new(
//!     "lhr",
//!     Budget::new(-20.0, "gbp"),
//!     TravelStyle::from_tag("luxury"),
//!     WeatherPreference::from_tag("WARM"),
//! );
//! assert_eq!(prefs.home_airport(), "LHR");
//! assert_eq!(prefs.budget().amount(), 1.0);
//! assert_eq!(prefs.budget().currency(), "GBP");
//! assert_eq!(prefs.style(), TravelStyle::Balanced);
//! assert_eq!(prefs.weather(), WeatherPreference::Warm);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::reference::BASE_CURRENCY;

/// Smallest budget amount the engine will score against.
pub const MIN_BUDGET: f64 = 1.0;

/// Home airport assumed when none is supplied.
pub const DEFAULT_HOME_AIRPORT: &str = "LHR";

/// Budget amount assumed when none is supplied.
pub const DEFAULT_BUDGET: f64 = 1200.0;

/// Error returned by the strict [`FromStr`] implementations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} '{value}'")]
pub struct ParsePreferenceError {
    /// Which preference failed to parse.
    pub kind: &'static str,
    /// The rejected input.
    pub value: String,
}

/// Coarse budget/premium dial affecting weights and cost multipliers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TravelStyle {
    /// Prioritise value for money.
    Budget,
    /// Even-handed default.
    #[default]
    Balanced,
    /// Prioritise the race-weekend experience.
    Premium,
}

impl TravelStyle {
    /// All styles in declaration order.
    pub const ALL: [Self; 3] = [Self::Budget, Self::Balanced, Self::Premium];

    /// Return the style as a lowercase `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Budget => "budget",
            Self::Balanced => "balanced",
            Self::Premium => "premium",
        }
    }

    /// Parse a style tag, falling back to [`TravelStyle::Balanced`].
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        tag.parse::<Self>().unwrap_or_else(|err| {
            log::debug!("{err}; using {}", Self::default());
            Self::default()
        })
    }
}

impl fmt::Display for TravelStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TravelStyle {
    type Err = ParsePreferenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "budget" => Ok(Self::Budget),
            "balanced" => Ok(Self::Balanced),
            "premium" => Ok(Self::Premium),
            _ => Err(ParsePreferenceError {
                kind: "travel style",
                value: s.to_owned(),
            }),
        }
    }
}

/// Preferred race-weekend climate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeatherPreference {
    /// Around 18 °C.
    Cool,
    /// Around 27 °C.
    Warm,
    /// Around 22 °C, with a gentler penalty slope.
    #[default]
    Mixed,
}

impl WeatherPreference {
    /// All preferences in declaration order.
    pub const ALL: [Self; 3] = [Self::Cool, Self::Warm, Self::Mixed];

    /// Return the preference as a lowercase `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cool => "cool",
            Self::Warm => "warm",
            Self::Mixed => "mixed",
        }
    }

    /// Parse a weather tag, falling back to [`WeatherPreference::Mixed`].
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        tag.parse::<Self>().unwrap_or_else(|err| {
            log::debug!("{err}; using {}", Self::default());
            Self::default()
        })
    }
}

impl fmt::Display for WeatherPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WeatherPreference {
    type Err = ParsePreferenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "cool" => Ok(Self::Cool),
            "warm" => Ok(Self::Warm),
            "mixed" => Ok(Self::Mixed),
            _ => Err(ParsePreferenceError {
                kind: "weather preference",
                value: s.to_owned(),
            }),
        }
    }
}

/// A stated budget: a strictly positive amount in a three-letter currency.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Budget {
    amount: f64,
    currency: String,
}

impl Budget {
    /// Build a budget, coercing unusable amounts to [`MIN_BUDGET`].
    ///
    /// Non-finite amounts and anything below the minimum are coerced. The
    /// currency is upper-cased; a blank currency becomes [`BASE_CURRENCY`].
    #[must_use]
    pub fn new(amount: f64, currency: impl Into<String>) -> Self {
        let raw_currency = currency.into();
        let trimmed = raw_currency.trim();
        let currency = if trimmed.is_empty() {
            BASE_CURRENCY.to_owned()
        } else {
            trimmed.to_uppercase()
        };
        Self {
            amount: coerce_amount(amount),
            currency,
        }
    }

    /// Budget amount in [`Budget::currency`] units.
    #[must_use]
    pub const fn amount(&self) -> f64 {
        self.amount
    }

    /// ISO 4217 currency code.
    #[must_use]
    pub fn currency(&self) -> &str {
        &self.currency
    }
}

/// Clamp a budget amount into the usable range.
#[must_use]
pub fn coerce_amount(amount: f64) -> f64 {
    if amount.is_finite() {
        amount.max(MIN_BUDGET)
    } else {
        MIN_BUDGET
    }
}

/// One traveller's preferences for a single scoring request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserPreferences {
    home_airport: String,
    budget: Budget,
    style: TravelStyle,
    weather: WeatherPreference,
}

impl UserPreferences {
    /// Build preferences, normalising the airport code.
    #[must_use]
    pub fn new(
        home_airport: impl Into<String>,
        budget: Budget,
        style: TravelStyle,
        weather: WeatherPreference,
    ) -> Self {
        let raw_airport = home_airport.into();
        let trimmed = raw_airport.trim();
        let home_airport = if trimmed.is_empty() {
            DEFAULT_HOME_AIRPORT.to_owned()
        } else {
            trimmed.to_uppercase()
        };
        Self {
            home_airport,
            budget,
            style,
            weather,
        }
    }

    /// IATA code of the departure airport.
    #[must_use]
    pub fn home_airport(&self) -> &str {
        &self.home_airport
    }

    /// Stated budget.
    #[must_use]
    pub const fn budget(&self) -> &Budget {
        &self.budget
    }

    /// Travel style.
    #[must_use]
    pub const fn style(&self) -> TravelStyle {
        self.style
    }

    /// Weather preference.
    #[must_use]
    pub const fn weather(&self) -> WeatherPreference {
        self.weather
    }
}

impl Default for UserPreferences {
    fn default() -> Self {
        Self::new(
            DEFAULT_HOME_AIRPORT,
            Budget::new(DEFAULT_BUDGET, BASE_CURRENCY),
            TravelStyle::default(),
            WeatherPreference::default(),
        )
    }
}
