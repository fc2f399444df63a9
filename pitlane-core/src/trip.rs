//! Travel packages scored by the engine.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// A named race-weekend travel package.
///
/// Candidates are treated as values: enrichment and cost adjustment produce
/// modified copies and never touch the catalog they came from.
///
/// # Examples
///
/// ```
/// use pitlane_core::sample_catalog;
///
/// let monza = &sample_catalog()[0];
/// assert_eq!(monza.total_cost(), 260 + 420 + 230);
/// assert_eq!(monza.race_month(), 9);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripCandidate {
    /// Display name of the package.
    pub name: String,
    /// Host country.
    pub country: String,
    /// Host city, used to look up coordinates and country code.
    pub city: String,
    /// Race day.
    pub race_date: NaiveDate,
    /// Days of leave the trip spans.
    pub holiday_days: u32,
    /// Average race-weekend temperature in °C.
    pub avg_temp_c: i32,
    /// Chance of rain as a fraction in `0.0..=1.0`.
    pub rain_probability: f64,
    /// Return flight cost.
    pub flight_cost: u32,
    /// Hotel cost for the stay.
    pub hotel_cost: u32,
    /// Local transport, food and tickets.
    pub local_cost: u32,
    /// Hotel rating out of five.
    pub hotel_rating: f64,
    /// One-way flight duration in hours.
    pub flight_hours: f64,
    /// Airport-to-hotel transfer in minutes.
    pub transfer_minutes: u32,
    /// Nominally `0..=100`; scorers clamp anything outside that range.
    pub f1_experience_points: i32,
}

impl TripCandidate {
    /// Sum of flight, hotel and local costs.
    #[must_use]
    pub fn total_cost(&self) -> u64 {
        u64::from(self.flight_cost) + u64::from(self.hotel_cost) + u64::from(self.local_cost)
    }

    /// Calendar month of the race, `1..=12`.
    #[must_use]
    pub fn race_month(&self) -> u32 {
        self.race_date.month()
    }
}
