//! Deterministic market cost adjustment.
//!
//! Flight and hotel costs scale with the travel style and a seasonal factor
//! derived from the race month; local costs are left alone.

use pitlane_core::{TravelStyle, TripCandidate};

/// Seasonal surcharge per step of `race_month mod 4`.
const MONTH_STEP: f64 = 0.03;

/// Cost multiplier for a travel style.
#[must_use]
pub const fn style_factor(style: TravelStyle) -> f64 {
    match style {
        TravelStyle::Budget => 0.92,
        TravelStyle::Balanced => 1.0,
        TravelStyle::Premium => 1.18,
    }
}

/// Seasonal multiplier, `1 + (month mod 4) × 0.03`.
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "the seasonal factor is a linear surcharge"
)]
pub fn month_factor(month: u32) -> f64 {
    1.0 + f64::from(month.rem_euclid(4)) * MONTH_STEP
}

/// `floor(raw × style_factor × month_factor)`, saturating into `u32`.
///
/// # Examples
/// ```
/// use pitlane_scorer::adjust_cost;
///
/// assert_eq!(adjust_cost(260, 1.0, 1.03), 267);
/// assert_eq!(adjust_cost(420, 1.18, 1.0), 495);
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "adjusted costs are floored and range-checked before narrowing"
)]
pub fn adjust_cost(raw: u32, style_factor: f64, month_factor: f64) -> u32 {
    let scaled = (f64::from(raw) * style_factor * month_factor).floor();
    if !scaled.is_finite() || scaled <= 0.0 {
        return 0;
    }
    if scaled >= f64::from(u32::MAX) {
        return u32::MAX;
    }
    scaled as u32
}

/// Copy of `trip` with style and seasonal pricing applied.
#[must_use]
pub fn adjust_candidate(trip: &TripCandidate, style: TravelStyle) -> TripCandidate {
    let style_factor = style_factor(style);
    let month_factor = month_factor(trip.race_month());
    TripCandidate {
        flight_cost: adjust_cost(trip.flight_cost, style_factor, month_factor),
        hotel_cost: adjust_cost(trip.hotel_cost, style_factor, month_factor),
        ..trip.clone()
    }
}
