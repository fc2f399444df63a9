//! The five scoring criteria.
//!
//! Every scorer is pure and returns a value in `0.0..=100.0`; non-finite
//! intermediate results collapse to `0.0`.

use pitlane_core::{ScoreBreakdown, TripCandidate, WeatherPreference};

use crate::constants::VALUE_NORMALISER;

/// Upper bound of every criterion score.
pub const MAX_SCORE: f64 = 100.0;

/// Rain probability above which the weather score is penalised.
const RAIN_THRESHOLD: f64 = 0.25;

/// Points lost per unit of rain probability above the threshold.
const RAIN_PENALTY: f64 = 25.0;

/// Convenience before travel legs and holiday days are considered.
const CONVENIENCE_BASELINE: f64 = 85.0;

/// Unrounded criterion scores for one candidate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SubScores {
    /// Value for money.
    pub value: f64,
    /// F1 experience.
    pub experience: f64,
    /// Weather fit.
    pub weather: f64,
    /// Travel convenience.
    pub convenience: f64,
    /// Hotel rating quality.
    pub rating: f64,
}

impl SubScores {
    /// Score `trip` against a weather preference.
    #[must_use]
    pub fn for_trip(trip: &TripCandidate, weather: WeatherPreference, value_normaliser: f64) -> Self {
        Self {
            value: value_score_with(trip.total_cost(), trip.f1_experience_points, value_normaliser),
            experience: experience_score(trip.f1_experience_points),
            weather: weather_fit(weather, trip.avg_temp_c, trip.rain_probability),
            convenience: convenience_score(
                trip.flight_hours,
                trip.transfer_minutes,
                trip.holiday_days,
            ),
            rating: rating_quality(trip.hotel_rating),
        }
    }

    /// Attach a weighted total.
    #[must_use]
    pub const fn with_total(self, total: f64) -> ScoreBreakdown {
        ScoreBreakdown {
            value: self.value,
            experience: self.experience,
            weather: self.weather,
            convenience: self.convenience,
            rating: self.rating,
            total,
        }
    }
}

/// Clamp a raw score into `0.0..=100.0`, mapping non-finite values to zero.
#[must_use]
pub fn sanitise(score: f64) -> f64 {
    if !score.is_finite() {
        return 0.0;
    }
    score.clamp(0.0, MAX_SCORE)
}

/// Fit between a temperature, rain chance and the preferred climate.
///
/// # Examples
/// ```
/// use pitlane_core::WeatherPreference;
/// use pitlane_scorer::weather_fit;
///
/// assert_eq!(weather_fit(WeatherPreference::Cool, 18, 0.0), 100.0);
/// assert_eq!(weather_fit(WeatherPreference::Cool, 18, 0.5), 93.75);
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "weather fit is a linear distance from the ideal temperature"
)]
pub fn weather_fit(preference: WeatherPreference, temp_c: i32, rain_probability: f64) -> f64 {
    let (ideal, slope) = match preference {
        WeatherPreference::Cool => (18.0, 4.0),
        WeatherPreference::Warm => (27.0, 4.0),
        WeatherPreference::Mixed => (22.0, 3.0),
    };
    let temperature = (MAX_SCORE - slope * (f64::from(temp_c) - ideal).abs()).max(0.0);
    let rain = (rain_probability - RAIN_THRESHOLD).max(0.0) * RAIN_PENALTY;
    sanitise(temperature - rain)
}

/// Experience points per unit of cost, scaled by [`VALUE_NORMALISER`].
///
/// # Examples
/// ```
/// use pitlane_scorer::value_score;
///
/// assert_eq!(value_score(0, 50), 0.0);
/// assert_eq!(value_score(1000, 40), 100.0);
/// ```
#[must_use]
pub fn value_score(total_cost: u64, experience_points: i32) -> f64 {
    value_score_with(total_cost, experience_points, VALUE_NORMALISER)
}

/// [`value_score`] with an explicit normaliser.
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "value is a ratio of points to cost"
)]
pub fn value_score_with(total_cost: u64, experience_points: i32, normaliser: f64) -> f64 {
    if total_cost == 0 {
        return 0.0;
    }
    sanitise(f64::from(experience_points) / cost_as_f64(total_cost) * normaliser)
}

/// Experience points clamped to `0..=100`.
#[must_use]
pub fn experience_score(experience_points: i32) -> f64 {
    f64::from(experience_points.clamp(0, 100))
}

/// Longer stays and shorter travel legs score higher.
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "convenience trades holiday bonus against travel penalty"
)]
pub fn convenience_score(flight_hours: f64, transfer_minutes: u32, holiday_days: u32) -> f64 {
    let travel_penalty = flight_hours * 6.0 + f64::from(transfer_minutes) / 6.0;
    let holiday_bonus = f64::from(holiday_days) * 7.0;
    sanitise(CONVENIENCE_BASELINE + holiday_bonus - travel_penalty)
}

/// Hotel rating out of five on a hundred-point scale.
#[must_use]
#[expect(clippy::float_arithmetic, reason = "rating is rescaled linearly")]
pub fn rating_quality(hotel_rating: f64) -> f64 {
    sanitise(hotel_rating / 5.0 * MAX_SCORE)
}

#[expect(
    clippy::cast_precision_loss,
    reason = "trip costs are far below the 2^53 precision limit"
)]
pub(crate) const fn cost_as_f64(cost: u64) -> f64 {
    cost as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(WeatherPreference::Cool, 18, 0.0, 100.0)]
    #[case(WeatherPreference::Cool, 18, 0.5, 93.75)]
    #[case(WeatherPreference::Warm, 27, 0.25, 100.0)]
    #[case(WeatherPreference::Warm, 22, 0.0, 80.0)]
    #[case(WeatherPreference::Mixed, 24, 0.28, 93.25)]
    #[case(WeatherPreference::Mixed, 22, 1.0, 81.25)]
    #[case(WeatherPreference::Cool, 50, 0.0, 0.0)]
    #[case(WeatherPreference::Cool, 40, 1.0, 0.0)]
    fn weather_fit_matches_model(
        #[case] preference: WeatherPreference,
        #[case] temp: i32,
        #[case] rain: f64,
        #[case] expected: f64,
    ) {
        let score = weather_fit(preference, temp, rain);
        assert!((score - expected).abs() < 1e-9, "got {score}");
    }

    #[rstest]
    #[case(0, 50, 0.0)]
    #[case(1000, 40, 100.0)]
    #[case(2500, 10, 10.0)]
    #[case(1000, -5, 0.0)]
    fn value_score_matches_model(#[case] cost: u64, #[case] points: i32, #[case] expected: f64) {
        assert!((value_score(cost, points) - expected).abs() < 1e-9);
    }

    #[rstest]
    #[case(-10, 0.0)]
    #[case(88, 88.0)]
    #[case(140, 100.0)]
    fn experience_is_clamped(#[case] points: i32, #[case] expected: f64) {
        assert_eq!(experience_score(points), expected);
    }

    #[rstest]
    #[case(0.0, 0, 0, 85.0)]
    #[case(2.0, 48, 4, 93.0)]
    #[case(0.0, 0, 10, 100.0)]
    #[case(20.0, 600, 0, 0.0)]
    #[case(f64::NAN, 0, 0, 0.0)]
    fn convenience_matches_model(
        #[case] hours: f64,
        #[case] minutes: u32,
        #[case] days: u32,
        #[case] expected: f64,
    ) {
        let score = convenience_score(hours, minutes, days);
        assert!((score - expected).abs() < 1e-9, "got {score}");
    }

    #[rstest]
    #[case(4.4, 88.0)]
    #[case(5.0, 100.0)]
    #[case(7.5, 100.0)]
    #[case(-1.0, 0.0)]
    fn rating_is_rescaled(#[case] rating: f64, #[case] expected: f64) {
        assert!((rating_quality(rating) - expected).abs() < 1e-9);
    }

    #[rstest]
    fn scores_stay_in_range_for_extreme_inputs() {
        let extremes = [f64::MIN, -1.0, 0.0, 0.5, 1.0, 1e9, f64::MAX, f64::NAN];
        for x in extremes {
            for score in [
                weather_fit(WeatherPreference::Mixed, 22, x),
                convenience_score(x, 0, 0),
                rating_quality(x),
                value_score_with(1, 100, x),
            ] {
                assert!((0.0..=MAX_SCORE).contains(&score), "{score} out of range");
            }
        }
        for temp in [i32::MIN, -40, 0, 22, 60, i32::MAX] {
            let score = weather_fit(WeatherPreference::Warm, temp, 0.0);
            assert!((0.0..=MAX_SCORE).contains(&score));
        }
    }
}
