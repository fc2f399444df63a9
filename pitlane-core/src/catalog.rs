//! Built-in sample catalog of race-weekend packages.

use chrono::NaiveDate;

use crate::TripCandidate;

/// Return the three bundled sample packages in catalog order.
#[must_use]
pub fn sample_catalog() -> Vec<TripCandidate> {
    [
        SampleTrip {
            name: "Monza Long Weekend",
            country: "Italy",
            city: "Milan",
            race_date: (2026, 9, 6),
            holiday_days: 3,
            avg_temp_c: 24,
            rain_probability: 0.28,
            costs: (260, 420, 230),
            hotel_rating: 4.4,
            flight_hours: 2.1,
            transfer_minutes: 55,
            f1_experience_points: 88,
        },
        SampleTrip {
            name: "Suzuka Experience Week",
            country: "Japan",
            city: "Nagoya",
            race_date: (2026, 4, 5),
            holiday_days: 5,
            avg_temp_c: 19,
            rain_probability: 0.34,
            costs: (920, 620, 350),
            hotel_rating: 4.6,
            flight_hours: 13.2,
            transfer_minutes: 120,
            f1_experience_points: 96,
        },
        SampleTrip {
            name: "Barcelona Spring GP",
            country: "Spain",
            city: "Barcelona",
            race_date: (2026, 5, 31),
            holiday_days: 4,
            avg_temp_c: 23,
            rain_probability: 0.2,
            costs: (210, 390, 200),
            hotel_rating: 4.3,
            flight_hours: 2.0,
            transfer_minutes: 50,
            f1_experience_points: 84,
        },
    ]
    .into_iter()
    .filter_map(SampleTrip::into_candidate)
    .collect()
}

struct SampleTrip {
    name: &'static str,
    country: &'static str,
    city: &'static str,
    race_date: (i32, u32, u32),
    holiday_days: u32,
    avg_temp_c: i32,
    rain_probability: f64,
    costs: (u32, u32, u32),
    hotel_rating: f64,
    flight_hours: f64,
    transfer_minutes: u32,
    f1_experience_points: i32,
}

impl SampleTrip {
    fn into_candidate(self) -> Option<TripCandidate> {
        let (year, month, day) = self.race_date;
        let (flight_cost, hotel_cost, local_cost) = self.costs;
        Some(TripCandidate {
            name: self.name.to_owned(),
            country: self.country.to_owned(),
            city: self.city.to_owned(),
            race_date: NaiveDate::from_ymd_opt(year, month, day)?,
            holiday_days: self.holiday_days,
            avg_temp_c: self.avg_temp_c,
            rain_probability: self.rain_probability,
            flight_cost,
            hotel_cost,
            local_cost,
            hotel_rating: self.hotel_rating,
            flight_hours: self.flight_hours,
            transfer_minutes: self.transfer_minutes,
            f1_experience_points: self.f1_experience_points,
        })
    }
}
