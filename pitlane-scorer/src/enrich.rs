//! Live enrichment of candidates and budget currency conversion.
//!
//! Lookups never fail the run: every provider error becomes a
//! [`Lookup::Fallback`] and the candidate keeps its catalog values for that
//! field. Holiday and weather lookups for one candidate run concurrently, and
//! candidates are enriched in parallel with their input order preserved.

use chrono::Utc;
use pitlane_core::{
    Budget, CandidateEnrichment, CityDirectory, CurrencyConversion, DailyForecast,
    ExchangeRate, ExchangeRateProvider, FallbackReason, Holiday, HolidayProvider, Lookup,
    LookupError, RateSource, ReferenceData, TripCandidate, WeatherProvider, coerce_amount,
};
use rayon::prelude::*;

/// Enrich every candidate, returning the enriched copies and one provenance
/// entry per candidate, both in input order.
pub fn enrich_candidates<P>(
    provider: &P,
    cities: &CityDirectory,
    candidates: &[TripCandidate],
) -> (Vec<TripCandidate>, Vec<CandidateEnrichment>)
where
    P: HolidayProvider + WeatherProvider + ?Sized,
{
    candidates
        .par_iter()
        .map(|trip| enrich_candidate(provider, cities, trip))
        .collect::<Vec<_>>()
        .into_iter()
        .unzip()
}

/// Enrich a single candidate.
///
/// A city missing from `cities` skips both lookups. A live holiday that
/// falls on a Monday or Friday adds one holiday day; a live forecast
/// replaces the average temperature and rain probability.
pub fn enrich_candidate<P>(
    provider: &P,
    cities: &CityDirectory,
    trip: &TripCandidate,
) -> (TripCandidate, CandidateEnrichment)
where
    P: HolidayProvider + WeatherProvider + ?Sized,
{
    let (holiday, forecast): (Lookup<Holiday>, Lookup<DailyForecast>) =
        cities.lookup(&trip.city).map_or_else(
            || {
                let reason = FallbackReason::UnknownCity {
                    city: trip.city.clone(),
                };
                (Lookup::Fallback(reason.clone()), Lookup::Fallback(reason))
            },
            |city| {
                rayon::join(
                    || provider.next_public_holiday(&city.country_code).into(),
                    || provider.daily_forecast(city.location).into(),
                )
            },
        );

    if let Some(reason) = holiday.fallback_reason() {
        log::warn!("holiday lookup for {} fell back: {reason}", trip.name);
    }
    if let Some(reason) = forecast.fallback_reason() {
        log::warn!("weather lookup for {} fell back: {reason}", trip.name);
    }

    let mut enriched = trip.clone();
    if let Some(live) = holiday.as_live() {
        apply_holiday(&mut enriched, live);
    }
    if let Some(live) = forecast.as_live() {
        apply_forecast(&mut enriched, live);
    }
    let record = CandidateEnrichment::record(trip, &holiday, &forecast, Utc::now());
    (enriched, record)
}

fn apply_holiday(trip: &mut TripCandidate, holiday: &Holiday) {
    if holiday.extends_weekend() {
        log::debug!(
            "{} on {} extends the weekend for {}",
            holiday.name,
            holiday.date,
            trip.name
        );
        trip.holiday_days = trip.holiday_days.saturating_add(1);
    }
}

#[expect(
    clippy::float_arithmetic,
    clippy::cast_possible_truncation,
    reason = "forecast values are rounded and clamped before narrowing"
)]
fn apply_forecast(trip: &mut TripCandidate, forecast: &DailyForecast) {
    if forecast.max_temp_c.is_finite() {
        let rounded = forecast
            .max_temp_c
            .round()
            .clamp(f64::from(i32::MIN), f64::from(i32::MAX));
        trip.avg_temp_c = rounded as i32;
    }
    if forecast.precipitation_probability_pct.is_finite() {
        trip.rain_probability = (forecast.precipitation_probability_pct / 100.0).clamp(0.0, 1.0);
    }
}

/// Convert `budget` into the reference base currency.
///
/// A budget already in the base currency needs no lookup. Otherwise the live
/// rate is tried first, then the fallback table; a currency neither knows is
/// taken at parity. The converted amount never drops below the minimum
/// budget.
///
/// # Examples
/// ```
/// use pitlane_core::{Budget, LookupError, RateSource, ReferenceData};
/// use pitlane_core::test_support::StubLiveData;
/// use pitlane_scorer::convert_budget;
///
/// let offline = StubLiveData::failing(LookupError::Disabled);
/// let conversion = convert_budget(&offline, &ReferenceData::default(), &Budget::new(1000.0, "gbp"));
///
/// assert_eq!(conversion.source, RateSource::Fallback);
/// assert!((conversion.converted_amount - 1170.0).abs() < 1e-9);
/// ```
pub fn convert_budget<P>(
    provider: &P,
    reference: &ReferenceData,
    budget: &Budget,
) -> CurrencyConversion
where
    P: ExchangeRateProvider + ?Sized,
{
    let base = reference.base_currency.as_str();
    let currency = budget.currency();
    let mut conversion = CurrencyConversion {
        currency: currency.to_owned(),
        base_currency: base.to_owned(),
        original_amount: budget.amount(),
        rate: 1.0,
        converted_amount: budget.amount(),
        source: RateSource::Identity,
        fallback_reason: None,
        payload: None,
        fetched_at: Utc::now(),
    };
    if currency.eq_ignore_ascii_case(base) {
        return conversion;
    }

    let lookup: Lookup<ExchangeRate> = provider
        .exchange_rate(currency, base)
        .and_then(usable_rate)
        .into();
    match lookup {
        Lookup::Live(rate) => {
            conversion.rate = rate.rate;
            conversion.source = RateSource::Live;
            conversion.payload = Some(rate.raw);
        }
        Lookup::Fallback(reason) => {
            log::warn!("exchange rate {currency}->{base} fell back: {reason}");
            conversion.fallback_reason = Some(reason.to_string());
            (conversion.rate, conversion.source) = reference
                .fallback_rates
                .rate_for(currency)
                .map_or_else(
                    || {
                        log::warn!("no fallback rate for {currency}; using parity");
                        (1.0, RateSource::Parity)
                    },
                    |rate| (rate, RateSource::Fallback),
                );
        }
    }
    conversion.converted_amount = converted(budget.amount(), conversion.rate);
    conversion.fetched_at = Utc::now();
    conversion
}

fn usable_rate(rate: ExchangeRate) -> Result<ExchangeRate, LookupError> {
    if rate.rate.is_finite() && rate.rate > 0.0 {
        Ok(rate)
    } else {
        Err(LookupError::ParseError {
            message: format!("unusable rate {} for {}->{}", rate.rate, rate.from, rate.to),
        })
    }
}

#[expect(clippy::float_arithmetic, reason = "currency conversion is a product")]
fn converted(amount: f64, rate: f64) -> f64 {
    coerce_amount(amount * rate)
}
