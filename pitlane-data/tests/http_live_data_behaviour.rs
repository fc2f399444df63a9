//! Behavioural tests for the HTTP live data provider against a loopback server.

mod support;

use std::cell::RefCell;
use std::time::Duration;

use geo::Coord;
use pitlane_core::{
    DailyForecast, ExchangeRate, ExchangeRateProvider, Holiday, HolidayProvider, LookupError,
    WeatherProvider,
};
use pitlane_data::{HttpLiveDataConfig, HttpLiveDataProvider};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use support::{CannedServer, Route};

const HOLIDAYS: &str = "/api/v3/NextPublicHolidays";
const FORECAST: &str = "/v1/forecast";
const RATES: &str = "/latest";

type ServerCell = RefCell<Option<CannedServer>>;

#[derive(Debug)]
enum Outcome {
    Holiday(Result<Holiday, LookupError>),
    Forecast(Result<DailyForecast, LookupError>),
    Rate(Result<ExchangeRate, LookupError>),
}

impl Outcome {
    fn error(&self) -> Option<&LookupError> {
        match self {
            Self::Holiday(result) => result.as_ref().err(),
            Self::Forecast(result) => result.as_ref().err(),
            Self::Rate(result) => result.as_ref().err(),
        }
    }
}

type OutcomeCell = RefCell<Option<Outcome>>;

#[fixture]
fn server() -> ServerCell {
    RefCell::new(None)
}

#[fixture]
fn outcome() -> OutcomeCell {
    RefCell::new(None)
}

fn provider_for(server: &ServerCell) -> HttpLiveDataProvider {
    let guard = server.borrow();
    let server = guard.as_ref().expect("server must be started");
    HttpLiveDataProvider::with_config(
        HttpLiveDataConfig::default()
            .with_base_url(server.base_url())
            .with_timeout(Duration::from_secs(1)),
    )
    .expect("provider should build")
}

fn record(outcome: &OutcomeCell, value: Outcome) {
    *outcome.borrow_mut() = Some(value);
}

#[given("a live data server with canned responses")]
fn canned_server(#[from(server)] server: &ServerCell) {
    *server.borrow_mut() = Some(CannedServer::start(vec![
        Route::ok(
            HOLIDAYS,
            r#"[
                {"date": "2026-12-26", "localName": "Santo Stefano", "name": "St. Stephen's Day"},
                {"date": "2026-12-25", "localName": "Natale", "name": "Christmas Day"}
            ]"#,
        ),
        Route::ok(
            FORECAST,
            r#"{"daily": {
                "time": ["2026-10-17"],
                "temperature_2m_max": [21.4],
                "precipitation_probability_mean": [35]
            }}"#,
        ),
        Route::ok(
            RATES,
            r#"{"amount": 1.0, "base": "GBP", "date": "2026-10-16", "rates": {"EUR": 1.1532}}"#,
        ),
    ]));
}

#[given("a live data server that answers with status 503")]
fn failing_server(#[from(server)] server: &ServerCell) {
    *server.borrow_mut() = Some(CannedServer::start(vec![
        Route::ok(HOLIDAYS, r#"{"title": "Service Unavailable"}"#).with_status(503),
    ]));
}

#[given("a live data server with no upcoming holidays")]
fn empty_server(#[from(server)] server: &ServerCell) {
    *server.borrow_mut() = Some(CannedServer::start(vec![
        Route::ok(HOLIDAYS, "").with_status(204),
    ]));
}

#[given("a live data server that stalls")]
fn stalled_server(#[from(server)] server: &ServerCell) {
    *server.borrow_mut() = Some(CannedServer::start(vec![
        Route::ok(RATES, "{}").with_delay(Duration::from_secs(3)),
    ]));
}

#[given("a live data server whose response body stalls")]
fn stalled_body_server(#[from(server)] server: &ServerCell) {
    *server.borrow_mut() = Some(CannedServer::start(vec![
        Route::ok(RATES, r#"{"amount": 1.0, "base": "GBP", "rates": {"EUR": 1.1532}}"#)
            .with_body_delay(Duration::from_secs(3)),
    ]));
}

#[when("I look up the next holiday for IT")]
fn look_up_holiday(#[from(server)] server: &ServerCell, #[from(outcome)] outcome: &OutcomeCell) {
    let provider = provider_for(server);
    record(outcome, Outcome::Holiday(provider.next_public_holiday("IT")));
}

#[when("I look up the forecast for Milan")]
fn look_up_forecast(#[from(server)] server: &ServerCell, #[from(outcome)] outcome: &OutcomeCell) {
    let provider = provider_for(server);
    let milan = Coord { x: 9.19, y: 45.4642 };
    record(outcome, Outcome::Forecast(provider.daily_forecast(milan)));
}

#[when("I look up the GBP to EUR rate")]
fn look_up_rate(#[from(server)] server: &ServerCell, #[from(outcome)] outcome: &OutcomeCell) {
    let provider = provider_for(server);
    record(outcome, Outcome::Rate(provider.exchange_rate("GBP", "EUR")));
}

#[then("the holiday is \"Christmas Day\" on a long weekend")]
fn holiday_is_christmas(#[from(outcome)] outcome: &OutcomeCell) {
    let guard = outcome.borrow();
    let Some(Outcome::Holiday(Ok(holiday))) = guard.as_ref() else {
        panic!("expected a live holiday, got {guard:?}");
    };
    assert_eq!(holiday.name, "Christmas Day");
    assert!(holiday.extends_weekend());
}

#[then("the forecast reads 21.4 degrees with a 35 percent chance of rain")]
fn forecast_matches(#[from(outcome)] outcome: &OutcomeCell) {
    let guard = outcome.borrow();
    let Some(Outcome::Forecast(Ok(forecast))) = guard.as_ref() else {
        panic!("expected a live forecast, got {guard:?}");
    };
    assert_eq!(forecast.max_temp_c, 21.4);
    assert_eq!(forecast.precipitation_probability_pct, 35.0);
}

#[then("the rate is 1.1532")]
fn rate_matches(#[from(outcome)] outcome: &OutcomeCell) {
    let guard = outcome.borrow();
    let Some(Outcome::Rate(Ok(rate))) = guard.as_ref() else {
        panic!("expected a live rate, got {guard:?}");
    };
    assert_eq!(rate.rate, 1.1532);
    assert_eq!(rate.from, "GBP");
}

#[then("the lookup fails with HTTP status 503")]
fn fails_with_status(#[from(outcome)] outcome: &OutcomeCell) {
    let guard = outcome.borrow();
    let error = guard.as_ref().and_then(Outcome::error);
    assert!(
        matches!(error, Some(LookupError::HttpError { status: 503, .. })),
        "unexpected outcome: {guard:?}"
    );
}

#[then("the lookup reports no data from the holiday service")]
fn reports_no_data(#[from(outcome)] outcome: &OutcomeCell) {
    let guard = outcome.borrow();
    let error = guard.as_ref().and_then(Outcome::error);
    assert!(
        matches!(error, Some(LookupError::NoData { service: "holidays", .. })),
        "unexpected outcome: {guard:?}"
    );
}

#[then("the lookup times out")]
fn times_out(#[from(outcome)] outcome: &OutcomeCell) {
    let guard = outcome.borrow();
    let error = guard.as_ref().and_then(Outcome::error);
    assert!(
        matches!(error, Some(LookupError::Timeout { timeout_secs: 1, .. })),
        "unexpected outcome: {guard:?}"
    );
}

macro_rules! register_scenario {
    ($fn_name:ident, $title:literal) => {
        #[scenario(path = "tests/features/http_live_data.feature", name = $title)]
        fn $fn_name(server: ServerCell, outcome: OutcomeCell) {
            let _ = (server, outcome);
        }
    };
}

register_scenario!(reading_next_holiday, "reading the next public holiday");
register_scenario!(reading_forecast, "reading a one-day forecast");
register_scenario!(reading_exchange_rate, "reading an exchange rate");
register_scenario!(handling_service_error, "handling a service error status");
register_scenario!(handling_empty_holidays, "handling an empty holiday response");
register_scenario!(handling_stalled_service, "handling a stalled service");
register_scenario!(handling_stalled_body, "handling a body that stalls mid-transfer");
