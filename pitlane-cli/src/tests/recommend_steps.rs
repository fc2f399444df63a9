//! Behaviour-driven step definitions driving the recommend CLI scenarios.

use super::helpers::{MONZA_CATALOG, StubLiveDataBuilder, write_utf8};
use super::*;
use crate::recommend::{ARG_CATALOG, DefaultLiveDataBuilder, LiveDataBuilder, run_recommend_with};
use camino::Utf8PathBuf;
use chrono::NaiveDate;
use pitlane_core::test_support::StubLiveData;
use pitlane_core::{LookupError, RecommendationReport};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use std::cell::RefCell;
use tempfile::TempDir;

#[derive(Debug)]
struct RecommendWorld {
    _tmp: TempDir,
    catalog_path: Utf8PathBuf,
    use_catalog: RefCell<bool>,
    stub: RefCell<Option<StubLiveData>>,
    cli_args: RefCell<Vec<String>>,
    stdout: RefCell<Vec<u8>>,
    result: RefCell<Option<Result<(), CliError>>>,
}

impl RecommendWorld {
    fn new() -> Self {
        let tmp = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf-8 workspace");
        Self {
            _tmp: tmp,
            catalog_path: root.join("catalog.json"),
            use_catalog: RefCell::new(false),
            stub: RefCell::new(None),
            cli_args: RefCell::new(Vec::new()),
            stdout: RefCell::new(Vec::new()),
            result: RefCell::new(None),
        }
    }

    fn push_args<const N: usize>(&self, args: [&str; N]) {
        self.cli_args
            .borrow_mut()
            .extend(args.iter().map(|arg| (*arg).to_owned()));
    }

    fn build_command_line(&self) -> Vec<String> {
        let mut argv = vec!["pitlane".to_owned(), "recommend".to_owned()];
        if *self.use_catalog.borrow() {
            argv.extend([
                format!("--{ARG_CATALOG}"),
                self.catalog_path.as_str().to_owned(),
            ]);
        }
        argv.extend(self.cli_args.borrow().iter().cloned());
        argv
    }

    fn stdout(&self) -> String {
        String::from_utf8(self.stdout.borrow().clone()).expect("stdout utf-8")
    }

    fn report(&self) -> RecommendationReport {
        serde_json::from_str(&self.stdout()).expect("output should be a JSON report")
    }

    fn error(&self) -> std::cell::Ref<'_, CliError> {
        std::cell::Ref::map(self.result.borrow(), |result| {
            result
                .as_ref()
                .expect("result recorded")
                .as_ref()
                .expect_err("expected error")
        })
    }
}

#[fixture]
fn world() -> RecommendWorld {
    RecommendWorld::new()
}

#[given("the built-in sample catalog")]
fn sample_catalog(#[from(world)] world: &RecommendWorld) {
    *world.use_catalog.borrow_mut() = false;
}

#[given("a catalog file containing only Monza")]
fn monza_catalog(#[from(world)] world: &RecommendWorld) {
    write_utf8(&world.catalog_path, MONZA_CATALOG.as_bytes());
    *world.use_catalog.borrow_mut() = true;
}

#[given("a catalog path that does not exist")]
fn missing_catalog(#[from(world)] world: &RecommendWorld) {
    *world.use_catalog.borrow_mut() = true;
}

#[given("a catalog file containing invalid JSON")]
fn malformed_catalog(#[from(world)] world: &RecommendWorld) {
    write_utf8(&world.catalog_path, b"[{ not valid json");
    *world.use_catalog.borrow_mut() = true;
}

#[given("I run offline with a {amount} EUR budget")]
fn offline_budget(#[from(world)] world: &RecommendWorld, amount: u32) {
    let budget = amount.to_string();
    world.push_args(["--offline", "--budget", &budget, "--currency", "EUR"]);
}

#[given("I prefer warm weather with a 1200 EUR budget")]
fn warm_budget(#[from(world)] world: &RecommendWorld) {
    world.push_args(["--weather", "warm", "--budget", "1200", "--currency", "EUR"]);
}

#[given("I ask for JSON output")]
fn json_output(#[from(world)] world: &RecommendWorld) {
    world.push_args(["--format", "json"]);
}

#[given("live data reports a Friday holiday and a hot dry forecast")]
fn live_data(#[from(world)] world: &RecommendWorld) {
    let friday = NaiveDate::from_ymd_opt(2026, 12, 25).expect("valid date");
    let stub = StubLiveData::failing(LookupError::Disabled)
        .with_holiday(friday, "Christmas Day")
        .with_forecast(30.0, 10.0);
    *world.stub.borrow_mut() = Some(stub);
}

#[when("I run the recommend command")]
fn run_recommend_command(#[from(world)] world: &RecommendWorld) {
    let invocation = world.build_command_line();
    let parsed = Cli::try_parse_from(invocation).map_err(CliError::from);
    let outcome = parsed.and_then(|cli| match cli.command {
        Command::Recommend(args) => {
            let stub_builder = world
                .stub
                .borrow()
                .clone()
                .map(|stub| StubLiveDataBuilder { stub });
            let builder: &dyn LiveDataBuilder = match &stub_builder {
                Some(stub) => stub,
                None => &DefaultLiveDataBuilder,
            };
            let mut buffer = world.stdout.borrow_mut();
            run_recommend_with(args, builder, &mut *buffer)
        }
    });

    world.result.replace(Some(outcome));
}

#[then("the command succeeds")]
fn command_succeeds(#[from(world)] world: &RecommendWorld) {
    let borrowed = world.result.borrow();
    let result = borrowed.as_ref().expect("result recorded");
    if let Err(err) = result {
        panic!("expected success, found {err:?}");
    }
}

#[then("the first recommendation printed is {name}")]
fn first_printed(#[from(world)] world: &RecommendWorld, name: String) {
    let expected = format!("1. {} (", name.trim_matches('"'));
    let stdout = world.stdout();
    assert!(stdout.contains(&expected), "unexpected output:\n{stdout}");
}

#[then("the output suggests raising the budget")]
fn suggests_budget(#[from(world)] world: &RecommendWorld) {
    let stdout = world.stdout();
    assert!(stdout.contains("No matching trips found"), "unexpected output:\n{stdout}");
    assert!(stdout.contains("Try increasing budget"));
}

#[then("the JSON report ranks {ranked} trips and records {enriched} enrichments")]
fn report_counts(#[from(world)] world: &RecommendWorld, ranked: usize, enriched: usize) {
    let report = world.report();
    assert_eq!(report.recommendations.len(), ranked);
    assert_eq!(report.enrichment.candidates.len(), enriched);
    assert!(report.enrichment.budget.is_some());
}

#[then("the JSON report shows live holidays for every candidate")]
fn live_holidays(#[from(world)] world: &RecommendWorld) {
    let report = world.report();
    assert_eq!(report.enrichment.live_holidays(), report.enrichment.candidates.len());
    assert_eq!(report.enrichment.live_forecasts(), report.enrichment.candidates.len());
}

#[then("the JSON report ranks {name} first")]
fn report_leader(#[from(world)] world: &RecommendWorld, name: String) {
    let report = world.report();
    let best = report.best().expect("at least one recommendation");
    assert_eq!(best.trip.name, name.trim_matches('"'));
}

#[then("the command fails because the catalog is missing")]
fn fails_missing_catalog(#[from(world)] world: &RecommendWorld) {
    match &*world.error() {
        CliError::MissingSourceFile { field, .. } => assert_eq!(*field, ARG_CATALOG),
        other => panic!("expected MissingSourceFile, found {other:?}"),
    }
}

#[then("the command fails because the catalog JSON is invalid")]
fn fails_invalid_catalog(#[from(world)] world: &RecommendWorld) {
    match &*world.error() {
        CliError::ParseCatalog { path, .. } => assert_eq!(path, &world.catalog_path),
        other => panic!("expected ParseCatalog, found {other:?}"),
    }
}

macro_rules! register_recommend_scenario {
    ($fn_name:ident, $scenario_title:literal) => {
        #[scenario(path = "tests/features/recommend_command.feature", name = $scenario_title)]
        fn $fn_name(#[from(world)] world: RecommendWorld) {
            let _ = world;
        }
    };
}

register_recommend_scenario!(recommend_offline, "recommending from the sample catalog offline");
register_recommend_scenario!(recommend_json, "printing the full report as JSON");
register_recommend_scenario!(recommend_over_budget, "reporting when nothing fits the budget");
register_recommend_scenario!(recommend_custom_catalog, "loading a custom catalog");
register_recommend_scenario!(recommend_missing_catalog, "rejecting a missing catalog");
register_recommend_scenario!(recommend_malformed_catalog, "rejecting a malformed catalog");
register_recommend_scenario!(recommend_live_data, "live data reaches the report");
