//! Recommend command implementation for the Pitlane CLI.

use std::io::{self, BufReader, Write};
use std::time::Duration;

use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, ValueEnum};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use pitlane_core::{
    BASE_CURRENCY, Budget, DEFAULT_BUDGET, DEFAULT_HOME_AIRPORT, LiveDataProvider,
    OfflineLiveData, Recommendation, RecommendationReport, ReferenceData, TravelStyle,
    TripCandidate, UserPreferences, WeatherPreference, sample_catalog,
};
use pitlane_data::{DEFAULT_TIMEOUT_SECS, HttpLiveDataConfig, HttpLiveDataProvider};
use pitlane_fs::open_utf8_file;
use pitlane_scorer::Recommender;
use serde::{Deserialize, Serialize};

use crate::CliError;

pub(crate) const ARG_HOME_AIRPORT: &str = "home-airport";
pub(crate) const ARG_BUDGET: &str = "budget";
pub(crate) const ARG_CURRENCY: &str = "currency";
pub(crate) const ARG_STYLE: &str = "style";
pub(crate) const ARG_WEATHER: &str = "weather";
pub(crate) const ARG_CATALOG: &str = "catalog";
pub(crate) const ARG_OFFLINE: &str = "offline";
pub(crate) const ARG_TIMEOUT_SECS: &str = "timeout-secs";
pub(crate) const ARG_TOP: &str = "top";
pub(crate) const ARG_FORMAT: &str = "format";

/// Recommendations printed in text mode unless `--top` says otherwise.
pub(crate) const DEFAULT_TOP: usize = 3;

/// How the report is written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum OutputFormat {
    /// Human-readable summary of the best trips.
    #[default]
    Text,
    /// The full report, including enrichment provenance.
    Json,
}

/// CLI arguments for the `recommend` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Score a trip catalog against traveller preferences. Live \
                 holiday, forecast and exchange-rate lookups refine the \
                 catalog; any lookup that fails falls back to the catalog \
                 and static reference data. Options can come from CLI \
                 flags, PITLANE_* environment variables, or a configuration \
                 file.",
    about = "Rank race-weekend trips for a traveller"
)]
#[ortho_config(prefix = "PITLANE")]
pub(crate) struct RecommendArgs {
    /// IATA code of the departure airport.
    #[arg(long = ARG_HOME_AIRPORT, value_name = "code")]
    #[serde(default)]
    pub(crate) home_airport: Option<String>,
    /// Total trip budget.
    #[arg(long = ARG_BUDGET, value_name = "amount")]
    #[serde(default)]
    pub(crate) budget: Option<f64>,
    /// Currency of the budget; defaults to the home airport's currency.
    #[arg(long = ARG_CURRENCY, value_name = "code")]
    #[serde(default)]
    pub(crate) currency: Option<String>,
    /// Travel style: budget, balanced or premium.
    #[arg(long = ARG_STYLE, value_name = "style")]
    #[serde(default)]
    pub(crate) style: Option<String>,
    /// Weather preference: cool, warm or mixed.
    #[arg(long = ARG_WEATHER, value_name = "preference")]
    #[serde(default)]
    pub(crate) weather: Option<String>,
    /// Path to a JSON array of trip candidates; the built-in sample otherwise.
    #[arg(long = ARG_CATALOG, value_name = "path")]
    #[serde(default)]
    pub(crate) catalog: Option<Utf8PathBuf>,
    /// Skip live lookups and use catalog values and static rates.
    #[arg(
        long = ARG_OFFLINE,
        value_name = "bool",
        num_args = 0..=1,
        default_missing_value = "true"
    )]
    #[serde(default)]
    pub(crate) offline: Option<bool>,
    /// Per-request timeout for live lookups.
    #[arg(long = ARG_TIMEOUT_SECS, value_name = "seconds")]
    #[serde(default)]
    pub(crate) timeout_secs: Option<u64>,
    /// Number of recommendations shown in text output.
    #[arg(long = ARG_TOP, value_name = "count")]
    #[serde(default)]
    pub(crate) top: Option<usize>,
    /// Output format.
    #[arg(long = ARG_FORMAT, value_enum)]
    #[serde(default)]
    pub(crate) format: Option<OutputFormat>,
}

impl RecommendArgs {
    pub(crate) fn into_config(self) -> Result<RecommendConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RecommendConfig::try_from(merged)
    }
}

/// Resolved `recommend` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RecommendConfig {
    /// Preferences handed to the engine.
    pub(crate) preferences: UserPreferences,
    /// Catalog file, when not using the built-in sample.
    pub(crate) catalog: Option<Utf8PathBuf>,
    /// Whether live lookups are disabled.
    pub(crate) offline: bool,
    /// Per-request timeout for live lookups.
    pub(crate) timeout: Duration,
    /// Recommendations shown in text output.
    pub(crate) top: usize,
    /// Output format.
    pub(crate) format: OutputFormat,
}

impl RecommendConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        self.catalog
            .as_deref()
            .map_or(Ok(()), |path| require_existing(path, ARG_CATALOG))
    }
}

impl TryFrom<RecommendArgs> for RecommendConfig {
    type Error = CliError;

    fn try_from(args: RecommendArgs) -> Result<Self, Self::Error> {
        let home_airport = args
            .home_airport
            .unwrap_or_else(|| DEFAULT_HOME_AIRPORT.to_owned());
        let currency = match args.currency {
            Some(code) => validate_currency(code)?,
            None => default_currency(&home_airport),
        };
        let budget = Budget::new(args.budget.unwrap_or(DEFAULT_BUDGET), currency);
        let style = args
            .style
            .as_deref()
            .map_or_else(TravelStyle::default, TravelStyle::from_tag);
        let weather = args
            .weather
            .as_deref()
            .map_or_else(WeatherPreference::default, WeatherPreference::from_tag);

        let timeout_secs = args.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS);
        if timeout_secs == 0 {
            return Err(CliError::InvalidArgument {
                field: ARG_TIMEOUT_SECS,
                reason: "must be at least one second".to_owned(),
            });
        }
        let top = args.top.unwrap_or(DEFAULT_TOP);
        if top == 0 {
            return Err(CliError::InvalidArgument {
                field: ARG_TOP,
                reason: "must show at least one recommendation".to_owned(),
            });
        }

        Ok(Self {
            preferences: UserPreferences::new(home_airport, budget, style, weather),
            catalog: args.catalog,
            offline: args.offline.unwrap_or(false),
            timeout: Duration::from_secs(timeout_secs),
            top,
            format: args.format.unwrap_or_default(),
        })
    }
}

fn default_currency(home_airport: &str) -> String {
    ReferenceData::default()
        .airports
        .currency_for(home_airport)
        .unwrap_or(BASE_CURRENCY)
        .to_owned()
}

fn validate_currency(code: String) -> Result<String, CliError> {
    let trimmed = code.trim();
    if trimmed.len() == 3 && trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
        Ok(trimmed.to_uppercase())
    } else {
        Err(CliError::InvalidArgument {
            field: ARG_CURRENCY,
            reason: format!("'{code}' is not a three-letter currency code"),
        })
    }
}

fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
    match pitlane_fs::file_is_file(path) {
        Ok(true) => Ok(()),
        Ok(false) => Err(CliError::SourcePathNotFile {
            field,
            path: path.to_path_buf(),
        }),
        Err(source) if source.kind() == io::ErrorKind::NotFound => {
            Err(CliError::MissingSourceFile {
                field,
                path: path.to_path_buf(),
            })
        }
        Err(source) => Err(CliError::InspectSourcePath {
            field,
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Builds the live data provider for the current invocation.
pub(crate) trait LiveDataBuilder {
    fn build(&self, config: &RecommendConfig) -> Result<Box<dyn LiveDataProvider>, CliError>;
}

pub(crate) struct DefaultLiveDataBuilder;

impl LiveDataBuilder for DefaultLiveDataBuilder {
    fn build(&self, config: &RecommendConfig) -> Result<Box<dyn LiveDataProvider>, CliError> {
        if config.offline {
            log::info!("live lookups disabled; using catalog values and static rates");
            return Ok(Box::new(OfflineLiveData));
        }
        let provider = HttpLiveDataProvider::with_config(
            HttpLiveDataConfig::default().with_timeout(config.timeout),
        )
        .map_err(CliError::BuildLiveDataProvider)?;
        Ok(Box::new(provider))
    }
}

pub(crate) fn run_recommend(args: RecommendArgs) -> Result<(), CliError> {
    let mut stdout = io::stdout().lock();
    run_recommend_with(args, &DefaultLiveDataBuilder, &mut stdout)
}

pub(crate) fn run_recommend_with(
    args: RecommendArgs,
    builder: &dyn LiveDataBuilder,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = args.into_config()?;
    let report = execute_recommend(&config, builder)?;
    match config.format {
        OutputFormat::Json => write_json(writer, &report),
        OutputFormat::Text => write_text(writer, &config, &report).map_err(CliError::WriteOutput),
    }
}

fn execute_recommend(
    config: &RecommendConfig,
    builder: &dyn LiveDataBuilder,
) -> Result<RecommendationReport, CliError> {
    config.validate_sources()?;
    let candidates = match &config.catalog {
        Some(path) => load_catalog(path)?,
        None => sample_catalog(),
    };
    let provider = builder.build(config)?;
    let recommender = Recommender::new(provider);
    Ok(recommender.recommend(&config.preferences, &candidates))
}

/// Loads a JSON array of [`TripCandidate`] values from disk.
pub(crate) fn load_catalog(path: &Utf8Path) -> Result<Vec<TripCandidate>, CliError> {
    let file = open_utf8_file(path).map_err(|source| CliError::OpenCatalog {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_reader(BufReader::new(file)).map_err(|source| CliError::ParseCatalog {
        path: path.to_path_buf(),
        source,
    })
}

fn write_json(writer: &mut dyn Write, report: &RecommendationReport) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(report).map_err(CliError::SerialiseReport)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)
}

pub(crate) fn write_text(
    writer: &mut dyn Write,
    config: &RecommendConfig,
    report: &RecommendationReport,
) -> io::Result<()> {
    write_profile(writer, &config.preferences, report)?;

    if report.recommendations.is_empty() {
        writeln!(writer)?;
        writeln!(writer, "No matching trips found in the catalog for this budget.")?;
        return writeln!(writer, "Try increasing budget or changing style to 'budget'.");
    }

    writeln!(writer)?;
    writeln!(writer, "--- Top F1-themed trip recommendations ---")?;
    for (rank, recommendation) in report.recommendations.iter().take(config.top).enumerate() {
        writeln!(writer)?;
        write_recommendation(writer, rank + 1, recommendation)?;
    }
    Ok(())
}

fn write_profile(
    writer: &mut dyn Write,
    preferences: &UserPreferences,
    report: &RecommendationReport,
) -> io::Result<()> {
    let budget = preferences.budget();
    writeln!(writer, "--- Your Profile ---")?;
    write!(
        writer,
        "Home airport: {} | Budget: {:.0} {}",
        preferences.home_airport(),
        budget.amount(),
        budget.currency()
    )?;
    if let Some(conversion) = report
        .enrichment
        .budget
        .as_ref()
        .filter(|conversion| conversion.currency != conversion.base_currency)
    {
        write!(
            writer,
            " (~{:.0} {})",
            conversion.converted_amount, conversion.base_currency
        )?;
    }
    writeln!(
        writer,
        " | Style: {} | Weather: {}",
        preferences.style(),
        preferences.weather()
    )?;
    let enrichment = &report.enrichment;
    writeln!(
        writer,
        "Live data: holidays {}/{}, forecasts {}/{}",
        enrichment.live_holidays(),
        enrichment.candidates.len(),
        enrichment.live_forecasts(),
        enrichment.candidates.len()
    )
}

fn write_recommendation(
    writer: &mut dyn Write,
    rank: usize,
    recommendation: &Recommendation,
) -> io::Result<()> {
    let trip = &recommendation.trip;
    let scores = &recommendation.scores;
    writeln!(writer, "{rank}. {} ({}, {})", trip.name, trip.city, trip.country)?;
    writeln!(writer, "   Estimated total cost: €{}", trip.total_cost())?;
    writeln!(writer, "   Experience score: {:.0}/100", scores.total)?;
    writeln!(
        writer,
        "   Hotel rating: {}/5 | Flight time: {}h",
        trip.hotel_rating, trip.flight_hours
    )?;
    writeln!(
        writer,
        "   Subscores -> Value {:.1}, F1 {:.1}, Weather {:.1}, Convenience {:.1}, Rating {:.1}",
        scores.value, scores.experience, scores.weather, scores.convenience, scores.rating
    )?;
    if let Some(tip) = recommendation.save_tips.first() {
        writeln!(writer, "   Save money: {tip}")?;
    }
    if let Some(tip) = recommendation.splurge_tips.first() {
        writeln!(writer, "   Spend for experience: {tip}")?;
    }
    Ok(())
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<RecommendConfig, CliError> {
    let merged = RecommendArgs::merge_from_layers(layers).map_err(CliError::from)?;
    RecommendConfig::try_from(merged)
}
