//! Reference tables consulted during enrichment.
//!
//! City coordinates, home-airport currencies and fallback exchange rates are
//! plain configuration values. [`ReferenceData::default`] carries the
//! built-in tables; callers swap any of them to inject fixtures or extend
//! coverage.

use std::collections::HashMap;

use geo::Coord;

/// Currency every cost and budget is expressed in once converted.
pub const BASE_CURRENCY: &str = "EUR";

/// Location and country of a host city.
#[derive(Debug, Clone, PartialEq)]
pub struct CityMetadata {
    /// `x` is longitude and `y` is latitude, in degrees.
    pub location: Coord,
    /// ISO 3166-1 alpha-2 country code.
    pub country_code: String,
}

impl CityMetadata {
    /// Build metadata from latitude, longitude and country code.
    #[must_use]
    pub fn new(latitude: f64, longitude: f64, country_code: impl Into<String>) -> Self {
        Self {
            location: Coord {
                x: longitude,
                y: latitude,
            },
            country_code: country_code.into(),
        }
    }

    /// Latitude in degrees.
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.location.y
    }

    /// Longitude in degrees.
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.location.x
    }
}

/// Case-insensitive city name to [`CityMetadata`] lookup.
///
/// # Examples
/// ```
/// use pitlane_core::{CityDirectory, CityMetadata};
///
/// let cities = CityDirectory::empty().with_city("Zandvoort", CityMetadata::new(52.37, 4.53, "NL"));
/// assert_eq!(cities.lookup("zandvoort").map(|c| c.country_code.as_str()), Some("NL"));
/// assert!(cities.lookup("Milan").is_none());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CityDirectory {
    cities: HashMap<String, CityMetadata>,
}

impl CityDirectory {
    /// Directory without any entries.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            cities: HashMap::new(),
        }
    }

    /// Add or replace a city.
    #[must_use]
    pub fn with_city(mut self, name: &str, metadata: CityMetadata) -> Self {
        self.cities.insert(normalise_key(name), metadata);
        self
    }

    /// Metadata for `name`, if known.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<&CityMetadata> {
        self.cities.get(&normalise_key(name))
    }

    /// Number of known cities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cities.len()
    }

    /// Whether the directory has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }
}

impl Default for CityDirectory {
    fn default() -> Self {
        [
            ("Milan", 45.4642, 9.19, "IT"),
            ("Nagoya", 35.1815, 136.9066, "JP"),
            ("Barcelona", 41.3874, 2.1686, "ES"),
            ("Melbourne", -37.8136, 144.9631, "AU"),
            ("Montreal", 45.5019, -73.5674, "CA"),
            ("Austin", 30.2672, -97.7431, "US"),
            ("Budapest", 47.4979, 19.0402, "HU"),
            ("Singapore", 1.3521, 103.8198, "SG"),
            ("Monaco", 43.7384, 7.4246, "MC"),
        ]
        .into_iter()
        .fold(Self::empty(), |dir, (name, lat, lon, country)| {
            dir.with_city(name, CityMetadata::new(lat, lon, country))
        })
    }
}

/// Home airport code to the currency its travellers usually budget in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AirportDirectory {
    currencies: HashMap<String, String>,
}

impl AirportDirectory {
    /// Directory without any entries.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            currencies: HashMap::new(),
        }
    }

    /// Add or replace an airport.
    #[must_use]
    pub fn with_airport(mut self, code: &str, currency: &str) -> Self {
        self.currencies
            .insert(code.trim().to_uppercase(), currency.trim().to_uppercase());
        self
    }

    /// Currency for `code`, if known.
    #[must_use]
    pub fn currency_for(&self, code: &str) -> Option<&str> {
        self.currencies
            .get(&code.trim().to_uppercase())
            .map(String::as_str)
    }
}

impl Default for AirportDirectory {
    fn default() -> Self {
        [
            ("LHR", "GBP"),
            ("LGW", "GBP"),
            ("MAN", "GBP"),
            ("EDI", "GBP"),
            ("DUB", "EUR"),
            ("CDG", "EUR"),
            ("FRA", "EUR"),
            ("AMS", "EUR"),
            ("MXP", "EUR"),
            ("BCN", "EUR"),
            ("ZRH", "CHF"),
            ("JFK", "USD"),
            ("LAX", "USD"),
            ("YYZ", "CAD"),
            ("SYD", "AUD"),
            ("NRT", "JPY"),
            ("HND", "JPY"),
            ("SIN", "SGD"),
        ]
        .into_iter()
        .fold(Self::empty(), |dir, (code, currency)| {
            dir.with_airport(code, currency)
        })
    }
}

/// Static exchange rates used when the live rate is unavailable.
///
/// Each rate is the number of base-currency units one unit of the keyed
/// currency buys.
#[derive(Debug, Clone, PartialEq)]
pub struct FallbackRates {
    rates: HashMap<String, f64>,
}

impl FallbackRates {
    /// Table without any entries.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            rates: HashMap::new(),
        }
    }

    /// Add or replace a rate. Non-finite or non-positive rates are ignored.
    #[must_use]
    pub fn with_rate(mut self, currency: &str, rate: f64) -> Self {
        if rate.is_finite() && rate > 0.0 {
            self.rates.insert(currency.trim().to_uppercase(), rate);
        } else {
            log::warn!("ignoring unusable fallback rate {rate} for {currency}");
        }
        self
    }

    /// Rate for `currency`, if configured.
    #[must_use]
    pub fn rate_for(&self, currency: &str) -> Option<f64> {
        self.rates.get(&currency.trim().to_uppercase()).copied()
    }
}

impl Default for FallbackRates {
    fn default() -> Self {
        [
            ("EUR", 1.0),
            ("GBP", 1.17),
            ("USD", 0.92),
            ("CHF", 1.04),
            ("CAD", 0.68),
            ("AUD", 0.61),
            ("JPY", 0.0062),
            ("SGD", 0.69),
        ]
        .into_iter()
        .fold(Self::empty(), |table, (currency, rate)| {
            table.with_rate(currency, rate)
        })
    }
}

/// Every table the enrichment pipeline consults.
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceData {
    /// Host city lookup.
    pub cities: CityDirectory,
    /// Home airport lookup.
    pub airports: AirportDirectory,
    /// Static exchange rates.
    pub fallback_rates: FallbackRates,
    /// Currency budgets are converted into.
    pub base_currency: String,
}

impl ReferenceData {
    /// Replace the city directory.
    #[must_use]
    pub fn with_cities(mut self, cities: CityDirectory) -> Self {
        self.cities = cities;
        self
    }

    /// Replace the airport directory.
    #[must_use]
    pub fn with_airports(mut self, airports: AirportDirectory) -> Self {
        self.airports = airports;
        self
    }

    /// Replace the fallback rate table.
    #[must_use]
    pub fn with_fallback_rates(mut self, rates: FallbackRates) -> Self {
        self.fallback_rates = rates;
        self
    }
}

impl Default for ReferenceData {
    fn default() -> Self {
        Self {
            cities: CityDirectory::default(),
            airports: AirportDirectory::default(),
            fallback_rates: FallbackRates::default(),
            base_currency: BASE_CURRENCY.to_owned(),
        }
    }
}

fn normalise_key(name: &str) -> String {
    name.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Milan", "IT")]
    #[case("nagoya", "JP")]
    #[case(" BARCELONA ", "ES")]
    fn default_directory_covers_sample_cities(#[case] city: &str, #[case] country: &str) {
        let cities = CityDirectory::default();
        let metadata = cities.lookup(city).expect("city should be known");
        assert_eq!(metadata.country_code, country);
    }

    #[test]
    fn coordinates_store_longitude_as_x() {
        let milan = CityMetadata::new(45.4642, 9.19, "IT");
        assert_eq!(milan.location.x, 9.19);
        assert_eq!(milan.latitude(), 45.4642);
        assert_eq!(milan.longitude(), 9.19);
    }

    #[rstest]
    #[case("lhr", Some("GBP"))]
    #[case("NRT", Some("JPY"))]
    #[case("XXX", None)]
    fn airports_map_to_currencies(#[case] code: &str, #[case] expected: Option<&str>) {
        assert_eq!(AirportDirectory::default().currency_for(code), expected);
    }

    #[rstest]
    #[case(0.0)]
    #[case(-1.0)]
    #[case(f64::NAN)]
    fn unusable_fallback_rates_are_ignored(#[case] rate: f64) {
        let rates = FallbackRates::empty().with_rate("GBP", rate);
        assert_eq!(rates.rate_for("GBP"), None);
    }

    #[test]
    fn default_reference_data_uses_euro_base() {
        let data = ReferenceData::default();
        assert_eq!(data.base_currency, BASE_CURRENCY);
        assert_eq!(data.fallback_rates.rate_for("eur"), Some(1.0));
    }
}
