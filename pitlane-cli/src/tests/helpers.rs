//! Test helpers for writing catalog fixtures and stub providers.

use camino::{Utf8Path, Utf8PathBuf};
use pitlane_core::LiveDataProvider;
use pitlane_core::test_support::StubLiveData;
use std::fs;
use tempfile::TempDir;

use crate::CliError;
use crate::recommend::{LiveDataBuilder, RecommendConfig};

/// A single Monza package in catalog JSON form.
pub(super) const MONZA_CATALOG: &str = r#"[
    {
        "name": "Monza Long Weekend",
        "country": "Italy",
        "city": "Milan",
        "race_date": "2026-09-06",
        "holiday_days": 3,
        "avg_temp_c": 24,
        "rain_probability": 0.28,
        "flight_cost": 260,
        "hotel_cost": 420,
        "local_cost": 230,
        "hotel_rating": 4.4,
        "flight_hours": 2.1,
        "transfer_minutes": 55,
        "f1_experience_points": 88
    }
]"#;

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    fs::write(path, contents).expect("write fixture file");
}

pub(super) fn utf8_tempdir() -> (TempDir, Utf8PathBuf) {
    let tmp = TempDir::new().expect("tempdir");
    let root = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf-8 workspace");
    (tmp, root)
}

/// Hands out clones of a stub so call counters stay shared with the test.
#[derive(Debug)]
pub(super) struct StubLiveDataBuilder {
    pub(super) stub: StubLiveData,
}

impl LiveDataBuilder for StubLiveDataBuilder {
    fn build(&self, _config: &RecommendConfig) -> Result<Box<dyn LiveDataProvider>, CliError> {
        Ok(Box::new(self.stub.clone()))
    }
}
