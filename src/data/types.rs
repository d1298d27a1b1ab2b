//! Core record types for the reference datasets.

use chrono::FixedOffset;
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

/// Dataset errors.
#[derive(Debug, Error)]
pub enum GeonamesError {
    /// The dataset file is absent from the data directory.
    #[error("dataset file not found: {}", path.display())]
    DatasetNotFound { path: PathBuf },

    /// No city file exists for the configured population threshold.
    #[error("no city dataset for minimum population {min_population}: {} not found", path.display())]
    CityDatasetNotFound { min_population: u32, path: PathBuf },

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed JSON, or a record missing a required field.
    #[error("malformed dataset {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A field name that no record of the given kind carries.
    #[error("unknown {kind} field '{name}'")]
    UnknownField { kind: &'static str, name: String },
}

pub type Result<T> = std::result::Result<T, GeonamesError>;

// ─── Continents ──────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeZone {
    pub gmt_offset: i32,
    pub time_zone_id: String,
    pub dst_offset: i32,
}

impl TimeZone {
    /// Standard offset from UTC as a chrono offset.
    pub fn utc_offset(&self) -> Option<FixedOffset> {
        FixedOffset::east_opt(self.gmt_offset * 3600)
    }

    pub fn tz(&self) -> Option<Tz> {
        self.time_zone_id.parse().ok()
    }
}

/// Bounding box in decimal degrees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BBox {
    pub east: f64,
    pub south: f64,
    pub north: f64,
    pub west: f64,
    #[serde(default)]
    pub accuracy_level: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContinentAlternateName {
    pub name: String,
    pub lang: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_preferred_name: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_short_name: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_colloquial: Option<bool>,
}

/// A continent record as exported by the GeoNames web service.
///
/// Coordinates are kept as strings because that is how GeoNames ships them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Continent {
    pub continent_code: String,
    pub geoname_id: u64,
    pub name: String,
    pub ascii_name: String,
    pub toponym_name: String,
    pub lat: String,
    pub lng: String,
    pub population: u64,
    pub timezone: TimeZone,
    pub bbox: BBox,
    #[serde(default)]
    pub alternate_names: Vec<ContinentAlternateName>,
    #[serde(rename = "wikipediaURL", default)]
    pub wikipedia_url: String,
    #[serde(default)]
    pub fcl: String,
    #[serde(default)]
    pub fcode: String,
    #[serde(default)]
    pub fcl_name: String,
    #[serde(default)]
    pub fcode_name: String,
    #[serde(default)]
    pub astergdem: i32,
    #[serde(default)]
    pub srtm3: i32,
    #[serde(default)]
    pub admin_name1: String,
    #[serde(default)]
    pub admin_name2: String,
    #[serde(default)]
    pub admin_name3: String,
    #[serde(default)]
    pub admin_name4: String,
    #[serde(default)]
    pub admin_name5: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cc2: Option<String>,
}

impl Continent {
    /// Alternate names tagged with the given language.
    pub fn names_in(&self, lang: &str) -> Vec<&str> {
        self.alternate_names
            .iter()
            .filter(|n| n.lang == lang)
            .map(|n| n.name.as_str())
            .collect()
    }
}

// ─── Countries ───────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Country {
    pub geonameid: u64,
    pub name: String,
    /// ISO 3166-1 alpha-2 code (e.g. "ES"). Dataset key.
    pub iso: String,
    /// ISO 3166-1 alpha-3 code (e.g. "ESP").
    pub iso3: String,
    pub isonumeric: u32,
    pub fips: String,
    pub continentcode: String,
    pub capital: String,
    pub areakm2: f64,
    pub population: u64,
    pub tld: String,
    pub currencycode: String,
    pub currencyname: String,
    pub phone: String,
    pub postalcoderegex: String,
    pub languages: String,
    pub neighbours: String,
}

impl Country {
    /// ISO codes of bordering countries.
    pub fn neighbour_codes(&self) -> Vec<&str> {
        split_list(&self.neighbours)
    }

    pub fn language_codes(&self) -> Vec<&str> {
        split_list(&self.languages)
    }
}

fn split_list(s: &str) -> Vec<&str> {
    s.split(',').map(str::trim).filter(|p| !p.is_empty()).collect()
}

// ─── US states and counties ──────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsState {
    pub geonameid: u64,
    pub name: String,
    pub code: String,
    pub fips: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsCounty {
    pub name: String,
    pub fips: String,
    /// Two-letter code of the owning state.
    pub state: String,
}

// ─── Cities ──────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct City {
    pub geonameid: u64,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub countrycode: String,
    pub population: u64,
    pub timezone: String,
    #[serde(default)]
    pub admin1code: String,
    #[serde(default)]
    pub alternatenames: Vec<String>,
}

impl City {
    /// Parsed IANA timezone, `None` if chrono-tz does not know the id.
    pub fn tz(&self) -> Option<Tz> {
        self.timezone.parse().ok()
    }
}
