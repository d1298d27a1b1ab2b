//! Lazily loaded reference datasets from the `data/` directory.
//!
//! Each collection is read on first access and kept for the lifetime of
//! the cache; nothing is ever reloaded. A dataset file holds either a JSON
//! array of records or an object mapping identifier to record.

use super::search::{Matcher, SearchOptions};
use super::types::{City, Continent, Country, GeonamesError, Result, UsCounty, UsState};
use super::us_states::us_states;
use serde::de::{DeserializeOwned, Error as _};
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::hash::Hash;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use tracing::debug;

pub const DEFAULT_MIN_CITY_POPULATION: u32 = 15000;

/// Where and what to load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheConfig {
    /// Selects `cities<N>.json`; must match a shipped variant.
    pub min_city_population: u32,
    pub data_dir: PathBuf,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            min_city_population: DEFAULT_MIN_CITY_POPULATION,
            data_dir: Self::bundled_data_dir(),
        }
    }
}

impl CacheConfig {
    /// The `data/` directory shipped with the crate.
    pub fn bundled_data_dir() -> PathBuf {
        PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/data"))
    }

    pub fn with_min_city_population(mut self, min_population: u32) -> Self {
        self.min_city_population = min_population;
        self
    }

    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = dir.into();
        self
    }

    fn city_file(&self) -> String {
        format!("cities{}.json", self.min_city_population)
    }
}

/// The two accepted file shapes.
enum Dataset<T> {
    Records(Vec<T>),
    Keyed(BTreeMap<String, T>),
}

impl<T> Dataset<T> {
    /// Records keyed by `key`. A keyed file must agree with the record's own id.
    fn into_keyed(self, key: impl Fn(&T) -> String) -> serde_json::Result<HashMap<String, T>> {
        match self {
            Self::Records(records) => Ok(records.into_iter().map(|r| (key(&r), r)).collect()),
            Self::Keyed(map) => map
                .into_iter()
                .map(|(file_key, r)| match key(&r) {
                    id if id == file_key => Ok((id, r)),
                    id => Err(serde_json::Error::custom(format!(
                        "entry {file_key:?} holds the record for {id:?}"
                    ))),
                })
                .collect(),
        }
    }

    fn into_records(self) -> Vec<T> {
        match self {
            Self::Records(records) => records,
            Self::Keyed(map) => map.into_values().collect(),
        }
    }
}

fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => GeonamesError::DatasetNotFound { path: path.to_path_buf() },
        _ => GeonamesError::Io { path: path.to_path_buf(), source },
    })
}

fn read_dataset<T: DeserializeOwned>(path: &Path) -> Result<Dataset<T>> {
    let data = read_file(path)?;
    let parse_err = |source: serde_json::Error| GeonamesError::Parse { path: path.to_path_buf(), source };

    let dataset = match serde_json::from_str::<Value>(&data).map_err(parse_err)? {
        v @ Value::Array(_) => Dataset::Records(serde_json::from_value(v).map_err(parse_err)?),
        v @ Value::Object(_) => Dataset::Keyed(serde_json::from_value(v).map_err(parse_err)?),
        _ => {
            return Err(parse_err(serde_json::Error::custom(
                "expected an array of records or an object of records",
            )))
        }
    };
    Ok(dataset)
}

fn get_or_load<T>(cell: &OnceLock<T>, load: impl FnOnce() -> Result<T>) -> Result<&T> {
    if let Some(v) = cell.get() {
        return Ok(v);
    }
    // Racing first accesses may both load; only one result is published.
    let v = load()?;
    Ok(cell.get_or_init(|| v))
}

/// Re-key records by one of their fields.
///
/// Keys are expected to be unique. When they are not, the record seen last
/// in iteration order silently replaces earlier ones.
pub fn dataset_by_key<'a, T, K, I, F>(records: I, key: F) -> HashMap<K, &'a T>
where
    T: 'a,
    K: Eq + Hash,
    I: IntoIterator<Item = &'a T>,
    F: Fn(&T) -> K,
{
    records.into_iter().map(|r| (key(r), r)).collect()
}

/// Holds every reference collection, each loaded on first use.
pub struct GeonamesCache {
    config: CacheConfig,
    continents: OnceLock<HashMap<String, Continent>>,
    countries: OnceLock<HashMap<String, Country>>,
    cities: OnceLock<HashMap<String, City>>,
    us_counties: OnceLock<Vec<UsCounty>>,
    /// City name → ids, ids in ascending numeric order.
    cities_by_names: OnceLock<HashMap<String, Vec<String>>>,
}

impl Default for GeonamesCache {
    fn default() -> Self {
        Self::with_config(CacheConfig::default())
    }
}

impl GeonamesCache {
    /// Cache over the bundled data, using the city file for `min_city_population`.
    pub fn new(min_city_population: u32) -> Self {
        Self::with_config(CacheConfig::default().with_min_city_population(min_city_population))
    }

    pub fn with_config(config: CacheConfig) -> Self {
        Self {
            config,
            continents: OnceLock::new(),
            countries: OnceLock::new(),
            cities: OnceLock::new(),
            us_counties: OnceLock::new(),
            cities_by_names: OnceLock::new(),
        }
    }

    pub fn min_city_population(&self) -> u32 {
        self.config.min_city_population
    }

    pub fn data_dir(&self) -> &Path {
        &self.config.data_dir
    }

    fn load_keyed<T: DeserializeOwned>(
        &self,
        file: &str,
        key: impl Fn(&T) -> String,
    ) -> Result<HashMap<String, T>> {
        let path = self.config.data_dir.join(file);
        let map = read_dataset(&path)?
            .into_keyed(key)
            .map_err(|source| GeonamesError::Parse { path: path.clone(), source })?;
        debug!(path = %path.display(), records = map.len(), "loaded dataset");
        Ok(map)
    }

    /// Continents keyed by two-letter continent code.
    pub fn get_continents(&self) -> Result<&HashMap<String, Continent>> {
        get_or_load(&self.continents, || {
            self.load_keyed("continents.json", |c: &Continent| c.continent_code.clone())
        })
    }

    /// Countries keyed by ISO 3166-1 alpha-2 code.
    pub fn get_countries(&self) -> Result<&HashMap<String, Country>> {
        get_or_load(&self.countries, || {
            self.load_keyed("countries.json", |c: &Country| c.iso.clone())
        })
    }

    /// US states keyed by two-letter code. Compiled in, never fails.
    pub fn get_us_states(&self) -> &'static HashMap<String, UsState> {
        us_states()
    }

    /// Cities keyed by stringified GeoNames id.
    pub fn get_cities(&self) -> Result<&HashMap<String, City>> {
        get_or_load(&self.cities, || {
            self.load_keyed(&self.config.city_file(), |c: &City| c.geonameid.to_string())
                .map_err(|e| match e {
                    GeonamesError::DatasetNotFound { path } => GeonamesError::CityDatasetNotFound {
                        min_population: self.config.min_city_population,
                        path,
                    },
                    other => other,
                })
        })
    }

    pub fn get_us_counties(&self) -> Result<&[UsCounty]> {
        let counties = get_or_load(&self.us_counties, || {
            let path = self.config.data_dir.join("us_counties.json");
            let counties = read_dataset(&path)?.into_records();
            debug!(path = %path.display(), records = counties.len(), "loaded dataset");
            Ok(counties)
        })?;
        Ok(counties.as_slice())
    }

    /// Counties belonging to the state with the given two-letter code.
    pub fn get_us_counties_by_state(&self, state: &str) -> Result<Vec<&UsCounty>> {
        Ok(self.get_us_counties()?.iter().filter(|c| c.state == state).collect())
    }

    /// Countries keyed by name. Built on every call.
    pub fn get_countries_by_names(&self) -> Result<HashMap<String, &Country>> {
        Ok(dataset_by_key(self.get_countries()?.values(), |c| c.name.clone()))
    }

    /// US states keyed by name. Built on every call.
    pub fn get_us_states_by_names(&self) -> HashMap<String, &'static UsState> {
        dataset_by_key(self.get_us_states().values(), |s| s.name.clone())
    }

    fn cities_by_names(&self) -> Result<&HashMap<String, Vec<String>>> {
        let cities = self.get_cities()?;
        get_or_load(&self.cities_by_names, || {
            let mut by_name: HashMap<String, Vec<(u64, String)>> = HashMap::new();
            for (id, city) in cities {
                by_name
                    .entry(city.name.clone())
                    .or_default()
                    .push((city.geonameid, id.clone()));
            }
            debug!(names = by_name.len(), "indexed cities by name");
            Ok(by_name
                .into_iter()
                .map(|(name, mut ids)| {
                    ids.sort();
                    (name, ids.into_iter().map(|(_, id)| id).collect())
                })
                .collect())
        })
    }

    /// All cities named exactly `name`, as `(id, city)` pairs.
    ///
    /// City names are not unique, so this is a list rather than a lookup.
    pub fn get_cities_by_name(&self, name: &str) -> Result<Vec<(&str, &City)>> {
        let cities = self.get_cities()?;
        let Some(ids) = self.cities_by_names()?.get(name) else {
            return Ok(Vec::new());
        };
        Ok(ids
            .iter()
            .filter_map(|id| cities.get_key_value(id.as_str()))
            .map(|(id, city)| (id.as_str(), city))
            .collect())
    }

    /// Scan every city and return those whose `opts.field` matches `query`.
    ///
    /// Results are ordered by GeoNames id.
    pub fn search_cities(&self, query: &str, opts: SearchOptions) -> Result<Vec<&City>> {
        let matcher = Matcher::new(query, opts);
        let mut found: Vec<&City> = self
            .get_cities()?
            .values()
            .filter(|c| matcher.matches(c))
            .collect();
        found.sort_by_key(|c| c.geonameid);
        debug!(query, field = %opts.field, matches = found.len(), "searched cities");
        Ok(found)
    }

    /// Population thresholds that have a `cities<N>.json` file, ascending.
    pub fn available_city_populations(&self) -> Result<Vec<u32>> {
        let dir = &self.config.data_dir;
        let entries = fs::read_dir(dir).map_err(|source| GeonamesError::Io {
            path: dir.clone(),
            source,
        })?;
        let mut found: Vec<u32> = entries
            .filter_map(|e| e.ok())
            .filter_map(|e| {
                let name = e.file_name().into_string().ok()?;
                let digits = name.strip_prefix("cities")?.strip_suffix(".json")?;
                if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
                    return None;
                }
                digits.parse().ok()
            })
            .collect();
        found.sort_unstable();
        Ok(found)
    }
}
