//! Cached lookups over bundled GeoNames reference data.
//!
//! The [`data`] module loads continents, countries, US counties and cities
//! from the JSON files under `data/` on first use and keeps them for the
//! lifetime of a [`GeonamesCache`]. The [`mappers`] module builds one-shot
//! translation functions between country attributes.

pub mod data;
pub mod logging;
pub mod mappers;

pub use data::{
    dataset_by_key, CacheConfig, City, CitySearchField, Continent, Country, CountryField,
    FieldValue, GeonamesCache, GeonamesError, Result, SearchOptions, UsCounty, UsState,
};
