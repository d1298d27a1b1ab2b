//! Reference dataset subsystem.
//!
//! Provides the record types, the lazily-loading [`GeonamesCache`], the
//! static US state table and the linear city search.

pub mod cache;
pub mod fields;
pub mod search;
pub mod types;
pub mod us_states;

pub use cache::{dataset_by_key, CacheConfig, GeonamesCache};
pub use fields::{CountryField, FieldValue};
pub use search::{CitySearchField, FieldValues, SearchOptions};
pub use types::{
    BBox, City, Continent, ContinentAlternateName, Country, GeonamesError, Result, TimeZone,
    UsCounty, UsState,
};
