//! Translation functions between country attributes.
//!
//! Build a mapper once, then call it for every row that needs converting:
//!
//! ```no_run
//! use geonamescache::{mappers, CountryField};
//!
//! let to_iso3 = mappers::country(CountryField::Name, CountryField::Iso3)?;
//! assert_eq!(to_iso3("Spain").unwrap(), "ESP");
//! assert!(to_iso3("Atlantis").is_none());
//! # Ok::<(), geonamescache::GeonamesError>(())
//! ```

pub mod aliases;

use crate::data::{dataset_by_key, CountryField, FieldValue, GeonamesCache, Result};
use std::collections::HashMap;
use tracing::debug;

pub use aliases::{canonical_country_name, country_name_aliases};

/// Build a mapper over the bundled country dataset.
///
/// Country names given as input are first normalized through the alias
/// table, so "Burma" and "Myanmar" map to the same record. A miss returns
/// `None`.
pub fn country(
    from: CountryField,
    to: CountryField,
) -> Result<impl Fn(&str) -> Option<FieldValue> + Send + Sync> {
    country_from_cache(&GeonamesCache::default(), from, to)
}

/// Mapper with the classic defaults: country name to ISO alpha-2 code.
pub fn country_default() -> Result<impl Fn(&str) -> Option<FieldValue> + Send + Sync> {
    country(CountryField::Name, CountryField::Iso)
}

/// Like [`country`], reading countries from an existing cache.
///
/// Non-numeric inputs never match numeric `from` fields; numeric fields are
/// matched on their decimal string form ("724").
pub fn country_from_cache(
    cache: &GeonamesCache,
    from: CountryField,
    to: CountryField,
) -> Result<impl Fn(&str) -> Option<FieldValue> + Send + Sync> {
    let dataset = dataset_by_key(cache.get_countries()?.values(), |c| from.value(c).to_string());
    let table: HashMap<String, FieldValue> = dataset
        .into_iter()
        .map(|(key, country)| (key, to.value(country)))
        .collect();
    debug!(%from, %to, entries = table.len(), "built country mapper");

    let normalize = from == CountryField::Name;
    Ok(move |input: &str| {
        let key = if normalize { canonical_country_name(input) } else { input };
        table.get(key).cloned()
    })
}
