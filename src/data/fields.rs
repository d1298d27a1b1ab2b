//! Named country attributes, used for re-keying and by the mappers.

use super::types::{Country, GeonamesError};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// A country attribute value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Integer(i64),
    Float(f64),
}

impl FieldValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => write!(f, "{}", s),
            Self::Integer(n) => write!(f, "{}", n),
            Self::Float(x) => write!(f, "{}", x),
        }
    }
}

impl PartialEq<&str> for FieldValue {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == Some(*other)
    }
}

/// Every attribute of a [`Country`] record, named as in the dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CountryField {
    GeonameId,
    Name,
    Iso,
    Iso3,
    IsoNumeric,
    Fips,
    ContinentCode,
    Capital,
    AreaKm2,
    Population,
    Tld,
    CurrencyCode,
    CurrencyName,
    Phone,
    PostalCodeRegex,
    Languages,
    Neighbours,
}

impl CountryField {
    pub const ALL: [CountryField; 17] = [
        Self::GeonameId,
        Self::Name,
        Self::Iso,
        Self::Iso3,
        Self::IsoNumeric,
        Self::Fips,
        Self::ContinentCode,
        Self::Capital,
        Self::AreaKm2,
        Self::Population,
        Self::Tld,
        Self::CurrencyCode,
        Self::CurrencyName,
        Self::Phone,
        Self::PostalCodeRegex,
        Self::Languages,
        Self::Neighbours,
    ];

    /// The key used for this field in `countries.json`.
    pub fn key(self) -> &'static str {
        match self {
            Self::GeonameId => "geonameid",
            Self::Name => "name",
            Self::Iso => "iso",
            Self::Iso3 => "iso3",
            Self::IsoNumeric => "isonumeric",
            Self::Fips => "fips",
            Self::ContinentCode => "continentcode",
            Self::Capital => "capital",
            Self::AreaKm2 => "areakm2",
            Self::Population => "population",
            Self::Tld => "tld",
            Self::CurrencyCode => "currencycode",
            Self::CurrencyName => "currencyname",
            Self::Phone => "phone",
            Self::PostalCodeRegex => "postalcoderegex",
            Self::Languages => "languages",
            Self::Neighbours => "neighbours",
        }
    }

    pub fn value(self, c: &Country) -> FieldValue {
        let text = |s: &str| FieldValue::Text(s.to_string());
        match self {
            Self::GeonameId => FieldValue::Integer(c.geonameid as i64),
            Self::Name => text(&c.name),
            Self::Iso => text(&c.iso),
            Self::Iso3 => text(&c.iso3),
            Self::IsoNumeric => FieldValue::Integer(c.isonumeric as i64),
            Self::Fips => text(&c.fips),
            Self::ContinentCode => text(&c.continentcode),
            Self::Capital => text(&c.capital),
            Self::AreaKm2 => FieldValue::Float(c.areakm2),
            Self::Population => FieldValue::Integer(c.population as i64),
            Self::Tld => text(&c.tld),
            Self::CurrencyCode => text(&c.currencycode),
            Self::CurrencyName => text(&c.currencyname),
            Self::Phone => text(&c.phone),
            Self::PostalCodeRegex => text(&c.postalcoderegex),
            Self::Languages => text(&c.languages),
            Self::Neighbours => text(&c.neighbours),
        }
    }
}

impl fmt::Display for CountryField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for CountryField {
    type Err = GeonamesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|f| f.key() == s)
            .ok_or_else(|| GeonamesError::UnknownField {
                kind: "country",
                name: s.to_string(),
            })
    }
}
