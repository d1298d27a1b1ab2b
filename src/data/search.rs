//! Linear city search over a single named field.
//!
//! Each searchable field is declared single- or multi-valued up front, so
//! matching never has to inspect the stored value's shape.

use super::types::{City, GeonamesError};
use std::fmt;
use std::str::FromStr;

/// City attributes that can be searched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CitySearchField {
    Name,
    #[default]
    AlternateNames,
    CountryCode,
    Timezone,
    Admin1Code,
}

/// The value(s) a search field holds on one record.
#[derive(Debug, Clone, Copy)]
pub enum FieldValues<'a> {
    Single(&'a str),
    Multi(&'a [String]),
}

impl CitySearchField {
    pub const ALL: [CitySearchField; 5] = [
        Self::Name,
        Self::AlternateNames,
        Self::CountryCode,
        Self::Timezone,
        Self::Admin1Code,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::AlternateNames => "alternatenames",
            Self::CountryCode => "countrycode",
            Self::Timezone => "timezone",
            Self::Admin1Code => "admin1code",
        }
    }

    pub fn values(self, city: &City) -> FieldValues<'_> {
        match self {
            Self::Name => FieldValues::Single(&city.name),
            Self::AlternateNames => FieldValues::Multi(&city.alternatenames),
            Self::CountryCode => FieldValues::Single(&city.countrycode),
            Self::Timezone => FieldValues::Single(&city.timezone),
            Self::Admin1Code => FieldValues::Single(&city.admin1code),
        }
    }
}

impl fmt::Display for CitySearchField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for CitySearchField {
    type Err = GeonamesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|f| f.key() == s)
            .ok_or_else(|| GeonamesError::UnknownField {
                kind: "city search",
                name: s.to_string(),
            })
    }
}

/// How `search_cities` compares the query with field values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOptions {
    pub field: CitySearchField,
    pub case_sensitive: bool,
    /// Substring match when true, equality otherwise.
    pub contains: bool,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            field: CitySearchField::AlternateNames,
            case_sensitive: false,
            contains: true,
        }
    }
}

impl SearchOptions {
    pub fn field(mut self, field: CitySearchField) -> Self {
        self.field = field;
        self
    }

    pub fn case_sensitive(mut self, yes: bool) -> Self {
        self.case_sensitive = yes;
        self
    }

    pub fn contains(mut self, yes: bool) -> Self {
        self.contains = yes;
        self
    }

    pub fn exact(self) -> Self {
        self.contains(false)
    }
}

/// Caseless form of a string: lowercase with `ß` expanded.
pub(crate) fn fold(s: &str) -> String {
    s.to_lowercase().replace('ß', "ss")
}

/// A query prepared once for a whole scan.
pub(crate) struct Matcher {
    query: String,
    opts: SearchOptions,
}

impl Matcher {
    pub(crate) fn new(query: &str, opts: SearchOptions) -> Self {
        let query = if opts.case_sensitive { query.to_string() } else { fold(query) };
        Self { query, opts }
    }

    fn matches_value(&self, value: &str) -> bool {
        match (self.opts.contains, self.opts.case_sensitive) {
            (true, true) => value.contains(&self.query),
            (true, false) => fold(value).contains(&self.query),
            (false, true) => value == self.query,
            (false, false) => fold(value) == self.query,
        }
    }

    pub(crate) fn matches(&self, city: &City) -> bool {
        match self.opts.field.values(city) {
            FieldValues::Single(v) => self.matches_value(v),
            FieldValues::Multi(vs) => vs.iter().any(|v| self.matches_value(v)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn city(name: &str, alts: &[&str]) -> City {
        City {
            geonameid: 1,
            name: name.to_string(),
            latitude: 0.0,
            longitude: 0.0,
            countrycode: "DE".into(),
            population: 20000,
            timezone: "Europe/Berlin".into(),
            admin1code: "02".into(),
            alternatenames: alts.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_fold() {
        assert_eq!(fold("Straße"), "strasse");
        assert_eq!(fold("LONDON"), "london");
        assert_eq!(fold("Zürich"), "zürich");
    }

    #[test]
    fn test_contains_case_insensitive() {
        let m = Matcher::new("LOND", SearchOptions::default().field(CitySearchField::Name));
        assert!(m.matches(&city("East London", &[])));
        assert!(!m.matches(&city("Paris", &[])));
    }

    #[test]
    fn test_contains_case_sensitive() {
        let opts = SearchOptions::default().field(CitySearchField::Name).case_sensitive(true);
        let m = Matcher::new("Lon", opts);
        assert!(m.matches(&city("London", &[])));
        assert!(!m.matches(&city("Barcelona", &[])));
    }

    #[test]
    fn test_exact_case_insensitive() {
        let opts = SearchOptions::default().field(CitySearchField::Name).exact();
        let m = Matcher::new("london", opts);
        assert!(m.matches(&city("LONDON", &[])));
        assert!(!m.matches(&city("East London", &[])));
    }

    #[test]
    fn test_exact_case_sensitive() {
        let opts = SearchOptions::default()
            .field(CitySearchField::Name)
            .exact()
            .case_sensitive(true);
        let m = Matcher::new("London", opts);
        assert!(m.matches(&city("London", &[])));
        assert!(!m.matches(&city("london", &[])));
    }

    #[test]
    fn test_multi_valued_field() {
        let munich = city("Munich", &["München", "Monaco di Baviera"]);

        let m = Matcher::new("münchen", SearchOptions::default().exact());
        assert!(m.matches(&munich));

        let m = Matcher::new("münchen", SearchOptions::default().exact().case_sensitive(true));
        assert!(!m.matches(&munich));

        let m = Matcher::new("Baviera", SearchOptions::default().case_sensitive(true));
        assert!(m.matches(&munich));

        // The default field is alternatenames; the record name is not consulted.
        let m = Matcher::new("munich", SearchOptions::default());
        assert!(!m.matches(&munich));
    }

    #[test]
    fn test_empty_list_never_matches() {
        let m = Matcher::new("", SearchOptions::default());
        assert!(!m.matches(&city("Hallstatt", &[])));
    }

    #[test]
    fn test_parse_field() {
        assert_eq!("alternatenames".parse::<CitySearchField>().unwrap(), CitySearchField::AlternateNames);
        assert_eq!("admin1code".parse::<CitySearchField>().unwrap(), CitySearchField::Admin1Code);
        assert!(matches!(
            "population".parse::<CitySearchField>(),
            Err(GeonamesError::UnknownField { .. })
        ));
    }
}
