//! Country name aliases.
//!
//! Maps historical, formal and statistical-agency spellings to the name
//! used in `countries.json`. Lookups are exact; unmapped names pass through.

use std::collections::HashMap;
use std::sync::OnceLock;

const COUNTRY_NAME_ALIASES: &[(&str, &str)] = &[
    ("Bahamas, The", "Bahamas"),
    ("Bolivia (Plurinational State of)", "Bolivia"),
    ("Bolivia, Plurinational State of", "Bolivia"),
    ("Bonaire, Sint Eustatius and Saba", "Bonaire, Saint Eustatius and Saba"),
    ("Bosnia & Herzegovina", "Bosnia and Herzegovina"),
    ("Bosnia-Herzegovina", "Bosnia and Herzegovina"),
    ("Brunei Darussalam", "Brunei"),
    ("Burma", "Myanmar"),
    ("Cape Verde", "Cabo Verde"),
    ("Cocos (Keeling) Islands", "Cocos Islands"),
    ("Congo", "Republic of the Congo"),
    ("Congo, Dem. Rep.", "Democratic Republic of the Congo"),
    ("Congo, Democratic Republic of the", "Democratic Republic of the Congo"),
    ("Congo, Rep.", "Republic of the Congo"),
    ("Congo-Brazzaville", "Republic of the Congo"),
    ("Congo-Kinshasa", "Democratic Republic of the Congo"),
    ("Cote d'Ivoire", "Ivory Coast"),
    ("Curaçao", "Curacao"),
    ("Czech Republic", "Czechia"),
    ("Côte d'Ivoire", "Ivory Coast"),
    ("Democratic People's Republic of Korea", "North Korea"),
    ("Democratic Republic of Congo", "Democratic Republic of the Congo"),
    ("East Timor", "Timor Leste"),
    ("Egypt, Arab Rep.", "Egypt"),
    ("Faeroe Islands", "Faroe Islands"),
    ("Falkland Islands (Malvinas)", "Falkland Islands"),
    ("Gambia, The", "Gambia"),
    ("Great Britain", "United Kingdom"),
    ("Holland", "Netherlands"),
    ("Holy See", "Vatican"),
    ("Holy See (Vatican City State)", "Vatican"),
    ("Hong Kong SAR, China", "Hong Kong"),
    ("Hong Kong, China", "Hong Kong"),
    ("Iran (Islamic Republic of)", "Iran"),
    ("Iran, Islamic Rep.", "Iran"),
    ("Iran, Islamic Republic of", "Iran"),
    ("Korea, Dem. People's Rep.", "North Korea"),
    ("Korea, Dem. Rep.", "North Korea"),
    ("Korea, Democratic People's Republic of", "North Korea"),
    ("Korea, Rep.", "South Korea"),
    ("Korea, Republic of", "South Korea"),
    ("Kyrgyz Republic", "Kyrgyzstan"),
    ("Lao PDR", "Laos"),
    ("Lao People's Democratic Republic", "Laos"),
    ("Libyan Arab Jamahiriya", "Libya"),
    ("Macao SAR, China", "Macao"),
    ("Macau", "Macao"),
    ("Macedonia", "North Macedonia"),
    ("Macedonia, FYR", "North Macedonia"),
    ("Micronesia (Federated States of)", "Micronesia"),
    ("Micronesia, Fed. Sts.", "Micronesia"),
    ("Moldova, Republic of", "Moldova"),
    ("Palestine", "Palestinian Territory"),
    ("Palestine, State of", "Palestinian Territory"),
    ("Persia", "Iran"),
    ("Republic of Korea", "South Korea"),
    ("Republic of Moldova", "Moldova"),
    ("Russian Federation", "Russia"),
    ("Réunion", "Reunion"),
    ("Saint Barthélemy", "Saint Barthelemy"),
    ("Saint Martin (French part)", "Saint Martin"),
    ("Sint Maarten (Dutch part)", "Sint Maarten"),
    ("Slovak Republic", "Slovakia"),
    ("Soviet Union", "Russia"),
    ("St. Kitts and Nevis", "Saint Kitts and Nevis"),
    ("St. Lucia", "Saint Lucia"),
    ("St. Vincent and the Grenadines", "Saint Vincent and the Grenadines"),
    ("Swaziland", "Eswatini"),
    ("Syrian Arab Republic", "Syria"),
    ("São Tomé and Príncipe", "Sao Tome and Principe"),
    ("Taiwan, China", "Taiwan"),
    ("Taiwan, Province of China", "Taiwan"),
    ("Tanzania, United Republic of", "Tanzania"),
    ("The Bahamas", "Bahamas"),
    ("The former Yugoslav Republic of Macedonia", "North Macedonia"),
    ("The Gambia", "Gambia"),
    ("The Netherlands", "Netherlands"),
    ("Timor-Leste", "Timor Leste"),
    ("Turkiye", "Turkey"),
    ("Türkiye", "Turkey"),
    ("UK", "United Kingdom"),
    ("United Kingdom of Great Britain and Northern Ireland", "United Kingdom"),
    ("United Republic of Tanzania", "Tanzania"),
    ("United States of America", "United States"),
    ("USA", "United States"),
    ("Vatican City", "Vatican"),
    ("Venezuela (Bolivarian Republic of)", "Venezuela"),
    ("Venezuela, RB", "Venezuela"),
    ("Viet Nam", "Vietnam"),
    ("Virgin Islands (U.S.)", "U.S. Virgin Islands"),
    ("Virgin Islands, British", "British Virgin Islands"),
    ("West Bank and Gaza", "Palestinian Territory"),
    ("Yemen, Rep.", "Yemen"),
    ("Zaire", "Democratic Republic of the Congo"),
    ("Åland", "Aland Islands"),
    ("Åland Islands", "Aland Islands"),
];

pub fn country_name_aliases() -> &'static HashMap<&'static str, &'static str> {
    static ALIASES: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();
    ALIASES.get_or_init(|| COUNTRY_NAME_ALIASES.iter().copied().collect())
}

/// The canonical dataset name for `name`, or `name` itself.
pub fn canonical_country_name(name: &str) -> &str {
    country_name_aliases().get(name).copied().unwrap_or(name)
}
