use clap::{Parser, Subcommand};
use geonamescache::data::cache::DEFAULT_MIN_CITY_POPULATION;
use geonamescache::logging::init_logging;
use geonamescache::{mappers, CacheConfig, CitySearchField, CountryField, GeonamesCache, GeonamesError};
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// geonames: query the bundled GeoNames reference data
///
/// Every command prints pretty JSON on stdout.
///
/// Examples:
///   geonames countries
///   geonames cities --name Springfield
///   geonames search london --field name --exact
///   geonames --min-population 1000 search Lon --field name --case-sensitive
///   geonames map "Burma" --to iso3
#[derive(Parser)]
#[command(name = "geonames", version, about, long_about = None)]
struct Cli {
    /// Directory holding the dataset files. Defaults to the bundled data.
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Minimum city population; selects cities<N>.json.
    #[arg(long, global = true, default_value_t = DEFAULT_MIN_CITY_POPULATION)]
    min_population: u32,

    /// Log dataset loading to stderr.
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Continents keyed by continent code.
    Continents,
    /// Countries keyed by ISO code.
    Countries {
        /// Key by country name instead.
        #[arg(long)]
        by_name: bool,
    },
    /// US states keyed by code.
    States {
        /// Key by state name instead.
        #[arg(long)]
        by_name: bool,
    },
    /// US counties, optionally for one state.
    Counties {
        /// Two-letter state code (e.g. IL).
        #[arg(long)]
        state: Option<String>,
    },
    /// Cities with exactly this name.
    Cities {
        #[arg(long)]
        name: String,
    },
    /// Search cities by one field.
    Search {
        query: String,
        /// name, alternatenames, countrycode, timezone or admin1code.
        #[arg(long, default_value = "alternatenames", value_parser = parse_search_field)]
        field: CitySearchField,
        #[arg(long)]
        case_sensitive: bool,
        /// Match the whole value instead of a substring.
        #[arg(long)]
        exact: bool,
    },
    /// Translate a country attribute (prints null when there is no match).
    Map {
        input: String,
        #[arg(long, default_value = "name", value_parser = parse_country_field)]
        from: CountryField,
        #[arg(long, default_value = "iso", value_parser = parse_country_field)]
        to: CountryField,
    },
    /// City population thresholds available in the data directory.
    Populations,
}

fn parse_search_field(s: &str) -> Result<CitySearchField, String> {
    s.parse().map_err(|e: GeonamesError| e.to_string())
}

fn parse_country_field(s: &str) -> Result<CountryField, String> {
    s.parse().map_err(|e: GeonamesError| e.to_string())
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut config = CacheConfig::default().with_min_city_population(cli.min_population);
    if let Some(dir) = cli.data_dir {
        config = config.with_data_dir(dir);
    }
    let cache = GeonamesCache::with_config(config);

    if let Err(e) = run(&cache, cli.command) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cache: &GeonamesCache, command: Command) -> Result<(), GeonamesError> {
    match command {
        Command::Continents => print_json(&sorted(cache.get_continents()?)),
        Command::Countries { by_name: false } => print_json(&sorted(cache.get_countries()?)),
        Command::Countries { by_name: true } => print_json(&sorted(&cache.get_countries_by_names()?)),
        Command::States { by_name: false } => print_json(&sorted(cache.get_us_states())),
        Command::States { by_name: true } => print_json(&sorted(&cache.get_us_states_by_names())),
        Command::Counties { state: Some(code) } => {
            print_json(&cache.get_us_counties_by_state(&code.to_uppercase())?)
        }
        Command::Counties { state: None } => print_json(&cache.get_us_counties()?),
        Command::Cities { name } => {
            let found: Vec<BTreeMap<&str, _>> = cache
                .get_cities_by_name(&name)?
                .into_iter()
                .map(|(id, city)| BTreeMap::from([(id, city)]))
                .collect();
            print_json(&found)
        }
        Command::Search { query, field, case_sensitive, exact } => {
            let opts = geonamescache::SearchOptions::default()
                .field(field)
                .case_sensitive(case_sensitive)
                .contains(!exact);
            print_json(&cache.search_cities(&query, opts)?)
        }
        Command::Map { input, from, to } => {
            let mapper = mappers::country_from_cache(cache, from, to)?;
            print_json(&mapper(&input))
        }
        Command::Populations => print_json(&cache.available_city_populations()?),
    }
    Ok(())
}

/// Stable key order for printing.
fn sorted<'a, V>(map: &'a std::collections::HashMap<String, V>) -> BTreeMap<&'a str, &'a V> {
    map.iter().map(|(k, v)| (k.as_str(), v)).collect()
}

fn print_json<T: Serialize + ?Sized>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Error: cannot serialize output: {}", e);
            std::process::exit(1);
        }
    }
}
