//! Command execution handlers

use console::style;
use serde::Serialize;

use crate::analytics::{PokedexAnalytics, PokedexReport, ReportOptions};
use crate::config::Config;
use crate::db::{CrudRepository, DatabaseManager, PokemonRepository, SqlitePokemonRepository};
use crate::error::{PokedexError, Result};
use crate::models::{Pokedex, PokemonRecord};

const RULE: &str = "═══════════════════════════════════════";

/// Execute the report command
pub fn execute_report(args: &super::ReportArgs, config: &Config) -> Result<()> {
    let pokedex = crate::loader::load_pokedex(&config.pokedex_path())?;
    let options = args.query.to_options();
    let report = PokedexAnalytics::new(&pokedex).report(&options)?;

    match args.format {
        super::OutputFormat::Pretty => print_report(&report, &options),
        super::OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        super::OutputFormat::Toml => println!("{}", to_toml(&report)?),
    }

    Ok(())
}

/// Execute the show command
pub fn execute_show(args: &super::ShowArgs, config: &Config) -> Result<()> {
    use crate::search::NameMatcher;

    let pokedex = crate::loader::load_pokedex(&config.pokedex_path())?;
    let analytics = PokedexAnalytics::new(&pokedex);

    let pokemon = match analytics.find_by_name(&args.name) {
        Some(pokemon) => pokemon,
        None => {
            let matcher = NameMatcher::new();
            let suggestions = matcher.find_matches(&args.name, pokedex.names(), 3);
            if !suggestions.is_empty() {
                eprintln!("{}", style("Did you mean:").yellow());
                for (name, _) in suggestions {
                    eprintln!("  {}", name);
                }
            }
            return Err(PokedexError::NotFound(format!("Pokemon '{}'", args.name)));
        }
    };

    match args.format {
        super::OutputFormat::Pretty => println!("{}", pokemon),
        super::OutputFormat::Json => println!("{}", serde_json::to_string_pretty(pokemon)?),
        super::OutputFormat::Toml => println!("{}", to_toml(pokemon)?),
    }

    Ok(())
}

/// Execute the search command
pub fn execute_search(args: &super::SearchArgs, config: &Config) -> Result<()> {
    let pokedex = crate::loader::load_pokedex(&config.pokedex_path())?;
    let results = search_names(&pokedex, &args.query, args.fuzzy, args.limit);

    if results.is_empty() {
        println!("No Pokemon found matching '{}'", args.query);
        return Ok(());
    }

    println!("Search Results for '{}'\n", style(&args.query).cyan());
    for name in &results {
        if let Some(pokemon) = pokedex.pokemon.iter().find(|p| p.name == *name) {
            println!(
                "{} {} - {}",
                style(format!("#{}", pokemon.num)).dim(),
                style(&pokemon.name).bold(),
                pokemon.types.join("/")
            );
        }
    }

    Ok(())
}

/// Names containing `query` (case-insensitive) in Pokedex order, then
/// fuzzy matches best first when `fuzzy` is set, at most `limit` in all
fn search_names<'p>(pokedex: &'p Pokedex, query: &str, fuzzy: bool, limit: usize) -> Vec<&'p str> {
    use crate::search::NameMatcher;

    let needle = query.to_lowercase();
    let mut results: Vec<&str> = pokedex
        .pokemon
        .iter()
        .map(|p| p.name.as_str())
        .filter(|name| name.to_lowercase().contains(&needle))
        .collect();

    if fuzzy {
        let matcher = NameMatcher::new();
        for (name, _) in matcher.find_matches(query, pokedex.names(), limit) {
            if !results.contains(&name) {
                results.push(name);
            }
        }
    }

    results.truncate(limit);
    results
}

/// Execute the export command
pub fn execute_export(args: &super::ExportArgs, config: &Config) -> Result<()> {
    let pokedex = crate::loader::load_pokedex(&config.pokedex_path())?;
    let output = args.output.clone().unwrap_or_else(|| config.export_path());

    let rows = crate::csv_io::export_csv(&pokedex.pokemon, &output)?;
    println!("{} Exported {} Pokemon to {}", style("✓").green(), rows, output.display());

    Ok(())
}

/// Execute the import command
pub fn execute_import(args: &super::ImportArgs, config: &Config) -> Result<()> {
    let input = args.input.clone().unwrap_or_else(|| config.export_path());
    let records = crate::csv_io::read_csv(&input)?;

    print_records(&records, args.format)
}

/// Execute the store command
pub fn execute_store(args: &super::StoreArgs, config: &Config) -> Result<()> {
    let input = args.input.clone().unwrap_or_else(|| config.export_path());
    let records = crate::csv_io::read_csv(&input)?;

    let db = DatabaseManager::open(&config.database)?;
    let stored = store_records(&db, &records)?;
    db.close()?;

    println!(
        "{} Stored {} Pokemon in {}",
        style("✓").green(),
        stored,
        config.database.path.display()
    );
    Ok(())
}

/// Execute the find command
pub fn execute_find(args: &super::FindArgs, config: &Config) -> Result<()> {
    let db = DatabaseManager::connect(&config.database)?;
    let found = SqlitePokemonRepository::new(&db).find_by_name(&args.name)?;

    if found.is_empty() && args.format == super::OutputFormat::Pretty {
        println!("No stored Pokemon matching '{}'", args.name);
    } else {
        print_records(&found, args.format)?;
    }

    db.close()
}

/// Execute the run command: every step in sequence
pub fn execute_run(args: &super::RunArgs, config: &Config) -> Result<()> {
    let pokedex = crate::loader::load_pokedex(&config.pokedex_path())?;
    let options = args.query.to_options();

    let report = PokedexAnalytics::new(&pokedex).report(&options)?;
    print_report(&report, &options);
    println!();

    let export_path = config.export_path();
    let rows = crate::csv_io::export_csv(&pokedex.pokemon, &export_path)?;
    println!("{} Exported {} Pokemon to {}\n", style("✓").green(), rows, export_path.display());

    let records = crate::csv_io::read_csv(&export_path)?;
    print_records(&records, super::OutputFormat::Pretty)?;
    println!();

    let db = DatabaseManager::open(&config.database)?;
    let stored = store_records(&db, &records)?;
    println!("{} Stored {} Pokemon in {}\n", style("✓").green(), stored, config.database.path.display());

    println!("{}", style(format!("Stored Pokemon matching '{}'", args.find)).bold());
    let found = SqlitePokemonRepository::new(&db).find_by_name(&args.find)?;
    if found.is_empty() {
        println!("  none");
    }
    for record in &found {
        println!("  {}", record);
    }

    db.close()
}

/// Execute the config command
///
/// `path`, `reset` and `init` never read the existing file, so they still
/// work when it is malformed.
pub fn execute_config(args: &super::ConfigArgs, cli: &super::Cli) -> Result<()> {
    let path = cli.config_file()?;
    let path = path.as_path();

    match &args.command {
        super::ConfigCommands::Show => {
            println!("{}", to_toml(&cli.load_config()?)?);
        }
        super::ConfigCommands::Path => {
            println!("{}", path.display());
        }
        super::ConfigCommands::Reset => {
            Config::reset(path)?;
            println!("Configuration reset to defaults");
        }
        super::ConfigCommands::Set { key, value } => {
            let mut stored = Config::load_from(path)?;
            stored.set(key, value)?;
            stored.save_to(path)?;
            println!("Set {} = {}", key, value);
        }
        super::ConfigCommands::Get { key } => {
            if let Some(value) = cli.load_config()?.get(key) {
                println!("{}", value);
            } else {
                println!("Key '{}' not found", key);
            }
        }
        super::ConfigCommands::Init { force } => {
            Config::init(path, *force)?;
            println!("Configuration initialized at {}", path.display());
        }
    }

    Ok(())
}

/// Save records in one transaction, with a progress bar.
///
/// Nothing is stored unless every record is.
fn store_records(db: &DatabaseManager, records: &[PokemonRecord]) -> Result<usize> {
    use indicatif::{ProgressBar, ProgressStyle};

    let bar_style = ProgressStyle::with_template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
        .map_err(|e| PokedexError::Other(e.to_string()))?
        .progress_chars("█▓▒░ ");

    let pb = ProgressBar::new(records.len() as u64);
    pb.set_style(bar_style);

    let tx = db.connection().unchecked_transaction()?;
    let repo = SqlitePokemonRepository::new(db);
    for record in records {
        pb.set_message(record.name.clone());
        if let Err(e) = repo.save(record.clone()) {
            pb.abandon_with_message(format!("failed at #{} {}", record.id, record.name));
            return Err(e);
        }
        pb.inc(1);
    }
    tx.commit()?;

    let stored = repo.count()?;
    pb.finish_with_message("done");
    Ok(stored)
}

fn print_records(records: &[PokemonRecord], format: super::OutputFormat) -> Result<()> {
    #[derive(Serialize)]
    struct Records<'a> {
        pokemon: &'a [PokemonRecord],
    }

    match format {
        super::OutputFormat::Pretty => {
            println!("{}", style(format!("{} Pokemon", records.len())).bold());
            for record in records {
                println!("  {}", record);
            }
        }
        super::OutputFormat::Json => println!("{}", serde_json::to_string_pretty(records)?),
        super::OutputFormat::Toml => println!("{}", to_toml(&Records { pokemon: records })?),
    }

    Ok(())
}

fn print_report(report: &PokedexReport, options: &ReportOptions) {
    println!("{}", style(format!("Pokedex Report ({} Pokemon)", report.total)).bold().underlined());
    println!();

    println!("First {}:  {}", options.first_count, list(&report.first_names));
    println!("Last {}:   {}", options.last_count, list(&report.last_names));
    println!();

    println!("{}", style(&options.pokemon_name).bold());
    match report.pokemon {
        Some(ref pokemon) => {
            for line in pokemon.to_string().lines() {
                println!("  {}", line);
            }
        }
        None => println!("  not in the Pokedex"),
    }
    println!();

    println!("{}", style("Queries").bold());
    println!(
        "  Next evolution of {}: {}",
        options.evolution_of,
        report.next_evolution.as_ref().map_or("none".to_string(), |e| e.to_string())
    );
    println!("  {} type: {}", options.type_name, list(&report.of_type));
    println!("  Weak to {}: {}", options.weak_to.join(" or "), list(&report.weak_to_any));
    println!(
        "  With exactly {} weakness(es): {}",
        options.weakness_count, report.with_weakness_count
    );
    println!("  Most weaknesses: {}", or_none(&report.most_weaknesses));
    println!("  Fewest next evolutions: {}", or_none(&report.fewest_next_evolutions));
    println!(
        "  Evolving into non-{} Pokemon: {}",
        options.type_name,
        list(&report.evolving_into_other_type)
    );
    println!("  Heaviest: {}", or_none(&report.heaviest));
    println!("  Tallest: {}", or_none(&report.tallest));
    println!("  Longest name: {}", or_none(&report.longest_name));
    println!();

    println!("{}", style("Averages").bold());
    println!("  Weight: {:.2} kg", report.average_weight);
    println!("  Height: {:.2} m", report.average_height);
    println!("  Next evolutions: {:.2}", report.average_next_evolutions);
    println!("  Weaknesses: {:.2}", report.average_weaknesses);
    println!("  Most common weakness: {}", or_none(&report.most_common_weakness));
    println!();

    println!("{}", style("By type").bold());
    for (type_name, names) in &report.by_type {
        println!("  {:<10} {}", type_name, list(names));
    }
    println!();

    println!("{}", style("By weakness").bold());
    for (weakness, count) in &report.by_weakness {
        println!("  {:<10} {}", weakness, count);
    }
    println!();

    println!("{}", style("By number of next evolutions").bold());
    for (count, names) in &report.by_next_evolution_count {
        println!("  {:<10} {}", count, list(names));
    }
    println!("{}", RULE);
}

fn list(names: &[String]) -> String {
    if names.is_empty() {
        "none".to_string()
    } else {
        names.join(", ")
    }
}

fn or_none(name: &Option<String>) -> &str {
    name.as_deref().unwrap_or("none")
}

fn to_toml<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    toml::to_string_pretty(value).map_err(|e| PokedexError::Other(e.to_string()))
}
