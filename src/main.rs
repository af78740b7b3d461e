use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod carousel;
mod config;
mod generate;
mod mapping;
mod script;
mod types;
mod update;
mod utils;

use config::Config;
use mapping::load_mapping;
use types::CityStats;

#[derive(Parser)]
#[command(name = "city-carousels")]
#[command(about = "Generate travel gallery carousels from an image mapping file")]
struct Cli {
    /// Image mapping file (default: image-mapping.txt)
    #[arg(long, global = true, value_name = "PATH")]
    mapping: Option<PathBuf>,
    /// Directory containing the {city}-page.html files (default: .)
    #[arg(long, global = true, value_name = "DIR")]
    pages_dir: Option<PathBuf>,
    /// CONL settings file (default: carousels.conl, if present)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,
    /// Verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print gallery HTML and carousel script for selected cities (default)
    Update {
        /// Cities to update, comma-separated, or "all"; prompts when omitted
        #[arg(short, long, value_name = "CITIES")]
        cities: Option<String>,
    },
    /// List cities with description, carousel and image counts
    List,
    /// Print the parsed mapping as JSON
    Dump,
}

fn run_list(config: &Config) -> Result<()> {
    let cities = load_mapping(&config.mapping_path())?;

    for (city, groups) in &cities {
        let stats = CityStats::from_group(groups);
        println!(
            "{}: {} descriptions, {} carousels, {} images",
            city, stats.descriptions, stats.carousels, stats.images
        );
    }
    Ok(())
}

fn run_dump(config: &Config) -> Result<()> {
    let cities = load_mapping(&config.mapping_path())?;
    println!("{}", serde_json::to_string_pretty(&cities)?);
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    utils::init_logging(cli.verbose);

    let config = Config::load(cli.config.as_deref())?.with_overrides(cli.mapping, cli.pages_dir);

    match cli.command {
        None => update::run_update(&config, None),
        Some(Commands::Update { cities }) => update::run_update(&config, cities),
        Some(Commands::List) => run_list(&config),
        Some(Commands::Dump) => run_dump(&config),
    }
}
