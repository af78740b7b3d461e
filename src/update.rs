//! Interactive per-city update: pick cities, then print gallery markup and
//! page script for each one.

use anyhow::{Context, Result};
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::config::Config;
use crate::generate::generate_gallery;
use crate::mapping::load_mapping;
use crate::script::generate_script;
use crate::types::CityImageMap;
use crate::utils::display_path;

const SEPARATOR_WIDTH: usize = 50;

/// Which cities to process
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CitySelection {
    All,
    Named(Vec<String>),
}

impl CitySelection {
    /// Parse `all` (any case) or a comma separated list of city names
    pub fn parse(input: &str) -> Self {
        let input = input.trim();
        if input.eq_ignore_ascii_case("all") {
            return CitySelection::All;
        }
        CitySelection::Named(
            input
                .split(',')
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .map(str::to_string)
                .collect(),
        )
    }

    fn resolve(&self, cities: &CityImageMap) -> Vec<String> {
        match self {
            CitySelection::All => cities.keys().cloned().collect(),
            CitySelection::Named(names) => names.clone(),
        }
    }
}

/// What happened to each requested city
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateSummary {
    pub processed: Vec<String>,
    pub missing_cities: Vec<String>,
    pub missing_pages: Vec<String>,
}

/// Page file a city's gallery belongs to
pub fn page_path(pages_dir: &Path, city: &str) -> PathBuf {
    pages_dir.join(format!("{}-page.html", city))
}

fn separator() -> String {
    "=".repeat(SEPARATOR_WIDTH)
}

/// Write the discovered city names
pub fn write_city_list<W: Write>(cities: &CityImageMap, out: &mut W) -> Result<()> {
    writeln!(out, "Cities found in image mapping:")?;
    for city in cities.keys() {
        writeln!(out, "- {}", city)?;
    }
    Ok(())
}

/// Generate and write output for the selected cities.
///
/// Unknown cities and cities without a page file are skipped with a warning;
/// the rest of the batch still runs.
pub fn process_cities<W: Write>(
    cities: &CityImageMap,
    selection: &CitySelection,
    pages_dir: &Path,
    out: &mut W,
) -> Result<UpdateSummary> {
    let mut summary = UpdateSummary::default();

    for city in selection.resolve(cities) {
        let Some(groups) = cities.get(&city) else {
            warn!("City '{}' not found in image mapping", city);
            summary.missing_cities.push(city);
            continue;
        };

        let page = page_path(pages_dir, &city);
        let page_display = page.to_string_lossy().to_string();
        info!("Processing {} ({})", city, display_path(&page_display));

        if !page.exists() {
            warn!("{} does not exist", page_display);
            summary.missing_pages.push(city);
            continue;
        }

        let gallery = generate_gallery(&city, groups);
        let script = generate_script(&gallery.carousel_ids);
        let title = city.to_uppercase();

        writeln!(out, "\n{}", separator())?;
        writeln!(out, "GALLERY HTML FOR {}:", title)?;
        writeln!(out, "{}", separator())?;
        writeln!(out, "{}", gallery.html)?;

        if let Some(script) = script {
            writeln!(out, "\n{}", separator())?;
            writeln!(out, "CAROUSEL JAVASCRIPT FOR {}:", title)?;
            writeln!(out, "{}", separator())?;
            writeln!(out, "{}", script)?;
        }

        writeln!(out, "\n{}", separator())?;
        writeln!(out, "END OF {} UPDATE", title)?;
        writeln!(out, "{}", separator())?;

        summary.processed.push(city);
    }

    Ok(summary)
}

/// Read the city selection from one line of input
fn prompt_selection<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<CitySelection> {
    writeln!(
        out,
        "\nGenerate carousel updates for which cities? (comma-separated, or 'all' for all cities)"
    )?;
    out.flush()?;

    let mut line = String::new();
    input
        .read_line(&mut line)
        .context("Failed to read city selection")?;
    Ok(CitySelection::parse(&line))
}

/// Run the update command against stdin/stdout.
///
/// With `cities` set, the selection comes from the command line and no prompt
/// is shown.
pub fn run_update(config: &Config, cities: Option<String>) -> Result<()> {
    let mapping = load_mapping(&config.mapping_path())?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_city_list(&mapping, &mut out)?;

    let selection = match cities {
        Some(list) => CitySelection::parse(&list),
        None => prompt_selection(&mut io::stdin().lock(), &mut out)?,
    };

    let summary = process_cities(&mapping, &selection, &config.pages_dir(), &mut out)?;
    info!(
        "Updated {} cities ({} not in mapping, {} without a page)",
        summary.processed.len(),
        summary.missing_cities.len(),
        summary.missing_pages.len()
    );

    Ok(())
}
