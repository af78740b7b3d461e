//! Parser for the `image-mapping.txt` format
//!
//! ```text
//! Lisbon:
//! tram-1.jpg = Tram 28
//! tram-2.jpg = Tram 28
//! belem.jpg = Belem Tower
//! ```

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::types::{CityImageMap, DescriptionGroup};

/// Read and parse a mapping file. A missing or unreadable file is an error.
pub fn load_mapping(path: &Path) -> Result<CityImageMap> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let cities = parse_mapping(&content);

    debug!("Parsed {} cities from {}", cities.len(), path.display());
    Ok(cities)
}

/// Parse mapping text into cities, keeping file order everywhere.
///
/// Lines that are neither blank, a `City:` header, nor a `file = description`
/// entry are skipped without a warning, as are entries before the first header.
pub fn parse_mapping(content: &str) -> CityImageMap {
    let mut cities = CityImageMap::new();
    let mut current_city: Option<String> = None;

    for line in content.lines() {
        let trimmed = line.trim();

        // Skip empty lines
        if trimmed.is_empty() {
            continue;
        }

        // City header
        if let Some(city) = trimmed.strip_suffix(':') {
            let city = city.trim();
            if city.is_empty() {
                current_city = None;
                continue;
            }
            // A repeated header starts the city over but keeps its position
            cities.insert(city.to_string(), DescriptionGroup::new());
            current_city = Some(city.to_string());
            continue;
        }

        // Only the first '=' separates; descriptions may contain more
        let Some((image, description)) = trimmed.split_once('=') else {
            continue;
        };
        let Some(group) = current_city.as_ref().and_then(|c| cities.get_mut(c)) else {
            continue;
        };
        group
            .entry(description.trim().to_string())
            .or_default()
            .push(image.trim().to_string());
    }

    cities
}
