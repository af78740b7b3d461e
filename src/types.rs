//! Ordered city/description/image model built from the mapping file

use indexmap::IndexMap;

/// Description -> image filenames, in the order they appear in the mapping file
pub type DescriptionGroup = IndexMap<String, Vec<String>>;

/// City name -> its description groups, in header order
pub type CityImageMap = IndexMap<String, DescriptionGroup>;

/// Counts shown by the `list` command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CityStats {
    pub descriptions: usize,
    pub carousels: usize,
    pub images: usize,
}

impl CityStats {
    pub fn from_group(group: &DescriptionGroup) -> Self {
        Self {
            descriptions: group.len(),
            carousels: group.values().filter(|images| images.len() > 1).count(),
            images: group.values().map(Vec::len).sum(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_city_stats() {
        let mut group = DescriptionGroup::new();
        group.insert("Harbor".to_string(), vec!["a.jpg".into(), "b.jpg".into()]);
        group.insert("Market".to_string(), vec!["c.jpg".into()]);

        let stats = CityStats::from_group(&group);
        assert_eq!(
            stats,
            CityStats {
                descriptions: 2,
                carousels: 1,
                images: 3,
            }
        );
    }

    #[test]
    fn test_city_stats_empty_group() {
        assert_eq!(
            CityStats::from_group(&DescriptionGroup::new()),
            CityStats::default()
        );
    }
}
