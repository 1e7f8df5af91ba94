use crate::model::{Category, StationType};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Independent multiplicative nudges for the two sides of a quote.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq)]
pub struct Affinity {
    pub buy: f64,
    pub sell: f64,
}

impl Affinity {
    pub const NEUTRAL: Affinity = Affinity { buy: 1.0, sell: 1.0 };

    pub fn new(buy: f64, sell: f64) -> Self {
        Affinity { buy, sell }
    }
}

/// Station-type × category bias table. Absence of a station type, or of a
/// category under a present station type, resolves to the neutral nudge —
/// that is the designed default, not an error path.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct AffinityTable {
    entries: HashMap<StationType, HashMap<Category, Affinity>>,
}

impl AffinityTable {
    pub fn new(entries: HashMap<StationType, HashMap<Category, Affinity>>) -> Self {
        AffinityTable { entries }
    }

    pub fn nudge(&self, station_type: StationType, category: Category) -> Affinity {
        self.entries
            .get(&station_type)
            .and_then(|by_category| by_category.get(&category))
            .copied()
            .unwrap_or(Affinity::NEUTRAL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn missing_entries_resolve_to_neutral() {
        let table = AffinityTable::default();

        for station_type in StationType::iter() {
            for category in Category::iter() {
                assert_eq!(table.nudge(station_type, category), Affinity::NEUTRAL);
            }
        }
    }

    #[test]
    fn present_entry_wins_over_default() {
        let mut by_category = HashMap::new();
        by_category.insert(Category::Energy, Affinity::new(0.9, 1.3));
        let mut entries = HashMap::new();
        entries.insert(StationType::PowerPlant, by_category);
        let table = AffinityTable::new(entries);

        assert_eq!(table.nudge(StationType::PowerPlant, Category::Energy), Affinity::new(0.9, 1.3));
        // same station type, absent category
        assert_eq!(table.nudge(StationType::PowerPlant, Category::Luxury), Affinity::NEUTRAL);
    }
}
