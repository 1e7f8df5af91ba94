use crate::economy::affinity::{Affinity, AffinityTable};
use crate::model::{Category, StationType};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Inclusive bounds a multiplicative factor is clamped into before it takes
/// part in price composition.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq)]
pub struct FactorRange {
    pub min: f64,
    pub max: f64,
}

impl FactorRange {
    pub fn new(min: f64, max: f64) -> Self {
        FactorRange { min, max }
    }

    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct DistanceConfig {
    /// World-scale constant the raw station distance is normalized by.
    pub distance_norm: f64,
    /// Global ceiling on the premium, regardless of category coefficient.
    pub max_premium: f64,
    pub category_coefficients: HashMap<Category, f64>,
}

impl DistanceConfig {
    /// Missing coefficients are a configuration gap, not an error.
    pub fn coefficient(&self, category: Category) -> f64 {
        self.category_coefficients.get(&category).copied().unwrap_or(1.0)
    }
}

impl Default for DistanceConfig {
    fn default() -> Self {
        DistanceConfig {
            distance_norm: 1500.0,
            max_premium: 2.5,
            category_coefficients: HashMap::from([
                (Category::Tech, 3.0),
                (Category::Luxury, 2.8),
                (Category::Medical, 2.5),
                (Category::Energy, 2.0),
                (Category::Industrial, 1.8),
                (Category::Consumer, 1.5),
                (Category::Fuel, 1.2),
                (Category::Gas, 1.1),
                (Category::Food, 1.0),
                (Category::Raw, 0.8),
            ]),
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ScarcityConfig {
    pub stock_coefficient: f64,
    /// Sell-side bounds allow more upside than buy-side: scarcity should
    /// move what a station pays a trader more than what it charges one.
    pub sell_range: FactorRange,
    pub buy_range: FactorRange,
}

impl Default for ScarcityConfig {
    fn default() -> Self {
        ScarcityConfig {
            stock_coefficient: 1.5,
            sell_range: FactorRange::new(0.5, 2.0),
            buy_range: FactorRange::new(0.7, 1.5),
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct CraftingConfig {
    /// Guaranteed margin over input cost per output category. Categories
    /// without an entry get no margin on top of the recipe floor.
    pub floor_margins: HashMap<Category, f64>,
}

impl CraftingConfig {
    pub fn margin(&self, category: Category) -> f64 {
        self.floor_margins.get(&category).copied().unwrap_or(0.0)
    }
}

impl Default for CraftingConfig {
    fn default() -> Self {
        CraftingConfig {
            floor_margins: HashMap::from([
                (Category::Tech, 15.0),
                (Category::Luxury, 20.0),
                (Category::Medical, 12.0),
                (Category::Industrial, 10.0),
                (Category::Consumer, 8.0),
                (Category::Energy, 6.0),
            ]),
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct FeaturedConfig {
    /// How many routes each seeding cycle advertises.
    pub count: usize,
    pub min_multiplier: f64,
    pub max_multiplier: f64,
    /// Categories considered good for player-visible arbitrage.
    pub categories: Vec<Category>,
    pub reseed_interval_secs: u64,
}

impl Default for FeaturedConfig {
    fn default() -> Self {
        FeaturedConfig {
            count: 3,
            min_multiplier: 1.5,
            max_multiplier: 1.8,
            categories: vec![
                Category::Tech,
                Category::Medical,
                Category::Luxury,
                Category::Energy,
                Category::Industrial,
            ],
            reseed_interval_secs: 3600,
        }
    }
}

/// The complete, immutable parameter set of one economy instance. Passed
/// into the engine explicitly so independent instances (per test, per save
/// file) never share state through globals.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct EconomyConfig {
    pub distance: DistanceConfig,
    pub scarcity: ScarcityConfig,
    pub affinity: AffinityTable,
    pub crafting: CraftingConfig,
    pub featured: FeaturedConfig,
}

impl EconomyConfig {
    /// Defaults everywhere, plus the station-type biases of the stock world.
    pub fn with_default_affinities() -> Self {
        let entries = HashMap::from([
            (
                StationType::City,
                HashMap::from([
                    (Category::Consumer, Affinity::new(1.1, 1.2)),
                    (Category::Food, Affinity::new(1.05, 1.15)),
                    (Category::Luxury, Affinity::new(1.1, 1.25)),
                ]),
            ),
            (
                StationType::PowerPlant,
                HashMap::from([
                    (Category::Energy, Affinity::new(0.9, 1.3)),
                    (Category::Fuel, Affinity::new(0.95, 1.2)),
                ]),
            ),
            (
                StationType::Fabricator,
                HashMap::from([
                    (Category::Tech, Affinity::new(0.85, 1.1)),
                    (Category::Industrial, Affinity::new(0.9, 1.1)),
                    (Category::Raw, Affinity::new(1.0, 1.2)),
                ]),
            ),
            (
                StationType::Refinery,
                HashMap::from([
                    (Category::Raw, Affinity::new(0.9, 1.25)),
                    (Category::Gas, Affinity::new(0.9, 1.2)),
                    (Category::Fuel, Affinity::new(0.85, 1.1)),
                ]),
            ),
            (
                StationType::Farm,
                HashMap::from([
                    (Category::Food, Affinity::new(0.8, 1.05)),
                    (Category::Consumer, Affinity::new(1.0, 1.1)),
                ]),
            ),
            (
                StationType::Research,
                HashMap::from([
                    (Category::Tech, Affinity::new(1.1, 1.25)),
                    (Category::Medical, Affinity::new(1.05, 1.2)),
                ]),
            ),
            (
                StationType::TradingPost,
                HashMap::from([(Category::Luxury, Affinity::new(1.05, 1.1))]),
            ),
            (
                StationType::OrbitalHab,
                HashMap::from([
                    (Category::Consumer, Affinity::new(1.1, 1.2)),
                    (Category::Food, Affinity::new(1.1, 1.2)),
                    (Category::Medical, Affinity::new(1.1, 1.15)),
                ]),
            ),
            (
                StationType::Shipyard,
                HashMap::from([
                    (Category::Industrial, Affinity::new(0.95, 1.2)),
                    (Category::Tech, Affinity::new(1.0, 1.15)),
                ]),
            ),
            (
                StationType::Pirate,
                HashMap::from([
                    (Category::Luxury, Affinity::new(0.7, 1.4)),
                    (Category::Medical, Affinity::new(1.2, 1.3)),
                ]),
            ),
        ]);

        EconomyConfig {
            affinity: AffinityTable::new(entries),
            ..Default::default()
        }
    }
}
