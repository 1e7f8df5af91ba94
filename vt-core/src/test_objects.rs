use crate::engine::MarketEngine;
use std::collections::HashMap;
use vt_domain::{
    Category, Commodity, CommodityCatalog, CommoditySymbol, EconomyConfig, Position, Recipe, RecipeBook, RecipeInput, Station, StationRegistry,
    StationSymbol, StationType, StockLevel,
};

/// Deterministic demo world used by the server binary and by tests: a
/// catalog spanning all ten categories, one station of every type, and
/// recipes for the fabricated goods.
pub struct DemoUniverse;

impl DemoUniverse {
    pub fn catalog() -> CommodityCatalog {
        let commodities = [
            ("microchips", Category::Tech, 100.0),
            ("quantum_processors", Category::Tech, 240.0),
            ("ship_ai_cores", Category::Tech, 520.0),
            ("machine_parts", Category::Industrial, 60.0),
            ("hull_plating", Category::Industrial, 85.0),
            ("power_cells", Category::Energy, 45.0),
            ("antimatter_pods", Category::Energy, 300.0),
            ("med_gel", Category::Medical, 70.0),
            ("nano_surgeons", Category::Medical, 260.0),
            ("void_silk", Category::Luxury, 150.0),
            ("aged_brandy", Category::Luxury, 95.0),
            ("hydrogen_fuel", Category::Fuel, 20.0),
            ("ion_propellant", Category::Fuel, 38.0),
            ("synth_meals", Category::Consumer, 12.0),
            ("holo_sets", Category::Consumer, 55.0),
            ("grain", Category::Food, 8.0),
            ("protein_paste", Category::Food, 14.0),
            ("helium_3", Category::Gas, 30.0),
            ("xenon", Category::Gas, 42.0),
            ("iron_ore", Category::Raw, 10.0),
            ("silicates", Category::Raw, 7.0),
            ("carbon_ore", Category::Raw, 9.0),
        ];

        CommodityCatalog::from_commodities(
            commodities
                .into_iter()
                .map(|(symbol, category, base_price)| Commodity {
                    symbol: CommoditySymbol::new(symbol),
                    category,
                    base_price,
                })
                .collect(),
        )
    }

    pub fn recipe_book() -> RecipeBook {
        RecipeBook::from_recipes(vec![
            Self::recipe("microchips", &[("silicates", 4), ("carbon_ore", 2)], 1.6),
            Self::recipe("quantum_processors", &[("microchips", 2), ("xenon", 1)], 1.8),
            Self::recipe("machine_parts", &[("iron_ore", 5)], 1.4),
            Self::recipe("hull_plating", &[("iron_ore", 6), ("carbon_ore", 2)], 1.3),
            Self::recipe("power_cells", &[("helium_3", 1), ("silicates", 2)], 1.5),
            Self::recipe("med_gel", &[("protein_paste", 3), ("xenon", 1)], 1.5),
            Self::recipe("synth_meals", &[("grain", 2), ("protein_paste", 1)], 1.2),
            Self::recipe("holo_sets", &[("microchips", 1), ("silicates", 3)], 1.4),
        ])
    }

    pub fn registry() -> StationRegistry {
        StationRegistry::from_stations(vec![
            Self::station(
                "new_terra_city",
                StationType::City,
                (0, 0),
                &[("synth_meals", 400, 900), ("grain", 800, 1200), ("void_silk", 30, 120), ("holo_sets", 150, 300)],
            ),
            Self::station(
                "helios_power_plant",
                StationType::PowerPlant,
                (800, 200),
                &[("power_cells", 600, 400), ("hydrogen_fuel", 900, 700), ("helium_3", 150, 350)],
            ),
            Self::station(
                "forge_prime",
                StationType::Fabricator,
                (300, 900),
                &[
                    ("microchips", 700, 300),
                    ("machine_parts", 500, 250),
                    ("hull_plating", 350, 200),
                    ("silicates", 80, 600),
                    ("iron_ore", 120, 800),
                ],
            ),
            Self::station(
                "crucible_refinery",
                StationType::Refinery,
                (1100, 400),
                &[("iron_ore", 900, 500), ("silicates", 700, 400), ("carbon_ore", 650, 400), ("ion_propellant", 300, 200)],
            ),
            Self::station(
                "verdant_farm",
                StationType::Farm,
                (500, 300),
                &[("grain", 1500, 800), ("protein_paste", 700, 400), ("synth_meals", 100, 250)],
            ),
            Self::station(
                "aurora_research",
                StationType::Research,
                (1500, 1200),
                &[("microchips", 40, 300), ("quantum_processors", 10, 80), ("nano_surgeons", 15, 60), ("xenon", 90, 150)],
            ),
            Self::station(
                "freeport_trading_post",
                StationType::TradingPost,
                (900, 800),
                &[
                    ("microchips", 200, 250),
                    ("void_silk", 90, 100),
                    ("aged_brandy", 120, 150),
                    ("med_gel", 180, 200),
                    ("hydrogen_fuel", 400, 400),
                ],
            ),
            Self::station(
                "high_orbit_hab",
                StationType::OrbitalHab,
                (200, 500),
                &[("synth_meals", 90, 350), ("protein_paste", 60, 250), ("med_gel", 50, 180), ("holo_sets", 40, 120)],
            ),
            Self::station(
                "drydock_shipyard",
                StationType::Shipyard,
                (1300, 100),
                &[("hull_plating", 80, 400), ("machine_parts", 120, 450), ("ship_ai_cores", 8, 40), ("ion_propellant", 200, 300)],
            ),
            Self::station(
                "smugglers_rest",
                StationType::Pirate,
                (2000, 1800),
                &[("aged_brandy", 300, 150), ("med_gel", 20, 150), ("antimatter_pods", 12, 30), ("void_silk", 25, 80)],
            ),
        ])
    }

    pub fn config() -> EconomyConfig {
        EconomyConfig::with_default_affinities()
    }

    pub fn engine(seed: Option<u64>) -> MarketEngine {
        MarketEngine::new(Self::config(), Self::catalog(), Self::recipe_book(), Self::registry(), seed)
    }

    fn recipe(output: &str, inputs: &[(&str, u32)], ratio: f64) -> Recipe {
        Recipe {
            output: CommoditySymbol::new(output),
            inputs: inputs
                .iter()
                .map(|(commodity, units)| RecipeInput {
                    commodity: CommoditySymbol::new(*commodity),
                    units: *units,
                })
                .collect(),
            ratio,
        }
    }

    fn station(symbol: &str, station_type: StationType, position: (i64, i64), stock: &[(&str, u32, u32)]) -> Station {
        Station {
            symbol: StationSymbol::new(symbol),
            station_type,
            position: Position::new(position.0, position.1),
            stock: stock
                .iter()
                .map(|(commodity, current, target)| (CommoditySymbol::new(*commodity), StockLevel::new(*current, *target)))
                .collect::<HashMap<_, _>>(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn demo_world_is_complete() {
        let catalog = DemoUniverse::catalog();
        let registry = DemoUniverse::registry();
        let recipes = DemoUniverse::recipe_book();

        // all ten categories and station types are represented
        for category in Category::iter() {
            assert!(catalog.iter().any(|c| c.category == category), "no commodity for {category}");
        }
        for station_type in StationType::iter() {
            assert!(registry.iter().any(|s| s.station_type == station_type), "no station of type {station_type}");
        }

        // every stocked commodity and every recipe input exists in the catalog
        for station in registry.iter() {
            for commodity in station.stock.keys() {
                assert!(catalog.contains(commodity), "{commodity} stocked but not in catalog");
            }
        }
        for commodity in catalog.iter() {
            if let Some(recipe) = recipes.get(&commodity.symbol) {
                for input in &recipe.inputs {
                    assert!(catalog.contains(&input.commodity), "recipe input {} missing", input.commodity);
                }
            }
        }
    }
}
