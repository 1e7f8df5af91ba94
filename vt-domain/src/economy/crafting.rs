use crate::catalog::CommodityCatalog;
use crate::economy::config::CraftingConfig;
use crate::model::{Commodity, CommoditySymbol};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RecipeInput {
    pub commodity: CommoditySymbol,
    pub units: u32,
}

/// One fabrication step: `inputs` are consumed to produce the output, and
/// `ratio` is the cost markup the fabricator needs to break even on
/// process losses.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub output: CommoditySymbol,
    pub inputs: Vec<RecipeInput>,
    pub ratio: f64,
}

/// The fabrication graph, keyed by output commodity. External input; the
/// engine never mutates it.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct RecipeBook {
    recipes: HashMap<CommoditySymbol, Recipe>,
}

impl RecipeBook {
    pub fn from_recipes(recipes: Vec<Recipe>) -> Self {
        RecipeBook {
            recipes: recipes.into_iter().map(|r| (r.output.clone(), r)).collect(),
        }
    }

    pub fn get(&self, output: &CommoditySymbol) -> Option<&Recipe> {
        self.recipes.get(output)
    }

    pub fn is_crafted(&self, output: &CommoditySymbol) -> bool {
        self.recipes.contains_key(output)
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}

/// Aggregate base-price cost of a recipe's input list. Inputs missing from
/// the catalog contribute no cost.
pub fn input_cost(catalog: &CommodityCatalog, recipe: &Recipe) -> f64 {
    recipe
        .inputs
        .iter()
        .filter_map(|input| {
            catalog
                .get(&input.commodity)
                .ok()
                .map(|c| c.base_price * input.units as f64)
        })
        .sum()
}

/// Final clamp-up on the sell side: a fabricated commodity never sells
/// below input cost × ratio plus its category's floor margin. Runs after
/// the price calculator and never lowers a price.
pub fn enforce_sell_floor(
    config: &CraftingConfig,
    catalog: &CommodityCatalog,
    recipes: &RecipeBook,
    commodity: &Commodity,
    sell_price: f64,
) -> f64 {
    match recipes.get(&commodity.symbol) {
        None => sell_price,
        Some(recipe) => {
            let floor = input_cost(catalog, recipe) * recipe.ratio + config.margin(commodity.category);
            sell_price.max(floor)
        }
    }
}
