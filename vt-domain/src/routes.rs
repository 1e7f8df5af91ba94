use crate::catalog::{CommodityCatalog, StationRegistry};
use crate::economy::config::EconomyConfig;
use crate::economy::crafting::RecipeBook;
use crate::economy::pricing::quote_at_station;
use crate::model::{CommoditySymbol, FeaturedRouteSet, StationSymbol};
use itertools::Itertools;
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

/// A profitable haul: buy `commodity` at `origin`, sell it at
/// `destination` after hauling it `distance`.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TradeRoute {
    pub origin: StationSymbol,
    pub destination: StationSymbol,
    pub commodity: CommoditySymbol,
    pub buy_price: f64,
    pub sell_price: f64,
    pub profit_per_unit: f64,
    pub distance: f64,
    pub profit_per_distance: f64,
}

/// Cross every ordered station pair with the commodities stocked at the
/// origin, quote the buy side locally and the sell side at the destination
/// (with the haul's distance premium), and keep the positive-margin pairs
/// sorted by descending profit per unit.
///
/// When a featured set is supplied, its multiplier inflates the sell side
/// of matching tuples — that is the arbitrage the seeder advertises.
pub fn find_arbitrage_routes(
    config: &EconomyConfig,
    catalog: &CommodityCatalog,
    registry: &StationRegistry,
    recipes: &RecipeBook,
    featured: Option<&FeaturedRouteSet>,
) -> Vec<TradeRoute> {
    let stations = registry.iter().sorted_by_key(|s| s.symbol.clone()).collect_vec();

    stations
        .iter()
        .cartesian_product(stations.iter())
        .filter(|(origin, destination)| origin.symbol != destination.symbol)
        .flat_map(|(origin, destination)| {
            let distance = origin.distance_to(destination);

            origin
                .stock
                .keys()
                .sorted()
                .filter_map(|commodity_symbol| {
                    let commodity = catalog.get(commodity_symbol).ok()?;

                    let buy = quote_at_station(config, catalog, recipes, commodity, origin, 0.0).buy_price;
                    let mut sell = quote_at_station(config, catalog, recipes, commodity, destination, distance).sell_price;

                    if let Some(multiplier) =
                        featured.and_then(|set| set.multiplier_for(&origin.symbol, &destination.symbol, commodity_symbol))
                    {
                        sell *= multiplier;
                    }

                    let profit = sell - buy;
                    (profit > 0.0).then(|| TradeRoute {
                        origin: origin.symbol.clone(),
                        destination: destination.symbol.clone(),
                        commodity: commodity_symbol.clone(),
                        buy_price: buy,
                        sell_price: sell,
                        profit_per_unit: profit,
                        distance,
                        profit_per_distance: profit / distance.max(1.0),
                    })
                })
                .collect_vec()
        })
        .sorted_by_key(|route| std::cmp::Reverse(OrderedFloat(route.profit_per_unit)))
        .collect_vec()
}
