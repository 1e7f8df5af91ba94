use crate::catalog::{CommodityCatalog, PriceError, StationRegistry};
use crate::economy::config::EconomyConfig;
use crate::economy::crafting::{enforce_sell_floor, RecipeBook};
use crate::economy::distance::distance_premium;
use crate::economy::scarcity::{buy_multiplier, sell_multiplier};
use crate::model::{Commodity, CommoditySymbol, PriceQuote, Station, StationSymbol};

/// Quote for a commodity at a station, for goods hauled over `distance`.
///
/// ```text
/// buy  = base * scarcity_buy  * affinity_buy
/// sell = base * (1 + premium) * scarcity_sell * affinity_sell
/// ```
///
/// The distance premium applies to the sell side only: it is what a buyer
/// pays extra for goods hauled farther, not what a station charges
/// locally. The crafting floor is enforced on the final sell price before
/// the quote is returned.
pub fn price_quote(
    config: &EconomyConfig,
    catalog: &CommodityCatalog,
    registry: &StationRegistry,
    recipes: &RecipeBook,
    commodity_symbol: &CommoditySymbol,
    station_symbol: &StationSymbol,
    distance: f64,
) -> Result<PriceQuote, PriceError> {
    let commodity = catalog.get(commodity_symbol)?;
    let station = registry.get(station_symbol)?;

    Ok(quote_at_station(config, catalog, recipes, commodity, station, distance))
}

/// Same composition for a pre-resolved commodity and station. Pure: a
/// fixed (commodity, station, distance, stock) tuple always yields the
/// identical quote.
pub fn quote_at_station(
    config: &EconomyConfig,
    catalog: &CommodityCatalog,
    recipes: &RecipeBook,
    commodity: &Commodity,
    station: &Station,
    distance: f64,
) -> PriceQuote {
    // a station with no stock entry for the commodity prices it neutrally
    let (scarcity_buy, scarcity_sell) = match station.stock_for(&commodity.symbol) {
        Some(stock) => (
            buy_multiplier(&config.scarcity, stock),
            sell_multiplier(&config.scarcity, stock),
        ),
        None => (1.0, 1.0),
    };

    let nudge = config.affinity.nudge(station.station_type, commodity.category);
    let premium = distance_premium(&config.distance, commodity.category, distance);

    let buy_price = commodity.base_price * scarcity_buy * nudge.buy;
    let sell_price = commodity.base_price * (1.0 + premium) * scarcity_sell * nudge.sell;
    let sell_price = enforce_sell_floor(&config.crafting, catalog, recipes, commodity, sell_price);

    PriceQuote {
        commodity: commodity.symbol.clone(),
        station: station.symbol.clone(),
        buy_price,
        sell_price,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Category, Commodity, Position, StationType, StockLevel};
    use std::collections::HashMap;

    fn catalog() -> CommodityCatalog {
        CommodityCatalog::from_commodities(vec![
            Commodity {
                symbol: CommoditySymbol::new("microchips"),
                category: Category::Tech,
                base_price: 100.0,
            },
            Commodity {
                symbol: CommoditySymbol::new("grain"),
                category: Category::Food,
                base_price: 8.0,
            },
        ])
    }

    fn station(stock: HashMap<CommoditySymbol, StockLevel>) -> Station {
        Station {
            symbol: StationSymbol::new("freeport"),
            station_type: StationType::TradingPost,
            position: Position::new(0, 0),
            stock,
        }
    }

    fn registry(stock: HashMap<CommoditySymbol, StockLevel>) -> StationRegistry {
        StationRegistry::from_stations(vec![station(stock)])
    }

    #[test]
    fn scarcity_floor_then_premium_reference_scenario() {
        // scarcity_sell at its 0.5 minimum: flood the station with stock
        let config = EconomyConfig::default();
        let stock = HashMap::from([(CommoditySymbol::new("microchips"), StockLevel::new(1_000_000, 100))]);

        // premium 0 at distance 0: sell = 100 * 0.5 = 50
        let quote = price_quote(
            &config,
            &catalog(),
            &registry(stock.clone()),
            &RecipeBook::default(),
            &CommoditySymbol::new("microchips"),
            &StationSymbol::new("freeport"),
            0.0,
        )
        .unwrap();
        assert_eq!(quote.sell_price, 50.0);

        // premium saturated at 2.5: sell = 50 * 3.5 = 175
        let far = price_quote(
            &config,
            &catalog(),
            &registry(stock),
            &RecipeBook::default(),
            &CommoditySymbol::new("microchips"),
            &StationSymbol::new("freeport"),
            10_000.0,
        )
        .unwrap();
        assert_eq!(far.sell_price, 175.0);
    }

    #[test]
    fn quotes_are_strictly_positive_and_reproducible() {
        let config = EconomyConfig::with_default_affinities();
        let stock = HashMap::from([(CommoditySymbol::new("grain"), StockLevel::new(0, 200))]);

        let first = price_quote(
            &config,
            &catalog(),
            &registry(stock.clone()),
            &RecipeBook::default(),
            &CommoditySymbol::new("grain"),
            &StationSymbol::new("freeport"),
            420.0,
        )
        .unwrap();
        let second = price_quote(
            &config,
            &catalog(),
            &registry(stock),
            &RecipeBook::default(),
            &CommoditySymbol::new("grain"),
            &StationSymbol::new("freeport"),
            420.0,
        )
        .unwrap();

        assert!(first.buy_price > 0.0);
        assert!(first.sell_price > 0.0);
        assert_eq!(first, second);
    }

    #[test]
    fn missing_stock_entry_prices_neutrally() {
        let config = EconomyConfig::default();

        let quote = price_quote(
            &config,
            &catalog(),
            &registry(HashMap::new()),
            &RecipeBook::default(),
            &CommoditySymbol::new("grain"),
            &StationSymbol::new("freeport"),
            0.0,
        )
        .unwrap();

        assert_eq!(quote.buy_price, 8.0);
        assert_eq!(quote.sell_price, 8.0);
    }

    #[test]
    fn unknown_ids_fail_loudly() {
        let config = EconomyConfig::default();

        let unknown_commodity = price_quote(
            &config,
            &catalog(),
            &registry(HashMap::new()),
            &RecipeBook::default(),
            &CommoditySymbol::new("unobtainium"),
            &StationSymbol::new("freeport"),
            0.0,
        );
        assert_eq!(
            unknown_commodity,
            Err(PriceError::UnknownCommodity(CommoditySymbol::new("unobtainium")))
        );

        let unknown_station = price_quote(
            &config,
            &catalog(),
            &registry(HashMap::new()),
            &RecipeBook::default(),
            &CommoditySymbol::new("grain"),
            &StationSymbol::new("ghost_station"),
            0.0,
        );
        assert_eq!(unknown_station, Err(PriceError::UnknownStation(StationSymbol::new("ghost_station"))));
    }
}
