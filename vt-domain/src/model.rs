use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use strum::{Display, EnumIter};

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq, Hash, Ord, PartialOrd)]
pub struct CommoditySymbol(pub String);

impl CommoditySymbol {
    pub fn new(symbol: impl Into<String>) -> Self {
        CommoditySymbol(symbol.into())
    }
}

impl fmt::Display for CommoditySymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq, Hash, Ord, PartialOrd)]
pub struct StationSymbol(pub String);

impl StationSymbol {
    pub fn new(symbol: impl Into<String>) -> Self {
        StationSymbol(symbol.into())
    }
}

impl fmt::Display for StationSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Display, EnumIter)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Category {
    Tech,
    Industrial,
    Energy,
    Medical,
    Luxury,
    Fuel,
    Consumer,
    Food,
    Gas,
    Raw,
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Display, EnumIter)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum StationType {
    City,
    PowerPlant,
    Fabricator,
    Refinery,
    Farm,
    Research,
    TradingPost,
    OrbitalHab,
    Shipyard,
    Pirate,
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd)]
pub struct Position {
    pub x: i64,
    pub y: i64,
}

impl Position {
    pub fn new(x: i64, y: i64) -> Self {
        Position { x, y }
    }

    pub fn distance_to(&self, other: &Position) -> f64 {
        let dx = (other.x - self.x) as f64;
        let dy = (other.y - self.y) as f64;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Immutable after catalog load.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Commodity {
    pub symbol: CommoditySymbol,
    pub category: Category,
    pub base_price: f64,
}

/// Current vs. target stock of one commodity at one station. `current` is
/// mutated by the trading subsystem between queries; the pricing engine
/// only ever reads it.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd)]
#[serde(rename_all = "camelCase")]
pub struct StockLevel {
    pub current: u32,
    pub target: u32,
}

impl StockLevel {
    pub fn new(current: u32, target: u32) -> Self {
        StockLevel { current, target }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Station {
    pub symbol: StationSymbol,
    pub station_type: StationType,
    pub position: Position,
    pub stock: HashMap<CommoditySymbol, StockLevel>,
}

impl Station {
    pub fn stock_for(&self, commodity: &CommoditySymbol) -> Option<StockLevel> {
        self.stock.get(commodity).copied()
    }

    pub fn distance_to(&self, other: &Station) -> f64 {
        self.position.distance_to(&other.position)
    }
}

/// Produced fresh per query, never persisted. `buy_price` is what a trader
/// pays the station, `sell_price` is what the station pays a trader.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PriceQuote {
    pub commodity: CommoditySymbol,
    pub station: StationSymbol,
    pub buy_price: f64,
    pub sell_price: f64,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FeaturedRoute {
    pub origin: StationSymbol,
    pub destination: StationSymbol,
    pub commodity: CommoditySymbol,
    pub multiplier: f64,
}

/// The active featured set. Regenerated wholesale each seeding cycle and
/// swapped in atomically so readers never observe a partial set.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FeaturedRouteSet {
    pub routes: Vec<FeaturedRoute>,
    pub seeded_at: DateTime<Utc>,
}

impl FeaturedRouteSet {
    pub fn new(routes: Vec<FeaturedRoute>, seeded_at: DateTime<Utc>) -> Self {
        FeaturedRouteSet { routes, seeded_at }
    }

    pub fn empty(seeded_at: DateTime<Utc>) -> Self {
        FeaturedRouteSet {
            routes: vec![],
            seeded_at,
        }
    }

    pub fn multiplier_for(&self, origin: &StationSymbol, destination: &StationSymbol, commodity: &CommoditySymbol) -> Option<f64> {
        self.routes
            .iter()
            .find(|r| &r.origin == origin && &r.destination == destination && &r.commodity == commodity)
            .map(|r| r.multiplier)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_is_symmetric_and_zero_on_self() {
        let a = Position::new(0, 0);
        let b = Position::new(300, 400);

        assert_eq!(a.distance_to(&b), 500.0);
        assert_eq!(b.distance_to(&a), 500.0);
        assert_eq!(a.distance_to(&a), 0.0);
    }

    #[test]
    fn category_serializes_snake_case() {
        assert_eq!(serde_json::to_string(&Category::Tech).unwrap(), "\"tech\"");
        assert_eq!(serde_json::to_string(&StationType::PowerPlant).unwrap(), "\"power_plant\"");
        assert_eq!(Category::Raw.to_string(), "raw");
        assert_eq!(StationType::TradingPost.to_string(), "trading_post");
    }

    #[test]
    fn featured_set_lookup_matches_exact_tuple() {
        let set = FeaturedRouteSet::new(
            vec![FeaturedRoute {
                origin: StationSymbol::new("A"),
                destination: StationSymbol::new("B"),
                commodity: CommoditySymbol::new("microchips"),
                multiplier: 1.6,
            }],
            Utc::now(),
        );

        assert_eq!(
            set.multiplier_for(&StationSymbol::new("A"), &StationSymbol::new("B"), &CommoditySymbol::new("microchips")),
            Some(1.6)
        );
        // reversed direction is a different tuple
        assert_eq!(
            set.multiplier_for(&StationSymbol::new("B"), &StationSymbol::new("A"), &CommoditySymbol::new("microchips")),
            None
        );
    }
}
