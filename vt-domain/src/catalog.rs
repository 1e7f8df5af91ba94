use crate::model::{Commodity, CommoditySymbol, Station, StationSymbol};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Lookup failures indicate a caller or config bug rather than a market
/// condition, so they surface as typed errors. Every other gap in the
/// configuration degrades to a neutral default instead.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PriceError {
    #[error("unknown commodity: {0}")]
    UnknownCommodity(CommoditySymbol),
    #[error("unknown station: {0}")]
    UnknownStation(StationSymbol),
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct CommodityCatalog {
    commodities: HashMap<CommoditySymbol, Commodity>,
}

impl CommodityCatalog {
    pub fn from_commodities(commodities: Vec<Commodity>) -> Self {
        CommodityCatalog {
            commodities: commodities.into_iter().map(|c| (c.symbol.clone(), c)).collect(),
        }
    }

    pub fn get(&self, symbol: &CommoditySymbol) -> Result<&Commodity, PriceError> {
        self.commodities
            .get(symbol)
            .ok_or_else(|| PriceError::UnknownCommodity(symbol.clone()))
    }

    pub fn contains(&self, symbol: &CommoditySymbol) -> bool {
        self.commodities.contains_key(symbol)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Commodity> {
        self.commodities.values()
    }

    pub fn len(&self) -> usize {
        self.commodities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commodities.is_empty()
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct StationRegistry {
    stations: HashMap<StationSymbol, Station>,
}

impl StationRegistry {
    pub fn from_stations(stations: Vec<Station>) -> Self {
        StationRegistry {
            stations: stations.into_iter().map(|s| (s.symbol.clone(), s)).collect(),
        }
    }

    pub fn get(&self, symbol: &StationSymbol) -> Result<&Station, PriceError> {
        self.stations
            .get(symbol)
            .ok_or_else(|| PriceError::UnknownStation(symbol.clone()))
    }

    /// Mutable access for the external trading subsystem; the pricing
    /// engine itself never writes through this.
    pub fn get_mut(&mut self, symbol: &StationSymbol) -> Result<&mut Station, PriceError> {
        self.stations
            .get_mut(symbol)
            .ok_or_else(|| PriceError::UnknownStation(symbol.clone()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Station> {
        self.stations.values()
    }

    pub fn len(&self) -> usize {
        self.stations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Category, Position, StationType};

    #[test]
    fn unknown_lookups_produce_typed_errors() {
        let catalog = CommodityCatalog::from_commodities(vec![Commodity {
            symbol: CommoditySymbol::new("grain"),
            category: Category::Food,
            base_price: 8.0,
        }]);
        let registry = StationRegistry::from_stations(vec![Station {
            symbol: StationSymbol::new("verdant_farm"),
            station_type: StationType::Farm,
            position: Position::new(0, 0),
            stock: Default::default(),
        }]);

        assert!(catalog.get(&CommoditySymbol::new("grain")).is_ok());
        assert_eq!(
            catalog.get(&CommoditySymbol::new("unobtainium")),
            Err(PriceError::UnknownCommodity(CommoditySymbol::new("unobtainium")))
        );
        assert_eq!(
            registry.get(&StationSymbol::new("ghost_station")).err(),
            Some(PriceError::UnknownStation(StationSymbol::new("ghost_station")))
        );
    }
}
