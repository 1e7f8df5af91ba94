use chrono::{DateTime, Utc};
use itertools::Itertools;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};
use tracing::{event, Level};
use vt_domain::{
    find_arbitrage_routes, price_quote, seed_featured_routes, CommodityCatalog, CommoditySymbol, EconomyConfig, FeaturedRouteSet, PriceError, PriceQuote,
    RecipeBook, StationRegistry, StationSymbol, TradeRoute,
};

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EngineStatus {
    pub started_at: DateTime<Utc>,
    pub commodities: usize,
    pub stations: usize,
    pub recipes: usize,
    pub featured_routes: usize,
    pub last_seeded_at: DateTime<Utc>,
}

/// Long-lived façade over the pure pricing engine.
///
/// Config, catalog and recipes are immutable after construction. The
/// station registry snapshot is shared with the external trading
/// subsystem, which mutates stock levels between queries. The featured
/// set is the only state this engine owns; each seeding cycle replaces it
/// wholesale so concurrent readers never observe a partial set.
pub struct MarketEngine {
    config: EconomyConfig,
    catalog: CommodityCatalog,
    recipes: RecipeBook,
    registry: Arc<RwLock<StationRegistry>>,
    featured: Arc<RwLock<FeaturedRouteSet>>,
    rng: Mutex<StdRng>,
    started_at: DateTime<Utc>,
}

impl MarketEngine {
    pub fn new(
        config: EconomyConfig,
        catalog: CommodityCatalog,
        recipes: RecipeBook,
        registry: StationRegistry,
        seed: Option<u64>,
    ) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        MarketEngine {
            config,
            catalog,
            recipes,
            registry: Arc::new(RwLock::new(registry)),
            featured: Arc::new(RwLock::new(FeaturedRouteSet::empty(Utc::now()))),
            rng: Mutex::new(rng),
            started_at: Utc::now(),
        }
    }

    pub fn config(&self) -> &EconomyConfig {
        &self.config
    }

    pub fn catalog(&self) -> &CommodityCatalog {
        &self.catalog
    }

    /// Handle for the trading subsystem; stock mutation happens through
    /// this, never inside the engine.
    pub fn registry_handle(&self) -> Arc<RwLock<StationRegistry>> {
        Arc::clone(&self.registry)
    }

    /// Local quote: what the station charges and pays on the spot, with
    /// no haul distance involved.
    pub async fn quote(&self, commodity: &CommoditySymbol, station: &StationSymbol) -> Result<PriceQuote, PriceError> {
        let registry = self.registry.read().await;
        price_quote(&self.config, &self.catalog, &registry, &self.recipes, commodity, station, 0.0)
    }

    /// Quote at `destination` for goods hauled from `origin`, including
    /// the distance premium and any featured-route inflation for the
    /// (origin, destination, commodity) tuple.
    pub async fn route_quote(
        &self,
        commodity: &CommoditySymbol,
        origin: &StationSymbol,
        destination: &StationSymbol,
    ) -> Result<PriceQuote, PriceError> {
        let registry = self.registry.read().await;
        let distance = registry.get(origin)?.distance_to(registry.get(destination)?);

        let mut quote = price_quote(&self.config, &self.catalog, &registry, &self.recipes, commodity, destination, distance)?;

        if let Some(multiplier) = self.featured.read().await.multiplier_for(origin, destination, commodity) {
            quote.sell_price *= multiplier;
        }

        Ok(quote)
    }

    /// Every catalog commodity quoted locally at one station.
    pub async fn station_quotes(&self, station: &StationSymbol) -> Result<Vec<PriceQuote>, PriceError> {
        let registry = self.registry.read().await;
        registry.get(station)?;

        self.catalog
            .iter()
            .sorted_by_key(|c| c.symbol.clone())
            .map(|c| price_quote(&self.config, &self.catalog, &registry, &self.recipes, &c.symbol, station, 0.0))
            .collect()
    }

    /// Every catalog commodity quoted for the origin → destination haul.
    pub async fn route_quotes(&self, origin: &StationSymbol, destination: &StationSymbol) -> Result<Vec<PriceQuote>, PriceError> {
        let symbols = self
            .catalog
            .iter()
            .map(|c| c.symbol.clone())
            .sorted()
            .collect_vec();

        let mut quotes = Vec::with_capacity(symbols.len());
        for symbol in &symbols {
            quotes.push(self.route_quote(symbol, origin, destination).await?);
        }
        Ok(quotes)
    }

    /// Current best hauls across the whole registry, featured inflation
    /// included.
    pub async fn arbitrage_routes(&self) -> Vec<TradeRoute> {
        let registry = self.registry.read().await;
        let featured = self.featured.read().await;
        find_arbitrage_routes(&self.config, &self.catalog, &registry, &self.recipes, Some(&featured))
    }

    /// One seeding cycle: draw a fresh featured set and swap it in
    /// atomically. Returns the number of routes seeded.
    pub async fn reseed(&self) -> usize {
        let next = {
            let registry = self.registry.read().await;
            let mut rng = self.rng.lock().await;
            seed_featured_routes(&self.config.featured, &self.catalog, &registry, &mut *rng)
        };
        let count = next.len();

        *self.featured.write().await = FeaturedRouteSet::new(next, Utc::now());
        event!(Level::INFO, "Seeded {} featured routes", count);

        count
    }

    pub async fn featured_routes(&self) -> FeaturedRouteSet {
        self.featured.read().await.clone()
    }

    pub async fn status(&self) -> EngineStatus {
        let registry = self.registry.read().await;
        let featured = self.featured.read().await;

        EngineStatus {
            started_at: self.started_at,
            commodities: self.catalog.len(),
            stations: registry.len(),
            recipes: self.recipes.len(),
            featured_routes: featured.routes.len(),
            last_seeded_at: featured.seeded_at,
        }
    }
}
