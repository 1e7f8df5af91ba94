use crate::catalog::{CommodityCatalog, StationRegistry};
use crate::economy::config::FeaturedConfig;
use crate::model::{CommoditySymbol, FeaturedRoute, StationSymbol};
use itertools::Itertools;
use rand::seq::SliceRandom;
use rand::Rng;

/// One seeding cycle: pick `config.count` distinct (origin, destination,
/// commodity) tuples from the arbitrage-friendly candidate set and inflate
/// each with a multiplier drawn from the configured range.
///
/// The RNG is injected so a fixed seed reproduces the identical set.
/// Candidates are sorted before sampling; map iteration order never leaks
/// into the result.
pub fn seed_featured_routes<R: Rng>(
    config: &FeaturedConfig,
    catalog: &CommodityCatalog,
    registry: &StationRegistry,
    rng: &mut R,
) -> Vec<FeaturedRoute> {
    let candidates = candidate_tuples(config, catalog, registry);

    let picked: Vec<&(StationSymbol, StationSymbol, CommoditySymbol)> =
        candidates.choose_multiple(rng, config.count).collect();

    picked
        .into_iter()
        .map(|(origin, destination, commodity)| FeaturedRoute {
            origin: origin.clone(),
            destination: destination.clone(),
            commodity: commodity.clone(),
            multiplier: rng.gen_range(config.min_multiplier..=config.max_multiplier),
        })
        .collect_vec()
}

/// Every ordered station pair crossed with the eligible commodities the
/// origin actually stocks, deduplicated by construction and sorted for
/// deterministic sampling.
fn candidate_tuples(
    config: &FeaturedConfig,
    catalog: &CommodityCatalog,
    registry: &StationRegistry,
) -> Vec<(StationSymbol, StationSymbol, CommoditySymbol)> {
    let stations = registry.iter().sorted_by_key(|s| s.symbol.clone()).collect_vec();

    let mut candidates = Vec::new();
    for origin in &stations {
        let eligible_goods = origin
            .stock
            .keys()
            .filter(|symbol| {
                catalog
                    .get(symbol)
                    .map(|c| config.categories.contains(&c.category))
                    .unwrap_or(false)
            })
            .sorted()
            .collect_vec();

        for destination in &stations {
            if destination.symbol == origin.symbol {
                continue;
            }
            for good in &eligible_goods {
                candidates.push((origin.symbol.clone(), destination.symbol.clone(), (*good).clone()));
            }
        }
    }

    candidates.sort();
    candidates
}
