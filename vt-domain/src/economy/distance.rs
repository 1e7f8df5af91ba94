use crate::economy::config::DistanceConfig;
use crate::model::Category;

/// Premium a buyer pays for goods hauled over `distance`. Quadratic in the
/// normalized distance so long-haul routes earn super-linearly more than
/// short hops, clamped to `[0, max_premium]` regardless of category.
pub fn distance_premium(config: &DistanceConfig, category: Category, distance: f64) -> f64 {
    let normalized = distance / config.distance_norm;
    let raw = config.coefficient(category) * normalized * normalized;
    raw.clamp(0.0, config.max_premium)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_scenario_microchips() {
        let config = DistanceConfig::default();

        // tech coefficient 3.0, norm 1500: d=750 -> 0.5 normalized -> 3.0 * 0.25
        assert!((distance_premium(&config, Category::Tech, 750.0) - 0.75).abs() < 1e-9);
        // d=1500 -> raw 3.0, clamped to the 2.5 ceiling
        assert_eq!(distance_premium(&config, Category::Tech, 1500.0), 2.5);
    }

    #[test]
    fn zero_distance_means_zero_premium() {
        let config = DistanceConfig::default();
        assert_eq!(distance_premium(&config, Category::Food, 0.0), 0.0);
    }

    #[test]
    fn premium_is_bounded_and_monotone() {
        let config = DistanceConfig::default();
        use strum::IntoEnumIterator;

        for category in Category::iter() {
            let mut previous = 0.0;
            for step in 0..200 {
                let distance = step as f64 * 100.0;
                let premium = distance_premium(&config, category, distance);
                assert!(premium >= 0.0 && premium <= config.max_premium);
                assert!(premium >= previous, "premium must not decrease with distance");
                previous = premium;
            }
        }
    }

    #[test]
    fn extreme_distance_saturates_at_ceiling() {
        let config = DistanceConfig::default();
        assert_eq!(distance_premium(&config, Category::Tech, 1.0e12), config.max_premium);
    }
}
