use crate::economy::config::ScarcityConfig;
use crate::model::StockLevel;

/// `1 + k * (target - current) / target`, before side-specific clamping.
/// A zero target means the station does not track the commodity, which is
/// a configuration gap and resolves neutral.
fn raw_multiplier(config: &ScarcityConfig, stock: StockLevel) -> f64 {
    if stock.target == 0 {
        return 1.0;
    }
    let pressure = (stock.target as f64 - stock.current as f64) / stock.target as f64;
    1.0 + config.stock_coefficient * pressure
}

pub fn buy_multiplier(config: &ScarcityConfig, stock: StockLevel) -> f64 {
    config.buy_range.clamp(raw_multiplier(config, stock))
}

pub fn sell_multiplier(config: &ScarcityConfig, stock: StockLevel) -> f64 {
    config.sell_range.clamp(raw_multiplier(config, stock))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_stock_saturates_at_configured_max() {
        let config = ScarcityConfig::default();
        let empty = StockLevel::new(0, 100);

        assert_eq!(sell_multiplier(&config, empty), config.sell_range.max);
        assert_eq!(buy_multiplier(&config, empty), config.buy_range.max);
    }

    #[test]
    fn oversupply_saturates_at_configured_min() {
        let config = ScarcityConfig::default();
        let flooded = StockLevel::new(100_000, 100);

        assert_eq!(sell_multiplier(&config, flooded), config.sell_range.min);
        assert_eq!(buy_multiplier(&config, flooded), config.buy_range.min);
    }

    #[test]
    fn multiplier_is_bounded_and_monotone_in_stock() {
        let config = ScarcityConfig::default();

        let mut previous = f64::INFINITY;
        for current in 0..2000 {
            let m = sell_multiplier(&config, StockLevel::new(current, 500));
            assert!(m >= config.sell_range.min && m <= config.sell_range.max);
            assert!(m <= previous, "more stock must never raise price pressure");
            previous = m;
        }
    }

    #[test]
    fn balanced_stock_is_neutral() {
        let config = ScarcityConfig::default();
        let balanced = StockLevel::new(500, 500);

        assert_eq!(sell_multiplier(&config, balanced), 1.0);
        assert_eq!(buy_multiplier(&config, balanced), 1.0);
    }

    #[test]
    fn zero_target_resolves_neutral() {
        let config = ScarcityConfig::default();
        let untracked = StockLevel::new(40, 0);

        assert_eq!(sell_multiplier(&config, untracked), 1.0);
        assert_eq!(buy_multiplier(&config, untracked), 1.0);
    }
}
