use crate::models::{CropProfile, Demand};

/// Market attractiveness in [0,1]: demand (up to 0.4), export potential
/// (flat 0.3) and price stability (up to 0.3).
pub fn market_score(crop: &CropProfile) -> f64 {
    let market = &crop.market;

    let demand: f64 = match market.demand {
        Demand::High => 0.4,
        Demand::Medium => 0.25,
        Demand::Low => 0.1,
    };

    let export = if market.export_potential { 0.3 } else { 0.0 };

    let volatility = market.price_range.volatility();
    let stability = if !volatility.is_finite() {
        0.1
    } else if volatility < 0.2 {
        0.3
    } else if volatility < 0.4 {
        0.2
    } else {
        0.1
    };

    (demand + export + stability).min(1.0)
}

pub fn demand_multiplier(demand: Demand) -> f64 {
    match demand {
        Demand::High => 1.5,
        Demand::Medium => 1.0,
        Demand::Low => 0.5,
    }
}

/// Price-driven profitability index: mean price scaled by demand.
pub fn profitability_index(crop: &CropProfile) -> f64 {
    let index = crop.market.price_range.mean() * demand_multiplier(crop.market.demand);
    if index.is_finite() {
        index
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::models::PriceRange;

    #[test]
    fn market_score_components() {
        let catalog = Catalog::builtin();
        let mut crop = catalog.find_crop("rice").unwrap().clone();

        crop.market.demand = Demand::High;
        crop.market.export_potential = true;
        crop.market.price_range = PriceRange {
            min: 2200.0,
            max: 2800.0,
        };
        // 0.4 + 0.3 + 0.2 (volatility 0.24)
        assert!((market_score(&crop) - 0.9).abs() < 1e-9);

        crop.market.demand = Demand::Low;
        crop.market.export_potential = false;
        crop.market.price_range = PriceRange {
            min: 1000.0,
            max: 3000.0,
        };
        // 0.1 + 0 + 0.1 (volatility 1.0)
        assert!((market_score(&crop) - 0.2).abs() < 1e-9);

        crop.market.demand = Demand::Medium;
        crop.market.price_range = PriceRange {
            min: 1900.0,
            max: 2100.0,
        };
        // 0.25 + 0 + 0.3 (volatility 0.1)
        assert!((market_score(&crop) - 0.55).abs() < 1e-9);
    }

    #[test]
    fn market_score_never_exceeds_one() {
        let catalog = Catalog::builtin();
        for crop in &catalog.crops {
            let score = market_score(crop);
            assert!((0.0..=1.0).contains(&score), "{} scored {}", crop.name, score);
        }
    }

    #[test]
    fn zero_price_counts_as_volatile() {
        let catalog = Catalog::builtin();
        let mut crop = catalog.find_crop("rice").unwrap().clone();
        crop.market.demand = Demand::Low;
        crop.market.export_potential = false;
        crop.market.price_range = PriceRange { min: 0.0, max: 0.0 };
        assert!((market_score(&crop) - 0.2).abs() < 1e-9);
        assert_eq!(profitability_index(&crop), 0.0);
    }

    #[test]
    fn profitability_index_scales_mean_price() {
        let catalog = Catalog::builtin();
        let mut crop = catalog.find_crop("rice").unwrap().clone();
        crop.market.price_range = PriceRange {
            min: 2000.0,
            max: 3000.0,
        };
        crop.market.demand = Demand::High;
        assert!((profitability_index(&crop) - 3750.0).abs() < 1e-9);
        crop.market.demand = Demand::Low;
        assert!((profitability_index(&crop) - 1250.0).abs() < 1e-9);
    }
}
