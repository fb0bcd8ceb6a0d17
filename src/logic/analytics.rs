use crate::catalog::Catalog;
use crate::models::{CropProfile, CropSeason, Demand, SpreadRate};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct SeasonCount {
    pub season: CropSeason,
    pub crops: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Distribution {
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct YieldAnalysis {
    pub average_max_yield: f64,
    pub highest_yield_crop: Option<String>,
    /// max yield above 10, 5-10 and below 5 (catalog units)
    pub distribution: Distribution,
}

#[derive(Debug, Clone, Serialize)]
pub struct MarketTrends {
    pub demand: Distribution,
    pub export_crops: usize,
    pub top_export_crops: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ClimateAdaptation {
    /// Five widest temperature tolerance bands, widest first.
    pub most_adaptable: Vec<String>,
    pub average_temperature_tolerance: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct DiseaseOverview {
    pub total: usize,
    pub by_spread_rate: Distribution,
    /// Crops ordered by how many catalogued diseases affect them.
    pub most_vulnerable_crops: Vec<(String, usize)>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CatalogAnalytics {
    pub total_crops: usize,
    pub crops_by_season: Vec<SeasonCount>,
    pub yield_analysis: YieldAnalysis,
    pub market_trends: MarketTrends,
    pub climate_adaptation: ClimateAdaptation,
    pub diseases: DiseaseOverview,
}

const LISTED_SEASONS: [CropSeason; 8] = [
    CropSeason::Kharif,
    CropSeason::Rabi,
    CropSeason::Zaid,
    CropSeason::YearRound,
    CropSeason::Spring,
    CropSeason::Summer,
    CropSeason::Fall,
    CropSeason::Winter,
];

pub fn analyze(catalog: &Catalog) -> CatalogAnalytics {
    CatalogAnalytics {
        total_crops: catalog.crops.len(),
        crops_by_season: crops_by_season(&catalog.crops),
        yield_analysis: yield_analysis(&catalog.crops),
        market_trends: market_trends(&catalog.crops),
        climate_adaptation: climate_adaptation(&catalog.crops),
        diseases: disease_overview(catalog),
    }
}

/// Crops per season tag. A crop listed under two seasons counts in both;
/// seasons with no crops are omitted.
pub fn crops_by_season(crops: &[CropProfile]) -> Vec<SeasonCount> {
    LISTED_SEASONS
        .iter()
        .map(|&season| SeasonCount {
            season,
            crops: crops.iter().filter(|c| c.has_season(season)).count(),
        })
        .filter(|s| s.crops > 0)
        .collect()
}

pub fn yield_analysis(crops: &[CropProfile]) -> YieldAnalysis {
    let yields: Vec<f64> = crops
        .iter()
        .map(|c| c.yield_range.max)
        .filter(|y| y.is_finite())
        .collect();

    let average_max_yield = if yields.is_empty() {
        0.0
    } else {
        yields.iter().sum::<f64>() / yields.len() as f64
    };

    let highest_yield_crop = crops
        .iter()
        .filter(|c| c.yield_range.max.is_finite())
        .max_by(|a, b| a.yield_range.max.total_cmp(&b.yield_range.max))
        .map(|c| c.name.clone());

    let mut distribution = Distribution::default();
    for y in yields {
        if y > 10.0 {
            distribution.high += 1;
        } else if y >= 5.0 {
            distribution.medium += 1;
        } else {
            distribution.low += 1;
        }
    }

    YieldAnalysis {
        average_max_yield,
        highest_yield_crop,
        distribution,
    }
}

pub fn market_trends(crops: &[CropProfile]) -> MarketTrends {
    let mut demand = Distribution::default();
    for crop in crops {
        match crop.market.demand {
            Demand::High => demand.high += 1,
            Demand::Medium => demand.medium += 1,
            Demand::Low => demand.low += 1,
        }
    }

    let exporters: Vec<&CropProfile> = crops
        .iter()
        .filter(|c| c.market.export_potential)
        .collect();

    MarketTrends {
        demand,
        export_crops: exporters.len(),
        top_export_crops: exporters.iter().take(5).map(|c| c.name.clone()).collect(),
    }
}

pub fn climate_adaptation(crops: &[CropProfile]) -> ClimateAdaptation {
    let mut bands: Vec<(&str, f64)> = crops
        .iter()
        .map(|c| (c.name.as_str(), c.climate.temperature.width()))
        .filter(|(_, w)| w.is_finite())
        .collect();

    let average_temperature_tolerance = if bands.is_empty() {
        0.0
    } else {
        bands.iter().map(|(_, w)| w).sum::<f64>() / bands.len() as f64
    };

    bands.sort_by(|a, b| b.1.total_cmp(&a.1));

    ClimateAdaptation {
        most_adaptable: bands.iter().take(5).map(|(n, _)| n.to_string()).collect(),
        average_temperature_tolerance,
    }
}

pub fn disease_overview(catalog: &Catalog) -> DiseaseOverview {
    let mut by_spread_rate = Distribution::default();
    for disease in &catalog.diseases {
        match disease.severity_factors.spread_rate {
            SpreadRate::High => by_spread_rate.high += 1,
            SpreadRate::Medium => by_spread_rate.medium += 1,
            SpreadRate::Low => by_spread_rate.low += 1,
        }
    }

    let mut vulnerable: Vec<(String, usize)> = catalog
        .crops
        .iter()
        .map(|c| (c.name.clone(), catalog.diseases_for_crop(&c.name).len()))
        .filter(|(_, n)| *n > 0)
        .collect();
    vulnerable.sort_by(|a, b| b.1.cmp(&a.1));

    DiseaseOverview {
        total: catalog.diseases.len(),
        by_spread_rate,
        most_vulnerable_crops: vulnerable,
    }
}
