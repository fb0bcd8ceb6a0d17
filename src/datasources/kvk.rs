use crate::error::{AdvisorError, Result};
use crate::models::{
    ClimateRequirements, CropProfile, CropSeason, Demand, MarketData, ParamRange, PriceRange,
    SoilRequirements, YieldRange,
};
use serde::Deserialize;

/// Krishi Vigyan Kendra crop recommendation payload. Either key may carry
/// the list depending on the endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct KvkCropResponse {
    #[serde(default)]
    recommendations: Vec<KvkCrop>,
    #[serde(default)]
    crops: Vec<KvkCrop>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct KvkCrop {
    pub crop_name: String,
    #[serde(default)]
    pub scientific_name: String,
    pub season: String,
    #[serde(default)]
    pub suitable_soil_types: Vec<String>,
    pub min_temp: Option<f64>,
    pub max_temp: Option<f64>,
    pub min_rainfall: Option<f64>,
    pub max_rainfall: Option<f64>,
    pub min_humidity: Option<f64>,
    pub max_humidity: Option<f64>,
    #[serde(default)]
    pub growth_period: Option<u32>,
    #[serde(default)]
    pub expected_yield: Option<String>,
    #[serde(default)]
    pub market_price: Option<f64>,
    #[serde(default)]
    pub crop_id: Option<String>,
}

fn required_range(label: &str, min: Option<f64>, max: Option<f64>) -> Result<ParamRange> {
    match (min, max) {
        (Some(min), Some(max)) => Ok(ParamRange::new(min, max)),
        _ => Err(AdvisorError::invalid(format!("{} range is incomplete", label))),
    }
}

/// "4-6 tons/hectare" -> (4, 6, "tons/hectare"); a single figure is used
/// for both ends.
fn parse_yield(text: &str) -> Option<YieldRange> {
    let text = text.trim();
    let (figures, unit) = match text.split_once(' ') {
        Some((f, u)) => (f, u.trim()),
        None => (text, ""),
    };
    let (average, max) = match figures.split_once('-') {
        Some((lo, hi)) => (lo.trim().parse().ok()?, hi.trim().parse().ok()?),
        None => {
            let v: f64 = figures.parse().ok()?;
            (v, v)
        }
    };
    Some(YieldRange {
        average,
        max,
        unit: unit.to_string(),
    })
}

fn slug(name: &str) -> String {
    name.trim()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
}

impl KvkCrop {
    pub fn into_profile(self) -> Result<CropProfile> {
        let seasons = match CropSeason::parse_list(&self.season) {
            s if s.is_empty() => {
                return Err(AdvisorError::invalid(format!(
                    "{}: unrecognised season '{}'",
                    self.crop_name, self.season
                )))
            }
            s => s,
        };

        let climate = ClimateRequirements {
            temperature: required_range("temperature", self.min_temp, self.max_temp)?,
            rainfall: required_range("rainfall", self.min_rainfall, self.max_rainfall)?,
            humidity: required_range("humidity", self.min_humidity, self.max_humidity)?,
        };

        let price = self.market_price.unwrap_or(0.0);
        let yield_range = self
            .expected_yield
            .as_deref()
            .and_then(parse_yield)
            .unwrap_or(YieldRange {
                average: 0.0,
                max: 0.0,
                unit: String::new(),
            });

        let profile = CropProfile {
            id: self.crop_id.unwrap_or_else(|| slug(&self.crop_name)),
            name: self.crop_name,
            scientific_name: self.scientific_name,
            variety: None,
            seasons,
            climate,
            // KVK does not publish pH; assume the broad agronomic band
            soil: SoilRequirements {
                ph: ParamRange::new(5.5, 7.5),
                soil_types: self.suitable_soil_types,
                drainage: None,
                organic_matter: None,
            },
            growth_period_days: self.growth_period.unwrap_or(0),
            nutrient_requirement: None,
            yield_range,
            market: MarketData {
                price_range: PriceRange {
                    min: price,
                    max: price,
                },
                demand: Demand::Medium,
                export_potential: false,
                storage_life_months: None,
            },
        };
        profile.validate()?;
        Ok(profile)
    }
}

impl KvkCropResponse {
    /// Convert every entry, skipping (and logging) the ones that do not
    /// describe a usable crop.
    pub fn into_profiles(self) -> Vec<CropProfile> {
        self.recommendations
            .into_iter()
            .chain(self.crops)
            .filter_map(|crop| {
                let name = crop.crop_name.clone();
                match crop.into_profile() {
                    Ok(profile) => Some(profile),
                    Err(e) => {
                        tracing::warn!(crop = %name, "Skipping KVK crop: {}", e);
                        None
                    }
                }
            })
            .collect()
    }
}
