use super::Nutrients;
use crate::error::{AdvisorError, Result};
use serde::{Deserialize, Serialize};

/// Cropping season tag. Indian agricultural seasons plus temperate ones
/// for crops catalogued the generic way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CropSeason {
    Kharif,
    Rabi,
    Zaid,
    YearRound,
    Spring,
    Summer,
    Fall,
    Winter,
}

impl CropSeason {
    pub fn as_str(&self) -> &'static str {
        match self {
            CropSeason::Kharif => "Kharif",
            CropSeason::Rabi => "Rabi",
            CropSeason::Zaid => "Zaid",
            CropSeason::YearRound => "Year-round",
            CropSeason::Spring => "Spring",
            CropSeason::Summer => "Summer",
            CropSeason::Fall => "Fall",
            CropSeason::Winter => "Winter",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().replace(['-', '_', ' '], "").as_str() {
            "kharif" | "monsoon" => Some(CropSeason::Kharif),
            "rabi" => Some(CropSeason::Rabi),
            "zaid" | "zayed" => Some(CropSeason::Zaid),
            "yearround" | "allyear" | "perennial" => Some(CropSeason::YearRound),
            "spring" => Some(CropSeason::Spring),
            "summer" => Some(CropSeason::Summer),
            "fall" | "autumn" => Some(CropSeason::Fall),
            "winter" => Some(CropSeason::Winter),
            _ => None,
        }
    }

    /// Parse a combined label like "Spring/Summer" or "Kharif, Rabi".
    /// Unknown fragments are skipped.
    pub fn parse_list(s: &str) -> Vec<Self> {
        let mut seasons: Vec<Self> = Vec::new();
        for season in s.split(['/', ',', '&']).filter_map(Self::from_str) {
            if !seasons.contains(&season) {
                seasons.push(season);
            }
        }
        seasons
    }

    pub fn is_agricultural(&self) -> bool {
        matches!(
            self,
            CropSeason::Kharif | CropSeason::Rabi | CropSeason::Zaid
        )
    }

    pub fn is_temperate(&self) -> bool {
        matches!(
            self,
            CropSeason::Spring | CropSeason::Summer | CropSeason::Fall | CropSeason::Winter
        )
    }
}

impl std::fmt::Display for CropSeason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Tolerable range for one numeric parameter, with an optional optimum.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParamRange {
    pub min: f64,
    pub max: f64,
    #[serde(default)]
    pub optimal: Option<f64>,
}

impl ParamRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self {
            min,
            max,
            optimal: None,
        }
    }

    pub const fn with_optimal(min: f64, max: f64, optimal: f64) -> Self {
        Self {
            min,
            max,
            optimal: Some(optimal),
        }
    }

    pub fn width(&self) -> f64 {
        self.max - self.min
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    pub fn validate(&self, label: &str) -> Result<()> {
        let optimal_ok = self.optimal.map_or(true, f64::is_finite);
        if !self.min.is_finite() || !self.max.is_finite() || !optimal_ok {
            return Err(AdvisorError::invalid(format!(
                "{} range contains a non-numeric bound",
                label
            )));
        }
        if self.min > self.max {
            return Err(AdvisorError::invalid(format!(
                "{} range min {} exceeds max {}",
                label, self.min, self.max
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClimateRequirements {
    pub temperature: ParamRange,
    /// Annual rainfall in mm.
    pub rainfall: ParamRange,
    pub humidity: ParamRange,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SoilRequirements {
    pub ph: ParamRange,
    pub soil_types: Vec<String>,
    #[serde(default)]
    pub drainage: Option<String>,
    #[serde(default)]
    pub organic_matter: Option<String>,
}

impl SoilRequirements {
    /// Categorical soil-type overlap. Tags compare case-insensitively and a
    /// tag contained in the other ("Loam" vs "Sandy loam") counts as overlap.
    pub fn accepts_soil_type(&self, soil_type: &str) -> bool {
        let available = normalize_tag(soil_type);
        if available.is_empty() {
            return true;
        }
        self.soil_types.iter().any(|tag| {
            let tag = normalize_tag(tag);
            if tag.is_empty() {
                return false;
            }
            tag == "all soil types"
                || tag == available
                || available.contains(&tag)
                || tag.contains(&available)
        })
    }
}

fn normalize_tag(tag: &str) -> String {
    tag.trim().to_lowercase()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Demand {
    Low,
    Medium,
    High,
}

impl Demand {
    pub fn as_str(&self) -> &'static str {
        match self {
            Demand::Low => "low",
            Demand::Medium => "medium",
            Demand::High => "high",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "low" => Some(Demand::Low),
            "medium" => Some(Demand::Medium),
            "high" => Some(Demand::High),
            _ => None,
        }
    }
}

impl std::fmt::Display for Demand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

impl PriceRange {
    pub fn mean(&self) -> f64 {
        (self.min + self.max) / 2.0
    }

    /// Range width relative to the mean price.
    pub fn volatility(&self) -> f64 {
        (self.max - self.min) / self.mean()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketData {
    /// Price per quintal.
    pub price_range: PriceRange,
    pub demand: Demand,
    #[serde(default)]
    pub export_potential: bool,
    #[serde(default)]
    pub storage_life_months: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YieldRange {
    pub average: f64,
    pub max: f64,
    pub unit: String,
}

impl std::fmt::Display for YieldRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{} {}", self.average, self.max, self.unit)
    }
}

/// Static reference data for one crop. Read-only to the scoring core.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CropProfile {
    pub id: String,
    pub name: String,
    pub scientific_name: String,
    #[serde(default)]
    pub variety: Option<String>,
    pub seasons: Vec<CropSeason>,
    pub climate: ClimateRequirements,
    pub soil: SoilRequirements,
    pub growth_period_days: u32,
    #[serde(default)]
    pub nutrient_requirement: Option<Nutrients>,
    pub yield_range: YieldRange,
    pub market: MarketData,
}

impl CropProfile {
    pub fn season_label(&self) -> String {
        self.seasons
            .iter()
            .map(|s| s.as_str())
            .collect::<Vec<_>>()
            .join("/")
    }

    pub fn is_year_round(&self) -> bool {
        self.seasons.contains(&CropSeason::YearRound)
    }

    pub fn has_season(&self, season: CropSeason) -> bool {
        self.seasons.contains(&season)
    }

    pub fn validate(&self) -> Result<()> {
        self.climate.temperature.validate("temperature")?;
        self.climate.rainfall.validate("rainfall")?;
        self.climate.humidity.validate("humidity")?;
        self.soil.ph.validate("pH")?;
        if self.soil.ph.min < 0.0 || self.soil.ph.max > 14.0 {
            return Err(AdvisorError::invalid(format!(
                "{}: pH range must lie within 0-14",
                self.name
            )));
        }
        let price = &self.market.price_range;
        if !price.min.is_finite() || !price.max.is_finite() || price.min < 0.0 || price.min > price.max
        {
            return Err(AdvisorError::invalid(format!(
                "{}: invalid price range {}-{}",
                self.name, price.min, price.max
            )));
        }
        if let Some(req) = &self.nutrient_requirement {
            if !req.is_finite() || !req.is_non_negative() {
                return Err(AdvisorError::invalid(format!(
                    "{}: invalid nutrient requirement",
                    self.name
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn season_from_str_valid() {
        assert_eq!(CropSeason::from_str("Kharif"), Some(CropSeason::Kharif));
        assert_eq!(CropSeason::from_str("rabi"), Some(CropSeason::Rabi));
        assert_eq!(CropSeason::from_str("Year-round"), Some(CropSeason::YearRound));
        assert_eq!(CropSeason::from_str("year round"), Some(CropSeason::YearRound));
        assert_eq!(CropSeason::from_str("Autumn"), Some(CropSeason::Fall));
    }

    #[test]
    fn season_from_str_invalid() {
        assert_eq!(CropSeason::from_str("monsoonal"), None);
        assert_eq!(CropSeason::from_str(""), None);
    }

    #[test]
    fn season_parse_list() {
        assert_eq!(
            CropSeason::parse_list("Spring/Summer"),
            vec![CropSeason::Spring, CropSeason::Summer]
        );
        assert_eq!(
            CropSeason::parse_list("Kharif, Rabi / Kharif"),
            vec![CropSeason::Kharif, CropSeason::Rabi]
        );
        assert!(CropSeason::parse_list("sometime").is_empty());
    }

    #[test]
    fn soil_type_overlap() {
        let req = SoilRequirements {
            ph: ParamRange::new(5.5, 7.0),
            soil_types: vec!["Clay".into(), "Loamy".into()],
            drainage: None,
            organic_matter: None,
        };
        assert!(req.accepts_soil_type("loamy"));
        assert!(req.accepts_soil_type("Heavy clay"));
        assert!(!req.accepts_soil_type("Sandy"));

        let any = SoilRequirements {
            soil_types: vec!["All soil types".into()],
            ..req
        };
        assert!(any.accepts_soil_type("Sandy"));
    }

    #[test]
    fn blank_soil_tag_matches_nothing() {
        let req = SoilRequirements {
            ph: ParamRange::new(5.5, 7.0),
            soil_types: vec!["".into(), "  ".into(), "Clay".into()],
            drainage: None,
            organic_matter: None,
        };
        assert!(!req.accepts_soil_type("Sandy"));
        assert!(req.accepts_soil_type("Clay"));
    }

    #[test]
    fn param_range_validation() {
        assert!(ParamRange::new(10.0, 20.0).validate("t").is_ok());
        assert!(ParamRange::new(20.0, 10.0).validate("t").is_err());
        assert!(ParamRange::new(f64::NAN, 10.0).validate("t").is_err());
        assert!(ParamRange::with_optimal(10.0, 20.0, f64::INFINITY)
            .validate("t")
            .is_err());
    }

    #[test]
    fn price_volatility() {
        let range = PriceRange {
            min: 2200.0,
            max: 2800.0,
        };
        assert!((range.mean() - 2500.0).abs() < 0.001);
        assert!((range.volatility() - 0.24).abs() < 0.0001);
    }
}
