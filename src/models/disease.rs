use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpreadRate {
    Low,
    Medium,
    High,
}

/// Conditions under which a disease takes hold.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeverityFactors {
    /// (min, max) in °C
    pub temperature_range: (f64, f64),
    pub humidity_threshold: f64,
    pub spread_rate: SpreadRate,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlantDisease {
    pub id: String,
    pub name: String,
    pub scientific_name: String,
    pub affected_crops: Vec<String>,
    pub symptoms: Vec<String>,
    pub causes: Vec<String>,
    pub treatment: Vec<String>,
    pub prevention: Vec<String>,
    pub severity_factors: SeverityFactors,
}

impl PlantDisease {
    pub fn affects(&self, crop_name: &str) -> bool {
        let crop = crop_name.trim().to_lowercase();
        self.affected_crops
            .iter()
            .any(|c| c.trim().to_lowercase() == crop)
    }

    /// True when weather sits inside the disease's infection window.
    pub fn conditions_favorable(&self, temperature_c: f64, humidity_percent: f64) -> bool {
        let (lo, hi) = self.severity_factors.temperature_range;
        temperature_c >= lo
            && temperature_c <= hi
            && humidity_percent >= self.severity_factors.humidity_threshold
    }
}
