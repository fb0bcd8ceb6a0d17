use crate::error::{AdvisorError, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DataSource {
    OpenWeatherMap,
    Imd,
    SoilHealthCard,
    Mock,
    Manual,
}

impl DataSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            DataSource::OpenWeatherMap => "OpenWeatherMap",
            DataSource::Imd => "IMD",
            DataSource::SoilHealthCard => "Soil Health Card",
            DataSource::Mock => "Mock",
            DataSource::Manual => "Manual",
        }
    }
}

impl std::fmt::Display for DataSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Period a rainfall figure covers. Crop requirements are annual totals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RainfallPeriod {
    Daily,
    #[default]
    Annual,
}

/// Snapshot of current weather handed to the scoring core.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnvironmentReading {
    pub source: DataSource,
    pub temperature_c: f64,
    pub humidity_percent: f64,
    pub rainfall_mm: f64,
    #[serde(default)]
    pub rainfall_period: RainfallPeriod,
    #[serde(default)]
    pub wind_speed: Option<f64>,
    #[serde(default)]
    pub pressure_hpa: Option<f64>,
    #[serde(default)]
    pub uv_index: Option<f64>,
    #[serde(default)]
    pub description: Option<String>,
}

impl EnvironmentReading {
    pub fn new(
        source: DataSource,
        temperature_c: f64,
        humidity_percent: f64,
        rainfall_mm: f64,
        rainfall_period: RainfallPeriod,
    ) -> Self {
        Self {
            source,
            temperature_c,
            humidity_percent,
            rainfall_mm,
            rainfall_period,
            wind_speed: None,
            pressure_hpa: None,
            uv_index: None,
            description: None,
        }
    }

    pub fn annual_rainfall_mm(&self) -> f64 {
        match self.rainfall_period {
            RainfallPeriod::Daily => self.rainfall_mm * 365.0,
            RainfallPeriod::Annual => self.rainfall_mm,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !self.temperature_c.is_finite() {
            return Err(AdvisorError::invalid("temperature is not a number"));
        }
        if !self.humidity_percent.is_finite() || !(0.0..=100.0).contains(&self.humidity_percent)
        {
            return Err(AdvisorError::invalid(format!(
                "humidity {} is outside 0-100%",
                self.humidity_percent
            )));
        }
        if !self.rainfall_mm.is_finite() || self.rainfall_mm < 0.0 {
            return Err(AdvisorError::invalid(format!(
                "rainfall {} must be a non-negative number",
                self.rainfall_mm
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Fertility {
    Low,
    Medium,
    High,
    Unknown,
}

impl Fertility {
    pub fn as_str(&self) -> &'static str {
        match self {
            Fertility::Low => "low",
            Fertility::Medium => "medium",
            Fertility::High => "high",
            Fertility::Unknown => "unknown",
        }
    }

    /// Anything unrecognised maps to `Unknown` rather than failing.
    pub fn from_str(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "low" => Fertility::Low,
            "medium" | "moderate" => Fertility::Medium,
            "high" => Fertility::High,
            _ => Fertility::Unknown,
        }
    }

    /// Fitness contribution used by the soil evaluator.
    pub fn score(&self) -> f64 {
        match self {
            Fertility::High => 1.0,
            Fertility::Medium => 0.7,
            Fertility::Low => 0.4,
            Fertility::Unknown => 0.5,
        }
    }

    /// Multiplier applied to baseline soil nutrient supply.
    pub fn supply_multiplier(&self) -> f64 {
        match self {
            Fertility::High => 1.5,
            Fertility::Medium => 1.0,
            Fertility::Low | Fertility::Unknown => 0.5,
        }
    }
}

impl std::fmt::Display for Fertility {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SoilReading {
    pub source: DataSource,
    /// Categorical texture tag such as "Loamy" or "Clay".
    #[serde(default)]
    pub soil_type: Option<String>,
    pub ph: f64,
    pub fertility: Fertility,
    /// Available nutrients in kg/ha, when a soil test measured them.
    #[serde(default)]
    pub nitrogen: Option<f64>,
    #[serde(default)]
    pub phosphorus: Option<f64>,
    #[serde(default)]
    pub potassium: Option<f64>,
}

impl SoilReading {
    pub fn new(ph: f64, fertility: Fertility) -> Self {
        Self {
            source: DataSource::Manual,
            soil_type: None,
            ph,
            fertility,
            nitrogen: None,
            phosphorus: None,
            potassium: None,
        }
    }

    pub fn with_soil_type(mut self, soil_type: impl Into<String>) -> Self {
        self.soil_type = Some(soil_type.into());
        self
    }

    pub fn with_nutrients(mut self, nitrogen: f64, phosphorus: f64, potassium: f64) -> Self {
        self.nitrogen = Some(nitrogen);
        self.phosphorus = Some(phosphorus);
        self.potassium = Some(potassium);
        self
    }

    /// pH between 6.0 and 7.5 keeps nutrients fully available.
    pub fn ph_in_availability_band(&self) -> bool {
        (6.0..=7.5).contains(&self.ph)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.ph.is_finite() || !(0.0..=14.0).contains(&self.ph) {
            return Err(AdvisorError::invalid(format!(
                "soil pH {} is outside 0-14",
                self.ph
            )));
        }
        for (label, value) in [
            ("nitrogen", self.nitrogen),
            ("phosphorus", self.phosphorus),
            ("potassium", self.potassium),
        ] {
            if let Some(v) = value {
                if !v.is_finite() || v < 0.0 {
                    return Err(AdvisorError::invalid(format!(
                        "soil {} {} must be a non-negative number",
                        label, v
                    )));
                }
            }
        }
        Ok(())
    }
}
