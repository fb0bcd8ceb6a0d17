use crate::error::{AdvisorError, Result};
use crate::models::{DataSource, Fertility, SoilReading};
use serde::Deserialize;

/// Soil Health Card payload.
#[derive(Debug, Deserialize)]
pub struct SoilHealthResponse {
    #[serde(default)]
    properties: Option<SoilProperties>,
    #[serde(default)]
    pub recommendations: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct SoilProperties {
    ph: f64,
    fertility: String,
    #[serde(default)]
    nitrogen: Option<f64>,
    #[serde(default)]
    phosphorus: Option<f64>,
    #[serde(default)]
    potassium: Option<f64>,
    #[serde(default)]
    soil_type: Option<String>,
}

impl SoilHealthResponse {
    pub fn into_reading(self) -> Result<SoilReading> {
        let props = self.properties.ok_or_else(|| {
            AdvisorError::DataSourceUnavailable("soil health card has no properties".into())
        })?;

        let reading = SoilReading {
            source: DataSource::SoilHealthCard,
            soil_type: props.soil_type,
            ph: props.ph,
            fertility: Fertility::from_str(&props.fertility),
            nitrogen: props.nitrogen,
            phosphorus: props.phosphorus,
            potassium: props.potassium,
        };
        reading.validate()?;
        Ok(reading)
    }
}
