use crate::error::{AdvisorError, Result};
use crate::models::{DataSource, EnvironmentReading, RainfallPeriod};
use serde::Deserialize;

/// India Meteorological Department weather payload.
#[derive(Debug, Deserialize)]
pub struct ImdWeatherResponse {
    #[serde(default)]
    current: Option<ImdCurrent>,
    #[serde(default)]
    forecast: Vec<ImdForecastDay>,
}

#[derive(Debug, Deserialize)]
struct ImdCurrent {
    temp: Option<f64>,
    humidity: Option<f64>,
    #[serde(default)]
    rainfall: Option<f64>,
    #[serde(default)]
    wind_speed: Option<f64>,
    #[serde(default)]
    pressure: Option<f64>,
    #[serde(default)]
    description: Option<String>,
}

#[derive(Debug, Deserialize)]
#[allow(dead_code)]
struct ImdForecastDay {
    date: String,
    temp_min: f64,
    temp_max: f64,
    humidity: f64,
    rainfall: f64,
}

impl ImdWeatherResponse {
    /// Current conditions as a reading. Temperature and humidity are
    /// required; IMD rainfall is a daily total.
    pub fn into_reading(self) -> Result<EnvironmentReading> {
        let current = self.current.ok_or_else(|| {
            AdvisorError::DataSourceUnavailable("IMD response has no current conditions".into())
        })?;
        let (temperature_c, humidity_percent) = match (current.temp, current.humidity) {
            (Some(t), Some(h)) => (t, h),
            _ => {
                return Err(AdvisorError::invalid(
                    "IMD current conditions lack temperature or humidity",
                ))
            }
        };

        Ok(EnvironmentReading {
            source: DataSource::Imd,
            temperature_c,
            humidity_percent,
            rainfall_mm: current.rainfall.unwrap_or(0.0),
            rainfall_period: RainfallPeriod::Daily,
            wind_speed: current.wind_speed,
            pressure_hpa: current.pressure,
            uv_index: None,
            description: current.description,
        })
    }

    /// Mean daily rainfall across the forecast days, if any.
    pub fn forecast_mean_rainfall(&self) -> Option<f64> {
        if self.forecast.is_empty() {
            return None;
        }
        let total: f64 = self.forecast.iter().map(|d| d.rainfall).sum();
        Some(total / self.forecast.len() as f64)
    }
}
