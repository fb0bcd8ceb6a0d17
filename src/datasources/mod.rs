pub mod imd;
pub mod kvk;
pub mod mock;
pub mod openweathermap;
pub mod soilhealth;

pub use imd::ImdWeatherResponse;
pub use kvk::{KvkCrop, KvkCropResponse};
pub use mock::mock_weather;
pub use openweathermap::{OpenWeatherMapClient, OwmCurrentResponse};
pub use soilhealth::SoilHealthResponse;

use crate::config::Config;
use crate::error::Result;
use crate::models::EnvironmentReading;

/// Upstream weather payload, one variant per provider. Converted into an
/// [`EnvironmentReading`] before it reaches the scoring core.
#[derive(Debug)]
pub enum WeatherPayload {
    OpenWeatherMap(OwmCurrentResponse),
    Imd(ImdWeatherResponse),
    Mock,
}

impl WeatherPayload {
    pub fn into_reading(self) -> Result<EnvironmentReading> {
        let reading = match self {
            WeatherPayload::OpenWeatherMap(owm) => owm.into_reading(),
            WeatherPayload::Imd(imd) => imd.into_reading()?,
            WeatherPayload::Mock => mock_weather(),
        };
        reading.validate()?;
        Ok(reading)
    }
}

/// Picks the live provider when one is configured, else the mock reading.
pub struct WeatherSource {
    owm: Option<OpenWeatherMapClient>,
}

impl WeatherSource {
    pub fn new(config: &Config) -> Self {
        let owm = config
            .active_openweathermap()
            .map(|c| OpenWeatherMapClient::new(c.clone(), &config.location));
        Self { owm }
    }

    pub fn provider(&self) -> &'static str {
        if self.owm.is_some() {
            "OpenWeatherMap"
        } else {
            "Mock"
        }
    }

    pub async fn fetch_payload(&self) -> Result<WeatherPayload> {
        match &self.owm {
            Some(client) => Ok(WeatherPayload::OpenWeatherMap(client.fetch_current().await?)),
            None => Ok(WeatherPayload::Mock),
        }
    }

    /// Current conditions. A failing live provider degrades to the mock
    /// reading with a warning.
    pub async fn current(&self) -> Result<EnvironmentReading> {
        match self.fetch_payload().await {
            Ok(payload) => payload.into_reading(),
            Err(e) => {
                tracing::warn!("Weather fetch failed, using mock reading: {}", e);
                WeatherPayload::Mock.into_reading()
            }
        }
    }

    pub async fn check_connection(&self) -> bool {
        match &self.owm {
            Some(client) => match client.test_connection().await {
                Ok(ok) => ok,
                Err(e) => {
                    tracing::warn!("OpenWeatherMap connection failed: {}", e);
                    false
                }
            },
            None => true,
        }
    }
}
