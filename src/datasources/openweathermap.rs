use crate::config::{LocationConfig, OpenWeatherMapConfig};
use crate::error::{AdvisorError, Result};
use crate::models::{DataSource, EnvironmentReading, RainfallPeriod};
use serde::Deserialize;

const API_BASE_URL: &str = "https://api.openweathermap.org/data/2.5";

pub struct OpenWeatherMapClient {
    client: reqwest::Client,
    config: OpenWeatherMapConfig,
    latitude: f64,
    longitude: f64,
}

// OpenWeatherMap current-weather response
#[derive(Debug, Deserialize)]
pub struct OwmCurrentResponse {
    main: OwmMain,
    #[serde(default)]
    weather: Vec<OwmWeather>,
    #[serde(default)]
    wind: Option<OwmWind>,
    #[serde(default)]
    rain: Option<OwmPrecipitation>,
}

#[derive(Debug, Deserialize)]
struct OwmMain {
    temp: f64,
    humidity: f64,
    #[serde(default)]
    pressure: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct OwmWeather {
    description: String,
}

#[derive(Debug, Deserialize)]
struct OwmWind {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct OwmPrecipitation {
    #[serde(rename = "1h", default)]
    one_hour: Option<f64>,
    #[serde(rename = "3h", default)]
    three_hour: Option<f64>,
}

impl OwmCurrentResponse {
    /// Rain volume for the last hour is carried as a daily rate; the
    /// evaluator annualises it.
    pub fn into_reading(self) -> EnvironmentReading {
        let rainfall_mm = self
            .rain
            .as_ref()
            .and_then(|r| r.one_hour.or(r.three_hour))
            .unwrap_or(0.0);

        EnvironmentReading {
            source: DataSource::OpenWeatherMap,
            temperature_c: self.main.temp,
            humidity_percent: self.main.humidity,
            rainfall_mm,
            rainfall_period: RainfallPeriod::Daily,
            wind_speed: self.wind.map(|w| w.speed),
            pressure_hpa: self.main.pressure,
            uv_index: None,
            description: self.weather.into_iter().next().map(|w| w.description),
        }
    }
}

impl OpenWeatherMapClient {
    pub fn new(config: OpenWeatherMapConfig, location: &LocationConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
            latitude: location.latitude,
            longitude: location.longitude,
        }
    }

    fn url(&self, endpoint: &str) -> String {
        format!(
            "{}/{}?lat={}&lon={}&appid={}&units=metric",
            API_BASE_URL, endpoint, self.latitude, self.longitude, self.config.api_key
        )
    }

    /// Fetch current conditions from OpenWeatherMap
    pub async fn fetch_current(&self) -> Result<OwmCurrentResponse> {
        let response = self
            .client
            .get(self.url("weather"))
            .send()
            .await
            .map_err(|e| AdvisorError::DataSourceUnavailable(format!("OpenWeatherMap: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AdvisorError::DataSourceUnavailable(format!(
                "OpenWeatherMap returned {}: {}",
                status, body
            )));
        }

        response.json().await.map_err(|e| {
            AdvisorError::DataSourceUnavailable(format!(
                "Failed to parse OpenWeatherMap response: {}",
                e
            ))
        })
    }

    /// Test connection to OpenWeatherMap API
    pub async fn test_connection(&self) -> Result<bool> {
        let response = self
            .client
            .get(self.url("weather"))
            .send()
            .await
            .map_err(|e| AdvisorError::DataSourceUnavailable(format!("OpenWeatherMap: {}", e)))?;

        Ok(response.status().is_success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_config() -> OpenWeatherMapConfig {
        OpenWeatherMapConfig {
            api_key: "test_key".to_string(),
            enabled: true,
        }
    }

    #[test]
    fn url_uses_metric_units() {
        let client = OpenWeatherMapClient::new(sample_config(), &LocationConfig::default());
        let url = client.url("weather");
        assert!(url.starts_with("https://api.openweathermap.org/data/2.5/weather?lat=28.6139"));
        assert!(url.ends_with("&appid=test_key&units=metric"));
    }

    #[test]
    fn converts_current_weather() {
        let payload: OwmCurrentResponse = serde_json::from_value(json!({
            "main": { "temp": 31.2, "humidity": 70, "pressure": 1008 },
            "weather": [{ "main": "Rain", "description": "light rain" }],
            "wind": { "speed": 4.1 },
            "rain": { "1h": 0.8 }
        }))
        .unwrap();

        let reading = payload.into_reading();
        assert_eq!(reading.source, DataSource::OpenWeatherMap);
        assert!((reading.temperature_c - 31.2).abs() < 1e-9);
        assert_eq!(reading.rainfall_period, RainfallPeriod::Daily);
        assert!((reading.annual_rainfall_mm() - 292.0).abs() < 1e-9);
        assert_eq!(reading.pressure_hpa, Some(1008.0));
        assert_eq!(reading.description.as_deref(), Some("light rain"));
    }

    #[test]
    fn missing_rain_block_means_dry() {
        let payload: OwmCurrentResponse = serde_json::from_value(json!({
            "main": { "temp": 25.0, "humidity": 40 },
            "weather": []
        }))
        .unwrap();
        let reading = payload.into_reading();
        assert_eq!(reading.rainfall_mm, 0.0);
        assert!(reading.wind_speed.is_none());
        assert!(reading.validate().is_ok());
    }
}
