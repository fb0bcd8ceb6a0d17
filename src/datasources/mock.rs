use crate::models::{DataSource, EnvironmentReading, RainfallPeriod};

/// Fixed development reading used when no weather provider is configured.
pub fn mock_weather() -> EnvironmentReading {
    EnvironmentReading {
        wind_speed: Some(12.0),
        pressure_hpa: Some(1013.0),
        description: Some("Partly cloudy".into()),
        ..EnvironmentReading::new(DataSource::Mock, 28.0, 65.0, 2.5, RainfallPeriod::Daily)
    }
}
