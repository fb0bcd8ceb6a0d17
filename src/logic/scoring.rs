use crate::error::{AdvisorError, Result};
use crate::models::{CropProfile, EnvironmentReading, ParamRange, SoilReading};

/// Score a single parameter against its tolerable range.
///
/// - Outside `[min, max]`: `1 - distance_outside / (max - min)`, floored at 0.
///   The penalty grows linearly, so a value one full range-width away scores 0.
/// - Inside with an optimum: `1 - |value - optimal| / max(optimal - min, max - optimal)`.
/// - Inside without an optimum: exactly 1.0.
///
/// A degenerate range (`min == max`) scores 1.0 on an exact hit and 0.0
/// otherwise. Non-finite inputs and inverted ranges score 0.0.
pub fn score_parameter(value: f64, min: f64, max: f64, optimal: Option<f64>) -> f64 {
    if !value.is_finite() || !min.is_finite() || !max.is_finite() || min > max {
        return 0.0;
    }

    let range = max - min;
    if range == 0.0 {
        return if value == min { 1.0 } else { 0.0 };
    }

    if value < min || value > max {
        let distance = if value < min { min - value } else { value - max };
        return (1.0 - distance / range).max(0.0);
    }

    match optimal {
        Some(opt) if opt.is_finite() => {
            let max_distance = (opt - min).max(max - opt);
            if max_distance <= 0.0 {
                return 1.0;
            }
            (1.0 - (value - opt).abs() / max_distance).clamp(0.0, 1.0)
        }
        Some(_) => 0.0,
        None => 1.0,
    }
}

pub fn score_range(value: f64, range: &ParamRange) -> f64 {
    score_parameter(value, range.min, range.max, range.optimal)
}

/// Arithmetic mean of the temperature, rainfall and humidity scores.
/// Rainfall is compared on an annual basis.
pub fn climate_score(crop: &CropProfile, weather: &EnvironmentReading) -> Result<f64> {
    weather.validate()?;
    ensure_climate_ranges(crop)?;

    let req = &crop.climate;
    let temperature = score_range(weather.temperature_c, &req.temperature);
    let rainfall = score_range(weather.annual_rainfall_mm(), &req.rainfall);
    let humidity = score_range(weather.humidity_percent, &req.humidity);

    Ok((temperature + rainfall + humidity) / 3.0)
}

/// Mean of pH fitness and the fertility tier's fixed score.
///
/// Soil-type overlap is a ranking prerequisite and is not checked here.
pub fn soil_score(crop: &CropProfile, soil: &SoilReading) -> Result<f64> {
    soil.validate()?;
    crop.soil.ph.validate("pH")?;

    let ph = score_range(soil.ph, &crop.soil.ph);
    Ok((ph + soil.fertility.score()) / 2.0)
}

fn ensure_climate_ranges(crop: &CropProfile) -> Result<()> {
    let req = &crop.climate;
    req.temperature
        .validate("temperature")
        .and_then(|_| req.rainfall.validate("rainfall"))
        .and_then(|_| req.humidity.validate("humidity"))
        .map_err(|e| AdvisorError::invalid(format!("{}: {}", crop.name, e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::models::{DataSource, Fertility, RainfallPeriod};

    fn rice() -> CropProfile {
        Catalog::builtin().find_crop("rice").unwrap().clone()
    }

    #[test]
    fn optimal_value_scores_exactly_one() {
        for value in [10.0, 12.5, 17.0, 20.0] {
            assert_eq!(score_parameter(value, 10.0, 20.0, Some(value)), 1.0);
        }
    }

    #[test]
    fn in_range_without_optimal_scores_one() {
        assert_eq!(score_parameter(10.0, 10.0, 20.0, None), 1.0);
        assert_eq!(score_parameter(15.0, 10.0, 20.0, None), 1.0);
        assert_eq!(score_parameter(20.0, 10.0, 20.0, None), 1.0);
    }

    #[test]
    fn off_center_optimal_uses_larger_half_range() {
        // optimal 28 in [20, 35]: half-ranges 8 and 7, denominator 8
        let score = score_parameter(20.0, 20.0, 35.0, Some(28.0));
        assert!((score - 0.0).abs() < 1e-12);
        let score = score_parameter(35.0, 20.0, 35.0, Some(28.0));
        assert!((score - 0.125).abs() < 1e-12);
        let score = score_parameter(24.0, 20.0, 35.0, Some(28.0));
        assert!((score - 0.5).abs() < 1e-12);
    }

    #[test]
    fn out_of_range_degrades_linearly() {
        let below = score_parameter(8.0, 10.0, 20.0, None);
        assert!((below - 0.8).abs() < 1e-12);
        let above = score_parameter(25.0, 10.0, 20.0, Some(15.0));
        assert!((above - 0.5).abs() < 1e-12);
    }

    #[test]
    fn out_of_range_strictly_decreases_with_distance() {
        let mut previous = 1.0;
        for step in 1..10 {
            let value = 10.0 - step as f64;
            let score = score_parameter(value, 10.0, 20.0, None);
            assert!(score < previous, "score at {} did not decrease", value);
            assert!((0.0..1.0).contains(&score));
            previous = score;
        }
    }

    #[test]
    fn one_range_width_outside_scores_zero() {
        // value = min - (max - min)
        assert_eq!(score_parameter(0.0, 10.0, 20.0, None), 0.0);
        assert_eq!(score_parameter(30.0, 10.0, 20.0, None), 0.0);
        assert_eq!(score_parameter(-100.0, 10.0, 20.0, None), 0.0);
    }

    #[test]
    fn degenerate_range_is_exact_match_only() {
        assert_eq!(score_parameter(7.0, 7.0, 7.0, None), 1.0);
        assert_eq!(score_parameter(7.0, 7.0, 7.0, Some(7.0)), 1.0);
        assert_eq!(score_parameter(7.0001, 7.0, 7.0, None), 0.0);
        assert_eq!(score_parameter(6.0, 7.0, 7.0, None), 0.0);
    }

    #[test]
    fn non_numeric_inputs_score_zero() {
        assert_eq!(score_parameter(f64::NAN, 10.0, 20.0, None), 0.0);
        assert_eq!(score_parameter(15.0, f64::NAN, 20.0, None), 0.0);
        assert_eq!(score_parameter(15.0, 10.0, f64::INFINITY, None), 0.0);
        assert_eq!(score_parameter(15.0, 10.0, 20.0, Some(f64::NAN)), 0.0);
        assert_eq!(score_parameter(15.0, 20.0, 10.0, None), 0.0);
    }

    #[test]
    fn climate_score_is_mean_of_parameters() {
        let crop = rice();
        // rice: temp 20-35 opt 28, rain 1000-2000 opt 1200, humidity 70-90 opt 80
        let weather = EnvironmentReading::new(
            DataSource::Manual,
            28.0,
            80.0,
            1200.0,
            RainfallPeriod::Annual,
        );
        let score = climate_score(&crop, &weather).unwrap();
        assert!((score - 1.0).abs() < 1e-12);

        let dry = EnvironmentReading::new(DataSource::Manual, 28.0, 80.0, 0.0, RainfallPeriod::Annual);
        let score = climate_score(&crop, &dry).unwrap();
        assert!((score - 2.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn climate_score_is_deterministic() {
        let crop = rice();
        let weather =
            EnvironmentReading::new(DataSource::Manual, 31.0, 72.0, 3.1, RainfallPeriod::Daily);
        let first = climate_score(&crop, &weather).unwrap();
        let second = climate_score(&crop, &weather).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn climate_score_rejects_invalid_weather() {
        let crop = rice();
        let weather = EnvironmentReading::new(
            DataSource::Manual,
            f64::NAN,
            80.0,
            1200.0,
            RainfallPeriod::Annual,
        );
        assert!(climate_score(&crop, &weather).unwrap_err().is_invalid_input());
    }

    #[test]
    fn soil_score_combines_ph_and_fertility() {
        let crop = rice();
        // rice pH 5.5-7.0 optimal 6.5
        let soil = SoilReading::new(6.5, Fertility::High);
        assert!((soil_score(&crop, &soil).unwrap() - 1.0).abs() < 1e-12);

        let soil = SoilReading::new(6.5, Fertility::Low);
        assert!((soil_score(&crop, &soil).unwrap() - 0.7).abs() < 1e-12);

        let soil = SoilReading::new(6.5, Fertility::Unknown);
        assert!((soil_score(&crop, &soil).unwrap() - 0.75).abs() < 1e-12);

        let first = soil_score(&crop, &SoilReading::new(5.9, Fertility::Medium)).unwrap();
        let second = soil_score(&crop, &SoilReading::new(5.9, Fertility::Medium)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn soil_score_rejects_out_of_domain_ph() {
        let crop = rice();
        let soil = SoilReading::new(15.0, Fertility::High);
        assert!(soil_score(&crop, &soil).is_err());
    }
}
