use crate::catalog::Catalog;
use crate::error::{AdvisorError, Result};
use crate::models::{CropProfile, CropSeason};
use chrono::{Datelike, Local};

const IN_SEASON: f64 = 1.0;
const YEAR_ROUND: f64 = 0.8;
const OFF_SEASON: f64 = 0.3;

/// Indian cropping season for a calendar month.
///
/// Partition: Kharif June-October, Rabi November-March, Zaid April-May.
/// Every month maps to exactly one season.
pub fn current_season(month: u32) -> Result<CropSeason> {
    match month {
        6..=10 => Ok(CropSeason::Kharif),
        11 | 12 | 1..=3 => Ok(CropSeason::Rabi),
        4 | 5 => Ok(CropSeason::Zaid),
        _ => Err(invalid_month(month)),
    }
}

/// Northern-hemisphere meteorological season for a calendar month.
pub fn temperate_season(month: u32) -> Result<CropSeason> {
    match month {
        3..=5 => Ok(CropSeason::Spring),
        6..=8 => Ok(CropSeason::Summer),
        9..=11 => Ok(CropSeason::Fall),
        12 | 1 | 2 => Ok(CropSeason::Winter),
        _ => Err(invalid_month(month)),
    }
}

pub fn current_month() -> u32 {
    Local::now().month()
}

/// 1.0 when the crop is tagged with the month's season (agricultural or
/// temperate), 0.8 for year-round crops, 0.3 otherwise.
pub fn season_score(crop: &CropProfile, month: u32) -> Result<f64> {
    let agricultural = current_season(month)?;
    let temperate = temperate_season(month)?;

    if crop.has_season(agricultural) || crop.has_season(temperate) {
        Ok(IN_SEASON)
    } else if crop.is_year_round() {
        Ok(YEAR_ROUND)
    } else {
        Ok(OFF_SEASON)
    }
}

/// Crops tagged with `season`, plus year-round crops. Catalog order.
pub fn seasonal_crops(catalog: &Catalog, season: CropSeason) -> Vec<&CropProfile> {
    catalog
        .crops
        .iter()
        .filter(|crop| crop.has_season(season) || crop.is_year_round())
        .collect()
}

fn invalid_month(month: u32) -> AdvisorError {
    AdvisorError::invalid(format!("month {} is outside 1-12", month))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn july_is_kharif_and_december_is_rabi() {
        assert_eq!(current_season(7).unwrap(), CropSeason::Kharif);
        assert_eq!(current_season(12).unwrap(), CropSeason::Rabi);
    }

    #[test]
    fn partition_boundaries() {
        assert_eq!(current_season(3).unwrap(), CropSeason::Rabi);
        assert_eq!(current_season(4).unwrap(), CropSeason::Zaid);
        assert_eq!(current_season(5).unwrap(), CropSeason::Zaid);
        assert_eq!(current_season(6).unwrap(), CropSeason::Kharif);
        assert_eq!(current_season(10).unwrap(), CropSeason::Kharif);
        assert_eq!(current_season(11).unwrap(), CropSeason::Rabi);
    }

    #[test]
    fn every_month_has_exactly_one_season() {
        let mut kharif = 0;
        let mut rabi = 0;
        let mut zaid = 0;
        for month in 1..=12 {
            match current_season(month).unwrap() {
                CropSeason::Kharif => kharif += 1,
                CropSeason::Rabi => rabi += 1,
                CropSeason::Zaid => zaid += 1,
                other => panic!("month {} mapped to {}", month, other),
            }
            assert!(temperate_season(month).unwrap().is_temperate());
        }
        assert_eq!((kharif, rabi, zaid), (5, 5, 2));
    }

    #[test]
    fn out_of_range_month_is_rejected() {
        assert!(current_season(0).unwrap_err().is_invalid_input());
        assert!(current_season(13).is_err());
        assert!(temperate_season(0).is_err());
    }

    #[test]
    fn season_score_levels() {
        let catalog = Catalog::builtin();
        let rice = catalog.find_crop("rice").unwrap();
        assert_eq!(season_score(rice, 7).unwrap(), 1.0);
        assert_eq!(season_score(rice, 1).unwrap(), 0.3);

        let mut perennial = rice.clone();
        perennial.seasons = vec![CropSeason::YearRound];
        assert_eq!(season_score(&perennial, 1).unwrap(), 0.8);

        // temperate tags match by meteorological season
        let tomato = catalog.find_crop("tomato").unwrap();
        assert!(tomato.has_season(CropSeason::Summer));
        assert_eq!(season_score(tomato, 7).unwrap(), 1.0);
    }

    #[test]
    fn seasonal_crops_include_year_round() {
        let catalog = Catalog::builtin();
        let rabi = seasonal_crops(&catalog, CropSeason::Rabi);
        assert!(rabi.iter().any(|c| c.id == "wheat"));
        assert!(rabi.iter().all(|c| c.has_season(CropSeason::Rabi) || c.is_year_round()));
        assert!(!rabi.iter().any(|c| c.id == "rice"));
    }
}
