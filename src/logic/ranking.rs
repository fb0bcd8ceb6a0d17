use super::market::{market_score, profitability_index};
use super::scoring::{climate_score, soil_score};
use super::season::{current_month, current_season, season_score};
use crate::catalog::Catalog;
use crate::error::{AdvisorError, Result};
use crate::models::{
    Component, ComponentScore, CropProfile, CropSeason, Demand, EnvironmentReading, RankedCrop,
    ScoredCandidate, SoilReading, Tier,
};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Relative weights of the crop sub-scores. Only the components actually
/// computed for a request contribute to the denominator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringWeights {
    pub climate: f64,
    pub soil: f64,
    pub season: f64,
    pub market: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            climate: 0.40,
            soil: 0.25,
            season: 0.20,
            market: 0.15,
        }
    }
}

impl ScoringWeights {
    pub fn validate(&self) -> Result<()> {
        validate_weights(&[
            ("climate", self.climate),
            ("soil", self.soil),
            ("season", self.season),
            ("market", self.market),
        ])
    }

    fn weight(&self, component: Component) -> f64 {
        match component {
            Component::Climate => self.climate,
            Component::Soil => self.soil,
            Component::Season => self.season,
            Component::Market => self.market,
            _ => 0.0,
        }
    }
}

/// Every weight must be a finite non-negative number and at least one must
/// be positive.
pub fn validate_weights(weights: &[(&str, f64)]) -> Result<()> {
    for (name, value) in weights {
        if !value.is_finite() || *value < 0.0 {
            return Err(AdvisorError::Weights(format!(
                "{} weight {} must be a non-negative number",
                name, value
            )));
        }
    }
    let total: f64 = weights.iter().map(|(_, v)| v).sum();
    if total <= 0.0 {
        return Err(AdvisorError::Weights(
            "weights must sum to a positive value".to_string(),
        ));
    }
    Ok(())
}

/// Tier cut-offs and the market adjustments folded into the tier score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TierThresholds {
    pub high: f64,
    pub medium: f64,
    pub high_demand_bonus: f64,
    pub medium_demand_bonus: f64,
    pub export_bonus: f64,
    pub premium_price: f64,
    pub premium_price_bonus: f64,
    pub good_price: f64,
    pub good_price_bonus: f64,
}

impl Default for TierThresholds {
    fn default() -> Self {
        Self {
            high: 0.7,
            medium: 0.4,
            high_demand_bonus: 0.2,
            medium_demand_bonus: 0.1,
            export_bonus: 0.15,
            premium_price: 3000.0,
            premium_price_bonus: 0.1,
            good_price: 2000.0,
            good_price_bonus: 0.05,
        }
    }
}

impl TierThresholds {
    /// Both cut-offs must be numbers and `medium` may not exceed `high`.
    pub fn validate(&self) -> Result<()> {
        if !(self.high.is_finite() && self.medium.is_finite()) {
            return Err(AdvisorError::Weights(
                "tier thresholds must be numbers".to_string(),
            ));
        }
        if self.medium > self.high {
            return Err(AdvisorError::Weights(format!(
                "medium tier threshold {} is above high threshold {}",
                self.medium, self.high
            )));
        }
        Ok(())
    }

    pub fn classify(&self, value: f64) -> Tier {
        if value > self.high {
            Tier::High
        } else if value > self.medium {
            Tier::Medium
        } else {
            Tier::Low
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RankLimits {
    pub crops: usize,
    pub crops_extended: usize,
    pub fertilizers: usize,
}

impl Default for RankLimits {
    fn default() -> Self {
        Self {
            crops: 6,
            crops_extended: 8,
            fertilizers: 5,
        }
    }
}

/// What the crop list is ordered by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RankingMode {
    /// Composite suitability score.
    #[default]
    Suitability,
    /// Mean market price scaled by demand.
    Price,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringSettings {
    pub weights: ScoringWeights,
    pub tiers: TierThresholds,
    pub limits: RankLimits,
    pub mode: RankingMode,
}

/// Optional user-selected filters, applied after scoring and before the
/// result list is truncated.
#[derive(Debug, Clone, Default)]
pub struct CropFilters {
    pub season: Option<CropSeason>,
    pub profitability: Option<Tier>,
    /// Case-insensitive substring of the crop name.
    pub name: Option<String>,
}

impl CropFilters {
    pub fn is_empty(&self) -> bool {
        self.season.is_none() && self.profitability.is_none() && self.name.is_none()
    }

    fn accepts(&self, ranked: &RankedCrop) -> bool {
        let crop = &ranked.candidate;
        if let Some(season) = self.season {
            if !crop.has_season(season) && !crop.is_year_round() {
                return false;
            }
        }
        if let Some(tier) = self.profitability {
            if ranked.tier != tier {
                return false;
            }
        }
        if let Some(name) = &self.name {
            let needle = name.trim().to_lowercase();
            if !needle.is_empty() && !crop.name.to_lowercase().contains(&needle) {
                return false;
            }
        }
        true
    }
}

/// Composite crop ranker. Stateless apart from its settings and the
/// calendar month used for seasonal alignment.
#[derive(Debug, Clone)]
pub struct Ranker {
    settings: ScoringSettings,
    month: u32,
}

impl Default for Ranker {
    fn default() -> Self {
        Self {
            settings: ScoringSettings::default(),
            month: current_month(),
        }
    }
}

impl Ranker {
    pub fn new(settings: ScoringSettings) -> Result<Self> {
        settings.weights.validate()?;
        settings.tiers.validate()?;
        Ok(Self {
            settings,
            month: current_month(),
        })
    }

    /// Pin the month used for season scoring.
    pub fn with_month(mut self, month: u32) -> Result<Self> {
        current_season(month)?;
        self.month = month;
        Ok(self)
    }

    pub fn settings(&self) -> &ScoringSettings {
        &self.settings
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn rank_crops(
        &self,
        crops: &[CropProfile],
        weather: Option<&EnvironmentReading>,
        soil: Option<&SoilReading>,
        filters: &CropFilters,
    ) -> Result<Vec<RankedCrop>> {
        self.rank_with_limit(crops, weather, soil, filters, self.settings.limits.crops)
    }

    /// Same as [`Ranker::rank_crops`] with the longer result list.
    pub fn rank_crops_extended(
        &self,
        crops: &[CropProfile],
        weather: Option<&EnvironmentReading>,
        soil: Option<&SoilReading>,
        filters: &CropFilters,
    ) -> Result<Vec<RankedCrop>> {
        self.rank_with_limit(
            crops,
            weather,
            soil,
            filters,
            self.settings.limits.crops_extended,
        )
    }

    fn rank_with_limit(
        &self,
        crops: &[CropProfile],
        weather: Option<&EnvironmentReading>,
        soil: Option<&SoilReading>,
        filters: &CropFilters,
        limit: usize,
    ) -> Result<Vec<RankedCrop>> {
        if let Some(weather) = weather {
            weather.validate()?;
        }
        if let Some(soil) = soil {
            soil.validate()?;
        }
        if crops.is_empty() {
            return Ok(Vec::new());
        }
        if soil.is_none() {
            tracing::debug!("No soil data; renormalizing weights over remaining components");
        }

        let soil_type = soil.and_then(|s| s.soil_type.as_deref());
        let eligible: Vec<&CropProfile> = crops
            .iter()
            .filter(|crop| match soil_type {
                Some(soil_type) => {
                    let accepted = crop.soil.accepts_soil_type(soil_type);
                    if !accepted {
                        tracing::debug!(crop = %crop.name, soil_type, "Excluded: no soil-type overlap");
                    }
                    accepted
                }
                None => true,
            })
            .collect();

        let mut ranked: Vec<RankedCrop> = eligible
            .par_iter()
            .map(|crop| self.score_candidate(crop, weather, soil))
            .collect();
        ensure_some_scored(&ranked, "crop")?;

        match self.settings.mode {
            RankingMode::Suitability => rerank(&mut ranked),
            // unscored entries sink below every valid crop
            RankingMode::Price => ranked.sort_by(|a, b| {
                b.error
                    .is_none()
                    .cmp(&a.error.is_none())
                    .then_with(|| {
                        profitability_index(&b.candidate)
                            .total_cmp(&profitability_index(&a.candidate))
                    })
            }),
        }

        ranked.retain(|r| filters.accepts(r));
        ranked.truncate(limit);

        tracing::debug!(
            candidates = crops.len(),
            returned = ranked.len(),
            "Ranked crops"
        );
        Ok(ranked)
    }

    fn score_candidate(
        &self,
        crop: &CropProfile,
        weather: Option<&EnvironmentReading>,
        soil: Option<&SoilReading>,
    ) -> RankedCrop {
        match self.components(crop, weather, soil) {
            Ok(components) => {
                let score = weighted_score(&components) * 100.0;
                ScoredCandidate {
                    tier: self.derive_tier(crop, score),
                    candidate: crop.clone(),
                    score,
                    components,
                    error: None,
                }
            }
            Err(e) => {
                tracing::warn!(crop = %crop.name, "Scoring failed, ranking with zero score: {}", e);
                ScoredCandidate {
                    candidate: crop.clone(),
                    score: 0.0,
                    tier: Tier::Low,
                    components: Vec::new(),
                    error: Some(e.to_string()),
                }
            }
        }
    }

    fn components(
        &self,
        crop: &CropProfile,
        weather: Option<&EnvironmentReading>,
        soil: Option<&SoilReading>,
    ) -> Result<Vec<ComponentScore>> {
        crop.validate()?;

        let weights = &self.settings.weights;
        let mut components = Vec::with_capacity(4);
        let mut push = |component: Component, value: f64| {
            components.push(ComponentScore {
                component,
                value,
                weight: weights.weight(component),
            })
        };

        if let Some(weather) = weather {
            push(Component::Climate, climate_score(crop, weather)?);
        }
        if let Some(soil) = soil {
            push(Component::Soil, soil_score(crop, soil)?);
        }
        push(Component::Season, season_score(crop, self.month)?);
        push(Component::Market, market_score(crop));

        Ok(components)
    }

    /// Canonical profitability tier: normalized suitability plus demand,
    /// export and price-level adjustments.
    pub fn derive_tier(&self, crop: &CropProfile, score: f64) -> Tier {
        let tiers = &self.settings.tiers;
        let market = &crop.market;

        let mut value = score / 100.0;
        value += match market.demand {
            Demand::High => tiers.high_demand_bonus,
            Demand::Medium => tiers.medium_demand_bonus,
            Demand::Low => 0.0,
        };
        if market.export_potential {
            value += tiers.export_bonus;
        }
        let mean_price = market.price_range.mean();
        if mean_price > tiers.premium_price {
            value += tiers.premium_price_bonus;
        } else if mean_price > tiers.good_price {
            value += tiers.good_price_bonus;
        }

        tiers.classify(value)
    }

    /// Fallback list for when no weather is available: in-season and
    /// year-round crops in catalog order, tiered by market demand.
    pub fn seasonal_recommendations(&self, catalog: &Catalog) -> Result<Vec<RankedCrop>> {
        let season = current_season(self.month)?;
        let mut recommendations = Vec::new();

        for crop in &catalog.crops {
            if !(crop.has_season(season) || crop.is_year_round()) {
                continue;
            }
            let value = season_score(crop, self.month)?;
            recommendations.push(ScoredCandidate {
                candidate: crop.clone(),
                score: value * 100.0,
                tier: demand_tier(crop.market.demand),
                components: vec![ComponentScore {
                    component: Component::Season,
                    value,
                    weight: 1.0,
                }],
                error: None,
            });
            if recommendations.len() == self.settings.limits.crops {
                break;
            }
        }

        Ok(recommendations)
    }
}

/// Weighted mean over the components present, dividing by the weights
/// actually applied.
pub fn weighted_score(components: &[ComponentScore]) -> f64 {
    let (total, weight_sum) = components
        .iter()
        .filter(|c| c.weight > 0.0)
        .fold((0.0, 0.0), |(total, weights), c| {
            (total + c.value * c.weight, weights + c.weight)
        });

    if weight_sum > 0.0 {
        (total / weight_sum).clamp(0.0, 1.0)
    } else {
        0.0
    }
}

/// Systemic failure when every candidate that reached scoring was
/// malformed. An empty list is not a failure.
pub fn ensure_some_scored<T>(scored: &[ScoredCandidate<T>], kind: &str) -> Result<()> {
    if !scored.is_empty() && scored.iter().all(|r| r.error.is_some()) {
        return Err(AdvisorError::Catalog(format!(
            "all {} {} entries are malformed",
            scored.len(),
            kind
        )));
    }
    Ok(())
}

/// Stable re-sort by score, highest first. Ties keep their current order.
pub fn rerank<T>(scored: &mut [ScoredCandidate<T>]) {
    scored.sort_by(|a, b| b.score.total_cmp(&a.score));
}

fn demand_tier(demand: Demand) -> Tier {
    match demand {
        Demand::High => Tier::High,
        Demand::Medium => Tier::Medium,
        Demand::Low => Tier::Low,
    }
}

/// Rank with default settings for the current month.
pub fn rank_crops(
    crops: &[CropProfile],
    weather: Option<&EnvironmentReading>,
    soil: Option<&SoilReading>,
    filters: &CropFilters,
) -> Result<Vec<RankedCrop>> {
    Ranker::default().rank_crops(crops, weather, soil, filters)
}

pub fn rank_crops_extended(
    crops: &[CropProfile],
    weather: Option<&EnvironmentReading>,
    soil: Option<&SoilReading>,
    filters: &CropFilters,
) -> Result<Vec<RankedCrop>> {
    Ranker::default().rank_crops_extended(crops, weather, soil, filters)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DataSource, Fertility, ParamRange, PriceRange, RainfallPeriod};

    fn ranker() -> Ranker {
        Ranker::default().with_month(7).unwrap()
    }

    fn scenario_weather() -> EnvironmentReading {
        EnvironmentReading::new(DataSource::Manual, 28.0, 75.0, 800.0, RainfallPeriod::Annual)
    }

    fn assert_descending(ranked: &[RankedCrop]) {
        for pair in ranked.windows(2) {
            assert!(
                pair[0].score >= pair[1].score,
                "{} ({}) ranked above {} ({})",
                pair[0].candidate.name,
                pair[0].score,
                pair[1].candidate.name,
                pair[1].score
            );
        }
    }

    #[test]
    fn warm_humid_scenario_without_soil() {
        let catalog = Catalog::builtin();
        let weather = scenario_weather();
        let ranked = ranker()
            .rank_crops(&catalog.crops, Some(&weather), None, &CropFilters::default())
            .unwrap();

        assert!(!ranked.is_empty());
        assert!(ranked.len() <= 6);
        assert_descending(&ranked);
        for r in &ranked {
            assert!((0.0..=100.0).contains(&r.score));
            assert!(r.component(Component::Soil).is_none());
            assert!(r.component(Component::Climate).is_some());
        }
    }

    #[test]
    fn extended_list_is_longer() {
        let catalog = Catalog::builtin();
        let weather = scenario_weather();
        let ranker = ranker();
        let short = ranker
            .rank_crops(&catalog.crops, Some(&weather), None, &CropFilters::default())
            .unwrap();
        let extended = ranker
            .rank_crops_extended(&catalog.crops, Some(&weather), None, &CropFilters::default())
            .unwrap();
        assert_eq!(short.len(), 6);
        assert_eq!(extended.len(), 8);
        for (a, b) in short.iter().zip(extended.iter()) {
            assert_eq!(a.candidate.id, b.candidate.id);
        }
    }

    #[test]
    fn soil_type_mismatch_excludes_best_climate_crop() {
        let catalog = Catalog::builtin();
        let mut perfect = catalog.find_crop("rice").unwrap().clone();
        perfect.id = "perfect".into();
        perfect.name = "Perfect Fit".into();
        perfect.climate.temperature = ParamRange::with_optimal(20.0, 35.0, 28.0);
        perfect.climate.humidity = ParamRange::with_optimal(60.0, 90.0, 75.0);
        perfect.climate.rainfall = ParamRange::with_optimal(600.0, 1000.0, 800.0);
        perfect.soil.soil_types = vec!["Clay".into()];
        perfect.market.demand = Demand::High;
        perfect.market.export_potential = true;
        perfect.market.price_range.min = 2400.0;
        perfect.market.price_range.max = 2600.0;

        let mut crops = vec![perfect];
        crops.extend(catalog.crops.iter().cloned());

        let weather = scenario_weather();
        let soil = SoilReading::new(6.5, Fertility::Medium).with_soil_type("Sandy");
        let ranked = ranker()
            .rank_crops(&crops, Some(&weather), Some(&soil), &CropFilters::default())
            .unwrap();

        assert!(ranked.iter().all(|r| r.candidate.id != "perfect"));

        let clay = SoilReading::new(6.5, Fertility::Medium).with_soil_type("Clay");
        let ranked = ranker()
            .rank_crops(&crops, Some(&weather), Some(&clay), &CropFilters::default())
            .unwrap();
        assert_eq!(ranked[0].candidate.id, "perfect");
    }

    #[test]
    fn malformed_candidate_scores_zero_without_aborting() {
        let catalog = Catalog::builtin();
        let mut broken = catalog.find_crop("maize").unwrap().clone();
        broken.climate.temperature = ParamRange::new(35.0, 20.0);
        let crops = vec![
            catalog.find_crop("rice").unwrap().clone(),
            broken,
            catalog.find_crop("wheat").unwrap().clone(),
        ];

        let ranked = ranker()
            .rank_crops(&crops, Some(&scenario_weather()), None, &CropFilters::default())
            .unwrap();

        assert_eq!(ranked.len(), 3);
        let last = ranked.last().unwrap();
        assert_eq!(last.candidate.id, "maize");
        assert_eq!(last.score, 0.0);
        assert!(last.error.is_some());
        assert!(ranked[0].score > 0.0);
    }

    #[test]
    fn entirely_malformed_catalog_is_a_catalog_error() {
        let catalog = Catalog::builtin();
        let crops: Vec<CropProfile> = ["rice", "wheat", "maize"]
            .iter()
            .map(|id| {
                let mut crop = catalog.find_crop(id).unwrap().clone();
                crop.climate.temperature = ParamRange::new(35.0, 20.0);
                crop
            })
            .collect();

        let err = ranker()
            .rank_crops(&crops, Some(&scenario_weather()), None, &CropFilters::default())
            .unwrap_err();
        assert!(matches!(err, AdvisorError::Catalog(_)));
        assert!(ranker()
            .rank_crops_extended(&crops, Some(&scenario_weather()), None, &CropFilters::default())
            .is_err());
    }

    #[test]
    fn empty_catalog_returns_empty_list() {
        let ranked = ranker()
            .rank_crops(&[], Some(&scenario_weather()), None, &CropFilters::default())
            .unwrap();
        assert!(ranked.is_empty());
    }

    #[test]
    fn invalid_request_reading_fails_whole_request() {
        let catalog = Catalog::builtin();
        let soil = SoilReading::new(15.0, Fertility::High);
        let err = ranker()
            .rank_crops(&catalog.crops, None, Some(&soil), &CropFilters::default())
            .unwrap_err();
        assert!(err.is_invalid_input());

        let mut weather = scenario_weather();
        weather.rainfall_mm = -3.0;
        assert!(ranker()
            .rank_crops(&catalog.crops, Some(&weather), None, &CropFilters::default())
            .is_err());
    }

    #[test]
    fn missing_soil_renormalizes_weights() {
        let catalog = Catalog::builtin();
        let rice = catalog.find_crop("rice").unwrap();
        let ranked = ranker()
            .rank_crops(
                std::slice::from_ref(rice),
                Some(&scenario_weather()),
                None,
                &CropFilters::default(),
            )
            .unwrap();
        let r = &ranked[0];

        let climate = r.component(Component::Climate).unwrap();
        let season = r.component(Component::Season).unwrap();
        let market = r.component(Component::Market).unwrap();
        let expected = (climate * 0.40 + season * 0.20 + market * 0.15) / 0.75 * 100.0;
        assert!((r.score - expected).abs() < 1e-9);
    }

    #[test]
    fn weighted_score_divides_by_applied_weights() {
        let components = [
            ComponentScore {
                component: Component::Climate,
                value: 1.0,
                weight: 0.4,
            },
            ComponentScore {
                component: Component::Market,
                value: 0.5,
                weight: 0.1,
            },
        ];
        assert!((weighted_score(&components) - 0.9).abs() < 1e-12);
        assert_eq!(weighted_score(&[]), 0.0);
    }

    #[test]
    fn equal_scores_keep_input_order() {
        let catalog = Catalog::builtin();
        let rice = catalog.find_crop("rice").unwrap();
        let crops: Vec<CropProfile> = ["a", "b", "c", "d"]
            .iter()
            .map(|id| {
                let mut crop = rice.clone();
                crop.id = id.to_string();
                crop
            })
            .collect();

        let ranked = ranker()
            .rank_crops(&crops, Some(&scenario_weather()), None, &CropFilters::default())
            .unwrap();
        let ids: Vec<&str> = ranked.iter().map(|r| r.candidate.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn json_round_trip_preserves_order() {
        let catalog = Catalog::builtin();
        let ranked = ranker()
            .rank_crops_extended(&catalog.crops, Some(&scenario_weather()), None, &CropFilters::default())
            .unwrap();

        let json = serde_json::to_string(&ranked).unwrap();
        let mut restored: Vec<RankedCrop> = serde_json::from_str(&json).unwrap();
        rerank(&mut restored);

        assert_eq!(ranked.len(), restored.len());
        for (before, after) in ranked.iter().zip(restored.iter()) {
            assert_eq!(before.candidate.id, after.candidate.id);
            assert!((before.score - after.score).abs() < 1e-9);
            assert_eq!(before.tier, after.tier);
        }
    }

    #[test]
    fn filters_apply_before_truncation() {
        let catalog = Catalog::builtin();
        let filters = CropFilters {
            season: Some(CropSeason::Rabi),
            ..Default::default()
        };
        let ranked = ranker()
            .rank_crops(&catalog.crops, Some(&scenario_weather()), None, &filters)
            .unwrap();
        assert!(!ranked.is_empty());
        assert!(ranked
            .iter()
            .all(|r| r.candidate.has_season(CropSeason::Rabi) || r.candidate.is_year_round()));

        let by_name = CropFilters {
            name: Some("WHEAT".into()),
            ..Default::default()
        };
        let ranked = ranker()
            .rank_crops(&catalog.crops, Some(&scenario_weather()), None, &by_name)
            .unwrap();
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].candidate.id, "wheat");

        let high_only = CropFilters {
            profitability: Some(Tier::High),
            ..Default::default()
        };
        let ranked = ranker()
            .rank_crops_extended(&catalog.crops, Some(&scenario_weather()), None, &high_only)
            .unwrap();
        assert!(ranked.iter().all(|r| r.tier == Tier::High));
    }

    #[test]
    fn tier_adjustments() {
        let catalog = Catalog::builtin();
        let ranker = ranker();
        let mut crop = catalog.find_crop("rice").unwrap().clone();
        crop.market.demand = Demand::Low;
        crop.market.export_potential = false;
        crop.market.price_range.min = 1000.0;
        crop.market.price_range.max = 1000.0;

        assert_eq!(ranker.derive_tier(&crop, 30.0), Tier::Low);
        assert_eq!(ranker.derive_tier(&crop, 50.0), Tier::Medium);
        assert_eq!(ranker.derive_tier(&crop, 71.0), Tier::High);

        // 0.3 + 0.2 demand + 0.15 export + 0.1 price
        crop.market.demand = Demand::High;
        crop.market.export_potential = true;
        crop.market.price_range.min = 3500.0;
        crop.market.price_range.max = 3500.0;
        assert_eq!(ranker.derive_tier(&crop, 30.0), Tier::High);
    }

    #[test]
    fn price_mode_orders_by_profitability_index() {
        let catalog = Catalog::builtin();
        let settings = ScoringSettings {
            mode: RankingMode::Price,
            ..Default::default()
        };
        let ranker = Ranker::new(settings).unwrap().with_month(7).unwrap();
        let ranked = ranker
            .rank_crops(&catalog.crops, Some(&scenario_weather()), None, &CropFilters::default())
            .unwrap();
        for pair in ranked.windows(2) {
            assert!(
                profitability_index(&pair[0].candidate) >= profitability_index(&pair[1].candidate)
            );
        }
    }

    #[test]
    fn price_mode_sinks_malformed_crops() {
        let catalog = Catalog::builtin();
        let mut broken = catalog.find_crop("rice").unwrap().clone();
        broken.id = "broken".into();
        broken.name = "Broken".into();
        broken.climate.temperature = ParamRange::new(35.0, 20.0);
        broken.market.price_range = PriceRange {
            min: 90000.0,
            max: 90000.0,
        };
        let mut crops = vec![broken];
        crops.extend(catalog.crops.iter().cloned());

        let settings = ScoringSettings {
            mode: RankingMode::Price,
            ..Default::default()
        };
        let ranked = Ranker::new(settings)
            .unwrap()
            .with_month(7)
            .unwrap()
            .rank_crops_extended(&crops, Some(&scenario_weather()), None, &CropFilters::default())
            .unwrap();

        assert_ne!(ranked[0].candidate.id, "broken");
        assert!(ranked.iter().all(|r| r.error.is_none()));
    }

    #[test]
    fn inverted_tier_thresholds_are_rejected() {
        let mut settings = ScoringSettings::default();
        settings.tiers.medium = 0.9;
        assert!(matches!(
            Ranker::new(settings.clone()),
            Err(AdvisorError::Weights(_))
        ));
        settings.tiers.high = 0.9;
        assert!(Ranker::new(settings).is_ok());
    }

    #[test]
    fn misconfigured_weights_are_rejected() {
        let mut settings = ScoringSettings::default();
        settings.weights.soil = -0.1;
        assert!(matches!(
            Ranker::new(settings.clone()),
            Err(AdvisorError::Weights(_))
        ));

        settings.weights = ScoringWeights {
            climate: 0.0,
            soil: 0.0,
            season: 0.0,
            market: 0.0,
        };
        assert!(matches!(Ranker::new(settings), Err(AdvisorError::Weights(_))));

        let mut nan = ScoringSettings::default();
        nan.weights.climate = f64::NAN;
        assert!(Ranker::new(nan).is_err());
    }

    #[test]
    fn seasonal_recommendations_follow_calendar() {
        let catalog = Catalog::builtin();
        let list = ranker().seasonal_recommendations(&catalog).unwrap();
        assert!(!list.is_empty());
        assert!(list.len() <= 6);
        assert!(list
            .iter()
            .all(|r| r.candidate.has_season(CropSeason::Kharif) || r.candidate.is_year_round()));
        let rice = list.iter().find(|r| r.candidate.id == "rice").unwrap();
        assert_eq!(rice.tier, Tier::High);
    }

    #[test]
    fn sequential_and_parallel_scoring_agree() {
        let catalog = Catalog::builtin();
        let weather = scenario_weather();
        let ranker = ranker();
        let parallel = ranker
            .rank_crops_extended(&catalog.crops, Some(&weather), None, &CropFilters::default())
            .unwrap();

        let mut sequential: Vec<RankedCrop> = catalog
            .crops
            .iter()
            .map(|crop| ranker.score_candidate(crop, Some(&weather), None))
            .collect();
        rerank(&mut sequential);
        sequential.truncate(8);

        let a: Vec<&str> = parallel.iter().map(|r| r.candidate.id.as_str()).collect();
        let b: Vec<&str> = sequential.iter().map(|r| r.candidate.id.as_str()).collect();
        assert_eq!(a, b);
    }
}
