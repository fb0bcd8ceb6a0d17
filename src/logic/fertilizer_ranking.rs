use super::ranking::{
    ensure_some_scored, rerank, validate_weights, weighted_score, TierThresholds,
};
use crate::error::Result;
use crate::models::{
    Component, ComponentScore, CropFit, FertilizerKind, FertilizerProfile, Fertility,
    RankedFertilizer, ScoredCandidate, SoilReading, Tier,
};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GrowthStage {
    Seedling,
    Vegetative,
    Flowering,
    Fruiting,
}

impl GrowthStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            GrowthStage::Seedling => "seedling",
            GrowthStage::Vegetative => "vegetative",
            GrowthStage::Flowering => "flowering",
            GrowthStage::Fruiting => "fruiting",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "seedling" => Some(GrowthStage::Seedling),
            "vegetative" => Some(GrowthStage::Vegetative),
            "flowering" => Some(GrowthStage::Flowering),
            "fruiting" => Some(GrowthStage::Fruiting),
            _ => None,
        }
    }

    fn admits(&self, fertilizer: &FertilizerProfile) -> bool {
        let c = &fertilizer.composition;
        match self {
            GrowthStage::Seedling => fertilizer.is_organic(),
            GrowthStage::Vegetative => {
                c.is_nitrogen_led() || fertilizer.kind == FertilizerKind::Complex
            }
            GrowthStage::Flowering => c.is_phosphorus_led(),
            GrowthStage::Fruiting => c.k > 0.0 || fertilizer.kind == FertilizerKind::Complex,
        }
    }
}

impl std::fmt::Display for GrowthStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FertilizerWeights {
    pub crop: f64,
    pub soil: f64,
    pub cost: f64,
}

impl Default for FertilizerWeights {
    fn default() -> Self {
        Self {
            crop: 0.50,
            soil: 0.25,
            cost: 0.25,
        }
    }
}

impl FertilizerWeights {
    pub fn validate(&self) -> Result<()> {
        validate_weights(&[("crop", self.crop), ("soil", self.soil), ("cost", self.cost)])
    }
}

/// Soil condition that narrows which products make sense.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SoilCondition {
    Acidic,
    LowFertility,
    Adequate,
}

impl SoilCondition {
    fn of(soil: &SoilReading) -> Self {
        if soil.ph < 6.0 {
            SoilCondition::Acidic
        } else if soil.fertility == Fertility::Low {
            SoilCondition::LowFertility
        } else {
            SoilCondition::Adequate
        }
    }

    fn suits(&self, fertilizer: &FertilizerProfile) -> bool {
        match self {
            SoilCondition::Acidic => fertilizer.is_organic(),
            SoilCondition::LowFertility => {
                fertilizer.is_organic() || fertilizer.kind == FertilizerKind::Complex
            }
            SoilCondition::Adequate => true,
        }
    }

    fn fit_score(&self, fertilizer: &FertilizerProfile) -> f64 {
        match self {
            SoilCondition::Adequate => 0.7,
            _ if self.suits(fertilizer) => 1.0,
            _ => 0.7,
        }
    }
}

#[derive(Debug, Clone)]
pub struct FertilizerRanker {
    weights: FertilizerWeights,
    tiers: TierThresholds,
    limit: usize,
}

impl Default for FertilizerRanker {
    fn default() -> Self {
        Self {
            weights: FertilizerWeights::default(),
            tiers: TierThresholds::default(),
            limit: 5,
        }
    }
}

impl FertilizerRanker {
    pub fn new(weights: FertilizerWeights, tiers: TierThresholds, limit: usize) -> Result<Self> {
        weights.validate()?;
        tiers.validate()?;
        Ok(Self {
            weights,
            tiers,
            limit,
        })
    }

    pub fn rank(
        &self,
        catalog: &[FertilizerProfile],
        crop: Option<&str>,
        soil: Option<&SoilReading>,
        stage: Option<GrowthStage>,
    ) -> Result<Vec<RankedFertilizer>> {
        if let Some(soil) = soil {
            soil.validate()?;
        }
        if catalog.is_empty() {
            return Ok(Vec::new());
        }

        let crop = crop.map(str::trim).filter(|c| !c.is_empty());
        let condition = soil.map(SoilCondition::of);

        let max_price_per_kg = catalog
            .iter()
            .map(FertilizerProfile::price_per_kg)
            .filter(|p| p.is_finite() && *p >= 0.0)
            .fold(0.0_f64, f64::max);

        let eligible: Vec<&FertilizerProfile> = catalog
            .iter()
            .filter(|f| crop.map_or(true, |c| f.crop_fit(c) != CropFit::Unsuited))
            .filter(|f| condition.map_or(true, |s| s.suits(f)))
            .filter(|f| stage.map_or(true, |s| s.admits(f)))
            .collect();

        let mut ranked: Vec<RankedFertilizer> = eligible
            .par_iter()
            .map(|f| self.score_candidate(f, crop, condition, max_price_per_kg))
            .collect();
        ensure_some_scored(&ranked, "fertilizer")?;

        rerank(&mut ranked);
        ranked.truncate(self.limit);

        tracing::debug!(
            candidates = catalog.len(),
            eligible = eligible.len(),
            returned = ranked.len(),
            "Ranked fertilizers"
        );
        Ok(ranked)
    }

    fn score_candidate(
        &self,
        fertilizer: &FertilizerProfile,
        crop: Option<&str>,
        condition: Option<SoilCondition>,
        max_price_per_kg: f64,
    ) -> RankedFertilizer {
        if let Err(e) = fertilizer.validate() {
            tracing::warn!(fertilizer = %fertilizer.name, "Scoring failed, ranking with zero score: {}", e);
            return ScoredCandidate {
                candidate: fertilizer.clone(),
                score: 0.0,
                tier: Tier::Low,
                components: Vec::new(),
                error: Some(e.to_string()),
            };
        }

        let crop_fit = match crop.map(|c| fertilizer.crop_fit(c)) {
            Some(CropFit::Listed) => 1.0,
            _ => 0.5,
        };
        let cost = if max_price_per_kg > 0.0 {
            (1.0 - fertilizer.price_per_kg() / max_price_per_kg).clamp(0.0, 1.0)
        } else {
            1.0
        };

        let mut components = vec![ComponentScore {
            component: Component::CropFit,
            value: crop_fit,
            weight: self.weights.crop,
        }];
        if let Some(condition) = condition {
            components.push(ComponentScore {
                component: Component::SoilFit,
                value: condition.fit_score(fertilizer),
                weight: self.weights.soil,
            });
        }
        components.push(ComponentScore {
            component: Component::Cost,
            value: cost,
            weight: self.weights.cost,
        });

        let normalized = weighted_score(&components);
        ScoredCandidate {
            candidate: fertilizer.clone(),
            score: normalized * 100.0,
            tier: self.tiers.classify(normalized),
            components,
            error: None,
        }
    }
}

/// Rank with default weights and the standard top-5 limit.
pub fn rank_fertilizers(
    catalog: &[FertilizerProfile],
    crop: Option<&str>,
    soil: Option<&SoilReading>,
    stage: Option<GrowthStage>,
) -> Result<Vec<RankedFertilizer>> {
    FertilizerRanker::default().rank(catalog, crop, soil, stage)
}
