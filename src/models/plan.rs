use super::{ApplicationTiming, Nutrients};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanApproach {
    Balanced,
    Straight,
    Organic,
}

impl PlanApproach {
    pub fn all() -> [PlanApproach; 3] {
        [
            PlanApproach::Balanced,
            PlanApproach::Straight,
            PlanApproach::Organic,
        ]
    }

    pub fn id(&self) -> &'static str {
        match self {
            PlanApproach::Balanced => "balanced_approach",
            PlanApproach::Straight => "straight_fertilizers",
            PlanApproach::Organic => "organic_approach",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            PlanApproach::Balanced => "Balanced NPK + Organic",
            PlanApproach::Straight => "Straight Fertilizers",
            PlanApproach::Organic => "Organic Nutrition",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            PlanApproach::Balanced => {
                "Combination of complex fertilizer with organic matter for sustained nutrition"
            }
            PlanApproach::Straight => "Individual fertilizers for precise nutrient management",
            PlanApproach::Organic => "Complete organic approach for sustainable farming",
        }
    }

    pub fn expected_yield_increase(&self) -> &'static str {
        match self {
            PlanApproach::Balanced => "15-25%",
            PlanApproach::Straight => "20-30%",
            PlanApproach::Organic => "10-20%",
        }
    }

    pub fn soil_health_impact(&self) -> &'static str {
        match self {
            PlanApproach::Balanced => "Positive",
            PlanApproach::Straight => "Neutral",
            PlanApproach::Organic => "Highly Positive",
        }
    }

    pub fn benefits(&self) -> [&'static str; 4] {
        match self {
            PlanApproach::Balanced => [
                "Balanced nutrition supply",
                "Improved soil health",
                "Sustained nutrient release",
                "Cost-effective approach",
            ],
            PlanApproach::Straight => [
                "Precise nutrient control",
                "Maximum yield potential",
                "Flexible application timing",
                "Quick nutrient availability",
            ],
            PlanApproach::Organic => [
                "Excellent soil health improvement",
                "Sustainable nutrition",
                "Pest and disease suppression",
                "Long-term soil fertility",
            ],
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanItem {
    pub fertilizer_id: String,
    pub name: String,
    pub quantity_kg_per_ha: f64,
    pub timing: ApplicationTiming,
    pub method: String,
    pub cost: f64,
}

impl PlanItem {
    /// Bulk organics read better in tonnes.
    pub fn quantity_label(&self) -> String {
        if self.quantity_kg_per_ha >= 1000.0 {
            format!("{} tons/ha", self.quantity_kg_per_ha / 1000.0)
        } else {
            format!("{} kg/ha", self.quantity_kg_per_ha)
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FertilizerPlan {
    pub approach: PlanApproach,
    pub name: String,
    pub description: String,
    pub deficit: Nutrients,
    pub items: Vec<PlanItem>,
    pub total_cost: f64,
    pub expected_yield_increase: String,
    pub soil_health_impact: String,
    pub schedule: Vec<String>,
    pub benefits: Vec<String>,
}
