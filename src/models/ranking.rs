use super::{CropProfile, FertilizerProfile};
use serde::{Deserialize, Serialize};

/// Profitability / priority tier attached to a ranked candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Low,
    Medium,
    High,
}

impl Tier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Low => "low",
            Tier::Medium => "medium",
            Tier::High => "high",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "low" => Some(Tier::Low),
            "medium" => Some(Tier::Medium),
            "high" => Some(Tier::High),
            _ => None,
        }
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Component {
    Climate,
    Soil,
    Season,
    Market,
    CropFit,
    SoilFit,
    Cost,
}

impl Component {
    pub fn as_str(&self) -> &'static str {
        match self {
            Component::Climate => "Climate",
            Component::Soil => "Soil",
            Component::Season => "Season",
            Component::Market => "Market",
            Component::CropFit => "Crop fit",
            Component::SoilFit => "Soil fit",
            Component::Cost => "Cost",
        }
    }
}

/// One weighted sub-score, normalized to [0,1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComponentScore {
    pub component: Component,
    pub value: f64,
    pub weight: f64,
}

/// A candidate plus its suitability score (0-100) and tier. Built per
/// ranking request and owned by the caller afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredCandidate<T> {
    pub candidate: T,
    pub score: f64,
    pub tier: Tier,
    #[serde(default)]
    pub components: Vec<ComponentScore>,
    /// Set when the candidate failed validation and was scored 0.
    #[serde(default)]
    pub error: Option<String>,
}

impl<T> ScoredCandidate<T> {
    pub fn component(&self, component: Component) -> Option<f64> {
        self.components
            .iter()
            .find(|c| c.component == component)
            .map(|c| c.value)
    }
}

pub type RankedCrop = ScoredCandidate<CropProfile>;
pub type RankedFertilizer = ScoredCandidate<FertilizerProfile>;
