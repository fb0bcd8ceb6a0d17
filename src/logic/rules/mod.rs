pub mod disease_pressure;
pub mod engine;
pub mod fertility;
pub mod soil_ph;

pub use engine::{AdvisoryEngine, SoilReport, SoilStatus};

use crate::models::{Advisory, CropProfile, EnvironmentReading, PlantDisease, SoilReading};

/// Everything a rule may look at. Absent inputs simply make rules that
/// need them stay quiet.
#[derive(Debug, Clone, Copy, Default)]
pub struct AdvisoryContext<'a> {
    pub soil: Option<&'a SoilReading>,
    pub weather: Option<&'a EnvironmentReading>,
    pub crop: Option<&'a CropProfile>,
    pub diseases: &'a [PlantDisease],
}

/// Trait for agronomic rules
pub trait Rule: Send + Sync {
    /// Unique identifier for this rule
    fn id(&self) -> &'static str;

    /// Human-readable name
    fn name(&self) -> &'static str;

    /// Evaluate the rule and return an advisory if conditions are met
    fn evaluate(&self, ctx: &AdvisoryContext) -> Option<Advisory>;
}
