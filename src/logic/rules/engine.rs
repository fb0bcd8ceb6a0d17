use super::{
    disease_pressure::DiseasePressureRule, fertility::LowFertilityRule, soil_ph::SoilPhRule,
    AdvisoryContext, Rule,
};
use crate::models::{Advisory, Fertility, SoilReading};
use serde::Serialize;

pub const GENERAL_ADVICE: [&str; 4] = [
    "Conduct soil test every 2-3 years",
    "Maintain soil organic matter above 2%",
    "Practice crop rotation",
    "Use balanced fertilization",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SoilStatus {
    Excellent,
    Good,
    NeedsImprovement,
}

impl SoilStatus {
    /// pH inside 6.0-7.5 with high fertility is excellent, with medium
    /// fertility good; anything else needs work.
    pub fn assess(soil: &SoilReading) -> Self {
        match (soil.ph_in_availability_band(), soil.fertility) {
            (true, Fertility::High) => SoilStatus::Excellent,
            (true, Fertility::Medium) => SoilStatus::Good,
            _ => SoilStatus::NeedsImprovement,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SoilStatus::Excellent => "Excellent",
            SoilStatus::Good => "Good",
            SoilStatus::NeedsImprovement => "Needs improvement",
        }
    }
}

impl std::fmt::Display for SoilStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Soil test interpretation: overall status, triggered advisories and the
/// standing general advice.
#[derive(Debug, Clone, Serialize)]
pub struct SoilReport {
    pub status: SoilStatus,
    pub advisories: Vec<Advisory>,
    pub general_advice: Vec<&'static str>,
}

pub struct AdvisoryEngine {
    rules: Vec<Box<dyn Rule>>,
}

impl AdvisoryEngine {
    pub fn new() -> Self {
        let rules: Vec<Box<dyn Rule>> = vec![
            Box::new(SoilPhRule),
            Box::new(LowFertilityRule),
            Box::new(DiseasePressureRule),
        ];

        Self { rules }
    }

    pub fn evaluate(&self, ctx: &AdvisoryContext) -> Vec<Advisory> {
        let mut advisories: Vec<Advisory> = self
            .rules
            .iter()
            .filter_map(|rule| rule.evaluate(ctx))
            .collect();
        // most severe first; rule order breaks ties
        advisories.sort_by(|a, b| b.severity.cmp(&a.severity));
        tracing::debug!(count = advisories.len(), "Evaluated advisory rules");
        advisories
    }

    pub fn evaluate_rule(&self, rule_id: &str, ctx: &AdvisoryContext) -> Option<Advisory> {
        self.rules
            .iter()
            .find(|r| r.id() == rule_id)
            .and_then(|rule| rule.evaluate(ctx))
    }

    pub fn list_rules(&self) -> Vec<(&'static str, &'static str)> {
        self.rules.iter().map(|r| (r.id(), r.name())).collect()
    }

    pub fn soil_report(&self, soil: &SoilReading) -> SoilReport {
        let ctx = AdvisoryContext {
            soil: Some(soil),
            ..Default::default()
        };
        SoilReport {
            status: SoilStatus::assess(soil),
            advisories: self.evaluate(&ctx),
            general_advice: GENERAL_ADVICE.to_vec(),
        }
    }
}

impl Default for AdvisoryEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::models::{DataSource, EnvironmentReading, RainfallPeriod, Severity};

    #[test]
    fn lists_all_rules() {
        let ids: Vec<&str> = AdvisoryEngine::new()
            .list_rules()
            .iter()
            .map(|(id, _)| *id)
            .collect();
        assert_eq!(ids, vec!["soil_ph", "low_fertility", "disease_pressure"]);
    }

    #[test]
    fn soil_status_assessment() {
        assert_eq!(
            SoilStatus::assess(&SoilReading::new(6.8, Fertility::High)),
            SoilStatus::Excellent
        );
        assert_eq!(
            SoilStatus::assess(&SoilReading::new(7.5, Fertility::Medium)),
            SoilStatus::Good
        );
        assert_eq!(
            SoilStatus::assess(&SoilReading::new(5.5, Fertility::High)),
            SoilStatus::NeedsImprovement
        );
        assert_eq!(
            SoilStatus::assess(&SoilReading::new(6.5, Fertility::Low)),
            SoilStatus::NeedsImprovement
        );
    }

    #[test]
    fn acidic_low_fertility_report() {
        let report = AdvisoryEngine::new().soil_report(&SoilReading::new(5.2, Fertility::Low));
        assert_eq!(report.status, SoilStatus::NeedsImprovement);
        let ids: Vec<&str> = report.advisories.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["acidic_soil", "low_fertility"]);
        assert_eq!(report.general_advice.len(), 4);
    }

    #[test]
    fn healthy_soil_has_no_advisories() {
        let report = AdvisoryEngine::new().soil_report(&SoilReading::new(6.8, Fertility::High));
        assert_eq!(report.status, SoilStatus::Excellent);
        assert!(report.advisories.is_empty());
    }

    #[test]
    fn evaluate_orders_by_severity() {
        let catalog = Catalog::builtin();
        let cucumber = catalog.find_crop("cucumber").unwrap();
        let weather = EnvironmentReading::new(DataSource::Mock, 22.0, 65.0, 2.0, RainfallPeriod::Daily);
        let soil = SoilReading::new(5.0, Fertility::Medium);
        let ctx = AdvisoryContext {
            soil: Some(&soil),
            weather: Some(&weather),
            crop: Some(cucumber),
            diseases: &catalog.diseases,
        };

        let advisories = AdvisoryEngine::new().evaluate(&ctx);
        assert_eq!(advisories.len(), 2);
        assert_eq!(advisories[0].severity, Severity::Warning);
        assert_eq!(advisories[1].id, "disease_pressure");
    }

    #[test]
    fn evaluate_single_rule() {
        let soil = SoilReading::new(8.6, Fertility::Medium);
        let ctx = AdvisoryContext {
            soil: Some(&soil),
            ..Default::default()
        };
        let engine = AdvisoryEngine::new();
        assert_eq!(engine.evaluate_rule("soil_ph", &ctx).unwrap().id, "alkaline_soil");
        assert!(engine.evaluate_rule("low_fertility", &ctx).is_none());
        assert!(engine.evaluate_rule("nonexistent", &ctx).is_none());
    }
}
