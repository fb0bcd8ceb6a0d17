use super::{AdvisoryContext, Rule};
use crate::models::{Advisory, AdvisoryCategory, Fertility, Severity};

/// Low soil fertility rule - build organic matter before chasing yield with
/// mineral fertilizer.
pub struct LowFertilityRule;

impl Rule for LowFertilityRule {
    fn id(&self) -> &'static str {
        "low_fertility"
    }

    fn name(&self) -> &'static str {
        "Low Soil Fertility"
    }

    fn evaluate(&self, ctx: &AdvisoryContext) -> Option<Advisory> {
        let soil = ctx.soil?;
        if soil.fertility != Fertility::Low {
            return None;
        }

        let mut advisory = Advisory::new(
            "low_fertility",
            AdvisoryCategory::Fertility,
            Severity::Warning,
            "Low Soil Fertility",
            "Soil fertility is rated low.",
        )
        .with_explanation(
            "Low-fertility soils supply roughly half the baseline nitrogen, phosphorus \
             and potassium. Organic matter improves nutrient holding capacity and \
             makes mineral fertilizer go further.",
        )
        .with_action("Increase organic matter through compost and green manuring")
        .with_data_point("Fertility", soil.fertility.as_str(), soil.source.as_str());

        if let Some(n) = soil.nitrogen {
            advisory = advisory.with_data_point(
                "Nitrogen",
                format!("{:.0} kg/ha", n),
                soil.source.as_str(),
            );
        }

        Some(advisory)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SoilReading;

    #[test]
    fn low_fertility_triggers() {
        let soil = SoilReading::new(6.5, Fertility::Low).with_nutrients(180.0, 10.0, 120.0);
        let ctx = AdvisoryContext {
            soil: Some(&soil),
            ..Default::default()
        };
        let advisory = LowFertilityRule.evaluate(&ctx).unwrap();
        assert_eq!(advisory.category, AdvisoryCategory::Fertility);
        assert_eq!(advisory.data_points.len(), 2);
    }

    #[test]
    fn medium_fertility_is_quiet() {
        let soil = SoilReading::new(6.5, Fertility::Medium);
        let ctx = AdvisoryContext {
            soil: Some(&soil),
            ..Default::default()
        };
        assert!(LowFertilityRule.evaluate(&ctx).is_none());
    }
}
