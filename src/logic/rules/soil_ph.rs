use super::{AdvisoryContext, Rule};
use crate::models::{Advisory, AdvisoryCategory, Severity};

const ACIDIC_BELOW: f64 = 6.0;
const ALKALINE_ABOVE: f64 = 8.0;

/// Soil pH correction rule
///
/// - pH below 6.0: lime to raise pH
/// - pH above 8.0: gypsum to lower pH
///
/// Most nutrients are freely available between 6.0 and 7.5, so readings in
/// the 7.5-8.0 band are left alone.
pub struct SoilPhRule;

impl Rule for SoilPhRule {
    fn id(&self) -> &'static str {
        "soil_ph"
    }

    fn name(&self) -> &'static str {
        "Soil pH Correction"
    }

    fn evaluate(&self, ctx: &AdvisoryContext) -> Option<Advisory> {
        let soil = ctx.soil?;
        let ph = soil.ph;

        let (id, title, description, action, explanation) = if ph < ACIDIC_BELOW {
            (
                "acidic_soil",
                "Acidic Soil",
                format!("Soil pH of {:.1} is below 6.0.", ph),
                "Apply lime @ 2-4 tons/ha to raise pH",
                "Acidic soils lock up phosphorus and reduce microbial activity. \
                 Agricultural lime neutralises acidity over one to two seasons.",
            )
        } else if ph > ALKALINE_ABOVE {
            (
                "alkaline_soil",
                "Alkaline Soil",
                format!("Soil pH of {:.1} is above 8.0.", ph),
                "Apply gypsum @ 2-3 tons/ha to lower pH",
                "Alkaline soils limit iron, zinc and phosphorus uptake. \
                 Gypsum displaces sodium and gradually lowers pH.",
            )
        } else {
            return None;
        };

        Some(
            Advisory::new(
                id,
                AdvisoryCategory::SoilAmendment,
                Severity::Warning,
                title,
                description,
            )
            .with_explanation(explanation)
            .with_action(action)
            .with_data_point("Soil pH", format!("{:.1}", ph), soil.source.as_str()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Fertility, SoilReading};

    fn evaluate(ph: f64) -> Option<Advisory> {
        let soil = SoilReading::new(ph, Fertility::Medium);
        let ctx = AdvisoryContext {
            soil: Some(&soil),
            ..Default::default()
        };
        SoilPhRule.evaluate(&ctx)
    }

    #[test]
    fn acidic_soil_gets_lime() {
        let advisory = evaluate(5.2).unwrap();
        assert_eq!(advisory.id, "acidic_soil");
        assert_eq!(advisory.priority, "High");
        assert!(advisory.suggested_action.unwrap().contains("lime"));
    }

    #[test]
    fn alkaline_soil_gets_gypsum() {
        let advisory = evaluate(8.4).unwrap();
        assert_eq!(advisory.id, "alkaline_soil");
        assert!(advisory.suggested_action.unwrap().contains("gypsum"));
    }

    #[test]
    fn neutral_soil_is_quiet() {
        assert!(evaluate(6.0).is_none());
        assert!(evaluate(7.8).is_none());
        assert!(evaluate(8.0).is_none());
    }

    #[test]
    fn no_soil_no_advice() {
        assert!(SoilPhRule.evaluate(&AdvisoryContext::default()).is_none());
    }
}
