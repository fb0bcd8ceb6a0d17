use super::{AdvisoryContext, Rule};
use crate::models::{Advisory, AdvisoryCategory, PlantDisease, Severity, SpreadRate};

/// Disease pressure rule - flags diseases of the selected crop whose
/// infection window matches current weather.
///
/// A disease is at risk when:
/// - temperature sits inside its favourable range
/// - humidity is at or above its threshold
///
/// Severity follows the fastest-spreading disease at risk:
/// - High spread: Warning
/// - Medium spread: Advisory
/// - Low spread: Info
pub struct DiseasePressureRule;

impl Rule for DiseasePressureRule {
    fn id(&self) -> &'static str {
        "disease_pressure"
    }

    fn name(&self) -> &'static str {
        "Disease Pressure"
    }

    fn evaluate(&self, ctx: &AdvisoryContext) -> Option<Advisory> {
        let crop = ctx.crop?;
        let weather = ctx.weather?;

        let at_risk = diseases_at_risk(
            ctx.diseases,
            &crop.name,
            weather.temperature_c,
            weather.humidity_percent,
        );
        let worst = at_risk
            .iter()
            .map(|d| d.severity_factors.spread_rate)
            .max()?;

        let severity = match worst {
            SpreadRate::High => Severity::Warning,
            SpreadRate::Medium => Severity::Advisory,
            SpreadRate::Low => Severity::Info,
        };

        let names: Vec<&str> = at_risk.iter().map(|d| d.name.as_str()).collect();
        let title = match severity {
            Severity::Warning => format!("{} Risk Elevated", names.join(", ")),
            _ => format!("{} Conditions Developing", names.join(", ")),
        };

        let mut actions: Vec<&str> = Vec::new();
        for disease in &at_risk {
            for step in disease.treatment.iter().chain(disease.prevention.iter()) {
                if !actions.contains(&step.as_str()) {
                    actions.push(step.as_str());
                }
            }
        }

        let mut advisory = Advisory::new(
            "disease_pressure",
            AdvisoryCategory::DiseasePressure,
            severity,
            title,
            format!(
                "Current weather favours {} in {}.",
                names.join(" and "),
                crop.name
            ),
        )
        .with_explanation(
            at_risk
                .iter()
                .map(|d| {
                    let (lo, hi) = d.severity_factors.temperature_range;
                    format!(
                        "{} ({}) thrives at {:.0}-{:.0}°C with humidity above {:.0}%.",
                        d.name, d.scientific_name, lo, hi, d.severity_factors.humidity_threshold
                    )
                })
                .collect::<Vec<_>>()
                .join(" "),
        )
        .with_data_point(
            "Temperature",
            format!("{:.1}°C", weather.temperature_c),
            weather.source.as_str(),
        )
        .with_data_point(
            "Humidity",
            format!("{:.0}%", weather.humidity_percent),
            weather.source.as_str(),
        );

        if !actions.is_empty() {
            advisory = advisory.with_action(actions.join(". "));
        }

        Some(advisory)
    }
}

/// Diseases affecting `crop_name` whose conditions are currently met.
pub fn diseases_at_risk<'a>(
    diseases: &'a [PlantDisease],
    crop_name: &str,
    temperature_c: f64,
    humidity_percent: f64,
) -> Vec<&'a PlantDisease> {
    diseases
        .iter()
        .filter(|d| d.affects(crop_name))
        .filter(|d| d.conditions_favorable(temperature_c, humidity_percent))
        .collect()
}
