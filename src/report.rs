//! Plain-text rendering of advisory results for the terminal.

use crate::catalog::PriceEntry;
use crate::logic::analytics::CatalogAnalytics;
use crate::logic::rules::SoilReport;
use crate::models::{
    Advisory, Component, ComponentScore, EnvironmentReading, FertilizerPlan, PlantDisease,
    RainfallPeriod, RankedCrop, RankedFertilizer,
};
use std::fmt::Write;

pub const NO_MATCHES: &str = "No recommendations match your criteria.";

pub fn weather_line(reading: &EnvironmentReading) -> String {
    let mut line = format!(
        "{:.1}°C, {:.0}% humidity, {:.1} mm rain ({}) [{}]",
        reading.temperature_c,
        reading.humidity_percent,
        reading.rainfall_mm,
        match reading.rainfall_period {
            RainfallPeriod::Daily => "daily",
            RainfallPeriod::Annual => "annual",
        },
        reading.source
    );
    if let Some(description) = &reading.description {
        let _ = write!(line, " - {}", description);
    }
    line
}

fn component_summary(components: &[ComponentScore]) -> String {
    components
        .iter()
        .map(|c| format!("{} {:.2}", c.component.as_str(), c.value))
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn crop_table(ranked: &[RankedCrop]) -> String {
    if ranked.is_empty() {
        return format!("{}\n", NO_MATCHES);
    }

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<3} {:<14} {:>6}  {:<7} {:<18} {}",
        "#", "Crop", "Score", "Tier", "Season", "Breakdown"
    );
    for (i, r) in ranked.iter().enumerate() {
        let _ = writeln!(
            out,
            "{:<3} {:<14} {:>6.1}  {:<7} {:<18} {}",
            i + 1,
            r.candidate.name,
            r.score,
            r.tier.as_str(),
            r.candidate.season_label(),
            component_summary(&r.components)
        );
        if let Some(error) = &r.error {
            let _ = writeln!(out, "    ! not scored: {}", error);
        }
    }
    out
}

pub fn fertilizer_table(ranked: &[RankedFertilizer]) -> String {
    if ranked.is_empty() {
        return format!("{}\n", NO_MATCHES);
    }

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<3} {:<30} {:>6}  {:<7} {:<10} {}",
        "#", "Fertilizer", "Score", "Tier", "NPK", "Price"
    );
    for (i, r) in ranked.iter().enumerate() {
        let f = &r.candidate;
        let _ = writeln!(
            out,
            "{:<3} {:<30} {:>6.1}  {:<7} {:<10} ₹{} {}",
            i + 1,
            f.name,
            r.score,
            r.tier.as_str(),
            f.composition.ratio_label(),
            f.price,
            f.unit.as_str()
        );
        if let Some(cost) = r.component(Component::Cost) {
            let _ = writeln!(out, "    cost score {:.2}, dosage {}", cost, f.dosage);
        }
    }
    out
}

pub fn plan_text(plan: &FertilizerPlan) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", plan.name);
    let _ = writeln!(out, "  {}", plan.description);
    let _ = writeln!(out, "  Deficit: {}", plan.deficit);
    for item in &plan.items {
        let _ = writeln!(
            out,
            "  - {:<30} {:>12}  ₹{:.0}  ({})",
            item.name,
            item.quantity_label(),
            item.cost,
            item.method
        );
    }
    let _ = writeln!(out, "  Total cost: ₹{:.0}/ha", plan.total_cost);
    let _ = writeln!(out, "  Expected yield increase: {}", plan.expected_yield_increase);
    let _ = writeln!(out, "  Soil health impact: {}", plan.soil_health_impact);
    let _ = writeln!(out, "  Schedule:");
    for step in &plan.schedule {
        let _ = writeln!(out, "    {}", step);
    }
    out
}

pub fn advisory_text(advisory: &Advisory) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} [{}] {}",
        advisory.severity.symbol(),
        advisory.category,
        advisory.title
    );
    let _ = writeln!(out, "  {}", advisory.description);
    if !advisory.explanation.is_empty() {
        let _ = writeln!(out, "  {}", advisory.explanation);
    }
    for dp in &advisory.data_points {
        let _ = writeln!(out, "  {}: {} ({})", dp.label, dp.value, dp.source);
    }
    if let Some(action) = &advisory.suggested_action {
        let _ = writeln!(out, "  Action: {}", action);
    }
    out
}

pub fn soil_report_text(report: &SoilReport) -> String {
    let mut out = format!("Soil status: {}\n", report.status);
    for advisory in &report.advisories {
        out.push_str(&advisory_text(advisory));
    }
    let _ = writeln!(out, "General advice:");
    for advice in &report.general_advice {
        let _ = writeln!(out, "  - {}", advice);
    }
    out
}

pub fn disease_text(disease: &PlantDisease) -> String {
    let (lo, hi) = disease.severity_factors.temperature_range;
    let mut out = format!(
        "{} ({}) - spread {:?}, favoured at {:.0}-{:.0}°C and humidity >= {:.0}%\n",
        disease.name,
        disease.scientific_name,
        disease.severity_factors.spread_rate,
        lo,
        hi,
        disease.severity_factors.humidity_threshold
    );
    for (label, lines) in [
        ("Symptoms", &disease.symptoms),
        ("Treatment", &disease.treatment),
        ("Prevention", &disease.prevention),
    ] {
        if !lines.is_empty() {
            let _ = writeln!(out, "  {}: {}", label, lines.join("; "));
        }
    }
    out
}

pub fn price_list_text(prices: &[PriceEntry]) -> String {
    let mut out = String::new();
    for p in prices {
        let _ = writeln!(
            out,
            "{:<30} ₹{:>7.0} {:<13} (₹{:.2}/kg)",
            p.name, p.price, p.unit, p.price_per_kg
        );
    }
    out
}

pub fn analytics_text(analytics: &CatalogAnalytics) -> String {
    let mut out = format!("Crops catalogued: {}\n", analytics.total_crops);

    let seasons = analytics
        .crops_by_season
        .iter()
        .map(|s| format!("{} {}", s.season, s.crops))
        .collect::<Vec<_>>()
        .join(", ");
    let _ = writeln!(out, "By season: {}", seasons);

    let y = &analytics.yield_analysis;
    let _ = writeln!(
        out,
        "Average max yield: {:.1} (highest: {})",
        y.average_max_yield,
        y.highest_yield_crop.as_deref().unwrap_or("-")
    );

    let m = &analytics.market_trends;
    let _ = writeln!(
        out,
        "Demand: high {}, medium {}, low {}",
        m.demand.high, m.demand.medium, m.demand.low
    );
    let _ = writeln!(
        out,
        "Export potential: {} crops ({})",
        m.export_crops,
        m.top_export_crops.join(", ")
    );

    let c = &analytics.climate_adaptation;
    let _ = writeln!(
        out,
        "Most temperature tolerant: {} (average band {:.1}°C)",
        c.most_adaptable.join(", "),
        c.average_temperature_tolerance
    );

    let d = &analytics.diseases;
    let _ = writeln!(
        out,
        "Diseases: {} (high spread {}, medium {}, low {})",
        d.total, d.by_spread_rate.high, d.by_spread_rate.medium, d.by_spread_rate.low
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::logic::dosage::plan_fertilizer_dosage;
    use crate::logic::rules::AdvisoryEngine;
    use crate::models::{Fertility, Nutrients, SoilReading};

    #[test]
    fn empty_crop_list_says_no_matches() {
        assert!(crop_table(&[]).contains(NO_MATCHES));
        assert!(fertilizer_table(&[]).contains(NO_MATCHES));
    }

    #[test]
    fn weather_line_mentions_source() {
        let reading = crate::datasources::mock_weather();
        let line = weather_line(&reading);
        assert!(line.contains("28.0°C"));
        assert!(line.contains("Mock"));
        assert!(line.ends_with("Partly cloudy"));
    }

    #[test]
    fn plan_text_lists_schedule() {
        let catalog = Catalog::builtin();
        let plans = plan_fertilizer_dosage(
            &catalog,
            &Nutrients::new(120.0, 60.0, 40.0),
            &Nutrients::new(30.0, 25.0, 40.0),
            None,
        )
        .unwrap();
        let text = plan_text(&plans[1]);
        assert!(text.contains("Urea"));
        assert!(text.contains("Schedule:"));
        assert!(!text.contains("MOP"));
    }

    #[test]
    fn soil_report_text_has_status_and_advice() {
        let report = AdvisoryEngine::new().soil_report(&SoilReading::new(5.1, Fertility::Low));
        let text = soil_report_text(&report);
        assert!(text.starts_with("Soil status: Needs improvement"));
        assert!(text.contains("Action: Apply lime"));
        assert!(text.contains("Practice crop rotation"));
    }
}
