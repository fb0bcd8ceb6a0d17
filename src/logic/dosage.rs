use crate::catalog::Catalog;
use crate::error::{AdvisorError, Result};
use crate::models::{
    ApplicationTiming, Composition, CropProfile, FertilizerPlan, FertilizerProfile, Nutrients,
    PlanApproach, PlanItem, SoilReading,
};

/// Requirement used for crops without a catalogued NPK figure (kg/ha).
pub const DEFAULT_REQUIREMENT: Nutrients = Nutrients::new(100.0, 50.0, 50.0);

/// Assumed soil supply when nothing is known about the field (kg/ha).
pub const DEFAULT_SOIL_SUPPLY: Nutrients = Nutrients::new(20.0, 15.0, 25.0);

/// Supply of a medium-fertility soil in the availability band (kg/ha).
const BASE_SOIL_SUPPLY: Nutrients = Nutrients::new(30.0, 25.0, 40.0);

const MAX_YIELD_FACTOR: f64 = 2.0;
const MAX_COMPLEX_KG: f64 = 200.0;
const COMPLEX_KG_PER_DEFICIT_KG: f64 = 5.0;

const BALANCED_COMPOST_KG: f64 = 5000.0;
const ORGANIC_VERMICOMPOST_KG: f64 = 3000.0;
const ORGANIC_NEEM_CAKE_KG: f64 = 300.0;
const ORGANIC_COMPOST_KG: f64 = 8000.0;

const UREA: &str = "urea";
const DAP: &str = "dap";
const MOP: &str = "mop";
const NPK_COMPLEX: &str = "npk_19_19_19";
const COMPOST: &str = "organic_compost";
const VERMICOMPOST: &str = "vermicompost";
const NEEM_CAKE: &str = "neem_cake";

/// Crop NPK requirement, falling back to [`DEFAULT_REQUIREMENT`].
pub fn crop_requirement(crop: &CropProfile) -> Nutrients {
    crop.nutrient_requirement.unwrap_or(DEFAULT_REQUIREMENT)
}

/// Requirement for a crop named by id or name. Crops missing from the
/// catalog get [`DEFAULT_REQUIREMENT`].
pub fn requirement_for(catalog: &Catalog, crop: &str) -> Nutrients {
    match catalog.find_crop(crop) {
        Some(profile) => crop_requirement(profile),
        None => {
            tracing::warn!(crop, "Crop not in catalog, using default NPK requirement");
            DEFAULT_REQUIREMENT
        }
    }
}

/// Estimate plant-available N/P/K from a soil reading.
///
/// Fertility scales a baseline supply and pH outside 6.0-7.5 cuts
/// availability to 80%. Measured nutrient values replace the estimate
/// nutrient by nutrient.
pub fn estimate_soil_supply(soil: Option<&SoilReading>) -> Nutrients {
    let Some(soil) = soil else {
        return DEFAULT_SOIL_SUPPLY;
    };

    let ph_factor = if soil.ph_in_availability_band() { 1.0 } else { 0.8 };
    let factor = soil.fertility.supply_multiplier() * ph_factor;
    let estimate = BASE_SOIL_SUPPLY.scale(factor);

    Nutrients::new(
        soil.nitrogen.unwrap_or(estimate.n.round()),
        soil.phosphorus.unwrap_or(estimate.p.round()),
        soil.potassium.unwrap_or(estimate.k.round()),
    )
}

/// Plain-language reading of an N-P-K composition.
pub fn npk_explanation(composition: &Composition) -> String {
    format!(
        "Nitrogen ({}%): Promotes leaf growth. Phosphorus ({}%): Supports root development \
         and flowering. Potassium ({}%): Enhances fruit quality and disease resistance.",
        composition.n, composition.p, composition.k
    )
}

/// Builds the three alternative fertilizer plans from catalog products.
pub struct DosagePlanner<'a> {
    urea: &'a FertilizerProfile,
    dap: &'a FertilizerProfile,
    mop: &'a FertilizerProfile,
    npk_complex: &'a FertilizerProfile,
    compost: &'a FertilizerProfile,
    vermicompost: &'a FertilizerProfile,
    neem_cake: &'a FertilizerProfile,
}

impl<'a> DosagePlanner<'a> {
    /// Resolve every product the plans draw on. A catalog missing any of
    /// them cannot produce plans at all.
    pub fn new(catalog: &'a Catalog) -> Result<Self> {
        let lookup = |id: &str| {
            catalog.find_fertilizer(id).ok_or_else(|| {
                AdvisorError::Catalog(format!(
                    "fertilizer '{}' required by the dosage planner is missing",
                    id
                ))
            })
        };

        Ok(Self {
            urea: lookup(UREA)?,
            dap: lookup(DAP)?,
            mop: lookup(MOP)?,
            npk_complex: lookup(NPK_COMPLEX)?,
            compost: lookup(COMPOST)?,
            vermicompost: lookup(VERMICOMPOST)?,
            neem_cake: lookup(NEEM_CAKE)?,
        })
    }

    /// Balanced, straight and organic plans, in that order.
    pub fn plan(
        &self,
        requirement: &Nutrients,
        soil_supply: &Nutrients,
        yield_target: Option<f64>,
    ) -> Result<[FertilizerPlan; 3]> {
        validate_nutrients("requirement", requirement)?;
        validate_nutrients("soil supply", soil_supply)?;

        let yield_factor = match yield_target {
            Some(target) if target.is_finite() && target > 0.0 => {
                (target / 100.0).min(MAX_YIELD_FACTOR)
            }
            Some(target) => {
                return Err(AdvisorError::invalid(format!(
                    "yield target {} must be a positive number",
                    target
                )))
            }
            None => 1.0,
        };

        let deficit = requirement.scale(yield_factor).deficit(soil_supply);
        tracing::debug!(%deficit, yield_factor, "Computed nutrient deficit");

        Ok([
            self.balanced(deficit),
            self.straight(deficit),
            self.organic(deficit),
        ])
    }

    fn balanced(&self, deficit: Nutrients) -> FertilizerPlan {
        let mut items = Vec::new();

        let complex_kg =
            (deficit.max_component() * COMPLEX_KG_PER_DEFICIT_KG).min(MAX_COMPLEX_KG);
        push_item(&mut items, self.npk_complex, complex_kg, self.npk_complex.timing);

        // top up whatever nitrogen the complex leaves uncovered
        let remaining_n = deficit.n - complex_kg * self.npk_complex.composition.n / 100.0;
        if remaining_n > 0.0 {
            let urea_kg = (remaining_n / nutrient_fraction(self.urea.composition.n)).round();
            push_item(&mut items, self.urea, urea_kg, ApplicationTiming::Split);
        }

        push_item(&mut items, self.compost, BALANCED_COMPOST_KG, self.compost.timing);

        build_plan(PlanApproach::Balanced, deficit, items)
    }

    fn straight(&self, deficit: Nutrients) -> FertilizerPlan {
        let mut items = Vec::new();

        if deficit.n > 0.0 {
            let kg = (deficit.n / nutrient_fraction(self.urea.composition.n)).round();
            push_item(&mut items, self.urea, kg, self.urea.timing);
        }
        if deficit.p > 0.0 {
            let kg = (deficit.p / nutrient_fraction(self.dap.composition.p)).round();
            push_item(&mut items, self.dap, kg, self.dap.timing);
        }
        if deficit.k > 0.0 {
            let kg = (deficit.k / nutrient_fraction(self.mop.composition.k)).round();
            push_item(&mut items, self.mop, kg, self.mop.timing);
        }

        build_plan(PlanApproach::Straight, deficit, items)
    }

    fn organic(&self, deficit: Nutrients) -> FertilizerPlan {
        let mut items = Vec::new();
        push_item(
            &mut items,
            self.vermicompost,
            ORGANIC_VERMICOMPOST_KG,
            self.vermicompost.timing,
        );
        push_item(
            &mut items,
            self.neem_cake,
            ORGANIC_NEEM_CAKE_KG,
            self.neem_cake.timing,
        );
        push_item(&mut items, self.compost, ORGANIC_COMPOST_KG, self.compost.timing);

        build_plan(PlanApproach::Organic, deficit, items)
    }
}

pub fn plan_fertilizer_dosage(
    catalog: &Catalog,
    requirement: &Nutrients,
    soil_supply: &Nutrients,
    yield_target: Option<f64>,
) -> Result<[FertilizerPlan; 3]> {
    DosagePlanner::new(catalog)?.plan(requirement, soil_supply, yield_target)
}

/// One instruction line per timing bucket; split applications get two.
pub fn application_schedule(items: &[PlanItem]) -> Vec<String> {
    let names_for = |timing: ApplicationTiming| {
        items
            .iter()
            .filter(|item| item.timing == timing)
            .map(|item| item.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    };

    let mut schedule = Vec::new();

    let pre_planting = names_for(ApplicationTiming::PrePlanting);
    if !pre_planting.is_empty() {
        schedule.push(format!("Pre-planting: Apply {}", pre_planting));
    }

    let at_sowing = names_for(ApplicationTiming::AtSowing);
    if !at_sowing.is_empty() {
        schedule.push(format!("At sowing: Apply {}", at_sowing));
    }

    let split = names_for(ApplicationTiming::Split);
    if !split.is_empty() {
        schedule.push(format!("30 days after sowing: Apply 50% of {}", split));
        schedule.push(format!(
            "60 days after sowing: Apply remaining 50% of {}",
            split
        ));
    }

    schedule
}

fn push_item(
    items: &mut Vec<PlanItem>,
    fertilizer: &FertilizerProfile,
    quantity_kg: f64,
    timing: ApplicationTiming,
) {
    if quantity_kg <= 0.0 {
        return;
    }
    items.push(PlanItem {
        fertilizer_id: fertilizer.id.clone(),
        name: fertilizer.name.clone(),
        quantity_kg_per_ha: quantity_kg,
        timing,
        method: fertilizer.method.clone(),
        cost: fertilizer.cost_for(quantity_kg),
    });
}

fn build_plan(approach: PlanApproach, deficit: Nutrients, items: Vec<PlanItem>) -> FertilizerPlan {
    let total_cost = items.iter().map(|item| item.cost).sum::<f64>().round();
    let schedule = application_schedule(&items);

    FertilizerPlan {
        approach,
        name: approach.name().to_string(),
        description: approach.description().to_string(),
        deficit,
        items,
        total_cost,
        expected_yield_increase: approach.expected_yield_increase().to_string(),
        soil_health_impact: approach.soil_health_impact().to_string(),
        schedule,
        benefits: approach.benefits().iter().map(|b| b.to_string()).collect(),
    }
}

fn nutrient_fraction(percent: f64) -> f64 {
    percent / 100.0
}

fn validate_nutrients(label: &str, nutrients: &Nutrients) -> Result<()> {
    if !nutrients.is_finite() || !nutrients.is_non_negative() {
        return Err(AdvisorError::invalid(format!(
            "{} must contain non-negative numbers, got {}",
            label, nutrients
        )));
    }
    Ok(())
}
