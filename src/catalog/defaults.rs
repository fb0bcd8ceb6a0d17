use crate::models::{
    ApplicationTiming, ClimateRequirements, Composition, CropProfile, CropSeason, Demand,
    FertilizerKind, FertilizerProfile, MarketData, Nutrients, ParamRange, PlantDisease, PriceRange,
    PriceUnit, SeverityFactors, SoilRequirements, SpreadRate, YieldRange,
};

use CropSeason::*;

fn climate(temperature: ParamRange, rainfall: ParamRange, humidity: ParamRange) -> ClimateRequirements {
    ClimateRequirements {
        temperature,
        rainfall,
        humidity,
    }
}

fn soil(ph: ParamRange, types: &[&str], drainage: Option<&str>) -> SoilRequirements {
    SoilRequirements {
        ph,
        soil_types: types.iter().map(|t| t.to_string()).collect(),
        drainage: drainage.map(str::to_string),
        organic_matter: None,
    }
}

fn market(min: f64, max: f64, demand: Demand, export: bool, storage_months: u32) -> MarketData {
    MarketData {
        price_range: PriceRange { min, max },
        demand,
        export_potential: export,
        storage_life_months: Some(storage_months),
    }
}

fn yields(average: f64, max: f64, unit: &str) -> YieldRange {
    YieldRange {
        average,
        max,
        unit: unit.to_string(),
    }
}

const T_HA: &str = "tons/hectare";

/// Built-in crop profiles. Prices are per quintal.
pub fn crops() -> Vec<CropProfile> {
    vec![
        CropProfile {
            id: "rice".into(),
            name: "Rice".into(),
            scientific_name: "Oryza sativa".into(),
            variety: Some("Basmati 370".into()),
            seasons: vec![Kharif],
            climate: climate(
                ParamRange::with_optimal(20.0, 35.0, 28.0),
                ParamRange::with_optimal(1000.0, 2000.0, 1200.0),
                ParamRange::with_optimal(70.0, 90.0, 80.0),
            ),
            soil: SoilRequirements {
                organic_matter: Some(">2%".into()),
                ..soil(
                    ParamRange::with_optimal(5.5, 7.0, 6.5),
                    &["Clay", "Loamy", "Alluvial"],
                    Some("Poor to moderate"),
                )
            },
            growth_period_days: 120,
            nutrient_requirement: Some(Nutrients::new(120.0, 60.0, 40.0)),
            yield_range: yields(4.5, 8.0, T_HA),
            market: market(2200.0, 2800.0, Demand::High, true, 12),
        },
        CropProfile {
            id: "wheat".into(),
            name: "Wheat".into(),
            scientific_name: "Triticum aestivum".into(),
            variety: Some("HD 2967".into()),
            seasons: vec![Rabi],
            climate: climate(
                ParamRange::with_optimal(10.0, 25.0, 18.0),
                ParamRange::with_optimal(400.0, 1100.0, 650.0),
                ParamRange::with_optimal(50.0, 70.0, 60.0),
            ),
            soil: soil(
                ParamRange::with_optimal(6.0, 7.5, 6.8),
                &["Loamy", "Clay loam", "Alluvial"],
                Some("Good"),
            ),
            growth_period_days: 120,
            nutrient_requirement: Some(Nutrients::new(120.0, 60.0, 40.0)),
            yield_range: yields(3.5, 6.0, T_HA),
            market: market(2000.0, 2400.0, Demand::High, true, 12),
        },
        CropProfile {
            id: "maize".into(),
            name: "Maize".into(),
            scientific_name: "Zea mays".into(),
            variety: None,
            seasons: vec![Kharif, Rabi],
            climate: climate(
                ParamRange::with_optimal(18.0, 32.0, 26.0),
                ParamRange::with_optimal(500.0, 1000.0, 700.0),
                ParamRange::with_optimal(55.0, 80.0, 65.0),
            ),
            soil: soil(
                ParamRange::with_optimal(5.5, 7.5, 6.5),
                &["Loamy", "Sandy loam", "Alluvial"],
                Some("Good"),
            ),
            growth_period_days: 100,
            nutrient_requirement: Some(Nutrients::new(150.0, 75.0, 50.0)),
            yield_range: yields(3.0, 7.0, T_HA),
            market: market(1800.0, 2200.0, Demand::High, false, 9),
        },
        CropProfile {
            id: "cotton".into(),
            name: "Cotton".into(),
            scientific_name: "Gossypium hirsutum".into(),
            variety: None,
            seasons: vec![Kharif],
            climate: climate(
                ParamRange::with_optimal(21.0, 35.0, 28.0),
                ParamRange::with_optimal(500.0, 1000.0, 750.0),
                ParamRange::with_optimal(50.0, 80.0, 65.0),
            ),
            soil: soil(
                ParamRange::with_optimal(5.8, 8.0, 7.0),
                &["Black", "Alluvial", "Loamy"],
                Some("Good"),
            ),
            growth_period_days: 180,
            nutrient_requirement: Some(Nutrients::new(150.0, 75.0, 75.0)),
            yield_range: yields(1.5, 2.5, T_HA),
            market: market(6000.0, 7000.0, Demand::High, true, 18),
        },
        CropProfile {
            id: "soybean".into(),
            name: "Soybean".into(),
            scientific_name: "Glycine max".into(),
            variety: None,
            seasons: vec![Kharif],
            climate: climate(
                ParamRange::with_optimal(20.0, 32.0, 27.0),
                ParamRange::with_optimal(600.0, 1000.0, 750.0),
                ParamRange::with_optimal(60.0, 80.0, 70.0),
            ),
            soil: soil(
                ParamRange::with_optimal(6.0, 7.5, 6.5),
                &["Loamy", "Black", "Clay loam"],
                Some("Good"),
            ),
            growth_period_days: 100,
            nutrient_requirement: Some(Nutrients::new(30.0, 75.0, 50.0)),
            yield_range: yields(1.5, 3.0, T_HA),
            market: market(3800.0, 4600.0, Demand::Medium, true, 12),
        },
        CropProfile {
            id: "sugarcane".into(),
            name: "Sugarcane".into(),
            scientific_name: "Saccharum officinarum".into(),
            variety: None,
            seasons: vec![YearRound],
            climate: climate(
                ParamRange::with_optimal(20.0, 38.0, 30.0),
                ParamRange::with_optimal(1000.0, 2000.0, 1500.0),
                ParamRange::with_optimal(60.0, 85.0, 75.0),
            ),
            soil: soil(
                ParamRange::with_optimal(6.0, 8.0, 7.0),
                &["Loamy", "Alluvial", "Black"],
                Some("Good"),
            ),
            growth_period_days: 365,
            nutrient_requirement: Some(Nutrients::new(200.0, 100.0, 150.0)),
            yield_range: yields(70.0, 100.0, T_HA),
            market: market(300.0, 350.0, Demand::High, false, 1),
        },
        CropProfile {
            id: "groundnut".into(),
            name: "Groundnut".into(),
            scientific_name: "Arachis hypogaea".into(),
            variety: None,
            seasons: vec![Kharif],
            climate: climate(
                ParamRange::with_optimal(22.0, 32.0, 27.0),
                ParamRange::with_optimal(500.0, 1000.0, 700.0),
                ParamRange::with_optimal(50.0, 75.0, 65.0),
            ),
            soil: soil(
                ParamRange::with_optimal(6.0, 7.0, 6.5),
                &["Sandy loam", "Sandy", "Red"],
                Some("Well-drained"),
            ),
            growth_period_days: 110,
            nutrient_requirement: Some(Nutrients::new(25.0, 50.0, 75.0)),
            yield_range: yields(1.5, 3.0, T_HA),
            market: market(5500.0, 6500.0, Demand::Medium, true, 9),
        },
        CropProfile {
            id: "mustard".into(),
            name: "Mustard".into(),
            scientific_name: "Brassica juncea".into(),
            variety: None,
            seasons: vec![Rabi],
            climate: climate(
                ParamRange::with_optimal(10.0, 25.0, 18.0),
                ParamRange::with_optimal(250.0, 500.0, 400.0),
                ParamRange::with_optimal(40.0, 70.0, 55.0),
            ),
            soil: soil(
                ParamRange::with_optimal(6.0, 7.5, 7.0),
                &["Loamy", "Sandy loam", "Alluvial"],
                Some("Good"),
            ),
            growth_period_days: 120,
            nutrient_requirement: Some(Nutrients::new(100.0, 50.0, 40.0)),
            yield_range: yields(1.0, 2.0, T_HA),
            market: market(5000.0, 5600.0, Demand::Medium, false, 9),
        },
        CropProfile {
            id: "tomato".into(),
            name: "Tomato".into(),
            scientific_name: "Solanum lycopersicum".into(),
            variety: None,
            seasons: vec![Spring, Summer],
            climate: climate(
                ParamRange::with_optimal(18.0, 30.0, 24.0),
                ParamRange::with_optimal(500.0, 1000.0, 700.0),
                ParamRange::with_optimal(50.0, 80.0, 65.0),
            ),
            soil: soil(
                ParamRange::with_optimal(6.0, 7.0, 6.5),
                &["Loamy", "Sandy loam", "Well-drained"],
                Some("Well-drained"),
            ),
            growth_period_days: 70,
            nutrient_requirement: Some(Nutrients::new(150.0, 100.0, 100.0)),
            yield_range: yields(25.0, 50.0, T_HA),
            market: market(800.0, 2000.0, Demand::High, false, 1),
        },
        CropProfile {
            id: "onion".into(),
            name: "Onion".into(),
            scientific_name: "Allium cepa".into(),
            variety: None,
            seasons: vec![Rabi],
            climate: climate(
                ParamRange::with_optimal(13.0, 30.0, 20.0),
                ParamRange::with_optimal(350.0, 750.0, 550.0),
                ParamRange::with_optimal(50.0, 70.0, 60.0),
            ),
            soil: soil(
                ParamRange::with_optimal(6.0, 7.5, 6.8),
                &["Loamy", "Sandy loam", "Alluvial"],
                Some("Well-drained"),
            ),
            growth_period_days: 130,
            nutrient_requirement: Some(Nutrients::new(100.0, 50.0, 100.0)),
            yield_range: yields(20.0, 35.0, T_HA),
            market: market(1200.0, 2500.0, Demand::High, true, 6),
        },
        CropProfile {
            id: "potato".into(),
            name: "Potato".into(),
            scientific_name: "Solanum tuberosum".into(),
            variety: None,
            seasons: vec![Rabi],
            climate: climate(
                ParamRange::with_optimal(15.0, 25.0, 20.0),
                ParamRange::with_optimal(500.0, 750.0, 600.0),
                ParamRange::with_optimal(60.0, 80.0, 70.0),
            ),
            soil: soil(
                ParamRange::with_optimal(5.0, 6.5, 5.8),
                &["Sandy loam", "Loamy"],
                Some("Well-drained"),
            ),
            growth_period_days: 100,
            nutrient_requirement: None,
            yield_range: yields(25.0, 40.0, T_HA),
            market: market(1000.0, 1600.0, Demand::High, false, 6),
        },
        CropProfile {
            id: "chickpea".into(),
            name: "Chickpea".into(),
            scientific_name: "Cicer arietinum".into(),
            variety: None,
            seasons: vec![Rabi],
            climate: climate(
                ParamRange::with_optimal(15.0, 30.0, 22.0),
                ParamRange::with_optimal(400.0, 1000.0, 600.0),
                ParamRange::with_optimal(40.0, 70.0, 55.0),
            ),
            soil: soil(
                ParamRange::with_optimal(6.0, 8.0, 7.0),
                &["Loamy", "Black", "Sandy loam"],
                Some("Good"),
            ),
            growth_period_days: 110,
            nutrient_requirement: None,
            yield_range: yields(1.0, 2.0, T_HA),
            market: market(5000.0, 5800.0, Demand::High, false, 12),
        },
        CropProfile {
            id: "watermelon".into(),
            name: "Watermelon".into(),
            scientific_name: "Citrullus lanatus".into(),
            variety: None,
            seasons: vec![Zaid],
            climate: climate(
                ParamRange::with_optimal(22.0, 35.0, 28.0),
                ParamRange::with_optimal(400.0, 600.0, 500.0),
                ParamRange::with_optimal(50.0, 70.0, 60.0),
            ),
            soil: soil(
                ParamRange::with_optimal(6.0, 7.0, 6.5),
                &["Sandy loam", "Sandy", "Alluvial"],
                Some("Well-drained"),
            ),
            growth_period_days: 85,
            nutrient_requirement: None,
            yield_range: yields(25.0, 40.0, T_HA),
            market: market(800.0, 1400.0, Demand::Medium, false, 1),
        },
        // Market-garden vegetables: tolerance bands without a single optimum.
        CropProfile {
            id: "cucumber".into(),
            name: "Cucumber".into(),
            scientific_name: "Cucumis sativus".into(),
            variety: None,
            seasons: vec![Spring, Summer],
            climate: climate(
                ParamRange::new(20.0, 35.0),
                ParamRange::new(600.0, 1200.0),
                ParamRange::new(60.0, 85.0),
            ),
            soil: soil(
                ParamRange::new(5.5, 7.0),
                &["Sandy loam", "Loamy", "Well-drained"],
                None,
            ),
            growth_period_days: 55,
            nutrient_requirement: None,
            yield_range: yields(15.0, 25.0, T_HA),
            market: market(1000.0, 1800.0, Demand::Medium, false, 1),
        },
        CropProfile {
            id: "spinach".into(),
            name: "Spinach".into(),
            scientific_name: "Spinacia oleracea".into(),
            variety: None,
            seasons: vec![Fall, Winter],
            climate: climate(
                ParamRange::new(10.0, 25.0),
                ParamRange::new(400.0, 800.0),
                ParamRange::new(40.0, 70.0),
            ),
            soil: soil(
                ParamRange::new(6.0, 7.5),
                &["Loamy", "Clay loam", "Rich in organic matter"],
                None,
            ),
            growth_period_days: 45,
            nutrient_requirement: None,
            yield_range: yields(10.0, 15.0, T_HA),
            market: market(1500.0, 2500.0, Demand::Medium, false, 1),
        },
        CropProfile {
            id: "carrot".into(),
            name: "Carrot".into(),
            scientific_name: "Daucus carota".into(),
            variety: None,
            seasons: vec![Spring, Fall],
            climate: climate(
                ParamRange::new(15.0, 25.0),
                ParamRange::new(500.0, 900.0),
                ParamRange::new(50.0, 75.0),
            ),
            soil: soil(
                ParamRange::new(6.0, 7.0),
                &["Sandy", "Loamy", "Well-drained"],
                None,
            ),
            growth_period_days: 75,
            nutrient_requirement: None,
            yield_range: yields(20.0, 30.0, T_HA),
            market: market(1200.0, 2000.0, Demand::Medium, false, 4),
        },
        CropProfile {
            id: "bell_pepper".into(),
            name: "Bell Pepper".into(),
            scientific_name: "Capsicum annuum".into(),
            variety: None,
            seasons: vec![Spring, Summer],
            climate: climate(
                ParamRange::new(20.0, 30.0),
                ParamRange::new(600.0, 1000.0),
                ParamRange::new(55.0, 80.0),
            ),
            soil: soil(
                ParamRange::new(6.0, 7.0),
                &["Loamy", "Sandy loam", "Well-drained"],
                None,
            ),
            growth_period_days: 80,
            nutrient_requirement: None,
            yield_range: yields(15.0, 25.0, T_HA),
            market: market(3000.0, 4500.0, Demand::High, true, 1),
        },
        CropProfile {
            id: "lettuce".into(),
            name: "Lettuce".into(),
            scientific_name: "Lactuca sativa".into(),
            variety: None,
            seasons: vec![Spring, Fall],
            climate: climate(
                ParamRange::new(12.0, 22.0),
                ParamRange::new(400.0, 700.0),
                ParamRange::new(45.0, 70.0),
            ),
            soil: soil(
                ParamRange::new(6.0, 7.0),
                &["Loamy", "Rich in organic matter", "Well-drained"],
                None,
            ),
            growth_period_days: 60,
            nutrient_requirement: None,
            yield_range: yields(10.0, 20.0, T_HA),
            market: market(2000.0, 3000.0, Demand::Medium, false, 1),
        },
    ]
}

fn fertilizer(
    id: &str,
    name: &str,
    kind: FertilizerKind,
    composition: Composition,
    price: f64,
    unit: PriceUnit,
) -> FertilizerProfile {
    FertilizerProfile {
        id: id.into(),
        name: name.into(),
        kind,
        composition,
        price,
        unit,
        method: String::new(),
        timing: ApplicationTiming::PrePlanting,
        timing_note: String::new(),
        dosage: String::new(),
        suitable_crops: Vec::new(),
        benefits: Vec::new(),
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// The fertilizer products the dosage planner draws on.
pub fn fertilizers() -> Vec<FertilizerProfile> {
    vec![
        FertilizerProfile {
            method: "Broadcast or side dressing".into(),
            timing: ApplicationTiming::Split,
            timing_note: "Split application - basal and top dressing".into(),
            dosage: "100-150 kg/ha".into(),
            suitable_crops: strings(&["Rice", "Wheat", "Maize", "Sugarcane"]),
            benefits: strings(&[
                "Quick nitrogen release",
                "Promotes vegetative growth",
                "Cost effective",
            ]),
            ..fertilizer(
                "urea",
                "Urea",
                FertilizerKind::Nitrogen,
                Composition::npk(46.0, 0.0, 0.0),
                266.0,
                PriceUnit::Bag50Kg,
            )
        },
        FertilizerProfile {
            method: "Basal application".into(),
            timing: ApplicationTiming::AtSowing,
            timing_note: "At sowing/planting".into(),
            dosage: "100-125 kg/ha".into(),
            suitable_crops: strings(&["Wheat", "Rice", "Cotton", "Soybean"]),
            benefits: strings(&[
                "Root development",
                "Early plant establishment",
                "Flower and fruit formation",
            ]),
            ..fertilizer(
                "dap",
                "DAP (Di-Ammonium Phosphate)",
                FertilizerKind::Phosphorus,
                Composition::npk(18.0, 46.0, 0.0),
                1350.0,
                PriceUnit::Bag50Kg,
            )
        },
        FertilizerProfile {
            method: "Basal or split application".into(),
            timing: ApplicationTiming::PrePlanting,
            timing_note: "Before flowering/fruiting".into(),
            dosage: "50-100 kg/ha".into(),
            suitable_crops: strings(&["Cotton", "Sugarcane", "Potato", "Tomato"]),
            benefits: strings(&[
                "Disease resistance",
                "Quality improvement",
                "Water use efficiency",
            ]),
            ..fertilizer(
                "mop",
                "MOP (Muriate of Potash)",
                FertilizerKind::Potassium,
                Composition::npk(0.0, 0.0, 60.0),
                1700.0,
                PriceUnit::Bag50Kg,
            )
        },
        FertilizerProfile {
            method: "Basal and top dressing".into(),
            timing: ApplicationTiming::Split,
            timing_note: "Split application".into(),
            dosage: "150-200 kg/ha".into(),
            suitable_crops: strings(&["Vegetables", "Fruits", "Flowers"]),
            benefits: strings(&["Balanced nutrition", "Uniform growth", "Easy application"]),
            ..fertilizer(
                "npk_19_19_19",
                "NPK 19:19:19",
                FertilizerKind::Complex,
                Composition::npk(19.0, 19.0, 19.0),
                850.0,
                PriceUnit::Bag50Kg,
            )
        },
        FertilizerProfile {
            method: "Basal application".into(),
            timing: ApplicationTiming::AtSowing,
            timing_note: "At sowing".into(),
            dosage: "200-250 kg/ha".into(),
            suitable_crops: strings(&["Groundnut", "Mustard", "Pulses"]),
            benefits: strings(&[
                "Phosphorus and sulfur supply",
                "Oil content improvement",
                "Cost effective",
            ]),
            ..fertilizer(
                "ssp",
                "SSP (Single Super Phosphate)",
                FertilizerKind::Phosphorus,
                Composition {
                    s: 11.0,
                    ..Composition::npk(0.0, 16.0, 0.0)
                },
                450.0,
                PriceUnit::Bag50Kg,
            )
        },
        FertilizerProfile {
            method: "Broadcasting and incorporation".into(),
            timing_note: "Before sowing/planting".into(),
            dosage: "5-10 tons/ha".into(),
            suitable_crops: strings(&["All crops"]),
            benefits: strings(&[
                "Soil health improvement",
                "Water retention",
                "Microbial activity",
            ]),
            ..fertilizer(
                "organic_compost",
                "Organic Compost",
                FertilizerKind::Organic,
                Composition::npk(1.5, 1.0, 1.5),
                300.0,
                PriceUnit::Tonne,
            )
        },
        FertilizerProfile {
            method: "Broadcasting or pit application".into(),
            timing_note: "Before sowing/planting".into(),
            dosage: "2-5 tons/ha".into(),
            suitable_crops: strings(&["Vegetables", "Fruits", "Flowers"]),
            benefits: strings(&[
                "Slow nutrient release",
                "Soil structure improvement",
                "Disease suppression",
            ]),
            ..fertilizer(
                "vermicompost",
                "Vermicompost",
                FertilizerKind::Organic,
                Composition::npk(2.0, 1.5, 1.8),
                800.0,
                PriceUnit::Tonne,
            )
        },
        FertilizerProfile {
            method: "Broadcasting and incorporation".into(),
            timing_note: "Before sowing".into(),
            dosage: "200-500 kg/ha".into(),
            suitable_crops: strings(&["All crops"]),
            benefits: strings(&["Pest control", "Soil conditioning", "Slow nitrogen release"]),
            ..fertilizer(
                "neem_cake",
                "Neem Cake",
                FertilizerKind::Organic,
                Composition::npk(5.0, 1.0, 1.4),
                1200.0,
                PriceUnit::Tonne,
            )
        },
    ]
}

fn disease(
    id: &str,
    name: &str,
    scientific_name: &str,
    affected_crops: &[&str],
    temperature_range: (f64, f64),
    humidity_threshold: f64,
    spread_rate: SpreadRate,
) -> PlantDisease {
    PlantDisease {
        id: id.into(),
        name: name.into(),
        scientific_name: scientific_name.into(),
        affected_crops: strings(affected_crops),
        symptoms: Vec::new(),
        causes: Vec::new(),
        treatment: Vec::new(),
        prevention: Vec::new(),
        severity_factors: SeverityFactors {
            temperature_range,
            humidity_threshold,
            spread_rate,
        },
    }
}

/// Canned disease records served in place of an image classifier.
pub fn diseases() -> Vec<PlantDisease> {
    vec![
        PlantDisease {
            symptoms: strings(&[
                "Dark brown spots on leaves",
                "White fuzzy growth on leaf undersides",
            ]),
            causes: strings(&["High humidity", "Cool temperatures"]),
            treatment: strings(&[
                "Apply copper-based fungicide",
                "Remove affected plant parts",
            ]),
            prevention: strings(&["Maintain proper plant spacing", "Ensure good drainage"]),
            ..disease(
                "late_blight",
                "Late Blight",
                "Phytophthora infestans",
                &["Potato", "Tomato"],
                (15.0, 25.0),
                85.0,
                SpreadRate::High,
            )
        },
        PlantDisease {
            symptoms: strings(&[
                "Concentric ring spots on older leaves",
                "Yellowing around lesions",
            ]),
            causes: strings(&["Warm humid weather", "Infected crop debris"]),
            treatment: strings(&[
                "Apply mancozeb or chlorothalonil",
                "Remove infected leaves immediately",
            ]),
            prevention: strings(&["Rotate crops", "Water at soil level, not on leaves"]),
            ..disease(
                "early_blight",
                "Early Blight",
                "Alternaria solani",
                &["Tomato", "Potato"],
                (24.0, 29.0),
                80.0,
                SpreadRate::Medium,
            )
        },
        PlantDisease {
            symptoms: strings(&[
                "Spindle-shaped lesions with grey centres",
                "Neck rot at panicle base",
            ]),
            causes: strings(&["Prolonged leaf wetness", "Excess nitrogen"]),
            treatment: strings(&["Apply tricyclazole", "Drain field briefly"]),
            prevention: strings(&["Use resistant varieties", "Balanced nitrogen application"]),
            ..disease(
                "rice_blast",
                "Rice Blast",
                "Magnaporthe oryzae",
                &["Rice"],
                (20.0, 30.0),
                90.0,
                SpreadRate::High,
            )
        },
        PlantDisease {
            symptoms: strings(&["Orange-brown pustules on leaves", "Premature leaf drying"]),
            causes: strings(&["Cool nights with dew", "Wind-borne spores"]),
            treatment: strings(&["Apply propiconazole"]),
            prevention: strings(&["Timely sowing", "Use resistant varieties"]),
            ..disease(
                "leaf_rust",
                "Leaf Rust",
                "Puccinia triticina",
                &["Wheat"],
                (15.0, 25.0),
                80.0,
                SpreadRate::High,
            )
        },
        PlantDisease {
            symptoms: strings(&["White powdery patches on leaves", "Leaf curling"]),
            causes: strings(&["Dry days with humid nights", "Poor air circulation"]),
            treatment: strings(&["Apply wettable sulphur", "Remove heavily infected leaves"]),
            prevention: strings(&["Improve air circulation", "Avoid dense planting"]),
            ..disease(
                "powdery_mildew",
                "Powdery Mildew",
                "Erysiphales",
                &["Cucumber", "Bell Pepper", "Mustard"],
                (15.0, 27.0),
                60.0,
                SpreadRate::Medium,
            )
        },
    ]
}
