use crate::error::{AdvisorError, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FertilizerKind {
    Nitrogen,
    Phosphorus,
    Potassium,
    Complex,
    Organic,
}

impl FertilizerKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FertilizerKind::Nitrogen => "Nitrogen",
            FertilizerKind::Phosphorus => "Phosphorus",
            FertilizerKind::Potassium => "Potassium",
            FertilizerKind::Complex => "Complex",
            FertilizerKind::Organic => "Organic",
        }
    }
}

impl std::fmt::Display for FertilizerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Nutrient content in percent by weight.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Composition {
    #[serde(alias = "N")]
    pub n: f64,
    #[serde(alias = "P")]
    pub p: f64,
    #[serde(alias = "K")]
    pub k: f64,
    #[serde(default, alias = "S")]
    pub s: f64,
}

impl Composition {
    pub const fn npk(n: f64, p: f64, k: f64) -> Self {
        Self { n, p, k, s: 0.0 }
    }

    pub fn ratio_label(&self) -> String {
        format!("{}-{}-{}", self.n, self.p, self.k)
    }

    pub fn is_nitrogen_led(&self) -> bool {
        self.n > 0.0 && self.n >= self.p && self.n >= self.k
    }

    pub fn is_phosphorus_led(&self) -> bool {
        self.p > 0.0 && self.p >= self.n && self.p >= self.k
    }

    pub fn is_balanced(&self) -> bool {
        self.n > 0.0 && self.n == self.p && self.p == self.k
    }
}

/// Standard unit a catalog price refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriceUnit {
    Bag50Kg,
    Tonne,
}

impl PriceUnit {
    pub fn kg(&self) -> f64 {
        match self {
            PriceUnit::Bag50Kg => 50.0,
            PriceUnit::Tonne => 1000.0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PriceUnit::Bag50Kg => "per 50kg bag",
            PriceUnit::Tonne => "per ton",
        }
    }
}

/// Scheduling bucket an application belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationTiming {
    PrePlanting,
    AtSowing,
    Split,
}

impl ApplicationTiming {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApplicationTiming::PrePlanting => "Pre-planting",
            ApplicationTiming::AtSowing => "At sowing",
            ApplicationTiming::Split => "Split application",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CropFit {
    Listed,
    AllCrops,
    Unsuited,
}

/// Static reference data for one fertilizer product.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FertilizerProfile {
    pub id: String,
    pub name: String,
    pub kind: FertilizerKind,
    pub composition: Composition,
    pub price: f64,
    pub unit: PriceUnit,
    pub method: String,
    pub timing: ApplicationTiming,
    /// Free-text timing guidance shown to the farmer.
    #[serde(default)]
    pub timing_note: String,
    #[serde(default)]
    pub dosage: String,
    #[serde(default)]
    pub suitable_crops: Vec<String>,
    #[serde(default)]
    pub benefits: Vec<String>,
}

impl FertilizerProfile {
    pub fn is_organic(&self) -> bool {
        self.kind == FertilizerKind::Organic
    }

    pub fn price_per_kg(&self) -> f64 {
        self.price / self.unit.kg()
    }

    /// Cost of applying `quantity_kg` of this product.
    pub fn cost_for(&self, quantity_kg: f64) -> f64 {
        quantity_kg / self.unit.kg() * self.price
    }

    pub fn crop_fit(&self, crop_name: &str) -> CropFit {
        let wanted = crop_name.trim().to_lowercase();
        let mut all_crops = false;
        for tag in &self.suitable_crops {
            let tag = tag.trim().to_lowercase();
            if tag == wanted {
                return CropFit::Listed;
            }
            if tag == "all crops" {
                all_crops = true;
            }
        }
        if all_crops {
            CropFit::AllCrops
        } else {
            CropFit::Unsuited
        }
    }

    pub fn validate(&self) -> Result<()> {
        let c = &self.composition;
        let nutrients_ok = [c.n, c.p, c.k, c.s]
            .iter()
            .all(|v| v.is_finite() && (0.0..=100.0).contains(v));
        if !nutrients_ok {
            return Err(AdvisorError::invalid(format!(
                "{}: composition percentages must lie within 0-100",
                self.name
            )));
        }
        if !self.price.is_finite() || self.price < 0.0 {
            return Err(AdvisorError::invalid(format!(
                "{}: price must be a non-negative number",
                self.name
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn urea() -> FertilizerProfile {
        FertilizerProfile {
            id: "urea".into(),
            name: "Urea".into(),
            kind: FertilizerKind::Nitrogen,
            composition: Composition::npk(46.0, 0.0, 0.0),
            price: 266.0,
            unit: PriceUnit::Bag50Kg,
            method: "Broadcast or side dressing".into(),
            timing: ApplicationTiming::Split,
            timing_note: String::new(),
            dosage: String::new(),
            suitable_crops: vec!["Rice".into(), "Wheat".into()],
            benefits: Vec::new(),
        }
    }

    #[test]
    fn cost_uses_unit_size() {
        let urea = urea();
        assert!((urea.cost_for(100.0) - 532.0).abs() < 0.001);
        assert!((urea.price_per_kg() - 5.32).abs() < 0.001);
    }

    #[test]
    fn crop_fit_matches_case_insensitively() {
        let mut urea = urea();
        assert_eq!(urea.crop_fit("rice"), CropFit::Listed);
        assert_eq!(urea.crop_fit("Tomato"), CropFit::Unsuited);
        urea.suitable_crops.push("All crops".into());
        assert_eq!(urea.crop_fit("Tomato"), CropFit::AllCrops);
    }

    #[test]
    fn composition_leaders() {
        assert!(Composition::npk(46.0, 0.0, 0.0).is_nitrogen_led());
        assert!(Composition::npk(18.0, 46.0, 0.0).is_phosphorus_led());
        assert!(Composition::npk(19.0, 19.0, 19.0).is_balanced());
        assert!(!Composition::npk(0.0, 0.0, 60.0).is_nitrogen_led());
    }

    #[test]
    fn validation_rejects_bad_price() {
        let mut urea = urea();
        assert!(urea.validate().is_ok());
        urea.price = f64::NAN;
        assert!(urea.validate().is_err());
    }
}
