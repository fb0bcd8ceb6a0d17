mod defaults;

use crate::error::{AdvisorError, Result};
use crate::models::{CropProfile, FertilizerProfile, PlantDisease};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Reference data handed to every ranking and planning call.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub crops: Vec<CropProfile>,
    #[serde(default)]
    pub fertilizers: Vec<FertilizerProfile>,
    #[serde(default)]
    pub diseases: Vec<PlantDisease>,
}

/// One row of the fertilizer price list.
#[derive(Debug, Clone, Serialize)]
pub struct PriceEntry {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub unit: &'static str,
    pub price_per_kg: f64,
}

impl Catalog {
    pub fn builtin() -> Self {
        Self {
            crops: defaults::crops(),
            fertilizers: defaults::fertilizers(),
            diseases: defaults::diseases(),
        }
    }

    /// Load a catalog from a YAML or JSON file (chosen by extension).
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("json"));

        let catalog: Catalog = if is_json {
            serde_json::from_str(&content)?
        } else {
            serde_yaml::from_str(&content)?
        };

        let issues = catalog.validate()?;
        for issue in &issues {
            tracing::warn!(path = %path.display(), "Catalog entry problem: {}", issue);
        }
        tracing::info!(
            crops = catalog.crops.len(),
            fertilizers = catalog.fertilizers.len(),
            diseases = catalog.diseases.len(),
            "Loaded catalog from {}",
            path.display()
        );
        Ok(catalog)
    }

    /// Check every entry. Entry-level problems come back as a list; an empty
    /// catalog, or one where every entry of a non-empty section is invalid,
    /// is a hard error.
    pub fn validate(&self) -> Result<Vec<String>> {
        if self.crops.is_empty() && self.fertilizers.is_empty() {
            return Err(AdvisorError::Catalog(
                "catalog has no crops and no fertilizers".into(),
            ));
        }

        let mut issues = Vec::new();
        let mut bad_crops = 0;
        for crop in &self.crops {
            if let Err(e) = crop.validate() {
                bad_crops += 1;
                issues.push(format!("crop '{}': {}", crop.id, e));
            }
        }
        let mut bad_fertilizers = 0;
        for fertilizer in &self.fertilizers {
            if let Err(e) = fertilizer.validate() {
                bad_fertilizers += 1;
                issues.push(format!("fertilizer '{}': {}", fertilizer.id, e));
            }
        }

        if !self.crops.is_empty() && bad_crops == self.crops.len() {
            return Err(AdvisorError::Catalog(format!(
                "all {} crop entries are invalid",
                bad_crops
            )));
        }
        if !self.fertilizers.is_empty() && bad_fertilizers == self.fertilizers.len() {
            return Err(AdvisorError::Catalog(format!(
                "all {} fertilizer entries are invalid",
                bad_fertilizers
            )));
        }

        Ok(issues)
    }

    /// Look up a crop by id or display name, ignoring case.
    pub fn find_crop(&self, key: &str) -> Option<&CropProfile> {
        let key = key.trim();
        self.crops
            .iter()
            .find(|c| c.id.eq_ignore_ascii_case(key) || c.name.eq_ignore_ascii_case(key))
    }

    pub fn find_fertilizer(&self, key: &str) -> Option<&FertilizerProfile> {
        let key = key.trim();
        self.fertilizers
            .iter()
            .find(|f| f.id.eq_ignore_ascii_case(key) || f.name.eq_ignore_ascii_case(key))
    }

    /// Canned disease records for a crop. Stands in for a classifier.
    pub fn diseases_for_crop(&self, crop_name: &str) -> Vec<&PlantDisease> {
        self.diseases.iter().filter(|d| d.affects(crop_name)).collect()
    }

    pub fn price_list(&self) -> Vec<PriceEntry> {
        self.fertilizers
            .iter()
            .map(|f| PriceEntry {
                id: f.id.clone(),
                name: f.name.clone(),
                price: f.price,
                unit: f.unit.as_str(),
                price_per_kg: f.price_per_kg(),
            })
            .collect()
    }
}
