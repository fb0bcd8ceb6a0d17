//! Agricultural advisory engine: ranks crops for current conditions,
//! ranks fertilizers for a crop and soil, and plans fertilizer dosage.

pub mod catalog;
pub mod config;
pub mod datasources;
pub mod error;
pub mod logic;
pub mod models;
pub mod report;

pub use catalog::Catalog;
pub use config::Config;
pub use error::{AdvisorError, Result};
pub use logic::{
    plan_fertilizer_dosage, rank_crops, rank_crops_extended, rank_fertilizers, AdvisoryEngine,
    CropFilters, DosagePlanner, FertilizerRanker, GrowthStage, Ranker,
};
