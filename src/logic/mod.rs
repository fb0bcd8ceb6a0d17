pub mod analytics;
pub mod dosage;
pub mod fertilizer_ranking;
pub mod market;
pub mod ranking;
pub mod rules;
pub mod scoring;
pub mod season;

pub use dosage::{plan_fertilizer_dosage, DosagePlanner};
pub use fertilizer_ranking::{rank_fertilizers, FertilizerRanker, GrowthStage};
pub use ranking::{rank_crops, rank_crops_extended, CropFilters, Ranker, ScoringSettings};
pub use rules::AdvisoryEngine;
