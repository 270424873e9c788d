pub mod controller;
pub mod providers;

pub use controller::{RecommendationController, SubmitOutcome};
pub use providers::{HttpRecommendationProvider, RecommendationProvider};
