//! Client-side lifecycle for top-3 product recommendations.
//!
//! A [`RecommendationController`] takes a keyword, issues one request to the
//! recommendation backend and publishes a [`RequestState`] that a renderer
//! turns into a [`View`].

pub mod config;
pub mod error;
pub mod models;
pub mod render;
pub mod request_id;
pub mod services;

pub use config::Config;
pub use error::{AppError, AppResult};
pub use models::{Phase, RankedResult, RequestState};
pub use render::{render, RenderOptions, View};
pub use services::{
    HttpRecommendationProvider, RecommendationController, RecommendationProvider, SubmitOutcome,
};
