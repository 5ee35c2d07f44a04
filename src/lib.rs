//! Louver Scorer Rust Implementation
//!
//! Classifies a facade's wind-driven rain exposure into the four BS EN
//! 13030:2001 rain defense classes (A strongest .. D weakest) from daily
//! rainfall, wind speed, wind direction and site exposure, then recommends
//! louver models that meet the resulting class.
//!
//! Module layout:
//! - `wind`: u/v wind component conversion utilities
//! - `sample` / `exposure`: validated classifier inputs
//! - `classify`: the exposure formula and rain classes
//! - `scorer`: per-site coordinator, sequential and parallel batch paths
//! - `louver`: embedded catalog and recommendation logic

pub mod classify;
pub mod error;
pub mod exposure;
pub mod louver;
pub mod sample;
pub mod scorer;
pub mod wind;

// Re-export commonly used types
pub use classify::{classify_exposure, RainClass, WdrAssessment, REFERENCE_INTENSITY};
pub use error::ScorerError;
pub use exposure::ExposureLevel;
pub use louver::{
    recommend, Louver, PerformancePriority, PrimaryPurpose, SelectionCriteria, LOUVER_CATALOG,
};
pub use sample::WeatherSample;
pub use scorer::SiteScorer;
