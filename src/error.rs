//! Scorer error types
//!
//! Every failure in this crate is a precondition violation caught before any
//! computation runs: negative rainfall, negative wind speed, or an exposure
//! level label outside the fixed table. There is no other error kind; once
//! inputs pass validation, every computation path is total.

use thiserror::Error;

/// Invalid-input errors raised by the exposure scorer
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScorerError {
    /// Rainfall rate below zero
    #[error("invalid input: rainfall must be non-negative, got {0} mm/day")]
    NegativeRainfall(f64),

    /// Wind speed below zero
    #[error("invalid input: wind speed must be non-negative, got {0} m/s")]
    NegativeWindSpeed(f64),

    /// Exposure level label outside {high, medium, low}
    #[error("invalid input: unrecognized exposure level '{0}' (expected high, medium, or low)")]
    UnknownExposureLevel(String),
}
