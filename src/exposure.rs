//! Site Exposure Levels
//!
//! Three-level sheltering classification, each level mapped to a fixed
//! exposure coefficient per BS EN 13030:2001. The mapping is total: every
//! level has exactly one coefficient and no further levels exist.
//! Unrecognized labels are rejected, never silently defaulted - a wrong
//! coefficient would shift the resulting rain class without any trace.

use crate::error::ScorerError;
use serde::{Deserialize, Serialize};

/// Site exposure level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExposureLevel {
    /// Coastal areas, open terrain
    High,

    /// Suburban terrain, forest
    Medium,

    /// City centres, dense urban areas
    Low,
}

impl ExposureLevel {
    /// Exposure coefficient `a` from the standard's fixed table
    pub fn coefficient(&self) -> f64 {
        match self {
            ExposureLevel::High => 0.35,
            ExposureLevel::Medium => 0.25,
            ExposureLevel::Low => 0.20,
        }
    }

    /// Parse a textual label ("high", "medium", "low"; case-insensitive,
    /// surrounding whitespace ignored).
    pub fn from_label(label: &str) -> Result<Self, ScorerError> {
        match label.trim().to_ascii_lowercase().as_str() {
            "high" => Ok(ExposureLevel::High),
            "medium" => Ok(ExposureLevel::Medium),
            "low" => Ok(ExposureLevel::Low),
            _ => Err(ScorerError::UnknownExposureLevel(label.to_string())),
        }
    }

    /// Friendly name for display
    pub fn display_name(&self) -> &'static str {
        match self {
            ExposureLevel::High => "High (coastal / open terrain)",
            ExposureLevel::Medium => "Medium (suburban / forest)",
            ExposureLevel::Low => "Low (dense urban)",
        }
    }

    /// Get all levels
    pub fn all() -> &'static [ExposureLevel] {
        &[
            ExposureLevel::High,
            ExposureLevel::Medium,
            ExposureLevel::Low,
        ]
    }
}
