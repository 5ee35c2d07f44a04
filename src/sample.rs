//! Weather sample inputs
//!
//! A `WeatherSample` carries the three meteorological inputs the classifier
//! consumes. Samples are value types constructed per assessment and never
//! mutated; whatever produced them (a climate dataset extract, a geocoded
//! site lookup, a test fixture) stays outside this crate.

use crate::error::ScorerError;
use crate::wind;
use serde::{Deserialize, Serialize};

/// One day of site weather, ready for classification
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeatherSample {
    /// Daily rainfall rate (mm/day), non-negative
    pub rainfall_mm_per_day: f64,

    /// Wind speed (m/s), non-negative
    pub wind_speed_m_s: f64,

    /// Wind direction in radians, meteorological "from" convention.
    /// Any real value is accepted; only its cosine is consumed downstream,
    /// so no range reduction is applied here or later.
    pub wind_direction_rad: f64,
}

impl WeatherSample {
    /// Build a validated sample from scalar inputs
    pub fn new(
        rainfall_mm_per_day: f64,
        wind_speed_m_s: f64,
        wind_direction_rad: f64,
    ) -> Result<Self, ScorerError> {
        let sample = Self {
            rainfall_mm_per_day,
            wind_speed_m_s,
            wind_direction_rad,
        };
        sample.validate()?;
        Ok(sample)
    }

    /// Build a sample from u/v wind components (eastward/northward, m/s)
    pub fn from_wind_components(
        rainfall_mm_per_day: f64,
        u: f64,
        v: f64,
    ) -> Result<Self, ScorerError> {
        Self::new(
            rainfall_mm_per_day,
            wind::speed_from_components(u, v),
            wind::direction_from_components(u, v),
        )
    }

    /// Check the non-negativity preconditions.
    ///
    /// Kept public because the fields are: a sample assembled by hand (or
    /// deserialized) is re-checked by the classifier before any arithmetic.
    pub fn validate(&self) -> Result<(), ScorerError> {
        if self.rainfall_mm_per_day < 0.0 {
            return Err(ScorerError::NegativeRainfall(self.rainfall_mm_per_day));
        }
        if self.wind_speed_m_s < 0.0 {
            return Err(ScorerError::NegativeWindSpeed(self.wind_speed_m_s));
        }
        Ok(())
    }
}
