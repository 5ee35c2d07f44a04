//! Wind-Driven Rain Classification
//!
//! Reduces daily rainfall, wind speed, wind direction and site exposure to
//! one of the four rain defense classes of BS EN 13030:2001 (A strongest
//! required defense .. D weakest). Pure computation: no I/O, no state, a
//! handful of floating-point operations per call.
//!
//! The diagnostic intermediates (wind-driven-rain coefficient, intensity,
//! relative exposure) are returned alongside the class so callers can log or
//! render them instead of re-deriving them.

use crate::error::ScorerError;
use crate::exposure::ExposureLevel;
use crate::sample::WeatherSample;
use serde::{Deserialize, Serialize};

/// Reference wind-driven rain intensity (L/h/m2) the computed intensity is
/// normalized against, from BS EN 13030:2001.
pub const REFERENCE_INTENSITY: f64 = 20.83;

/// Relative exposure at or above which class A applies
pub const CLASS_A_MIN: f64 = 0.8;

/// Relative exposure at or above which class B applies
pub const CLASS_B_MIN: f64 = 0.4;

/// Relative exposure at or above which class C applies
pub const CLASS_C_MIN: f64 = 0.2;

/// Rain defense class, ordered by decreasing required protection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RainClass {
    /// Severe wind-driven rain; strongest defense required
    A,

    /// High exposure
    B,

    /// Moderate exposure
    C,

    /// Sheltered; minimal wind-driven rain
    D,
}

impl RainClass {
    /// Classify a relative exposure value.
    ///
    /// Thresholds are inclusive at their lower bound and evaluated in
    /// descending order; the four intervals cover every non-negative input,
    /// so the final branch IS the class D interval, not a fallback.
    pub fn from_relative_exposure(relative_exposure: f64) -> Self {
        if relative_exposure >= CLASS_A_MIN {
            RainClass::A
        } else if relative_exposure >= CLASS_B_MIN {
            RainClass::B
        } else if relative_exposure >= CLASS_C_MIN {
            RainClass::C
        } else {
            RainClass::D
        }
    }

    /// Protection rank: 3 for class A down to 0 for class D.
    /// Higher rank = more severe exposure = stronger defense required.
    pub fn protection_rank(&self) -> u8 {
        match self {
            RainClass::A => 3,
            RainClass::B => 2,
            RainClass::C => 1,
            RainClass::D => 0,
        }
    }

    /// True when a product rated `self` provides at least the protection
    /// `required` calls for (an A-rated louver satisfies any class).
    pub fn satisfies(&self, required: RainClass) -> bool {
        self.protection_rank() >= required.protection_rank()
    }

    /// Single-letter label
    pub fn letter(&self) -> &'static str {
        match self {
            RainClass::A => "A",
            RainClass::B => "B",
            RainClass::C => "C",
            RainClass::D => "D",
        }
    }

    /// Friendly description for display
    pub fn description(&self) -> &'static str {
        match self {
            RainClass::A => "Class A - severe wind-driven rain, strongest defense required",
            RainClass::B => "Class B - high wind-driven rain exposure",
            RainClass::C => "Class C - moderate wind-driven rain exposure",
            RainClass::D => "Class D - sheltered, minimal wind-driven rain",
        }
    }
}

/// Full assessment for one facade: the class plus the diagnostic
/// intermediates that produced it
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WdrAssessment {
    /// Resulting rain defense class
    pub class: RainClass,

    /// Dimensionless wind-driven-rain coefficient, in [0, 1]
    pub wdr_coefficient: f64,

    /// Wind-driven rain intensity on the facade (L/h/m2)
    pub wdr_intensity: f64,

    /// Intensity normalized against [`REFERENCE_INTENSITY`]
    pub relative_exposure: f64,
}

/// Classify wind-driven rain exposure for one facade.
///
/// `facade_orientation_rad` is the compass bearing the facade faces
/// (radians, same convention as the wind direction); pass 0.0 when the
/// orientation is unknown.
///
/// Steps:
/// 1. `a` = exposure coefficient for the site.
/// 2. Angle factor `f = |cos(wind_direction - facade_orientation)|`. The
///    absolute value keeps the coefficient non-negative for leeward wind;
///    cosine is periodic, so neither angle needs range reduction.
/// 3. `C_wdr = min(1, a * wind_speed * f)` - clamped above at 1, and
///    non-negative because every factor is.
/// 4. Intensity `q_wdr = (rainfall / 24 * C_wdr) / 3600` (L/h/m2 from
///    mm/day).
/// 5. `relative_exposure = q_wdr / 20.83`, then the threshold step.
pub fn classify_exposure(
    sample: &WeatherSample,
    exposure: ExposureLevel,
    facade_orientation_rad: f64,
) -> Result<WdrAssessment, ScorerError> {
    sample.validate()?;

    let a = exposure.coefficient();

    let angle_factor = (sample.wind_direction_rad - facade_orientation_rad)
        .cos()
        .abs();

    let wdr_coefficient = (a * sample.wind_speed_m_s * angle_factor).min(1.0);

    let wdr_intensity = (sample.rainfall_mm_per_day / 24.0 * wdr_coefficient) / 3600.0;

    let relative_exposure = wdr_intensity / REFERENCE_INTENSITY;

    Ok(WdrAssessment {
        class: RainClass::from_relative_exposure(relative_exposure),
        wdr_coefficient,
        wdr_intensity,
        relative_exposure,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_worked_scenario_high_exposure_windward() {
        // 100 mm/day, 5 m/s head-on wind, high exposure: the coefficient
        // saturates (0.35 * 5 = 1.75 -> 1) yet relative exposure stays tiny
        let sample = WeatherSample::new(100.0, 5.0, 0.0).unwrap();
        let assessment = classify_exposure(&sample, ExposureLevel::High, 0.0).unwrap();

        assert_relative_eq!(assessment.wdr_coefficient, 1.0, epsilon = 1e-12);
        assert_relative_eq!(assessment.wdr_intensity, 0.0011574, epsilon = 1e-7);
        assert_relative_eq!(assessment.relative_exposure, 5.556e-5, epsilon = 1e-8);
        assert_eq!(assessment.class, RainClass::D);
    }

    #[test]
    fn test_zero_rainfall_is_always_class_d() {
        for wind_speed in [0.0, 5.0, 50.0, 500.0] {
            let sample = WeatherSample::new(0.0, wind_speed, 1.2).unwrap();
            let assessment = classify_exposure(&sample, ExposureLevel::High, 0.0).unwrap();
            assert_eq!(assessment.class, RainClass::D);
            assert_eq!(assessment.relative_exposure, 0.0);
        }
    }

    #[test]
    fn test_threshold_boundaries_are_inclusive_below() {
        assert_eq!(RainClass::from_relative_exposure(0.8), RainClass::A);
        assert_eq!(RainClass::from_relative_exposure(0.4), RainClass::B);
        assert_eq!(RainClass::from_relative_exposure(0.2), RainClass::C);
        assert_eq!(RainClass::from_relative_exposure(0.19999), RainClass::D);
        assert_eq!(RainClass::from_relative_exposure(0.0), RainClass::D);
        assert_eq!(RainClass::from_relative_exposure(1.0e9), RainClass::A);
    }

    #[test]
    fn test_leeward_wind_never_goes_negative() {
        // Wind from behind the facade: |cos| flips the sign, so the
        // coefficient (and everything downstream) stays non-negative
        let sample = WeatherSample::new(100.0, 5.0, std::f64::consts::PI).unwrap();
        let assessment = classify_exposure(&sample, ExposureLevel::High, 0.0).unwrap();

        assert!(assessment.wdr_coefficient >= 0.0);
        assert_relative_eq!(assessment.wdr_coefficient, 1.0, epsilon = 1e-9);
    }

    #[test]
    fn test_oblique_wind_reduces_coefficient() {
        // 60 degrees off the facade normal: cos = 0.5
        let sample = WeatherSample::new(100.0, 5.0, std::f64::consts::FRAC_PI_3).unwrap();
        let assessment = classify_exposure(&sample, ExposureLevel::Medium, 0.0).unwrap();

        assert_relative_eq!(assessment.wdr_coefficient, 0.25 * 5.0 * 0.5, epsilon = 1e-9);
    }

    #[test]
    fn test_invalid_inputs_are_rejected_before_computation() {
        let sample = WeatherSample {
            rainfall_mm_per_day: -1.0,
            wind_speed_m_s: 5.0,
            wind_direction_rad: 0.0,
        };
        let err = classify_exposure(&sample, ExposureLevel::High, 0.0).unwrap_err();
        assert_eq!(err, ScorerError::NegativeRainfall(-1.0));

        let sample = WeatherSample {
            rainfall_mm_per_day: 1.0,
            wind_speed_m_s: -5.0,
            wind_direction_rad: 0.0,
        };
        let err = classify_exposure(&sample, ExposureLevel::High, 0.0).unwrap_err();
        assert_eq!(err, ScorerError::NegativeWindSpeed(-5.0));
    }

    #[test]
    fn test_satisfies_follows_protection_ordering() {
        assert!(RainClass::A.satisfies(RainClass::D));
        assert!(RainClass::A.satisfies(RainClass::A));
        assert!(RainClass::B.satisfies(RainClass::C));
        assert!(!RainClass::C.satisfies(RainClass::B));
        assert!(!RainClass::D.satisfies(RainClass::A));
    }

    #[test]
    fn test_assessment_serializes_for_json_consumers() {
        let sample = WeatherSample::new(100.0, 5.0, 0.0).unwrap();
        let assessment = classify_exposure(&sample, ExposureLevel::High, 0.0).unwrap();

        let json = serde_json::to_value(&assessment).unwrap();
        assert_eq!(json["class"], "D");
        assert!(json["relative_exposure"].is_f64());
        assert!(json["wdr_coefficient"].is_f64());
    }
}
