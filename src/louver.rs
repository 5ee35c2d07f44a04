//! Louver Catalog & Recommendation
//!
//! Embedded catalog of louver models with performance ratings, plus the
//! selection logic that narrows the catalog to the top candidates for a
//! project. Airflow and water resistance are indicative figures on a 0-100
//! scale; cost factors are relative to the PL-1075 baseline.

use crate::classify::RainClass;
use serde::Serialize;

/// A louver model with its performance ratings
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Louver {
    pub model: &'static str,

    /// Airflow rating, 0-100 (higher passes more air)
    pub airflow_rating: u8,

    /// Water penetration resistance, 0-100
    pub water_resistance: u8,

    /// Cost relative to the baseline model
    pub cost_factor: f64,

    /// Blade profile depth (mm)
    pub profile_depth_mm: u16,

    /// Rain defense class achieved in standard testing
    pub rain_defense_class: RainClass,
}

/// Embedded louver catalog
pub static LOUVER_CATALOG: &[Louver] = &[
    Louver { model: "PL-1075", airflow_rating: 85, water_resistance: 65, cost_factor: 1.0, profile_depth_mm: 75, rain_defense_class: RainClass::C },
    Louver { model: "PL-2075", airflow_rating: 70, water_resistance: 75, cost_factor: 1.2, profile_depth_mm: 75, rain_defense_class: RainClass::B },
    Louver { model: "PL-2170", airflow_rating: 65, water_resistance: 80, cost_factor: 1.3, profile_depth_mm: 70, rain_defense_class: RainClass::B },
    Louver { model: "PL-2250", airflow_rating: 60, water_resistance: 85, cost_factor: 1.5, profile_depth_mm: 50, rain_defense_class: RainClass::A },
    Louver { model: "PL-2250V", airflow_rating: 75, water_resistance: 80, cost_factor: 1.8, profile_depth_mm: 50, rain_defense_class: RainClass::A },
    Louver { model: "PL-3075", airflow_rating: 55, water_resistance: 90, cost_factor: 2.0, profile_depth_mm: 75, rain_defense_class: RainClass::A },
    Louver { model: "PL-2150V", airflow_rating: 70, water_resistance: 75, cost_factor: 1.7, profile_depth_mm: 50, rain_defense_class: RainClass::B },
    Louver { model: "AC-150", airflow_rating: 90, water_resistance: 60, cost_factor: 0.9, profile_depth_mm: 50, rain_defense_class: RainClass::D },
    Louver { model: "AC-300", airflow_rating: 80, water_resistance: 70, cost_factor: 1.1, profile_depth_mm: 75, rain_defense_class: RainClass::C },
];

/// What the opening is primarily for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimaryPurpose {
    FreshAirIntake,
    NaturalVentilation,
    WeatherProtection,
}

/// Which performance axis the project weighs heaviest
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PerformancePriority {
    MaximumAirflow,
    HighWeatherProtection,
    CostEffective,
    Balanced,
}

/// Selection inputs for a recommendation
#[derive(Debug, Clone, Copy)]
pub struct SelectionCriteria {
    pub purpose: PrimaryPurpose,
    pub priority: PerformancePriority,

    /// Site is near coast or open water
    pub coastal: bool,

    /// Minimum rain defense class the louver must provide, typically the
    /// class the exposure classifier computed for the facade. Unlike the
    /// preference filters this is a hard requirement and survives the
    /// empty-result fallback.
    pub required_class: Option<RainClass>,
}

const MAX_RECOMMENDATIONS: usize = 3;

/// Minimum airflow rating when the opening exists to move air
const AIRFLOW_FLOOR: u8 = 70;

/// Minimum water resistance for weather-protection duty or coastal sites
const WATER_RESISTANCE_FLOOR: u8 = 75;

/// Minimum water resistance when weather protection is the top priority
const WATER_RESISTANCE_PRIORITY_FLOOR: u8 = 80;

/// Maximum cost factor considered cost-effective
const COST_CEILING: f64 = 1.3;

/// Recommend up to three louvers for the given criteria.
///
/// Preference filters narrow the catalog, the priority ranks what is left,
/// and the top three are returned. When the preference filters eliminate
/// every model, ranking falls back to the whole catalog (still gated by
/// `required_class`) so the caller always gets candidates to review.
pub fn recommend(criteria: &SelectionCriteria) -> Vec<&'static Louver> {
    let eligible: Vec<&Louver> = LOUVER_CATALOG
        .iter()
        .filter(|louver| meets_required_class(louver, criteria))
        .collect();

    let mut filtered: Vec<&Louver> = eligible
        .iter()
        .copied()
        .filter(|louver| meets_preferences(louver, criteria))
        .collect();

    if filtered.is_empty() {
        filtered = eligible;
    }

    rank(&mut filtered, criteria.priority);
    filtered.truncate(MAX_RECOMMENDATIONS);
    filtered
}

fn meets_required_class(louver: &Louver, criteria: &SelectionCriteria) -> bool {
    match criteria.required_class {
        Some(required) => louver.rain_defense_class.satisfies(required),
        None => true,
    }
}

fn meets_preferences(louver: &Louver, criteria: &SelectionCriteria) -> bool {
    let needs_airflow = matches!(
        criteria.purpose,
        PrimaryPurpose::FreshAirIntake | PrimaryPurpose::NaturalVentilation
    );
    if needs_airflow && louver.airflow_rating < AIRFLOW_FLOOR {
        return false;
    }

    let needs_water_resistance =
        criteria.purpose == PrimaryPurpose::WeatherProtection || criteria.coastal;
    if needs_water_resistance && louver.water_resistance < WATER_RESISTANCE_FLOOR {
        return false;
    }

    match criteria.priority {
        PerformancePriority::CostEffective if louver.cost_factor > COST_CEILING => false,
        PerformancePriority::HighWeatherProtection
            if louver.water_resistance < WATER_RESISTANCE_PRIORITY_FLOOR =>
        {
            false
        }
        _ => true,
    }
}

/// Balanced ranking score: airflow and water resistance weighted equally,
/// cost discounted
fn balanced_score(louver: &Louver) -> f64 {
    f64::from(louver.airflow_rating) * 0.4
        + f64::from(louver.water_resistance) * 0.4
        + (100.0 - louver.cost_factor * 50.0) * 0.2
}

fn rank(louvers: &mut [&'static Louver], priority: PerformancePriority) {
    match priority {
        PerformancePriority::MaximumAirflow => {
            louvers.sort_by(|a, b| b.airflow_rating.cmp(&a.airflow_rating));
        }
        PerformancePriority::HighWeatherProtection => {
            louvers.sort_by(|a, b| b.water_resistance.cmp(&a.water_resistance));
        }
        PerformancePriority::CostEffective => {
            louvers.sort_by(|a, b| a.cost_factor.total_cmp(&b.cost_factor));
        }
        PerformancePriority::Balanced => {
            louvers.sort_by(|a, b| balanced_score(b).total_cmp(&balanced_score(a)));
        }
    }
}
