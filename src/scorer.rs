//! Site Scorer - coordinator for assessing facades at a site
//!
//! Owns the per-site configuration (exposure level, facade orientation) and
//! feeds weather samples through the classifier. Includes both sequential
//! and parallel (Rayon) batch implementations.
//!
//! The scorer is constructed explicitly and handed to whatever boundary
//! drives it - an HTTP handler, a console driver, a test harness. It holds
//! no external clients and no global state.

use rayon::prelude::*;
use tracing::debug;

use crate::classify::{classify_exposure, RainClass, WdrAssessment};
use crate::error::ScorerError;
use crate::exposure::ExposureLevel;
use crate::sample::WeatherSample;

/// Per-site scorer configuration
#[derive(Debug, Clone, Copy)]
pub struct SiteScorer {
    exposure: ExposureLevel,
    facade_orientation_rad: f64,
}

impl SiteScorer {
    /// Scorer for the given exposure level, facade orientation 0
    pub fn new(exposure: ExposureLevel) -> Self {
        Self {
            exposure,
            facade_orientation_rad: 0.0,
        }
    }

    /// Set the facade orientation (compass bearing, radians)
    pub fn with_facade_orientation(mut self, orientation_rad: f64) -> Self {
        self.facade_orientation_rad = orientation_rad;
        self
    }

    pub fn exposure(&self) -> ExposureLevel {
        self.exposure
    }

    pub fn facade_orientation_rad(&self) -> f64 {
        self.facade_orientation_rad
    }

    /// Assess a single weather sample
    pub fn assess(&self, sample: &WeatherSample) -> Result<WdrAssessment, ScorerError> {
        let assessment = classify_exposure(sample, self.exposure, self.facade_orientation_rad)?;

        debug!(
            rainfall_mm_per_day = sample.rainfall_mm_per_day,
            wind_speed_m_s = sample.wind_speed_m_s,
            wdr_coefficient = assessment.wdr_coefficient,
            wdr_intensity = assessment.wdr_intensity,
            relative_exposure = assessment.relative_exposure,
            class = assessment.class.letter(),
            "assessed weather sample"
        );

        Ok(assessment)
    }

    /// Assess a batch of samples sequentially.
    ///
    /// Fails on the first invalid sample with no partial output.
    pub fn assess_batch(
        &self,
        samples: &[WeatherSample],
    ) -> Result<Vec<WdrAssessment>, ScorerError> {
        samples.iter().map(|sample| self.assess(sample)).collect()
    }

    /// Assess a batch of samples in parallel with Rayon.
    ///
    /// Returns the same assessments as [`assess_batch`](Self::assess_batch)
    /// in the same order; the classifier is pure, so no synchronization is
    /// needed beyond the join.
    pub fn assess_batch_parallel(
        &self,
        samples: &[WeatherSample],
    ) -> Result<Vec<WdrAssessment>, ScorerError> {
        samples
            .par_iter()
            .map(|sample| self.assess(sample))
            .collect()
    }

    /// Most severe class across a batch (None for an empty batch).
    ///
    /// A louver sized for the governing class covers every sample in the
    /// batch, e.g. a year of daily weather.
    pub fn governing_class(
        &self,
        samples: &[WeatherSample],
    ) -> Result<Option<RainClass>, ScorerError> {
        let assessments = self.assess_batch(samples)?;
        Ok(assessments
            .iter()
            .map(|a| a.class)
            .max_by_key(|class| class.protection_rank()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_batch() -> Vec<WeatherSample> {
        (0..200)
            .map(|i| {
                WeatherSample::new(
                    f64::from(i % 40) * 0.5,
                    f64::from(i % 12) * 0.75,
                    f64::from(i) * 0.1,
                )
                .unwrap()
            })
            .collect()
    }

    #[test]
    fn test_parallel_batch_matches_sequential() {
        let scorer = SiteScorer::new(ExposureLevel::Medium).with_facade_orientation(0.8);
        let samples = sample_batch();

        let sequential = scorer.assess_batch(&samples).unwrap();
        let parallel = scorer.assess_batch_parallel(&samples).unwrap();

        assert_eq!(sequential.len(), parallel.len());
        for (seq, par) in sequential.iter().zip(&parallel) {
            assert_eq!(seq, par);
        }
    }

    #[test]
    fn test_batch_fails_on_first_invalid_sample() {
        let scorer = SiteScorer::new(ExposureLevel::Low);
        let mut samples = sample_batch();
        samples[7].rainfall_mm_per_day = -3.0;

        let err = scorer.assess_batch(&samples).unwrap_err();
        assert_eq!(err, ScorerError::NegativeRainfall(-3.0));
    }

    #[test]
    fn test_governing_class_takes_the_most_severe() {
        let scorer = SiteScorer::new(ExposureLevel::High);

        // Calm days plus one extreme outlier: the outlier governs
        let samples = vec![
            WeatherSample::new(2.0, 1.0, 0.0).unwrap(),
            WeatherSample::new(1_800_000.0, 10.0, 0.0).unwrap(),
            WeatherSample::new(0.0, 0.0, 0.0).unwrap(),
        ];

        let governing = scorer.governing_class(&samples).unwrap();
        assert_eq!(governing, Some(RainClass::A));

        assert_eq!(scorer.governing_class(&[]).unwrap(), None);
    }

    #[test]
    fn test_scorer_is_shareable_across_threads() {
        let scorer = SiteScorer::new(ExposureLevel::High);
        let sample = WeatherSample::new(100.0, 5.0, 0.0).unwrap();

        let handles: Vec<_> = (0..8)
            .map(|_| std::thread::spawn(move || scorer.assess(&sample).unwrap().class))
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), RainClass::D);
        }
    }
}
