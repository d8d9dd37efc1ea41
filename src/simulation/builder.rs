//! Builder for run configurations.

use crate::base::ConfigError;
use crate::simulation::Variables;

/// Fluent construction of [`Variables`] with sensible defaults.
///
/// Only the population composition is required; everything else defaults to
/// a neutral mid-range setting.
///
/// # Examples
///
/// ```
/// use coopevo::VariablesBuilder;
///
/// let variables = VariablesBuilder::new()
///     .group_counts(10, 10, 10, 10)
///     .perish_step1(3.0, 1.0)
///     .perish_step2(2.0, 1.0)
///     .fecundity_weights(0.5, 1.0)
///     .seed(42)
///     .build()
///     .unwrap();
///
/// assert_eq!(variables.population_size, 40);
/// ```
#[derive(Debug, Clone)]
pub struct VariablesBuilder {
    counts: Option<(usize, usize, usize, usize)>,
    mean_quality: f64,
    sd_quality: f64,
    sd_pheno: f64,
    mean_perish_step1: f64,
    sd_perish_step1: f64,
    mean_perish_step2: f64,
    sd_perish_step2: f64,
    mixing_ratio: f64,
    scale_factor: f64,
    reservation_ratio_cooperator1: f64,
    reservation_ratio_cooperator2: f64,
    resonation_ratio: f64,
    max_generations: usize,
    seed: Option<u64>,
}

impl Default for VariablesBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl VariablesBuilder {
    pub fn new() -> Self {
        Self {
            counts: None,
            mean_quality: 10.0,
            sd_quality: 1.0,
            sd_pheno: 1.0,
            mean_perish_step1: 0.0,
            sd_perish_step1: 1.0,
            mean_perish_step2: 0.0,
            sd_perish_step2: 1.0,
            mixing_ratio: 0.5,
            scale_factor: 1.0,
            reservation_ratio_cooperator1: 0.5,
            reservation_ratio_cooperator2: 0.5,
            resonation_ratio: 0.5,
            max_generations: 1000,
            seed: None,
        }
    }

    /// Set the seeded size of each behavioral group (required). The
    /// population size is their sum.
    pub fn group_counts(
        mut self,
        cooperator1: usize,
        cooperator2: usize,
        resonation: usize,
        defector: usize,
    ) -> Self {
        self.counts = Some((cooperator1, cooperator2, resonation, defector));
        self
    }

    /// Set the seeding quality distribution (mean and standard deviations
    /// for genetic and phenotypic draws).
    pub fn quality(mut self, mean: f64, sd_quality: f64, sd_pheno: f64) -> Self {
        self.mean_quality = mean;
        self.sd_quality = sd_quality;
        self.sd_pheno = sd_pheno;
        self
    }

    /// Set the step-1 perish-count distribution.
    pub fn perish_step1(mut self, mean: f64, sd: f64) -> Self {
        self.mean_perish_step1 = mean;
        self.sd_perish_step1 = sd;
        self
    }

    /// Set the step-2 perish-count distribution.
    pub fn perish_step2(mut self, mean: f64, sd: f64) -> Self {
        self.mean_perish_step2 = mean;
        self.sd_perish_step2 = sd;
        self
    }

    /// Set the fecundity-adjustment weights (mixing ratio and scale
    /// factor).
    pub fn fecundity_weights(mut self, mixing_ratio: f64, scale_factor: f64) -> Self {
        self.mixing_ratio = mixing_ratio;
        self.scale_factor = scale_factor;
        self
    }

    /// Set the reservation target ratios for the two cooperator classes.
    pub fn reservation_ratios(mut self, cooperator1: f64, cooperator2: f64) -> Self {
        self.reservation_ratio_cooperator1 = cooperator1;
        self.reservation_ratio_cooperator2 = cooperator2;
        self
    }

    /// Set the resonation target ratio.
    pub fn resonation_ratio(mut self, ratio: f64) -> Self {
        self.resonation_ratio = ratio;
        self
    }

    /// Set the generation cap.
    pub fn max_generations(mut self, cap: usize) -> Self {
        self.max_generations = cap;
        self
    }

    /// Set the RNG seed for a reproducible run.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Build and validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ZeroPopulation`] when `group_counts` was
    /// never set (or sums to zero), and any other variant per
    /// [`Variables::validate`].
    pub fn build(self) -> Result<Variables, ConfigError> {
        let (c1, c2, rs, df) = self.counts.unwrap_or((0, 0, 0, 0));
        let variables = Variables {
            population_size: c1 + c2 + rs + df,
            cooperator1_count: c1,
            cooperator2_count: c2,
            resonation_count: rs,
            defector_count: df,
            mean_quality: self.mean_quality,
            sd_quality: self.sd_quality,
            sd_pheno: self.sd_pheno,
            mean_perish_step1: self.mean_perish_step1,
            sd_perish_step1: self.sd_perish_step1,
            mean_perish_step2: self.mean_perish_step2,
            sd_perish_step2: self.sd_perish_step2,
            mixing_ratio: self.mixing_ratio,
            scale_factor: self.scale_factor,
            reservation_ratio_cooperator1: self.reservation_ratio_cooperator1,
            reservation_ratio_cooperator2: self.reservation_ratio_cooperator2,
            resonation_ratio: self.resonation_ratio,
            max_generations: self.max_generations,
            seed: self.seed,
        };
        variables.validate()?;
        Ok(variables)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let v = VariablesBuilder::new()
            .group_counts(10, 10, 10, 10)
            .build()
            .unwrap();
        assert_eq!(v.population_size, 40);
        assert_eq!(v.mean_quality, 10.0);
        assert_eq!(v.mixing_ratio, 0.5);
        assert_eq!(v.scale_factor, 1.0);
        assert_eq!(v.max_generations, 1000);
        assert_eq!(v.seed, None);
    }

    #[test]
    fn test_missing_counts_is_zero_population() {
        assert_eq!(
            VariablesBuilder::new().build(),
            Err(ConfigError::ZeroPopulation)
        );
    }

    #[test]
    fn test_all_setters_land() {
        let v = VariablesBuilder::new()
            .group_counts(1, 2, 3, 4)
            .quality(20.0, 2.0, 3.0)
            .perish_step1(4.0, 0.5)
            .perish_step2(1.0, 0.25)
            .fecundity_weights(0.3, 2.0)
            .reservation_ratios(0.2, 0.8)
            .resonation_ratio(0.4)
            .max_generations(50)
            .seed(7)
            .build()
            .unwrap();

        assert_eq!(v.population_size, 10);
        assert_eq!(v.mean_quality, 20.0);
        assert_eq!(v.sd_pheno, 3.0);
        assert_eq!(v.mean_perish_step1, 4.0);
        assert_eq!(v.sd_perish_step2, 0.25);
        assert_eq!(v.mixing_ratio, 0.3);
        assert_eq!(v.reservation_ratio_cooperator2, 0.8);
        assert_eq!(v.resonation_ratio, 0.4);
        assert_eq!(v.max_generations, 50);
        assert_eq!(v.seed, Some(7));
    }

    #[test]
    fn test_invalid_ratio_surfaces_from_build() {
        let result = VariablesBuilder::new()
            .group_counts(5, 5, 5, 5)
            .fecundity_weights(2.0, 1.0)
            .build();
        assert!(matches!(result, Err(ConfigError::RatioOutOfRange { .. })));
    }
}
