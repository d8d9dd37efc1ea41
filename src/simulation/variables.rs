//! Run configuration.

use crate::base::ConfigError;
use serde::{Deserialize, Serialize};

/// Configuration variables for one iteration.
///
/// Supplied once at engine construction and immutable thereafter. Fields
/// are public so configurations can be built literally or deserialized;
/// [`Variables::validate`] (called by the engine constructor) checks the
/// cross-field invariants. [`VariablesBuilder`](crate::VariablesBuilder)
/// provides defaults for everything except the population composition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Variables {
    /// Number of individuals in every generation.
    pub population_size: usize,
    /// Individuals seeded into the cooperator-1 group.
    pub cooperator1_count: usize,
    /// Individuals seeded into the cooperator-2 group.
    pub cooperator2_count: usize,
    /// Individuals seeded into the resonation group.
    pub resonation_count: usize,
    /// Individuals seeded into the defector group.
    pub defector_count: usize,

    /// Mean of the seeding genetic-quality distribution; also the constant
    /// multiplier in the reproduction target mean.
    pub mean_quality: f64,
    /// Standard deviation for genetic-quality draws.
    pub sd_quality: f64,
    /// Standard deviation for phenotypic-quality draws around the genetic
    /// quality.
    pub sd_pheno: f64,

    /// Mean of the step-1 perish-count distribution.
    pub mean_perish_step1: f64,
    /// Standard deviation of the step-1 perish-count distribution.
    pub sd_perish_step1: f64,
    /// Mean of the step-2 perish-count distribution.
    pub mean_perish_step2: f64,
    /// Standard deviation of the step-2 perish-count distribution.
    pub sd_perish_step2: f64,

    /// Weight of the within-group redistribution term, in `[0, 1]`; the
    /// population-wide term gets the complement.
    pub mixing_ratio: f64,
    /// Scale factor applied to both redistribution terms.
    pub scale_factor: f64,

    /// Target fraction of cooperator-1 individuals holding a reservation.
    pub reservation_ratio_cooperator1: f64,
    /// Target fraction of cooperator-2 individuals holding a reservation.
    pub reservation_ratio_cooperator2: f64,
    /// Target fraction of individuals entering resonation.
    pub resonation_ratio: f64,

    /// Generation cap; the run ends in a tie when it is reached without
    /// fixation.
    pub max_generations: usize,
    /// RNG seed; `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Variables {
    /// Check the cross-field invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.population_size == 0 {
            return Err(ConfigError::ZeroPopulation);
        }
        let sum = self.cooperator1_count
            + self.cooperator2_count
            + self.resonation_count
            + self.defector_count;
        if sum != self.population_size {
            return Err(ConfigError::GroupCountMismatch {
                sum,
                expected: self.population_size,
            });
        }
        if self.max_generations == 0 {
            return Err(ConfigError::ZeroGenerationCap);
        }

        for (name, value) in [
            ("mean_quality", self.mean_quality),
            ("sd_quality", self.sd_quality),
            ("sd_pheno", self.sd_pheno),
            ("mean_perish_step1", self.mean_perish_step1),
            ("sd_perish_step1", self.sd_perish_step1),
            ("mean_perish_step2", self.mean_perish_step2),
            ("sd_perish_step2", self.sd_perish_step2),
            ("scale_factor", self.scale_factor),
        ] {
            if !(value >= 0.0) {
                return Err(ConfigError::NegativeParameter { name, value });
            }
        }

        for (name, value) in [
            ("mixing_ratio", self.mixing_ratio),
            (
                "reservation_ratio_cooperator1",
                self.reservation_ratio_cooperator1,
            ),
            (
                "reservation_ratio_cooperator2",
                self.reservation_ratio_cooperator2,
            ),
            ("resonation_ratio", self.resonation_ratio),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::RatioOutOfRange { name, value });
            }
        }

        Ok(())
    }
}
