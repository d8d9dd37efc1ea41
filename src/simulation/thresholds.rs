//! Quality cutoffs for reservation and resonation behavior.

use crate::base::IndividualType;
use crate::simulation::Variables;
use crate::stats::quantile;
use serde::{Deserialize, Serialize};

/// The named quality cutoffs recomputed once per generation.
///
/// Every cutoff is a quantile of the seeding quality distribution
/// `Normal(mean_quality, sd_quality)`, so the expected fraction of freshly
/// drawn individuals above a cutoff equals the configured target ratio.
/// Cutoffs are a pure function of the configuration, independent of the
/// current population; adjustment rules may overwrite them for the
/// remainder of a generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Thresholds {
    pub reservation_cutoff_cooperator1: f64,
    pub reservation_cutoff_cooperator2: f64,
    pub resonation_cutoff_resonation: f64,
    pub resonation_cutoff_cooperator1_without_reservation: f64,
    pub resonation_cutoff_cooperator2_without_reservation: f64,
    pub resonation_cutoff_cooperator1_with_reservation: f64,
    pub resonation_cutoff_cooperator2_with_reservation: f64,
}

impl Thresholds {
    /// Derive all cutoffs from the configuration.
    pub fn from_variables(v: &Variables) -> Self {
        let q = |p: f64| quantile(v.mean_quality, v.sd_quality, p);
        Self {
            reservation_cutoff_cooperator1: q(1.0 - v.reservation_ratio_cooperator1),
            reservation_cutoff_cooperator2: q(1.0 - v.reservation_ratio_cooperator2),
            resonation_cutoff_resonation: q(1.0 - v.resonation_ratio),
            resonation_cutoff_cooperator1_without_reservation: q(1.0 - v.resonation_ratio),
            resonation_cutoff_cooperator2_without_reservation: q(1.0 - v.resonation_ratio),
            resonation_cutoff_cooperator1_with_reservation: q(
                1.0 - v.reservation_ratio_cooperator1 * v.resonation_ratio,
            ),
            resonation_cutoff_cooperator2_with_reservation: q(
                1.0 - v.reservation_ratio_cooperator2 * v.resonation_ratio,
            ),
        }
    }

    /// Classify an individual's phenotypic quality into its strategy
    /// flags: `(reserving, resonating)`.
    ///
    /// Defectors never reserve or resonate; a cooperator's resonation
    /// cutoff depends on whether it holds a reservation.
    pub fn classify(&self, individual_type: IndividualType, quality: f64) -> (bool, bool) {
        match individual_type {
            IndividualType::Cooperator1 => {
                let reserving = quality >= self.reservation_cutoff_cooperator1;
                let cutoff = if reserving {
                    self.resonation_cutoff_cooperator1_with_reservation
                } else {
                    self.resonation_cutoff_cooperator1_without_reservation
                };
                (reserving, quality >= cutoff)
            }
            IndividualType::Cooperator2 => {
                let reserving = quality >= self.reservation_cutoff_cooperator2;
                let cutoff = if reserving {
                    self.resonation_cutoff_cooperator2_with_reservation
                } else {
                    self.resonation_cutoff_cooperator2_without_reservation
                };
                (reserving, quality >= cutoff)
            }
            IndividualType::Resonation => (false, quality >= self.resonation_cutoff_resonation),
            IndividualType::Defector => (false, false),
        }
    }
}
