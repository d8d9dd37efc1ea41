//! Individuals and their behavioral types.
//!
//! An [`Individual`] is a single organism moving through one generation of
//! the pipeline: it is created with quality values drawn at seeding or
//! reproduction time, may be marked perished by a selection phase, and has
//! its fecundity fields filled in by the fecundity phases.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The four fixed behavioral roles partitioning a population.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum IndividualType {
    Cooperator1,
    Cooperator2,
    Resonation,
    Defector,
}

impl IndividualType {
    /// All types in their fixed seeding/reporting order.
    pub const ALL: [IndividualType; 4] = [
        IndividualType::Cooperator1,
        IndividualType::Cooperator2,
        IndividualType::Resonation,
        IndividualType::Defector,
    ];

    /// Dense index for per-type arrays.
    pub fn index(self) -> usize {
        match self {
            IndividualType::Cooperator1 => 0,
            IndividualType::Cooperator2 => 1,
            IndividualType::Resonation => 2,
            IndividualType::Defector => 3,
        }
    }

    /// Short code used in log tables and individual names.
    pub fn code(self) -> &'static str {
        match self {
            IndividualType::Cooperator1 => "C1",
            IndividualType::Cooperator2 => "C2",
            IndividualType::Resonation => "RS",
            IndividualType::Defector => "DF",
        }
    }
}

impl fmt::Display for IndividualType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            IndividualType::Cooperator1 => "Cooperator1",
            IndividualType::Cooperator2 => "Cooperator2",
            IndividualType::Resonation => "Resonation",
            IndividualType::Defector => "Defector",
        };
        write!(f, "{name}")
    }
}

/// Run-wide unique key for an individual.
///
/// Identities are assigned per type and never reset, so the (type, id) pair
/// identifies an individual across the whole run even after the live
/// population has been replaced by the next generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IndividualKey {
    pub individual_type: IndividualType,
    pub id: u32,
}

impl fmt::Display for IndividualKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.individual_type.code(), self.id)
    }
}

/// A single organism.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Individual {
    id: u32,
    individual_type: IndividualType,
    genetic_quality: f64,
    phenotypic_quality: f64,
    fecundity: f64,
    adjusted_fecundity: f64,
    s: f64,
    offspring_count: u32,
    perished: bool,
    reserving: bool,
    resonating: bool,
}

impl Individual {
    /// Create a new individual.
    ///
    /// Fecundity and the strategy score `S` both start at the phenotypic
    /// quality; adjustment-rule variants may overwrite either before
    /// selection and reproduction read them. Quality values are clamped at
    /// zero.
    pub fn new(
        id: u32,
        individual_type: IndividualType,
        genetic_quality: f64,
        phenotypic_quality: f64,
    ) -> Self {
        let genetic_quality = genetic_quality.max(0.0);
        let phenotypic_quality = phenotypic_quality.max(0.0);
        Self {
            id,
            individual_type,
            genetic_quality,
            phenotypic_quality,
            fecundity: phenotypic_quality,
            adjusted_fecundity: 0.0,
            s: phenotypic_quality,
            offspring_count: 0,
            perished: false,
            reserving: false,
            resonating: false,
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn individual_type(&self) -> IndividualType {
        self.individual_type
    }

    /// Run-wide unique key for this individual.
    pub fn key(&self) -> IndividualKey {
        IndividualKey {
            individual_type: self.individual_type,
            id: self.id,
        }
    }

    pub fn genetic_quality(&self) -> f64 {
        self.genetic_quality
    }

    pub fn phenotypic_quality(&self) -> f64 {
        self.phenotypic_quality
    }

    pub fn fecundity(&self) -> f64 {
        self.fecundity
    }

    pub fn adjusted_fecundity(&self) -> f64 {
        self.adjusted_fecundity
    }

    /// Strategy score ranking individuals in the second perish phase.
    pub fn s(&self) -> f64 {
        self.s
    }

    pub fn offspring_count(&self) -> u32 {
        self.offspring_count
    }

    pub fn is_alive(&self) -> bool {
        !self.perished
    }

    pub fn is_perished(&self) -> bool {
        self.perished
    }

    /// Whether this individual holds a reservation (cooperators only).
    pub fn is_reserving(&self) -> bool {
        self.reserving
    }

    /// Whether this individual resonates.
    pub fn is_resonating(&self) -> bool {
        self.resonating
    }

    /// Overwrite the fecundity, clamped at zero.
    pub fn set_fecundity(&mut self, fecundity: f64) {
        self.fecundity = fecundity.max(0.0);
    }

    /// Overwrite the strategy score.
    pub fn set_s(&mut self, s: f64) {
        self.s = s;
    }

    /// Overwrite the phenotypic quality, clamped at zero.
    pub fn set_phenotypic_quality(&mut self, quality: f64) {
        self.phenotypic_quality = quality.max(0.0);
    }

    pub(crate) fn set_adjusted_fecundity(&mut self, adjusted: f64) {
        self.adjusted_fecundity = adjusted;
    }

    pub(crate) fn set_strategy_flags(&mut self, reserving: bool, resonating: bool) {
        self.reserving = reserving;
        self.resonating = resonating;
    }

    /// Mark this individual perished. Perishing is permanent; only the
    /// engine's selection phases may call this.
    pub(crate) fn perish(&mut self) {
        self.perished = true;
    }

    /// Produce an offspring of the same type with the given identity and
    /// quality values, incrementing this parent's offspring count.
    pub fn reproduce(
        &mut self,
        id: u32,
        genetic_quality: f64,
        phenotypic_quality: f64,
    ) -> Individual {
        self.offspring_count += 1;
        Individual::new(id, self.individual_type, genetic_quality, phenotypic_quality)
    }
}

impl fmt::Display for Individual {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.individual_type.code(), self.id)
    }
}
