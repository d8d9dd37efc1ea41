//! Behavioral groups and their fecundity aggregates.

use crate::base::individual::{Individual, IndividualType};

/// A named partition of the population sharing one behavioral role.
///
/// Membership is derived from each individual's type and rebuilt once per
/// generation; members are stored as indices into the engine's individual
/// arena rather than as shared references.
#[derive(Debug, Clone)]
pub struct Group {
    group_type: IndividualType,
    members: Vec<usize>,
    total_fecundity: f64,
    lost_fecundity: f64,
}

impl Group {
    /// Create an empty group for the given behavioral type.
    pub fn new(group_type: IndividualType) -> Self {
        Self {
            group_type,
            members: Vec::new(),
            total_fecundity: 0.0,
            lost_fecundity: 0.0,
        }
    }

    pub fn group_type(&self) -> IndividualType {
        self.group_type
    }

    /// Member indices into the engine's individual arena.
    pub fn members(&self) -> &[usize] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Total fecundity over live members, as of the last recomputation.
    pub fn total_fecundity(&self) -> f64 {
        self.total_fecundity
    }

    /// Fecundity forfeited by perished members, as of the last
    /// recomputation.
    pub fn lost_fecundity(&self) -> f64 {
        self.lost_fecundity
    }

    /// Rebuild membership from the arena, clearing the aggregates.
    pub(crate) fn rebuild(&mut self, individuals: &[Individual]) {
        self.members.clear();
        self.members.extend(
            individuals
                .iter()
                .enumerate()
                .filter(|(_, ind)| ind.individual_type() == self.group_type)
                .map(|(i, _)| i),
        );
        self.total_fecundity = 0.0;
        self.lost_fecundity = 0.0;
    }

    /// Recompute the total fecundity of live members.
    pub(crate) fn calculate_total_fecundity(&mut self, individuals: &[Individual]) {
        self.total_fecundity = self
            .members
            .iter()
            .map(|&i| &individuals[i])
            .filter(|ind| ind.is_alive())
            .map(|ind| ind.fecundity())
            .sum();
    }

    /// Recompute the fecundity lost to perished members.
    pub(crate) fn calculate_lost_fecundity(&mut self, individuals: &[Individual]) {
        self.lost_fecundity = self
            .members
            .iter()
            .map(|&i| &individuals[i])
            .filter(|ind| ind.is_perished())
            .map(|ind| ind.fecundity())
            .sum();
    }
}
