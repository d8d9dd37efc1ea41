//! Pluggable adjustment rules biasing the pipeline for experimental
//! variants.
//!
//! The engine invokes one hook before each perish draw and one at the start
//! of the fecundity phase. Hooks may reshape thresholds, the upcoming perish
//! draw, or per-individual fecundity/quality/score values; selection itself
//! and individual liveness remain the engine's responsibility (the contexts
//! expose no way to mark an individual perished).

use crate::base::Individual;
use crate::simulation::{Thresholds, Variables};

/// Context handed to the perish hooks.
///
/// `perish_mean` and `perish_sd` are the working parameters for the
/// upcoming perish-count draw, reset from the configuration at the start of
/// every generation; writes here bias only the current generation.
pub struct PerishContext<'a> {
    pub variables: &'a Variables,
    pub thresholds: &'a mut Thresholds,
    pub perish_mean: &'a mut f64,
    pub perish_sd: &'a mut f64,
    /// The current generation's individuals, read-only.
    pub individuals: &'a [Individual],
    /// Step-1 survivor indices; empty during the step-1 hook.
    pub survivors: &'a [usize],
    pub generations_passed: usize,
}

/// Context handed to the fecundity hook.
///
/// Individuals are mutable so variants can reshape fecundity, quality, or
/// the strategy score before group aggregates are recomputed.
pub struct FecundityContext<'a> {
    pub variables: &'a Variables,
    pub thresholds: &'a Thresholds,
    pub individuals: &'a mut [Individual],
    /// Step-2 survivor indices.
    pub survivors: &'a [usize],
    pub generations_passed: usize,
}

/// Hook points for experiment-specific biasing of the pipeline.
///
/// Every hook defaults to a no-op, so any subset may be overridden and the
/// default implementation is behaviorally identical to running without
/// adjustment rules at all.
pub trait AdjustmentRules {
    /// Invoked at the start of the first perish phase, before the perish
    /// count is drawn.
    fn adjust_perish1(&mut self, _ctx: &mut PerishContext<'_>) {}

    /// Invoked at the start of the second perish phase, before the perish
    /// count is drawn. Not invoked when step 1 already eliminated the
    /// whole population.
    fn adjust_perish2(&mut self, _ctx: &mut PerishContext<'_>) {}

    /// Invoked at the start of the fecundity phase, before group
    /// aggregates are recomputed.
    fn adjust_fecundity(&mut self, _ctx: &mut FecundityContext<'_>) {}
}

/// The default "no bias" rules.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoAdjustment;

impl AdjustmentRules for NoAdjustment {}
