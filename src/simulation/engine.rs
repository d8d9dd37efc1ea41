//! The single-iteration engine.
//!
//! [`Iteration`] owns one population and pushes it through the fixed
//! per-generation pipeline: reset, threshold computation, two perish
//! phases, fecundity and adjusted fecundity, weighted reproduction, and
//! heritability estimation. Phases run strictly in sequence; calling one
//! out of order is a contract violation and panics. All randomness flows
//! through one engine-owned RNG so a fixed seed fully determines a run.

use crate::base::{ConfigError, Group, Individual, IndividualType};
use crate::evolution::{
    estimate, AdjustmentRules, FecundityContext, HeritabilitySummary, HistoryEntry, NoAdjustment,
    PerishContext, TraitLedger, TraitRecord,
};
use crate::simulation::logging::Table;
use crate::simulation::{Thresholds, Variables};
use crate::stats::{gaussian_int_in_range, gaussian_non_negative};
use log::debug;
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of an iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Winner {
    /// The run is still going.
    Undecided,
    Cooperator1,
    Cooperator2,
    Resonation,
    Defector,
    /// The population collapsed to zero individuals.
    Extinction,
    /// The generation cap was reached without fixation.
    Tie,
}

impl Winner {
    fn from_type(individual_type: IndividualType) -> Self {
        match individual_type {
            IndividualType::Cooperator1 => Winner::Cooperator1,
            IndividualType::Cooperator2 => Winner::Cooperator2,
            IndividualType::Resonation => Winner::Resonation,
            IndividualType::Defector => Winner::Defector,
        }
    }
}

impl fmt::Display for Winner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Winner::Undecided => "Undecided",
            Winner::Cooperator1 => "Cooperator1",
            Winner::Cooperator2 => "Cooperator2",
            Winner::Resonation => "Resonation",
            Winner::Defector => "Defector",
            Winner::Extinction => "Extinction",
            Winner::Tie => "Tie",
        };
        write!(f, "{name}")
    }
}

/// Pipeline position, used to enforce phase ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Initialized,
    Seeded,
    Ready,
    Thresholded,
    Perished1,
    Perished2,
    Fecundity,
    AdjustedFecundity,
    Reproduced,
    HeritabilityDone,
    Terminal,
}

/// One iteration of the generational simulation.
///
/// Generic over the adjustment-rules collaborator; the default
/// [`NoAdjustment`] runs the unbiased baseline pipeline.
pub struct Iteration<A: AdjustmentRules = NoAdjustment> {
    variables: Variables,
    rules: A,
    logging_enabled: bool,
    rng: Xoshiro256PlusPlus,
    phase: Phase,

    thresholds: Thresholds,
    individuals: Vec<Individual>,
    offspring: Vec<Individual>,
    groups: [Group; 4],
    next_id: [u32; 4],

    // Working perish-draw parameters, reset from the configuration each
    // generation; perish hooks may bias them for the current generation.
    step1_mean: f64,
    step1_sd: f64,
    step2_mean: f64,
    step2_sd: f64,

    step1_perish_count: usize,
    step2_perish_count: usize,
    step1_survivors: Vec<usize>,
    step1_rejects: Vec<usize>,
    step2_survivors: Vec<usize>,
    step2_rejects: Vec<usize>,

    history: Vec<HistoryEntry>,
    ledger: TraitLedger,
    heritability: Option<HeritabilitySummary>,
    winner: Winner,
    generations_passed: usize,
    generation_history: [Vec<usize>; 4],
}

impl Iteration<NoAdjustment> {
    /// Create an engine running the unbiased baseline pipeline.
    pub fn new(variables: Variables, logging_enabled: bool) -> Result<Self, ConfigError> {
        Self::with_rules(variables, NoAdjustment, logging_enabled)
    }
}

impl<A: AdjustmentRules> Iteration<A> {
    /// Create an engine with an injected adjustment-rules collaborator.
    ///
    /// Validates the configuration and resets all per-run state;
    /// construction is the single initialization point.
    pub fn with_rules(
        variables: Variables,
        rules: A,
        logging_enabled: bool,
    ) -> Result<Self, ConfigError> {
        variables.validate()?;

        let rng = match variables.seed {
            Some(seed) => Xoshiro256PlusPlus::seed_from_u64(seed),
            None => Xoshiro256PlusPlus::from_seed(rand::rng().random()),
        };
        let thresholds = Thresholds::from_variables(&variables);
        let step1_mean = variables.mean_perish_step1;
        let step1_sd = variables.sd_perish_step1;
        let step2_mean = variables.mean_perish_step2;
        let step2_sd = variables.sd_perish_step2;

        Ok(Self {
            rules,
            logging_enabled,
            rng,
            phase: Phase::Initialized,
            thresholds,
            individuals: Vec::with_capacity(variables.population_size),
            offspring: Vec::new(),
            groups: IndividualType::ALL.map(Group::new),
            next_id: [1; 4],
            step1_mean,
            step1_sd,
            step2_mean,
            step2_sd,
            step1_perish_count: 0,
            step2_perish_count: 0,
            step1_survivors: Vec::new(),
            step1_rejects: Vec::new(),
            step2_survivors: Vec::new(),
            step2_rejects: Vec::new(),
            history: Vec::new(),
            ledger: TraitLedger::new(),
            heritability: None,
            winner: Winner::Undecided,
            generations_passed: 0,
            generation_history: std::array::from_fn(|_| Vec::new()),
            variables,
        })
    }

    // ----- phase ordering -------------------------------------------------

    fn expect_phase(&self, allowed: &[Phase], operation: &str) {
        if !allowed.contains(&self.phase) {
            panic!(
                "{operation} called out of order in phase {:?} (allowed from {allowed:?})",
                self.phase
            );
        }
    }

    // ----- pipeline phases ------------------------------------------------

    /// Seed the initial population and partition it into the four groups.
    ///
    /// # Panics
    ///
    /// Panics unless called exactly once, before the first generation.
    pub fn create_initial_population(&mut self) {
        self.expect_phase(&[Phase::Initialized], "create_initial_population");

        for individual_type in IndividualType::ALL {
            let count = match individual_type {
                IndividualType::Cooperator1 => self.variables.cooperator1_count,
                IndividualType::Cooperator2 => self.variables.cooperator2_count,
                IndividualType::Resonation => self.variables.resonation_count,
                IndividualType::Defector => self.variables.defector_count,
            };
            for _ in 0..count {
                let genetic = gaussian_non_negative(
                    &mut self.rng,
                    self.variables.mean_quality,
                    self.variables.sd_quality,
                );
                let phenotypic =
                    gaussian_non_negative(&mut self.rng, genetic, self.variables.sd_pheno);
                let individual = self.spawn(individual_type, genetic, phenotypic);
                self.individuals.push(individual);
            }
        }

        for group in &mut self.groups {
            group.rebuild(&self.individuals);
        }
        let counts = Self::type_counts(&self.individuals);
        self.record_generation(counts);
        self.phase = Phase::Seeded;
    }

    /// Clear per-generation selection state, promote the previous
    /// generation's offspring to the live population, and rebuild groups.
    ///
    /// # Panics
    ///
    /// Panics when called mid-generation.
    pub fn reset_lists(&mut self) {
        self.expect_phase(&[Phase::Seeded, Phase::HeritabilityDone], "reset_lists");

        if !self.offspring.is_empty() {
            self.individuals = std::mem::take(&mut self.offspring);
        }
        for group in &mut self.groups {
            group.rebuild(&self.individuals);
        }

        self.step1_survivors.clear();
        self.step1_rejects.clear();
        self.step2_survivors.clear();
        self.step2_rejects.clear();
        self.step1_perish_count = 0;
        self.step2_perish_count = 0;
        self.step1_mean = self.variables.mean_perish_step1;
        self.step1_sd = self.variables.sd_perish_step1;
        self.step2_mean = self.variables.mean_perish_step2;
        self.step2_sd = self.variables.sd_perish_step2;
        self.phase = Phase::Ready;
    }

    /// Recompute the quality cutoffs from the configuration.
    ///
    /// # Panics
    ///
    /// Panics unless the generation was just reset.
    pub fn calculate_thresholds(&mut self) {
        self.expect_phase(&[Phase::Ready], "calculate_thresholds");
        self.thresholds = Thresholds::from_variables(&self.variables);
        self.phase = Phase::Thresholded;
    }

    /// First viability-selection phase, ranking by phenotypic quality.
    ///
    /// # Panics
    ///
    /// Panics unless thresholds were just computed.
    pub fn perish1(&mut self) {
        self.expect_phase(&[Phase::Thresholded], "perish1");

        let mut ctx = PerishContext {
            variables: &self.variables,
            thresholds: &mut self.thresholds,
            perish_mean: &mut self.step1_mean,
            perish_sd: &mut self.step1_sd,
            individuals: &self.individuals,
            survivors: &[],
            generations_passed: self.generations_passed,
        };
        self.rules.adjust_perish1(&mut ctx);

        self.step1_perish_count = gaussian_int_in_range(
            &mut self.rng,
            self.step1_mean,
            self.step1_sd,
            0,
            self.variables.population_size as i64 - 1,
        ) as usize;

        let candidates: Vec<usize> = (0..self.individuals.len()).collect();
        let survivor_count = candidates.len().saturating_sub(self.step1_perish_count);
        let (survivors, rejects) =
            self.split_by_rank(&candidates, survivor_count, |ind| ind.phenotypic_quality());
        for &i in &rejects {
            self.individuals[i].perish();
        }
        self.step1_survivors = survivors;
        self.step1_rejects = rejects;

        if self.logging_enabled {
            self.log_perish(1, self.step1_perish_count, &self.step1_rejects, false);
        }
        self.phase = Phase::Perished1;
    }

    /// Second viability-selection phase, ranking step-1 survivors by the
    /// strategy score `S`.
    ///
    /// A no-op when step 1 already eliminated the whole population.
    ///
    /// # Panics
    ///
    /// Panics unless `perish1` just ran.
    pub fn perish2(&mut self) {
        self.expect_phase(&[Phase::Perished1], "perish2");

        if self.step1_perish_count >= self.variables.population_size
            || self.step1_survivors.is_empty()
        {
            self.phase = Phase::Perished2;
            return;
        }

        let mut ctx = PerishContext {
            variables: &self.variables,
            thresholds: &mut self.thresholds,
            perish_mean: &mut self.step2_mean,
            perish_sd: &mut self.step2_sd,
            individuals: &self.individuals,
            survivors: &self.step1_survivors,
            generations_passed: self.generations_passed,
        };
        self.rules.adjust_perish2(&mut ctx);

        self.step2_perish_count = gaussian_int_in_range(
            &mut self.rng,
            self.step2_mean,
            self.step2_sd,
            0,
            self.step1_survivors.len() as i64 - 1,
        ) as usize;

        let candidates = self.step1_survivors.clone();
        let survivor_count = candidates.len() - self.step2_perish_count;
        let (survivors, rejects) = self.split_by_rank(&candidates, survivor_count, |ind| ind.s());
        for &i in &rejects {
            self.individuals[i].perish();
        }
        self.step2_survivors = survivors;
        self.step2_rejects = rejects;

        if self.logging_enabled {
            self.log_perish(2, self.step2_perish_count, &self.step2_rejects, true);
        }
        self.phase = Phase::Perished2;
    }

    /// Invoke the fecundity hook, then recompute every group's total and
    /// lost fecundity.
    ///
    /// # Panics
    ///
    /// Panics unless `perish2` just ran.
    pub fn calculate_fecundity(&mut self) {
        self.expect_phase(&[Phase::Perished2], "calculate_fecundity");

        let mut ctx = FecundityContext {
            variables: &self.variables,
            thresholds: &self.thresholds,
            individuals: &mut self.individuals,
            survivors: &self.step2_survivors,
            generations_passed: self.generations_passed,
        };
        self.rules.adjust_fecundity(&mut ctx);

        for group in &mut self.groups {
            group.calculate_total_fecundity(&self.individuals);
            group.calculate_lost_fecundity(&self.individuals);
        }
        self.phase = Phase::Fecundity;
    }

    /// Redistribute lost fecundity: every live member of a group with
    /// non-zero total fecundity gets its fecundity scaled by a multiplier
    /// combining a within-group and a population-wide redistribution term.
    ///
    /// Groups whose total fecundity is zero are skipped; their members keep
    /// an adjusted fecundity of zero and are ineligible as parents.
    ///
    /// # Panics
    ///
    /// Panics unless `calculate_fecundity` just ran.
    pub fn calculate_adjusted_fecundity(&mut self) {
        self.expect_phase(&[Phase::Fecundity], "calculate_adjusted_fecundity");

        let lost_sum: f64 = self.groups.iter().map(Group::lost_fecundity).sum();
        let total_sum: f64 = self.groups.iter().map(Group::total_fecundity).sum();

        for gi in 0..self.groups.len() {
            let lost = self.groups[gi].lost_fecundity();
            let total = self.groups[gi].total_fecundity();
            if total == 0.0 {
                continue;
            }
            let within = self.variables.mixing_ratio * self.variables.scale_factor * lost / total;
            let across = (1.0 - self.variables.mixing_ratio) * self.variables.scale_factor
                * lost_sum
                / total_sum;
            let multiplier = 1.0 + within + across;

            for mi in 0..self.groups[gi].len() {
                let idx = self.groups[gi].members()[mi];
                let individual = &mut self.individuals[idx];
                if individual.is_alive() {
                    let adjusted = individual.fecundity() * multiplier;
                    individual.set_adjusted_fecundity(adjusted);
                }
            }
        }

        if self.logging_enabled {
            self.log_fecundity();
        }
        self.phase = Phase::AdjustedFecundity;
    }

    /// Draw `population_size` parents, with replacement, from the
    /// survivors weighted by adjusted fecundity. Individuals with zero
    /// adjusted fecundity are never drawn.
    ///
    /// Returns indices into [`individuals`](Self::individuals); empty when
    /// no survivor carries positive weight (the extinction path).
    ///
    /// # Panics
    ///
    /// Panics unless `calculate_adjusted_fecundity` just ran.
    pub fn get_parents(&mut self) -> Vec<usize> {
        self.expect_phase(&[Phase::AdjustedFecundity], "get_parents");

        let eligible: Vec<usize> = self
            .step2_survivors
            .iter()
            .copied()
            .filter(|&i| {
                self.individuals[i].is_alive() && self.individuals[i].adjusted_fecundity() > 0.0
            })
            .collect();
        if eligible.is_empty() {
            return Vec::new();
        }

        let weights: Vec<f64> = eligible
            .iter()
            .map(|&i| self.individuals[i].adjusted_fecundity())
            .collect();
        let total: f64 = weights.iter().sum();
        let cumulative: Vec<f64> = weights
            .iter()
            .scan(0.0, |acc, &w| {
                *acc += w;
                Some(*acc)
            })
            .collect();

        (0..self.variables.population_size)
            .map(|_| {
                let r = self.rng.random_range(0.0..total);
                let pos = cumulative
                    .iter()
                    .position(|&c| c > r)
                    .unwrap_or(eligible.len() - 1);
                eligible[pos]
            })
            .collect()
    }

    /// Draw parents and produce the next generation.
    ///
    /// Each offspring's genetic quality is drawn around a target mean
    /// proportional to its parent's share of the total parent genetic
    /// quality; its phenotypic quality is drawn around the genetic
    /// quality. Every reproduction event appends to the history, and the
    /// new generation is staged until the next `reset_lists`.
    ///
    /// # Panics
    ///
    /// Panics unless `calculate_adjusted_fecundity` just ran.
    pub fn choose_parents_and_reproduce(&mut self) {
        let parents = self.get_parents();

        let total_genetic: f64 = parents
            .iter()
            .map(|&i| self.individuals[i].genetic_quality())
            .sum();

        let mut offspring = Vec::with_capacity(parents.len());
        for &p in &parents {
            let target = if total_genetic > 0.0 {
                self.individuals[p].genetic_quality() * self.variables.population_size as f64
                    * self.variables.mean_quality
                    / total_genetic
            } else {
                0.0
            };
            let genetic = gaussian_non_negative(&mut self.rng, target, self.variables.sd_quality);
            let phenotypic = gaussian_non_negative(&mut self.rng, genetic, self.variables.sd_pheno);

            let individual_type = self.individuals[p].individual_type();
            let id = self.claim_id(individual_type);
            let mut child = self.individuals[p].reproduce(id, genetic, phenotypic);
            let (reserving, resonating) = self
                .thresholds
                .classify(individual_type, child.phenotypic_quality());
            child.set_strategy_flags(reserving, resonating);
            self.ledger.insert(
                child.key(),
                TraitRecord {
                    phenotypic_quality: child.phenotypic_quality(),
                    genetic_quality: child.genetic_quality(),
                    offspring_count: 0,
                },
            );

            let parent_key = self.individuals[p].key();
            // every individual is registered in the ledger at creation
            self.ledger.get_mut(&parent_key).unwrap().offspring_count += 1;
            self.history.push(HistoryEntry {
                parent: parent_key,
                offspring: child.key(),
            });
            offspring.push(child);
        }
        self.offspring = offspring;

        if self.logging_enabled {
            self.log_reproduction();
        }
        self.phase = Phase::Reproduced;
    }

    /// Estimate heritability from the accumulated history.
    ///
    /// A no-op before generation 3; two generations of history are not
    /// enough for the regression.
    ///
    /// # Panics
    ///
    /// Panics unless reproduction just ran.
    pub fn calculate_heritability(&mut self) {
        self.expect_phase(&[Phase::Reproduced], "calculate_heritability");

        if self.generations_passed > 2 {
            let summary = estimate(&self.history, &self.ledger, self.variables.population_size);
            if self.logging_enabled {
                debug!("Heritability:\n{summary}");
            }
            self.heritability = Some(summary);
        }
        self.phase = Phase::HeritabilityDone;
    }

    /// Run one full generation and evaluate the termination condition.
    ///
    /// Returns `true` while the run should continue.
    ///
    /// # Panics
    ///
    /// Panics unless the population was seeded and the engine is not
    /// terminal.
    pub fn simulate_generation(&mut self) -> bool {
        self.expect_phase(&[Phase::Seeded, Phase::HeritabilityDone], "simulate_generation");

        self.generations_passed += 1;
        self.reset_lists();
        self.calculate_thresholds();
        self.perish1();
        self.perish2();
        self.calculate_fecundity();
        self.calculate_adjusted_fecundity();
        self.choose_parents_and_reproduce();
        self.calculate_heritability();
        self.evaluate_winner()
    }

    /// Run generations until a winner is decided or the cap is reached.
    ///
    /// # Panics
    ///
    /// Panics unless the population was seeded.
    pub fn run(&mut self) {
        self.expect_phase(&[Phase::Seeded, Phase::HeritabilityDone], "run");
        while self.simulate_generation() {}
    }

    // ----- internals ------------------------------------------------------

    fn spawn(&mut self, individual_type: IndividualType, genetic: f64, phenotypic: f64) -> Individual {
        let id = self.claim_id(individual_type);
        let mut individual = Individual::new(id, individual_type, genetic, phenotypic);
        let (reserving, resonating) = self
            .thresholds
            .classify(individual_type, individual.phenotypic_quality());
        individual.set_strategy_flags(reserving, resonating);
        self.ledger.insert(
            individual.key(),
            TraitRecord {
                phenotypic_quality: individual.phenotypic_quality(),
                genetic_quality: individual.genetic_quality(),
                offspring_count: 0,
            },
        );
        individual
    }

    fn claim_id(&mut self, individual_type: IndividualType) -> u32 {
        let slot = &mut self.next_id[individual_type.index()];
        let id = *slot;
        *slot += 1;
        id
    }

    /// Split candidates into the top `survivor_count` by `key` (descending)
    /// and the rest. Ties break by type then id so runs are reproducible.
    fn split_by_rank<F>(
        &self,
        candidates: &[usize],
        survivor_count: usize,
        key: F,
    ) -> (Vec<usize>, Vec<usize>)
    where
        F: Fn(&Individual) -> f64,
    {
        let mut ranked: Vec<usize> = candidates.to_vec();
        ranked.sort_by(|&a, &b| {
            let ind_a = &self.individuals[a];
            let ind_b = &self.individuals[b];
            key(ind_b)
                .total_cmp(&key(ind_a))
                .then_with(|| ind_a.individual_type().cmp(&ind_b.individual_type()))
                .then_with(|| ind_a.id().cmp(&ind_b.id()))
        });
        let rejects = ranked.split_off(survivor_count.min(ranked.len()));
        (ranked, rejects)
    }

    fn type_counts(individuals: &[Individual]) -> [usize; 4] {
        let mut counts = [0usize; 4];
        for individual in individuals {
            counts[individual.individual_type().index()] += 1;
        }
        counts
    }

    fn record_generation(&mut self, counts: [usize; 4]) {
        for (i, &count) in counts.iter().enumerate() {
            self.generation_history[i].push(count);
        }
    }

    fn evaluate_winner(&mut self) -> bool {
        let counts = Self::type_counts(&self.offspring);
        self.record_generation(counts);

        let total: usize = counts.iter().sum();
        let surviving_types = counts.iter().filter(|&&c| c > 0).count();

        self.winner = if total == 0 {
            Winner::Extinction
        } else if surviving_types == 1 {
            let index = counts.iter().position(|&c| c > 0).unwrap_or(0);
            Winner::from_type(IndividualType::ALL[index])
        } else if self.generations_passed >= self.variables.max_generations {
            Winner::Tie
        } else {
            Winner::Undecided
        };

        if self.winner == Winner::Undecided {
            true
        } else {
            if self.logging_enabled {
                debug!(
                    "Winner after {} generations: {}",
                    self.generations_passed, self.winner
                );
            }
            self.phase = Phase::Terminal;
            false
        }
    }

    // ----- logging --------------------------------------------------------

    fn log_perish(&self, step: usize, perish_count: usize, rejects: &[usize], include_s: bool) {
        let headers: &[&str] = if include_s {
            &["Type", "Id", "Qp", "S"]
        } else {
            &["Type", "Id", "Qp"]
        };
        let mut table = Table::new(headers);

        let mut sorted: Vec<usize> = rejects.to_vec();
        sorted.sort_by_key(|&i| {
            (
                self.individuals[i].individual_type(),
                self.individuals[i].id(),
            )
        });
        for &i in &sorted {
            let ind = &self.individuals[i];
            let mut cells = vec![
                ind.individual_type().to_string(),
                ind.id().to_string(),
                format!("{:.4}", ind.phenotypic_quality()),
            ];
            if include_s {
                cells.push(format!("{:.4}", ind.s()));
            }
            table.row(cells);
        }

        debug!(
            "Perish {step}: amount to perish = {perish_count}\nperished individuals:\n{table}"
        );
    }

    fn log_fecundity(&self) {
        for group in &self.groups {
            let mut table = Table::new(&["Id", "Qp", "Fecundity", "AdjustedFecundity"]);
            for &i in group.members() {
                let ind = &self.individuals[i];
                table.row(vec![
                    ind.to_string(),
                    format!("{:.4}", ind.phenotypic_quality()),
                    format!("{:.4}", ind.fecundity()),
                    format!("{:.4}", ind.adjusted_fecundity()),
                ]);
            }
            if !table.is_empty() {
                debug!(
                    "{} group (total fecundity {:.4}, lost {:.4}):\n{table}",
                    group.group_type(),
                    group.total_fecundity(),
                    group.lost_fecundity()
                );
            }
        }
    }

    fn log_reproduction(&self) {
        let newest = self.history.len().saturating_sub(self.variables.population_size);
        let mut recent: Vec<&HistoryEntry> = self.history[newest..].iter().collect();
        recent.sort_by_key(|e| (e.parent.individual_type, e.parent.id));

        let mut table = Table::new(&["Parent", "Offspring", "Qg", "Qp"]);
        for entry in recent {
            let child = &self.ledger[&entry.offspring];
            table.row(vec![
                entry.parent.to_string(),
                entry.offspring.to_string(),
                format!("{:.4}", child.genetic_quality),
                format!("{:.4}", child.phenotypic_quality),
            ]);
        }
        debug!("Reproduce:\n{table}");
    }

    // ----- accessors ------------------------------------------------------

    pub fn variables(&self) -> &Variables {
        &self.variables
    }

    /// The cutoffs in effect for the current generation.
    pub fn thresholds(&self) -> &Thresholds {
        &self.thresholds
    }

    /// The current generation's individuals. Survivor and reject lists
    /// index into this slice.
    pub fn individuals(&self) -> &[Individual] {
        &self.individuals
    }

    /// The staged next generation, filled by reproduction and promoted at
    /// the next `reset_lists`.
    pub fn offspring(&self) -> &[Individual] {
        &self.offspring
    }

    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    pub fn group(&self, individual_type: IndividualType) -> &Group {
        &self.groups[individual_type.index()]
    }

    pub fn cooperator1_group(&self) -> &Group {
        self.group(IndividualType::Cooperator1)
    }

    pub fn cooperator2_group(&self) -> &Group {
        self.group(IndividualType::Cooperator2)
    }

    pub fn resonation_group(&self) -> &Group {
        self.group(IndividualType::Resonation)
    }

    pub fn defector_group(&self) -> &Group {
        self.group(IndividualType::Defector)
    }

    pub fn step1_perish_count(&self) -> usize {
        self.step1_perish_count
    }

    pub fn step2_perish_count(&self) -> usize {
        self.step2_perish_count
    }

    pub fn step1_survivors(&self) -> &[usize] {
        &self.step1_survivors
    }

    pub fn step1_rejects(&self) -> &[usize] {
        &self.step1_rejects
    }

    pub fn step2_survivors(&self) -> &[usize] {
        &self.step2_survivors
    }

    pub fn step2_rejects(&self) -> &[usize] {
        &self.step2_rejects
    }

    pub fn total_perished(&self) -> usize {
        self.step1_rejects.len() + self.step2_rejects.len()
    }

    /// All reproduction events so far, oldest first.
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// The latest heritability summary; `None` before generation 3.
    pub fn heritability(&self) -> Option<&HeritabilitySummary> {
        self.heritability.as_ref()
    }

    pub fn winner(&self) -> Winner {
        self.winner
    }

    pub fn generations_passed(&self) -> usize {
        self.generations_passed
    }

    /// Population counts over time for one behavioral type, starting with
    /// the seeded generation.
    pub fn generation_history(&self, individual_type: IndividualType) -> &[usize] {
        &self.generation_history[individual_type.index()]
    }
}
