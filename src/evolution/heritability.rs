//! Parent–offspring history and heritability estimation.
//!
//! The engine appends one [`HistoryEntry`] per reproduction event and keeps
//! a trait ledger for every individual it ever created, so the estimator
//! can read final offspring counts for parents whose generation has long
//! been replaced. Heritability for a trait is the ratio of the
//! parent/mean-offspring population covariance to the parent population
//! variance.

use crate::base::IndividualKey;
use crate::stats::{mean, population_covariance, population_variance};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// One reproduction event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub parent: IndividualKey,
    pub offspring: IndividualKey,
}

/// Trait values recorded for every individual ever created in a run.
///
/// `offspring_count` is updated as the individual reproduces; the quality
/// values are fixed at creation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct TraitRecord {
    pub phenotypic_quality: f64,
    pub genetic_quality: f64,
    pub offspring_count: u32,
}

pub(crate) type TraitLedger = HashMap<IndividualKey, TraitRecord>;

/// Heritability estimates for one generation.
///
/// The three ratio fields are `None` when the corresponding parent-trait
/// variance is zero, making "undefined heritability" explicit instead of
/// propagating a division by zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeritabilitySummary {
    pub phenotypic_quality: Option<f64>,
    pub covariance_phenotypic_quality: f64,
    pub variance_phenotypic_quality: f64,
    pub genetic_quality: Option<f64>,
    pub covariance_genetic_quality: f64,
    pub variance_genetic_quality: f64,
    pub reproduction: Option<f64>,
    pub covariance_reproduction: f64,
    pub variance_reproduction: f64,
}

impl fmt::Display for HeritabilitySummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn ratio(r: Option<f64>) -> String {
            match r {
                Some(v) => format!("{v:.4}"),
                None => "undefined".to_string(),
            }
        }
        writeln!(
            f,
            "Phenotypic Quality: {} (cov {:.4}, var {:.4})",
            ratio(self.phenotypic_quality),
            self.covariance_phenotypic_quality,
            self.variance_phenotypic_quality
        )?;
        writeln!(
            f,
            "Genetic Quality:    {} (cov {:.4}, var {:.4})",
            ratio(self.genetic_quality),
            self.covariance_genetic_quality,
            self.variance_genetic_quality
        )?;
        write!(
            f,
            "Reproduction:       {} (cov {:.4}, var {:.4})",
            ratio(self.reproduction),
            self.covariance_reproduction,
            self.variance_reproduction
        )
    }
}

/// Group history entries by parent, preserving first-appearance order so
/// downstream float summations are deterministic.
fn group_by_parent(entries: &[HistoryEntry]) -> Vec<(IndividualKey, Vec<IndividualKey>)> {
    let mut order: Vec<(IndividualKey, Vec<IndividualKey>)> = Vec::new();
    let mut index: HashMap<IndividualKey, usize> = HashMap::new();
    for entry in entries {
        match index.get(&entry.parent) {
            Some(&i) => order[i].1.push(entry.offspring),
            None => {
                index.insert(entry.parent, order.len());
                order.push((entry.parent, vec![entry.offspring]));
            }
        }
    }
    order
}

fn ratio(cov: f64, var: f64) -> Option<f64> {
    if var == 0.0 {
        None
    } else {
        Some(cov / var)
    }
}

/// Estimate heritability from the full history.
///
/// Quality traits regress over the complete history; the reproduction
/// trait uses only the window excluding the newest `population_size`
/// entries, because the newest generation's offspring counts are not yet
/// finalized.
pub(crate) fn estimate(
    history: &[HistoryEntry],
    ledger: &TraitLedger,
    population_size: usize,
) -> HeritabilitySummary {
    let full = group_by_parent(history);

    // Per-parent (parent Qp, mean offspring Qp, parent Qg, mean offspring Qg)
    let quality: Vec<(f64, f64, f64, f64)> = full
        .par_iter()
        .map(|(parent, offspring)| {
            let p = &ledger[parent];
            let qp: Vec<f64> = offspring
                .iter()
                .map(|o| ledger[o].phenotypic_quality)
                .collect();
            let qg: Vec<f64> = offspring.iter().map(|o| ledger[o].genetic_quality).collect();
            (p.phenotypic_quality, mean(&qp), p.genetic_quality, mean(&qg))
        })
        .collect();

    let parent_qp: Vec<f64> = quality.iter().map(|q| q.0).collect();
    let offspring_qp: Vec<f64> = quality.iter().map(|q| q.1).collect();
    let parent_qg: Vec<f64> = quality.iter().map(|q| q.2).collect();
    let offspring_qg: Vec<f64> = quality.iter().map(|q| q.3).collect();

    let cov_qp = population_covariance(&parent_qp, &offspring_qp);
    let var_qp = population_variance(&parent_qp);
    let cov_qg = population_covariance(&parent_qg, &offspring_qg);
    let var_qg = population_variance(&parent_qg);

    let window = &history[..history.len().saturating_sub(population_size)];
    let windowed = group_by_parent(window);
    let reproduction: Vec<(f64, f64)> = windowed
        .par_iter()
        .map(|(parent, offspring)| {
            let counts: Vec<f64> = offspring
                .iter()
                .map(|o| f64::from(ledger[o].offspring_count))
                .collect();
            (f64::from(ledger[parent].offspring_count), mean(&counts))
        })
        .collect();

    let parent_counts: Vec<f64> = reproduction.iter().map(|r| r.0).collect();
    let offspring_counts: Vec<f64> = reproduction.iter().map(|r| r.1).collect();

    let cov_rep = population_covariance(&parent_counts, &offspring_counts);
    let var_rep = population_variance(&parent_counts);

    HeritabilitySummary {
        phenotypic_quality: ratio(cov_qp, var_qp),
        covariance_phenotypic_quality: cov_qp,
        variance_phenotypic_quality: var_qp,
        genetic_quality: ratio(cov_qg, var_qg),
        covariance_genetic_quality: cov_qg,
        variance_genetic_quality: var_qg,
        reproduction: ratio(cov_rep, var_rep),
        covariance_reproduction: cov_rep,
        variance_reproduction: var_rep,
    }
}
