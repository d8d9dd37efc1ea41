//! Cross-generation machinery: the adjustment-rule strategy seam and
//! heritability estimation.

mod adjustment;
mod heritability;

pub use adjustment::{AdjustmentRules, FecundityContext, NoAdjustment, PerishContext};
pub use heritability::{HeritabilitySummary, HistoryEntry};

pub(crate) use heritability::{estimate, TraitLedger, TraitRecord};
