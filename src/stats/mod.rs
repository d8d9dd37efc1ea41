//! Random-draw and descriptive-statistics primitives for the engine.

pub mod descriptive;
pub mod sampling;

pub use descriptive::{mean, population_covariance, population_variance};
pub use sampling::{gaussian_int_in_range, gaussian_non_negative, normal_quantile, quantile};
