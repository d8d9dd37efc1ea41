//! Core data entities: individuals, behavioral groups, and configuration
//! errors.

mod errors;
mod group;
mod individual;

pub use errors::ConfigError;
pub use group::Group;
pub use individual::{Individual, IndividualKey, IndividualType};
