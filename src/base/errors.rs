use thiserror::Error;

/// Error returned when a configuration fails validation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// The population size was zero.
    #[error("population size must be greater than zero")]
    ZeroPopulation,

    /// The per-type group counts do not sum to the population size.
    #[error("group counts sum to {sum}, expected population size {expected}")]
    GroupCountMismatch { sum: usize, expected: usize },

    /// A parameter that must be non-negative was negative.
    #[error("{name} must be non-negative, got {value}")]
    NegativeParameter { name: &'static str, value: f64 },

    /// A ratio parameter fell outside `[0, 1]`.
    #[error("{name} must be within [0, 1], got {value}")]
    RatioOutOfRange { name: &'static str, value: f64 },

    /// The generation cap was zero.
    #[error("max generations must be greater than zero")]
    ZeroGenerationCap,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = ConfigError::GroupCountMismatch {
            sum: 38,
            expected: 40,
        };
        assert_eq!(
            err.to_string(),
            "group counts sum to 38, expected population size 40"
        );

        let err = ConfigError::RatioOutOfRange {
            name: "mixing_ratio",
            value: 1.5,
        };
        assert!(err.to_string().contains("mixing_ratio"));
    }
}
