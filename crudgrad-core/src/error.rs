use thiserror::Error;

/// Custom error type for crudgrad.
///
/// Arithmetic on [`Value`](crate::Value)s never fails: division by zero,
/// logarithms of non-positive numbers and overflowing exponentials produce
/// IEEE-754 special values that flow through the graph. These variants cover
/// the layers built around the engine.
#[derive(Error, Debug, PartialEq, Clone)]
pub enum CrudgradError {
    #[error("Input size mismatch: expected {expected} inputs, got {actual}")]
    InputSizeMismatch { expected: usize, actual: usize },

    #[error("Invalid network architecture: {0}")]
    InvalidArchitecture(String),

    #[error("Invalid initialisation range: low {low} must be below high {high}")]
    InvalidInitRange { low: f64, high: f64 },

    #[error("Gradient check failed for input {input_index}: analytical grad {analytical:?} != numerical grad {numerical:?} (difference {difference:?})")]
    GradientMismatch {
        input_index: usize,
        analytical: f64,
        numerical: f64,
        difference: f64,
    },

    #[error("{kind} gradient is NaN or infinite for input {input_index}: {value:?}")]
    NonFiniteGradient {
        input_index: usize,
        kind: GradientKind,
        value: f64,
    },
}

/// Which side of a gradient check produced a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GradientKind {
    Analytical,
    Numerical,
}

impl std::fmt::Display for GradientKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GradientKind::Analytical => write!(f, "Analytical"),
            GradientKind::Numerical => write!(f, "Numerical"),
        }
    }
}
