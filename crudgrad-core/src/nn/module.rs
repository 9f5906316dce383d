use crate::error::CrudgradError;
use crate::value::Value;

/// The base trait for all neural-network modules (neurons, layers, networks).
///
/// Parameters are plain [`Value`] leaves. Returning them clones the handles,
/// so gradients read through the returned values are the module's own.
pub trait Module: std::fmt::Debug {
    /// Performs a forward pass of the module.
    ///
    /// # Errors
    /// Returns `CrudgradError::InputSizeMismatch` if `input` does not have the
    /// number of values the module expects.
    fn forward(&self, input: &[Value]) -> Result<Vec<Value>, CrudgradError>;

    /// Returns all learnable parameters, including those of sub-modules.
    fn parameters(&self) -> Vec<Value>;

    /// Returns all learnable parameters along with hierarchical names
    /// (e.g. "layers.0.neurons.2.w.1").
    fn named_parameters(&self) -> Vec<(String, Value)>;

    fn num_parameters(&self) -> usize {
        self.parameters().len()
    }

    /// Resets the gradient of every parameter.
    fn zero_grad(&self) {
        for param in self.parameters() {
            param.zero_grad();
        }
    }
}

/// Prefixes each name of `named` with `prefix.`.
pub(crate) fn prefixed(prefix: &str, named: Vec<(String, Value)>) -> Vec<(String, Value)> {
    named
        .into_iter()
        .map(|(name, param)| (format!("{}.{}", prefix, name), param))
        .collect()
}

/// Fails with `InputSizeMismatch` unless `input.len() == expected`.
pub(crate) fn check_input_size(input: &[Value], expected: usize) -> Result<(), CrudgradError> {
    if input.len() != expected {
        return Err(CrudgradError::InputSizeMismatch {
            expected,
            actual: input.len(),
        });
    }
    Ok(())
}
