use crate::error::{CrudgradError, GradientKind};
use crate::value::Value;
use approx::relative_eq;

/// Tunables for [`check_grad`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradCheckConfig {
    /// Half-width of the centered finite difference.
    pub epsilon: f64,
    /// Maximum accepted absolute *or* relative difference.
    pub tolerance: f64,
}

impl Default for GradCheckConfig {
    fn default() -> Self {
        GradCheckConfig {
            epsilon: 1e-6,
            tolerance: 1e-4,
        }
    }
}

impl GradCheckConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }
}

/// Centered finite-difference estimate of d`func`/d`inputs[index]`.
///
/// `func` is evaluated on fresh leaves built from `inputs` with the chosen
/// coordinate shifted by `+epsilon` and `-epsilon`. Returns `None` if
/// `index` is out of bounds for `inputs`.
pub fn numerical_grad<F>(func: F, inputs: &[f64], index: usize, epsilon: f64) -> Option<f64>
where
    F: Fn(&[Value]) -> Value,
{
    if index >= inputs.len() {
        return None;
    }
    Some(centered_difference(func, inputs, index, epsilon))
}

// `index` must be in bounds.
fn centered_difference<F>(func: F, inputs: &[f64], index: usize, epsilon: f64) -> f64
where
    F: Fn(&[Value]) -> Value,
{
    let mut inputs_plus = inputs.to_vec();
    inputs_plus[index] += epsilon;
    let mut inputs_minus = inputs.to_vec();
    inputs_minus[index] -= epsilon;

    let loss_plus = func(&Value::from_slice(&inputs_plus)).data();
    let loss_minus = func(&Value::from_slice(&inputs_minus)).data();
    (loss_plus - loss_minus) / (2.0 * epsilon)
}

/// Checks the gradients computed by [`Value::backward`] against finite differences.
///
/// `func` builds a scalar expression from one leaf per entry of `inputs`.
/// The expression is differentiated once, then every leaf gradient is
/// compared with [`numerical_grad`].
///
/// # Errors
/// * `NonFiniteGradient` if either gradient of some input is NaN or infinite.
/// * `GradientMismatch` if both the absolute and the relative difference
///   exceed `config.tolerance`.
pub fn check_grad<F>(
    func: F,
    inputs: &[f64],
    config: &GradCheckConfig,
) -> Result<(), CrudgradError>
where
    F: Fn(&[Value]) -> Value,
{
    let leaves = Value::from_slice(inputs);
    let output = func(&leaves);
    output.backward();

    for (input_index, leaf) in leaves.iter().enumerate() {
        let analytical = leaf.grad();
        if !analytical.is_finite() {
            return Err(CrudgradError::NonFiniteGradient {
                input_index,
                kind: GradientKind::Analytical,
                value: analytical,
            });
        }

        let numerical = centered_difference(&func, inputs, input_index, config.epsilon);
        if !numerical.is_finite() {
            return Err(CrudgradError::NonFiniteGradient {
                input_index,
                kind: GradientKind::Numerical,
                value: numerical,
            });
        }

        if !relative_eq!(
            analytical,
            numerical,
            epsilon = config.tolerance,
            max_relative = config.tolerance
        ) {
            let difference = (analytical - numerical).abs();
            log::warn!(
                "check_grad: input {} analytical={} numerical={} difference={}",
                input_index,
                analytical,
                numerical,
                difference
            );
            return Err(CrudgradError::GradientMismatch {
                input_index,
                analytical,
                numerical,
                difference,
            });
        }
    }

    log::debug!(
        "check_grad: {} inputs agree within tolerance {}",
        inputs.len(),
        config.tolerance
    );
    Ok(())
}

#[cfg(test)]
#[path = "grad_check_test.rs"]
mod tests;
