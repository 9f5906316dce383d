use crate::error::CrudgradError;
use crate::value::Value;
use rand::Rng;
use rand_distr::{Distribution, Uniform};

/// Bound of the default parameter range `[-PARAM_INIT_BOUND, PARAM_INIT_BOUND)`.
pub const PARAM_INIT_BOUND: f64 = 1.0;

/// Draws `n` fresh leaves uniformly from `[low, high)`.
///
/// # Errors
/// Returns `CrudgradError::InvalidInitRange` unless `low < high` (NaN bounds
/// included).
pub fn uniform<R>(rng: &mut R, n: usize, low: f64, high: f64) -> Result<Vec<Value>, CrudgradError>
where
    R: Rng + ?Sized,
{
    if !(low < high) || !low.is_finite() || !high.is_finite() {
        return Err(CrudgradError::InvalidInitRange { low, high });
    }
    let dist = Uniform::new(low, high);
    Ok(sample_values(&dist, rng, n))
}

/// Draws `n` leaves from the default parameter range.
pub(crate) fn default_parameters<R>(rng: &mut R, n: usize) -> Vec<Value>
where
    R: Rng + ?Sized,
{
    let dist = Uniform::new(-PARAM_INIT_BOUND, PARAM_INIT_BOUND);
    sample_values(&dist, rng, n)
}

/// Draws a single leaf from the default parameter range.
pub(crate) fn default_parameter<R>(rng: &mut R) -> Value
where
    R: Rng + ?Sized,
{
    let dist = Uniform::new(-PARAM_INIT_BOUND, PARAM_INIT_BOUND);
    Value::new(dist.sample(rng))
}

fn sample_values<R>(dist: &Uniform<f64>, rng: &mut R, n: usize) -> Vec<Value>
where
    R: Rng + ?Sized,
{
    (0..n).map(|_| Value::new(dist.sample(rng))).collect()
}

#[cfg(test)]
#[path = "init_test.rs"]
mod tests;
