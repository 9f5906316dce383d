use crate::value::Value;

/// Asserts that `actual.data()` is within `tolerance` of `expected_data`.
/// Panics otherwise.
pub fn check_value_near(actual: &Value, expected_data: f64, tolerance: f64) {
    let diff = (actual.data() - expected_data).abs();
    if !(diff <= tolerance) {
        panic!(
            "Data mismatch: actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
            actual.data(),
            expected_data,
            diff,
            tolerance
        );
    }
}

/// Asserts that the gradient of each value is within `tolerance` of the
/// expected one. Panics on the first mismatch, naming its index.
pub fn check_grads_near(values: &[Value], expected_grads: &[f64], tolerance: f64) {
    assert_eq!(
        values.len(),
        expected_grads.len(),
        "Gradient count mismatch"
    );

    for (i, (value, expected)) in values.iter().zip(expected_grads.iter()).enumerate() {
        let actual = value.grad();
        let diff = (actual - expected).abs();
        if !(diff <= tolerance) {
            panic!(
                "Gradient mismatch at index {}: actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
                i, actual, expected, diff, tolerance
            );
        }
    }
}

/// Centered finite difference of a one-argument function, for rule tests.
#[cfg(test)]
pub(crate) fn finite_difference<F>(f: F, x: f64, epsilon: f64) -> f64
where
    F: Fn(&Value) -> Value,
{
    let plus = f(&Value::new(x + epsilon)).data();
    let minus = f(&Value::new(x - epsilon)).data();
    (plus - minus) / (2.0 * epsilon)
}
