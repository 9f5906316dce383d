mod common;

use approx::assert_abs_diff_eq;
use crudgrad_core::autograd::{check_grad, GradCheckConfig};
use crudgrad_core::utils::testing::{check_grads_near, check_value_near};
use crudgrad_core::Value;

#[test]
fn softmax_negative_log_likelihood() {
    common::init_logger();
    let logits = Value::from_slice(&[0.0, 3.0, -2.0, 1.0]);
    let probs = common::softmax(&logits);
    // index 3 is the label
    let loss = -probs[3].log();
    loss.backward();

    let expected = [
        0.041772570515350445,
        0.8390245074625319,
        0.005653302662216329,
        -0.8864503806400986,
    ];
    check_grads_near(&logits, &expected, 1e-5);

    let total: f64 = probs.iter().map(|p| p.data()).sum();
    assert_abs_diff_eq!(total, 1.0, epsilon = 1e-12);
    assert_abs_diff_eq!(loss.data(), -probs[3].data().ln(), epsilon = 1e-12);
}

#[test]
fn softmax_gradients_equal_probs_minus_one_hot() {
    let logits = Value::from_slice(&[0.5, -1.0, 2.0]);
    let probs = common::softmax(&logits);
    let loss = -probs[0].log();
    loss.backward();

    for (i, (logit, p)) in logits.iter().zip(&probs).enumerate() {
        let one_hot = if i == 0 { 1.0 } else { 0.0 };
        assert_abs_diff_eq!(logit.grad(), p.data() - one_hot, epsilon = 1e-12);
    }
}

#[test]
fn linear_composition() {
    let w = Value::new(2.0);
    let x = Value::new(3.0);
    let b = Value::new(1.0);
    let y = &w * &x + &b;
    check_value_near(&y, 7.0, 0.0);

    y.backward();
    assert_eq!(w.grad(), 3.0);
    assert_eq!(x.grad(), 2.0);
    assert_eq!(b.grad(), 1.0);
}

#[test]
fn fan_out_gradient_is_sum_of_paths() {
    // c = a * a + a * b: dc/da = 2a + b
    let a = Value::new(-3.0);
    let b = Value::new(4.0);
    let c = &a * &a + &a * &b;
    c.backward();
    assert_eq!(a.grad(), 2.0 * -3.0 + 4.0);
    assert_eq!(b.grad(), -3.0);
}

#[test]
fn every_rule_agrees_with_finite_differences() {
    let config = GradCheckConfig::default();
    let cases: Vec<(&str, Box<dyn Fn(&[Value]) -> Value>, Vec<f64>)> = vec![
        ("add", Box::new(|xs: &[Value]| &xs[0] + &xs[1]), vec![0.3, -1.2]),
        ("mul", Box::new(|xs: &[Value]| &xs[0] * &xs[1]), vec![0.3, -1.2]),
        ("sub", Box::new(|xs: &[Value]| &xs[0] - &xs[1]), vec![0.3, -1.2]),
        ("div", Box::new(|xs: &[Value]| &xs[0] / &xs[1]), vec![0.3, -1.2]),
        ("neg", Box::new(|xs: &[Value]| -&xs[0]), vec![0.3]),
        ("pow", Box::new(|xs: &[Value]| xs[0].pow(3.0)), vec![1.1]),
        ("tanh", Box::new(|xs: &[Value]| xs[0].tanh()), vec![0.5]),
        ("exp", Box::new(|xs: &[Value]| xs[0].exp()), vec![1.0]),
        ("log", Box::new(|xs: &[Value]| xs[0].log()), vec![2.0]),
    ];
    for (name, func, inputs) in cases {
        check_grad(|xs| func(xs), &inputs, &config)
            .unwrap_or_else(|e| panic!("{} failed grad check: {}", name, e));
    }
}

#[test]
fn rerun_after_zeroing_is_bit_identical() {
    let logits = Value::from_slice(&[0.0, 3.0, -2.0, 1.0]);
    let loss = -common::softmax(&logits)[3].log();
    loss.backward();
    let first: Vec<u64> = logits.iter().map(|l| l.grad().to_bits()).collect();

    loss.zero_grad_graph();
    assert!(logits.iter().all(|l| l.grad() == 0.0));
    loss.backward();
    let second: Vec<u64> = logits.iter().map(|l| l.grad().to_bits()).collect();
    assert_eq!(first, second);
}
