// Softmax followed by the negative log-likelihood of one label, checked
// against reference gradients.
//
// RUST_LOG=debug cargo run --example softmax_nll

use crudgrad_core::Value;

fn softmax(logits: &[Value]) -> Vec<Value> {
    let counts: Vec<Value> = logits.iter().map(|logit| logit.exp()).collect();
    let denominator: Value = counts.iter().sum();
    counts.iter().map(|c| c / &denominator).collect()
}

fn main() {
    env_logger::init();

    let logits = Value::from_slice(&[0.0, 3.0, -2.0, 1.0]);
    let probs = softmax(&logits);
    // dim 3 acts as the label for this input example
    let loss = -probs[3].log();
    loss.backward();
    println!("{}", loss.data());

    let ans = [
        0.041772570515350445,
        0.8390245074625319,
        0.005653302662216329,
        -0.8864503806400986,
    ];
    for (dim, (logit, expected)) in logits.iter().zip(ans.iter()).enumerate() {
        let ok = if (logit.grad() - expected).abs() < 1e-5 {
            "OK"
        } else {
            "WRONG!"
        };
        println!(
            "{} for dim {}: expected {}, yours returns {}",
            ok,
            dim,
            expected,
            logit.grad()
        );
    }
}
