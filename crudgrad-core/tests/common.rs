use crudgrad_core::Value;

// Shared by several test crates; not every crate uses every helper.
#[allow(dead_code)]
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Applies `exp`, normalises by the sum, returns the probabilities.
#[allow(dead_code)]
pub fn softmax(logits: &[Value]) -> Vec<Value> {
    let counts: Vec<Value> = logits.iter().map(|logit| logit.exp()).collect();
    let denominator: Value = counts.iter().sum();
    counts.iter().map(|c| c / &denominator).collect()
}
