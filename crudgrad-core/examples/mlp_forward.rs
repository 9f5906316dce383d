// Builds a small MLP, evaluates a squared-error loss over four examples and
// prints the loss and gradient statistics of one backward pass.

use crudgrad_core::nn::{Mlp, Module};
use crudgrad_core::{CrudgradError, Value};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() -> Result<(), CrudgradError> {
    env_logger::init();

    let mut rng = StdRng::seed_from_u64(1337);
    let mlp = Mlp::new(3, &[4, 4, 1], &mut rng)?;
    println!("MLP sizes {:?}, {} parameters", mlp.sizes(), mlp.num_parameters());

    let xs = [
        [2.0, 3.0, -1.0],
        [3.0, -1.0, 0.5],
        [0.5, 1.0, 1.0],
        [1.0, 1.0, -1.0],
    ];
    let ys = [1.0, -1.0, -1.0, 1.0];

    let mut predictions = Vec::with_capacity(xs.len());
    for x in &xs {
        let out = mlp.forward(&Value::from_slice(x))?;
        predictions.extend(out);
    }
    let loss: Value = predictions
        .iter()
        .zip(ys.iter())
        .map(|(pred, &target)| (pred - target).pow(2.0))
        .sum();

    mlp.zero_grad();
    loss.backward();

    println!("loss = {:.6}", loss.data());
    for (pred, target) in predictions.iter().zip(ys.iter()) {
        println!("  prediction {:+.6} target {:+.1}", pred.data(), target);
    }

    let grad_norm = mlp
        .parameters()
        .iter()
        .map(|p| p.grad() * p.grad())
        .sum::<f64>()
        .sqrt();
    println!("gradient L2 norm over parameters = {:.6}", grad_norm);
    for (name, param) in mlp.named_parameters().iter().take(5) {
        println!("  {:<24} data {:+.6} grad {:+.6}", name, param.data(), param.grad());
    }
    Ok(())
}
