use crate::error::CrudgradError;
use crate::nn::init::{default_parameter, default_parameters};
use crate::nn::module::{check_input_size, Module};
use crate::value::Value;
use rand::Rng;

/// A single tanh unit: `tanh(b + w_0 x_0 + w_1 x_1 + ...)`.
#[derive(Debug, Clone)]
pub struct Neuron {
    weights: Vec<Value>,
    bias: Value,
}

impl Neuron {
    /// Creates a neuron with `nin` weights and one bias, all drawn uniformly
    /// from `[-1, 1)`.
    pub fn new<R: Rng + ?Sized>(nin: usize, rng: &mut R) -> Self {
        let weights = default_parameters(rng, nin);
        let bias = default_parameter(rng);
        Neuron { weights, bias }
    }

    /// Creates a neuron with the given parameter values.
    pub fn from_parameters(weights: &[f64], bias: f64) -> Self {
        Neuron {
            weights: Value::from_slice(weights),
            bias: Value::new(bias),
        }
    }

    /// Number of inputs this neuron expects.
    pub fn nin(&self) -> usize {
        self.weights.len()
    }

    pub fn weights(&self) -> &[Value] {
        &self.weights
    }

    pub fn bias(&self) -> &Value {
        &self.bias
    }

    /// Computes the neuron's output for one input vector.
    ///
    /// The weighted sum starts from the bias and adds the products left to
    /// right, so the graph (and every gradient) is fixed by input order.
    pub fn activate(&self, input: &[Value]) -> Result<Value, CrudgradError> {
        check_input_size(input, self.nin())?;
        let act = self
            .weights
            .iter()
            .zip(input)
            .fold(self.bias.clone(), |acc, (w, x)| acc + w * x);
        Ok(act.tanh())
    }
}

impl Module for Neuron {
    fn forward(&self, input: &[Value]) -> Result<Vec<Value>, CrudgradError> {
        Ok(vec![self.activate(input)?])
    }

    /// Weights first, bias last.
    fn parameters(&self) -> Vec<Value> {
        let mut params = self.weights.clone();
        params.push(self.bias.clone());
        params
    }

    fn named_parameters(&self) -> Vec<(String, Value)> {
        let mut named: Vec<(String, Value)> = self
            .weights
            .iter()
            .enumerate()
            .map(|(i, w)| (format!("w.{}", i), w.clone()))
            .collect();
        named.push(("b".to_string(), self.bias.clone()));
        named
    }
}

#[cfg(test)]
#[path = "neuron_test.rs"]
mod tests;
