use crate::error::CrudgradError;
use crate::nn::layers::neuron::Neuron;
use crate::nn::module::{check_input_size, prefixed, Module};
use crate::value::Value;
use rand::Rng;

/// A fully connected layer: `nout` independent neurons over the same inputs.
#[derive(Debug, Clone)]
pub struct Layer {
    neurons: Vec<Neuron>,
    nin: usize,
}

impl Layer {
    /// Creates a layer of `nout` randomly initialised neurons with `nin` inputs each.
    pub fn new<R: Rng + ?Sized>(nin: usize, nout: usize, rng: &mut R) -> Self {
        let neurons = (0..nout).map(|_| Neuron::new(nin, &mut *rng)).collect();
        Layer { neurons, nin }
    }

    /// Builds a layer from existing neurons.
    ///
    /// # Errors
    /// `InvalidArchitecture` if `neurons` is empty or the neurons disagree on
    /// their number of inputs.
    pub fn from_neurons(neurons: Vec<Neuron>) -> Result<Self, CrudgradError> {
        let nin = match neurons.first() {
            Some(first) => first.nin(),
            None => {
                return Err(CrudgradError::InvalidArchitecture(
                    "a layer needs at least one neuron".to_string(),
                ))
            }
        };
        if let Some(pos) = neurons.iter().position(|n| n.nin() != nin) {
            return Err(CrudgradError::InvalidArchitecture(format!(
                "neuron {} expects {} inputs, neuron 0 expects {}",
                pos,
                neurons[pos].nin(),
                nin
            )));
        }
        Ok(Layer { neurons, nin })
    }

    pub fn nin(&self) -> usize {
        self.nin
    }

    pub fn nout(&self) -> usize {
        self.neurons.len()
    }

    pub fn neurons(&self) -> &[Neuron] {
        &self.neurons
    }
}

impl Module for Layer {
    /// One output per neuron, in neuron order.
    fn forward(&self, input: &[Value]) -> Result<Vec<Value>, CrudgradError> {
        check_input_size(input, self.nin)?;
        self.neurons.iter().map(|n| n.activate(input)).collect()
    }

    fn parameters(&self) -> Vec<Value> {
        self.neurons.iter().flat_map(|n| n.parameters()).collect()
    }

    fn named_parameters(&self) -> Vec<(String, Value)> {
        self.neurons
            .iter()
            .enumerate()
            .flat_map(|(i, n)| prefixed(&format!("neurons.{}", i), n.named_parameters()))
            .collect()
    }
}

#[cfg(test)]
#[path = "layer_test.rs"]
mod tests;
