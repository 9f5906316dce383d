use crate::error::CrudgradError;
use crate::nn::layers::Layer;
use crate::nn::module::{check_input_size, prefixed, Module};
use crate::value::Value;
use rand::Rng;

/// A multi-layer perceptron: layers applied in sequence, each feeding the next.
#[derive(Debug, Clone)]
pub struct Mlp {
    layers: Vec<Layer>,
}

impl Mlp {
    /// Creates an MLP with `nin` inputs and one layer per entry of `nouts`.
    ///
    /// Layer `i` maps `sizes[i]` to `sizes[i + 1]` inputs, with
    /// `sizes = [nin] ++ nouts`.
    ///
    /// # Errors
    /// `InvalidArchitecture` if `nouts` is empty or any size is zero.
    pub fn new<R: Rng + ?Sized>(
        nin: usize,
        nouts: &[usize],
        rng: &mut R,
    ) -> Result<Self, CrudgradError> {
        if nouts.is_empty() {
            return Err(CrudgradError::InvalidArchitecture(
                "an MLP needs at least one layer".to_string(),
            ));
        }
        let sizes: Vec<usize> = std::iter::once(nin).chain(nouts.iter().copied()).collect();
        if let Some(pos) = sizes.iter().position(|&s| s == 0) {
            return Err(CrudgradError::InvalidArchitecture(format!(
                "size {} of {:?} is zero",
                pos, sizes
            )));
        }

        let layers: Vec<Layer> = sizes
            .windows(2)
            .map(|pair| Layer::new(pair[0], pair[1], &mut *rng))
            .collect();
        let mlp = Mlp { layers };
        log::debug!(
            "Mlp::new: sizes {:?}, {} parameters",
            sizes,
            mlp.num_parameters()
        );
        Ok(mlp)
    }

    /// Builds an MLP from existing layers.
    ///
    /// # Errors
    /// `InvalidArchitecture` if `layers` is empty or a layer's input count
    /// differs from the previous layer's output count.
    pub fn from_layers(layers: Vec<Layer>) -> Result<Self, CrudgradError> {
        if layers.is_empty() {
            return Err(CrudgradError::InvalidArchitecture(
                "an MLP needs at least one layer".to_string(),
            ));
        }
        for (i, pair) in layers.windows(2).enumerate() {
            if pair[0].nout() != pair[1].nin() {
                return Err(CrudgradError::InvalidArchitecture(format!(
                    "layer {} outputs {} values but layer {} expects {}",
                    i,
                    pair[0].nout(),
                    i + 1,
                    pair[1].nin()
                )));
            }
        }
        Ok(Mlp { layers })
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// `[nin, nout_0, nout_1, ...]`
    pub fn sizes(&self) -> Vec<usize> {
        let nin = self.layers.first().map_or(0, |l| l.nin());
        std::iter::once(nin)
            .chain(self.layers.iter().map(|l| l.nout()))
            .collect()
    }
}

impl Module for Mlp {
    fn forward(&self, input: &[Value]) -> Result<Vec<Value>, CrudgradError> {
        let nin = self.layers.first().map_or(0, |l| l.nin());
        check_input_size(input, nin)?;
        let mut x = input.to_vec();
        for layer in &self.layers {
            x = layer.forward(&x)?;
        }
        Ok(x)
    }

    fn parameters(&self) -> Vec<Value> {
        self.layers.iter().flat_map(|l| l.parameters()).collect()
    }

    fn named_parameters(&self) -> Vec<(String, Value)> {
        self.layers
            .iter()
            .enumerate()
            .flat_map(|(i, l)| prefixed(&format!("layers.{}", i), l.named_parameters()))
            .collect()
    }
}

#[cfg(test)]
#[path = "mlp_test.rs"]
mod tests;
