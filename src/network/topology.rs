use crate::prelude::*;

/// Ordered layer sizes of a fully connected network.
///
/// Validated once at construction: a topology always has at least an input
/// and an output layer, and no layer is empty.
#[derive(Debug, Clone, PartialEq)]
pub struct Topology {
    sizes: Vec<usize>,
}

impl Topology {
    pub fn new(sizes: &[usize]) -> Result<Self> {
        if sizes.len() < 2 || sizes.iter().any(|&size| size == 0) {
            return Err(Error::InvalidTopology);
        }

        Ok(Self {
            sizes: sizes.to_vec(),
        })
    }

    /// Size of layer 0, the layer fed by the caller.
    pub fn input_size(&self) -> usize {
        self.sizes[0]
    }

    /// Size of the last layer, the layer read by the caller.
    pub fn output_size(&self) -> usize {
        self.sizes[self.sizes.len() - 1]
    }

    /// Total number of layers, counting the input layer.
    pub fn num_layers(&self) -> usize {
        self.sizes.len()
    }

    pub fn sizes(&self) -> &[usize] {
        &self.sizes
    }
}
