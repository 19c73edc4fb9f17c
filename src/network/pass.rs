/// Everything one forward pass computed: per-layer activations and their
/// sigmoid derivatives.
///
/// The pass owns its buffers, so it stays readable for as long as the caller
/// keeps it; later passes over the same network cannot invalidate it.
#[derive(Debug, Clone)]
pub struct ForwardPass {
    /// `activations[l][n]`; layer 0 holds a copy of the input.
    pub(crate) activations: Vec<Vec<f64>>,
    /// `derivatives[i]` belongs to layer `i + 1`; the input layer has none.
    pub(crate) derivatives: Vec<Vec<f64>>,
}

impl ForwardPass {
    /// The network's prediction: the last layer's activations.
    pub fn output(&self) -> &[f64] {
        &self.activations[self.activations.len() - 1]
    }

    /// Activations of one layer; `activation(0)` is the copied input.
    pub fn activation(&self, layer: usize) -> &[f64] {
        &self.activations[layer]
    }

    /// Sigmoid derivatives of one layer, cached as `a * (1 - a)`.
    ///
    /// # Panics
    /// Panics for layer 0, which has no activation derivative.
    pub fn derivative(&self, layer: usize) -> &[f64] {
        assert!(layer >= 1, "layer 0 has no activation derivative");
        &self.derivatives[layer - 1]
    }
}

/// Per-layer error signals produced by one backward pass.
///
/// Only meaningful together with the [`ForwardPass`] and target they were
/// computed from.
#[derive(Debug, Clone)]
pub struct ErrorSignals {
    /// `signals[i]` belongs to layer `i + 1`; layer 0 receives no signal.
    pub(crate) signals: Vec<Vec<f64>>,
}

impl ErrorSignals {
    /// Error signals of one layer.
    ///
    /// # Panics
    /// Panics for layer 0, which has no incoming weights to attribute error
    /// to.
    pub fn layer(&self, layer: usize) -> &[f64] {
        assert!(layer >= 1, "layer 0 receives no error signal");
        &self.signals[layer - 1]
    }
}
