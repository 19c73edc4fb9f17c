pub mod topology;
pub mod trainer;

mod pass;

pub use pass::{ErrorSignals, ForwardPass};

use crate::matrix::Matrix2;
use crate::prelude::*;
use std::ops::RangeInclusive;

use rand::distributions::{Distribution, Uniform};
use rand::Rng;

use self::topology::Topology;

/// Initial weights are drawn uniformly from this range.
const WEIGHT_RANGE: RangeInclusive<f64> = -0.5..=0.5;
/// Initial biases are drawn uniformly from this range.
const BIAS_RANGE: RangeInclusive<f64> = 0.3..=0.8;

/// Weights and biases feeding one layer from the layer before it.
#[derive(Debug, Clone)]
struct DenseLayer {
    /// One row per neuron, one column per neuron of the previous layer.
    weights: Matrix2<f64>,
    biases: Vec<f64>,
}

impl DenseLayer {
    /// Initializes a layer with uniformly random parameters from `rng`.
    fn init(n_inputs: usize, n_neurons: usize, rng: &mut impl Rng) -> Self {
        let weight_die = Uniform::from(WEIGHT_RANGE);
        let bias_die = Uniform::from(BIAS_RANGE);

        let weights = Matrix2::from_fn(n_neurons, n_inputs, |_, _| weight_die.sample(rng));
        let biases = (0..n_neurons).map(|_| bias_die.sample(rng)).collect();

        Self { weights, biases }
    }

    /// Propagates one activation vector through the layer.
    /// Returns the new activations and their sigmoid derivatives.
    fn forward(&self, input: &[f64]) -> (Vec<f64>, Vec<f64>) {
        let mut activations = Vec::with_capacity(self.biases.len());
        let mut derivatives = Vec::with_capacity(self.biases.len());

        for n in 0..self.biases.len() {
            let mut sum = self.biases[n];
            let row = self.weights.row(n);
            for p in 0..row.len() {
                sum += input[p] * row[p];
            }

            let act = sigmoid(sum);
            activations.push(act);
            derivatives.push(act * (1.0 - act));
        }

        (activations, derivatives)
    }
}

/// A fully connected feedforward network trained online, one example at a
/// time, by backpropagation and gradient descent.
#[derive(Debug, Clone)]
pub struct Network {
    topology: Topology,
    /// `layers[i]` connects layer `i` to layer `i + 1`.
    layers: Vec<DenseLayer>,
}

impl Network {
    /// Creates a network with random parameters from the thread-local
    /// generator.
    pub fn new(layer_sizes: &[usize]) -> Result<Self> {
        Self::with_rng(layer_sizes, &mut rand::thread_rng())
    }

    /// Creates a network drawing its initial parameters from `rng`, so a
    /// seeded generator reproduces the same network.
    pub fn with_rng(layer_sizes: &[usize], rng: &mut impl Rng) -> Result<Self> {
        let topology = Topology::new(layer_sizes)?;

        let mut layers = Vec::with_capacity(topology.num_layers() - 1);
        for pair in topology.sizes().windows(2) {
            layers.push(DenseLayer::init(pair[0], pair[1], rng));
        }

        Ok(Self { topology, layers })
    }

    pub fn topology(&self) -> &Topology {
        &self.topology
    }

    /// Runs a forward pass on `input`, which is copied in as the layer-0
    /// activation. For every later layer each neuron computes
    /// `sigmoid(bias + Σ previous activations * weights)` and caches the
    /// sigmoid derivative alongside.
    ///
    /// Errors with [`Error::DimensionMismatch`] if `input` does not have one
    /// entry per input neuron.
    pub fn calculate(&self, input: &[f64]) -> Result<ForwardPass> {
        let expected = self.topology.input_size();
        if input.len() != expected {
            return Err(Error::DimensionMismatch {
                expected,
                actual: input.len(),
            });
        }

        let mut activations = Vec::with_capacity(self.topology.num_layers());
        let mut derivatives = Vec::with_capacity(self.layers.len());

        activations.push(input.to_vec());
        for (l, layer) in self.layers.iter().enumerate() {
            let (act, dx) = layer.forward(&activations[l]);
            activations.push(act);
            derivatives.push(dx);
        }

        Ok(ForwardPass {
            activations,
            derivatives,
        })
    }

    /// Propagates the output error of `pass` back towards the input,
    /// producing one error signal per neuron. The output layer's signal is
    /// `(activation - target) * derivative`; every hidden layer's signal is
    /// its derivative times the weighted signals of the layer after it.
    /// Layer 0 receives no signal.
    ///
    /// The target is not validated here; that happens one level up, in
    /// [`Network::train`].
    ///
    /// # Panics
    /// Panics if `pass` came from a network of a different shape, or if
    /// `target` has fewer entries than the output layer. Entries beyond the
    /// output layer are ignored.
    pub fn backprop_error(&self, pass: &ForwardPass, target: &[f64]) -> ErrorSignals {
        let mut signals: Vec<Vec<f64>> = self
            .layers
            .iter()
            .map(|layer| vec![0.0; layer.biases.len()])
            .collect();
        let last = signals.len() - 1;

        for n in 0..signals[last].len() {
            signals[last][n] =
                (pass.activations[last + 1][n] - target[n]) * pass.derivatives[last][n];
        }

        // i -- connection layer
        // n -- current neuron
        // m -- neuron one layer after
        for i in (0..last).rev() {
            for n in 0..signals[i].len() {
                let mut sum = 0.0;
                for m in 0..signals[i + 1].len() {
                    sum += self.layers[i + 1].weights[(m, n)] * signals[i + 1][m];
                }

                signals[i][n] = sum * pass.derivatives[i][n];
            }
        }

        ErrorSignals { signals }
    }

    /// Applies one gradient-descent step scaled by `eta`. Every update reads
    /// only the pre-update activations of `pass`, so the order of updates
    /// within the step cannot change the result.
    ///
    /// # Panics
    /// Panics if `pass` or `errors` came from a network of a different shape.
    pub fn update_weights(&mut self, pass: &ForwardPass, errors: &ErrorSignals, eta: f64) {
        // i -- connection layer
        // n -- current neuron
        // p -- previous neuron
        for (i, layer) in self.layers.iter_mut().enumerate() {
            for n in 0..layer.biases.len() {
                let delta = eta * errors.signals[i][n];

                let row = layer.weights.row_mut(n);
                for p in 0..row.len() {
                    row[p] -= delta * pass.activations[i][p];
                }

                layer.biases[n] -= delta;
            }
        }
    }

    /// One online training step: forward pass on `input`, backward pass
    /// against `target`, gradient-descent update with `eta`, in that order.
    ///
    /// Errors with [`Error::DimensionMismatch`] if either vector disagrees
    /// with the topology; no parameter is touched in that case.
    pub fn train(&mut self, input: &[f64], target: &[f64], eta: f64) -> Result<()> {
        let expected = self.topology.output_size();
        if target.len() != expected {
            return Err(Error::DimensionMismatch {
                expected,
                actual: target.len(),
            });
        }

        let pass = self.calculate(input)?;
        let errors = self.backprop_error(&pass, target);
        self.update_weights(&pass, &errors, eta);

        Ok(())
    }

    /// Mean squared error of the current prediction for one (input, target)
    /// pair.
    pub fn mean_squared_error(&self, input: &[f64], target: &[f64]) -> Result<f64> {
        let expected = self.topology.output_size();
        if target.len() != expected {
            return Err(Error::DimensionMismatch {
                expected,
                actual: target.len(),
            });
        }

        let pass = self.calculate(input)?;

        let mut sum = 0.0;
        for (out, t) in pass.output().iter().zip(target) {
            let diff = out - t;
            sum += diff * diff;
        }

        Ok(sum / target.len() as f64)
    }
}

/// The logistic function, mapping any real into (0, 1).
fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}
