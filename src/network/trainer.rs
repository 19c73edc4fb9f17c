use crate::network::Network;
use crate::prelude::*;

/// Drives repeated online training passes over a fixed set of samples.
pub struct Trainer {
    iterations: usize,
    iterations_per_log: Option<usize>,
    eta: f64,
}

impl Trainer {
    pub fn new(iterations: usize, eta: f64) -> Self {
        Self {
            iterations,
            iterations_per_log: None,
            eta,
        }
    }

    /// Prints the mean error every `iterations_per_log` iterations. `None`
    /// turns logging off.
    pub fn with_log(mut self, iterations_per_log: Option<usize>) -> Self {
        self.iterations_per_log = iterations_per_log;
        self
    }

    pub fn set_eta(&mut self, eta: f64) {
        self.eta = eta;
    }

    pub fn set_iterations(&mut self, iterations: usize) {
        self.iterations = iterations;
    }

    /// Presents every (input, target) pair once per iteration, updating the
    /// parameters after each pair. Strictly online: no averaging of gradients
    /// across pairs.
    ///
    /// Errors with [`Error::DimensionMismatch`] if the sample counts differ
    /// or any pair disagrees with the network's topology.
    pub fn train(
        &self,
        net: &mut Network,
        inputs: &[Vec<f64>],
        targets: &[Vec<f64>],
    ) -> Result<()> {
        if inputs.len() != targets.len() {
            return Err(Error::DimensionMismatch {
                expected: inputs.len(),
                actual: targets.len(),
            });
        }

        for i in 0..self.iterations {
            for (input, target) in inputs.iter().zip(targets) {
                net.train(input, target, self.eta)?;
            }

            if self.iterations_per_log.is_some_and(|ipl| i % ipl == 0) {
                let mse = mean_error(net, inputs, targets)?;
                println!("Iteration {i} error: {mse}");
            }
        }

        Ok(())
    }
}

/// Mean squared error averaged over a whole sample set.
fn mean_error(net: &Network, inputs: &[Vec<f64>], targets: &[Vec<f64>]) -> Result<f64> {
    let mut sum = 0.0;
    for (input, target) in inputs.iter().zip(targets) {
        sum += net.mean_squared_error(input, target)?;
    }

    Ok(sum / inputs.len() as f64)
}
