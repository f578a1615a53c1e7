use rand::Rng;
use serde::{Serialize, Deserialize};

use crate::{activation::activation::Sigmoid, error::{Error, Result}, math::matrix::Matrix};
use crate::network::config::NetConfig;

/// The four trained matrices, always present together.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameters {
    /// (input_neurons × hidden_neurons)
    pub hidden_weights: Matrix,
    /// (1 × hidden_neurons)
    pub hidden_bias: Matrix,
    /// (hidden_neurons × output_neurons)
    pub output_weights: Matrix,
    /// (1 × output_neurons)
    pub output_bias: Matrix,
}

/// Activations kept from one forward pass for the backward pass.
#[derive(Debug, Clone)]
pub struct ForwardPass {
    pub hidden: Matrix,
    pub output: Matrix,
}

impl Parameters {
    /// Every entry drawn independently from U[0, 1).
    pub fn random<R: Rng + ?Sized>(config: &NetConfig, rng: &mut R) -> Parameters {
        Parameters {
            hidden_weights: Matrix::random_uniform(
                config.input_neurons,
                config.hidden_neurons,
                rng,
            ),
            hidden_bias: Matrix::random_uniform(1, config.hidden_neurons, rng),
            output_weights: Matrix::random_uniform(
                config.hidden_neurons,
                config.output_neurons,
                rng,
            ),
            output_bias: Matrix::random_uniform(1, config.output_neurons, rng),
        }
    }

    /// Wraps externally supplied matrices after checking them against `config`.
    pub fn from_matrices(
        config: &NetConfig,
        hidden_weights: Matrix,
        hidden_bias: Matrix,
        output_weights: Matrix,
        output_bias: Matrix,
    ) -> Result<Parameters> {
        let params = Parameters { hidden_weights, hidden_bias, output_weights, output_bias };
        params.check_shapes(config)?;
        Ok(params)
    }

    /// Checks every matrix against `config`, including that its row data
    /// actually has the declared shape.
    pub fn check_shapes(&self, config: &NetConfig) -> Result<()> {
        let (inputs, hidden, outputs) =
            (config.input_neurons, config.hidden_neurons, config.output_neurons);
        let expected = [
            ("hidden_weights", &self.hidden_weights, (inputs, hidden)),
            ("hidden_bias", &self.hidden_bias, (1, hidden)),
            ("output_weights", &self.output_weights, (hidden, outputs)),
            ("output_bias", &self.output_bias, (1, outputs)),
        ];
        for (op, m, shape) in expected {
            m.check_consistent()?;
            if m.shape() != shape {
                return Err(Error::ShapeMismatch { op, left: m.shape(), right: shape });
            }
        }
        Ok(())
    }

    /// `hidden = σ(x·Wh + bh)`, `output = σ(hidden·Wo + bo)`.
    pub fn forward(&self, x: &Matrix) -> Result<ForwardPass> {
        let hidden_pre = x.dot(&self.hidden_weights)?.add_row_broadcast(&self.hidden_bias)?;
        let hidden = Sigmoid::apply(&hidden_pre);

        let output_pre = hidden.dot(&self.output_weights)?.add_row_broadcast(&self.output_bias)?;
        let output = Sigmoid::apply(&output_pre);

        Ok(ForwardPass { hidden, output })
    }
}
