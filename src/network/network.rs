use rand::{rngs::StdRng, Rng, SeedableRng};
use tracing::{debug, info};

use crate::{error::{Error, Result}, math::matrix::Matrix, train::backprop::run_epoch};
use crate::network::{config::NetConfig, params::Parameters};

const LOG_EVERY: usize = 1000;

/// Single-hidden-layer sigmoid network trained by full-batch backprop.
///
/// Starts untrained. `train` replaces the parameters wholesale, and only
/// once every epoch has completed.
#[derive(Debug, Clone)]
pub struct Network {
    config: NetConfig,
    params: Option<Parameters>,
}

impl Network {
    pub fn new(config: NetConfig) -> Result<Network> {
        config.validate()?;
        Ok(Network { config, params: None })
    }

    pub fn config(&self) -> &NetConfig {
        &self.config
    }

    pub fn parameters(&self) -> Option<&Parameters> {
        self.params.as_ref()
    }

    pub fn is_trained(&self) -> bool {
        self.params.is_some()
    }

    /// Installs known parameters, bypassing random initialisation.
    pub fn set_parameters(&mut self, params: Parameters) -> Result<()> {
        params.check_shapes(&self.config)?;
        self.params = Some(params);
        Ok(())
    }

    /// Trains from scratch on `x` (n × inputs) against `y` (n × outputs).
    ///
    /// Parameters are re-drawn from U[0, 1) using `rng`, then updated for
    /// `num_epochs` full-batch epochs. On error the previous parameters
    /// are left in place.
    pub fn train<R: Rng + ?Sized>(&mut self, x: &Matrix, y: &Matrix, rng: &mut R) -> Result<()> {
        self.check_training_data(x, y)?;

        let mut params = Parameters::random(&self.config, rng);
        let epochs = self.config.num_epochs;
        let learning_rate = self.config.learning_rate;
        info!(samples = x.rows, epochs, learning_rate, "training started");

        let mut loss = 0.0;
        for epoch in 0..epochs {
            loss = run_epoch(&mut params, x, y, learning_rate)?;
            if epoch % LOG_EVERY == 0 {
                debug!(epoch, loss, "epoch complete");
            }
        }

        info!(last_epoch_loss = loss, "training finished");
        self.params = Some(params);
        Ok(())
    }

    /// `train` with a `StdRng` seeded from `seed`.
    pub fn train_with_seed(&mut self, x: &Matrix, y: &Matrix, seed: u64) -> Result<()> {
        let mut rng = StdRng::seed_from_u64(seed);
        self.train(x, y, &mut rng)
    }

    /// Forward pass with the trained parameters. Returns (n × outputs).
    pub fn predict(&self, x: &Matrix) -> Result<Matrix> {
        let params = self.params.as_ref().ok_or(Error::Untrained)?;
        Ok(params.forward(x)?.output)
    }

    fn check_training_data(&self, x: &Matrix, y: &Matrix) -> Result<()> {
        if x.cols != self.config.input_neurons {
            return Err(Error::ShapeMismatch {
                op: "train inputs",
                left: x.shape(),
                right: (x.rows, self.config.input_neurons),
            });
        }
        if y.cols != self.config.output_neurons {
            return Err(Error::ShapeMismatch {
                op: "train targets",
                left: y.shape(),
                right: (y.rows, self.config.output_neurons),
            });
        }
        if x.rows != y.rows {
            return Err(Error::ShapeMismatch {
                op: "train targets",
                left: y.shape(),
                right: (x.rows, self.config.output_neurons),
            });
        }
        if x.rows == 0 {
            return Err(Error::InvalidData("training set is empty".to_string()));
        }
        Ok(())
    }
}
