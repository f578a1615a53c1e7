use serde::{Serialize, Deserialize};

use crate::error::{Error, Result};

/// Hyperparameters for a single-hidden-layer network.
///
/// Fields:
/// - `input_neurons`  — width of every input row
/// - `hidden_neurons` — number of sigmoid units in the hidden layer
/// - `output_neurons` — width of every target / prediction row
/// - `num_epochs`     — full-batch passes made by one `train` call
/// - `learning_rate`  — step size applied to every gradient
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetConfig {
    pub input_neurons: usize,
    pub hidden_neurons: usize,
    pub output_neurons: usize,
    pub num_epochs: usize,
    pub learning_rate: f64,
}

impl NetConfig {
    pub fn new(
        input_neurons: usize,
        hidden_neurons: usize,
        output_neurons: usize,
        num_epochs: usize,
        learning_rate: f64,
    ) -> Self {
        NetConfig {
            input_neurons,
            hidden_neurons,
            output_neurons,
            num_epochs,
            learning_rate,
        }
    }

    /// Parses and validates a config from JSON.
    pub fn from_json(json: &str) -> Result<NetConfig> {
        let config: NetConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let counts = [
            ("input_neurons", self.input_neurons),
            ("hidden_neurons", self.hidden_neurons),
            ("output_neurons", self.output_neurons),
            ("num_epochs", self.num_epochs),
        ];
        if let Some((name, _)) = counts.iter().find(|(_, n)| *n == 0) {
            return Err(Error::InvalidConfig(format!("{name} must be at least 1")));
        }
        if !self.learning_rate.is_finite() || self.learning_rate <= 0.0 {
            return Err(Error::InvalidConfig(format!(
                "learning_rate must be a positive finite number, got {}",
                self.learning_rate
            )));
        }
        Ok(())
    }
}
