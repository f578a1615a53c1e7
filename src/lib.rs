pub mod error;
pub mod math;
pub mod activation;
pub mod loss;
pub mod network;
pub mod train;
pub mod schema;

// Convenience re-exports
pub use error::{Error, Result};
pub use math::matrix::Matrix;
pub use activation::activation::Sigmoid;
pub use loss::mse::MseLoss;
pub use network::{config::NetConfig, network::Network, params::Parameters};
pub use schema::{
    FeatureDefinition, FeatureKind, FeatureValue, InputRecord, OutputDefinition, OutputRecord,
    Schema, TrainingDatum,
};
