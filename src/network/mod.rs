pub mod config;
pub mod network;
pub mod params;

pub use config::NetConfig;
pub use network::Network;
pub use params::{ForwardPass, Parameters};
