pub mod backprop;

pub use backprop::run_epoch;
