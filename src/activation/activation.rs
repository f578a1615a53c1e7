use std::f64::consts::E;

use crate::math::matrix::Matrix;

/// Logistic activation used by both layers of the network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Sigmoid;

impl Sigmoid {
    /// `1 / (1 + e^-x)`
    pub fn function(x: f64) -> f64 {
        1.0 / (1.0 + E.powf(-x))
    }

    /// Derivative expressed through the activation itself: for `s = σ(z)`,
    /// `σ'(z) = s * (1 - s)`. Takes the *activated* value, not `z`.
    pub fn derivative(s: f64) -> f64 {
        s * (1.0 - s)
    }

    pub fn apply(m: &Matrix) -> Matrix {
        m.map(Sigmoid::function)
    }

    /// Slope matrix for an already-activated matrix.
    pub fn slope(activated: &Matrix) -> Matrix {
        activated.map(Sigmoid::derivative)
    }
}
