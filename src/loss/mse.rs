use crate::error::Result;
use crate::math::matrix::Matrix;

pub struct MseLoss;

impl MseLoss {
    /// Scalar MSE over every entry: mean((predicted - expected)²)
    pub fn loss(predicted: &Matrix, expected: &Matrix) -> Result<f64> {
        let diff = predicted.sub(expected)?;
        let n = (diff.rows * diff.cols) as f64;
        if n == 0.0 {
            return Ok(0.0);
        }
        Ok(diff.data.iter().flatten().map(|d| d * d).sum::<f64>() / n)
    }

    /// Error signal used by backprop: expected - predicted.
    ///
    /// The sign makes the parameter update an addition.
    pub fn error(predicted: &Matrix, expected: &Matrix) -> Result<Matrix> {
        expected.sub(predicted)
    }
}
