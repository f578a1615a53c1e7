use crate::{activation::activation::Sigmoid, error::Result, loss::mse::MseLoss};
use crate::math::matrix::Matrix;
use crate::network::params::Parameters;

/// Runs one full-batch epoch over `x`/`y`, updating `params` in place.
///
/// All gradients are derived from the parameter values at the start of the
/// epoch. Returns the mean squared error of the forward pass made with those
/// starting values.
pub fn run_epoch(
    params: &mut Parameters,
    x: &Matrix,
    y: &Matrix,
    learning_rate: f64,
) -> Result<f64> {
    // ── Forward ──────────────────────────────────────────────────────────
    let pass = params.forward(x)?;
    let loss = MseLoss::loss(&pass.output, y)?;

    // ── Backward ─────────────────────────────────────────────────────────
    let error = MseLoss::error(&pass.output, y)?;
    let slope_output = Sigmoid::slope(&pass.output);
    let slope_hidden = Sigmoid::slope(&pass.hidden);

    let d_output = error.hadamard(&slope_output)?;
    let error_hidden = d_output.dot(&params.output_weights.transpose())?;
    let d_hidden = error_hidden.hadamard(&slope_hidden)?;

    // ── Update ───────────────────────────────────────────────────────────
    let output_weights_step = pass.hidden.transpose().dot(&d_output)?.scale(learning_rate);
    params.output_weights = params.output_weights.add(&output_weights_step)?;
    params.output_bias = params.output_bias.add(&d_output.sum_rows().scale(learning_rate))?;

    let hidden_weights_step = x.transpose().dot(&d_hidden)?.scale(learning_rate);
    params.hidden_weights = params.hidden_weights.add(&hidden_weights_step)?;
    params.hidden_bias = params.hidden_bias.add(&d_hidden.sum_rows().scale(learning_rate))?;

    Ok(loss)
}
