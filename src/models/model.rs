// src/models/model.rs
use ndarray::{Array1, ArrayView1};

/// Diffusion of a single underlying, `dS/S = μ(t,S) dt + σ(t,S) dW`
///
/// Both coefficients are queried once per time step with the spot of every
/// simulated path. The returned vectors must have the same length as
/// `spot`, entry `i` belonging to `spot[i]`. The engine makes no assumption
/// on sign, bounds or smoothness of either output.
///
/// Implementations are read-only: they must not keep references to the
/// spot vector beyond the call.
pub trait DiffusionModel {
    /// Relative drift `μ(t, S)` per path
    fn drift(&self, time: f64, spot: ArrayView1<'_, f64>) -> Array1<f64>;

    /// Relative volatility `σ(t, S)` per path
    fn volatility(&self, time: f64, spot: ArrayView1<'_, f64>) -> Array1<f64>;
}
