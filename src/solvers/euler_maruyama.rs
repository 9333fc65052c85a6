// src/solvers/euler_maruyama.rs
//! Euler-Maruyama Scheme for Multiplicative SDEs
//!
//! # Mathematical Framework
//!
//! For a price process written in relative terms:
//! ```text
//! dS_t / S_t = μ(t, S_t) dt + σ(t, S_t) dW_t
//! ```
//!
//! The Euler-Maruyama scheme gives:
//! ```text
//! S_{n+1} = S_n * (1 + μ(t_n, S_n) Δt + σ(t_n, S_n) ΔW_n)
//! ```
//!
//! Where `ΔW_n ~ N(0, Δt)` are independent increments, one per path.
//!
//! # Convergence Properties
//!
//! - **Strong convergence**: Order 0.5 in step size
//! - **Weak convergence**: Order 1.0 in step size
//! - **Positivity**: Not preserved. A shock with `μΔt + σΔW < -1` takes the
//!   spot below zero and the scheme carries on from there.

use ndarray::{ArrayView1, ArrayViewMut1, Zip};

/// Euler-Maruyama numerical scheme for multiplicative diffusions
pub struct EulerMaruyama;

impl EulerMaruyama {
    /// Advance every path by one step, in place
    ///
    /// # Parameters
    /// - `spot`: Spot of each path at `t_n`, overwritten with `t_{n+1}`
    /// - `drift`: `μ(t, S_n)` per path
    /// - `vol`: `σ(t, S_n)` per path
    /// - `dw`: Brownian increment per path, already scaled by `√Δt`
    /// - `dt`: Time step size
    /// - `parallel`: Update paths on the rayon pool
    ///
    /// All views must have the same length.
    pub fn step(
        spot: ArrayViewMut1<'_, f64>,
        drift: ArrayView1<'_, f64>,
        vol: ArrayView1<'_, f64>,
        dw: ArrayView1<'_, f64>,
        dt: f64,
        parallel: bool,
    ) {
        let zip = Zip::from(spot).and(drift).and(vol).and(dw);
        let update = |s: &mut f64, &mu: &f64, &sigma: &f64, &dw: &f64| {
            *s *= 1.0 + mu * dt + dw * sigma;
        };

        if parallel {
            zip.par_for_each(update);
        } else {
            zip.for_each(update);
        }
    }
}
