// src/rng.rs
//! Random Number Generation for Monte Carlo Simulations
//!
//! The engine only needs i.i.d. standard normal draws. They come from
//! `rand_distr::StandardNormal` sampled through a `StdRng`, which is either
//! seeded from a `u64` (reproducible runs) or from OS entropy.
//!
//! # Brownian increments
//!
//! For a grid with step `dt` the increments are
//! ```text
//! ΔW[p, i] = √dt · Z[p, i],   Z ~ N(0,1) i.i.d.
//! ```
//! stored path-major: row `p` holds every increment of path `p`.

use ndarray::Array2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, StandardNormal};

pub fn seed_rng_from_u64(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Seeded generator when `seed` is given, entropy-seeded otherwise
pub fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => seed_rng_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

pub fn get_normal_draw<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    StandardNormal.sample(rng)
}

/// Draw a `[nb_paths, nb_steps]` matrix of Brownian increments scaled by `√dt`
pub fn brownian_increments<R: Rng + ?Sized>(
    rng: &mut R,
    nb_paths: usize,
    nb_steps: usize,
    dt: f64,
) -> Array2<f64> {
    let sqrt_dt = dt.sqrt();
    Array2::from_shape_simple_fn((nb_paths, nb_steps), || sqrt_dt * get_normal_draw(rng))
}
