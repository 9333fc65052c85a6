//! # vanilla-mc: Vanilla European Options, Closed Form and Monte Carlo
//!
//! Two independent pricing tools for vanilla European options:
//!
//! - **Closed forms**: Black-Scholes time value, price and discounted price
//!   on scalars, plus element-wise versions over `ndarray` vectors
//! - **Monte Carlo**: a path engine that discretizes any caller-supplied
//!   diffusion model with a multiplicative Euler-Maruyama scheme on a
//!   daily grid and keeps the full path history
//!
//! The closed forms are typically used as the benchmark for the simulation.
//!
//! ## Quick Start
//!
//! ```rust
//! use vanilla_mc::analytics::closed_forms::bs_price;
//! use vanilla_mc::mc::mc_engine::{McConfig, McEngine};
//! use vanilla_mc::models::gbm::BlackScholesModel;
//!
//! let price = bs_price(100.0, 100.0, 0.2, 1.0, true);
//! assert!((price - 7.9656).abs() < 1e-4);
//!
//! let model = BlackScholesModel::new(0.01, 0.2);
//! let config = McConfig { seed: Some(42), ..Default::default() };
//! let mut engine = McEngine::with_config(&model, config).expect("Valid configuration");
//! engine.run_simulation(100.0, 1.0, 1_000).expect("Valid arguments");
//!
//! let paths = engine.get_path().expect("Simulation has run");
//! assert_eq!(paths.dim(), (1_000, 366));
//! ```

// Module declarations
pub mod analytics;
pub mod error;
pub mod math_utils;
pub mod mc;
pub mod models;
pub mod output;
pub mod rng;
pub mod solvers;

// Re-export commonly used types for convenience
pub use error::{SdeError, SdeResult};
pub use mc::mc_engine::{McConfig, McEngine, McEstimate};
pub use mc::payoffs::VanillaPayoff;
pub use models::model::DiffusionModel;
