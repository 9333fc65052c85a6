// src/mc/mc_engine.rs
//! Monte Carlo path engine for a single underlying
//!
//! # Math Framework
//!
//! Simulates a caller-supplied diffusion
//! ```text
//! dS_t / S_t = μ(t, S_t) dt + σ(t, S_t) dW_t
//! ```
//! on a daily grid with the multiplicative Euler-Maruyama scheme
//! ```text
//! S_i = S_{i-1} * (1 + μ(t_i, S_{i-1}) Δt + σ(t_i, S_{i-1}) ΔW_i),   t_i = i Δt
//! ```
//! where `nb_steps = ⌊T * steps_per_year⌋ + 1` dates are stored (date 0
//! included) and `Δt = T / nb_steps`.
//!
//! The full history is kept as a `[path, step]` matrix, row-major, so each
//! path's dates are contiguous. Every call to `run_simulation` replaces it.
//!
//! Steps are strictly sequential. Within one step every path only depends
//! on its own previous spot, so the update can run on the rayon pool
//! (`McConfig::parallel`); the model itself is always queried from the
//! calling thread.

use crate::error::{validation::*, SdeError, SdeResult};
use crate::mc::payoffs::VanillaPayoff;
use crate::models::model::DiffusionModel;
use crate::rng;
use crate::solvers::euler_maruyama::EulerMaruyama;
use ndarray::{Array1, Array2, ArrayView1, ArrayView2};
use rand::rngs::StdRng;
use tracing::{debug, debug_span, warn};

/// Daily grid
pub const DAYS_PER_YEAR: f64 = 365.0;

#[derive(Debug, Clone, PartialEq)]
pub struct McConfig {
    /// Seed for the normal draws, entropy-seeded when `None`
    pub seed: Option<u64>,
    pub steps_per_year: f64,
    /// Update paths of one step on the rayon pool
    pub parallel: bool,
}

impl McConfig {
    /// Validate the Monte Carlo configuration
    pub fn validate(&self) -> SdeResult<()> {
        validate_positive("steps_per_year", self.steps_per_year).map_err(|e| match e {
            SdeError::InvalidArgument { parameter, reason } => SdeError::InvalidConfiguration {
                field: parameter,
                reason,
            },
            other => other,
        })
    }
}

impl Default for McConfig {
    fn default() -> Self {
        McConfig {
            seed: None,
            steps_per_year: DAYS_PER_YEAR,
            parallel: false,
        }
    }
}

/// Discounted Monte Carlo price with its sampling error
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct McEstimate {
    pub price: f64,
    /// Variance of the estimator (sample variance / paths)
    pub variance: f64,
    pub std_error: f64,
    pub nb_paths: usize,
}

/// Path simulator driven by a borrowed [`DiffusionModel`]
///
/// The engine never owns the model: the borrow `'m` guarantees the model
/// outlives every simulation run on it.
pub struct McEngine<'m, M: DiffusionModel + ?Sized> {
    model: &'m M,
    config: McConfig,
    rng: StdRng,
    path: Option<Array2<f64>>,
    dt: f64,
}

impl<'m, M: DiffusionModel + ?Sized> McEngine<'m, M> {
    pub fn new(model: &'m M) -> Self {
        let config = McConfig::default();
        let rng = rng::make_rng(config.seed);
        McEngine {
            model,
            config,
            rng,
            path: None,
            dt: 0.0,
        }
    }

    pub fn with_config(model: &'m M, config: McConfig) -> SdeResult<Self> {
        config.validate()?;
        let rng = rng::make_rng(config.seed);
        Ok(McEngine {
            model,
            config,
            rng,
            path: None,
            dt: 0.0,
        })
    }

    pub fn config(&self) -> &McConfig {
        &self.config
    }

    /// Number of stored dates for `maturity`, `⌊maturity * steps_per_year⌋ + 1`
    ///
    /// A zero maturity gives a single date (the initial spot only).
    pub fn nb_steps_for(&self, maturity: f64) -> SdeResult<usize> {
        validate_non_negative("maturity", maturity)?;
        let intervals = (maturity * self.config.steps_per_year).floor();
        if intervals >= MAX_STEPS as f64 {
            return Err(SdeError::InvalidArgument {
                parameter: "maturity".to_string(),
                reason: format!(
                    "{} years at {} steps per year exceeds the maximum grid size ({})",
                    maturity, self.config.steps_per_year, MAX_STEPS
                ),
            });
        }
        let nb_steps = intervals as usize + 1;
        validate_steps(nb_steps)?;
        Ok(nb_steps)
    }

    /// Simulate `nb_paths` paths from `initial_value` up to `maturity`
    ///
    /// # Algorithm
    ///
    /// 1. Build the grid: `nb_steps` dates, `Δt = maturity / nb_steps`
    /// 2. Draw all Brownian increments `√Δt · Z` up front
    /// 3. For each date `i ≥ 1`, query drift and volatility at `t = iΔt` on
    ///    the previous spots and apply one Euler-Maruyama step
    ///
    /// The previous result is discarded as soon as the call starts, so a
    /// failed run leaves no path behind.
    ///
    /// # Errors
    ///
    /// `SdeError::InvalidArgument` for a non-finite `initial_value`, a
    /// negative or non-finite `maturity`, a zero or oversized `nb_paths`,
    /// a grid larger than `MAX_GRID_POINTS` cells, or a model returning a vector whose length differs from the number
    /// of paths. Values returned by the model (NaN, negative) are used as
    /// is; the spot is not floored at zero.
    pub fn run_simulation(
        &mut self,
        initial_value: f64,
        maturity: f64,
        nb_paths: usize,
    ) -> SdeResult<()> {
        self.path = None;

        validate_finite("initial_value", initial_value)?;
        validate_paths(nb_paths)?;
        let nb_steps = self.nb_steps_for(maturity)?;
        validate_grid_size(nb_paths, nb_steps)?;
        let dt = maturity / nb_steps as f64;

        let span = debug_span!("run_simulation", nb_paths, nb_steps, dt);
        let _guard = span.enter();

        let mut path = Array2::<f64>::zeros((nb_paths, nb_steps));
        let mut spot = Array1::from_elem(nb_paths, initial_value);
        path.column_mut(0).assign(&spot);

        let dw = rng::brownian_increments(&mut self.rng, nb_paths, nb_steps, dt);

        for i in 1..nb_steps {
            let t = dt * i as f64;
            let drift = self.model.drift(t, spot.view());
            let vol = self.model.volatility(t, spot.view());
            validate_same_len("drift", nb_paths, drift.len())?;
            validate_same_len("volatility", nb_paths, vol.len())?;

            EulerMaruyama::step(
                spot.view_mut(),
                drift.view(),
                vol.view(),
                dw.column(i),
                dt,
                self.config.parallel,
            );
            path.column_mut(i).assign(&spot);
        }

        let non_positive = spot.iter().filter(|&&s| !(s > 0.0)).count();
        if non_positive > 0 {
            warn!(
                non_positive,
                nb_paths, "terminal spot is non-positive or NaN on some paths"
            );
        }
        debug!("simulation complete");

        self.path = Some(path);
        self.dt = dt;
        Ok(())
    }

    /// Read-only view of the last simulated paths, shape `(nb_paths, nb_steps)`
    pub fn get_path(&self) -> SdeResult<ArrayView2<'_, f64>> {
        self.path
            .as_ref()
            .map(|p| p.view())
            .ok_or(SdeError::SimulationNotRun)
    }

    /// Dates `iΔt` of the last simulation, one per stored column
    pub fn time_grid(&self) -> SdeResult<Array1<f64>> {
        let nb_steps = self.get_path()?.ncols();
        let dt = self.dt;
        Ok(Array1::from_shape_fn(nb_steps, |i| dt * i as f64))
    }

    /// Spot of every path at the last simulated date
    pub fn terminal_spots(&self) -> SdeResult<ArrayView1<'_, f64>> {
        let path = self.path.as_ref().ok_or(SdeError::SimulationNotRun)?;
        Ok(path.column(path.ncols() - 1))
    }

    /// Discounted Monte Carlo price of `payoff` on the terminal spots
    ///
    /// # Formula
    /// ```text
    /// V ≈ (1/N) Σ e^(-rT) payoff(S_T^(p)),   T = payoff.maturity()
    /// ```
    ///
    /// Discounting uses the payoff's maturity; it is up to the caller to
    /// simulate to the matching horizon.
    pub fn price_vanilla(&self, payoff: &VanillaPayoff, rate: f64) -> SdeResult<McEstimate> {
        validate_finite("rate", rate)?;
        let terminal = self.terminal_spots()?;
        let n = terminal.len();
        let df = (-rate * payoff.maturity()).exp();

        let discounted = terminal.mapv(|s_t| df * payoff.intrinsic(s_t));
        let price = discounted.sum() / n as f64;

        let variance = if n > 1 {
            let sample_var = discounted.mapv(|x| (x - price) * (x - price)).sum() / (n - 1) as f64;
            sample_var / n as f64
        } else {
            0.0
        };

        Ok(McEstimate {
            price,
            variance,
            std_error: variance.sqrt(),
            nb_paths: n,
        })
    }
}
