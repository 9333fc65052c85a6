// tests/solver_convergence_test.rs
use ndarray::{Array1, ArrayView1};
use vanilla_mc::analytics::closed_forms::bs_discounted_price;
use vanilla_mc::mc::mc_engine::{McConfig, McEngine};
use vanilla_mc::models::gbm::BlackScholesModel;
use vanilla_mc::{DiffusionModel, VanillaPayoff};

// Mean-reverting drift in relative terms: μ(S) = θ(m/S - 1), no noise
struct MeanReverting {
    theta: f64,
    level: f64,
}

impl DiffusionModel for MeanReverting {
    fn drift(&self, _time: f64, spot: ArrayView1<'_, f64>) -> Array1<f64> {
        spot.mapv(|s| self.theta * (self.level / s - 1.0))
    }

    fn volatility(&self, _time: f64, spot: ArrayView1<'_, f64>) -> Array1<f64> {
        Array1::zeros(spot.len())
    }
}

fn terminal_with_grid(model: &dyn DiffusionModel, s0: f64, t: f64, steps_per_year: f64) -> (f64, f64) {
    let cfg = McConfig {
        seed: Some(7),
        steps_per_year,
        ..Default::default()
    };
    let mut engine = McEngine::with_config(model, cfg).expect("Valid configuration");
    engine.run_simulation(s0, t, 1).expect("Valid arguments");
    let grid = engine.time_grid().expect("Simulation has run");
    let t_last = grid[grid.len() - 1];
    let s_t = engine.terminal_spots().expect("Simulation has run")[0];
    (t_last, s_t)
}

#[test]
fn test_constant_drift_converges_to_exponential() {
    let r = 0.05;
    let s0 = 100.0;
    let t_end = 1.0;
    let model = BlackScholesModel::new(r, 0.0);

    let mut errors = Vec::new();
    for &steps_per_year in &[12.0, 52.0, 365.0, 3650.0] {
        let (t_last, s_t) = terminal_with_grid(&model, s0, t_end, steps_per_year);
        let exact = s0 * (r * t_end).exp();
        let abs_error = (s_t - exact).abs();
        println!(
            "steps/year {:>6}: S_T = {:.8}, exact = {:.8}, last date {:.6}, error {:.3e}",
            steps_per_year, s_t, exact, t_last, abs_error
        );
        errors.push(abs_error);
    }

    for i in 0..(errors.len() - 1) {
        assert!(
            errors[i] > errors[i + 1],
            "Euler-Maruyama did not converge as expected at refinement {}",
            i
        );
    }
    assert!(
        *errors.last().unwrap() / (s0 * (r * t_end).exp()) < 1e-4,
        "Final relative error ({}) is too high",
        errors.last().unwrap()
    );
}

#[test]
fn test_constant_drift_matches_discrete_compounding() {
    // With σ = 0 the scheme is exact compounding at rate r Δt per step
    let r = 0.03;
    let s0 = 50.0;
    let model = BlackScholesModel::new(r, 0.0);

    let cfg = McConfig {
        seed: Some(1),
        ..Default::default()
    };
    let mut engine = McEngine::with_config(&model, cfg).expect("Valid configuration");
    engine.run_simulation(s0, 2.0, 3).expect("Valid arguments");

    let nb_steps = 731;
    let dt = 2.0 / nb_steps as f64;
    let paths = engine.get_path().expect("Simulation has run");
    assert_eq!(paths.ncols(), nb_steps);

    let mut expected = s0;
    for i in 1..nb_steps {
        expected *= 1.0 + r * dt;
        for p in 0..3 {
            let rel = (paths[[p, i]] - expected).abs() / expected;
            assert!(rel < 1e-12, "path {} step {}: {} vs {}", p, i, paths[[p, i]], expected);
        }
    }
}

#[test]
fn test_mean_reverting_drift_approaches_level() {
    let model = MeanReverting {
        theta: 2.0,
        level: 80.0,
    };
    let (_, s_t) = terminal_with_grid(&model, 120.0, 5.0, 365.0);
    println!("Mean-reverting terminal spot: {}", s_t);
    assert!((s_t - 80.0).abs() < 0.01, "terminal spot {} far from level 80", s_t);
}

#[test]
fn test_gbm_mc_vs_analytic() {
    let s0 = 100.0;
    let k = 100.0;
    let r = 0.05;
    let sigma = 0.2;
    let t = 1.0;
    let n_paths = 10_000;

    let model = BlackScholesModel::new(r, sigma);
    let cfg = McConfig {
        seed: Some(42),
        parallel: true,
        ..Default::default()
    };
    let mut engine = McEngine::with_config(&model, cfg).expect("Valid configuration");
    engine.run_simulation(s0, t, n_paths).expect("Valid arguments");

    // The last stored date is (nb_steps - 1) Δt, slightly before t
    let grid = engine.time_grid().expect("Simulation has run");
    let horizon = grid[grid.len() - 1];

    let payoff = VanillaPayoff::call(k, horizon);
    let estimate = engine.price_vanilla(&payoff, r).expect("Simulation has run");
    let analytic = bs_discounted_price(s0, k, sigma, horizon, r, true);

    let abs_error = (estimate.price - analytic).abs();
    println!("\nMC Price: {:.6} ± {:.6}", estimate.price, estimate.std_error);
    println!("Analytic Price: {:.6}", analytic);
    println!("Absolute Error: {:.6}", abs_error);

    assert_eq!(estimate.nb_paths, n_paths);
    assert!(
        abs_error < 4.0 * estimate.std_error + 0.02,
        "MC price {} outside 4 standard errors ({}) of analytic {}",
        estimate.price,
        estimate.std_error,
        analytic
    );
}
