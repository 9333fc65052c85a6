// demos/demo.rs
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use vanilla_mc::analytics::closed_forms::{bs_discounted_price, bs_price};
use vanilla_mc::analytics::vectorize::bs_discounted_price_vec;
use vanilla_mc::math_utils::Timer;
use vanilla_mc::mc::mc_engine::{McConfig, McEngine};
use vanilla_mc::models::gbm::BlackScholesModel;
use vanilla_mc::{output, SdeResult, VanillaPayoff};

fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    if let Err(e) = run_demo_mode() {
        eprintln!("Demo failed: {}", e);
        std::process::exit(1);
    }
}

fn run_demo_mode() -> SdeResult<()> {
    println!("Running vanilla-mc Demo\n");

    let paths = 20_000;
    let s0 = 100.0;
    let k = 100.0;
    let r = 0.01;
    let sigma = 0.2;
    let t = 1.0;

    // --- Closed forms ---
    println!("--- Closed-Form Pricing ---");
    println!("ATM forward call (F=100, K=100, σ=20%, T=1): {:.4}", bs_price(100.0, 100.0, 0.2, 1.0, true));

    let strikes = ndarray::Array1::linspace(80.0, 120.0, 5);
    let n = strikes.len();
    let prices = bs_discounted_price_vec(
        ndarray::Array1::from_elem(n, s0).view(),
        strikes.view(),
        ndarray::Array1::from_elem(n, sigma).view(),
        ndarray::Array1::from_elem(n, t).view(),
        ndarray::Array1::from_elem(n, r).view(),
        ndarray::Array1::from_elem(n, true).view(),
    )?;
    for (strike, price) in strikes.iter().zip(prices.iter()) {
        println!("  Call K={:>6.1}: {:.4}", strike, price);
    }

    // --- Monte Carlo ---
    println!("\n--- Monte Carlo Paths ---");
    let model = BlackScholesModel::new(r, sigma);
    let cfg = McConfig {
        seed: Some(12345),
        parallel: true,
        ..Default::default()
    };
    let mut engine = McEngine::with_config(&model, cfg)?;

    let mut timer = Timer::new();
    timer.start();
    engine.run_simulation(s0, t, paths)?;
    let elapsed_ms = timer.elapsed_ms();

    let path_matrix = engine.get_path()?;
    info!(shape = ?path_matrix.dim(), elapsed_ms, "paths simulated");
    println!("Simulated {} paths x {} dates in {:.2} ms", path_matrix.nrows(), path_matrix.ncols(), elapsed_ms);

    let grid = engine.time_grid()?;
    let horizon = grid[grid.len() - 1];
    let payoff = VanillaPayoff::call(k, horizon);
    let estimate = engine.price_vanilla(&payoff, r)?;
    let analytic = bs_discounted_price(s0, k, sigma, horizon, r, true);

    println!("MC Price:       {:.4} ± {:.4}", estimate.price, estimate.std_error);
    println!("Analytic Price: {:.4}", analytic);
    println!("Absolute Error: {:.4}", (estimate.price - analytic).abs());

    // --- Output ---
    let sample = path_matrix.slice(ndarray::s![..10, ..]);
    let paths_csv_filename = "mc_paths_sample.csv";
    match output::write_paths_to_csv(paths_csv_filename, sample) {
        Ok(()) => println!("\nFirst 10 paths written to {}", paths_csv_filename),
        Err(e) => eprintln!("Error writing paths CSV: {}", e),
    }

    let summary_data = [
        ("paths", paths.to_string()),
        ("dates", path_matrix.ncols().to_string()),
        ("mc_price", format!("{:.6}", estimate.price)),
        ("mc_std_error", format!("{:.6}", estimate.std_error)),
        ("analytic_price", format!("{:.6}", analytic)),
        ("elapsed_ms", format!("{:.2}", elapsed_ms)),
    ];
    let summary_csv_filename = "mc_summary.csv";
    match output::write_summary_to_csv(summary_csv_filename, &summary_data) {
        Ok(()) => println!("Summary written to {}", summary_csv_filename),
        Err(e) => eprintln!("Error writing summary CSV: {}", e),
    }

    Ok(())
}
