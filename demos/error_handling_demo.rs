// demos/error_handling_demo.rs
use ndarray::{array, Array1, ArrayView1};
use vanilla_mc::analytics::closed_forms::bs_time_value;
use vanilla_mc::analytics::vectorize::bs_price_vec;
use vanilla_mc::error::SdeError;
use vanilla_mc::mc::mc_engine::{McConfig, McEngine};
use vanilla_mc::models::gbm::BlackScholesModel;
use vanilla_mc::DiffusionModel;

// Returns one coefficient too few
struct BrokenModel;

impl DiffusionModel for BrokenModel {
    fn drift(&self, _time: f64, spot: ArrayView1<'_, f64>) -> Array1<f64> {
        Array1::zeros(spot.len() - 1)
    }

    fn volatility(&self, _time: f64, spot: ArrayView1<'_, f64>) -> Array1<f64> {
        Array1::zeros(spot.len())
    }
}

fn main() {
    println!("Error Handling Demo for vanilla-mc");
    println!("==================================\n");

    let model = BlackScholesModel::new(0.05, 0.2);

    // Test 1: Degenerate pricing inputs do not fail
    println!("1. Degenerate closed-form inputs...");
    println!("   Zero strike time value:     {}", bs_time_value(100.0, 0.0, 0.2, 1.0));
    println!("   Zero volatility time value: {}", bs_time_value(100.0, 90.0, 0.0, 1.0));

    // Test 2: Invalid configuration
    println!("\n2. Testing invalid engine configuration...");
    let bad_cfg = McConfig {
        steps_per_year: -365.0,
        ..Default::default()
    };
    match McEngine::with_config(&model, bad_cfg) {
        Ok(_) => println!("   Unexpected: Should have failed!"),
        Err(e) => println!("   ✓ Caught error: {}", e),
    }

    // Test 3: Path requested before any run
    println!("\n3. Testing get_path before run_simulation...");
    let mut engine = McEngine::new(&model);
    match engine.get_path() {
        Ok(_) => println!("   Unexpected: Should have failed!"),
        Err(e) => println!("   ✓ Caught error: {}", e),
    }

    // Test 4: Invalid simulation arguments
    println!("\n4. Testing invalid simulation arguments...");
    for (s0, t, n) in [(100.0, 1.0, 0), (100.0, -1.0, 100), (f64::NAN, 1.0, 100)] {
        match engine.run_simulation(s0, t, n) {
            Ok(_) => println!("   Unexpected: Should have failed!"),
            Err(e) => println!("   ✓ Caught error: {}", e),
        }
    }

    // Test 5: Model returning the wrong number of coefficients
    println!("\n5. Testing model output length mismatch...");
    let broken = BrokenModel;
    let mut broken_engine = McEngine::new(&broken);
    match broken_engine.run_simulation(100.0, 0.5, 10) {
        Ok(_) => println!("   Unexpected: Should have failed!"),
        Err(SdeError::InvalidArgument { parameter, reason }) => {
            println!("   ✓ Caught InvalidArgument: {} ({})", parameter, reason);
        }
        Err(other) => println!("   Unexpected error type: {}", other),
    }

    // Test 6: Vectorized pricing with mismatched lengths
    println!("\n6. Testing vectorized pricing with mismatched lengths...");
    let fwd = array![90.0, 100.0, 110.0];
    let strike = array![100.0, 100.0];
    let vol = array![0.2, 0.2, 0.2];
    let mat = array![1.0, 1.0, 1.0];
    let is_call = array![true, true, true];
    match bs_price_vec(fwd.view(), strike.view(), vol.view(), mat.view(), is_call.view()) {
        Ok(_) => println!("   Unexpected: Should have failed!"),
        Err(e) => println!("   ✓ Caught error: {}", e),
    }

    // Test 7: Valid run
    println!("\n7. Testing valid simulation...");
    match engine.run_simulation(100.0, 1.0, 1_000) {
        Ok(()) => match engine.get_path() {
            Ok(paths) => println!("   ✓ Success: path matrix shape {:?}", paths.dim()),
            Err(e) => println!("   Unexpected error: {}", e),
        },
        Err(e) => println!("   Unexpected error: {}", e),
    }

    println!("\n✓ Error handling demo complete!");
    println!("All error cases were properly caught and handled.");
}
