// tests/closed_forms_test.rs
use approx::assert_abs_diff_eq;
use ndarray::Array1;
use proptest::prelude::*;
use vanilla_mc::analytics::closed_forms::{
    bs_discounted_price, bs_price, bs_time_value, ncdf, vanilla_discounted_payoff,
    vanilla_discounted_payoff_for,
};
use vanilla_mc::analytics::vectorize::{
    bs_discounted_price_vec, bs_price_vec, bs_time_value_vec, ncdf_vec,
    vanilla_discounted_payoff_vec,
};
use vanilla_mc::VanillaPayoff;

#[test]
fn test_atm_reference_price() {
    let price = bs_price(100.0, 100.0, 0.2, 1.0, true);
    println!("\nATM call (F=100, K=100, σ=20%, T=1): {}", price);
    assert_abs_diff_eq!(price, 7.9656, epsilon = 1e-4);
}

#[test]
fn test_ncdf_far_tails() {
    assert_eq!(ncdf(-40.0), 0.0);
    assert_eq!(ncdf(40.0), 1.0);
    assert!(ncdf(-30.0) > 0.0, "lower tail must not cancel to zero");
}

#[test]
fn test_payoff_overload_matches_explicit_arguments() {
    let payoff = VanillaPayoff::call(100.0, 1.5);
    for &spot in &[50.0, 99.0, 100.0, 101.0, 250.0] {
        assert_eq!(
            vanilla_discounted_payoff_for(spot, 0.03, &payoff),
            vanilla_discounted_payoff(spot, 100.0, 1.5, 0.03, true)
        );
    }
}

#[test]
fn test_discounted_price_dominates_discounted_payoff() {
    // Time value is non-negative, so price ≥ discounted intrinsic
    for &spot in &[60.0, 90.0, 100.0, 110.0, 160.0] {
        for &is_call in &[true, false] {
            let price = bs_discounted_price(spot, 100.0, 0.25, 1.0, 0.02, is_call);
            let payoff = vanilla_discounted_payoff(spot, 100.0, 1.0, 0.02, is_call);
            assert!(price >= payoff, "spot {} call {}: {} < {}", spot, is_call, price, payoff);
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_ncdf_symmetry(x in -40.0..40.0f64) {
        let sum = ncdf(x) + ncdf(-x);
        prop_assert!((sum - 1.0).abs() < 1e-12, "ncdf({}) + ncdf({}) = {}", x, -x, sum);
    }

    #[test]
    fn prop_put_call_parity(
        fwd in 1.0..500.0f64,
        strike in 1.0..500.0f64,
        vol in 0.01..1.5f64,
        maturity in 0.01..10.0f64,
    ) {
        let call = bs_price(fwd, strike, vol, maturity, true);
        let put = bs_price(fwd, strike, vol, maturity, false);
        let tol = 1e-10 * fwd.max(strike);
        prop_assert!(
            ((call - put) - (fwd - strike)).abs() <= tol,
            "C - P = {} but F - K = {}", call - put, fwd - strike
        );
    }

    #[test]
    fn prop_degenerate_inputs_have_no_time_value(
        fwd in 0.0..500.0f64,
        strike in 0.0..500.0f64,
        vol in 0.0..2.0f64,
        maturity in 0.0..10.0f64,
    ) {
        prop_assert_eq!(bs_time_value(fwd, 0.0, vol, maturity), 0.0);
        prop_assert_eq!(bs_time_value(fwd, strike, 0.0, maturity), 0.0);
    }

    #[test]
    fn prop_time_value_is_non_negative(
        fwd in 0.01..500.0f64,
        strike in 0.01..500.0f64,
        vol in 0.0..2.0f64,
        maturity in 0.0..10.0f64,
    ) {
        let tv = bs_time_value(fwd, strike, vol, maturity);
        prop_assert!(tv == 0.0 || tv > f64::MIN_POSITIVE);
    }

    #[test]
    fn prop_zero_rate_is_undiscounted(
        spot in 1.0..500.0f64,
        strike in 0.0..500.0f64,
        vol in 0.0..1.5f64,
        maturity in 0.0..10.0f64,
        is_call in any::<bool>(),
    ) {
        prop_assert_eq!(
            bs_discounted_price(spot, strike, vol, maturity, 0.0, is_call),
            bs_price(spot, strike, vol, maturity, is_call)
        );
    }

    #[test]
    fn prop_vectorized_matches_scalar(
        rows in prop::collection::vec(
            (1.0..300.0f64, 0.0..300.0f64, 0.0..1.0f64, 0.0..5.0f64, -0.05..0.1f64, any::<bool>()),
            0..32,
        )
    ) {
        let spot: Array1<f64> = rows.iter().map(|r| r.0).collect();
        let strike: Array1<f64> = rows.iter().map(|r| r.1).collect();
        let vol: Array1<f64> = rows.iter().map(|r| r.2).collect();
        let mat: Array1<f64> = rows.iter().map(|r| r.3).collect();
        let rate: Array1<f64> = rows.iter().map(|r| r.4).collect();
        let is_call: Array1<bool> = rows.iter().map(|r| r.5).collect();

        let discounted = bs_discounted_price_vec(
            spot.view(), strike.view(), vol.view(), mat.view(), rate.view(), is_call.view(),
        ).unwrap();
        let prices = bs_price_vec(
            spot.view(), strike.view(), vol.view(), mat.view(), is_call.view(),
        ).unwrap();
        let time_values = bs_time_value_vec(
            spot.view(), strike.view(), vol.view(), mat.view(),
        ).unwrap();
        let payoffs = vanilla_discounted_payoff_vec(
            spot.view(), strike.view(), mat.view(), rate.view(), is_call.view(),
        ).unwrap();
        let probabilities = ncdf_vec(rate.view());

        prop_assert_eq!(discounted.len(), rows.len());
        for (i, r) in rows.iter().enumerate() {
            prop_assert_eq!(discounted[i], bs_discounted_price(r.0, r.1, r.2, r.3, r.4, r.5));
            prop_assert_eq!(prices[i], bs_price(r.0, r.1, r.2, r.3, r.5));
            prop_assert_eq!(time_values[i], bs_time_value(r.0, r.1, r.2, r.3));
            prop_assert_eq!(payoffs[i], vanilla_discounted_payoff(r.0, r.1, r.3, r.4, r.5));
            prop_assert_eq!(probabilities[i], ncdf(r.4));
        }
    }
}
