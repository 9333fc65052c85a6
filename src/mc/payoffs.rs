//! Vanilla Option Payoff
//!
//! # Mathematical Definitions
//!
//! - **Call**: max(S_T - K, 0) - right to buy at strike K
//! - **Put**: max(K - S_T, 0) - right to sell at strike K
//!
//! Discounted to today with `DF = e^(-rT)` the payoff is evaluated on the
//! forward `S / DF`, matching the closed forms in
//! [`crate::analytics::closed_forms`].

use crate::analytics::closed_forms;

/// Immutable description of a vanilla European option
///
/// Bundles strike, maturity and side so that payoff evaluation does not
/// have to repeat them at every call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VanillaPayoff {
    strike: f64,
    maturity: f64,
    is_call: bool,
}

impl VanillaPayoff {
    pub fn new(strike: f64, maturity: f64, is_call: bool) -> Self {
        VanillaPayoff {
            strike,
            maturity,
            is_call,
        }
    }

    pub fn call(strike: f64, maturity: f64) -> Self {
        Self::new(strike, maturity, true)
    }

    pub fn put(strike: f64, maturity: f64) -> Self {
        Self::new(strike, maturity, false)
    }

    pub fn strike(&self) -> f64 {
        self.strike
    }

    pub fn maturity(&self) -> f64 {
        self.maturity
    }

    pub fn is_call(&self) -> bool {
        self.is_call
    }

    /// Undiscounted payoff for a terminal spot
    pub fn intrinsic(&self, spot: f64) -> f64 {
        closed_forms::intrinsic_value(spot, self.strike, self.is_call)
    }

    /// Discounted payoff of `spot` at rate `rate` over the option's maturity
    pub fn discounted_payoff(&self, spot: f64, rate: f64) -> f64 {
        closed_forms::vanilla_discounted_payoff_for(spot, rate, self)
    }

    /// Payoff on a simulated path `[S_0, S_1, ..., S_T]`
    ///
    /// Only the terminal price matters for a European option. An empty path
    /// pays nothing.
    pub fn calculate(&self, path: &[f64]) -> f64 {
        path.last().map_or(0.0, |&s_t| self.intrinsic(s_t))
    }
}
