// src/models/gbm.rs
use super::model::DiffusionModel;
use ndarray::{Array1, ArrayView1};

/// Black-Scholes dynamics with constant coefficients
///
/// `dS/S = r dt + σ dW`, the same drift and volatility for every path and
/// every date.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlackScholesModel {
    pub rate: f64,
    pub volatility: f64,
}

impl BlackScholesModel {
    pub fn new(rate: f64, volatility: f64) -> Self {
        BlackScholesModel { rate, volatility }
    }
}

impl DiffusionModel for BlackScholesModel {
    fn drift(&self, _time: f64, spot: ArrayView1<'_, f64>) -> Array1<f64> {
        Array1::from_elem(spot.len(), self.rate)
    }

    fn volatility(&self, _time: f64, spot: ArrayView1<'_, f64>) -> Array1<f64> {
        Array1::from_elem(spot.len(), self.volatility)
    }
}
