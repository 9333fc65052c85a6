// src/math_utils.rs
use std::f64::consts::SQRT_2;

/// Standard normal CDF through the complementary error function.
///
/// `Φ(x) = ½·erfc(-x/√2)`, accurate in both tails where `1 + erf(x/√2)`
/// would cancel. `libm::erfc` is within an ulp or so; the remaining error
/// comes from rounding `x/√2` and grows like `x²` in the lower tail.
pub fn norm_cdf(x: f64) -> f64 {
    0.5 * libm::erfc(-x / SQRT_2)
}

pub struct Timer {
    start_time: std::time::Instant,
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}

impl Timer {
    pub fn new() -> Timer {
        Timer {
            start_time: std::time::Instant::now(),
        }
    }

    pub fn start(&mut self) {
        self.start_time = std::time::Instant::now();
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.start_time.elapsed().as_secs_f64() * 1000.0
    }
}
