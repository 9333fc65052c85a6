// src/analytics/mod.rs
pub mod closed_forms;
pub mod vectorize;

pub use closed_forms::{
    bs_discounted_price, bs_price, bs_time_value, ncdf, vanilla_discounted_payoff,
    vanilla_discounted_payoff_for,
};
