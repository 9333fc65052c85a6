// src/models/mod.rs
pub mod gbm;
pub mod model;

pub use gbm::BlackScholesModel;
pub use model::DiffusionModel;
