// src/solvers/mod.rs
pub mod euler_maruyama;
