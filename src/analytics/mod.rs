// src/analytics/mod.rs
pub mod drag;
pub mod gbm_moments;
