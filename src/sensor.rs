//! Sensor module - Synthetic data generation and threshold diagnostics

pub mod anomaly;
pub mod generator;
