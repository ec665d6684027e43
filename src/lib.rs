pub mod config;
pub mod error;
pub mod model;
pub mod sensor;

pub use config::{load_config, SimConfig};
pub use error::{Result, SimulationError};
pub use model::{split_indices, train_predictive_model, LinearModel, TrainTestSplit};
pub use sensor::anomaly::{AnomalyReport, HealthChecker};
pub use sensor::generator::{SensorGenerator, SensorTable};
