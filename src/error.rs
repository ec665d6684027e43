//! Error types for the simulation pipeline

use thiserror::Error;

/// Result type alias for simulation operations.
pub type Result<T> = std::result::Result<T, SimulationError>;

/// Errors that can occur while generating data or fitting the model.
///
/// None of these are expected under the default configuration
/// (n = 1000, seed = 42); all of them are fatal when they do occur.
#[derive(Debug, Error)]
pub enum SimulationError {
    /// The anomaly injection window does not fit in the generated table.
    #[error("anomaly window {start}..{end} exceeds table size {rows}")]
    AnomalyWindowOutOfRange {
        start: usize,
        end: usize,
        rows: usize,
    },

    /// A sampling distribution was configured with invalid parameters.
    #[error("invalid distribution parameters: {0}")]
    Distribution(String),

    /// The train/test split produced an unusable partition.
    #[error("{partition} partition is empty; check sample count and test fraction")]
    EmptyPartition { partition: &'static str },

    /// The training feature has zero variance, so the OLS slope is undefined.
    #[error("zero variance in training feature; regression slope is undefined")]
    ConstantFeature,

    /// The test target has zero variance, so R2 is undefined.
    #[error("zero variance in test target; R2 is undefined")]
    ConstantTarget,
}
