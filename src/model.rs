//! Model module - Train/test partitioning and single-feature linear regression

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::error::{Result, SimulationError};
use crate::sensor::generator::SensorTable;

// ============================================================================
// TRAIN/TEST SPLIT - Deterministic shuffle-and-slice partitioner
// ============================================================================

/// Disjoint row-index partitions whose union is `0..n`.
#[derive(Debug, Clone)]
pub struct TrainTestSplit {
    pub train: Vec<usize>,
    pub test: Vec<usize>,
}

/// Shuffle `0..n` with a dedicated seeded RNG and slice off the test set.
///
/// `test_fraction` of the rows (rounded to nearest) go to the test
/// partition, the rest to train. Same seed, same split.
pub fn split_indices(n: usize, test_fraction: f64, seed: u64) -> TrainTestSplit {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut indices: Vec<usize> = (0..n).collect();
    indices.shuffle(&mut rng);

    let test_len = ((test_fraction * n as f64).round() as usize).min(n);
    let train = indices.split_off(test_len);

    TrainTestSplit {
        train,
        test: indices,
    }
}

// ============================================================================
// LINEAR MODEL - Closed-form ordinary least squares, one feature
// ============================================================================

/// `temperature ~= slope * vibration + intercept`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearModel {
    pub slope: f64,
    pub intercept: f64,
}

impl LinearModel {
    /// Fit OLS of `y` on `x`: slope = cov(x, y) / var(x), intercept from
    /// the sample means. Errors when `x` is constant.
    pub fn fit(x: &[f64], y: &[f64]) -> Result<Self> {
        debug_assert_eq!(x.len(), y.len());

        let n = x.len() as f64;
        let mean_x = x.iter().sum::<f64>() / n;
        let mean_y = y.iter().sum::<f64>() / n;

        let mut cov = 0.0;
        let mut var_x = 0.0;
        for (&xi, &yi) in x.iter().zip(y) {
            cov += (xi - mean_x) * (yi - mean_y);
            var_x += (xi - mean_x) * (xi - mean_x);
        }

        if var_x <= f64::EPSILON {
            return Err(SimulationError::ConstantFeature);
        }

        let slope = cov / var_x;
        Ok(Self {
            slope,
            intercept: mean_y - slope * mean_x,
        })
    }

    pub fn predict(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }

    /// Coefficient of determination on held-out data:
    /// `1 - SSR / SST`, baselined on the test set's own mean.
    /// Errors when the test target is constant (SST = 0).
    pub fn r_squared(&self, x: &[f64], y: &[f64]) -> Result<f64> {
        debug_assert_eq!(x.len(), y.len());

        let mean_y = y.iter().sum::<f64>() / y.len() as f64;

        let mut ss_res = 0.0;
        let mut ss_tot = 0.0;
        for (&xi, &yi) in x.iter().zip(y) {
            let residual = yi - self.predict(xi);
            ss_res += residual * residual;
            ss_tot += (yi - mean_y) * (yi - mean_y);
        }

        if ss_tot <= f64::EPSILON {
            return Err(SimulationError::ConstantTarget);
        }

        Ok(1.0 - ss_res / ss_tot)
    }
}

// ============================================================================
// PREDICTIVE FITTER - Split, fit, validate
// ============================================================================

/// Fit temperature-from-vibration on a train partition and score the
/// model against the held-out test partition.
pub fn train_predictive_model(
    table: &SensorTable,
    test_fraction: f64,
    seed: u64,
) -> Result<(LinearModel, f64)> {
    let split = split_indices(table.len(), test_fraction, seed);
    if split.train.is_empty() {
        return Err(SimulationError::EmptyPartition { partition: "train" });
    }
    if split.test.is_empty() {
        return Err(SimulationError::EmptyPartition { partition: "test" });
    }

    let (train_x, train_y) = select(table, &split.train);
    let model = LinearModel::fit(&train_x, &train_y)?;

    let (test_x, test_y) = select(table, &split.test);
    let score = model.r_squared(&test_x, &test_y)?;

    Ok((model, score))
}

fn select(table: &SensorTable, indices: &[usize]) -> (Vec<f64>, Vec<f64>) {
    let x = indices.iter().map(|&i| table.vibration()[i]).collect();
    let y = indices.iter().map(|&i| table.temperature()[i]).collect();
    (x, y)
}
