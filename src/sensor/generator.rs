use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::Normal;

use crate::error::{Result, SimulationError};

// ============================================================================
// SENSOR TABLE - Column-major store of one simulation run
// ============================================================================

/// Synthesized vibration/voltage/temperature readings.
///
/// Built once by [`SensorGenerator::generate`] and read-only afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct SensorTable {
    vibration: Vec<f64>,
    voltage: Vec<f64>,
    temperature: Vec<f64>,
}

impl SensorTable {
    pub fn len(&self) -> usize {
        self.temperature.len()
    }

    pub fn is_empty(&self) -> bool {
        self.temperature.is_empty()
    }

    pub fn vibration(&self) -> &[f64] {
        &self.vibration
    }

    pub fn voltage(&self) -> &[f64] {
        &self.voltage
    }

    pub fn temperature(&self) -> &[f64] {
        &self.temperature
    }
}

// ============================================================================
// SENSOR GENERATOR - Deterministic synthetic signal source
// ============================================================================

/// Produces a [`SensorTable`] from a seeded RNG.
///
/// The RNG is owned by the generator instance, so reproducibility does not
/// depend on call order or any process-global state. Signal parameters are
/// public so tests can construct degenerate tables (zero noise, zero slope).
pub struct SensorGenerator {
    rng: StdRng,
    pub vibration_mean: f64,
    pub vibration_std: f64,
    pub voltage_mean: f64,
    pub voltage_std: f64,
    pub temp_base: f64,
    pub temp_slope: f64,
    pub temp_noise_std: f64,
    pub anomaly_start: usize,
    pub anomaly_len: usize,
    pub anomaly_offset: f64,
}

impl SensorGenerator {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            vibration_mean: 50.0,
            vibration_std: 10.0,
            voltage_mean: 220.0,
            voltage_std: 2.0,
            temp_base: 25.0,
            temp_slope: 0.5,
            temp_noise_std: 2.0,
            // Simulated overheating event
            anomaly_start: 845,
            anomaly_len: 5,
            anomaly_offset: 50.0,
        }
    }

    /// Generate `n` readings.
    ///
    /// Temperature is correlated with vibration (`temp = base + slope * vib
    /// + noise`); voltage is an independent stable channel. The anomaly
    /// offset is applied to `anomaly_start..anomaly_start + anomaly_len`
    /// as part of construction. Errors if a non-empty anomaly window does
    /// not fit within `n` rows.
    pub fn generate(&mut self, n: usize) -> Result<SensorTable> {
        let window_end = self.anomaly_start + self.anomaly_len;
        if self.anomaly_len > 0 && window_end > n {
            return Err(SimulationError::AnomalyWindowOutOfRange {
                start: self.anomaly_start,
                end: window_end,
                rows: n,
            });
        }

        let vibration_dist = normal(self.vibration_mean, self.vibration_std)?;
        let voltage_dist = normal(self.voltage_mean, self.voltage_std)?;
        let noise_dist = normal(0.0, self.temp_noise_std)?;

        let vibration: Vec<f64> = (0..n).map(|_| self.rng.sample(vibration_dist)).collect();
        let voltage: Vec<f64> = (0..n).map(|_| self.rng.sample(voltage_dist)).collect();
        let mut temperature: Vec<f64> = vibration
            .iter()
            .map(|&v| self.temp_base + self.temp_slope * v + self.rng.sample(noise_dist))
            .collect();

        if self.anomaly_len > 0 {
            for t in &mut temperature[self.anomaly_start..window_end] {
                *t += self.anomaly_offset;
            }
        }

        Ok(SensorTable {
            vibration,
            voltage,
            temperature,
        })
    }
}

fn normal(mean: f64, std: f64) -> Result<Normal<f64>> {
    Normal::new(mean, std).map_err(|e| SimulationError::Distribution(e.to_string()))
}
