//! Simulation configuration with TOML file loading

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    pub sample_count: usize,
    pub seed: u64,
    pub test_fraction: f64,
    pub temperature_threshold: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            sample_count: 1000,
            seed: 42,
            test_fraction: 0.2,
            temperature_threshold: 90.0,
        }
    }
}

/// Load config from a TOML file, falling back to defaults when the file
/// is missing or malformed. The default run needs no file at all.
pub fn load_config(path: &str) -> SimConfig {
    match std::fs::read_to_string(path) {
        Ok(s) => toml::from_str::<SimConfig>(&s).unwrap_or_default(),
        Err(_) => SimConfig::default(),
    }
}
