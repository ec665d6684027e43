use super::generator::SensorTable;

// ============================================================================
// ANOMALY REPORT - Rows exceeding the temperature threshold
// ============================================================================

/// Result of one diagnostic pass. Derived, read-only, recomputed on demand.
#[derive(Debug, Clone, PartialEq)]
pub struct AnomalyReport {
    indices: Vec<usize>,
    threshold: f64,
}

impl AnomalyReport {
    /// Row indices whose temperature exceeded the threshold, ascending.
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    pub fn count(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// The first `limit` flagged indices, for alert display.
    pub fn critical_indices(&self, limit: usize) -> &[usize] {
        &self.indices[..self.indices.len().min(limit)]
    }
}

// ============================================================================
// HEALTH CHECKER - Static threshold diagnostics
// ============================================================================

pub struct HealthChecker {
    temp_threshold: f64,
}

impl HealthChecker {
    pub fn new(temp_threshold: f64) -> Self {
        Self { temp_threshold }
    }

    /// Scan the table for temperatures strictly above the threshold.
    ///
    /// Pure read pass; indices come back in original table order.
    pub fn check(&self, table: &SensorTable) -> AnomalyReport {
        let indices = table
            .temperature()
            .iter()
            .enumerate()
            .filter(|(_, &t)| t > self.temp_threshold)
            .map(|(i, _)| i)
            .collect();

        AnomalyReport {
            indices,
            threshold: self.temp_threshold,
        }
    }
}
