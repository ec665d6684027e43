//! Failure-path tests: both errors the pipeline can raise

use iot_efficiency_sim::{train_predictive_model, SensorGenerator, SimulationError};

#[test]
fn anomaly_window_must_fit_in_table() {
    let err = SensorGenerator::new(42).generate(100).unwrap_err();

    assert!(matches!(
        err,
        SimulationError::AnomalyWindowOutOfRange {
            start: 845,
            end: 850,
            rows: 100
        }
    ));
}

#[test]
fn boundary_row_count_is_accepted() {
    // 850 rows is the smallest table the default window fits in.
    assert!(SensorGenerator::new(42).generate(850).is_ok());
    assert!(SensorGenerator::new(42).generate(849).is_err());
}

#[test]
fn empty_window_skips_validation() {
    let mut gen = SensorGenerator::new(42);
    gen.anomaly_len = 0;

    let table = gen.generate(10).unwrap();
    assert_eq!(table.len(), 10);
}

#[test]
fn constant_test_target_fails_validation() {
    // Zero slope and zero noise leave every temperature at the base value.
    let mut gen = SensorGenerator::new(42);
    gen.temp_slope = 0.0;
    gen.temp_noise_std = 0.0;
    gen.anomaly_offset = 0.0;
    let table = gen.generate(1000).unwrap();

    let err = train_predictive_model(&table, 0.2, 42).unwrap_err();
    assert!(matches!(err, SimulationError::ConstantTarget));
}

#[test]
fn constant_feature_fails_fitting() {
    let mut gen = SensorGenerator::new(42);
    gen.vibration_std = 0.0;
    let table = gen.generate(1000).unwrap();

    let err = train_predictive_model(&table, 0.2, 42).unwrap_err();
    assert!(matches!(err, SimulationError::ConstantFeature));
}

#[test]
fn degenerate_fractions_yield_empty_partitions() {
    let table = SensorGenerator::new(42).generate(1000).unwrap();

    let err = train_predictive_model(&table, 0.0, 42).unwrap_err();
    assert!(matches!(
        err,
        SimulationError::EmptyPartition { partition: "test" }
    ));

    let err = train_predictive_model(&table, 1.0, 42).unwrap_err();
    assert!(matches!(
        err,
        SimulationError::EmptyPartition { partition: "train" }
    ));
}
