//! NetworkParametersCollection tests
//!
//! Frequency ordering, exact lookup and nearest-frequency lookup over a
//! 1-20 GHz sweep.

use approx::assert_relative_eq;
use netparams_core::{
    NearestTieBreak, NetworkError, NetworkParameter, NetworkParametersCollection, PortMatrix,
    ScatteringMatrix,
};

const GHZ: f64 = 1e9;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// 2-port sweep where S11 at n GHz has a magnitude of n dB, phase 0
fn create_test_sweep() -> NetworkParametersCollection {
    init_tracing();
    let mut sweep = NetworkParametersCollection::new(2).unwrap();
    for n in 1..=20 {
        let value = NetworkParameter::from_polar_decibel_degree(n as f64, 0.0).unwrap();
        sweep.set(n as f64 * GHZ, 1, 1, value).unwrap();
    }
    sweep
}

fn nearest_s11_db(sweep: &NetworkParametersCollection, target: f64) -> f64 {
    sweep.nearest(target).unwrap().get(1, 1).unwrap().magnitude_db()
}

// ============================================================================
// Nearest Lookup
// ============================================================================

#[test]
fn test_nearest_below_range_clamps_to_first() {
    let sweep = create_test_sweep();
    assert_relative_eq!(nearest_s11_db(&sweep, 0.0), 1.0, epsilon = 1e-9);
}

#[test]
fn test_nearest_exact_match() {
    let sweep = create_test_sweep();
    assert_relative_eq!(nearest_s11_db(&sweep, 1.0 * GHZ), 1.0, epsilon = 1e-9);
}

#[test]
fn test_nearest_between_points() {
    let sweep = create_test_sweep();
    assert_relative_eq!(nearest_s11_db(&sweep, 1.51 * GHZ), 2.0, epsilon = 1e-9);
    assert_relative_eq!(nearest_s11_db(&sweep, 19.9 * GHZ), 20.0, epsilon = 1e-9);
}

#[test]
fn test_nearest_above_range_clamps_to_last() {
    let sweep = create_test_sweep();
    assert_relative_eq!(nearest_s11_db(&sweep, 21.0 * GHZ), 20.0, epsilon = 1e-9);
}

#[test]
fn test_nearest_midpoint_prefers_lower_by_default() {
    let sweep = create_test_sweep();
    assert_eq!(sweep.nearest_frequency(2.5 * GHZ).unwrap(), 2.0 * GHZ);

    let sweep = sweep.with_tie_break(NearestTieBreak::PreferUpper);
    assert_eq!(sweep.nearest_frequency(2.5 * GHZ).unwrap(), 3.0 * GHZ);
}

#[test]
fn test_nearest_on_empty_collection() {
    let sweep: NetworkParametersCollection = NetworkParametersCollection::new(2).unwrap();
    assert_eq!(sweep.nearest(GHZ).unwrap_err(), NetworkError::EmptyCollection);
}

// ============================================================================
// Ordering and Idempotence
// ============================================================================

#[test]
fn test_shuffled_insertion_iterates_ascending() {
    let mut sweep: NetworkParametersCollection = NetworkParametersCollection::new(1).unwrap();
    // deterministic shuffle of 0..100
    for k in 0..100u64 {
        let n = (k * 37) % 100;
        sweep.set(n as f64 * 1e6, 1, 1, NetworkParameter::ONE).unwrap();
    }

    assert_eq!(sweep.len(), 100);
    let freqs: Vec<f64> = sweep.iter().map(|(f, _)| f).collect();
    assert!(freqs.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_rewrites_do_not_grow_collection() {
    let mut sweep = create_test_sweep();
    let before = sweep.len();
    for n in 1..=20 {
        sweep.set(n as f64 * GHZ, 1, 1, NetworkParameter::ZERO).unwrap();
        sweep.set(n as f64 * GHZ, 2, 2, NetworkParameter::ZERO).unwrap();
    }
    assert_eq!(sweep.len(), before);
    assert_eq!(sweep.get(7.0 * GHZ, 1, 1).unwrap(), NetworkParameter::ZERO);
}

// ============================================================================
// Exact Lookup and Validation
// ============================================================================

#[test]
fn test_get_requires_exact_frequency() {
    let sweep = create_test_sweep();
    assert!(sweep.get(5.0 * GHZ, 1, 1).is_ok());
    assert!(matches!(
        sweep.get(5.0 * GHZ + 1.0, 1, 1),
        Err(NetworkError::NotFound { .. })
    ));
}

#[test]
fn test_invalid_arguments() {
    assert!(matches!(
        NetworkParametersCollection::<ScatteringMatrix>::new(0),
        Err(NetworkError::InvalidArgument(_))
    ));

    let mut sweep = create_test_sweep();
    let before = sweep.frequencies();
    assert!(sweep.set(-GHZ, 1, 1, NetworkParameter::ONE).is_err());
    assert!(sweep.set(30.0 * GHZ, 0, 1, NetworkParameter::ONE).is_err());
    assert!(sweep.set(30.0 * GHZ, 1, 3, NetworkParameter::ONE).is_err());
    assert_eq!(sweep.frequencies(), before);
}

#[test]
fn test_index_sugar_matches_get_and_set() {
    let mut sweep = create_test_sweep();
    let v = NetworkParameter::new(0.1, 0.2);
    sweep[(25.0 * GHZ, 2, 1)] = v;

    assert_eq!(sweep.get(25.0 * GHZ, 2, 1).unwrap(), v);
    assert_eq!(sweep[(25.0 * GHZ, 2, 1)], sweep.get(25.0 * GHZ, 2, 1).unwrap());
    assert_eq!(sweep.last().map(|(f, _)| f), Some(25.0 * GHZ));
}

// ============================================================================
// Range, Crop and Interpolation
// ============================================================================

#[test]
fn test_range_and_crop() {
    let sweep = create_test_sweep();
    assert_eq!(sweep.range(5.0 * GHZ, 7.0 * GHZ).count(), 3);

    let band = sweep.cropped(4.5 * GHZ, 10.0 * GHZ);
    assert_eq!(band.len(), 6);
    assert_eq!(band.first().map(|(f, _)| f), Some(5.0 * GHZ));
}

#[test]
fn test_interpolate_between_points() {
    let mut sweep: NetworkParametersCollection = NetworkParametersCollection::new(2).unwrap();
    sweep.set(1.0 * GHZ, 2, 1, NetworkParameter::new(0.2, 0.0)).unwrap();
    sweep.set(3.0 * GHZ, 2, 1, NetworkParameter::new(0.6, 0.0)).unwrap();

    let v = sweep.interpolate(2.0 * GHZ, 2, 1).unwrap();
    assert_relative_eq!(v.real(), 0.4, epsilon = 1e-12);
    assert_relative_eq!(v.imaginary(), 0.0, epsilon = 1e-12);
}

#[test]
fn test_array_roundtrip_preserves_values() {
    let sweep = create_test_sweep();
    let (f, s) = sweep.to_array();
    let rebuilt = NetworkParametersCollection::from_array(&f, &s).unwrap();

    assert_eq!(rebuilt.frequencies(), sweep.frequencies());
    for (freq, matrix) in &rebuilt {
        let original = sweep.get(freq, 1, 1).unwrap();
        assert!(matrix.get(1, 1).unwrap().approx_eq(&original, 1e-9));
    }
}
