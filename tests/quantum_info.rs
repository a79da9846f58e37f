use approx::assert_relative_eq;
use nalgebra::{DMatrix, DVector};
use num_complex::Complex64 as C64;

use qspectra::qinfo::{amplitude_damping_channel, depolarizing_channel};
use qspectra::{
    apply_channel, concurrence, log_negativity, mutual_information, negativity, partial_trace,
    partial_transpose, purity, validate_channel, von_neumann_entropy, QsError, Subsystem,
};

fn c(re: f64, im: f64) -> C64 {
    C64::new(re, im)
}

/// ρ = |Φ+⟩⟨Φ+| with |Φ+⟩ = (|00⟩ + |11⟩)/√2.
fn bell_density() -> DMatrix<C64> {
    let s = 1.0 / 2.0_f64.sqrt();
    let psi = DVector::from_vec(vec![c(s, 0.0), c(0.0, 0.0), c(0.0, 0.0), c(s, 0.0)]);
    &psi * psi.adjoint()
}

/// ρ = |00⟩⟨00|, a product state.
fn product_density() -> DMatrix<C64> {
    let psi = DVector::from_vec(vec![c(1.0, 0.0), c(0.0, 0.0), c(0.0, 0.0), c(0.0, 0.0)]);
    &psi * psi.adjoint()
}

fn maximally_mixed(n: usize) -> DMatrix<C64> {
    DMatrix::<C64>::identity(n, n).scale(1.0 / n as f64)
}

#[test]
fn pure_state_has_zero_entropy() {
    let s = von_neumann_entropy(&bell_density()).unwrap();
    assert!(s.abs() < 1e-9, "S = {s}");
}

#[test]
fn maximally_mixed_entropy_is_ln_n() {
    let s = von_neumann_entropy(&maximally_mixed(2)).unwrap();
    assert_relative_eq!(s, 2.0_f64.ln(), epsilon = 1e-10);
}

#[test]
fn entropy_rejects_non_hermitian_input() {
    let m = DMatrix::from_row_slice(2, 2, &[c(1.0, 0.0), c(1.0, 1.0), c(0.0, 0.0), c(0.0, 0.0)]);
    assert!(matches!(von_neumann_entropy(&m).unwrap_err(), QsError::NonHermitian { .. }));
}

#[test]
fn purity_separates_pure_from_mixed() {
    assert_relative_eq!(purity(&bell_density()).unwrap(), 1.0, epsilon = 1e-10);
    assert_relative_eq!(purity(&maximally_mixed(4)).unwrap(), 0.25, epsilon = 1e-10);
}

#[test]
fn partial_trace_preserves_total_trace() {
    let rho = bell_density();
    for traced in [Subsystem::A, Subsystem::B] {
        let reduced = partial_trace(&rho, 2, 2, traced).unwrap();
        assert_relative_eq!(reduced.trace().re, rho.trace().re, epsilon = 1e-12);
    }
}

#[test]
fn bell_marginal_is_maximally_mixed() {
    let reduced = partial_trace(&bell_density(), 2, 2, Subsystem::B).unwrap();
    assert!((reduced - maximally_mixed(2)).norm() < 1e-12);
}

#[test]
fn partial_trace_checks_dimensions() {
    let err = partial_trace(&bell_density(), 2, 3, Subsystem::B).unwrap_err();
    assert!(matches!(err, QsError::DimensionMismatch { expected: 6, .. }));
}

#[test]
fn partial_transpose_is_an_involution() {
    let rho = bell_density();
    let pt = partial_transpose(&rho, 2, 2, Subsystem::B).unwrap();
    let back = partial_transpose(&pt, 2, 2, Subsystem::B).unwrap();
    assert!((back - rho).norm() < 1e-14);
}

#[test]
fn bell_state_negativity_is_half() {
    assert_relative_eq!(negativity(&bell_density(), 2, 2).unwrap(), 0.5, epsilon = 1e-9);
    assert_relative_eq!(
        log_negativity(&bell_density(), 2, 2).unwrap(),
        2.0_f64.ln(),
        epsilon = 1e-9
    );
}

#[test]
fn separable_states_have_zero_negativity() {
    assert!(negativity(&product_density(), 2, 2).unwrap() < 1e-9);
    assert!(negativity(&maximally_mixed(4), 2, 2).unwrap() < 1e-9);
}

#[test]
fn bell_state_mutual_information_is_two_ln_two() {
    let i = mutual_information(&bell_density(), 2, 2).unwrap();
    assert_relative_eq!(i, 2.0 * 2.0_f64.ln(), epsilon = 1e-8);
}

#[test]
fn concurrence_of_bell_state_is_one() {
    assert_relative_eq!(concurrence(&bell_density()).unwrap(), 1.0, epsilon = 1e-8);
}

#[test]
fn concurrence_of_product_state_is_zero() {
    assert!(concurrence(&product_density()).unwrap() < 1e-8);
}

#[test]
fn concurrence_requires_two_qubits() {
    let err = concurrence(&maximally_mixed(2)).unwrap_err();
    assert!(matches!(err, QsError::DimensionMismatch { expected: 4, found: 2 }));
}

#[test]
fn standard_channels_are_trace_preserving() {
    for p in [0.0, 0.3, 1.0] {
        assert!(validate_channel(&depolarizing_channel(2, p)).passed, "p = {p}");
    }
    for gamma in [0.0, 0.5, 1.0] {
        assert!(validate_channel(&amplitude_damping_channel(2, gamma)).passed, "γ = {gamma}");
    }
}

#[test]
fn broken_kraus_family_fails_validation() {
    let half = DMatrix::<C64>::identity(2, 2).scale(0.5);
    let res = validate_channel(&[half]);
    assert!(!res.passed);
    assert!(res.error > 0.1);
}

#[test]
fn depolarizing_drives_toward_maximal_mixing() {
    let rho = product_density();
    let reduced = partial_trace(&rho, 2, 2, Subsystem::B).unwrap();
    let out = apply_channel(&reduced, &depolarizing_channel(2, 1.0)).unwrap();
    assert_relative_eq!(out.trace().re, 1.0, epsilon = 1e-12);
    assert!((out - maximally_mixed(2)).norm() < 1e-10);
}

#[test]
fn amplitude_damping_fully_relaxes_at_gamma_one() {
    // start in |1⟩⟨1|
    let mut rho = DMatrix::<C64>::zeros(2, 2);
    rho[(1, 1)] = c(1.0, 0.0);
    let out = apply_channel(&rho, &amplitude_damping_channel(2, 1.0)).unwrap();
    assert_relative_eq!(out[(0, 0)].re, 1.0, epsilon = 1e-12);
    assert!(out[(1, 1)].norm() < 1e-12);
}
