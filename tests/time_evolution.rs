use std::f64::consts::PI;

use nalgebra::{DMatrix, DVector};
use num_complex::Complex64 as C64;

use qspectra::{
    apply_to_state, evolve_exact, evolve_trotter, validate_evolution, QsError, DEFAULT_HBAR,
};

fn c(re: f64, im: f64) -> C64 {
    C64::new(re, im)
}

fn sigma_x() -> DMatrix<C64> {
    DMatrix::from_row_slice(2, 2, &[c(0.0, 0.0), c(1.0, 0.0), c(1.0, 0.0), c(0.0, 0.0)])
}

fn sigma_z() -> DMatrix<C64> {
    DMatrix::from_row_slice(2, 2, &[c(1.0, 0.0), c(0.0, 0.0), c(0.0, 0.0), c(-1.0, 0.0)])
}

#[test]
fn zero_time_is_the_identity() {
    let u = evolve_exact(&sigma_z(), 0.0, DEFAULT_HBAR).unwrap();
    let identity = DMatrix::<C64>::identity(2, 2);
    assert!((u - identity).norm() < 1e-10);
}

#[test]
fn zero_time_skips_hermiticity_checks() {
    // Non-Hermitian input must not matter at the trivial case.
    let m = DMatrix::from_row_slice(2, 2, &[c(1.0, 0.0), c(1.0, 1.0), c(0.0, 0.0), c(1.0, 0.0)]);
    assert!(evolve_exact(&m, 0.0, DEFAULT_HBAR).is_ok());
}

#[test]
fn exact_evolution_is_unitary() {
    let h = DMatrix::from_row_slice(2, 2, &[c(1.0, 0.0), c(1.0, -1.0), c(1.0, 1.0), c(0.0, 0.0)]);
    for &t in &[0.1, 1.0, -2.5, 17.0] {
        let u = evolve_exact(&h, t, DEFAULT_HBAR).unwrap();
        let check = validate_evolution(&u);
        assert!(check.passed, "t = {t}, error = {}", check.error);
    }
}

#[test]
fn sigma_z_at_pi_gives_minus_identity() {
    let u = evolve_exact(&sigma_z(), PI, DEFAULT_HBAR).unwrap();
    let minus_identity = DMatrix::<C64>::identity(2, 2).scale(-1.0);
    assert!((u - minus_identity).norm() < 1e-10);
}

#[test]
fn eigenstate_picks_up_a_pure_phase() {
    // |0⟩ is a σz eigenstate with E = 1: ψ(t) = e^{-it}|0⟩
    let psi0 = DVector::from_vec(vec![c(1.0, 0.0), c(0.0, 0.0)]);
    let t = 0.7;
    let psi = apply_to_state(&sigma_z(), &psi0, t, DEFAULT_HBAR).unwrap();
    let expected = C64::from_polar(1.0, -t);
    assert!((psi[0] - expected).norm() < 1e-10);
    assert!(psi[1].norm() < 1e-10);
}

#[test]
fn zero_time_state_is_passed_through() {
    let psi0 = DVector::from_vec(vec![c(0.6, 0.0), c(0.8, 0.0)]);
    let psi = apply_to_state(&sigma_z(), &psi0, 0.0, DEFAULT_HBAR).unwrap();
    assert!((psi - psi0).norm() < 1e-15);
}

#[test]
fn unnormalized_state_is_flagged_after_evolution() {
    let psi0 = DVector::from_vec(vec![c(2.0, 0.0), c(0.0, 0.0)]);
    let err = apply_to_state(&sigma_z(), &psi0, 1.0, DEFAULT_HBAR).unwrap_err();
    assert!(matches!(err, QsError::NormalizationViolation { .. }));
}

#[test]
fn non_hermitian_hamiltonian_is_rejected() {
    let m = DMatrix::from_row_slice(2, 2, &[c(1.0, 0.0), c(1.0, 1.0), c(0.0, 0.0), c(1.0, 0.0)]);
    let err = evolve_exact(&m, 1.0, DEFAULT_HBAR).unwrap_err();
    assert!(matches!(err, QsError::NonHermitian { .. }));
}

#[test]
fn trotter_with_no_terms_is_an_error() {
    let err = evolve_trotter(&[], 1.0, 10, DEFAULT_HBAR).unwrap_err();
    assert!(matches!(err, QsError::EmptyInput(_)));
}

#[test]
fn trotter_of_commuting_terms_is_exact() {
    let terms = vec![sigma_z(), sigma_z()];
    let sum = &terms[0] + &terms[1];
    let approx = evolve_trotter(&terms, 0.8, 10, DEFAULT_HBAR).unwrap();
    let exact = evolve_exact(&sum, 0.8, DEFAULT_HBAR).unwrap();
    assert!((approx - exact).norm() < 1e-9);
}

#[test]
fn trotter_error_shrinks_with_more_steps() {
    let terms = vec![sigma_x(), sigma_z()];
    let sum = &terms[0] + &terms[1];
    let t = 1.0;
    let exact = evolve_exact(&sum, t, DEFAULT_HBAR).unwrap();

    let mut previous = f64::INFINITY;
    for &steps in &[10usize, 50, 100] {
        let approx = evolve_trotter(&terms, t, steps, DEFAULT_HBAR).unwrap();
        let err = (&approx - &exact).norm();
        assert!(err <= previous + 1e-12, "error grew at {steps} steps: {err} > {previous}");
        previous = err;
    }
    // 100 steps of first-order Trotter should be well inside 1e-1
    assert!(previous < 1e-1);
}

#[test]
fn trotter_result_stays_unitary() {
    let terms = vec![sigma_x(), sigma_z()];
    let u = evolve_trotter(&terms, 1.0, 25, DEFAULT_HBAR).unwrap();
    let check = validate_evolution(&u);
    assert!(check.passed, "error = {}", check.error);
}

#[test]
fn hbar_rescales_the_phase() {
    // Doubling ħ halves the accumulated phase.
    let u_fast = evolve_exact(&sigma_z(), 1.0, 1.0).unwrap();
    let u_slow = evolve_exact(&sigma_z(), 2.0, 2.0).unwrap();
    assert!((u_fast - u_slow).norm() < 1e-10);
}
