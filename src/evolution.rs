//! Unitary time evolution: exact spectral exponential and first-order
//! Trotter product formula.

use nalgebra::{DMatrix, DVector};
use num_complex::Complex64 as C64;
use tracing::warn;

use crate::eigen::jacobi_hermitian;
use crate::error::{QsError, Result};
use crate::linalg::projector;
use crate::validate::{hermiticity, unitarity, ValidationResult, TOLERANCE};

pub const DEFAULT_HBAR: f64 = 1.0;
pub const DEFAULT_TROTTER_STEPS: usize = 10;

/// Exact evolution operator U(t) = exp(−iHt/ħ) via the spectral
/// decomposition of `h`.
///
/// `|t| < TOLERANCE` short-circuits to the identity without touching `h`,
/// so the trivial case cannot fail on Hermiticity or convergence.
pub fn evolve_exact(h: &DMatrix<C64>, t: f64, hbar: f64) -> Result<DMatrix<C64>> {
    let n = h.nrows();
    if h.ncols() != n {
        return Err(QsError::DimensionMismatch { expected: n, found: h.ncols() });
    }
    if t.abs() < TOLERANCE {
        return Ok(DMatrix::identity(n, n));
    }

    let herm = hermiticity(h);
    if !herm.passed {
        return Err(QsError::NonHermitian { error: herm.error });
    }
    let eig = jacobi_hermitian(h);
    if !eig.converged {
        return Err(QsError::ConvergenceFailure { iterations: eig.iterations });
    }

    // U = Σₖ exp(−i Eₖ t/ħ) |k⟩⟨k|
    let mut u = DMatrix::<C64>::zeros(n, n);
    for (k, &energy) in eig.eigenvalues.iter().enumerate() {
        let phase = C64::from_polar(1.0, -energy * t / hbar);
        let vk: DVector<C64> = eig.eigenvectors.column(k).into_owned();
        u += projector(&vk) * phase;
    }

    // Fail fast rather than correct: the spectral construction should be
    // unitary to working precision.
    let check = unitarity(&u);
    if !check.passed {
        return Err(QsError::NonUnitary { error: check.error });
    }
    Ok(u)
}

/// First-order Lie-Trotter product U ≈ (Πₖ exp(−iHₖ·dt/ħ))^steps with
/// dt = t/steps.
///
/// The result is only approximately unitary for non-commuting terms, so
/// the unitarity check runs against a tolerance scaled by dt; an
/// overshoot is logged as a warning and the best-effort operator is still
/// returned.
pub fn evolve_trotter(
    terms: &[DMatrix<C64>],
    t: f64,
    steps: usize,
    hbar: f64,
) -> Result<DMatrix<C64>> {
    if terms.is_empty() {
        return Err(QsError::EmptyInput("Trotter evolution needs at least one Hamiltonian term".into()));
    }
    if steps == 0 {
        return Err(QsError::EmptyInput("Trotter evolution needs at least one step".into()));
    }
    let n = terms[0].nrows();
    for term in terms {
        if term.nrows() != n || term.ncols() != n {
            return Err(QsError::DimensionMismatch { expected: n, found: term.nrows().max(term.ncols()) });
        }
    }

    let dt = t / steps as f64;
    let mut per_step = DMatrix::<C64>::identity(n, n);
    for term in terms {
        per_step = evolve_exact(term, dt, hbar)? * per_step;
    }
    let mut u = DMatrix::<C64>::identity(n, n);
    for _ in 0..steps {
        u = &per_step * u;
    }

    let check = unitarity(&u);
    let tol = TOLERANCE.max(dt.abs() * 1e-8);
    if check.error > tol {
        warn!(
            error = check.error,
            tolerance = tol,
            steps,
            "Trotter product drifted from unitarity beyond the dt-scaled tolerance"
        );
    }
    Ok(u)
}

/// Propagate ψ₀ by U(t); verifies the resulting norm stayed at 1.
pub fn apply_to_state(
    h: &DMatrix<C64>,
    psi0: &DVector<C64>,
    t: f64,
    hbar: f64,
) -> Result<DVector<C64>> {
    if t.abs() < TOLERANCE {
        return Ok(psi0.clone());
    }
    if h.ncols() != psi0.len() {
        return Err(QsError::DimensionMismatch { expected: h.ncols(), found: psi0.len() });
    }

    let u = evolve_exact(h, t, hbar)?;
    let psi = u * psi0;
    let norm = psi.norm();
    if (norm - 1.0).abs() >= TOLERANCE {
        return Err(QsError::NormalizationViolation { norm });
    }
    Ok(psi)
}

/// Unitarity report for any candidate evolution operator, however it was
/// produced.
pub fn validate_evolution(u: &DMatrix<C64>) -> ValidationResult {
    unitarity(u)
}
