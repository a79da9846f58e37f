//! Physical invariant checks: Hermiticity, unitarity, Kraus completeness,
//! orthonormality.
//!
//! Every check is a single Frobenius-distance comparison against the fixed
//! tolerance; none mutates its input and none retries.

use nalgebra::DMatrix;
use num_complex::Complex64 as C64;

/// Precision threshold shared by every physical invariant in the crate.
pub const TOLERANCE: f64 = 1e-10;

/// Outcome of one invariant check. Consumed immediately by the caller;
/// `error` is the measured Frobenius distance.
#[derive(Clone, Debug)]
pub struct ValidationResult {
    pub passed: bool,
    pub error: f64,
    pub message: Option<String>,
}

impl ValidationResult {
    fn from_distance(error: f64) -> Self {
        ValidationResult { passed: error < TOLERANCE, error, message: None }
    }

    fn malformed(message: impl Into<String>) -> Self {
        ValidationResult { passed: false, error: f64::INFINITY, message: Some(message.into()) }
    }
}

/// ‖M − M†‖_F against tolerance.
pub fn hermiticity(m: &DMatrix<C64>) -> ValidationResult {
    if m.nrows() != m.ncols() {
        return ValidationResult::malformed("Hermiticity requires a square matrix");
    }
    ValidationResult::from_distance((m - &m.adjoint()).norm())
}

/// ‖U†U − I‖_F against tolerance.
pub fn unitarity(u: &DMatrix<C64>) -> ValidationResult {
    if u.nrows() != u.ncols() {
        return ValidationResult::malformed("Unitarity requires a square matrix");
    }
    let gram = u.adjoint() * u;
    let identity = DMatrix::<C64>::identity(u.nrows(), u.ncols());
    ValidationResult::from_distance((gram - identity).norm())
}

/// Trace preservation of a Kraus family: ‖Σ Kᵢ†Kᵢ − I‖_F against tolerance.
pub fn kraus_completeness(ops: &[DMatrix<C64>]) -> ValidationResult {
    let Some(first) = ops.first() else {
        return ValidationResult::malformed("channel has no Kraus operators");
    };
    let n = first.ncols();
    let mut sum = DMatrix::<C64>::zeros(n, n);
    for k in ops {
        if k.ncols() != n {
            return ValidationResult::malformed("Kraus operators disagree on dimension");
        }
        sum += k.adjoint() * k;
    }
    let identity = DMatrix::<C64>::identity(n, n);
    ValidationResult::from_distance((sum - identity).norm())
}

/// First column pair of `v` whose inner product deviates from δᵢⱼ beyond
/// tolerance, with the measured deviation. `None` means orthonormal.
pub fn first_orthonormality_violation(v: &DMatrix<C64>) -> Option<(usize, usize, f64)> {
    let n = v.ncols();
    for i in 0..n {
        for j in i..n {
            let inner = v.column(i).dotc(&v.column(j));
            let expected = if i == j { 1.0 } else { 0.0 };
            let dev = (inner - C64::new(expected, 0.0)).norm();
            if dev >= TOLERANCE {
                return Some((i, j, dev));
            }
        }
    }
    None
}

/// Pairwise ⟨vᵢ|vⱼ⟩ = δᵢⱼ over the columns of `v`.
pub fn orthonormality(v: &DMatrix<C64>) -> ValidationResult {
    match first_orthonormality_violation(v) {
        None => ValidationResult::from_distance(0.0),
        Some((i, j, dev)) => ValidationResult {
            passed: false,
            error: dev,
            message: Some(format!("columns {i} and {j} violate orthonormality")),
        },
    }
}
