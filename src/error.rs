//! Error kinds for invariant violations and solver failures.
//!
//! Every check raises at the point of detection; nothing is caught or
//! retried inside the library.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum QsError {
    #[error("operator is not Hermitian (‖M−M†‖ = {error:e})")]
    NonHermitian { error: f64 },

    #[error("eigensolver did not converge after {iterations} rotations")]
    ConvergenceFailure { iterations: usize },

    #[error("evolution operator is not unitary (‖U†U−I‖ = {error:e})")]
    NonUnitary { error: f64 },

    #[error("eigenvectors {i} and {j} are not orthonormal (|⟨ψ{i}|ψ{j}⟩−δ| = {overlap:e})")]
    OrthonormalityViolation { i: usize, j: usize, overlap: f64 },

    #[error("dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch { expected: usize, found: usize },

    #[error("state norm drifted from 1 (‖ψ‖ = {norm})")]
    NormalizationViolation { norm: f64 },

    #[error("empty input: {0}")]
    EmptyInput(String),
}

pub type Result<T> = std::result::Result<T, QsError>;
