//! Spectral and symmetry analysis of Hermitian operators.

use nalgebra::DMatrix;
use num_complex::Complex64 as C64;

use crate::eigen::{jacobi_hermitian, EigenDecomposition};
use crate::error::{QsError, Result};
use crate::gates::{number_operator, parity_operator};
use crate::linalg::commutator_norm;
use crate::validate::{first_orthonormality_violation, hermiticity, TOLERANCE};

/// One bucket of eigenvalues closer together than the tolerance.
#[derive(Clone, Debug)]
pub struct DegenerateLevel {
    pub energy: f64,
    pub multiplicity: usize,
}

/// Full spectral summary of a Hermitian operator.
#[derive(Clone, Debug)]
pub struct SpectrumAnalysis {
    /// Ascending eigenvalues.
    pub eigenvalues: Vec<f64>,
    /// Orthonormal eigenvectors as columns, aligned with `eigenvalues`.
    pub eigenvectors: DMatrix<C64>,
    pub ground_state_energy: f64,
    /// Difference between the two lowest distinct eigenvalues; zero when
    /// the whole spectrum sits in one degenerate level.
    pub spectral_gap: f64,
    pub degeneracies: Vec<DegenerateLevel>,
    pub iterations: usize,
}

/// A detected symmetry: an operator commuting with the Hamiltonian.
#[derive(Clone, Debug)]
pub struct Symmetry {
    pub name: &'static str,
    pub operator: DMatrix<C64>,
}

/// A conserved quantity, reported with its commutator norm as a
/// diagnostic (near zero by construction).
#[derive(Clone, Debug)]
pub struct ConservedQuantity {
    pub name: &'static str,
    pub commutator_norm: f64,
}

/// Diagonalize `h` and summarize its spectrum.
///
/// Fails hard on non-Hermitian input, eigensolver non-convergence, or any
/// pairwise orthonormality violation among the eigenvectors.
pub fn analyze_spectrum(h: &DMatrix<C64>) -> Result<SpectrumAnalysis> {
    let herm = hermiticity(h);
    if !herm.passed {
        return Err(QsError::NonHermitian { error: herm.error });
    }

    let eig = jacobi_hermitian(h);
    if !eig.converged {
        return Err(QsError::ConvergenceFailure { iterations: eig.iterations });
    }
    let EigenDecomposition { eigenvalues, eigenvectors, iterations, .. } = eig.sorted();

    if let Some((i, j, overlap)) = first_orthonormality_violation(&eigenvectors) {
        return Err(QsError::OrthonormalityViolation { i, j, overlap });
    }

    let ground_state_energy = eigenvalues.first().copied().unwrap_or(0.0);
    let spectral_gap = eigenvalues
        .iter()
        .find(|&&e| e - ground_state_energy >= TOLERANCE)
        .map(|&e| e - ground_state_energy)
        .unwrap_or(0.0);
    let degeneracies = group_degeneracies(&eigenvalues);

    Ok(SpectrumAnalysis {
        eigenvalues,
        eigenvectors,
        ground_state_energy,
        spectral_gap,
        degeneracies,
        iterations,
    })
}

/// Bucket ascending eigenvalues, comparing each against the first member
/// of the open bucket.
fn group_degeneracies(sorted: &[f64]) -> Vec<DegenerateLevel> {
    let mut levels: Vec<DegenerateLevel> = Vec::new();
    for &e in sorted {
        match levels.last_mut() {
            Some(level) if (e - level.energy).abs() < TOLERANCE => level.multiplicity += 1,
            _ => levels.push(DegenerateLevel { energy: e, multiplicity: 1 }),
        }
    }
    levels
}

/// Test `h` against the standard operator library. Only qubit-compatible
/// dimensions (n = 2^k) have candidates; anything else yields no
/// symmetries, never an error.
pub fn detect_symmetries(h: &DMatrix<C64>) -> Vec<Symmetry> {
    let n = h.nrows();
    if h.ncols() != n || n < 2 || !n.is_power_of_two() {
        return Vec::new();
    }
    let num_qubits = n.trailing_zeros() as usize;

    let mut candidates: Vec<(&'static str, DMatrix<C64>)> =
        vec![("global parity", parity_operator(num_qubits))];
    if num_qubits == 2 {
        candidates.push(("particle number", number_operator(num_qubits)));
    }

    candidates
        .into_iter()
        .filter(|(_, q)| commutator_norm(h, q) < TOLERANCE)
        .map(|(name, operator)| Symmetry { name, operator })
        .collect()
}

/// The detected symmetries re-reported as conserved quantities with their
/// measured commutator norms.
pub fn find_conserved_quantities(h: &DMatrix<C64>) -> Vec<ConservedQuantity> {
    detect_symmetries(h)
        .into_iter()
        .map(|sym| ConservedQuantity {
            name: sym.name,
            commutator_norm: commutator_norm(h, &sym.operator),
        })
        .collect()
}
