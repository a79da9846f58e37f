//! Information-theoretic measures on density matrices: entropy, marginals,
//! entanglement witnesses, and Kraus channels.
//!
//! All spectra come from the same Jacobi primitive the rest of the crate
//! uses. Positivity of density matrices is not independently verified;
//! Hermiticity and trace constraints are enforced where checked.

use nalgebra::DMatrix;
use num_complex::Complex64 as C64;

use crate::eigen::jacobi_hermitian;
use crate::error::{QsError, Result};
use crate::gates::pauli_y;
use crate::linalg::{c, kron};
use crate::validate::{hermiticity, kraus_completeness, ValidationResult};

/// Which tensor factor of a bipartite ρ an operation acts on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Subsystem {
    A,
    B,
}

/// Real eigenvalues of a Hermitian matrix, with the usual failure modes.
fn hermitian_eigenvalues(m: &DMatrix<C64>) -> Result<Vec<f64>> {
    let herm = hermiticity(m);
    if !herm.passed {
        return Err(QsError::NonHermitian { error: herm.error });
    }
    let eig = jacobi_hermitian(m);
    if !eig.converged {
        return Err(QsError::ConvergenceFailure { iterations: eig.iterations });
    }
    Ok(eig.eigenvalues)
}

/// Von Neumann entropy S(ρ) = −Σ λ ln λ over positive eigenvalues, in
/// nats. Zero eigenvalues contribute nothing by convention.
pub fn von_neumann_entropy(rho: &DMatrix<C64>) -> Result<f64> {
    let eigenvalues = hermitian_eigenvalues(rho)?;
    let mut entropy = 0.0;
    for ev in eigenvalues {
        if ev > 1e-15 {
            entropy -= ev * ev.ln();
        }
    }
    Ok(entropy)
}

/// Purity Tr(ρ²); 1 for pure states, 1/n for the maximally mixed state.
pub fn purity(rho: &DMatrix<C64>) -> Result<f64> {
    if rho.nrows() != rho.ncols() {
        return Err(QsError::DimensionMismatch { expected: rho.nrows(), found: rho.ncols() });
    }
    Ok((rho * rho).trace().re)
}

fn check_bipartite(rho: &DMatrix<C64>, dim_a: usize, dim_b: usize) -> Result<()> {
    let n = dim_a * dim_b;
    if rho.nrows() != n || rho.ncols() != n {
        return Err(QsError::DimensionMismatch { expected: n, found: rho.nrows() });
    }
    Ok(())
}

/// Marginal of a composite ρ over the traced-out subsystem. Composite
/// indices decompose as i = iA·dimB + iB; the total trace is preserved.
pub fn partial_trace(
    rho: &DMatrix<C64>,
    dim_a: usize,
    dim_b: usize,
    traced_out: Subsystem,
) -> Result<DMatrix<C64>> {
    check_bipartite(rho, dim_a, dim_b)?;
    match traced_out {
        Subsystem::B => {
            let mut out = DMatrix::<C64>::zeros(dim_a, dim_a);
            for ia in 0..dim_a {
                for ja in 0..dim_a {
                    let mut sum = c(0.0, 0.0);
                    for ib in 0..dim_b {
                        sum += rho[(ia * dim_b + ib, ja * dim_b + ib)];
                    }
                    out[(ia, ja)] = sum;
                }
            }
            Ok(out)
        }
        Subsystem::A => {
            let mut out = DMatrix::<C64>::zeros(dim_b, dim_b);
            for ib in 0..dim_b {
                for jb in 0..dim_b {
                    let mut sum = c(0.0, 0.0);
                    for ia in 0..dim_a {
                        sum += rho[(ia * dim_b + ib, ia * dim_b + jb)];
                    }
                    out[(ib, jb)] = sum;
                }
            }
            Ok(out)
        }
    }
}

/// Transpose of the named subsystem's sub-indices, the entanglement
/// witness underlying negativity.
pub fn partial_transpose(
    rho: &DMatrix<C64>,
    dim_a: usize,
    dim_b: usize,
    subsystem: Subsystem,
) -> Result<DMatrix<C64>> {
    check_bipartite(rho, dim_a, dim_b)?;
    let n = dim_a * dim_b;
    let mut out = DMatrix::<C64>::zeros(n, n);
    for ia in 0..dim_a {
        for ib in 0..dim_b {
            for ja in 0..dim_a {
                for jb in 0..dim_b {
                    let (row, col) = match subsystem {
                        // transpose B: swap iB ↔ jB
                        Subsystem::B => (ia * dim_b + jb, ja * dim_b + ib),
                        // transpose A: swap iA ↔ jA
                        Subsystem::A => (ja * dim_b + ib, ia * dim_b + jb),
                    };
                    out[(row, col)] = rho[(ia * dim_b + ib, ja * dim_b + jb)];
                }
            }
        }
    }
    Ok(out)
}

/// Trace norm ‖M‖₁ = Σ singular values, computed from the eigenvalues of
/// the Hermitian product M†M.
fn trace_norm(m: &DMatrix<C64>) -> Result<f64> {
    let gram = m.adjoint() * m;
    let eigenvalues = hermitian_eigenvalues(&gram)?;
    Ok(eigenvalues.iter().map(|&ev| ev.max(0.0).sqrt()).sum())
}

/// Negativity N(ρ) = (‖ρᵀᴮ‖₁ − 1)/2; zero for separable states.
pub fn negativity(rho: &DMatrix<C64>, dim_a: usize, dim_b: usize) -> Result<f64> {
    let pt = partial_transpose(rho, dim_a, dim_b, Subsystem::B)?;
    Ok(((trace_norm(&pt)? - 1.0) / 2.0).max(0.0))
}

/// Logarithmic negativity Eₙ(ρ) = ln ‖ρᵀᴮ‖₁, in nats.
pub fn log_negativity(rho: &DMatrix<C64>, dim_a: usize, dim_b: usize) -> Result<f64> {
    let pt = partial_transpose(rho, dim_a, dim_b, Subsystem::B)?;
    Ok(trace_norm(&pt)?.ln().max(0.0))
}

/// Mutual information I(A:B) = S(A) + S(B) − S(AB).
pub fn mutual_information(rho: &DMatrix<C64>, dim_a: usize, dim_b: usize) -> Result<f64> {
    let rho_a = partial_trace(rho, dim_a, dim_b, Subsystem::B)?;
    let rho_b = partial_trace(rho, dim_a, dim_b, Subsystem::A)?;
    Ok(von_neumann_entropy(&rho_a)? + von_neumann_entropy(&rho_b)? - von_neumann_entropy(rho)?)
}

/// Hermitian square root via the spectral decomposition, with negative
/// rounding eigenvalues clamped to zero.
fn hermitian_sqrt(m: &DMatrix<C64>) -> Result<DMatrix<C64>> {
    let herm = hermiticity(m);
    if !herm.passed {
        return Err(QsError::NonHermitian { error: herm.error });
    }
    let eig = jacobi_hermitian(m);
    if !eig.converged {
        return Err(QsError::ConvergenceFailure { iterations: eig.iterations });
    }
    let n = m.nrows();
    let mut out = DMatrix::<C64>::zeros(n, n);
    for (k, &ev) in eig.eigenvalues.iter().enumerate() {
        let root = ev.max(0.0).sqrt();
        let vk = eig.eigenvectors.column(k).into_owned();
        out += (&vk * vk.adjoint()).scale(root);
    }
    Ok(out)
}

/// Wootters concurrence of a two-qubit density matrix.
///
/// Spin flip ρ̃ = (σy⊗σy) ρ* (σy⊗σy); the eigenvalues of ρρ̃ (taken via
/// the Hermitian similarity √ρ·ρ̃·√ρ) give C = max(0, λ₁−λ₂−λ₃−λ₄) over
/// their square roots sorted descending.
pub fn concurrence(rho: &DMatrix<C64>) -> Result<f64> {
    if rho.nrows() != 4 || rho.ncols() != 4 {
        return Err(QsError::DimensionMismatch { expected: 4, found: rho.nrows() });
    }
    let herm = hermiticity(rho);
    if !herm.passed {
        return Err(QsError::NonHermitian { error: herm.error });
    }

    let yy = kron(&pauli_y(), &pauli_y());
    let rho_tilde = &yy * rho.conjugate() * &yy;
    let sqrt_rho = hermitian_sqrt(rho)?;
    let product = &sqrt_rho * rho_tilde * &sqrt_rho;

    let mut lambdas: Vec<f64> = hermitian_eigenvalues(&product)?
        .into_iter()
        .map(|ev| ev.max(0.0).sqrt())
        .collect();
    lambdas.sort_by(|a, b| b.total_cmp(a));

    Ok((lambdas[0] - lambdas[1] - lambdas[2] - lambdas[3]).max(0.0))
}

/// Trace-preservation check for a Kraus family. Complete positivity is
/// taken as given by the Kraus representation itself.
pub fn validate_channel(kraus_ops: &[DMatrix<C64>]) -> ValidationResult {
    kraus_completeness(kraus_ops)
}

/// Apply a channel: ε(ρ) = Σ K ρ K†, lightly re-hermitized against
/// floating-point drift.
pub fn apply_channel(rho: &DMatrix<C64>, kraus_ops: &[DMatrix<C64>]) -> Result<DMatrix<C64>> {
    if kraus_ops.is_empty() {
        return Err(QsError::EmptyInput("channel has no Kraus operators".into()));
    }
    let n = rho.nrows();
    if rho.ncols() != n {
        return Err(QsError::DimensionMismatch { expected: n, found: rho.ncols() });
    }
    let mut out = DMatrix::<C64>::zeros(n, n);
    for k in kraus_ops {
        if k.nrows() != n || k.ncols() != n {
            return Err(QsError::DimensionMismatch { expected: n, found: k.nrows().max(k.ncols()) });
        }
        out += k * rho * k.adjoint();
    }
    for i in 0..n {
        for j in (i + 1)..n {
            let avg = (out[(i, j)] + out[(j, i)].conj()).scale(0.5);
            out[(i, j)] = avg;
            out[(j, i)] = avg.conj();
        }
    }
    Ok(out)
}

/// Depolarizing channel: ε(ρ) = (1−p)ρ + (p/n)·I as a Kraus family.
pub fn depolarizing_channel(dim: usize, p: f64) -> Vec<DMatrix<C64>> {
    let mut kraus = Vec::with_capacity(1 + dim * dim);
    kraus.push(DMatrix::<C64>::identity(dim, dim).scale((1.0 - p).sqrt()));

    let scale = (p / dim as f64).sqrt();
    for i in 0..dim {
        for j in 0..dim {
            let mut e = DMatrix::<C64>::zeros(dim, dim);
            e[(i, j)] = c(scale, 0.0);
            kraus.push(e);
        }
    }
    kraus
}

/// Amplitude damping toward the ground level with rate γ.
pub fn amplitude_damping_channel(dim: usize, gamma: f64) -> Vec<DMatrix<C64>> {
    let mut e0 = DMatrix::<C64>::zeros(dim, dim);
    e0[(0, 0)] = c(1.0, 0.0);
    for k in 1..dim {
        e0[(k, k)] = c((1.0 - gamma).sqrt(), 0.0);
    }
    let mut kraus = vec![e0];

    for k in 1..dim {
        let mut ek = DMatrix::<C64>::zeros(dim, dim);
        ek[(0, k)] = c(gamma.sqrt(), 0.0);
        kraus.push(ek);
    }
    kraus
}
