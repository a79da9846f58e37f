//! Jacobi eigen-decomposition for Hermitian matrices.
//!
//! Classical Jacobi: annihilate the largest off-diagonal entry with a
//! complex 2×2 rotation, accumulate the rotations as the eigenvector
//! matrix, stop when the off-diagonal mass is below tolerance or the
//! rotation budget (100·n²) runs out. Hermiticity of the input is the
//! caller's contract; the analyzers check it before delegating here.

use nalgebra::DMatrix;
use num_complex::Complex64 as C64;

use crate::linalg::off_diagonal_sq;
use crate::validate::TOLERANCE;

/// Raw spectral output. Eigenvalues are real (Hermitian input) and come
/// out in diagonal order, not sorted; degeneracy grouping and ordering
/// are the analyzer's job.
#[derive(Clone, Debug)]
pub struct EigenDecomposition {
    pub eigenvalues: Vec<f64>,
    /// Columns are the eigenvectors, aligned with `eigenvalues`.
    pub eigenvectors: DMatrix<C64>,
    pub converged: bool,
    pub iterations: usize,
}

impl EigenDecomposition {
    /// Copy with eigenpairs reordered ascending by eigenvalue.
    pub fn sorted(&self) -> EigenDecomposition {
        let n = self.eigenvalues.len();
        let mut order: Vec<usize> = (0..n).collect();
        order.sort_by(|&a, &b| self.eigenvalues[a].total_cmp(&self.eigenvalues[b]));

        let eigenvalues: Vec<f64> = order.iter().map(|&k| self.eigenvalues[k]).collect();
        let mut eigenvectors = DMatrix::<C64>::zeros(n, n);
        for (dst, &src) in order.iter().enumerate() {
            eigenvectors.set_column(dst, &self.eigenvectors.column(src));
        }
        EigenDecomposition {
            eigenvalues,
            eigenvectors,
            converged: self.converged,
            iterations: self.iterations,
        }
    }
}

/// Diagonalize a Hermitian matrix by cyclic Jacobi rotations.
pub fn jacobi_hermitian(h: &DMatrix<C64>) -> EigenDecomposition {
    let n = h.nrows();
    let mut a = h.clone();
    let mut v = DMatrix::<C64>::identity(n, n);

    let budget = 100 * n * n;
    let mut iterations = 0;
    // Off-diagonal Frobenius mass below TOLERANCE² means every residual
    // entry is under the working precision.
    let target = TOLERANCE * TOLERANCE;

    while off_diagonal_sq(&a) >= target && iterations < budget {
        // Largest off-diagonal element picks the rotation plane.
        let (mut p, mut q, mut max) = (0, 1, 0.0_f64);
        for i in 0..n {
            for j in (i + 1)..n {
                let mag = a[(i, j)].norm();
                if mag > max {
                    max = mag;
                    p = i;
                    q = j;
                }
            }
        }
        if max == 0.0 {
            break;
        }

        rotate(&mut a, &mut v, p, q);
        iterations += 1;
    }

    let converged = off_diagonal_sq(&a) < target;
    let eigenvalues: Vec<f64> = (0..n).map(|i| a[(i, i)].re).collect();

    EigenDecomposition { eigenvalues, eigenvectors: v, converged, iterations }
}

/// One complex Jacobi rotation annihilating a[(p, q)].
///
/// With a_pq = r·e^{iφ} the plane rotation
///   R_pp = cosθ, R_pq = −sinθ·e^{iφ}, R_qp = sinθ·e^{−iφ}, R_qq = cosθ
/// zeroes the (p, q) entry of R†AR when tan 2θ = 2r / (a_pp − a_qq).
fn rotate(a: &mut DMatrix<C64>, v: &mut DMatrix<C64>, p: usize, q: usize) {
    let n = a.nrows();
    let apq = a[(p, q)];
    let r = apq.norm();
    let phase = apq / C64::new(r, 0.0);
    let phase_c = phase.conj();

    let app = a[(p, p)].re;
    let aqq = a[(q, q)].re;
    let theta = 0.5 * (2.0 * r).atan2(app - aqq);
    let (s, c) = theta.sin_cos();
    let cs = C64::new(c, 0.0);
    let ss = C64::new(s, 0.0);

    // A ← A R (columns p, q)
    for i in 0..n {
        let aip = a[(i, p)];
        let aiq = a[(i, q)];
        a[(i, p)] = aip * cs + aiq * ss * phase_c;
        a[(i, q)] = aiq * cs - aip * ss * phase;
    }
    // A ← R† A (rows p, q)
    for j in 0..n {
        let apj = a[(p, j)];
        let aqj = a[(q, j)];
        a[(p, j)] = apj * cs + aqj * ss * phase;
        a[(q, j)] = aqj * cs - apj * ss * phase_c;
    }
    // The annihilated pair is exactly zero by construction.
    a[(p, q)] = C64::new(0.0, 0.0);
    a[(q, p)] = C64::new(0.0, 0.0);

    // V ← V R keeps the columns as eigenvectors of the original matrix.
    for i in 0..n {
        let vip = v[(i, p)];
        let viq = v[(i, q)];
        v[(i, p)] = vip * cs + viq * ss * phase_c;
        v[(i, q)] = viq * cs - vip * ss * phase;
    }
}
