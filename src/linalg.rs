//! Dense complex-matrix primitives shared by every engine.
//!
//! Everything here is pure and allocation-per-call; inputs are never
//! mutated. `nalgebra` provides multiply/add/adjoint/trace/norm, so this
//! module only carries the constructions it lacks.

use nalgebra::{DMatrix, DVector};
use num_complex::Complex64 as C64;

#[inline]
pub fn c(re: f64, im: f64) -> C64 {
    C64::new(re, im)
}

/// Kronecker product A ⊗ B.
pub fn kron(a: &DMatrix<C64>, b: &DMatrix<C64>) -> DMatrix<C64> {
    let (ar, ac) = (a.nrows(), a.ncols());
    let (br, bc) = (b.nrows(), b.ncols());
    let mut out = DMatrix::<C64>::from_element(ar * br, ac * bc, c(0.0, 0.0));
    for i in 0..ar {
        for j in 0..ac {
            let aij = a[(i, j)];
            for k in 0..br {
                for l in 0..bc {
                    out[(i * br + k, j * bc + l)] = aij * b[(k, l)];
                }
            }
        }
    }
    out
}

/// Commutator [A, B] = AB − BA.
pub fn commutator(a: &DMatrix<C64>, b: &DMatrix<C64>) -> DMatrix<C64> {
    a * b - b * a
}

/// Frobenius norm of the commutator, the symmetry-detection metric.
pub fn commutator_norm(a: &DMatrix<C64>, b: &DMatrix<C64>) -> f64 {
    commutator(a, b).norm()
}

/// Rank-1 projector |v⟩⟨v|.
pub fn projector(v: &DVector<C64>) -> DMatrix<C64> {
    v * v.adjoint()
}

/// ‖A − B‖_F, the distance metric used by every validation check.
pub fn frobenius_distance(a: &DMatrix<C64>, b: &DMatrix<C64>) -> f64 {
    (a - b).norm()
}

/// Sum of squared off-diagonal magnitudes, the Jacobi convergence measure.
pub fn off_diagonal_sq(m: &DMatrix<C64>) -> f64 {
    let n = m.nrows();
    let mut sum = 0.0;
    for i in 0..n {
        for j in 0..n {
            if i != j {
                sum += m[(i, j)].norm_sqr();
            }
        }
    }
    sum
}
