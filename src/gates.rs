//! Standard operator library: Pauli matrices plus the symmetry operators
//! the spectral analyzer tests against.

use nalgebra::DMatrix;
use num_complex::Complex64 as C64;

use crate::linalg::c;

pub fn identity(n: usize) -> DMatrix<C64> {
    DMatrix::identity(n, n)
}

pub fn pauli_x() -> DMatrix<C64> {
    DMatrix::from_row_slice(2, 2, &[c(0.0, 0.0), c(1.0, 0.0), c(1.0, 0.0), c(0.0, 0.0)])
}

pub fn pauli_y() -> DMatrix<C64> {
    DMatrix::from_row_slice(2, 2, &[c(0.0, 0.0), c(0.0, -1.0), c(0.0, 1.0), c(0.0, 0.0)])
}

pub fn pauli_z() -> DMatrix<C64> {
    DMatrix::from_row_slice(2, 2, &[c(1.0, 0.0), c(0.0, 0.0), c(0.0, 0.0), c(-1.0, 0.0)])
}

pub fn hadamard() -> DMatrix<C64> {
    let s = 1.0 / 2.0_f64.sqrt();
    DMatrix::from_row_slice(2, 2, &[c(s, 0.0), c(s, 0.0), c(s, 0.0), c(-s, 0.0)])
}

/// Global parity ⊗ᵢ σzᵢ: diagonal with sign (−1)^popcount(basis index).
pub fn parity_operator(num_qubits: usize) -> DMatrix<C64> {
    let dim = 1usize << num_qubits;
    let mut m = DMatrix::<C64>::zeros(dim, dim);
    for basis in 0..dim {
        let sign = if (basis.count_ones() & 1) == 0 { 1.0 } else { -1.0 };
        m[(basis, basis)] = c(sign, 0.0);
    }
    m
}

/// Particle-number operator: diagonal counting set bits of the basis index.
pub fn number_operator(num_qubits: usize) -> DMatrix<C64> {
    let dim = 1usize << num_qubits;
    let mut m = DMatrix::<C64>::zeros(dim, dim);
    for basis in 0..dim {
        m[(basis, basis)] = c(basis.count_ones() as f64, 0.0);
    }
    m
}
