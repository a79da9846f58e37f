//! qspectra — Hermitian spectral analysis, unitary time evolution, and
//! quantum-information measures on dense complex matrices.
//!
//! The crate is a library of pure, synchronous functions over
//! `nalgebra::DMatrix<Complex64>`. Raw matrices flow into the validation
//! layer and the Jacobi eigensolver; the spectral analyzer, the
//! time-evolution operator, and the information engine consume those two
//! and stay independent of each other. Physical invariants (Hermiticity,
//! unitarity, trace preservation) are checked against a fixed 1e-10
//! tolerance and violations surface as [`QsError`] values, never as
//! panics.

pub mod eigen;
pub mod error;
pub mod evolution;
pub mod gates;
pub mod linalg;
pub mod qinfo;
pub mod spectral;
pub mod state;
pub mod validate;

pub use eigen::{jacobi_hermitian, EigenDecomposition};
pub use error::{QsError, Result};
pub use evolution::{
    apply_to_state, evolve_exact, evolve_trotter, validate_evolution, DEFAULT_HBAR,
    DEFAULT_TROTTER_STEPS,
};
pub use qinfo::{
    apply_channel, concurrence, log_negativity, mutual_information, negativity, partial_trace,
    partial_transpose, purity, validate_channel, von_neumann_entropy, Subsystem,
};
pub use spectral::{
    analyze_spectrum, detect_symmetries, find_conserved_quantities, ConservedQuantity,
    SpectrumAnalysis, Symmetry,
};
pub use state::QState;
pub use validate::{ValidationResult, TOLERANCE};
