//! Normalized state vectors and Born-rule measurement sampling.

use nalgebra::DVector;
use num_complex::Complex64 as C64;
use rand::Rng;

use crate::error::{QsError, Result};
use crate::validate::TOLERANCE;

#[derive(Clone, Debug)]
pub struct QState {
    pub data: DVector<C64>,
}

impl QState {
    /// Create from raw amplitudes; rejects non-normalized input unless
    /// `auto_normalize` is set.
    pub fn try_new(vec: DVector<C64>, auto_normalize: bool) -> Result<Self> {
        if vec.is_empty() {
            return Err(QsError::EmptyInput("state vector has no amplitudes".into()));
        }
        let mut v = vec;
        let norm = v.iter().map(|z| z.norm_sqr()).sum::<f64>().sqrt();
        if (norm - 1.0).abs() < TOLERANCE {
            Ok(Self { data: v })
        } else if auto_normalize {
            if norm < TOLERANCE {
                return Err(QsError::NormalizationViolation { norm });
            }
            v /= C64::from(norm);
            Ok(Self { data: v })
        } else {
            Err(QsError::NormalizationViolation { norm })
        }
    }

    /// Computational basis state |k⟩ in an n-dimensional space.
    pub fn basis(n: usize, k: usize) -> Result<Self> {
        if k >= n {
            return Err(QsError::DimensionMismatch { expected: n, found: k });
        }
        let mut data = DVector::from_element(n, C64::new(0.0, 0.0));
        data[k] = C64::new(1.0, 0.0);
        Ok(Self { data })
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// ⟨self|other⟩.
    pub fn inner(&self, other: &QState) -> Result<C64> {
        if self.len() != other.len() {
            return Err(QsError::DimensionMismatch { expected: self.len(), found: other.len() });
        }
        Ok(self.data.dotc(&other.data))
    }

    /// Born-rule probabilities |ψᵢ|².
    pub fn probabilities(&self) -> Vec<f64> {
        self.data.iter().map(|z| z.norm_sqr()).collect()
    }

    /// Sample one measurement outcome in the computational basis.
    pub fn measure<R: Rng>(&self, rng: &mut R) -> usize {
        let probs = self.probabilities();
        let draw: f64 = rng.gen();
        let mut cumulative = 0.0;
        for (index, p) in probs.iter().enumerate() {
            cumulative += p;
            if draw <= cumulative {
                return index;
            }
        }
        // rounding can leave the cumulative sum a hair under 1
        probs.len() - 1
    }
}
