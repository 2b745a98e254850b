//! Numeric element types accepted by the spectrum routines
//!
//! One generic implementation serves 32-bit and 64-bit precision, real and
//! complex samples. `SpectralFloat` is the real precision, `Sample` is what
//! a buffer element has to support: a magnitude and multiplication by a
//! real scalar.

use num_complex::Complex;
use num_traits::Float;
use std::fmt::Debug;

/// Real floating-point precision (`f32` or `f64`)
pub trait SpectralFloat: Float + Debug + Send + Sync + 'static {
    /// Added to a magnitude before `log10` so empty bins stay finite
    const DB_EPSILON: Self;

    /// Convert an integer (length, bin index or small constant)
    fn from_usize(n: usize) -> Self;
}

impl SpectralFloat for f32 {
    const DB_EPSILON: Self = 1e-20;

    fn from_usize(n: usize) -> Self {
        n as f32
    }
}

impl SpectralFloat for f64 {
    const DB_EPSILON: Self = 1e-20;

    fn from_usize(n: usize) -> Self {
        n as f64
    }
}

/// Element of a transform-domain buffer
pub trait Sample: Copy + Debug + Send + Sync + 'static {
    /// Precision of the scalar this sample is scaled by
    type Real: SpectralFloat;

    /// Absolute value (modulus for complex samples)
    fn magnitude(self) -> Self::Real;

    /// Multiply by a real factor
    fn scale(self, factor: Self::Real) -> Self;
}

macro_rules! impl_sample {
    ($t:ty) => {
        impl Sample for $t {
            type Real = $t;

            fn magnitude(self) -> $t {
                self.abs()
            }

            fn scale(self, factor: $t) -> $t {
                self * factor
            }
        }

        impl Sample for Complex<$t> {
            type Real = $t;

            fn magnitude(self) -> $t {
                self.norm()
            }

            fn scale(self, factor: $t) -> Self {
                self * factor
            }
        }
    };
}

impl_sample!(f32);
impl_sample!(f64);
