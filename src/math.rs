//! Shared numerical primitives.

use num_complex::Complex;

/// Primary scalar type used across the crate.
pub type Scalar = f64;
/// Primary complex scalar type used for frequency responses.
pub type CScalar = Complex<Scalar>;

/// Equivalent resistance of two resistors in parallel: `1 / (1/a + 1/b)`.
#[inline]
#[must_use]
pub fn parallel(a: Scalar, b: Scalar) -> Scalar {
    1.0 / (a.recip() + b.recip())
}

/// Absolute deviation `|actual - expected|`.
#[inline]
#[must_use]
pub fn deviation(actual: Scalar, expected: Scalar) -> Scalar {
    (actual - expected).abs()
}

/// Relative error of `actual` against `expected` in percent.
#[inline]
#[must_use]
pub fn percent_error(actual: Scalar, expected: Scalar) -> Scalar {
    deviation(actual, expected) / expected * 100.0
}
