//! Numeric constants and small conversion helpers shared by the design code.
//!
//! ## Standard series
//!
//! The E-series base mantissas follow IEC 60063. Only the two-significant-digit
//! series are carried here:
//! - E24 for 5 % tolerance resistors
//! - E12 for 10 % tolerance capacitors
//!
//! ## Units
//!
//! Every quantity handled by the library is kept in base SI units (ohms,
//! farads, hertz). Prefix scaling happens only at the display boundary, see
//! [`crate::units`].

use std::f64::consts::PI;

use crate::math::Scalar;

/// Base mantissas for 5 % tolerance resistors (E24).
pub const E24_BASES: [Scalar; 24] = [
    10.0, 11.0, 12.0, 13.0, 15.0, 16.0, 18.0, 20.0, 22.0, 24.0, 27.0, 30.0, 33.0, 36.0, 39.0,
    43.0, 47.0, 51.0, 56.0, 62.0, 68.0, 75.0, 82.0, 91.0,
];

/// Base mantissas for 10 % tolerance capacitors (E12).
pub const E12_BASES: [Scalar; 12] = [
    10.0, 12.0, 15.0, 18.0, 22.0, 27.0, 33.0, 39.0, 47.0, 56.0, 68.0, 82.0,
];

/// Number of decades spanned by the generated tables (10⁰ through 10⁶).
pub const STANDARD_DECADES: usize = 7;

/// Pico scale factor. Swept capacitor bases are expressed in picofarads.
pub const PICO: Scalar = 1.0e-12;
/// Nano scale factor.
pub const NANO: Scalar = 1.0e-9;
/// Micro scale factor.
pub const MICRO: Scalar = 1.0e-6;
/// Milli scale factor.
pub const MILLI: Scalar = 1.0e-3;
/// Kilo scale factor.
pub const KILO: Scalar = 1.0e3;
/// Mega scale factor.
pub const MEGA: Scalar = 1.0e6;
/// Giga scale factor.
pub const GIGA: Scalar = 1.0e9;

/// Returns the angular frequency corresponding to a linear frequency `hz`.
#[inline]
#[must_use]
pub fn angular_frequency(hz: Scalar) -> Scalar {
    2.0 * PI * hz
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn angular_frequency_of_one_kilohertz() {
        assert_relative_eq!(angular_frequency(1.0e3), 6_283.185_307_179_586, max_relative = 1.0e-12);
        assert_relative_eq!(angular_frequency(0.0), 0.0);
    }

    #[test]
    fn base_lists_are_strictly_increasing() {
        assert!(E24_BASES.windows(2).all(|w| w[0] < w[1]));
        assert!(E12_BASES.windows(2).all(|w| w[0] < w[1]));
    }
}
