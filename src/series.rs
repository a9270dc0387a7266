//! Standard (E-series) component value tables and nearest-value selection.

use std::ops::Deref;

use crate::constants::{E12_BASES, E24_BASES, STANDARD_DECADES};
use crate::math::Scalar;

/// Standard value series defined by a list of two-digit base mantissas.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Series {
    /// 12 values per decade, 10 % tolerance.
    E12,
    /// 24 values per decade, 5 % tolerance.
    #[default]
    E24,
}

impl Series {
    /// Base mantissas of the series, ascending.
    #[must_use]
    pub const fn bases(self) -> &'static [Scalar] {
        match self {
            Self::E12 => &E12_BASES,
            Self::E24 => &E24_BASES,
        }
    }

    /// Table spanning `decades` decades starting at the bare base values.
    #[must_use]
    pub fn table(self, decades: usize) -> StandardValueSet {
        generate_standard_values(self.bases(), decades)
    }
}

/// Immutable table of standard component magnitudes.
///
/// Values are kept in generation order: every decade of the first base, then
/// every decade of the second base, and so on.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct StandardValueSet {
    values: Vec<Scalar>,
}

impl StandardValueSet {
    /// E24 resistor table from 10 Ω to 9.1 MΩ.
    #[must_use]
    pub fn resistors() -> Self {
        Series::E24.table(STANDARD_DECADES)
    }

    /// Values in generation order.
    #[must_use]
    pub fn values(&self) -> &[Scalar] {
        &self.values
    }

    /// Closest standard value to `exact`.
    ///
    /// Tables built by [`generate_standard_values`] with at least one base and
    /// one decade are never empty; an empty table yields `None`.
    #[must_use]
    pub fn nearest(&self, exact: Scalar) -> Option<Scalar> {
        pick_nearest(exact, &self.values)
    }
}

impl Deref for StandardValueSet {
    type Target = [Scalar];

    fn deref(&self) -> &Self::Target {
        &self.values
    }
}

/// Expands each base across `decades` decades: `base * 10^i` for `i` in `0..decades`.
#[must_use]
pub fn generate_standard_values(bases: &[Scalar], decades: usize) -> StandardValueSet {
    let values = bases
        .iter()
        .flat_map(|&base| (0..decades).map(move |i| base * decade_multiplier(i)))
        .collect();
    StandardValueSet { values }
}

fn decade_multiplier(exponent: usize) -> Scalar {
    // Exact up to 10^22.
    (0..exponent).fold(1.0, |acc, _| acc * 10.0)
}

/// Returns the candidate closest to `exact`, or `None` for an empty slice.
///
/// A later candidate only replaces the current best when strictly closer, so
/// ties go to the candidate encountered first.
#[must_use]
pub fn pick_nearest(exact: Scalar, candidates: &[Scalar]) -> Option<Scalar> {
    let (&first, rest) = candidates.split_first()?;
    let closest = rest.iter().fold(first, |closest, &candidate| {
        if (exact - candidate).abs() < (exact - closest).abs() {
            candidate
        } else {
            closest
        }
    });
    Some(closest)
}
