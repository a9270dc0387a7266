//! First-order RC corner frequency.

use std::f64::consts::PI;

use crate::math::Scalar;

use super::mfb::{ensure_positive, DesignError, DesignQuantity};

/// -3 dB frequency of a single RC section: `1 / (2π R C)`.
#[must_use]
pub fn cutoff_frequency(resistance: Scalar, capacitance: Scalar) -> Scalar {
    1.0 / (2.0 * PI * resistance * capacitance)
}

/// Checked variant of [`cutoff_frequency`] for user-supplied values.
pub fn try_cutoff_frequency(resistance: Scalar, capacitance: Scalar) -> Result<Scalar, DesignError> {
    let resistance = ensure_positive(DesignQuantity::Resistance, resistance)?;
    let capacitance = ensure_positive(DesignQuantity::Capacitance, capacitance)?;
    Ok(cutoff_frequency(resistance, capacitance))
}
