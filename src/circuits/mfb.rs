//! Closed-form design equations for the equal-capacitor multiple-feedback bandpass.
//!
//! Topology: R1 from the input to the summing node, R3 from the summing node to
//! ground, one capacitor from the summing node to the op-amp output, one from
//! the summing node to the inverting input, and R2 from the output back to the
//! inverting input. R1 and R2 fix the gain; R3 trims the centre frequency
//! and Q without touching it.

use std::f64::consts::PI;

use thiserror::Error;

use crate::math::{parallel, Scalar};

/// Quantity named in a [`DesignError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DesignQuantity {
    /// Centre frequency in hertz.
    Frequency,
    /// Quality factor.
    Q,
    /// Gain magnitude at the centre frequency.
    Gain,
    /// Capacitance scaling multiplier.
    CapacitanceMultiplier,
    /// Capacitance in farads.
    Capacitance,
    /// Resistance in ohms.
    Resistance,
}

impl std::fmt::Display for DesignQuantity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Frequency => "centre frequency",
            Self::Q => "quality factor",
            Self::Gain => "gain",
            Self::CapacitanceMultiplier => "capacitance multiplier",
            Self::Capacitance => "capacitance",
            Self::Resistance => "resistance",
        };
        f.write_str(name)
    }
}

/// Raised when a design request cannot be realized.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DesignError {
    /// The value is NaN or infinite.
    #[error("invalid design: {quantity} must be finite, got {value}")]
    NonFinite {
        /// Offending quantity.
        quantity: DesignQuantity,
        /// Supplied value.
        value: Scalar,
    },
    /// The value is zero or negative.
    #[error("invalid design: {quantity} must be positive, got {value}")]
    NonPositive {
        /// Offending quantity.
        quantity: DesignQuantity,
        /// Supplied value.
        value: Scalar,
    },
    /// `A >= 2 Q²` drives R3 to infinity or below zero.
    #[error("invalid design: gain {gain} must be below 2*Q^2 = {limit}")]
    GainTooHigh {
        /// Requested gain magnitude.
        gain: Scalar,
        /// Exclusive upper bound `2 Q²`.
        limit: Scalar,
    },
}

pub(crate) fn ensure_positive(quantity: DesignQuantity, value: Scalar) -> Result<Scalar, DesignError> {
    if !value.is_finite() {
        return Err(DesignError::NonFinite { quantity, value });
    }
    if value <= 0.0 {
        return Err(DesignError::NonPositive { quantity, value });
    }
    Ok(value)
}

/// Validated filter request. Only constructible through [`DesignTarget::new`].
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DesignTarget {
    frequency: Scalar,
    q: Scalar,
    gain: Scalar,
    capacitance_multiplier: Scalar,
}

impl DesignTarget {
    /// Validates a request.
    ///
    /// Every input must be finite and positive, and the gain magnitude must
    /// stay below `2 Q²` so that R3 is a real, positive resistor.
    pub fn new(
        frequency: Scalar,
        q: Scalar,
        gain: Scalar,
        capacitance_multiplier: Scalar,
    ) -> Result<Self, DesignError> {
        let frequency = ensure_positive(DesignQuantity::Frequency, frequency)?;
        let q = ensure_positive(DesignQuantity::Q, q)?;
        let gain = ensure_positive(DesignQuantity::Gain, gain)?;
        let capacitance_multiplier =
            ensure_positive(DesignQuantity::CapacitanceMultiplier, capacitance_multiplier)?;

        let limit = max_gain(q);
        if gain >= limit {
            return Err(DesignError::GainTooHigh { gain, limit });
        }

        Ok(Self {
            frequency,
            q,
            gain,
            capacitance_multiplier,
        })
    }

    /// Centre frequency in hertz.
    #[must_use]
    pub fn frequency(&self) -> Scalar {
        self.frequency
    }

    /// Quality factor.
    #[must_use]
    pub fn q(&self) -> Scalar {
        self.q
    }

    /// Gain magnitude at the centre frequency (V/V).
    #[must_use]
    pub fn gain(&self) -> Scalar {
        self.gain
    }

    /// Factor applied to every swept base capacitance.
    #[must_use]
    pub fn capacitance_multiplier(&self) -> Scalar {
        self.capacitance_multiplier
    }

    /// Exact resistor values realizing this target with capacitors of `capacitance` farads.
    #[must_use]
    pub fn components(&self, capacitance: Scalar) -> ExactComponents {
        ExactComponents {
            r1: r1(self.frequency, capacitance, self.q, self.gain),
            r2: r2(self.frequency, capacitance, self.q),
            r3: r3(self.frequency, capacitance, self.q, self.gain),
        }
    }
}

/// Exclusive upper bound on the gain magnitude for a given Q.
#[inline]
#[must_use]
pub fn max_gain(q: Scalar) -> Scalar {
    2.0 * q * q
}

/// Input resistor: `Q / (2π f C A)`.
#[must_use]
pub fn r1(frequency: Scalar, capacitance: Scalar, q: Scalar, gain: Scalar) -> Scalar {
    q / (2.0 * PI * frequency * capacitance * gain)
}

/// Feedback resistor: `Q / (π f C)`.
#[must_use]
pub fn r2(frequency: Scalar, capacitance: Scalar, q: Scalar) -> Scalar {
    q / (PI * frequency * capacitance)
}

/// Shunt resistor: `Q / (2π f C (2Q² - A))`. Non-positive unless `A < 2Q²`.
#[must_use]
pub fn r3(frequency: Scalar, capacitance: Scalar, q: Scalar, gain: Scalar) -> Scalar {
    q / (2.0 * PI * frequency * capacitance * (max_gain(q) - gain))
}

/// Real-valued resistor set from the synthesis equations.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExactComponents {
    /// Input resistor in ohms.
    pub r1: Scalar,
    /// Feedback resistor in ohms.
    pub r2: Scalar,
    /// Shunt resistor in ohms.
    pub r3: Scalar,
}

/// Centre frequency, Q and gain magnitude of a built circuit.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Realized {
    /// Centre frequency in hertz.
    pub frequency: Scalar,
    /// Quality factor.
    pub q: Scalar,
    /// Gain magnitude at the centre frequency. The actual gain is inverted.
    pub gain: Scalar,
}

/// A concrete MFB bandpass: three resistors and two equal capacitors.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MfbBandpass {
    /// Input resistor in ohms.
    pub r1: Scalar,
    /// Feedback resistor in ohms.
    pub r2: Scalar,
    /// Shunt resistor in ohms.
    pub r3: Scalar,
    /// Each capacitor in farads.
    pub capacitance: Scalar,
}

impl MfbBandpass {
    /// Builds a circuit from explicit values.
    #[must_use]
    pub fn new(r1: Scalar, r2: Scalar, r3: Scalar, capacitance: Scalar) -> Self {
        Self {
            r1,
            r2,
            r3,
            capacitance,
        }
    }

    /// Builds a circuit from a synthesized resistor set.
    #[must_use]
    pub fn from_exact(components: ExactComponents, capacitance: Scalar) -> Self {
        Self::new(components.r1, components.r2, components.r3, capacitance)
    }

    /// Centre frequency: `1 / (2π C sqrt((R1 ∥ R3) R2))`.
    #[must_use]
    pub fn centre_frequency(&self) -> Scalar {
        1.0 / (2.0 * PI * self.capacitance * (parallel(self.r1, self.r3) * self.r2).sqrt())
    }

    /// Quality factor: `0.5 sqrt(R2 / (R1 ∥ R3))`.
    #[must_use]
    pub fn q(&self) -> Scalar {
        0.5 * (self.r2 / parallel(self.r1, self.r3)).sqrt()
    }

    /// Gain magnitude at the centre frequency: `R2 / (2 R1)`.
    #[must_use]
    pub fn gain(&self) -> Scalar {
        self.r2 / (2.0 * self.r1)
    }

    /// All three figures at once.
    #[must_use]
    pub fn realized(&self) -> Realized {
        Realized {
            frequency: self.centre_frequency(),
            q: self.q(),
            gain: self.gain(),
        }
    }
}
