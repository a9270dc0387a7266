use num_complex::Complex;

use crate::math::Scalar;

/// Trait implemented by all circuit components that can provide a frequency-domain impedance.
pub trait Component {
    /// Returns the component's impedance for an angular frequency `omega` (rad/s).
    fn impedance(&self, omega: Scalar) -> Complex<Scalar>;

    /// Returns the admittance `1 / Z` at `omega`.
    fn admittance(&self, omega: Scalar) -> Complex<Scalar> {
        self.impedance(omega).inv()
    }
}

/// Lumped resistor model.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resistor {
    resistance: Scalar,
}

impl Resistor {
    /// Creates a resistor of `resistance_ohms`.
    #[must_use]
    pub const fn new(resistance_ohms: Scalar) -> Self {
        Self {
            resistance: resistance_ohms,
        }
    }
}

impl Component for Resistor {
    fn impedance(&self, _omega: Scalar) -> Complex<Scalar> {
        Complex::new(self.resistance, 0.0)
    }
}

/// Lumped capacitor model (ideal).
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Capacitor {
    capacitance: Scalar,
}

impl Capacitor {
    /// Creates a capacitor of `capacitance_f` farads.
    #[must_use]
    pub const fn new(capacitance_f: Scalar) -> Self {
        Self {
            capacitance: capacitance_f,
        }
    }
}

impl Component for Capacitor {
    fn impedance(&self, omega: Scalar) -> Complex<Scalar> {
        if omega.abs() < Scalar::EPSILON {
            Complex::new(f64::INFINITY, 0.0)
        } else {
            Complex::new(0.0, -1.0 / (omega * self.capacitance))
        }
    }

    // jωC directly, so DC yields an open circuit instead of 1/∞.
    fn admittance(&self, omega: Scalar) -> Complex<Scalar> {
        Complex::new(0.0, omega * self.capacitance)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn resistor_impedance_is_real() {
        let r = Resistor::new(100.0);
        let z = r.impedance(1.0);
        assert_relative_eq!(z.re, 100.0);
        assert_relative_eq!(z.im, 0.0);
        assert_relative_eq!(r.admittance(1.0).re, 0.01);
        assert_relative_eq!(r.admittance(1.0).im, 0.0);
    }

    #[test]
    fn capacitor_impedance_is_reactive() {
        let c = Capacitor::new(1e-6);
        let omega = 1.0e3;
        let z = c.impedance(omega);
        assert_relative_eq!(z.re, 0.0, epsilon = 1.0e-12);
        assert!(z.im < 0.0);
        let y = c.admittance(omega);
        assert_relative_eq!(y.im, 1.0e-3, max_relative = 1.0e-12);
        assert_relative_eq!(c.admittance(0.0).norm(), 0.0);
    }
}
