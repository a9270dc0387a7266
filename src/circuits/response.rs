//! Ideal small-signal frequency response of an [`MfbBandpass`].
//!
//! With admittances Y1 = 1/R1 (input), Y2 = 1/R3 (shunt), Y3 = Y4 = jωC and
//! Y5 = 1/R2 (feedback), an ideal op-amp gives
//!
//! ```text
//! H = -Y1·Y3 / (Y5·(Y1 + Y2 + Y3 + Y4) + Y3·Y4)
//! ```

use num_complex::Complex;

use crate::constants::angular_frequency;
use crate::math::Scalar;

use super::component::{Capacitor, Component, Resistor};
use super::mfb::MfbBandpass;

/// Response of a circuit at a single angular frequency.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResponsePoint {
    /// Angular frequency ω in rad/s.
    pub omega: Scalar,
    /// Complex voltage gain Vout / Vin.
    pub gain: Complex<Scalar>,
}

impl ResponsePoint {
    /// Gain magnitude in dB (20·log10|H|), clamping very small values.
    #[must_use]
    pub fn magnitude_db(&self) -> Scalar {
        const MIN: Scalar = 1e-300;
        20.0 * self.gain.norm().max(MIN).log10()
    }

    /// Phase in degrees.
    #[must_use]
    pub fn phase_deg(&self) -> Scalar {
        self.gain.arg().to_degrees()
    }
}

/// Lumped parts of a circuit, named as they appear in a schematic.
#[derive(Debug, Clone, Copy)]
struct Parts {
    r1: Resistor,
    r2: Resistor,
    r3: Resistor,
    c1: Capacitor,
    c2: Capacitor,
}

impl From<&MfbBandpass> for Parts {
    fn from(circuit: &MfbBandpass) -> Self {
        Self {
            r1: Resistor::new(circuit.r1),
            r2: Resistor::new(circuit.r2),
            r3: Resistor::new(circuit.r3),
            c1: Capacitor::new(circuit.capacitance),
            c2: Capacitor::new(circuit.capacitance),
        }
    }
}

impl Parts {
    fn transfer(&self, omega: Scalar) -> Complex<Scalar> {
        let y1 = self.r1.admittance(omega);
        let y2 = self.r3.admittance(omega);
        let y3 = self.c1.admittance(omega);
        let y4 = self.c2.admittance(omega);
        let y5 = self.r2.admittance(omega);

        let denominator = y5 * (y1 + y2 + y3 + y4) + y3 * y4;
        -(y1 * y3) / denominator
    }
}

/// Complex voltage gain at angular frequency `omega`.
#[must_use]
pub fn transfer(circuit: &MfbBandpass, omega: Scalar) -> Complex<Scalar> {
    Parts::from(circuit).transfer(omega)
}

/// Evaluates the response at each linear frequency in `frequencies_hz`.
#[must_use]
pub fn sweep_response<I>(circuit: &MfbBandpass, frequencies_hz: I) -> Vec<ResponsePoint>
where
    I: IntoIterator<Item = Scalar>,
{
    let parts = Parts::from(circuit);
    frequencies_hz
        .into_iter()
        .map(angular_frequency)
        .map(|omega| ResponsePoint {
            omega,
            gain: parts.transfer(omega),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn snapped_circuit() -> MfbBandpass {
        MfbBandpass::new(16.0e3, 33.0e3, 1.6e3, 10.0e-9)
    }

    #[test]
    fn peak_matches_closed_form_gain() {
        let circuit = snapped_circuit();
        let realized = circuit.realized();
        let h = transfer(&circuit, angular_frequency(realized.frequency));
        assert_relative_eq!(h.norm(), realized.gain, max_relative = 1.0e-9);
        // Inverting at resonance.
        assert_relative_eq!(h.re, -realized.gain, max_relative = 1.0e-9);
        assert_relative_eq!(h.im, 0.0, epsilon = 1.0e-9);
    }

    #[test]
    fn half_power_bandwidth_matches_q() {
        let circuit = snapped_circuit();
        let realized = circuit.realized();
        let f0 = realized.frequency;
        let q = realized.q;
        // Band edges of a second-order bandpass: f0·(sqrt(1 + 1/(4Q²)) ± 1/(2Q)).
        let root = (1.0 + 1.0 / (4.0 * q * q)).sqrt();
        let upper = f0 * (root + 1.0 / (2.0 * q));
        let lower = f0 * (root - 1.0 / (2.0 * q));
        let peak_db = 20.0 * realized.gain.log10();
        for point in sweep_response(&circuit, [lower, upper]) {
            assert_relative_eq!(point.magnitude_db(), peak_db - 10.0 * 2f64.log10(), epsilon = 1.0e-6);
        }
    }

    #[test]
    fn blocks_dc() {
        let h = transfer(&snapped_circuit(), 0.0);
        assert_relative_eq!(h.norm(), 0.0);
    }

    #[test]
    fn phase_is_inverted_at_centre() {
        let circuit = snapped_circuit();
        let points = sweep_response(&circuit, [circuit.centre_frequency()]);
        assert_relative_eq!(points[0].phase_deg().abs(), 180.0, epsilon = 1.0e-6);
    }

    #[test]
    fn sweep_agrees_with_single_point_evaluation() {
        let circuit = snapped_circuit();
        let frequencies = [10.0, 250.0, circuit.centre_frequency(), 4.0e3, 1.0e6];
        let points = sweep_response(&circuit, frequencies);
        assert_eq!(points.len(), frequencies.len());
        for (point, hz) in points.iter().zip(frequencies) {
            assert_relative_eq!(point.omega, angular_frequency(hz));
            assert_eq!(point.gain, transfer(&circuit, point.omega));
        }
    }
}
