//! Standard-value sweep: one candidate circuit per standard capacitance,
//! ranked by how closely the snapped circuit meets the target.

use thiserror::Error;
use tracing::{debug, info};

use crate::circuits::mfb::{DesignTarget, ExactComponents, MfbBandpass, Realized};
use crate::constants::{PICO, STANDARD_DECADES};
use crate::math::{deviation, percent_error, Scalar};
use crate::series::{Series, StandardValueSet};

/// Errors raised while sweeping.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SweepError {
    /// The resistor table holds no values to snap to.
    #[error("resistor table is empty")]
    EmptyResistorTable,
}

/// Which standard tables a sweep draws from.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SweepConfig {
    /// Series resistors are snapped to.
    pub resistor_series: Series,
    /// Decades spanned by the resistor table, starting at the bare bases in ohms.
    pub resistor_decades: usize,
    /// Series whose bases, in picofarads, are swept as capacitor values.
    pub capacitor_series: Series,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            resistor_series: Series::E24,
            resistor_decades: STANDARD_DECADES,
            capacitor_series: Series::E12,
        }
    }
}

impl SweepConfig {
    /// Resistor table described by this configuration.
    #[must_use]
    pub fn resistor_table(&self) -> StandardValueSet {
        self.resistor_series.table(self.resistor_decades)
    }

    /// Swept capacitor bases in picofarads.
    #[must_use]
    pub fn capacitance_bases(&self) -> &'static [Scalar] {
        self.capacitor_series.bases()
    }

    /// Runs [`sweep`] over the configured tables.
    pub fn run(&self, target: &DesignTarget) -> Result<Vec<Configuration>, SweepError> {
        sweep(target, self.capacitance_bases(), &self.resistor_table())
    }
}

/// Exact value, built value and how far apart they are.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Discrepancy {
    /// Ideal value.
    pub expected: Scalar,
    /// Value obtained with standard parts.
    pub actual: Scalar,
    /// `|actual - expected|`.
    pub deviation: Scalar,
    /// Deviation relative to `expected`, in percent.
    pub percent: Scalar,
}

impl Discrepancy {
    /// Compares `actual` against `expected`.
    #[must_use]
    pub fn new(actual: Scalar, expected: Scalar) -> Self {
        Self {
            expected,
            actual,
            deviation: deviation(actual, expected),
            percent: percent_error(actual, expected),
        }
    }
}

/// Per-quantity comparison of a snapped circuit against the ideal design.
///
/// Resistor entries are informational; only frequency, Q and gain feed
/// [`ErrorReport::average`].
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ErrorReport {
    /// R1 snapped vs exact.
    pub r1: Discrepancy,
    /// R2 snapped vs exact.
    pub r2: Discrepancy,
    /// R3 snapped vs exact.
    pub r3: Discrepancy,
    /// Realized vs target centre frequency.
    pub frequency: Discrepancy,
    /// Realized vs target Q.
    pub q: Discrepancy,
    /// Realized vs target gain magnitude.
    pub gain: Discrepancy,
}

impl ErrorReport {
    /// Builds the comparison for one candidate.
    #[must_use]
    pub fn new(
        target: &DesignTarget,
        exact: &ExactComponents,
        circuit: &MfbBandpass,
        realized: &Realized,
    ) -> Self {
        Self {
            r1: Discrepancy::new(circuit.r1, exact.r1),
            r2: Discrepancy::new(circuit.r2, exact.r2),
            r3: Discrepancy::new(circuit.r3, exact.r3),
            frequency: Discrepancy::new(realized.frequency, target.frequency()),
            q: Discrepancy::new(realized.q, target.q()),
            gain: Discrepancy::new(realized.gain, target.gain()),
        }
    }

    /// Mean percent error of frequency, Q and gain.
    #[must_use]
    pub fn average(&self) -> Scalar {
        (self.frequency.percent + self.q.percent + self.gain.percent) / 3.0
    }
}

/// One candidate: a standard capacitance with its snapped resistors.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Configuration {
    /// Built circuit: standard resistors and the swept capacitance.
    pub circuit: MfbBandpass,
    /// Ideal resistors for the same capacitance.
    pub exact: ExactComponents,
    /// Frequency, Q and gain of `circuit`.
    pub realized: Realized,
    /// Detailed comparison against the target.
    pub errors: ErrorReport,
    /// Ranking score, see [`ErrorReport::average`].
    pub average_error: Scalar,
}

impl Configuration {
    /// Capacitance of each capacitor in farads.
    #[must_use]
    pub fn capacitance(&self) -> Scalar {
        self.circuit.capacitance
    }
}

/// Evaluates one capacitance: synthesize, snap, re-analyze, score.
pub fn evaluate(
    target: &DesignTarget,
    capacitance: Scalar,
    resistor_table: &StandardValueSet,
) -> Result<Configuration, SweepError> {
    let exact = target.components(capacitance);
    let snap = |value: Scalar| {
        resistor_table
            .nearest(value)
            .ok_or(SweepError::EmptyResistorTable)
    };
    let circuit = MfbBandpass::new(snap(exact.r1)?, snap(exact.r2)?, snap(exact.r3)?, capacitance);
    let realized = circuit.realized();
    let errors = ErrorReport::new(target, &exact, &circuit, &realized);

    debug!(
        capacitance,
        r1.exact = exact.r1,
        r1.real = circuit.r1,
        r1.error_pct = errors.r1.percent,
        r2.exact = exact.r2,
        r2.real = circuit.r2,
        r2.error_pct = errors.r2.percent,
        r3.exact = exact.r3,
        r3.real = circuit.r3,
        r3.error_pct = errors.r3.percent,
        f.real = realized.frequency,
        f.error_pct = errors.frequency.percent,
        q.real = realized.q,
        q.error_pct = errors.q.percent,
        a.real = realized.gain,
        a.error_pct = errors.gain.percent,
        "evaluated candidate"
    );

    Ok(Configuration {
        circuit,
        exact,
        realized,
        errors,
        average_error: errors.average(),
    })
}

/// Sweeps `capacitance_bases` (picofarads, scaled by the target's multiplier)
/// and returns every candidate ranked by [`rank`].
pub fn sweep(
    target: &DesignTarget,
    capacitance_bases: &[Scalar],
    resistor_table: &StandardValueSet,
) -> Result<Vec<Configuration>, SweepError> {
    let mut configurations = capacitance_bases
        .iter()
        .map(|&base| {
            let capacitance = base * PICO * target.capacitance_multiplier();
            evaluate(target, capacitance, resistor_table)
        })
        .collect::<Result<Vec<_>, _>>()?;
    rank(&mut configurations);

    if let Some(best) = configurations.first() {
        info!(
            candidates = configurations.len(),
            best_capacitance = best.capacitance(),
            best_error_pct = best.average_error,
            "sweep complete"
        );
    }
    Ok(configurations)
}

/// Stable ascending sort by average error rounded to the three decimals the
/// report prints. Scores that agree to three decimals keep sweep order.
pub fn rank(configurations: &mut [Configuration]) {
    configurations.sort_by(|a, b| {
        ranking_key(a.average_error).total_cmp(&ranking_key(b.average_error))
    });
}

fn ranking_key(error: Scalar) -> Scalar {
    (error * 1_000.0).round()
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::constants::E12_BASES;

    fn target() -> DesignTarget {
        DesignTarget::new(1_000.0, 1.0, 1.0, 1.0).unwrap()
    }

    #[test]
    fn one_configuration_per_capacitor_base() {
        let results = SweepConfig::default().run(&target()).unwrap();
        assert_eq!(results.len(), E12_BASES.len());
        for config in &results {
            let base = config.capacitance() / PICO;
            assert!(E12_BASES.iter().any(|&b| (b - base).abs() < 1e-9));
        }
    }

    #[test]
    fn results_are_sorted_by_average_error() {
        let results = SweepConfig::default().run(&target()).unwrap();
        assert!(results
            .windows(2)
            .all(|w| ranking_key(w[0].average_error) <= ranking_key(w[1].average_error)));
    }

    #[test]
    fn snapped_resistors_come_from_the_table() {
        let table = StandardValueSet::resistors();
        let results = sweep(&target(), &E12_BASES, &table).unwrap();
        for config in &results {
            for r in [config.circuit.r1, config.circuit.r2, config.circuit.r3] {
                assert!(table.contains(&r));
            }
        }
    }

    #[test]
    fn average_ignores_resistor_errors() {
        let table = StandardValueSet::resistors();
        let config = evaluate(&target(), 10.0e-9, &table).unwrap();
        let expected = (config.errors.frequency.percent
            + config.errors.q.percent
            + config.errors.gain.percent)
            / 3.0;
        assert_relative_eq!(config.average_error, expected);
        // 1 kHz with 10 nF: R1 = R3 = 15.9 kΩ -> 16 kΩ, R2 = 31.8 kΩ -> 33 kΩ.
        assert_eq!(config.circuit.r1, 16_000.0);
        assert_eq!(config.circuit.r2, 33_000.0);
        assert_eq!(config.circuit.r3, 16_000.0);
        assert_relative_eq!(config.errors.r2.deviation, 33_000.0 - config.exact.r2);
    }

    #[test]
    fn exact_table_hit_has_zero_error() {
        let target = DesignTarget::new(1_000.0, 1.0, 1.0, 1.0).unwrap();
        // Choose C so that R2 lands exactly on 33 kΩ; R1 = R3 = 16.5 kΩ still snap.
        let c = 1.0 / (std::f64::consts::PI * 1_000.0 * 33_000.0);
        let table = crate::series::generate_standard_values(&[16.5, 33.0], 7);
        let config = evaluate(&target, c, &table).unwrap();
        assert_relative_eq!(config.average_error, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn empty_table_is_an_error() {
        let table = crate::series::generate_standard_values(&[], 7);
        assert_eq!(
            sweep(&target(), &E12_BASES, &table),
            Err(SweepError::EmptyResistorTable)
        );
    }

    #[test]
    fn rank_is_stable_for_equal_scores() {
        let table = StandardValueSet::resistors();
        let a = evaluate(&target(), 10.0e-9, &table).unwrap();
        let mut b = evaluate(&target(), 22.0e-9, &table).unwrap();
        b.average_error = a.average_error;
        let mut list = vec![b, a];
        rank(&mut list);
        assert_eq!(list[0].capacitance(), 22.0e-9);
    }

    #[test]
    fn rounding_noise_does_not_reorder_ties() {
        let table = StandardValueSet::resistors();
        let mut first = evaluate(&target(), 15.0e-9, &table).unwrap();
        let mut second = evaluate(&target(), 22.0e-9, &table).unwrap();
        first.average_error = 1.180_819_577_394_879_7;
        second.average_error = 1.180_819_577_394_875_7;
        let mut list = vec![first, second];
        rank(&mut list);
        assert_eq!(list[0].capacitance(), 15.0e-9);

        // Scores that differ in the printed digits still sort.
        list[0].average_error = 1.182;
        rank(&mut list);
        assert_eq!(list[0].capacitance(), 22.0e-9);
    }
}
