//! Positional argument handling shared by the binaries.

use thiserror::Error;

use crate::circuits::mfb::{DesignError, DesignTarget};
use crate::math::Scalar;
use crate::report::ReportUnits;
use crate::sweep::SweepConfig;
use crate::units::UnitError;

/// Usage text for `bandpass`.
pub const BANDPASS_USAGE: &str = "\
-----------------------------------------------------
bandpass <f> <Q> <A> <C unit> <R unit> <C multiplier>
-----------------------------------------------------
f            : centre frequency in Hz
Q            : quality factor
A            : abs(max gain) at f, below 2*Q^2
C unit       : pF, nF, uF, mF, F
R unit       : R, K, M
C multiplier : scaling factor for the swept pF values
-----------------------------------------------------";

/// Usage text for `cutoff`.
pub const CUTOFF_USAGE: &str = "cutoff <R> <C>";

/// Errors raised while turning arguments into a request.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CliError {
    /// Wrong number of arguments.
    #[error("expected {expected} arguments, got {got}")]
    Usage {
        /// Required argument count.
        expected: usize,
        /// Supplied argument count.
        got: usize,
    },
    /// A numeric argument did not parse.
    #[error("invalid number for {name}: '{value}'")]
    Number {
        /// Argument name.
        name: &'static str,
        /// Rejected input.
        value: String,
    },
    /// A unit argument is not recognized.
    #[error(transparent)]
    Unit(#[from] UnitError),
    /// The numbers parse but describe an unbuildable filter.
    #[error(transparent)]
    Design(#[from] DesignError),
}

impl CliError {
    /// Raw status byte: 2 usage, 3 unit, 4 number, 5 design.
    #[must_use]
    pub const fn status(&self) -> u8 {
        match self {
            Self::Usage { .. } => 2,
            Self::Unit(_) => 3,
            Self::Number { .. } => 4,
            Self::Design(_) => 5,
        }
    }

    /// Whether the usage text should accompany the message.
    #[must_use]
    pub const fn wants_usage(&self) -> bool {
        matches!(self, Self::Usage { .. })
    }
}

/// Everything a `bandpass` run needs.
#[derive(Debug, Clone, PartialEq)]
pub struct Invocation {
    /// Validated design request.
    pub target: DesignTarget,
    /// Display units for the table.
    pub units: ReportUnits,
    /// Tables swept.
    pub sweep: SweepConfig,
}

fn check_arity<S: AsRef<str>>(args: &[S], expected: usize) -> Result<(), CliError> {
    if args.len() == expected {
        Ok(())
    } else {
        Err(CliError::Usage {
            expected,
            got: args.len(),
        })
    }
}

fn parse_number(name: &'static str, value: &str) -> Result<Scalar, CliError> {
    value.trim().parse().map_err(|_| CliError::Number {
        name,
        value: value.to_owned(),
    })
}

/// Parses `<f> <Q> <A> <C unit> <R unit> <C multiplier>` (program name excluded).
///
/// Units are checked before the design so that a bad unit is reported even
/// when the numbers are also unusable.
pub fn parse_bandpass_args<S: AsRef<str>>(args: &[S]) -> Result<Invocation, CliError> {
    check_arity(args, 6)?;
    let arg = |i: usize| args[i].as_ref();

    let frequency = parse_number("f", arg(0))?;
    let q = parse_number("Q", arg(1))?;
    let gain = parse_number("A", arg(2))?;
    let units = ReportUnits {
        capacitance: arg(3).parse()?,
        resistance: arg(4).parse()?,
    };
    let multiplier = parse_number("C multiplier", arg(5))?;

    let target = DesignTarget::new(frequency, q, gain, multiplier)?;
    Ok(Invocation {
        target,
        units,
        sweep: SweepConfig::default(),
    })
}

/// Parses `<R> <C>` in ohms and farads (program name excluded).
pub fn parse_cutoff_args<S: AsRef<str>>(args: &[S]) -> Result<(Scalar, Scalar), CliError> {
    check_arity(args, 2)?;
    let resistance = parse_number("R", args[0].as_ref())?;
    let capacitance = parse_number("C", args[1].as_ref())?;
    Ok((resistance, capacitance))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::{CapacitanceUnit, ResistanceUnit};

    #[test]
    fn parses_full_invocation() {
        let inv = parse_bandpass_args(&["1000", "1", "1", "nF", "K", "1000"]).unwrap();
        assert_eq!(inv.target.frequency(), 1000.0);
        assert_eq!(inv.target.capacitance_multiplier(), 1000.0);
        assert_eq!(inv.units.capacitance, CapacitanceUnit::Nanofarad);
        assert_eq!(inv.units.resistance, ResistanceUnit::Kiloohm);
        assert_eq!(inv.sweep, SweepConfig::default());
    }

    #[test]
    fn wrong_arity_is_a_usage_error() {
        let err = parse_bandpass_args(&["1000", "1", "1"]).unwrap_err();
        assert_eq!(err, CliError::Usage { expected: 6, got: 3 });
        assert_eq!(err.status(), 2);
        assert!(err.wants_usage());
    }

    #[test]
    fn unknown_unit_fails_instead_of_defaulting() {
        let err = parse_bandpass_args(&["1000", "1", "1", "nF", "kR", "1"]).unwrap_err();
        assert!(matches!(err, CliError::Unit(_)));
        assert_eq!(err.status(), 3);
        assert!(err.to_string().contains("'kR'"));
    }

    #[test]
    fn garbage_number_is_reported() {
        let err = parse_bandpass_args(&["1k", "1", "1", "nF", "K", "1"]).unwrap_err();
        assert_eq!(
            err,
            CliError::Number {
                name: "f",
                value: "1k".to_owned()
            }
        );
        assert_eq!(err.status(), 4);
    }

    #[test]
    fn unbuildable_design_is_rejected() {
        let err = parse_bandpass_args(&["1000", "1", "2", "nF", "K", "1"]).unwrap_err();
        assert!(matches!(err, CliError::Design(DesignError::GainTooHigh { .. })));
        assert_eq!(err.status(), 5);
        let err = parse_bandpass_args(&["-5", "1", "1", "nF", "K", "1"]).unwrap_err();
        assert!(matches!(err, CliError::Design(DesignError::NonPositive { .. })));
    }

    #[test]
    fn cutoff_arguments() {
        assert_eq!(parse_cutoff_args(&["1000", "1e-6"]), Ok((1000.0, 1.0e-6)));
        assert_eq!(
            parse_cutoff_args(&["1000"]),
            Err(CliError::Usage { expected: 2, got: 1 })
        );
    }
}
