//! Shared error types used across submodules.

use thiserror::Error;

use crate::circuits::mfb::DesignError;
use crate::cli::CliError;
use crate::sweep::SweepError;

/// Top-level error type for the crate.
#[derive(Debug, Error)]
pub enum BandpassError {
    /// Wraps design validation errors.
    #[error(transparent)]
    Design(#[from] DesignError),
    /// Wraps sweep errors.
    #[error(transparent)]
    Sweep(#[from] SweepError),
    /// Wraps argument errors.
    #[error(transparent)]
    Cli(#[from] CliError),
    /// Raised when the report cannot be written.
    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),
}

impl BandpassError {
    /// Process exit status: argument errors keep their own codes, a failed
    /// sweep or write exits with 1.
    #[must_use]
    pub fn status(&self) -> u8 {
        match self {
            Self::Cli(err) => err.status(),
            Self::Design(_) => 5,
            Self::Sweep(_) | Self::Io(_) => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::parse_bandpass_args;

    #[test]
    fn unit_errors_keep_their_status_through_the_cli() {
        let err: BandpassError = parse_bandpass_args(&["1000", "1", "1", "nF", "Ohm", "1"])
            .unwrap_err()
            .into();
        assert!(matches!(err, BandpassError::Cli(CliError::Unit(_))));
        assert_eq!(err.status(), 3);
        let err: BandpassError = SweepError::EmptyResistorTable.into();
        assert_eq!(err.status(), 1);
    }
}
