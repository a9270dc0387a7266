#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![warn(clippy::all, clippy::cargo, clippy::nursery, missing_docs)]
#![doc = include_str!("../README.md")]

/// Standard series mantissas, SI scale factors and frequency helpers.
pub mod constants;
/// Shared numeric aliases and error metrics.
pub mod math;
/// SI prefixes and display units.
pub mod units;
/// Standard value tables and nearest-value selection.
pub mod series;
/// Component models, MFB design equations and responses.
pub mod circuits;
/// Standard-value sweep and ranking.
pub mod sweep;
/// Result table rendering.
pub mod report;
/// Command-line argument handling for the binaries.
pub mod cli;
/// Diagnostic logging setup.
pub mod logging;
/// Error types shared between modules.
pub mod errors;

/// Common exports for downstream crates.
pub mod prelude;
