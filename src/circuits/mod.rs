//! Circuit models for the multiple-feedback bandpass and its helpers.

/// Lumped component definitions and traits.
pub mod component;
/// Design equations for the equal-capacitor MFB bandpass.
pub mod mfb;
/// Small-signal transfer function of a built MFB bandpass.
pub mod response;
/// Single RC section corner frequency.
pub mod rc;

pub use component::{Capacitor, Component, Resistor};
pub use mfb::{DesignError, DesignQuantity, DesignTarget, ExactComponents, MfbBandpass, Realized};
pub use rc::{cutoff_frequency, try_cutoff_frequency};
pub use response::{sweep_response, transfer, ResponsePoint};
