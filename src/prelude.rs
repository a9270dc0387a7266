//! Convenience re-exports for designing MFB bandpass filters.

pub use crate::circuits::{
    component::{Capacitor, Component, Resistor},
    mfb::{max_gain, DesignError, DesignQuantity, DesignTarget, ExactComponents, MfbBandpass, Realized},
    rc::{cutoff_frequency, try_cutoff_frequency},
    response::{sweep_response, transfer, ResponsePoint},
};
pub use crate::constants::*;
pub use crate::errors::BandpassError;
pub use crate::logging::{init_logging, LogConfig, LogFormat, LogLevel};
pub use crate::math::{deviation, parallel, percent_error, CScalar, Scalar};
pub use crate::report::{format_frequency, format_general, write_cutoff, write_table, ReportUnits};
pub use crate::series::{generate_standard_values, pick_nearest, Series, StandardValueSet};
pub use crate::sweep::{
    evaluate, rank, sweep, Configuration, Discrepancy, ErrorReport, SweepConfig, SweepError,
};
pub use crate::units::{
    CapacitanceUnit, DisplayUnit, FrequencyUnit, ResistanceUnit, SiPrefix, UnitError,
};
