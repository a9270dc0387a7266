//! Plain-text rendering of sweep results.

use std::io::{self, Write};

use crate::math::Scalar;
use crate::sweep::Configuration;
use crate::units::{CapacitanceUnit, DisplayUnit, FrequencyUnit, ResistanceUnit};

const HEADERS: [&str; 8] = ["ERROR", "C", "R1", "R2", "R3", "f", "Q", "A"];
const CELL_WIDTH: usize = 10;
const SIGNIFICANT_DIGITS: i32 = 6;

/// Units used when printing component values.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportUnits {
    /// Unit for the capacitor column.
    pub capacitance: CapacitanceUnit,
    /// Unit for the resistor columns.
    pub resistance: ResistanceUnit,
}

impl Default for ReportUnits {
    fn default() -> Self {
        Self {
            capacitance: CapacitanceUnit::Nanofarad,
            resistance: ResistanceUnit::Kiloohm,
        }
    }
}

/// Formats `value` with six significant digits, dropping trailing zeros and
/// switching to exponent notation outside `1e-4 ..= 1e6` (printf `%g`).
#[must_use]
pub fn format_general(value: Scalar) -> String {
    if value.is_nan() {
        return "nan".to_owned();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_owned();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0" } else { "0" }.to_owned();
    }

    let scientific = format!("{:.*e}", (SIGNIFICANT_DIGITS - 1) as usize, value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return scientific;
    };

    if exponent < -4 || exponent >= SIGNIFICANT_DIGITS {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{sign}{:02}", trim_fraction(mantissa), exponent.abs())
    } else {
        let decimals = (SIGNIFICANT_DIGITS - 1 - exponent) as usize;
        trim_fraction(&format!("{value:.decimals$}")).to_owned()
    }
}

fn trim_fraction(digits: &str) -> &str {
    if digits.contains('.') {
        digits.trim_end_matches('0').trim_end_matches('.')
    } else {
        digits
    }
}

/// Frequency with three decimals in the largest unit not exceeding it.
#[must_use]
pub fn format_frequency(hz: Scalar) -> String {
    let unit = FrequencyUnit::for_magnitude(hz);
    format!("{:.3} {unit}", unit.convert(hz))
}

fn component_cell<U: DisplayUnit>(value: Scalar, unit: U) -> String {
    format!("{} {unit}", format_general(unit.convert(value)))
}

/// Text cells for one table row, in header order.
#[must_use]
pub fn row_cells(config: &Configuration, units: ReportUnits) -> [String; 8] {
    [
        format!("{:.3}", config.average_error),
        component_cell(config.capacitance(), units.capacitance),
        component_cell(config.circuit.r1, units.resistance),
        component_cell(config.circuit.r2, units.resistance),
        component_cell(config.circuit.r3, units.resistance),
        format_frequency(config.realized.frequency),
        format!("{:.3}", config.realized.q),
        format!("{:.3} V/V", config.realized.gain),
    ]
}

fn write_rule<W: Write>(writer: &mut W) -> io::Result<()> {
    let width = HEADERS.len() * (CELL_WIDTH + 3) + 1;
    writeln!(writer, "{}", "-".repeat(width))
}

fn write_cells<W, S>(writer: &mut W, cells: &[S]) -> io::Result<()>
where
    W: Write,
    S: AsRef<str>,
{
    write!(writer, "|")?;
    for cell in cells {
        write!(writer, " {:<width$} |", cell.as_ref(), width = CELL_WIDTH)?;
    }
    writeln!(writer)
}

/// Writes the ranked table: header, one row per configuration, closing rule.
pub fn write_table<W: Write>(
    mut writer: W,
    configurations: &[Configuration],
    units: ReportUnits,
) -> io::Result<()> {
    write_rule(&mut writer)?;
    write_cells(&mut writer, &HEADERS[..])?;
    write_rule(&mut writer)?;
    for config in configurations {
        write_cells(&mut writer, &row_cells(config, units)[..])?;
    }
    write_rule(&mut writer)
}

/// Writes the `cutoff` result line. Values print at full precision.
pub fn write_cutoff<W: Write>(
    mut writer: W,
    resistance: Scalar,
    capacitance: Scalar,
    frequency: Scalar,
) -> io::Result<()> {
    writeln!(writer, "R: {resistance} R, C: {capacitance} F, f: {frequency} Hz")
}
