//! SI prefixes and the display units accepted for each quantity.
//!
//! Values are stored in base units throughout the crate; a display unit only
//! rescales a value for printing.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::constants::{GIGA, KILO, MEGA, MICRO, MILLI, NANO, PICO};
use crate::math::Scalar;

/// Decimal SI prefix.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SiPrefix {
    /// 10⁻¹²
    Pico,
    /// 10⁻⁹
    Nano,
    /// 10⁻⁶
    Micro,
    /// 10⁻³
    Milli,
    /// 10⁰
    Base,
    /// 10³
    Kilo,
    /// 10⁶
    Mega,
    /// 10⁹
    Giga,
}

impl SiPrefix {
    /// Multiplicative factor of the prefix.
    #[must_use]
    pub const fn factor(self) -> Scalar {
        match self {
            Self::Pico => PICO,
            Self::Nano => NANO,
            Self::Micro => MICRO,
            Self::Milli => MILLI,
            Self::Base => 1.0,
            Self::Kilo => KILO,
            Self::Mega => MEGA,
            Self::Giga => GIGA,
        }
    }

    /// Expresses a base-unit `value` in multiples of this prefix.
    #[inline]
    #[must_use]
    pub fn scale(self, value: Scalar) -> Scalar {
        value / self.factor()
    }
}

/// Quantity a unit name belongs to. Used for error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitCategory {
    /// Farads.
    Capacitance,
    /// Ohms.
    Resistance,
    /// Hertz.
    Frequency,
}

impl fmt::Display for UnitCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Capacitance => f.write_str("C"),
            Self::Resistance => f.write_str("R"),
            Self::Frequency => f.write_str("f"),
        }
    }
}

/// Raised when a unit name is not recognized for its quantity.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnitError {
    /// The name is not in the recognized set.
    #[error("no such {category} unit '{value}', must be one of {expected:?}")]
    Unknown {
        /// Quantity the name was parsed for.
        category: UnitCategory,
        /// Rejected input.
        value: String,
        /// Recognized names.
        expected: &'static [&'static str],
    },
}

/// Common behaviour of the display unit enums.
pub trait DisplayUnit: Copy + fmt::Display + FromStr<Err = UnitError> {
    /// Every recognized unit name, in ascending magnitude.
    const NAMES: &'static [&'static str];

    /// Prefix applied by this unit.
    fn prefix(self) -> SiPrefix;

    /// Symbol printed after a value.
    fn symbol(self) -> &'static str;

    /// Expresses a base-unit `value` in this unit.
    #[must_use]
    fn convert(self, value: Scalar) -> Scalar {
        self.prefix().scale(value)
    }
}

macro_rules! display_unit {
    (
        $(#[$meta:meta])*
        $name:ident, $category:expr, {
            $($(#[$vmeta:meta])* $variant:ident => ($symbol:literal, $prefix:ident)),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($(#[$vmeta])* $variant),+
        }

        impl DisplayUnit for $name {
            const NAMES: &'static [&'static str] = &[$($symbol),+];

            fn prefix(self) -> SiPrefix {
                match self {
                    $(Self::$variant => SiPrefix::$prefix),+
                }
            }

            fn symbol(self) -> &'static str {
                match self {
                    $(Self::$variant => $symbol),+
                }
            }
        }

        impl FromStr for $name {
            type Err = UnitError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($symbol => Ok(Self::$variant),)+
                    _ => Err(UnitError::Unknown {
                        category: $category,
                        value: s.to_owned(),
                        expected: <Self as DisplayUnit>::NAMES,
                    }),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.symbol())
            }
        }
    };
}

display_unit!(
    /// Display unit for capacitance.
    CapacitanceUnit, UnitCategory::Capacitance, {
        /// Picofarads.
        Picofarad => ("pF", Pico),
        /// Nanofarads.
        Nanofarad => ("nF", Nano),
        /// Microfarads.
        Microfarad => ("uF", Micro),
        /// Millifarads.
        Millifarad => ("mF", Milli),
        /// Farads.
        Farad => ("F", Base),
    }
);

display_unit!(
    /// Display unit for resistance.
    ResistanceUnit, UnitCategory::Resistance, {
        /// Ohms.
        Ohm => ("R", Base),
        /// Kilohms.
        Kiloohm => ("K", Kilo),
        /// Megohms.
        Megaohm => ("M", Mega),
    }
);

display_unit!(
    /// Display unit for frequency.
    FrequencyUnit, UnitCategory::Frequency, {
        /// Hertz.
        Hz => ("Hz", Base),
        /// Kilohertz.
        KHz => ("kHz", Kilo),
        /// Megahertz.
        MHz => ("MHz", Mega),
        /// Gigahertz.
        GHz => ("GHz", Giga),
    }
);

impl FrequencyUnit {
    /// Largest unit whose factor does not exceed `hz`, falling back to hertz.
    #[must_use]
    pub fn for_magnitude(hz: Scalar) -> Self {
        if hz >= GIGA {
            Self::GHz
        } else if hz >= MEGA {
            Self::MHz
        } else if hz >= KILO {
            Self::KHz
        } else {
            Self::Hz
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn parses_recognized_names() {
        assert_eq!("nF".parse::<CapacitanceUnit>(), Ok(CapacitanceUnit::Nanofarad));
        assert_eq!("F".parse::<CapacitanceUnit>(), Ok(CapacitanceUnit::Farad));
        assert_eq!("K".parse::<ResistanceUnit>(), Ok(ResistanceUnit::Kiloohm));
        assert_eq!("kHz".parse::<FrequencyUnit>(), Ok(FrequencyUnit::KHz));
    }

    #[test]
    fn rejects_unknown_names_with_recognized_set() {
        let err = "kR".parse::<ResistanceUnit>().unwrap_err();
        let UnitError::Unknown {
            category,
            value,
            expected,
        } = &err;
        assert_eq!(*category, UnitCategory::Resistance);
        assert_eq!(value, "kR");
        assert_eq!(*expected, &["R", "K", "M"]);
        assert_eq!(
            err.to_string(),
            "no such R unit 'kR', must be one of [\"R\", \"K\", \"M\"]"
        );
        // Case matters: "nf" is not "nF".
        assert!("nf".parse::<CapacitanceUnit>().is_err());
    }

    #[test]
    fn converts_into_display_unit() {
        assert_relative_eq!(CapacitanceUnit::Nanofarad.convert(4.7e-9), 4.7, max_relative = 1e-12);
        assert_relative_eq!(ResistanceUnit::Kiloohm.convert(15_000.0), 15.0, max_relative = 1e-12);
        assert_relative_eq!(ResistanceUnit::Ohm.convert(220.0), 220.0);
    }

    #[test]
    fn frequency_unit_follows_thresholds() {
        assert_eq!(FrequencyUnit::for_magnitude(999.9), FrequencyUnit::Hz);
        assert_eq!(FrequencyUnit::for_magnitude(1.0e3), FrequencyUnit::KHz);
        assert_eq!(FrequencyUnit::for_magnitude(2.5e6), FrequencyUnit::MHz);
        assert_eq!(FrequencyUnit::for_magnitude(1.0e9), FrequencyUnit::GHz);
    }
}
