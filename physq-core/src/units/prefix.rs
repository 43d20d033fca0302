//! Power-of-ten unit prefixes.
//!
//! Prefixes only matter at the edges: a value entered with a prefix is
//! normalized into SI base units when a quantity is constructed, and turned
//! back into the prefixed scale when it is read or rendered.

use crate::errors::QuantityError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A supported unit prefix, from nano to giga.
///
/// The discriminant is the decimal exponent of the prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[repr(i8)]
pub enum UnitPrefix {
    /// 10⁻⁹
    Nano = -9,
    /// 10⁻⁶
    Micro = -6,
    /// 10⁻³
    Milli = -3,
    /// 10⁰ (no prefix)
    #[default]
    Base = 0,
    /// 10³
    Kilo = 3,
    /// 10⁶
    Mega = 6,
    /// 10⁹
    Giga = 9,
}

impl UnitPrefix {
    /// All prefixes from smallest to largest.
    pub const ALL: [UnitPrefix; 7] = [
        UnitPrefix::Nano,
        UnitPrefix::Micro,
        UnitPrefix::Milli,
        UnitPrefix::Base,
        UnitPrefix::Kilo,
        UnitPrefix::Mega,
        UnitPrefix::Giga,
    ];

    /// Decimal exponent of this prefix.
    #[must_use]
    pub const fn power_of_ten(&self) -> i8 {
        *self as i8
    }

    /// Multiplier from this prefix to the base unit.
    #[must_use]
    pub const fn multiplier(&self) -> f64 {
        match self {
            UnitPrefix::Nano => 1e-9,
            UnitPrefix::Micro => 1e-6,
            UnitPrefix::Milli => 1e-3,
            UnitPrefix::Base => 1.0,
            UnitPrefix::Kilo => 1e3,
            UnitPrefix::Mega => 1e6,
            UnitPrefix::Giga => 1e9,
        }
    }

    /// Scale factor for a unit raised to `exponent`: `multiplier^exponent`.
    ///
    /// A kilometre squared is 10⁶ m², not 10³ m².
    #[must_use]
    pub fn scale(&self, exponent: i32) -> f64 {
        self.multiplier().powi(exponent)
    }

    /// Converts a value expressed with this prefix into base units.
    #[must_use]
    pub fn to_base(&self, value: f64, exponent: i32) -> f64 {
        value * self.scale(exponent)
    }

    /// Converts a value in base units into this prefix's scale.
    #[must_use]
    pub fn from_base(&self, value: f64, exponent: i32) -> f64 {
        value / self.scale(exponent)
    }

    /// Short symbol, prepended to a unit symbol.
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            UnitPrefix::Nano => "n",
            UnitPrefix::Micro => "μ",
            UnitPrefix::Milli => "m",
            UnitPrefix::Base => "",
            UnitPrefix::Kilo => "k",
            UnitPrefix::Mega => "M",
            UnitPrefix::Giga => "G",
        }
    }

    /// Long lowercase name (empty for [`UnitPrefix::Base`]).
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            UnitPrefix::Nano => "nano",
            UnitPrefix::Micro => "micro",
            UnitPrefix::Milli => "milli",
            UnitPrefix::Base => "",
            UnitPrefix::Kilo => "kilo",
            UnitPrefix::Mega => "mega",
            UnitPrefix::Giga => "giga",
        }
    }

    /// Parses a prefix, treating anything unrecognised as [`UnitPrefix::Base`].
    ///
    /// Intended for display paths, where an unknown prefix should render
    /// in base units instead of failing.
    #[must_use]
    pub fn parse_lenient(input: &str) -> Self {
        input.parse().unwrap_or_else(|_| {
            log::debug!("Unknown unit prefix '{input}', falling back to base units");
            UnitPrefix::Base
        })
    }
}

impl fmt::Display for UnitPrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            UnitPrefix::Nano => "Nano",
            UnitPrefix::Micro => "Micro",
            UnitPrefix::Milli => "Milli",
            UnitPrefix::Base => "Base",
            UnitPrefix::Kilo => "Kilo",
            UnitPrefix::Mega => "Mega",
            UnitPrefix::Giga => "Giga",
        };
        write!(f, "{name}")
    }
}

impl FromStr for UnitPrefix {
    type Err = QuantityError;

    /// Accepts the variant name (`"Kilo"`), the long name (`"kilo"`) or the
    /// symbol (`"k"`). Symbols are case sensitive since `m` and `M` differ.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        UnitPrefix::ALL
            .into_iter()
            .find(|prefix| {
                prefix.to_string().eq_ignore_ascii_case(s)
                    || (!prefix.name().is_empty() && prefix.name().eq_ignore_ascii_case(s))
                    || (!prefix.symbol().is_empty() && prefix.symbol() == s)
            })
            .or_else(|| matches!(s, "u" | "µ").then_some(UnitPrefix::Micro))
            .ok_or_else(|| QuantityError::UnknownPrefix(s.to_string()))
    }
}
