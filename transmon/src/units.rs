//! Parsing of `<number><unit>` option values.
//!
//! Lengths are converted to micrometers using exact decimal arithmetic,
//! so that `0.1mm` and `100um` resolve to the same `f64`.

use layir::{LayerId, Quantity};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::error::{Error, Result};

/// Units accepted for the junction inductance.
pub const INDUCTANCE_UNITS: &[&str] = &["H", "mH", "uH", "nH", "pH"];

/// Units accepted for the junction capacitance.
pub const CAPACITANCE_UNITS: &[&str] = &["F", "mF", "uF", "nF", "pF", "fF", "aF"];

/// A recognized length unit.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum LengthUnit {
    /// Nanometers.
    Nanometer,
    /// Micrometers, the canonical unit.
    Micrometer,
    /// Millimeters.
    Millimeter,
    /// Centimeters.
    Centimeter,
    /// Meters.
    Meter,
}

impl LengthUnit {
    /// All length units, smallest first.
    pub const ALL: [LengthUnit; 5] = [
        LengthUnit::Nanometer,
        LengthUnit::Micrometer,
        LengthUnit::Millimeter,
        LengthUnit::Centimeter,
        LengthUnit::Meter,
    ];

    /// Looks up a unit by its suffix.
    pub fn from_suffix(suffix: &str) -> Option<Self> {
        Some(match suffix {
            "nm" => LengthUnit::Nanometer,
            "um" | "µm" | "μm" => LengthUnit::Micrometer,
            "mm" => LengthUnit::Millimeter,
            "cm" => LengthUnit::Centimeter,
            "m" => LengthUnit::Meter,
            _ => return None,
        })
    }

    /// The canonical suffix of this unit.
    pub fn suffix(&self) -> &'static str {
        match self {
            LengthUnit::Nanometer => "nm",
            LengthUnit::Micrometer => "um",
            LengthUnit::Millimeter => "mm",
            LengthUnit::Centimeter => "cm",
            LengthUnit::Meter => "m",
        }
    }

    /// The number of micrometers in one of this unit.
    pub fn micrometers(&self) -> Decimal {
        match self {
            LengthUnit::Nanometer => dec!(0.001),
            LengthUnit::Micrometer => dec!(1),
            LengthUnit::Millimeter => dec!(1000),
            LengthUnit::Centimeter => dec!(10000),
            LengthUnit::Meter => dec!(1000000),
        }
    }
}

/// Splits a raw value into its numeric prefix and unit suffix, both trimmed.
fn split_magnitude(raw: &str) -> (&str, &str) {
    let raw = raw.trim();
    let end = raw
        .find(|c: char| !(c.is_ascii_digit() || matches!(c, '.' | '+' | '-' | 'e' | 'E')))
        .unwrap_or(raw.len());
    (raw[..end].trim(), raw[end..].trim())
}

fn parse_decimal(num: &str) -> Option<Decimal> {
    if num.is_empty() {
        return None;
    }
    num.parse::<Decimal>()
        .ok()
        .or_else(|| Decimal::from_scientific(num).ok())
}

/// Parses the numeric part of `raw`, returning it with the unit suffix.
fn parse_magnitude<'a>(param: &str, raw: &'a str) -> Result<(Decimal, &'a str)> {
    if raw.trim().is_empty() {
        return Err(Error::invalid_dimension(param, raw, "value is missing"));
    }
    let (num, unit) = split_magnitude(raw);
    let magnitude = parse_decimal(num)
        .ok_or_else(|| Error::invalid_dimension(param, raw, "value is not numeric"))?;
    Ok((magnitude, unit))
}

fn to_f64(param: &str, raw: &str, value: Decimal) -> Result<f64> {
    value
        .to_f64()
        .filter(|v| v.is_finite())
        .ok_or_else(|| Error::invalid_dimension(param, raw, "value is out of range"))
}

/// Parses a length such as `100um` or `0.1mm`, returning micrometers.
///
/// A bare number without a unit is rejected.
pub fn parse_length(param: &str, raw: &str) -> Result<f64> {
    let (magnitude, suffix) = parse_magnitude(param, raw)?;
    if suffix.is_empty() {
        return Err(Error::invalid_dimension(
            param,
            raw,
            "length is missing a unit (expected one of nm, um, mm, cm, m)",
        ));
    }
    let unit = LengthUnit::from_suffix(suffix).ok_or_else(|| {
        Error::invalid_dimension(
            param,
            raw,
            arcstr::format!("unrecognized length unit `{suffix}`"),
        )
    })?;
    let um = magnitude
        .checked_mul(unit.micrometers())
        .ok_or_else(|| Error::invalid_dimension(param, raw, "value is out of range"))?;
    to_f64(param, raw, um)
}

/// Parses an angle in degrees, given as a bare number or with a `deg` suffix.
pub fn parse_angle(param: &str, raw: &str) -> Result<f64> {
    let (magnitude, suffix) = parse_magnitude(param, raw)?;
    if !matches!(suffix, "" | "deg") {
        return Err(Error::invalid_dimension(
            param,
            raw,
            arcstr::format!("unrecognized angle unit `{suffix}`"),
        ));
    }
    to_f64(param, raw, magnitude)
}

/// Parses a non-negative integer layer number.
pub fn parse_layer(param: &str, raw: &str) -> Result<LayerId> {
    if raw.trim().is_empty() {
        return Err(Error::invalid_dimension(param, raw, "value is missing"));
    }
    raw.trim()
        .parse::<u32>()
        .map(LayerId)
        .map_err(|_| Error::invalid_dimension(param, raw, "layer must be a non-negative integer"))
}

/// Parses a value with one of the `accepted` unit tags.
///
/// The magnitude is not converted; the unit tag is preserved for downstream tools.
pub fn parse_quantity(param: &str, raw: &str, accepted: &[&str]) -> Result<Quantity> {
    let (magnitude, suffix) = parse_magnitude(param, raw)?;
    if !accepted.contains(&suffix) {
        return Err(Error::invalid_dimension(
            param,
            raw,
            arcstr::format!(
                "unrecognized unit `{suffix}` (expected one of {})",
                accepted.join(", ")
            ),
        ));
    }
    Ok(Quantity::new(to_f64(param, raw, magnitude)?, suffix))
}
