//! Conversion operations: typed entry points and the label-string layer
//!
//! The typed functions are total and pure. The `convert_*` label
//! variants keep the historical selector behavior: a label that names
//! no unit resolves to the category base, so that side of the
//! conversion passes through unscaled. Callers that want unknown
//! labels reported should parse with [`UnitKind::from_label`] instead.

use crate::unit::{LengthUnit, TemperatureUnit, UnitKind, WeightUnit};

/// Convert a length between two units.
pub fn length(value: f64, from: LengthUnit, to: LengthUnit) -> f64 {
    LengthUnit::convert(value, from, to)
}

/// Convert a weight between two units.
pub fn weight(value: f64, from: WeightUnit, to: WeightUnit) -> f64 {
    WeightUnit::convert(value, from, to)
}

/// Convert a temperature between two units.
pub fn temperature(value: f64, from: TemperatureUnit, to: TemperatureUnit) -> f64 {
    TemperatureUnit::convert(value, from, to)
}

/// Label variant of [`length`]. Unknown labels act as Meter.
pub fn convert_length(value: f64, from: &str, to: &str) -> f64 {
    length(
        value,
        LengthUnit::from_label(from).unwrap_or_else(|_| LengthUnit::base()),
        LengthUnit::from_label(to).unwrap_or_else(|_| LengthUnit::base()),
    )
}

/// Label variant of [`weight`]. Unknown labels act as Kilogram.
pub fn convert_weight(value: f64, from: &str, to: &str) -> f64 {
    weight(
        value,
        WeightUnit::from_label(from).unwrap_or_else(|_| WeightUnit::base()),
        WeightUnit::from_label(to).unwrap_or_else(|_| WeightUnit::base()),
    )
}

/// Label variant of [`temperature`]. Unknown labels act as Celsius.
pub fn convert_temperature(value: f64, from: &str, to: &str) -> f64 {
    temperature(
        value,
        TemperatureUnit::from_label(from).unwrap_or_else(|_| TemperatureUnit::base()),
        TemperatureUnit::from_label(to).unwrap_or_else(|_| TemperatureUnit::base()),
    )
}
