//! Closed unit sets with conversion factors to each category base

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::request::ConversionRequest;
use crate::Category;

/// Common surface of the per-category unit enums.
///
/// Presentation code stays generic over this the same way the selector
/// widgets are generic over their option lists: it only needs the
/// ordered unit set, the labels, and the conversion itself.
pub trait UnitKind:
    Copy + Eq + fmt::Debug + fmt::Display + Serialize + 'static
{
    /// Category this unit set belongs to.
    const CATEGORY: Category;

    /// All units, in selector order.
    const ALL: &'static [Self];

    /// Display label, identical to the selector entry.
    fn label(&self) -> &'static str;

    /// Parse a selector label. Unknown labels are an error here, never
    /// a fallback.
    fn from_label(label: &str) -> Result<Self, ConvertError>;

    /// The unit conversions are routed through.
    fn base() -> Self;

    /// Convert `value` between two units of this set.
    fn convert(value: f64, from: Self, to: Self) -> f64;

    /// Lift a conversion over this unit set into a category-tagged
    /// request.
    fn request(value: f64, from: Self, to: Self) -> ConversionRequest;
}

/// Units of length. Meter is the base.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LengthUnit {
    Meter,
    Kilometer,
    Centimeter,
    Millimeter,
    Mile,
    Yard,
    Foot,
    Inch,
}

impl LengthUnit {
    /// Meters per unit.
    pub fn factor(&self) -> f64 {
        match self {
            LengthUnit::Meter => 1.0,
            LengthUnit::Kilometer => 1000.0,
            LengthUnit::Centimeter => 0.01,
            LengthUnit::Millimeter => 0.001,
            LengthUnit::Mile => 1609.344,
            LengthUnit::Yard => 0.9144,
            LengthUnit::Foot => 0.3048,
            LengthUnit::Inch => 0.0254,
        }
    }
}

impl UnitKind for LengthUnit {
    const CATEGORY: Category = Category::Length;

    const ALL: &'static [Self] = &[
        LengthUnit::Meter,
        LengthUnit::Kilometer,
        LengthUnit::Centimeter,
        LengthUnit::Millimeter,
        LengthUnit::Mile,
        LengthUnit::Yard,
        LengthUnit::Foot,
        LengthUnit::Inch,
    ];

    fn label(&self) -> &'static str {
        match self {
            LengthUnit::Meter => "Meter",
            LengthUnit::Kilometer => "Kilometer",
            LengthUnit::Centimeter => "Centimeter",
            LengthUnit::Millimeter => "Millimeter",
            LengthUnit::Mile => "Mile",
            LengthUnit::Yard => "Yard",
            LengthUnit::Foot => "Foot",
            LengthUnit::Inch => "Inch",
        }
    }

    fn from_label(label: &str) -> Result<Self, ConvertError> {
        match label {
            "Meter" => Ok(LengthUnit::Meter),
            "Kilometer" => Ok(LengthUnit::Kilometer),
            "Centimeter" => Ok(LengthUnit::Centimeter),
            "Millimeter" => Ok(LengthUnit::Millimeter),
            "Mile" => Ok(LengthUnit::Mile),
            "Yard" => Ok(LengthUnit::Yard),
            "Foot" => Ok(LengthUnit::Foot),
            "Inch" => Ok(LengthUnit::Inch),
            _ => Err(ConvertError::UnknownUnit {
                category: Category::Length,
                label: label.to_string(),
            }),
        }
    }

    fn base() -> Self {
        LengthUnit::Meter
    }

    fn convert(value: f64, from: Self, to: Self) -> f64 {
        let meters = value * from.factor();
        meters / to.factor()
    }

    fn request(value: f64, from: Self, to: Self) -> ConversionRequest {
        ConversionRequest::Length { from, to, value }
    }
}

impl fmt::Display for LengthUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Units of weight. Kilogram is the base.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeightUnit {
    Kilogram,
    Gram,
    Milligram,
    Pound,
    Ounce,
}

impl WeightUnit {
    /// Kilograms per unit.
    pub fn factor(&self) -> f64 {
        match self {
            WeightUnit::Kilogram => 1.0,
            WeightUnit::Gram => 0.001,
            WeightUnit::Milligram => 0.000_001,
            WeightUnit::Pound => 0.453_592_37,
            WeightUnit::Ounce => 0.028_349_523_125,
        }
    }
}

impl UnitKind for WeightUnit {
    const CATEGORY: Category = Category::Weight;

    const ALL: &'static [Self] = &[
        WeightUnit::Kilogram,
        WeightUnit::Gram,
        WeightUnit::Milligram,
        WeightUnit::Pound,
        WeightUnit::Ounce,
    ];

    fn label(&self) -> &'static str {
        match self {
            WeightUnit::Kilogram => "Kilogram",
            WeightUnit::Gram => "Gram",
            WeightUnit::Milligram => "Milligram",
            WeightUnit::Pound => "Pound",
            WeightUnit::Ounce => "Ounce",
        }
    }

    fn from_label(label: &str) -> Result<Self, ConvertError> {
        match label {
            "Kilogram" => Ok(WeightUnit::Kilogram),
            "Gram" => Ok(WeightUnit::Gram),
            "Milligram" => Ok(WeightUnit::Milligram),
            "Pound" => Ok(WeightUnit::Pound),
            "Ounce" => Ok(WeightUnit::Ounce),
            _ => Err(ConvertError::UnknownUnit {
                category: Category::Weight,
                label: label.to_string(),
            }),
        }
    }

    fn base() -> Self {
        WeightUnit::Kilogram
    }

    fn convert(value: f64, from: Self, to: Self) -> f64 {
        let kilograms = value * from.factor();
        kilograms / to.factor()
    }

    fn request(value: f64, from: Self, to: Self) -> ConversionRequest {
        ConversionRequest::Weight { from, to, value }
    }
}

impl fmt::Display for WeightUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Units of temperature. Celsius is the base.
///
/// Temperature scales are affine, not proportional, so each unit keeps
/// explicit transforms to and from Celsius rather than a single factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TemperatureUnit {
    Celsius,
    Fahrenheit,
    Kelvin,
}

impl TemperatureUnit {
    /// Reading in this unit, expressed in Celsius.
    pub fn to_celsius(&self, value: f64) -> f64 {
        match self {
            TemperatureUnit::Celsius => value,
            TemperatureUnit::Fahrenheit => (value - 32.0) * 5.0 / 9.0,
            TemperatureUnit::Kelvin => value - 273.15,
        }
    }

    /// Celsius reading, expressed in this unit.
    pub fn from_celsius(&self, celsius: f64) -> f64 {
        match self {
            TemperatureUnit::Celsius => celsius,
            TemperatureUnit::Fahrenheit => celsius * 9.0 / 5.0 + 32.0,
            TemperatureUnit::Kelvin => celsius + 273.15,
        }
    }
}

impl UnitKind for TemperatureUnit {
    const CATEGORY: Category = Category::Temperature;

    const ALL: &'static [Self] = &[
        TemperatureUnit::Celsius,
        TemperatureUnit::Fahrenheit,
        TemperatureUnit::Kelvin,
    ];

    fn label(&self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "Celsius",
            TemperatureUnit::Fahrenheit => "Fahrenheit",
            TemperatureUnit::Kelvin => "Kelvin",
        }
    }

    fn from_label(label: &str) -> Result<Self, ConvertError> {
        match label {
            "Celsius" => Ok(TemperatureUnit::Celsius),
            "Fahrenheit" => Ok(TemperatureUnit::Fahrenheit),
            "Kelvin" => Ok(TemperatureUnit::Kelvin),
            _ => Err(ConvertError::UnknownUnit {
                category: Category::Temperature,
                label: label.to_string(),
            }),
        }
    }

    fn base() -> Self {
        TemperatureUnit::Celsius
    }

    fn convert(value: f64, from: Self, to: Self) -> f64 {
        to.from_celsius(from.to_celsius(value))
    }

    fn request(value: f64, from: Self, to: Self) -> ConversionRequest {
        ConversionRequest::Temperature { from, to, value }
    }
}

impl fmt::Display for TemperatureUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Errors from explicit label parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError {
    /// Label does not name a unit of the category.
    #[error("unknown {category} unit: {label}")]
    UnknownUnit { category: Category, label: String },

    /// Label does not name a category.
    #[error("unknown category: {0}")]
    UnknownCategory(String),
}
