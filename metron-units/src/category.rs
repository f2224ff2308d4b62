//! Conversion categories and their presentation tables

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::unit::{ConvertError, LengthUnit, TemperatureUnit, UnitKind, WeightUnit};

const LENGTH_LABELS: [&str; 8] = [
    "Meter",
    "Kilometer",
    "Centimeter",
    "Millimeter",
    "Mile",
    "Yard",
    "Foot",
    "Inch",
];

const WEIGHT_LABELS: [&str; 5] = ["Kilogram", "Gram", "Milligram", "Pound", "Ounce"];

const TEMPERATURE_LABELS: [&str; 3] = ["Celsius", "Fahrenheit", "Kelvin"];

/// A domain of mutually convertible units.
///
/// Units never convert across categories; each category names its own
/// closed unit enum and a base unit the arithmetic is routed through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Length,
    Weight,
    Temperature,
}

impl Category {
    /// All categories, in selector order.
    pub const ALL: [Category; 3] = [Category::Length, Category::Weight, Category::Temperature];

    /// Display label, identical to the selector entry.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Length => "Length",
            Category::Weight => "Weight",
            Category::Temperature => "Temperature",
        }
    }

    /// Unit labels for this category's selectors, in selector order.
    pub fn unit_labels(&self) -> &'static [&'static str] {
        match self {
            Category::Length => &LENGTH_LABELS,
            Category::Weight => &WEIGHT_LABELS,
            Category::Temperature => &TEMPERATURE_LABELS,
        }
    }

    /// Label of the unit conversions are routed through.
    pub fn base_unit_label(&self) -> &'static str {
        match self {
            Category::Length => LengthUnit::base().label(),
            Category::Weight => WeightUnit::base().label(),
            Category::Temperature => TemperatureUnit::base().label(),
        }
    }

    /// Parse a selector label.
    pub fn from_label(label: &str) -> Result<Category, ConvertError> {
        match label {
            "Length" => Ok(Category::Length),
            "Weight" => Ok(Category::Weight),
            "Temperature" => Ok(Category::Temperature),
            _ => Err(ConvertError::UnknownCategory(label.to_string())),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
