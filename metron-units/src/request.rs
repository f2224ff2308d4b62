//! Per-conversion request values

use serde::{Deserialize, Serialize};

use crate::category::Category;
use crate::convert;
use crate::unit::{ConvertError, LengthUnit, TemperatureUnit, UnitKind, WeightUnit};

/// One conversion: a category, two units of that category, and the
/// input value.
///
/// The unit pair lives inside the category variant, so a request can
/// never mix units across categories. Requests are built per
/// conversion and discarded after [`convert`](ConversionRequest::convert).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "category")]
pub enum ConversionRequest {
    Length {
        from: LengthUnit,
        to: LengthUnit,
        value: f64,
    },
    Weight {
        from: WeightUnit,
        to: WeightUnit,
        value: f64,
    },
    Temperature {
        from: TemperatureUnit,
        to: TemperatureUnit,
        value: f64,
    },
}

impl ConversionRequest {
    /// Build a request from selector labels. Unknown labels are
    /// reported, not silently mapped to the base unit.
    pub fn from_labels(
        category: Category,
        from: &str,
        to: &str,
        value: f64,
    ) -> Result<Self, ConvertError> {
        match category {
            Category::Length => Ok(ConversionRequest::Length {
                from: LengthUnit::from_label(from)?,
                to: LengthUnit::from_label(to)?,
                value,
            }),
            Category::Weight => Ok(ConversionRequest::Weight {
                from: WeightUnit::from_label(from)?,
                to: WeightUnit::from_label(to)?,
                value,
            }),
            Category::Temperature => Ok(ConversionRequest::Temperature {
                from: TemperatureUnit::from_label(from)?,
                to: TemperatureUnit::from_label(to)?,
                value,
            }),
        }
    }

    /// Category the request belongs to.
    pub fn category(&self) -> Category {
        match self {
            ConversionRequest::Length { .. } => Category::Length,
            ConversionRequest::Weight { .. } => Category::Weight,
            ConversionRequest::Temperature { .. } => Category::Temperature,
        }
    }

    /// Input value carried by the request.
    pub fn value(&self) -> f64 {
        match *self {
            ConversionRequest::Length { value, .. } => value,
            ConversionRequest::Weight { value, .. } => value,
            ConversionRequest::Temperature { value, .. } => value,
        }
    }

    /// Run the conversion.
    pub fn convert(&self) -> f64 {
        match *self {
            ConversionRequest::Length { from, to, value } => convert::length(value, from, to),
            ConversionRequest::Weight { from, to, value } => convert::weight(value, from, to),
            ConversionRequest::Temperature { from, to, value } => {
                convert::temperature(value, from, to)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_length_request() {
        let request = ConversionRequest::Length {
            from: LengthUnit::Kilometer,
            to: LengthUnit::Meter,
            value: 2.0,
        };
        assert_eq!(request.category(), Category::Length);
        assert_eq!(request.value(), 2.0);
        assert_eq!(request.convert(), 2000.0);
    }

    #[test]
    fn test_convert_temperature_request() {
        let request = ConversionRequest::Temperature {
            from: TemperatureUnit::Celsius,
            to: TemperatureUnit::Kelvin,
            value: 0.0,
        };
        assert_eq!(request.convert(), 273.15);
    }

    #[test]
    fn test_from_labels() {
        let request =
            ConversionRequest::from_labels(Category::Weight, "Pound", "Ounce", 1.0).unwrap();
        assert_eq!(
            request,
            ConversionRequest::Weight {
                from: WeightUnit::Pound,
                to: WeightUnit::Ounce,
                value: 1.0,
            }
        );
    }

    #[test]
    fn test_from_labels_rejects_unit_of_other_category() {
        let err = ConversionRequest::from_labels(Category::Weight, "Meter", "Gram", 1.0)
            .unwrap_err();
        assert_eq!(
            err,
            ConvertError::UnknownUnit {
                category: Category::Weight,
                label: "Meter".to_string(),
            }
        );
    }

    #[test]
    fn test_serde_shape() {
        let request = ConversionRequest::Length {
            from: LengthUnit::Mile,
            to: LengthUnit::Kilometer,
            value: 1.0,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "category": "Length",
                "from": "Mile",
                "to": "Kilometer",
                "value": 1.0,
            })
        );
    }
}
