//! Metron Units - Unit Conversion Engine
//!
//! Pure conversion arithmetic over three closed unit categories. Every
//! conversion is routed through the category's base unit, so each unit
//! carries a single factor (or affine transform) to the base instead of
//! a pairwise table.
//!
//! Categories:
//! - Length (Meter, Kilometer, Centimeter, Millimeter, Mile, Yard, Foot, Inch)
//!   with Meter as base
//! - Weight (Kilogram, Gram, Milligram, Pound, Ounce) with Kilogram as base
//! - Temperature (Celsius, Fahrenheit, Kelvin) with Celsius as base
//!
//! Units are closed enums per category, so a conversion can never mix
//! units across categories. Label strings from a selector widget go
//! through [`UnitKind::from_label`], which reports unknown labels as
//! [`ConvertError`]; the legacy label functions in [`convert`] instead
//! keep the historical silent base-unit fallback.

mod category;
pub mod convert;
mod request;
mod unit;

pub use category::Category;
pub use convert::{convert_length, convert_temperature, convert_weight};
pub use request::ConversionRequest;
pub use unit::{ConvertError, LengthUnit, TemperatureUnit, UnitKind, WeightUnit};
