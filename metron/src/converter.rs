//! The converter screen: category selection plus per-category panels

use metron_units::{
    Category, ConvertError, LengthUnit, TemperatureUnit, UnitKind, WeightUnit,
};

use crate::panel::Panel;

/// Whole-screen state for the unit converter.
///
/// Each category keeps its own panel, so switching categories and back
/// preserves selections, input, and result. All selector operations
/// take the label strings the widgets display; unknown labels are
/// reported as [`ConvertError`] instead of being silently remapped.
#[derive(Debug, Clone, PartialEq)]
pub struct Converter {
    category: Category,
    length: Panel<LengthUnit>,
    weight: Panel<WeightUnit>,
    temperature: Panel<TemperatureUnit>,
}

impl Converter {
    /// Fresh screen: Length selected, every panel on its defaults.
    pub fn new() -> Self {
        Converter {
            category: Category::Length,
            length: Panel::new(),
            weight: Panel::new(),
            temperature: Panel::new(),
        }
    }

    /// Currently selected category.
    pub fn category(&self) -> Category {
        self.category
    }

    /// Labels for the category selector, in order.
    pub fn category_labels() -> Vec<&'static str> {
        Category::ALL.iter().map(|c| c.label()).collect()
    }

    pub fn select_category(&mut self, category: Category) {
        tracing::debug!(category = category.label(), "select category");
        self.category = category;
    }

    /// Select the category by its selector label.
    pub fn select_category_label(&mut self, label: &str) -> Result<(), ConvertError> {
        self.select_category(Category::from_label(label)?);
        Ok(())
    }

    /// Unit labels for the active category's selectors, in order.
    pub fn unit_labels(&self) -> &'static [&'static str] {
        self.category.unit_labels()
    }

    /// Label of the active panel's source unit.
    pub fn from_label(&self) -> &'static str {
        match self.category {
            Category::Length => self.length.from.label(),
            Category::Weight => self.weight.from.label(),
            Category::Temperature => self.temperature.from.label(),
        }
    }

    /// Label of the active panel's target unit.
    pub fn to_label(&self) -> &'static str {
        match self.category {
            Category::Length => self.length.to.label(),
            Category::Weight => self.weight.to.label(),
            Category::Temperature => self.temperature.to.label(),
        }
    }

    /// Select the active panel's source unit by label.
    pub fn select_from(&mut self, label: &str) -> Result<(), ConvertError> {
        match self.category {
            Category::Length => self.length.select_from(LengthUnit::from_label(label)?),
            Category::Weight => self.weight.select_from(WeightUnit::from_label(label)?),
            Category::Temperature => {
                self.temperature.select_from(TemperatureUnit::from_label(label)?)
            }
        }
        Ok(())
    }

    /// Select the active panel's target unit by label.
    pub fn select_to(&mut self, label: &str) -> Result<(), ConvertError> {
        match self.category {
            Category::Length => self.length.select_to(LengthUnit::from_label(label)?),
            Category::Weight => self.weight.select_to(WeightUnit::from_label(label)?),
            Category::Temperature => {
                self.temperature.select_to(TemperatureUnit::from_label(label)?)
            }
        }
        Ok(())
    }

    /// Exchange the active panel's selections.
    pub fn swap(&mut self) {
        tracing::debug!(category = self.category.label(), "swap units");
        match self.category {
            Category::Length => self.length.swap(),
            Category::Weight => self.weight.swap(),
            Category::Temperature => self.temperature.swap(),
        }
    }

    /// Replace the active panel's input-field text.
    pub fn set_input(&mut self, text: impl Into<String>) {
        match self.category {
            Category::Length => self.length.set_input(text),
            Category::Weight => self.weight.set_input(text),
            Category::Temperature => self.temperature.set_input(text),
        }
    }

    /// The active panel's input-field text.
    pub fn input(&self) -> &str {
        match self.category {
            Category::Length => self.length.input(),
            Category::Weight => self.weight.input(),
            Category::Temperature => self.temperature.input(),
        }
    }

    /// Run the conversion for the active panel and return the result.
    pub fn convert(&mut self) -> f64 {
        let result = match self.category {
            Category::Length => self.length.convert(),
            Category::Weight => self.weight.convert(),
            Category::Temperature => self.temperature.convert(),
        };
        tracing::debug!(
            category = self.category.label(),
            from = self.from_label(),
            to = self.to_label(),
            result,
            "convert"
        );
        result
    }

    /// The active panel's result line; empty before the first convert.
    pub fn result_text(&self) -> String {
        match self.category {
            Category::Length => self.length.result_text(),
            Category::Weight => self.weight.result_text(),
            Category::Temperature => self.temperature.result_text(),
        }
    }

    /// Read access to the length panel.
    pub fn length_panel(&self) -> &Panel<LengthUnit> {
        &self.length
    }

    /// Read access to the weight panel.
    pub fn weight_panel(&self) -> &Panel<WeightUnit> {
        &self.weight
    }

    /// Read access to the temperature panel.
    pub fn temperature_panel(&self) -> &Panel<TemperatureUnit> {
        &self.temperature
    }
}

impl Default for Converter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_screen_defaults() {
        let screen = Converter::new();
        assert_eq!(screen.category(), Category::Length);
        assert_eq!(screen.from_label(), "Meter");
        assert_eq!(screen.to_label(), "Kilometer");
        assert_eq!(screen.result_text(), "");
    }

    #[test]
    fn test_category_selector_entries() {
        assert_eq!(
            Converter::category_labels(),
            ["Length", "Weight", "Temperature"]
        );
        let screen = Converter::new();
        assert_eq!(screen.unit_labels()[0], "Meter");
    }

    #[test]
    fn test_length_conversion_flow() {
        let mut screen = Converter::new();
        screen.set_input("1");
        screen.select_from("Kilometer").unwrap();
        screen.select_to("Meter").unwrap();
        assert_eq!(screen.convert(), 1000.0);
        assert_eq!(screen.result_text(), "1000");
    }

    #[test]
    fn test_temperature_conversion_flow() {
        let mut screen = Converter::new();
        screen.select_category_label("Temperature").unwrap();
        screen.set_input("100");
        // defaults: Celsius -> Fahrenheit
        assert_eq!(screen.convert(), 212.0);
    }

    #[test]
    fn test_swap_then_convert() {
        let mut screen = Converter::new();
        screen.set_input("2");
        // Meter -> Kilometer swapped to Kilometer -> Meter
        screen.swap();
        assert_eq!(screen.from_label(), "Kilometer");
        assert_eq!(screen.to_label(), "Meter");
        assert_eq!(screen.convert(), 2000.0);
    }

    #[test]
    fn test_unknown_selector_label_is_rejected() {
        let mut screen = Converter::new();
        let err = screen.select_from("Furlong").unwrap_err();
        assert_eq!(
            err,
            ConvertError::UnknownUnit {
                category: Category::Length,
                label: "Furlong".to_string(),
            }
        );
        // selection unchanged
        assert_eq!(screen.from_label(), "Meter");

        assert!(screen.select_category_label("Currency").is_err());
        assert_eq!(screen.category(), Category::Length);
    }

    #[test]
    fn test_panels_keep_state_across_category_switches() {
        let mut screen = Converter::new();
        screen.set_input("5");
        screen.select_to("Inch").unwrap();

        screen.select_category(Category::Weight);
        screen.set_input("16");
        screen.select_from("Ounce").unwrap();
        screen.select_to("Pound").unwrap();
        assert_eq!(screen.convert(), 1.0);

        screen.select_category(Category::Length);
        assert_eq!(screen.input(), "5");
        assert_eq!(screen.to_label(), "Inch");
    }

    #[test]
    fn test_empty_input_converts_as_zero() {
        let mut screen = Converter::new();
        screen.select_category(Category::Temperature);
        assert_eq!(screen.convert(), 32.0);
    }
}
