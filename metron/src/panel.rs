//! One conversion panel per category

use metron_units::UnitKind;

use crate::input::parse_value;

/// Selection, input, and result state for a single category's panel.
///
/// The panel owns its state, so switching categories on the screen and
/// coming back finds the selections and input unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct Panel<U: UnitKind> {
    /// Source unit selection.
    pub from: U,
    /// Target unit selection.
    pub to: U,
    input: String,
    result: Option<f64>,
}

impl<U: UnitKind> Panel<U> {
    /// Fresh panel with the default selection: the first two units of
    /// the set.
    pub fn new() -> Self {
        Panel {
            from: U::ALL[0],
            to: U::ALL[1],
            input: String::new(),
            result: None,
        }
    }

    pub fn select_from(&mut self, unit: U) {
        self.from = unit;
    }

    pub fn select_to(&mut self, unit: U) {
        self.to = unit;
    }

    /// Exchange the two selections.
    pub fn swap(&mut self) {
        std::mem::swap(&mut self.from, &mut self.to);
    }

    /// Replace the input-field text. The result stays until the next
    /// convert action.
    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    /// Current input-field text.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Run the conversion on the current input and keep the result.
    pub fn convert(&mut self) -> f64 {
        let value = parse_value(&self.input);
        let result = U::request(value, self.from, self.to).convert();
        self.result = Some(result);
        result
    }

    /// Last conversion result, if any.
    pub fn result(&self) -> Option<f64> {
        self.result
    }

    /// Result line for display; empty before the first conversion.
    pub fn result_text(&self) -> String {
        self.result.map(|v| v.to_string()).unwrap_or_default()
    }

    /// Clear input and result, keeping the selections.
    pub fn reset(&mut self) {
        self.input.clear();
        self.result = None;
    }
}

impl<U: UnitKind> Default for Panel<U> {
    fn default() -> Self {
        Self::new()
    }
}
