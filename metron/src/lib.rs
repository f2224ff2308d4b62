//! Metron - Interactive converter screen model
//!
//! Models the converter screen as plain state types with no UI toolkit
//! attached: a category selector, one conversion panel per category,
//! and the convert and swap actions. A frontend binds its widgets to
//! [`Converter`] by label strings and re-renders from the returned
//! state; every operation is a synchronous value update.

mod converter;
mod input;
mod panel;

pub use converter::Converter;
pub use input::parse_value;
pub use panel::Panel;
