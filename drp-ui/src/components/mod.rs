//! Reusable Dioxus RSX components for picking date ranges.

mod date_range_inputs;
mod defined_range;
mod error_display;
mod input_range_field;
mod static_range_button;

pub use date_range_inputs::DateRangeInputs;
pub use defined_range::DefinedRange;
pub use error_display::ErrorDisplay;
pub use input_range_field::InputRangeField;
pub use static_range_button::StaticRangeButton;
