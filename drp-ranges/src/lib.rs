//! Date range catalog and selection logic for the defined-range picker.
//!
//! - `date_range`: the `DateRange` value exchanged with the host
//! - `catalog`: predefined static and input ranges, computed once per process
//! - `selection`: selected-range lookup, patches, focus advance
//! - `config`: JSON picker configuration

pub mod catalog;
pub mod config;
pub mod date_range;
pub mod error;
pub mod selection;

pub use catalog::{InputRange, InputValue, RangeCatalog, StaticRange, StaticRangeDef};
pub use date_range::DateRange;
pub use selection::{FocusedRange, RangePatch};
