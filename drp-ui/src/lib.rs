//! Dioxus components for picking predefined date ranges.
//!
//! This crate provides:
//! - `components`: the `DefinedRange` panel and its building blocks
//! - `state`: component-local focus state and a signal bundle for hosts

pub mod components;
pub mod state;
