//! Core foundation types shared by all layers.

pub mod types;

pub use types::{CloudPoint, ColorRgb, VisibleCloud};
