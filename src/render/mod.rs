//! Per-cycle rendering of the visible cloud.

mod renderer;

pub use renderer::{CloudRenderer, CycleParams};
