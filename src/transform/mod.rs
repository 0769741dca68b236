//! Time-stamped rigid transform resolution between named frames.

mod buffer;
mod resolver;

pub use buffer::TransformBuffer;
pub use resolver::TransformResolver;
