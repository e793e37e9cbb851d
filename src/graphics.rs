/// Error types for core
pub mod error;
pub use error::*;

/// Gpu abstraction
pub mod gpu;
pub use gpu::*;

/// Need this for rendering to screen!
pub mod viewport;
pub use viewport::*;

pub mod buffer;
pub use buffer::*;

pub mod pipeline;
pub use pipeline::*;
