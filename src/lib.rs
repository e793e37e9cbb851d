#![allow(clippy::module_name_repetitions)]

mod graphics;
pub use graphics::*;

pub mod prelude;

/// Export glow crate
pub use glow;

#[cfg(feature = "window")]
pub mod winit;
#[cfg(feature = "window")]
pub use crate::winit::*;
