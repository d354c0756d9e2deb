//! # Point Field
//!
//! Procedural point clouds for point-sprite rendering: spiral galaxies,
//! uniformly scattered fields, and ray picking over a grid of cubes.
//!
//! Generators are pure functions over their parameters and an injected
//! [`RandomSource`], and return a fresh immutable [`PointBuffer`].

pub mod buffer;
pub mod color;
pub mod constants;
pub mod error;
pub mod galaxy;
pub mod pick;
pub mod presets;
pub mod random;
pub mod scatter;

pub use buffer::*;
pub use color::*;
pub use error::*;
pub use galaxy::*;
pub use pick::*;
pub use presets::*;
pub use random::*;
pub use scatter::*;
