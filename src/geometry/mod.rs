//! Geometric primitives: immutable points and ordered point collections.
//!
//! These are plain value types. To rasterize a [`Shape`], convert it to grid
//! coordinates with [`Shape::to_grid`] and hand the result to the canvas.

mod point;
mod shape;

pub use point::Point;
pub use shape::{sort_by_distance, Shape};
