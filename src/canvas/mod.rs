//! # ASCII rasterization canvas
//!
//! A fixed-size character grid and the figures that can be traced onto it.
//!
//! ## Architecture
//!
//! ```text
//!    Segment / Polygon / Rectangle / NGon      (Drawable)
//!                     │  segments()
//!                     ▼
//!              LineCells (Bresenham)
//!                     │  cells, bounds-checked up front
//!                     ▼
//!                  Canvas  ──render()──▶  bordered text
//! ```
//!
//! Coordinates are `(x, y)` integer pairs: `x` is the column, `y` the row,
//! with `(0, 0)` in the upper-left corner.

mod canvas;
mod rasterizer;
mod shapes;

pub use canvas::{Canvas, BLANK, DEFAULT_PAINT};
pub use rasterizer::LineCells;
pub use shapes::{Drawable, NGon, Polygon, Rectangle, Segment};

/// Integer grid coordinate, `(column, row)`
pub type Coord = (i32, i32);
