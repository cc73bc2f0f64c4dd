//! # Gridpaint
//!
//! A tiny 2D geometry and ASCII rasterization library.
//!
//! [`geometry`] holds points and point collections (centroids, distance
//! ordering). [`canvas`] is a fixed-size character grid that traces lines,
//! polygons, rectangles and regular n-gons with an integer Bresenham line
//! algorithm and renders the result as text with a digit ruler.
//!
//! ```
//! use gridpaint::canvas::Canvas;
//!
//! let mut canvas = Canvas::new(10, 1)?;
//! canvas.draw_line((0, 0), (5, 0), '#')?;
//! assert_eq!(canvas.row(0).as_deref(), Some("######    "));
//! # Ok::<(), gridpaint::GridpaintError>(())
//! ```

pub mod canvas;
pub mod config;
pub mod errors;
pub mod geometry;
pub mod scene;

pub use canvas::{Canvas, Coord};
pub use config::{load_config, AppConfig};
pub use errors::{GridpaintError, Result};
pub use geometry::{Point, Shape};
pub use scene::{Scene, SceneShape};
