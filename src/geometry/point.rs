//! 2D point with f64 coordinates

use std::fmt;

use crate::canvas::Coord;

/// Immutable 2D point
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline]
    pub const fn x(&self) -> f64 {
        self.x
    }

    #[inline]
    pub const fn y(&self) -> f64 {
        self.y
    }

    /// Euclidean distance from `(0, 0)`
    #[inline]
    pub fn distance_from_origin(&self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Nearest grid cell, rounding halves to even.
    ///
    /// Coordinates beyond the `i32` range saturate.
    #[allow(clippy::cast_possible_truncation)]
    pub fn to_grid(&self) -> Coord {
        (
            self.x.round_ties_even() as i32,
            self.y.round_ties_even() as i32,
        )
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Point {
    // `{:?}` keeps the trailing `.0` on whole numbers
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:?}/{:?})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_pythagorean_triple() {
        assert_eq!(Point::new(3.0, 4.0).distance_from_origin(), 5.0);
    }

    #[test]
    fn test_distance_from_origin() {
        assert_eq!(Point::new(0.0, 0.0).distance_from_origin(), 0.0);
        assert!((Point::new(1.0, 1.0).distance_from_origin() - 1.414_213_562_373_095_1).abs() < 1e-15);
        assert_eq!(Point::new(-3.0, -4.0).distance_from_origin(), 5.0);
    }

    #[test]
    fn test_display() {
        assert_eq!(Point::new(2.3, 43.14).to_string(), "(2.3/43.14)");
        assert_eq!(Point::new(1.0, 0.5).to_string(), "(1.0/0.5)");
    }

    #[test]
    fn test_to_grid_rounds_half_to_even() {
        assert_eq!(Point::new(2.5, 3.5).to_grid(), (2, 4));
        assert_eq!(Point::new(-0.5, 7.49).to_grid(), (0, 7));
        assert_eq!(Point::new(4.51, -1.5).to_grid(), (5, -2));
    }
}
