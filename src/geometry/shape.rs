//! Ordered collection of points

use std::cmp::Ordering;
use std::fmt;

use super::Point;
use crate::canvas::Coord;
use crate::errors::{GridpaintError, Result};

/// Ordered sequence of points.
///
/// Point order matters when the shape is rasterized. Centroid, equality and
/// ordering ignore it.
///
/// Two shapes compare by the distance of their centroids from the origin and
/// nothing else, using exact floating-point comparison. Shapes that are not
/// congruent can therefore be equal.
#[derive(Debug, Clone, Default)]
pub struct Shape {
    points: Vec<Point>,
}

impl Shape {
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Componentwise arithmetic mean of all points
    #[allow(clippy::cast_precision_loss)]
    pub fn centroid(&self) -> Result<Point> {
        if self.points.is_empty() {
            return Err(GridpaintError::InvalidGeometry(
                "cannot calculate the centroid of an empty shape".to_string(),
            ));
        }

        let n = self.points.len() as f64;
        let sum_x: f64 = self.points.iter().map(Point::x).sum();
        let sum_y: f64 = self.points.iter().map(Point::y).sum();

        Ok(Point::new(sum_x / n, sum_y / n))
    }

    /// Distance of the centroid from the origin, the key used for comparison
    pub fn centroid_distance(&self) -> Result<f64> {
        Ok(self.centroid()?.distance_from_origin())
    }

    /// Compare two shapes by centroid distance, with no epsilon
    pub fn compare(&self, other: &Shape) -> Result<Ordering> {
        let a = self.centroid_distance()?;
        let b = other.centroid_distance()?;
        a.partial_cmp(&b).ok_or_else(|| {
            GridpaintError::InvalidGeometry(format!(
                "centroid distances {a} and {b} are not comparable"
            ))
        })
    }

    /// Grid cells for every point, in order
    pub fn to_grid(&self) -> Vec<Coord> {
        self.points.iter().map(Point::to_grid).collect()
    }
}

impl From<Vec<Point>> for Shape {
    fn from(points: Vec<Point>) -> Self {
        Self::new(points)
    }
}

impl FromIterator<Point> for Shape {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl PartialEq for Shape {
    fn eq(&self, other: &Self) -> bool {
        matches!(self.compare(other), Ok(Ordering::Equal))
    }
}

impl PartialOrd for Shape {
    /// `None` when either shape is empty
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.compare(other).ok()
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Shape [")?;
        for (i, point) in self.points.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{point}")?;
        }
        write!(f, "]")
    }
}

/// Stable sort by centroid distance from the origin.
///
/// Fails without reordering anything if any shape is empty or has a NaN
/// distance.
pub fn sort_by_distance(shapes: &mut [Shape]) -> Result<()> {
    let mut keyed = Vec::with_capacity(shapes.len());
    for (index, shape) in shapes.iter().enumerate() {
        let distance = shape.centroid_distance()?;
        if distance.is_nan() {
            return Err(GridpaintError::InvalidGeometry(format!(
                "shape {index} has no comparable centroid distance"
            )));
        }
        keyed.push((distance, index));
    }

    keyed.sort_by(|a, b| a.0.total_cmp(&b.0));

    let sorted: Vec<Shape> = keyed.iter().map(|&(_, i)| shapes[i].clone()).collect();
    shapes.clone_from_slice(&sorted);
    Ok(())
}
