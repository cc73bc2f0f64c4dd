//! Figures that can be traced onto a canvas

use super::Coord;
use crate::errors::{GridpaintError, Result};

/// Drawable figure, reduced to straight segments
pub trait Drawable {
    /// Segments in drawing order
    fn segments(&self) -> Result<Vec<Segment>>;

    /// Short name used in logs
    fn kind(&self) -> &'static str;
}

/// Straight line segment between two grid cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    pub start: Coord,
    pub end: Coord,
}

impl Segment {
    pub const fn new(start: Coord, end: Coord) -> Self {
        Self { start, end }
    }
}

impl Drawable for Segment {
    fn segments(&self) -> Result<Vec<Segment>> {
        Ok(vec![*self])
    }

    fn kind(&self) -> &'static str {
        "line"
    }
}

/// Chain of segments through an ordered list of vertices
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Polygon {
    pub vertices: Vec<Coord>,
    /// Connect the last vertex back to the first
    pub closed: bool,
}

impl Polygon {
    /// Closed polygon
    pub fn new(vertices: Vec<Coord>) -> Self {
        Self {
            vertices,
            closed: true,
        }
    }

    /// Polygon without the closing segment
    pub fn open(vertices: Vec<Coord>) -> Self {
        Self {
            vertices,
            closed: false,
        }
    }
}

impl Drawable for Polygon {
    /// Fewer than two vertices give no segments at all.
    fn segments(&self) -> Result<Vec<Segment>> {
        if self.vertices.len() < 2 {
            return Ok(Vec::new());
        }

        let mut segments: Vec<Segment> = self
            .vertices
            .windows(2)
            .map(|pair| Segment::new(pair[0], pair[1]))
            .collect();

        if self.closed {
            if let (Some(&last), Some(&first)) = (self.vertices.last(), self.vertices.first()) {
                segments.push(Segment::new(last, first));
            }
        }

        Ok(segments)
    }

    fn kind(&self) -> &'static str {
        "polygon"
    }
}

/// Rectangle given by two opposite corners
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rectangle {
    pub upper_left: Coord,
    pub lower_right: Coord,
}

impl Rectangle {
    pub const fn new(upper_left: Coord, lower_right: Coord) -> Self {
        Self {
            upper_left,
            lower_right,
        }
    }

    /// Upper-left, upper-right, lower-right, lower-left
    pub fn corners(&self) -> [Coord; 4] {
        let (x1, y1) = self.upper_left;
        let (x2, y2) = self.lower_right;
        [self.upper_left, (x2, y1), self.lower_right, (x1, y2)]
    }
}

impl Drawable for Rectangle {
    fn segments(&self) -> Result<Vec<Segment>> {
        Polygon::new(self.corners().to_vec()).segments()
    }

    fn kind(&self) -> &'static str {
        "rectangle"
    }
}

/// Regular polygon with vertices spread around a circle
///
/// Angles start at `rotation` degrees and advance by `360 / number_of_points`
/// whole degrees (integer division) until a full turn is covered. Counts that
/// do not divide 360 therefore give an uneven polygon, and may give more
/// vertices than requested (7 points step by 51 degrees and produce 8).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NGon {
    pub center: Coord,
    pub radius: i32,
    pub number_of_points: u32,
    /// Start angle in degrees
    pub rotation: i32,
}

impl NGon {
    pub const fn new(center: Coord, radius: i32, number_of_points: u32) -> Self {
        Self {
            center,
            radius,
            number_of_points,
            rotation: 0,
        }
    }

    pub fn with_rotation(mut self, rotation: i32) -> Self {
        self.rotation = rotation;
        self
    }

    /// Angular step in whole degrees
    fn step(&self) -> Result<usize> {
        if self.number_of_points == 0 {
            return Err(GridpaintError::invalid_argument(
                "number_of_points",
                "an n-gon needs at least 1 point",
            ));
        }

        let step = 360 / self.number_of_points;
        if step == 0 {
            return Err(GridpaintError::invalid_argument(
                "number_of_points",
                format!(
                    "{} points leave no whole-degree step (at most 360)",
                    self.number_of_points
                ),
            ));
        }

        Ok(step as usize)
    }

    /// Vertices rounded to the nearest cell, halves to even
    #[allow(clippy::cast_possible_truncation)]
    pub fn vertices(&self) -> Result<Vec<Coord>> {
        let step = self.step()?;
        let (cx, cy) = (f64::from(self.center.0), f64::from(self.center.1));
        let radius = f64::from(self.radius);

        let start = i64::from(self.rotation);
        let vertices = (start..start + 360)
            .step_by(step)
            .map(|angle| {
                #[allow(clippy::cast_precision_loss)]
                let radians = (angle as f64).to_radians();
                let x = cx + radius * radians.cos();
                let y = cy + radius * radians.sin();
                (x.round_ties_even() as i32, y.round_ties_even() as i32)
            })
            .collect();

        Ok(vertices)
    }
}

impl Drawable for NGon {
    fn segments(&self) -> Result<Vec<Segment>> {
        Polygon::new(self.vertices()?).segments()
    }

    fn kind(&self) -> &'static str {
        "n_gon"
    }
}
