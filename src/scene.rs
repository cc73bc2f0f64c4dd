//! Declarative drawing scenes
//!
//! A scene is a canvas size plus an ordered list of shapes, loaded from TOML
//! or JSON:
//!
//! ```toml
//! width = 30
//! height = 10
//!
//! [[shapes]]
//! kind = "rectangle"
//! upper_left = [1, 1]
//! lower_right = [12, 6]
//! paint = "#"
//!
//! [[shapes]]
//! kind = "n_gon"
//! center = [20, 5]
//! radius = 4
//! number_of_points = 6
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::canvas::{Canvas, Coord, Drawable, NGon, Polygon, Rectangle, Segment};
use crate::config::AppConfig;
use crate::errors::{GridpaintError, Result};
use crate::geometry::{Point, Shape};

fn default_true() -> bool {
    true
}

/// One drawing command
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SceneShape {
    Line {
        start: Coord,
        end: Coord,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        paint: Option<char>,
    },
    Polygon {
        points: Vec<Coord>,
        #[serde(default = "default_true")]
        closed: bool,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        paint: Option<char>,
    },
    Rectangle {
        upper_left: Coord,
        lower_right: Coord,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        paint: Option<char>,
    },
    NGon {
        center: Coord,
        radius: i32,
        number_of_points: u32,
        #[serde(default)]
        rotation: i32,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        paint: Option<char>,
    },
    /// Floating-point outline, snapped to the grid before drawing
    Points {
        points: Vec<(f64, f64)>,
        #[serde(default = "default_true")]
        closed: bool,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        paint: Option<char>,
    },
}

impl SceneShape {
    pub fn paint(&self) -> Option<char> {
        match self {
            Self::Line { paint, .. }
            | Self::Polygon { paint, .. }
            | Self::Rectangle { paint, .. }
            | Self::NGon { paint, .. }
            | Self::Points { paint, .. } => *paint,
        }
    }

    /// Geometry shape for `points` entries
    pub fn geometry(&self) -> Option<Shape> {
        match self {
            Self::Points { points, .. } => Some(points.iter().copied().map(Point::from).collect()),
            _ => None,
        }
    }

    fn figure(&self) -> Box<dyn Drawable> {
        match self {
            Self::Line { start, end, .. } => Box::new(Segment::new(*start, *end)),
            Self::Polygon { points, closed, .. } => Box::new(Polygon {
                vertices: points.clone(),
                closed: *closed,
            }),
            Self::Rectangle {
                upper_left,
                lower_right,
                ..
            } => Box::new(Rectangle::new(*upper_left, *lower_right)),
            Self::NGon {
                center,
                radius,
                number_of_points,
                rotation,
                ..
            } => Box::new(NGon::new(*center, *radius, *number_of_points).with_rotation(*rotation)),
            Self::Points { closed, .. } => Box::new(Polygon {
                vertices: self.geometry().map(|s| s.to_grid()).unwrap_or_default(),
                closed: *closed,
            }),
        }
    }
}

/// Canvas size plus shapes to draw in order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<usize>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<usize>,

    /// Paint for shapes that do not set their own
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paint: Option<char>,

    #[serde(default)]
    pub shapes: Vec<SceneShape>,
}

impl Scene {
    /// Load a scene, JSON for `.json` files and TOML otherwise
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let parse_error = |message: String| GridpaintError::ParseError {
            path: path.to_path_buf(),
            message,
        };

        if path.extension().is_some_and(|e| e == "json") {
            serde_json::from_str(&content).map_err(|e| parse_error(e.to_string()))
        } else {
            toml::from_str(&content).map_err(|e| parse_error(e.to_string()))
        }
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| GridpaintError::ParseError {
            path: "<scene>".into(),
            message: e.to_string(),
        })
    }

    /// The classic sampler: a line, a five-point polygon, a rectangle and a
    /// 20-point n-gon on a 100x40 canvas
    pub fn demo() -> Self {
        Self {
            width: Some(100),
            height: Some(40),
            paint: None,
            shapes: vec![
                SceneShape::Line {
                    start: (10, 4),
                    end: (92, 19),
                    paint: Some('+'),
                },
                SceneShape::Polygon {
                    points: vec![(7, 12), (24, 29), (42, 15), (37, 32), (15, 35)],
                    closed: true,
                    paint: None,
                },
                SceneShape::Rectangle {
                    upper_left: (45, 2),
                    lower_right: (80, 27),
                    paint: Some('#'),
                },
                SceneShape::NGon {
                    center: (72, 25),
                    radius: 12,
                    number_of_points: 20,
                    rotation: 80,
                    paint: Some('-'),
                },
            ],
        }
    }

    /// Three unit squares at increasing distance from the origin, listed
    /// out of order
    pub fn demo_shapes() -> Vec<Shape> {
        let unit_square = |x: f64, y: f64| {
            Shape::new(vec![
                Point::new(x, y),
                Point::new(x, y + 1.0),
                Point::new(x + 1.0, y + 1.0),
                Point::new(x + 1.0, y),
            ])
        };
        vec![
            unit_square(10.0, 10.0),
            unit_square(0.0, 0.0),
            unit_square(5.0, 5.0),
        ]
    }

    /// Geometry shapes of all `points` entries, in scene order
    pub fn geometry_shapes(&self) -> Vec<Shape> {
        self.shapes.iter().filter_map(SceneShape::geometry).collect()
    }

    /// Create the canvas and draw every shape in order.
    ///
    /// Unset size and paint fall back to `config`. The first failing shape
    /// aborts the whole scene.
    pub fn paint(&self, config: &AppConfig) -> Result<Canvas> {
        let width = self.width.unwrap_or(config.width);
        let height = self.height.unwrap_or(config.height);
        let default_paint = self.paint.unwrap_or(config.paint);

        let mut canvas = Canvas::new(width, height)?;
        tracing::info!(
            "Painting {} shapes on a {}x{} canvas",
            self.shapes.len(),
            width,
            height
        );

        for (index, shape) in self.shapes.iter().enumerate() {
            let paint = shape.paint().unwrap_or(default_paint);
            canvas
                .draw(shape.figure().as_ref(), paint)
                .inspect_err(|e| tracing::error!("Shape {} failed: {}", index, e))?;
        }

        Ok(canvas)
    }
}
