//! Fixed-size character grid

use std::fmt;

use super::rasterizer::LineCells;
use super::shapes::{Drawable, NGon, Polygon, Rectangle, Segment};
use super::Coord;
use crate::errors::{GridpaintError, Result};

/// Character of an unpainted cell
pub const BLANK: char = ' ';

/// Paint character used when none is given
pub const DEFAULT_PAINT: char = '*';

/// Character grid, `height` rows of `width` cells.
///
/// Row 0 is the top row, column 0 the leftmost column. The size is fixed at
/// construction. Drawing calls are all-or-nothing: if any cell a call would
/// paint lies outside the grid, the call fails and nothing is painted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    width: usize,
    height: usize,
    /// One buffer per row
    rows: Vec<Vec<char>>,
}

impl Canvas {
    /// Create a blank canvas
    pub fn new(width: usize, height: usize) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(GridpaintError::InvalidDimensions { width, height });
        }

        Ok(Self {
            width,
            height,
            rows: vec![vec![BLANK; width]; height],
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Row and column index for a cell, if it is on the grid
    fn index(&self, (x, y): Coord) -> Option<(usize, usize)> {
        let col = usize::try_from(x).ok().filter(|&c| c < self.width)?;
        let row = usize::try_from(y).ok().filter(|&r| r < self.height)?;
        Some((row, col))
    }

    fn out_of_bounds(&self, (x, y): Coord) -> GridpaintError {
        GridpaintError::OutOfBounds {
            x,
            y,
            width: self.width,
            height: self.height,
        }
    }

    /// Character at a cell, `None` off the grid
    pub fn cell(&self, x: i32, y: i32) -> Option<char> {
        self.index((x, y)).map(|(row, col)| self.rows[row][col])
    }

    /// Text of one row
    pub fn row(&self, y: usize) -> Option<String> {
        self.rows.get(y).map(|row| row.iter().collect())
    }

    /// Paint a single cell
    pub fn paint(&mut self, x: i32, y: i32, paint: char) -> Result<()> {
        let (row, col) = self
            .index((x, y))
            .ok_or_else(|| self.out_of_bounds((x, y)))?;
        self.rows[row][col] = paint;
        Ok(())
    }

    /// Trace a figure and paint every cell it covers
    pub fn draw<D: Drawable + ?Sized>(&mut self, figure: &D, paint: char) -> Result<()> {
        let segments = figure.segments()?;

        let mut cells = Vec::new();
        for segment in &segments {
            let before = cells.len();
            for cell in LineCells::new(segment.start, segment.end) {
                let index = self.index(cell).ok_or_else(|| self.out_of_bounds(cell))?;
                cells.push(index);
            }
            tracing::trace!(
                "Traced {:?} -> {:?}: {} cells",
                segment.start,
                segment.end,
                cells.len() - before
            );
        }

        for &(row, col) in &cells {
            self.rows[row][col] = paint;
        }

        tracing::debug!(
            "Drew {} with {} segments, {} cells, paint {:?}",
            figure.kind(),
            segments.len(),
            cells.len(),
            paint
        );
        Ok(())
    }

    /// Straight line between two cells, both ends included
    pub fn draw_line_segment(&mut self, start: Coord, end: Coord, paint: char) -> Result<()> {
        self.draw(&Segment::new(start, end), paint)
    }

    /// Segments between consecutive points, plus last-to-first when `closed`
    pub fn draw_polygon(&mut self, points: &[Coord], closed: bool, paint: char) -> Result<()> {
        let polygon = Polygon {
            vertices: points.to_vec(),
            closed,
        };
        self.draw(&polygon, paint)
    }

    /// Open two-point polygon
    pub fn draw_line(&mut self, start: Coord, end: Coord, paint: char) -> Result<()> {
        self.draw_polygon(&[start, end], false, paint)
    }

    pub fn draw_rectangle(
        &mut self,
        upper_left: Coord,
        lower_right: Coord,
        paint: char,
    ) -> Result<()> {
        self.draw(&Rectangle::new(upper_left, lower_right), paint)
    }

    pub fn draw_n_gon(
        &mut self,
        center: Coord,
        radius: i32,
        number_of_points: u32,
        rotation: i32,
        paint: char,
    ) -> Result<()> {
        let ngon = NGon::new(center, radius, number_of_points).with_rotation(rotation);
        self.draw(&ngon, paint)
    }

    /// Reset every cell to blank
    pub fn clear(&mut self) {
        for row in &mut self.rows {
            row.fill(BLANK);
        }
    }

    /// Number of non-blank cells
    pub fn painted_cells(&self) -> usize {
        self.rows
            .iter()
            .flatten()
            .filter(|&&c| c != BLANK)
            .count()
    }

    /// Grid with a digit ruler on all four sides.
    ///
    /// Header and footer carry each column index modulo 10 after one space;
    /// every row is framed by its row index modulo 10. Each line ends in `\n`.
    pub fn render(&self) -> String {
        let header: String = std::iter::once(' ')
            .chain((0..self.width).map(ruler_digit))
            .collect();

        let mut out = String::with_capacity((self.width + 3) * (self.height + 2));
        out.push_str(&header);
        out.push('\n');
        for (idx, row) in self.rows.iter().enumerate() {
            let digit = ruler_digit(idx);
            out.push(digit);
            out.extend(row.iter());
            out.push(digit);
            out.push('\n');
        }
        out.push_str(&header);
        out.push('\n');
        out
    }
}

fn ruler_digit(index: usize) -> char {
    // index % 10 < 10, always a digit
    char::from_digit((index % 10) as u32, 10).unwrap_or('?')
}

impl fmt::Display for Canvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
