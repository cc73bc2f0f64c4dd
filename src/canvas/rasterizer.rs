//! Integer incremental (Bresenham) line tracing

use std::iter::FusedIterator;

use super::Coord;

/// Cells visited by a straight line from `start` to `end`.
///
/// Integer arithmetic only. Yields every cell the stepping loop visits, then
/// `end` itself, so the destination is always included. A zero-length line
/// yields its single cell once.
///
/// The step direction on an axis with no extent is `-1`. It never moves the
/// cursor, but it is kept so traced paths match cell for cell.
#[derive(Debug, Clone)]
pub struct LineCells {
    x: i64,
    y: i64,
    end_x: i64,
    end_y: i64,
    dx: i64,
    dy: i64,
    sx: i64,
    sy: i64,
    error: i64,
    finished: bool,
}

impl LineCells {
    pub fn new(start: Coord, end: Coord) -> Self {
        let (x1, y1) = (i64::from(start.0), i64::from(start.1));
        let (x2, y2) = (i64::from(end.0), i64::from(end.1));

        let dx = (x2 - x1).abs();
        let dy = (y2 - y1).abs();

        Self {
            x: x1,
            y: y1,
            end_x: x2,
            end_y: y2,
            dx,
            dy,
            sx: if x1 < x2 { 1 } else { -1 },
            sy: if y1 < y2 { 1 } else { -1 },
            error: dx - dy,
            finished: false,
        }
    }

    #[allow(clippy::cast_possible_truncation)]
    fn cell(x: i64, y: i64) -> Coord {
        // always between the two i32 endpoints
        (x as i32, y as i32)
    }
}

impl Iterator for LineCells {
    type Item = Coord;

    fn next(&mut self) -> Option<Coord> {
        if self.finished {
            return None;
        }

        // both coordinates have to match, not just one
        if self.x == self.end_x && self.y == self.end_y {
            self.finished = true;
            return Some(Self::cell(self.end_x, self.end_y));
        }

        let visited = Self::cell(self.x, self.y);

        let double_error = self.error * 2;
        if double_error > -self.dy {
            self.error -= self.dy;
            self.x += self.sx;
        }
        if double_error < self.dx {
            self.error += self.dx;
            self.y += self.sy;
        }

        Some(visited)
    }
}

impl FusedIterator for LineCells {}

#[cfg(test)]
mod tests {
    use super::*;

    fn trace(start: Coord, end: Coord) -> Vec<Coord> {
        LineCells::new(start, end).collect()
    }

    #[test]
    fn test_horizontal() {
        assert_eq!(
            trace((0, 0), (5, 0)),
            vec![(0, 0), (1, 0), (2, 0), (3, 0), (4, 0), (5, 0)]
        );
    }

    #[test]
    fn test_vertical_upwards() {
        assert_eq!(trace((2, 3), (2, 0)), vec![(2, 3), (2, 2), (2, 1), (2, 0)]);
    }

    #[test]
    fn test_single_cell() {
        assert_eq!(trace((4, 4), (4, 4)), vec![(4, 4)]);
    }

    #[test]
    fn test_shallow_slope() {
        assert_eq!(
            trace((0, 0), (4, 2)),
            vec![(0, 0), (1, 0), (2, 1), (3, 1), (4, 2)]
        );
    }

    #[test]
    fn test_direction_matters() {
        // the reverse trace is not the mirror image of the forward one
        assert_eq!(
            trace((4, 2), (0, 0)),
            vec![(4, 2), (3, 2), (2, 1), (1, 1), (0, 0)]
        );
    }

    #[test]
    fn test_diagonal() {
        assert_eq!(
            trace((8, 5), (5, 8)),
            vec![(8, 5), (7, 6), (6, 7), (5, 8)]
        );
    }

    #[test]
    fn test_fused() {
        let mut cells = LineCells::new((0, 0), (1, 0));
        assert_eq!(cells.next(), Some((0, 0)));
        assert_eq!(cells.next(), Some((1, 0)));
        assert_eq!(cells.next(), None);
        assert_eq!(cells.next(), None);
    }
}
