//! Integration tests for the rasterization canvas.

use gridpaint::canvas::{Canvas, Drawable, NGon, Polygon, Rectangle};
use gridpaint::errors::{GridpaintError, Result};
use rstest::rstest;

fn painted(canvas: &Canvas) -> Vec<(i32, i32)> {
    let mut cells = Vec::new();
    for y in 0..canvas.height() as i32 {
        for x in 0..canvas.width() as i32 {
            if canvas.cell(x, y) != Some(' ') {
                cells.push((x, y));
            }
        }
    }
    cells
}

// ==================== Lines ====================

#[test]
fn test_horizontal_line_render() -> Result<()> {
    let mut canvas = Canvas::new(10, 1)?;
    canvas.draw_line((0, 0), (5, 0), '#')?;

    assert_eq!(canvas.render(), " 0123456789\n0######    0\n 0123456789\n");
    Ok(())
}

#[test]
fn test_line_segment_matches_line() -> Result<()> {
    let mut a = Canvas::new(20, 10)?;
    let mut b = Canvas::new(20, 10)?;
    a.draw_line_segment((2, 9), (17, 1), '*')?;
    b.draw_line((2, 9), (17, 1), '*')?;

    assert_eq!(a, b);
    assert_eq!(a.cell(2, 9), Some('*'));
    assert_eq!(a.cell(17, 1), Some('*'));
    Ok(())
}

#[test]
fn test_shallow_line_cells() -> Result<()> {
    let mut canvas = Canvas::new(5, 3)?;
    canvas.draw_line((0, 0), (4, 2), '*')?;

    assert_eq!(painted(&canvas), vec![(0, 0), (1, 0), (2, 1), (3, 1), (4, 2)]);
    Ok(())
}

#[test]
fn test_single_cell_line() -> Result<()> {
    let mut canvas = Canvas::new(3, 3)?;
    canvas.draw_line((1, 1), (1, 1), 'o')?;

    assert_eq!(painted(&canvas), vec![(1, 1)]);
    Ok(())
}

#[test]
fn test_painting_twice_is_idempotent() -> Result<()> {
    let mut once = Canvas::new(12, 8)?;
    once.draw_line((1, 1), (10, 6), '+')?;

    let mut twice = once.clone();
    twice.draw_line((1, 1), (10, 6), '+')?;

    assert_eq!(once, twice);
    Ok(())
}

#[test]
fn test_later_paint_overwrites() -> Result<()> {
    let mut canvas = Canvas::new(6, 1)?;
    canvas.draw_line((0, 0), (5, 0), '-')?;
    canvas.draw_line((2, 0), (3, 0), '=')?;

    assert_eq!(canvas.row(0).as_deref(), Some("--==--"));
    Ok(())
}

// ==================== Polygons ====================

#[test]
fn test_closed_square() -> Result<()> {
    let mut canvas = Canvas::new(4, 4)?;
    canvas.draw_polygon(&[(0, 0), (0, 3), (3, 3), (3, 0)], true, '*')?;

    assert_eq!(
        canvas.render(),
        " 0123\n0****0\n1*  *1\n2*  *2\n3****3\n 0123\n"
    );
    Ok(())
}

#[test]
fn test_open_square_omits_closing_segment() -> Result<()> {
    let mut canvas = Canvas::new(4, 4)?;
    canvas.draw_polygon(&[(0, 0), (0, 3), (3, 3), (3, 0)], false, '*')?;

    assert_eq!(
        canvas.render(),
        " 0123\n0*  *0\n1*  *1\n2*  *2\n3****3\n 0123\n"
    );
    Ok(())
}

#[rstest]
#[case::no_points(&[])]
#[case::one_point(&[(2, 2)])]
fn test_degenerate_polygon_is_noop(#[case] points: &[(i32, i32)]) -> Result<()> {
    let mut canvas = Canvas::new(5, 5)?;
    canvas.draw_polygon(points, true, '*')?;
    canvas.draw_polygon(points, false, '*')?;

    assert_eq!(canvas.painted_cells(), 0);
    Ok(())
}

#[test]
fn test_draw_accepts_any_drawable() -> Result<()> {
    let figures: Vec<Box<dyn Drawable>> = vec![
        Box::new(Polygon::open(vec![(0, 0), (4, 0)])),
        Box::new(Rectangle::new((0, 1), (4, 3))),
    ];

    let mut canvas = Canvas::new(5, 4)?;
    for figure in &figures {
        canvas.draw(figure.as_ref(), '#')?;
    }

    assert_eq!(canvas.row(0).as_deref(), Some("#####"));
    assert_eq!(canvas.row(2).as_deref(), Some("#   #"));
    Ok(())
}

// ==================== Rectangles ====================

#[test]
fn test_rectangle_matches_closed_polygon() -> Result<()> {
    let mut rect = Canvas::new(6, 6)?;
    rect.draw_rectangle((0, 0), (3, 3), '*')?;

    let mut poly = Canvas::new(6, 6)?;
    poly.draw_polygon(&[(0, 0), (3, 0), (3, 3), (0, 3)], true, '*')?;

    assert_eq!(rect, poly);
    assert_eq!(rect.painted_cells(), 12);
    Ok(())
}

#[test]
fn test_rectangle_with_swapped_corners() -> Result<()> {
    // lower-right given first still traces the same outline
    let mut a = Canvas::new(8, 5)?;
    a.draw_rectangle((1, 1), (6, 4), '#')?;
    let mut b = Canvas::new(8, 5)?;
    b.draw_rectangle((6, 4), (1, 1), '#')?;

    assert_eq!(a, b);
    Ok(())
}

// ==================== N-gons ====================

#[test]
fn test_square_n_gon() -> Result<()> {
    let mut canvas = Canvas::new(11, 11)?;
    canvas.draw_n_gon((5, 5), 3, 4, 0, '*')?;

    let mut expected = vec![
        (8, 5), (7, 6), (6, 7), (5, 8),
        (4, 7), (3, 6), (2, 5),
        (3, 4), (4, 3), (5, 2),
        (6, 3), (7, 4),
    ];
    expected.sort_by_key(|&(x, y)| (y, x));

    assert_eq!(painted(&canvas), expected);
    Ok(())
}

#[test]
fn test_n_gon_matches_polygon_of_vertices() -> Result<()> {
    let ngon = NGon::new((20, 12), 9, 7).with_rotation(15);
    let vertices = ngon.vertices()?;
    assert_eq!(vertices.len(), 8);

    let mut a = Canvas::new(40, 25)?;
    a.draw_n_gon((20, 12), 9, 7, 15, '@')?;
    let mut b = Canvas::new(40, 25)?;
    b.draw_polygon(&vertices, true, '@')?;

    assert_eq!(a, b);
    Ok(())
}

#[test]
fn test_n_gon_without_points_fails() -> Result<()> {
    let mut canvas = Canvas::new(10, 10)?;
    let err = canvas.draw_n_gon((5, 5), 3, 0, 0, '*').unwrap_err();

    assert!(matches!(err, GridpaintError::InvalidArgument { .. }));
    assert_eq!(canvas.painted_cells(), 0);
    Ok(())
}

// ==================== Bounds ====================

#[rstest]
#[case::past_right_edge((0, 0), (10, 0), (10, 0))]
#[case::below_bottom((3, 0), (3, 5), (3, 5))]
#[case::negative_start((-2, 2), (4, 2), (-2, 2))]
fn test_out_of_bounds_line(
    #[case] start: (i32, i32),
    #[case] end: (i32, i32),
    #[case] first_bad: (i32, i32),
) -> Result<()> {
    let mut canvas = Canvas::new(10, 5)?;
    let err = canvas.draw_line(start, end, '*').unwrap_err();

    match err {
        GridpaintError::OutOfBounds { x, y, width, height } => {
            assert_eq!((x, y), first_bad);
            assert_eq!((width, height), (10, 5));
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(canvas.painted_cells(), 0);
    Ok(())
}

#[test]
fn test_n_gon_partly_off_canvas_paints_nothing() -> Result<()> {
    let mut canvas = Canvas::new(10, 10)?;
    assert!(canvas.draw_n_gon((2, 5), 4, 6, 0, '*').is_err());
    assert_eq!(canvas.painted_cells(), 0);
    Ok(())
}
