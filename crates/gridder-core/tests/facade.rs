// File: crates/gridder-core/tests/facade.rs
// Purpose: Geometry the gridder hands to its canvas, paint order, and rejected calls.

mod common;

use common::{Op, RecordingCanvas};
use gridder_core::{
    CircleConfig, FontFace, GridError, GridSpec, Gridder, ImageSpec, LineConfig, PathConfig,
    RectangleConfig, Rgba, StringConfig,
};

fn gridder(grid: GridSpec) -> Gridder<RecordingCanvas> {
    Gridder::with_canvas(ImageSpec::new(300, 300), grid, RecordingCanvas::default()).expect("valid specs")
}

fn ops_after_background(g: &Gridder<RecordingCanvas>) -> Vec<Op> {
    g.canvas().after_background().to_vec()
}

#[test]
fn construction_paints_background_with_margin_shift() {
    let grid = GridSpec::new(3, 3).with_margin(10).with_theme(&gridder_core::theme::GridTheme::dark());
    let g = Gridder::with_canvas(ImageSpec::new(320, 320), grid, RecordingCanvas::default()).unwrap();
    assert_eq!(
        g.canvas().ops,
        vec![Op::Translate(10.0, 10.0), Op::SetColor(Rgba::rgb(18, 18, 20)), Op::Clear]
    );
}

#[test]
fn construction_errors_surface_before_any_drawing() {
    let err = Gridder::with_canvas(ImageSpec::new(300, 300), GridSpec::new(0, 3), RecordingCanvas::default());
    assert!(matches!(err, Err(GridError::MissingRows)));
    let err = Gridder::with_canvas(ImageSpec::new(300, 300), GridSpec::new(3, 0), RecordingCanvas::default());
    assert!(matches!(err, Err(GridError::MissingColumns)));
}

#[test]
fn rectangle_is_centered_rotated_and_scoped() {
    let mut g = gridder(GridSpec::new(3, 3));
    let cfg = RectangleConfig {
        width: 40.0,
        height: 20.0,
        color: Rgba::rgb(200, 0, 0),
        stroke: true,
        stroke_width: 3.0,
        rotate: 90.0,
        dashes: 4.0,
    };
    g.draw_rectangle(1, 1, &cfg).unwrap();
    assert_eq!(
        ops_after_background(&g),
        vec![
            Op::Push,
            Op::SetDash(vec![4.0]),
            Op::RotateAbout(std::f64::consts::FRAC_PI_2, 150.0, 150.0),
            Op::Rectangle(130.0, 140.0, 40.0, 20.0),
            Op::SetLineWidth(3.0),
            Op::SetColor(Rgba::rgb(200, 0, 0)),
            Op::Stroke,
            Op::Pop,
        ]
    );
}

#[test]
fn default_rectangle_is_solid_black_fill() {
    let mut g = gridder(GridSpec::new(3, 3));
    g.draw_rectangle(0, 0, &RectangleConfig::default()).unwrap();
    let ops = ops_after_background(&g);
    assert!(ops.contains(&Op::SetDash(vec![])));
    assert!(ops.contains(&Op::RotateAbout(0.0, 50.0, 50.0)));
    assert!(ops.contains(&Op::Rectangle(45.0, 45.0, 10.0, 10.0)));
    assert!(ops.contains(&Op::SetColor(Rgba::BLACK)));
    assert!(ops.contains(&Op::Fill));
    assert!(!ops.contains(&Op::Stroke));
}

#[test]
fn paint_cell_leaves_room_for_grid_lines() {
    let mut g = gridder(GridSpec::new(3, 3).with_line_style(Rgba::BLACK, 4.0, 0.0));
    g.paint_cell(2, 0, Rgba::rgb(0, 128, 0)).unwrap();
    let ops = ops_after_background(&g);
    assert!(ops.contains(&Op::Rectangle(2.0, 202.0, 96.0, 96.0)));
    assert!(ops.contains(&Op::SetColor(Rgba::rgb(0, 128, 0))));
    assert!(ops.contains(&Op::Fill));
}

#[test]
fn circle_sits_on_cell_center() {
    let mut g = gridder(GridSpec::new(3, 3));
    let cfg = CircleConfig { radius: 12.0, stroke: true, ..CircleConfig::default() };
    g.draw_circle(2, 2, &cfg).unwrap();
    let ops = ops_after_background(&g);
    assert!(ops.contains(&Op::Point(250.0, 250.0, 12.0)));
    assert!(ops.contains(&Op::Stroke));
    assert_eq!(g.canvas().depth(), 0);
}

#[test]
fn path_joins_two_centers() {
    let mut g = gridder(GridSpec::new(3, 3));
    let cfg = PathConfig { color: Rgba::rgb(0, 0, 255), stroke_width: 2.0, dashes: 0.0 };
    g.draw_path(0, 0, 2, 1, &cfg).unwrap();
    assert_eq!(
        ops_after_background(&g),
        vec![
            Op::Push,
            Op::SetDash(vec![]),
            Op::SetColor(Rgba::rgb(0, 0, 255)),
            Op::SetLineWidth(2.0),
            Op::Line(50.0, 50.0, 150.0, 250.0),
            Op::Stroke,
            Op::Pop,
        ]
    );
}

#[test]
fn path_checks_both_endpoints() {
    let mut g = gridder(GridSpec::new(3, 3));
    let before = g.canvas().ops.len();
    assert!(g.draw_path(0, 0, 3, 0, &PathConfig::default()).is_err());
    assert!(g.draw_path(0, 7, 1, 1, &PathConfig::default()).is_err());
    assert_eq!(g.canvas().ops.len(), before);
}

#[test]
fn line_is_horizontal_through_center_before_rotation() {
    let mut g = gridder(GridSpec::new(3, 3));
    let cfg = LineConfig { length: 60.0, rotate: 45.0, ..LineConfig::default() };
    g.draw_line(0, 1, &cfg).unwrap();
    let ops = ops_after_background(&g);
    assert!(ops.contains(&Op::RotateAbout(std::f64::consts::FRAC_PI_4, 150.0, 50.0)));
    assert!(ops.contains(&Op::Line(120.0, 50.0, 180.0, 50.0)));
    assert!(ops.contains(&Op::Stroke));
}

#[test]
fn string_is_anchored_below_center() {
    let mut g = gridder(GridSpec::new(3, 3));
    let face = FontFace::mono(24.0);
    g.draw_string(1, 2, "X", &face, &StringConfig::default()).unwrap();
    let ops = ops_after_background(&g);
    assert!(ops.contains(&Op::SetFontFace(face)));
    assert!(ops.contains(&Op::Text("X".to_string(), 250.0, 150.0, 0.5, 0.35)));
    assert_eq!(g.canvas().depth(), 0);
}

#[test]
fn rejected_draw_leaves_canvas_untouched() {
    let mut g = gridder(GridSpec::new(3, 3));
    let before = g.canvas().ops.clone();
    let err = g.draw_rectangle(5, 0, &RectangleConfig::default()).unwrap_err();
    assert!(matches!(err, GridError::OutOfBounds { row: 5, column: 0 }));
    assert!(g.paint_cell(0, 3, Rgba::WHITE).is_err());
    assert!(g.draw_circle(3, 3, &CircleConfig::default()).is_err());
    assert!(g.draw_line(9, 0, &LineConfig::default()).is_err());
    assert!(g.draw_string(0, 9, "x", &FontFace::default(), &StringConfig::default()).is_err());
    assert_eq!(g.canvas().ops, before);
}

#[test]
fn illegal_offset_rejects_every_cell() {
    let mut g = gridder(GridSpec::new(3, 3).with_column_offset(0, 400.0));
    let before = g.canvas().ops.len();
    assert!(g.draw_circle(0, 0, &CircleConfig::default()).is_err());
    assert_eq!(g.canvas().ops.len(), before);
}

#[test]
fn save_paints_grid_then_border_then_encodes() {
    let grid = GridSpec::new(2, 3)
        .with_line_style(Rgba::rgb(1, 1, 1), 2.0, 5.0)
        .with_border_style(Rgba::rgb(9, 9, 9), 6.0, 0.0);
    let mut g = Gridder::with_canvas(ImageSpec::new(300, 200), grid, RecordingCanvas::default()).unwrap();
    let bytes = g.to_png_bytes().unwrap();
    assert_eq!(bytes, b"recorded");

    let ops = ops_after_background(&g);
    let grid_pass = vec![
        Op::Push,
        Op::MoveTo(100.0, 0.0),
        Op::LineTo(100.0, 200.0),
        Op::MoveTo(200.0, 0.0),
        Op::LineTo(200.0, 200.0),
        Op::MoveTo(300.0, 0.0),
        Op::LineTo(300.0, 200.0),
        Op::MoveTo(0.0, 100.0),
        Op::LineTo(300.0, 100.0),
        Op::MoveTo(0.0, 200.0),
        Op::LineTo(300.0, 200.0),
        Op::SetDash(vec![5.0]),
        Op::SetColor(Rgba::rgb(1, 1, 1)),
        Op::SetLineWidth(2.0),
        Op::Stroke,
        Op::Pop,
    ];
    assert_eq!(&ops[..grid_pass.len()], grid_pass.as_slice());

    let border_pass = &ops[grid_pass.len()..];
    assert_eq!(border_pass.first(), Some(&Op::Push));
    assert!(border_pass.contains(&Op::SetLineWidth(6.0)));
    assert!(border_pass.contains(&Op::SetColor(Rgba::rgb(9, 9, 9))));
    assert_eq!(border_pass.iter().filter(|op| matches!(op, Op::MoveTo(..))).count(), 4);
    assert_eq!(&border_pass[border_pass.len() - 3..], &[Op::Stroke, Op::Pop, Op::Encode]);
}

#[test]
fn grid_lines_follow_offset_columns() {
    let grid = GridSpec::new(1, 2).with_column_offset(0, 20.0);
    let mut g = Gridder::with_canvas(ImageSpec::new(200, 100), grid, RecordingCanvas::default()).unwrap();
    g.to_png_bytes().unwrap();
    let ops = ops_after_background(&g);
    assert!(ops.contains(&Op::MoveTo(110.0, 0.0)));
    assert!(ops.contains(&Op::LineTo(110.0, 100.0)));
}

#[test]
fn save_writes_to_image_name() {
    let dir = std::path::PathBuf::from("target/test_out");
    let path = dir.join("recorded_save.bin");
    let image = ImageSpec::new(100, 100).with_name(path.to_string_lossy());
    let mut g = Gridder::with_canvas(image, GridSpec::new(1, 1), RecordingCanvas::default()).unwrap();
    g.save().unwrap();
    assert_eq!(std::fs::read(&path).unwrap(), b"recorded");
}
