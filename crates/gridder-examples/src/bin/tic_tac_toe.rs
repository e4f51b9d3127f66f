// File: crates/gridder-examples/src/bin/tic_tac_toe.rs
// Summary: Renders a finished tic-tac-toe game: X marks as crossed lines, O marks as rings.

use anyhow::Result;
use gridder_core::{CircleConfig, FontFace, GridSpec, Gridder, ImageSpec, LineConfig, PathConfig, Rgba, StringConfig};

const BOARD: [&str; 3] = ["XO.", ".XO", "O.X"];

fn main() -> Result<()> {
    let image = ImageSpec::new(360, 400).with_name("target/out/example_tic_tac_toe.png");
    // Shorter first row holds the caption.
    let grid = GridSpec::new(4, 3)
        .with_row_offset(0, -40.0)
        .with_margin(10)
        .with_line_style(Rgba::rgb(120, 120, 120), 4.0, 0.0)
        .with_border_style(Rgba::TRANSPARENT, 0.0, 0.0);
    let mut gridder = Gridder::new(image, grid)?;

    let stroke = LineConfig { length: 70.0, stroke_width: 8.0, color: Rgba::rgb(220, 80, 80), ..LineConfig::default() };
    let ring = CircleConfig { radius: 30.0, stroke: true, stroke_width: 8.0, color: Rgba::rgb(40, 120, 220), ..CircleConfig::default() };

    for (r, line) in BOARD.iter().enumerate() {
        for (column, mark) in line.chars().enumerate() {
            let row = r + 1;
            match mark {
                'X' => {
                    gridder.draw_line(row, column, &LineConfig { rotate: 45.0, ..stroke })?;
                    gridder.draw_line(row, column, &LineConfig { rotate: -45.0, ..stroke })?;
                }
                'O' => gridder.draw_circle(row, column, &ring)?,
                _ => {}
            }
        }
    }
    gridder.draw_path(1, 0, 3, 2, &PathConfig { color: Rgba::BLACK.with_alpha(160), stroke_width: 4.0, dashes: 10.0 })?;
    gridder.draw_string(0, 1, "X wins", &FontFace::sans(28.0), &StringConfig::default())?;

    gridder.save()?;
    println!("Wrote {}", gridder.image_spec().name);
    Ok(())
}
