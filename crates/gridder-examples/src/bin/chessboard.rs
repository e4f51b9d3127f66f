// File: crates/gridder-examples/src/bin/chessboard.rs
// Summary: Minimal example that paints an 8x8 board with a knight's move to PNG.

use anyhow::Result;
use gridder_core::{CircleConfig, GridSpec, Gridder, ImageSpec, PathConfig, Rgba};

fn main() -> Result<()> {
    let image = ImageSpec::new(480, 480).with_name("target/out/example_chessboard.png");
    let grid = GridSpec::new(8, 8).with_border_style(Rgba::rgb(60, 40, 20), 6.0, 0.0);
    let mut gridder = Gridder::new(image, grid)?;

    for row in 0..8 {
        for column in 0..8 {
            if (row + column) % 2 == 1 {
                gridder.paint_cell(row, column, Rgba::rgb(181, 136, 99))?;
            } else {
                gridder.paint_cell(row, column, Rgba::rgb(240, 217, 181))?;
            }
        }
    }

    // Knight from g1 to f3.
    let marker = CircleConfig { radius: 10.0, color: Rgba::rgb(30, 120, 240), ..CircleConfig::default() };
    gridder.draw_circle(7, 6, &marker)?;
    gridder.draw_circle(5, 5, &CircleConfig { stroke: true, stroke_width: 3.0, ..marker })?;
    gridder.draw_path(7, 6, 5, 5, &PathConfig { color: marker.color, stroke_width: 2.0, dashes: 5.0 })?;

    gridder.save()?;
    println!("Wrote {}", gridder.image_spec().name);
    Ok(())
}
