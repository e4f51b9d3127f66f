// File: crates/gridder-core/src/gridder.rs
// Summary: Drawing facade; anchors shapes to grid cells and owns the paint sequence.
// Notes:
// - Paint order is background (at construction), user shapes, grid lines, border (at save).
// - Every public draw call verifies bounds before touching the canvas, so a
//   rejected call leaves the canvas exactly as it was.

use std::io::Write;
use std::path::Path;

use crate::canvas::Canvas;
use crate::error::Result;
use crate::geometry::Rect;
use crate::layout::LayoutEngine;
use crate::shapes::{CircleConfig, LineConfig, PathConfig, RectangleConfig, StringConfig};
use crate::skia::SkiaCanvas;
use crate::text::FontFace;
use crate::types::{GridSpec, ImageSpec, Rgba};

/// Anchor fractions for cell text: horizontally centered, baseline slightly
/// below center so typical glyphs look vertically centered.
const TEXT_ANCHOR: (f64, f64) = (0.5, 0.35);

pub struct Gridder<C: Canvas = SkiaCanvas> {
    layout: LayoutEngine,
    canvas: C,
}

impl Gridder<SkiaCanvas> {
    /// Build a gridder rendering to a Skia raster surface of the image's size.
    pub fn new(image: ImageSpec, grid: GridSpec) -> Result<Self> {
        let layout = LayoutEngine::new(image, grid)?;
        let canvas = SkiaCanvas::new(layout.image().width, layout.image().height)?;
        Ok(Self::assemble(layout, canvas))
    }

    /// Straight RGBA8 pixels of everything painted so far (grid and border excluded
    /// until a save has run).
    pub fn to_rgba8(&mut self) -> Result<Vec<u8>> {
        self.canvas.to_rgba8()
    }
}

impl<C: Canvas> Gridder<C> {
    /// Build a gridder drawing onto a caller-supplied canvas, which should be
    /// sized to the image.
    pub fn with_canvas(image: ImageSpec, grid: GridSpec, canvas: C) -> Result<Self> {
        let layout = LayoutEngine::new(image, grid)?;
        Ok(Self::assemble(layout, canvas))
    }

    fn assemble(layout: LayoutEngine, canvas: C) -> Self {
        tracing::debug!(
            rows = layout.grid().rows,
            columns = layout.grid().columns,
            width = layout.image().width,
            height = layout.image().height,
            "gridder ready"
        );
        let mut gridder = Self { layout, canvas };
        gridder.paint_background();
        gridder
    }

    pub fn layout(&self) -> &LayoutEngine {
        &self.layout
    }

    pub fn image_spec(&self) -> &ImageSpec {
        self.layout.image()
    }

    pub fn grid_spec(&self) -> &GridSpec {
        self.layout.grid()
    }

    pub fn canvas(&self) -> &C {
        &self.canvas
    }

    pub fn into_canvas(self) -> C {
        self.canvas
    }

    /// Fill a cell, leaving room for the grid lines around it.
    pub fn paint_cell(&mut self, row: usize, column: usize, color: Rgba) -> Result<()> {
        self.verify(row, column)?;
        let (width, height) = self.layout.cell_dimensions(row, column);
        let inset = self.layout.grid().line_stroke_width;
        let cfg = RectangleConfig {
            width: width - inset,
            height: height - inset,
            color,
            ..RectangleConfig::default()
        };
        self.draw_rectangle(row, column, &cfg)
    }

    pub fn draw_rectangle(&mut self, row: usize, column: usize, cfg: &RectangleConfig) -> Result<()> {
        self.verify(row, column)?;
        let center = self.layout.cell_center(row, column);
        let rect = Rect::from_center(center, cfg.width, cfg.height);

        let mut canvas = self.canvas.scoped();
        canvas.set_dash_length(cfg.dashes);
        canvas.rotate_about(cfg.rotate.to_radians(), center.x, center.y);
        canvas.draw_rectangle(rect.left, rect.top, rect.width(), rect.height());
        canvas.set_line_width(cfg.stroke_width);
        canvas.set_color(cfg.color);
        if cfg.stroke {
            canvas.stroke();
        } else {
            canvas.fill();
        }
        Ok(())
    }

    pub fn draw_circle(&mut self, row: usize, column: usize, cfg: &CircleConfig) -> Result<()> {
        self.verify(row, column)?;
        let center = self.layout.cell_center(row, column);

        let mut canvas = self.canvas.scoped();
        canvas.set_dash_length(cfg.dashes);
        canvas.draw_point(center.x, center.y, cfg.radius);
        canvas.set_line_width(cfg.stroke_width);
        canvas.set_color(cfg.color);
        if cfg.stroke {
            canvas.stroke();
        } else {
            canvas.fill();
        }
        Ok(())
    }

    /// Stroke a straight line between the centers of two cells.
    pub fn draw_path(
        &mut self,
        row1: usize,
        column1: usize,
        row2: usize,
        column2: usize,
        cfg: &PathConfig,
    ) -> Result<()> {
        self.verify(row1, column1)?;
        self.verify(row2, column2)?;
        let from = self.layout.cell_center(row1, column1);
        let to = self.layout.cell_center(row2, column2);

        let mut canvas = self.canvas.scoped();
        canvas.set_dash_length(cfg.dashes);
        canvas.set_color(cfg.color);
        canvas.set_line_width(cfg.stroke_width);
        canvas.draw_line(from.x, from.y, to.x, to.y);
        canvas.stroke();
        Ok(())
    }

    /// Stroke a segment of `cfg.length` through the cell center, horizontal before rotation.
    pub fn draw_line(&mut self, row: usize, column: usize, cfg: &LineConfig) -> Result<()> {
        self.verify(row, column)?;
        let center = self.layout.cell_center(row, column);
        let half = cfg.length / 2.0;

        let mut canvas = self.canvas.scoped();
        canvas.set_dash_length(cfg.dashes);
        canvas.rotate_about(cfg.rotate.to_radians(), center.x, center.y);
        canvas.draw_line(center.x - half, center.y, center.x + half, center.y);
        canvas.set_line_width(cfg.stroke_width);
        canvas.set_color(cfg.color);
        canvas.stroke();
        Ok(())
    }

    pub fn draw_string(
        &mut self,
        row: usize,
        column: usize,
        text: &str,
        font_face: &FontFace,
        cfg: &StringConfig,
    ) -> Result<()> {
        self.verify(row, column)?;
        let center = self.layout.cell_center(row, column);
        let (anchor_x, anchor_y) = TEXT_ANCHOR;

        let mut canvas = self.canvas.scoped();
        canvas.set_font_face(font_face);
        canvas.set_color(cfg.color);
        canvas.rotate_about(cfg.rotate.to_radians(), center.x, center.y);
        canvas.draw_string_anchored(text, center.x, center.y, anchor_x, anchor_y);
        Ok(())
    }

    /// Paint grid lines and border, then write the PNG to `ImageSpec::name`.
    pub fn save(&mut self) -> Result<()> {
        let name = self.layout.image().name.clone();
        self.save_to(name)
    }

    /// Paint grid lines and border, then write the PNG to `path`.
    pub fn save_to(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        self.finish();
        self.canvas.save_png(path)?;
        tracing::debug!(path = %path.display(), "saved grid image");
        Ok(())
    }

    /// Paint grid lines and border, then encode the PNG into `sink`.
    pub fn encode_png<W: Write>(&mut self, mut sink: W) -> Result<()> {
        self.finish();
        self.canvas.encode_png(&mut sink)
    }

    /// Encode into an in-memory PNG.
    pub fn to_png_bytes(&mut self) -> Result<Vec<u8>> {
        let mut bytes = Vec::new();
        self.encode_png(&mut bytes)?;
        Ok(bytes)
    }

    fn verify(&self, row: usize, column: usize) -> Result<()> {
        self.layout
            .verify_bounds(row, column)
            .inspect_err(|err| tracing::warn!(%err, "draw call rejected"))
    }

    fn finish(&mut self) {
        self.paint_grid();
        self.paint_border();
    }

    fn paint_background(&mut self) {
        let grid = self.layout.grid();
        let margin = f64::from(grid.margin_width);
        // Not scoped: the origin shift applies to everything drawn afterwards.
        self.canvas.translate(margin, margin);
        self.canvas.set_color(grid.background_color);
        self.canvas.clear();
    }

    fn paint_grid(&mut self) {
        let (width, height) = self.layout.grid_dimensions();
        let grid = self.layout.grid();

        let mut canvas = self.canvas.scoped();
        for x in self.layout.column_boundaries() {
            canvas.move_to(x, 0.0);
            canvas.line_to(x, height);
        }
        for y in self.layout.row_boundaries() {
            canvas.move_to(0.0, y);
            canvas.line_to(width, y);
        }
        canvas.set_dash_length(grid.line_dashes);
        canvas.set_color(grid.line_color);
        canvas.set_line_width(grid.line_stroke_width);
        canvas.stroke();
    }

    fn paint_border(&mut self) {
        let (width, height) = self.layout.grid_dimensions();
        let grid = self.layout.grid();

        let mut canvas = self.canvas.scoped();
        canvas.move_to(0.0, 0.0);
        canvas.line_to(0.0, height);
        canvas.move_to(width, 0.0);
        canvas.line_to(width, height);
        canvas.move_to(0.0, 0.0);
        canvas.line_to(width, 0.0);
        canvas.move_to(0.0, height);
        canvas.line_to(width, height);
        canvas.set_dash_length(grid.border_dashes);
        canvas.set_line_width(grid.border_stroke_width);
        canvas.set_color(grid.border_color);
        canvas.stroke();
    }
}
