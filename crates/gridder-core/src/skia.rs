// File: crates/gridder-core/src/skia.rs
// Summary: Canvas implementation on a Skia CPU raster surface, PNG output via the `image` encoder.
// Notes:
// - Path points are mapped through the current transform when they are added,
//   so strokes are painted in device space and line widths ignore rotation.
// - The Skia canvas matrix stays identity except while a string is painted.

use std::io::Write;

use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};
use skia_safe as skia;

use crate::canvas::Canvas;
use crate::error::{GridError, Result};
use crate::text::{FontFace, TextShaper};
use crate::types::Rgba;

#[derive(Clone)]
struct DrawState {
    color: Rgba,
    line_width: f64,
    dashes: Vec<f64>,
    matrix: skia::Matrix,
    font: FontFace,
}

impl Default for DrawState {
    fn default() -> Self {
        Self {
            color: Rgba::BLACK,
            line_width: 1.0,
            dashes: Vec::new(),
            matrix: skia::Matrix::new_identity(),
            font: FontFace::default(),
        }
    }
}

pub struct SkiaCanvas {
    surface: skia::Surface,
    width: u32,
    height: u32,
    path: skia::PathBuilder,
    state: DrawState,
    stack: Vec<DrawState>,
    shaper: TextShaper,
}

impl SkiaCanvas {
    /// Allocate a transparent `width` x `height` raster surface.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let surface_err = || GridError::Surface { width, height };
        let w = i32::try_from(width).map_err(|_| surface_err())?;
        let h = i32::try_from(height).map_err(|_| surface_err())?;
        let surface = skia::surfaces::raster_n32_premul((w, h)).ok_or_else(surface_err)?;
        Ok(Self {
            surface,
            width,
            height,
            path: skia::PathBuilder::new(),
            state: DrawState::default(),
            stack: Vec::new(),
            shaper: TextShaper::new(),
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Straight RGBA8 pixels, row-major, `width * 4` bytes per row.
    pub fn to_rgba8(&mut self) -> Result<Vec<u8>> {
        let info = skia::ImageInfo::new(
            (self.width as i32, self.height as i32),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let row_bytes = self.width as usize * 4;
        let mut pixels = vec![0u8; row_bytes * self.height as usize];
        if !self.surface.read_pixels(&info, &mut pixels, row_bytes, (0, 0)) {
            return Err(GridError::ReadPixels);
        }
        Ok(pixels)
    }

    fn map(&self, x: f64, y: f64) -> skia::Point {
        self.state.matrix.map_point((x as f32, y as f32))
    }

    fn paint(&self, style: skia::paint::Style) -> skia::Paint {
        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        paint.set_style(style);
        paint.set_color(to_skia(self.state.color));
        paint.set_stroke_width(self.state.line_width as f32);
        if style == skia::paint::Style::Stroke && !self.state.dashes.is_empty() {
            let mut intervals: Vec<f32> = self.state.dashes.iter().map(|&d| d as f32).collect();
            // Skia wants on/off pairs; an odd pattern repeats once.
            if intervals.len() % 2 == 1 {
                intervals.extend_from_within(..);
            }
            paint.set_path_effect(skia::PathEffect::dash(&intervals, 0.0));
        }
        paint
    }

    fn paint_path(&mut self, style: skia::paint::Style) {
        let paint = self.paint(style);
        let path = self.path.detach();
        self.surface.canvas().draw_path(&path, &paint);
    }
}

impl Canvas for SkiaCanvas {
    fn translate(&mut self, dx: f64, dy: f64) {
        self.state.matrix.pre_translate((dx as f32, dy as f32));
    }

    fn clear(&mut self) {
        let color = to_skia(self.state.color);
        self.surface.canvas().clear(color);
    }

    fn set_color(&mut self, color: Rgba) {
        self.state.color = color;
    }

    fn set_line_width(&mut self, width: f64) {
        self.state.line_width = width;
    }

    fn set_dash(&mut self, dashes: &[f64]) {
        self.state.dashes = dashes.to_vec();
    }

    fn set_font_face(&mut self, face: &FontFace) {
        self.state.font = face.clone();
    }

    fn move_to(&mut self, x: f64, y: f64) {
        let p = self.map(x, y);
        self.path.move_to(p);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        let p = self.map(x, y);
        self.path.line_to(p);
    }

    fn draw_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) {
        self.move_to(x1, y1);
        self.line_to(x2, y2);
    }

    fn draw_rectangle(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.move_to(x, y);
        self.line_to(x + width, y);
        self.line_to(x + width, y + height);
        self.line_to(x, y + height);
        self.path.close();
    }

    fn draw_point(&mut self, x: f64, y: f64, radius: f64) {
        let center = self.map(x, y);
        self.path.add_circle(center, radius as f32, None);
    }

    fn draw_string_anchored(&mut self, text: &str, x: f64, y: f64, anchor_x: f64, anchor_y: f64) {
        let color = to_skia(self.state.color);
        let canvas = self.surface.canvas();
        canvas.save();
        canvas.concat(&self.state.matrix);
        self.shaper.draw_anchored(
            canvas,
            text,
            &self.state.font,
            color,
            x as f32,
            y as f32,
            anchor_x as f32,
            anchor_y as f32,
        );
        canvas.restore();
    }

    fn rotate_about(&mut self, angle: f64, x: f64, y: f64) {
        let pivot = skia::Point::new(x as f32, y as f32);
        self.state.matrix.pre_rotate(angle.to_degrees() as f32, pivot);
    }

    fn push(&mut self) {
        self.stack.push(self.state.clone());
    }

    fn pop(&mut self) {
        match self.stack.pop() {
            Some(state) => self.state = state,
            None => tracing::warn!("pop without matching push ignored"),
        }
    }

    fn stroke(&mut self) {
        self.paint_path(skia::paint::Style::Stroke);
    }

    fn fill(&mut self) {
        self.paint_path(skia::paint::Style::Fill);
    }

    fn encode_png(&mut self, sink: &mut dyn Write) -> Result<()> {
        let pixels = self.to_rgba8()?;
        // Encode in memory so sink failures surface as the sink's own io::Error.
        let mut png = Vec::new();
        PngEncoder::new(&mut png).write_image(&pixels, self.width, self.height, ExtendedColorType::Rgba8)?;
        sink.write_all(&png)?;
        Ok(())
    }
}

fn to_skia(color: Rgba) -> skia::Color {
    skia::Color::from_argb(color.a, color.r, color.g, color.b)
}
