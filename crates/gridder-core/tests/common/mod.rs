// File: crates/gridder-core/tests/common/mod.rs
// Purpose: Canvas double that records every call, for asserting emitted geometry.

#![allow(dead_code)]

use std::io::Write;

use gridder_core::{Canvas, FontFace, Rgba};

#[derive(Clone, Debug, PartialEq)]
pub enum Op {
    Translate(f64, f64),
    Clear,
    SetColor(Rgba),
    SetLineWidth(f64),
    SetDash(Vec<f64>),
    SetFontFace(FontFace),
    MoveTo(f64, f64),
    LineTo(f64, f64),
    Line(f64, f64, f64, f64),
    Rectangle(f64, f64, f64, f64),
    Point(f64, f64, f64),
    Text(String, f64, f64, f64, f64),
    RotateAbout(f64, f64, f64),
    Push,
    Pop,
    Stroke,
    Fill,
    Encode,
}

#[derive(Default)]
pub struct RecordingCanvas {
    pub ops: Vec<Op>,
}

impl RecordingCanvas {
    /// Net push/pop depth; 0 when every push was matched.
    pub fn depth(&self) -> i64 {
        self.ops.iter().fold(0, |d, op| match op {
            Op::Push => d + 1,
            Op::Pop => d - 1,
            _ => d,
        })
    }

    /// Ops recorded after the background pass run at construction.
    pub fn after_background(&self) -> &[Op] {
        let start = self.ops.iter().position(|op| *op == Op::Clear).map_or(0, |i| i + 1);
        &self.ops[start..]
    }
}

impl Canvas for RecordingCanvas {
    fn translate(&mut self, dx: f64, dy: f64) { self.ops.push(Op::Translate(dx, dy)); }
    fn clear(&mut self) { self.ops.push(Op::Clear); }
    fn set_color(&mut self, color: Rgba) { self.ops.push(Op::SetColor(color)); }
    fn set_line_width(&mut self, width: f64) { self.ops.push(Op::SetLineWidth(width)); }
    fn set_dash(&mut self, dashes: &[f64]) { self.ops.push(Op::SetDash(dashes.to_vec())); }
    fn set_font_face(&mut self, face: &FontFace) { self.ops.push(Op::SetFontFace(face.clone())); }
    fn move_to(&mut self, x: f64, y: f64) { self.ops.push(Op::MoveTo(x, y)); }
    fn line_to(&mut self, x: f64, y: f64) { self.ops.push(Op::LineTo(x, y)); }
    fn draw_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) { self.ops.push(Op::Line(x1, y1, x2, y2)); }
    fn draw_rectangle(&mut self, x: f64, y: f64, w: f64, h: f64) { self.ops.push(Op::Rectangle(x, y, w, h)); }
    fn draw_point(&mut self, x: f64, y: f64, r: f64) { self.ops.push(Op::Point(x, y, r)); }
    fn draw_string_anchored(&mut self, text: &str, x: f64, y: f64, ax: f64, ay: f64) {
        self.ops.push(Op::Text(text.to_string(), x, y, ax, ay));
    }
    fn rotate_about(&mut self, angle: f64, x: f64, y: f64) { self.ops.push(Op::RotateAbout(angle, x, y)); }
    fn push(&mut self) { self.ops.push(Op::Push); }
    fn pop(&mut self) { self.ops.push(Op::Pop); }
    fn stroke(&mut self) { self.ops.push(Op::Stroke); }
    fn fill(&mut self) { self.ops.push(Op::Fill); }
    fn encode_png(&mut self, sink: &mut dyn Write) -> gridder_core::Result<()> {
        self.ops.push(Op::Encode);
        sink.write_all(b"recorded")?;
        Ok(())
    }
}
