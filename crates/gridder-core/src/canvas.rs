// File: crates/gridder-core/src/canvas.rs
// Summary: Drawing-surface contract consumed by the gridder, plus a scoped state guard.
// Notes:
// - The model is a current-path surface: `move_to`/`line_to`/`draw_*` append to a
//   path, `stroke`/`fill` paint it with the current state and then discard it.
// - Drawing state (color, line width, dash, transform, font) is saved by `push`
//   and restored by `pop`. Prefer `scoped()` which pops on drop.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::ops::{Deref, DerefMut};
use std::path::Path;

use crate::error::Result;
use crate::text::FontFace;
use crate::types::Rgba;

pub trait Canvas {
    /// Shift the origin of every later coordinate by `(dx, dy)`.
    fn translate(&mut self, dx: f64, dy: f64);
    /// Fill the whole surface with the current color, ignoring the transform.
    fn clear(&mut self);
    fn set_color(&mut self, color: Rgba);
    fn set_line_width(&mut self, width: f64);
    /// Alternating on/off lengths; an empty slice means solid.
    fn set_dash(&mut self, dashes: &[f64]);
    fn set_font_face(&mut self, face: &FontFace);

    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    fn draw_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64);
    fn draw_rectangle(&mut self, x: f64, y: f64, width: f64, height: f64);
    /// Circle of `radius` at `(x, y)`; the radius is not affected by the transform.
    fn draw_point(&mut self, x: f64, y: f64, radius: f64);
    /// Draw `text` so that the fraction `(anchor_x, anchor_y)` of its extent lands on `(x, y)`.
    fn draw_string_anchored(&mut self, text: &str, x: f64, y: f64, anchor_x: f64, anchor_y: f64);
    /// Rotate later drawing by `angle` radians about `(x, y)`.
    fn rotate_about(&mut self, angle: f64, x: f64, y: f64);

    fn push(&mut self);
    fn pop(&mut self);
    fn stroke(&mut self);
    fn fill(&mut self);

    fn encode_png(&mut self, sink: &mut dyn Write) -> Result<()>;

    /// Encode to `path`, creating parent directories as needed.
    fn save_png(&mut self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let mut file = BufWriter::new(File::create(path)?);
        self.encode_png(&mut file)?;
        file.flush()?;
        Ok(())
    }

    /// Single dash length as used by the shape configs: `> 0` dashes, anything else is solid.
    fn set_dash_length(&mut self, dashes: f64) {
        if dashes > 0.0 {
            self.set_dash(&[dashes]);
        } else {
            self.set_dash(&[]);
        }
    }

    /// Save the drawing state; it is restored when the guard drops.
    fn scoped(&mut self) -> StateGuard<'_, Self>
    where
        Self: Sized,
    {
        StateGuard::new(self)
    }
}

/// Holds a pushed drawing state and pops it on drop, on every exit path.
pub struct StateGuard<'a, C: Canvas + ?Sized> {
    canvas: &'a mut C,
}

impl<'a, C: Canvas + ?Sized> StateGuard<'a, C> {
    pub fn new(canvas: &'a mut C) -> Self {
        canvas.push();
        Self { canvas }
    }
}

impl<C: Canvas + ?Sized> Deref for StateGuard<'_, C> {
    type Target = C;

    fn deref(&self) -> &C {
        self.canvas
    }
}

impl<C: Canvas + ?Sized> DerefMut for StateGuard<'_, C> {
    fn deref_mut(&mut self) -> &mut C {
        self.canvas
    }
}

impl<C: Canvas + ?Sized> Drop for StateGuard<'_, C> {
    fn drop(&mut self) {
        self.canvas.pop();
    }
}
