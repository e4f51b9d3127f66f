// File: crates/gridder-core/src/types.rs
// Summary: Shared types and defaults (colors, image spec, grid spec).

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GridError;
use crate::theme::GridTheme;

/// Default image width in pixels.
pub const WIDTH: u32 = 500;
/// Default image height in pixels.
pub const HEIGHT: u32 = 500;
/// Default output file name.
pub const DEFAULT_NAME: &str = "image.png";

/// Straight (non-premultiplied) 8-bit RGBA color.
///
/// Serializes as `#rrggbb` when opaque and `#rrggbbaa` otherwise.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const BLACK: Rgba = Rgba::rgb(0, 0, 0);
    pub const WHITE: Rgba = Rgba::rgb(255, 255, 255);
    pub const TRANSPARENT: Rgba = Rgba::new(0, 0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Fully opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }
}

impl Default for Rgba {
    fn default() -> Self {
        Self::BLACK
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)?;
        if self.a != 255 {
            write!(f, "{:02x}", self.a)?;
        }
        Ok(())
    }
}

impl FromStr for Rgba {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || GridError::InvalidColor(s.to_string());
        let hex = s.trim().strip_prefix('#').ok_or_else(invalid)?;
        if !hex.is_ascii() || (hex.len() != 6 && hex.len() != 8) {
            return Err(invalid());
        }
        let channel = |i: usize| {
            hex.get(i..i + 2)
                .and_then(|pair| u8::from_str_radix(pair, 16).ok())
                .ok_or_else(invalid)
        };
        let a = if hex.len() == 8 { channel(6)? } else { 255 };
        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?, a))
    }
}

impl TryFrom<String> for Rgba {
    type Error = GridError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Rgba> for String {
    fn from(color: Rgba) -> Self {
        color.to_string()
    }
}

/// Output image: canvas size and the file name `save` writes to.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageSpec {
    pub width: u32,
    pub height: u32,
    pub name: String,
}

impl ImageSpec {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height, ..Self::default() }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}

impl Default for ImageSpec {
    fn default() -> Self {
        Self { width: WIDTH, height: HEIGHT, name: DEFAULT_NAME.to_string() }
    }
}

/// Grid declaration: cell counts, sparse per-row/per-column size deltas,
/// margin and line/border styling.
///
/// Contract: offsets must reference existing rows/columns and stay smaller in
/// magnitude than the grid's total size on their axis. This is checked on every
/// draw call by [`LayoutEngine::verify_bounds`](crate::LayoutEngine::verify_bounds).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridSpec {
    pub rows: usize,
    pub columns: usize,
    /// Column index -> width delta in pixels.
    pub column_offsets: BTreeMap<usize, f64>,
    /// Row index -> height delta in pixels.
    pub row_offsets: BTreeMap<usize, f64>,
    pub margin_width: u32,
    pub background_color: Rgba,
    pub line_color: Rgba,
    pub line_stroke_width: f64,
    pub line_dashes: f64,
    pub border_color: Rgba,
    pub border_stroke_width: f64,
    pub border_dashes: f64,
}

impl GridSpec {
    pub fn new(rows: usize, columns: usize) -> Self {
        Self { rows, columns, ..Self::default() }
    }

    pub fn with_column_offset(mut self, column: usize, delta: f64) -> Self {
        self.column_offsets.insert(column, delta);
        self
    }

    pub fn with_row_offset(mut self, row: usize, delta: f64) -> Self {
        self.row_offsets.insert(row, delta);
        self
    }

    pub fn with_margin(mut self, margin_width: u32) -> Self {
        self.margin_width = margin_width;
        self
    }

    pub fn with_line_style(mut self, color: Rgba, stroke_width: f64, dashes: f64) -> Self {
        self.line_color = color;
        self.line_stroke_width = stroke_width;
        self.line_dashes = dashes;
        self
    }

    pub fn with_border_style(mut self, color: Rgba, stroke_width: f64, dashes: f64) -> Self {
        self.border_color = color;
        self.border_stroke_width = stroke_width;
        self.border_dashes = dashes;
        self
    }

    /// Take background, line and border colors from a theme.
    pub fn with_theme(mut self, theme: &GridTheme) -> Self {
        self.background_color = theme.background;
        self.line_color = theme.line;
        self.border_color = theme.border;
        self
    }

    /// Width delta for `column`, 0 when none is declared.
    pub fn column_offset(&self, column: usize) -> f64 {
        self.column_offsets.get(&column).copied().unwrap_or(0.0)
    }

    /// Height delta for `row`, 0 when none is declared.
    pub fn row_offset(&self, row: usize) -> f64 {
        self.row_offsets.get(&row).copied().unwrap_or(0.0)
    }

    pub fn column_offset_sum(&self) -> f64 {
        self.column_offsets.values().sum()
    }

    pub fn row_offset_sum(&self) -> f64 {
        self.row_offsets.values().sum()
    }

    /// Grid width for an image of `image_width`: both margins removed.
    pub fn width(&self, image_width: u32) -> f64 {
        f64::from(image_width) - 2.0 * f64::from(self.margin_width)
    }

    /// Grid height for an image of `image_height`: both margins removed.
    pub fn height(&self, image_height: u32) -> f64 {
        f64::from(image_height) - 2.0 * f64::from(self.margin_width)
    }
}

impl Default for GridSpec {
    fn default() -> Self {
        Self {
            rows: 0,
            columns: 0,
            column_offsets: BTreeMap::new(),
            row_offsets: BTreeMap::new(),
            margin_width: 0,
            background_color: Rgba::WHITE,
            line_color: Rgba::BLACK,
            line_stroke_width: 1.0,
            line_dashes: 0.0,
            border_color: Rgba::BLACK,
            border_stroke_width: 1.0,
            border_dashes: 0.0,
        }
    }
}
