// File: crates/gridder-core/src/shapes.rs
// Summary: Per-shape drawing configs; `Default` is the config used when a caller has no preference.
// Notes:
// - Rotations are in degrees, clockwise, about the cell center.
// - A dash length of 0 (or less) draws solid strokes.

use serde::{Deserialize, Serialize};

use crate::types::Rgba;

pub const DEFAULT_RECTANGLE_SIZE: f64 = 10.0;
pub const DEFAULT_CIRCLE_RADIUS: f64 = 5.0;
pub const DEFAULT_LINE_LENGTH: f64 = 10.0;
pub const DEFAULT_STROKE_WIDTH: f64 = 1.0;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RectangleConfig {
    pub width: f64,
    pub height: f64,
    pub color: Rgba,
    /// Outline only instead of a filled body.
    pub stroke: bool,
    pub stroke_width: f64,
    pub rotate: f64,
    pub dashes: f64,
}

impl Default for RectangleConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_RECTANGLE_SIZE,
            height: DEFAULT_RECTANGLE_SIZE,
            color: Rgba::BLACK,
            stroke: false,
            stroke_width: DEFAULT_STROKE_WIDTH,
            rotate: 0.0,
            dashes: 0.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CircleConfig {
    pub radius: f64,
    pub color: Rgba,
    pub stroke: bool,
    pub stroke_width: f64,
    pub dashes: f64,
}

impl Default for CircleConfig {
    fn default() -> Self {
        Self {
            radius: DEFAULT_CIRCLE_RADIUS,
            color: Rgba::BLACK,
            stroke: false,
            stroke_width: DEFAULT_STROKE_WIDTH,
            dashes: 0.0,
        }
    }
}

/// Straight stroke between two cell centers.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathConfig {
    pub color: Rgba,
    pub stroke_width: f64,
    pub dashes: f64,
}

impl Default for PathConfig {
    fn default() -> Self {
        Self { color: Rgba::BLACK, stroke_width: DEFAULT_STROKE_WIDTH, dashes: 0.0 }
    }
}

/// Horizontal segment centered on a cell, before rotation.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LineConfig {
    pub length: f64,
    pub color: Rgba,
    pub stroke_width: f64,
    pub rotate: f64,
    pub dashes: f64,
}

impl Default for LineConfig {
    fn default() -> Self {
        Self {
            length: DEFAULT_LINE_LENGTH,
            color: Rgba::BLACK,
            stroke_width: DEFAULT_STROKE_WIDTH,
            rotate: 0.0,
            dashes: 0.0,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StringConfig {
    pub color: Rgba,
    pub rotate: f64,
}
