// File: crates/gridder-core/src/lib.rs
// Summary: Core library entry point; exports the grid layout engine, drawing facade and canvas backends.

pub mod error;
pub mod types;
pub mod geometry;
pub mod layout;
pub mod shapes;
pub mod theme;
pub mod canvas;
pub mod text;
pub mod skia;
pub mod gridder;

pub use error::{GridError, Result};
pub use types::{GridSpec, ImageSpec, Rgba};
pub use geometry::{Point, Rect};
pub use layout::{Cell, LayoutEngine};
pub use shapes::{CircleConfig, LineConfig, PathConfig, RectangleConfig, StringConfig};
pub use theme::GridTheme;
pub use canvas::{Canvas, StateGuard};
pub use text::FontFace;
pub use skia::SkiaCanvas;
pub use gridder::Gridder;
