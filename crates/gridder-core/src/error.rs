// File: crates/gridder-core/src/error.rs
// Summary: Error taxonomy for grid construction, bounds validation and image output.

/// All errors produced while building a grid, drawing into it, or writing it out.
#[derive(Debug, thiserror::Error)]
pub enum GridError {
    /// The grid spec declares zero rows.
    #[error("no rows provided")]
    MissingRows,

    /// The grid spec declares zero columns.
    #[error("no columns provided")]
    MissingColumns,

    /// The image is empty, or the margins leave no room for the grid.
    #[error("invalid image size {width}x{height} with margin {margin}")]
    InvalidImageSize { width: u32, height: u32, margin: u32 },

    /// A cell address is outside the grid, or a declared offset is illegal.
    #[error("cell ({row}, {column}) is out of bounds")]
    OutOfBounds { row: usize, column: usize },

    /// A color string could not be parsed.
    #[error("invalid color `{0}`, expected #rrggbb or #rrggbbaa")]
    InvalidColor(String),

    /// The raster surface could not be allocated.
    #[error("failed to create a {width}x{height} raster surface")]
    Surface { width: u32, height: u32 },

    /// Pixels could not be read back from the raster surface.
    #[error("failed to read pixels from the raster surface")]
    ReadPixels,

    /// PNG encoding failed.
    #[error("PNG encoding failed: {0}")]
    Encode(#[from] image::ImageError),

    /// Writing the output failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GridError>;
