// File: crates/gridder-core/src/layout.rs
// Summary: Layout engine translating (row, column) addresses into pixel geometry.
// Notes:
// - Nothing is cached. Every query recomputes from the two specs, which are
//   owned here and only exposed read-only.
// - Offsets are redistributed globally: the sum of *all* offsets on an axis is
//   removed before the base share is computed, then each cell adds back its own.

use crate::error::{GridError, Result};
use crate::geometry::{Point, Rect};
use crate::types::{GridSpec, ImageSpec};

/// Derived geometry of one cell.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cell {
    pub row: usize,
    pub column: usize,
    pub width: f64,
    pub height: f64,
    pub center: Point,
}

impl Cell {
    /// Bounding rectangle of the cell in grid space.
    pub fn rect(&self) -> Rect {
        Rect::from_center(self.center, self.width, self.height)
    }
}

#[derive(Clone, Debug)]
pub struct LayoutEngine {
    image: ImageSpec,
    grid: GridSpec,
}

impl LayoutEngine {
    /// Validate the specs and take ownership of them.
    ///
    /// Rows are checked before columns; an image whose margins leave no grid
    /// area is rejected with [`GridError::InvalidImageSize`].
    pub fn new(image: ImageSpec, grid: GridSpec) -> Result<Self> {
        if grid.rows == 0 {
            return Err(GridError::MissingRows);
        }
        if grid.columns == 0 {
            return Err(GridError::MissingColumns);
        }
        if grid.width(image.width) <= 0.0 || grid.height(image.height) <= 0.0 {
            return Err(GridError::InvalidImageSize {
                width: image.width,
                height: image.height,
                margin: grid.margin_width,
            });
        }
        Ok(Self { image, grid })
    }

    pub fn image(&self) -> &ImageSpec {
        &self.image
    }

    pub fn grid(&self) -> &GridSpec {
        &self.grid
    }

    /// Grid size in pixels: the image size minus a margin on each side.
    pub fn grid_dimensions(&self) -> (f64, f64) {
        (self.grid.width(self.image.width), self.grid.height(self.image.height))
    }

    /// Width of `column`. Does not check bounds.
    pub fn column_width(&self, column: usize) -> f64 {
        let (grid_width, _) = self.grid_dimensions();
        let base = (grid_width - self.grid.column_offset_sum()) / self.grid.columns as f64;
        base + self.grid.column_offset(column)
    }

    /// Height of `row`. Does not check bounds.
    pub fn row_height(&self, row: usize) -> f64 {
        let (_, grid_height) = self.grid_dimensions();
        let base = (grid_height - self.grid.row_offset_sum()) / self.grid.rows as f64;
        base + self.grid.row_offset(row)
    }

    /// `(width, height)` of the cell at `(row, column)`. Does not check bounds.
    pub fn cell_dimensions(&self, row: usize, column: usize) -> (f64, f64) {
        (self.column_width(column), self.row_height(row))
    }

    /// Center of the cell at `(row, column)`. Does not check bounds.
    ///
    /// Sums the sizes of every column/row up to and including the target to
    /// find its far edge, then steps back half the target's own size.
    pub fn cell_center(&self, row: usize, column: usize) -> Point {
        let (width, height) = self.cell_dimensions(row, column);
        let right: f64 = (0..=column).map(|c| self.column_width(c)).sum();
        let bottom: f64 = (0..=row).map(|r| self.row_height(r)).sum();
        Point::new(right - width / 2.0, bottom - height / 2.0)
    }

    /// Check that `(row, column)` addresses a cell and that every declared
    /// offset is legal.
    ///
    /// An offset is legal when its index exists on its axis and its magnitude
    /// is strictly smaller than the whole grid dimension on that axis. The
    /// comparison is against the full grid, not the cell's own share.
    pub fn verify_bounds(&self, row: usize, column: usize) -> Result<()> {
        let out_of_bounds = || GridError::OutOfBounds { row, column };
        if row >= self.grid.rows || column >= self.grid.columns {
            return Err(out_of_bounds());
        }

        let (grid_width, grid_height) = self.grid_dimensions();
        for (&c, &offset) in &self.grid.column_offsets {
            if c >= self.grid.columns || illegal_offset(offset, grid_width) {
                return Err(out_of_bounds());
            }
        }
        for (&r, &offset) in &self.grid.row_offsets {
            if r >= self.grid.rows || illegal_offset(offset, grid_height) {
                return Err(out_of_bounds());
            }
        }
        Ok(())
    }

    /// Bounds-checked cell geometry.
    pub fn cell(&self, row: usize, column: usize) -> Result<Cell> {
        self.verify_bounds(row, column)?;
        let (width, height) = self.cell_dimensions(row, column);
        Ok(Cell { row, column, width, height, center: self.cell_center(row, column) })
    }

    /// Right edge x of every column, left to right. The last entry is the grid width.
    pub fn column_boundaries(&self) -> Vec<f64> {
        running_sum((0..self.grid.columns).map(|c| self.column_width(c)))
    }

    /// Bottom edge y of every row, top to bottom. The last entry is the grid height.
    pub fn row_boundaries(&self) -> Vec<f64> {
        running_sum((0..self.grid.rows).map(|r| self.row_height(r)))
    }
}

fn illegal_offset(offset: f64, limit: f64) -> bool {
    offset.is_nan() || offset.abs() >= limit
}

fn running_sum(sizes: impl Iterator<Item = f64>) -> Vec<f64> {
    sizes
        .scan(0.0, |edge, size| {
            *edge += size;
            Some(*edge)
        })
        .collect()
}
