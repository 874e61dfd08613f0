// coords.rs - Pointer position to grid cell translation

use crate::grid::{CellIndex, Grid, PixelSize};

/// A pointer position in client (page) coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerPosition {
    pub x: f64,
    pub y: f64,
}

impl PointerPosition {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// On-screen placement of the canvas in client coordinates.
///
/// May differ in size from the canvas pixel dimensions when the canvas is
/// displayed scaled (high-DPI, CSS sizing, UI zoom).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BoundingRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl BoundingRect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// A rect displayed at exactly one client unit per canvas pixel.
    pub fn unscaled(left: f64, top: f64, pixels: PixelSize) -> Self {
        Self::new(left, top, pixels.width as f64, pixels.height as f64)
    }
}

/// Translates a pointer position into the grid cell under it.
///
/// The result is always a valid cell: positions past either edge resolve to
/// the nearest boundary cell.
#[allow(clippy::too_many_arguments)]
pub fn to_cell(
    pointer: PointerPosition,
    bounds: BoundingRect,
    canvas_width: u32,
    canvas_height: u32,
    cell_size: u32,
    grid_width: u32,
    grid_height: u32,
) -> CellIndex {
    let scale_x = display_scale(canvas_width, bounds.width);
    let scale_y = display_scale(canvas_height, bounds.height);

    let canvas_left = (pointer.x - bounds.left) * scale_x;
    let canvas_top = (pointer.y - bounds.top) * scale_y;

    let pitch = cell_size as f64 + 1.0;

    CellIndex {
        row: clamp_to_extent((canvas_top / pitch).floor(), grid_height),
        col: clamp_to_extent((canvas_left / pitch).floor(), grid_width),
    }
}

impl Grid {
    /// [`to_cell`] for a canvas sized by this grid.
    pub fn cell_at(&self, pointer: PointerPosition, bounds: BoundingRect) -> CellIndex {
        let pixels = self.pixel_size();
        to_cell(
            pointer,
            bounds,
            pixels.width,
            pixels.height,
            self.cell_size(),
            self.width(),
            self.height(),
        )
    }
}

/// Canvas pixels per client unit. A collapsed or non-finite bounding box is
/// treated as unscaled.
fn display_scale(pixels: u32, displayed: f64) -> f64 {
    if displayed > 0.0 && displayed.is_finite() {
        pixels as f64 / displayed
    } else {
        1.0
    }
}

fn clamp_to_extent(raw: f64, extent: u32) -> u32 {
    let last = extent.saturating_sub(1);
    if raw >= 0.0 {
        // saturating float-to-int cast, then clamp
        (raw as u64).min(last as u64) as u32
    } else {
        // negative or NaN
        0
    }
}
