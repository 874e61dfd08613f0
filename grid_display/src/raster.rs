// raster.rs - In-memory pixel canvas

//! A CPU-side canvas: snapshots, headless hosts and pixel-level tests.

use crate::color::Rgb;
use crate::grid::PixelSize;
use crate::surface::{CanvasHost, DrawContext};

/// Host for [`RasterContext`]s.
#[derive(Debug, Clone)]
pub struct RasterCanvas {
    size: PixelSize,
    background: Rgb,
    supports_2d: bool,
}

impl Default for RasterCanvas {
    fn default() -> Self {
        Self::new()
    }
}

impl RasterCanvas {
    pub fn new() -> Self {
        Self {
            size: PixelSize::default(),
            background: Rgb::WHITE,
            supports_2d: true,
        }
    }

    /// A host that refuses to hand out a 2D context.
    pub fn without_2d() -> Self {
        Self {
            supports_2d: false,
            ..Self::new()
        }
    }

    pub fn with_background(mut self, background: Rgb) -> Self {
        self.background = background;
        self
    }

    pub fn size(&self) -> PixelSize {
        self.size
    }
}

impl CanvasHost for RasterCanvas {
    type Context = RasterContext;

    fn set_pixel_size(&mut self, size: PixelSize) {
        self.size = size;
    }

    fn context_2d(&mut self) -> Option<RasterContext> {
        self.supports_2d
            .then(|| RasterContext::new(self.size, self.background))
    }
}

/// Row-major RGB pixel buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterContext {
    size: PixelSize,
    pixels: Vec<Rgb>,
}

impl RasterContext {
    pub fn new(size: PixelSize, background: Rgb) -> Self {
        Self {
            size,
            pixels: vec![background; size.width as usize * size.height as usize],
        }
    }

    pub fn size(&self) -> PixelSize {
        self.size
    }

    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgb> {
        if x >= self.size.width || y >= self.size.height {
            return None;
        }
        self.pixels
            .get(y as usize * self.size.width as usize + x as usize)
            .copied()
    }
}

impl DrawContext for RasterContext {
    fn fill_rect(&mut self, x: u32, y: u32, width: u32, height: u32, color: Rgb) {
        // Clip to the buffer.
        let x_end = x.saturating_add(width).min(self.size.width);
        let y_end = y.saturating_add(height).min(self.size.height);
        let stride = self.size.width as usize;
        for py in y.min(y_end)..y_end {
            let row = py as usize * stride;
            self.pixels[row + x.min(x_end) as usize..row + x_end as usize].fill(color);
        }
    }
}
