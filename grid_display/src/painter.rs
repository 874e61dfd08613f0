// painter.rs - egui-backed canvas

use egui::emath::RectTransform;
use egui::{Color32, Pos2, Rect, Vec2, pos2, vec2};

use crate::color::Rgb;
use crate::coords::BoundingRect;
use crate::grid::PixelSize;
use crate::surface::{CanvasHost, DrawContext};

/// Host for [`PainterContext`]s. egui can always paint, so a context is
/// always available.
#[derive(Debug, Clone, Default)]
pub struct PainterCanvas {
    size: PixelSize,
}

impl PainterCanvas {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CanvasHost for PainterCanvas {
    type Context = PainterContext;

    fn set_pixel_size(&mut self, size: PixelSize) {
        self.size = size;
    }

    fn context_2d(&mut self) -> Option<PainterContext> {
        Some(PainterContext {
            size: self.size,
            fills: Vec::new(),
        })
    }
}

/// Records filled rectangles in canvas-pixel space and replays them onto an
/// [`egui::Painter`] at whatever on-screen size the canvas was allocated.
#[derive(Debug, Clone)]
pub struct PainterContext {
    size: PixelSize,
    fills: Vec<(Rect, Color32)>,
}

impl PainterContext {
    pub fn size(&self) -> PixelSize {
        self.size
    }

    /// Canvas size in points at `zoom` points per canvas pixel.
    pub fn display_size(&self, zoom: f32) -> Vec2 {
        vec2(self.size.width as f32, self.size.height as f32) * zoom
    }

    pub fn fill_count(&self) -> usize {
        self.fills.len()
    }

    /// Paints the recorded frame stretched over `target`.
    pub fn paint(&self, painter: &egui::Painter, target: Rect) {
        let source = Rect::from_min_size(
            Pos2::ZERO,
            vec2(self.size.width as f32, self.size.height as f32),
        );
        let to_screen = RectTransform::from_to(source, target);
        for (rect, color) in &self.fills {
            painter.rect_filled(to_screen.transform_rect(*rect), 0.0, *color);
        }
    }
}

impl DrawContext for PainterContext {
    fn begin_frame(&mut self) {
        self.fills.clear();
    }

    fn fill_rect(&mut self, x: u32, y: u32, width: u32, height: u32, color: Rgb) {
        let rect = Rect::from_min_size(pos2(x as f32, y as f32), vec2(width as f32, height as f32));
        self.fills.push((rect, color.into()));
    }
}

impl From<Rect> for BoundingRect {
    fn from(rect: Rect) -> Self {
        BoundingRect::new(
            rect.min.x as f64,
            rect.min.y as f64,
            rect.width() as f64,
            rect.height() as f64,
        )
    }
}
