// surface.rs - Draws engine state onto a 2D drawing context

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::color::{Rgb, map_to_color};
use crate::error::SurfaceError;
use crate::grid::{CellValues, Grid, PixelSize, StateView};

/// The drawing operations the renderer needs from a host.
pub trait DrawContext {
    /// Called once before each full frame is drawn.
    fn begin_frame(&mut self) {}

    /// Fills the `width` x `height` pixel rectangle whose top-left corner is `(x, y)`.
    fn fill_rect(&mut self, x: u32, y: u32, width: u32, height: u32, color: Rgb);
}

/// A drawable that can be resized and asked for a 2D context.
pub trait CanvasHost {
    type Context: DrawContext;

    fn set_pixel_size(&mut self, size: PixelSize);

    /// `None` when the host cannot supply a 2D context.
    fn context_2d(&mut self) -> Option<Self::Context>;
}

/// Dead/alive colors for binary automata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BinaryPalette {
    pub dead: Rgb,
    pub alive: Rgb,
}

impl Default for BinaryPalette {
    fn default() -> Self {
        Self {
            dead: Rgb::WHITE,
            alive: Rgb::BLACK,
        }
    }
}

impl BinaryPalette {
    pub fn color(&self, alive: bool) -> Rgb {
        if alive { self.alive } else { self.dead }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderStyle {
    /// Draw separator lines before the cells. Heatmaps usually skip them.
    pub grid_lines: bool,
    pub grid_color: Rgb,
    pub palette: BinaryPalette,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            grid_lines: true,
            grid_color: Rgb::GRID_GRAY,
            palette: BinaryPalette::default(),
        }
    }
}

/// A drawing context sized to a [`Grid`].
///
/// Stateless between frames: every [`render`](Self::render) redraws the whole
/// grid from the given state, so rendering the same state twice produces the
/// same pixels.
pub struct RenderSurface<C> {
    grid: Grid,
    style: RenderStyle,
    context: C,
}

impl<C: DrawContext> RenderSurface<C> {
    /// Sizes `host` for `grid` and acquires its 2D context.
    pub fn initialize<H>(host: &mut H, grid: Grid, style: RenderStyle) -> Result<Self, SurfaceError>
    where
        H: CanvasHost<Context = C>,
    {
        let size = grid.pixel_size();
        host.set_pixel_size(size);

        let Some(context) = host.context_2d() else {
            warn!(
                "no 2D context for a {}x{} px canvas",
                size.width, size.height
            );
            return Err(SurfaceError::ContextUnavailable {
                width: size.width,
                height: size.height,
            });
        };

        debug!(
            "render surface ready: {}x{} cells, {}x{} px",
            grid.width(),
            grid.height(),
            size.width,
            size.height
        );
        Ok(Self {
            grid,
            style,
            context,
        })
    }

    pub fn grid(&self) -> Grid {
        self.grid
    }

    pub fn style(&self) -> &RenderStyle {
        &self.style
    }

    pub fn style_mut(&mut self) -> &mut RenderStyle {
        &mut self.style
    }

    pub fn context(&self) -> &C {
        &self.context
    }

    pub fn context_mut(&mut self) -> &mut C {
        &mut self.context
    }

    /// Draws a full frame: separator lines (when enabled), then one filled
    /// square per cell.
    pub fn render(&mut self, state: StateView<'_>) {
        self.context.begin_frame();
        if self.style.grid_lines {
            self.render_grid_lines();
        }
        match state.values {
            CellValues::Binary(cells) => {
                let palette = self.style.palette;
                self.render_cells(cells, |cell| palette.color(cell.is_alive()));
            }
            CellValues::Continuous(values) => {
                self.render_cells(values, |&value| map_to_color(normalize(value)));
            }
        }
    }

    fn render_grid_lines(&mut self) {
        let PixelSize { width, height } = self.grid.pixel_size();
        let pitch = self.grid.pitch();
        let color = self.style.grid_color;

        // Vertical lines.
        for i in 0..=self.grid.width() {
            self.context.fill_rect(i * pitch, 0, 1, height, color);
        }

        // Horizontal lines.
        for j in 0..=self.grid.height() {
            self.context.fill_rect(0, j * pitch, width, 1, color);
        }
    }

    fn render_cells<T>(&mut self, values: &[T], color_of: impl Fn(&T) -> Rgb) {
        let grid = self.grid;
        let rows = values.chunks(grid.width() as usize).take(grid.height() as usize);
        for (row, line) in (0u32..).zip(rows) {
            for (col, value) in (0u32..).zip(line) {
                let (x, y) = grid.cell_origin(row, col);
                self.context
                    .fill_rect(x, y, grid.cell_size(), grid.cell_size(), color_of(value));
            }
        }
    }
}

/// Clamps a continuous value into the ramp's domain.
fn normalize(value: f64) -> f64 {
    if value.is_nan() { 0.0 } else { value.clamp(0.0, 1.0) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Cell;

    /// Records every fill for inspection.
    #[derive(Default)]
    struct Recorder {
        frames: usize,
        fills: Vec<(u32, u32, u32, u32, Rgb)>,
    }

    impl DrawContext for Recorder {
        fn begin_frame(&mut self) {
            self.frames += 1;
            self.fills.clear();
        }

        fn fill_rect(&mut self, x: u32, y: u32, width: u32, height: u32, color: Rgb) {
            self.fills.push((x, y, width, height, color));
        }
    }

    struct RecorderHost {
        size: PixelSize,
        available: bool,
    }

    impl CanvasHost for RecorderHost {
        type Context = Recorder;

        fn set_pixel_size(&mut self, size: PixelSize) {
            self.size = size;
        }

        fn context_2d(&mut self) -> Option<Recorder> {
            self.available.then(Recorder::default)
        }
    }

    fn host(available: bool) -> RecorderHost {
        RecorderHost {
            size: PixelSize::default(),
            available,
        }
    }

    #[test]
    fn initialize_sizes_the_host() {
        let mut host = host(true);
        let grid = Grid::new(4, 2, 5).unwrap();
        let surface = RenderSurface::initialize(&mut host, grid, RenderStyle::default()).unwrap();
        assert_eq!(host.size, PixelSize { width: 25, height: 13 });
        assert_eq!(surface.grid(), grid);
    }

    #[test]
    fn missing_context_is_reported() {
        let mut host = host(false);
        let grid = Grid::new(3, 3, 5).unwrap();
        let result = RenderSurface::initialize(&mut host, grid, RenderStyle::default());
        assert_eq!(
            result.err(),
            Some(SurfaceError::ContextUnavailable { width: 19, height: 19 })
        );
    }

    #[test]
    fn lines_then_cells_in_row_major_order() {
        let mut host = host(true);
        let grid = Grid::new(2, 1, 3).unwrap();
        let mut surface = RenderSurface::initialize(&mut host, grid, RenderStyle::default()).unwrap();

        let cells = [Cell::Alive, Cell::Dead];
        surface.render(StateView::binary(0, &cells));

        let gray = Rgb::GRID_GRAY;
        assert_eq!(
            surface.context().fills,
            vec![
                (0, 0, 1, 5, gray),
                (4, 0, 1, 5, gray),
                (8, 0, 1, 5, gray),
                (0, 0, 9, 1, gray),
                (0, 4, 9, 1, gray),
                (1, 1, 3, 3, Rgb::BLACK),
                (5, 1, 3, 3, Rgb::WHITE),
            ]
        );
    }

    #[test]
    fn continuous_values_skip_lines_and_are_clamped() {
        let mut host = host(true);
        let grid = Grid::new(2, 2, 1).unwrap();
        let style = RenderStyle {
            grid_lines: false,
            ..RenderStyle::default()
        };
        let mut surface = RenderSurface::initialize(&mut host, grid, style).unwrap();

        let values = [0.0, 1.0, -3.0, f64::NAN];
        surface.render(StateView::continuous(0, &values));

        let colors: Vec<Rgb> = surface.context().fills.iter().map(|f| f.4).collect();
        let blue = map_to_color(0.0);
        assert_eq!(colors, vec![blue, map_to_color(1.0), blue, blue]);
        assert_eq!(surface.context().fills[3].0, 3);
        assert_eq!(surface.context().fills[3].1, 3);
    }

    #[test]
    fn short_buffer_renders_what_it_has() {
        let mut host = host(true);
        let grid = Grid::new(3, 3, 2).unwrap();
        let style = RenderStyle {
            grid_lines: false,
            ..RenderStyle::default()
        };
        let mut surface = RenderSurface::initialize(&mut host, grid, style).unwrap();

        surface.render(StateView::binary(0, &[Cell::Alive; 4]));
        assert_eq!(surface.context().fills.len(), 4);
        assert_eq!(surface.context().frames, 1);
    }
}
