// lib.rs - Canvas rendering and playback control for grid simulations

//! Everything around a grid simulation engine except the simulation itself:
//! drawing its state onto a canvas, a play/pause/step loop driven by display
//! refreshes, pointer-to-cell translation for editing, and the color ramp used
//! for continuous fields.

pub mod color;
pub mod config;
pub mod coords;
pub mod engine;
pub mod error;
pub mod fps;
pub mod frame;
pub mod grid;
pub mod painter;
pub mod pattern;
pub mod playback;
pub mod raster;
pub mod surface;

pub use color::{Rgb, hsl_to_rgb, map_to_color};
pub use config::SessionConfig;
pub use coords::{BoundingRect, PointerPosition, to_cell};
pub use engine::SimulationEngine;
pub use error::{ConfigError, EngineError, GridError, SurfaceError};
pub use frame::{EguiFrameClock, FrameScheduler, FrameToken, ManualFrameClock};
pub use grid::{Cell, CellIndex, CellValues, Grid, PixelSize, StateView};
pub use painter::{PainterCanvas, PainterContext};
pub use pattern::Pattern;
pub use playback::{PlayMode, PlaybackController, PlaybackState};
pub use raster::{RasterCanvas, RasterContext};
pub use surface::{BinaryPalette, CanvasHost, DrawContext, RenderStyle, RenderSurface};
