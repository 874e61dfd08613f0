// engine.rs - What the display core needs from a simulation engine

use crate::error::EngineError;
use crate::grid::StateView;
use crate::pattern::Pattern;

/// A grid simulation the core can drive and draw.
///
/// Every call takes effect before it returns: a [`state`](Self::state) view
/// taken after `tick`, `toggle_cell` or `init` reflects exactly those calls,
/// in program order.
pub trait SimulationEngine {
    /// `(width, height)` in cells. Fixed for the engine's lifetime.
    fn dimensions(&self) -> (u32, u32);

    /// Seeds the initial state. Called once before the first render.
    fn init(&mut self, pattern: Option<&Pattern<'_>>) -> Result<(), EngineError>;

    /// Advances the simulation by one step.
    fn tick(&mut self);

    /// Read-only view of the current state buffer.
    fn state(&self) -> StateView<'_>;

    /// Flips one cell. Engines without editable cells ignore it.
    fn toggle_cell(&mut self, _row: u32, _col: u32) {}
}

impl<E: SimulationEngine + ?Sized> SimulationEngine for Box<E> {
    fn dimensions(&self) -> (u32, u32) {
        (**self).dimensions()
    }

    fn init(&mut self, pattern: Option<&Pattern<'_>>) -> Result<(), EngineError> {
        (**self).init(pattern)
    }

    fn tick(&mut self) {
        (**self).tick()
    }

    fn state(&self) -> StateView<'_> {
        (**self).state()
    }

    fn toggle_cell(&mut self, row: u32, col: u32) {
        (**self).toggle_cell(row, col)
    }
}
