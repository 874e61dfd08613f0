// playback.rs - Play/pause/step control loop

use log::{debug, info, trace, warn};
use serde::{Deserialize, Serialize};

use crate::coords::{BoundingRect, PointerPosition};
use crate::engine::SimulationEngine;
use crate::fps::FpsMeter;
use crate::frame::{FrameScheduler, FrameToken};
use crate::grid::CellIndex;
use crate::surface::{DrawContext, RenderSurface};

/// Play/pause request coming from a control form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayMode {
    Play,
    #[default]
    Pause,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    Paused,
    Running,
}

/// Drives an engine and its render surface from display refreshes.
///
/// Running means exactly one frame callback is outstanding; that token is the
/// only record of the state. Each delivered frame ticks, renders and schedules
/// the next one. Pausing cancels the outstanding token before returning, and
/// frames arriving with any other token are dropped, so no tick happens after
/// `pause` returns.
///
/// Dropping the controller pauses it.
pub struct PlaybackController<E, C, S: FrameScheduler> {
    engine: E,
    surface: RenderSurface<C>,
    scheduler: S,
    frame: Option<FrameToken>,
    fps: Option<FpsMeter>,
    ticks: u64,
}

impl<E, C, S> PlaybackController<E, C, S>
where
    E: SimulationEngine,
    C: DrawContext,
    S: FrameScheduler,
{
    /// Starts a paused session and renders the engine's current state once.
    pub fn new(engine: E, surface: RenderSurface<C>, scheduler: S) -> Self {
        let grid = surface.grid();
        let (width, height) = engine.dimensions();
        if (width, height) != (grid.width(), grid.height()) {
            warn!(
                "engine is {}x{} but the surface grid is {}x{}",
                width,
                height,
                grid.width(),
                grid.height()
            );
        }
        info!("playback session started ({}x{} cells)", width, height);

        let mut controller = Self {
            engine,
            surface,
            scheduler,
            frame: None,
            fps: None,
            ticks: 0,
        };
        controller.render();
        controller
    }

    /// Measures the frame rate on every render.
    pub fn with_fps(mut self) -> Self {
        self.fps = Some(FpsMeter::new());
        self
    }

    pub fn state(&self) -> PlaybackState {
        if self.is_running() {
            PlaybackState::Running
        } else {
            PlaybackState::Paused
        }
    }

    pub fn is_running(&self) -> bool {
        self.frame.is_some()
    }

    pub fn is_paused(&self) -> bool {
        self.frame.is_none()
    }

    /// Ticks and renders once, then keeps doing so on every display refresh
    /// until paused. No-op while running.
    pub fn play(&mut self) {
        if self.is_running() {
            trace!("play ignored: already running");
            return;
        }
        self.advance();
        let token = self.scheduler.request_frame();
        trace!("frame {} scheduled", token.id());
        self.frame = Some(token);
    }

    /// Cancels the outstanding frame, if any.
    pub fn pause(&mut self) {
        if let Some(token) = self.frame.take() {
            self.scheduler.cancel_frame(token);
            debug!("paused, frame {} cancelled", token.id());
        }
    }

    /// One tick and one render, independent of the play loop.
    pub fn step(&mut self) {
        self.advance();
    }

    pub fn set_play_mode(&mut self, mode: PlayMode) {
        debug!("play mode -> {:?}", mode);
        match mode {
            PlayMode::Play => self.play(),
            PlayMode::Pause => self.pause(),
        }
    }

    /// Delivers a display refresh for `token`. Only the outstanding token
    /// continues the loop.
    pub fn on_frame(&mut self, token: FrameToken) {
        if self.frame != Some(token) {
            trace!("stale frame {} dropped", token.id());
            return;
        }
        self.frame = None;
        self.play();
    }

    /// Runs one display refresh: every due frame is delivered. Returns the
    /// number of frames delivered.
    pub fn refresh(&mut self) -> usize {
        let due = self.scheduler.due_frames();
        let count = due.len();
        for token in due {
            self.on_frame(token);
        }
        count
    }

    /// Toggles the cell under `pointer` and re-renders. Ignored while running.
    pub fn click(&mut self, pointer: PointerPosition, bounds: BoundingRect) -> Option<CellIndex> {
        if self.is_running() {
            trace!("click ignored while running");
            return None;
        }
        let cell = self.surface.grid().cell_at(pointer, bounds);
        debug!("toggle cell ({}, {})", cell.row, cell.col);
        self.engine.toggle_cell(cell.row, cell.col);
        self.render();
        Some(cell)
    }

    /// Redraws the current state without ticking.
    pub fn render(&mut self) {
        self.surface.render(self.engine.state());
        if let Some(fps) = self.fps.as_mut() {
            fps.record();
        }
    }

    /// Forces the session to `Paused`. Also done on drop.
    pub fn teardown(&mut self) {
        self.pause();
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn surface(&self) -> &RenderSurface<C> {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut RenderSurface<C> {
        &mut self.surface
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn fps(&self) -> Option<f64> {
        self.fps.as_ref().and_then(FpsMeter::fps)
    }

    /// Generations advanced in this session. Cell edits do not count.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    fn advance(&mut self) {
        self.engine.tick();
        self.ticks += 1;
        self.render();
    }
}

impl<E, C, S: FrameScheduler> Drop for PlaybackController<E, C, S> {
    fn drop(&mut self) {
        if let Some(token) = self.frame.take() {
            self.scheduler.cancel_frame(token);
        }
    }
}
