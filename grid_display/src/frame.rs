// frame.rs - Display-refresh scheduling

//! Single-shot frame callbacks in the style of `requestAnimationFrame`.
//!
//! A scheduler hands out a [`FrameToken`] per request. When the next display
//! refresh arrives the host drains the due tokens with
//! [`FrameScheduler::due_frames`] and delivers each one to whoever asked for it.
//! A cancelled token is never returned by `due_frames`.

use std::collections::VecDeque;

/// Identifies one scheduled frame callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameToken(u64);

impl FrameToken {
    pub fn id(self) -> u64 {
        self.0
    }
}

pub trait FrameScheduler {
    /// Schedules a callback for the next display refresh.
    fn request_frame(&mut self) -> FrameToken;

    /// Removes a pending callback. Unknown or already delivered tokens are ignored.
    fn cancel_frame(&mut self, token: FrameToken);

    /// Takes every callback whose refresh has arrived, oldest first.
    fn due_frames(&mut self) -> Vec<FrameToken>;
}

/// Pending-token bookkeeping shared by the concrete schedulers.
#[derive(Debug, Default)]
pub struct FrameQueue {
    next_id: u64,
    pending: VecDeque<FrameToken>,
    requested: u64,
    cancelled: u64,
}

impl FrameQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self) -> FrameToken {
        self.next_id += 1;
        self.requested += 1;
        let token = FrameToken(self.next_id);
        self.pending.push_back(token);
        token
    }

    pub fn remove(&mut self, token: FrameToken) -> bool {
        let before = self.pending.len();
        self.pending.retain(|t| *t != token);
        let removed = self.pending.len() != before;
        if removed {
            self.cancelled += 1;
        }
        removed
    }

    pub fn drain(&mut self) -> Vec<FrameToken> {
        self.pending.drain(..).collect()
    }

    pub fn outstanding(&self) -> usize {
        self.pending.len()
    }

    pub fn requested(&self) -> u64 {
        self.requested
    }

    pub fn cancelled(&self) -> u64 {
        self.cancelled
    }
}

/// A scheduler whose display refreshes are whatever the caller says they are.
///
/// Headless hosts and tests call [`due_frames`](FrameScheduler::due_frames)
/// (usually through `PlaybackController::refresh`) to simulate one refresh.
#[derive(Debug, Default)]
pub struct ManualFrameClock {
    queue: FrameQueue,
}

impl ManualFrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Callbacks currently waiting for a refresh.
    pub fn outstanding(&self) -> usize {
        self.queue.outstanding()
    }

    pub fn requested(&self) -> u64 {
        self.queue.requested()
    }

    pub fn cancelled(&self) -> u64 {
        self.queue.cancelled()
    }
}

impl FrameScheduler for ManualFrameClock {
    fn request_frame(&mut self) -> FrameToken {
        self.queue.push()
    }

    fn cancel_frame(&mut self, token: FrameToken) {
        self.queue.remove(token);
    }

    fn due_frames(&mut self) -> Vec<FrameToken> {
        self.queue.drain()
    }
}

/// Schedules frames on an egui context: each request asks egui to repaint,
/// and the next `update` pass is the refresh that delivers it.
pub struct EguiFrameClock {
    ctx: egui::Context,
    queue: FrameQueue,
}

impl EguiFrameClock {
    pub fn new(ctx: egui::Context) -> Self {
        Self {
            ctx,
            queue: FrameQueue::new(),
        }
    }

    pub fn outstanding(&self) -> usize {
        self.queue.outstanding()
    }
}

impl FrameScheduler for EguiFrameClock {
    fn request_frame(&mut self) -> FrameToken {
        self.ctx.request_repaint();
        self.queue.push()
    }

    fn cancel_frame(&mut self, token: FrameToken) {
        self.queue.remove(token);
    }

    fn due_frames(&mut self) -> Vec<FrameToken> {
        self.queue.drain()
    }
}
