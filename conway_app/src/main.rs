// main.rs - Desktop viewer for grid simulations
// Game of Life and Lenia drawn through the grid_display core

use std::env;
use std::mem;
use std::path::PathBuf;

use anyhow::{Context, anyhow};
use eframe::egui;
use grid_display::{EguiFrameClock, SessionConfig};
use log::{error, info};

mod session;
mod ui;

use session::{Controller, Model};

/// Path of an optional JSON session configuration.
const CONFIG_ENV: &str = "GRID_SIM_CONFIG";

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = load_config()?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([800.0, 900.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Grid Simulations",
        options,
        Box::new(move |cc| Box::new(GridSimApp::new(&cc.egui_ctx, config))),
    )
    .map_err(|err| anyhow!("event loop failed: {err}"))
}

fn load_config() -> anyhow::Result<SessionConfig> {
    let Some(path) = env::var_os(CONFIG_ENV).map(PathBuf::from) else {
        return Ok(SessionConfig::default());
    };
    info!("using session config {}", path.display());
    SessionConfig::from_path(&path)
        .with_context(|| format!("{CONFIG_ENV}={}", path.display()))
}

pub struct GridSimApp {
    ctx: egui::Context,
    /// Settings of the running session.
    config: SessionConfig,
    model: Model,
    /// Settings being edited; applied by starting a new session.
    draft: SessionConfig,
    draft_model: Model,
    session: Result<Controller<EguiFrameClock>, String>,
    /// Points per canvas pixel.
    zoom: f32,
}

impl GridSimApp {
    pub fn new(ctx: &egui::Context, config: SessionConfig) -> Self {
        let mut app = Self {
            ctx: ctx.clone(),
            draft: config.clone(),
            config,
            model: Model::default(),
            draft_model: Model::default(),
            session: Err(String::new()),
            zoom: 2.0,
        };
        app.restart();
        app
    }

    /// Tears down the current session and starts one from the draft settings.
    /// Returns the previous controller, already paused.
    pub fn apply_draft(&mut self) -> Option<Controller<EguiFrameClock>> {
        self.config = self.draft.clone();
        self.model = self.draft_model;
        self.restart()
    }

    fn restart(&mut self) -> Option<Controller<EguiFrameClock>> {
        let mut previous = mem::replace(&mut self.session, Err(String::new())).ok();
        if let Some(controller) = previous.as_mut() {
            controller.teardown();
        }
        let scheduler = EguiFrameClock::new(self.ctx.clone());
        self.session = session::start(self.model, &self.config, scheduler).map_err(|err| {
            error!("session failed to start: {err:#}");
            format!("{err:#}")
        });
        previous
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use grid_display::PlayMode;
    use test_log::test;

    fn playing(width: u32) -> SessionConfig {
        SessionConfig {
            width,
            height: 6,
            default_play_mode: PlayMode::Play,
            ..SessionConfig::default()
        }
    }

    #[test]
    fn apply_tears_down_the_running_session() {
        let ctx = egui::Context::default();
        let mut app = GridSimApp::new(&ctx, playing(6));
        let Ok(first) = &app.session else {
            panic!("session did not start");
        };
        assert!(first.is_running());
        assert_eq!(first.scheduler().outstanding(), 1);

        app.draft = playing(9);
        let previous = app.apply_draft().unwrap();
        assert!(previous.is_paused());
        assert_eq!(previous.scheduler().outstanding(), 0);

        let Ok(current) = &app.session else {
            panic!("session did not restart");
        };
        assert_eq!(current.surface().grid().width(), 9);
        assert!(current.is_running());
    }

    #[test]
    fn failed_restart_keeps_the_error() {
        let ctx = egui::Context::default();
        let mut app = GridSimApp::new(&ctx, playing(6));
        app.draft.width = 0;
        assert!(app.apply_draft().is_some_and(|c| c.is_paused()));
        assert!(app.session.is_err());
        assert!(app.apply_draft().is_none());
    }
}
