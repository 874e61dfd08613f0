// session.rs - Building a playback session from a configuration

use anyhow::{Context, Result};
use conway::Universe;
use conway::patterns;
use grid_display::{
    FrameScheduler, PainterCanvas, PainterContext, Pattern, PlaybackController, RenderStyle,
    RenderSurface, SessionConfig, SimulationEngine,
};
use lenia::{Lenia, LeniaParams};
use log::info;

/// Which engine drives the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Model {
    #[default]
    Life,
    Lenia,
}

impl Model {
    pub fn label(self) -> &'static str {
        match self {
            Model::Life => "Game of Life",
            Model::Lenia => "Lenia",
        }
    }
}

pub type Controller<S> = PlaybackController<Box<dyn SimulationEngine>, PainterContext, S>;

/// A catalog entry by name, otherwise the text itself as an inline layout.
pub fn resolve_pattern(pattern: Option<&str>) -> Option<Pattern<'_>> {
    let pattern = pattern?;
    Some(match patterns::find(pattern) {
        Some(builtin) => *builtin,
        None => Pattern::new("inline", "", pattern),
    })
}

/// Name shown for a configured pattern.
pub fn pattern_label(pattern: Option<&str>) -> &str {
    match pattern {
        None => "Template",
        Some(name) => patterns::find(name).map_or("Custom", |p| p.name),
    }
}

/// Starts a session: a seeded engine, a surface sized for the configured
/// grid, and the configured play mode.
pub fn start<S: FrameScheduler>(
    model: Model,
    config: &SessionConfig,
    scheduler: S,
) -> Result<Controller<S>> {
    let grid = config.validate()?;

    let mut engine: Box<dyn SimulationEngine> = match model {
        Model::Life => Box::new(Universe::new(config.width, config.height)?),
        Model::Lenia => Box::new(Lenia::new(
            config.width,
            config.height,
            LeniaParams::default(),
        )?),
    };
    engine
        .init(resolve_pattern(config.pattern.as_deref()).as_ref())
        .context("seeding the engine")?;

    let style = RenderStyle {
        grid_lines: config.show_grid_lines,
        ..RenderStyle::default()
    };
    let surface = RenderSurface::initialize(&mut PainterCanvas::new(), grid, style)?;

    info!(
        "{} session: {}x{} cells, pattern {}",
        model.label(),
        config.width,
        config.height,
        pattern_label(config.pattern.as_deref())
    );

    let mut controller = PlaybackController::new(engine, surface, scheduler);
    if config.show_fps {
        controller = controller.with_fps();
    }
    controller.set_play_mode(config.default_play_mode);
    Ok(controller)
}

#[cfg(test)]
mod tests {
    use super::*;
    use grid_display::{ManualFrameClock, PlayMode};
    use test_log::test;

    fn config(pattern: Option<&str>) -> SessionConfig {
        SessionConfig {
            width: 8,
            height: 8,
            pattern: pattern.map(str::to_string),
            ..SessionConfig::default()
        }
    }

    #[test]
    fn catalog_names_win_over_inline_text() {
        assert_eq!(resolve_pattern(Some("glider")).map(|p| p.name), Some("Glider"));
        let inline = resolve_pattern(Some(".O.\n.O.\n.O.")).unwrap();
        assert_eq!(inline.name, "inline");
        assert_eq!(inline.rows().count(), 3);
        assert!(resolve_pattern(None).is_none());
    }

    #[test]
    fn labels() {
        assert_eq!(pattern_label(None), "Template");
        assert_eq!(pattern_label(Some("PULSAR")), "Pulsar");
        assert_eq!(pattern_label(Some("OO")), "Custom");
    }

    #[test]
    fn life_session_starts_paused_with_pattern() {
        let controller = start(Model::Life, &config(Some("Blinker")), ManualFrameClock::new()).unwrap();
        assert!(controller.is_paused());
        assert_eq!(controller.surface().grid().width(), 8);
        let live = match controller.engine().state().values {
            grid_display::CellValues::Binary(cells) => cells.iter().filter(|c| c.is_alive()).count(),
            grid_display::CellValues::Continuous(_) => 0,
        };
        assert_eq!(live, 3);
    }

    #[test]
    fn play_mode_from_config_starts_the_loop() {
        let config = SessionConfig {
            default_play_mode: PlayMode::Play,
            ..config(None)
        };
        let controller = start(Model::Lenia, &config, ManualFrameClock::new()).unwrap();
        assert!(controller.is_running());
        assert_eq!(controller.scheduler().outstanding(), 1);
    }

    #[test]
    fn bad_inline_pattern_fails_the_session() {
        let err = start(Model::Life, &config(Some("OxO")), ManualFrameClock::new()).err().unwrap();
        assert!(format!("{err:#}").contains("inline"));
    }

    #[test]
    fn zero_width_is_rejected() {
        let config = SessionConfig {
            width: 0,
            ..config(None)
        };
        assert!(start(Model::Life, &config, ManualFrameClock::new()).is_err());
    }
}
