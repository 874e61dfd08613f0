// error.rs - Error types

//! Error types for session setup.
//!
//! Steady-state operations (ticking, rendering, color mapping, pointer
//! translation) are total and have no error type.

use thiserror::Error;

/// Rejected grid geometry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("grid dimensions must be positive, got {width}x{height}")]
    ZeroExtent { width: u32, height: u32 },

    #[error("cell size must be at least one pixel")]
    ZeroCellSize,

    /// The canvas would be wider or taller than `u32::MAX` pixels.
    #[error("{width}x{height} cells of {cell_size} px do not fit a canvas")]
    TooLarge {
        width: u32,
        height: u32,
        cell_size: u32,
    },
}

/// Failure to prepare a drawable for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SurfaceError {
    /// The host could not supply a 2D drawing context. Fatal for the session.
    #[error("2D drawing context unavailable ({width}x{height} px requested)")]
    ContextUnavailable { width: u32, height: u32 },
}

/// Failure while seeding an engine.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("pattern `{name}` could not be seeded")]
    Pattern {
        name: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

/// Invalid or unreadable session configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid grid configuration")]
    InvalidGrid(#[from] GridError),

    #[error("failed to parse session configuration")]
    Parse(#[from] serde_json::Error),

    #[error("failed to read session configuration")]
    Io(#[from] std::io::Error),
}
