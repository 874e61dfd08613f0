// lib.rs - Game of Life engine for the grid display

//! A binary automaton that plugs into [`grid_display`]: a wrapping Game of
//! Life [`Universe`], the plaintext pattern parser and a catalog of classic
//! seed patterns.

pub mod patterns;
mod universe;

pub use grid_display::Cell;
pub use patterns::{Layout, PATTERNS, PatternError};
pub use universe::Universe;
