// patterns.rs - Built-in seed patterns and the plaintext parser

use grid_display::Pattern;
use grid_display::pattern::{ALIVE_SYMBOL, DEAD_SYMBOL};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    #[error("unexpected character {found:?} at line {line}, column {column}")]
    UnexpectedCharacter {
        line: usize,
        column: usize,
        found: char,
    },
}

/// A parsed pattern: its bounding box and the live cells inside it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Layout {
    pub width: u32,
    pub height: u32,
    /// `(row, col)` relative to the top-left of the bounding box.
    pub alive: Vec<(u32, u32)>,
}

impl Layout {
    /// Live cells positioned so the bounding box sits in the middle of a
    /// `grid_width` x `grid_height` grid. Cells that would fall outside the
    /// grid are dropped.
    pub fn centered_in(&self, grid_width: u32, grid_height: u32) -> Vec<(u32, u32)> {
        let top = (grid_height as i64 - self.height as i64) / 2;
        let left = (grid_width as i64 - self.width as i64) / 2;
        self.alive
            .iter()
            .filter_map(|&(row, col)| {
                let r = top + row as i64;
                let c = left + col as i64;
                let inside = (0..grid_height as i64).contains(&r) && (0..grid_width as i64).contains(&c);
                inside.then_some((r as u32, c as u32))
            })
            .collect()
    }
}

/// Parses a pattern's layout. Rows may be ragged; missing cells are dead.
pub fn parse(pattern: &Pattern<'_>) -> Result<Layout, PatternError> {
    let mut layout = Layout::default();

    for (row, (line_number, line)) in (0u32..).zip(pattern.rows()) {
        let mut width = 0;
        for (col, symbol) in (0u32..).zip(line.chars()) {
            match symbol {
                DEAD_SYMBOL => {}
                ALIVE_SYMBOL => layout.alive.push((row, col)),
                found => {
                    return Err(PatternError::UnexpectedCharacter {
                        line: line_number,
                        column: col as usize + 1,
                        found,
                    });
                }
            }
            width = col + 1;
        }
        layout.width = layout.width.max(width);
        layout.height = row + 1;
    }

    Ok(layout)
}

/// Looks a pattern up by name, ignoring case.
pub fn find(name: &str) -> Option<&'static Pattern<'static>> {
    PATTERNS.iter().find(|p| p.name.eq_ignore_ascii_case(name))
}

pub const EMPTY: Pattern<'static> = Pattern::new("Empty", "Empty pattern", "");

pub const BLINKER: Pattern<'static> = Pattern::new(
    "Blinker",
    "Period 2",
    "
    !Name: Blinker
    !The smallest and most common oscillator.
    OOO
    ",
);

pub const GLIDER: Pattern<'static> = Pattern::new(
    "Glider",
    "The smallest spaceship",
    "
    !Name: Glider
    .O
    ..O
    OOO
    ",
);

pub const PATTERNS: &[Pattern<'static>] = &[
    EMPTY,
    Pattern::new(
        "Block",
        "Still life",
        "
        !Name: Block
        !The most common still life.
        OO
        OO
        ",
    ),
    Pattern::new(
        "Bee hive",
        "Still life",
        "
        !Name: Beehive
        .OO
        O..O
        .OO
        ",
    ),
    Pattern::new(
        "Loaf",
        "Still life",
        "
        !Name: Loaf
        .OO
        O..O
        .O.O
        ..O
        ",
    ),
    Pattern::new(
        "Boat",
        "Still life",
        "
        !Name: Boat
        OO
        O.O
        .O
        ",
    ),
    Pattern::new(
        "Tub",
        "Still life",
        "
        !Name: Tub
        .O
        O.O
        .O
        ",
    ),
    BLINKER,
    Pattern::new(
        "Toad",
        "Period 2",
        "
        !Name: Toad
        .OOO
        OOO
        ",
    ),
    Pattern::new(
        "Beacon",
        "Period 2",
        "
        !Name: Beacon
        OO
        O
        ...O
        ..OO
        ",
    ),
    Pattern::new(
        "Pulsar",
        "Period 3",
        "
        !Name: Pulsar
        ..OOO...OOO
        .
        O....O.O....O
        O....O.O....O
        O....O.O....O
        ..OOO...OOO
        .
        ..OOO...OOO
        O....O.O....O
        O....O.O....O
        O....O.O....O
        .
        ..OOO...OOO
        ",
    ),
    Pattern::new(
        "Penta-decathlon",
        "Period 15",
        "
        !Name: Pentadecathlon
        ..O....O
        OO.OOOO.OO
        ..O....O
        ",
    ),
    GLIDER,
    Pattern::new(
        "Light-weight spaceship",
        "Orthogonal spaceship",
        "
        !Name: LWSS
        .O..O
        O
        O...O
        OOOO
        ",
    ),
    Pattern::new(
        "R-pentomino",
        "Methuselah, stabilises at generation 1103",
        "
        !Name: R-pentomino
        .OO
        OO
        .O
        ",
    ),
    Pattern::new(
        "Diehard",
        "Methuselah, vanishes at generation 130",
        "
        !Name: Die hard
        ......O
        OO
        .O...OOO
        ",
    ),
    Pattern::new(
        "Acorn",
        "Methuselah, stabilises after 5206 generations",
        "
        !Name: Acorn
        .O
        ...O
        OO..OOO
        ",
    ),
    Pattern::new(
        "Gosper glider gun",
        "The first known gun",
        "
        !Name: Gosper glider gun
        ........................O
        ......................O.O
        ............OO......OO............OO
        ...........O...O....OO............OO
        OO........O.....O...OO
        OO........O...O.OO....O.O
        ..........O.....O.......O
        ...........O...O
        ............OO
        ",
    ),
];
