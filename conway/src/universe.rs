// universe.rs - Toroidal Game of Life

use std::fmt;

use grid_display::{Cell, EngineError, GridError, Pattern, SimulationEngine, StateView};
use log::{debug, trace};

use crate::patterns;

/// A Game of Life universe whose edges wrap around.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Universe {
    width: u32,
    height: u32,
    cells: Vec<Cell>,
    tick_count: u64,
    version: u64,
}

impl Universe {
    /// An all-dead universe.
    pub fn new(width: u32, height: u32) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::ZeroExtent { width, height });
        }
        Ok(Self {
            width,
            height,
            cells: vec![Cell::Dead; width as usize * height as usize],
            tick_count: 0,
            version: 0,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn cell(&self, row: u32, col: u32) -> Cell {
        self.cells[self.index(row, col)]
    }

    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_alive()).count()
    }

    /// Marks the given `(row, col)` cells alive.
    pub fn set_cells_alive(&mut self, cells: impl IntoIterator<Item = (u32, u32)>) {
        for (row, col) in cells {
            let idx = self.index(row, col);
            self.cells[idx] = Cell::Alive;
        }
        self.version += 1;
    }

    pub fn clear(&mut self) {
        self.cells.fill(Cell::Dead);
        self.tick_count = 0;
        self.version += 1;
    }

    /// Seed used when no pattern is given: cell `i` lives when `i` is even or
    /// a multiple of seven.
    fn seed_template(&mut self) {
        for (i, cell) in self.cells.iter_mut().enumerate() {
            *cell = if i % 2 == 0 || i % 7 == 0 {
                Cell::Alive
            } else {
                Cell::Dead
            };
        }
    }

    fn index(&self, row: u32, col: u32) -> usize {
        row as usize * self.width as usize + col as usize
    }

    fn live_neighbors(&self, row: u32, col: u32) -> u8 {
        let mut count = 0;
        // Adding `extent - 1` is a wrapping step of -1.
        for delta_row in [self.height - 1, 0, 1] {
            for delta_col in [self.width - 1, 0, 1] {
                if delta_row == 0 && delta_col == 0 {
                    continue;
                }
                let r = (row + delta_row) % self.height;
                let c = (col + delta_col) % self.width;
                count += self.cells[self.index(r, c)] as u8;
            }
        }
        count
    }
}

impl SimulationEngine for Universe {
    fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn init(&mut self, pattern: Option<&Pattern<'_>>) -> Result<(), EngineError> {
        self.cells.fill(Cell::Dead);
        self.tick_count = 0;
        match pattern {
            None => self.seed_template(),
            Some(pattern) => {
                let layout = patterns::parse(pattern).map_err(|source| EngineError::Pattern {
                    name: pattern.name.to_string(),
                    source: Box::new(source),
                })?;
                for (row, col) in layout.centered_in(self.width, self.height) {
                    let idx = self.index(row, col);
                    self.cells[idx] = Cell::Alive;
                }
                debug!(
                    "seeded `{}` ({}x{}) into {}x{}",
                    pattern.name, layout.width, layout.height, self.width, self.height
                );
            }
        }
        self.version += 1;
        Ok(())
    }

    fn tick(&mut self) {
        let mut next = self.cells.clone();

        for row in 0..self.height {
            for col in 0..self.width {
                let idx = self.index(row, col);
                next[idx] = match (self.cells[idx], self.live_neighbors(row, col)) {
                    (Cell::Alive, 2) | (Cell::Alive, 3) => Cell::Alive, // Survival
                    (Cell::Dead, 3) => Cell::Alive,                     // Birth
                    _ => Cell::Dead,                                    // Death or stays dead
                };
            }
        }

        self.cells = next;
        self.tick_count += 1;
        self.version += 1;
        trace!("tick {}", self.tick_count);
    }

    fn state(&self) -> StateView<'_> {
        StateView::binary(self.version, &self.cells)
    }

    fn toggle_cell(&mut self, row: u32, col: u32) {
        if row >= self.height || col >= self.width {
            return;
        }
        let idx = self.index(row, col);
        self.cells[idx].toggle();
        self.version += 1;
    }
}

impl fmt::Display for Universe {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for line in self.cells.chunks(self.width as usize) {
            for &cell in line {
                let symbol = if cell == Cell::Dead { '◻' } else { '◼' };
                write!(f, "{}", symbol)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
