// grid.rs - Grid geometry and read-only views of engine state

use serde::{Deserialize, Serialize};

use crate::error::GridError;

/// Geometry of one simulation session: cell counts and on-screen cell size.
///
/// Every cell occupies `cell_size + 1` pixels per axis, the extra pixel being
/// the separator line, and one more pixel closes the last row/column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    width: u32,
    height: u32,
    cell_size: u32,
}

/// Pixel dimensions of a drawable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PixelSize {
    pub width: u32,
    pub height: u32,
}

/// A `(row, col)` position inside a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellIndex {
    pub row: u32,
    pub col: u32,
}

impl Grid {
    pub fn new(width: u32, height: u32, cell_size: u32) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::ZeroExtent { width, height });
        }
        if cell_size == 0 {
            return Err(GridError::ZeroCellSize);
        }
        let axis = |extent: u32| {
            cell_size
                .checked_add(1)
                .and_then(|pitch| pitch.checked_mul(extent))
                .and_then(|pixels| pixels.checked_add(1))
        };
        if axis(width).is_none() || axis(height).is_none() {
            return Err(GridError::TooLarge {
                width,
                height,
                cell_size,
            });
        }
        Ok(Self {
            width,
            height,
            cell_size,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn cell_size(&self) -> u32 {
        self.cell_size
    }

    /// Distance in pixels between the origins of two neighbouring cells.
    pub fn pitch(&self) -> u32 {
        self.cell_size + 1
    }

    pub fn cell_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// `(cell_size + 1) * extent + 1` on each axis.
    pub fn pixel_size(&self) -> PixelSize {
        PixelSize {
            width: self.pitch() * self.width + 1,
            height: self.pitch() * self.height + 1,
        }
    }

    /// Row-major index of a cell in a state buffer.
    pub fn index(&self, row: u32, col: u32) -> usize {
        row as usize * self.width as usize + col as usize
    }

    /// Top-left pixel of the fill rectangle of a cell (1px inset past the separator).
    pub fn cell_origin(&self, row: u32, col: u32) -> (u32, u32) {
        (col * self.pitch() + 1, row * self.pitch() + 1)
    }
}

/// Binary automaton cell state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum Cell {
    #[default]
    Dead = 0,
    Alive = 1,
}

impl Cell {
    pub fn toggle(&mut self) {
        *self = match *self {
            Cell::Alive => Cell::Dead,
            Cell::Dead => Cell::Alive,
        }
    }

    pub fn is_alive(self) -> bool {
        self == Cell::Alive
    }
}

/// Borrowed cell values, one per cell, row-major.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CellValues<'a> {
    Binary(&'a [Cell]),
    Continuous(&'a [f64]),
}

impl CellValues<'_> {
    pub fn len(&self) -> usize {
        match self {
            CellValues::Binary(cells) => cells.len(),
            CellValues::Continuous(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Read-only snapshot of an engine's state buffer.
///
/// `generation` increases with every mutating call on the engine, so two views
/// with equal generations describe the same buffer contents.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StateView<'a> {
    pub generation: u64,
    pub values: CellValues<'a>,
}

impl<'a> StateView<'a> {
    pub fn binary(generation: u64, cells: &'a [Cell]) -> Self {
        Self {
            generation,
            values: CellValues::Binary(cells),
        }
    }

    pub fn continuous(generation: u64, values: &'a [f64]) -> Self {
        Self {
            generation,
            values: CellValues::Continuous(values),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pixel_size_reserves_separator_lines() {
        let grid = Grid::new(3, 3, 5).unwrap();
        assert_eq!(grid.pixel_size(), PixelSize { width: 19, height: 19 });

        let grid = Grid::new(64, 10, 2).unwrap();
        assert_eq!(grid.pixel_size(), PixelSize { width: 193, height: 31 });
    }

    #[test]
    fn zero_dimensions_are_rejected() {
        assert_eq!(
            Grid::new(0, 4, 5),
            Err(GridError::ZeroExtent { width: 0, height: 4 })
        );
        assert_eq!(Grid::new(4, 4, 0), Err(GridError::ZeroCellSize));
    }

    #[test]
    fn pixel_sizes_past_u32_are_rejected() {
        assert_eq!(
            Grid::new(1, 1, u32::MAX),
            Err(GridError::TooLarge {
                width: 1,
                height: 1,
                cell_size: u32::MAX
            })
        );
        assert!(matches!(
            Grid::new(3, 3_000_000, 5000),
            Err(GridError::TooLarge { .. })
        ));

        // The largest extent that still fits: 2 * (2^31 - 1) + 1 == u32::MAX.
        let grid = Grid::new(i32::MAX as u32, 1, 1).unwrap();
        assert_eq!(grid.pixel_size().width, u32::MAX);
    }

    #[test]
    fn cell_origin_is_inset_past_separator() {
        let grid = Grid::new(4, 4, 5).unwrap();
        assert_eq!(grid.cell_origin(0, 0), (1, 1));
        assert_eq!(grid.cell_origin(2, 3), (19, 13));
        assert_eq!(grid.index(2, 3), 11);
    }

    #[test]
    fn toggle_flips_state() {
        let mut cell = Cell::Dead;
        cell.toggle();
        assert_eq!(cell, Cell::Alive);
        cell.toggle();
        assert_eq!(cell, Cell::Dead);
    }
}
