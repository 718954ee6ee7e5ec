//! One player's board: an `N×N` matrix of [`Cell`] states.

use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use crate::config::{ACTIVE_SHIP_GLYPH, DEAD_SHIP_GLYPH, EMPTY_GLYPH, MISS_GLYPH};
use crate::coord::Position;

/// State of a single square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cell {
    #[default]
    Empty,
    ActiveShip,
    DeadShip,
    Miss,
}

impl Cell {
    /// State after an attack lands here, or `None` if the cell was already attacked.
    pub fn attacked(self) -> Option<Cell> {
        match self {
            Cell::ActiveShip => Some(Cell::DeadShip),
            Cell::Empty => Some(Cell::Miss),
            Cell::DeadShip | Cell::Miss => None,
        }
    }

    pub fn glyph(self) -> char {
        match self {
            Cell::Empty => EMPTY_GLYPH,
            Cell::ActiveShip => ACTIVE_SHIP_GLYPH,
            Cell::DeadShip => DEAD_SHIP_GLYPH,
            Cell::Miss => MISS_GLYPH,
        }
    }
}

/// Square grid stored row-major.
#[derive(Clone, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a `size×size` grid with every cell `Empty`.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![Cell::Empty; size * size],
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.col < self.size && pos.row < self.size
    }

    /// Cell at `pos`.
    ///
    /// # Panics
    /// If `pos` is off the board. Positions reaching the grid come from the
    /// coordinate parser, which already rejects those.
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[self.index(pos)]
    }

    /// Overwrite the cell at `pos`. Panics like [`Grid::get`].
    pub fn set(&mut self, pos: Position, cell: Cell) {
        let idx = self.index(pos);
        self.cells[idx] = cell;
    }

    /// Iterate rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks(self.size.max(1))
    }

    /// Number of cells currently in `state`.
    pub fn count(&self, state: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == state).count()
    }

    fn index(&self, pos: Position) -> usize {
        assert!(
            self.contains(pos),
            "position ({}, {}) is outside a {}x{} grid",
            pos.col,
            pos.row,
            self.size,
            self.size
        );
        pos.row * self.size + pos.col
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Grid {{ size: {} }}", self.size)?;
        for row in self.rows() {
            for cell in row {
                write!(f, "{}", cell.glyph())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
