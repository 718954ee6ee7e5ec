//! Ship placement: validating a list of coordinates and committing it to a grid.

use alloc::vec::Vec;
use log::debug;

use crate::common::PlacementError;
use crate::coord::{self, Position};
use crate::grid::{Cell, Grid};

/// Direction a ship runs in. A single-cell ship is reported as horizontal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// A straight, gapless run of cells that fits on a particular grid.
///
/// Only [`Ship::plan`] builds one, so holding a `Ship` means every check
/// except the final commit has already passed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ship {
    orientation: Orientation,
    cells: Vec<Position>,
}

impl Ship {
    /// Validate `tokens` as a ship of `length` on `grid` without touching it.
    ///
    /// Checks run in order and stop at the first failure: coordinate count,
    /// each coordinate, straightness, contiguity, then overlap.
    pub fn plan<S: AsRef<str>>(
        grid: &Grid,
        length: usize,
        tokens: &[S],
    ) -> Result<Self, PlacementError> {
        if length == 0 || tokens.len() != length {
            return Err(PlacementError::WrongCount);
        }

        let mut cells = tokens
            .iter()
            .map(|t| coord::parse(t.as_ref(), grid.size()))
            .collect::<Result<Vec<_>, _>>()?;

        let first = cells[0];
        let same_row = cells.iter().all(|p| p.row == first.row);
        let same_col = cells.iter().all(|p| p.col == first.col);
        let orientation = match (same_row, same_col) {
            (true, _) => Orientation::Horizontal,
            (false, true) => Orientation::Vertical,
            (false, false) => return Err(PlacementError::BendyShip),
        };

        let along = |p: &Position| match orientation {
            Orientation::Horizontal => p.col,
            Orientation::Vertical => p.row,
        };
        cells.sort_by_key(|p| along(p));
        // consecutive steps of exactly one rule out both gaps and repeats
        if cells.windows(2).any(|w| along(&w[1]) != along(&w[0]) + 1) {
            return Err(PlacementError::Disconnected);
        }

        if cells.iter().any(|&p| grid.get(p) != Cell::Empty) {
            return Err(PlacementError::Overlap);
        }

        Ok(Ship { orientation, cells })
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Occupied cells, sorted along the ship.
    pub fn cells(&self) -> &[Position] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Mark every cell as `ActiveShip` on the grid this ship was planned against.
    pub(crate) fn commit(self, grid: &mut Grid) {
        debug!(
            "placing {:?} ship of length {} from {}",
            self.orientation,
            self.cells.len(),
            self.cells[0]
        );
        for pos in self.cells {
            grid.set(pos, Cell::ActiveShip);
        }
    }
}

/// Validate and place one ship on `grid`.
///
/// On error the grid is left exactly as it was.
pub fn place<S: AsRef<str>>(
    grid: &mut Grid,
    length: usize,
    tokens: &[S],
) -> Result<(), PlacementError> {
    let ship = Ship::plan(grid, length, tokens)?;
    ship.commit(grid);
    Ok(())
}
