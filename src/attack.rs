//! Attack resolution and win detection.

use log::debug;

use crate::common::AttackOutcome;
use crate::coord::Position;
use crate::grid::{Cell, Grid};

/// Fire at `pos`, updating the cell and reporting what happened.
///
/// A repeat attack on a `DeadShip` or `Miss` cell leaves the grid unchanged.
pub fn attack(grid: &mut Grid, pos: Position) -> AttackOutcome {
    let before = grid.get(pos);
    let outcome = match before.attacked() {
        Some(after) => {
            grid.set(pos, after);
            if after == Cell::DeadShip {
                AttackOutcome::Hit
            } else {
                AttackOutcome::Miss
            }
        }
        None => AttackOutcome::AlreadyAttacked,
    };
    debug!("attack at {} on {:?} -> {:?}", pos, before, outcome);
    outcome
}

/// `true` once no `ActiveShip` cell is left.
pub fn is_defeated(grid: &Grid) -> bool {
    grid.rows().flatten().all(|&c| c != Cell::ActiveShip)
}

impl Grid {
    /// See [`attack`].
    pub fn attack(&mut self, pos: Position) -> AttackOutcome {
        attack(self, pos)
    }

    /// See [`is_defeated`].
    pub fn is_defeated(&self) -> bool {
        is_defeated(self)
    }
}
