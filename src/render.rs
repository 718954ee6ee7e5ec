//! Text rendering shared by the console display and board snapshots.

use alloc::string::String;
use core::fmt::{self, Write};

use crate::config::ROW_SEPARATOR;
use crate::coord::column_letter;
use crate::grid::{Cell, Grid};

/// Render `grid` as a column-letter header followed by numbered rows.
///
/// With `hide_ships` set, undamaged ship cells are drawn as open water so the
/// result can be shown to the opponent.
pub fn render(grid: &Grid, hide_ships: bool) -> String {
    let mut out = String::new();
    // writing into a String cannot fail
    let _ = write_grid(&mut out, grid, hide_ships);
    out
}

fn write_grid<W: Write>(out: &mut W, grid: &Grid, hide_ships: bool) -> fmt::Result {
    write!(out, "  ")?;
    for col in 0..grid.size() {
        write!(out, " {}", column_letter(col))?;
    }
    writeln!(out)?;
    for (r, row) in grid.rows().enumerate() {
        write!(out, "{:>2} ", r + 1)?;
        for (c, &cell) in row.iter().enumerate() {
            let shown = if hide_ships && cell == Cell::ActiveShip {
                Cell::Empty
            } else {
                cell
            };
            if c > 0 {
                out.write_str(ROW_SEPARATOR)?;
            }
            out.write_char(shown.glyph())?;
        }
        writeln!(out)?;
    }
    Ok(())
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_grid(f, self, false)
    }
}
