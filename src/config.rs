//! Game constants and the two startup answers (board size, fleet).

use alloc::vec::Vec;

use crate::common::SetupError;

/// Smallest playable board.
pub const MIN_BOARD_SIZE: usize = 1;
/// Rows are addressed by a single digit, so nine is the largest board.
pub const MAX_BOARD_SIZE: usize = 9;

pub const EMPTY_GLYPH: char = '~';
pub const ACTIVE_SHIP_GLYPH: char = 'O';
pub const DEAD_SHIP_GLYPH: char = 'X';
pub const MISS_GLYPH: char = '*';

/// Placed between cell glyphs when a row is rendered.
pub const ROW_SEPARATOR: &str = " ";

/// Default directory for per-turn board snapshots.
pub const SNAPSHOT_DIR: &str = "gameplay";
pub const PLAYER_ONE_SNAPSHOT: &str = "player_one_board.txt";
pub const PLAYER_TWO_SNAPSHOT: &str = "player_two_board.txt";

/// Board size plus the ordered list of ship lengths each player must place.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameConfig {
    pub board_size: usize,
    pub ship_lengths: Vec<usize>,
}

impl GameConfig {
    /// Build a config, checking the same rules as the startup prompts.
    pub fn new(board_size: usize, ship_lengths: Vec<usize>) -> Result<Self, SetupError> {
        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&board_size) {
            return Err(SetupError::BoardSize);
        }
        if ship_lengths.is_empty() {
            return Err(SetupError::NoShips);
        }
        if ship_lengths
            .iter()
            .any(|&len| len == 0 || len > board_size)
        {
            return Err(SetupError::ShipLength);
        }
        let total: usize = ship_lengths.iter().sum();
        if total > board_size * board_size {
            return Err(SetupError::FleetTooLarge);
        }
        Ok(Self {
            board_size,
            ship_lengths,
        })
    }

    /// Parse the answer to the board size prompt.
    pub fn parse_board_size(input: &str) -> Result<usize, SetupError> {
        let size: usize = input.trim().parse().map_err(|_| SetupError::BadNumber)?;
        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size) {
            return Err(SetupError::BoardSize);
        }
        Ok(size)
    }

    /// Parse the comma-separated fleet answer against an already chosen board size.
    pub fn parse_ship_lengths(input: &str, board_size: usize) -> Result<Self, SetupError> {
        if input.trim().is_empty() {
            return Err(SetupError::NoShips);
        }
        let lengths = input
            .split(',')
            .map(|part| part.trim().parse::<usize>().map_err(|_| SetupError::BadNumber))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(board_size, lengths)
    }

    /// Number of cells the whole fleet occupies on one board.
    pub fn fleet_cells(&self) -> usize {
        self.ship_lengths.iter().sum()
    }
}
