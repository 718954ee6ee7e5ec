//! Outcome and error kinds shared by the core and the console shell.
//!
//! Every kind is recoverable: the shell prints the `Display` text and asks
//! again. Nothing here is fatal to the process.

use core::fmt;

/// Result of attacking one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttackOutcome {
    /// An active ship segment was destroyed.
    Hit,
    /// Open water; the cell is now marked as a miss.
    Miss,
    /// The cell was attacked before. Nothing changed and the turn continues.
    AlreadyAttacked,
}

impl AttackOutcome {
    /// `Hit` and `Miss` end the attacker's turn; `AlreadyAttacked` does not.
    pub fn is_consuming(self) -> bool {
        !matches!(self, AttackOutcome::AlreadyAttacked)
    }
}

impl fmt::Display for AttackOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttackOutcome::Hit => write!(f, "Hit!"),
            AttackOutcome::Miss => write!(f, "Miss!"),
            AttackOutcome::AlreadyAttacked => write!(f, "Position already attacked."),
        }
    }
}

/// Errors from parsing a single coordinate such as `B3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoordError {
    /// Input is not exactly two characters after trimming.
    BadLength,
    /// First character is not a column letter on this board.
    BadColumn,
    /// Second character is not a row digit on this board.
    BadRow,
}

impl fmt::Display for CoordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoordError::BadLength => write!(f, "Invalid coordinate length. Use a letter and a digit, e.g. B3."),
            CoordError::BadColumn => write!(f, "Invalid coordinate letter. It must name a column on the board."),
            CoordError::BadRow => write!(f, "Invalid coordinate number. It must name a row on the board."),
        }
    }
}

/// Errors from placing one ship. The board is untouched whenever one is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementError {
    /// Number of coordinates differs from the ship length.
    WrongCount,
    /// One of the coordinates failed to parse.
    BadCoordinate(CoordError),
    /// Coordinates span more than one row and more than one column.
    BendyShip,
    /// Coordinates leave a gap or repeat a cell.
    Disconnected,
    /// A target cell already holds a ship.
    Overlap,
}

impl From<CoordError> for PlacementError {
    fn from(err: CoordError) -> Self {
        PlacementError::BadCoordinate(err)
    }
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlacementError::WrongCount => write!(f, "Wrong number of coordinates for this ship."),
            PlacementError::BadCoordinate(e) => write!(f, "{}", e),
            PlacementError::BendyShip => write!(f, "Ships must be placed in a straight line."),
            PlacementError::Disconnected => write!(f, "Ship coordinates must be connected with no gaps."),
            PlacementError::Overlap => write!(f, "Ships cannot overlap."),
        }
    }
}

/// Errors from the two startup prompts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupError {
    /// Answer is not a whole number (or list of them).
    BadNumber,
    /// Board size outside the supported range.
    BoardSize,
    /// Fleet list was empty.
    NoShips,
    /// A ship is zero-length or longer than the board.
    ShipLength,
    /// The fleet has more cells than the board.
    FleetTooLarge,
}

impl fmt::Display for SetupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SetupError::BadNumber => write!(f, "Please enter whole numbers only."),
            SetupError::BoardSize => write!(
                f,
                "Board size must be between {} and {}.",
                crate::config::MIN_BOARD_SIZE,
                crate::config::MAX_BOARD_SIZE
            ),
            SetupError::NoShips => write!(f, "Enter at least one ship size."),
            SetupError::ShipLength => write!(f, "Each ship must be at least 1 and at most the board size long."),
            SetupError::FleetTooLarge => write!(f, "The fleet does not fit on the board."),
        }
    }
}

/// Errors from driving a [`GameSession`](crate::GameSession) out of order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// A ship was placed after setup finished.
    NotInSetup,
    /// An attack was made during setup or after the game ended.
    NotPlaying,
    /// The ship placement itself was rejected.
    Placement(PlacementError),
}

impl From<PlacementError> for GameError {
    fn from(err: PlacementError) -> Self {
        GameError::Placement(err)
    }
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::NotInSetup => write!(f, "All ships have already been placed"),
            GameError::NotPlaying => write!(f, "No attacks are allowed in this phase"),
            GameError::Placement(e) => write!(f, "{}", e),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for CoordError {}
#[cfg(feature = "std")]
impl std::error::Error for PlacementError {}
#[cfg(feature = "std")]
impl std::error::Error for SetupError {}
#[cfg(feature = "std")]
impl std::error::Error for GameError {}
