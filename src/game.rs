//! Two-player session: setup, alternating turns, and the winner.

use core::fmt;
use log::info;

use crate::attack;
use crate::common::{AttackOutcome, GameError};
use crate::config::{GameConfig, PLAYER_ONE_SNAPSHOT, PLAYER_TWO_SNAPSHOT};
use crate::coord::Position;
use crate::grid::Grid;
use crate::ship::Ship;

/// One of the two seats at the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    One,
    Two,
}

impl Player {
    pub fn opponent(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// File name used for snapshots of this player's board.
    pub fn snapshot_name(self) -> &'static str {
        match self {
            Player::One => PLAYER_ONE_SNAPSHOT,
            Player::Two => PLAYER_TWO_SNAPSHOT,
        }
    }

    fn index(self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::One => write!(f, "Player 1"),
            Player::Two => write!(f, "Player 2"),
        }
    }
}

/// Where the session is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// `player` is placing ship number `ship` (index into the fleet list).
    Setup { player: Player, ship: usize },
    /// `attacker` fires next at the other player's board.
    Playing { attacker: Player },
    /// Terminal.
    GameOver { winner: Player },
}

/// What a single attack did to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnReport {
    pub attacker: Player,
    pub defender: Player,
    pub target: Position,
    pub outcome: AttackOutcome,
    /// Set when this attack sank the defender's last ship.
    pub winner: Option<Player>,
}

/// Both boards plus the fleet both players must place.
#[derive(Debug, Clone)]
pub struct GameSession {
    config: GameConfig,
    boards: [Grid; 2],
    phase: Phase,
}

impl GameSession {
    pub fn new(config: GameConfig) -> Self {
        let boards = [Grid::new(config.board_size), Grid::new(config.board_size)];
        Self {
            config,
            boards,
            phase: Phase::Setup {
                player: Player::One,
                ship: 0,
            },
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn board_size(&self) -> usize {
        self.config.board_size
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Board owned by `player`.
    pub fn board(&self, player: Player) -> &Grid {
        &self.boards[player.index()]
    }

    /// Who places next and the length they must place, while in setup.
    pub fn pending_ship(&self) -> Option<(Player, usize)> {
        match self.phase {
            Phase::Setup { player, ship } => Some((player, self.config.ship_lengths[ship])),
            _ => None,
        }
    }

    /// Place the next required ship for the player currently in setup.
    ///
    /// Returns whose board changed. A rejected placement leaves the session
    /// untouched so the same ship can be retried.
    pub fn place_ship<S: AsRef<str>>(&mut self, tokens: &[S]) -> Result<Player, GameError> {
        let (player, ship) = match self.phase {
            Phase::Setup { player, ship } => (player, ship),
            _ => return Err(GameError::NotInSetup),
        };
        let length = self.config.ship_lengths[ship];
        let board = &mut self.boards[player.index()];
        Ship::plan(board, length, tokens)?.commit(board);

        self.phase = if ship + 1 < self.config.ship_lengths.len() {
            Phase::Setup {
                player,
                ship: ship + 1,
            }
        } else if player == Player::One {
            info!("{} has placed every ship", player);
            Phase::Setup {
                player: Player::Two,
                ship: 0,
            }
        } else {
            info!("setup complete, {} attacks first", Player::One);
            Phase::Playing {
                attacker: Player::One,
            }
        };
        Ok(player)
    }

    /// Current attacker fires at `target` on the opponent's board.
    ///
    /// `Hit` and `Miss` pass the turn unless the shot wins the game;
    /// `AlreadyAttacked` keeps the same attacker.
    pub fn attack(&mut self, target: Position) -> Result<TurnReport, GameError> {
        let attacker = match self.phase {
            Phase::Playing { attacker } => attacker,
            _ => return Err(GameError::NotPlaying),
        };
        let defender = attacker.opponent();
        let board = &mut self.boards[defender.index()];
        let outcome = attack::attack(board, target);

        let mut winner = None;
        if outcome.is_consuming() {
            if attack::is_defeated(board) {
                info!("{} sank the last ship of {}", attacker, defender);
                winner = Some(attacker);
                self.phase = Phase::GameOver { winner: attacker };
            } else {
                self.phase = Phase::Playing { attacker: defender };
            }
        }

        Ok(TurnReport {
            attacker,
            defender,
            target,
            outcome,
            winner,
        })
    }

    /// Winner, once the game is over.
    pub fn winner(&self) -> Option<Player> {
        match self.phase {
            Phase::GameOver { winner } => Some(winner),
            _ => None,
        }
    }
}
