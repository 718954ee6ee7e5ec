#![cfg(feature = "std")]

//! Console shell: prompts, board display, and the turn loop around [`GameSession`].

use std::io::{BufRead, Write};

use anyhow::{bail, Context};
use log::{info, warn};

use crate::{
    common::AttackOutcome,
    config::GameConfig,
    coord,
    game::{GameSession, Phase, Player},
    grid::Grid,
    render::render,
    snapshot::SnapshotSink,
};

pub const BOARD_SIZE_PROMPT: &str = "Enter board size : ";
pub const SHIP_SIZES_PROMPT: &str = "Enter comma-separated ship sizes: ";
pub const TURN_PROMPT: &str = "Enter the coordinate to attack: ";

const NEXT_TURN_BANNER: &str = "\n================== NEXT TURN ==================\n";
const GAME_OVER_BANNER: &str = "\n================== GAME OVER ==================\n";

pub fn ship_prompt(length: usize) -> String {
    format!("Enter {} comma-separated coordinates for a ship of length {}: ", length, length)
}

/// Line-oriented terminal over any reader/writer pair.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print `text` without a newline and read one answer line.
    ///
    /// Fails once input is exhausted so an abandoned game ends instead of spinning.
    pub fn prompt(&mut self, text: &str) -> anyhow::Result<String> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("failed to read from console")?;
        if read == 0 {
            bail!("input closed before the game finished");
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    pub fn say(&mut self, text: impl std::fmt::Display) -> anyhow::Result<()> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    pub fn show_board(&mut self, grid: &Grid, hide_ships: bool) -> anyhow::Result<()> {
        write!(self.output, "{}", render(grid, hide_ships))?;
        Ok(())
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

/// Ask for the board size and fleet until both answers are valid.
pub fn read_config<R: BufRead, W: Write>(console: &mut Console<R, W>) -> anyhow::Result<GameConfig> {
    let size = loop {
        let answer = console.prompt(BOARD_SIZE_PROMPT)?;
        match GameConfig::parse_board_size(&answer) {
            Ok(size) => break size,
            Err(e) => console.say(e)?,
        }
    };
    loop {
        let answer = console.prompt(SHIP_SIZES_PROMPT)?;
        match GameConfig::parse_ship_lengths(&answer, size) {
            Ok(config) => return Ok(config),
            Err(e) => console.say(e)?,
        }
    }
}

fn save_snapshot<S: SnapshotSink>(sink: &mut S, session: &GameSession, owner: Player) {
    let name = owner.snapshot_name();
    if let Err(e) = sink.save(name, &render(session.board(owner), false)) {
        warn!("could not save snapshot {}: {}", name, e);
    }
}

/// Run every placement for both players, re-prompting on each rejection.
pub fn setup_phase<R: BufRead, W: Write, S: SnapshotSink>(
    console: &mut Console<R, W>,
    session: &mut GameSession,
    sink: &mut S,
) -> anyhow::Result<()> {
    let mut announced = None;
    while let Some((player, length)) = session.pending_ship() {
        if announced != Some(player) {
            console.say(format!("{}, place your ships:", player))?;
            console.show_board(session.board(player), false)?;
            announced = Some(player);
        }
        let line = console.prompt(&ship_prompt(length))?;
        let tokens: Vec<&str> = line.split(',').collect();
        match session.place_ship(&tokens) {
            Ok(owner) => {
                console.show_board(session.board(owner), false)?;
                save_snapshot(sink, session, owner);
            }
            Err(e) => console.say(e)?,
        }
    }
    Ok(())
}

/// One consuming attack by the current attacker. Returns the winner if it ended the game.
pub fn turn_phase<R: BufRead, W: Write, S: SnapshotSink>(
    console: &mut Console<R, W>,
    session: &mut GameSession,
    sink: &mut S,
) -> anyhow::Result<Option<Player>> {
    let attacker = match session.phase() {
        Phase::Playing { attacker } => attacker,
        phase => bail!("no turn to play in phase {:?}", phase),
    };
    console.say(format!("{}'s turn:", attacker))?;
    console.show_board(session.board(attacker.opponent()), true)?;
    loop {
        let line = console.prompt(TURN_PROMPT)?;
        let target = match coord::parse(&line, session.board_size()) {
            Ok(pos) => pos,
            Err(e) => {
                console.say(e)?;
                continue;
            }
        };
        let report = session.attack(target)?;
        console.say(report.outcome)?;
        if report.outcome == AttackOutcome::AlreadyAttacked {
            continue;
        }
        save_snapshot(sink, session, report.defender);
        return Ok(report.winner);
    }
}

/// Play a whole game from the startup prompts to the winner announcement.
pub fn run_game<R: BufRead, W: Write, S: SnapshotSink>(
    console: &mut Console<R, W>,
    sink: &mut S,
) -> anyhow::Result<Player> {
    let config = read_config(console)?;
    info!(
        "starting {0}x{0} game with ships {1:?}",
        config.board_size, config.ship_lengths
    );
    let mut session = GameSession::new(config);
    setup_phase(console, &mut session, sink)?;
    loop {
        if let Some(winner) = turn_phase(console, &mut session, sink)? {
            console.say(GAME_OVER_BANNER)?;
            console.say(format!("{} wins!", winner))?;
            return Ok(winner);
        }
        console.say(NEXT_TURN_BANNER)?;
    }
}
