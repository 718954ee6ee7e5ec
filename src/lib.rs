#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod attack;
mod common;
mod config;
mod coord;
mod game;
mod grid;
mod render;
mod ship;
#[cfg(feature = "std")]
mod logging;
#[cfg(feature = "std")]
pub mod console;
#[cfg(feature = "std")]
pub mod snapshot;

pub use attack::{attack, is_defeated};
pub use common::*;
pub use config::*;
pub use coord::{column_letter, parse as parse_coord, Position};
pub use game::*;
pub use grid::{Cell, Grid};
pub use render::render;
pub use ship::{place as place_ship, Orientation, Ship};
#[cfg(feature = "std")]
pub use logging::{init_logging, level_from};
#[cfg(feature = "std")]
pub use console::{run_game, Console};
#[cfg(feature = "std")]
pub use snapshot::{DirectorySink, MemorySink, NullSink, SnapshotSink};
