#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub mod core;
pub mod player;
#[cfg(feature = "std")]
pub mod cli;
#[cfg(feature = "std")]
mod logging;
#[cfg(feature = "std")]
pub mod runner;
pub mod prelude;

pub use crate::core::*;
pub use player::{AiPlayer, PlayerController};
#[cfg(feature = "std")]
pub use player::{parse_line, CliPlayer};
#[cfg(feature = "std")]
pub use cli::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, init_logging_with};
#[cfg(feature = "std")]
pub use runner::MatchRunner;
