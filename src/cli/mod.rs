//! Terminal presentation
//!
//! Board, scoreboard and result rendering plus the [`TerminalView`]
//! observer that prints them as a match is played.

#![cfg(feature = "std")]

pub mod interface;

pub use interface::*;
