//! Commonly used types and utilities for ease of import.

pub use crate::{
    compute_ai_move, AiPlayer, Difficulty, GameError, Grid, Line, Match, MatchConfig,
    MatchObserver, MatchSetup, MoveOutcome, PlayerController,
};

#[cfg(feature = "std")]
pub use crate::{print_board, print_scoreboard, print_summary, CliPlayer, MatchRunner, TerminalView};
