//! Move sources for match seats
//!
//! One [`PlayerController`] drives each seat of a match:
//! - AiPlayer: computer seat backed by the AI policy
//! - CliPlayer: human seat typing lines on a terminal

use crate::core::{GameError, Line, Match, MoveOutcome};
use rand::rngs::SmallRng;

/// Interface implemented by every kind of seat.
///
/// The runner only asks the controller whose seat is on turn, and only
/// while the match is being played.
pub trait PlayerController: Send {
    /// Choose the next line to draw. `None` abandons the match (no legal move
    /// left, or the human closed their input).
    fn select_line(&mut self, rng: &mut SmallRng, game: &Match) -> Option<Line>;

    /// Inform the controller of an accepted move, its own or anyone else's.
    fn handle_move_result(&mut self, _outcome: &MoveOutcome) {}

    /// Inform the controller that its last line was refused.
    fn handle_rejected_move(&mut self, _line: Line, _err: &GameError) {}
}

pub mod ai;
pub use ai::AiPlayer;

#[cfg(feature = "std")]
pub mod cli;
#[cfg(feature = "std")]
pub use cli::{parse_line, CliPlayer};
