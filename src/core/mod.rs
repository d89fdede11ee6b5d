//! Dots-and-Boxes rules engine (no_std compatible)
//!
//! Pure game logic with no I/O: the dot grid, box-capture detection, the
//! turn engine with its extra-turn rule, roster setup, and the computer
//! move policy. Needs only `alloc`, `rand` and the `log` facade.

pub mod ai;
pub mod capture;
pub mod common;
pub mod config;
pub mod game;
pub mod grid;
pub mod roster;

// Re-export commonly used types
pub use ai::{candidate_moves, completing_moves, compute_ai_move, dangerous_moves, safe_moves};
pub use capture::{detect_new_captures, sides_drawn};
pub use common::{ConfigError, GameError};
pub use config::*;
pub use game::{
    BoxOwner, CapturedBox, Color, Difficulty, Match, MatchObserver, MatchSnapshot, MatchStatus,
    MoveOutcome, Player, PlayerKind,
};
pub use grid::{BoxId, Grid, Line, LineSet, Orientation};
pub use roster::{MatchConfig, MatchSetup, PlayerSpec};
