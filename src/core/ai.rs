// Move selection for computer seats. One-ply only: the hard tier takes any
// box on offer and otherwise avoids creating a three-sided box, without
// looking further ahead at chains.

use alloc::vec::Vec;
use rand::Rng;

use crate::core::{
    capture::{completes_box, leaves_three_sided},
    common::GameError,
    game::{Difficulty, Match},
    grid::Line,
};

/// Every undrawn line.
pub fn available_moves(game: &Match) -> Vec<Line> {
    game.available_lines().collect()
}

/// Undrawn lines that would enclose at least one box.
pub fn completing_moves(game: &Match) -> Vec<Line> {
    let (grid, drawn) = (game.grid(), game.drawn_lines());
    game.available_lines()
        .filter(|l| completes_box(grid, drawn, *l))
        .collect()
}

/// Undrawn lines that would leave an open box with exactly three sides.
pub fn dangerous_moves(game: &Match) -> Vec<Line> {
    let (grid, drawn) = (game.grid(), game.drawn_lines());
    game.available_lines()
        .filter(|l| leaves_three_sided(grid, drawn, *l))
        .collect()
}

/// Undrawn lines that are not dangerous.
pub fn safe_moves(game: &Match) -> Vec<Line> {
    let (grid, drawn) = (game.grid(), game.drawn_lines());
    game.available_lines()
        .filter(|l| !leaves_three_sided(grid, drawn, *l))
        .collect()
}

/// The set a computer seat at `difficulty` picks from uniformly.
pub fn candidate_moves(game: &Match, difficulty: Difficulty) -> Vec<Line> {
    match difficulty {
        Difficulty::Easy => available_moves(game),
        Difficulty::Medium => {
            let completing = completing_moves(game);
            if completing.is_empty() {
                available_moves(game)
            } else {
                completing
            }
        }
        Difficulty::Hard => {
            let completing = completing_moves(game);
            if !completing.is_empty() {
                return completing;
            }
            let safe = safe_moves(game);
            if !safe.is_empty() {
                return safe;
            }
            available_moves(game)
        }
    }
}

/// Pick one line for the current computer seat.
///
/// Ties inside the candidate set are broken with `rng`, so callers should
/// only rely on the result being a member of [`candidate_moves`].
pub fn compute_ai_move<R: Rng + ?Sized>(
    game: &Match,
    difficulty: Difficulty,
    rng: &mut R,
) -> Result<Line, GameError> {
    let candidates = candidate_moves(game, difficulty);
    if candidates.is_empty() {
        return Err(GameError::NoLegalMove);
    }
    let line = candidates[rng.random_range(0..candidates.len())];
    log::debug!(
        "{} ai picked {} from {} candidate(s)",
        difficulty,
        line,
        candidates.len()
    );
    Ok(line)
}
