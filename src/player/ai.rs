use crate::core::{ai, Difficulty, Line, Match};
use rand::rngs::SmallRng;

use super::PlayerController;

/// Computer seat that plays the AI policy at a fixed difficulty.
pub struct AiPlayer {
    difficulty: Difficulty,
}

impl AiPlayer {
    pub fn new(difficulty: Difficulty) -> Self {
        Self { difficulty }
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }
}

impl PlayerController for AiPlayer {
    fn select_line(&mut self, rng: &mut SmallRng, game: &Match) -> Option<Line> {
        match ai::compute_ai_move(game, self.difficulty, rng) {
            Ok(line) => Some(line),
            Err(e) => {
                log::error!("computer seat could not move: {}", e);
                None
            }
        }
    }
}
