#![cfg(feature = "std")]

use std::time::Duration;

use rand::rngs::SmallRng;

use crate::{
    core::{ConfigError, GameError, Match, MatchObserver, MoveOutcome},
    player::PlayerController,
};

/// Drives one match to completion.
///
/// Exactly one move is in flight at a time: the runner asks the seat on turn
/// for a line, applies it, then tells every controller and observer what
/// happened. Computer seats wait `ai_delay` before choosing.
pub struct MatchRunner {
    game: Match,
    controllers: Vec<Box<dyn PlayerController>>,
    observers: Vec<Box<dyn MatchObserver>>,
    ai_delay: Duration,
    moves: usize,
}

impl MatchRunner {
    /// Pair `game` with one controller per seat, in seat order.
    pub fn new(game: Match, controllers: Vec<Box<dyn PlayerController>>) -> Result<Self, GameError> {
        if controllers.len() != game.players().len() {
            return Err(ConfigError::ControllerCountMismatch {
                players: game.players().len(),
                controllers: controllers.len(),
            }
            .into());
        }
        Ok(Self {
            game,
            controllers,
            observers: Vec::new(),
            ai_delay: Duration::ZERO,
            moves: 0,
        })
    }

    /// Settling pause before each computer move.
    pub fn with_ai_delay(mut self, delay: Duration) -> Self {
        self.ai_delay = delay;
        self
    }

    /// Register an observer for every accepted move.
    pub fn subscribe(&mut self, observer: Box<dyn MatchObserver>) {
        self.observers.push(observer);
    }

    pub fn game(&self) -> &Match {
        &self.game
    }

    pub fn into_game(self) -> Match {
        self.game
    }

    /// Number of accepted moves so far.
    pub fn move_count(&self) -> usize {
        self.moves
    }

    /// Play until every box is captured.
    ///
    /// Rejected human moves are reported back to that seat and it is asked
    /// again. A computer seat producing an illegal line, or any seat giving
    /// up, ends the run with an error and leaves the match as it stood.
    pub async fn run(&mut self, rng: &mut SmallRng) -> anyhow::Result<()> {
        while !self.game.is_over() {
            let seat = self.game.current_turn();
            let is_computer = self.game.current_player().is_computer();
            if is_computer && !self.ai_delay.is_zero() {
                tokio::time::sleep(self.ai_delay).await;
            }

            let Some(line) = self.controllers[seat].select_line(rng, &self.game) else {
                if is_computer {
                    return Err(GameError::NoLegalMove.into());
                }
                return Err(anyhow::anyhow!(
                    "{} left the match",
                    self.game.current_player().name()
                ));
            };

            match self.game.apply_move_as(seat, line) {
                Ok(outcome) => self.publish(&outcome),
                Err(e) if e.is_illegal_move() && !is_computer => {
                    log::warn!("rejected move {} from seat {}: {}", line, seat, e);
                    self.controllers[seat].handle_rejected_move(line, &e);
                }
                Err(e) => return Err(e.into()),
            }
        }
        Ok(())
    }

    fn publish(&mut self, outcome: &MoveOutcome) {
        self.moves += 1;
        for controller in self.controllers.iter_mut() {
            controller.handle_move_result(outcome);
        }
        for observer in self.observers.iter_mut() {
            observer.on_state_changed(&self.game, outcome);
        }
        if outcome.finished {
            for observer in self.observers.iter_mut() {
                observer.on_match_finished(&self.game);
            }
        }
    }
}
