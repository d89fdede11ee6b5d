//! Match configuration and the setup-screen roster rules.

use alloc::format;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::core::{
    common::{ConfigError, GameError},
    config::{
        default_initial, DEFAULT_COLS, DEFAULT_ROWS, MAX_COMPUTERS, MAX_DIMENSION, MAX_HUMANS,
        MAX_INITIAL_LEN, MIN_DIMENSION,
    },
    game::{Color, Difficulty, PlayerKind},
};

/// One seat as handed over by setup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerSpec {
    pub name: String,
    pub initial: String,
    /// `None` picks an evenly spread hue for the seat.
    pub color: Option<Color>,
    pub kind: PlayerKind,
}

impl PlayerSpec {
    pub fn human(name: impl Into<String>, initial: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            initial: initial.into(),
            color: None,
            kind: PlayerKind::Human,
        }
    }

    pub fn computer(name: impl Into<String>, initial: impl Into<String>, difficulty: Difficulty) -> Self {
        Self {
            name: name.into(),
            initial: initial.into(),
            color: None,
            kind: PlayerKind::Computer(difficulty),
        }
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }
}

/// Finalized grid and roster. Seat order is turn order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchConfig {
    pub rows: usize,
    pub cols: usize,
    pub players: Vec<PlayerSpec>,
}

impl MatchConfig {
    pub fn new(rows: usize, cols: usize, players: Vec<PlayerSpec>) -> Self {
        Self { rows, cols, players }
    }

    /// Check the minimum constraints a match needs.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows < MIN_DIMENSION || self.cols < MIN_DIMENSION {
            return Err(ConfigError::GridTooSmall { rows: self.rows, cols: self.cols });
        }
        if self.rows > MAX_DIMENSION || self.cols > MAX_DIMENSION {
            return Err(ConfigError::GridTooLarge {
                rows: self.rows,
                cols: self.cols,
                max: MAX_DIMENSION,
            });
        }
        if self.players.is_empty() {
            return Err(ConfigError::NoPlayers);
        }
        for (i, p) in self.players.iter().enumerate() {
            if p.name.trim().is_empty() {
                return Err(ConfigError::EmptyName(i));
            }
            if p.initial.trim().is_empty() {
                return Err(ConfigError::EmptyInitial(i));
            }
            if p.initial.trim().chars().count() > MAX_INITIAL_LEN {
                return Err(ConfigError::InitialTooLong { index: i, max: MAX_INITIAL_LEN });
            }
        }
        Ok(())
    }
}

/// Setup-screen inputs: humans first, then computers sharing one difficulty.
///
/// Blank human names and initials fall back to `Player N` and `A`, `B`, ...
/// Computers are always `Com N` / `CN`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchSetup {
    rows: usize,
    cols: usize,
    humans: Vec<(String, String)>,
    computers: usize,
    difficulty: Difficulty,
}

impl Default for MatchSetup {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            humans: Vec::new(),
            computers: 0,
            difficulty: Difficulty::Easy,
        }
    }
}

impl MatchSetup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn grid(mut self, rows: usize, cols: usize) -> Self {
        self.rows = rows;
        self.cols = cols;
        self
    }

    /// Add a human seat. Empty strings take the defaults for that seat.
    pub fn human(mut self, name: impl Into<String>, initial: impl Into<String>) -> Self {
        self.humans.push((name.into(), initial.into()));
        self
    }

    /// Add `count` humans with default names.
    pub fn humans(mut self, count: usize) -> Self {
        for _ in 0..count {
            self.humans.push((String::new(), String::new()));
        }
        self
    }

    pub fn computers(mut self, count: usize, difficulty: Difficulty) -> Self {
        self.computers = count;
        self.difficulty = difficulty;
        self
    }

    /// Produce the finalized configuration.
    pub fn build(self) -> Result<MatchConfig, GameError> {
        if self.humans.len() > MAX_HUMANS {
            return Err(ConfigError::TooManyHumans { requested: self.humans.len(), max: MAX_HUMANS }.into());
        }
        if self.computers > MAX_COMPUTERS {
            return Err(ConfigError::TooManyComputers { requested: self.computers, max: MAX_COMPUTERS }.into());
        }

        let total = self.humans.len() + self.computers;
        let mut players = Vec::with_capacity(total);
        for (i, (name, initial)) in self.humans.into_iter().enumerate() {
            let name = if name.trim().is_empty() { format!("Player {}", i + 1) } else { name };
            let initial = if initial.trim().is_empty() {
                default_initial(i).to_string()
            } else {
                initial
            };
            let seat = players.len();
            players.push(PlayerSpec::human(name, initial).with_color(Color::spread(seat, total)));
        }
        for i in 0..self.computers {
            let seat = players.len();
            players.push(
                PlayerSpec::computer(format!("Com {}", i + 1), format!("C{}", i + 1), self.difficulty)
                    .with_color(Color::spread(seat, total)),
            );
        }

        let config = MatchConfig::new(self.rows, self.cols, players);
        config.validate()?;
        Ok(config)
    }
}
