//! Error types shared by the grid, the turn engine and the AI.

use crate::core::grid::Line;

/// Reasons a match configuration is refused before a [`Match`](crate::core::game::Match)
/// is ever built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Fewer than two dots along an axis, so no box can exist.
    GridTooSmall { rows: usize, cols: usize },
    /// More dots along an axis than a board can show.
    GridTooLarge { rows: usize, cols: usize, max: usize },
    /// The roster is empty.
    NoPlayers,
    /// More human seats than the setup allows.
    TooManyHumans { requested: usize, max: usize },
    /// More computer seats than the setup allows.
    TooManyComputers { requested: usize, max: usize },
    /// Seat at this index has a blank display name.
    EmptyName(usize),
    /// Seat at this index has a blank initial.
    EmptyInitial(usize),
    /// Seat at this index has an initial too wide for a box cell.
    InitialTooLong { index: usize, max: usize },
    /// A runner was handed a different number of move sources than seats.
    ControllerCountMismatch { players: usize, controllers: usize },
}

/// Errors returned by match operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Line has already been drawn.
    LineAlreadyDrawn(Line),
    /// Line does not exist on this grid.
    LineOutOfBounds(Line),
    /// Every box is captured; no further moves are accepted.
    MatchOver,
    /// A seat tried to move out of turn.
    NotYourTurn { expected: usize, actual: usize },
    /// Grid or roster violates the minimum constraints.
    InvalidConfiguration(ConfigError),
    /// Asked for a move with no undrawn line left.
    NoLegalMove,
}

impl GameError {
    /// `true` for the rejections that leave the match untouched and playable.
    pub fn is_illegal_move(&self) -> bool {
        matches!(
            self,
            GameError::LineAlreadyDrawn(_)
                | GameError::LineOutOfBounds(_)
                | GameError::MatchOver
                | GameError::NotYourTurn { .. }
        )
    }
}

impl From<ConfigError> for GameError {
    fn from(err: ConfigError) -> Self {
        GameError::InvalidConfiguration(err)
    }
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::GridTooSmall { rows, cols } => {
                write!(f, "grid {}x{} is too small, need at least 2x2 dots", rows, cols)
            }
            ConfigError::GridTooLarge { rows, cols, max } => {
                write!(f, "grid {}x{} is too large, at most {}x{} dots", rows, cols, max, max)
            }
            ConfigError::NoPlayers => write!(f, "at least one player is required"),
            ConfigError::TooManyHumans { requested, max } => {
                write!(f, "{} human players requested, at most {} allowed", requested, max)
            }
            ConfigError::TooManyComputers { requested, max } => {
                write!(f, "{} computer players requested, at most {} allowed", requested, max)
            }
            ConfigError::EmptyName(i) => write!(f, "player {} has an empty name", i),
            ConfigError::EmptyInitial(i) => write!(f, "player {} has an empty initial", i),
            ConfigError::InitialTooLong { index, max } => {
                write!(f, "player {} has an initial longer than {} characters", index, max)
            }
            ConfigError::ControllerCountMismatch { players, controllers } => write!(
                f,
                "{} players but {} move sources were supplied",
                players, controllers
            ),
        }
    }
}

impl core::fmt::Display for GameError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            GameError::LineAlreadyDrawn(line) => write!(f, "line {} is already drawn", line),
            GameError::LineOutOfBounds(line) => write!(f, "line {} is not on this grid", line),
            GameError::MatchOver => write!(f, "match is already over"),
            GameError::NotYourTurn { expected, actual } => write!(
                f,
                "player {} moved but it is player {}'s turn",
                actual, expected
            ),
            GameError::InvalidConfiguration(e) => write!(f, "invalid configuration: {}", e),
            GameError::NoLegalMove => write!(f, "no undrawn line is left to play"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

#[cfg(feature = "std")]
impl std::error::Error for GameError {}
