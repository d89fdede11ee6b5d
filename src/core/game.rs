use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::core::{
    capture::detect_new_captures,
    common::GameError,
    config::{PLAYER_LIGHTNESS, PLAYER_SATURATION},
    grid::{BoxId, Grid, Line, LineSet},
    roster::MatchConfig,
};

/// Look-ahead tier of a computer seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize, clap::ValueEnum))]
#[cfg_attr(feature = "std", serde(rename_all = "lowercase"))]
pub enum Difficulty {
    /// Uniformly random line.
    Easy,
    /// Takes a box when one is on offer, otherwise random.
    Medium,
    /// Takes boxes, and avoids giving any away when it can.
    Hard,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        };
        f.write_str(s)
    }
}

/// Who drives a seat. Fixed for the whole match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum PlayerKind {
    Human,
    Computer(Difficulty),
}

impl PlayerKind {
    pub fn is_computer(&self) -> bool {
        matches!(self, PlayerKind::Computer(_))
    }

    pub fn difficulty(&self) -> Option<Difficulty> {
        match self {
            PlayerKind::Computer(d) => Some(*d),
            PlayerKind::Human => None,
        }
    }
}

/// Seat colour in HSL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Color {
    pub hue: u16,
    pub saturation: u8,
    pub lightness: u8,
}

impl Color {
    pub const fn hsl(hue: u16, saturation: u8, lightness: u8) -> Self {
        Self { hue, saturation, lightness }
    }

    /// Colour for seat `index` of `total`, spaced evenly around the hue wheel.
    pub fn spread(index: usize, total: usize) -> Self {
        let hue = (index * 360 / total.max(1)) % 360;
        Self::hsl(hue as u16, PLAYER_SATURATION, PLAYER_LIGHTNESS)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsl({}, {}%, {}%)", self.hue, self.saturation, self.lightness)
    }
}

/// One seat in the roster.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Player {
    id: usize,
    name: String,
    initial: String,
    color: Color,
    score: usize,
    kind: PlayerKind,
}

impl Player {
    pub(crate) fn new(id: usize, name: String, initial: String, color: Color, kind: PlayerKind) -> Self {
        Self { id, name, initial, color, score: 0, kind }
    }

    /// Stable 0-based seat index.
    pub fn id(&self) -> usize {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Glyph shown inside boxes this player captures.
    pub fn initial(&self) -> &str {
        &self.initial
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// Boxes captured so far.
    pub fn score(&self) -> usize {
        self.score
    }

    pub fn kind(&self) -> PlayerKind {
        self.kind
    }

    pub fn is_computer(&self) -> bool {
        self.kind.is_computer()
    }

    pub fn difficulty(&self) -> Option<Difficulty> {
        self.kind.difficulty()
    }
}

/// Ownership record stamped into a captured box.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct BoxOwner {
    pub player: usize,
    pub initial: String,
    pub color: Color,
}

impl From<&Player> for BoxOwner {
    fn from(p: &Player) -> Self {
        Self {
            player: p.id,
            initial: p.initial.clone(),
            color: p.color,
        }
    }
}

/// What a single accepted move did.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveOutcome {
    pub line: Line,
    /// Seat that drew the line.
    pub player: usize,
    /// Boxes this line completed (zero, one or two).
    pub captured: Vec<BoxId>,
    /// Seat to move next. Equals `player` after a capture.
    pub next_player: usize,
    /// `true` if this move captured the last box.
    pub finished: bool,
}

impl MoveOutcome {
    /// Whether the mover keeps the turn.
    pub fn extra_turn(&self) -> bool {
        !self.captured.is_empty()
    }
}

/// Lifecycle of a match. Setup happens before a [`Match`] exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum MatchStatus {
    Playing,
    Finished,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct CapturedBox {
    pub id: BoxId,
    pub owner: BoxOwner,
}

/// Read-only copy of everything a presentation layer draws.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchSnapshot {
    pub grid: Grid,
    pub players: Vec<Player>,
    pub drawn_lines: Vec<Line>,
    pub captured_boxes: Vec<CapturedBox>,
    pub current_turn: usize,
    pub status: MatchStatus,
    /// Empty until the match is finished.
    pub winners: Vec<usize>,
}

/// Subscriber notified after every accepted move.
pub trait MatchObserver: Send {
    /// Called once per accepted move, after the match state is updated.
    fn on_state_changed(&mut self, game: &Match, outcome: &MoveOutcome);

    /// Called once, after the move that captures the last box.
    fn on_match_finished(&mut self, _game: &Match) {}
}

/// A single Dots-and-Boxes match: the grid, the roster, drawn lines,
/// captured boxes and whose turn it is.
///
/// Created in the playing state by [`Match::new`]; mutated only through
/// [`Match::apply_move`] / [`Match::apply_move_as`]; finished once every
/// box is captured. Play again by building a new `Match`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    grid: Grid,
    players: Vec<Player>,
    drawn: LineSet,
    captured: BTreeMap<BoxId, BoxOwner>,
    turn: usize,
    over: bool,
}

impl Match {
    /// Start a match from a finalized roster. Every score starts at zero and
    /// seat 0 moves first.
    pub fn new(config: MatchConfig) -> Result<Self, GameError> {
        config.validate()?;
        let grid = Grid::new(config.rows, config.cols)?;
        let total = config.players.len();
        let players: Vec<Player> = config
            .players
            .into_iter()
            .enumerate()
            .map(|(id, spec)| {
                let color = spec.color.unwrap_or_else(|| Color::spread(id, total));
                Player::new(id, spec.name, spec.initial, color, spec.kind)
            })
            .collect();
        log::info!(
            "match started: {}x{} dots, {} boxes, {} players",
            grid.rows(),
            grid.cols(),
            grid.box_count(),
            players.len()
        );
        Ok(Self {
            grid,
            players,
            drawn: LineSet::new(grid),
            captured: BTreeMap::new(),
            turn: 0,
            over: false,
        })
    }

    /// Draw `line` for whoever's turn it is.
    pub fn apply_move(&mut self, line: Line) -> Result<MoveOutcome, GameError> {
        self.apply_move_as(self.turn, line)
    }

    /// Draw `line` on behalf of `seat`.
    ///
    /// Rejected moves (match over, wrong seat, line off the grid or already
    /// drawn) return an error and leave the match exactly as it was.
    pub fn apply_move_as(&mut self, seat: usize, line: Line) -> Result<MoveOutcome, GameError> {
        if self.over {
            return Err(GameError::MatchOver);
        }
        if seat != self.turn {
            return Err(GameError::NotYourTurn { expected: self.turn, actual: seat });
        }
        if !self.grid.contains(line) {
            return Err(GameError::LineOutOfBounds(line));
        }
        if self.drawn.contains(line) {
            return Err(GameError::LineAlreadyDrawn(line));
        }

        let captured = detect_new_captures(&self.grid, &self.drawn, line);
        self.drawn.insert(line)?;

        // Ownership records and the score bump land together, before the
        // turn moves on.
        let owner = BoxOwner::from(&self.players[seat]);
        for b in &captured {
            self.captured.insert(*b, owner.clone());
        }
        self.players[seat].score += captured.len();

        if captured.is_empty() {
            self.turn = (self.turn + 1) % self.players.len();
        }
        if self.captured.len() == self.grid.box_count() {
            self.over = true;
        }

        log::debug!(
            "{} drew {} capturing {} box(es); next: {}",
            self.players[seat].name,
            line,
            captured.len(),
            self.players[self.turn].name
        );
        if self.over {
            log::info!("match finished after {} lines", self.drawn.len());
        }

        Ok(MoveOutcome {
            line,
            player: seat,
            captured,
            next_player: self.turn,
            finished: self.over,
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Roster in seat order.
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn player(&self, id: usize) -> Option<&Player> {
        self.players.get(id)
    }

    /// Seat index of the player to move.
    pub fn current_turn(&self) -> usize {
        self.turn
    }

    pub fn current_player(&self) -> &Player {
        &self.players[self.turn]
    }

    pub fn drawn_lines(&self) -> &LineSet {
        &self.drawn
    }

    pub fn captured_boxes(&self) -> &BTreeMap<BoxId, BoxOwner> {
        &self.captured
    }

    pub fn owner(&self, b: BoxId) -> Option<&BoxOwner> {
        self.captured.get(&b)
    }

    pub fn total_boxes(&self) -> usize {
        self.grid.box_count()
    }

    /// Lines still open, in grid order.
    pub fn available_lines(&self) -> impl Iterator<Item = Line> + '_ {
        self.drawn.missing()
    }

    pub fn is_over(&self) -> bool {
        self.over
    }

    pub fn status(&self) -> MatchStatus {
        if self.over {
            MatchStatus::Finished
        } else {
            MatchStatus::Playing
        }
    }

    /// Score of every seat, in seat order.
    pub fn scores(&self) -> Vec<usize> {
        self.players.iter().map(|p| p.score).collect()
    }

    /// Seats sharing the top score, in seat order. `None` while the match is
    /// still being played.
    pub fn winners(&self) -> Option<Vec<usize>> {
        if !self.over {
            return None;
        }
        let best = self.players.iter().map(|p| p.score).max().unwrap_or(0);
        Some(
            self.players
                .iter()
                .filter(|p| p.score == best)
                .map(|p| p.id)
                .collect(),
        )
    }

    /// Players by descending score; equal scores keep seat order.
    pub fn leaderboard(&self) -> Vec<&Player> {
        let mut ranked: Vec<&Player> = self.players.iter().collect();
        ranked.sort_by(|a, b| b.score.cmp(&a.score));
        ranked
    }

    pub fn snapshot(&self) -> MatchSnapshot {
        MatchSnapshot {
            grid: self.grid,
            players: self.players.clone(),
            drawn_lines: self.drawn.iter().collect(),
            captured_boxes: self
                .captured
                .iter()
                .map(|(id, owner)| CapturedBox { id: *id, owner: owner.clone() })
                .collect(),
            current_turn: self.turn,
            status: self.status(),
            winners: self.winners().unwrap_or_default(),
        }
    }
}
