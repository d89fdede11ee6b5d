//! Dot lattice geometry: line identities, boxes, and which lines bound which
//! boxes. Dimensions are counted in dots, so an `R×C` grid holds
//! `(R-1)×(C-1)` boxes.

use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use crate::core::common::{ConfigError, GameError};
use crate::core::config::{MAX_DIMENSION, MIN_DIMENSION};

/// Direction a line runs in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// A single edge between two adjacent dots.
///
/// A horizontal line at `(row, col)` joins dot `(row, col)` to
/// `(row, col + 1)`; a vertical one joins `(row, col)` to `(row + 1, col)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Line {
    pub orientation: Orientation,
    pub row: usize,
    pub col: usize,
}

impl Line {
    pub const fn horizontal(row: usize, col: usize) -> Self {
        Self { orientation: Orientation::Horizontal, row, col }
    }

    pub const fn vertical(row: usize, col: usize) -> Self {
        Self { orientation: Orientation::Vertical, row, col }
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self.orientation {
            Orientation::Horizontal => 'h',
            Orientation::Vertical => 'v',
        };
        write!(f, "{}({},{})", tag, self.row, self.col)
    }
}

/// A unit cell, named by its top-left dot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct BoxId {
    pub row: usize,
    pub col: usize,
}

impl BoxId {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for BoxId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "box({},{})", self.row, self.col)
    }
}

/// Rectangular dot lattice. Fixed for the lifetime of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    rows: usize,
    cols: usize,
}

impl Grid {
    /// Build a grid of `rows × cols` dots, each between 2 and
    /// [`MAX_DIMENSION`].
    pub fn new(rows: usize, cols: usize) -> Result<Self, GameError> {
        if rows < MIN_DIMENSION || cols < MIN_DIMENSION {
            return Err(ConfigError::GridTooSmall { rows, cols }.into());
        }
        if rows > MAX_DIMENSION || cols > MAX_DIMENSION {
            return Err(ConfigError::GridTooLarge { rows, cols, max: MAX_DIMENSION }.into());
        }
        Ok(Self { rows, cols })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `(rows-1) × (cols-1)`.
    pub fn box_count(&self) -> usize {
        (self.rows - 1) * (self.cols - 1)
    }

    /// `rows·(cols-1) + (rows-1)·cols`.
    pub fn line_count(&self) -> usize {
        self.horizontal_count() + (self.rows - 1) * self.cols
    }

    fn horizontal_count(&self) -> usize {
        self.rows * (self.cols - 1)
    }

    /// Whether `line` lies on this lattice.
    pub fn contains(&self, line: Line) -> bool {
        match line.orientation {
            Orientation::Horizontal => line.row < self.rows && line.col + 1 < self.cols,
            Orientation::Vertical => line.row + 1 < self.rows && line.col < self.cols,
        }
    }

    /// Whether `b` is a box on this lattice.
    pub fn contains_box(&self, b: BoxId) -> bool {
        b.row + 1 < self.rows && b.col + 1 < self.cols
    }

    /// Dense index of `line`: horizontal lines first, row-major, then
    /// vertical lines, row-major.
    pub fn line_index(&self, line: Line) -> Option<usize> {
        if !self.contains(line) {
            return None;
        }
        Some(match line.orientation {
            Orientation::Horizontal => line.row * (self.cols - 1) + line.col,
            Orientation::Vertical => self.horizontal_count() + line.row * self.cols + line.col,
        })
    }

    /// Inverse of [`Grid::line_index`].
    pub fn line_at(&self, index: usize) -> Option<Line> {
        let h = self.horizontal_count();
        if index < h {
            let w = self.cols - 1;
            Some(Line::horizontal(index / w, index % w))
        } else if index < self.line_count() {
            let i = index - h;
            Some(Line::vertical(i / self.cols, i % self.cols))
        } else {
            None
        }
    }

    /// Every valid line, in index order.
    pub fn lines(&self) -> impl Iterator<Item = Line> + '_ {
        (0..self.line_count()).filter_map(move |i| self.line_at(i))
    }

    /// Every box, row-major.
    pub fn boxes(&self) -> impl Iterator<Item = BoxId> {
        let (rows, cols) = (self.rows - 1, self.cols - 1);
        (0..rows).flat_map(move |r| (0..cols).map(move |c| BoxId::new(r, c)))
    }

    /// The boxes `line` borders: one for an edge line, two for an interior
    /// line, none for a line off the grid. Ordered top-to-bottom or
    /// left-to-right.
    pub fn adjacent_boxes(&self, line: Line) -> impl Iterator<Item = BoxId> {
        let mut pair = [None, None];
        if self.contains(line) {
            let (r, c) = (line.row, line.col);
            match line.orientation {
                Orientation::Horizontal => {
                    if r > 0 {
                        pair[0] = Some(BoxId::new(r - 1, c));
                    }
                    if r + 1 < self.rows {
                        pair[1] = Some(BoxId::new(r, c));
                    }
                }
                Orientation::Vertical => {
                    if c > 0 {
                        pair[0] = Some(BoxId::new(r, c - 1));
                    }
                    if c + 1 < self.cols {
                        pair[1] = Some(BoxId::new(r, c));
                    }
                }
            }
        }
        pair.into_iter().flatten()
    }

    /// Top, bottom, left and right sides of `b`.
    pub fn box_sides(&self, b: BoxId) -> [Line; 4] {
        [
            Line::horizontal(b.row, b.col),
            Line::horizontal(b.row + 1, b.col),
            Line::vertical(b.row, b.col),
            Line::vertical(b.row, b.col + 1),
        ]
    }
}

/// Set of drawn lines for one grid, packed one bit per line.
#[derive(Clone, PartialEq, Eq)]
pub struct LineSet {
    grid: Grid,
    words: Vec<u64>,
    len: usize,
}

impl LineSet {
    /// Empty set sized for `grid`.
    pub fn new(grid: Grid) -> Self {
        let words = vec![0u64; grid.line_count().div_ceil(64)];
        Self { grid, words, len: 0 }
    }

    pub fn grid(&self) -> Grid {
        self.grid
    }

    /// Whether `line` is drawn. Lines off the grid are never drawn.
    pub fn contains(&self, line: Line) -> bool {
        match self.grid.line_index(line) {
            Some(i) => self.words[i / 64] & (1u64 << (i % 64)) != 0,
            None => false,
        }
    }

    /// Mark `line` drawn. Returns `Ok(false)` if it already was.
    pub fn insert(&mut self, line: Line) -> Result<bool, GameError> {
        let i = self
            .grid
            .line_index(line)
            .ok_or(GameError::LineOutOfBounds(line))?;
        let bit = 1u64 << (i % 64);
        if self.words[i / 64] & bit != 0 {
            return Ok(false);
        }
        self.words[i / 64] |= bit;
        self.len += 1;
        Ok(true)
    }

    /// Number of drawn lines.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// `true` once every line of the grid is drawn.
    pub fn is_full(&self) -> bool {
        self.len == self.grid.line_count()
    }

    /// Drawn lines in index order.
    pub fn iter(&self) -> impl Iterator<Item = Line> + '_ {
        self.grid.lines().filter(move |l| self.contains(*l))
    }

    /// Undrawn lines in index order.
    pub fn missing(&self) -> impl Iterator<Item = Line> + '_ {
        self.grid.lines().filter(move |l| !self.contains(*l))
    }
}

impl fmt::Debug for LineSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
