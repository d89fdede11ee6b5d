//! Box-completion detection.
//!
//! Only the (at most two) boxes bordering a candidate line can change state
//! when it is drawn, so every query here looks at those boxes alone.

use alloc::vec::Vec;

use crate::core::grid::{BoxId, Grid, Line, LineSet};

/// Number of sides of `b` present in `drawn`.
pub fn sides_drawn(grid: &Grid, drawn: &LineSet, b: BoxId) -> usize {
    grid.box_sides(b).iter().filter(|s| drawn.contains(**s)).count()
}

/// Whether all four sides of `b` are drawn.
pub fn is_enclosed(grid: &Grid, drawn: &LineSet, b: BoxId) -> bool {
    sides_drawn(grid, drawn, b) == 4
}

/// Boxes that become enclosed when `candidate` is added to `drawn`.
///
/// A box is reported iff all four of its sides are in `drawn ∪ {candidate}`
/// and it was not already enclosed before. At most two boxes are returned,
/// in grid order. A candidate that is already drawn, or not on the grid,
/// completes nothing.
pub fn detect_new_captures(grid: &Grid, drawn: &LineSet, candidate: Line) -> Vec<BoxId> {
    if !grid.contains(candidate) || drawn.contains(candidate) {
        return Vec::new();
    }
    grid.adjacent_boxes(candidate)
        .filter(|b| sides_drawn(grid, drawn, *b) == 3)
        .collect()
}

/// Whether drawing `candidate` encloses at least one box.
pub fn completes_box(grid: &Grid, drawn: &LineSet, candidate: Line) -> bool {
    grid.contains(candidate)
        && !drawn.contains(candidate)
        && grid
            .adjacent_boxes(candidate)
            .any(|b| sides_drawn(grid, drawn, b) == 3)
}

/// Whether drawing `candidate` leaves some still-open box with exactly three
/// sides, handing the next player a free capture.
pub fn leaves_three_sided(grid: &Grid, drawn: &LineSet, candidate: Line) -> bool {
    grid.contains(candidate)
        && !drawn.contains(candidate)
        && grid
            .adjacent_boxes(candidate)
            .any(|b| sides_drawn(grid, drawn, b) == 2)
}
