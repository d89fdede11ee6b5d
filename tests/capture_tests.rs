use dots_and_boxes::core::capture::is_enclosed;
use dots_and_boxes::{detect_new_captures, sides_drawn, BoxId, Grid, Line, LineSet};

fn drawn(grid: Grid, lines: &[Line]) -> LineSet {
    let mut set = LineSet::new(grid);
    for l in lines {
        set.insert(*l).unwrap();
    }
    set
}

/// Brute-force reference: scan every box.
fn scan_all(grid: &Grid, set: &LineSet, candidate: Line) -> Vec<BoxId> {
    if set.contains(candidate) {
        return Vec::new();
    }
    let mut after = set.clone();
    after.insert(candidate).unwrap();
    grid.boxes()
        .filter(|b| {
            is_enclosed(grid, &after, *b) && !is_enclosed(grid, set, *b)
        })
        .collect()
}

#[test]
fn test_fourth_side_completes_box() {
    let grid = Grid::new(2, 2).unwrap();
    let set = drawn(
        grid,
        &[Line::horizontal(0, 0), Line::vertical(0, 0), Line::vertical(0, 1)],
    );
    assert_eq!(sides_drawn(&grid, &set, BoxId::new(0, 0)), 3);
    assert_eq!(
        detect_new_captures(&grid, &set, Line::horizontal(1, 0)),
        vec![BoxId::new(0, 0)]
    );
}

#[test]
fn test_third_side_completes_nothing() {
    let grid = Grid::new(3, 3).unwrap();
    let set = drawn(grid, &[Line::horizontal(0, 0), Line::vertical(0, 0)]);
    assert!(detect_new_captures(&grid, &set, Line::vertical(0, 1)).is_empty());
}

#[test]
fn test_shared_line_completes_two_boxes() {
    let grid = Grid::new(2, 3).unwrap();
    let set = drawn(
        grid,
        &[
            Line::horizontal(0, 0),
            Line::horizontal(1, 0),
            Line::vertical(0, 0),
            Line::horizontal(0, 1),
            Line::horizontal(1, 1),
            Line::vertical(0, 2),
        ],
    );
    assert_eq!(
        detect_new_captures(&grid, &set, Line::vertical(0, 1)),
        vec![BoxId::new(0, 0), BoxId::new(0, 1)]
    );
}

#[test]
fn test_matches_full_scan_on_every_candidate() {
    let grid = Grid::new(4, 4).unwrap();
    // every other line drawn, deterministic pattern
    let lines: Vec<Line> = grid.lines().enumerate().filter(|(i, _)| i % 3 != 1).map(|(_, l)| l).collect();
    let set = drawn(grid, &lines);
    for candidate in grid.lines() {
        assert_eq!(
            detect_new_captures(&grid, &set, candidate),
            scan_all(&grid, &set, candidate),
            "mismatch for {}",
            candidate
        );
    }
}
