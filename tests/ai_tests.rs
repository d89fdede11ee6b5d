use dots_and_boxes::core::ai::available_moves;
use dots_and_boxes::{
    candidate_moves, completing_moves, compute_ai_move, dangerous_moves,
    safe_moves, Difficulty, GameError, Line, Match, MatchConfig, PlayerSpec,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::collections::HashSet;

fn game_with(rows: usize, cols: usize, lines: &[Line]) -> Match {
    let mut game = Match::new(MatchConfig::new(
        rows,
        cols,
        vec![
            PlayerSpec::human("Alice", "A"),
            PlayerSpec::computer("Com 1", "C1", Difficulty::Hard),
        ],
    ))
    .unwrap();
    for l in lines {
        game.apply_move(*l).unwrap();
    }
    game
}

fn as_set(lines: Vec<Line>) -> HashSet<Line> {
    lines.into_iter().collect()
}

#[test]
fn test_easy_considers_every_open_line() {
    let game = game_with(3, 3, &[Line::horizontal(0, 0), Line::vertical(0, 0), Line::vertical(0, 1)]);
    let all = available_moves(&game);
    assert_eq!(all.len(), game.grid().line_count() - 3);
    assert_eq!(candidate_moves(&game, Difficulty::Easy), all);

    let mut seen = HashSet::new();
    for seed in 0..300 {
        let mut rng = SmallRng::seed_from_u64(seed);
        let line = compute_ai_move(&game, Difficulty::Easy, &mut rng).unwrap();
        assert!(all.contains(&line));
        seen.insert(line);
    }
    // random, not first-match
    assert!(seen.len() > 1);
}

#[test]
fn test_completing_and_dangerous_sets() {
    let game = game_with(3, 3, &[Line::horizontal(0, 0), Line::vertical(0, 0), Line::vertical(0, 1)]);
    assert_eq!(completing_moves(&game), vec![Line::horizontal(1, 0)]);

    let game = game_with(3, 3, &[Line::horizontal(0, 0), Line::vertical(0, 0)]);
    assert!(completing_moves(&game).is_empty());
    assert_eq!(
        as_set(dangerous_moves(&game)),
        as_set(vec![Line::horizontal(1, 0), Line::vertical(0, 1)])
    );
    let safe = safe_moves(&game);
    assert_eq!(safe.len(), game.grid().line_count() - 2 - 2);
    assert!(!safe.contains(&Line::horizontal(1, 0)));
}

#[test]
fn test_medium_takes_offered_box() {
    let game = game_with(3, 3, &[Line::horizontal(0, 0), Line::vertical(0, 0), Line::vertical(0, 1)]);
    for seed in 0..50 {
        let mut rng = SmallRng::seed_from_u64(seed);
        assert_eq!(
            compute_ai_move(&game, Difficulty::Medium, &mut rng).unwrap(),
            Line::horizontal(1, 0)
        );
    }
}

#[test]
fn test_medium_falls_back_to_any_line() {
    let game = game_with(3, 3, &[Line::horizontal(0, 0)]);
    assert_eq!(candidate_moves(&game, Difficulty::Medium), available_moves(&game));
}

#[test]
fn test_hard_prefers_completing_moves() {
    // two boxes on offer in different corners, plus plenty of safe lines
    let game = game_with(
        4,
        4,
        &[
            Line::horizontal(0, 0),
            Line::vertical(0, 0),
            Line::vertical(0, 1),
            Line::horizontal(3, 2),
            Line::vertical(2, 3),
            Line::horizontal(2, 2),
        ],
    );
    let completing = as_set(completing_moves(&game));
    assert_eq!(
        completing,
        as_set(vec![Line::horizontal(1, 0), Line::vertical(2, 2)])
    );
    assert_eq!(as_set(candidate_moves(&game, Difficulty::Hard)), completing);
    for seed in 0..100 {
        let mut rng = SmallRng::seed_from_u64(seed);
        let line = compute_ai_move(&game, Difficulty::Hard, &mut rng).unwrap();
        assert!(completing.contains(&line), "hard picked {}", line);
    }
}

#[test]
fn test_hard_never_opens_a_box_when_safe_lines_exist() {
    let game = game_with(
        4,
        4,
        &[
            Line::horizontal(0, 0),
            Line::vertical(0, 0),
            Line::horizontal(3, 2),
            Line::vertical(2, 3),
            Line::vertical(1, 1),
        ],
    );
    assert!(completing_moves(&game).is_empty());
    let dangerous = as_set(dangerous_moves(&game));
    assert!(!dangerous.is_empty());
    assert!(!safe_moves(&game).is_empty());
    for seed in 0..300 {
        let mut rng = SmallRng::seed_from_u64(seed);
        let line = compute_ai_move(&game, Difficulty::Hard, &mut rng).unwrap();
        assert!(!dangerous.contains(&line), "hard handed over a box with {}", line);
    }
}

#[test]
fn test_hard_falls_back_when_every_line_is_dangerous() {
    let game = game_with(2, 2, &[Line::horizontal(0, 0), Line::vertical(0, 0)]);
    assert!(completing_moves(&game).is_empty());
    assert!(safe_moves(&game).is_empty());
    assert_eq!(
        as_set(candidate_moves(&game, Difficulty::Hard)),
        as_set(vec![Line::horizontal(1, 0), Line::vertical(0, 1)])
    );
    let mut rng = SmallRng::seed_from_u64(7);
    let line = compute_ai_move(&game, Difficulty::Hard, &mut rng).unwrap();
    assert!(line == Line::horizontal(1, 0) || line == Line::vertical(0, 1));
}

#[test]
fn test_no_legal_move_on_finished_match() {
    let game = game_with(
        2,
        2,
        &[
            Line::horizontal(0, 0),
            Line::vertical(0, 0),
            Line::vertical(0, 1),
            Line::horizontal(1, 0),
        ],
    );
    assert!(game.is_over());
    let mut rng = SmallRng::seed_from_u64(1);
    for d in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
        assert_eq!(compute_ai_move(&game, d, &mut rng).unwrap_err(), GameError::NoLegalMove);
    }
}

#[test]
fn test_same_seed_same_choice() {
    let game = game_with(5, 5, &[Line::horizontal(2, 2)]);
    let mut a = SmallRng::seed_from_u64(99);
    let mut b = SmallRng::seed_from_u64(99);
    for _ in 0..10 {
        assert_eq!(
            compute_ai_move(&game, Difficulty::Hard, &mut a).unwrap(),
            compute_ai_move(&game, Difficulty::Hard, &mut b).unwrap()
        );
    }
}
