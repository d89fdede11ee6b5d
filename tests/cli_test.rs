#[cfg(feature = "std")]
#[cfg(test)]
mod cli_tests {
    use dots_and_boxes::{
        parse_line, render_board, render_scoreboard, render_summary, CliPlayer, Difficulty, Grid,
        Line, Match, MatchConfig, PlayerController, PlayerSpec,
    };
    use rand::rngs::SmallRng;
    use rand::SeedableRng;
    use std::io::Cursor;

    fn two_seats(rows: usize, cols: usize) -> Match {
        Match::new(MatchConfig::new(
            rows,
            cols,
            vec![
                PlayerSpec::human("Alice", "A"),
                PlayerSpec::computer("Com 1", "C1", Difficulty::Easy),
            ],
        ))
        .unwrap()
    }

    #[test]
    fn test_parse_line_formats() {
        let grid = Grid::new(4, 4).unwrap();
        assert_eq!(parse_line("h 0 1", &grid), Ok(Line::horizontal(0, 1)));
        assert_eq!(parse_line("  V 2 3\n", &grid), Ok(Line::vertical(2, 3)));
        assert_eq!(parse_line("h0,2", &grid), Ok(Line::horizontal(0, 2)));
        assert_eq!(parse_line("v 1, 0", &grid), Ok(Line::vertical(1, 0)));
    }

    #[test]
    fn test_parse_line_errors() {
        let grid = Grid::new(3, 3).unwrap();
        assert!(parse_line("", &grid).is_err());
        assert!(parse_line("x 0 0", &grid).is_err());
        assert!(parse_line("h 0", &grid).is_err());
        assert!(parse_line("h a 0", &grid).is_err());
        // horizontal lines stop at column cols-2
        assert!(parse_line("h 0 2", &grid).is_err());
        assert!(parse_line("v 2 0", &grid).is_err());
    }

    #[test]
    fn test_cli_player_skips_bad_and_drawn_lines() {
        let mut game = two_seats(3, 3);
        game.apply_move(Line::horizontal(0, 0)).unwrap();
        game.apply_move(Line::vertical(1, 1)).unwrap();
        let mut rng = SmallRng::seed_from_u64(1);
        let mut player = CliPlayer::with_input(Cursor::new("nonsense\nh 0 0\nv 1 1\nh 2 1\n"));
        assert_eq!(player.select_line(&mut rng, &game), Some(Line::horizontal(2, 1)));
    }

    #[test]
    fn test_cli_player_gives_up_at_end_of_input() {
        let game = two_seats(3, 3);
        let mut rng = SmallRng::seed_from_u64(1);
        let mut player = CliPlayer::with_input(Cursor::new("h 9 9\n"));
        assert_eq!(player.select_line(&mut rng, &game), None);
    }

    #[test]
    fn test_render_board_shows_lines_and_owners() {
        let mut game = two_seats(2, 3);
        game.apply_move(Line::horizontal(0, 0)).unwrap();
        game.apply_move(Line::vertical(0, 0)).unwrap();
        let board = render_board(&game);
        assert_eq!(board, "    0   1   2\n 0  o───o   o\n    │\n 1  o   o   o\n");

        game.apply_move(Line::vertical(0, 1)).unwrap();
        game.apply_move(Line::horizontal(1, 0)).unwrap();
        let board = render_board(&game);
        assert!(board.contains("│C1 │"), "{}", board);
    }

    #[test]
    fn test_scoreboard_and_summary() {
        let mut game = two_seats(2, 2);
        let board = render_scoreboard(&game);
        assert!(board.starts_with("> Alice (A): 0 box(es)"));
        assert!(board.contains("  Com 1 (C1) (CPU): 0 box(es)"));
        assert_eq!(render_summary(&game), "");

        for line in [
            Line::horizontal(0, 0),
            Line::vertical(0, 0),
            Line::vertical(0, 1),
            Line::horizontal(1, 0),
        ] {
            game.apply_move(line).unwrap();
        }
        let summary = render_summary(&game);
        assert!(summary.starts_with("Winner: Com 1 (Computer)"), "{}", summary);
        assert!(summary.contains("Alice (A)  0 Boxes Formed"));
    }
}
