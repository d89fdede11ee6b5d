use dots_and_boxes::{
    Color, ConfigError, Difficulty, GameError, Match, MatchSetup, PlayerKind, MAX_COMPUTERS,
    MAX_HUMANS,
};

#[test]
fn test_humans_first_then_computers_with_defaults() {
    let config = MatchSetup::new()
        .grid(5, 6)
        .human("Alice", "")
        .human("", "Z")
        .computers(2, Difficulty::Medium)
        .build()
        .unwrap();
    assert_eq!((config.rows, config.cols), (5, 6));

    let summary: Vec<(&str, &str)> = config
        .players
        .iter()
        .map(|p| (p.name.as_str(), p.initial.as_str()))
        .collect();
    assert_eq!(
        summary,
        vec![("Alice", "A"), ("Player 2", "Z"), ("Com 1", "C1"), ("Com 2", "C2")]
    );
    assert_eq!(config.players[3].kind, PlayerKind::Computer(Difficulty::Medium));
}

#[test]
fn test_default_human_initials_follow_the_alphabet() {
    let config = MatchSetup::new().humans(3).build().unwrap();
    let initials: Vec<&str> = config.players.iter().map(|p| p.initial.as_str()).collect();
    assert_eq!(initials, vec!["A", "B", "C"]);
    let names: Vec<&str> = config.players.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Player 1", "Player 2", "Player 3"]);
    assert!(config.players.iter().all(|p| p.kind == PlayerKind::Human));
}

#[test]
fn test_computers_share_difficulty_and_colors_are_spread() {
    let config = MatchSetup::new()
        .humans(1)
        .computers(3, Difficulty::Hard)
        .build()
        .unwrap();
    let game = Match::new(config).unwrap();
    assert_eq!(game.players().len(), 4);
    assert!(!game.players()[0].is_computer());
    for p in &game.players()[1..] {
        assert_eq!(p.difficulty(), Some(Difficulty::Hard));
    }
    let hues: Vec<u16> = game.players().iter().map(|p| p.color().hue).collect();
    assert_eq!(hues, vec![0, 90, 180, 270]);
    assert_eq!(game.players()[3].color(), Color::hsl(270, 70, 50));
}

#[test]
fn test_setup_limits() {
    let err = MatchSetup::new().humans(MAX_HUMANS + 1).build().unwrap_err();
    assert_eq!(
        err,
        GameError::InvalidConfiguration(ConfigError::TooManyHumans {
            requested: MAX_HUMANS + 1,
            max: MAX_HUMANS
        })
    );

    let err = MatchSetup::new()
        .humans(1)
        .computers(MAX_COMPUTERS + 1, Difficulty::Easy)
        .build()
        .unwrap_err();
    assert!(matches!(
        err,
        GameError::InvalidConfiguration(ConfigError::TooManyComputers { .. })
    ));

    let err = MatchSetup::new().build().unwrap_err();
    assert_eq!(err, GameError::InvalidConfiguration(ConfigError::NoPlayers));

    let err = MatchSetup::new().grid(4, 1).humans(2).build().unwrap_err();
    assert_eq!(
        err,
        GameError::InvalidConfiguration(ConfigError::GridTooSmall { rows: 4, cols: 1 })
    );
}

#[test]
fn test_default_grid_is_four_by_four() {
    let config = MatchSetup::new().humans(2).build().unwrap();
    assert_eq!((config.rows, config.cols), (4, 4));
}
