use std::fmt::Write as _;

use crate::core::{BoxId, Line, Match, MatchObserver, MoveOutcome, Player};

fn cpu_tag(p: &Player) -> &'static str {
    if p.is_computer() {
        " (CPU)"
    } else {
        ""
    }
}

/// ASCII drawing of the dot grid, drawn lines and captured boxes, with row
/// and column numbers for typing moves.
pub fn render_board(game: &Match) -> String {
    let grid = game.grid();
    let drawn = game.drawn_lines();
    let mut out = String::new();

    let mut header = String::from("    ");
    for c in 0..grid.cols() {
        let _ = write!(header, "{:<4}", c);
    }
    out.push_str(header.trim_end());
    out.push('\n');

    for r in 0..grid.rows() {
        let mut dots = format!("{:>2}  ", r);
        for c in 0..grid.cols() {
            dots.push('o');
            if c + 1 < grid.cols() {
                dots.push_str(if drawn.contains(Line::horizontal(r, c)) { "───" } else { "   " });
            }
        }
        out.push_str(dots.trim_end());
        out.push('\n');

        if r + 1 < grid.rows() {
            let mut cells = String::from("    ");
            for c in 0..grid.cols() {
                cells.push(if drawn.contains(Line::vertical(r, c)) { '│' } else { ' ' });
                if c + 1 < grid.cols() {
                    match game.owner(BoxId::new(r, c)) {
                        Some(owner) => {
                            let _ = write!(cells, "{:^3}", owner.initial);
                        }
                        None => cells.push_str("   "),
                    }
                }
            }
            out.push_str(cells.trim_end());
            out.push('\n');
        }
    }
    out
}

/// One line per seat; the seat on turn is marked with `>`.
pub fn render_scoreboard(game: &Match) -> String {
    let mut out = String::new();
    for p in game.players() {
        let marker = if !game.is_over() && p.id() == game.current_turn() { '>' } else { ' ' };
        let _ = writeln!(
            out,
            "{} {} ({}){}: {} box(es)",
            marker,
            p.name(),
            p.initial(),
            cpu_tag(p),
            p.score()
        );
    }
    out
}

/// Winner banner followed by the leaderboard. Empty while still playing.
pub fn render_summary(game: &Match) -> String {
    let Some(winners) = game.winners() else {
        return String::new();
    };
    let mut out = String::new();
    let names: Vec<String> = winners
        .iter()
        .filter_map(|&id| game.player(id))
        .map(|p| format!("{}{}", p.name(), if p.is_computer() { " (Computer)" } else { "" }))
        .collect();
    if names.len() == 1 {
        let _ = writeln!(out, "Winner: {}", names[0]);
    } else {
        let _ = writeln!(out, "Tie between: {}", names.join(", "));
    }
    for p in game.leaderboard() {
        let _ = writeln!(
            out,
            "  {} ({}){}  {} Boxes Formed",
            p.name(),
            p.initial(),
            cpu_tag(p),
            p.score()
        );
    }
    out
}

pub fn print_board(game: &Match) {
    print!("{}", render_board(game));
}

pub fn print_scoreboard(game: &Match) {
    print!("{}", render_scoreboard(game));
}

pub fn print_summary(game: &Match) {
    println!("\n=== Match Summary ===");
    print!("{}", render_summary(game));
}

/// Observer that redraws the board on stdout after every move.
#[derive(Debug, Default)]
pub struct TerminalView;

impl TerminalView {
    pub fn new() -> Self {
        Self
    }
}

impl MatchObserver for TerminalView {
    fn on_state_changed(&mut self, game: &Match, outcome: &MoveOutcome) {
        let mover = game.player(outcome.player).map(|p| p.name()).unwrap_or("?");
        match outcome.captured.len() {
            0 => println!("\n{} drew {}", mover, outcome.line),
            n => println!("\n{} drew {} and captured {} box(es)!", mover, outcome.line, n),
        }
        print_board(game);
        print_scoreboard(game);
    }

    fn on_match_finished(&mut self, game: &Match) {
        print_summary(game);
    }
}
