#![cfg(feature = "std")]

use std::io::{self, BufRead, Write};
use std::string::String;

use crate::core::{GameError, Grid, Line, Match, Orientation};
use rand::rngs::SmallRng;

use super::PlayerController;

/// Human seat that reads lines such as `h 0 1` from a terminal.
pub struct CliPlayer {
    // `None` reads through the process-wide stdin buffer, so several human
    // seats can share one terminal.
    input: Option<Box<dyn BufRead + Send>>,
}

impl CliPlayer {
    /// Read moves from standard input.
    pub fn new() -> Self {
        Self { input: None }
    }

    /// Read moves from any buffered source.
    pub fn with_input(input: impl BufRead + Send + 'static) -> Self {
        Self { input: Some(Box::new(input)) }
    }

    fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        match self.input.as_mut() {
            Some(input) => input.read_line(buf),
            None => io::stdin().read_line(buf),
        }
    }
}

impl Default for CliPlayer {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse `h <row> <col>` / `v <row> <col>` (commas allowed, `h0,1` works
/// too) and check the line lies on `grid`.
pub fn parse_line(input: &str, grid: &Grid) -> Result<Line, String> {
    let input = input.trim();
    let mut chars = input.chars();
    let orientation = match chars.next().map(|c| c.to_ascii_lowercase()) {
        Some('h') => Orientation::Horizontal,
        Some('v') => Orientation::Vertical,
        Some(c) => return Err(format!("Unknown direction '{}' - start with h or v", c)),
        None => return Err("Empty input".to_string()),
    };
    let rest: String = chars.map(|c| if c == ',' { ' ' } else { c }).collect();
    let nums: Vec<&str> = rest.split_whitespace().collect();
    if nums.len() != 2 {
        return Err("Need a row and a column (e.g., h 0 1)".to_string());
    }
    let row: usize = nums[0]
        .parse()
        .map_err(|_| format!("Invalid row '{}' - must be a number", nums[0]))?;
    let col: usize = nums[1]
        .parse()
        .map_err(|_| format!("Invalid column '{}' - must be a number", nums[1]))?;
    let line = Line { orientation, row, col };
    if !grid.contains(line) {
        let (max_r, max_c) = match orientation {
            Orientation::Horizontal => (grid.rows() - 1, grid.cols() - 2),
            Orientation::Vertical => (grid.rows() - 2, grid.cols() - 1),
        };
        return Err(format!(
            "{} is off the board - rows 0-{}, columns 0-{} for this direction",
            line, max_r, max_c
        ));
    }
    Ok(line)
}

impl PlayerController for CliPlayer {
    fn select_line(&mut self, _rng: &mut SmallRng, game: &Match) -> Option<Line> {
        let player = game.current_player();
        loop {
            print!("{} ({}) line> ", player.name(), player.initial());
            let _ = io::stdout().flush();

            let mut buf = String::new();
            match self.read_line(&mut buf) {
                Ok(0) => return None,
                Ok(_) => {}
                Err(e) => {
                    log::error!("failed to read move: {}", e);
                    return None;
                }
            }
            match parse_line(&buf, game.grid()) {
                Ok(line) if game.drawn_lines().contains(line) => {
                    println!("  {} is already drawn, pick another", line);
                }
                Ok(line) => return Some(line),
                Err(msg) => println!("  {}", msg),
            }
        }
    }

    fn handle_rejected_move(&mut self, line: Line, err: &GameError) {
        println!("  {} rejected: {}", line, err);
    }
}
