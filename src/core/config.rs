/// Smallest number of dots along either axis; one box needs a 2×2 lattice.
pub const MIN_DIMENSION: usize = 2;

/// Largest number of dots along either axis.
pub const MAX_DIMENSION: usize = 64;

/// Longest initial a seat may show inside its boxes. Fits `C1`..`C5`.
pub const MAX_INITIAL_LEN: usize = 3;

/// Grid offered when the caller does not pick one.
pub const DEFAULT_ROWS: usize = 4;
pub const DEFAULT_COLS: usize = 4;

/// Seat limits enforced by [`MatchSetup`](crate::core::roster::MatchSetup).
pub const MAX_HUMANS: usize = 6;
pub const MAX_COMPUTERS: usize = 5;

/// Pause before a computer seat moves, in milliseconds.
pub const DEFAULT_AI_DELAY_MS: u64 = 600;

/// Saturation and lightness shared by every seat colour.
pub const PLAYER_SATURATION: u8 = 70;
pub const PLAYER_LIGHTNESS: u8 = 50;

/// Default initial for the human seat at `index`: `A`, `B`, `C`, ...
pub fn default_initial(index: usize) -> char {
    (b'A' + (index % 26) as u8) as char
}
