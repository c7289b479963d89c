//! Runtime constants and defaults for the command-line tool

/// Milliseconds to pause between animation frames
pub const DEFAULT_FRAME_DELAY_MS: u64 = 5;

/// Placeholder printed for cells that never collapsed
pub const EMPTY_CELL_GLYPH: &str = "-";

/// ANSI prefix applied to labels when the pattern enables formatting
pub const ANSI_PREFIX: &str = "\x1b[";

/// ANSI reset paired with [`ANSI_PREFIX`]
pub const ANSI_RESET: &str = "\x1b[0m";

/// ANSI sequence homing the cursor and clearing the screen before a frame
pub const ANSI_CLEAR: &str = "\x1b[H\x1b[0J";

/// Width of the collapse progress bar in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
