//! Canonical checkers-rule constants.
//!
//! Board dimensions, setup sizes and the standard starting position string
//! used to initialize and validate game setup.

/// Squares per row and per column.
pub const BOARD_SIZE: i8 = 8;

/// Men per side at the start of a game.
pub const PIECES_PER_SIDE: usize = 12;

/// Rows `0..HUMAN_SETUP_ROWS` hold Human men at setup.
pub const HUMAN_SETUP_ROWS: i8 = 3;

/// Rows `COMPUTER_SETUP_START_ROW..BOARD_SIZE` hold Computer men at setup.
pub const COMPUTER_SETUP_START_ROW: i8 = 5;

/// Rendered edge length of one square.
pub const DEFAULT_CELL_SIZE: f64 = 50.0;

/// Standard starting position, ranks listed from `y = 7` down to `y = 0`.
pub const STARTING_POSITION: &str =
    "c1c1c1c1/1c1c1c1c/c1c1c1c1/8/8/1h1h1h1h/h1h1h1h1/1h1h1h1h h";
