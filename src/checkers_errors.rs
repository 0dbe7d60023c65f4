//! Errors used throughout the checkers engine.
//!
//! `CheckersError` is the single error type returned by board setup,
//! parsing utilities, the game controller and the engines. Search inside the
//! move generator never fails: off-board or empty candidates are absorbed
//! into empty results, so none of these variants is produced there.
//!
//! Usage guidelines:
//! - Selection variants (`InvalidSource`, `InvalidDestination`) are raised by
//!   the controller before any state is touched and are meant to be shown to
//!   the player, who then tries again.
//! - Parsing variants carry the offending text for diagnostics.
//! - `GameOver` is returned when input arrives after the game has finished;
//!   the finish itself is reported as a status, not as an error.

use std::error::Error;
use std::fmt;

use crate::game_state::checkers_types::{Player, Position};

pub type CheckersResult<T> = Result<T, CheckersError>;

#[derive(Debug, Clone, PartialEq)]
pub enum CheckersError {
    /// The selected square is not a key of the current legal move set.
    InvalidSource(Position),

    /// The destination is not listed for the selected source.
    InvalidDestination { from: Position, to: Position },

    /// A destination was submitted before any source was selected.
    NoSourceSelected,

    /// A piece was expected on this square.
    EmptySquare(Position),

    /// Pieces may only stand on dark squares.
    LightSquare(Position),

    /// Coordinates outside the 8x8 grid were supplied by a caller.
    OutOfBounds { x: i8, y: i8 },

    /// A square name such as `d3` could not be parsed.
    InvalidAlgebraic(String),

    InvalidPositionString(String),

    /// A game record could not be parsed or replayed.
    InvalidRecord(String),

    /// Input arrived after the game finished.
    GameOver { loser: Player },

    /// A strategy returned no move although the legal set was non-empty.
    NoMoveChosen,

    Config(String),
}

impl fmt::Display for CheckersError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckersError::InvalidSource(pos) => {
                write!(f, "invalid source: no legal move from {pos}")
            }
            CheckersError::InvalidDestination { from, to } => {
                write!(f, "invalid destination: {to} is not reachable from {from}")
            }
            CheckersError::NoSourceSelected => write!(f, "select a piece before a destination"),
            CheckersError::EmptySquare(pos) => write!(f, "no piece on {pos}"),
            CheckersError::LightSquare(pos) => {
                write!(f, "{pos} is a light square and cannot hold a piece")
            }
            CheckersError::OutOfBounds { x, y } => {
                write!(f, "coordinate ({x}, {y}) is off the board")
            }
            CheckersError::InvalidAlgebraic(text) => write!(f, "invalid square name: {text}"),
            CheckersError::InvalidPositionString(msg) => {
                write!(f, "invalid position string: {msg}")
            }
            CheckersError::InvalidRecord(msg) => write!(f, "invalid game record: {msg}"),
            CheckersError::GameOver { loser } => {
                write!(f, "the game is over, {loser} has no legal moves")
            }
            CheckersError::NoMoveChosen => write!(f, "strategy did not choose a move"),
            CheckersError::Config(msg) => write!(f, "configuration error: {msg}"),
        }
    }
}

impl Error for CheckersError {}
