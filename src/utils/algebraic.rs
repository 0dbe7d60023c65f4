//! Square-name conversion helpers.
//!
//! Files `a..h` map to `x = 0..7`, ranks `1..8` to `y = 0..7`, so `(3, 2)`
//! is `d3`.

use crate::checkers_errors::{CheckersError, CheckersResult};
use crate::game_state::checkers_types::Position;

pub fn position_to_algebraic(position: Position) -> CheckersResult<String> {
    if !position.is_on_board() {
        return Err(CheckersError::OutOfBounds {
            x: position.x,
            y: position.y,
        });
    }
    let file = char::from(b'a' + position.x as u8);
    let rank = char::from(b'1' + position.y as u8);
    Ok(format!("{file}{rank}"))
}

pub fn algebraic_to_position(text: &str) -> CheckersResult<Position> {
    let bytes = text.trim().as_bytes();
    if bytes.len() != 2 {
        return Err(CheckersError::InvalidAlgebraic(text.to_owned()));
    }

    let file = bytes[0].to_ascii_lowercase();
    let rank = bytes[1];
    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(CheckersError::InvalidAlgebraic(text.to_owned()));
    }

    Ok(Position::new((file - b'a') as i8, (rank - b'1') as i8))
}
