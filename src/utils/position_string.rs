//! FEN-style position strings.
//!
//! Eight ranks from `y = 7` down to `y = 0`, separated by `/`. Digits count
//! empty squares, `h`/`H` is a Human man/king and `c`/`C` a Computer
//! man/king. A space and the side to move (`h` or `c`) follow.

use crate::checkers_errors::{CheckersError, CheckersResult};
use crate::game_state::board::Board;
use crate::game_state::checkers_rules::BOARD_SIZE;
use crate::game_state::checkers_types::{Piece, PieceKind, Player, Position};

pub fn parse_position(text: &str) -> CheckersResult<(Board, Player)> {
    let mut parts = text.split_whitespace();
    let board_part = parts
        .next()
        .ok_or_else(|| invalid("missing board layout"))?;
    let side_part = parts
        .next()
        .ok_or_else(|| invalid("missing side to move"))?;
    if parts.next().is_some() {
        return Err(invalid("extra trailing fields"));
    }

    let board = parse_board(board_part)?;
    let side = match side_part {
        "h" => Player::Human,
        "c" => Player::Computer,
        other => return Err(invalid(&format!("invalid side to move '{other}'"))),
    };
    Ok((board, side))
}

pub fn generate_position(board: &Board, side_to_move: Player) -> String {
    let mut ranks = Vec::with_capacity(BOARD_SIZE as usize);
    for y in (0..BOARD_SIZE).rev() {
        let mut rank = String::new();
        let mut empty_count = 0u8;
        for x in 0..BOARD_SIZE {
            match board.piece_at(Position::new(x, y)) {
                Some(piece) => {
                    if empty_count > 0 {
                        rank.push(char::from(b'0' + empty_count));
                        empty_count = 0;
                    }
                    rank.push(piece_char(piece));
                }
                None => empty_count += 1,
            }
        }
        if empty_count > 0 {
            rank.push(char::from(b'0' + empty_count));
        }
        ranks.push(rank);
    }

    let side = match side_to_move {
        Player::Human => 'h',
        Player::Computer => 'c',
    };
    format!("{} {side}", ranks.join("/"))
}

fn parse_board(board_part: &str) -> CheckersResult<Board> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != BOARD_SIZE as usize {
        return Err(invalid("board layout must contain 8 ranks"));
    }

    let mut board = Board::new_empty();
    for (rank_idx, rank_str) in ranks.iter().enumerate() {
        let y = BOARD_SIZE - 1 - rank_idx as i8;
        let mut x = 0i8;

        for ch in rank_str.chars() {
            if let Some(run) = ch.to_digit(10) {
                if !(1..=8).contains(&run) {
                    return Err(invalid(&format!("invalid empty-square count '{ch}'")));
                }
                x += run as i8;
                if x > BOARD_SIZE {
                    return Err(invalid("rank has too many files"));
                }
                continue;
            }

            let piece = piece_from_char(ch)
                .ok_or_else(|| invalid(&format!("invalid piece character '{ch}'")))?;
            if x >= BOARD_SIZE {
                return Err(invalid("rank has too many files"));
            }
            board
                .place(Position::new(x, y), piece)
                .map_err(|e| invalid(&e.to_string()))?;
            x += 1;
        }

        if x != BOARD_SIZE {
            return Err(invalid(&format!("rank {} does not sum to 8 files", y + 1)));
        }
    }
    Ok(board)
}

fn piece_from_char(ch: char) -> Option<Piece> {
    let owner = match ch.to_ascii_lowercase() {
        'h' => Player::Human,
        'c' => Player::Computer,
        _ => return None,
    };
    let kind = if ch.is_ascii_uppercase() {
        PieceKind::King
    } else {
        PieceKind::Man
    };
    Some(Piece { owner, kind })
}

pub fn piece_char(piece: Piece) -> char {
    match (piece.owner, piece.kind) {
        (Player::Human, PieceKind::Man) => 'h',
        (Player::Human, PieceKind::King) => 'H',
        (Player::Computer, PieceKind::Man) => 'c',
        (Player::Computer, PieceKind::King) => 'C',
    }
}

fn invalid(msg: &str) -> CheckersError {
    CheckersError::InvalidPositionString(msg.to_owned())
}
