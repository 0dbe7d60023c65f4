//! PDN-style game records.
//!
//! Tag pairs followed by numbered turns. A simple move is written `d3-e4`
//! and a capture chain lists every landing square, `d3xf5xd7`. Reading a
//! record replays it through a `GameController`, so an illegal turn is
//! rejected exactly as it would be at the board.

use std::collections::BTreeMap;

use chrono::Local;

use crate::checkers_errors::{CheckersError, CheckersResult};
use crate::game::game_controller::{GameController, TurnOutcome, TurnRecord};
use crate::game_state::board::Board;
use crate::game_state::checkers_rules::STARTING_POSITION;
use crate::game_state::checkers_types::{Player, Position};
use crate::utils::algebraic::{algebraic_to_position, position_to_algebraic};
use crate::utils::position_string::{generate_position, parse_position};

#[derive(Debug, Clone)]
pub struct PdnGame {
    pub headers: BTreeMap<String, String>,
    pub initial_board: Board,
    pub initial_turn: Player,
    /// The controller after the last recorded turn, ready to continue play.
    pub game: GameController,
    pub result: String,
}

/// Result token for a controller: `1-0` when Human won, `0-1` when
/// Computer won, `*` while the game is running.
pub fn result_token(game: &GameController) -> &'static str {
    match game.result() {
        Some(result) if result.winner == Player::Human => "1-0",
        Some(_) => "0-1",
        None => "*",
    }
}

pub fn write_pdn(game: &GameController) -> CheckersResult<String> {
    let mut headers = BTreeMap::<String, String>::new();
    headers.insert("Event".to_owned(), "Plum Checkers Game".to_owned());
    headers.insert("Date".to_owned(), Local::now().format("%Y.%m.%d").to_string());
    headers.insert("Human".to_owned(), "Human".to_owned());
    headers.insert("Computer".to_owned(), "Computer".to_owned());
    headers.insert("Result".to_owned(), result_token(game).to_owned());

    let initial = generate_position(game.initial_board(), game.initial_turn());
    if initial != STARTING_POSITION {
        headers.insert("SetUp".to_owned(), "1".to_owned());
        headers.insert("Position".to_owned(), initial);
    }

    let mut turns = game.history().to_vec();
    turns.extend(game.turn_in_progress().cloned());
    write_pdn_with_headers(game.initial_turn(), &turns, &headers)
}

pub fn write_pdn_with_headers(
    initial_turn: Player,
    turns: &[TurnRecord],
    headers: &BTreeMap<String, String>,
) -> CheckersResult<String> {
    let mut out = String::new();

    for (key, value) in headers {
        out.push_str(&format!("[{key} {value:?}]\n"));
    }
    out.push('\n');

    let offset = usize::from(initial_turn == Player::Computer);
    let mut movetext_parts = Vec::<String>::with_capacity(turns.len() + 1);
    for (idx, record) in turns.iter().enumerate() {
        let text = turn_to_text(record)?;
        let ply = idx + offset;
        let number = ply / 2 + 1;
        if ply % 2 == 0 {
            movetext_parts.push(format!("{number}. {text}"));
        } else if idx == 0 {
            movetext_parts.push(format!("{number}... {text}"));
        } else {
            movetext_parts.push(text);
        }
    }

    let result = headers
        .get("Result")
        .filter(|tag| is_result_token(tag))
        .map_or("*", String::as_str);
    movetext_parts.push(result.to_owned());
    out.push_str(&movetext_parts.join(" "));
    out.push('\n');

    Ok(out)
}

pub fn read_pdn(pdn: &str) -> CheckersResult<PdnGame> {
    let mut headers = BTreeMap::<String, String>::new();
    let mut movetext_lines = Vec::<String>::new();

    for line in pdn.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if trimmed.starts_with('[') {
            let (k, v) = parse_header_line(trimmed)?;
            headers.insert(k, v);
        } else {
            movetext_lines.push(trimmed.to_owned());
        }
    }

    let (initial_board, initial_turn) = if headers.get("SetUp").map(|x| x.as_str()) == Some("1")
    {
        let position = headers.get("Position").ok_or_else(|| {
            invalid("SetUp is 1 but the Position header is missing".to_owned())
        })?;
        parse_position(position)?
    } else {
        (Board::new_game(), Player::Human)
    };

    let mut game = GameController::with_board(initial_board.clone(), initial_turn);
    let mut result = "*".to_owned();

    let movetext = strip_comments(&movetext_lines.join(" "));
    let mut turns = Vec::new();
    for token in movetext.split_whitespace() {
        if is_move_number_token(token) {
            continue;
        }
        if is_result_token(token) {
            result = token.to_owned();
            break;
        }
        turns.push(token);
    }
    // Only the final turn may leave a capture chain open.
    for (idx, token) in turns.iter().enumerate() {
        replay_turn(&mut game, token, idx + 1 == turns.len())?;
    }

    if let Some(tag) = headers.get("Result").filter(|tag| is_result_token(tag)) {
        result = tag.clone();
    }

    Ok(PdnGame {
        headers,
        initial_board,
        initial_turn,
        game,
        result,
    })
}

fn turn_to_text(record: &TurnRecord) -> CheckersResult<String> {
    let separator = if record.is_capture { "x" } else { "-" };
    let squares = record
        .path
        .iter()
        .map(|pos| position_to_algebraic(*pos))
        .collect::<CheckersResult<Vec<_>>>()?;
    Ok(squares.join(separator))
}

fn parse_turn(token: &str) -> CheckersResult<(Vec<Position>, bool)> {
    let is_capture = token.contains('x');
    if is_capture && token.contains('-') {
        return Err(invalid(format!("mixed separators in turn '{token}'")));
    }
    let separator = if is_capture { 'x' } else { '-' };
    let path = token
        .split(separator)
        .map(algebraic_to_position)
        .collect::<CheckersResult<Vec<_>>>()?;
    if path.len() < 2 || (!is_capture && path.len() != 2) {
        return Err(invalid(format!("malformed turn '{token}'")));
    }
    Ok((path, is_capture))
}

fn replay_turn(
    game: &mut GameController,
    token: &str,
    may_stay_open: bool,
) -> CheckersResult<()> {
    let (path, is_capture) = parse_turn(token)?;
    for (hop, step) in path.windows(2).enumerate() {
        let report = game
            .submit_move(step[0], step[1])
            .map_err(|e| invalid(format!("turn '{token}' is illegal: {e}")))?;
        if report.applied.is_jump() != is_capture {
            return Err(invalid(format!("turn '{token}' uses the wrong separator")));
        }
        let last = hop + 2 == path.len();
        let chain_open = matches!(report.outcome, TurnOutcome::ChainContinues { .. });
        if last && chain_open && !may_stay_open {
            return Err(invalid(format!("turn '{token}' stops before the capture chain ends")));
        }
    }
    Ok(())
}

/// `[Key "value"]`, with `\"` and `\\` escapes inside the quotes.
fn parse_header_line(line: &str) -> CheckersResult<(String, String)> {
    let malformed = || invalid(format!("malformed tag pair: {line}"));
    let (key, quoted) = line
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .and_then(|inner| inner.split_once(char::is_whitespace))
        .ok_or_else(malformed)?;
    let quoted = quoted.trim();
    let body = quoted
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .filter(|_| !key.is_empty() && quoted.len() >= 2)
        .ok_or_else(malformed)?;

    let mut value = String::with_capacity(body.len());
    let mut chars = body.chars();
    while let Some(ch) = chars.next() {
        match ch {
            '\\' => value.extend(chars.next()),
            _ => value.push(ch),
        }
    }
    Ok((key.to_owned(), value))
}

fn strip_comments(text: &str) -> String {
    let mut out = String::new();
    let mut depth = 0usize;
    for ch in text.chars() {
        match ch {
            '{' => depth = depth.saturating_add(1),
            '}' => depth = depth.saturating_sub(1),
            _ if depth == 0 => out.push(ch),
            _ => {}
        }
    }
    out
}

fn is_move_number_token(token: &str) -> bool {
    let digits = token.trim_end_matches('.');
    digits.len() < token.len() && !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit())
}

fn is_result_token(token: &str) -> bool {
    matches!(token, "1-0" | "0-1" | "*")
}

fn invalid(msg: String) -> CheckersError {
    CheckersError::InvalidRecord(msg)
}
