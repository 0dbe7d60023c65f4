//! Strategy abstraction for automated players.
//!
//! An engine only ever sees the legal move set the controller currently
//! exposes and picks one (source, destination) pair from it. Engines never
//! generate moves themselves, so swapping strategies cannot change the rules.

use crate::checkers_errors::CheckersResult;
use crate::game_state::checkers_types::Position;
use crate::move_generation::legal_move_set::LegalMoveSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChosenMove {
    pub from: Position,
    pub to: Position,
}

#[derive(Debug, Clone, Default)]
pub struct EngineOutput {
    pub chosen: Option<ChosenMove>,
    pub info_lines: Vec<String>,
}

pub trait Engine: Send {
    fn name(&self) -> &str;

    fn new_game(&mut self) {}

    /// Pick a move from `legal_moves`. `chosen` is `None` only when the set
    /// is empty.
    fn choose_move(&mut self, legal_moves: &LegalMoveSet) -> CheckersResult<EngineOutput>;
}
