//! Turn orchestration.
//!
//! `GameController` owns the `MoveEngine`, tracks whose turn it is, the move
//! counter and whether a capture chain is in progress, and exposes the
//! current `LegalMoveSet` to whatever drives the game (a human input layer
//! or an automated `Engine`). Every selection is validated against that set
//! before the board is touched.
//!
//! Per turn the controller walks through:
//! `AwaitingSource -> AwaitingDestination -> (applied)`, then either back to
//! `AwaitingDestination` on the landing square while the same piece can keep
//! jumping, or on to the other side's `AwaitingSource`. When the side to move
//! has no legal move the game is `Finished` and that side has lost.

use log::{debug, info};

use crate::checkers_errors::{CheckersError, CheckersResult};
use crate::engines::engine_trait::Engine;
use crate::game_state::board::Board;
use crate::game_state::checkers_types::{Player, Position};
use crate::move_generation::legal_move_apply::AppliedMove;
use crate::move_generation::legal_move_set::LegalMoveSet;
use crate::move_generation::move_engine::MoveEngine;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnPhase {
    AwaitingSource,
    AwaitingDestination { from: Position },
    Finished { loser: Player },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameResult {
    pub winner: Player,
    pub loser: Player,
    /// Turns started, counting the first one as 1.
    pub move_count: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOutcome {
    /// The same piece must keep jumping from `from`.
    ChainContinues { from: Position },
    TurnPassed { to_move: Player },
    GameOver(GameResult),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveReport {
    pub mover: Player,
    pub applied: AppliedMove,
    pub captured_at: Option<Position>,
    pub outcome: TurnOutcome,
}

/// One completed (or in-progress) turn: the squares the moving piece
/// visited, starting with its origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnRecord {
    pub player: Player,
    pub path: Vec<Position>,
    pub is_capture: bool,
}

#[derive(Debug, Clone)]
pub struct GameController {
    engine: MoveEngine,
    initial_board: Board,
    initial_turn: Player,
    turn: Player,
    move_count: u32,
    is_capture_turn: bool,
    phase: TurnPhase,
    legal_moves: LegalMoveSet,
    active_square: Option<Position>,
    history: Vec<TurnRecord>,
    current: Option<TurnRecord>,
}

impl Default for GameController {
    fn default() -> Self {
        Self::new()
    }
}

impl GameController {
    /// Standard setup, Human to move.
    pub fn new() -> Self {
        Self::with_board(Board::new_game(), Player::Human)
    }

    pub fn with_board(board: Board, turn: Player) -> Self {
        let mut controller = Self {
            engine: MoveEngine::new(board.clone()),
            initial_board: board,
            initial_turn: turn,
            turn,
            move_count: 1,
            is_capture_turn: false,
            phase: TurnPhase::AwaitingSource,
            legal_moves: LegalMoveSet::new(),
            active_square: None,
            history: Vec::new(),
            current: None,
        };
        controller.begin_turn();
        controller
    }

    #[inline]
    pub fn board(&self) -> &Board {
        self.engine.board()
    }

    #[inline]
    pub fn initial_board(&self) -> &Board {
        &self.initial_board
    }

    #[inline]
    pub fn initial_turn(&self) -> Player {
        self.initial_turn
    }

    #[inline]
    pub fn turn(&self) -> Player {
        self.turn
    }

    #[inline]
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    #[inline]
    pub fn is_capture_turn(&self) -> bool {
        self.is_capture_turn
    }

    #[inline]
    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    /// The set callers must choose from. Re-read it after every move: it
    /// narrows to a single entry while a capture chain continues.
    #[inline]
    pub fn legal_moves(&self) -> &LegalMoveSet {
        &self.legal_moves
    }

    /// The piece currently chaining jumps, if any.
    #[inline]
    pub fn active_square(&self) -> Option<Position> {
        self.active_square
    }

    #[inline]
    pub fn history(&self) -> &[TurnRecord] {
        &self.history
    }

    /// Squares visited so far by a capture chain that has not ended yet.
    #[inline]
    pub fn turn_in_progress(&self) -> Option<&TurnRecord> {
        self.current.as_ref()
    }

    pub fn is_finished(&self) -> bool {
        matches!(self.phase, TurnPhase::Finished { .. })
    }

    pub fn result(&self) -> Option<GameResult> {
        match self.phase {
            TurnPhase::Finished { loser } => Some(GameResult {
                winner: loser.opposite(),
                loser,
                move_count: self.move_count,
            }),
            _ => None,
        }
    }

    fn ensure_running(&self) -> CheckersResult<()> {
        match self.phase {
            TurnPhase::Finished { loser } => Err(CheckersError::GameOver { loser }),
            _ => Ok(()),
        }
    }

    /// Pick the piece to move. While a chain continues only the active
    /// square is accepted.
    pub fn select_source(&mut self, from: Position) -> CheckersResult<&[Position]> {
        self.ensure_running()?;
        self.legal_moves.validate_source(from)?;
        self.phase = TurnPhase::AwaitingDestination { from };
        self.legal_moves.validate_source(from)
    }

    /// Move the selected piece to `to`.
    pub fn select_destination(&mut self, to: Position) -> CheckersResult<MoveReport> {
        self.ensure_running()?;
        let from = match self.phase {
            TurnPhase::AwaitingDestination { from } => from,
            _ => return Err(CheckersError::NoSourceSelected),
        };
        self.legal_moves.validate(from, to)?;
        self.play_validated(from, to)
    }

    /// Select and move in one step. Nothing changes if the pair is not in
    /// the current legal move set.
    pub fn submit_move(&mut self, from: Position, to: Position) -> CheckersResult<MoveReport> {
        self.ensure_running()?;
        self.legal_moves.validate(from, to)?;
        self.phase = TurnPhase::AwaitingDestination { from };
        self.play_validated(from, to)
    }

    /// Let `engine` play the side to move until its turn ends, following any
    /// capture chain to the end.
    pub fn play_engine_turn(&mut self, engine: &mut dyn Engine) -> CheckersResult<Vec<MoveReport>> {
        self.ensure_running()?;
        let mut reports = Vec::new();
        loop {
            let output = engine.choose_move(&self.legal_moves)?;
            for line in &output.info_lines {
                debug!("{}: {line}", engine.name());
            }
            let chosen = output.chosen.ok_or(CheckersError::NoMoveChosen)?;
            let report = self.submit_move(chosen.from, chosen.to)?;
            reports.push(report);
            if !matches!(report.outcome, TurnOutcome::ChainContinues { .. }) {
                return Ok(reports);
            }
        }
    }

    fn play_validated(&mut self, from: Position, to: Position) -> CheckersResult<MoveReport> {
        let mover = self.turn;
        let applied = self.engine.apply_move(from, to, mover)?;

        let record = self.current.get_or_insert_with(|| TurnRecord {
            player: mover,
            path: vec![from],
            is_capture: false,
        });
        record.path.push(to);

        let mut captured_at = None;
        if applied.is_jump() {
            record.is_capture = true;
            let capture = self.engine.continue_capture(from, to);
            captured_at = Some(capture.captured_at);
            if capture.chain_continues() {
                debug!("{mover} keeps capturing from ({to})");
                self.legal_moves = capture.continuation;
                self.is_capture_turn = true;
                self.active_square = Some(to);
                self.phase = TurnPhase::AwaitingDestination { from: to };
                return Ok(MoveReport {
                    mover,
                    applied,
                    captured_at,
                    outcome: TurnOutcome::ChainContinues { from: to },
                });
            }
        }

        let outcome = self.end_turn();
        Ok(MoveReport {
            mover,
            applied,
            captured_at,
            outcome,
        })
    }

    fn end_turn(&mut self) -> TurnOutcome {
        if let Some(record) = self.current.take() {
            self.history.push(record);
        }
        self.turn = self.turn.opposite();
        self.begin_turn();
        match self.result() {
            Some(result) => TurnOutcome::GameOver(result),
            None => {
                self.move_count += 1;
                TurnOutcome::TurnPassed { to_move: self.turn }
            }
        }
    }

    fn begin_turn(&mut self) {
        self.active_square = None;
        self.legal_moves = self.engine.update_valid_moves(self.turn);
        self.is_capture_turn = self.legal_moves.is_capture();
        if self.legal_moves.is_empty() {
            self.phase = TurnPhase::Finished { loser: self.turn };
            info!(
                "{} has no legal moves, {} wins after {} moves",
                self.turn,
                self.turn.opposite(),
                self.move_count
            );
        } else {
            self.phase = TurnPhase::AwaitingSource;
        }
    }
}
