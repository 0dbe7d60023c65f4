//! Deterministic engine: first source in scan order, first destination.
//!
//! Useful for reproducible scripted games and tests.

use crate::checkers_errors::CheckersResult;
use crate::engines::engine_trait::{ChosenMove, Engine, EngineOutput};
use crate::move_generation::legal_move_set::LegalMoveSet;

#[derive(Debug, Default)]
pub struct FirstLegalEngine;

impl Engine for FirstLegalEngine {
    fn name(&self) -> &str {
        "PlumCheckers FirstLegal"
    }

    fn choose_move(&mut self, legal_moves: &LegalMoveSet) -> CheckersResult<EngineOutput> {
        let chosen = legal_moves
            .pairs()
            .next()
            .map(|(from, to)| ChosenMove { from, to });
        Ok(EngineOutput {
            chosen,
            info_lines: Vec::new(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::board::Board;
    use crate::game_state::checkers_types::{Player, Position};
    use crate::move_generation::legal_move_generator::update_valid_moves;

    #[test]
    fn picks_first_pair_in_scan_order() {
        let legal = update_valid_moves(&Board::new_game(), Player::Human);
        let out = FirstLegalEngine.choose_move(&legal).expect("no error");
        assert_eq!(
            out.chosen,
            Some(ChosenMove {
                from: Position::new(1, 2),
                to: Position::new(0, 3),
            })
        );
    }
}
