//! Random-move engine.
//!
//! Picks a source square uniformly among the keys of the legal move set,
//! then a destination uniformly among that key's entries. Moves from a
//! square with many options are therefore not weighted more heavily.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::checkers_errors::{CheckersError, CheckersResult};
use crate::engines::engine_trait::{ChosenMove, Engine, EngineOutput};
use crate::game_state::checkers_types::Position;
use crate::move_generation::legal_move_set::LegalMoveSet;

pub struct RandomEngine {
    rng: StdRng,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self::with_seed(rand::random())
    }

    /// Reproducible sequence of choices for a given seed.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "PlumCheckers Random"
    }

    fn choose_move(&mut self, legal_moves: &LegalMoveSet) -> CheckersResult<EngineOutput> {
        let mut out = EngineOutput::default();
        out.info_lines.push(format!(
            "info string random_engine sources {} moves {}",
            legal_moves.len(),
            legal_moves.move_count()
        ));

        if legal_moves.is_empty() {
            return Ok(out);
        }

        let sources: Vec<Position> = legal_moves.sources().collect();
        let from = *sources
            .as_slice()
            .choose(&mut self.rng)
            .ok_or(CheckersError::NoMoveChosen)?;
        let to = *legal_moves
            .validate_source(from)?
            .choose(&mut self.rng)
            .ok_or(CheckersError::NoMoveChosen)?;

        out.chosen = Some(ChosenMove { from, to });
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::board::Board;
    use crate::game_state::checkers_types::Player;
    use crate::move_generation::legal_move_generator::update_valid_moves;

    #[test]
    fn picks_only_from_the_exposed_set() {
        let legal = update_valid_moves(&Board::new_game(), Player::Human);
        let mut engine = RandomEngine::with_seed(7);
        for _ in 0..64 {
            let chosen = engine
                .choose_move(&legal)
                .expect("non-empty set")
                .chosen
                .expect("a move");
            assert!(legal.contains(chosen.from, chosen.to));
        }
    }

    #[test]
    fn empty_set_yields_no_move() {
        let mut engine = RandomEngine::with_seed(1);
        let out = engine.choose_move(&LegalMoveSet::new()).expect("no error");
        assert!(out.chosen.is_none());
        assert_eq!(out.info_lines.len(), 1);
    }

    #[test]
    fn same_seed_same_choices() {
        let legal = update_valid_moves(&Board::new_game(), Player::Computer);
        let mut a = RandomEngine::with_seed(42);
        let mut b = RandomEngine::with_seed(42);
        for _ in 0..16 {
            let left = a.choose_move(&legal).expect("move").chosen;
            let right = b.choose_move(&legal).expect("move").chosen;
            assert_eq!(left, right);
        }
    }

    #[test]
    fn every_source_gets_picked_eventually() {
        let legal = update_valid_moves(&Board::new_game(), Player::Human);
        let mut engine = RandomEngine::with_seed(3);
        let mut seen = std::collections::BTreeSet::new();
        for _ in 0..400 {
            let chosen = engine.choose_move(&legal).expect("move").chosen.expect("a move");
            seen.insert(chosen.from);
        }
        assert_eq!(seen.len(), legal.len());
    }
}
