//! Crate root module declarations for the Plum Checkers engine project.
//!
//! This file exposes all top-level subsystems (board state, move generation,
//! turn control, engines, configuration and text utilities) so binaries,
//! tests, and external tooling can import stable module paths.

pub mod checkers_errors;
pub mod config;

pub mod game_state {
    pub mod board;
    pub mod checkers_rules;
    pub mod checkers_types;
    pub mod square;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_generator;
    pub mod legal_move_set;
    pub mod move_engine;
    pub mod move_search;
    pub mod perft;
}

pub mod engines {
    pub mod engine_first_legal;
    pub mod engine_random;
    pub mod engine_trait;
}

pub mod game {
    pub mod game_controller;
}

pub mod utils {
    pub mod algebraic;
    pub mod match_harness;
    pub mod pdn;
    pub mod position_string;
    pub mod render_game_state;
}
