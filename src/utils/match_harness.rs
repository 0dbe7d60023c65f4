//! Head-to-head engine match harness for local testing.
//!
//! Runs two `Engine` implementations against each other through a
//! `GameController`, one turn (a whole capture chain) at a time, and
//! aggregates seeded series into win counts.

use log::{debug, info};
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::time::Instant;

use crate::checkers_errors::CheckersResult;
use crate::engines::engine_trait::Engine;
use crate::game::game_controller::GameController;
use crate::game_state::board::Board;
use crate::game_state::checkers_types::Player;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    HumanWin,
    ComputerWin,
    /// Neither side ran out of moves within `max_turns`.
    MaxTurns,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerId {
    Player1,
    Player2,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesOutcome {
    PlayerWin { player: PlayerId, side: Player },
    MaxTurns,
}

#[derive(Debug, Clone)]
pub struct MatchConfig {
    pub max_turns: u32,
    pub human_starts: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            max_turns: 400,
            human_starts: true,
        }
    }
}

#[derive(Debug, Clone)]
pub struct MatchResult {
    pub outcome: MatchOutcome,
    /// Controller at the end of the match; its history is the full record.
    pub game: GameController,
    pub human_turns: u32,
    pub computer_turns: u32,
    pub captures: u32,
    pub human_total_time_ns: u128,
    pub computer_total_time_ns: u128,
}

#[derive(Debug, Clone)]
pub struct MatchSeriesConfig {
    pub games: u16,
    pub base_seed: u64,
    pub per_game: MatchConfig,
}

impl Default for MatchSeriesConfig {
    fn default() -> Self {
        Self {
            games: 9,
            base_seed: 0,
            per_game: MatchConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct MatchSeriesStats {
    pub games: u16,
    pub player1_wins: u16,
    pub player2_wins: u16,
    pub unfinished: u16,
    pub outcomes: Vec<SeriesOutcome>,
    pub total_turns: u32,
    pub total_captures: u32,
}

impl MatchSeriesStats {
    pub fn report(&self) -> String {
        let avg_turns = if self.games == 0 {
            0.0
        } else {
            f64::from(self.total_turns) / f64::from(self.games)
        };
        format!(
            "games={} player1_wins={} player2_wins={} unfinished={} avg_turns={:.1} captures={}",
            self.games,
            self.player1_wins,
            self.player2_wins,
            self.unfinished,
            avg_turns,
            self.total_captures
        )
    }
}

/// Play a single match from the standard setup.
pub fn play_engine_match(
    human: &mut dyn Engine,
    computer: &mut dyn Engine,
    config: &MatchConfig,
) -> CheckersResult<MatchResult> {
    let first = if config.human_starts {
        Player::Human
    } else {
        Player::Computer
    };
    play_engine_match_from_board(human, computer, Board::new_game(), first, config)
}

/// Play a single match from a caller-provided position.
pub fn play_engine_match_from_board(
    human: &mut dyn Engine,
    computer: &mut dyn Engine,
    board: Board,
    first: Player,
    config: &MatchConfig,
) -> CheckersResult<MatchResult> {
    human.new_game();
    computer.new_game();

    let mut game = GameController::with_board(board, first);
    let mut human_turns = 0u32;
    let mut computer_turns = 0u32;
    let mut captures = 0u32;
    let mut human_total_time_ns = 0u128;
    let mut computer_total_time_ns = 0u128;

    while !game.is_finished() && human_turns + computer_turns < config.max_turns {
        let mover = game.turn();
        let started = Instant::now();
        let reports = match mover {
            Player::Human => game.play_engine_turn(human)?,
            Player::Computer => game.play_engine_turn(computer)?,
        };
        let elapsed_ns = started.elapsed().as_nanos();

        let taken = reports.iter().filter(|r| r.captured_at.is_some()).count() as u32;
        captures = captures.saturating_add(taken);
        match mover {
            Player::Human => {
                human_turns = human_turns.saturating_add(1);
                human_total_time_ns = human_total_time_ns.saturating_add(elapsed_ns);
            }
            Player::Computer => {
                computer_turns = computer_turns.saturating_add(1);
                computer_total_time_ns = computer_total_time_ns.saturating_add(elapsed_ns);
            }
        }
    }

    let outcome = match game.result() {
        Some(result) if result.winner == Player::Human => MatchOutcome::HumanWin,
        Some(_) => MatchOutcome::ComputerWin,
        None => MatchOutcome::MaxTurns,
    };
    debug!(
        "match finished: {:?} after {} turns, {} captures",
        outcome,
        human_turns + computer_turns,
        captures
    );

    Ok(MatchResult {
        outcome,
        game,
        human_turns,
        computer_turns,
        captures,
        human_total_time_ns,
        computer_total_time_ns,
    })
}

/// Play a series of matches and aggregate win counts.
///
/// Which player takes the Human side is drawn each game from `base_seed`.
/// The factories receive the per-game seed.
pub fn play_engine_match_series<F1, F2>(
    player1_factory: F1,
    player2_factory: F2,
    config: &MatchSeriesConfig,
) -> CheckersResult<MatchSeriesStats>
where
    F1: Fn(u64) -> Box<dyn Engine>,
    F2: Fn(u64) -> Box<dyn Engine>,
{
    let mut stats = MatchSeriesStats {
        games: config.games,
        ..MatchSeriesStats::default()
    };
    let mut side_rng = StdRng::seed_from_u64(config.base_seed ^ 0xA5A5_5A5A_0123_4567);

    for i in 0..config.games {
        let player1_is_human = side_rng.random_bool(0.5);
        let seed = config.base_seed.wrapping_add(u64::from(i));
        let mut player1 = player1_factory(seed);
        let mut player2 = player2_factory(seed.wrapping_add(1));

        let result = if player1_is_human {
            play_engine_match(player1.as_mut(), player2.as_mut(), &config.per_game)?
        } else {
            play_engine_match(player2.as_mut(), player1.as_mut(), &config.per_game)?
        };
        stats.total_turns = stats
            .total_turns
            .saturating_add(result.human_turns + result.computer_turns);
        stats.total_captures = stats.total_captures.saturating_add(result.captures);

        let winner_side = match result.outcome {
            MatchOutcome::HumanWin => Some(Player::Human),
            MatchOutcome::ComputerWin => Some(Player::Computer),
            MatchOutcome::MaxTurns => None,
        };
        let mapped = match winner_side {
            Some(side) => {
                let player = if (side == Player::Human) == player1_is_human {
                    stats.player1_wins += 1;
                    PlayerId::Player1
                } else {
                    stats.player2_wins += 1;
                    PlayerId::Player2
                };
                SeriesOutcome::PlayerWin { player, side }
            }
            None => {
                stats.unfinished += 1;
                SeriesOutcome::MaxTurns
            }
        };
        stats.outcomes.push(mapped);

        info!(
            "[series] game {}/{} seed={} result={:?} p1_wins={} p2_wins={} unfinished={}",
            i + 1,
            config.games,
            seed,
            mapped,
            stats.player1_wins,
            stats.player2_wins,
            stats.unfinished
        );
    }

    Ok(stats)
}
