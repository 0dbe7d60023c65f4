//! Command-line front end.
//!
//! Usage:
//! `cargo run --bin checkers_cli -- play`
//! `cargo run --bin checkers_cli -- --seed 7 auto`
//! `cargo run --release --bin checkers_cli -- perft 6 --divide`

use std::error::Error;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::{CommandFactory, Parser, Subcommand};
use env_logger::Env;
use log::{debug, info};

use plum_checkers::checkers_errors::CheckersResult;
use plum_checkers::config::{GameConfig, CONFIG_PATH_ENV};
use plum_checkers::engines::engine_random::RandomEngine;
use plum_checkers::game::game_controller::{GameController, TurnOutcome};
use plum_checkers::game_state::board::Board;
use plum_checkers::game_state::checkers_types::{Player, Position};
use plum_checkers::move_generation::perft::{perft, perft_divide};
use plum_checkers::utils::algebraic::{algebraic_to_position, position_to_algebraic};
use plum_checkers::utils::match_harness::{
    play_engine_match, play_engine_match_series, MatchSeriesConfig,
};
use plum_checkers::utils::pdn::write_pdn;
use plum_checkers::utils::position_string::{generate_position, parse_position};
use plum_checkers::utils::render_game_state::{render_board, render_legal_moves};

#[derive(Parser)]
#[command(name = "checkers_cli", version, about = "Play and analyse checkers")]
struct Cli {
    /// YAML configuration file; falls back to $PLUM_CHECKERS_CONFIG.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Seed for the random engines, overriding the configuration.
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play as Human from stdin against a random Computer.
    Play,
    /// Random engine against random engine.
    Auto {
        /// Number of games; more than one prints series statistics only.
        #[arg(long, default_value_t = 1)]
        games: u16,
    },
    /// Count complete turns to the given depth.
    Perft {
        depth: u8,
        /// Position string to start from instead of the standard setup.
        #[arg(long)]
        position: Option<String>,
        /// Print the node count under each first move.
        #[arg(long)]
        divide: bool,
    },
}

fn main() -> Result<(), Box<dyn Error>> {
    let env = Env::default().filter_or("PLUM_CHECKERS_LOG", "info");
    env_logger::Builder::from_env(env).init();

    let cli = Cli::parse();
    let config_path = cli
        .config
        .clone()
        .or_else(|| std::env::var_os(CONFIG_PATH_ENV).map(PathBuf::from));
    let config = GameConfig::load(config_path.as_deref())?;
    let seed = cli.seed.or(config.seed).unwrap_or_else(rand::random);
    debug!("config {config:?}, seed {seed}");

    match cli.command {
        Some(Commands::Play) => play(&config, seed)?,
        Some(Commands::Auto { games }) => auto(&config, seed, games)?,
        Some(Commands::Perft {
            depth,
            position,
            divide,
        }) => run_perft(depth, position.as_deref(), divide)?,
        None => Cli::command().print_help()?,
    }
    Ok(())
}

fn play(config: &GameConfig, seed: u64) -> Result<(), Box<dyn Error>> {
    let mut game = GameController::with_board(config.new_board(), config.first_player());
    let mut computer = RandomEngine::with_seed(seed);
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    while !game.is_finished() {
        println!("{}\n", render_board(game.board()));
        match game.turn() {
            Player::Computer => {
                for report in game.play_engine_turn(&mut computer)? {
                    println!(
                        "computer: {}-{}",
                        square_name(report.applied.from),
                        square_name(report.applied.to)
                    );
                }
            }
            Player::Human => {
                if game.is_capture_turn() {
                    println!("capture is mandatory");
                }
                println!("{}", render_legal_moves(game.legal_moves()));
                print!("move> ");
                io::stdout().flush()?;

                let Some(line) = lines.next() else {
                    info!("input closed, leaving the game unfinished");
                    break;
                };
                let line = line?;
                if matches!(line.trim(), "quit" | "exit") {
                    break;
                }
                if let Err(e) = submit_human_input(&mut game, &line) {
                    println!("{e}");
                    debug!("rejected input {:?}: {e}", line.trim());
                }
            }
        }
    }

    if let Some(result) = game.result() {
        println!("{}\n", render_board(game.board()));
        println!("{} wins after {} moves", result.winner, result.move_count);
    }
    println!("{}", write_pdn(&game)?);
    Ok(())
}

/// Accepts `d3 e4`, `d3-e4` or a whole chain `d3xf5xd7`.
fn submit_human_input(game: &mut GameController, line: &str) -> CheckersResult<()> {
    let squares = line
        .split(|c: char| c.is_whitespace() || c == '-' || c == 'x')
        .filter(|part| !part.is_empty())
        .map(algebraic_to_position)
        .collect::<CheckersResult<Vec<Position>>>()?;

    if let [single] = squares.as_slice() {
        let destinations = game.select_source(*single)?;
        let names: Vec<String> = destinations.iter().map(|p| square_name(*p)).collect();
        println!("{} can reach {}", square_name(*single), names.join(" "));
        return Ok(());
    }

    for step in squares.windows(2) {
        let report = game.submit_move(step[0], step[1])?;
        if let TurnOutcome::ChainContinues { from } = report.outcome {
            println!("keep jumping from {}", square_name(from));
        }
    }
    Ok(())
}

fn auto(config: &GameConfig, seed: u64, games: u16) -> Result<(), Box<dyn Error>> {
    if games > 1 {
        let stats = play_engine_match_series(
            |s| Box::new(RandomEngine::with_seed(s)),
            |s| Box::new(RandomEngine::with_seed(s)),
            &MatchSeriesConfig {
                games,
                base_seed: seed,
                per_game: config.match_config(),
            },
        )?;
        println!("{}", stats.report());
        return Ok(());
    }

    let mut human = RandomEngine::with_seed(seed);
    let mut computer = RandomEngine::with_seed(seed.wrapping_add(1));
    let result = play_engine_match(&mut human, &mut computer, &config.match_config())?;
    println!("{}\n", render_board(result.game.board()));
    println!(
        "outcome={:?} turns={} captures={}",
        result.outcome,
        result.human_turns + result.computer_turns,
        result.captures
    );
    println!("{}", write_pdn(&result.game)?);
    Ok(())
}

fn run_perft(depth: u8, position: Option<&str>, divide: bool) -> Result<(), Box<dyn Error>> {
    let (board, turn) = match position {
        Some(text) => parse_position(text)?,
        None => (Board::new_game(), Player::Human),
    };
    println!("{}", generate_position(&board, turn));

    if divide {
        for ((from, to), nodes) in perft_divide(&board, turn, depth)? {
            println!("{}-{}: {nodes}", square_name(from), square_name(to));
        }
    }
    let counts = perft(&board, turn, depth)?;
    println!(
        "depth={depth} nodes={} captures={} promotions={}",
        counts.nodes, counts.captures, counts.promotions
    );
    Ok(())
}

fn square_name(position: Position) -> String {
    position_to_algebraic(position).unwrap_or_else(|_| position.to_string())
}
