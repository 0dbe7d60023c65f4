//! Game configuration loaded from YAML.
//!
//! Every field has a default, so a partial file (or no file at all) is
//! accepted. Only a file that exists but cannot be read or parsed is an
//! error.

use serde::Deserialize;
use std::{fs, path::Path};

use crate::checkers_errors::{CheckersError, CheckersResult};
use crate::game_state::board::Board;
use crate::game_state::checkers_rules::DEFAULT_CELL_SIZE;
use crate::game_state::checkers_types::Player;
use crate::utils::match_harness::MatchConfig;

/// Environment variable consulted when no `--config` path is given.
pub const CONFIG_PATH_ENV: &str = "PLUM_CHECKERS_CONFIG";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    /// Seed for the random engines; `None` draws a fresh one.
    pub seed: Option<u64>,
    /// Turn limit for automated games.
    pub max_turns: u32,
    pub cell_size: f64,
    pub human_starts: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: None,
            max_turns: 400,
            cell_size: DEFAULT_CELL_SIZE,
            human_starts: true,
        }
    }
}

impl GameConfig {
    pub fn load(path: Option<&Path>) -> CheckersResult<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path).map_err(|e| {
            CheckersError::Config(format!("failed to read {}: {e}", path.display()))
        })?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> CheckersResult<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(content)
            .map_err(|e| CheckersError::Config(format!("failed to parse config: {e}")))?;
        if !(config.cell_size.is_finite() && config.cell_size > 0.0) {
            return Err(CheckersError::Config(format!(
                "cell_size must be positive, got {}",
                config.cell_size
            )));
        }
        Ok(config)
    }

    pub fn first_player(&self) -> Player {
        if self.human_starts {
            Player::Human
        } else {
            Player::Computer
        }
    }

    /// Standard setup laid out with the configured cell size.
    pub fn new_board(&self) -> Board {
        let mut board = Board::with_cell_size(self.cell_size);
        board.set_up_pieces();
        board
    }

    pub fn match_config(&self) -> MatchConfig {
        MatchConfig {
            max_turns: self.max_turns,
            human_starts: self.human_starts,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_gives_defaults() {
        assert_eq!(GameConfig::load(None), Ok(GameConfig::default()));
        let path = Path::new("/nonexistent/plum_checkers.yaml");
        assert_eq!(GameConfig::load(Some(path)), Ok(GameConfig::default()));
    }

    #[test]
    fn partial_yaml_keeps_other_defaults() {
        let config = GameConfig::from_yaml("seed: 42\nhuman_starts: false\n").expect("valid yaml");
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.max_turns, 400);
        assert_eq!(config.cell_size, DEFAULT_CELL_SIZE);
        assert_eq!(config.first_player(), Player::Computer);
        assert!(!config.match_config().human_starts);
    }

    #[test]
    fn invalid_yaml_is_a_config_error() {
        for bad in ["max_turns: lots", "colour: red", "cell_size: -5.0"] {
            assert!(
                matches!(GameConfig::from_yaml(bad), Err(CheckersError::Config(_))),
                "{bad}"
            );
        }
    }

    #[test]
    fn board_uses_configured_cell_size() {
        let config = GameConfig::from_yaml("cell_size: 10.0").expect("valid yaml");
        let board = config.new_board();
        assert_eq!(board.cell_size(), 10.0);
        assert_eq!(board, Board::new_game());
        assert_eq!(board.locate_point(-35.0, -35.0), None);
        assert_eq!(
            board.locate_point(-25.0, -35.0),
            Some(crate::game_state::checkers_types::Position::new(1, 0))
        );
    }
}
