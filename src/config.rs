use serde::{Deserialize, Serialize};

use crate::error::GameError;

pub const DEFAULT_BOARD_SIZE: usize = 8;
pub const MIN_BOARD_SIZE: usize = 4;
/// One row letter per row in move notation.
pub const MAX_BOARD_SIZE: usize = 26;

/// Settings for a new game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub board_size: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            board_size: DEFAULT_BOARD_SIZE,
        }
    }
}

impl GameConfig {
    pub fn with_board_size(board_size: usize) -> Self {
        GameConfig { board_size }
    }

    pub fn validate(&self) -> Result<(), GameError> {
        validate_board_size(self.board_size)
    }
}

pub(crate) fn validate_board_size(size: usize) -> Result<(), GameError> {
    if size % 2 != 0 || !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size) {
        return Err(GameError::InvalidBoardSize(size));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_eight_by_eight() {
        let config = GameConfig::default();
        assert_eq!(config.board_size, 8);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn odd_tiny_and_huge_sizes_are_rejected() {
        for size in [0, 2, 7, 28] {
            assert_eq!(
                GameConfig::with_board_size(size).validate(),
                Err(GameError::InvalidBoardSize(size))
            );
        }
        assert!(GameConfig::with_board_size(4).validate().is_ok());
        assert!(GameConfig::with_board_size(26).validate().is_ok());
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: GameConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, GameConfig::default());

        let config: GameConfig = serde_json::from_str(r#"{"board_size": 10}"#).unwrap();
        assert_eq!(config.board_size, 10);
    }
}
