use crate::types::Player;

/// Errors reported by the board and the game engine.
///
/// Every error is detected before any state is touched, so a rejected
/// command leaves the game exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("({row}, {col}) is outside the {size}x{size} board")]
    OutOfBounds { row: isize, col: isize, size: usize },

    #[error("{player} cannot play at ({row}, {col})")]
    IllegalMove {
        row: usize,
        col: usize,
        player: Player,
    },

    #[error("game is already over")]
    GameOver,

    #[error("board size must be an even number between 4 and 26, got {0}")]
    InvalidBoardSize(usize),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_bounds_display_names_coordinates() {
        let err = GameError::OutOfBounds {
            row: -1,
            col: 3,
            size: 8,
        };
        assert_eq!(err.to_string(), "(-1, 3) is outside the 8x8 board");
    }

    #[test]
    fn illegal_move_display_names_player() {
        let err = GameError::IllegalMove {
            row: 0,
            col: 0,
            player: Player::Black,
        };
        assert_eq!(err.to_string(), "Black cannot play at (0, 0)");
    }
}
