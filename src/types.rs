use std::fmt;

use serde::Serialize;

/// Unit vectors `(d_row, d_col)` for the eight capture directions.
pub const DIRECTIONS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// A side in the game. Black moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[repr(u8)]
pub enum Player {
    Black = 1,
    White = 2,
}

impl Player {
    pub fn opponent(self) -> Player {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }

    /// Convert from the wire encoding (1 = black, 2 = white).
    pub fn from_u8(value: u8) -> Option<Player> {
        match value {
            1 => Some(Player::Black),
            2 => Some(Player::White),
            _ => None,
        }
    }

    pub fn cell(self) -> CellState {
        match self {
            Player::Black => CellState::Black,
            Player::White => CellState::White,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::Black => f.write_str("Black"),
            Player::White => f.write_str("White"),
        }
    }
}

/// Contents of a single square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[repr(u8)]
pub enum CellState {
    #[default]
    Empty = 0,
    Black = 1,
    White = 2,
}

impl CellState {
    pub fn owner(self) -> Option<Player> {
        match self {
            CellState::Empty => None,
            CellState::Black => Some(Player::Black),
            CellState::White => Some(Player::White),
        }
    }
}

/// A board coordinate, 0-indexed from the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Row letter followed by the 1-based column, e.g. `(2, 3)` is `C4`.
    /// Rows past `Z` fall back to `R<row>C<col>`, both 1-based.
    pub fn notation(&self) -> String {
        let col = self.col.saturating_add(1);
        match u8::try_from(self.row).ok().filter(|row| *row < 26) {
            Some(row) => format!("{}{col}", char::from(b'A' + row)),
            None => format!("R{}C{col}", self.row.saturating_add(1)),
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.notation())
    }
}

/// Final (or current) result of comparing disc counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Outcome {
    Black,
    White,
    Draw,
}

impl Outcome {
    pub fn winner(self) -> Option<Player> {
        match self {
            Outcome::Black => Some(Player::Black),
            Outcome::White => Some(Player::White),
            Outcome::Draw => None,
        }
    }
}

/// Disc tally for the whole board. `black + white + empty` is always N².
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct DiscCount {
    pub black: usize,
    pub white: usize,
    pub empty: usize,
}

impl DiscCount {
    pub fn total(&self) -> usize {
        self.black + self.white + self.empty
    }
}

/// A move that was played, as shown in the move list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MoveRecord {
    pub player: Player,
    pub row: usize,
    pub col: usize,
}

impl MoveRecord {
    pub fn position(&self) -> Position {
        Position::new(self.row, self.col)
    }
}

impl fmt::Display for MoveRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} : {}", self.player, self.position())
    }
}

/// Display state handed to the presentation layer after every command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameView {
    pub size: usize,
    /// Row-major cells, 0 = empty, 1 = black, 2 = white.
    pub board: Vec<u8>,
    pub current_player: Player,
    pub black_count: usize,
    pub white_count: usize,
    pub legal_moves: Vec<Position>,
    pub is_game_over: bool,
    /// `None` while the game is running.
    pub winner: Option<Outcome>,
    pub turn_number: usize,
    /// Discs flipped by the move that produced this position; empty at the start.
    pub flipped: Vec<Position>,
    /// Player who was skipped right after the last move, if any.
    pub passed: Option<Player>,
}
