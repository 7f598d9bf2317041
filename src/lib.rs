pub mod board;
pub mod config;
pub mod error;
pub mod game;
pub mod history;
pub mod types;
pub mod wasm;

pub use board::Board;
pub use config::GameConfig;
pub use error::GameError;
pub use game::{GameEngine, GameStatus, MoveOutcome};
pub use history::{History, HistorySnapshot};
pub use types::{CellState, DiscCount, GameView, MoveRecord, Outcome, Player, Position};
