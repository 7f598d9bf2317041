//! WASM bindings for the game engine.
//!
//! The browser front end owns rendering; it sends commands here and redraws
//! from `state()` afterwards.

use wasm_bindgen::prelude::*;

use crate::config::GameConfig;
use crate::error::GameError;
use crate::game::GameEngine;
use crate::types::{Outcome, Player};

/// JS-facing wrapper around `GameEngine`.
#[wasm_bindgen]
pub struct WasmGame {
    inner: GameEngine,
}

#[wasm_bindgen]
impl WasmGame {
    /// New game on a `size`x`size` board (8 when omitted).
    #[wasm_bindgen(constructor)]
    pub fn new(size: Option<u32>) -> Result<WasmGame, JsError> {
        let config = match size {
            Some(size) => GameConfig::with_board_size(size as usize),
            None => GameConfig::default(),
        };
        Ok(WasmGame {
            inner: GameEngine::with_config(&config)?,
        })
    }

    /// Player to move (1 = black, 2 = white).
    #[wasm_bindgen(js_name = currentPlayer)]
    pub fn current_player(&self) -> u8 {
        self.inner.current_player() as u8
    }

    #[wasm_bindgen(js_name = isLegalMove)]
    pub fn is_legal_move(&self, row: i32, col: i32, player: u8) -> Result<bool, JsError> {
        let (row, col) = coords(&self.inner, row, col)?;
        Ok(self.inner.is_legal_move(row, col, parse_player(player)?)?)
    }

    /// Applies a move and returns the new display state.
    #[wasm_bindgen(js_name = applyMove)]
    pub fn apply_move(&mut self, row: i32, col: i32, player: u8) -> Result<JsValue, JsError> {
        let (row, col) = coords(&self.inner, row, col)?;
        self.inner.apply_move(row, col, parse_player(player)?)?;
        self.state()
    }

    pub fn undo(&mut self) -> bool {
        self.inner.undo()
    }

    /// Full display state: cells, turn, counts, highlights, result.
    pub fn state(&self) -> Result<JsValue, JsError> {
        Ok(serde_wasm_bindgen::to_value(&self.inner.view())?)
    }

    /// Legal squares for `player` as `[{ row, col }, ...]`.
    #[wasm_bindgen(js_name = legalMoves)]
    pub fn legal_moves(&self, player: u8) -> Result<JsValue, JsError> {
        let moves = self.inner.legal_moves(parse_player(player)?);
        Ok(serde_wasm_bindgen::to_value(&moves)?)
    }

    /// `[black, white]` disc counts.
    pub fn scores(&self) -> Vec<u32> {
        let count = self.inner.scores();
        vec![count.black as u32, count.white as u32]
    }

    #[wasm_bindgen(js_name = isGameOver)]
    pub fn is_game_over(&self) -> bool {
        self.inner.is_game_over()
    }

    /// `undefined` while playing, then 0 (draw), 1 (black) or 2 (white).
    pub fn winner(&self) -> Option<u8> {
        self.inner.winner().map(|outcome| match outcome {
            Outcome::Draw => 0,
            Outcome::Black => Player::Black as u8,
            Outcome::White => Player::White as u8,
        })
    }

    /// Move list entries such as `"Black : C4"`.
    #[wasm_bindgen(js_name = moveLog)]
    pub fn move_log(&self) -> Vec<String> {
        self.inner
            .move_log()
            .iter()
            .map(ToString::to_string)
            .collect()
    }

    #[wasm_bindgen(js_name = turnNumber)]
    pub fn turn_number(&self) -> u32 {
        self.inner.turn_number() as u32
    }
}

fn parse_player(value: u8) -> Result<Player, JsError> {
    Player::from_u8(value).ok_or_else(|| JsError::new(&format!("invalid player: {value}")))
}

fn coords(game: &GameEngine, row: i32, col: i32) -> Result<(usize, usize), GameError> {
    match (usize::try_from(row), usize::try_from(col)) {
        (Ok(r), Ok(c)) => Ok((r, c)),
        _ => Err(GameError::OutOfBounds {
            row: row as isize,
            col: col as isize,
            size: game.board().size(),
        }),
    }
}
