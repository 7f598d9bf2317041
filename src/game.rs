use tracing::{debug, info, instrument};

use crate::board::Board;
use crate::config::GameConfig;
use crate::error::GameError;
use crate::history::History;
use crate::types::{DIRECTIONS, DiscCount, GameView, MoveRecord, Outcome, Player, Position};

/// Turn state machine. `GameOver` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    AwaitingMove(Player),
    GameOver(Outcome),
}

/// What a successful `apply_move` did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveOutcome {
    pub played: MoveRecord,
    /// Captured discs in row-major order.
    pub flipped: Vec<Position>,
    /// Set when the opponent had no reply and was skipped.
    pub passed: Option<Player>,
    pub status: GameStatus,
}

/// Authoritative Othello game: board, turn, and undo history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameEngine {
    board: Board,
    to_move: Player,
    status: GameStatus,
    history: History,
    last_flipped: Vec<Position>,
    last_passed: Option<Player>,
}

impl GameEngine {
    /// Standard 8x8 game, Black to move.
    pub fn new() -> Self {
        Self::start(Board::default(), Player::Black)
    }

    pub fn with_config(config: &GameConfig) -> Result<Self, GameError> {
        config.validate()?;
        let board = Board::standard(config.board_size)?;
        Ok(Self::start(board, Player::Black))
    }

    /// Starts from an arbitrary position. If `to_move` cannot play the turn
    /// passes, and if neither side can play the game is already over.
    pub fn from_position(board: Board, to_move: Player) -> Self {
        Self::start(board, to_move)
    }

    fn start(board: Board, to_move: Player) -> Self {
        let (to_move, status, passed) = resolve_turn(&board, to_move);
        let history = History::new(board.clone(), to_move, passed);
        Self {
            board,
            to_move,
            status,
            history,
            last_flipped: Vec::new(),
            last_passed: passed,
        }
    }

    /// Pure query. Occupied squares are `Ok(false)`; squares off the board
    /// are `Err(OutOfBounds)`.
    pub fn is_legal_move(
        &self,
        row: usize,
        col: usize,
        player: Player,
    ) -> Result<bool, GameError> {
        if !self.board.is_empty(row, col)? {
            return Ok(false);
        }
        Ok(can_capture(&self.board, Position::new(row, col), player))
    }

    pub fn has_any_legal_move(&self, player: Player) -> bool {
        has_any_move(&self.board, player)
    }

    /// Legal squares for `player`, row-major.
    pub fn legal_moves(&self, player: Player) -> Vec<Position> {
        legal_moves(&self.board, player)
    }

    /// Places a disc for `player`, flips every bracketed run and advances the
    /// turn. Nothing changes when an error is returned.
    #[instrument(skip(self), fields(to_move = ?self.to_move))]
    pub fn apply_move(
        &mut self,
        row: usize,
        col: usize,
        player: Player,
    ) -> Result<MoveOutcome, GameError> {
        let GameStatus::AwaitingMove(expected) = self.status else {
            return Err(GameError::GameOver);
        };
        if !self.is_legal_move(row, col, player)? || player != expected {
            return Err(GameError::IllegalMove { row, col, player });
        }

        let origin = Position::new(row, col);
        let mut flipped = captured_discs(&self.board, origin, player);
        flipped.sort_unstable();

        self.board.put(origin, player.cell());
        for &pos in &flipped {
            self.board.put(pos, player.cell());
        }

        let (to_move, status, passed) = resolve_turn(&self.board, player.opponent());
        let played = MoveRecord { player, row, col };
        self.to_move = to_move;
        self.status = status;
        self.history
            .push(self.board.clone(), to_move, played, flipped.clone(), passed);
        self.last_flipped = flipped.clone();
        self.last_passed = passed;

        debug!(%played, flipped = flipped.len(), "move applied");

        Ok(MoveOutcome {
            played,
            flipped,
            passed,
            status,
        })
    }

    /// Steps back one move. Returns `false` at the starting position.
    #[instrument(skip(self))]
    pub fn undo(&mut self) -> bool {
        let Some(previous) = self.history.pop() else {
            return false;
        };
        self.board = previous.board.clone();
        self.to_move = previous.to_move;
        // Every earlier snapshot had a move played from it.
        debug_assert!(has_any_move(&self.board, self.to_move));
        self.status = GameStatus::AwaitingMove(self.to_move);
        self.last_flipped = previous.flipped.clone();
        self.last_passed = previous.passed;

        debug!(turn = self.history.len(), to_move = %self.to_move, "move undone");
        true
    }

    /// Disc-count comparison. Valid at any time as the current leader.
    pub fn compute_winner(&self) -> Outcome {
        outcome_of(&self.board)
    }

    /// `None` until the game is over.
    pub fn winner(&self) -> Option<Outcome> {
        match self.status {
            GameStatus::GameOver(outcome) => Some(outcome),
            GameStatus::AwaitingMove(_) => None,
        }
    }

    pub fn is_game_over(&self) -> bool {
        matches!(self.status, GameStatus::GameOver(_))
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn current_player(&self) -> Player {
        self.to_move
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn board_snapshot(&self) -> Board {
        self.board.clone()
    }

    pub fn scores(&self) -> DiscCount {
        self.board.count_by_state()
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn move_log(&self) -> Vec<MoveRecord> {
        self.history.moves()
    }

    /// 1 at the start, +1 per move played.
    pub fn turn_number(&self) -> usize {
        self.history.len()
    }

    pub fn last_flipped(&self) -> &[Position] {
        &self.last_flipped
    }

    pub fn last_passed(&self) -> Option<Player> {
        self.last_passed
    }

    pub fn view(&self) -> GameView {
        let count = self.scores();
        let legal_moves = if self.is_game_over() {
            Vec::new()
        } else {
            self.legal_moves(self.to_move)
        };
        GameView {
            size: self.board.size(),
            board: self.board.to_vec(),
            current_player: self.to_move,
            black_count: count.black,
            white_count: count.white,
            legal_moves,
            is_game_over: self.is_game_over(),
            winner: self.winner(),
            turn_number: self.turn_number(),
            flipped: self.last_flipped.clone(),
            passed: self.last_passed,
        }
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Number of opponent discs bracketed from `origin` along `dir`: a run of
/// opponent discs closed by one of `player`'s own. Zero if the run is empty,
/// hits an empty square, or runs off the board.
fn bracketed_run(
    board: &Board,
    origin: Position,
    dir: (isize, isize),
    player: Player,
) -> usize {
    let own = player.cell();
    let theirs = player.opponent().cell();
    let mut run = 0;
    let mut cursor = origin;

    while let Some(next) = board.step(cursor, dir) {
        let cell = board.cell_at(next);
        if cell == theirs {
            run += 1;
            cursor = next;
        } else if cell == own {
            return run;
        } else {
            return 0;
        }
    }

    0
}

fn can_capture(board: &Board, origin: Position, player: Player) -> bool {
    DIRECTIONS
        .iter()
        .any(|&dir| bracketed_run(board, origin, dir, player) > 0)
}

fn captured_discs(board: &Board, origin: Position, player: Player) -> Vec<Position> {
    let mut flips = Vec::new();
    for dir in DIRECTIONS {
        let run = bracketed_run(board, origin, dir, player);
        let mut cursor = origin;
        for _ in 0..run {
            match board.step(cursor, dir) {
                Some(next) => {
                    flips.push(next);
                    cursor = next;
                }
                None => break,
            }
        }
    }
    flips
}

fn legal_moves(board: &Board, player: Player) -> Vec<Position> {
    board
        .cells()
        .filter(|(pos, cell)| cell.owner().is_none() && can_capture(board, *pos, player))
        .map(|(pos, _)| pos)
        .collect()
}

fn has_any_move(board: &Board, player: Player) -> bool {
    board
        .cells()
        .any(|(pos, cell)| cell.owner().is_none() && can_capture(board, pos, player))
}

fn outcome_of(board: &Board) -> Outcome {
    let count = board.count_by_state();
    if count.black > count.white {
        Outcome::Black
    } else if count.white > count.black {
        Outcome::White
    } else {
        Outcome::Draw
    }
}

/// Two-step pass check. `next` moves if it can; otherwise it is skipped and
/// the turn goes back to its opponent; if that player is stuck as well the
/// game ends. Returns the player to move, the status, and the skipped player.
fn resolve_turn(board: &Board, next: Player) -> (Player, GameStatus, Option<Player>) {
    if has_any_move(board, next) {
        return (next, GameStatus::AwaitingMove(next), None);
    }

    let back = next.opponent();
    if has_any_move(board, back) {
        info!(skipped = %next, to_move = %back, "{next} has no valid moves, turn passes");
        return (back, GameStatus::AwaitingMove(back), Some(next));
    }

    let outcome = outcome_of(board);
    let count = board.count_by_state();
    info!(?outcome, black = count.black, white = count.white, "game over");
    (back, GameStatus::GameOver(outcome), Some(next))
}
