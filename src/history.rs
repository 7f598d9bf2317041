use crate::board::Board;
use crate::types::{MoveRecord, Player, Position};

/// Immutable copy of a position, tagged with the move that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistorySnapshot {
    pub board: Board,
    pub to_move: Player,
    /// `None` only for the first entry.
    pub last_move: Option<MoveRecord>,
    /// Discs flipped by `last_move`, row-major.
    pub flipped: Vec<Position>,
    /// Player skipped when this position was reached.
    pub passed: Option<Player>,
}

/// Linear undo stack. Never empty: the first entry is the starting position
/// and is never removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct History {
    entries: Vec<HistorySnapshot>,
}

impl History {
    pub fn new(board: Board, to_move: Player, passed: Option<Player>) -> Self {
        Self {
            entries: vec![HistorySnapshot {
                board,
                to_move,
                last_move: None,
                flipped: Vec::new(),
                passed,
            }],
        }
    }

    pub fn push(
        &mut self,
        board: Board,
        to_move: Player,
        played: MoveRecord,
        flipped: Vec<Position>,
        passed: Option<Player>,
    ) {
        self.entries.push(HistorySnapshot {
            board,
            to_move,
            last_move: Some(played),
            flipped,
            passed,
        });
    }

    /// Drops the newest entry and returns the one now on top.
    /// Returns `None` without changing anything when only the start remains.
    pub fn pop(&mut self) -> Option<&HistorySnapshot> {
        if self.entries.len() <= 1 {
            return None;
        }
        self.entries.pop();
        self.entries.last()
    }

    pub fn latest(&self) -> &HistorySnapshot {
        // The stack is never empty.
        &self.entries[self.entries.len() - 1]
    }

    pub fn initial(&self) -> &HistorySnapshot {
        &self.entries[0]
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always `false`: the starting position is never removed.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn snapshots(&self) -> &[HistorySnapshot] {
        &self.entries
    }

    /// Moves played so far, oldest first.
    pub fn moves(&self) -> Vec<MoveRecord> {
        self.entries.iter().filter_map(|entry| entry.last_move).collect()
    }
}
