use crate::config::{DEFAULT_BOARD_SIZE, validate_board_size};
use crate::error::GameError;
use crate::types::{CellState, DiscCount, Position};

/// Square grid of cells, stored row-major. Knows nothing about the rules
/// beyond whether a square is empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<CellState>,
}

impl Board {
    /// Creates an empty `size`x`size` board.
    pub fn empty(size: usize) -> Result<Self, GameError> {
        validate_board_size(size)?;
        Ok(Self {
            size,
            cells: vec![CellState::Empty; size * size],
        })
    }

    /// Creates the opening position: the centre 2x2 block with white on the
    /// main diagonal and black on the anti-diagonal.
    pub fn standard(size: usize) -> Result<Self, GameError> {
        validate_board_size(size)?;
        Ok(Self::opening(size))
    }

    fn opening(size: usize) -> Self {
        let mut board = Self {
            size,
            cells: vec![CellState::Empty; size * size],
        };
        let center = size / 2;
        board.cells[(center - 1) * size + center - 1] = CellState::White;
        board.cells[center * size + center] = CellState::White;
        board.cells[(center - 1) * size + center] = CellState::Black;
        board.cells[center * size + center - 1] = CellState::Black;
        board
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn get(&self, row: usize, col: usize) -> Result<CellState, GameError> {
        let idx = self.index(row, col)?;
        Ok(self.cells[idx])
    }

    /// Overwrites a cell. No legality check.
    pub fn set(&mut self, row: usize, col: usize, state: CellState) -> Result<(), GameError> {
        let idx = self.index(row, col)?;
        self.cells[idx] = state;
        Ok(())
    }

    pub fn is_empty(&self, row: usize, col: usize) -> Result<bool, GameError> {
        Ok(self.get(row, col)? == CellState::Empty)
    }

    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.size && col < self.size
    }

    /// Steps one square from `pos` along `(d_row, d_col)`, or `None` at the edge.
    pub fn step(&self, pos: Position, (d_row, d_col): (isize, isize)) -> Option<Position> {
        let row = pos.row.checked_add_signed(d_row)?;
        let col = pos.col.checked_add_signed(d_col)?;
        self.contains(row, col).then_some(Position { row, col })
    }

    /// Scans the full grid.
    pub fn count_by_state(&self) -> DiscCount {
        let mut count = DiscCount::default();
        for cell in &self.cells {
            match cell {
                CellState::Empty => count.empty += 1,
                CellState::Black => count.black += 1,
                CellState::White => count.white += 1,
            }
        }
        count
    }

    /// Iterates `(position, state)` in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Position, CellState)> + '_ {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .map(move |(idx, &cell)| (Position::new(idx / size, idx % size), cell))
    }

    /// Converts the board to row-major `u8`s where 0=empty, 1=black, 2=white.
    pub fn to_vec(&self) -> Vec<u8> {
        self.cells.iter().map(|&cell| cell as u8).collect()
    }

    pub(crate) fn cell_at(&self, pos: Position) -> CellState {
        self.cells[pos.row * self.size + pos.col]
    }

    pub(crate) fn put(&mut self, pos: Position, state: CellState) {
        self.cells[pos.row * self.size + pos.col] = state;
    }

    fn index(&self, row: usize, col: usize) -> Result<usize, GameError> {
        if !self.contains(row, col) {
            return Err(GameError::OutOfBounds {
                row: isize::try_from(row).unwrap_or(isize::MAX),
                col: isize::try_from(col).unwrap_or(isize::MAX),
                size: self.size,
            });
        }
        Ok(row * self.size + col)
    }
}

impl Default for Board {
    /// The 8x8 opening position.
    fn default() -> Self {
        Self::opening(DEFAULT_BOARD_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_opening_places_four_centre_discs() {
        let board = Board::standard(8).unwrap();

        assert_eq!(board.get(3, 3).unwrap(), CellState::White);
        assert_eq!(board.get(4, 4).unwrap(), CellState::White);
        assert_eq!(board.get(3, 4).unwrap(), CellState::Black);
        assert_eq!(board.get(4, 3).unwrap(), CellState::Black);

        let count = board.count_by_state();
        assert_eq!(count.black, 2);
        assert_eq!(count.white, 2);
        assert_eq!(count.empty, 60);
    }

    #[test]
    fn standard_opening_scales_with_size() {
        let board = Board::standard(6).unwrap();

        assert_eq!(board.size(), 6);
        assert_eq!(board.get(2, 2).unwrap(), CellState::White);
        assert_eq!(board.get(3, 3).unwrap(), CellState::White);
        assert_eq!(board.get(2, 3).unwrap(), CellState::Black);
        assert_eq!(board.get(3, 2).unwrap(), CellState::Black);
        assert_eq!(board.count_by_state().total(), 36);
    }

    #[test]
    fn get_and_set_reject_out_of_bounds() {
        let mut board = Board::empty(8).unwrap();

        let expected = GameError::OutOfBounds {
            row: 8,
            col: 0,
            size: 8,
        };
        assert_eq!(board.get(8, 0), Err(expected.clone()));
        assert_eq!(board.set(8, 0, CellState::Black), Err(expected));
        assert!(board.is_empty(0, 8).is_err());
        assert_eq!(
            board.get(0, usize::MAX),
            Err(GameError::OutOfBounds {
                row: 0,
                col: isize::MAX,
                size: 8
            })
        );
        assert_eq!(board, Board::empty(8).unwrap());
    }

    #[test]
    fn set_overwrites_unconditionally() {
        let mut board = Board::standard(8).unwrap();

        board.set(3, 3, CellState::Black).unwrap();
        board.set(0, 0, CellState::White).unwrap();

        assert_eq!(board.get(3, 3).unwrap(), CellState::Black);
        assert!(!board.is_empty(0, 0).unwrap());
        assert!(board.is_empty(7, 7).unwrap());
    }

    #[test]
    fn clone_is_independent() {
        let original = Board::standard(8).unwrap();
        let mut copy = original.clone();

        copy.set(0, 0, CellState::Black).unwrap();

        assert!(original.is_empty(0, 0).unwrap());
        assert_ne!(original, copy);
    }

    #[test]
    fn step_stops_at_every_edge() {
        let board = Board::empty(4).unwrap();

        assert_eq!(board.step(Position::new(0, 0), (-1, 0)), None);
        assert_eq!(board.step(Position::new(0, 0), (0, -1)), None);
        assert_eq!(board.step(Position::new(3, 3), (1, 1)), None);
        assert_eq!(
            board.step(Position::new(1, 1), (1, -1)),
            Some(Position::new(2, 0))
        );
    }

    #[test]
    fn to_vec_is_row_major() {
        let board = Board::standard(4).unwrap();

        assert_eq!(
            board.to_vec(),
            vec![0, 0, 0, 0, 0, 2, 1, 0, 0, 1, 2, 0, 0, 0, 0, 0]
        );
    }

    #[test]
    fn default_is_standard_opening() {
        assert_eq!(Board::default(), Board::standard(8).unwrap());
    }

    #[test]
    fn invalid_sizes_are_rejected() {
        assert_eq!(Board::empty(5), Err(GameError::InvalidBoardSize(5)));
        assert_eq!(Board::standard(2), Err(GameError::InvalidBoardSize(2)));
    }
}
