use rand::{seq::SliceRandom, Rng};
use std::fmt;

use crate::error::PuzzleError;

/// Largest supported grid side. Keeps every cell value inside a `u8` key.
pub const MAX_SIZE: usize = 15;

/// Direction the blank travels in a single move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    Up,
    Down,
    Left,
    Right,
}

impl Move {
    /// Order in which children are generated. Fixes which shortest path wins ties.
    pub const ALL: [Move; 4] = [Move::Up, Move::Down, Move::Left, Move::Right];

    /// `(row, col)` delta applied to the blank.
    pub fn as_offset(&self) -> (isize, isize) {
        match self {
            Move::Up => (-1, 0),
            Move::Down => (1, 0),
            Move::Left => (0, -1),
            Move::Right => (0, 1),
        }
    }

    pub fn opposite(&self) -> Self {
        match self {
            Move::Up => Move::Down,
            Move::Down => Move::Up,
            Move::Left => Move::Right,
            Move::Right => Move::Left,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match *self {
            Move::Up => "Up",
            Move::Down => "Down",
            Move::Left => "Left",
            Move::Right => "Right",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Neighbour in direction `mv`, or `None` when it falls off a `size`×`size` grid.
    pub fn step(&self, mv: Move, size: usize) -> Option<Position> {
        let (dr, dc) = mv.as_offset();
        let row = self.row.checked_add_signed(dr)?;
        let col = self.col.checked_add_signed(dc)?;
        (row < size && col < size).then_some(Position { row, col })
    }
}

/// Canonical identity of a board: its cells flattened in row-major order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BoardKey(Box<[u8]>);

impl BoardKey {
    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }
}

/// An N×N sliding-tile grid. `0` is the blank.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    size: usize,
    cells: Vec<u32>,
}

impl Board {
    /// The solved board: the value at `(row, col)` is `col + size * row`.
    pub fn goal(size: usize) -> Self {
        Self {
            size,
            cells: (0..(size * size) as u32).collect(),
        }
    }

    /// Builds a board from row-major cells. Only the cell count is checked here;
    /// call [`Board::validate`] for the permutation invariant.
    pub fn from_cells(size: usize, cells: Vec<u32>) -> Result<Self, PuzzleError> {
        if size == 0 || size > MAX_SIZE {
            return Err(PuzzleError::UnsupportedSize(size));
        }
        if cells.len() != size * size {
            return Err(PuzzleError::WrongCellCount {
                expected: size * size,
                found: cells.len(),
            });
        }
        Ok(Self { size, cells })
    }

    /// Builds a board from rows. The side length is the number of rows.
    pub fn from_rows(rows: Vec<Vec<u32>>) -> Result<Self, PuzzleError> {
        let size = rows.len();
        let cells: Vec<u32> = rows.into_iter().flatten().collect();
        Self::from_cells(size, cells)
    }

    /// Random solvable board, shuffled until the parity check passes.
    pub fn shuffled<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Result<Self, PuzzleError> {
        if size == 0 || size > MAX_SIZE {
            return Err(PuzzleError::UnsupportedSize(size));
        }
        let mut board = Self::goal(size);
        loop {
            board.cells.shuffle(rng);
            if board.is_solvable() {
                return Ok(board);
            }
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn cells(&self) -> &[u32] {
        &self.cells
    }

    pub fn rows(&self) -> impl Iterator<Item = &[u32]> {
        self.cells.chunks(self.size)
    }

    pub fn get(&self, pos: Position) -> u32 {
        self.cells[pos.row * self.size + pos.col]
    }

    /// Checks that the cells are a permutation of `0..N²`.
    pub fn validate(&self) -> Result<(), PuzzleError> {
        let n = self.cells.len();
        let mut seen = vec![false; n];
        for &value in &self.cells {
            let idx = value as usize;
            if idx >= n {
                return Err(PuzzleError::MalformedState(format!(
                    "value {} out of range 0..{}",
                    value, n
                )));
            }
            if seen[idx] {
                return Err(PuzzleError::MalformedState(format!(
                    "value {} appears more than once",
                    value
                )));
            }
            seen[idx] = true;
        }
        Ok(())
    }

    pub fn zero_position(&self) -> Result<Position, PuzzleError> {
        self.cells
            .iter()
            .position(|&v| v == 0)
            .map(|idx| Position::new(idx / self.size, idx % self.size))
            .ok_or_else(|| PuzzleError::MalformedState("no blank tile".to_string()))
    }

    pub fn is_goal(&self) -> bool {
        self.cells
            .iter()
            .enumerate()
            .all(|(idx, &value)| value as usize == idx)
    }

    /// New board with the cells at `a` and `b` exchanged.
    pub fn copy_with_swap(&self, a: Position, b: Position) -> Board {
        let mut cells = self.cells.clone();
        cells.swap(a.row * self.size + a.col, b.row * self.size + b.col);
        Board {
            size: self.size,
            cells,
        }
    }

    /// Board after sliding the blank in direction `mv`, if that stays on the grid.
    pub fn apply_move(&self, mv: Move) -> Option<Board> {
        let blank = self.zero_position().ok()?;
        let target = blank.step(mv, self.size)?;
        Some(self.copy_with_swap(blank, target))
    }

    pub fn canonical_key(&self) -> BoardKey {
        BoardKey(self.cells.iter().map(|&v| v as u8).collect())
    }

    /// Whether the goal is reachable from this board.
    ///
    /// Odd widths keep the inversion parity of the tiles fixed under every move.
    /// Even widths flip it on every vertical move, which also changes the blank
    /// row by one, so `inversions + blank_row` keeps its parity instead. The goal
    /// has no inversions and its blank on row 0.
    pub fn is_solvable(&self) -> bool {
        let inversions = Self::count_inversions(&self.cells);
        if self.size % 2 == 1 {
            inversions % 2 == 0
        } else {
            let blank_row = self
                .cells
                .iter()
                .position(|&v| v == 0)
                .map_or(0, |idx| idx / self.size);
            (inversions + blank_row) % 2 == 0
        }
    }

    fn count_inversions(flattened: &[u32]) -> usize {
        flattened
            .iter()
            .enumerate()
            .filter(|&(_, &val)| val != 0)
            .map(|(i, &val)| {
                flattened[i + 1..]
                    .iter()
                    .filter(|&&next| next != 0 && next < val)
                    .count()
            })
            .sum()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = (self.cells.len().saturating_sub(1)).to_string().len();
        for (r, row) in self.rows().enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            for (c, val) in row.iter().enumerate() {
                if c > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{:>width$}", val, width = width)?;
            }
        }
        Ok(())
    }
}
