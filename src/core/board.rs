//! Square Othello board, cells and moves.
//!
//! The board is stored row-major. Coordinates are always given as
//! `(column, row)`, matching the order the game manager uses on the wire:
//! a move is written `"{column} {row}"` and a board literal is a list of rows.

use serde::{Deserialize, Serialize};

use super::color::Color;
use crate::error::{OthelloError, Result};

/// Smallest accepted board side.
pub const MIN_SIZE: usize = 1;

/// Largest accepted board side.
pub const MAX_SIZE: usize = 16;

/// Side of the standard board.
pub const DEFAULT_SIZE: usize = 8;

/// Contents of a single square.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Disc(Color),
}

impl Cell {
    /// Wire code: 0 empty, 1 dark, 2 light.
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Cell::Empty => 0,
            Cell::Disc(color) => color.code(),
        }
    }

    #[must_use]
    pub const fn from_code(code: u8) -> Option<Cell> {
        match code {
            0 => Some(Cell::Empty),
            _ => match Color::from_code(code) {
                Some(color) => Some(Cell::Disc(color)),
                None => None,
            },
        }
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }
}

/// A disc placement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Move {
    pub column: u8,
    pub row: u8,
}

impl Move {
    #[must_use]
    pub const fn new(column: u8, row: u8) -> Self {
        Self { column, row }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.column, self.row)
    }
}

/// Square Othello board.
///
/// Equality and hashing cover the side and every cell, so a board is its own
/// transposition key.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    size: u8,
    cells: Vec<Cell>,
}

impl Board {
    /// Create a board with the standard four-disc opening.
    ///
    /// `size` must be even and at least 4.
    ///
    /// ```
    /// use rust_othello::core::{Board, Cell, Color};
    ///
    /// let board = Board::new(8).unwrap();
    /// assert_eq!(board.get(3, 3), Cell::Disc(Color::Light));
    /// assert_eq!(board.get(4, 3), Cell::Disc(Color::Dark));
    /// assert_eq!(board.count(Color::Dark), 2);
    /// ```
    pub fn new(size: usize) -> Result<Self> {
        if size % 2 != 0 || size < 4 || size > MAX_SIZE {
            return Err(OthelloError::InvalidBoard(format!(
                "opening position needs an even side between 4 and {MAX_SIZE}, got {size}"
            )));
        }

        let mut board = Self::empty(size)?;
        let h = (size / 2) as u8;
        board.set(h - 1, h - 1, Cell::Disc(Color::Light));
        board.set(h, h, Cell::Disc(Color::Light));
        board.set(h, h - 1, Cell::Disc(Color::Dark));
        board.set(h - 1, h, Cell::Disc(Color::Dark));
        Ok(board)
    }

    /// Create a board with no discs.
    pub fn empty(size: usize) -> Result<Self> {
        if !(MIN_SIZE..=MAX_SIZE).contains(&size) {
            return Err(OthelloError::InvalidBoard(format!(
                "side must be between {MIN_SIZE} and {MAX_SIZE}, got {size}"
            )));
        }
        Ok(Self {
            size: size as u8,
            cells: vec![Cell::Empty; size * size],
        })
    }

    /// Build a board from rows of wire codes.
    pub fn from_rows(rows: &[Vec<u8>]) -> Result<Self> {
        let mut board = Self::empty(rows.len())?;
        for (row, values) in rows.iter().enumerate() {
            if values.len() != rows.len() {
                return Err(OthelloError::InvalidBoard(format!(
                    "row {row} has {} cells, expected {}",
                    values.len(),
                    rows.len()
                )));
            }
            for (column, &code) in values.iter().enumerate() {
                let cell = Cell::from_code(code).ok_or_else(|| {
                    OthelloError::InvalidBoard(format!(
                        "cell ({column}, {row}) has unknown code {code}"
                    ))
                })?;
                board.set(column as u8, row as u8, cell);
            }
        }
        Ok(board)
    }

    /// Parse the manager's board literal.
    ///
    /// Accepts nested lists (`[[0, 1], [2, 0]]`) and nested tuples
    /// (`((0, 1), (2, 0))`), including trailing commas.
    ///
    /// ```
    /// use rust_othello::core::{Board, Cell, Color};
    ///
    /// let board = Board::from_literal("((0, 1), (2, 0))").unwrap();
    /// assert_eq!(board.size(), 2);
    /// assert_eq!(board.get(1, 0), Cell::Disc(Color::Dark));
    /// assert_eq!(board.get(0, 1), Cell::Disc(Color::Light));
    /// ```
    pub fn from_literal(literal: &str) -> Result<Self> {
        let mut normalized: String = literal
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| match c {
                '(' => '[',
                ')' => ']',
                other => other,
            })
            .collect();
        while normalized.contains(",]") {
            normalized = normalized.replace(",]", "]");
        }

        let rows: Vec<Vec<u8>> = serde_json::from_str(&normalized)
            .map_err(|e| OthelloError::InvalidBoard(format!("unparsable literal: {e}")))?;
        Self::from_rows(&rows)
    }

    /// Render the board as a list-of-rows literal.
    #[must_use]
    pub fn to_literal(&self) -> String {
        let rows: Vec<String> = self
            .rows()
            .map(|row| {
                let codes: Vec<String> = row.iter().map(|c| c.code().to_string()).collect();
                format!("[{}]", codes.join(", "))
            })
            .collect();
        format!("[{}]", rows.join(", "))
    }

    /// Rows of wire codes.
    #[must_use]
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        self.rows()
            .map(|row| row.iter().map(|c| c.code()).collect())
            .collect()
    }

    #[inline]
    #[must_use]
    pub fn size(&self) -> usize {
        self.size as usize
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, column: i32, row: i32) -> bool {
        let n = self.size as i32;
        (0..n).contains(&column) && (0..n).contains(&row)
    }

    /// Panics if the square is off the board.
    #[inline]
    #[must_use]
    pub fn get(&self, column: u8, row: u8) -> Cell {
        self.cells[self.offset(column, row)]
    }

    /// Panics if the square is off the board.
    #[inline]
    pub fn set(&mut self, column: u8, row: u8, cell: Cell) {
        let offset = self.offset(column, row);
        self.cells[offset] = cell;
    }

    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Iterate over rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.size as usize)
    }

    /// Number of discs of a color.
    #[must_use]
    pub fn count(&self, color: Color) -> u32 {
        self.cells
            .iter()
            .filter(|&&c| c == Cell::Disc(color))
            .count() as u32
    }

    #[must_use]
    pub fn empty_count(&self) -> u32 {
        self.cells.iter().filter(|c| c.is_empty()).count() as u32
    }

    /// The four corner squares.
    #[must_use]
    pub fn corners(&self) -> [Move; 4] {
        let last = self.size - 1;
        [
            Move::new(0, 0),
            Move::new(0, last),
            Move::new(last, 0),
            Move::new(last, last),
        ]
    }

    #[inline]
    fn offset(&self, column: u8, row: u8) -> usize {
        assert!(
            column < self.size && row < self.size,
            "square ({column}, {row}) is off a {0}x{0} board",
            self.size
        );
        row as usize * self.size as usize + column as usize
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "  ")?;
        for column in 0..self.size {
            write!(f, "{:>2}", column)?;
        }
        writeln!(f)?;

        for (row, cells) in self.rows().enumerate() {
            write!(f, "{:>2}", row)?;
            for cell in cells {
                let symbol = match cell {
                    Cell::Empty => '.',
                    Cell::Disc(Color::Dark) => 'X',
                    Cell::Disc(Color::Light) => 'O',
                };
                write!(f, " {symbol}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
