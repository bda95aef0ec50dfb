//! Move generation and application.
//!
//! A placement is legal when the square is empty and at least one straight
//! line of opponent discs runs from it to a disc of the mover's color. Every
//! such line is flipped when the move is played.

use smallvec::SmallVec;

use crate::core::{Board, Cell, Color, Move};
use crate::error::{OthelloError, Result};

/// Legal moves of one side, in generation order.
pub type MoveList = SmallVec<[Move; 32]>;

/// A run of discs that a placement would flip.
pub type Line = SmallVec<[Move; 8]>;

/// Scan directions as (column delta, row delta).
pub const DIRECTIONS: [(i32, i32); 8] = [
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
    (-1, 0),
    (-1, 1),
];

/// Every line of discs that placing `color` at `(column, row)` would flip.
///
/// Returns nothing for occupied or off-board squares.
pub fn find_lines(board: &Board, column: u8, row: u8, color: Color) -> Vec<Line> {
    let mut lines = Vec::new();
    if !board.contains(column as i32, row as i32) || !board.get(column, row).is_empty() {
        return lines;
    }

    for (dc, dr) in DIRECTIONS {
        if let Some(line) = line_in_direction(board, column, row, color, dc, dr) {
            lines.push(line);
        }
    }
    lines
}

/// Check if `color` may place a disc at `mv`.
pub fn is_legal(board: &Board, color: Color, mv: Move) -> bool {
    if !board.contains(mv.column as i32, mv.row as i32) || !board.get(mv.column, mv.row).is_empty() {
        return false;
    }
    DIRECTIONS
        .iter()
        .any(|&(dc, dr)| line_in_direction(board, mv.column, mv.row, color, dc, dr).is_some())
}

/// All legal moves for `color`.
///
/// Squares are scanned column by column, top to bottom within a column.
/// Search breaks ties in this order.
///
/// ```
/// use rust_othello::core::{Board, Color, Move};
/// use rust_othello::rules::legal_moves;
///
/// let board = Board::new(8).unwrap();
/// let moves = legal_moves(&board, Color::Dark);
/// assert_eq!(
///     moves.as_slice(),
///     &[Move::new(2, 3), Move::new(3, 2), Move::new(4, 5), Move::new(5, 4)]
/// );
/// ```
pub fn legal_moves(board: &Board, color: Color) -> MoveList {
    let size = board.size() as u8;
    let mut moves = MoveList::new();
    for column in 0..size {
        for row in 0..size {
            let mv = Move::new(column, row);
            if is_legal(board, color, mv) {
                moves.push(mv);
            }
        }
    }
    moves
}

/// Check if `color` has at least one legal move.
pub fn has_moves(board: &Board, color: Color) -> bool {
    let size = board.size() as u8;
    (0..size).any(|column| (0..size).any(|row| is_legal(board, color, Move::new(column, row))))
}

/// Number of discs `mv` would flip, or zero if it is illegal.
pub fn count_flips(board: &Board, color: Color, mv: Move) -> usize {
    find_lines(board, mv.column, mv.row, color)
        .iter()
        .map(|line| line.len())
        .sum()
}

/// Play `mv` for `color`, returning the resulting board.
///
/// The input board is never modified.
pub fn play_move(board: &Board, color: Color, mv: Move) -> Result<Board> {
    let lines = find_lines(board, mv.column, mv.row, color);
    if lines.is_empty() {
        return Err(OthelloError::IllegalMove { color, mv });
    }

    let mut next = board.clone();
    next.set(mv.column, mv.row, Cell::Disc(color));
    for square in lines.iter().flatten() {
        next.set(square.column, square.row, Cell::Disc(color));
    }
    Ok(next)
}

// Walk from (column, row) over opponent discs. The walk forms a line only if
// it covers at least one disc and stops on a disc of `color`.
fn line_in_direction(
    board: &Board,
    column: u8,
    row: u8,
    color: Color,
    dc: i32,
    dr: i32,
) -> Option<Line> {
    let opponent = Cell::Disc(color.opponent());
    let mut line = Line::new();
    let mut c = column as i32 + dc;
    let mut r = row as i32 + dr;

    while board.contains(c, r) && board.get(c as u8, r as u8) == opponent {
        line.push(Move::new(c as u8, r as u8));
        c += dc;
        r += dr;
    }

    if !line.is_empty() && board.contains(c, r) && board.get(c as u8, r as u8) == Cell::Disc(color) {
        Some(line)
    } else {
        None
    }
}
