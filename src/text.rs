//! Reading boards from text and rendering solutions back to it.
//!
//! One row per non-empty line, cells separated by whitespace. `X`, `x` and `_`
//! are accepted as spellings of the blank alongside `0`.

use crossterm::style::{style, Stylize};
use std::fmt::Write as _;

use crate::board::Board;
use crate::error::ParseError;
use crate::path::Solution;

/// Parses and fully validates a `size`×`size` board.
pub fn parse_board(text: &str, size: usize) -> Result<Board, ParseError> {
    let lines: Vec<&str> = text.lines().filter(|l| !l.trim().is_empty()).collect();
    if lines.is_empty() {
        return Err(ParseError::Empty);
    }
    if lines.len() != size {
        return Err(ParseError::RowCount {
            expected: size,
            found: lines.len(),
        });
    }

    let mut cells = Vec::with_capacity(size * size);
    for (row, line) in lines.iter().enumerate() {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() != size {
            return Err(ParseError::ColumnCount {
                row,
                expected: size,
                found: tokens.len(),
            });
        }
        for token in tokens {
            cells.push(parse_cell(token).ok_or_else(|| ParseError::InvalidCell {
                row,
                token: token.to_string(),
            })?);
        }
    }

    let board = Board::from_cells(size, cells)?;
    board.validate()?;
    board.zero_position()?;
    Ok(board)
}

fn parse_cell(token: &str) -> Option<u32> {
    match token {
        "X" | "x" | "_" => Some(0),
        _ => token.parse().ok(),
    }
}

/// Rows of space-separated values, as accepted by [`parse_board`].
pub fn render_board(board: &Board) -> String {
    board.to_string()
}

/// Same layout as [`render_board`] with the blank picked out in colour.
pub fn render_board_highlighted(board: &Board) -> String {
    let width = (board.cells().len().saturating_sub(1)).to_string().len();
    let mut out = String::new();
    for (r, row) in board.rows().enumerate() {
        if r > 0 {
            out.push('\n');
        }
        for (c, &val) in row.iter().enumerate() {
            if c > 0 {
                out.push(' ');
            }
            let cell = format!("{:>width$}", val, width = width);
            if val == 0 {
                let _ = write!(out, "{}", style(cell).dark_grey().bold());
            } else {
                out.push_str(&cell);
            }
        }
    }
    out
}

/// Every board from start to goal, separated by blank lines. Each board after the
/// first is headed by the blank move that produced it.
pub fn render_solution(solution: &Solution, color: bool) -> String {
    let render: fn(&Board) -> String = if color {
        render_board_highlighted
    } else {
        render_board
    };

    let mut out = String::new();
    for (step, board) in solution.boards().iter().enumerate() {
        if step > 0 {
            out.push_str("\n\n");
            let _ = writeln!(out, "{}. {}", step, solution.moves()[step - 1]);
        }
        out.push_str(&render(board));
    }
    out.push('\n');
    out
}

/// Move list on one line, e.g. `Down Right Up`.
pub fn render_moves(solution: &Solution) -> String {
    solution
        .moves()
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Move;
    use crate::error::PuzzleError;
    use crate::node::{Node, NodeArena};
    use crate::path::reconstruct;

    #[test]
    fn parses_numbers_and_blank_spellings() {
        let board = parse_board("1 2 3\n4 5 6\n7 8 0\n", 3).unwrap();
        assert_eq!(board.cells(), &[1, 2, 3, 4, 5, 6, 7, 8, 0]);
        let with_x = parse_board("\n1 2 3\n  4 5 6\n7 8 X\n\n", 3).unwrap();
        assert_eq!(with_x, board);
    }

    #[test]
    fn reports_dimension_errors() {
        assert_eq!(parse_board("   \n", 3), Err(ParseError::Empty));
        assert_eq!(
            parse_board("0 1 2\n3 4 5\n", 3),
            Err(ParseError::RowCount {
                expected: 3,
                found: 2
            })
        );
        assert_eq!(
            parse_board("0 1 2\n3 4\n5 6 7\n", 3),
            Err(ParseError::ColumnCount {
                row: 1,
                expected: 3,
                found: 2
            })
        );
        assert_eq!(
            parse_board("0 1 2\n3 four 5\n6 7 8\n", 3),
            Err(ParseError::InvalidCell {
                row: 1,
                token: "four".to_string()
            })
        );
    }

    #[test]
    fn rejects_non_permutations() {
        assert!(matches!(
            parse_board("1 1 2\n3 4 5\n6 7 8\n", 3),
            Err(ParseError::Invalid(PuzzleError::MalformedState(_)))
        ));
    }

    #[test]
    fn rendered_board_parses_back() {
        let board = Board::goal(4).apply_move(Move::Down).unwrap();
        assert_eq!(parse_board(&render_board(&board), 4), Ok(board));
    }

    #[test]
    fn solution_lists_boards_and_moves_in_order() {
        let goal = Board::goal(2);
        let start = goal.apply_move(Move::Right).unwrap();
        let mut arena = NodeArena::new();
        let root = arena.push(Node::root(start));
        let end = arena.push(Node::child(goal, root, Move::Left, 0));
        let solution = reconstruct(&arena, end);

        assert_eq!(render_solution(&solution, false), "1 0\n2 3\n\n1. Left\n0 1\n2 3\n");
        assert_eq!(render_moves(&solution), "Left");
    }
}
