//! Textual board notation: rows of `x`/`o`/`.` joined by `/`.

use std::fmt;
use std::str::FromStr;

use crate::board::{Board, BOARD_SIZE};
use crate::cell::Cell;
use crate::error::ParseBoardError;
use crate::mark::Mark;

/// Notation for the empty board.
pub const EMPTY_BOARD: &str = "..../..../..../....";

impl FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Board, ParseBoardError> {
        let rows: Vec<&str> = s.split('/').collect();
        if rows.len() != BOARD_SIZE {
            return Err(ParseBoardError::WrongRowCount {
                expected: BOARD_SIZE,
                found: rows.len(),
            });
        }

        let mut board = Board::empty();
        for (row_idx, row) in rows.iter().enumerate() {
            let found = row.chars().count();
            if found != BOARD_SIZE {
                return Err(ParseBoardError::WrongRowLength {
                    row: row_idx,
                    found,
                    expected: BOARD_SIZE,
                });
            }
            for (col_idx, c) in row.chars().enumerate() {
                if c == '.' {
                    continue;
                }
                match Mark::from_char(c) {
                    Some(mark) => board.place(Cell::new(row_idx as u8, col_idx as u8), mark),
                    None => return Err(ParseBoardError::InvalidCellChar { character: c }),
                }
            }
        }

        Ok(board)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..BOARD_SIZE as u8 {
            if row > 0 {
                write!(f, "/")?;
            }
            for col in 0..BOARD_SIZE as u8 {
                let c = match self.mark_at(Cell::new(row, col)) {
                    Some(mark) => mark.as_char(),
                    None => '.',
                };
                write!(f, "{c}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::EMPTY_BOARD;
    use crate::board::Board;
    use crate::cell::Cell;
    use crate::error::ParseBoardError;
    use crate::mark::Mark;

    #[test]
    fn parse_empty_board() {
        let board: Board = EMPTY_BOARD.parse().unwrap();
        assert_eq!(board, Board::empty());
    }

    #[test]
    fn parse_marks() {
        let board: Board = "x.../.o../..x./....".parse().unwrap();
        assert_eq!(board.mark_at(Cell::new(0, 0)), Some(Mark::Cross));
        assert_eq!(board.mark_at(Cell::new(1, 1)), Some(Mark::Nought));
        assert_eq!(board.mark_at(Cell::new(2, 2)), Some(Mark::Cross));
        assert_eq!(board.mark_at(Cell::new(3, 3)), None);
    }

    #[test]
    fn display_roundtrip() {
        let notation = "x.o./.ox./..../xo.x";
        let board: Board = notation.parse().unwrap();
        assert_eq!(format!("{board}"), notation);
    }

    #[test]
    fn empty_display_matches_constant() {
        assert_eq!(format!("{}", Board::empty()), EMPTY_BOARD);
    }

    #[test]
    fn debug_wraps_notation() {
        let board = Board::empty();
        assert_eq!(format!("{board:?}"), format!("Board(\"{EMPTY_BOARD}\")"));
    }

    #[test]
    fn reject_wrong_row_count() {
        let err = "..../..../....".parse::<Board>().unwrap_err();
        assert_eq!(
            err,
            ParseBoardError::WrongRowCount {
                expected: 4,
                found: 3
            }
        );
    }

    #[test]
    fn reject_wrong_row_length() {
        let err = "..../...../..../....".parse::<Board>().unwrap_err();
        assert!(matches!(err, ParseBoardError::WrongRowLength { row: 1, .. }));
    }

    #[test]
    fn reject_invalid_character() {
        let err = "..../..q./..../....".parse::<Board>().unwrap_err();
        assert_eq!(err, ParseBoardError::InvalidCellChar { character: 'q' });
    }
}
