//! Compile-time table of winning line segments.

use crate::board::{BOARD_SIZE, WIN_LENGTH};
use crate::cell::Cell;

/// Starting positions per direction along one axis.
const SPAN: usize = BOARD_SIZE - WIN_LENGTH + 1;

/// Total number of winning segments: rows, columns, diagonals,
/// anti-diagonals.
pub const SEGMENT_COUNT: usize = 2 * BOARD_SIZE * SPAN + 2 * SPAN * SPAN;

/// Every run of [`WIN_LENGTH`] cells that decides the game.
///
/// Generated at compile time by walking each direction over its valid
/// starting rectangle, the rectangles chosen so every segment stays on
/// the board.
pub static SEGMENTS: [[Cell; WIN_LENGTH]; SEGMENT_COUNT] = {
    let mut table = [[Cell::from_index_unchecked(0); WIN_LENGTH]; SEGMENT_COUNT];
    let mut n = 0;

    // Rows: step (0, 1).
    let mut row = 0;
    while row < BOARD_SIZE {
        let mut col = 0;
        while col < SPAN {
            let mut k = 0;
            while k < WIN_LENGTH {
                table[n][k] = Cell::from_index_unchecked((row * BOARD_SIZE + col + k) as u8);
                k += 1;
            }
            n += 1;
            col += 1;
        }
        row += 1;
    }

    // Columns: step (1, 0).
    let mut row = 0;
    while row < SPAN {
        let mut col = 0;
        while col < BOARD_SIZE {
            let mut k = 0;
            while k < WIN_LENGTH {
                table[n][k] = Cell::from_index_unchecked(((row + k) * BOARD_SIZE + col) as u8);
                k += 1;
            }
            n += 1;
            col += 1;
        }
        row += 1;
    }

    // Diagonals: step (1, 1).
    let mut row = 0;
    while row < SPAN {
        let mut col = 0;
        while col < SPAN {
            let mut k = 0;
            while k < WIN_LENGTH {
                table[n][k] =
                    Cell::from_index_unchecked(((row + k) * BOARD_SIZE + col + k) as u8);
                k += 1;
            }
            n += 1;
            col += 1;
        }
        row += 1;
    }

    // Anti-diagonals: step (1, -1), columns starting high enough to fit.
    let mut row = 0;
    while row < SPAN {
        let mut col = WIN_LENGTH - 1;
        while col < BOARD_SIZE {
            let mut k = 0;
            while k < WIN_LENGTH {
                table[n][k] =
                    Cell::from_index_unchecked(((row + k) * BOARD_SIZE + col - k) as u8);
                k += 1;
            }
            n += 1;
            col += 1;
        }
        row += 1;
    }

    table
};
