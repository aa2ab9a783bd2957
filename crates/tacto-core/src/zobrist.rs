//! Zobrist hashing keys for position identity.

use crate::board::{Board, CELL_COUNT};
use crate::cell::Cell;
use crate::mark::Mark;

/// Zobrist key for each (mark, cell) pair. Indexed by `[Mark::index()][Cell::index()]`.
static MARK_CELL: [[u64; CELL_COUNT]; Mark::COUNT] = {
    let mut table = [[0u64; CELL_COUNT]; Mark::COUNT];
    let mut state = SEED;
    let mut mark = 0;
    while mark < Mark::COUNT {
        let mut cell = 0;
        while cell < CELL_COUNT {
            let (val, next) = xorshift64(state);
            table[mark][cell] = val;
            state = next;
            cell += 1;
        }
        mark += 1;
    }
    table
};

/// Zobrist key XORed when Cross is the side to move.
pub static SIDE_TO_MOVE: u64 = {
    // State continues from MARK_CELL generation
    let mut state = SEED;
    let mut i = 0;
    while i < Mark::COUNT * CELL_COUNT {
        let (_, next) = xorshift64(state);
        state = next;
        i += 1;
    }
    let (val, _) = xorshift64(state);
    val
};

const SEED: u64 = 0x5441_4354_4f58_4f21; // "TACTOXO!"

/// Xorshift64 PRNG. Returns (value, next_state).
const fn xorshift64(mut state: u64) -> (u64, u64) {
    state ^= state << 13;
    state ^= state >> 7;
    state ^= state << 17;
    (state, state)
}

/// Return the key toggled when `mark` occupies `cell`.
#[inline]
pub fn mark_cell_key(mark: Mark, cell: Cell) -> u64 {
    MARK_CELL[mark.index()][cell.index()]
}

/// Compute the hash of a position from scratch.
///
/// The search maintains the same value incrementally, XOR-ing one
/// mark-cell key and [`SIDE_TO_MOVE`] per move made or unmade.
pub fn hash_for(board: &Board, to_move: Mark) -> u64 {
    let mut hash = 0u64;

    for cell in Cell::all() {
        if let Some(mark) = board.mark_at(cell) {
            hash ^= MARK_CELL[mark.index()][cell.index()];
        }
    }

    if to_move == Mark::Cross {
        hash ^= SIDE_TO_MOVE;
    }

    hash
}
