//! Iterative-deepening search driver.

pub mod cache;
pub mod history;
pub mod negamax;

use tracing::debug;

use tacto_core::{Board, Cell, Mark, hash_for};

use cache::TranspositionCache;
use history::HistoryTable;
use negamax::{INF, SearchContext, negamax};

/// Maximum search depth, in plies.
pub const MAX_DEPTH: u8 = 6;

/// A search result: the score of a position and the move achieving it.
///
/// The score follows the negamax sign convention, positive favoring the
/// player the search ran for. `cell` is `None` for terminal positions,
/// where no move exists to report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredMove {
    /// Evaluation relative to the player the search ran for.
    pub score: i32,
    /// The chosen cell, or `None` on a decided or full board.
    pub cell: Option<Cell>,
}

/// Iterative-deepening searcher owning its cache and ordering state.
///
/// One searcher serves one game at a time; concurrent games each need
/// their own.
pub struct Searcher {
    cache: TranspositionCache,
    history: HistoryTable,
}

impl Searcher {
    /// Create a searcher with an empty cache and history table.
    pub fn new() -> Self {
        Self {
            cache: TranspositionCache::new(),
            history: HistoryTable::new(),
        }
    }

    /// Search `board` for the best move for `to_move`.
    ///
    /// Runs deepening passes at depths 2, 4, and 6 (even steps keep
    /// leaf evaluation on the same side's turn at every pass) and
    /// returns the result of the deepest pass. The cache is cleared
    /// after every pass: entries carry no depth, so a shallower pass
    /// must not answer probes of a deeper one. The history table is
    /// reset once here and accumulates across all passes.
    ///
    /// The board is mutated while searching and restored to its
    /// argument content before returning.
    pub fn predict(&mut self, board: &mut Board, to_move: Mark) -> ScoredMove {
        self.history.reset();
        let mut ctx = SearchContext {
            hash: hash_for(board, to_move),
            cache: &mut self.cache,
            history: &mut self.history,
            nodes: 0,
        };

        let mut result = ScoredMove {
            score: -INF,
            cell: None,
        };
        for depth in (2..=MAX_DEPTH).step_by(2) {
            result = negamax(board, depth, to_move, -INF, INF, &mut ctx);
            ctx.cache.clear();
            debug!(
                depth,
                score = result.score,
                nodes = ctx.nodes,
                "deepening pass complete"
            );
        }
        result
    }

    /// Pick a move without touching the caller's board.
    ///
    /// Copies `board` into a private buffer and runs
    /// [`predict`](Searcher::predict) on the copy. Returns `None` only
    /// for decided or full boards.
    pub fn choose_move(&mut self, board: &Board, to_move: Mark) -> Option<Cell> {
        let mut scratch = *board;
        self.predict(&mut scratch, to_move).cell
    }
}

impl Default for Searcher {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Searcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Searcher")
            .field("cache", &self.cache)
            .finish()
    }
}
