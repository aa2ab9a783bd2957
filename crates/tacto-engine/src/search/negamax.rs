//! Negamax alpha-beta search with principal-variation re-search.

use tacto_core::{Board, Cell, Mark, SIDE_TO_MOVE, mark_cell_key};

use crate::eval::evaluate;
use crate::search::ScoredMove;
use crate::search::cache::TranspositionCache;
use crate::search::history::HistoryTable;

/// Score bound exceeding every reachable evaluation.
pub const INF: i32 = 100_000;

/// Search state threaded through negamax calls.
pub(super) struct SearchContext<'a> {
    /// Incremental hash of the current board content and side to move.
    pub hash: u64,
    /// Result cache, keyed by the position hash.
    pub cache: &'a mut TranspositionCache,
    /// Move-ordering feedback, accumulated across the whole search.
    pub history: &'a mut HistoryTable,
    /// Total nodes visited.
    pub nodes: u64,
}

impl SearchContext<'_> {
    /// Make a move on the board and fold it into the hash.
    fn place(&mut self, board: &mut Board, cell: Cell, mark: Mark) {
        board.place(cell, mark);
        self.hash ^= mark_cell_key(mark, cell) ^ SIDE_TO_MOVE;
    }

    /// Undo [`place`](Self::place), restoring board and hash exactly.
    fn lift(&mut self, board: &mut Board, cell: Cell, mark: Mark) {
        board.lift(cell);
        self.hash ^= mark_cell_key(mark, cell) ^ SIDE_TO_MOVE;
    }
}

/// Negamax alpha-beta search within the window `[alpha, beta]`.
///
/// Returns the best scored move for `to_move`; the score is from
/// `to_move`'s perspective. The first ordered move is searched with the
/// full window; later moves get a null-window probe first and a full
/// re-search only when the probe lands strictly inside the open window.
/// The board is mutated while searching and restored before returning.
pub(super) fn negamax(
    board: &mut Board,
    depth: u8,
    to_move: Mark,
    mut alpha: i32,
    beta: i32,
    ctx: &mut SearchContext<'_>,
) -> ScoredMove {
    ctx.nodes += 1;

    if board.outcome().is_over() || depth == 0 {
        return ScoredMove {
            score: evaluate(board, to_move),
            cell: None,
        };
    }

    if let Some(hit) = ctx.cache.probe(ctx.hash) {
        return hit;
    }

    let mut moves = board.empty_cells();
    ctx.history.order(&mut moves);

    let mut best = ScoredMove {
        score: -INF,
        cell: None,
    };

    for (i, &cell) in moves.iter().enumerate() {
        ctx.place(board, cell, to_move);
        let score = if i == 0 {
            -negamax(board, depth - 1, !to_move, -beta, -alpha, ctx).score
        } else {
            let probe = -negamax(board, depth - 1, !to_move, -alpha - 1, -alpha, ctx).score;
            if alpha < probe && probe < beta {
                -negamax(board, depth - 1, !to_move, -beta, -probe, ctx).score
            } else {
                probe
            }
        };
        ctx.history.record(cell, score);
        ctx.lift(board, cell, to_move);

        if score > best.score {
            best = ScoredMove {
                score,
                cell: Some(cell),
            };
        }
        if score > alpha {
            alpha = score;
        }
        if alpha >= beta {
            break;
        }
    }

    ctx.cache.store(ctx.hash, best);
    best
}

#[cfg(test)]
mod tests {
    use super::{INF, SearchContext, negamax};
    use crate::search::cache::TranspositionCache;
    use crate::search::history::HistoryTable;
    use tacto_core::{Board, Mark, hash_for};

    fn run(board: &mut Board, depth: u8, to_move: Mark) -> (i32, Option<tacto_core::Cell>, u64) {
        let mut cache = TranspositionCache::new();
        let mut history = HistoryTable::new();
        let mut ctx = SearchContext {
            hash: hash_for(board, to_move),
            cache: &mut cache,
            history: &mut history,
            nodes: 0,
        };
        let result = negamax(board, depth, to_move, -INF, INF, &mut ctx);
        (result.score, result.cell, ctx.nodes)
    }

    #[test]
    fn board_and_hash_restored() {
        let mut board: Board = "x.o./.x../..../..o.".parse().unwrap();
        let before = board;
        let hash_before = hash_for(&board, Mark::Cross);

        let mut cache = TranspositionCache::new();
        let mut history = HistoryTable::new();
        let mut ctx = SearchContext {
            hash: hash_before,
            cache: &mut cache,
            history: &mut history,
            nodes: 0,
        };
        negamax(&mut board, 4, Mark::Cross, -INF, INF, &mut ctx);

        assert_eq!(board, before);
        assert_eq!(ctx.hash, hash_before);
    }

    #[test]
    fn terminal_board_evaluated_without_moves() {
        let mut board: Board = "xxx./oo../..../....".parse().unwrap();
        let (score, cell, nodes) = run(&mut board, 4, Mark::Nought);
        assert!(score < 0, "lost position should score negative, got {score}");
        assert_eq!(cell, None);
        assert_eq!(nodes, 1);
    }

    #[test]
    fn depth_zero_evaluates_in_place() {
        let mut board: Board = "x.../..../..../....".parse().unwrap();
        let (score, cell, nodes) = run(&mut board, 0, Mark::Cross);
        assert_eq!(score, 3);
        assert_eq!(cell, None);
        assert_eq!(nodes, 1);
    }

    #[test]
    fn root_result_lands_in_cache() {
        let mut board = Board::empty();
        let root_hash = hash_for(&board, Mark::Cross);

        let mut cache = TranspositionCache::new();
        let mut history = HistoryTable::new();
        let mut ctx = SearchContext {
            hash: root_hash,
            cache: &mut cache,
            history: &mut history,
            nodes: 0,
        };
        let result = negamax(&mut board, 2, Mark::Cross, -INF, INF, &mut ctx);

        assert_eq!(cache.probe(root_hash), Some(result));
    }

    #[test]
    fn cached_result_short_circuits_search() {
        let mut board = Board::empty();
        let root_hash = hash_for(&board, Mark::Cross);
        let canned = crate::search::ScoredMove {
            score: 1234,
            cell: Some(tacto_core::Cell::new(3, 3)),
        };

        let mut cache = TranspositionCache::new();
        cache.store(root_hash, canned);
        let mut history = HistoryTable::new();
        let mut ctx = SearchContext {
            hash: root_hash,
            cache: &mut cache,
            history: &mut history,
            nodes: 0,
        };
        let result = negamax(&mut board, 6, Mark::Cross, -INF, INF, &mut ctx);

        assert_eq!(result, canned);
        assert_eq!(ctx.nodes, 1);
    }
}
