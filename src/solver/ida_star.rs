//! Iterative Deepening A*.

use crate::board::{Board, Move};
use crate::error::{Result, TaquinError};
use crate::pdb::PdbStore;

/// Either a goal board, or the cheapest f-value that exceeded the
/// current bound.
enum SearchResult {
    Solved(Board),
    BoundExceeded(u32),
}

/// Depth-first IDA* search with an optionally attached pattern database.
///
/// Single-threaded and synchronous: a call to [`IdaStarSolver::solve`]
/// runs to completion with no cancellation points.
pub struct IdaStarSolver {
    pdb: Option<PdbStore>,
}

impl IdaStarSolver {
    /// A solver with no pattern database — every board is scored by
    /// Manhattan distance alone.
    pub fn new() -> Self {
        Self { pdb: None }
    }

    /// Attaches a pattern database store; only consulted for N=4 boards.
    pub fn with_pdb(pdb: PdbStore) -> Self {
        Self { pdb: Some(pdb) }
    }

    fn heuristic(&self, board: &Board) -> u32 {
        match &self.pdb {
            Some(store) => board.heuristic_with_pdb(store),
            None => board.heuristic(),
        }
    }

    /// Validates `board`, then runs IDA* to an optimal solution.
    ///
    /// Returns the ordered move sequence that solves the board. Fails
    /// with [`TaquinError::Unsolvable`] on invalid/unsolvable input —
    /// validation happens before any search.
    pub fn solve(&self, board: &Board) -> Result<Vec<Move>> {
        board.validate()?;

        if board.n() == 4 && self.pdb.is_none() {
            log::warn!("solving a 4x4 board without a pattern database attached; falling back to Manhattan distance only");
        }

        let mut bound = self.heuristic(board);
        log::debug!("IDA*: starting search with initial bound {bound}");

        loop {
            match self.dfs(board.clone(), bound) {
                SearchResult::Solved(solved) => {
                    log::debug!(
                        "IDA*: solved in {} moves (final bound {bound})",
                        solved.cost()
                    );
                    return Ok(solved.history().to_vec());
                }
                SearchResult::BoundExceeded(next_bound) => {
                    if next_bound == u32::MAX {
                        return Err(TaquinError::Unsolvable);
                    }
                    log::debug!("IDA*: raising bound {bound} -> {next_bound}");
                    bound = next_bound;
                }
            }
        }
    }

    /// Depth-first search bounded by `bound`, with parent-move pruning:
    /// a move that is the inverse of the board's last move is never
    /// explored, since it would just undo it.
    fn dfs(&self, board: Board, bound: u32) -> SearchResult {
        let f = board.cost() + self.heuristic(&board);
        if f > bound {
            return SearchResult::BoundExceeded(f);
        }
        if board.check_solved() {
            return SearchResult::Solved(board);
        }

        let last_move = board.history().last().copied();

        let mut children: Vec<Board> = board
            .available_moves()
            .into_iter()
            .filter(|&m| Some(m.inverse()) != last_move)
            .map(|m| board.perform_move(m))
            .collect();

        children.sort_by_key(|child| child.cost() + self.heuristic(child));

        let mut min_exceeded = u32::MAX;
        for child in children {
            match self.dfs(child, bound) {
                SearchResult::Solved(solved) => return SearchResult::Solved(solved),
                SearchResult::BoundExceeded(exceeded) => {
                    min_exceeded = min_exceeded.min(exceeded);
                }
            }
        }

        SearchResult::BoundExceeded(min_exceeded)
    }
}

impl Default for IdaStarSolver {
    fn default() -> Self {
        Self::new()
    }
}
