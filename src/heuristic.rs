//! Admissible heuristics: Manhattan distance and additive PDB lookups.

use crate::board::Board;
use crate::group::standard_groups_n4;
use crate::pdb::PdbStore;

/// Sum, over every non-empty tile, of its Manhattan distance from its
/// goal position. Admissible on its own.
pub fn manhattan_sum(board: &Board) -> u32 {
    let n = board.n();
    board
        .state()
        .iter()
        .enumerate()
        .filter(|&(_, &tile)| tile != 0)
        .map(|(i, &tile)| {
            let goal = tile as usize - 1;
            let (row, col) = (i / n, i % n);
            let (goal_row, goal_col) = (goal / n, goal % n);
            (row.abs_diff(goal_row) + col.abs_diff(goal_col)) as u32
        })
        .sum()
}

/// Sum of PDB lookups over the three standard N=4 groups. Only
/// meaningful for N=4; callers elsewhere guard on that, but this
/// function is harmless (and cheap) to call at other sizes — it simply
/// indexes a group that can never be populated.
fn pdb_sum(board: &Board, store: &PdbStore) -> u32 {
    standard_groups_n4()
        .iter()
        .map(|group| {
            let key = board.partial_state_hash(group);
            store.lookup(group, key).unwrap_or(0) as u32
        })
        .sum()
}

/// `max(manhattan_sum, pdb_sum)` for N=4 boards with a PDB store
/// attached; `manhattan_sum` alone otherwise. Taking the max of two
/// admissible heuristics is itself admissible.
pub fn combined(board: &Board, store: &PdbStore) -> u32 {
    let manhattan = manhattan_sum(board);
    if board.n() != 4 {
        return manhattan;
    }
    manhattan.max(pdb_sum(board, store))
}
