//! Immutable puzzle state and the moves that transform it.

use crate::error::{Result, TaquinError};
use crate::group::TileGroup;
use crate::hashing::{full_state_hash, partial_state_hash};
use crate::solvability::check_solvable;

/// One of the four directions a tile can slide into the empty cell.
///
/// Following the convention the source uses: `Up` means the tile
/// immediately above the empty cell slides down into it (the empty cell
/// itself moves up).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    Up,
    Down,
    Left,
    Right,
}

impl Move {
    /// The move that, applied immediately after this one, returns the
    /// empty cell to where it started. Used for parent-move pruning.
    pub fn inverse(self) -> Move {
        match self {
            Move::Up => Move::Down,
            Move::Down => Move::Up,
            Move::Left => Move::Right,
            Move::Right => Move::Left,
        }
    }
}

/// An immutable snapshot of a sliding-tile puzzle.
///
/// A `Board` never mutates its own state after construction: every move
/// produces a new `Board`. `zero_pos`, `state_hash` and `heuristic` are
/// computed once at construction time rather than lazily, since every
/// Board built by the search is measured by the heuristic and hashed
/// exactly once regardless of when that happens.
#[derive(Debug, Clone)]
pub struct Board {
    state: Vec<u8>,
    n: usize,
    zero_pos: usize,
    history: Vec<Move>,
    state_hash: u64,
    heuristic: u32,
}

impl Board {
    /// Builds a board from a tile vector and side length, with empty
    /// move history. Does not validate; call [`Board::validate`] before
    /// trusting the state came from untrusted input.
    pub fn new(state: Vec<u8>, n: usize) -> Self {
        Self::with_history(state, n, Vec::new())
    }

    /// Builds a board with an explicit move history (used internally by
    /// [`Board::perform_move`] and by the PDB generator's goal board).
    pub fn with_history(state: Vec<u8>, n: usize, history: Vec<Move>) -> Self {
        let zero_pos = state
            .iter()
            .position(|&t| t == 0)
            .expect("state must contain a 0 tile; call validate() first");
        let state_hash = full_state_hash(&state, n);
        let mut board = Self {
            state,
            n,
            zero_pos,
            history,
            state_hash,
            heuristic: 0,
        };
        board.heuristic = crate::heuristic::manhattan_sum(&board);
        board
    }

    pub fn state(&self) -> &[u8] {
        &self.state
    }

    pub fn n(&self) -> usize {
        self.n
    }

    pub fn zero_pos(&self) -> usize {
        self.zero_pos
    }

    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Validates size, length, permutation and solvability, in that order.
    pub fn validate(&self) -> Result<()> {
        if !(2..=4).contains(&self.n) {
            return Err(TaquinError::InvalidSize { n: self.n });
        }

        let expected = self.n * self.n;
        if self.state.len() != expected {
            return Err(TaquinError::WrongLength {
                expected,
                actual: self.state.len(),
            });
        }

        let mut seen = vec![false; expected];
        let mut out_of_range = false;
        for &tile in &self.state {
            let idx = tile as usize;
            if idx >= expected {
                out_of_range = true;
                continue;
            }
            seen[idx] = true;
        }
        if out_of_range || seen.iter().any(|&present| !present) {
            let first_missing = seen.iter().position(|&present| !present).unwrap_or(0);
            return Err(TaquinError::NotPermutation {
                len: expected,
                first_missing,
            });
        }

        if !check_solvable(&self.state, self.n) {
            return Err(TaquinError::Unsolvable);
        }

        Ok(())
    }

    /// Moves available from the empty cell's current position, in the
    /// fixed emission order LEFT, RIGHT, UP, DOWN so tests can depend on
    /// move-order determinism.
    pub fn available_moves(&self) -> Vec<Move> {
        let row = self.zero_pos / self.n;
        let col = self.zero_pos % self.n;
        let mut moves = Vec::with_capacity(4);

        if col > 0 {
            moves.push(Move::Left);
        }
        if col < self.n - 1 {
            moves.push(Move::Right);
        }
        if row > 0 {
            moves.push(Move::Up);
        }
        if row < self.n - 1 {
            moves.push(Move::Down);
        }

        moves
    }

    /// Index the empty cell would occupy after `m`. Undefined (may
    /// panic) if `m` is not in [`Board::available_moves`].
    fn neighbour_index(&self, m: Move) -> usize {
        match m {
            Move::Up => self.zero_pos - self.n,
            Move::Down => self.zero_pos + self.n,
            Move::Left => self.zero_pos - 1,
            Move::Right => self.zero_pos + 1,
        }
    }

    /// Applies `m`, producing a new Board whose history is this board's
    /// history with `m` appended. Every move costs one unit — use
    /// [`Board::perform_move_in_group`] for the PDB generator's
    /// group-restricted cost accounting.
    pub fn perform_move(&self, m: Move) -> Board {
        let mut new_state = self.state.clone();
        let target = self.neighbour_index(m);
        new_state.swap(self.zero_pos, target);

        let mut history = self.history.clone();
        history.push(m);

        Board::with_history(new_state, self.n, history)
    }

    /// Applies `m` as the PDB generator does: the move only costs one
    /// unit if the tile being displaced belongs to `group`. This is the
    /// single place that decides "what does a move cost", parameterised
    /// by an optional group rather than a separate partial-board type.
    pub fn perform_move_in_group(&self, m: Move, group: &TileGroup) -> Board {
        let target = self.neighbour_index(m);
        let moved_tile = self.state[target];

        let mut new_state = self.state.clone();
        new_state.swap(self.zero_pos, target);

        let mut history = self.history.clone();
        if group.contains(moved_tile) {
            history.push(m);
        }

        Board::with_history(new_state, self.n, history)
    }

    /// True iff every tile `i` holds value `i+1`, and the last cell holds 0.
    pub fn check_solved(&self) -> bool {
        let len = self.state.len();
        self.state[..len - 1]
            .iter()
            .enumerate()
            .all(|(i, &tile)| tile as usize == i + 1)
            && self.state[len - 1] == 0
    }

    /// Number of moves taken to reach this state from its root.
    pub fn cost(&self) -> u32 {
        self.history.len() as u32
    }

    pub fn state_hash(&self) -> u64 {
        self.state_hash
    }

    pub fn partial_state_hash(&self, group: &TileGroup) -> u64 {
        partial_state_hash(&self.state, self.n, group)
    }

    /// The board's cached Manhattan-distance heuristic.
    pub fn heuristic(&self) -> u32 {
        self.heuristic
    }

    /// Combines the cached Manhattan heuristic with PDB lookups from
    /// `store`, without needing to thread the store through every Board.
    pub fn heuristic_with_pdb(&self, store: &crate::pdb::PdbStore) -> u32 {
        crate::heuristic::combined(self, store)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(state: &[u8], n: usize) -> Board {
        Board::new(state.to_vec(), n)
    }

    #[test]
    fn solved_3x3_board_is_solved_and_has_zero_heuristic() {
        let b = board(&[1, 2, 3, 4, 5, 6, 7, 8, 0], 3);
        assert!(b.check_solved());
        assert_eq!(b.heuristic(), 0);
        assert_eq!(b.state_hash(), 0x87654321);
    }

    #[test]
    fn unsolvable_3x3_board_hash_and_validate() {
        let b = board(&[5, 4, 7, 2, 8, 0, 6, 1, 3], 3);
        assert_eq!(b.state_hash(), 0x316082745);
        assert!(!b.check_solved());
        assert!(matches!(b.validate(), Err(TaquinError::Unsolvable)));
    }

    #[test]
    fn solvable_3x3_board_heuristic_and_hash() {
        let b = board(&[4, 5, 7, 2, 8, 0, 6, 1, 3], 3);
        assert_eq!(b.heuristic(), 17);
        assert_eq!(b.state_hash(), 0x316082754);
        assert!(!b.check_solved());
        assert!(b.validate().is_ok());
    }

    #[test]
    fn solved_4x4_board_hash() {
        let b = board(&[1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 0], 4);
        assert_eq!(b.state_hash(), 0x0fedcba987654321);
        assert!(b.check_solved());
    }

    #[test]
    fn available_moves_order_is_left_right_up_down() {
        // empty in the middle: all four moves available
        let b = board(&[1, 2, 3, 4, 0, 5, 6, 7, 8], 3);
        assert_eq!(
            b.available_moves(),
            vec![Move::Left, Move::Right, Move::Up, Move::Down]
        );

        // empty in top-left corner: only right and down
        let b = board(&[0, 1, 2, 3, 4, 5, 6, 7, 8], 3);
        assert_eq!(b.available_moves(), vec![Move::Right, Move::Down]);
    }

    #[test]
    fn perform_move_then_inverse_restores_state() {
        let b = board(&[1, 2, 3, 4, 0, 5, 6, 7, 8], 3);
        for m in b.available_moves() {
            let child = b.perform_move(m);
            let back = child.perform_move(m.inverse());
            assert_eq!(back.state(), b.state());
            assert_eq!(back.zero_pos(), b.zero_pos());
        }
    }

    #[test]
    fn perform_move_appends_history_and_increments_cost() {
        let b = board(&[1, 2, 3, 4, 0, 5, 6, 7, 8], 3);
        let child = b.perform_move(Move::Up);
        assert_eq!(child.cost(), 1);
        assert_eq!(child.history(), &[Move::Up]);
    }

    #[test]
    fn perform_move_in_group_only_charges_in_group_moves() {
        let goal = board(&[1, 2, 3, 4, 5, 6, 7, 8, 0], 3);
        let group = TileGroup::new(vec![1, 2]);
        // moving tile 3 (not in group) left into the empty cell should not add cost
        let moved = goal.perform_move_in_group(Move::Left, &group);
        assert_eq!(moved.cost(), 0);
    }

    #[test]
    fn validate_rejects_wrong_length() {
        let b = board(&[1, 2, 3, 0], 3);
        assert!(matches!(
            b.validate(),
            Err(TaquinError::WrongLength { expected: 9, actual: 4 })
        ));
    }

    #[test]
    fn validate_rejects_invalid_size() {
        let b = board(&[1, 2, 3, 4, 5, 0], 1);
        assert!(matches!(b.validate(), Err(TaquinError::InvalidSize { n: 1 })));
    }

    #[test]
    fn validate_reports_first_missing_value() {
        // 9 tiles, value 5 duplicated in place of the missing 4.
        let b = board(&[1, 2, 3, 5, 6, 7, 8, 0, 5], 3);
        match b.validate() {
            Err(TaquinError::NotPermutation { first_missing, .. }) => {
                assert_eq!(first_missing, 4);
            }
            other => panic!("expected NotPermutation, got {other:?}"),
        }
    }

    #[test]
    fn validate_reports_first_missing_value_with_out_of_range_tile() {
        // 9 is out of range for a 3x3 board (expected values are 0..=8);
        // the smallest value genuinely absent from the state is 4.
        let b = board(&[1, 2, 3, 9, 5, 6, 7, 8, 0], 3);
        match b.validate() {
            Err(TaquinError::NotPermutation { first_missing, .. }) => {
                assert_eq!(first_missing, 4);
            }
            other => panic!("expected NotPermutation, got {other:?}"),
        }
    }
}
