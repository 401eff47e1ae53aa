//! Top-level entry points: parsing board strings, solving, generating
//! random boards, and building pattern databases.

use rand::seq::SliceRandom;
use rand::thread_rng;

use crate::board::{Board, Move};
use crate::config::PdbConfig;
use crate::error::{Result, TaquinError};
use crate::group::standard_groups_n4;
use crate::pdb::{generate_pattern_database, PdbStore};
use crate::solver::IdaStarSolver;

/// Parses an ASCII board string (tiles in row-major order, single-space
/// separated) into a tile vector.
pub fn parse_board(board_string: &str) -> Result<Vec<u8>> {
    board_string
        .split_whitespace()
        .map(|token| {
            token.parse::<u8>().map_err(|_| TaquinError::InvalidToken {
                token: token.to_string(),
            })
        })
        .collect()
}

/// Solves the board described by `board_string`, returning the optimal
/// move sequence. Validates before searching; for N=4 boards, loads the
/// standard pattern databases from `config` to guide the search, falling
/// back to Manhattan distance alone if they aren't present on disk.
pub fn solve(board_string: &str, n: usize, config: &PdbConfig) -> Result<Vec<Move>> {
    let state = parse_board(board_string)?;
    solve_vec(state, n, config)
}

/// As [`solve`], but takes an already-tokenised tile vector.
pub fn solve_vec(state: Vec<u8>, n: usize, config: &PdbConfig) -> Result<Vec<Move>> {
    let board = Board::new(state, n);
    board.validate()?;

    let solver = if n == 4 {
        match PdbStore::load_standard(config) {
            Ok(store) => IdaStarSolver::with_pdb(store),
            Err(TaquinError::MissingPdb { path }) => {
                log::warn!(
                    "pattern database not found at {}; falling back to Manhattan distance only",
                    path.display()
                );
                IdaStarSolver::new()
            }
            Err(e) => return Err(e),
        }
    } else {
        IdaStarSolver::new()
    };

    solver.solve(&board)
}

/// Generates a random solvable board of side length `n`.
pub fn generate_board(n: usize) -> Vec<u8> {
    let len = n * n;
    let mut state: Vec<u8> = (0..len as u8).collect();
    let mut rng = thread_rng();
    state.shuffle(&mut rng);

    if !crate::solvability::check_solvable(&state, n) {
        // Swapping any two adjacent non-zero tiles flips inversion parity,
        // repairing solvability.
        let last = state.len() - 1;
        let mut swap_at = last;
        while state[swap_at] == 0 || state[swap_at - 1] == 0 {
            swap_at -= 1;
        }
        state.swap(swap_at - 1, swap_at);
    }

    state
}

/// Formats a tile vector back into a space-separated ASCII board string.
pub fn format_board(state: &[u8]) -> String {
    state
        .iter()
        .map(|t| t.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// True iff `state` (an `n`×`n` board) is solvable.
pub fn check_solvable(state: &[u8], n: usize) -> bool {
    crate::solvability::check_solvable(state, n)
}

/// Number of inversions in `state`.
pub fn inversion_count(state: &[u8]) -> u32 {
    crate::solvability::inversion_count(state)
}

/// Generates a single pattern database for `group_tiles` against the
/// canonical solved board of side length `n`, writing it to
/// `output_path`.
pub fn generate_pattern_db(
    group_tiles: Vec<u8>,
    n: usize,
    output_path: &std::path::Path,
) -> Result<()> {
    let len = n * n;
    let goal_state: Vec<u8> = (1..len as u8).chain(std::iter::once(0)).collect();
    let goal = Board::new(goal_state, n);
    let group = crate::group::TileGroup::new(group_tiles);
    generate_pattern_database(&goal, &group, output_path)
}

/// Generates the three standard N=4 pattern databases at `config`'s
/// install paths. Idempotent per group: re-running leaves
/// already-generated files untouched, so two runs produce byte-identical
/// output.
pub fn generate_standard_pattern_databases(config: &PdbConfig) -> Result<()> {
    std::fs::create_dir_all(config.prefix())?;

    let goal_state: Vec<u8> = (1u8..16).chain(std::iter::once(0)).collect();
    let goal = Board::new(goal_state, 4);

    for (group, path) in standard_groups_n4().into_iter().zip(config.standard_paths()) {
        log::info!("generating {}", path.display());
        generate_pattern_database(&goal, &group, &path)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_and_format_round_trip() {
        let state = parse_board("1 2 3 4 5 6 7 8 0").unwrap();
        assert_eq!(state, vec![1, 2, 3, 4, 5, 6, 7, 8, 0]);
        assert_eq!(format_board(&state), "1 2 3 4 5 6 7 8 0");
    }

    #[test]
    fn solve_solved_board_returns_no_moves() {
        let config = PdbConfig::with_prefix("/nonexistent");
        let moves = solve("1 2 3 4 5 6 7 8 0", 3, &config).unwrap();
        assert!(moves.is_empty());
    }

    #[test]
    fn solve_unsolvable_board_fails() {
        let config = PdbConfig::with_prefix("/nonexistent");
        let err = solve("5 4 7 2 8 0 6 1 3", 3, &config).unwrap_err();
        assert!(matches!(err, TaquinError::Unsolvable));
    }

    #[test]
    fn generate_board_is_always_solvable() {
        for _ in 0..100 {
            let board = generate_board(3);
            assert!(check_solvable(&board, 3));
        }
    }

    #[test]
    fn check_solvable_matches_inversion_count_examples() {
        let state = [4u8, 5, 7, 2, 8, 0, 6, 1, 3];
        assert_eq!(inversion_count(&state), 16);
        assert!(check_solvable(&state, 3));
    }
}
