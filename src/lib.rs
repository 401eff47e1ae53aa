//! # taquin_solve - optimal sliding-tile puzzle solver
//!
//! A library for solving the generalized 15-puzzle (N×N sliding-tile
//! boards, N ∈ {2, 3, 4}) to optimality with Iterative Deepening A*,
//! guided by Manhattan distance and, for the 4×4 board, additive
//! disjoint pattern databases.
//!
//! ## Layout
//!
//! - [`board`]: the immutable [`Board`] type and the moves that
//!   transform it.
//! - [`solvability`]: inversion-parity solvability checking.
//! - [`hashing`]: packs a board state into a 64-bit integer, full or
//!   partial over a tile group.
//! - [`group`]: tile groups used to index pattern databases.
//! - [`heuristic`]: Manhattan distance and the combined PDB heuristic.
//! - [`pdb`]: pattern database generation ([`pdb::generator`]) and
//!   storage ([`pdb::store`]).
//! - [`solver`]: the IDA* search itself.
//! - [`config`]: where pattern database files live on disk.
//! - [`error`]: the crate's single error type.
//! - [`facade`]: the entry points most callers want — [`solve`],
//!   [`generate_board`], [`check_solvable`], and pattern database
//!   generation.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use taquin_solve::{solve, PdbConfig};
//!
//! let config = PdbConfig::from_env();
//! let moves = solve("1 2 3 4 5 6 7 8 0", 3, &config).unwrap();
//! assert!(moves.is_empty());
//! ```

pub mod board;
pub mod config;
pub mod error;
pub mod facade;
pub mod group;
pub mod hashing;
pub mod heuristic;
pub mod pdb;
pub mod solvability;
pub mod solver;

pub use board::{Board, Move};
pub use config::PdbConfig;
pub use error::{Result, TaquinError};
pub use facade::{
    check_solvable, format_board, generate_board, generate_pattern_db,
    generate_standard_pattern_databases, inversion_count, parse_board, solve, solve_vec,
};
pub use group::TileGroup;
pub use solver::IdaStarSolver;
