//! Heuristic search: Iterative Deepening A* guided by Manhattan distance
//! and, for N=4, additive pattern database lookups.

pub mod ida_star;

pub use ida_star::IdaStarSolver;
