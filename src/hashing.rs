//! Packs board states into 64-bit integers for hashing and PDB keys.
//!
//! Four bits per cell, row-major, little-endian nibble order: cell `i`
//! contributes `value * 16^i`. This is collision-free for N ≤ 4 tile
//! values (0..=15 fits in a nibble) and doubles as the PDB key format
//! once out-of-group cells are collapsed to a sentinel.

use crate::group::TileGroup;

pub fn full_state_hash(state: &[u8], _n: usize) -> u64 {
    state
        .iter()
        .enumerate()
        .fold(0u64, |hash, (i, &tile)| hash | ((tile as u64) << (4 * i)))
}

/// Same packing as [`full_state_hash`], but cells whose tile is not in
/// `group` are replaced by `group.sentinel()` first. Two full states
/// that agree on where `group`'s tiles sit produce the same partial
/// hash regardless of how the other tiles are arranged.
pub fn partial_state_hash(state: &[u8], n: usize, group: &TileGroup) -> u64 {
    let sentinel = group.sentinel();
    let projected: Vec<u8> = state
        .iter()
        .map(|&tile| if group.contains(tile) { tile } else { sentinel })
        .collect();
    full_state_hash(&projected, n)
}
