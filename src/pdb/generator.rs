//! BFS pattern database generator.

use std::collections::{HashMap, HashSet, VecDeque};
use std::fs;
use std::path::Path;

use crate::board::Board;
use crate::error::Result;
use crate::group::TileGroup;

/// Enumerates every partial state of `group` reachable from `goal_board`
/// and writes the minimal cost to reach each one to `output_path` as a
/// sequence of 9-byte `(key: u64 LE, cost: u8)` records sorted ascending
/// by key.
///
/// Idempotent: if `output_path` already exists, this is a no-op. Writes
/// to a temporary file and renames into place on success, so a crash
/// mid-write never leaves a corrupt database behind.
pub fn generate_pattern_database(
    goal_board: &Board,
    group: &TileGroup,
    output_path: &Path,
) -> Result<()> {
    if output_path.exists() {
        log::debug!(
            "pattern database {} already exists, skipping generation",
            output_path.display()
        );
        return Ok(());
    }

    log::info!(
        "generating pattern database for group {:?} -> {}",
        group.tiles(),
        output_path.display()
    );

    let group_plus = group.with_zero();

    let mut visited: HashSet<u64> = HashSet::new();
    let mut database: HashMap<u64, u8> = HashMap::new();

    let goal_key_plus = goal_board.partial_state_hash(&group_plus);
    visited.insert(goal_key_plus);
    database.insert(goal_board.partial_state_hash(group), 0);

    let mut frontier = VecDeque::new();
    frontier.push_back(goal_board.clone());

    let mut processed = 0u64;

    while let Some(current) = frontier.pop_front() {
        processed += 1;
        if processed % 500_000 == 0 {
            log::info!(
                "pattern database generation: {} states processed, {} entries so far",
                processed,
                database.len()
            );
        }

        for m in current.available_moves() {
            let child = current.perform_move_in_group(m, group);

            let key_plus = child.partial_state_hash(&group_plus);
            if visited.contains(&key_plus) {
                continue;
            }
            visited.insert(key_plus);

            let key = child.partial_state_hash(group);
            let cost = child.cost() as u8;
            let entry = database.entry(key).or_insert(u8::MAX);
            if cost < *entry {
                *entry = cost;
            }

            frontier.push_back(child);
        }
    }

    log::info!(
        "pattern database generation complete: {} entries, {} states processed",
        database.len(),
        processed
    );

    write_database(&database, output_path)
}

fn write_database(database: &HashMap<u64, u8>, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut entries: Vec<(u64, u8)> = database.iter().map(|(&k, &v)| (k, v)).collect();
    entries.sort_unstable_by_key(|(key, _)| *key);

    let mut bytes = Vec::with_capacity(entries.len() * 9);
    for (key, cost) in entries {
        bytes.extend_from_slice(&key.to_le_bytes());
        bytes.push(cost);
    }

    let tmp_path = output_path.with_extension("tmp");
    fs::write(&tmp_path, &bytes)?;
    fs::rename(&tmp_path, output_path)?;

    Ok(())
}
