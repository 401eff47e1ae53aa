//! Tile groups used for partial hashing and pattern database indexing.

/// A set of tile values (excluding 0) that a pattern database indexes.
///
/// Stored as a sorted `Vec` rather than a bitmask-backed set type since
/// groups are tiny (at most 6 tiles for the standard N=4 partition) and
/// are built once, then only ever queried with `contains`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileGroup {
    tiles: Vec<u8>,
}

impl TileGroup {
    pub fn new(mut tiles: Vec<u8>) -> Self {
        tiles.sort_unstable();
        tiles.dedup();
        Self { tiles }
    }

    pub fn contains(&self, tile: u8) -> bool {
        self.tiles.binary_search(&tile).is_ok()
    }

    pub fn tiles(&self) -> &[u8] {
        &self.tiles
    }

    /// This group plus the empty cell (tile 0), used by the BFS generator's
    /// visited set to distinguish configurations that differ only in where
    /// the empty cell sits.
    pub fn with_zero(&self) -> TileGroup {
        let mut tiles = self.tiles.clone();
        tiles.push(0);
        TileGroup::new(tiles)
    }

    /// Smallest tile value in `0..=15` not in this group — the sentinel
    /// substituted for every out-of-group cell when computing a partial
    /// hash.
    pub fn sentinel(&self) -> u8 {
        (0u8..=15)
            .find(|v| !self.contains(*v))
            .expect("a 6-tile group can never cover all 16 values")
    }
}

/// The standard disjoint 6-6-3 partition of tiles `1..=15` used to guide
/// the N=4 15-puzzle: three groups whose union is `{1..=15}` and whose
/// pairwise intersection is empty.
pub fn standard_groups_n4() -> [TileGroup; 3] {
    [
        TileGroup::new(vec![2, 3, 4]),
        TileGroup::new(vec![1, 5, 6, 9, 10, 13]),
        TileGroup::new(vec![7, 8, 11, 12, 14, 15]),
    ]
}
