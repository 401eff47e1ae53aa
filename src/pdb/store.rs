//! In-memory pattern database store, loaded once and shared read-only.

use std::fs;
use std::path::Path;

use crate::config::PdbConfig;
use crate::error::{Result, TaquinError};
use crate::group::{standard_groups_n4, TileGroup};
use std::collections::HashMap;

const RECORD_SIZE: u64 = 9;

/// One loaded pattern database per tile group, keyed by partial-state
/// hash. Immutable once built; safe to share behind an `Arc` across
/// every Board a solver spawns.
#[derive(Debug, Default)]
pub struct PdbStore {
    databases: Vec<(TileGroup, HashMap<u64, u8>)>,
}

impl PdbStore {
    pub fn empty() -> Self {
        Self {
            databases: Vec::new(),
        }
    }

    /// Loads a single group's database file and adds it to the store.
    pub fn load(&mut self, group: TileGroup, path: &Path) -> Result<()> {
        let bytes = fs::read(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                TaquinError::MissingPdb {
                    path: path.to_path_buf(),
                }
            } else {
                TaquinError::Io(e)
            }
        })?;

        let len = bytes.len() as u64;
        if len % RECORD_SIZE != 0 {
            return Err(TaquinError::CorruptPdb {
                path: path.to_path_buf(),
                len,
            });
        }

        let mut map = HashMap::with_capacity((len / RECORD_SIZE) as usize);
        for record in bytes.chunks_exact(RECORD_SIZE as usize) {
            let key = u64::from_le_bytes(record[0..8].try_into().unwrap());
            let cost = record[8];
            map.insert(key, cost);
        }

        log::debug!(
            "loaded pattern database {} ({} entries)",
            path.display(),
            map.len()
        );

        self.databases.push((group, map));
        Ok(())
    }

    /// Loads the three standard N=4 databases from `config`'s install
    /// paths, in the fixed group order the heuristic sums over.
    pub fn load_standard(config: &PdbConfig) -> Result<Self> {
        let mut store = Self::empty();
        let groups = standard_groups_n4();
        let paths = config.standard_paths();
        for (group, path) in groups.into_iter().zip(paths) {
            store.load(group, &path)?;
        }
        Ok(store)
    }

    pub fn is_empty(&self) -> bool {
        self.databases.is_empty()
    }

    /// Looks up `key` in the database for `group`. Returns `None` both
    /// when the group itself was never loaded and when the key is
    /// simply absent from an otherwise-loaded database — the heuristic
    /// treats both as a miss and falls back to 0.
    pub fn lookup(&self, group: &TileGroup, key: u64) -> Option<u8> {
        self.databases
            .iter()
            .find(|(g, _)| g == group)
            .and_then(|(_, map)| map.get(&key).copied())
    }
}
