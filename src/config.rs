//! Pattern database install-path configuration.
//!
//! `/usr/local/share/libtaquinsolve` is the canonical install path for
//! the standard N=4 pattern databases. This type keeps that as the
//! default but lets a caller redirect it, either through
//! [`PdbConfig::with_prefix`] or the `TAQUIN_PDB_DIR` environment
//! variable.

use std::path::{Path, PathBuf};

const DEFAULT_PREFIX: &str = "/usr/local/share/libtaquinsolve";
const ENV_PREFIX: &str = "TAQUIN_PDB_DIR";

/// Names and location of the three standard N=4 pattern database files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PdbConfig {
    prefix: PathBuf,
}

impl PdbConfig {
    /// Resolves the default prefix: `TAQUIN_PDB_DIR` if set, else the
    /// canonical install path.
    pub fn from_env() -> Self {
        match std::env::var_os(ENV_PREFIX) {
            Some(dir) => Self::with_prefix(dir),
            None => Self::with_prefix(DEFAULT_PREFIX),
        }
    }

    /// Uses a caller-supplied directory instead of the default.
    pub fn with_prefix<P: Into<PathBuf>>(prefix: P) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    pub fn prefix(&self) -> &Path {
        &self.prefix
    }

    pub fn group_234(&self) -> PathBuf {
        self.prefix.join("234.db.bin")
    }

    pub fn group_15691013(&self) -> PathBuf {
        self.prefix.join("15691013.db.bin")
    }

    pub fn group_7811121415(&self) -> PathBuf {
        self.prefix.join("7811121415.db.bin")
    }

    /// The three standard paths in the fixed order the facade loads them.
    pub fn standard_paths(&self) -> [PathBuf; 3] {
        [
            self.group_234(),
            self.group_15691013(),
            self.group_7811121415(),
        ]
    }
}

impl Default for PdbConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_prefix_is_canonical_install_path() {
        std::env::remove_var(ENV_PREFIX);
        let config = PdbConfig::from_env();
        assert_eq!(config.prefix(), Path::new(DEFAULT_PREFIX));
    }

    #[test]
    fn standard_paths_use_canonical_file_names() {
        let config = PdbConfig::with_prefix("/tmp/pdbs");
        let paths = config.standard_paths();
        assert_eq!(paths[0], Path::new("/tmp/pdbs/234.db.bin"));
        assert_eq!(paths[1], Path::new("/tmp/pdbs/15691013.db.bin"));
        assert_eq!(paths[2], Path::new("/tmp/pdbs/7811121415.db.bin"));
    }
}
