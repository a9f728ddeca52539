use std::path::PathBuf;

use anyhow::Result;
use fs_err as fs;
use log::trace;

/// Filename-keyed store for downloaded portraits. Keeping this separate from
/// the download call means a cache hit performs no network traffic at all, and
/// leaves room for integrity checks (hashes, ETags) later without touching the
/// compositing code.
pub trait AssetCache {
    /// Returns the local path for `key` if it is already cached.
    fn lookup(&self, key: &str) -> Option<PathBuf>;

    /// Writes `contents` under `key` and returns the resulting local path.
    fn store(&self, key: &str, contents: &[u8]) -> Result<PathBuf>;
}

/// Cache backed by a flat directory of files named by their cache key. A file
/// that exists is trusted as-is; stale entries are never refreshed.
pub struct DirCache {
    dir: PathBuf,
}

impl DirCache {
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;

        Ok(Self { dir })
    }
}

impl AssetCache for DirCache {
    fn lookup(&self, key: &str) -> Option<PathBuf> {
        let path = self.dir.join(key);

        if path.is_file() {
            trace!("cache hit for {}", key);
            Some(path)
        } else {
            None
        }
    }

    fn store(&self, key: &str, contents: &[u8]) -> Result<PathBuf> {
        let path = self.dir.join(key);
        fs::write(&path, contents)?;

        Ok(path)
    }
}
