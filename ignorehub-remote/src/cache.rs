//! On-disk cache for the classified template index.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

use directories::ProjectDirs;
use ignorehub_core::TemplateRecord;

use crate::error::{Error, Result};

const CACHE_FILE: &str = "index.json";
const MAX_AGE: Duration = Duration::from_secs(24 * 60 * 60);

/// A JSON index cache at a fixed path with an mtime-based TTL.
pub struct IndexCache {
    path: PathBuf,
    max_age: Duration,
}

impl IndexCache {
    /// Cache under the per-user cache directory, or `None` when the platform
    /// offers no home directory.
    pub fn user() -> Option<Self> {
        let dirs = ProjectDirs::from("", "", "ignorehub")?;
        Some(Self::at(dirs.cache_dir().join(CACHE_FILE)))
    }

    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            max_age: MAX_AGE,
        }
    }

    pub fn with_max_age(mut self, max_age: Duration) -> Self {
        self.max_age = max_age;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the cached index. A missing, stale, unreadable, or undecodable
    /// cache is a miss, never an error.
    pub fn load(&self) -> Option<Vec<TemplateRecord>> {
        let modified = fs::metadata(&self.path).ok()?.modified().ok()?;
        let age = SystemTime::now().duration_since(modified).ok()?;
        if age > self.max_age {
            return None;
        }

        let content = fs::read_to_string(&self.path).ok()?;
        serde_json::from_str(&content).ok()
    }

    /// Write the index, creating parent directories as needed.
    pub fn store(&self, records: &[TemplateRecord]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                Box::new(Error::Cache {
                    path: parent.to_path_buf(),
                    source: e,
                })
            })?;
        }

        let json = serde_json::to_string_pretty(records)
            .map_err(|e| Box::new(Error::CacheEncode { source: e }))?;
        fs::write(&self.path, json).map_err(|e| {
            Box::new(Error::Cache {
                path: self.path.clone(),
                source: e,
            })
        })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use ignorehub_core::TemplateKind;
    use tempfile::TempDir;

    use super::*;

    fn records() -> Vec<TemplateRecord> {
        vec![
            TemplateRecord {
                id: "Rust".to_string(),
                name: "Rust".to_string(),
                path: "Rust.gitignore".to_string(),
                kind: TemplateKind::Language,
            },
            TemplateRecord {
                id: "Global/Vim".to_string(),
                name: "Global/Vim".to_string(),
                path: "Global/Vim.gitignore".to_string(),
                kind: TemplateKind::Global,
            },
        ]
    }

    #[test]
    fn test_store_then_load_round_trips() {
        let temp = TempDir::new().unwrap();
        let cache = IndexCache::at(temp.path().join("nested").join("index.json"));

        cache.store(&records()).unwrap();

        assert_eq!(cache.load(), Some(records()));
    }

    #[test]
    fn test_missing_file_is_a_miss() {
        let temp = TempDir::new().unwrap();
        let cache = IndexCache::at(temp.path().join("index.json"));

        assert_eq!(cache.load(), None);
    }

    #[test]
    fn test_corrupt_file_is_a_miss() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("index.json");
        fs::write(&path, "not json at all").unwrap();

        assert_eq!(IndexCache::at(&path).load(), None);
    }

    #[test]
    fn test_stale_file_is_a_miss() {
        let temp = TempDir::new().unwrap();
        let cache = IndexCache::at(temp.path().join("index.json")).with_max_age(Duration::ZERO);

        cache.store(&records()).unwrap();
        std::thread::sleep(Duration::from_millis(20));

        assert_eq!(cache.load(), None);
    }
}
