use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::SystemTime;

use crate::config::DataPaths;

use super::loader::{self, LoadError};
use super::model::BikeData;

// ---------------------------------------------------------------------------
// File signatures
// ---------------------------------------------------------------------------

/// What has to stay the same for a loaded file to count as unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSignature {
    pub path: PathBuf,
    /// `None` on platforms that do not report modification times.
    pub modified: Option<SystemTime>,
    pub len: u64,
}

impl FileSignature {
    pub fn of(path: &Path) -> Result<Self, LoadError> {
        let meta = std::fs::metadata(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self {
            path: path.to_path_buf(),
            modified: meta.modified().ok(),
            len: meta.len(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct CacheKey {
    day: FileSignature,
    hour: FileSignature,
}

impl CacheKey {
    fn current(paths: &DataPaths) -> Result<Self, LoadError> {
        Ok(Self {
            day: FileSignature::of(&paths.day)?,
            hour: FileSignature::of(&paths.hour)?,
        })
    }
}

// ---------------------------------------------------------------------------
// DataCache
// ---------------------------------------------------------------------------

/// Memoized [`loader::load_data`] for one pair of paths.
///
/// Invalidation rule: the cached tables are returned as long as both files
/// report the same path, modification time and length as when they were
/// loaded. Any difference triggers a full reload on the next [`get`].
/// [`invalidate`] forgets the entry unconditionally, and a failed load
/// leaves the cache empty.
///
/// [`get`]: DataCache::get
/// [`invalidate`]: DataCache::invalidate
#[derive(Debug)]
pub struct DataCache {
    paths: DataPaths,
    entry: Option<(CacheKey, Arc<BikeData>)>,
    loads: usize,
}

impl DataCache {
    pub fn new(paths: DataPaths) -> Self {
        Self {
            paths,
            entry: None,
            loads: 0,
        }
    }

    /// Return the tables, reloading only if the files changed since the last
    /// successful load.
    pub fn get(&mut self) -> Result<Arc<BikeData>, LoadError> {
        let key = match CacheKey::current(&self.paths) {
            Ok(key) => key,
            Err(e) => {
                self.entry = None;
                return Err(e);
            }
        };

        if let Some((cached_key, data)) = &self.entry {
            if *cached_key == key {
                log::debug!("Data cache hit for {}", self.paths.day.display());
                return Ok(Arc::clone(data));
            }
            log::info!("Input files changed on disk, reloading");
        }

        self.entry = None;
        let data = Arc::new(loader::load_data(&self.paths.day, &self.paths.hour)?);
        self.loads += 1;
        self.entry = Some((key, Arc::clone(&data)));
        Ok(data)
    }

    /// Drop the cached tables so the next [`get`](DataCache::get) reloads.
    pub fn invalidate(&mut self) {
        if self.entry.take().is_some() {
            log::info!("Data cache invalidated");
        }
    }

    #[cfg(test)]
    pub fn is_loaded(&self) -> bool {
        self.entry.is_some()
    }

    /// Number of loads performed so far (cache misses that succeeded).
    pub fn load_count(&self) -> usize {
        self.loads
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::fixtures::{DAY_CSV, HOUR_CSV};
    use tempfile::TempDir;

    fn write_fixtures(dir: &TempDir) -> DataPaths {
        let paths = DataPaths::in_dir(dir.path());
        std::fs::write(&paths.day, DAY_CSV).unwrap();
        std::fs::write(&paths.hour, HOUR_CSV).unwrap();
        paths
    }

    #[test]
    fn test_second_get_is_a_hit_with_identical_tables() {
        let temp_dir = TempDir::new().unwrap();
        let mut cache = DataCache::new(write_fixtures(&temp_dir));

        let first = cache.get().unwrap();
        let second = cache.get().unwrap();

        assert_eq!(cache.load_count(), 1);
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(first.daily, second.daily);
        assert_eq!(first.hourly, second.hourly);
    }

    #[test]
    fn test_changed_file_triggers_reload() {
        let temp_dir = TempDir::new().unwrap();
        let paths = write_fixtures(&temp_dir);
        let mut cache = DataCache::new(paths.clone());

        let first = cache.get().unwrap();
        assert_eq!(first.daily.len(), 4);

        // Appending a row changes the length even if mtime granularity is coarse.
        let mut grown = DAY_CSV.to_string();
        grown.push_str("5,2012-12-31,1,1,12,0,1,1,2,0.215833,0.223487,0.5775,0.154846,439,2290,2729\n");
        std::fs::write(&paths.day, grown).unwrap();

        let second = cache.get().unwrap();
        assert_eq!(cache.load_count(), 2);
        assert_eq!(second.daily.len(), 5);
    }

    #[test]
    fn test_invalidate_forces_reload() {
        let temp_dir = TempDir::new().unwrap();
        let mut cache = DataCache::new(write_fixtures(&temp_dir));

        let first = cache.get().unwrap();
        cache.invalidate();
        assert!(!cache.is_loaded());

        let second = cache.get().unwrap();
        assert_eq!(cache.load_count(), 2);
        assert!(!Arc::ptr_eq(&first, &second));
        assert_eq!(*first, *second);
    }

    #[test]
    fn test_missing_file_errors_and_clears_entry() {
        let temp_dir = TempDir::new().unwrap();
        let paths = write_fixtures(&temp_dir);
        let mut cache = DataCache::new(paths.clone());
        cache.get().unwrap();

        std::fs::remove_file(&paths.hour).unwrap();
        let err = cache.get().unwrap_err();

        assert!(matches!(err, LoadError::Io { .. }));
        assert!(!cache.is_loaded());
    }

    #[test]
    fn test_malformed_file_is_not_cached() {
        let temp_dir = TempDir::new().unwrap();
        let paths = write_fixtures(&temp_dir);
        std::fs::write(&paths.day, "dteday,yr\n2011-01-01,0\n").unwrap();
        let mut cache = DataCache::new(paths);

        assert!(matches!(
            cache.get().unwrap_err(),
            LoadError::MissingColumn { .. }
        ));
        assert_eq!(cache.load_count(), 0);
        assert!(!cache.is_loaded());
    }
}
