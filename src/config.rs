//! Dashboard configuration.
//!
//! Everything here is fixed at compile time; no file, flag or environment
//! variable feeds it. Tests build their own instances pointing at
//! temporary files.

use std::path::{Path, PathBuf};

/// Default location of the daily table, relative to the working directory.
pub const DEFAULT_DAY_FILE: &str = "day.csv";

/// Default location of the hourly table, relative to the working directory.
pub const DEFAULT_HOUR_FILE: &str = "hour.csv";

/// Root configuration structure.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    /// Input files.
    pub data: DataPaths,

    /// Rows shown in each raw-data preview table.
    pub preview_rows: usize,

    /// Initial window size in logical points.
    pub window_size: [f32; 2],

    /// Smallest window size the layout supports.
    pub min_window_size: [f32; 2],
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            data: DataPaths::default(),
            preview_rows: 5,
            window_size: [1280.0, 860.0],
            min_window_size: [800.0, 600.0],
        }
    }
}

/// Where the two CSV tables live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataPaths {
    pub day: PathBuf,
    pub hour: PathBuf,
}

impl Default for DataPaths {
    fn default() -> Self {
        Self::in_dir(Path::new(""))
    }
}

impl DataPaths {
    /// Default file names inside `dir`.
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            day: dir.join(DEFAULT_DAY_FILE),
            hour: dir.join(DEFAULT_HOUR_FILE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = DashboardConfig::default();
        assert_eq!(config.data.day, PathBuf::from("day.csv"));
        assert_eq!(config.data.hour, PathBuf::from("hour.csv"));
        assert_eq!(config.preview_rows, 5);
    }

    #[test]
    fn test_paths_in_dir() {
        let paths = DataPaths::in_dir(Path::new("/data/bikes"));
        assert_eq!(paths.day, PathBuf::from("/data/bikes/day.csv"));
        assert_eq!(paths.hour, PathBuf::from("/data/bikes/hour.csv"));
    }
}
