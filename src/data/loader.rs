use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use thiserror::Error;

use super::model::{BikeData, DailyRecord, HourlyRecord};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Why a data file could not be turned into a table. Always fatal for the
/// refresh that hit it.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("{} is missing required column '{column}'", path.display())]
    MissingColumn { path: PathBuf, column: &'static str },

    /// `line` is 1-based and counts the header as line 1.
    #[error("{} line {line}: hour {hour} is outside 0-23", path.display())]
    HourOutOfRange { path: PathBuf, line: usize, hour: u8 },
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load both tables from disk. Any failure aborts the whole load.
pub fn load_data(day_path: &Path, hour_path: &Path) -> Result<BikeData, LoadError> {
    let daily = load_daily(day_path)?;
    let hourly = load_hourly(hour_path)?;
    log::info!(
        "Loaded {} daily rows from {} and {} hourly rows from {}",
        daily.len(),
        day_path.display(),
        hourly.len(),
        hour_path.display()
    );
    Ok(BikeData { daily, hourly })
}

pub fn load_daily(path: &Path) -> Result<Vec<DailyRecord>, LoadError> {
    read_daily(open(path)?, path)
}

pub fn load_hourly(path: &Path) -> Result<Vec<HourlyRecord>, LoadError> {
    read_hourly(open(path)?, path)
}

/// Parse `day.csv` content. `source` only labels errors.
pub fn read_daily<R: Read>(reader: R, source: &Path) -> Result<Vec<DailyRecord>, LoadError> {
    read_table(reader, source, &DailyRecord::COLUMNS)
}

/// Parse `hour.csv` content, rejecting hours outside `0..=23`.
pub fn read_hourly<R: Read>(reader: R, source: &Path) -> Result<Vec<HourlyRecord>, LoadError> {
    let rows: Vec<HourlyRecord> = read_table(reader, source, &HourlyRecord::COLUMNS)?;
    if let Some((row, rec)) = rows.iter().enumerate().find(|(_, r)| r.hour > 23) {
        return Err(LoadError::HourOutOfRange {
            path: source.to_path_buf(),
            line: row + 2,
            hour: rec.hour,
        });
    }
    Ok(rows)
}

// ---------------------------------------------------------------------------
// CSV plumbing
// ---------------------------------------------------------------------------

fn open(path: &Path) -> Result<File, LoadError> {
    File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Header row is checked against `required` before any row is decoded, so a
/// schema mismatch is reported by column name. Header cells are trimmed for
/// both the check and decoding. Unlisted columns are ignored.
fn read_table<T, R>(reader: R, source: &Path, required: &[&'static str]) -> Result<Vec<T>, LoadError>
where
    T: DeserializeOwned,
    R: Read,
{
    let csv_err = |source_err: csv::Error| LoadError::Csv {
        path: source.to_path_buf(),
        source: source_err,
    };

    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .from_reader(reader);
    let headers = reader.headers().map_err(csv_err)?.clone();

    if let Some(column) = required
        .iter()
        .find(|col| !headers.iter().any(|h| h == **col))
    {
        return Err(LoadError::MissingColumn {
            path: source.to_path_buf(),
            column: *column,
        });
    }

    reader
        .deserialize()
        .collect::<Result<Vec<T>, _>>()
        .map_err(csv_err)
}
