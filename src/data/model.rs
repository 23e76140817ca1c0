use std::fmt;

use chrono::NaiveDate;
use serde::Deserialize;

// ---------------------------------------------------------------------------
// Record – common view over both tables for filtering
// ---------------------------------------------------------------------------

/// The categorical fields every row carries, whatever its granularity.
pub trait Record {
    /// `yr` column: 0 for 2011, 1 for 2012.
    fn year_index(&self) -> u8;
    /// `season` column: 1..=4.
    fn season_code(&self) -> u8;
}

// ---------------------------------------------------------------------------
// DailyRecord – one row of day.csv
// ---------------------------------------------------------------------------

/// Rentals aggregated over one calendar date.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DailyRecord {
    #[serde(rename = "dteday")]
    pub date: NaiveDate,
    #[serde(rename = "yr")]
    pub year_index: u8,
    pub season: u8,
    /// Weather situation code, 1 (clear) through 4 (heavy rain).
    #[serde(rename = "weathersit")]
    pub weather: u8,
    /// Normalized temperature in `[0, 1]`.
    #[serde(rename = "temp")]
    pub temperature: f64,
    #[serde(rename = "cnt")]
    pub count: u32,
}

impl DailyRecord {
    /// Columns that must be present in the CSV header.
    pub const COLUMNS: [&'static str; 6] = ["dteday", "yr", "season", "weathersit", "temp", "cnt"];
}

impl Record for DailyRecord {
    fn year_index(&self) -> u8 {
        self.year_index
    }

    fn season_code(&self) -> u8 {
        self.season
    }
}

// ---------------------------------------------------------------------------
// HourlyRecord – one row of hour.csv
// ---------------------------------------------------------------------------

/// Rentals during one hour of one date.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HourlyRecord {
    #[serde(rename = "dteday")]
    pub date: NaiveDate,
    /// Hour of day, `0..=23`.
    #[serde(rename = "hr")]
    pub hour: u8,
    #[serde(rename = "yr")]
    pub year_index: u8,
    pub season: u8,
    #[serde(rename = "cnt")]
    pub count: u32,
}

impl HourlyRecord {
    pub const COLUMNS: [&'static str; 5] = ["dteday", "hr", "yr", "season", "cnt"];
}

impl Record for HourlyRecord {
    fn year_index(&self) -> u8 {
        self.year_index
    }

    fn season_code(&self) -> u8 {
        self.season
    }
}

// ---------------------------------------------------------------------------
// BikeData – both loaded tables
// ---------------------------------------------------------------------------

/// The two tables as loaded from disk. Never mutated after load.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BikeData {
    pub daily: Vec<DailyRecord>,
    pub hourly: Vec<HourlyRecord>,
}

// ---------------------------------------------------------------------------
// Selectors
// ---------------------------------------------------------------------------

/// The years covered by the dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Year {
    Y2011,
    Y2012,
}

impl Year {
    pub const ALL: [Year; 2] = [Year::Y2011, Year::Y2012];

    pub fn number(self) -> i32 {
        match self {
            Year::Y2011 => 2011,
            Year::Y2012 => 2012,
        }
    }

    /// Value of the `yr` column for this year.
    pub fn index(self) -> u8 {
        (self.number() - 2011) as u8
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

/// Season names as shown in the selector, with their `season` codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Season {
    Spring,
    Summer,
    Fall,
    Winter,
}

impl Season {
    pub const ALL: [Season; 4] = [Season::Spring, Season::Summer, Season::Fall, Season::Winter];

    pub fn code(self) -> u8 {
        match self {
            Season::Spring => 1,
            Season::Summer => 2,
            Season::Fall => 3,
            Season::Winter => 4,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Season::Spring => "Spring",
            Season::Summer => "Summer",
            Season::Fall => "Fall",
            Season::Winter => "Winter",
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Current selector values. `None` means "All".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Selection {
    pub year: Option<Year>,
    pub season: Option<Season>,
}

impl Selection {
    pub fn new(year: Option<Year>, season: Option<Season>) -> Self {
        Self { year, season }
    }

    /// Whether a row passes both selectors.
    pub fn matches<R: Record>(&self, row: &R) -> bool {
        let year_ok = self.year.map_or(true, |y| row.year_index() == y.index());
        let season_ok = self.season.map_or(true, |s| row.season_code() == s.code());
        year_ok && season_ok
    }

    pub fn year_label(&self) -> String {
        self.year.map_or_else(|| ALL_LABEL.to_string(), |y| y.to_string())
    }

    pub fn season_label(&self) -> &'static str {
        self.season.map_or(ALL_LABEL, Season::name)
    }
}

/// Label of the "no filter" choice in both selectors.
pub const ALL_LABEL: &str = "All";

/// Human-readable name of a `weathersit` code.
pub fn weather_label(code: u8) -> &'static str {
    match code {
        1 => "Clear",
        2 => "Mist",
        3 => "Light rain/snow",
        4 => "Heavy rain",
        _ => "Unknown",
    }
}
