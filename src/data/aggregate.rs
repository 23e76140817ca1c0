use std::collections::BTreeMap;

use super::model::{DailyRecord, HourlyRecord};

/// Shown in place of a metric that has no value (empty selection).
pub const MISSING: &str = "-";

// ---------------------------------------------------------------------------
// Headline metrics
// ---------------------------------------------------------------------------

/// Total, average and peak daily rentals over a filtered daily table.
///
/// An empty table yields `total = 0` with `average` and `peak` set to `None`
/// rather than NaN or a sentinel.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Metrics {
    pub days: usize,
    pub total: u64,
    pub average: Option<f64>,
    pub peak: Option<u32>,
}

impl Metrics {
    pub fn from_daily(rows: &[DailyRecord]) -> Self {
        let days = rows.len();
        let total: u64 = rows.iter().map(|r| u64::from(r.count)).sum();
        let average = (days > 0).then(|| total as f64 / days as f64);
        let peak = rows.iter().map(|r| r.count).max();
        Self {
            days,
            total,
            average,
            peak,
        }
    }

    pub fn total_display(&self) -> String {
        format_thousands(self.total)
    }

    /// Average rounded to the nearest whole rental, ties to even, no
    /// separators.
    pub fn average_display(&self) -> String {
        match self.average {
            Some(avg) => format!("{}", avg.round_ties_even() as u64),
            None => MISSING.to_string(),
        }
    }

    pub fn peak_display(&self) -> String {
        self.peak.map_or_else(|| MISSING.to_string(), |p| p.to_string())
    }
}

/// `1234567` → `"1,234,567"`.
pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

// ---------------------------------------------------------------------------
// Chart statistics
// ---------------------------------------------------------------------------

/// Mean rentals for each hour of day that has at least one row, by hour.
pub fn hourly_means(rows: &[HourlyRecord]) -> Vec<(u8, f64)> {
    let mut sums: BTreeMap<u8, (u64, usize)> = BTreeMap::new();
    for r in rows {
        let entry = sums.entry(r.hour).or_default();
        entry.0 += u64::from(r.count);
        entry.1 += 1;
    }
    sums.into_iter()
        .map(|(hour, (sum, n))| (hour, sum as f64 / n as f64))
        .collect()
}

/// Five-number summary drawn as one box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxSummary {
    pub lower_whisker: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub upper_whisker: f64,
}

impl BoxSummary {
    /// Quartiles by linear interpolation; whiskers reach the most extreme
    /// observation still within 1.5 IQR of the box. `None` for no values.
    pub fn from_values(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }
        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);

        let q1 = percentile(&sorted, 25.0);
        let median = percentile(&sorted, 50.0);
        let q3 = percentile(&sorted, 75.0);
        let iqr = q3 - q1;

        let lower_whisker = sorted
            .iter()
            .copied()
            .find(|&v| v >= q1 - 1.5 * iqr)
            .unwrap_or(q1);
        let upper_whisker = sorted
            .iter()
            .rev()
            .copied()
            .find(|&v| v <= q3 + 1.5 * iqr)
            .unwrap_or(q3);

        Some(Self {
            lower_whisker,
            q1,
            median,
            q3,
            upper_whisker,
        })
    }
}

/// Percentile of already sorted values, interpolating between closest ranks.
fn percentile(sorted: &[f64], p: f64) -> f64 {
    let n = sorted.len();
    if n == 0 {
        return f64::NAN;
    }
    if n == 1 {
        return sorted[0];
    }

    let rank = (p / 100.0) * (n - 1) as f64;
    let lower = rank.floor() as usize;
    let upper = (rank.ceil() as usize).min(n - 1);
    let frac = rank - lower as f64;

    sorted[lower] * (1.0 - frac) + sorted[upper] * frac
}

/// Rentals distribution for one weather situation.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherBox {
    pub weather: u8,
    pub days: usize,
    pub summary: BoxSummary,
}

/// One box per weather code present in `rows`, ordered by code.
pub fn weather_boxes(rows: &[DailyRecord]) -> Vec<WeatherBox> {
    let mut groups: BTreeMap<u8, Vec<f64>> = BTreeMap::new();
    for r in rows {
        groups.entry(r.weather).or_default().push(f64::from(r.count));
    }
    groups
        .into_iter()
        .filter_map(|(weather, values)| {
            let summary = BoxSummary::from_values(&values)?;
            Some(WeatherBox {
                weather,
                days: values.len(),
                summary,
            })
        })
        .collect()
}
