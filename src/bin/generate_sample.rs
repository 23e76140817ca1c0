//! Writes synthetic `day.csv` and `hour.csv` files with the column layout of
//! the Bike Sharing dataset, covering 2011-01-01 through 2012-12-31.
//!
//! Usage: `cargo run --bin generate_sample [output_dir]`

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{Datelike, NaiveDate, Weekday};
use serde::Serialize;

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5)).rotate_left(7).wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

#[derive(Serialize)]
struct DayRow {
    instant: usize,
    dteday: String,
    season: u8,
    yr: u8,
    mnth: u32,
    holiday: u8,
    weekday: u32,
    workingday: u8,
    weathersit: u8,
    temp: f64,
    atemp: f64,
    hum: f64,
    windspeed: f64,
    casual: u32,
    registered: u32,
    cnt: u32,
}

#[derive(Serialize)]
struct HourRow {
    instant: usize,
    dteday: String,
    season: u8,
    yr: u8,
    mnth: u32,
    hr: u8,
    holiday: u8,
    weekday: u32,
    workingday: u8,
    weathersit: u8,
    temp: f64,
    atemp: f64,
    hum: f64,
    windspeed: f64,
    casual: u32,
    registered: u32,
    cnt: u32,
}

/// Season code by astronomical boundaries, the way the dataset assigns them.
fn season_of(date: NaiveDate) -> u8 {
    match (date.month(), date.day()) {
        (12, d) if d >= 21 => 1,
        (1..=2, _) => 1,
        (3, d) if d < 20 => 1,
        (3..=5, _) => 2,
        (6, d) if d < 21 => 2,
        (6..=8, _) => 3,
        (9, d) if d < 22 => 3,
        _ => 4,
    }
}

/// Relative demand per hour of day: commute peaks at 8 and 17-18.
const HOUR_PROFILE: [f64; 24] = [
    0.25, 0.15, 0.10, 0.05, 0.03, 0.10, 0.40, 1.10, 2.00, 1.10, 0.70, 0.85, 1.05, 1.05, 0.95,
    1.00, 1.40, 2.40, 2.20, 1.50, 1.05, 0.80, 0.60, 0.40,
];

fn round4(v: f64) -> f64 {
    (v * 10_000.0).round() / 10_000.0
}

fn main() -> Result<()> {
    let out_dir = std::env::args()
        .nth(1)
        .map_or_else(|| PathBuf::from("."), PathBuf::from);
    let mut rng = SimpleRng::new(42);

    let start = NaiveDate::from_ymd_opt(2011, 1, 1).context("invalid start date")?;
    let end = NaiveDate::from_ymd_opt(2012, 12, 31).context("invalid end date")?;
    let profile_sum: f64 = HOUR_PROFILE.iter().sum();

    let mut days = Vec::new();
    let mut hours = Vec::new();

    for (i, date) in start.iter_days().take_while(|d| *d <= end).enumerate() {
        let yr = (date.year() - 2011) as u8;
        let season = season_of(date);
        let weekday = date.weekday();
        let workingday = u8::from(!matches!(weekday, Weekday::Sat | Weekday::Sun));

        // Warmest around late July.
        let phase = (f64::from(date.ordinal()) - 200.0) / 365.0 * 2.0 * std::f64::consts::PI;
        let temp = (0.5 + 0.3 * phase.cos() + rng.gauss(0.0, 0.05)).clamp(0.05, 0.95);
        let weathersit = match rng.next_f64() {
            p if p < 0.63 => 1,
            p if p < 0.97 => 2,
            _ => 3,
        };

        let weather_factor = [1.0, 0.8, 0.35][usize::from(weathersit) - 1];
        let growth = if yr == 0 { 1.0 } else { 1.65 };
        let expected = 2000.0 + 5000.0 * temp * weather_factor * growth;
        let cnt = rng.gauss(expected, 400.0).max(20.0).round() as u32;
        let casual_share = if workingday == 1 { 0.15 } else { 0.35 };
        let casual = (f64::from(cnt) * casual_share).round() as u32;

        let dteday = date.format("%Y-%m-%d").to_string();
        let hum = round4(rng.gauss(0.63, 0.14).clamp(0.0, 1.0));
        let windspeed = round4(rng.gauss(0.19, 0.07).clamp(0.0, 1.0));

        days.push(DayRow {
            instant: i + 1,
            dteday: dteday.clone(),
            season,
            yr,
            mnth: date.month(),
            holiday: 0,
            weekday: weekday.num_days_from_sunday(),
            workingday,
            weathersit,
            temp: round4(temp),
            atemp: round4(temp * 0.95),
            hum,
            windspeed,
            casual,
            registered: cnt - casual,
            cnt,
        });

        for (hr, weight) in HOUR_PROFILE.iter().enumerate() {
            let hour_cnt = (f64::from(cnt) * weight / profile_sum).round() as u32;
            let hour_casual = (f64::from(hour_cnt) * casual_share).round() as u32;
            hours.push(HourRow {
                instant: hours.len() + 1,
                dteday: dteday.clone(),
                season,
                yr,
                mnth: date.month(),
                hr: hr as u8,
                holiday: 0,
                weekday: weekday.num_days_from_sunday(),
                workingday,
                weathersit,
                temp: round4(temp),
                atemp: round4(temp * 0.95),
                hum,
                windspeed,
                casual: hour_casual,
                registered: hour_cnt - hour_casual,
                cnt: hour_cnt,
            });
        }
    }

    let day_path = out_dir.join("day.csv");
    let hour_path = out_dir.join("hour.csv");
    write_csv(&day_path, &days)?;
    write_csv(&hour_path, &hours)?;

    println!(
        "Wrote {} days to {} and {} hours to {}",
        days.len(),
        day_path.display(),
        hours.len(),
        hour_path.display()
    );
    Ok(())
}

fn write_csv<T: Serialize>(path: &Path, rows: &[T]) -> Result<()> {
    let mut writer =
        csv::Writer::from_path(path).with_context(|| format!("creating {}", path.display()))?;
    for row in rows {
        writer
            .serialize(row)
            .with_context(|| format!("writing {}", path.display()))?;
    }
    writer.flush().with_context(|| format!("flushing {}", path.display()))?;
    Ok(())
}
