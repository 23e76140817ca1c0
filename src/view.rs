//! One full dashboard pass: filter, aggregate, collect chart series.
//!
//! [`render`] is a pure function of the loaded tables and the selection. The
//! UI calls it again whenever a selector changes and draws whatever comes back.

use chrono::NaiveDate;

use crate::data::aggregate::{self, Metrics, WeatherBox};
use crate::data::filter;
use crate::data::model::{BikeData, DailyRecord, HourlyRecord, Selection};

/// Everything the presentation layer needs for one selection.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    pub selection: Selection,
    pub metrics: Metrics,
    pub charts: ChartData,
    /// First rows of the filtered daily table.
    pub daily_preview: Vec<DailyRecord>,
    /// First rows of the filtered hourly table.
    pub hourly_preview: Vec<HourlyRecord>,
    /// Row counts after filtering.
    pub daily_rows: usize,
    pub hourly_rows: usize,
}

/// Series for the three chart tabs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartData {
    /// Daily rentals ordered by date.
    pub daily_trend: Vec<(NaiveDate, u32)>,
    /// Mean rentals per hour of day.
    pub hourly_pattern: Vec<(u8, f64)>,
    /// Rentals distribution per weather situation.
    pub weather: Vec<WeatherBox>,
    /// (normalized temperature, rentals) per day.
    pub temperature: Vec<(f64, f64)>,
}

impl ChartData {
    fn build(daily: &[DailyRecord], hourly: &[HourlyRecord]) -> Self {
        let mut daily_trend: Vec<(NaiveDate, u32)> =
            daily.iter().map(|r| (r.date, r.count)).collect();
        daily_trend.sort_by_key(|(date, _)| *date);

        Self {
            daily_trend,
            hourly_pattern: aggregate::hourly_means(hourly),
            weather: aggregate::weather_boxes(daily),
            temperature: daily
                .iter()
                .map(|r| (r.temperature, f64::from(r.count)))
                .collect(),
        }
    }
}

/// Build the view for `selection`, keeping at most `preview_rows` rows of
/// each filtered table for the raw-data section.
pub fn render(data: &BikeData, selection: Selection, preview_rows: usize) -> DashboardView {
    let filtered = filter::apply(data, &selection);
    if filtered.is_empty() {
        log::info!(
            "No rows for year={} season={}",
            selection.year_label(),
            selection.season_label()
        );
    }
    log::debug!(
        "Selection year={} season={} keeps {} daily / {} hourly rows",
        selection.year_label(),
        selection.season_label(),
        filtered.daily.len(),
        filtered.hourly.len()
    );

    DashboardView {
        selection,
        metrics: Metrics::from_daily(&filtered.daily),
        charts: ChartData::build(&filtered.daily, &filtered.hourly),
        daily_preview: filtered.daily.iter().take(preview_rows).cloned().collect(),
        hourly_preview: filtered.hourly.iter().take(preview_rows).cloned().collect(),
        daily_rows: filtered.daily.len(),
        hourly_rows: filtered.hourly.len(),
    }
}
