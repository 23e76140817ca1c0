use chrono::{Datelike, NaiveDate};
use eframe::egui::{self, Ui};
use egui_plot::{BoxElem, BoxPlot, BoxSpread, Legend, Line, Plot, PlotPoints, Points};

use crate::color::ChartColors;
use crate::data::model::weather_label;
use crate::state::ChartTab;
use crate::view::ChartData;

const CHART_HEIGHT: f32 = 340.0;

// ---------------------------------------------------------------------------
// Tab dispatch
// ---------------------------------------------------------------------------

/// Draw the chart belonging to `tab`.
pub fn chart_tab(ui: &mut Ui, tab: ChartTab, charts: &ChartData, colors: &ChartColors) {
    match tab {
        ChartTab::DailyTrend => {
            ui.heading("Daily Rental Trend");
            daily_trend(ui, charts, colors);
        }
        ChartTab::HourlyPattern => {
            ui.heading("Hourly Usage Pattern");
            hourly_pattern(ui, charts, colors);
        }
        ChartTab::Weather => {
            ui.heading("Weather Impact on Rentals");
            ui.columns(2, |cols| {
                cols[0].strong("By weather situation");
                weather_boxes(&mut cols[0], charts, colors);
                cols[1].strong("By temperature");
                temperature_scatter(&mut cols[1], charts, colors);
            });
        }
    }
}

fn no_data(ui: &mut Ui) {
    ui.centered_and_justified(|ui: &mut Ui| {
        ui.label("No rows match the current filters.");
    });
}

// ---------------------------------------------------------------------------
// Daily trend
// ---------------------------------------------------------------------------

fn date_to_x(date: NaiveDate) -> f64 {
    f64::from(date.num_days_from_ce())
}

fn x_to_date_label(x: f64) -> String {
    NaiveDate::from_num_days_from_ce_opt(x.round() as i32)
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

fn daily_trend(ui: &mut Ui, charts: &ChartData, colors: &ChartColors) {
    if charts.daily_trend.is_empty() {
        no_data(ui);
        return;
    }

    let points: PlotPoints = charts
        .daily_trend
        .iter()
        .map(|&(date, cnt)| [date_to_x(date), f64::from(cnt)])
        .collect();

    Plot::new("daily_trend")
        .height(CHART_HEIGHT)
        .x_axis_label("Date")
        .y_axis_label("Rentals")
        .x_axis_formatter(|mark, _range| x_to_date_label(mark.value))
        .label_formatter(|_name, value| {
            format!("{}\n{:.0} rentals", x_to_date_label(value.x), value.y)
        })
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            plot_ui.line(Line::new(points).name("cnt").color(colors.trend).width(1.5));
        });
}

// ---------------------------------------------------------------------------
// Hourly pattern
// ---------------------------------------------------------------------------

fn hourly_pattern(ui: &mut Ui, charts: &ChartData, colors: &ChartColors) {
    if charts.hourly_pattern.is_empty() {
        no_data(ui);
        return;
    }

    let series: Vec<[f64; 2]> = charts
        .hourly_pattern
        .iter()
        .map(|&(hour, mean)| [f64::from(hour), mean])
        .collect();

    Plot::new("hourly_pattern")
        .height(CHART_HEIGHT)
        .x_axis_label("Hour (0-23)")
        .y_axis_label("Average rentals")
        .include_x(0.0)
        .include_x(23.0)
        .include_y(0.0)
        .x_axis_formatter(|mark, _range| format!("{:.0}", mark.value))
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            plot_ui.line(
                Line::new(PlotPoints::from(series.clone()))
                    .name("mean cnt")
                    .color(colors.hourly)
                    .width(2.0),
            );
            plot_ui.points(Points::new(PlotPoints::from(series)).radius(3.0).color(colors.hourly));
        });
}

// ---------------------------------------------------------------------------
// Weather impact
// ---------------------------------------------------------------------------

fn weather_boxes(ui: &mut Ui, charts: &ChartData, colors: &ChartColors) {
    if charts.weather.is_empty() {
        no_data(ui);
        return;
    }

    Plot::new("weather_boxes")
        .height(CHART_HEIGHT)
        .legend(Legend::default())
        .x_axis_label("Weather situation")
        .y_axis_label("Rentals")
        .x_axis_formatter(|mark, _range| {
            let code = mark.value.round();
            if (mark.value - code).abs() < f64::EPSILON && (1.0..=4.0).contains(&code) {
                (code as u8).to_string()
            } else {
                String::new()
            }
        })
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            for wb in &charts.weather {
                let color = colors.weather(wb.weather);
                let s = wb.summary;
                let elem = BoxElem::new(
                    f64::from(wb.weather),
                    BoxSpread::new(s.lower_whisker, s.q1, s.median, s.q3, s.upper_whisker),
                )
                .box_width(0.5)
                .fill(color.gamma_multiply(0.3))
                .stroke(egui::Stroke::new(1.5, color));

                let name = format!("{} ({} days)", weather_label(wb.weather), wb.days);
                plot_ui.box_plot(BoxPlot::new(vec![elem]).name(name));
            }
        });
}

fn temperature_scatter(ui: &mut Ui, charts: &ChartData, colors: &ChartColors) {
    if charts.temperature.is_empty() {
        no_data(ui);
        return;
    }

    let points: PlotPoints = charts.temperature.iter().map(|&(t, cnt)| [t, cnt]).collect();

    Plot::new("temperature_scatter")
        .height(CHART_HEIGHT)
        .x_axis_label("Temperature (normalized)")
        .y_axis_label("Rentals")
        .include_x(0.0)
        .include_x(1.0)
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            plot_ui.points(Points::new(points).radius(2.5).color(colors.scatter));
        });
}
