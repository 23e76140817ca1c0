use eframe::egui::Ui;
use egui_extras::{Column, TableBuilder};

use crate::data::model::{DailyRecord, HourlyRecord};

const ROW_HEIGHT: f32 = 18.0;

// ---------------------------------------------------------------------------
// Raw-data preview tables
// ---------------------------------------------------------------------------

pub fn daily_table(ui: &mut Ui, rows: &[DailyRecord]) {
    let cells: Vec<Vec<String>> = rows
        .iter()
        .map(|r| {
            vec![
                r.date.to_string(),
                r.year_index.to_string(),
                r.season.to_string(),
                r.weather.to_string(),
                format!("{:.6}", r.temperature),
                r.count.to_string(),
            ]
        })
        .collect();
    ui.push_id("daily_preview", |ui: &mut Ui| {
        preview_table(ui, &DailyRecord::COLUMNS, &cells);
    });
}

pub fn hourly_table(ui: &mut Ui, rows: &[HourlyRecord]) {
    let cells: Vec<Vec<String>> = rows
        .iter()
        .map(|r| {
            vec![
                r.date.to_string(),
                r.hour.to_string(),
                r.year_index.to_string(),
                r.season.to_string(),
                r.count.to_string(),
            ]
        })
        .collect();
    ui.push_id("hourly_preview", |ui: &mut Ui| {
        preview_table(ui, &HourlyRecord::COLUMNS, &cells);
    });
}

/// Header plus one line per row; `headers` and every row have equal length.
fn preview_table(ui: &mut Ui, headers: &[&str], rows: &[Vec<String>]) {
    if rows.is_empty() {
        ui.weak("0 rows");
        return;
    }

    TableBuilder::new(ui)
        .striped(true)
        .resizable(false)
        .columns(Column::auto().at_least(64.0), headers.len())
        .header(ROW_HEIGHT + 2.0, |mut header| {
            for name in headers {
                header.col(|ui| {
                    ui.strong(*name);
                });
            }
        })
        .body(|mut body| {
            for row_cells in rows {
                body.row(ROW_HEIGHT, |mut row| {
                    for cell in row_cells {
                        row.col(|ui| {
                            ui.label(cell);
                        });
                    }
                });
            }
        });
}
