use eframe::egui::{self, Color32, RichText, Ui};

use crate::color::ChartColors;
use crate::data::model::{Season, Selection, Year, ALL_LABEL};
use crate::state::{AppState, ChartTab};
use crate::ui::{plot, table};

// ---------------------------------------------------------------------------
// Left side panel – selectors
// ---------------------------------------------------------------------------

/// Render the left filter panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filter Data");
    ui.separator();

    let mut year = state.selection.year;
    ui.strong("Year");
    egui::ComboBox::from_id_salt("year")
        .selected_text(state.selection.year_label())
        .show_ui(ui, |ui: &mut Ui| {
            ui.selectable_value(&mut year, None, ALL_LABEL);
            for y in Year::ALL {
                ui.selectable_value(&mut year, Some(y), y.to_string());
            }
        });

    ui.add_space(6.0);

    let mut season = state.selection.season;
    ui.strong("Season");
    egui::ComboBox::from_id_salt("season")
        .selected_text(state.selection.season_label())
        .show_ui(ui, |ui: &mut Ui| {
            ui.selectable_value(&mut season, None, ALL_LABEL);
            for s in Season::ALL {
                ui.selectable_value(&mut season, Some(s), s.name());
            }
        });

    // Re-runs the pipeline only when a selector changed.
    state.set_selection(Selection::new(year, season));

    ui.separator();

    if let Some(view) = &state.view {
        ui.label(format!(
            "{} days, {} hourly rows selected",
            view.daily_rows, view.hourly_rows
        ));
    }

    ui.horizontal(|ui: &mut Ui| {
        if ui.button("Reload data").clicked() {
            state.reload();
        }
        ui.weak(format!("loaded {}x", state.load_count()));
    });
}

// ---------------------------------------------------------------------------
// Central panel – metrics, charts, raw data
// ---------------------------------------------------------------------------

/// Render the main dashboard body.
pub fn dashboard(ui: &mut Ui, state: &mut AppState, colors: &ChartColors) {
    ui.heading("Bike Sharing Analysis Dashboard");
    ui.label("Rental patterns from the Bike Sharing dataset (2011-2012)");
    ui.add_space(8.0);

    if let Some(msg) = &state.status_message {
        ui.label(RichText::new(msg).color(Color32::RED));
        return;
    }
    let Some(view) = &state.view else {
        ui.label("No data loaded.");
        return;
    };

    // ---- Row 1: metrics ----
    ui.columns(3, |cols| {
        metric(&mut cols[0], "Total Rentals", &view.metrics.total_display());
        metric(&mut cols[1], "Daily Average", &view.metrics.average_display());
        metric(&mut cols[2], "Peak Rentals", &view.metrics.peak_display());
    });
    ui.separator();

    // ---- Row 2: chart tabs ----
    ui.horizontal(|ui: &mut Ui| {
        for tab in ChartTab::ALL {
            ui.selectable_value(&mut state.active_tab, tab, tab.label());
        }
    });
    ui.add_space(4.0);
    plot::chart_tab(ui, state.active_tab, &view.charts, colors);
    ui.separator();

    // ---- Row 3: raw data ----
    egui::CollapsingHeader::new("View raw data")
        .default_open(false)
        .show(ui, |ui: &mut Ui| {
            ui.strong(format!("Daily data ({} rows)", view.daily_rows));
            table::daily_table(ui, &view.daily_preview);
            ui.add_space(8.0);
            ui.strong(format!("Hourly data ({} rows)", view.hourly_rows));
            table::hourly_table(ui, &view.hourly_preview);
        });
}

fn metric(ui: &mut Ui, title: &str, value: &str) {
    ui.vertical(|ui: &mut Ui| {
        ui.label(RichText::new(title).weak());
        ui.label(RichText::new(value).size(28.0).strong());
    });
}

// ---------------------------------------------------------------------------
// Footer
// ---------------------------------------------------------------------------

pub fn footer(ui: &mut Ui) {
    ui.horizontal(|ui: &mut Ui| {
        ui.small("Bike Sharing data analysis project");
    });
}
