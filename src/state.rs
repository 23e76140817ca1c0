use crate::config::DashboardConfig;
use crate::data::cache::DataCache;
use crate::data::loader::LoadError;
use crate::data::model::Selection;
use crate::view::{self, DashboardView};

// ---------------------------------------------------------------------------
// Chart tabs
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ChartTab {
    #[default]
    DailyTrend,
    HourlyPattern,
    Weather,
}

impl ChartTab {
    pub const ALL: [ChartTab; 3] = [ChartTab::DailyTrend, ChartTab::HourlyPattern, ChartTab::Weather];

    pub fn label(self) -> &'static str {
        match self {
            ChartTab::DailyTrend => "Daily Trend",
            ChartTab::HourlyPattern => "Hourly Pattern",
            ChartTab::Weather => "Weather Impact",
        }
    }
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    pub config: DashboardConfig,

    /// The only copy of the loaded tables in the process.
    cache: DataCache,

    /// Current selector values.
    pub selection: Selection,

    /// Result of the last successful refresh. `None` after a load failure.
    pub view: Option<DashboardView>,

    /// Which chart tab is showing.
    pub active_tab: ChartTab,

    /// Error shown instead of the dashboard.
    pub status_message: Option<String>,
}

impl AppState {
    /// Load the data and build the first view. A failure here is fatal.
    pub fn load(config: DashboardConfig) -> Result<Self, LoadError> {
        let cache = DataCache::new(config.data.clone());
        let mut state = Self {
            config,
            cache,
            selection: Selection::default(),
            view: None,
            active_tab: ChartTab::default(),
            status_message: None,
        };
        state.try_refresh()?;
        Ok(state)
    }

    /// Re-run the whole pipeline for the current selection. Load errors
    /// replace the view with a message.
    pub fn refresh(&mut self) {
        if let Err(e) = self.try_refresh() {
            log::error!("Failed to load data: {e}");
            self.view = None;
            self.status_message = Some(format!("Error: {e}"));
        }
    }

    fn try_refresh(&mut self) -> Result<(), LoadError> {
        let data = self.cache.get()?;
        self.view = Some(view::render(&data, self.selection, self.config.preview_rows));
        self.status_message = None;
        Ok(())
    }

    /// Change the selection and refresh if it actually changed.
    pub fn set_selection(&mut self, selection: Selection) {
        if selection != self.selection {
            self.selection = selection;
            self.refresh();
        }
    }

    /// Drop the cached tables and reload from disk.
    pub fn reload(&mut self) {
        self.cache.invalidate();
        self.refresh();
    }

    pub fn load_count(&self) -> usize {
        self.cache.load_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DataPaths;
    use crate::data::model::{Season, Year};
    use crate::data::fixtures::{DAY_CSV, HOUR_CSV};
    use tempfile::TempDir;

    fn state_in(dir: &TempDir) -> AppState {
        let paths = DataPaths::in_dir(dir.path());
        std::fs::write(&paths.day, DAY_CSV).unwrap();
        std::fs::write(&paths.hour, HOUR_CSV).unwrap();
        let config = DashboardConfig {
            data: paths,
            ..DashboardConfig::default()
        };
        AppState::load(config).unwrap()
    }

    #[test]
    fn test_load_builds_initial_view() {
        let temp_dir = TempDir::new().unwrap();
        let state = state_in(&temp_dir);

        let view = state.view.as_ref().unwrap();
        assert_eq!(view.selection, Selection::default());
        assert_eq!(view.daily_rows, 4);
        assert_eq!(state.load_count(), 1);
    }

    #[test]
    fn test_load_fails_without_files() {
        let temp_dir = TempDir::new().unwrap();
        let config = DashboardConfig {
            data: DataPaths::in_dir(temp_dir.path()),
            ..DashboardConfig::default()
        };

        assert!(AppState::load(config).is_err());
    }

    #[test]
    fn test_selector_change_reruns_without_reloading() {
        let temp_dir = TempDir::new().unwrap();
        let mut state = state_in(&temp_dir);

        state.set_selection(Selection::new(Some(Year::Y2011), None));
        state.set_selection(Selection::new(Some(Year::Y2011), Some(Season::Fall)));

        let view = state.view.as_ref().unwrap();
        assert_eq!(view.selection, Selection::new(Some(Year::Y2011), Some(Season::Fall)));
        assert_eq!(view.metrics.total, 4500);
        assert_eq!(state.load_count(), 1);
    }

    #[test]
    fn test_reload_invalidates_cache() {
        let temp_dir = TempDir::new().unwrap();
        let mut state = state_in(&temp_dir);

        state.reload();
        assert_eq!(state.load_count(), 2);
        assert!(state.status_message.is_none());
    }

    #[test]
    fn test_refresh_failure_shows_message() {
        let temp_dir = TempDir::new().unwrap();
        let mut state = state_in(&temp_dir);

        std::fs::remove_file(temp_dir.path().join("day.csv")).unwrap();
        state.set_selection(Selection::new(Some(Year::Y2012), None));

        assert!(state.view.is_none());
        let msg = state.status_message.as_deref().unwrap();
        assert!(msg.contains("day.csv"));
    }
}
