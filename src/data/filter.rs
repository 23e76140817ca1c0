use super::model::{BikeData, DailyRecord, HourlyRecord, Record, Selection};

// ---------------------------------------------------------------------------
// Selection → narrowed tables
// ---------------------------------------------------------------------------

/// Both tables after applying one [`Selection`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilteredData {
    pub daily: Vec<DailyRecord>,
    pub hourly: Vec<HourlyRecord>,
}

impl FilteredData {
    pub fn is_empty(&self) -> bool {
        self.daily.is_empty() && self.hourly.is_empty()
    }
}

/// Copy out the rows of `rows` that pass the selection, keeping file order.
///
/// A row passes when:
/// * no year is selected, or its `yr` equals `year - 2011`
/// * no season is selected, or its `season` equals the season's code
pub fn filter_rows<R: Record + Clone>(rows: &[R], selection: &Selection) -> Vec<R> {
    rows.iter()
        .filter(|row| selection.matches(*row))
        .cloned()
        .collect()
}

/// Apply the same selection to both tables independently.
pub fn apply(data: &BikeData, selection: &Selection) -> FilteredData {
    FilteredData {
        daily: filter_rows(&data.daily, selection),
        hourly: filter_rows(&data.hourly, selection),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::fixtures::sample_data;
    use crate::data::model::{Season, Year};

    #[test]
    fn test_all_all_is_identity() {
        let data = sample_data();
        let filtered = apply(&data, &Selection::default());

        assert_eq!(filtered.daily, data.daily);
        assert_eq!(filtered.hourly, data.hourly);
    }

    #[test]
    fn test_years_partition_the_table() {
        let mut data = sample_data();
        // A row from outside the supported years lands in neither partition.
        let mut stray = data.daily[0].clone();
        stray.year_index = 2;
        data.daily.push(stray);

        let y2011 = filter_rows(&data.daily, &Selection::new(Some(Year::Y2011), None));
        let y2012 = filter_rows(&data.daily, &Selection::new(Some(Year::Y2012), None));
        let other: Vec<_> = data
            .daily
            .iter()
            .filter(|r| r.year_index > 1)
            .cloned()
            .collect();

        assert!(y2011.iter().all(|r| r.year_index == 0));
        assert!(y2012.iter().all(|r| r.year_index == 1));
        assert!(y2011.iter().all(|a| !y2012.contains(a)));
        assert_eq!(y2011.len() + y2012.len() + other.len(), data.daily.len());

        let mut union: Vec<_> = y2011.into_iter().chain(y2012).chain(other).collect();
        union.sort_by_key(|r| (r.date, r.year_index));
        let mut original = data.daily.clone();
        original.sort_by_key(|r| (r.date, r.year_index));
        assert_eq!(union, original);
    }

    #[test]
    fn test_season_filter_keeps_only_mapped_code() {
        let data = sample_data();
        for season in Season::ALL {
            let filtered = apply(&data, &Selection::new(None, Some(season)));
            assert!(filtered.daily.iter().all(|r| r.season == season.code()));
            assert!(filtered.hourly.iter().all(|r| r.season == season.code()));
        }

        let fall = apply(&data, &Selection::new(None, Some(Season::Fall)));
        assert_eq!(fall.daily.len(), 2);
        assert_eq!(fall.hourly.len(), 2);
    }

    #[test]
    fn test_year_and_season_are_conjunctive() {
        let data = sample_data();
        let filtered = apply(&data, &Selection::new(Some(Year::Y2012), Some(Season::Spring)));

        assert_eq!(filtered.daily.len(), 1);
        assert_eq!(filtered.daily[0].count, 2294);
        assert_eq!(filtered.hourly.len(), 1);
        assert_eq!(filtered.hourly[0].count, 120);
    }

    #[test]
    fn test_no_matching_rows_gives_empty_tables() {
        let data = sample_data();
        let filtered = apply(&data, &Selection::new(Some(Year::Y2011), Some(Season::Winter)));

        assert!(filtered.is_empty());
        assert!(filtered.daily.is_empty());
        assert!(filtered.hourly.is_empty());
    }

    #[test]
    fn test_filter_does_not_touch_source() {
        let data = sample_data();
        let before = data.clone();
        let _ = apply(&data, &Selection::new(Some(Year::Y2011), Some(Season::Fall)));

        assert_eq!(data, before);
    }
}
