/// Data layer: core types, loading, caching, filtering and aggregation.
///
/// Architecture:
/// ```text
///   day.csv   hour.csv
///        │      │
///        ▼      ▼
///   ┌──────────────┐
///   │    loader    │  parse files → BikeData
///   └──────────────┘
///          │
///          ▼
///   ┌──────────────┐
///   │    cache     │  reuse BikeData while file signatures are unchanged
///   └──────────────┘
///          │
///          ▼
///   ┌──────────────┐
///   │    filter    │  apply (year, season) selection → narrowed copies
///   └──────────────┘
///          │
///          ▼
///   ┌──────────────┐
///   │  aggregate   │  metrics + chart statistics
///   └──────────────┘
/// ```

pub mod aggregate;
pub mod cache;
pub mod filter;
pub mod loader;
pub mod model;

#[cfg(test)]
pub(crate) mod fixtures {
    use std::path::Path;

    use super::loader::{read_daily, read_hourly};
    use super::model::BikeData;

    /// Two years, seasons 1 and 3 only: Summer and Winter select nothing.
    pub const DAY_CSV: &str = "\
instant,dteday,season,yr,mnth,holiday,weekday,workingday,weathersit,temp,atemp,hum,windspeed,casual,registered,cnt
1,2011-01-01,1,0,1,0,6,0,2,0.344167,0.363625,0.805833,0.160446,331,654,985
2,2011-07-01,3,0,7,0,5,1,1,0.75,0.70,0.5,0.2,1000,3500,4500
3,2012-01-01,1,1,1,0,0,0,1,0.37,0.375621,0.6925,0.192167,686,1608,2294
4,2012-07-01,3,1,7,0,0,0,3,0.8,0.75,0.6,0.1,1500,4031,5531
";

    pub const HOUR_CSV: &str = "\
instant,dteday,season,yr,mnth,hr,holiday,weekday,workingday,weathersit,temp,atemp,hum,windspeed,casual,registered,cnt
1,2011-01-01,1,0,1,0,0,6,0,1,0.24,0.2879,0.81,0,3,13,16
2,2011-01-01,1,0,1,1,0,6,0,1,0.22,0.2727,0.8,0,8,32,40
3,2011-07-01,3,0,7,8,0,5,1,1,0.7,0.65,0.5,0.1,20,380,400
4,2012-01-01,1,1,1,8,0,0,0,1,0.3,0.3,0.6,0.1,10,110,120
5,2012-07-01,3,1,7,8,0,0,0,3,0.8,0.75,0.6,0.1,50,550,600
";

    pub fn sample_data() -> BikeData {
        BikeData {
            daily: read_daily(DAY_CSV.as_bytes(), Path::new("day.csv")).unwrap(),
            hourly: read_hourly(HOUR_CSV.as_bytes(), Path::new("hour.csv")).unwrap(),
        }
    }
}
