// File: crates/hub-page/src/stats.rs
// Summary: Aggregate team statistics and the sample dataset backing the page.

use hub_chart::DataPoint;

#[derive(Clone, Debug, PartialEq)]
pub struct TeamStats {
    pub matches: u32,
    pub wins: u32,
    pub runs: u64,
    pub wickets: u32,
    pub runs_per_season: Vec<DataPoint>,
}

impl TeamStats {
    /// Built-in sample used when no other dataset is supplied.
    pub fn sample() -> Self {
        Self {
            matches: 225,
            wins: 131,
            runs: 46_928,
            wickets: 788,
            runs_per_season: vec![
                DataPoint::new("2018", 2735.0),
                DataPoint::new("2019", 2631.0),
                DataPoint::new("2020", 2280.0),
                DataPoint::new("2021", 2650.0),
                DataPoint::new("2022", 2385.0),
                DataPoint::new("2023", 2732.0),
            ],
        }
    }

    /// Swap in a different per-season series (e.g. another statistic) while
    /// keeping the headline numbers.
    pub fn with_series(mut self, series: Vec<DataPoint>) -> Self {
        self.runs_per_season = series;
        self
    }
}
