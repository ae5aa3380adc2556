//! Seeded sample data for the live-room chart and the campaign table.
//!
//! Every generator draws from one `StdRng`, so a fixed seed reproduces the
//! same screens in tests and benches.

use chrono::{DateTime, Duration, Utc};
use indexmap::IndexMap;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::overlays::EventMarker;
use crate::table::TableRow;

/// Share of live samples that carry a goods-launch marker.
pub const GOODS_MARKER_PROBABILITY: f64 = 0.05;
/// GMV grows by a whole step in `[0, GMV_STEP_LIMIT)` per sample.
pub const GMV_STEP_LIMIT: u32 = 1_000;
pub const MAX_ROW_COST: f64 = 100_000.0;
pub const MAX_METRIC_VALUE: f64 = 10_000.0;
pub const FIRST_PLAN_ID: u64 = 1_001;

const PLAN_NAME_PREFIXES: [&str; 4] = [
    "Beijing Dajia Internet Information Technology",
    "Beijing Kuaishou Technology",
    "Kuaishou Technology",
    "Hangzhou Kuaishou Technology",
];

const METRIC_TITLES: [&str; 4] = [
    "Impressions",
    "Daily paid ROI",
    "Average cost per thousand impressions",
    "Action rate",
];

/// One minute of the live-room timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiveSample {
    pub key: String,
    /// Running gross merchandise value up to and including this minute.
    pub gmv: f64,
}

/// A numeric column of the campaign table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricColumn {
    /// Field the rows store the value under, `data-key-N`.
    pub key: String,
    pub title: String,
}

#[derive(Debug, Clone)]
pub struct MockData {
    rng: StdRng,
    next_plan_id: u64,
    next_column: usize,
}

impl MockData {
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    #[must_use]
    pub fn from_rng(rng: StdRng) -> Self {
        Self {
            rng,
            next_plan_id: FIRST_PLAN_ID,
            next_column: 1,
        }
    }

    /// `YYYY-MM-DD HH:MM` keys, one per minute from `start`.
    #[must_use]
    pub fn minute_keys(start: DateTime<Utc>, count: usize) -> Vec<String> {
        (0..count)
            .map(|minute| {
                (start + Duration::minutes(minute as i64))
                    .format("%Y-%m-%d %H:%M")
                    .to_string()
            })
            .collect()
    }

    /// Attaches a non-decreasing GMV total to each key.
    pub fn live_samples<I, S>(&mut self, keys: I) -> Vec<LiveSample>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut gmv = 0.0;
        keys.into_iter()
            .map(|key| {
                gmv += f64::from(self.rng.random_range(0..GMV_STEP_LIMIT));
                LiveSample {
                    key: key.into(),
                    gmv,
                }
            })
            .collect()
    }

    /// Picks roughly one sample in twenty as a goods launch. Ids count up from
    /// `0` in timeline order and `x` is the sample's category index.
    pub fn goods_markers(&mut self, samples: &[LiveSample]) -> Vec<EventMarker> {
        let mut next_id = 0_u64;
        let markers: Vec<EventMarker> = samples
            .iter()
            .enumerate()
            .filter(|_| self.rng.random_bool(GOODS_MARKER_PROBABILITY))
            .map(|(index, sample)| {
                let marker = EventMarker::new(next_id.to_string(), sample.key.clone(), index as f64);
                next_id += 1;
                marker
            })
            .collect();
        debug!(samples = samples.len(), markers = markers.len(), "mock goods markers generated");
        markers
    }

    /// Adds `count` metric columns; titles cycle through the metric table.
    pub fn metric_columns(&mut self, count: usize) -> Vec<MetricColumn> {
        (0..count)
            .map(|_| {
                let index = self.next_column;
                self.next_column += 1;
                MetricColumn {
                    key: format!("data-key-{index}"),
                    title: METRIC_TITLES[index % METRIC_TITLES.len()].to_owned(),
                }
            })
            .collect()
    }

    /// One plan row with a random cost and a value for every column.
    pub fn table_row(&mut self, columns: &[MetricColumn]) -> TableRow {
        let id = self.next_plan_id;
        self.next_plan_id += 1;
        let prefix = PLAN_NAME_PREFIXES[self.rng.random_range(0..PLAN_NAME_PREFIXES.len())];
        let metrics: IndexMap<String, f64> = columns
            .iter()
            .map(|column| {
                (
                    column.key.clone(),
                    self.rng.random_range(0.0..MAX_METRIC_VALUE),
                )
            })
            .collect();

        TableRow {
            id,
            name: format!("{prefix}-{id}"),
            unit_name: format!("Ad group {id}"),
            cost: self.rng.random_range(0.0..MAX_ROW_COST),
            metrics,
        }
    }

    pub fn table_rows(&mut self, count: usize, columns: &[MetricColumn]) -> Vec<TableRow> {
        (0..count).map(|_| self.table_row(columns)).collect()
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::{GMV_STEP_LIMIT, MockData};

    #[test]
    fn minute_keys_step_one_minute() {
        let start = Utc.with_ymd_and_hms(2024, 5, 1, 23, 59, 0).single().expect("start");
        let keys = MockData::minute_keys(start, 2);
        assert_eq!(keys, vec!["2024-05-01 23:59", "2024-05-02 00:00"]);
    }

    #[test]
    fn gmv_steps_are_whole_and_bounded() {
        let mut mock = MockData::seeded(3);
        let samples = mock.live_samples((0..500).map(|i| format!("k{i}")));
        let mut previous = 0.0;
        for sample in &samples {
            let step = sample.gmv - previous;
            assert!((0.0..f64::from(GMV_STEP_LIMIT)).contains(&step));
            assert_eq!(step.fract(), 0.0);
            previous = sample.gmv;
        }
    }

    #[test]
    fn same_seed_reproduces_rows() {
        let columns = MockData::seeded(9).metric_columns(3);
        let first = MockData::seeded(9).table_rows(5, &columns);
        let second = MockData::seeded(9).table_rows(5, &columns);
        assert_eq!(first, second);
    }
}
