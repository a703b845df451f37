//! When people talk: weekday, month and weekday × hour breakdowns.

use std::collections::{BTreeMap, BTreeSet};

use chrono::Datelike;
use serde::Serialize;

use super::{Count, sort_by_count_desc};
use crate::MessageRecord;
use crate::record::{hour_bucket, month_name};

/// Messages per weekday, busiest first.
///
/// Only weekdays with messages appear. Ties keep Monday-first order.
pub fn week_activity_map(records: &[&MessageRecord]) -> Vec<Count> {
    let mut days: BTreeMap<u32, (&'static str, usize)> = BTreeMap::new();
    for record in records {
        let entry = days
            .entry(weekday_index(record))
            .or_insert((record.weekday_name(), 0));
        entry.1 += 1;
    }

    let mut counts: Vec<Count> = days
        .into_values()
        .map(|(name, count)| Count::new(name, count))
        .collect();
    sort_by_count_desc(&mut counts);
    counts
}

/// Messages per month name (all years combined), busiest first.
///
/// Ties keep January-first order.
pub fn month_activity_map(records: &[&MessageRecord]) -> Vec<Count> {
    let mut months: BTreeMap<u32, usize> = BTreeMap::new();
    for record in records {
        *months.entry(record.month_number()).or_default() += 1;
    }

    let mut counts: Vec<Count> = months
        .into_iter()
        .map(|(month, count)| Count::new(month_name(month), count))
        .collect();
    sort_by_count_desc(&mut counts);
    counts
}

/// Weekday × hour-bucket message counts.
///
/// `cells[r][c]` is the number of messages sent on `rows[r]` within
/// `columns[c]`. Rows and columns list only the weekdays and hour buckets
/// that occur, in calendar and clock order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Heatmap {
    pub rows: Vec<&'static str>,
    pub columns: Vec<String>,
    pub cells: Vec<Vec<usize>>,
}

impl Heatmap {
    /// Returns the count for a weekday name and hour bucket label.
    pub fn get(&self, weekday: &str, bucket: &str) -> Option<usize> {
        let row = self.rows.iter().position(|r| *r == weekday)?;
        let col = self.columns.iter().position(|c| c == bucket)?;
        Some(self.cells[row][col])
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Builds the weekday × hour-bucket heatmap.
pub fn activity_heatmap(records: &[&MessageRecord]) -> Heatmap {
    let mut rows: BTreeMap<u32, &'static str> = BTreeMap::new();
    let mut hours: BTreeSet<u32> = BTreeSet::new();
    for record in records {
        rows.entry(weekday_index(record))
            .or_insert(record.weekday_name());
        hours.insert(record.hour());
    }

    let row_index: BTreeMap<u32, usize> = rows.keys().enumerate().map(|(i, k)| (*k, i)).collect();
    let col_index: BTreeMap<u32, usize> = hours.iter().enumerate().map(|(i, h)| (*h, i)).collect();

    let mut cells = vec![vec![0usize; hours.len()]; rows.len()];
    for record in records {
        let r = row_index[&weekday_index(record)];
        let c = col_index[&record.hour()];
        cells[r][c] += 1;
    }

    Heatmap {
        rows: rows.into_values().collect(),
        columns: hours.into_iter().map(hour_bucket).collect(),
        cells,
    }
}

fn weekday_index(record: &MessageRecord) -> u32 {
    record.date().weekday().num_days_from_monday()
}
