//! Message volume over time.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

use crate::MessageRecord;
use crate::record::month_name;

/// Messages sent in one calendar month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlyPoint {
    pub year: i32,
    pub month_number: u32,
    pub month_name: &'static str,
    /// `"{month_name}-{year}"`, e.g. `"January-2024"`
    pub label: String,
    pub messages: usize,
}

/// Messages sent on one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyPoint {
    pub date: NaiveDate,
    pub messages: usize,
}

/// Counts records per (year, month), oldest month first.
///
/// Months without messages are not emitted.
pub fn monthly_timeline(records: &[&MessageRecord]) -> Vec<MonthlyPoint> {
    let mut months: BTreeMap<(i32, u32), usize> = BTreeMap::new();
    for record in records {
        *months
            .entry((record.year(), record.month_number()))
            .or_default() += 1;
    }

    months
        .into_iter()
        .map(|((year, month_number), messages)| {
            let name = month_name(month_number);
            MonthlyPoint {
                year,
                month_number,
                month_name: name,
                label: format!("{name}-{year}"),
                messages,
            }
        })
        .collect()
}

/// Counts records per calendar date, oldest first.
pub fn daily_timeline(records: &[&MessageRecord]) -> Vec<DailyPoint> {
    let mut days: BTreeMap<NaiveDate, usize> = BTreeMap::new();
    for record in records {
        *days.entry(record.date()).or_default() += 1;
    }

    days.into_iter()
        .map(|(date, messages)| DailyPoint { date, messages })
        .collect()
}
