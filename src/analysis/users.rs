//! Who talks the most.

use std::collections::HashMap;

use serde::Serialize;

use super::Count;
use crate::MessageRecord;

/// A sender's share of all records, in percent rounded to two decimals.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserShare {
    pub name: String,
    pub percent: f64,
}

/// Busiest senders and every sender's share.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BusyUsers {
    /// The `top_n` senders by record count
    pub top: Vec<Count>,
    /// All senders with their percentage of records
    pub shares: Vec<UserShare>,
}

/// Ranks senders by number of records.
///
/// Both lists are ordered by count descending, then by name. Notification
/// records count under `group_notification` like any other sender.
pub fn most_busy_users(records: &[&MessageRecord], top_n: usize) -> BusyUsers {
    let mut per_sender: HashMap<&str, usize> = HashMap::new();
    for record in records {
        *per_sender.entry(record.sender()).or_default() += 1;
    }

    let mut ranked: Vec<(&str, usize)> = per_sender.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));

    let total = records.len();
    let shares = ranked
        .iter()
        .map(|&(name, count)| UserShare {
            name: name.to_string(),
            percent: round2(count as f64 * 100.0 / total as f64),
        })
        .collect();

    let top = ranked
        .into_iter()
        .take(top_n)
        .map(|(name, count)| Count::new(name, count))
        .collect();

    BusyUsers { top, shares }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
