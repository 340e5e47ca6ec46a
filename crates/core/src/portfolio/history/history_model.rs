//! History snapshot models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::MAX_HISTORY_SNAPSHOTS;

/// Total portfolio value observed at one instant.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HistorySnapshot {
    /// When the snapshot was taken
    pub timestamp: DateTime<Utc>,
    /// Total portfolio value at that instant
    pub total_value: Decimal,
}

/// Appends a snapshot, dropping the oldest entries beyond the cap.
///
/// The sequence is append-only and insertion-ordered; callers never
/// rewrite past entries.
pub fn push_snapshot(history: &mut Vec<HistorySnapshot>, snapshot: HistorySnapshot) {
    history.push(snapshot);
    if history.len() > MAX_HISTORY_SNAPSHOTS {
        let excess = history.len() - MAX_HISTORY_SNAPSHOTS;
        history.drain(..excess);
    }
}

/// Simple return of each interval between consecutive snapshots.
///
/// The first entry is 0 (no prior value); an interval starting from a
/// non-positive value yields 0 rather than a division by zero.
pub fn period_returns(history: &[HistorySnapshot]) -> Vec<Decimal> {
    history
        .iter()
        .enumerate()
        .map(|(i, snapshot)| {
            if i == 0 {
                return Decimal::ZERO;
            }
            let prev = history[i - 1].total_value;
            if prev > Decimal::ZERO {
                (snapshot.total_value - prev) / prev
            } else {
                Decimal::ZERO
            }
        })
        .collect()
}
