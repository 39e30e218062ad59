use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use crate::domain::pricing::PricedResult;

/// Maximum number of results kept in memory and in storage.
pub const HISTORY_CAPACITY: usize = 50;

/// Domain entity - bounded, most-recent-first log of priced results
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HistoryList {
    entries: VecDeque<PricedResult>,
}

impl HistoryList {
    pub fn new() -> Self {
        Self {
            entries: VecDeque::with_capacity(HISTORY_CAPACITY),
        }
    }

    /// Build from stored entries, keeping only the first `HISTORY_CAPACITY`.
    pub fn from_entries(entries: Vec<PricedResult>) -> Self {
        let mut entries: VecDeque<PricedResult> = entries.into();
        entries.truncate(HISTORY_CAPACITY);
        Self { entries }
    }

    /// Insert at the front and drop whatever falls past the capacity.
    pub fn prepend(&mut self, result: PricedResult) {
        self.entries.push_front(result);
        self.entries.truncate(HISTORY_CAPACITY);
    }

    pub fn latest(&self) -> Option<&PricedResult> {
        self.entries.front()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PricedResult> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn to_vec(&self) -> Vec<PricedResult> {
        self.entries.iter().cloned().collect()
    }
}

impl Default for HistoryList {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a HistoryList {
    type Item = &'a PricedResult;
    type IntoIter = std::collections::vec_deque::Iter<'a, PricedResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::pricing::{Price, PricingRule};
    use chrono::{DateTime, Utc};

    fn result(price: f64) -> PricedResult {
        PricedResult::new(
            DateTime::<Utc>::UNIX_EPOCH,
            Price::new(price).unwrap(),
            PricingRule::Original,
        )
    }

    #[test]
    fn prepend_keeps_newest_first() {
        let mut list = HistoryList::new();
        list.prepend(result(1.0));
        list.prepend(result(2.0));
        assert_eq!(list.latest().unwrap().original_price(), 2.0);
        let prices: Vec<f64> = list.iter().map(|r| r.original_price()).collect();
        assert_eq!(prices, vec![2.0, 1.0]);
    }

    #[test]
    fn prepend_truncates_at_capacity() {
        let mut list = HistoryList::new();
        for i in 1..=(HISTORY_CAPACITY + 5) {
            list.prepend(result(i as f64));
        }
        assert_eq!(list.len(), HISTORY_CAPACITY);
        assert_eq!(list.latest().unwrap().original_price(), (HISTORY_CAPACITY + 5) as f64);
        assert_eq!(list.iter().last().unwrap().original_price(), 6.0);
    }

    #[test]
    fn from_entries_keeps_leading_entries() {
        let entries: Vec<_> = (1..=60).map(|i| result(i as f64)).collect();
        let list = HistoryList::from_entries(entries);
        assert_eq!(list.len(), HISTORY_CAPACITY);
        assert_eq!(list.latest().unwrap().original_price(), 1.0);
    }
}
