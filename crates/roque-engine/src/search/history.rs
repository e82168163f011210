//! Outcome history of real played moves, keyed by canonical move encoding.

use std::collections::HashMap;

use roque_core::MoveKey;

/// Observed evaluation deltas per move, accumulated from real turns.
///
/// Append-only while the game is played ([`HistoryTable::record`] fires
/// exactly once per real turn) and read-only during search (via
/// [`HistoryTable::mean`]). Keys collide across unrelated positions that
/// share a move encoding; that approximation is part of the heuristic.
#[derive(Debug, Clone, Default)]
pub struct HistoryTable {
    entries: HashMap<MoveKey, Vec<i32>>,
}

impl HistoryTable {
    /// Create an empty table.
    pub fn new() -> HistoryTable {
        HistoryTable {
            entries: HashMap::new(),
        }
    }

    /// Append one observed delta for a move.
    pub fn record(&mut self, key: MoveKey, delta: i32) {
        self.entries.entry(key).or_default().push(delta);
    }

    /// Mean of the recorded deltas for a move, or `None` if never seen.
    pub fn mean(&self, key: MoveKey) -> Option<f64> {
        let samples = self.entries.get(&key)?;
        let sum: f64 = samples.iter().map(|&d| f64::from(d)).sum();
        Some(sum / samples.len() as f64)
    }

    /// The raw samples for a move, if any.
    pub fn samples(&self, key: MoveKey) -> Option<&[i32]> {
        self.entries.get(&key).map(Vec::as_slice)
    }

    /// Return `true` if no move has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of distinct move keys recorded.
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::HistoryTable;
    use roque_core::{Move, MoveFlag, Square};

    fn key(from: &str, to: &str) -> roque_core::MoveKey {
        Move::new(
            from.parse::<Square>().unwrap(),
            to.parse::<Square>().unwrap(),
            MoveFlag::Quiet,
        )
        .key()
    }

    #[test]
    fn empty_table() {
        let table = HistoryTable::new();
        assert!(table.is_empty());
        assert_eq!(table.len(), 0);
        assert_eq!(table.mean(key("e2", "e4")), None);
    }

    #[test]
    fn record_and_mean() {
        let mut table = HistoryTable::new();
        table.record(key("e2", "e4"), 10);
        assert_eq!(table.mean(key("e2", "e4")), Some(10.0));

        table.record(key("e2", "e4"), -4);
        assert_eq!(table.mean(key("e2", "e4")), Some(3.0));
        assert_eq!(table.samples(key("e2", "e4")), Some(&[10, -4][..]));
    }

    #[test]
    fn keys_are_independent() {
        let mut table = HistoryTable::new();
        table.record(key("e2", "e4"), 7);
        table.record(key("d2", "d4"), -7);
        assert_eq!(table.len(), 2);
        assert_eq!(table.mean(key("e2", "e4")), Some(7.0));
        assert_eq!(table.mean(key("d2", "d4")), Some(-7.0));
        assert_eq!(table.mean(key("c2", "c4")), None);
    }

    #[test]
    fn capture_and_quiet_share_a_key() {
        let mut table = HistoryTable::new();
        let quiet = Move::new(
            "d4".parse::<Square>().unwrap(),
            "e5".parse::<Square>().unwrap(),
            MoveFlag::Quiet,
        );
        let capture = Move::new(
            "d4".parse::<Square>().unwrap(),
            "e5".parse::<Square>().unwrap(),
            MoveFlag::Capture,
        );
        table.record(quiet.key(), 12);
        assert_eq!(table.mean(capture.key()), Some(12.0));
    }
}
