//! Move ordering driven by the outcome history of real played moves.

use roque_core::Move;

use crate::search::history::HistoryTable;

/// Which end of the mean-delta scale to visit first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    /// Smallest mean first (used by minimizing layers).
    Ascending,
    /// Largest mean first (used by maximizing layers).
    Descending,
}

/// Reorder candidate moves so historically informative moves come first.
///
/// Moves present in the history table lead, sorted by the mean of their
/// recorded deltas per `order`; moves without history follow in their
/// original relative order. The output is always a permutation of the
/// input: nothing is added, dropped, or duplicated.
pub fn order_moves(history: &HistoryTable, moves: Vec<Move>, order: SortOrder) -> Vec<Move> {
    if history.is_empty() || moves.is_empty() {
        return moves;
    }

    let mut known: Vec<(Move, f64)> = Vec::new();
    let mut unknown: Vec<Move> = Vec::new();
    for mv in moves {
        match history.mean(mv.key()) {
            Some(mean) => known.push((mv, mean)),
            None => unknown.push(mv),
        }
    }

    // Stable sort: equal means keep their original relative order.
    known.sort_by(|a, b| match order {
        SortOrder::Ascending => a.1.total_cmp(&b.1),
        SortOrder::Descending => b.1.total_cmp(&a.1),
    });

    let mut ordered: Vec<Move> = known.into_iter().map(|(mv, _)| mv).collect();
    ordered.extend(unknown);
    ordered
}

#[cfg(test)]
mod tests {
    use super::{order_moves, SortOrder};
    use crate::search::history::HistoryTable;
    use roque_core::{Move, MoveFlag, Square};

    fn mv(from: &str, to: &str) -> Move {
        Move::new(
            from.parse::<Square>().unwrap(),
            to.parse::<Square>().unwrap(),
            MoveFlag::Quiet,
        )
    }

    fn multiset(moves: &[Move]) -> Vec<Move> {
        let mut sorted = moves.to_vec();
        sorted.sort_by_key(|m| (m.source().index(), m.dest().index()));
        sorted
    }

    #[test]
    fn empty_history_returns_input_unchanged() {
        let history = HistoryTable::new();
        let moves = vec![mv("e2", "e4"), mv("d2", "d4"), mv("g1", "f3")];
        assert_eq!(order_moves(&history, moves.clone(), SortOrder::Ascending), moves);
    }

    #[test]
    fn empty_input_stays_empty() {
        let mut history = HistoryTable::new();
        history.record(mv("e2", "e4").key(), 1);
        assert!(order_moves(&history, Vec::new(), SortOrder::Descending).is_empty());
    }

    #[test]
    fn output_is_a_permutation_of_the_input() {
        let mut history = HistoryTable::new();
        history.record(mv("d2", "d4").key(), 5);
        history.record(mv("g1", "f3").key(), -3);

        let moves = vec![
            mv("e2", "e4"),
            mv("d2", "d4"),
            mv("g1", "f3"),
            mv("b1", "c3"),
        ];
        for order in [SortOrder::Ascending, SortOrder::Descending] {
            let ordered = order_moves(&history, moves.clone(), order);
            assert_eq!(ordered.len(), moves.len());
            assert_eq!(multiset(&ordered), multiset(&moves));
        }
    }

    #[test]
    fn history_moves_lead_in_requested_direction() {
        let mut history = HistoryTable::new();
        history.record(mv("d2", "d4").key(), 5);
        history.record(mv("g1", "f3").key(), -3);

        let moves = vec![mv("e2", "e4"), mv("d2", "d4"), mv("g1", "f3")];

        let descending = order_moves(&history, moves.clone(), SortOrder::Descending);
        assert_eq!(descending, vec![mv("d2", "d4"), mv("g1", "f3"), mv("e2", "e4")]);

        let ascending = order_moves(&history, moves, SortOrder::Ascending);
        assert_eq!(ascending, vec![mv("g1", "f3"), mv("d2", "d4"), mv("e2", "e4")]);
    }

    #[test]
    fn moves_without_history_keep_relative_order() {
        let mut history = HistoryTable::new();
        history.record(mv("a2", "a3").key(), 1);

        let moves = vec![
            mv("h2", "h3"),
            mv("g2", "g3"),
            mv("a2", "a3"),
            mv("f2", "f3"),
        ];
        let ordered = order_moves(&history, moves, SortOrder::Ascending);
        assert_eq!(
            ordered,
            vec![mv("a2", "a3"), mv("h2", "h3"), mv("g2", "g3"), mv("f2", "f3")]
        );
    }

    #[test]
    fn history_keys_from_other_positions_do_not_add_moves() {
        let mut history = HistoryTable::new();
        history.record(mv("a7", "a5").key(), 40);

        let moves = vec![mv("e2", "e4"), mv("d2", "d4")];
        let ordered = order_moves(&history, moves.clone(), SortOrder::Descending);
        assert_eq!(ordered, moves, "foreign history keys must not leak in");
    }
}
