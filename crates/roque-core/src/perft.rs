//! Perft (performance test) for move generation correctness verification.

use crate::board::Board;

/// Count the number of leaf nodes at the given depth.
///
/// Depth 0 returns 1 (the current position). Depth 1 returns the number of
/// legal moves (bulk counting, no recursive make/undo).
pub fn perft(board: &mut Board, depth: usize) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = board.legal_moves();

    if depth == 1 {
        return moves.len() as u64;
    }

    let mut nodes = 0u64;
    for mv in moves {
        board.make_move(mv);
        nodes += perft(board, depth - 1);
        board.undo_move();
    }
    nodes
}

/// Run perft with a per-move breakdown (useful for debugging).
///
/// Returns `(move_text, node_count)` pairs sorted alphabetically.
pub fn divide(board: &mut Board, depth: usize) -> Vec<(String, u64)> {
    let moves = board.legal_moves();
    let mut results: Vec<(String, u64)> = moves
        .into_iter()
        .map(|mv| {
            let count = if depth <= 1 {
                1
            } else {
                board.make_move(mv);
                let nodes = perft(board, depth - 1);
                board.undo_move();
                nodes
            };
            (mv.to_string(), count)
        })
        .collect();
    results.sort_by(|a, b| a.0.cmp(&b.0));
    results
}
