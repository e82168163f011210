use std::time::Duration;

use anyhow::{Context, Result};
use tracing::{info, warn};

use roque_core::Board;
use roque_engine::{MoveSelector, DEFAULT_DEPTH};

/// Plies played before a demo game is called off as a draw.
const PLY_CAP: u32 = 200;

/// Advisory per-move budget reported alongside each decision.
const MOVE_BUDGET: Duration = Duration::from_secs(1);

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let depth = match std::env::args().nth(1) {
        Some(arg) => arg
            .parse::<u8>()
            .with_context(|| format!("invalid search depth {arg:?}"))?,
        None => DEFAULT_DEPTH,
    };
    info!(depth, "roque starting self-play");

    let mut board = Board::starting_position();
    let mut white = MoveSelector::new(depth);
    let mut black = MoveSelector::new(depth);

    for ply in 0..PLY_CAP {
        if board.is_terminal() {
            break;
        }
        let selector = if ply % 2 == 0 { &mut white } else { &mut black };
        let started = std::time::Instant::now();
        let decision = selector
            .choose_move(&mut board, MOVE_BUDGET)
            .context("selector called on a terminal position")?;
        if started.elapsed() > MOVE_BUDGET {
            warn!(ply, elapsed_ms = started.elapsed().as_millis() as u64, "move budget exceeded");
        }
        info!(
            ply,
            mv = %decision.best_move,
            score = decision.score,
            "playing"
        );
        board.make_move(decision.best_move);
    }

    if board.is_checkmate() {
        let winner = !board.side_to_move();
        info!(%winner, "checkmate");
    } else if board.is_terminal() {
        info!("stalemate");
    } else {
        info!(plies = PLY_CAP, "game called off at the ply cap");
    }
    info!(position = %board, "final position");

    Ok(())
}
