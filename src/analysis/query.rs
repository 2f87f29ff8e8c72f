//! Entry points used by the game loop: build a tree once, derive everything from it

use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use super::{
    backward_induction::{evaluate_children, select_best},
    sequences::{MoveSequence, flatten},
};
use crate::{
    app::AnalysisConfig,
    tictactoe::{Board, Player, build_tree, build_tree_with},
};

/// Every continuation of `board`, with X placing the first mark
pub fn generate_moves(board: &Board) -> Vec<MoveSequence> {
    generate_moves_from(board, Player::X)
}

/// Every continuation of `board`, with `to_move` placing the first mark
#[instrument(skip(board), fields(board = %board.encode()))]
pub fn generate_moves_from(board: &Board, to_move: Player) -> Vec<MoveSequence> {
    flatten(&build_tree(*board, to_move))
}

/// The best immediate move for `player`, who is both to move and maximizing.
///
/// Returns `None` when `board` is already full.
#[instrument(skip(board), fields(board = %board.encode()))]
pub fn best_branch(board: &Board, player: Player) -> Option<Board> {
    select_best(&build_tree(*board, player), player)
}

/// Value of one candidate move from the root
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateMove {
    pub position: usize,
    pub board: Board,
    pub value: i32,
}

/// Everything a single look-ahead query produces
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub root: Board,
    pub to_move: Player,
    pub maximizing: Player,
    /// Sequence count before the display limit was applied
    pub total_sequences: usize,
    /// The first `display_limit` sequences in enumeration order
    pub sequences: Vec<MoveSequence>,
    pub candidates: Vec<CandidateMove>,
    pub best_move: Option<Board>,
}

impl AnalysisReport {
    /// Index of the cell filled by the best move
    pub fn best_position(&self) -> Option<usize> {
        self.best_move
            .and_then(|best| self.root.find_changed_position(&best))
    }
}

/// Earliest candidate holding the greatest value, matching [`select_best`]
fn first_greatest(candidates: &[CandidateMove]) -> Option<&CandidateMove> {
    candidates.iter().fold(None, |best, candidate| match best {
        Some(current) if candidate.value <= current.value => Some(current),
        _ => Some(candidate),
    })
}

/// Build one tree from `board` and derive both the display sequences and the
/// best move from it.
#[instrument(skip(board, config), fields(board = %board.encode()))]
pub fn analyze(board: &Board, to_move: Player, config: &AnalysisConfig) -> AnalysisReport {
    let root = build_tree_with(*board, to_move, config.expansion);

    let mut sequences = flatten(&root);
    let total_sequences = sequences.len();
    sequences.truncate(config.display_limit);

    let maximizing = config.maximizing_for(to_move);
    let candidates: Vec<CandidateMove> = evaluate_children(&root, maximizing)
        .into_iter()
        .filter_map(|(child, value)| {
            board
                .find_changed_position(&child)
                .map(|position| CandidateMove {
                    position,
                    board: child,
                    value,
                })
        })
        .collect();
    let best_move = first_greatest(&candidates).map(|candidate| candidate.board);

    info!(
        total_sequences,
        best = ?best_move.map(|b| b.encode()),
        "analysis complete"
    );

    AnalysisReport {
        root: *board,
        to_move,
        maximizing,
        total_sequences,
        sequences,
        candidates,
        best_move,
    }
}
