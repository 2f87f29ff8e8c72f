//! Exhaustive tic-tac-toe look-ahead
//!
//! This crate provides:
//! - Tic-Tac-Toe board, win/draw detection and an interactive game session
//! - Exhaustive move-tree construction from any position
//! - Flattening of the tree into every root-to-leaf continuation
//! - Backward-induction (minimax without pruning) best-move selection
//!
//! ```
//! use lookahead::{best_branch, tictactoe::{Board, Player}};
//!
//! let board: Board = "XX..O...O".parse()?;
//! let best = best_branch(&board, Player::X).expect("board has empty cells");
//! assert_eq!(best.encode(), "XXX.O...O");
//! # Ok::<(), lookahead::Error>(())
//! ```

pub mod analysis;
pub mod app;
pub mod cli;
pub mod error;
pub mod tictactoe;

pub use analysis::{
    AnalysisReport, MoveSequence, analyze, best_branch, flatten, generate_moves,
    generate_moves_from, select_best,
};
pub use app::AnalysisConfig;
pub use error::{Error, Result};
pub use tictactoe::{Board, GameSession, Player, TreeNode, build_tree};
