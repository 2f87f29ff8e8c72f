//! Tic-Tac-Toe game implementation

pub mod board;
pub mod game;
pub mod game_tree;
pub mod lines;

pub use board::{Board, CELL_COUNT, Cell, Player};
pub use game::{GameSession, TurnOutcome};
pub use game_tree::{ExpansionPolicy, TreeNode, build_tree, build_tree_with};
pub use lines::{LineAnalyzer, WINNING_LINES};
