//! Backward-induction (minimax) evaluation of a move tree
//!
//! Every node of the tree is visited; there is no pruning and no caching of
//! repeated positions.

use tracing::{debug, instrument};

use crate::tictactoe::{Board, Player, TreeNode};

/// Value of a won leaf for the maximizing player
pub const WIN: i32 = 1;
/// Value of a leaf without a decisive line
pub const DRAW: i32 = 0;
/// Value of a lost leaf for the maximizing player
pub const LOSS: i32 = -1;

/// Score a leaf board from `maximizing`'s point of view.
///
/// A completed line for `maximizing` is checked first, so a board holding
/// lines for both players scores as a win.
pub fn leaf_value(board: &Board, maximizing: Player) -> i32 {
    if board.has_won(maximizing) {
        WIN
    } else if board.has_won(maximizing.opponent()) {
        LOSS
    } else {
        DRAW
    }
}

/// Backward-induction value of `node`.
///
/// Internal nodes take the maximum over their children when `maximizing` is the
/// player to move at that node and the minimum otherwise.
pub fn node_value(node: &TreeNode, maximizing: Player) -> i32 {
    if node.is_leaf() {
        return leaf_value(&node.board, maximizing);
    }

    let values = node
        .children
        .iter()
        .map(|child| node_value(child, maximizing));
    let value = if node.to_move == maximizing {
        values.max()
    } else {
        values.min()
    };
    value.unwrap_or(DRAW)
}

/// Value of every direct child of `root`, in child order
#[instrument(skip(root), fields(root = %root.board.encode()))]
pub fn evaluate_children(root: &TreeNode, maximizing: Player) -> Vec<(Board, i32)> {
    root.children
        .iter()
        .map(|child| (child.board, node_value(child, maximizing)))
        .collect()
}

/// Pick the child of `root` with the greatest value for `maximizing`.
///
/// Ties go to the earliest child. Returns `None` when `root` has no children.
#[instrument(skip(root), fields(root = %root.board.encode()))]
pub fn select_best(root: &TreeNode, maximizing: Player) -> Option<Board> {
    let mut best: Option<(Board, i32)> = None;
    for child in &root.children {
        let value = node_value(child, maximizing);
        match best {
            Some((_, best_value)) if value <= best_value => {}
            _ => best = Some((child.board, value)),
        }
    }

    if let Some((board, value)) = best {
        debug!(best = %board.encode(), value, "selected best move");
    }
    best.map(|(board, _)| board)
}
