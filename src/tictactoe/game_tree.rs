//! Exhaustive move-tree construction

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use super::{Board, Player};

/// When tree expansion stops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExpansionPolicy {
    /// Expand until the board is full, even past a completed line.
    #[default]
    FullBoard,
    /// Treat any board with a completed line (either side) as a leaf.
    StopAtWin,
}

impl ExpansionPolicy {
    fn is_leaf(self, board: &Board) -> bool {
        match self {
            ExpansionPolicy::FullBoard => board.is_full(),
            ExpansionPolicy::StopAtWin => {
                board.is_full() || board.has_won(Player::X) || board.has_won(Player::O)
            }
        }
    }
}

/// A node of the move tree.
///
/// `to_move` is the player who places the next mark from this node; every child
/// records the opponent. Children are ordered by the ascending index of the cell
/// that was filled to reach them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode {
    pub board: Board,
    pub to_move: Player,
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of leaves below (and including) this node
    pub fn leaf_count(&self) -> usize {
        if self.is_leaf() {
            1
        } else {
            self.children.iter().map(TreeNode::leaf_count).sum()
        }
    }

    /// Number of nodes in this subtree, root included
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(TreeNode::node_count).sum::<usize>()
    }

    /// Longest root-to-leaf path, counted in edges
    pub fn depth(&self) -> usize {
        self.children
            .iter()
            .map(|child| child.depth() + 1)
            .max()
            .unwrap_or(0)
    }
}

/// Build the complete move tree from `board` with `to_move` placing first.
///
/// Expansion continues until every cell is filled; a completed line does not
/// end a branch. The depth of every leaf equals the number of empty cells in
/// `board`.
#[instrument(skip(board), fields(board = %board.encode()))]
pub fn build_tree(board: Board, to_move: Player) -> TreeNode {
    build_tree_with(board, to_move, ExpansionPolicy::FullBoard)
}

/// Build the move tree under an explicit [`ExpansionPolicy`].
#[instrument(skip(board), fields(board = %board.encode()))]
pub fn build_tree_with(board: Board, to_move: Player, policy: ExpansionPolicy) -> TreeNode {
    let root = expand(board, to_move, policy);
    debug!(
        nodes = root.node_count(),
        leaves = root.leaf_count(),
        "move tree built"
    );
    root
}

fn expand(board: Board, to_move: Player, policy: ExpansionPolicy) -> TreeNode {
    let children = if policy.is_leaf(&board) {
        Vec::new()
    } else {
        board
            .empty_positions()
            .into_iter()
            .map(|pos| expand(board.with_mark(pos, to_move), to_move.opponent(), policy))
            .collect()
    };

    TreeNode {
        board,
        to_move,
        children,
    }
}
