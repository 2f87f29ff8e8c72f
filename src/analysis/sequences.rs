//! Flattening a move tree into root-to-leaf board sequences

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::tictactoe::{Board, TreeNode};

/// One full hypothetical continuation: the boards from the root to a leaf
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveSequence {
    pub boards: Vec<Board>,
}

impl MoveSequence {
    /// Number of boards, root included
    pub fn len(&self) -> usize {
        self.boards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boards.is_empty()
    }

    /// The final board of the continuation
    pub fn last(&self) -> Option<&Board> {
        self.boards.last()
    }

    /// Cell index filled at each step
    pub fn moves(&self) -> Vec<usize> {
        self.boards
            .windows(2)
            .filter_map(|pair| pair[0].find_changed_position(&pair[1]))
            .collect()
    }
}

/// Flatten a tree into every root-to-leaf sequence of boards.
///
/// Leaves are emitted in depth-first, left-to-right order, so truncating the
/// result never changes the entries that remain.
#[instrument(skip(root), fields(root = %root.board.encode()))]
pub fn flatten(root: &TreeNode) -> Vec<MoveSequence> {
    let mut sequences = Vec::with_capacity(root.leaf_count());
    let mut path = Vec::with_capacity(root.depth() + 1);
    collect(root, &mut path, &mut sequences);
    debug!(sequences = sequences.len(), "flattened move tree");
    sequences
}

fn collect(node: &TreeNode, path: &mut Vec<Board>, out: &mut Vec<MoveSequence>) {
    path.push(node.board);
    if node.is_leaf() {
        out.push(MoveSequence {
            boards: path.clone(),
        });
    } else {
        for child in &node.children {
            collect(child, path, out);
        }
    }
    path.pop();
}
