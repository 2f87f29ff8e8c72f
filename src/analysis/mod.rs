//! Look-ahead analysis over exhaustive move trees
//!
//! A tree built by [`crate::tictactoe::build_tree`] feeds two independent
//! consumers: [`sequences::flatten`] lists every continuation for display and
//! [`backward_induction::select_best`] picks the move with the best guaranteed
//! outcome.

pub mod backward_induction;
pub mod query;
pub mod sequences;

pub use backward_induction::{
    DRAW, LOSS, WIN, evaluate_children, leaf_value, node_value, select_best,
};
pub use query::{
    AnalysisReport, CandidateMove, analyze, best_branch, generate_moves, generate_moves_from,
};
pub use sequences::{MoveSequence, flatten};
