//! Interactive game session

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use super::board::{Board, Player};

/// Result of playing a single move in a [`GameSession`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnOutcome {
    /// The game goes on with `next` to move
    Continue { next: Player },
    /// `winner` completed a line; `board` is the final position
    Won { winner: Player, board: Board },
    /// The board filled up without a winner
    Draw { board: Board },
}

impl TurnOutcome {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, TurnOutcome::Continue { .. })
    }
}

/// Mutable state of a game in progress: the live board and whose turn it is.
///
/// The session starts with an empty board and X to move. When a move ends the
/// game, the outcome carries the final board and the session resets itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSession {
    board: Board,
    to_move: Player,
}

impl GameSession {
    pub fn new() -> Self {
        GameSession {
            board: Board::new(),
            to_move: Player::X,
        }
    }

    /// Resume a session from an arbitrary position.
    pub fn from_position(board: Board, to_move: Player) -> Self {
        GameSession { board, to_move }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Place the current player's mark at `position`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidMove`] if the position is out of range or
    /// occupied. The session is left unchanged and the turn does not pass.
    #[instrument(skip(self), fields(player = %self.to_move))]
    pub fn play(&mut self, position: usize) -> Result<TurnOutcome, crate::Error> {
        let player = self.to_move;
        let board = self.board.place(position, player)?;

        let outcome = if board.has_won(player) {
            TurnOutcome::Won {
                winner: player,
                board,
            }
        } else if board.is_full() {
            TurnOutcome::Draw { board }
        } else {
            self.board = board;
            self.to_move = player.opponent();
            TurnOutcome::Continue {
                next: self.to_move,
            }
        };

        if outcome.is_terminal() {
            debug!(?outcome, "game over");
            self.reset();
        }
        Ok(outcome)
    }

    /// Clear the board and give X the first move
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn players_alternate() {
        let mut session = GameSession::new();
        assert_eq!(session.to_move(), Player::X);

        assert_eq!(
            session.play(4).unwrap(),
            TurnOutcome::Continue { next: Player::O }
        );
        assert_eq!(
            session.play(0).unwrap(),
            TurnOutcome::Continue { next: Player::X }
        );
        assert_eq!(session.board().encode(), "O...X....");
    }

    #[test]
    fn occupied_cell_keeps_the_turn() {
        let mut session = GameSession::new();
        session.play(4).unwrap();
        assert!(session.play(4).is_err());
        assert!(session.play(12).is_err());
        assert_eq!(session.to_move(), Player::O);
        assert_eq!(session.board().occupied_count(), 1);
    }

    #[test]
    fn win_reports_final_board_and_resets() {
        let mut session = GameSession::new();
        for pos in [0, 3, 1, 4] {
            session.play(pos).unwrap();
        }

        let outcome = session.play(2).unwrap();
        let expected: Board = "XXXOO....".parse().unwrap();
        assert_eq!(
            outcome,
            TurnOutcome::Won {
                winner: Player::X,
                board: expected
            }
        );
        assert_eq!(session, GameSession::new());
    }

    #[test]
    fn full_board_without_line_is_a_draw() {
        // X O X
        // X O O
        // O X X
        let mut session = GameSession::new();
        for pos in [0, 1, 2, 4, 3, 5, 7, 6] {
            assert!(!session.play(pos).unwrap().is_terminal());
        }

        let outcome = session.play(8).unwrap();
        assert!(matches!(outcome, TurnOutcome::Draw { .. }));
        assert_eq!(session.board().occupied_count(), 0);
        assert_eq!(session.to_move(), Player::X);
    }

    #[test]
    fn win_on_last_cell_is_not_a_draw() {
        let board: Board = "XOXOXOOX.".parse().unwrap();
        let mut session = GameSession::from_position(board, Player::X);
        let outcome = session.play(8).unwrap();
        assert!(matches!(
            outcome,
            TurnOutcome::Won {
                winner: Player::X,
                ..
            }
        ));
    }
}
