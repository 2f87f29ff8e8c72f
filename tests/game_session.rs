use lookahead::{
    analysis::{best_branch, generate_moves_from},
    tictactoe::{GameSession, Player, TurnOutcome},
};

#[test]
fn session_position_feeds_the_lookahead() {
    let mut session = GameSession::new();
    for pos in [4, 0, 8] {
        session.play(pos).unwrap();
    }
    assert_eq!(session.to_move(), Player::O);

    let sequences = generate_moves_from(session.board(), session.to_move());
    assert_eq!(sequences.len(), 720);
    assert!(sequences.iter().all(|seq| seq.boards[0] == *session.board()));

    let best = best_branch(session.board(), session.to_move()).unwrap();
    let position = session.board().find_changed_position(&best).unwrap();
    assert_eq!(best.get(position), Player::O.to_cell());
}

#[test]
fn following_hints_plays_a_game_to_completion() {
    let mut session = GameSession::new();
    let mut plies = 0;

    loop {
        let best = best_branch(session.board(), session.to_move())
            .expect("an unfinished game has empty cells");
        let position = session.board().find_changed_position(&best).unwrap();
        plies += 1;

        match session.play(position).unwrap() {
            TurnOutcome::Continue { .. } => {}
            TurnOutcome::Won { board, .. } | TurnOutcome::Draw { board } => {
                assert_eq!(board.occupied_count(), plies);
                break;
            }
        }
    }

    assert_eq!(session, GameSession::new());
    assert!(plies <= 9);
}
