//! Shared helpers for the lookahead integration tests.

#![allow(dead_code)]

use lookahead::tictactoe::{Board, Cell, Player};

pub fn factorial(n: usize) -> usize {
    (1..=n).product()
}

pub fn board(encoded: &str) -> Board {
    encoded
        .parse()
        .unwrap_or_else(|e| panic!("test board '{encoded}' should parse: {e}"))
}

/// Cells that differ between two boards, as (index, before, after)
pub fn diff(before: &Board, after: &Board) -> Vec<(usize, Cell, Cell)> {
    before
        .cells()
        .iter()
        .zip(after.cells().iter())
        .enumerate()
        .filter(|(_, (a, b))| a != b)
        .map(|(i, (a, b))| (i, *a, *b))
        .collect()
}

/// A spread of positions with 0 to 6 empty cells, paired with the player to move
pub fn sample_positions() -> Vec<(Board, Player)> {
    vec![
        (board("XOXXOOOXX"), Player::X),
        (board("XOXXOOOX."), Player::O),
        (board("XOXOXO.O."), Player::X),
        (board("XO.OX.X.O"), Player::O),
        (board("X.O.X.O.."), Player::O),
        (board("X...O..X."), Player::O),
        (board("....X..O."), Player::X),
    ]
}
