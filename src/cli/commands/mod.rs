//! CLI subcommands

use anyhow::{Result, anyhow};

use crate::tictactoe::Player;

pub mod analyze;
pub mod play;

pub(crate) fn parse_player_token(value: &str, flag: &str) -> Result<Player> {
    match value.trim().to_ascii_lowercase().as_str() {
        "x" | "first" => Ok(Player::X),
        "o" | "second" => Ok(Player::O),
        other => Err(anyhow!(
            "Invalid value '{other}' for {flag} (expected 'x' or 'o')"
        )),
    }
}
