//! Configuration for look-ahead queries.

use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::tictactoe::{ExpansionPolicy, Player};

/// Default number of move sequences shown to the user
pub const DEFAULT_DISPLAY_LIMIT: usize = 10;

/// Configuration for a look-ahead analysis.
///
/// This type provides a builder-style API and can also be loaded from a JSON
/// file; missing fields fall back to their defaults.
///
/// # Examples
///
/// ```
/// use lookahead::app::AnalysisConfig;
/// use lookahead::tictactoe::{ExpansionPolicy, Player};
///
/// let config = AnalysisConfig::new()
///     .with_display_limit(5)
///     .with_expansion(ExpansionPolicy::StopAtWin)
///     .with_maximizing(Player::O);
/// assert_eq!(config.display_limit, 5);
/// assert_eq!(config.maximizing_for(Player::X), Player::O);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// How many sequences to keep for display; flattening itself is uncapped
    pub display_limit: usize,
    /// When tree expansion stops
    pub expansion: ExpansionPolicy,
    /// Player whose outcome the evaluator maximizes; unset means the player to move
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximizing: Option<Player>,
}

impl AnalysisConfig {
    /// Create a configuration with default values:
    /// - Display limit: 10
    /// - Expansion: full board
    /// - Maximizing player: whoever is to move
    pub fn new() -> Self {
        Self {
            display_limit: DEFAULT_DISPLAY_LIMIT,
            expansion: ExpansionPolicy::default(),
            maximizing: None,
        }
    }

    /// Set the number of sequences kept for display.
    pub fn with_display_limit(mut self, limit: usize) -> Self {
        self.display_limit = limit;
        self
    }

    /// Set the expansion policy.
    pub fn with_expansion(mut self, expansion: ExpansionPolicy) -> Self {
        self.expansion = expansion;
        self
    }

    /// Set the maximizing player.
    pub fn with_maximizing(mut self, player: Player) -> Self {
        self.maximizing = Some(player);
        self
    }

    /// Player to maximize when `to_move` places the next mark
    pub fn maximizing_for(&self, to_move: Player) -> Player {
        self.maximizing.unwrap_or(to_move)
    }

    /// Load a configuration from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Io`] if the file cannot be read and
    /// [`crate::Error::Serialization`] if it is not valid JSON for this type.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, crate::Error> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| crate::Error::Io {
            operation: format!("read config file {}", path.display()),
            source,
        })?;
        Ok(serde_json::from_str(&contents)?)
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self::new()
    }
}
