//! Board representation and basic operations

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Number of cells on the 3x3 board
pub const CELL_COUNT: usize = 9;

/// A cell on the Tic-Tac-Toe board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    /// Compact character used in board encodings
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    /// Symbol used when rendering a board for display
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => '-',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | '-' | '_' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' | '0' => Some(Cell::O),
            _ => None,
        }
    }
}

/// A player in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Convert player to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_cell().to_char())
    }
}

impl FromStr for Player {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "X" | "x" => Ok(Player::X),
            "O" | "o" => Ok(Player::O),
            other => Err(crate::Error::InvalidPlayer {
                player: other.to_string(),
            }),
        }
    }
}

/// A 3x3 board of cells, indexed row-major from 0 (top-left) to 8 (bottom-right).
///
/// Boards are immutable values: [`Board::place`] returns a new board and leaves
/// the original untouched. The fixed-size array guarantees exactly nine cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Board {
    cells: [Cell; CELL_COUNT],
}

impl Board {
    /// Create an empty board
    pub fn new() -> Self {
        Board {
            cells: [Cell::Empty; CELL_COUNT],
        }
    }

    /// Create a board from exactly nine cells.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidBoardLength`] if `cells` does not hold nine entries.
    pub fn from_cells(cells: &[Cell]) -> Result<Self, crate::Error> {
        let cells: [Cell; CELL_COUNT] =
            cells
                .try_into()
                .map_err(|_| crate::Error::InvalidBoardLength {
                    expected: CELL_COUNT,
                    got: cells.len(),
                    context: cells.iter().map(|c| c.to_char()).collect(),
                })?;
        Ok(Board { cells })
    }

    /// Borrow the underlying cells
    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    /// Get cell at position (0-8)
    pub fn get(&self, pos: usize) -> Cell {
        self.cells[pos]
    }

    /// Check if a position is empty
    pub fn is_empty(&self, pos: usize) -> bool {
        self.cells[pos] == Cell::Empty
    }

    /// All empty positions in ascending index order
    pub fn empty_positions(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Cell::Empty)
            .map(|(i, _)| i)
            .collect()
    }

    /// Count the number of occupied cells on the board.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c != Cell::Empty).count()
    }

    /// Place `player`'s mark at `pos` and return the resulting board
    #[must_use = "place returns a new board; the original is unchanged"]
    pub fn place(&self, pos: usize, player: Player) -> Result<Board, crate::Error> {
        if pos >= CELL_COUNT || !self.is_empty(pos) {
            return Err(crate::Error::InvalidMove { position: pos });
        }
        Ok(self.with_mark(pos, player))
    }

    /// Place a mark on a cell already known to be empty
    pub(crate) fn with_mark(&self, pos: usize, player: Player) -> Board {
        let mut next = *self;
        next.cells[pos] = player.to_cell();
        next
    }

    /// Check if a player has a completed line
    pub fn has_won(&self, player: Player) -> bool {
        super::lines::LineAnalyzer::has_won(&self.cells, player)
    }

    /// Check if no cell is empty
    pub fn is_full(&self) -> bool {
        super::lines::LineAnalyzer::is_full(&self.cells)
    }

    /// Get the winner if there is one, checking X first
    pub fn winner(&self) -> Option<Player> {
        if self.has_won(Player::X) {
            Some(Player::X)
        } else if self.has_won(Player::O) {
            Some(Player::O)
        } else {
            None
        }
    }

    /// Find the first position where two boards differ
    pub fn find_changed_position(&self, other: &Board) -> Option<usize> {
        self.cells
            .iter()
            .zip(other.cells.iter())
            .position(|(a, b)| a != b)
    }

    /// Compact nine-character encoding, e.g. `XX..O...O`
    pub fn encode(&self) -> String {
        self.cells.iter().map(|&c| c.to_char()).collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders three rows of space-separated symbols with `-` for empty cells.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, &cell) in self.cells.iter().enumerate() {
            write!(f, "{}", cell.symbol())?;
            if (i + 1).is_multiple_of(3) {
                if i < CELL_COUNT - 1 {
                    writeln!(f)?;
                }
            } else {
                write!(f, " ")?;
            }
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = crate::Error;

    /// Parse nine cell characters, ignoring whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        if chars.len() != CELL_COUNT {
            return Err(crate::Error::InvalidBoardLength {
                expected: CELL_COUNT,
                got: chars.len(),
                context: s.to_string(),
            });
        }

        let mut cells = [Cell::Empty; CELL_COUNT];
        for (i, &c) in chars.iter().enumerate() {
            cells[i] = Cell::from_char(c).ok_or_else(|| crate::Error::InvalidCellCharacter {
                character: c,
                position: i,
                context: s.to_string(),
            })?;
        }
        Ok(Board { cells })
    }
}

impl From<Board> for String {
    fn from(board: Board) -> Self {
        board.encode()
    }
}

impl TryFrom<String> for Board {
    type Error = crate::Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board() {
        let board = Board::new();
        assert_eq!(board.empty_positions().len(), 9);
        assert_eq!(board.occupied_count(), 0);
        assert!(!board.is_full());
    }

    #[test]
    fn test_place_returns_new_board() {
        let board = Board::new();
        let next = board.place(4, Player::X).unwrap();
        assert_eq!(next.get(4), Cell::X);
        assert_eq!(board.get(4), Cell::Empty);

        let err = next.place(4, Player::O).unwrap_err();
        assert!(err.to_string().contains("occupied"));
        assert!(next.place(9, Player::O).is_err());
    }

    #[test]
    fn test_from_cells_rejects_wrong_length() {
        let err = Board::from_cells(&[Cell::X; 8]).unwrap_err();
        assert!(matches!(
            err,
            crate::Error::InvalidBoardLength {
                expected: 9,
                got: 8,
                ..
            }
        ));
        assert!(Board::from_cells(&[Cell::Empty; 10]).is_err());
        assert_eq!(Board::from_cells(&[Cell::Empty; 9]).unwrap(), Board::new());
    }

    #[test]
    fn test_from_str() {
        let board: Board = "XX. .O. ..O".parse().unwrap();
        assert_eq!(board.get(0), Cell::X);
        assert_eq!(board.get(1), Cell::X);
        assert_eq!(board.get(4), Cell::O);
        assert_eq!(board.get(8), Cell::O);
        assert_eq!(board.empty_positions(), vec![2, 3, 5, 6, 7]);

        let dashed: Board = "xx--o---0".parse().unwrap();
        assert_eq!(dashed, board);
    }

    #[test]
    fn test_from_str_rejects_malformed_input() {
        assert!(matches!(
            "XX.".parse::<Board>(),
            Err(crate::Error::InvalidBoardLength { got: 3, .. })
        ));
        assert!(matches!(
            "XX..O...OX".parse::<Board>(),
            Err(crate::Error::InvalidBoardLength { got: 10, .. })
        ));
        assert!(matches!(
            "XX..Q...O".parse::<Board>(),
            Err(crate::Error::InvalidCellCharacter {
                character: 'Q',
                position: 4,
                ..
            })
        ));
    }

    #[test]
    fn test_display() {
        let board: Board = "X.O.X...O".parse().unwrap();
        assert_eq!(board.to_string(), "X - O\n- X -\n- - O");
    }

    #[test]
    fn test_encode_roundtrip_through_serde() {
        let board: Board = "XO.......".parse().unwrap();
        let json = serde_json::to_string(&board).unwrap();
        assert_eq!(json, "\"XO.......\"");
        let back: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(back, board);
    }

    #[test]
    fn test_winner_and_changed_position() {
        let board: Board = "XXXOO....".parse().unwrap();
        assert_eq!(board.winner(), Some(Player::X));

        let next = board.place(8, Player::O).unwrap();
        assert_eq!(board.find_changed_position(&next), Some(8));
        assert_eq!(board.find_changed_position(&board), None);
    }

    #[test]
    fn test_player_parsing() {
        assert_eq!("x".parse::<Player>().unwrap(), Player::X);
        assert_eq!("O".parse::<Player>().unwrap(), Player::O);
        assert!("Z".parse::<Player>().is_err());
        assert_eq!(Player::X.opponent(), Player::O);
        assert_eq!(Player::O.to_string(), "O");
    }
}
