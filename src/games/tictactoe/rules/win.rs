//! Win detection logic for tic-tac-toe.

use super::super::{Board, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Three positions forming a row, column or diagonal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Combo([Position; 3]);

impl Combo {
    /// All 8 lines, in the order they are checked.
    pub const ALL: [Combo; 8] = [
        // Rows
        Combo([Position::TopLeft, Position::TopCenter, Position::TopRight]),
        Combo([Position::MiddleLeft, Position::Center, Position::MiddleRight]),
        Combo([Position::BottomLeft, Position::BottomCenter, Position::BottomRight]),
        // Columns
        Combo([Position::TopLeft, Position::MiddleLeft, Position::BottomLeft]),
        Combo([Position::TopCenter, Position::Center, Position::BottomCenter]),
        Combo([Position::TopRight, Position::MiddleRight, Position::BottomRight]),
        // Diagonals
        Combo([Position::TopLeft, Position::Center, Position::BottomRight]),
        Combo([Position::TopRight, Position::Center, Position::BottomLeft]),
    ];

    /// The three positions of the line.
    pub fn positions(self) -> [Position; 3] {
        self.0
    }

    /// The three board indices of the line.
    pub fn indices(self) -> [usize; 3] {
        self.0.map(Position::to_index)
    }

    /// First outer cell; the winning line starts here.
    pub fn start(self) -> Position {
        self.0[0]
    }

    /// Last outer cell; the winning line ends here.
    pub fn end(self) -> Position {
        self.0[2]
    }

    /// Whether the line passes through `pos`.
    pub fn contains(self, pos: Position) -> bool {
        self.0.contains(&pos)
    }

    /// Looks up a combo by its index triple.
    pub fn from_indices(indices: [usize; 3]) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.indices() == indices)
    }
}

impl std::fmt::Display for Combo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [a, b, c] = self.indices();
        write!(f, "[{}, {}, {}]", a, b, c)
    }
}

/// Checks if there is a winner on the board.
///
/// Returns the first combo (in [`Combo::ALL`] order) whose three squares
/// hold the same mark, `None` otherwise.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Combo> {
    Combo::ALL.into_iter().find(|combo| {
        let [a, b, c] = combo.positions();
        let sq = board.get(a);
        sq != Square::Empty && sq == board.get(b) && sq == board.get(c)
    })
}

#[cfg(test)]
mod tests {
    use super::super::super::Mark;
    use super::*;

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_winner_top_row() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Square::Occupied(Mark::Circle));
        board.set(Position::TopCenter, Square::Occupied(Mark::Circle));
        board.set(Position::TopRight, Square::Occupied(Mark::Circle));
        assert_eq!(check_winner(&board).map(Combo::indices), Some([0, 1, 2]));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let mut board = Board::new();
        board.set(Position::TopRight, Square::Occupied(Mark::Cross));
        board.set(Position::Center, Square::Occupied(Mark::Cross));
        board.set(Position::BottomLeft, Square::Occupied(Mark::Cross));
        assert_eq!(check_winner(&board).map(Combo::indices), Some([2, 4, 6]));
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Square::Occupied(Mark::Circle));
        board.set(Position::TopCenter, Square::Occupied(Mark::Cross));
        board.set(Position::TopRight, Square::Occupied(Mark::Circle));
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_first_combo_in_order_wins() {
        // Top row and left column both complete: the row comes first.
        let mut board = Board::new();
        for pos in [
            Position::TopLeft,
            Position::TopCenter,
            Position::TopRight,
            Position::MiddleLeft,
            Position::BottomLeft,
        ] {
            board.set(pos, Square::Occupied(Mark::Circle));
        }
        assert_eq!(check_winner(&board).map(Combo::indices), Some([0, 1, 2]));
    }

    #[test]
    fn test_from_indices() {
        assert_eq!(Combo::from_indices([0, 4, 8]), Some(Combo::ALL[6]));
        assert_eq!(Combo::from_indices([0, 1, 3]), None);
        assert_eq!(Combo::ALL[7].to_string(), "[2, 4, 6]");
    }
}
