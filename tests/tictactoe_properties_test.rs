//! Property tests over random move sequences.

use noughts::games::tictactoe::invariants::{InvariantSet, TicTacToeInvariants};
use noughts::{
    Combo, FirstEmptySelector, GameEngine, GameMode, GameState, Mark, Position, Square,
    check_winner,
};
use proptest::prelude::*;

fn replay(moves: &[usize]) -> GameState {
    let engine = GameEngine::with_selector(FirstEmptySelector);
    moves
        .iter()
        .fold(GameState::new(GameMode::Solo), |state, &m| engine.apply_move(state, m).0)
}

proptest! {
    #[test]
    fn mark_counts_stay_balanced(moves in prop::collection::vec(0usize..12, 0..20)) {
        let state = replay(&moves);
        let circles = state.board().count(Mark::Circle);
        let crosses = state.board().count(Mark::Cross);
        prop_assert!(circles == crosses || circles == crosses + 1);
        prop_assert!(TicTacToeInvariants::check_all(&state).is_ok());
    }

    #[test]
    fn illegal_moves_are_noops(
        moves in prop::collection::vec(0usize..9, 0..9),
        extra in 0usize..12,
    ) {
        let engine = GameEngine::with_selector(FirstEmptySelector);
        let state = replay(&moves);
        let illegal = state.is_over()
            || Position::from_index(extra).is_none_or(|pos| !state.board().is_empty(pos));
        prop_assume!(illegal);
        let (after, outcome) = engine.apply_move(state.clone(), extra);
        prop_assert_eq!(after, state);
        prop_assert!(outcome.is_none());
    }

    #[test]
    fn winner_iff_some_line_is_uniform(cells in prop::array::uniform9(0u8..3)) {
        let mut board = noughts::Board::new();
        for (pos, cell) in Position::ALL.into_iter().zip(cells) {
            let square = match cell {
                1 => Square::Occupied(Mark::Circle),
                2 => Square::Occupied(Mark::Cross),
                _ => Square::Empty,
            };
            board.set(pos, square);
        }
        let has_line = Combo::ALL.iter().any(|combo| {
            let [a, b, c] = combo.positions();
            board.get(a) != Square::Empty
                && board.get(a) == board.get(b)
                && board.get(b) == board.get(c)
        });
        let winner = check_winner(&board);
        prop_assert_eq!(winner.is_some(), has_line);
        if let Some(combo) = winner {
            let [a, b, c] = combo.positions();
            prop_assert!(board.get(a).mark().is_some());
            prop_assert_eq!(board.get(a), board.get(b));
            prop_assert_eq!(board.get(b), board.get(c));
        }
    }
}
