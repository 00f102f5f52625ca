//! Scenario tests for the game engine.

use noughts::{
    Combo, FirstEmptySelector, GameEngine, GameMode, GameState, GameStatus, Mark, Outcome,
    Position, RandomSelector, Square, check_winner,
};

fn replay<S: noughts::MoveSelector>(
    engine: &GameEngine<S>,
    mode: GameMode,
    moves: &[usize],
) -> (GameState, Option<Outcome>) {
    let mut state = GameState::new(mode);
    let mut last = None;
    for &m in moves {
        let (next, outcome) = engine.apply_move(state, m);
        state = next;
        last = outcome;
    }
    (state, last)
}

#[test]
fn test_rejected_move_then_continue() {
    let engine = GameEngine::with_selector(FirstEmptySelector);
    let (state, outcome) = replay(&engine, GameMode::Solo, &[4, 0, 1, 7]);
    assert_eq!(outcome, Some(Outcome::Continued));
    assert_eq!(state.current_player(), Mark::Circle);

    let (state, outcome) = engine.apply_move(state, 7);
    assert_eq!(outcome, None);
    assert_eq!(state.current_player(), Mark::Circle);
    assert_eq!(state.history().len(), 4);

    let (state, outcome) = engine.apply_move(state, 3);
    assert_eq!(outcome, Some(Outcome::Continued));
    assert_eq!(state.board().get(Position::MiddleLeft), Square::Occupied(Mark::Circle));
    assert_eq!(state.current_player(), Mark::Cross);
}

#[test]
fn test_top_row_win() {
    let engine = GameEngine::with_selector(FirstEmptySelector);
    let (state, outcome) = replay(&engine, GameMode::Solo, &[0, 3, 1, 4, 2]);
    let combo = Combo::from_indices([0, 1, 2]).unwrap();
    assert_eq!(outcome, Some(Outcome::Won(combo)));
    assert_eq!(check_winner(state.board()), Some(combo));
    assert_eq!(state.status(), GameStatus::Won(combo));
    assert_eq!(state.winner(), Some(Mark::Circle));
}

#[test]
fn test_full_board_without_line_is_draw() {
    let engine = GameEngine::with_selector(FirstEmptySelector);
    // O X O / O X X / X O O
    let (state, outcome) = replay(&engine, GameMode::Solo, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);
    assert_eq!(outcome, Some(Outcome::Draw));
    assert_eq!(state.status(), GameStatus::Draw);
    assert_eq!(check_winner(state.board()), None);
    assert_eq!(state.winner(), None);
}

#[test]
fn test_win_on_last_square_is_not_a_draw() {
    let engine = GameEngine::with_selector(FirstEmptySelector);
    // Circle completes the 0-4-8 diagonal with the ninth mark.
    let (state, outcome) = replay(&engine, GameMode::Solo, &[0, 2, 1, 3, 5, 6, 8, 7, 4]);
    assert!(state.board().empty_positions().is_empty());
    assert!(matches!(outcome, Some(Outcome::Won(_))));
}

#[test]
fn test_moves_after_game_over_are_ignored() {
    let engine = GameEngine::with_selector(FirstEmptySelector);
    let (state, _) = replay(&engine, GameMode::Solo, &[0, 3, 1, 4, 2]);
    let (after, outcome) = engine.apply_move(state.clone(), 8);
    assert_eq!(outcome, None);
    assert_eq!(after, state);
}

#[test]
fn test_restart_resets_everything_but_mode() {
    let engine = GameEngine::with_selector(FirstEmptySelector);
    let (state, _) = replay(&engine, GameMode::VsComputer, &[0, 3, 1, 4, 2]);
    let fresh = engine.restart(&state);
    assert_eq!(fresh.mode(), GameMode::VsComputer);
    assert_eq!(fresh.current_player(), Mark::Circle);
    assert_eq!(fresh.status(), GameStatus::InProgress);
    assert!(fresh.board().empty_positions().len() == 9);
    assert!(fresh.history().is_empty());
}

#[test]
fn test_computer_only_picks_empty_cells() {
    let mut engine = GameEngine::with_selector(RandomSelector::seeded(11));
    for _ in 0..50 {
        let mut state = GameState::new(GameMode::VsComputer);
        while !state.is_over() {
            if state.awaiting_computer() {
                let pick = engine.choose_computer_move(&state).unwrap();
                assert!(state.board().is_empty(pick));
                state = engine.play_computer_turn(state).0;
            } else {
                let human = state.board().empty_positions()[0];
                state = engine.apply_move(state, human.to_index()).0;
            }
        }
        assert!(engine.choose_computer_move(&state).is_none());
    }
}

#[test]
fn test_state_snapshot_round_trips_through_json() {
    let engine = GameEngine::with_selector(FirstEmptySelector);
    let (state, _) = replay(&engine, GameMode::VsComputer, &[4, 0, 8]);
    let json = serde_json::to_string(&state).unwrap();
    let back: GameState = serde_json::from_str(&json).unwrap();
    assert_eq!(back, state);

    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["current_player"], "Cross");
    assert_eq!(value["history"].as_array().unwrap().len(), 3);
}
