//! Tests for SVG boards built from played games.

use noughts::{FirstEmptySelector, GameEngine, GameMode, GameState, Settings, board_svg};

#[test]
fn test_board_uses_configured_colours() {
    let settings = Settings::from_toml(
        r##"
        [circle]
        color = "#ABCDEF"
        duration_ms = 900

        [cross]
        color = "#123456"
        "##,
    )
    .unwrap();

    let engine = GameEngine::with_selector(FirstEmptySelector);
    let state = engine.apply_move(GameState::new(GameMode::Solo), 4).0;
    let state = engine.apply_move(state, 0).0;

    let svg = board_svg(&state, &settings);
    assert!(svg.contains(r##"stroke="#ABCDEF""##));
    assert!(svg.contains(r#"dur="900ms""#));
    assert!(svg.contains(r##"stroke="#123456""##));
    assert!(!svg.contains("winning-line"));
}

#[test]
fn test_column_win_line_is_vertical() {
    let engine = GameEngine::with_selector(FirstEmptySelector);
    let mut state = GameState::new(GameMode::Solo);
    // Circle takes the middle column.
    for m in [1, 0, 4, 2, 7] {
        state = engine.apply_move(state, m).0;
    }
    let svg = board_svg(&state, &Settings::default());
    assert!(svg.contains(r#"class="winning-line" x1="150" y1="50" x2="150" y2="250""#));
}

#[test]
fn test_largest_accepted_cell_size_renders() {
    let settings = Settings::from_toml("cell_size = 10000").unwrap();
    let svg = board_svg(&GameState::new(GameMode::Solo), &settings);
    assert!(svg.contains(r#"width="30000""#));
    assert!(Settings::from_toml("cell_size = 10001").is_err());
}
