//! Stateless UI rendering for the game.

use super::app::{self, App, Screen};
use crate::games::tictactoe::{GameStatus, Mark, MoveSelector, Position, Square};
use crate::settings::{LineStyle, MarkStyle};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use std::str::FromStr;
use std::time::Instant;

/// Draws the whole screen.
pub fn draw<S: MoveSelector>(frame: &mut Frame, app: &App<S>, now: Instant) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(9),    // Body
            Constraint::Length(3), // Status
            Constraint::Length(1), // Key hints
        ])
        .split(frame.area());

    let title = Paragraph::new("Noughts and Crosses")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    match app.screen() {
        Screen::ModeSelect => draw_menu(frame, chunks[1], app.menu_index()),
        Screen::InGame => draw_board(frame, chunks[1], app, now),
    }

    let status = Paragraph::new(app.status_message())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[2]);

    let hints = match app.screen() {
        Screen::ModeSelect => "↑/↓ choose  Enter start  q quit",
        Screen::InGame if app.restart_offered() => "r play again  q quit",
        Screen::InGame => "arrows move  Enter/1-9 place  r restart  q quit",
    };
    let hints = Paragraph::new(hints)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(hints, chunks[3]);
}

fn draw_menu(frame: &mut Frame, area: Rect, selected: usize) {
    let lines: Vec<Line> = app::modes()
        .into_iter()
        .enumerate()
        .map(|(i, mode)| {
            let label = format!(" {}. {} ", i + 1, mode.label());
            if i == selected {
                Line::from(Span::styled(
                    label,
                    Style::default()
                        .bg(Color::White)
                        .fg(Color::Black)
                        .add_modifier(Modifier::BOLD),
                ))
            } else {
                Line::from(label)
            }
        })
        .collect();

    let menu = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().title(" Mode ").borders(Borders::ALL));
    frame.render_widget(menu, center_rect(area, 30, 6));
}

fn draw_board<S: MoveSelector>(frame: &mut Frame, area: Rect, app: &App<S>, now: Instant) {
    let board_area = center_rect(area, 40, 11);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    let grid = line_color(app.settings().grid(), Color::DarkGray);
    for (r, row) in Position::ALL.chunks(3).enumerate() {
        draw_row(frame, rows[r * 2], app, now, row, grid);
        if r < 2 {
            let sep = Paragraph::new("─".repeat(board_area.width as usize))
                .style(Style::default().fg(grid));
            frame.render_widget(sep, rows[r * 2 + 1]);
        }
    }
}

fn draw_row<S: MoveSelector>(
    frame: &mut Frame,
    area: Rect,
    app: &App<S>,
    now: Instant,
    positions: &[Position],
    grid: Color,
) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
        ])
        .split(area);

    for (c, &pos) in positions.iter().enumerate() {
        draw_cell(frame, cols[c * 2], app, now, pos);
        if c < 2 {
            let sep = Paragraph::new("│\n│\n│").style(Style::default().fg(grid));
            frame.render_widget(sep, cols[c * 2 + 1]);
        }
    }
}

fn draw_cell<S: MoveSelector>(
    frame: &mut Frame,
    area: Rect,
    app: &App<S>,
    now: Instant,
    pos: Position,
) {
    let settings = app.settings();
    let state = app.state();

    let (symbol, mut style) = match state.board().get(pos) {
        Square::Empty => (" ", Style::default().fg(Color::DarkGray)),
        Square::Occupied(Mark::Circle) => (
            "O",
            Style::default()
                .fg(mark_color(settings.circle(), Color::Cyan))
                .add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Mark::Cross) => (
            "X",
            Style::default()
                .fg(mark_color(settings.cross(), Color::Yellow))
                .add_modifier(Modifier::BOLD),
        ),
    };

    if app.is_animating(pos, now) {
        style = style.add_modifier(Modifier::DIM);
    }
    let on_winning_line = matches!(state.status(), GameStatus::Won(combo) if combo.contains(pos));
    if on_winning_line {
        style = style.bg(line_color(settings.winning_line(), Color::White)).fg(Color::Black);
    } else if pos == app.cursor() && !state.is_over() {
        style = style.bg(Color::White).fg(Color::Black);
    }

    let paragraph = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(format!("  {}  ", symbol), style)),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn mark_color(style: &MarkStyle, fallback: Color) -> Color {
    Color::from_str(&style.color).unwrap_or(fallback)
}

fn line_color(style: &LineStyle, fallback: Color) -> Color {
    Color::from_str(&style.color).unwrap_or(fallback)
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{FirstEmptySelector, GameEngine, GameMode};
    use crate::settings::Settings;
    use crossterm::event::KeyCode;
    use ratatui::{Terminal, backend::TestBackend};

    fn render<S: MoveSelector>(app: &App<S>) -> String {
        let mut terminal = Terminal::new(TestBackend::new(60, 24)).unwrap();
        terminal.draw(|f| draw(f, app, Instant::now())).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_menu_lists_modes() {
        let app = App::new(GameEngine::with_selector(FirstEmptySelector), Settings::default());
        let screen = render(&app);
        assert!(screen.contains("Solo"));
        assert!(screen.contains("computer"));
    }

    #[test]
    fn test_board_shows_marks_and_status() {
        let mut app = App::new(GameEngine::with_selector(FirstEmptySelector), Settings::default());
        app.start(GameMode::Solo);
        app.handle_key(KeyCode::Char('5'));
        let screen = render(&app);
        assert!(screen.contains('O'));
        assert!(screen.contains("Cross's turn"));
    }

    #[test]
    fn test_color_fallback() {
        let bad = MarkStyle {
            color: "not-a-colour".to_string(),
            ..MarkStyle::circle()
        };
        assert_eq!(mark_color(&bad, Color::Cyan), Color::Cyan);
        assert_eq!(mark_color(&MarkStyle::circle(), Color::Cyan), Color::Rgb(0x00, 0xB0, 0xEF));
    }
}
