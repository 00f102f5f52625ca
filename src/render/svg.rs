//! SVG drawings of marks, the winning line and whole boards.
//!
//! Marks are drawn in by animating `stroke-dashoffset` from the stroke
//! length down to zero, so a viewer sees the pen move.

use crate::games::tictactoe::{Combo, GameState, GameStatus, Mark, Position, Square};
use crate::settings::{LineStyle, MarkStyle, Settings};
use std::f64::consts::{PI, SQRT_2};
use tracing::{debug, instrument};

/// Inset of the cross strokes from the drawing's corners.
const CROSS_INSET: f64 = 10.0;

/// A standalone, animated circle.
pub fn circle_svg(style: &MarkStyle) -> String {
    wrap(style, "Circle", "", &circle_body(style, 0))
}

/// A standalone, animated cross; the second stroke starts when the first ends.
pub fn cross_svg(style: &MarkStyle) -> String {
    wrap(style, "Cross", "", &cross_body(style, 0))
}

/// The drawing for `mark`.
pub fn mark_svg(mark: Mark, settings: &Settings) -> String {
    match mark {
        Mark::Circle => circle_svg(settings.circle()),
        Mark::Cross => cross_svg(settings.cross()),
    }
}

/// A line joining the centres of the combo's two outer cells.
pub fn winning_line_svg(combo: Combo, cell_size: u32, style: &LineStyle) -> String {
    let (x1, y1) = cell_center(combo.start(), cell_size);
    let (x2, y2) = cell_center(combo.end(), cell_size);
    format!(
        r#"<line class="winning-line" x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="{}" stroke-linecap="round" />"#,
        x1, y1, x2, y2, style.color, style.stroke_width
    )
}

/// Centre of a cell in board coordinates.
pub fn cell_center(pos: Position, cell_size: u32) -> (f64, f64) {
    let cell = f64::from(cell_size);
    let half = cell / 2.0;
    (pos.col() as f64 * cell + half, pos.row() as f64 * cell + half)
}

/// A complete SVG document for the board: grid, marks and, once the game
/// is won, the winning line on top.
#[instrument(skip_all, fields(moves = state.history().len(), status = ?state.status()))]
pub fn board_svg(state: &GameState, settings: &Settings) -> String {
    debug!(board = %state.board().display(), "Rendering board");
    let cell = *settings.cell_size();
    let side = cell * 3;
    let mut out = format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{side}" height="{side}" viewBox="0 0 {side} {side}">"#
    );
    out.push('\n');

    let grid = settings.grid();
    for i in 1..3 {
        let at = cell * i;
        out.push_str(&format!(
            r#"  <line x1="{at}" y1="0" x2="{at}" y2="{side}" stroke="{}" stroke-width="{}" />"#,
            grid.color, grid.stroke_width
        ));
        out.push('\n');
        out.push_str(&format!(
            r#"  <line x1="0" y1="{at}" x2="{side}" y2="{at}" stroke="{}" stroke-width="{}" />"#,
            grid.color, grid.stroke_width
        ));
        out.push('\n');
    }

    for pos in Position::ALL {
        let Square::Occupied(mark) = state.board().get(pos) else {
            continue;
        };
        let (style, label, body) = match mark {
            Mark::Circle => (settings.circle(), "Circle", circle_body(settings.circle(), 0)),
            Mark::Cross => (settings.cross(), "Cross", cross_body(settings.cross(), 0)),
        };
        let (cx, cy) = cell_center(pos, cell);
        let half = f64::from(style.size) / 2.0;
        let placement = format!(r#" x="{}" y="{}""#, cx - half, cy - half);
        out.push_str("  ");
        out.push_str(&wrap(style, label, &placement, &body));
        out.push('\n');
    }

    if let GameStatus::Won(combo) = state.status() {
        out.push_str("  ");
        out.push_str(&winning_line_svg(combo, cell, settings.winning_line()));
        out.push('\n');
    }

    out.push_str("</svg>\n");
    out
}

fn wrap(style: &MarkStyle, label: &str, placement: &str, body: &str) -> String {
    let size = style.size;
    format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg"{placement} width="{size}" height="{size}" viewBox="0 0 {size} {size}" role="img" aria-label="{label}">{body}</svg>"#
    )
}

fn circle_body(style: &MarkStyle, begin_ms: u64) -> String {
    let size = f64::from(style.size);
    let stroke = f64::from(style.stroke_width);
    let r = size / 2.0 - stroke / 2.0;
    let length = 2.0 * PI * r;
    format!(
        r#"<circle cx="{}" cy="{}" r="{}" fill="none" stroke="{}" stroke-width="{}" stroke-linecap="round" {}</circle>"#,
        size / 2.0,
        size / 2.0,
        r,
        style.color,
        style.stroke_width,
        dash_animation(length, style.duration_ms, begin_ms),
    )
}

fn cross_body(style: &MarkStyle, begin_ms: u64) -> String {
    let far = f64::from(style.size) - CROSS_INSET;
    let length = (far - CROSS_INSET) * SQRT_2;
    let stroke = |x1: f64, x2: f64, begin: u64| {
        format!(
            r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="{}" stroke-linecap="round" {}</line>"#,
            x1,
            CROSS_INSET,
            x2,
            far,
            style.color,
            style.stroke_width,
            dash_animation(length, style.duration_ms, begin),
        )
    };
    format!(
        "{}{}",
        stroke(CROSS_INSET, far, begin_ms),
        stroke(far, CROSS_INSET, begin_ms + style.duration_ms)
    )
}

/// Dash attributes plus the `<animate>` child; closes the opening tag.
fn dash_animation(length: f64, duration_ms: u64, begin_ms: u64) -> String {
    let begin = if begin_ms > 0 {
        format!(r#" begin="{}ms""#, begin_ms)
    } else {
        String::new()
    };
    format!(
        r#"stroke-dasharray="{len:.3}" stroke-dashoffset="{len:.3}"><animate attributeName="stroke-dashoffset" from="{len:.3}" to="0" dur="{duration_ms}ms" fill="freeze"{begin} />"#,
        len = length
    )
}
