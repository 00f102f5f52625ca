//! Vector rendering of boards and marks.

mod svg;

pub use svg::{board_svg, cell_center, circle_svg, cross_svg, mark_svg, winning_line_svg};
