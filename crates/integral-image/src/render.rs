//! Plain-text rendering of integral tables.

use integral_image_core::IntegralImageView;
use std::fmt::Write;

/// Default right-aligned width of one rendered cell.
pub const DEFAULT_CELL_WIDTH: usize = 7;
/// Widest cell the CLI accepts.
pub const MAX_CELL_WIDTH: usize = 32;

/// Render every table row on its own line, each value right-aligned to
/// `cell_width` characters. Values wider than the cell are printed in full.
pub fn render_grid(view: &IntegralImageView<'_>, cell_width: usize) -> String {
    let cells = view.data.len();
    let hint = cells
        .saturating_mul(cell_width.clamp(1, MAX_CELL_WIDTH))
        .saturating_add(cells);
    let mut out = String::with_capacity(hint);
    for row in view.rows_iter() {
        for value in row {
            let _ = write!(out, "{value:>cell_width$}");
        }
        out.push('\n');
    }
    out
}
