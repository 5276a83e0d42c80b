//! Plain-text board rendering.
//!
//! Normal mode (what players see):
//!
//! ```text
//!
//!      1   2   3
//!    |---|---|---|
//!    | X |   |   |
//!    |---|---|---|
//! ```
//!
//! Debug mode labels columns from 0 and prefixes every row with its index.

use crate::game::{Board, Cell};

pub const BLANK: &str = "   ";
pub const PLAYER_1: &str = " X ";
pub const PLAYER_2: &str = " O ";
pub const LEFT_PAD: &str = "   ";
pub const DASHES: &str = "---";
pub const BAR: &str = "|";

/// Display token for a cell. Every token is `BLANK.len()` wide.
pub fn cell_token(cell: Cell) -> &'static str {
    match cell {
        Cell::Blank => BLANK,
        Cell::Player1 => PLAYER_1,
        Cell::Player2 => PLAYER_2,
    }
}

/// Render a board to a multi-line string.
pub fn render(board: &Board, debug: bool) -> String {
    render_rows(board.rows(), debug)
}

/// Render a raw grid. Panics if the grid is empty or ragged.
pub fn render_rows(rows: &[Vec<Cell>], debug: bool) -> String {
    assert!(!rows.is_empty(), "board must have at least one row");
    let width = rows[0].len();
    assert!(
        rows.iter().all(|row| row.len() == width),
        "board rows must all have the same length"
    );

    let separator = separator_line(width);
    let first_label = if debug { 0 } else { 1 };
    let labels: Vec<String> = (first_label..first_label + width)
        .map(|label| format!("{label:3}"))
        .collect();

    let mut out = String::new();
    out.push('\n');
    out.push_str(LEFT_PAD);
    out.push_str(&labels.join(" "));
    out.push('\n');
    out.push_str(&separator);

    for (idx, row) in rows.iter().enumerate() {
        if debug {
            out.push_str(&format!("{idx:2} "));
        } else {
            out.push_str(LEFT_PAD);
        }

        let tokens: Vec<&str> = row.iter().map(|&cell| cell_token(cell)).collect();
        out.push_str(BAR);
        out.push_str(&tokens.join(BAR));
        out.push_str(BAR);
        out.push('\n');
        out.push_str(&separator);
    }

    out
}

fn separator_line(width: usize) -> String {
    format!("{LEFT_PAD}{BAR}{}{BAR}\n", vec![DASHES; width].join(BAR))
}
