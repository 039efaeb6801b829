//! Quoted-field CSV scanner.

use ghcal_model::Grid;

/// Parses CSV text into a grid of cells.
///
/// Fields are separated by `,` and rows by `\n`; `\r` outside quotes is
/// dropped. A quoted field may contain commas, newlines and `""` escapes.
/// Never fails: if the input ends inside an open quote, the unfinished row is
/// discarded and every completed row is kept.
pub fn parse_csv(text: &str) -> Grid {
    let mut grid = Grid::default();
    let mut row: Vec<String> = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if in_quotes {
            match c {
                '"' if chars.peek() == Some(&'"') => {
                    field.push('"');
                    chars.next();
                }
                '"' => in_quotes = false,
                _ => field.push(c),
            }
            continue;
        }
        match c {
            '"' => in_quotes = true,
            ',' => row.push(std::mem::take(&mut field)),
            '\r' => {}
            '\n' => {
                row.push(std::mem::take(&mut field));
                grid.push_row(std::mem::take(&mut row));
            }
            _ => field.push(c),
        }
    }

    if !in_quotes {
        if !field.is_empty() || !row.is_empty() {
            row.push(field);
        }
        if !row.is_empty() {
            grid.push_row(row);
        }
    }

    tracing::debug!(rows = grid.len(), columns = grid.max_width(), "parsed CSV text");
    grid
}
